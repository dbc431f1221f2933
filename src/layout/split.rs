//! Split: Proportional partitioning of a rectangle along one axis.
//!
//! Every function here is stateless. Passing `None` as the bounds uses the
//! full terminal (see [`crate::terminal::screen_bounds`]); passing a rect
//! produced by an earlier call builds a sub-layout inside it.
//!
//! # Edge policy
//!
//! Each region gets `trunc(weight * extent / base)` cells. Regions are
//! separated by one cell: the next region starts at `previous + span + 1`.
//! A region whose far edge would reach the bounding *extent* (compared
//! against the absolute cursor) is clamped to end there. Rounding loss is
//! never redistributed; it is taken out of the region that hits the clamp.
//!
//! Negative weights are not corrected: their shares are negative, and so
//! are the widths they produce. The cursor runs in `i64` and is saturated
//! into `i32` only when a rect is emitted.

use super::ratio::{InvalidRatio, Ratio};
use super::rect::Rect;
use crate::terminal::screen_bounds;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Direction in which regions are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Side by side, left to right. Every region spans the full height.
    Horizontal,
    /// Stacked, top to bottom. Every region spans the full width.
    Vertical,
}

/// Partition `bounds` into one rect per weight of `ratio`.
pub fn partition(ratio: &Ratio, axis: Axis, bounds: Rect) -> Vec<Rect> {
    let base = ratio.base();
    let (start, extent) = match axis {
        Axis::Horizontal => (bounds.x, bounds.width),
        Axis::Vertical => (bounds.y, bounds.height),
    };

    let extent = i64::from(extent);
    let mut last = i64::from(start) - 1;
    let rects: Vec<Rect> = ratio
        .weights()
        .iter()
        .map(|&weight| {
            let next = last + 1;
            let mut span = share(weight, base, extent);
            if next + span >= extent {
                span = extent - next;
            }
            last = next + span;

            let (next, span) = (narrow(next), narrow(span));
            match axis {
                Axis::Horizontal => Rect::new(next, bounds.y, span, bounds.height),
                Axis::Vertical => Rect::new(bounds.x, next, bounds.width, span),
            }
        })
        .collect();

    trace!(target: "vexes::layout", %ratio, ?axis, ?bounds, ?rects, "partition");
    rects
}

/// `trunc(weight * extent / base)`, exact in 64-bit arithmetic.
///
/// A zero base (possible only with negative weights) yields no share.
fn share(weight: i32, base: i64, extent: i64) -> i64 {
    (i64::from(weight) * extent).checked_div(base).unwrap_or(0)
}

/// Saturate a cursor value back into rect coordinates.
#[allow(clippy::cast_possible_truncation)]
fn narrow(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Lay out a parsed ratio left to right.
pub fn horizontal(ratio: &Ratio, bounds: Option<Rect>) -> Vec<Rect> {
    partition(ratio, Axis::Horizontal, bounds.unwrap_or_else(screen_bounds))
}

/// Lay out a parsed ratio top to bottom.
pub fn vertical(ratio: &Ratio, bounds: Option<Rect>) -> Vec<Rect> {
    partition(ratio, Axis::Vertical, bounds.unwrap_or_else(screen_bounds))
}

/// Parse `ratio` and lay it out left to right.
///
/// # Example
///
/// ```
/// use vexes::layout::{custom_horizontal, Rect};
///
/// let columns = custom_horizontal("1:1:2", Some(Rect::new(0, 0, 99, 29))).unwrap();
/// assert_eq!(columns[0], Rect::new(0, 0, 24, 29));
/// assert_eq!(columns[2], Rect::new(50, 0, 49, 29));
/// ```
pub fn custom_horizontal(ratio: &str, bounds: Option<Rect>) -> Result<Vec<Rect>, InvalidRatio> {
    let ratio = parse_logged(ratio)?;
    Ok(horizontal(&ratio, bounds))
}

/// Parse `ratio` and lay it out top to bottom.
pub fn custom_vertical(ratio: &str, bounds: Option<Rect>) -> Result<Vec<Rect>, InvalidRatio> {
    let ratio = parse_logged(ratio)?;
    Ok(vertical(&ratio, bounds))
}

fn parse_logged(ratio: &str) -> Result<Ratio, InvalidRatio> {
    Ratio::parse(ratio).inspect_err(|e| {
        debug!(target: "vexes::layout", error = %e, "rejected ratio");
    })
}

/// A named layout with a fixed ratio and axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Two equal columns (`1:1`).
    HSplit,
    /// Wide left column, narrow right (`2:1`).
    HTwoThirdsLeft,
    /// Narrow left column, wide right (`1:2`).
    HTwoThirdsRight,
    /// Three equal columns (`1:1:1`).
    HThirds,
    /// Two equal rows (`1:1`).
    VSplit,
    /// Tall top row, short bottom (`2:1`).
    VTwoThirdsAbove,
    /// Short top row, tall bottom (`1:2`).
    VTwoThirdsBelow,
    /// Three equal rows (`1:1:1`).
    VThirds,
}

impl Preset {
    /// Every preset, horizontal first.
    pub const ALL: [Self; 8] = [
        Self::HSplit,
        Self::HTwoThirdsLeft,
        Self::HTwoThirdsRight,
        Self::HThirds,
        Self::VSplit,
        Self::VTwoThirdsAbove,
        Self::VTwoThirdsBelow,
        Self::VThirds,
    ];

    /// The preset's weights.
    pub const fn weights(self) -> &'static [i32] {
        match self {
            Self::HSplit | Self::VSplit => &[1, 1],
            Self::HTwoThirdsLeft | Self::VTwoThirdsAbove => &[2, 1],
            Self::HTwoThirdsRight | Self::VTwoThirdsBelow => &[1, 2],
            Self::HThirds | Self::VThirds => &[1, 1, 1],
        }
    }

    /// The preset's weights as a [`Ratio`].
    pub fn ratio(self) -> Ratio {
        Ratio::from_static(self.weights())
    }

    /// Direction the preset lays regions out in.
    pub const fn axis(self) -> Axis {
        match self {
            Self::HSplit | Self::HTwoThirdsLeft | Self::HTwoThirdsRight | Self::HThirds => {
                Axis::Horizontal
            }
            Self::VSplit | Self::VTwoThirdsAbove | Self::VTwoThirdsBelow | Self::VThirds => {
                Axis::Vertical
            }
        }
    }

    /// Kebab-case name, as accepted by [`Preset::from_str`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::HSplit => "h-split",
            Self::HTwoThirdsLeft => "h-two-thirds-left",
            Self::HTwoThirdsRight => "h-two-thirds-right",
            Self::HThirds => "h-thirds",
            Self::VSplit => "v-split",
            Self::VTwoThirdsAbove => "v-two-thirds-above",
            Self::VTwoThirdsBelow => "v-two-thirds-below",
            Self::VThirds => "v-thirds",
        }
    }

    /// Lay the preset out within `bounds` (or the full screen).
    pub fn apply(self, bounds: Option<Rect>) -> Vec<Rect> {
        partition(&self.ratio(), self.axis(), bounds.unwrap_or_else(screen_bounds))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A preset name that matches no [`Preset`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout preset {0:?}")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownPreset(s.to_owned()))
    }
}

/// Two equal columns.
pub fn h_split(bounds: Option<Rect>) -> Vec<Rect> {
    Preset::HSplit.apply(bounds)
}

/// Columns at two thirds and one third.
pub fn h_two_thirds_left(bounds: Option<Rect>) -> Vec<Rect> {
    Preset::HTwoThirdsLeft.apply(bounds)
}

/// Columns at one third and two thirds.
pub fn h_two_thirds_right(bounds: Option<Rect>) -> Vec<Rect> {
    Preset::HTwoThirdsRight.apply(bounds)
}

/// Three equal columns.
pub fn h_thirds(bounds: Option<Rect>) -> Vec<Rect> {
    Preset::HThirds.apply(bounds)
}

/// Two equal rows.
pub fn v_split(bounds: Option<Rect>) -> Vec<Rect> {
    Preset::VSplit.apply(bounds)
}

/// Rows at two thirds and one third.
pub fn v_two_thirds_above(bounds: Option<Rect>) -> Vec<Rect> {
    Preset::VTwoThirdsAbove.apply(bounds)
}

/// Rows at one third and two thirds.
pub fn v_two_thirds_below(bounds: Option<Rect>) -> Vec<Rect> {
    Preset::VTwoThirdsBelow.apply(bounds)
}

/// Three equal rows.
pub fn v_thirds(bounds: Option<Rect>) -> Vec<Rect> {
    Preset::VThirds.apply(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ratio::Reason;
    use crate::layout::Vec2;

    const SCREEN: Rect = Rect::new(0, 0, 99, 29);

    fn assert_adjacent(rects: &[Rect], axis: Axis) {
        for pair in rects.windows(2) {
            match axis {
                Axis::Horizontal => assert_eq!(pair[1].x, pair[0].x + pair[0].width + 1),
                Axis::Vertical => assert_eq!(pair[1].y, pair[0].y + pair[0].height + 1),
            }
        }
    }

    #[test]
    fn test_horizontal_clamps_last_region() {
        let rects = custom_horizontal("1:1:2", Some(SCREEN)).unwrap();
        assert_eq!(
            rects,
            vec![
                Rect::new(0, 0, 24, 29),
                Rect::new(25, 0, 24, 29),
                Rect::new(50, 0, 49, 29),
            ]
        );
        assert_adjacent(&rects, Axis::Horizontal);
    }

    #[test]
    fn test_vertical_mirrors_horizontal() {
        let rects = custom_vertical("1:1:2", Some(Rect::new(0, 0, 29, 99))).unwrap();
        assert_eq!(
            rects,
            vec![
                Rect::new(0, 0, 29, 24),
                Rect::new(0, 25, 29, 24),
                Rect::new(0, 50, 29, 49),
            ]
        );
        assert_adjacent(&rects, Axis::Vertical);
    }

    #[test]
    fn test_thirds_of_thirty_rows() {
        // Each share is 10, but the one-cell separator pushes the last
        // region into the clamp.
        let rects = v_thirds(Some(Rect::new(0, 0, 80, 30)));
        assert_eq!(
            rects,
            vec![
                Rect::new(0, 0, 80, 10),
                Rect::new(0, 11, 80, 10),
                Rect::new(0, 22, 80, 8),
            ]
        );
    }

    #[test]
    fn test_truncated_shares_with_edge_clamp() {
        // 300 / 7 = 42 and 200 / 7 = 28; the last region is clamped to the edge.
        let rects = custom_horizontal("3:2:2", Some(Rect::new(0, 0, 100, 5))).unwrap();
        let widths: Vec<i32> = rects.iter().map(|r| r.width).collect();
        assert_eq!(widths, vec![42, 28, 28]);
        assert_eq!(rects[2].x, 72);
        assert_eq!(rects[2].x + rects[2].width, 100);

        // 1:1 of 7 rows: shares of 3, the second clamped to 7 - 4.
        let rects = custom_vertical("1:1", Some(Rect::new(0, 0, 5, 7))).unwrap();
        assert_eq!(rects, vec![Rect::new(0, 0, 5, 3), Rect::new(0, 4, 5, 3)]);
    }

    #[test]
    fn test_region_count_matches_terms() {
        for ratio in ["1:1", "2:1", "1:1:2", "3:2:1:1", "1:1:1:1:1:1:1:1"] {
            let n = ratio.split(':').count();
            assert_eq!(custom_horizontal(ratio, Some(SCREEN)).unwrap().len(), n);
            assert_eq!(custom_vertical(ratio, Some(SCREEN)).unwrap().len(), n);
        }
    }

    #[test]
    fn test_overfull_ratio_runs_past_the_edge() {
        // Twenty one-cell regions cannot fit in ten columns. Once the cursor
        // reaches the edge, the clamp leaves a width of zero, then -1.
        let ratio = vec!["1"; 20].join(":");
        let rects = custom_horizontal(&ratio, Some(Rect::new(0, 0, 10, 3))).unwrap();
        assert_eq!(rects.len(), 20);
        assert!(rects[..11].iter().all(|r| r.width == 0));
        assert_eq!(rects[10].x, 10);
        assert!(rects[11..].iter().all(|r| *r == Rect::new(11, 0, -1, 3)));
    }

    #[test]
    fn test_negative_weight_keeps_raw_arithmetic() {
        // base = 1: the first share is -99, the second 198 clamped to the edge.
        let rects = custom_horizontal("-1:2", Some(SCREEN)).unwrap();
        assert_eq!(rects, vec![Rect::new(0, 0, -99, 29), Rect::new(-98, 0, 197, 29)]);
        assert_adjacent(&rects, Axis::Horizontal);
    }

    #[test]
    fn test_extreme_bounds_do_not_overflow() {
        let rects = custom_horizontal("1:1", Some(Rect::new(i32::MAX - 5, 0, -10, 1))).unwrap();
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].x, i32::MAX - 5);
        assert_eq!(rects[0].width, i32::MIN);

        let rects = h_split(Some(Rect::new(i32::MIN, 0, 10, 1)));
        assert_eq!(rects[0], Rect::new(i32::MIN, 0, 5, 1));
        assert_eq!(rects[1].x, i32::MIN + 6);
    }

    #[test]
    fn test_zero_base_does_not_panic() {
        let rects = custom_horizontal("-1:1", Some(SCREEN)).unwrap();
        assert_eq!(rects.len(), 2);
        assert!(rects.iter().all(|r| r.width == 0));
    }

    #[test]
    fn test_missing_bounds_use_full_screen() {
        use crate::terminal::{size_or, FALLBACK_SIZE};

        let (columns, rows) = size_or(FALLBACK_SIZE);
        let screen = Rect::fullscreen(columns, rows);
        assert_eq!(screen.lr(), Vec2::new(i32::from(columns) - 1, i32::from(rows) - 1));

        assert_eq!(h_split(None), h_split(Some(screen)));
        assert_eq!(
            custom_vertical("3:2:1:1", None).unwrap(),
            custom_vertical("3:2:1:1", Some(screen)).unwrap()
        );
        let ratio = Ratio::parse("1:2").unwrap();
        assert_eq!(horizontal(&ratio, None), horizontal(&ratio, Some(screen)));

        let columns = h_split(None);
        let right = columns[1];
        assert_eq!(right.x + right.width, screen.width);
        assert_eq!(right.height, screen.height);
    }

    #[test]
    fn test_idempotent() {
        let a = custom_vertical("3:2:1:1", Some(SCREEN)).unwrap();
        let b = custom_vertical("3:2:1:1", Some(SCREEN)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_ratio_propagates() {
        for bad in ["", ":", "1", "1::2", ":1:2", "1:2:", "1:a:2", "1:0:2"] {
            assert!(custom_horizontal(bad, Some(SCREEN)).is_err(), "{bad:?}");
            assert!(custom_vertical(bad, Some(SCREEN)).is_err(), "{bad:?}");
        }
        let err = custom_vertical("1:0", Some(SCREEN)).unwrap_err();
        assert_eq!(err.reason(), Reason::ZeroTerm);
    }

    #[test]
    fn test_presets_match_custom() {
        let pairs: [(Vec<Rect>, &str, Axis); 8] = [
            (h_split(Some(SCREEN)), "1:1", Axis::Horizontal),
            (h_two_thirds_left(Some(SCREEN)), "2:1", Axis::Horizontal),
            (h_two_thirds_right(Some(SCREEN)), "1:2", Axis::Horizontal),
            (h_thirds(Some(SCREEN)), "1:1:1", Axis::Horizontal),
            (v_split(Some(SCREEN)), "1:1", Axis::Vertical),
            (v_two_thirds_above(Some(SCREEN)), "2:1", Axis::Vertical),
            (v_two_thirds_below(Some(SCREEN)), "1:2", Axis::Vertical),
            (v_thirds(Some(SCREEN)), "1:1:1", Axis::Vertical),
        ];
        for (rects, ratio, axis) in pairs {
            let expected = match axis {
                Axis::Horizontal => custom_horizontal(ratio, Some(SCREEN)),
                Axis::Vertical => custom_vertical(ratio, Some(SCREEN)),
            }
            .unwrap();
            assert_eq!(rects, expected, "{ratio} {axis:?}");
        }
    }

    #[test]
    fn test_sub_layout_stays_inside() {
        for outer in [SCREEN, Rect::new(10, 5, 40, 20), Rect::new(3, 2, 61, 17)] {
            let halves = h_split(Some(outer));
            let rows = v_thirds(Some(halves[1]));
            for rect in halves.iter().chain(rows.iter()) {
                assert!(outer.contains(rect), "{rect:?} escapes {outer:?}");
            }
        }
    }

    #[test]
    fn test_offset_bounds_clamp_against_extent() {
        let rects = h_split(Some(Rect::new(10, 5, 40, 20)));
        assert_eq!(rects, vec![Rect::new(10, 5, 20, 20), Rect::new(31, 5, 9, 20)]);
    }

    #[test]
    fn test_preset_names() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>(), Ok(preset));
        }
        assert_eq!(
            "diagonal".parse::<Preset>(),
            Err(UnknownPreset("diagonal".to_owned()))
        );
        assert_eq!(Preset::VTwoThirdsBelow.ratio().to_string(), "1:2");
    }
}
