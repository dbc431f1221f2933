//! Layout module: Ratio-driven partitioning of the screen into rectangles.
//!
//! A ratio descriptor such as `"1:1:2"` splits a bounding rectangle into
//! adjacent regions along one axis. Results are plain [`Rect`] values; the
//! engine keeps no state between calls, so re-running a layout after a
//! terminal resize is the way to recompute it.

mod ratio;
mod rect;
mod split;

pub use ratio::{InvalidRatio, Ratio, Reason};
pub use rect::{Rect, Vec2};
pub use split::{
    custom_horizontal, custom_vertical, h_split, h_thirds, h_two_thirds_left, h_two_thirds_right,
    horizontal, partition, v_split, v_thirds, v_two_thirds_above, v_two_thirds_below, vertical,
    Axis, Preset, UnknownPreset,
};
