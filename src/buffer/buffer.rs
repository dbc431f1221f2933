//! Buffer: A grid of cells that panels draw into.
//!
//! Cells are stored row-major in one contiguous `Vec`. Coordinates are
//! signed so callers can pass layout geometry straight through; anything
//! that lands outside the grid is clipped, never an error.

use super::cell::{Cell, Style};
use crate::layout::{Rect, Vec2};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A fixed-size grid of cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
}

impl Buffer {
    /// Create a blank buffer. Zero dimensions are raised to one.
    pub fn new(width: u16, height: u16) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            cells: vec![Cell::EMPTY; usize::from(width) * usize::from(height)],
            width,
            height,
        }
    }

    /// Create a buffer that can address every corner of `rect`.
    ///
    /// That is `(width + 1) x (height + 1)` cells, because [`Rect::lr`]
    /// lies one past the width and height.
    pub fn for_rect(rect: &Rect) -> Self {
        Self::new(cells_for(rect.width), cells_for(rect.height))
    }

    /// Buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true after construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert a position to a linear index, if it is on the grid.
    #[inline]
    pub fn index_of(&self, p: Vec2) -> Option<usize> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        let width = usize::from(self.width);
        (x < width && y < usize::from(self.height)).then(|| y * width + x)
    }

    /// The cell at `p`.
    #[inline]
    pub fn get(&self, p: Vec2) -> Option<&Cell> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    /// Write a cell at `p`. Returns `false` if `p` is off the grid.
    #[inline]
    pub fn set(&mut self, p: Vec2, cell: Cell) -> bool {
        match self.index_of(p) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Write `text` left to right starting at `p`.
    ///
    /// Text is split into grapheme clusters; each cluster is drawn with its
    /// first character and advances by its display width. Returns the
    /// number of columns advanced, including clipped ones.
    pub fn put_str(&mut self, p: Vec2, text: &str, style: Style) -> i32 {
        let mut x = p.x;
        for grapheme in text.graphemes(true) {
            let Some(symbol) = grapheme.chars().next() else {
                continue;
            };
            let width = i32::try_from(grapheme.width()).unwrap_or(1);
            if width == 0 {
                continue;
            }
            self.set(Vec2::new(x, p.y), Cell::new(symbol).with_style(style));
            if width == 2 {
                self.set(Vec2::new(x + 1, p.y), Cell::continuation(style));
            }
            x += width;
        }
        x - p.x
    }

    /// Draw `len` copies of `cell` rightwards from `from`, inclusive of both ends.
    pub fn hline(&mut self, from: Vec2, len: i32, cell: Cell) {
        for dx in 0..=len {
            self.set(Vec2::new(from.x + dx, from.y), cell);
        }
    }

    /// Draw `len` copies of `cell` downwards from `from`, inclusive of both ends.
    pub fn vline(&mut self, from: Vec2, len: i32, cell: Cell) {
        for dy in 0..=len {
            self.set(Vec2::new(from.x, from.y + dy), cell);
        }
    }

    /// Fill the `width x height` cells starting at `rect`'s origin.
    pub fn fill(&mut self, rect: &Rect, cell: Cell) {
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                self.set(Vec2::new(x, y), cell);
            }
        }
    }

    /// Reset every cell to [`Cell::EMPTY`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Copy all of `src` into this buffer with its origin at `at`.
    pub fn blit(&mut self, src: &Self, at: Vec2) {
        for (y, row) in src.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let offset = Vec2::new(x as i32, y as i32);
                self.set(at + offset, *cell);
            }
        }
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.width))
    }

    /// Render the symbols as text, one line per row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + usize::from(self.height));
        for row in self.rows() {
            out.extend(row.iter().filter(|c| !c.is_continuation()).map(Cell::symbol));
            out.push('\n');
        }
        out
    }
}

/// Cells needed to address `0..=extent`, clamped to what a buffer can hold.
fn cells_for(extent: i32) -> u16 {
    u16::try_from(extent.saturating_add(1).max(1)).unwrap_or(u16::MAX)
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_new() {
        let buffer = Buffer::new(80, 24);
        assert_eq!(buffer.width(), 80);
        assert_eq!(buffer.height(), 24);
        assert_eq!(buffer.len(), 80 * 24);
    }

    #[test]
    fn test_zero_size_is_raised() {
        let buffer = Buffer::new(0, 0);
        assert_eq!((buffer.width(), buffer.height()), (1, 1));
    }

    #[test]
    fn test_for_rect_covers_corners() {
        let rect = Rect::new(7, 3, 24, 9);
        let buffer = Buffer::for_rect(&rect);
        assert_eq!((buffer.width(), buffer.height()), (25, 10));
        assert!(buffer.get(rect.local().lr()).is_some());

        let degenerate = Buffer::for_rect(&Rect::new(0, 0, -4, 0));
        assert_eq!((degenerate.width(), degenerate.height()), (1, 1));
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut buffer = Buffer::new(4, 4);
        assert!(!buffer.set(Vec2::new(-1, 0), Cell::new('x')));
        assert!(!buffer.set(Vec2::new(4, 0), Cell::new('x')));
        assert!(buffer.get(Vec2::new(0, 4)).is_none());
        assert!(buffer.set(Vec2::new(3, 3), Cell::new('x')));
    }

    #[test]
    fn test_put_str_wide() {
        let mut buffer = Buffer::new(10, 1);
        let advanced = buffer.put_str(Vec2::new(1, 0), "a日b", Style::DEFAULT);
        assert_eq!(advanced, 4);
        assert_eq!(buffer.get(Vec2::new(2, 0)).map(Cell::symbol), Some('日'));
        assert!(buffer.get(Vec2::new(3, 0)).unwrap().is_continuation());
        assert_eq!(buffer.to_text(), " a日b     \n");
    }

    #[test]
    fn test_lines_and_fill() {
        let mut buffer = Buffer::new(5, 3);
        buffer.hline(Vec2::new(0, 0), 4, Cell::new('-'));
        buffer.vline(Vec2::new(0, 0), 2, Cell::new('|'));
        buffer.fill(&Rect::new(2, 1, 2, 2), Cell::new('#'));
        assert_eq!(buffer.to_text(), "|----\n| ## \n| ## \n");
    }

    #[test]
    fn test_blit_with_offset() {
        let mut src = Buffer::new(2, 2);
        src.fill(&Rect::new(0, 0, 2, 2), Cell::new('o'));
        let mut dst = Buffer::new(4, 3);
        dst.blit(&src, Vec2::new(3, 2));
        assert_eq!(dst.to_text(), "    \n    \n   o\n");
    }

    #[test]
    fn test_clear() {
        let mut buffer = Buffer::new(3, 1);
        buffer.put_str(Vec2::ZERO, "abc", Style::DEFAULT);
        buffer.clear();
        assert_eq!(buffer.get(Vec2::new(1, 0)), Some(&Cell::EMPTY));
    }
}
