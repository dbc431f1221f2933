//! Cell: One character position on a surface, with its colors and style.

use bitflags::bitflags;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// ```
    /// use vexes::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::REVERSED;
    /// assert!(style.contains(Modifiers::BOLD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Blinking text
        const BLINK = 0b0001_0000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0010_0000;
        /// Hidden/invisible text
        const HIDDEN = 0b0100_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Colors and modifiers applied to written cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Text modifiers.
    pub modifiers: Modifiers,
}

impl Style {
    /// White on black, no modifiers.
    pub const DEFAULT: Self = Self {
        fg: Rgb::WHITE,
        bg: Rgb::BLACK,
        modifiers: Modifiers::empty(),
    };

    /// Replace the foreground color.
    #[must_use]
    pub const fn fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Replace the background color.
    #[must_use]
    pub const fn bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Replace the modifiers.
    #[must_use]
    pub const fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single surface cell.
///
/// Wide characters occupy two cells: the glyph itself (width 2) followed by
/// a continuation cell (width 0) that renders nothing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    symbol: char,
    width: u8,
    style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// A blank cell with the default style.
    pub const EMPTY: Self = Self {
        symbol: ' ',
        width: 1,
        style: Style::DEFAULT,
    };

    /// Create a cell for `symbol` with the default style.
    #[inline]
    pub fn new(symbol: char) -> Self {
        let width = unicode_width::UnicodeWidthChar::width(symbol).unwrap_or(0);
        Self {
            symbol,
            width: u8::try_from(width).unwrap_or(1),
            style: Style::DEFAULT,
        }
    }

    /// The placeholder that follows a double-width glyph.
    #[inline]
    pub const fn continuation(style: Style) -> Self {
        Self {
            symbol: ' ',
            width: 0,
            style,
        }
    }

    /// Apply a style (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The displayed character.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Columns occupied (0 for a continuation cell).
    #[inline]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Check if this cell is the trailing half of a wide glyph.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.width == 0
    }

    /// The cell's style.
    #[inline]
    pub const fn style(&self) -> Style {
        self.style
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("symbol", &self.symbol)
            .field("width", &self.width)
            .field("fg", &self.style.fg)
            .field("bg", &self.style.bg)
            .field("modifiers", &self.style.modifiers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        let rgb = Rgb::from_u32(0xFF8000);
        assert_eq!(rgb, Rgb::new(255, 128, 0));
        assert_eq!(format!("{rgb:?}"), "#ff8000");
    }

    #[test]
    fn test_cell_width() {
        assert_eq!(Cell::new('A').width(), 1);
        assert_eq!(Cell::new('日').width(), 2);
        assert!(Cell::continuation(Style::DEFAULT).is_continuation());
    }

    #[test]
    fn test_style_builder() {
        let style = Style::DEFAULT
            .fg(Rgb::new(255, 0, 0))
            .modifiers(Modifiers::BOLD | Modifiers::UNDERLINE);
        let cell = Cell::new('x').with_style(style);
        assert_eq!(cell.style().fg, Rgb::new(255, 0, 0));
        assert_eq!(cell.style().bg, Rgb::BLACK);
        assert!(cell.style().modifiers.contains(Modifiers::UNDERLINE));
        assert_ne!(cell, Cell::new('x'));
    }
}
