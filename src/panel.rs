//! Panel: A titled, bordered sub-window placed by a layout rectangle.
//!
//! A panel keeps two frames. `global` is where it sits on screen; `local`
//! has the same size with origin `(0, 0)` and is what drawing addresses.
//! The panel owns its [`Buffer`] surface, sized so the border's lower-right
//! corner is addressable.
//!
//! Resizing replaces state rather than patching it: the rectangles, the
//! cached title position and the surface are all rebuilt from the new rect.

use crate::buffer::{Buffer, Cell, Modifiers, Rgb, Style};
use crate::layout::{Rect, Vec2};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

/// Characters used to draw a panel border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    /// Top edge.
    pub top: char,
    /// Bottom edge.
    pub bottom: char,
    /// Left edge.
    pub left: char,
    /// Right edge.
    pub right: char,
    /// Upper-left corner.
    pub upper_left: char,
    /// Upper-right corner.
    pub upper_right: char,
    /// Lower-left corner.
    pub lower_left: char,
    /// Lower-right corner.
    pub lower_right: char,
}

impl BorderGlyphs {
    /// Single-line box drawing characters.
    pub const SINGLE: Self = Self {
        top: '─',
        bottom: '─',
        left: '│',
        right: '│',
        upper_left: '┌',
        upper_right: '┐',
        lower_left: '└',
        lower_right: '┘',
    };

    /// Plain ASCII, for terminals without box drawing glyphs.
    pub const ASCII: Self = Self {
        top: '-',
        bottom: '-',
        left: '|',
        right: '|',
        upper_left: '+',
        upper_right: '+',
        lower_left: '+',
        lower_right: '+',
    };
}

impl Default for BorderGlyphs {
    fn default() -> Self {
        Self::SINGLE
    }
}

/// Configuration for a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    /// Border characters.
    pub border: BorderGlyphs,
    /// Style of the border.
    pub border_style: Style,
    /// Style of the title text.
    pub title_style: Style,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            border: BorderGlyphs::SINGLE,
            border_style: Style::DEFAULT.fg(Rgb::new(150, 150, 150)),
            title_style: Style::DEFAULT.modifiers(Modifiers::BOLD),
        }
    }
}

/// A bordered region of the screen with its own drawing surface.
#[derive(Debug)]
pub struct Panel {
    /// Placement relative to the full screen.
    global: Rect,
    /// Same size as `global`, origin `(0, 0)`.
    local: Rect,
    /// Title drawn over the top border.
    title: String,
    /// Cached position of the first title column in `local`.
    title_origin: Vec2,
    /// Drawing surface, rebuilt on every resize.
    surface: Buffer,
    /// Configuration.
    config: PanelConfig,
    /// Needs redraw flag.
    dirty: bool,
}

impl Panel {
    /// Create a panel with the default configuration.
    pub fn new(global: Rect, title: impl Into<String>) -> Self {
        Self::with_config(global, title, PanelConfig::default())
    }

    /// Create a panel with a custom configuration.
    pub fn with_config(global: Rect, title: impl Into<String>, config: PanelConfig) -> Self {
        let title = title.into();
        let local = global.local();
        Self {
            global,
            local,
            title_origin: centered(&local, &title),
            title,
            surface: Buffer::for_rect(&global),
            config,
            dirty: true,
        }
    }

    /// Placement on screen.
    pub const fn global(&self) -> Rect {
        self.global
    }

    /// Internal frame, always at the origin.
    pub const fn local(&self) -> Rect {
        self.local
    }

    /// Current title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Where the title starts within the local frame.
    pub const fn title_origin(&self) -> Vec2 {
        self.title_origin
    }

    /// The drawing surface.
    pub const fn surface(&self) -> &Buffer {
        &self.surface
    }

    /// The drawing surface, for content inside the border.
    pub const fn surface_mut(&mut self) -> &mut Buffer {
        self.dirty = true;
        &mut self.surface
    }

    /// Replace the title and re-center it.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.title_origin = centered(&self.local, &self.title);
        self.dirty = true;
    }

    /// Move the panel to `global`, rebuilding everything derived from it.
    ///
    /// The previous surface is dropped along with anything drawn on it.
    pub fn resize(&mut self, global: Rect) {
        debug!(target: "vexes::panel", title = %self.title, from = ?self.global, to = ?global, "resize");
        self.global = global;
        self.local = global.local();
        self.title_origin = centered(&self.local, &self.title);
        self.surface = Buffer::for_rect(&global);
        self.dirty = true;
    }

    /// Redraw the border and title onto a cleared surface.
    pub fn draw(&mut self) {
        self.surface.clear();
        self.draw_border();
        if !self.title.is_empty() {
            self.surface
                .put_str(self.title_origin, &self.title, self.config.title_style);
        }
        self.dirty = true;
    }

    fn draw_border(&mut self) {
        let glyphs = self.config.border;
        let style = self.config.border_style;
        let cell = |c: char| Cell::new(c).with_style(style);
        let Rect { width, height, .. } = self.local;

        self.surface.hline(self.local.ul(), width, cell(glyphs.top));
        self.surface.hline(self.local.ll(), width, cell(glyphs.bottom));
        self.surface.vline(self.local.ul(), height, cell(glyphs.left));
        self.surface.vline(self.local.ur(), height, cell(glyphs.right));

        self.surface.set(self.local.ul(), cell(glyphs.upper_left));
        self.surface.set(self.local.ur(), cell(glyphs.upper_right));
        self.surface.set(self.local.ll(), cell(glyphs.lower_left));
        self.surface.set(self.local.lr(), cell(glyphs.lower_right));
    }

    /// Check if the surface changed since it was last presented.
    pub const fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Clear the redraw flag after presenting.
    pub const fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}

/// First column of `title` centered on the top edge of `local`.
fn centered(local: &Rect, title: &str) -> Vec2 {
    let half = i32::try_from(title.width() / 2).unwrap_or(i32::MAX);
    Vec2::new(local.width / 2 - half, 0)
}
