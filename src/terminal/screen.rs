//! Screen: Terminal setup, teardown, and panel composition.

use crate::buffer::{Buffer, Modifiers, Rgb, Style};
use crate::layout::{Rect, Vec2};
use crate::panel::Panel;
use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};
use tracing::{debug, warn};

/// Size assumed when the terminal cannot report one.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Configuration for the screen.
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
    /// Whether to hide the cursor while active.
    pub hide_cursor: bool,
    /// Columns and rows to assume if the size query fails.
    pub fallback_size: (u16, u16),
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            hide_cursor: true,
            fallback_size: FALLBACK_SIZE,
        }
    }
}

/// Terminal size in cells, or `fallback` if it cannot be queried.
pub fn size_or(fallback: (u16, u16)) -> (u16, u16) {
    match terminal::size() {
        Ok(size) => size,
        Err(e) => {
            warn!(target: "vexes::terminal", error = %e, ?fallback, "terminal size unavailable");
            fallback
        }
    }
}

/// The default layout bounds: the whole terminal minus a trailing margin.
pub fn screen_bounds() -> Rect {
    let (columns, rows) = size_or(FALLBACK_SIZE);
    Rect::fullscreen(columns, rows)
}

/// Owns the terminal while alive and presents panels to it.
///
/// Created with [`Screen::new`] it switches the terminal into raw mode (and
/// optionally the alternate screen) and restores it on drop. A headless
/// screen writes to any `Write` without touching terminal modes.
pub struct Screen<W: Write = Stdout> {
    /// Configuration.
    config: ScreenConfig,
    /// Output sink.
    out: W,
    /// Composed frame, one cell per terminal cell.
    frame: Buffer,
    /// Whether terminal modes were changed and must be restored.
    owns_terminal: bool,
    /// Frame must be repainted even if no panel changed.
    stale: bool,
}

impl Screen<Stdout> {
    /// Take over the terminal with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate screen, etc.).
    pub fn new() -> io::Result<Self> {
        Self::with_config(ScreenConfig::default())
    }

    /// Take over the terminal with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn with_config(config: ScreenConfig) -> io::Result<Self> {
        let (width, height) = size_or(config.fallback_size);

        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if config.alternate_screen {
            execute!(out, EnterAlternateScreen)?;
        }
        if config.hide_cursor {
            execute!(out, cursor::Hide)?;
        }
        debug!(target: "vexes::terminal", width, height, "screen acquired");

        Ok(Self {
            config,
            out,
            frame: Buffer::new(width, height),
            owns_terminal: true,
            stale: true,
        })
    }
}

impl<W: Write> Screen<W> {
    /// A screen of the given size that writes to `out` and never changes
    /// terminal modes.
    pub fn headless(out: W, width: u16, height: u16) -> Self {
        Self {
            config: ScreenConfig::default(),
            out,
            frame: Buffer::new(width, height),
            owns_terminal: false,
            stale: true,
        }
    }

    /// Full-screen layout bounds for the current frame size.
    pub const fn bounds(&self) -> Rect {
        Rect::fullscreen(self.frame.width(), self.frame.height())
    }

    /// The most recently composed frame.
    pub const fn frame(&self) -> &Buffer {
        &self.frame
    }

    /// The output sink.
    pub const fn writer(&self) -> &W {
        &self.out
    }

    /// Adopt a new terminal size. The next [`present`](Self::present)
    /// repaints everything.
    pub fn resize(&mut self, width: u16, height: u16) {
        debug!(target: "vexes::terminal", width, height, "screen resized");
        self.frame = Buffer::new(width, height);
        self.stale = true;
    }

    /// Compose `panels` in order (later ones on top) and flush the frame.
    ///
    /// Nothing is written when no panel needs a redraw and the screen has
    /// not been resized since the last present. Returns whether a frame was
    /// flushed; every panel's redraw flag is cleared when one is.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn present(&mut self, panels: &mut [Panel]) -> io::Result<bool> {
        if !self.stale && !panels.iter().any(Panel::needs_redraw) {
            return Ok(false);
        }

        self.frame.clear();
        for panel in panels.iter_mut() {
            self.frame.blit(panel.surface(), panel.global().origin());
            panel.clear_redraw();
        }
        self.stale = false;
        self.flush_frame()?;
        Ok(true)
    }

    fn flush_frame(&mut self) -> io::Result<()> {
        let mut current: Option<Style> = None;
        for (y, row) in self.frame.rows().enumerate() {
            let y = u16::try_from(y).unwrap_or(u16::MAX);
            queue!(self.out, MoveTo(0, y))?;
            for cell in row.iter().filter(|c| !c.is_continuation()) {
                let style = cell.style();
                if current != Some(style) {
                    queue_style(&mut self.out, style)?;
                    current = Some(style);
                }
                queue!(self.out, Print(cell.symbol()))?;
            }
        }
        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;
        self.out.flush()
    }

    /// Position the terminal cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn move_cursor(&mut self, to: Vec2) -> io::Result<()> {
        let x = u16::try_from(to.x.max(0)).unwrap_or(u16::MAX);
        let y = u16::try_from(to.y.max(0)).unwrap_or(u16::MAX);
        execute!(self.out, MoveTo(x, y))
    }
}

fn queue_style<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(color(style.fg)),
        SetBackgroundColor(color(style.bg)),
    )?;
    for (flag, attribute) in [
        (Modifiers::BOLD, Attribute::Bold),
        (Modifiers::DIM, Attribute::Dim),
        (Modifiers::ITALIC, Attribute::Italic),
        (Modifiers::UNDERLINE, Attribute::Underlined),
        (Modifiers::BLINK, Attribute::SlowBlink),
        (Modifiers::REVERSED, Attribute::Reverse),
        (Modifiers::HIDDEN, Attribute::Hidden),
    ] {
        if style.modifiers.contains(flag) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

const fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        if !self.owns_terminal {
            return;
        }

        // Restore terminal state
        let mut stdout = io::stdout();
        let _ = execute!(stdout, SetAttribute(Attribute::Reset), ResetColor);
        if self.config.hide_cursor {
            let _ = execute!(stdout, cursor::Show);
        }
        if self.config.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        debug!(target: "vexes::terminal", "screen released");
    }
}
