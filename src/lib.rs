//! # vexes
//!
//! Ratio-string layouts and resizable panels for terminal interfaces.
//!
//! A layout turns a descriptor such as `"1:1:2"` into adjacent rectangles
//! along one axis. Panels take those rectangles as their placement and
//! rebuild their surface whenever they are given a new one, which makes a
//! terminal resize a matter of re-running the layout.
//!
//! ## Core Concepts
//!
//! - **Ratio descriptors**: colon-separated, non-zero integer weights
//! - **Stateless layouts**: pure functions from (ratio, bounds) to rectangles
//! - **Sub-layouts**: any returned rectangle can be split again
//! - **Replace-on-resize panels**: new rect, new frames, new surface
//!
//! ## Example
//!
//! ```rust
//! use vexes::layout::{custom_vertical, h_split, Rect};
//! use vexes::Panel;
//!
//! let screen = Rect::fullscreen(100, 30);
//! let halves = h_split(Some(screen));
//! let rows = custom_vertical("2:1", Some(halves[1])).unwrap();
//!
//! let mut log = Panel::new(rows[1], "log");
//! log.draw();
//! assert_eq!(log.global(), rows[1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod layout;
pub mod panel;
pub mod terminal;

// Re-exports for convenience
pub use buffer::{Buffer, Cell, Modifiers, Rgb, Style};
pub use layout::{Axis, InvalidRatio, Preset, Ratio, Rect, Vec2};
pub use panel::{BorderGlyphs, Panel, PanelConfig};
pub use terminal::{Screen, ScreenConfig};
