//! Buffer module: The cell grid that panels draw into.
//!
//! - [`Cell`]: one character position with its [`Style`]
//! - [`Buffer`]: a clipped, row-major grid of cells
//! - [`Rgb`] and [`Modifiers`]: the pieces of a style

mod cell;
#[allow(clippy::module_inception)]
mod buffer;

pub use buffer::Buffer;
pub use cell::{Cell, Modifiers, Rgb, Style};
