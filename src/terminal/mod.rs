//! Terminal module: Screen ownership and presentation of panels.
//!
//! This is the only module that touches the real terminal. Layouts call
//! [`screen_bounds`] when no explicit bounds are given.

mod screen;

pub use screen::{screen_bounds, size_or, Screen, ScreenConfig, FALLBACK_SIZE};
