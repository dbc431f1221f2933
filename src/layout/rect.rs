//! Rect and Vec2: Integer geometry primitives for layout calculations.
//!
//! Coordinates are signed cells. A rectangle's corners are *addressable*:
//! `lr()` is `origin + (width, height)`, so a border drawn around a rect
//! touches `width + 1` columns. This matches the full-screen convention of
//! [`Rect::fullscreen`], which leaves a one-cell trailing margin.

use std::ops::{Add, Div, Mul, Sub};

/// A point or extent in terminal cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Vec2 {
    /// Create a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self::new(0, 0);
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div for Vec2 {
    type Output = Self;

    /// Component-wise integer division.
    ///
    /// # Panics
    /// Panics if either component of `rhs` is zero.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl From<(i32, i32)> for Vec2 {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A rectangle defined by origin and size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the upper-left corner.
    pub x: i32,
    /// Y coordinate (row) of the upper-left corner.
    pub y: i32,
    /// Width in columns.
    pub width: i32,
    /// Height in rows.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from an origin and a dimension vector.
    #[inline]
    pub const fn from_parts(origin: Vec2, dim: Vec2) -> Self {
        Self::new(origin.x, origin.y, dim.x, dim.y)
    }

    /// The default bounding box for a terminal of `columns` x `rows` cells.
    ///
    /// The last column and row are left as margin, so the lower-right
    /// corner of the result is still on screen.
    #[inline]
    pub const fn fullscreen(columns: u16, rows: u16) -> Self {
        Self::new(0, 0, columns as i32 - 1, rows as i32 - 1)
    }

    /// Zero-sized rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Upper-left corner.
    #[inline]
    pub const fn ul(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Upper-right corner.
    #[inline]
    pub const fn ur(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y)
    }

    /// Lower-left corner.
    #[inline]
    pub const fn ll(&self) -> Vec2 {
        Vec2::new(self.x, self.y + self.height)
    }

    /// Lower-right corner.
    #[inline]
    pub const fn lr(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Same as [`Rect::ul`].
    #[inline]
    pub const fn origin(&self) -> Vec2 {
        self.ul()
    }

    /// Width and height as a vector.
    #[inline]
    pub const fn dim(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Center point, rounded toward the origin.
    #[inline]
    pub const fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// The same size with its origin moved to `(0, 0)`.
    #[inline]
    #[must_use]
    pub const fn local(&self) -> Self {
        Self::new(0, 0, self.width, self.height)
    }

    /// Check if the rectangle has no extent on either axis.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if a point lies within the rectangle, corners included.
    #[inline]
    pub const fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Check if `other` lies entirely within this rectangle.
    #[inline]
    pub const fn contains(&self, other: &Self) -> bool {
        self.contains_point(other.ul()) && self.contains_point(other.lr())
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}
