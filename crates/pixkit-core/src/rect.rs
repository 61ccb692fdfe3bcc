//! Rectangle type for region parameters.
//!
//! [`Rect`] is the region argument of [`TypedImage::fill`](crate::TypedImage::fill)
//! and of cropping stages. Coordinates use the image convention:
//!
//! ```text
//! (0,0) ────────► col (left)
//!   │
//!   │   ┌──────────┐
//!   │   │   Rect   │
//!   │   └──────────┘
//!   ▼
//!  row (top)
//! ```
//!
//! The left/top edges are inclusive and the right/bottom edges exclusive.
//!
//! # Usage
//!
//! ```rust
//! use pixkit_core::Rect;
//!
//! let rect = Rect::new(1, 2, 3, 4);
//! assert_eq!(rect.right(), 4);
//! assert_eq!(rect.bottom(), 6);
//! assert!(rect.contains(5, 3));
//! ```

use crate::{Error, Result};

/// A rectangle defined by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Column of the left edge (inclusive)
    pub left: i32,
    /// Row of the top edge (inclusive)
    pub top: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Creates a rectangle at the origin.
    #[inline]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Creates a rectangle from two corners, normalizing their order.
    ///
    /// ```rust
    /// use pixkit_core::Rect;
    ///
    /// assert_eq!(Rect::from_corners(5, 6, 1, 2), Rect::new(1, 2, 4, 4));
    /// ```
    #[inline]
    pub fn from_corners(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        let (l, r) = if left <= right { (left, right) } else { (right, left) };
        let (t, b) = if top <= bottom { (top, bottom) } else { (bottom, top) };
        Self::new(l, t, r - l, b - t)
    }

    /// Column just past the right edge, saturating at the `i32` range.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    /// Row just past the bottom edge, saturating at the `i32` range.
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// Area in pixels; zero for empty or inverted rectangles.
    #[inline]
    pub const fn area(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.width as u64 * self.height as u64
        }
    }

    /// Returns `true` if either dimension is zero or negative.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns `true` if the pixel at `(row, col)` lies inside.
    #[inline]
    pub const fn contains(&self, row: i32, col: i32) -> bool {
        col >= self.left && col < self.right() && row >= self.top && row < self.bottom()
    }

    /// Returns `true` if `other` lies entirely inside this rectangle.
    ///
    /// A rectangle with a negative dimension is never contained.
    #[inline]
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.width >= 0
            && other.height >= 0
            && other.left >= self.left
            && other.top >= self.top
            && other.left as i64 + other.width as i64 <= self.left as i64 + self.width as i64
            && other.top as i64 + other.height as i64 <= self.top as i64 + self.height as i64
    }

    /// Returns the rectangle moved by `(dx, dy)`.
    #[inline]
    pub const fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.left + dx, self.top + dy, self.width, self.height)
    }

    /// Returns the corner with the given index as `(col, row)`.
    ///
    /// Corners are numbered clockwise from the top-left: 0 top-left,
    /// 1 top-right, 2 bottom-right, 3 bottom-left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalParameterValue`] for an index above 3.
    pub fn corner(&self, index: usize) -> Result<(i32, i32)> {
        match index {
            0 => Ok((self.left, self.top)),
            1 => Ok((self.right(), self.top)),
            2 => Ok((self.right(), self.bottom())),
            3 => Ok((self.left, self.bottom())),
            _ => Err(Error::illegal_parameter(format!(
                "rectangle corner index {} (expected 0..=3)",
                index
            ))),
        }
    }

    /// Iterates over `(row, col)` of every pixel, row by row.
    #[inline]
    pub fn iter_coords(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (self.top..self.bottom()).flat_map(move |r| (self.left..self.right()).map(move |c| (r, c)))
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{},{};{}x{}]",
            self.left, self.top, self.width, self.height
        )
    }
}
