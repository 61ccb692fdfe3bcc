//! Offset images.
//!
//! An [`OffsetImage`] is a Gray32 or RGB image tagged with the `(x, y)`
//! position of its top-left pixel inside a larger image. The offset is
//! metadata only; pixel access stays relative to the wrapped image.
//!
//! ```rust
//! use pixkit_core::{Gray32Image, Gray32OffsetImage, Rect};
//!
//! let mut tile = Gray32OffsetImage::new(Gray32Image::new(2, 2).unwrap(), 10, 20);
//! assert_eq!(tile.bounds_in_parent(), Rect::new(10, 20, 2, 2));
//! tile.set_x_offset(0);
//! assert_eq!(tile.offset(), (0, 20));
//! ```

use crate::image::Raster;
use crate::{Element, PixelFormat, Rect, Rgb, TypedImage};

/// Element types that have an offset format.
pub trait OffsetElement: Element {
    /// Format tag of the offset image.
    const OFFSET_FORMAT: PixelFormat;
}

impl OffsetElement for i32 {
    const OFFSET_FORMAT: PixelFormat = PixelFormat::OffsetGray32;
}

impl OffsetElement for Rgb {
    const OFFSET_FORMAT: PixelFormat = PixelFormat::OffsetRgb;
}

/// Gray32 image with an origin offset.
pub type Gray32OffsetImage = OffsetImage<i32>;
/// RGB image with an origin offset.
pub type RgbOffsetImage = OffsetImage<Rgb>;

/// Image tagged with its origin inside a larger image.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetImage<T: OffsetElement> {
    image: TypedImage<T>,
    x_offset: i32,
    y_offset: i32,
}

impl<T: OffsetElement> OffsetImage<T> {
    /// Wraps `image` with origin `(x_offset, y_offset)`.
    pub fn new(image: TypedImage<T>, x_offset: i32, y_offset: i32) -> Self {
        Self {
            image,
            x_offset,
            y_offset,
        }
    }

    /// Column of the origin in the parent image.
    #[inline]
    pub fn x_offset(&self) -> i32 {
        self.x_offset
    }

    /// Row of the origin in the parent image.
    #[inline]
    pub fn y_offset(&self) -> i32 {
        self.y_offset
    }

    /// `(x, y)` origin.
    #[inline]
    pub fn offset(&self) -> (i32, i32) {
        (self.x_offset, self.y_offset)
    }

    /// Sets the origin column.
    #[inline]
    pub fn set_x_offset(&mut self, x: i32) {
        self.x_offset = x;
    }

    /// Sets the origin row.
    #[inline]
    pub fn set_y_offset(&mut self, y: i32) {
        self.y_offset = y;
    }

    /// Sets both origin coordinates.
    #[inline]
    pub fn set_offset(&mut self, x: i32, y: i32) {
        self.x_offset = x;
        self.y_offset = y;
    }

    /// The wrapped image.
    #[inline]
    pub fn image(&self) -> &TypedImage<T> {
        &self.image
    }

    /// Mutable access to the wrapped image.
    #[inline]
    pub fn image_mut(&mut self) -> &mut TypedImage<T> {
        &mut self.image
    }

    /// Unwraps the image, dropping the offset.
    #[inline]
    pub fn into_inner(self) -> TypedImage<T> {
        self.image
    }

    /// Format tag of this offset image.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        T::OFFSET_FORMAT
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> i32 {
        self.image.width()
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> i32 {
        self.image.height()
    }

    /// Region this image covers in parent coordinates.
    pub fn bounds_in_parent(&self) -> Rect {
        Rect::new(
            self.x_offset,
            self.y_offset,
            self.image.width(),
            self.image.height(),
        )
    }
}

impl<T: OffsetElement> Raster for OffsetImage<T> {
    fn width(&self) -> i32 {
        self.image.width()
    }

    fn height(&self) -> i32 {
        self.image.height()
    }

    fn format(&self) -> PixelFormat {
        T::OFFSET_FORMAT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Gray32Image, RgbImage};

    #[test]
    fn test_offset_setters() {
        let mut img = RgbOffsetImage::new(RgbImage::new(3, 2).unwrap(), 0, 0);
        img.set_y_offset(7);
        assert_eq!(img.offset(), (0, 7));
        img.set_offset(-4, 5);
        assert_eq!(img.x_offset(), -4);
        assert_eq!(img.y_offset(), 5);
        assert_eq!(img.format(), PixelFormat::OffsetRgb);
    }

    #[test]
    fn test_offset_is_metadata_only() {
        let base = Gray32Image::filled(2, 2, 3).unwrap();
        let mut img = Gray32OffsetImage::new(base.clone(), 100, 100);
        img.set_offset(1, 1);
        assert_eq!(img.image(), &base);
        assert_eq!(img.image().pixel(0, 0), 3);
    }

    #[test]
    fn test_offset_clone_copies_metadata() {
        let a = Gray32OffsetImage::new(Gray32Image::new(1, 1).unwrap(), 2, 3);
        let mut b = a.clone();
        b.set_x_offset(9);
        assert_eq!(a.offset(), (2, 3));
        assert_eq!(b.offset(), (9, 3));
    }
}
