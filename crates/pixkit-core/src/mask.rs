//! Per-pixel masks.
//!
//! Two storage strategies sit behind the one [`Masked`] trait:
//!
//! - [`MaskedImage<T>`] for Gray8 and Gray32 keeps a separate
//!   [`Gray8Image`] of the same size. [`UNMASKED`] (`i8::MIN`) marks an
//!   unmasked pixel; any other value marks it masked, and
//!   [`Masked::set_mask`] writes [`MASKED`] (`i8::MAX`).
//! - [`MaskedRgbImage`] stores the mask in the spare top byte of each
//!   packed pixel: `0xFF` unmasked, `0x00` masked.
//!
//! # Usage
//!
//! ```rust
//! use pixkit_core::{Gray32Image, Masked, MaskedImage};
//!
//! let mut img = MaskedImage::unmasked(Gray32Image::filled(3, 3, 10).unwrap());
//! img.set_mask(1, 1);
//! assert!(img.is_masked(1, 1));
//! assert_eq!(img.masked_count(), 1);
//! assert_eq!(img.image().pixel(1, 1), 10);
//! ```

use tracing::trace;

use crate::image::Raster;
use crate::{Element, Error, Gray8Image, PixelFormat, Result, Rgb, RgbImage, TypedImage};

/// Mask value of an unmasked pixel in a gray mask.
pub const UNMASKED: i8 = i8::MIN;

/// Mask value written by [`Masked::set_mask`] in a gray mask.
pub const MASKED: i8 = i8::MAX;

const RGB_UNMASKED: u8 = 0xFF;
const RGB_MASKED: u8 = 0x00;

/// Per-pixel mask access, independent of how the mask is stored.
pub trait Masked {
    /// Whether the pixel at `(row, col)` is masked.
    fn is_masked(&self, row: i32, col: i32) -> bool;

    /// Marks the pixel at `(row, col)` as masked.
    fn set_mask(&mut self, row: i32, col: i32);

    /// Marks the pixel at `(row, col)` as unmasked.
    fn unset_mask(&mut self, row: i32, col: i32);

    /// Number of masked pixels.
    fn masked_count(&self) -> usize;
}

/// Gray element types that have a masked format.
pub trait MaskableElement: Element {
    /// Format tag of the masked image.
    const MASKED_FORMAT: PixelFormat;
}

impl MaskableElement for i8 {
    const MASKED_FORMAT: PixelFormat = PixelFormat::MaskedGray8;
}

impl MaskableElement for i32 {
    const MASKED_FORMAT: PixelFormat = PixelFormat::MaskedGray32;
}

/// Masked 8-bit gray image.
pub type MaskedGray8Image = MaskedImage<i8>;
/// Masked 32-bit gray image.
pub type MaskedGray32Image = MaskedImage<i32>;

/// Gray image paired with a separate gray mask of the same size.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedImage<T: MaskableElement> {
    image: TypedImage<T>,
    mask: Gray8Image,
}

impl<T: MaskableElement> MaskedImage<T> {
    /// Pairs an image with a mask.
    ///
    /// # Errors
    ///
    /// [`Error::MaskSizeMismatch`] if the dimensions differ.
    pub fn new(image: TypedImage<T>, mask: Gray8Image) -> Result<Self> {
        if image.dimensions() != mask.dimensions() {
            return Err(Error::mask_size_mismatch(
                image.dimensions(),
                mask.dimensions(),
            ));
        }
        Ok(Self { image, mask })
    }

    /// Wraps an image with every pixel unmasked.
    pub fn unmasked(image: TypedImage<T>) -> Self {
        let mask = Gray8Image::filled_like(&image, UNMASKED);
        Self { image, mask }
    }

    /// The underlying pixels.
    #[inline]
    pub fn image(&self) -> &TypedImage<T> {
        &self.image
    }

    /// Mutable access to the pixels. The mask is unaffected.
    #[inline]
    pub fn image_mut(&mut self) -> &mut TypedImage<T> {
        &mut self.image
    }

    /// The mask buffer.
    #[inline]
    pub fn mask(&self) -> &Gray8Image {
        &self.mask
    }

    /// Splits into image and mask.
    #[inline]
    pub fn into_parts(self) -> (TypedImage<T>, Gray8Image) {
        (self.image, self.mask)
    }

    /// Format tag of this masked image.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        T::MASKED_FORMAT
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

    /// Unmasks every pixel.
    pub fn clear_mask(&mut self) {
        self.mask.fill_all(UNMASKED);
    }
}

impl<T: MaskableElement> Masked for MaskedImage<T> {
    fn is_masked(&self, row: i32, col: i32) -> bool {
        self.mask.pixel(row, col) != UNMASKED
    }

    fn set_mask(&mut self, row: i32, col: i32) {
        self.mask.set_pixel(row, col, MASKED);
    }

    fn unset_mask(&mut self, row: i32, col: i32) {
        self.mask.set_pixel(row, col, UNMASKED);
    }

    fn masked_count(&self) -> usize {
        self.mask.data().iter().filter(|&&m| m != UNMASKED).count()
    }
}

impl<T: MaskableElement> Raster for MaskedImage<T> {
    fn width(&self) -> i32 {
        self.image.width()
    }

    fn height(&self) -> i32 {
        self.image.height()
    }

    fn format(&self) -> PixelFormat {
        T::MASKED_FORMAT
    }
}

/// RGB image whose top byte holds the mask.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedRgbImage {
    image: RgbImage,
}

impl MaskedRgbImage {
    /// Wraps an image, taking its existing top bytes as the mask.
    ///
    /// A plain RGB image has zero top bytes, so every pixel starts masked.
    /// Use [`unmasked`](Self::unmasked) to start from a clear mask.
    pub fn new(image: RgbImage) -> Self {
        Self { image }
    }

    /// Wraps an image with every top byte forced to `0xFF`.
    pub fn unmasked(mut image: RgbImage) -> Self {
        image.map_pixels(|px| px.with_alpha(RGB_UNMASKED));
        Self { image }
    }

    /// Encodes a gray mask into the top bytes of `image`.
    ///
    /// # Errors
    ///
    /// [`Error::MaskSizeMismatch`] if the dimensions differ.
    pub fn with_mask(mut image: RgbImage, mask: &Gray8Image) -> Result<Self> {
        if image.dimensions() != mask.dimensions() {
            return Err(Error::mask_size_mismatch(
                image.dimensions(),
                mask.dimensions(),
            ));
        }
        for (px, &m) in image.data_mut().iter_mut().zip(mask.data()) {
            let alpha = if m == UNMASKED { RGB_UNMASKED } else { RGB_MASKED };
            *px = px.with_alpha(alpha);
        }
        trace!(width = image.width(), height = image.height(), "MaskedRgbImage::with_mask");
        Ok(Self { image })
    }

    /// The underlying packed pixels, mask bytes included.
    #[inline]
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Mutable access to the packed pixels.
    ///
    /// Writing a pixel also writes its mask byte.
    #[inline]
    pub fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.image
    }

    /// Unwraps the packed image.
    #[inline]
    pub fn into_inner(self) -> RgbImage {
        self.image
    }

    /// Color at `(row, col)` with the mask byte cleared.
    #[inline]
    pub fn color(&self, row: i32, col: i32) -> Rgb {
        self.image.pixel(row, col).with_alpha(0)
    }

    /// Extracts the mask as a gray mask image.
    pub fn mask_image(&self) -> Gray8Image {
        let mut mask = Gray8Image::filled_like(&self.image, UNMASKED);
        for (m, px) in mask.data_mut().iter_mut().zip(self.image.data()) {
            if px.alpha() == RGB_MASKED {
                *m = MASKED;
            }
        }
        mask
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
}

impl Masked for MaskedRgbImage {
    fn is_masked(&self, row: i32, col: i32) -> bool {
        self.image.pixel(row, col).alpha() == RGB_MASKED
    }

    fn set_mask(&mut self, row: i32, col: i32) {
        let px = self.image.pixel(row, col);
        self.image.set_pixel(row, col, px.with_alpha(RGB_MASKED));
    }

    fn unset_mask(&mut self, row: i32, col: i32) {
        let px = self.image.pixel(row, col);
        self.image.set_pixel(row, col, px.with_alpha(RGB_UNMASKED));
    }

    fn masked_count(&self) -> usize {
        self.image
            .data()
            .iter()
            .filter(|px| px.alpha() == RGB_MASKED)
            .count()
    }
}

impl Raster for MaskedRgbImage {
    fn width(&self) -> i32 {
        self.image.width()
    }

    fn height(&self) -> i32 {
        self.image.height()
    }

    fn format(&self) -> PixelFormat {
        PixelFormat::MaskedRgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Gray32Image;

    #[test]
    fn test_gray_mask_round_trip() {
        for value in [i8::MIN, -1, 0, 1, i8::MAX] {
            let mut img = MaskedGray8Image::unmasked(Gray8Image::filled(2, 2, value).unwrap());
            assert!(!img.is_masked(0, 1));
            img.set_mask(0, 1);
            assert!(img.is_masked(0, 1));
            img.unset_mask(0, 1);
            assert!(!img.is_masked(0, 1));
            assert_eq!(img.image().pixel(0, 1), value);
        }
    }

    #[test]
    fn test_any_non_sentinel_is_masked() {
        let mut mask = Gray8Image::filled(2, 1, UNMASKED).unwrap();
        mask.set_pixel(0, 1, 0);
        let img = MaskedGray32Image::new(Gray32Image::new(2, 1).unwrap(), mask).unwrap();
        assert!(!img.is_masked(0, 0));
        assert!(img.is_masked(0, 1));
        assert_eq!(img.masked_count(), 1);
    }

    #[test]
    fn test_mask_size_mismatch() {
        let err = MaskedGray8Image::new(
            Gray8Image::new(4, 4).unwrap(),
            Gray8Image::new(4, 3).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::MaskSizeMismatch {
                image_height: 4,
                mask_height: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_masked_formats() {
        let g8 = MaskedGray8Image::unmasked(Gray8Image::new(1, 1).unwrap());
        let g32 = MaskedGray32Image::unmasked(Gray32Image::new(1, 1).unwrap());
        let rgb = MaskedRgbImage::unmasked(RgbImage::new(1, 1).unwrap());
        assert_eq!(g8.format(), PixelFormat::MaskedGray8);
        assert_eq!(g32.format(), PixelFormat::MaskedGray32);
        assert_eq!(Raster::format(&rgb), PixelFormat::MaskedRgb);
    }

    #[test]
    fn test_clear_mask() {
        let mut img = MaskedGray8Image::unmasked(Gray8Image::new(3, 3).unwrap());
        img.set_mask(0, 0);
        img.set_mask(2, 2);
        assert_eq!(img.masked_count(), 2);
        img.clear_mask();
        assert_eq!(img.masked_count(), 0);
    }

    #[test]
    fn test_masked_clone_is_independent() {
        let a = MaskedGray8Image::unmasked(Gray8Image::new(2, 2).unwrap());
        let mut b = a.clone();
        b.set_mask(1, 0);
        assert!(!a.is_masked(1, 0));
        assert!(b.is_masked(1, 0));
    }

    #[test]
    fn test_rgb_mask_round_trip() {
        let color = Rgb::new(10, 20, 30);
        let mut img = MaskedRgbImage::unmasked(RgbImage::filled(2, 2, color).unwrap());
        assert_eq!(img.image().pixel(1, 1).alpha(), 0xFF);
        assert!(!img.is_masked(1, 1));

        img.set_mask(1, 1);
        assert_eq!(img.image().pixel(1, 1).alpha(), 0x00);
        assert!(img.is_masked(1, 1));
        assert_eq!(img.color(1, 1), color);

        img.unset_mask(1, 1);
        assert_eq!(img.image().pixel(1, 1).alpha(), 0xFF);
        assert_eq!(img.color(1, 1), color);
    }

    #[test]
    fn test_plain_rgb_starts_masked() {
        let img = MaskedRgbImage::new(RgbImage::new(2, 3).unwrap());
        assert_eq!(img.masked_count(), 6);
    }

    #[test]
    fn test_rgb_with_gray_mask() {
        let mut mask = Gray8Image::filled(2, 1, UNMASKED).unwrap();
        mask.set_pixel(0, 0, 5);
        let img = MaskedRgbImage::with_mask(RgbImage::new(2, 1).unwrap(), &mask).unwrap();
        assert!(img.is_masked(0, 0));
        assert!(!img.is_masked(0, 1));

        let back = img.mask_image();
        assert_eq!(back.data(), &[MASKED, UNMASKED]);

        let bad = Gray8Image::new(1, 1).unwrap();
        assert!(MaskedRgbImage::with_mask(RgbImage::new(2, 1).unwrap(), &bad).is_err());
    }
}
