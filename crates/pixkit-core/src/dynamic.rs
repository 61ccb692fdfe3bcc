//! Dynamically typed images.
//!
//! [`Image`] is the closed union of every concrete image type. Pipelines
//! move `Image` values between stages, and a stage that only accepts some
//! formats checks its input with the `expect_*` accessors:
//!
//! ```rust
//! use pixkit_core::{Error, Gray8Image, Image, PixelFormat, RgbImage};
//!
//! let img: Image = Gray8Image::new(2, 2).unwrap().into();
//! assert_eq!(img.format(), PixelFormat::Gray8);
//! assert!(img.expect_gray8().is_ok());
//!
//! let rgb: Image = RgbImage::new(2, 2).unwrap().into();
//! assert!(matches!(
//!     rgb.expect_gray8(),
//!     Err(Error::FormatMismatch { expected: PixelFormat::Gray8, actual: PixelFormat::Rgb })
//! ));
//! ```
//!
//! # Used By
//!
//! - `pixkit-pipeline` - Stage input and output type
//! - [`crate::platform`] - Bridges and stores exchange `Image` values

use std::fmt;

use crate::image::Raster;
use crate::{
    Complex32Image, Error, Gray16Image, Gray32Image, Gray32OffsetImage, Gray8Image,
    MaskedGray32Image, MaskedGray8Image, MaskedRgbImage, PixelFormat, PlatformHandle, Result,
    RgbImage, RgbOffsetImage,
};

/// Any image the toolkit can represent.
#[derive(Debug, Clone, PartialEq)]
pub enum Image {
    /// Signed 8-bit gray.
    Gray8(Gray8Image),
    /// Signed 16-bit gray.
    Gray16(Gray16Image),
    /// Signed 32-bit gray.
    Gray32(Gray32Image),
    /// Packed RGB.
    Rgb(RgbImage),
    /// Fixed-point complex.
    Complex32(Complex32Image),
    /// Gray8 with a gray mask.
    MaskedGray8(MaskedGray8Image),
    /// Gray32 with a gray mask.
    MaskedGray32(MaskedGray32Image),
    /// RGB with the mask in the top byte.
    MaskedRgb(MaskedRgbImage),
    /// Gray32 with an origin offset.
    OffsetGray32(Gray32OffsetImage),
    /// RGB with an origin offset.
    OffsetRgb(RgbOffsetImage),
}

/// Applies `$body` to the payload of whichever variant `$img` holds.
macro_rules! dispatch {
    ($img:expr, $inner:ident => $body:expr) => {
        match $img {
            Image::Gray8($inner) => $body,
            Image::Gray16($inner) => $body,
            Image::Gray32($inner) => $body,
            Image::Rgb($inner) => $body,
            Image::Complex32($inner) => $body,
            Image::MaskedGray8($inner) => $body,
            Image::MaskedGray32($inner) => $body,
            Image::MaskedRgb($inner) => $body,
            Image::OffsetGray32($inner) => $body,
            Image::OffsetRgb($inner) => $body,
        }
    };
}

/// Generates conversions and typed accessors for each variant.
macro_rules! variant_access {
    ($($variant:ident($ty:ty) => $as_ref:ident, $as_mut:ident, $expect:ident;)*) => {
        impl Image {
            $(
                #[doc = concat!("Returns the image if it is `", stringify!($variant), "`.")]
                #[inline]
                pub fn $as_ref(&self) -> Option<&$ty> {
                    match self {
                        Image::$variant(img) => Some(img),
                        _ => None,
                    }
                }

                #[doc = concat!("Returns the image mutably if it is `", stringify!($variant), "`.")]
                #[inline]
                pub fn $as_mut(&mut self) -> Option<&mut $ty> {
                    match self {
                        Image::$variant(img) => Some(img),
                        _ => None,
                    }
                }

                #[doc = concat!("Returns the image if it is `", stringify!($variant), "`.")]
                ///
                /// # Errors
                ///
                /// [`Error::FormatMismatch`] for any other format.
                #[inline]
                pub fn $expect(&self) -> Result<&$ty> {
                    self.$as_ref().ok_or_else(|| {
                        Error::format_mismatch(PixelFormat::$variant, self.format())
                    })
                }
            )*
        }

        $(
            impl From<$ty> for Image {
                fn from(img: $ty) -> Self {
                    Image::$variant(img)
                }
            }

            impl TryFrom<Image> for $ty {
                type Error = Error;

                fn try_from(img: Image) -> Result<Self> {
                    match img {
                        Image::$variant(inner) => Ok(inner),
                        other => Err(Error::format_mismatch(PixelFormat::$variant, other.format())),
                    }
                }
            }
        )*
    };
}

variant_access! {
    Gray8(Gray8Image) => as_gray8, as_gray8_mut, expect_gray8;
    Gray16(Gray16Image) => as_gray16, as_gray16_mut, expect_gray16;
    Gray32(Gray32Image) => as_gray32, as_gray32_mut, expect_gray32;
    Rgb(RgbImage) => as_rgb, as_rgb_mut, expect_rgb;
    Complex32(Complex32Image) => as_complex32, as_complex32_mut, expect_complex32;
    MaskedGray8(MaskedGray8Image) => as_masked_gray8, as_masked_gray8_mut, expect_masked_gray8;
    MaskedGray32(MaskedGray32Image) => as_masked_gray32, as_masked_gray32_mut, expect_masked_gray32;
    MaskedRgb(MaskedRgbImage) => as_masked_rgb, as_masked_rgb_mut, expect_masked_rgb;
    OffsetGray32(Gray32OffsetImage) => as_offset_gray32, as_offset_gray32_mut, expect_offset_gray32;
    OffsetRgb(RgbOffsetImage) => as_offset_rgb, as_offset_rgb_mut, expect_offset_rgb;
}

impl Image {
    /// Format tag of the held image.
    pub fn format(&self) -> PixelFormat {
        dispatch!(self, img => img.format())
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 {
        dispatch!(self, img => img.width())
    }

    /// Height in pixels.
    pub fn height(&self) -> i32 {
        dispatch!(self, img => img.height())
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width(), self.height())
    }

    /// Native platform handle of the underlying buffer.
    pub fn platform(&self) -> Option<&PlatformHandle> {
        match self {
            Image::Gray8(img) => img.platform(),
            Image::Gray16(img) => img.platform(),
            Image::Gray32(img) => img.platform(),
            Image::Rgb(img) => img.platform(),
            Image::Complex32(img) => img.platform(),
            Image::MaskedGray8(img) => img.image().platform(),
            Image::MaskedGray32(img) => img.image().platform(),
            Image::MaskedRgb(img) => img.image().platform(),
            Image::OffsetGray32(img) => img.image().platform(),
            Image::OffsetRgb(img) => img.image().platform(),
        }
    }

    /// Attaches or clears the native platform handle.
    pub fn set_platform(&mut self, handle: Option<PlatformHandle>) {
        match self {
            Image::Gray8(img) => img.set_platform(handle),
            Image::Gray16(img) => img.set_platform(handle),
            Image::Gray32(img) => img.set_platform(handle),
            Image::Rgb(img) => img.set_platform(handle),
            Image::Complex32(img) => img.set_platform(handle),
            Image::MaskedGray8(img) => img.image_mut().set_platform(handle),
            Image::MaskedGray32(img) => img.image_mut().set_platform(handle),
            Image::MaskedRgb(img) => img.image_mut().set_platform(handle),
            Image::OffsetGray32(img) => img.image_mut().set_platform(handle),
            Image::OffsetRgb(img) => img.image_mut().set_platform(handle),
        }
    }

    /// Whether the held image carries a per-pixel mask.
    #[inline]
    pub fn is_masked(&self) -> bool {
        self.format().is_masked()
    }
}

impl Raster for Image {
    fn width(&self) -> i32 {
        Image::width(self)
    }

    fn height(&self) -> i32 {
        Image::height(self)
    }

    fn format(&self) -> PixelFormat {
        Image::format(self)
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.format(), self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Masked, Rgb};

    #[test]
    fn test_format_and_dimensions() {
        let cases: Vec<(Image, PixelFormat)> = vec![
            (Gray8Image::new(3, 2).unwrap().into(), PixelFormat::Gray8),
            (Gray16Image::new(3, 2).unwrap().into(), PixelFormat::Gray16),
            (Complex32Image::new(3, 2).unwrap().into(), PixelFormat::Complex32),
            (
                MaskedGray32Image::unmasked(Gray32Image::new(3, 2).unwrap()).into(),
                PixelFormat::MaskedGray32,
            ),
            (
                RgbOffsetImage::new(RgbImage::new(3, 2).unwrap(), 1, 1).into(),
                PixelFormat::OffsetRgb,
            ),
        ];
        for (img, format) in cases {
            assert_eq!(img.format(), format);
            assert_eq!(img.dimensions(), (3, 2));
        }
    }

    #[test]
    fn test_display() {
        let img: Image = RgbImage::new(640, 480).unwrap().into();
        assert_eq!(img.to_string(), "Rgb (640x480)");
        let img: Image = MaskedGray8Image::unmasked(Gray8Image::new(4, 4).unwrap()).into();
        assert_eq!(img.to_string(), "MaskedGray8 (4x4)");
    }

    #[test]
    fn test_try_from() {
        let img: Image = Gray32Image::filled(1, 1, 4).unwrap().into();
        let back = Gray32Image::try_from(img.clone()).unwrap();
        assert_eq!(back.pixel(0, 0), 4);

        let err = RgbImage::try_from(img).unwrap_err();
        assert!(matches!(
            err,
            Error::FormatMismatch {
                expected: PixelFormat::Rgb,
                actual: PixelFormat::Gray32
            }
        ));
    }

    #[test]
    fn test_as_mut() {
        let mut img: Image = MaskedRgbImage::unmasked(RgbImage::new(2, 2).unwrap()).into();
        img.as_masked_rgb_mut().unwrap().set_mask(0, 0);
        assert!(img.as_masked_rgb().unwrap().is_masked(0, 0));
        assert!(img.as_rgb().is_none());
        assert!(img.is_masked());
    }

    #[test]
    fn test_platform_on_decorated() {
        let mut img: Image = Gray32OffsetImage::new(Gray32Image::new(1, 1).unwrap(), 0, 0).into();
        assert!(img.platform().is_none());
        img.set_platform(Some(PlatformHandle::new("native")));
        assert!(img.platform().is_some());
        img.set_platform(None);
        assert!(img.platform().is_none());
    }

    #[test]
    fn test_clone_is_deep() {
        let a: Image = RgbImage::filled(2, 2, Rgb::new(1, 2, 3)).unwrap().into();
        let mut b = a.clone();
        b.as_rgb_mut().unwrap().set_pixel(0, 0, Rgb::BLACK);
        assert_eq!(a.as_rgb().unwrap().pixel(0, 0), Rgb::new(1, 2, 3));
        assert_ne!(a, b);
    }
}
