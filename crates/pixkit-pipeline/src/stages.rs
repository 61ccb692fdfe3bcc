//! Built-in transforms.
//!
//! These operate within the core data model only: fills, mask and offset
//! decoration, and a pass-through. Each is a [`Transform`]; call
//! [`Transform::into_stage`] to run it as a [`Stage`](crate::Stage).
//!
//! | Transform | Accepts | Produces |
//! |-----------|---------|----------|
//! | [`Identity`] | any | input unchanged |
//! | [`Fill`] | Gray8, Gray16, Gray32, Rgb (matching the fill value) | same format |
//! | [`ApplyMask`] | Gray8, Gray32, Rgb | MaskedGray8, MaskedGray32, MaskedRgb |
//! | [`Crop`] | Gray32, Rgb | OffsetGray32, OffsetRgb |
//! | [`FnStage`] | whatever the closure accepts | whatever it returns |

use std::fmt;

use pixkit_core::{
    Error, Gray32OffsetImage, Gray8Image, Image, MaskedGray32Image, MaskedGray8Image,
    MaskedRgbImage, PixelFormat, Rect, Rgb, RgbOffsetImage,
};
use tracing::{debug, trace};

use crate::{PipelineResult, Transform};

/// Passes images through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transform for Identity {
    fn name(&self) -> &str {
        "Identity"
    }

    fn apply(&mut self, image: Image) -> PipelineResult<Image> {
        trace!(image = %image, "identity");
        Ok(image)
    }
}

type BoxedFn = Box<dyn FnMut(Image) -> PipelineResult<Image> + Send>;

/// A named closure used as a transform.
///
/// ```rust
/// use pixkit_core::Gray8Image;
/// use pixkit_pipeline::{FnStage, Stage, Transform};
///
/// let mut invert = FnStage::new("Invert", |img| {
///     let mut g = Gray8Image::try_from(img)?;
///     g.map_pixels(|v| !v);
///     Ok(g.into())
/// })
/// .into_stage();
///
/// invert.push(Gray8Image::new(1, 1).unwrap().into()).unwrap();
/// assert_eq!(invert.pop().unwrap().expect_gray8().unwrap().pixel(0, 0), -1);
/// ```
pub struct FnStage {
    name: String,
    f: BoxedFn,
}

impl FnStage {
    /// Wraps `f` under `name`.
    pub fn new<F>(name: impl Into<String>, f: F) -> Self
    where
        F: FnMut(Image) -> PipelineResult<Image> + Send + 'static,
    {
        Self {
            name: name.into(),
            f: Box::new(f),
        }
    }
}

impl Transform for FnStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&mut self, image: Image) -> PipelineResult<Image> {
        (self.f)(image)
    }
}

impl fmt::Debug for FnStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStage").field("name", &self.name).finish()
    }
}

/// Value written by a [`Fill`], typed by the image format it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillValue {
    /// For Gray8 images.
    Gray8(i8),
    /// For Gray16 images.
    Gray16(i16),
    /// For Gray32 images.
    Gray32(i32),
    /// For RGB images.
    Rgb(Rgb),
}

impl FillValue {
    /// Format of the images this value can fill.
    pub fn format(&self) -> PixelFormat {
        match self {
            FillValue::Gray8(_) => PixelFormat::Gray8,
            FillValue::Gray16(_) => PixelFormat::Gray16,
            FillValue::Gray32(_) => PixelFormat::Gray32,
            FillValue::Rgb(_) => PixelFormat::Rgb,
        }
    }
}

/// Fills a rectangle with a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    rect: Rect,
    value: FillValue,
}

impl Fill {
    /// Fill of `rect` with `value`.
    pub fn new(rect: Rect, value: FillValue) -> Self {
        Self { rect, value }
    }

    /// Gray8 fill.
    pub fn gray8(rect: Rect, value: i8) -> Self {
        Self::new(rect, FillValue::Gray8(value))
    }

    /// Gray16 fill.
    pub fn gray16(rect: Rect, value: i16) -> Self {
        Self::new(rect, FillValue::Gray16(value))
    }

    /// Gray32 fill.
    pub fn gray32(rect: Rect, value: i32) -> Self {
        Self::new(rect, FillValue::Gray32(value))
    }

    /// RGB fill.
    pub fn rgb(rect: Rect, value: Rgb) -> Self {
        Self::new(rect, FillValue::Rgb(value))
    }

    /// The filled region.
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Transform for Fill {
    fn name(&self) -> &str {
        "Fill"
    }

    fn apply(&mut self, mut image: Image) -> PipelineResult<Image> {
        trace!(rect = %self.rect, image = %image, "fill");
        match (&mut image, self.value) {
            (Image::Gray8(img), FillValue::Gray8(v)) => {
                img.fill(self.rect, v)?;
            }
            (Image::Gray16(img), FillValue::Gray16(v)) => {
                img.fill(self.rect, v)?;
            }
            (Image::Gray32(img), FillValue::Gray32(v)) => {
                img.fill(self.rect, v)?;
            }
            (Image::Rgb(img), FillValue::Rgb(v)) => {
                img.fill(self.rect, v)?;
            }
            (other, value) => {
                return Err(Error::format_mismatch(value.format(), other.format()).into());
            }
        }
        Ok(image)
    }
}

/// Decorates an image with a stored mask.
///
/// Gray images get the mask as a separate buffer. RGB images get it
/// encoded into their top bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyMask {
    mask: Gray8Image,
}

impl ApplyMask {
    /// Transform that applies `mask`.
    pub fn new(mask: Gray8Image) -> Self {
        Self { mask }
    }

    /// The stored mask.
    pub fn mask(&self) -> &Gray8Image {
        &self.mask
    }
}

impl Transform for ApplyMask {
    fn name(&self) -> &str {
        "ApplyMask"
    }

    fn apply(&mut self, image: Image) -> PipelineResult<Image> {
        let masked: Image = match image {
            Image::Gray8(img) => MaskedGray8Image::new(img, self.mask.clone())?.into(),
            Image::Gray32(img) => MaskedGray32Image::new(img, self.mask.clone())?.into(),
            Image::Rgb(img) => MaskedRgbImage::with_mask(img, &self.mask)?.into(),
            other => {
                return Err(Error::format_not_accepted(
                    "ApplyMask",
                    &[PixelFormat::Gray8, PixelFormat::Gray32, PixelFormat::Rgb],
                    other.format(),
                )
                .into());
            }
        };
        debug!(output = %masked, "mask applied");
        Ok(masked)
    }
}

/// Cuts a rectangle out of an image, remembering where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crop {
    rect: Rect,
}

impl Crop {
    /// Crop to `rect`.
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// The cropped region.
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Transform for Crop {
    fn name(&self) -> &str {
        "Crop"
    }

    fn apply(&mut self, image: Image) -> PipelineResult<Image> {
        let Rect { left, top, .. } = self.rect;
        let out: Image = match image {
            Image::Gray32(img) => Gray32OffsetImage::new(img.crop(self.rect)?, left, top).into(),
            Image::Rgb(img) => RgbOffsetImage::new(img.crop(self.rect)?, left, top).into(),
            other => {
                return Err(Error::format_not_accepted(
                    "Crop",
                    &[PixelFormat::Gray32, PixelFormat::Rgb],
                    other.format(),
                )
                .into());
            }
        };
        trace!(rect = %self.rect, output = %out, "crop");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PipelineError, Stage};
    use pixkit_core::{Gray16Image, Gray32Image, Masked, RgbImage, UNMASKED};

    #[test]
    fn test_fill_each_format() {
        let rect = Rect::new(0, 0, 1, 1);
        let cases: Vec<(Image, Fill)> = vec![
            (Gray8Image::new(2, 2).unwrap().into(), Fill::gray8(rect, 3)),
            (Gray16Image::new(2, 2).unwrap().into(), Fill::gray16(rect, 3)),
            (Gray32Image::new(2, 2).unwrap().into(), Fill::gray32(rect, 3)),
            (RgbImage::new(2, 2).unwrap().into(), Fill::rgb(rect, Rgb::new(3, 3, 3))),
        ];
        for (img, mut fill) in cases {
            let format = img.format();
            let out = fill.apply(img).unwrap();
            assert_eq!(out.format(), format);
        }
    }

    #[test]
    fn test_fill_format_mismatch() {
        let mut fill = Fill::gray8(Rect::new(0, 0, 1, 1), 1);
        let err = fill.apply(RgbImage::new(2, 2).unwrap().into()).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Image(Error::FormatMismatch {
                expected: PixelFormat::Gray8,
                actual: PixelFormat::Rgb
            })
        ));
    }

    #[test]
    fn test_fill_out_of_bounds() {
        let mut fill = Fill::gray32(Rect::new(1, 1, 4, 4), 1);
        let err = fill.apply(Gray32Image::new(2, 2).unwrap().into()).unwrap_err();
        assert!(matches!(err, PipelineError::Image(Error::BoundsOutsideImage { .. })));
    }

    #[test]
    fn test_apply_mask_gray() {
        let mut mask = Gray8Image::filled(2, 2, UNMASKED).unwrap();
        mask.set_pixel(1, 0, 1);
        let mut apply = ApplyMask::new(mask);

        let out = apply.apply(Gray32Image::new(2, 2).unwrap().into()).unwrap();
        let masked = out.expect_masked_gray32().unwrap();
        assert!(masked.is_masked(1, 0));
        assert_eq!(masked.masked_count(), 1);

        let out = apply.apply(RgbImage::new(2, 2).unwrap().into()).unwrap();
        assert_eq!(out.format(), PixelFormat::MaskedRgb);
        assert!(out.as_masked_rgb().unwrap().is_masked(1, 0));
        assert!(!out.as_masked_rgb().unwrap().is_masked(0, 0));
    }

    #[test]
    fn test_apply_mask_size_mismatch() {
        let mut apply = ApplyMask::new(Gray8Image::new(3, 3).unwrap());
        let err = apply.apply(Gray8Image::new(2, 2).unwrap().into()).unwrap_err();
        assert!(matches!(err, PipelineError::Image(Error::MaskSizeMismatch { .. })));
    }

    #[test]
    fn test_apply_mask_rejects_gray16() {
        let mut apply = ApplyMask::new(Gray8Image::new(2, 2).unwrap());
        let err = apply.apply(Gray16Image::new(2, 2).unwrap().into()).unwrap_err();
        match err {
            PipelineError::Image(Error::FormatNotAccepted {
                operation,
                accepted,
                actual,
            }) => {
                assert_eq!(operation, "ApplyMask");
                assert!(accepted.contains(&PixelFormat::Rgb));
                assert_eq!(actual, PixelFormat::Gray16);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_crop_rejects_gray8() {
        let mut crop = Crop::new(Rect::new(0, 0, 1, 1));
        let err = crop.apply(Gray8Image::new(2, 2).unwrap().into()).unwrap_err();
        assert_eq!(err.to_string(), "Crop accepts Gray32 or Rgb, got Gray8");
    }

    #[test]
    fn test_crop_offsets() {
        let data: Vec<i32> = (0..12).collect();
        let img = Gray32Image::from_vec(4, 3, data).unwrap();
        let mut crop = Crop::new(Rect::new(1, 1, 2, 2));
        let out = crop.apply(img.into()).unwrap();
        let tile = out.expect_offset_gray32().unwrap();
        assert_eq!(tile.offset(), (1, 1));
        assert_eq!(tile.image().data(), &[5, 6, 9, 10]);
    }

    #[test]
    fn test_crop_outside() {
        let mut crop = Crop::new(Rect::new(3, 0, 2, 1)).into_stage();
        assert!(crop.push(RgbImage::new(4, 1).unwrap().into()).is_err());
        assert!(crop.is_empty());
    }

    #[test]
    fn test_fn_stage_counts_calls() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let mut stage = FnStage::new("Count", move |img| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(img)
        })
        .into_stage();
        assert_eq!(stage.name(), "Count");

        stage.push(Gray8Image::new(1, 1).unwrap().into()).unwrap();
        stage.push(Gray8Image::new(1, 1).unwrap().into()).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!stage.is_empty());
    }
}
