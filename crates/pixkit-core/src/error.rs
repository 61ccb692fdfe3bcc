//! Error types for pixkit-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers every failure of the image data model:
//! - Construction (negative dimensions, buffer length mismatch)
//! - Region checks ([`Error::BoundsOutsideImage`])
//! - Mask construction ([`Error::MaskSizeMismatch`])
//! - Format checks performed by stages ([`Error::FormatMismatch`])
//! - Fixed-point failures bubbled up from `pixkit-math`
//!
//! # Usage
//!
//! ```rust
//! use pixkit_core::{Error, Gray8Image};
//!
//! let err = Gray8Image::new(-1, 4).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimension { width: -1, .. }));
//! ```
//!
//! # Used By
//!
//! - [`crate::image::TypedImage`] - Construction and fills
//! - [`crate::mask`] - Mask size validation
//! - [`crate::dynamic::Image`] - Variant conversions
//! - `pixkit-pipeline` - Wrapped in `PipelineError::Image`

use pixkit_math::MathError;
use thiserror::Error;

use crate::{PixelFormat, Rect};

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the image data model.
#[derive(Debug, Error)]
pub enum Error {
    /// Width or height is negative, or the buffer length does not match.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimension {
        /// Requested width
        width: i32,
        /// Requested height
        height: i32,
        /// Why the dimensions were rejected
        reason: String,
    },

    /// A region extends beyond the image.
    #[error("region {rect} is outside image bounds {width}x{height}")]
    BoundsOutsideImage {
        /// The offending region
        rect: Rect,
        /// Image width
        width: i32,
        /// Image height
        height: i32,
    },

    /// An index or enumerated parameter is out of range.
    #[error("illegal parameter value: {0}")]
    IllegalParameterValue(String),

    /// Mask dimensions differ from the image they decorate.
    #[error("mask size {mask_width}x{mask_height} does not match image size {image_width}x{image_height}")]
    MaskSizeMismatch {
        /// Image width
        image_width: i32,
        /// Image height
        image_height: i32,
        /// Mask width
        mask_width: i32,
        /// Mask height
        mask_height: i32,
    },

    /// Two images that must share dimensions do not.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First image width
        a_width: i32,
        /// First image height
        a_height: i32,
        /// Second image width
        b_width: i32,
        /// Second image height
        b_height: i32,
    },

    /// An image has a different pixel format than the operation accepts.
    #[error("expected {expected} image, got {actual}")]
    FormatMismatch {
        /// Format the operation accepts
        expected: PixelFormat,
        /// Format it received
        actual: PixelFormat,
    },

    /// An operation that accepts several formats received none of them.
    #[error("{operation} accepts {}, got {actual}", join_formats(.accepted))]
    FormatNotAccepted {
        /// Name of the rejecting operation
        operation: &'static str,
        /// Formats the operation accepts
        accepted: &'static [PixelFormat],
        /// Format it received
        actual: PixelFormat,
    },

    /// The requested capability was not configured or is not available.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Fixed-point arithmetic failure.
    #[error(transparent)]
    Math(#[from] MathError),

    /// I/O error raised by an injected image store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::InvalidDimension`] error.
    #[inline]
    pub fn invalid_dimension(width: i32, height: i32, reason: impl Into<String>) -> Self {
        Self::InvalidDimension {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::BoundsOutsideImage`] error.
    #[inline]
    pub fn bounds_outside_image(rect: Rect, width: i32, height: i32) -> Self {
        Self::BoundsOutsideImage {
            rect,
            width,
            height,
        }
    }

    /// Creates an [`Error::MaskSizeMismatch`] error from `(width, height)` pairs.
    #[inline]
    pub fn mask_size_mismatch(image: (i32, i32), mask: (i32, i32)) -> Self {
        Self::MaskSizeMismatch {
            image_width: image.0,
            image_height: image.1,
            mask_width: mask.0,
            mask_height: mask.1,
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (i32, i32), b: (i32, i32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Creates an [`Error::FormatMismatch`] error.
    #[inline]
    pub fn format_mismatch(expected: PixelFormat, actual: PixelFormat) -> Self {
        Self::FormatMismatch { expected, actual }
    }

    /// Creates an [`Error::FormatNotAccepted`] error.
    #[inline]
    pub fn format_not_accepted(
        operation: &'static str,
        accepted: &'static [PixelFormat],
        actual: PixelFormat,
    ) -> Self {
        Self::FormatNotAccepted {
            operation,
            accepted,
            actual,
        }
    }

    /// Creates an [`Error::IllegalParameterValue`] error.
    #[inline]
    pub fn illegal_parameter(msg: impl Into<String>) -> Self {
        Self::IllegalParameterValue(msg.into())
    }

    /// Creates an [`Error::Unsupported`] error.
    #[inline]
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Returns `true` if this is a bounds or dimension error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            Self::BoundsOutsideImage { .. }
                | Self::InvalidDimension { .. }
                | Self::MaskSizeMismatch { .. }
                | Self::DimensionMismatch { .. }
        )
    }

    /// Returns `true` if this is a format error.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::FormatMismatch { .. } | Self::FormatNotAccepted { .. }
        )
    }

    /// Returns `true` if this wraps a fixed-point arithmetic failure.
    #[inline]
    pub fn is_math_error(&self) -> bool {
        matches!(self, Self::Math(_))
    }
}

fn join_formats(formats: &[PixelFormat]) -> String {
    formats
        .iter()
        .map(PixelFormat::name)
        .collect::<Vec<_>>()
        .join(" or ")
}
