//! Pixel format tags.
//!
//! Every image carries a [`PixelFormat`] so that stages can check what they
//! were handed before touching the buffer.
//!
//! # Usage
//!
//! ```rust
//! use pixkit_core::PixelFormat;
//!
//! let tag = PixelFormat::MaskedGray8;
//! assert!(tag.is_masked());
//! assert_eq!(tag.base(), PixelFormat::Gray8);
//! assert_eq!(tag.bytes_per_pixel(), 1);
//! ```

use std::fmt;

/// Format tag of an image.
///
/// Masked and offset tags name the decoration together with the base
/// format they wrap, so a stage can accept "any Gray32" with
/// `format.base() == PixelFormat::Gray32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Format defined outside this crate.
    Custom,
    /// Signed 8-bit gray.
    Gray8,
    /// Signed 16-bit gray.
    Gray16,
    /// Signed 32-bit gray.
    Gray32,
    /// Packed RGB in one `i32`, top byte spare.
    Rgb,
    /// Fixed-point complex pair.
    Complex32,
    /// Gray8 with a parallel Gray8 mask.
    MaskedGray8,
    /// Gray32 with a parallel Gray8 mask.
    MaskedGray32,
    /// RGB with the mask in the top byte.
    MaskedRgb,
    /// Gray32 tagged with its origin in a larger image.
    OffsetGray32,
    /// RGB tagged with its origin in a larger image.
    OffsetRgb,
}

impl PixelFormat {
    /// All format tags.
    pub const ALL: [PixelFormat; 11] = [
        Self::Custom,
        Self::Gray8,
        Self::Gray16,
        Self::Gray32,
        Self::Rgb,
        Self::Complex32,
        Self::MaskedGray8,
        Self::MaskedGray32,
        Self::MaskedRgb,
        Self::OffsetGray32,
        Self::OffsetRgb,
    ];

    /// Short name, as used in diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Custom => "Custom",
            Self::Gray8 => "Gray8",
            Self::Gray16 => "Gray16",
            Self::Gray32 => "Gray32",
            Self::Rgb => "Rgb",
            Self::Complex32 => "Complex32",
            Self::MaskedGray8 => "MaskedGray8",
            Self::MaskedGray32 => "MaskedGray32",
            Self::MaskedRgb => "MaskedRgb",
            Self::OffsetGray32 => "OffsetGray32",
            Self::OffsetRgb => "OffsetRgb",
        }
    }

    /// The undecorated format this tag stores its pixels in.
    pub const fn base(&self) -> PixelFormat {
        match self {
            Self::MaskedGray8 => Self::Gray8,
            Self::MaskedGray32 | Self::OffsetGray32 => Self::Gray32,
            Self::MaskedRgb | Self::OffsetRgb => Self::Rgb,
            other => *other,
        }
    }

    /// Bytes per pixel of the base buffer. Returns 0 for `Custom`.
    ///
    /// Parallel mask buffers are not counted.
    pub const fn bytes_per_pixel(&self) -> usize {
        match self.base() {
            Self::Gray8 => 1,
            Self::Gray16 => 2,
            Self::Gray32 | Self::Rgb => 4,
            Self::Complex32 => 8,
            _ => 0,
        }
    }

    /// Whether the format carries a per-pixel mask.
    #[inline]
    pub const fn is_masked(&self) -> bool {
        matches!(self, Self::MaskedGray8 | Self::MaskedGray32 | Self::MaskedRgb)
    }

    /// Whether the format carries an origin offset.
    #[inline]
    pub const fn is_offset(&self) -> bool {
        matches!(self, Self::OffsetGray32 | Self::OffsetRgb)
    }

    /// Whether the base buffer is single-channel gray.
    #[inline]
    pub const fn is_gray(&self) -> bool {
        matches!(self.base(), Self::Gray8 | Self::Gray16 | Self::Gray32)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_of_decorations() {
        assert_eq!(PixelFormat::MaskedGray32.base(), PixelFormat::Gray32);
        assert_eq!(PixelFormat::OffsetRgb.base(), PixelFormat::Rgb);
        assert_eq!(PixelFormat::Gray16.base(), PixelFormat::Gray16);
    }

    #[test]
    fn test_bytes_per_pixel() {
        assert_eq!(PixelFormat::Gray8.bytes_per_pixel(), 1);
        assert_eq!(PixelFormat::Gray16.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::OffsetGray32.bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::MaskedRgb.bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::Complex32.bytes_per_pixel(), 8);
        assert_eq!(PixelFormat::Custom.bytes_per_pixel(), 0);
    }

    #[test]
    fn test_classification() {
        let masked: Vec<_> = PixelFormat::ALL.iter().filter(|f| f.is_masked()).collect();
        let offset: Vec<_> = PixelFormat::ALL.iter().filter(|f| f.is_offset()).collect();
        assert_eq!(masked.len(), 3);
        assert_eq!(offset.len(), 2);
        assert!(PixelFormat::MaskedGray8.is_gray());
        assert!(!PixelFormat::Rgb.is_gray());
    }

    #[test]
    fn test_display() {
        assert_eq!(PixelFormat::Complex32.to_string(), "Complex32");
    }
}
