//! # pixkit-core
//!
//! Core image data model for the pixkit toolkit.
//!
//! This crate provides the types every pixkit stage consumes and produces:
//!
//! - [`TypedImage`] - Flat, row-major pixel buffer generic over the element type
//! - [`Gray8Image`], [`Gray16Image`], [`Gray32Image`], [`RgbImage`], [`Complex32Image`]
//! - [`MaskedImage`], [`MaskedRgbImage`] - Per-pixel masks behind one [`Masked`] trait
//! - [`OffsetImage`] - An image tagged with its origin inside a larger image
//! - [`Image`] - Closed tagged union over every variant, the unit pipelines move
//! - [`PixelFormat`] - Format tag carried by every image
//! - [`Rect`] - Region parameter for fills and crops
//! - [`ToolkitConfig`] - Explicitly injected platform bridge and image store
//!
//! ## Element Types
//!
//! Gray images use signed integers (`i8`, `i16`, `i32`). Callers that treat
//! 8-bit data as unsigned bias or mask it themselves. RGB pixels are packed
//! into one `i32` with the top byte free for alpha or mask use.
//!
//! ```rust
//! use pixkit_core::{Gray8Image, Rect};
//!
//! let mut img = Gray8Image::filled(4, 4, 5).unwrap();
//! img.fill(Rect::new(1, 1, 2, 2), 9).unwrap();
//! assert_eq!(img.pixel(1, 1), 9);
//! assert_eq!(img.pixel(0, 0), 5);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! pixkit-math (fixed-point complex)
//!    ^
//!    |
//! pixkit-core (this crate)
//!    ^
//!    |
//!    +-- pixkit-pipeline (stages, sequences)
//!    +-- pixkit-cli
//! ```
//!
//! # Dependencies
//!
//! - [`pixkit_math`] - `Complex` pixel element
//! - [`thiserror`] - Error derive
//! - [`tracing`] - Diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dynamic;
pub mod error;
pub mod format;
pub mod image;
pub mod mask;
pub mod offset;
pub mod pixel;
pub mod platform;
pub mod rect;

// Re-exports for convenience
pub use dynamic::Image;
pub use error::{Error, Result};
pub use format::PixelFormat;
pub use image::*;
pub use mask::*;
pub use offset::*;
pub use pixel::{Element, Rgb};
pub use platform::{ImageStore, PlatformBridge, PlatformHandle, ToolkitConfig};
pub use rect::Rect;

pub use pixkit_math::{Complex, MathError};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pixkit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dynamic::Image;
    pub use crate::error::{Error, Result};
    pub use crate::format::PixelFormat;
    pub use crate::image::{
        Complex32Image, Gray16Image, Gray32Image, Gray8Image, Raster, RgbImage, TypedImage,
    };
    pub use crate::mask::{Masked, MaskedGray32Image, MaskedGray8Image, MaskedImage, MaskedRgbImage};
    pub use crate::offset::{Gray32OffsetImage, OffsetImage, RgbOffsetImage};
    pub use crate::pixel::{Element, Rgb};
    pub use crate::platform::ToolkitConfig;
    pub use crate::rect::Rect;
    pub use pixkit_math::Complex;
}
