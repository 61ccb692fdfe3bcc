//! Pixel element types.
//!
//! [`Element`] is the bound on the element type of
//! [`TypedImage`](crate::TypedImage). It ties each Rust element type to the
//! [`PixelFormat`] tag of the plain image that stores it:
//!
//! | Element | Format |
//! |---------|--------|
//! | `i8` | [`PixelFormat::Gray8`] |
//! | `i16` | [`PixelFormat::Gray16`] |
//! | `i32` | [`PixelFormat::Gray32`] |
//! | [`Rgb`] | [`PixelFormat::Rgb`] |
//! | [`Complex`] | [`PixelFormat::Complex32`] |
//!
//! # Packed RGB
//!
//! An [`Rgb`] pixel is one `i32` laid out as `0xAARRGGBB`. The top byte is
//! spare: plain RGB images keep it zero and masked RGB images store their
//! mask there.
//!
//! ```rust
//! use pixkit_core::Rgb;
//!
//! let px = Rgb::new(0x12, 0x34, 0x56);
//! assert_eq!(px.raw(), 0x0012_3456);
//! assert_eq!(px.with_alpha(0xFF).alpha(), 0xFF);
//! assert_eq!(px.with_alpha(0xFF).g(), 0x34);
//! ```

use std::fmt;

use pixkit_math::Complex;

use crate::PixelFormat;

/// Element type that can be stored in a [`TypedImage`](crate::TypedImage).
pub trait Element: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Format tag of a plain image of this element.
    const FORMAT: PixelFormat;
}

impl Element for i8 {
    const FORMAT: PixelFormat = PixelFormat::Gray8;
}

impl Element for i16 {
    const FORMAT: PixelFormat = PixelFormat::Gray16;
}

impl Element for i32 {
    const FORMAT: PixelFormat = PixelFormat::Gray32;
}

impl Element for Rgb {
    const FORMAT: PixelFormat = PixelFormat::Rgb;
}

impl Element for Complex {
    const FORMAT: PixelFormat = PixelFormat::Complex32;
}

/// Packed RGB pixel, `0xAARRGGBB` in one `i32`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Rgb(i32);

impl Rgb {
    /// Black with a zero top byte.
    pub const BLACK: Self = Self(0);

    /// Packs three channel bytes with a zero top byte.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as i32) << 16) | ((g as i32) << 8) | b as i32)
    }

    /// Wraps an already packed value.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// The packed value.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Top byte (alpha or mask).
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Returns the pixel with its top byte replaced.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as i32) << 24))
    }

    /// Channels as `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({})", self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0 as u32)
    }
}
