//! Typed image buffers.
//!
//! [`TypedImage<T>`] is the one buffer type behind every plain pixel format.
//! Pixels are stored in a flat `Vec<T>` in **row-major** order:
//!
//! ```text
//! index = row * width + col
//!
//! Memory: [p(0,0) p(0,1) ... p(0,w-1)]  ← Row 0
//!         [p(1,0) p(1,1) ... p(1,w-1)]  ← Row 1
//!         ...
//! ```
//!
//! Cloning deep-copies the buffer; two clones never share pixels.
//!
//! # Usage
//!
//! ```rust
//! use pixkit_core::{Gray32Image, Rect};
//!
//! let mut img = Gray32Image::new(8, 4).unwrap();
//! img.fill(Rect::new(2, 1, 3, 2), 7).unwrap();
//! assert_eq!(img.pixel(1, 2), 7);
//! assert_eq!(img.pixels().filter(|&(_, _, v)| v == 7).count(), 6);
//! ```
//!
//! # Dependencies
//!
//! - [`crate::pixel::Element`] - Element bound and format tag
//! - [`crate::rect::Rect`] - Fill and crop regions
//! - [`crate::platform::PlatformHandle`] - Optional native handle
//!
//! # Used By
//!
//! - [`crate::mask`] and [`crate::offset`] - Decorations wrap a `TypedImage`
//! - [`crate::dynamic::Image`] - One variant per alias below
//! - `pixkit-pipeline` - Stage inputs and outputs

use std::fmt;

use pixkit_math::Complex;
use tracing::trace;

use crate::{Element, Error, PixelFormat, PlatformHandle, Rect, Result, Rgb};

/// Signed 8-bit gray image.
pub type Gray8Image = TypedImage<i8>;
/// Signed 16-bit gray image.
pub type Gray16Image = TypedImage<i16>;
/// Signed 32-bit gray image.
pub type Gray32Image = TypedImage<i32>;
/// Packed RGB image.
pub type RgbImage = TypedImage<Rgb>;
/// Fixed-point complex image.
pub type Complex32Image = TypedImage<Complex>;

/// Common read surface of every image type.
///
/// Implemented by [`TypedImage`], the masked and offset decorations, and
/// [`Image`](crate::Image). Types defined outside this crate report
/// [`PixelFormat::Custom`].
pub trait Raster {
    /// Width in pixels.
    fn width(&self) -> i32;

    /// Height in pixels.
    fn height(&self) -> i32;

    /// Format tag.
    fn format(&self) -> PixelFormat;

    /// `(width, height)`.
    fn dimensions(&self) -> (i32, i32) {
        (self.width(), self.height())
    }

    /// Number of pixels.
    fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Rectangle covering the whole image.
    fn bounds(&self) -> Rect {
        Rect::from_size(self.width(), self.height())
    }
}

/// Validates dimensions and returns the buffer length they require.
pub(crate) fn buffer_len(width: i32, height: i32) -> Result<usize> {
    if width < 0 || height < 0 {
        return Err(Error::invalid_dimension(
            width,
            height,
            "dimensions must be non-negative",
        ));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_dimension(width, height, "pixel count overflows"))
}

/// Owned, row-major image buffer.
#[derive(Clone)]
pub struct TypedImage<T: Element> {
    width: i32,
    height: i32,
    data: Vec<T>,
    platform: Option<PlatformHandle>,
}

impl<T: Element> TypedImage<T> {
    /// Creates an image with every pixel set to `T::default()`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if either dimension is negative.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::filled(width, height, T::default())
    }

    /// Creates an image with every pixel set to `value`.
    pub fn filled(width: i32, height: i32, value: T) -> Result<Self> {
        let len = buffer_len(width, height)?;
        trace!(width, height, format = %T::FORMAT, "TypedImage::filled");
        Ok(Self {
            width,
            height,
            data: vec![value; len],
            platform: None,
        })
    }

    /// Filled constructor for dimensions taken from an existing image.
    pub(crate) fn filled_like<U: Element>(other: &TypedImage<U>, value: T) -> Self {
        Self {
            width: other.width,
            height: other.height,
            data: vec![value; other.data.len()],
            platform: None,
        }
    }

    /// Wraps an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if `data.len() != width * height`.
    pub fn from_vec(width: i32, height: i32, data: Vec<T>) -> Result<Self> {
        let len = buffer_len(width, height)?;
        if data.len() != len {
            return Err(Error::invalid_dimension(
                width,
                height,
                format!("buffer holds {} pixels, expected {}", data.len(), len),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
            platform: None,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Format tag of this element type.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        T::FORMAT
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Rectangle covering the whole image.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Returns `true` if the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw pixel buffer.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable raw pixel buffer. Its length cannot change.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the image and returns its buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    fn assert_row(&self, row: i32) {
        assert!(
            (0..self.height).contains(&row),
            "row {} outside {}x{} image",
            row,
            self.width,
            self.height
        );
    }

    #[inline]
    fn index(&self, row: i32, col: i32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn pixel(&self, row: i32, col: i32) -> T {
        assert!(
            self.bounds().contains(row, col),
            "pixel ({}, {}) outside {}x{} image",
            row,
            col,
            self.width,
            self.height
        );
        self.data[self.index(row, col)]
    }

    /// Pixel at `(row, col)`, or `None` outside the image.
    #[inline]
    pub fn get_pixel(&self, row: i32, col: i32) -> Option<T> {
        if self.bounds().contains(row, col) {
            Some(self.data[self.index(row, col)])
        } else {
            None
        }
    }

    /// Sets the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn set_pixel(&mut self, row: i32, col: i32, value: T) {
        assert!(
            self.bounds().contains(row, col),
            "pixel ({}, {}) outside {}x{} image",
            row,
            col,
            self.width,
            self.height
        );
        let idx = self.index(row, col);
        self.data[idx] = value;
    }

    /// One row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the image.
    #[inline]
    pub fn row(&self, row: i32) -> &[T] {
        self.assert_row(row);
        let start = self.index(row, 0);
        &self.data[start..start + self.width as usize]
    }

    /// One mutable row of pixels.
    #[inline]
    pub fn row_mut(&mut self, row: i32) -> &mut [T] {
        self.assert_row(row);
        let start = self.index(row, 0);
        let w = self.width as usize;
        &mut self.data[start..start + w]
    }

    /// Sets every pixel inside `rect` to `value`.
    ///
    /// Returns `self` so fills can be chained.
    ///
    /// # Errors
    ///
    /// [`Error::BoundsOutsideImage`] if `rect` is not contained in the
    /// image. The buffer is left untouched in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixkit_core::{Gray8Image, Rect};
    ///
    /// let mut img = Gray8Image::new(4, 4).unwrap();
    /// img.fill(Rect::new(0, 0, 4, 1), 1)?
    ///     .fill(Rect::new(0, 3, 4, 1), 2)?;
    /// assert_eq!(img.row(0), &[1, 1, 1, 1]);
    /// assert_eq!(img.row(3), &[2, 2, 2, 2]);
    /// # Ok::<(), pixkit_core::Error>(())
    /// ```
    pub fn fill(&mut self, rect: Rect, value: T) -> Result<&mut Self> {
        if !self.bounds().contains_rect(&rect) {
            return Err(Error::bounds_outside_image(rect, self.width, self.height));
        }
        trace!(%rect, format = %T::FORMAT, "TypedImage::fill");
        let (left, right) = (rect.left as usize, rect.right() as usize);
        for row in rect.top..rect.bottom() {
            self.row_mut(row)[left..right].fill(value);
        }
        Ok(self)
    }

    /// Sets every pixel to `value`.
    pub fn fill_all(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Iterates over `(row, col, value)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, T)> + '_ {
        let w = self.width.max(1) as usize;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &v)| ((i / w) as i32, (i % w) as i32, v))
    }

    /// Replaces every pixel with `f(pixel)`.
    pub fn map_pixels<F>(&mut self, mut f: F)
    where
        F: FnMut(T) -> T,
    {
        for px in &mut self.data {
            *px = f(*px);
        }
    }

    /// Copies the pixels inside `rect` into a new image.
    ///
    /// The platform handle is not carried over.
    ///
    /// # Errors
    ///
    /// [`Error::BoundsOutsideImage`] if `rect` is not contained in the image.
    pub fn crop(&self, rect: Rect) -> Result<Self> {
        if !self.bounds().contains_rect(&rect) {
            return Err(Error::bounds_outside_image(rect, self.width, self.height));
        }
        let (left, right) = (rect.left as usize, rect.right() as usize);
        let mut data = Vec::with_capacity(rect.area() as usize);
        for row in rect.top..rect.bottom() {
            data.extend_from_slice(&self.row(row)[left..right]);
        }
        Self::from_vec(rect.width, rect.height, data)
    }

    /// Native platform handle, if one was attached.
    #[inline]
    pub fn platform(&self) -> Option<&PlatformHandle> {
        self.platform.as_ref()
    }

    /// Attaches or clears the native platform handle.
    #[inline]
    pub fn set_platform(&mut self, handle: Option<PlatformHandle>) {
        self.platform = handle;
    }
}

impl<T: Element> Raster for TypedImage<T> {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn format(&self) -> PixelFormat {
        T::FORMAT
    }
}

// Platform handles are opaque; equality covers geometry and pixels only.
impl<T: Element> PartialEq for TypedImage<T> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.data == other.data
    }
}

impl<T: Element> fmt::Debug for TypedImage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedImage")
            .field("format", &T::FORMAT)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("platform", &self.platform.is_some())
            .finish()
    }
}

impl Complex32Image {
    /// Builds a complex image from separate real and imaginary planes.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the planes differ in size.
    pub fn from_parts(real: &Gray32Image, imag: &Gray32Image) -> Result<Self> {
        if real.dimensions() != imag.dimensions() {
            return Err(Error::dimension_mismatch(
                real.dimensions(),
                imag.dimensions(),
            ));
        }
        let data = real
            .data()
            .iter()
            .zip(imag.data())
            .map(|(&re, &im)| Complex::new(re, im))
            .collect();
        Self::from_vec(real.width(), real.height(), data)
    }

    /// Real components as a gray image.
    pub fn real_part(&self) -> Gray32Image {
        self.project(Complex::real)
    }

    /// Imaginary components as a gray image.
    pub fn imag_part(&self) -> Gray32Image {
        self.project(Complex::imag)
    }

    fn project(&self, f: fn(Complex) -> i32) -> Gray32Image {
        let mut out = Gray32Image::filled_like(self, 0);
        for (dst, &src) in out.data.iter_mut().zip(&self.data) {
            *dst = f(src);
        }
        out
    }
}
