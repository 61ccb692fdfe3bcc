//! Fixed-point complex numbers.
//!
//! [`Complex`] holds a real and an imaginary component, both pre-scaled by
//! [`SCALE`]. Arithmetic is value based: every operation returns a new
//! value and leaves its operands alone. The `*Assign` operators are the
//! explicit in-place form for accumulation loops.
//!
//! # Overflow
//!
//! Addition, subtraction and multiplication wrap like native 32-bit
//! integers; keeping operands inside the safe range is the caller's job.
//! Only [`Complex::square`], [`Complex::magnitude`] and [`Complex::div`]
//! guard the range, using the shift-before/shift-after pattern.
//!
//! # Usage
//!
//! ```rust
//! use pixkit_math::Complex;
//!
//! let a = Complex::new(3, 4);
//! let b = Complex::new(2, 1);
//! let product = a * b;
//! assert_eq!(product, Complex::new(2, 11));
//! assert_eq!(product.div(b).unwrap(), a);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign};

use crate::{isqrt, MathError, MathResult, SCALE, SHIFT};

/// Complex number with scaled integer components.
///
/// # Example
///
/// ```rust
/// use pixkit_math::{Complex, SCALE};
///
/// let one = Complex::from_int(1, 0);
/// assert_eq!(one.re, SCALE);
/// assert_eq!(one.conjugate(), one);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Complex {
    /// Real component (scaled)
    pub re: i32,
    /// Imaginary component (scaled)
    pub im: i32,
}

impl Complex {
    /// Zero.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a complex number from already-scaled components.
    #[inline]
    pub const fn new(re: i32, im: i32) -> Self {
        Self { re, im }
    }

    /// Creates a purely real complex number from an already-scaled value.
    #[inline]
    pub const fn from_real(re: i32) -> Self {
        Self::new(re, 0)
    }

    /// Creates a complex number from integer parts, applying the scale.
    #[inline]
    pub const fn from_int(re: i32, im: i32) -> Self {
        Self::new(re << SHIFT, im << SHIFT)
    }

    /// Returns the real component.
    #[inline]
    pub const fn real(self) -> i32 {
        self.re
    }

    /// Returns the imaginary component.
    #[inline]
    pub const fn imag(self) -> i32 {
        self.im
    }

    /// Returns `true` if both components are zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.re == 0 && self.im == 0
    }

    /// Complex conjugate: negates the imaginary component.
    #[inline]
    pub const fn conjugate(self) -> Self {
        Self::new(self.re, self.im.wrapping_neg())
    }

    /// Arithmetic left shift of both components.
    #[inline]
    pub const fn lsh(self, bits: u32) -> Self {
        Self::new(self.re.wrapping_shl(bits), self.im.wrapping_shl(bits))
    }

    /// Arithmetic right shift of both components (sign preserving).
    #[inline]
    pub const fn rsh(self, bits: u32) -> Self {
        Self::new(self.re.wrapping_shr(bits), self.im.wrapping_shr(bits))
    }

    /// Squared magnitude, `re² + im²`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SquareTooLarge`] if either component's
    /// magnitude exceeds [`SCALE`]; the check bounds the multiplication.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixkit_math::Complex;
    ///
    /// assert_eq!(Complex::new(3, 4).square().unwrap(), 25);
    /// assert!(Complex::new(1000, 0).square().is_err());
    /// ```
    pub fn square(self) -> MathResult<i32> {
        if self.re.unsigned_abs() > SCALE as u32 || self.im.unsigned_abs() > SCALE as u32 {
            return Err(MathError::SquareTooLarge {
                re: self.re,
                im: self.im,
                scale: SCALE,
            });
        }
        Ok(self.re * self.re + self.im * self.im)
    }

    /// Magnitude `sqrt(re² + im²)` in the same scale as the components.
    ///
    /// - If either component is zero the result is exactly `|re| + |im|`.
    /// - If either component exceeds `SCALE / 2`, both are shifted right by
    ///   [`SHIFT`] before squaring and the root is shifted back left.
    /// - Otherwise the root of [`square`](Self::square) is taken directly.
    ///
    /// # Errors
    ///
    /// Propagates [`MathError::SquareTooLarge`] when even the shifted
    /// components exceed the scale.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixkit_math::{Complex, SCALE};
    ///
    /// assert_eq!(Complex::new(3, 4).magnitude().unwrap(), 5);
    /// assert_eq!(Complex::new(0, -7).magnitude().unwrap(), 7);
    /// assert_eq!(Complex::new(6 * SCALE, 8 * SCALE).magnitude().unwrap(), 10 * SCALE);
    /// ```
    pub fn magnitude(self) -> MathResult<i32> {
        if self.re == 0 || self.im == 0 {
            return Ok(self.re.wrapping_abs().wrapping_add(self.im.wrapping_abs()));
        }
        let half = (SCALE / 2) as u32;
        if self.re.unsigned_abs() > half || self.im.unsigned_abs() > half {
            let shifted = self.rsh(SHIFT);
            Ok(isqrt(shifted.square()?)? << SHIFT)
        } else {
            isqrt(self.square()?)
        }
    }

    /// Divides both components by an integer.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if `divisor == 0`.
    pub fn div_scalar(self, divisor: i32) -> MathResult<Self> {
        if divisor == 0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::new(
            self.re.wrapping_div(divisor),
            self.im.wrapping_div(divisor),
        ))
    }

    /// Complex division, `self * conj(rhs) / |rhs|²`.
    ///
    /// When either component of `rhs` reaches [`SCALE`], `rhs` is shifted
    /// right by [`SHIFT`] before its squared magnitude is formed. Dividing
    /// by the shifted divisor yields the quotient scaled up by `2^SHIFT`, so
    /// the result is shifted right by `SHIFT` to compensate.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ProductTooLarge`] if the (possibly shifted)
    /// divisor has zero squared magnitude.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixkit_math::Complex;
    ///
    /// let a = Complex::new(3, 4);
    /// let b = Complex::new(512, 256);
    /// assert_eq!((a * b).div(b).unwrap(), a);
    /// assert!(a.div(Complex::ZERO).is_err());
    /// ```
    pub fn div(self, rhs: Self) -> MathResult<Self> {
        let shifted = rhs.re.unsigned_abs() >= SCALE as u32 || rhs.im.unsigned_abs() >= SCALE as u32;
        let divisor = if shifted { rhs.rsh(SHIFT) } else { rhs };
        let norm = divisor
            .re
            .wrapping_mul(divisor.re)
            .wrapping_add(divisor.im.wrapping_mul(divisor.im));
        if norm == 0 {
            return Err(MathError::ProductTooLarge);
        }
        let numerator = self * divisor.conjugate();
        let quotient = Self::new(
            numerator.re.wrapping_div(norm),
            numerator.im.wrapping_div(norm),
        );
        Ok(if shifted { quotient.rsh(SHIFT) } else { quotient })
    }

    /// Converts to unscaled floating-point `(re, im)` for diagnostics.
    #[inline]
    pub fn to_f64_pair(self) -> (f64, f64) {
        (
            self.re as f64 / SCALE as f64,
            self.im as f64 / SCALE as f64,
        )
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.re, self.im)
    }
}

impl From<(i32, i32)> for Complex {
    #[inline]
    fn from((re, im): (i32, i32)) -> Self {
        Self::new(re, im)
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re.wrapping_add(rhs.re), self.im.wrapping_add(rhs.im))
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re.wrapping_sub(rhs.re), self.im.wrapping_sub(rhs.im))
    }
}

// (ar*br - ai*bi, ar*bi + ai*br)
impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re
                .wrapping_mul(rhs.re)
                .wrapping_sub(self.im.wrapping_mul(rhs.im)),
            self.re
                .wrapping_mul(rhs.im)
                .wrapping_add(self.im.wrapping_mul(rhs.re)),
        )
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(self.re.wrapping_neg(), self.im.wrapping_neg())
    }
}

impl Shl<u32> for Complex {
    type Output = Self;

    #[inline]
    fn shl(self, bits: u32) -> Self {
        self.lsh(bits)
    }
}

impl Shr<u32> for Complex {
    type Output = Self;

    #[inline]
    fn shr(self, bits: u32) -> Self {
        self.rsh(bits)
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl ShlAssign<u32> for Complex {
    #[inline]
    fn shl_assign(&mut self, bits: u32) {
        *self = self.lsh(bits);
    }
}

impl ShrAssign<u32> for Complex {
    #[inline]
    fn shr_assign(&mut self, bits: u32) {
        *self = self.rsh(bits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_add_sub() {
        let a = Complex::new(5, -3);
        let b = Complex::new(2, 7);
        assert_eq!(a + b, Complex::new(7, 4));
        assert_eq!(a - b, Complex::new(3, -10));
    }

    #[test]
    fn test_operands_untouched() {
        let a = Complex::new(1, 2);
        let b = Complex::new(3, 4);
        let _ = a * b;
        assert_eq!(a, Complex::new(1, 2));
        assert_eq!(b, Complex::new(3, 4));
    }

    #[test]
    fn test_mul() {
        let a = Complex::new(1, 2);
        let b = Complex::new(3, 4);
        // (1*3 - 2*4, 1*4 + 2*3)
        assert_eq!(a * b, Complex::new(-5, 10));
    }

    #[test]
    fn test_mul_wraps() {
        let big = Complex::new(i32::MAX, 0);
        let two = Complex::new(2, 0);
        assert_eq!((big * two).re, i32::MAX.wrapping_mul(2));
    }

    #[test]
    fn test_assign_ops() {
        let mut acc = Complex::ZERO;
        acc += Complex::new(2, 3);
        acc += Complex::new(1, 1);
        assert_eq!(acc, Complex::new(3, 4));
        acc -= Complex::new(1, 1);
        assert_eq!(acc, Complex::new(2, 3));
        acc *= Complex::new(0, 1);
        assert_eq!(acc, Complex::new(-3, 2));
        acc <<= 2;
        assert_eq!(acc, Complex::new(-12, 8));
        acc >>= 3;
        assert_eq!(acc, Complex::new(-2, 1));
    }

    #[test]
    fn test_conjugate_and_neg() {
        let a = Complex::new(4, -9);
        assert_eq!(a.conjugate(), Complex::new(4, 9));
        assert_eq!(-a, Complex::new(-4, 9));
    }

    #[test]
    fn test_shifts_are_arithmetic() {
        let a = Complex::new(-256, 512);
        assert_eq!(a.rsh(8), Complex::new(-1, 2));
        assert_eq!(Complex::new(-1, 3).lsh(8), Complex::new(-256, 768));
        assert_eq!(a >> 8, a.rsh(8));
        assert_eq!(a << 1, a.lsh(1));
    }

    #[test]
    fn test_div_scalar() {
        assert_eq!(
            Complex::new(10, -20).div_scalar(5).unwrap(),
            Complex::new(2, -4)
        );
        assert_eq!(
            Complex::new(7, -7).div_scalar(2).unwrap(),
            Complex::new(3, -3)
        );
    }

    #[test]
    fn test_div_scalar_by_zero() {
        for a in [Complex::ZERO, Complex::new(1, 1), Complex::new(i32::MIN, i32::MAX)] {
            assert_eq!(a.div_scalar(0), Err(MathError::DivisionByZero));
        }
    }

    #[test]
    fn test_div_inverts_mul_small_divisor() {
        let a = Complex::new(3, 4);
        let b = Complex::new(2, 1);
        let product = a * b;
        assert_eq!(product, Complex::new(2, 11));
        assert_eq!(product.div(b).unwrap(), a);
    }

    #[test]
    fn test_div_inverts_mul_shifted_divisor() {
        let a = Complex::new(3, 4);
        let b = Complex::new(512, 256);
        let product = a * b;
        assert_eq!(product, Complex::new(512, 2816));
        assert_eq!(product.div(b).unwrap(), a);
    }

    #[test]
    fn test_div_scaled_values() {
        let a = Complex::from_int(6, 0);
        let b = Complex::from_int(2, 0);
        // (6*256) / (2*256) with b shifted: (1536 * 2) / 4 >> 8 = 3
        assert_eq!(a.div(b).unwrap(), Complex::new(3, 0));
    }

    #[test]
    fn test_div_by_zero_magnitude() {
        let a = Complex::new(10, 10);
        assert_eq!(a.div(Complex::ZERO), Err(MathError::ProductTooLarge));
    }

    #[test]
    fn test_square() {
        assert_eq!(Complex::new(3, 4).square().unwrap(), 25);
        assert_eq!(Complex::new(-12, 0).square().unwrap(), 144);
        assert_eq!(Complex::new(SCALE, SCALE).square().unwrap(), 2 * SCALE * SCALE);
    }

    #[test]
    fn test_square_real_only() {
        for re in [-SCALE, -17, 0, 1, 100, SCALE] {
            assert_eq!(Complex::new(re, 0).square().unwrap(), re * re);
        }
    }

    #[test]
    fn test_square_too_large() {
        let err = Complex::new(SCALE + 1, 0).square().unwrap_err();
        assert!(matches!(err, MathError::SquareTooLarge { re, .. } if re == SCALE + 1));
        assert!(Complex::new(0, -(SCALE + 1)).square().is_err());
    }

    #[test]
    fn test_magnitude_345() {
        assert_eq!(Complex::new(3, 4).magnitude().unwrap(), 5);
        assert_eq!(
            Complex::new(3 * SCALE, 4 * SCALE).magnitude().unwrap(),
            5 * SCALE
        );
    }

    #[test]
    fn test_magnitude_axis_shortcut() {
        assert_eq!(Complex::new(0, 0).magnitude().unwrap(), 0);
        assert_eq!(Complex::new(-1000, 0).magnitude().unwrap(), 1000);
        assert_eq!(Complex::new(0, 70000).magnitude().unwrap(), 70000);
    }

    #[test]
    fn test_magnitude_shift_loses_low_bits() {
        // 300 >> 8 == 1, 400 >> 8 == 1: the shifted path rounds coarsely
        let m = Complex::new(300, 400).magnitude().unwrap();
        assert_eq!(m, 1 << SHIFT);
    }

    #[test]
    fn test_magnitude_out_of_range() {
        let huge = Complex::new(i32::MAX, i32::MAX);
        assert!(matches!(
            huge.magnitude(),
            Err(MathError::SquareTooLarge { .. })
        ));
    }

    #[test]
    fn test_from_int_and_display() {
        let z = Complex::from_int(2, -1);
        assert_eq!(z, Complex::new(512, -256));
        assert_eq!(z.to_string(), "(512,-256)");
        let (re, im) = z.to_f64_pair();
        assert_abs_diff_eq!(re, 2.0);
        assert_abs_diff_eq!(im, -1.0);
    }
}
