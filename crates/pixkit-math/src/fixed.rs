//! Fixed-point scale and integer helpers.
//!
//! # Usage
//!
//! ```rust
//! use pixkit_math::{isqrt, to_fixed, SCALE};
//!
//! assert_eq!(to_fixed(1.5), 3 * SCALE / 2);
//! assert_eq!(isqrt(26).unwrap(), 5);
//! ```

use crate::{MathError, MathResult};

/// Number of fractional bits in a scaled integer.
pub const SHIFT: u32 = 8;

/// Fixed-point scale, `2^SHIFT`.
///
/// A component whose magnitude stays within `SCALE` can be squared and
/// summed without overflowing an `i32`.
pub const SCALE: i32 = 1 << SHIFT;

/// Integer square root, rounded down.
///
/// # Errors
///
/// Returns [`MathError::NegativeSqrt`] for negative input.
///
/// # Example
///
/// ```rust
/// use pixkit_math::isqrt;
///
/// assert_eq!(isqrt(0).unwrap(), 0);
/// assert_eq!(isqrt(24).unwrap(), 4);
/// assert_eq!(isqrt(25).unwrap(), 5);
/// assert!(isqrt(-1).is_err());
/// ```
pub fn isqrt(n: i32) -> MathResult<i32> {
    if n < 0 {
        return Err(MathError::NegativeSqrt(n));
    }
    let mut rem = n as u32;
    let mut root = 0u32;
    let mut bit = 1u32 << 30;
    while bit > rem {
        bit >>= 2;
    }
    while bit != 0 {
        if rem >= root + bit {
            rem -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }
    Ok(root as i32)
}

/// Converts a real value to its scaled integer form, truncating toward zero.
#[inline]
pub fn to_fixed(value: f64) -> i32 {
    (value * SCALE as f64) as i32
}

/// Converts a scaled integer back to a real value.
#[inline]
pub fn from_fixed(value: i32) -> f64 {
    value as f64 / SCALE as f64
}
