//! Error types for fixed-point arithmetic.

use thiserror::Error;

/// Errors raised when a fixed-point operation would leave the safe range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// Scalar division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The divisor's squared magnitude vanished, so the quotient is unbounded.
    #[error("product too large: divisor has zero magnitude after scaling")]
    ProductTooLarge,

    /// A component exceeds the scale, so squaring it could overflow.
    #[error("square too large: ({re}, {im}) exceeds scale {scale}")]
    SquareTooLarge {
        /// Real component
        re: i32,
        /// Imaginary component
        im: i32,
        /// The fixed-point scale that bounds each component
        scale: i32,
    },

    /// Square root of a negative number.
    #[error("square root of negative value {0}")]
    NegativeSqrt(i32),
}

impl MathError {
    /// Returns `true` for range failures (everything except division by zero).
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::ProductTooLarge | Self::SquareTooLarge { .. } | Self::NegativeSqrt(_)
        )
    }
}

/// Result type for fixed-point operations.
pub type MathResult<T> = Result<T, MathError>;
