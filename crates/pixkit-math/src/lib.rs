//! # pixkit-math
//!
//! Fixed-point math used as the numeric substrate of pixkit transforms.
//!
//! This crate provides:
//!
//! - [`Complex`] - Complex number stored as two scaled `i32` components
//! - [`SHIFT`], [`SCALE`] - The fixed-point scale shared by every transform
//! - [`isqrt`] - Integer square root
//!
//! # Fixed-Point Contract
//!
//! Real values are stored pre-multiplied by `SCALE = 2^SHIFT`. Every
//! multiplicative operation risks overflowing the 32-bit range once the
//! operands approach `SCALE`, so the magnitude and division routines shift
//! their operands right by `SHIFT` first and compensate afterwards:
//!
//! ```rust
//! use pixkit_math::{Complex, SCALE};
//!
//! let z = Complex::new(3 * SCALE, 4 * SCALE);
//! assert_eq!(z.magnitude().unwrap(), 5 * SCALE);
//! ```
//!
//! Transform stages that consume this crate depend on the exact shift
//! amounts and order of operations, so results are reproducible bit for bit.
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error derive
//!
//! # Used By
//!
//! - `pixkit-core` - `Complex32Image` pixel element

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod complex;
mod error;
mod fixed;

pub use complex::*;
pub use error::{MathError, MathResult};
pub use fixed::*;
