//! # pixkit-pipeline
//!
//! Stage execution engine for pixkit images.
//!
//! Every processing step is a [`Stage`]: it accepts an [`Image`] through
//! `push`, buffers exactly one output, and hands it back through `pop`.
//! Stages compose:
//!
//! - [`Sequence`] - Chains stages, feeding each output into the next
//! - [`Ladder`] - Runs two stages on one input and joins their outputs
//!
//! # Example
//!
//! ```rust
//! use pixkit_core::{Gray32Image, Rect, UNMASKED, Gray8Image};
//! use pixkit_pipeline::{ApplyMask, Crop, Fill, Sequence, Stage, Transform};
//!
//! let mask = Gray8Image::filled(4, 4, UNMASKED).unwrap();
//!
//! let mut seq = Sequence::new()
//!     .then(Fill::gray32(Rect::new(1, 1, 2, 2), 9).into_stage())
//!     .then(Crop::new(Rect::new(1, 1, 2, 2)).into_stage());
//! seq.push(Gray32Image::new(4, 4).unwrap().into())?;
//!
//! let tile = seq.pop()?;
//! let tile = tile.expect_offset_gray32()?;
//! assert_eq!(tile.offset(), (1, 1));
//! assert!(tile.image().data().iter().all(|&v| v == 9));
//!
//! let mut masker = ApplyMask::new(mask).into_stage();
//! masker.push(Gray32Image::new(4, 4).unwrap().into())?;
//! assert!(masker.pop()?.is_masked());
//! # Ok::<(), pixkit_pipeline::PipelineError>(())
//! ```
//!
//! # Execution Model
//!
//! Everything is synchronous and single-threaded. Stage methods take
//! `&mut self`, so exclusive access is checked at compile time. Stages
//! are `Send` and may be moved to another thread, but nothing here
//! spawns one.
//!
//! # Dependencies
//!
//! - [`pixkit_core`] - Image data model
//! - [`thiserror`] - Error derive
//! - [`tracing`] - Diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod ladder;
pub mod sequence;
pub mod stage;
pub mod stages;

pub use error::{PipelineError, PipelineResult};
pub use ladder::{Join, KeepLeft, Ladder};
pub use sequence::Sequence;
pub use stage::{Buffered, OutputSlot, Stage, Transform};
pub use stages::{ApplyMask, Crop, Fill, FillValue, FnStage, Identity};

#[doc(no_inline)]
pub use pixkit_core::Image;
