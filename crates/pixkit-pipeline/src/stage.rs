//! The stage state machine.
//!
//! A stage holds at most one output image:
//!
//! ```text
//!            push (ok)             pop
//!   EMPTY ─────────────► READY ─────────► EMPTY
//!     │                    │
//!     │ push (err)         │ push (ok): output replaced
//!     ▼                    ▼ push (err): output kept
//!   EMPTY                READY
//! ```
//!
//! [`OutputSlot::set`] is the only way to leave `EMPTY`. Stages that compute
//! one output from one input implement [`Transform`] and get the slot
//! handling from [`Buffered`].
//!
//! # Usage
//!
//! ```rust
//! use pixkit_core::{Gray8Image, Image};
//! use pixkit_pipeline::{Identity, Stage, Transform};
//!
//! let mut stage = Identity.into_stage();
//! assert!(stage.is_empty());
//!
//! stage.push(Gray8Image::new(2, 2).unwrap().into()).unwrap();
//! assert!(!stage.is_empty());
//!
//! let out: Image = stage.pop().unwrap();
//! assert_eq!(out.dimensions(), (2, 2));
//! assert!(stage.pop().unwrap_err().is_no_result());
//! ```

use pixkit_core::Image;
use tracing::{debug, trace};

use crate::{PipelineError, PipelineResult};

/// A synchronous, single-slot image processing step.
pub trait Stage: Send {
    /// Short name, used in errors and descriptions.
    fn name(&self) -> &str;

    /// Human-readable structure of the stage.
    fn describe(&self) -> String {
        self.name().to_string()
    }

    /// Processes `image` and buffers the result.
    ///
    /// On error nothing is published and the stage keeps its previous state.
    fn push(&mut self, image: Image) -> PipelineResult<()>;

    /// Returns `true` if no output is buffered.
    fn is_empty(&self) -> bool;

    /// Takes the buffered output.
    ///
    /// # Errors
    ///
    /// [`PipelineError::NoResultAvailable`] if the stage is empty. The
    /// state is unchanged in that case.
    fn pop(&mut self) -> PipelineResult<Image>;
}

impl<S: Stage + ?Sized> Stage for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn push(&mut self, image: Image) -> PipelineResult<()> {
        (**self).push(image)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn pop(&mut self) -> PipelineResult<Image> {
        (**self).pop()
    }
}

/// Single-image output buffer.
#[derive(Debug, Default, Clone)]
pub struct OutputSlot {
    output: Option<Image>,
}

impl OutputSlot {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `image`, replacing any output still buffered.
    pub fn set(&mut self, image: Image) {
        if let Some(old) = self.output.replace(image) {
            debug!(discarded = %old, "output replaced before pop");
        }
    }

    /// Takes the stored image, naming `stage` in the error if there is none.
    pub fn take(&mut self, stage: &str) -> PipelineResult<Image> {
        self.output
            .take()
            .ok_or_else(|| PipelineError::no_result(stage))
    }

    /// The stored image, if any.
    pub fn peek(&self) -> Option<&Image> {
        self.output.as_ref()
    }

    /// Returns `true` if nothing is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.output.is_none()
    }
}

/// A computation of one output image from one input image.
pub trait Transform: Send {
    /// Short name, used in errors and descriptions.
    fn name(&self) -> &str;

    /// Computes the output for `image`.
    fn apply(&mut self, image: Image) -> PipelineResult<Image>;

    /// Wraps the transform in an output slot so it can run as a [`Stage`].
    fn into_stage(self) -> Buffered<Self>
    where
        Self: Sized,
    {
        Buffered::new(self)
    }
}

/// Runs a [`Transform`] as a [`Stage`].
#[derive(Debug, Clone)]
pub struct Buffered<T> {
    transform: T,
    slot: OutputSlot,
}

impl<T: Transform> Buffered<T> {
    /// Wraps `transform` with an empty slot.
    pub fn new(transform: T) -> Self {
        Self {
            transform,
            slot: OutputSlot::new(),
        }
    }

    /// The wrapped transform.
    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Mutable access to the wrapped transform.
    pub fn transform_mut(&mut self) -> &mut T {
        &mut self.transform
    }

    /// The buffered output, if any.
    pub fn peek(&self) -> Option<&Image> {
        self.slot.peek()
    }
}

impl<T: Transform> Stage for Buffered<T> {
    fn name(&self) -> &str {
        self.transform.name()
    }

    fn push(&mut self, image: Image) -> PipelineResult<()> {
        trace!(stage = self.transform.name(), input = %image, "push");
        let output = self.transform.apply(image)?;
        self.slot.set(output);
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.slot.is_empty()
    }

    fn pop(&mut self) -> PipelineResult<Image> {
        self.slot.take(self.transform.name())
    }
}

impl<T: Transform> From<T> for Buffered<T> {
    fn from(transform: T) -> Self {
        Self::new(transform)
    }
}
