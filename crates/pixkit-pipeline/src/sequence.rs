//! Ordered chains of stages.
//!
//! A [`Sequence`] pushes its input into the first stage, pops that stage's
//! output, pushes it into the second stage and so on. The last stage keeps
//! its output buffered, and the sequence's own `is_empty`/`pop` read it.
//! Because a `Sequence` is itself a [`Stage`], sequences nest.
//!
//! ```rust
//! use pixkit_core::{Gray8Image, Rect};
//! use pixkit_pipeline::{Fill, Identity, Sequence, Stage, Transform};
//!
//! let mut seq = Sequence::new()
//!     .then(Identity.into_stage())
//!     .then(Fill::gray8(Rect::new(0, 0, 1, 1), 7).into_stage());
//! assert_eq!(seq.describe(), "(Identity Fill)");
//!
//! seq.push(Gray8Image::new(2, 2).unwrap().into()).unwrap();
//! let out = seq.pop().unwrap();
//! assert_eq!(out.expect_gray8().unwrap().pixel(0, 0), 7);
//! ```
//!
//! A failure anywhere aborts the chained push. Stages before the failing
//! one have already been popped; the failing stage and those after it keep
//! whatever they held before.

use pixkit_core::Image;
use tracing::{debug, trace};

use crate::{PipelineError, PipelineResult, Stage};

const NAME: &str = "Sequence";

/// A chain of stages that is itself a stage.
#[derive(Default)]
pub struct Sequence {
    stages: Vec<Box<dyn Stage>>,
}

impl Sequence {
    /// A sequence with no stages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `stage` to the end of the chain.
    pub fn append(&mut self, stage: impl Stage + 'static) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Builder form of [`append`](Self::append).
    pub fn then(mut self, stage: impl Stage + 'static) -> Self {
        self.append(stage);
        self
    }

    /// Number of stages.
    #[inline]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the chain has no stages.
    ///
    /// Not to be confused with [`Stage::is_empty`], which reports whether
    /// output is buffered.
    #[inline]
    pub fn has_no_stages(&self) -> bool {
        self.stages.is_empty()
    }

    /// Names of the stages, in order.
    pub fn stage_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.stages.iter().map(|s| s.name())
    }
}

/// Renders descriptions as right-nested pairs: `(A (B C))`.
fn nest(parts: &[String]) -> String {
    match parts {
        [] => "()".to_string(),
        [only] => format!("({})", only),
        [a, b] => format!("({} {})", a, b),
        [first, rest @ ..] => format!("({} {})", first, nest(rest)),
    }
}

impl Stage for Sequence {
    fn name(&self) -> &str {
        NAME
    }

    fn describe(&self) -> String {
        let parts: Vec<String> = self.stages.iter().map(|s| s.describe()).collect();
        nest(&parts)
    }

    fn push(&mut self, image: Image) -> PipelineResult<()> {
        let Some((last, init)) = self.stages.split_last_mut() else {
            return Err(PipelineError::PipelineEmptyPush);
        };
        debug!(stages = init.len() + 1, input = %image, "sequence push");

        let mut current = image;
        for stage in init.iter_mut() {
            stage.push(current)?;
            if stage.is_empty() {
                return Err(PipelineError::no_result(stage.name()));
            }
            current = stage.pop()?;
            trace!(stage = stage.name(), output = %current, "forwarded");
        }
        last.push(current)?;
        if last.is_empty() {
            return Err(PipelineError::no_result(last.name()));
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.stages.last().is_none_or(|s| s.is_empty())
    }

    fn pop(&mut self) -> PipelineResult<Image> {
        match self.stages.last_mut() {
            Some(stage) => stage.pop(),
            None => Err(PipelineError::no_result(NAME)),
        }
    }
}

impl std::fmt::Debug for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequence")
            .field("stages", &self.describe())
            .finish()
    }
}
