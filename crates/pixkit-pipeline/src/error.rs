//! Error types for stage execution.

use thiserror::Error;

/// Error type for stage and pipeline operations.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A stage was asked for output it does not hold.
    #[error("no result available from stage '{stage}'")]
    NoResultAvailable {
        /// Name of the stage that was empty
        stage: String,
    },

    /// A sequence with no stages received an image.
    #[error("cannot push into a pipeline with no stages")]
    PipelineEmptyPush,

    /// An image operation inside a stage failed.
    #[error(transparent)]
    Image(#[from] pixkit_core::Error),
}

impl PipelineError {
    /// Creates a [`PipelineError::NoResultAvailable`] error.
    #[inline]
    pub fn no_result(stage: impl Into<String>) -> Self {
        Self::NoResultAvailable {
            stage: stage.into(),
        }
    }

    /// Returns `true` if a stage had no buffered output.
    #[inline]
    pub fn is_no_result(&self) -> bool {
        matches!(self, Self::NoResultAvailable { .. })
    }
}

impl From<pixkit_core::MathError> for PipelineError {
    fn from(err: pixkit_core::MathError) -> Self {
        Self::Image(err.into())
    }
}

/// Result type for stage and pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
