//! Two-branch stages.
//!
//! A [`Ladder`] feeds the same input to two stages and combines their
//! outputs with a [`Join`]:
//!
//! ```text
//!          ┌──► left ──┐
//! input ───┤           ├──► join ──► output
//!          └──► right ─┘
//! ```
//!
//! Any closure `FnMut(Image, Image) -> PipelineResult<Image>` is a `Join`.

use pixkit_core::Image;
use tracing::trace;

use crate::{OutputSlot, PipelineResult, Stage};

const NAME: &str = "Ladder";

/// Combines the outputs of the two branches of a [`Ladder`].
pub trait Join: Send {
    /// Produces one image from the left and right branch outputs.
    fn join(&mut self, left: Image, right: Image) -> PipelineResult<Image>;
}

impl<F> Join for F
where
    F: FnMut(Image, Image) -> PipelineResult<Image> + Send,
{
    fn join(&mut self, left: Image, right: Image) -> PipelineResult<Image> {
        self(left, right)
    }
}

/// Keeps the left output and drops the right one.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepLeft;

impl Join for KeepLeft {
    fn join(&mut self, left: Image, _right: Image) -> PipelineResult<Image> {
        Ok(left)
    }
}

/// Two stages run on the same input, joined into one output.
pub struct Ladder {
    left: Box<dyn Stage>,
    right: Box<dyn Stage>,
    join: Box<dyn Join>,
    slot: OutputSlot,
}

impl Ladder {
    /// Builds a ladder from two branches and a join.
    pub fn new(
        left: impl Stage + 'static,
        right: impl Stage + 'static,
        join: impl Join + 'static,
    ) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
            join: Box::new(join),
            slot: OutputSlot::new(),
        }
    }

    /// The left branch.
    pub fn left(&self) -> &dyn Stage {
        self.left.as_ref()
    }

    /// The right branch.
    pub fn right(&self) -> &dyn Stage {
        self.right.as_ref()
    }
}

impl Stage for Ladder {
    fn name(&self) -> &str {
        NAME
    }

    fn describe(&self) -> String {
        format!("[{} | {}]", self.left.describe(), self.right.describe())
    }

    // A failure in the right branch leaves the left branch holding its output.
    fn push(&mut self, image: Image) -> PipelineResult<()> {
        trace!(input = %image, "ladder push");
        self.left.push(image.clone())?;
        self.right.push(image)?;
        let a = self.left.pop()?;
        let b = self.right.pop()?;
        let out = self.join.join(a, b)?;
        self.slot.set(out);
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.slot.is_empty()
    }

    fn pop(&mut self) -> PipelineResult<Image> {
        self.slot.take(NAME)
    }
}

impl std::fmt::Debug for Ladder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ladder")
            .field("left", &self.left.describe())
            .field("right", &self.right.describe())
            .field("ready", &!self.slot.is_empty())
            .finish()
    }
}
