//! # The document transformations
//!
//! Every change to a document is expressed as a [`Step`]. There is a single kind of step,
//! [`ReplaceStep`], which covers insertion, deletion and replacement of content.
mod replace_step;
mod step;
mod util;

pub use replace_step::ReplaceStep;
pub use step::{StepError, StepKind, StepResult};
pub use util::Span;

use crate::model::Schema;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

/// A list of steps
#[allow(type_alias_bounds)]
pub type Steps<S: Schema> = Vec<Step<S>>;

/// Steps that can be applied on a document
#[derive(Derivative, Deserialize, Serialize)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
#[serde(bound = "", tag = "stepType", rename_all = "camelCase")]
pub enum Step<S: Schema> {
    /// Replace some content
    Replace(ReplaceStep<S>),
}

impl<S: Schema> Step<S> {
    /// Apply the step to the given node
    pub fn apply(&self, doc: &S::Node) -> StepResult<S> {
        match self {
            Self::Replace(r_step) => r_step.apply(doc),
        }
    }

    /// Merge this step with the one that follows it, if both can be expressed as a single step
    pub fn merge(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (Self::Replace(a), Self::Replace(b)) => a.merge(b).map(Self::Replace),
        }
    }

    /// The span of the document this step applies to
    pub fn span(&self) -> Span {
        match self {
            Self::Replace(r_step) => r_step.span,
        }
    }

    /// Start of the affected range
    pub fn start(&self) -> usize {
        self.span().from
    }

    /// End of the affected range
    pub fn end(&self) -> usize {
        self.span().to
    }

    /// Whether the step was marked as a structural change
    pub fn is_structural(&self) -> bool {
        match self {
            Self::Replace(r_step) => r_step.structure,
        }
    }
}

impl<S: Schema> From<ReplaceStep<S>> for Step<S> {
    fn from(step: ReplaceStep<S>) -> Self {
        Self::Replace(step)
    }
}
