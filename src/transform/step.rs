use crate::model::{ReplaceError, Schema};
use derivative::Derivative;
use displaydoc::Display;
use thiserror::Error;

/// Different ways a step application can fail
#[derive(Derivative, Display, Error)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub enum StepError<S: Schema> {
    /// Position {pos} is outside of the document (size {size})
    OutOfRange {
        /// The offending position
        pos: usize,
        /// The content size of the document
        size: usize,
    },
    /// Range start {from} lies after its end {to}
    InvertedRange {
        /// Start of the range
        from: usize,
        /// End of the range
        to: usize,
    },
    /// Invalid structure: {0}
    InvalidStructure(#[from] ReplaceError<S>),
}

/// The result of [applying](StepKind::apply) a step. Contains either a
/// new document or a failure value.
#[allow(type_alias_bounds)]
pub type StepResult<S: Schema> = Result<S::Node, StepError<S>>;

/// A step object represents an atomic change.
///
/// It generally applies only to the document it was created for, since the positions
/// stored in it will only make sense for that document.
pub trait StepKind<S: Schema>: Sized {
    /// Applies this step to the given document, returning a result
    /// object that either indicates failure, if the step can not be
    /// applied to this document, or indicates success by containing a
    /// transformed document.
    fn apply(&self, doc: &S::Node) -> StepResult<S>;

    /// Try to merge this step with another one, to be applied directly after it. Returns the
    /// merged step when possible, `None` if the steps can't be merged.
    fn merge(&self, other: &Self) -> Option<Self>;
}
