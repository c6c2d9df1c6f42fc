//! # Replaying step logs
//!
//! A recorded editing session is a list of steps, each relative to the document produced by the
//! ones before it. [`replay`] folds such a log over a base document, failing on the first step
//! that does not apply.
mod compact;

pub use compact::compact;

use crate::model::Schema;
use crate::transform::{Step, StepError};
use derivative::Derivative;
use displaydoc::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, trace, warn};

/// Options for [`replay_with`]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReplayOptions {
    /// Merge adjacent steps before applying them
    pub compact: bool,
}

/// Step {index} could not be applied: {cause}
#[derive(Derivative, Display, Error)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct ReplayFailure<S: Schema> {
    /// Index of the failing step in the log that was passed in
    pub index: usize,
    /// The failing step
    pub step: Step<S>,
    /// Why the step failed
    #[source]
    pub cause: StepError<S>,
}

/// Apply all `steps` in order, starting at `base`.
pub fn replay<S: Schema>(base: &S::Node, steps: &[Step<S>]) -> Result<S::Node, ReplayFailure<S>> {
    replay_with(base, steps, ReplayOptions::default())
}

/// Apply all `steps` in order, starting from an empty document.
pub fn replay_from_empty<S: Schema>(steps: &[Step<S>]) -> Result<S::Node, ReplayFailure<S>> {
    replay(&S::empty_doc(), steps)
}

/// Apply all `steps` in order, starting at `base`.
///
/// With [`ReplayOptions::compact`], the log is compacted first. Every step of a merged group is
/// still applied on its own, so a failure is reported with the index and step of the original
/// log and the result is the same as without compaction. The merged step is applied to the
/// tree before the group and checked against that result.
#[instrument(skip(base, steps, options), fields(steps = steps.len(), compact = options.compact))]
pub fn replay_with<S: Schema>(
    base: &S::Node,
    steps: &[Step<S>],
    options: ReplayOptions,
) -> Result<S::Node, ReplayFailure<S>> {
    debug!("Replaying step log");
    let groups = if options.compact {
        let groups = compact::compact_indexed(steps);
        debug!(
            before = steps.len(),
            after = groups.len(),
            "Compacted step log"
        );
        groups
    } else {
        compact::singles(steps)
    };

    let mut doc = base.clone();
    for group in groups {
        let mut next = doc.clone();
        for (index, step) in group.range.clone().zip(&steps[group.range.clone()]) {
            next = apply_step(&next, index, step)?;
        }
        if group.range.len() > 1 {
            check_merged(&doc, &next, &group);
        }
        doc = next;
    }
    debug!("Replay complete");
    Ok(doc)
}

fn check_merged<S: Schema>(before: &S::Node, expected: &S::Node, group: &compact::Group<S>) {
    let first = group.range.start;
    let last = group.range.end - 1;
    match group.step.apply(before) {
        Ok(merged) if merged == *expected => trace!(first, last, "Merged step agrees"),
        Ok(_) => warn!(first, last, "Merged step yields a different document"),
        Err(cause) => warn!(first, last, %cause, "Merged step failed where its steps apply"),
    }
}

fn apply_step<S: Schema>(
    doc: &S::Node,
    index: usize,
    step: &Step<S>,
) -> Result<S::Node, ReplayFailure<S>> {
    match step.apply(doc) {
        Ok(next) => {
            trace!(
                index,
                from = step.start(),
                to = step.end(),
                structural = step.is_structural(),
                "Applied step"
            );
            Ok(next)
        }
        Err(cause) => {
            warn!(index, %cause, "Step failed");
            Err(ReplayFailure {
                index,
                step: step.clone(),
                cause,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{replay, replay_from_empty, replay_with, ReplayFailure, ReplayOptions};
    use crate::article::{helper::*, Article, ArticleNode, ArticleNodeType};
    use crate::model::{Fragment, ReplaceError, Schema, Slice};
    use crate::transform::{ReplaceStep, Step, StepError};

    fn insert(pos: usize, text: &str) -> Step<Article> {
        Step::from(ReplaceStep::new(
            pos,
            pos,
            Slice::new(Fragment::from(text), 0, 0),
        ))
    }

    fn empty() -> ArticleNode {
        Article::empty_doc()
    }

    fn skeleton() -> Step<Article> {
        Step::from(ReplaceStep::new(
            0,
            0,
            Slice::new(Fragment::from(body(p(""))), 0, 0),
        ))
    }

    #[test]
    fn test_empty_log() {
        assert_eq!(replay_from_empty::<Article>(&[]), Ok(empty()));
    }

    #[test]
    fn test_fails_fast() {
        let steps = vec![skeleton(), insert(2, "ab"), insert(9, "x"), insert(2, "y")];
        let expected = ReplayFailure {
            index: 2,
            step: insert(9, "x"),
            cause: StepError::OutOfRange { pos: 9, size: 6 },
        };
        assert_eq!(replay_from_empty(&steps), Err(expected.clone()));
        assert_eq!(
            replay_with(&empty(), &steps, ReplayOptions { compact: true }),
            Err(expected)
        );
    }

    #[test]
    fn test_compact_reports_original_index() {
        let steps = vec![
            skeleton(),
            insert(2, "ab"),
            Step::from(ReplaceStep::delete(4, 60)),
        ];
        let expected = ReplayFailure {
            index: 2,
            step: Step::from(ReplaceStep::delete(4, 60)),
            cause: StepError::OutOfRange { pos: 60, size: 6 },
        };
        assert_eq!(
            replay_with(&empty(), &steps, ReplayOptions { compact: true }),
            Err(expected.clone())
        );
        assert_eq!(replay(&empty(), &steps), Err(expected));
    }

    #[test]
    fn test_compact_matches_stepwise() {
        let steps = vec![skeleton(), insert(2, "ab"), insert(4, "c"), insert(2, "x")];
        assert_eq!(
            replay_with(&empty(), &steps, ReplayOptions { compact: true }),
            replay(&empty(), &steps)
        );
        assert_eq!(replay(&empty(), &steps), Ok(doc(body(p("xabc")))));
    }

    #[test]
    fn test_merged_step_does_not_hide_invalid_step() {
        let base = doc(body(p("ab")));
        let delete = Step::<Article>::from(ReplaceStep::delete(1, 5));
        let paragraph = Step::<Article>::from(ReplaceStep::new(
            1,
            1,
            Slice::new(Fragment::from(p("x")), 0, 0),
        ));
        let steps = vec![delete.clone(), paragraph.clone()];

        let merged = delete.merge(&paragraph).unwrap();
        assert_eq!(merged.apply(&base), Ok(doc(body(p("x")))));

        let expected = ReplayFailure {
            index: 0,
            step: delete,
            cause: StepError::InvalidStructure(ReplaceError::InvalidContent(
                ArticleNodeType::Body,
            )),
        };
        assert_eq!(replay(&base, &steps), Err(expected.clone()));
        assert_eq!(
            replay_with(&base, &steps, ReplayOptions { compact: true }),
            Err(expected)
        );
    }
}
