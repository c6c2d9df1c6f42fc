use super::{Span, StepError, StepKind, StepResult};
use crate::model::{Node, Schema, Slice};
use derivative::Derivative;
use serde::{Deserialize, Serialize};

/// Replace some part of the document
///
/// Covers insertion (`from == to`), deletion (an empty slice) and replacement alike.
#[derive(Derivative, Deserialize, Serialize)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
#[serde(bound = "", rename_all = "camelCase")]
pub struct ReplaceStep<S: Schema> {
    /// The affected span
    #[serde(flatten)]
    pub span: Span,
    /// The slice to replace the current content with
    #[serde(default)]
    pub slice: Slice<S>,
    /// Whether this is a structural change
    #[serde(default, alias = "structural")]
    pub structure: bool,
}

impl<S: Schema> ReplaceStep<S> {
    /// Create a new step that replaces `from..to` with `slice`
    pub fn new(from: usize, to: usize, slice: Slice<S>) -> Self {
        Self {
            span: Span::new(from, to),
            slice,
            structure: false,
        }
    }

    /// Create a new step that deletes `from..to`
    pub fn delete(from: usize, to: usize) -> Self {
        Self::new(from, to, Slice::default())
    }

    /// Mark this step as a structural change
    pub fn structural(self) -> Self {
        Self {
            structure: true,
            ..self
        }
    }
}

impl<S: Schema> StepKind<S> for ReplaceStep<S> {
    fn apply(&self, doc: &S::Node) -> StepResult<S> {
        let Span { from, to } = self.span;
        let size = doc.content_size();
        if let Some(pos) = [from, to].iter().copied().find(|&pos| pos > size) {
            return Err(StepError::OutOfRange { pos, size });
        }
        if from > to {
            return Err(StepError::InvertedRange { from, to });
        }
        let node = doc.replace(from..to, &self.slice)?;
        Ok(node)
    }

    fn merge(&self, other: &Self) -> Option<Self> {
        if self.structure || other.structure || self.span.from > self.span.to {
            return None;
        }
        if other.span.from > other.span.to {
            return None;
        }

        if self.span.from + self.slice.size() == other.span.from
            && self.slice.open_end == 0
            && other.slice.open_start == 0
        {
            // `other` continues right after the content inserted by `self`
            let slice = if self.slice.size() + other.slice.size() == 0 {
                Slice::default()
            } else {
                Slice::new(
                    self.slice.content.clone().append(other.slice.content.clone()),
                    self.slice.open_start,
                    other.slice.open_end,
                )
            };
            let to = self.span.to + other.span.len();
            Some(Self::new(self.span.from, to, slice))
        } else if other.span.to == self.span.from
            && self.slice.open_start == 0
            && other.slice.open_end == 0
        {
            // `other` ends where `self` started
            let slice = if self.slice.size() + other.slice.size() == 0 {
                Slice::default()
            } else {
                Slice::new(
                    other.slice.content.clone().append(self.slice.content.clone()),
                    other.slice.open_start,
                    self.slice.open_end,
                )
            };
            Some(Self::new(other.span.from, self.span.to, slice))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ReplaceStep;
    use crate::article::{helper::*, Article, ArticleNode, ArticleNodeType};
    use crate::model::{Fragment, Node, ReplaceError, Slice};
    use crate::transform::{StepError, StepKind};

    type Step = ReplaceStep<Article>;

    fn text(from: usize, to: usize, text: &str) -> Step {
        Step::new(from, to, Slice::new(Fragment::from(text), 0, 0))
    }

    fn hello() -> ArticleNode {
        doc(body(p("Hello")))
    }

    fn merge_and_compare(a: &Step, b: &Step) -> Step {
        let merged = a.merge(b).expect("steps should merge");
        let doc = hello();
        let stepwise = b.apply(&a.apply(&doc).unwrap()).unwrap();
        assert_eq!(merged.apply(&doc).unwrap(), stepwise);
        merged
    }

    #[test]
    fn merges_typing() {
        let merged = merge_and_compare(&text(2, 2, "Hi"), &text(4, 4, " there"));
        assert_eq!(merged, text(2, 2, "Hi there"));
        assert_eq!(
            merged.apply(&hello()),
            Ok(doc(body(p("Hi thereHello"))))
        );
    }

    #[test]
    fn merges_replacement_before() {
        let merged = merge_and_compare(&text(4, 4, "X"), &text(2, 4, "Y"));
        assert_eq!(merged, text(2, 4, "YX"));
    }

    #[test]
    fn merges_backspace() {
        let merged = merge_and_compare(&Step::delete(6, 7), &Step::delete(5, 6));
        assert_eq!(merged, Step::delete(5, 7));
        assert_eq!(merged.slice, Slice::default());
    }

    #[test]
    fn merges_overwrite() {
        let merged = merge_and_compare(&text(2, 3, "J"), &text(3, 5, "ojo"));
        assert_eq!(merged, text(2, 5, "Jojo"));
    }

    #[test]
    fn does_not_merge_apart() {
        assert_eq!(text(2, 2, "Hi").merge(&text(7, 7, "!")), None);
        assert_eq!(Step::delete(2, 3).merge(&Step::delete(4, 5)), None);
    }

    #[test]
    fn does_not_merge_structural() {
        let a = text(2, 2, "Hi");
        let b = text(4, 4, "!").structural();
        assert_eq!(a.merge(&b), None);
        assert_eq!(b.merge(&a), None);
        assert_eq!(a.clone().structural().merge(&a), None);
    }

    #[test]
    fn does_not_merge_open_slices() {
        let split = Step::new(4, 4, Slice::new(Fragment::from((p(""), p(""))), 1, 1));
        assert_eq!(split.merge(&text(6, 6, "x")), None);
    }

    #[test]
    fn no_op_is_identity() {
        let doc = hello();
        for pos in 0..=doc.content_size() {
            if let Ok(result) = Step::delete(pos, pos).apply(&doc) {
                assert_eq!(result, doc);
            }
        }
    }

    #[test]
    fn rejects_out_of_range() {
        let doc = hello();
        assert_eq!(
            Step::delete(0, 100).apply(&doc),
            Err(StepError::OutOfRange { pos: 100, size: 9 })
        );
        assert_eq!(
            text(10, 10, "x").apply(&doc),
            Err(StepError::OutOfRange { pos: 10, size: 9 })
        );
    }

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            Step::delete(5, 3).apply(&hello()),
            Err(StepError::InvertedRange { from: 5, to: 3 })
        );
    }

    #[test]
    fn rejects_invalid_structure() {
        let step = Step::new(0, 0, Slice::new(Fragment::from(p("x")), 0, 0));
        assert_eq!(
            step.apply(&hello()),
            Err(StepError::InvalidStructure(ReplaceError::InvalidContent(
                ArticleNodeType::Doc
            )))
        );
    }

    #[test]
    fn keeps_atoms_whole() {
        let d = doc(body((p("ab"), code_block("xyz"))));
        assert_eq!(
            Step::delete(3, 7).apply(&d),
            Err(StepError::InvalidStructure(ReplaceError::CrossesAtom(
                ArticleNodeType::CodeBlock
            )))
        );
        assert_eq!(
            Step::delete(6, 8).apply(&d),
            Ok(doc(body((p("ab"), code_block("z")))))
        );
        assert_eq!(Step::delete(5, 10).apply(&d), Ok(doc(body(p("ab")))));
    }
}
