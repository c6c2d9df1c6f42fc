use super::{Fragment, Node, Schema};
use derivative::Derivative;
use serde::{Deserialize, Serialize};

/// A slice represents a piece cut out of a larger document. It stores not only a fragment, but
/// also the depth up to which nodes on both side are ‘open’ (cut through).
#[derive(Derivative, Deserialize, Serialize)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Default(bound = "")
)]
#[serde(bound = "", rename_all = "camelCase")]
pub struct Slice<S: Schema> {
    /// The slice's content.
    #[serde(default)]
    pub content: Fragment<S>,
    /// The open depth at the start.
    #[serde(default)]
    pub open_start: usize,
    /// The open depth at the end.
    #[serde(default)]
    pub open_end: usize,
}

impl<S: Schema> Slice<S> {
    /// Create a slice. When specifying a non-zero open depth, you must
    /// make sure that there are nodes of at least that depth at the
    /// appropriate side of the fragment, i.e. if the fragment is an empty
    /// paragraph node, `open_start` and `open_end` can't be greater than 1.
    pub fn new(content: Fragment<S>, open_start: usize, open_end: usize) -> Slice<S> {
        Slice {
            content,
            open_start,
            open_end,
        }
    }

    /// The size this slice would add when inserted into a document.
    pub fn size(&self) -> usize {
        self.content
            .size()
            .saturating_sub(self.open_start + self.open_end)
    }

    /// True for a slice without content, i.e. one that only deletes.
    pub fn is_empty(&self) -> bool {
        self.content.size() == 0
    }

    /// Whether both open depths are backed by nodes at the edges of the content.
    pub(crate) fn fits_open_depths(&self) -> bool {
        self.open_start <= edge_depth(&self.content, Fragment::first_child)
            && self.open_end <= edge_depth(&self.content, Fragment::last_child)
    }
}

fn edge_depth<S: Schema>(
    fragment: &Fragment<S>,
    edge: fn(&Fragment<S>) -> Option<&S::Node>,
) -> usize {
    let mut depth = 0;
    let mut current = fragment;
    while let Some(content) = edge(current).and_then(Node::content) {
        depth += 1;
        current = content;
    }
    depth
}
