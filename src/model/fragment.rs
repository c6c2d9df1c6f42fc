use super::{util, Node, Schema};
use derivative::Derivative;
use displaydoc::Display;
use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Cow;
use std::ops::RangeBounds;
use std::sync::Arc;
use thiserror::Error;

/// A fragment represents a node's collection of child nodes.
///
/// Like nodes, fragments are persistent data structures, and you should not mutate them or their
/// content. Rather, you create new instances whenever needed. The children are shared, so cloning
/// a fragment (or a node containing one) does not copy the subtree.
///
/// Fragments are normalized: adjacent text nodes with the same marks are joined and empty text
/// nodes are dropped.
#[derive(Derivative, Deserialize)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
#[serde(bound = "", from = "Vec<S::Node>")]
pub struct Fragment<S: Schema> {
    inner: Arc<Vec<S::Node>>,
    size: usize,
}

/// Error when looking up a position in a fragment
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, Error)]
pub enum IndexError {
    /// Position {pos} outside of fragment of size {size}
    OutOfRange {
        /// The requested position
        pos: usize,
        /// The size of the fragment
        size: usize,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Index {
    pub index: usize,
    pub offset: usize,
}

impl Index {
    pub fn new(index: usize, offset: usize) -> Index {
        Index { index, offset }
    }
}

impl<S: Schema> Fragment<S> {
    /// Create a new empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    fn from_joined(inner: Vec<S::Node>) -> Self {
        let size = inner.iter().map(|n| n.node_size()).sum();
        Fragment {
            inner: Arc::new(inner),
            size,
        }
    }

    /// The size of the fragment, which is the total of the size of its content nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get a slice to all child nodes
    pub fn children(&self) -> &[S::Node] {
        &self.inner[..]
    }

    /// The first child of the fragment wrapped in `Some`, or `None` if it is empty.
    pub fn first_child(&self) -> Option<&S::Node> {
        self.inner.first()
    }

    /// The last child of the fragment wrapped in `Some`, or `None` if it is empty.
    pub fn last_child(&self) -> Option<&S::Node> {
        self.inner.last()
    }

    /// The number of child nodes in this fragment.
    pub fn child_count(&self) -> usize {
        self.inner.len()
    }

    /// Get the child node at the given index, if it exists.
    pub fn child(&self, index: usize) -> Option<&S::Node> {
        self.inner.get(index)
    }

    /// The position of the start of the child at the given index, relative to the start of
    /// this fragment. `index` may be equal to the child count.
    pub fn offset_of(&self, index: usize) -> Option<usize> {
        if index > self.inner.len() {
            return None;
        }
        Some(self.inner[..index].iter().map(|n| n.node_size()).sum())
    }

    /// Create a new fragment containing the combined content of this fragment and the other.
    pub fn append(self, other: Self) -> Self {
        if other.inner.is_empty() {
            return self;
        }
        if self.inner.is_empty() {
            return other;
        }
        let mut inner = Arc::try_unwrap(self.inner).unwrap_or_else(|shared| (*shared).clone());
        inner.reserve(other.inner.len());
        for node in other.inner.iter() {
            push_joined::<S>(&mut inner, node.clone());
        }
        Self::from_joined(inner)
    }

    /// Cut out the sub-fragment between the two given positions.
    pub fn cut<R: RangeBounds<usize>>(&self, range: R) -> Self {
        let from = util::from(&range);
        let to = usize::min(util::to(&range, self.size), self.size);

        if from == 0 && to == self.size {
            return self.clone();
        }

        let mut result = vec![];
        if to > from {
            let mut pos = 0;
            for child in self.inner.iter() {
                if pos >= to {
                    break;
                }
                let end = pos + child.node_size();
                if end > from {
                    let new_child = if pos < from || end > to {
                        if child.is_text() {
                            let start = from.saturating_sub(pos);
                            let end = usize::min(child.node_size(), to - pos);
                            child.cut(start..end)
                        } else {
                            let inner_start = pos + 1;
                            let start = from.saturating_sub(inner_start);
                            let end = usize::min(child.content_size(), to.saturating_sub(inner_start));
                            child.cut(start..end)
                        }
                        .into_owned()
                    } else {
                        child.clone()
                    };
                    push_joined::<S>(&mut result, new_child);
                }
                pos = end;
            }
        }
        Self::from_joined(result)
    }

    /// Create a new fragment in which the node at the given index is replaced by the given node.
    ///
    /// Panics if `index` is out of range.
    pub fn replace_child(&self, index: usize, node: S::Node) -> Cow<Self> {
        let current = &self.inner[index];
        if *current == node {
            Cow::Borrowed(self)
        } else {
            let size = self.size + node.node_size() - current.node_size();
            let mut copy = Vec::with_capacity(self.inner.len());
            copy.extend_from_slice(&self.inner[..index]);
            copy.push(node);
            copy.extend_from_slice(&self.inner[index + 1..]);
            Cow::Owned(Fragment {
                inner: Arc::new(copy),
                size,
            })
        }
    }

    /// Concatenates all the text nodes found in this fragment and its children.
    pub fn text_content(&self) -> String {
        let mut buf = String::new();
        for child in self.inner.iter() {
            buf.push_str(&child.text_content());
        }
        buf
    }

    /// Find the index of the child that contains `pos`, and the offset at which it starts.
    ///
    /// When `round` is set, positions inside of a child are rounded up to the next child.
    pub(crate) fn find_index(&self, pos: usize, round: bool) -> Result<Index, IndexError> {
        if pos == 0 {
            return Ok(Index::new(0, 0));
        }
        if pos == self.size {
            return Ok(Index::new(self.inner.len(), pos));
        }
        if pos > self.size {
            return Err(IndexError::OutOfRange {
                pos,
                size: self.size,
            });
        }
        let mut cur_pos = 0;
        for (i, cur) in self.inner.iter().enumerate() {
            let end = cur_pos + cur.node_size();
            if end >= pos {
                if end == pos || round {
                    return Ok(Index::new(i + 1, end));
                }
                return Ok(Index::new(i, cur_pos));
            }
            cur_pos = end;
        }
        Err(IndexError::OutOfRange {
            pos,
            size: self.size,
        })
    }
}

/// Push a node onto a list of siblings, joining it with the last one if both are text nodes
/// with the same marks. Empty text nodes are skipped.
pub(crate) fn push_joined<S: Schema>(target: &mut Vec<S::Node>, node: S::Node) {
    if let Some(text) = node.text_node() {
        if text.text.len_utf16() == 0 {
            return;
        }
        if let Some(last) = target.last_mut() {
            if let Some(prev) = text.same_markup(last) {
                let joined = prev.with_text(prev.text.join(&text.text));
                *last = S::Node::from(joined);
                return;
            }
        }
    }
    target.push(node);
}

impl<S: Schema> Default for Fragment<S> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Vec::new()),
            size: 0,
        }
    }
}

impl<S: Schema> Serialize for Fragment<S> {
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        self.inner.serialize(serializer)
    }
}

impl<S: Schema> From<Vec<S::Node>> for Fragment<S> {
    fn from(src: Vec<S::Node>) -> Fragment<S> {
        let mut inner = Vec::with_capacity(src.len());
        for node in src {
            push_joined::<S>(&mut inner, node);
        }
        Self::from_joined(inner)
    }
}

impl<S: Schema> From<Fragment<S>> for Vec<S::Node> {
    fn from(src: Fragment<S>) -> Vec<S::Node> {
        Arc::try_unwrap(src.inner).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl<S, A, B> From<(A, B)> for Fragment<S>
where
    S: Schema,
    A: Into<S::Node>,
    B: Into<S::Node>,
{
    fn from((a, b): (A, B)) -> Self {
        Self::from(vec![a.into(), b.into()])
    }
}

impl<S, A> From<(A,)> for Fragment<S>
where
    S: Schema,
    A: Into<S::Node>,
{
    fn from((a,): (A,)) -> Self {
        Self::from(vec![a.into()])
    }
}
