use super::{fragment::IndexError, Fragment, Index, Node, Schema};
use derivative::Derivative;
use displaydoc::Display;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Errors at `resolve`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, Error)]
pub enum ResolveErr {
    /// Position {pos} out of range (document size {size})
    RangeError {
        /// The position that was out of range
        pos: usize,
        /// The size of the document content
        size: usize,
    },
    /// Position {pos} points into the middle of a character
    SplitsCharacter {
        /// The offending position
        pos: usize,
    },
    /// Location does not exist in the document (at depth {depth})
    InvalidLocation {
        /// The depth at which the location could not be followed
        depth: usize,
    },
    /// Index error
    Index(#[from] IndexError),
}

/// A location in the tree: the child index taken at each depth, and an offset into a text node.
///
/// The last entry of `path` is the index into the innermost parent, i.e. the index of the child
/// the position is directly in front of (or, with a non-zero `text_offset`, inside of).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Child indices from the root down to the innermost parent
    pub path: Vec<usize>,
    /// Offset into a text node, `0` if the position is between nodes
    #[serde(default)]
    pub text_offset: usize,
}

#[derive(Derivative, new)]
#[derivative(PartialEq(bound = ""), Eq(bound = ""))]
/// A node in the resolution path
pub struct ResolvedNode<'a, S: Schema> {
    /// Reference to the node
    pub node: &'a S::Node,
    /// Index of the child the path continues into
    pub index: usize,
    /// Offset immediately before that child
    pub before: usize,
}

impl<'a, S: Schema> Clone for ResolvedNode<'a, S> {
    fn clone(&self) -> Self {
        Self {
            node: self.node,
            index: self.index,
            before: self.before,
        }
    }
}

impl<'a, S: Schema> fmt::Debug for ResolvedNode<'a, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedNode")
            .field("node.type", &self.node.r#type())
            .field("index", &self.index)
            .field("before", &self.before)
            .finish()
    }
}

/// You can resolve a position to get more information about it. Objects of this class represent
/// such a resolved position, providing various pieces of context information, and some helper
/// methods.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct ResolvedPos<'a, S: Schema> {
    pub(crate) pos: usize,
    path: Vec<ResolvedNode<'a, S>>,
    pub(crate) parent_offset: usize,
    pub(crate) depth: usize,
}

impl<'a, S: Schema> ResolvedPos<'a, S> {
    pub(crate) fn new(pos: usize, path: Vec<ResolvedNode<'a, S>>, parent_offset: usize) -> Self {
        Self {
            depth: path.len() - 1,
            pos,
            path,
            parent_offset,
        }
    }

    /// The position that was resolved
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The number of levels the parent node is from the root. If this position points directly
    /// into the root node, it is 0. If it points into a top-level paragraph, 1, and so on.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The offset this position has into its parent node.
    pub fn parent_offset(&self) -> usize {
        self.parent_offset
    }

    /// The parent node that the position points into. Note that even if
    /// a position points into a text node, that node is not considered
    /// the parent: text nodes are ‘flat’ in this model, and have no content.
    pub fn parent(&self) -> &'a S::Node {
        self.node(self.depth)
    }

    /// The root node in which the position was resolved.
    pub fn doc(&self) -> &'a S::Node {
        self.node(0)
    }

    /// The ancestor node at the given level. `p.node(p.depth)` is the same as `p.parent()`.
    pub fn node(&self, depth: usize) -> &'a S::Node {
        self.path[depth].node
    }

    /// The index into the ancestor at the given level. If this points at the 3rd node in the
    /// 2nd paragraph on the top level, for example, `p.index(0)` is 1 and `p.index(1)` is 2.
    pub fn index(&self, depth: usize) -> usize {
        self.path[depth].index
    }

    /// The index pointing after this position into the ancestor at the given level.
    pub fn index_after(&self, depth: usize) -> usize {
        let index = self.index(depth);
        if depth == self.depth && self.text_offset() == 0 {
            index
        } else {
            index + 1
        }
    }

    /// The (absolute) position at the start of the node at the given level.
    pub fn start(&self, depth: usize) -> usize {
        if depth == 0 {
            0
        } else {
            self.path[depth - 1].before + 1
        }
    }

    /// The (absolute) position at the end of the node at the given level.
    pub fn end(&self, depth: usize) -> usize {
        self.start(depth) + self.node(depth).content_size()
    }

    /// The (absolute) position directly before the wrapping node at the given level, or, when
    /// depth is `self.depth + 1`, the original position.
    pub fn before(&self, depth: usize) -> Option<usize> {
        if depth == 0 {
            None
        } else if depth == self.depth + 1 {
            Some(self.pos)
        } else {
            Some(self.path[depth - 1].before)
        }
    }

    /// The (absolute) position directly after the wrapping node at the given level, or the
    /// original position when depth is `self.depth + 1`.
    pub fn after(&self, depth: usize) -> Option<usize> {
        if depth == 0 {
            None
        } else if depth == self.depth + 1 {
            Some(self.pos)
        } else {
            Some(self.path[depth - 1].before + self.node(depth).node_size())
        }
    }

    /// When this position points into a text node, this returns the
    /// distance between the position and the start of the text node.
    /// Will be zero for positions that point between nodes.
    pub fn text_offset(&self) -> usize {
        self.pos - self.path[self.depth].before
    }

    /// Get the node directly before the position, if any. If the position points into a text node,
    /// only the part of that node before the position is returned.
    pub fn node_before(&self) -> Option<Cow<'a, S::Node>> {
        let index = self.index(self.depth);
        let d_off = self.text_offset();
        if d_off > 0 {
            self.parent().child(index).map(|child| child.cut(0..d_off))
        } else if index == 0 {
            None
        } else {
            self.parent().child(index - 1).map(Cow::Borrowed)
        }
    }

    /// Get the node directly after the position, if any. If the position points into a text node,
    /// only the part of that node after the position is returned.
    pub fn node_after(&self) -> Option<Cow<'a, S::Node>> {
        let parent = self.parent();
        let child = parent.child(self.index(self.depth))?;
        let d_off = self.text_offset();
        if d_off > 0 {
            Some(child.cut(d_off..))
        } else {
            Some(Cow::Borrowed(child))
        }
    }

    /// The depth up to which this position and the given (non-resolved)
    /// position share the same parent nodes.
    pub fn shared_depth(&self, pos: usize) -> usize {
        for depth in (1..=self.depth).rev() {
            if self.start(depth) <= pos && self.end(depth) >= pos {
                return depth;
            }
        }
        0
    }

    /// The location of this position as a path of child indices.
    pub fn location(&self) -> Location {
        Location {
            path: self.path.iter().map(|p| p.index).collect(),
            text_offset: self.text_offset(),
        }
    }

    pub(crate) fn resolve(doc: &'a S::Node, pos: usize) -> Result<Self, ResolveErr> {
        let size = doc.content_size();
        if pos > size {
            return Err(ResolveErr::RangeError { pos, size });
        }
        let mut path = vec![];
        let mut start = 0;
        let mut parent_offset = pos;
        let mut node = doc;

        loop {
            let Index { index, offset } = match node.content() {
                Some(content) => content.find_index(parent_offset, false)?,
                None => Index::new(0, 0),
            };
            let rem = parent_offset - offset;
            path.push(ResolvedNode::new(node, index, start + offset));
            if rem == 0 {
                break;
            }
            node = match node.child(index) {
                Some(child) => child,
                None => break,
            };
            if let Some(text_node) = node.text_node() {
                if !text_node.text.is_boundary(rem) {
                    return Err(ResolveErr::SplitsCharacter { pos });
                }
                break;
            }
            parent_offset = rem - 1;
            start += offset + 1;
        }
        Ok(ResolvedPos::new(pos, path, parent_offset))
    }

    pub(crate) fn position_of(doc: &S::Node, location: &Location) -> Result<usize, ResolveErr> {
        let (last, descend) = location
            .path
            .split_last()
            .ok_or(ResolveErr::InvalidLocation { depth: 0 })?;

        let mut pos = 0;
        let mut node = doc;
        for (depth, index) in descend.iter().copied().enumerate() {
            let invalid = ResolveErr::InvalidLocation { depth };
            let content = node.content().ok_or(invalid)?;
            let offset = content.offset_of(index).ok_or(invalid)?;
            let child = content.child(index).filter(|c| !c.is_leaf()).ok_or(invalid)?;
            pos += offset + 1;
            node = child;
        }

        let invalid = ResolveErr::InvalidLocation {
            depth: descend.len(),
        };
        let content = node.content().ok_or(invalid)?;
        let offset = content.offset_of(*last).ok_or(invalid)?;
        if location.text_offset > 0 {
            let text = content
                .child(*last)
                .and_then(Node::text_node)
                .map(|t| &t.text)
                .ok_or(invalid)?;
            if location.text_offset >= text.len_utf16() || !text.is_boundary(location.text_offset)
            {
                return Err(invalid);
            }
        }
        Ok(pos + offset + location.text_offset)
    }
}

impl<S: Schema> Fragment<S> {
    /// Resolve a position relative to the start of this fragment into the index of the child
    /// it points at and the offset of that child.
    pub fn index_at(&self, pos: usize) -> Result<(usize, usize), IndexError> {
        self.find_index(pos, false).map(|i| (i.index, i.offset))
    }
}
