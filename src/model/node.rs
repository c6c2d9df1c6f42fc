use super::{
    replace, util, ContentMatch, Fragment, Location, Mark, MarkSet, ReplaceError, ResolveErr,
    ResolvedPos, Schema, Slice, TextNode,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt::Debug;
use std::ops::RangeBounds;

/// The type of a node, as declared by the schema.
///
/// Node types are how the content model is consulted: they answer which children a node may
/// have, which marks those children may carry, and whether the node may be split.
pub trait NodeType<S: Schema>: Copy + Clone + Debug + PartialEq + Eq {
    /// Whether every mark in the set may be used on the content of this node type
    fn allow_marks(self, marks: &MarkSet<S>) -> bool {
        marks.iter().all(|m| self.allows_mark_type(m.r#type()))
    }

    /// Whether the given mark type may be used on the content of this node type
    fn allows_mark_type(self, mark_type: S::MarkType) -> bool;

    /// True if this is an inline type.
    fn is_inline(self) -> bool;

    /// True if this is a block type.
    fn is_block(self) -> bool {
        !self.is_inline()
    }

    /// True for node types that must not be split by a replace, i.e. a replaced range may not
    /// start inside of such a node and end outside of it or vice versa.
    fn is_atom(self) -> bool {
        false
    }

    /// The starting match of the node type's content expression.
    fn content_match(self) -> S::ContentMatch;

    /// Whether this type's content is compatible with that of `other`, i.e. whether nodes of
    /// both types can be joined.
    fn compatible_content(self, other: Self) -> bool;

    /// Returns true if the given fragment is valid content for this node type.
    fn valid_content(self, fragment: &Fragment<S>) -> bool {
        let matched = match self.content_match().match_fragment(fragment) {
            Some(m) => m,
            None => return false,
        };
        matched.valid_end()
            && fragment
                .children()
                .iter()
                .all(|child| child.marks().map_or(true, |m| self.allow_marks(m)))
    }
}

/// This trait represents a node in the tree that makes up a ProseMirror document. So a document is
/// an instance of Node, with children that are also instances of Node.
pub trait Node<S: Schema<Node = Self>>:
    Serialize
    + for<'de> Deserialize<'de>
    + Clone
    + Debug
    + PartialEq
    + Eq
    + Send
    + Sync
    + From<TextNode<S>>
{
    /// The type of this node
    fn r#type(&self) -> S::NodeType;

    /// Get the text and marks if this is a text node
    fn text_node(&self) -> Option<&TextNode<S>>;

    /// A container holding the node's children.
    fn content(&self) -> Option<&Fragment<S>>;

    /// The marks on this node, if it can have any.
    fn marks(&self) -> Option<&MarkSet<S>> {
        self.text_node().map(|t| &t.marks)
    }

    /// Create a new node with the same markup as this node, containing the given content (or
    /// empty, if no content is given).
    fn copy<F>(&self, map: F) -> Self
    where
        F: FnOnce(&Fragment<S>) -> Fragment<S>;

    /// Creates a new text node
    fn text<A: Into<String>>(text: A) -> Self {
        Self::from(TextNode {
            marks: MarkSet::<S>::default(),
            text: Text::from(text.into()),
        })
    }

    /// Create a copy of this node with only the content between the given positions.
    fn cut<R: RangeBounds<usize>>(&self, range: R) -> Cow<Self> {
        let from = util::from(&range);

        if let Some(text_node) = self.text_node() {
            let len = text_node.text.len_utf16();
            let to = usize::min(util::to(&range, len), len);

            if from == 0 && to == len {
                return Cow::Borrowed(self);
            }
            let (_, rest) = util::split_at_utf16(text_node.text.as_str(), from);
            let (rest, _) = util::split_at_utf16(rest, to.saturating_sub(from));

            Cow::Owned(Self::from(text_node.with_text(Text::from(rest.to_owned()))))
        } else {
            let content_size = self.content_size();
            let to = util::to(&range, content_size);

            if from == 0 && to == content_size {
                Cow::Borrowed(self)
            } else {
                Cow::Owned(self.copy(|c| c.cut(from..to)))
            }
        }
    }

    /// Resolve the given position in the document, returning a struct with information about its
    /// context.
    fn resolve(&self, pos: usize) -> Result<ResolvedPos<S>, ResolveErr> {
        ResolvedPos::resolve(self, pos)
    }

    /// Compute the position a tree location denotes. This is the inverse of
    /// [`ResolvedPos::location`].
    fn position_of(&self, location: &Location) -> Result<usize, ResolveErr> {
        ResolvedPos::<S>::position_of(self, location)
    }

    /// Cut out the part of the document between the given positions, and return it as a
    /// `Slice` object.
    fn slice<R: RangeBounds<usize>>(
        &self,
        range: R,
        include_parents: bool,
    ) -> Result<Slice<S>, ResolveErr> {
        let from = util::from(&range);
        let to = util::to(&range, self.content_size());

        if from == to {
            return Ok(Slice::default());
        }

        let rp_from = self.resolve(from)?;
        let rp_to = self.resolve(to)?;
        let depth = if include_parents {
            0
        } else {
            rp_from.shared_depth(to)
        };
        let start = rp_from.start(depth);
        let node = rp_from.node(depth);
        let content = node
            .content()
            .map(|c| c.cut(from - start..to - start))
            .unwrap_or_default();
        Ok(Slice::new(
            content,
            rp_from.depth() - depth,
            rp_to.depth() - depth,
        ))
    }

    /// Replace the part of the document between the given positions with the given slice. The
    /// slice must 'fit', meaning its open sides must be able to connect to the surrounding
    /// content, and its content nodes must be valid children for the node they are placed into.
    fn replace<R: RangeBounds<usize>>(
        &self,
        range: R,
        slice: &Slice<S>,
    ) -> Result<Self, ReplaceError<S>> {
        let from = util::from(&range);
        let to = util::to(&range, self.content_size());

        let rp_from = self.resolve(from)?;
        let rp_to = self.resolve(to)?;

        replace(&rp_from, &rp_to, slice)
    }

    /// Concatenates all the text nodes found in this fragment and its children.
    fn text_content(&self) -> String {
        if let Some(text_node) = self.text_node() {
            text_node.text.as_str().to_owned()
        } else {
            self.content().map(Fragment::text_content).unwrap_or_default()
        }
    }

    /// Represents `.content.size` in JS
    fn content_size(&self) -> usize {
        self.content().map(Fragment::size).unwrap_or(0)
    }

    /// Get the child node at the given index, if it exists.
    fn child(&self, index: usize) -> Option<&Self> {
        self.content().and_then(|c| c.child(index))
    }

    /// The first child of this node, if any.
    fn first_child(&self) -> Option<&Self> {
        self.content().and_then(Fragment::first_child)
    }

    /// The number of children that the node has.
    fn child_count(&self) -> usize {
        self.content().map_or(0, Fragment::child_count)
    }

    /// True when this is a leaf node.
    fn is_leaf(&self) -> bool {
        self.content().is_none()
    }

    /// True when this is a block (non-inline node)
    fn is_block(&self) -> bool {
        self.r#type().is_block()
    }

    /// True when this is an inline node
    fn is_inline(&self) -> bool {
        self.r#type().is_inline()
    }

    /// True when this is a text node.
    fn is_text(&self) -> bool {
        self.text_node().is_some()
    }

    /// True when this node must not be split
    fn is_atom(&self) -> bool {
        self.r#type().is_atom()
    }

    /// The size of this node, as defined by the integer-based indexing scheme. For text nodes,
    /// this is the amount of characters. For other leaf nodes, it is one. For non-leaf nodes, it
    /// is the size of the content plus two (the start and end token).
    fn node_size(&self) -> usize {
        match self.content() {
            Some(c) => c.size() + 2,
            None => match self.text_node() {
                Some(text_node) => text_node.text.len_utf16(),
                None => 1,
            },
        }
    }
}

/// A string that stores its length in utf-16
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Text {
    len_utf16: usize,
    content: String,
}

impl Text {
    /// Return the contained string
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// The length of this string if it were encoded in utf-16
    pub fn len_utf16(&self) -> usize {
        self.len_utf16
    }

    /// Whether `offset` (in utf-16 code units) lies on a character boundary
    pub fn is_boundary(&self, offset: usize) -> bool {
        offset <= self.len_utf16 && util::utf16_to_byte(&self.content, offset).is_some()
    }

    /// Concatenate two strings
    pub fn join(&self, other: &Text) -> Text {
        let mut content = String::with_capacity(self.content.len() + other.content.len());
        content.push_str(&self.content);
        content.push_str(&other.content);
        Text {
            len_utf16: self.len_utf16 + other.len_utf16,
            content,
        }
    }
}

impl From<String> for Text {
    fn from(src: String) -> Text {
        Text {
            len_utf16: src.encode_utf16().count(),
            content: src,
        }
    }
}

impl From<&str> for Text {
    fn from(src: &str) -> Text {
        Text::from(src.to_owned())
    }
}

impl Serialize for Text {
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        self.content.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Text::from)
    }
}
