use super::{util, Fragment, Node, Schema};
use std::ops::RangeBounds;

/// Instances of this type represent a match state of a node type's content expression, and can be
/// used to find out whether further content matches here, and whether a given position is a valid
/// end of the node.
pub trait ContentMatch<S: Schema>: Copy {
    /// Match a node type, returning a match after that node if successful.
    fn match_type(self, r#type: S::NodeType) -> Option<Self>;

    /// True when this match state represents a valid end of the node.
    fn valid_end(self) -> bool;

    /// Try to match a fragment. Returns the resulting match when successful.
    fn match_fragment(self, fragment: &Fragment<S>) -> Option<Self> {
        self.match_fragment_range(fragment, ..)
    }

    /// Try to match a part of a fragment. Returns the resulting match when successful.
    fn match_fragment_range<R: RangeBounds<usize>>(
        self,
        fragment: &Fragment<S>,
        range: R,
    ) -> Option<Self> {
        let start = util::from(&range);
        let end = util::to(&range, fragment.child_count());

        let mut test = self;
        for child in fragment.children().get(start..end)? {
            test = test.match_type(child.r#type())?;
        }
        Some(test)
    }
}
