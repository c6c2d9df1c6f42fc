use super::Schema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// A set of marks
#[allow(type_alias_bounds)]
pub type MarkSet<S: Schema> = HashSet<S::Mark>;

/// A mark is a piece of information that can be attached to a text node, such as it being
/// emphasized or part of a link.
pub trait Mark<S: Schema>:
    Serialize + for<'de> Deserialize<'de> + Debug + Clone + PartialEq + Eq + Hash + Send + Sync
{
    /// The type of this mark
    fn r#type(&self) -> S::MarkType;
}
