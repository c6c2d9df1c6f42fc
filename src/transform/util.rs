use serde::{Deserialize, Serialize};

/// A span within a document
#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq, new)]
pub struct Span {
    /// Start of the span
    pub from: usize,
    /// End of the span
    pub to: usize,
}

impl Span {
    /// The number of positions covered by the span
    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    /// Whether the span covers no position at all
    pub fn is_empty(&self) -> bool {
        self.to <= self.from
    }
}
