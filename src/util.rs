//! # Generic utilities

/// One or both ends of a range of positions.
pub(crate) enum Bounds<T> {
    /// Everything from the value to the end
    From(T),
    /// Everything from the start up to the value
    To(T),
    /// Everything between the two values
    Between(T, T),
}

impl<T> Bounds<T> {
    /// The lower bound if there is one
    pub fn lower(&self) -> Option<&T> {
        match self {
            Self::From(a) | Self::Between(a, _) => Some(a),
            Self::To(_) => None,
        }
    }

    /// The upper bound if there is one
    pub fn upper(&self) -> Option<&T> {
        match self {
            Self::To(b) | Self::Between(_, b) => Some(b),
            Self::From(_) => None,
        }
    }

    /// The upper bound, or the lower one if the range is open at the top
    pub fn upper_or_lower(&self) -> &T {
        match self {
            Self::From(a) => a,
            Self::To(b) | Self::Between(_, b) => b,
        }
    }
}
