use crate::model::Schema;
use crate::transform::Step;
use std::mem;
use std::ops::Range;

/// A compacted step together with the indices of the steps it was merged from.
pub(crate) struct Group<S: Schema> {
    pub step: Step<S>,
    pub range: Range<usize>,
}

impl<S: Schema> Group<S> {
    fn single(index: usize, step: &Step<S>) -> Self {
        Self {
            step: step.clone(),
            range: index..index + 1,
        }
    }
}

/// Merge adjacent steps of a log wherever they can be expressed as a single step.
///
/// This is a greedy left-to-right fold: each step is merged into the step accumulated so far,
/// or starts a new one if that is not possible. Replaying the result yields the same document
/// as replaying `steps`.
pub fn compact<S: Schema>(steps: &[Step<S>]) -> Vec<Step<S>> {
    compact_indexed(steps).into_iter().map(|g| g.step).collect()
}

pub(crate) fn compact_indexed<S: Schema>(steps: &[Step<S>]) -> Vec<Group<S>> {
    let mut groups = Vec::new();
    let mut iter = steps.iter().enumerate();
    let mut current = match iter.next() {
        Some((index, step)) => Group::single(index, step),
        None => return groups,
    };
    for (index, step) in iter {
        match current.step.merge(step) {
            Some(merged) => {
                current.step = merged;
                current.range.end = index + 1;
            }
            None => groups.push(mem::replace(&mut current, Group::single(index, step))),
        }
    }
    groups.push(current);
    groups
}

pub(crate) fn singles<S: Schema>(steps: &[Step<S>]) -> Vec<Group<S>> {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| Group::single(index, step))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{compact, compact_indexed};
    use crate::article::Article;
    use crate::model::{Fragment, Slice};
    use crate::transform::{ReplaceStep, Step};

    fn insert(pos: usize, text: &str) -> Step<Article> {
        Step::from(ReplaceStep::new(
            pos,
            pos,
            Slice::new(Fragment::from(text), 0, 0),
        ))
    }

    #[test]
    fn test_empty() {
        assert!(compact::<Article>(&[]).is_empty());
    }

    #[test]
    fn test_ranges() {
        let steps = vec![
            insert(2, "a"),
            insert(3, "b"),
            insert(4, "c"),
            Step::from(ReplaceStep::delete(2, 3).structural()),
            insert(2, "x"),
            insert(10, "y"),
        ];
        let groups = compact_indexed(&steps);
        let ranges: Vec<_> = groups.iter().map(|g| g.range.clone()).collect();
        assert_eq!(ranges, vec![0..3, 3..4, 4..5, 5..6]);
        assert_eq!(groups[0].step, insert(2, "abc"));
        assert_eq!(compact(&steps).len(), 4);
    }
}
