use super::fragment::push_joined;
use crate::model::{Fragment, Node, NodeType, ResolveErr, ResolvedPos, Schema, Slice};
use crate::util::Bounds;
use derivative::Derivative;
use displaydoc::Display;
use std::borrow::Cow;
use thiserror::Error;

/// An error that can occur when replacing a slice
#[derive(Derivative, Display, Error)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub enum ReplaceError<S: Schema> {
    /// Inserted content deeper than insertion position
    InsertTooDeep,
    /// Inconsistent open depths
    InconsistentOpenDepths {
        /// Depth at the start
        from_depth: usize,
        /// How many nodes are "open" at the start
        open_start: usize,
        /// Depth at the end
        to_depth: usize,
        /// How many nodes are "open" at the end
        open_end: usize,
    },
    /// Open depths ({open_start}, {open_end}) exceed the depth of the slice content
    OpenDepthTooLarge {
        /// How many nodes are "open" at the start
        open_start: usize,
        /// How many nodes are "open" at the end
        open_end: usize,
    },
    /// Could not resolve an index
    Resolve(#[from] ResolveErr),
    /// Cannot join {0:?} onto {1:?}
    CannotJoin(S::NodeType, S::NodeType),
    /// Invalid content for node {0:?}
    InvalidContent(S::NodeType),
    /// Replaced range cuts through atomic node {0:?}
    CrossesAtom(S::NodeType),
}

pub(crate) fn replace<S: Schema>(
    rp_from: &ResolvedPos<S>,
    rp_to: &ResolvedPos<S>,
    slice: &Slice<S>,
) -> Result<S::Node, ReplaceError<S>> {
    check_atoms(rp_from, rp_to)?;
    if !slice.fits_open_depths() {
        Err(ReplaceError::OpenDepthTooLarge {
            open_start: slice.open_start,
            open_end: slice.open_end,
        })
    } else if slice.open_start > rp_from.depth {
        Err(ReplaceError::InsertTooDeep)
    } else if slice.open_end > rp_to.depth
        || rp_from.depth - slice.open_start != rp_to.depth - slice.open_end
    {
        Err(ReplaceError::InconsistentOpenDepths {
            from_depth: rp_from.depth,
            open_start: slice.open_start,
            to_depth: rp_to.depth,
            open_end: slice.open_end,
        })
    } else {
        replace_outer(rp_from, rp_to, slice, 0)
    }
}

/// Every ancestor below the shared depth is entered or left by the range.
fn check_atoms<S: Schema>(
    rp_from: &ResolvedPos<S>,
    rp_to: &ResolvedPos<S>,
) -> Result<(), ReplaceError<S>> {
    let shared = rp_from.shared_depth(rp_to.pos);
    for rp in [rp_from, rp_to].iter() {
        for depth in shared + 1..=rp.depth {
            let node = rp.node(depth);
            if node.is_atom() {
                return Err(ReplaceError::CrossesAtom(node.r#type()));
            }
        }
    }
    Ok(())
}

fn replace_outer<S: Schema>(
    rp_from: &ResolvedPos<S>,
    rp_to: &ResolvedPos<S>,
    slice: &Slice<S>,
    depth: usize,
) -> Result<S::Node, ReplaceError<S>> {
    let index = rp_from.index(depth);
    let node = rp_from.node(depth);
    if index == rp_to.index(depth) && depth < rp_from.depth - slice.open_start {
        // `from` and `to` are in the same child, above the open part of the slice
        let inner = replace_outer(rp_from, rp_to, slice, depth + 1)?;
        Ok(node.copy(|c| c.replace_child(index, inner).into_owned()))
    } else if slice.content.size() == 0 {
        // Plain deletion
        let content = replace_two_way(rp_from, rp_to, depth)?;
        close(node, content)
    } else if slice.open_start == 0
        && slice.open_end == 0
        && rp_from.depth == depth
        && rp_to.depth == depth
    {
        // Flat insertion into a single parent
        let parent = rp_from.parent();
        let empty = Fragment::new();
        let content = parent.content().unwrap_or(&empty);

        let new_content = content
            .cut(0..rp_from.parent_offset)
            .append(slice.content.clone())
            .append(content.cut(rp_to.parent_offset..));
        close(parent, new_content)
    } else {
        let (n, start, end) = prepare_slice_for_replace(slice, rp_from);
        let rp_start = n.resolve(start)?;
        let rp_end = n.resolve(end)?;
        let content = replace_three_way(rp_from, &rp_start, &rp_end, rp_to, depth)?;
        close(node, content)
    }
}

fn check_join<S: Schema>(main: &S::Node, sub: &S::Node) -> Result<(), ReplaceError<S>> {
    let sub_type = sub.r#type();
    let main_type = main.r#type();
    if sub_type.compatible_content(main_type) {
        Ok(())
    } else {
        Err(ReplaceError::CannotJoin(sub_type, main_type))
    }
}

fn joinable<'a, S: Schema>(
    rp_before: &ResolvedPos<'a, S>,
    rp_after: &ResolvedPos<'a, S>,
    depth: usize,
) -> Result<&'a S::Node, ReplaceError<S>> {
    let node = rp_before.node(depth);
    check_join::<S>(node, rp_after.node(depth))?;
    Ok(node)
}

fn add_node<S: Schema>(child: Cow<S::Node>, target: &mut Vec<S::Node>) {
    push_joined::<S>(target, child.into_owned());
}

fn add_range<S: Schema>(range: Bounds<&ResolvedPos<S>>, depth: usize, target: &mut Vec<S::Node>) {
    let node = range.upper_or_lower().node(depth);
    let mut start_index = 0;

    let end_index = match range.upper() {
        Some(rp_end) => rp_end.index(depth),
        None => node.child_count(),
    };

    if let Some(rp_start) = range.lower() {
        start_index = rp_start.index(depth);
        if rp_start.depth > depth {
            start_index += 1;
        } else if rp_start.text_offset() > 0 {
            if let Some(after) = rp_start.node_after() {
                add_node::<S>(after, target);
            }
            start_index += 1;
        }
    }
    for i in start_index..end_index {
        if let Some(child) = node.child(i) {
            add_node::<S>(Cow::Borrowed(child), target);
        }
    }
    if let Some(rp_end) = range.upper() {
        if rp_end.depth == depth && rp_end.text_offset() > 0 {
            if let Some(before) = rp_end.node_before() {
                add_node::<S>(before, target);
            }
        }
    }
}

fn close<S: Schema>(node: &S::Node, content: Fragment<S>) -> Result<S::Node, ReplaceError<S>> {
    let node_type = node.r#type();
    if node_type.valid_content(&content) {
        Ok(node.copy(|_| content))
    } else {
        Err(ReplaceError::InvalidContent(node_type))
    }
}

fn replace_three_way<S: Schema>(
    rp_from: &ResolvedPos<S>,
    rp_start: &ResolvedPos<S>,
    rp_end: &ResolvedPos<S>,
    rp_to: &ResolvedPos<S>,
    depth: usize,
) -> Result<Fragment<S>, ReplaceError<S>> {
    let open_start = if rp_from.depth > depth {
        Some(joinable(rp_from, rp_start, depth + 1)?)
    } else {
        None
    };
    let open_end = if rp_to.depth > depth {
        Some(joinable(rp_end, rp_to, depth + 1)?)
    } else {
        None
    };

    let mut content = Vec::new();
    add_range(Bounds::To(rp_from), depth, &mut content);
    match (open_start, open_end) {
        (Some(os), Some(oe)) if rp_start.index(depth) == rp_end.index(depth) => {
            check_join(os, oe)?;
            let inner = replace_three_way(rp_from, rp_start, rp_end, rp_to, depth + 1)?;
            let closed = close(os, inner)?;
            add_node::<S>(Cow::Owned(closed), &mut content)
        }
        _ => {
            if let Some(os) = open_start {
                let inner = replace_two_way(rp_from, rp_start, depth + 1)?;
                let closed = close(os, inner)?;
                add_node::<S>(Cow::Owned(closed), &mut content);
            }
            add_range(Bounds::Between(rp_start, rp_end), depth, &mut content);
            if let Some(oe) = open_end {
                let inner = replace_two_way(rp_end, rp_to, depth + 1)?;
                let closed = close(oe, inner)?;
                add_node::<S>(Cow::Owned(closed), &mut content);
            }
        }
    }
    add_range(Bounds::From(rp_to), depth, &mut content);
    Ok(Fragment::from(content))
}

fn replace_two_way<S: Schema>(
    rp_from: &ResolvedPos<S>,
    rp_to: &ResolvedPos<S>,
    depth: usize,
) -> Result<Fragment<S>, ReplaceError<S>> {
    let mut content = Vec::new();
    add_range(Bounds::To(rp_from), depth, &mut content);
    if rp_from.depth > depth {
        let r#type = joinable(rp_from, rp_to, depth + 1)?;
        let inner = replace_two_way(rp_from, rp_to, depth + 1)?;
        let child = close(r#type, inner)?;
        add_node::<S>(Cow::Owned(child), &mut content);
    }
    add_range(Bounds::From(rp_to), depth, &mut content);
    Ok(Fragment::from(content))
}

/// Wrap the slice content in copies of the ancestors of `rp_along` that are not open in the
/// slice, and return the start and end of the actual content in that node.
fn prepare_slice_for_replace<S: Schema>(
    slice: &Slice<S>,
    rp_along: &ResolvedPos<S>,
) -> (S::Node, usize, usize) {
    let extra = rp_along.depth - slice.open_start;
    let parent = rp_along.node(extra);
    let mut node = parent.copy(|_| slice.content.clone());
    for i in (0..extra).rev() {
        node = rp_along.node(i).copy(|_| Fragment::from((node,)));
    }

    let start = slice.open_start + extra;
    let end = node
        .content_size()
        .saturating_sub(slice.open_end + extra);
    (node, start, end)
}
