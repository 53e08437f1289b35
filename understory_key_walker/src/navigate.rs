// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direction resolution for hierarchical roots and flat groups.
//!
//! ## Hierarchical roots
//!
//! Directions map onto [`TreeWalker`](understory_tree_walker::TreeWalker)
//! operations on the config's cached walker:
//!
//! | Direction   | Cursor before      | Operation                                  |
//! |-------------|--------------------|--------------------------------------------|
//! | `Parent`    | current            | `parent_node`                              |
//! | `Top`       | root               | `first_child`                              |
//! | `End`       | root               | `last_child`                               |
//! | `Previous`  | current            | `previous_node` / `previous_sibling`       |
//! | `Next`      | current            | `next_node` / `next_sibling`               |
//! | `First`     | parent of current  | `first_child`                              |
//! | `Last`      | parent of current  | `last_child`                               |
//! | `Child`     | current            | `first_child`                              |
//! | `LastChild` | current            | `last_child`                               |
//!
//! `Previous`/`Next` use the document-order walks when the config is
//! depth-first and sibling scans otherwise. In depth-first mode the root is
//! never a destination of `Previous`, and `Next` from an item the filter now
//! rejects continues past that item's subtree instead of entering it.
//!
//! With cycling enabled, a `Previous` or `Next` that finds nothing is retried
//! once: as `Last` or `First` of the current item's level, or in depth-first
//! mode as the last or first item of the whole hierarchy in document order.
//!
//! ## Flat groups
//!
//! Items are scanned by index. An item is eligible unless the filter rejects
//! it. `First`/`Top` scan forward from the start and `Last`/`End` scan
//! backward from the end; neither cycles. `Next`/`Previous` scan from the item
//! after/before the current one and, with cycling enabled, wrap to the
//! opposite end at most once, so a group with no eligible item yields `None`
//! instead of spinning.

use understory_tree_walker::{FilterDecision, NodeFilter, NodeModel, WalkError};

use crate::config::{NavRoot, NavigationConfig};
use crate::direction::{Direction, GroupDirection};
use crate::error::NavigationError;

/// Resolve `direction` from `current` into a destination item.
///
/// Returns `Ok(None)` when there is no eligible destination in that direction.
///
/// ## Errors
///
/// - [`NavigationError::Configuration`] if a hierarchical root is not a live
///   node of `model`.
/// - [`NavigationError::UnsupportedDirection`] for `Parent`, `Child`, or
///   `LastChild` against a group root.
/// - [`NavigationError::Walk`] if `current` lies outside the hierarchical root
///   or the host links form a cycle.
///
/// ## Example
///
/// ```rust
/// use understory_key_walker::{Direction, NavigationConfig, get_target};
/// use understory_tree_walker::{ElementFlags, NodeData, NodeTree};
///
/// let mut tree = NodeTree::new();
/// let a = tree.insert(None, NodeData::element("input"));
/// let b = tree.insert(
///     None,
///     NodeData::element("input").with_flags(ElementFlags::DISABLED),
/// );
/// let c = tree.insert(None, NodeData::element("input"));
///
/// let mut radios = NavigationConfig::group([a, b, c]).with_cycle(true);
/// assert_eq!(get_target(&mut radios, &tree, a, Direction::Next), Ok(Some(c)));
/// assert_eq!(get_target(&mut radios, &tree, c, Direction::Next), Ok(Some(a)));
/// ```
pub fn get_target<M, F>(
    config: &mut NavigationConfig<M::Id, F>,
    model: &M,
    current: M::Id,
    direction: Direction,
) -> Result<Option<M::Id>, NavigationError>
where
    M: NodeModel + ?Sized,
    F: NodeFilter<M> + Clone,
{
    if matches!(config.root(), NavRoot::Group(_)) {
        let direction = GroupDirection::try_from(direction).inspect_err(|_| {
            tracing::debug!(?direction, "hierarchy-only direction requested for a flat group");
        })?;
        return navigate_group(config, model, current, direction);
    }

    let found = tree_step(config, model, current, direction)?;
    if found.is_none()
        && config.cycle()
        && let Some(wrap) = direction.wrap_target()
    {
        tracing::trace!(?direction, ?wrap, "wrapping hierarchical navigation");
        if config.depth_first() {
            return document_extremity(config, model, wrap);
        }
        return tree_step(config, model, current, wrap);
    }
    Ok(found)
}

impl<K: Copy + Eq, F: Clone> NavigationConfig<K, F> {
    /// Shorthand for [`get_target`] with this config.
    pub fn target<M>(
        &mut self,
        model: &M,
        current: K,
        direction: Direction,
    ) -> Result<Option<K>, NavigationError>
    where
        M: NodeModel<Id = K> + ?Sized,
        F: NodeFilter<M>,
    {
        get_target(self, model, current, direction)
    }
}

fn tree_step<M, F>(
    config: &mut NavigationConfig<M::Id, F>,
    model: &M,
    current: M::Id,
    direction: Direction,
) -> Result<Option<M::Id>, NavigationError>
where
    M: NodeModel + ?Sized,
    F: NodeFilter<M> + Clone,
{
    let depth_first = config.depth_first();
    let walker = config.walker_mut(model)?;
    let found = match direction {
        Direction::Top => {
            walker.reset();
            walker.first_child(model)?
        }
        Direction::End => {
            walker.reset();
            walker.last_child(model)?
        }
        Direction::First | Direction::Last => {
            // The root has no siblings inside the walked subtree, so it stands
            // in as its own container.
            let container = if current == walker.root() {
                current
            } else {
                model.parent(current).unwrap_or(current)
            };
            walker.set_current_node(model, container)?;
            if direction == Direction::First {
                walker.first_child(model)?
            } else {
                walker.last_child(model)?
            }
        }
        Direction::Parent => {
            walker.set_current_node(model, current)?;
            walker.parent_node(model)?
        }
        Direction::Child => {
            walker.set_current_node(model, current)?;
            walker.first_child(model)?
        }
        Direction::LastChild => {
            walker.set_current_node(model, current)?;
            walker.last_child(model)?
        }
        Direction::Previous => {
            walker.set_current_node(model, current)?;
            if depth_first {
                // The root is the container, never a destination.
                walker
                    .previous_node(model)?
                    .filter(|&node| node != walker.root())
            } else {
                walker.previous_sibling(model)?
            }
        }
        Direction::Next => {
            walker.set_current_node(model, current)?;
            if !depth_first {
                walker.next_sibling(model)?
            } else if walker.decision(model, current) == FilterDecision::Reject {
                // An item that became ineligible while focused keeps its
                // subtree pruned.
                walker.next_node_past_subtree(model)?
            } else {
                walker.next_node(model)?
            }
        }
    };
    Ok(found)
}

/// First or last item of the whole hierarchy in document order.
fn document_extremity<M, F>(
    config: &mut NavigationConfig<M::Id, F>,
    model: &M,
    direction: Direction,
) -> Result<Option<M::Id>, NavigationError>
where
    M: NodeModel + ?Sized,
    F: NodeFilter<M> + Clone,
{
    let walker = config.walker_mut(model)?;
    walker.reset();
    if direction != Direction::Last {
        return Ok(walker.first_child(model)?);
    }
    let mut last = walker.last_child(model)?;
    let mut depth = 0_usize;
    while let Some(deeper) = walker.last_child(model)? {
        depth += 1;
        if depth > walker.step_limit() {
            return Err(WalkError::MalformedStructure { steps: depth }.into());
        }
        last = Some(deeper);
    }
    Ok(last)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Scan {
    Forward,
    Backward,
}

impl Scan {
    fn start(self, len: usize) -> Option<usize> {
        match self {
            Self::Forward => (len > 0).then_some(0),
            Self::Backward => len.checked_sub(1),
        }
    }

    fn advance(self, index: usize) -> Option<usize> {
        match self {
            Self::Forward => index.checked_add(1),
            Self::Backward => index.checked_sub(1),
        }
    }
}

/// Resolve a group-only `direction` from `current`.
///
/// Takes a [`GroupDirection`], so hierarchy-only directions cannot be
/// expressed. A `current` that is not in the group is treated as sitting just
/// outside it: `Next` scans from the first item and `Previous` from the last.
///
/// ## Errors
///
/// [`NavigationError::Configuration`] if the config's root is hierarchical.
pub fn navigate_group<M, F>(
    config: &NavigationConfig<M::Id, F>,
    model: &M,
    current: M::Id,
    direction: GroupDirection,
) -> Result<Option<M::Id>, NavigationError>
where
    M: NodeModel + ?Sized,
    F: NodeFilter<M>,
{
    let NavRoot::Group(items) = config.root() else {
        return Err(NavigationError::Configuration(
            "group navigation requested for a hierarchical root",
        ));
    };
    let eligible = |item: M::Id| config.filter().accept_node(model, item) != FilterDecision::Reject;
    let position = items.iter().position(|&item| item == current);

    let found = match direction {
        GroupDirection::First | GroupDirection::Top => {
            scan(items, Scan::Forward.start(items.len()), Scan::Forward, false, eligible)
        }
        GroupDirection::Last | GroupDirection::End => {
            scan(items, Scan::Backward.start(items.len()), Scan::Backward, false, eligible)
        }
        GroupDirection::Next => {
            let from = match position {
                Some(index) => Scan::Forward.advance(index),
                None => Scan::Forward.start(items.len()),
            };
            scan(items, from, Scan::Forward, config.cycle(), eligible)
        }
        GroupDirection::Previous => {
            let from = match position {
                Some(index) => Scan::Backward.advance(index),
                None => Scan::Backward.start(items.len()),
            };
            scan(items, from, Scan::Backward, config.cycle(), eligible)
        }
    };
    Ok(found)
}

fn scan<K: Copy>(
    items: &[K],
    from: Option<usize>,
    step: Scan,
    cycle: bool,
    eligible: impl Fn(K) -> bool,
) -> Option<K> {
    let mut index = from;
    let mut cycled = false;
    loop {
        match index.and_then(|i| items.get(i).map(|&item| (i, item))) {
            Some((i, item)) => {
                if eligible(item) {
                    return Some(item);
                }
                index = step.advance(i);
            }
            None => {
                if !cycle || cycled {
                    return None;
                }
                cycled = true;
                tracing::trace!(?step, "wrapping group navigation");
                index = step.start(items.len());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use understory_tree_walker::{ElementFlags, NodeData, NodeId, NodeTree, WalkError};

    fn items(tree: &mut NodeTree, flags: &[ElementFlags]) -> Vec<NodeId> {
        flags
            .iter()
            .map(|&f| tree.insert(None, NodeData::element("li").with_flags(f)))
            .collect()
    }

    const OK: ElementFlags = ElementFlags::empty();
    const OFF: ElementFlags = ElementFlags::DISABLED;

    #[test]
    fn group_next_and_cycling_previous() {
        let mut tree = NodeTree::new();
        let ids = items(&mut tree, &[OK, OK, OK]);
        let [a, b, c] = [ids[0], ids[1], ids[2]];

        let mut config = NavigationConfig::group(ids.clone());
        assert_eq!(get_target(&mut config, &tree, a, Direction::Next), Ok(Some(b)));
        assert_eq!(get_target(&mut config, &tree, a, Direction::Previous), Ok(None));

        config.set_cycle(true);
        assert_eq!(get_target(&mut config, &tree, a, Direction::Previous), Ok(Some(c)));
        assert_eq!(get_target(&mut config, &tree, c, Direction::Next), Ok(Some(a)));
    }

    #[test]
    fn group_first_skips_disabled() {
        let mut tree = NodeTree::new();
        let ids = items(&mut tree, &[OFF, OK, OK]);
        let mut config = NavigationConfig::group(ids.clone());

        for direction in [Direction::First, Direction::Top] {
            assert_eq!(
                get_target(&mut config, &tree, ids[2], direction),
                Ok(Some(ids[1]))
            );
        }
        for direction in [Direction::Last, Direction::End] {
            assert_eq!(
                get_target(&mut config, &tree, ids[1], direction),
                Ok(Some(ids[2]))
            );
        }
    }

    #[test]
    fn group_steps_over_every_ineligible_marker() {
        let mut tree = NodeTree::new();
        let ids = items(
            &mut tree,
            &[
                OK,
                ElementFlags::HIDDEN,
                ElementFlags::ARIA_DISABLED,
                OK,
                ElementFlags::ARIA_HIDDEN,
            ],
        );
        let mut config = NavigationConfig::group(ids.clone());
        assert_eq!(get_target(&mut config, &tree, ids[0], Direction::Next), Ok(Some(ids[3])));
        assert_eq!(get_target(&mut config, &tree, ids[3], Direction::Next), Ok(None));
        assert_eq!(get_target(&mut config, &tree, ids[3], Direction::Previous), Ok(Some(ids[0])));
        assert_eq!(get_target(&mut config, &tree, ids[3], Direction::Last), Ok(Some(ids[3])));

        config.set_cycle(true);
        assert_eq!(get_target(&mut config, &tree, ids[3], Direction::Next), Ok(Some(ids[0])));
        assert_eq!(get_target(&mut config, &tree, ids[0], Direction::Previous), Ok(Some(ids[3])));
    }

    #[test]
    fn group_cycling_terminates() {
        let mut tree = NodeTree::new();
        let ids = items(&mut tree, &[OFF, OK, OFF, OFF]);
        let mut config = NavigationConfig::group(ids.clone()).with_cycle(true);

        // The only eligible item is reached again after one full lap.
        assert_eq!(get_target(&mut config, &tree, ids[1], Direction::Next), Ok(Some(ids[1])));
        assert_eq!(get_target(&mut config, &tree, ids[1], Direction::Previous), Ok(Some(ids[1])));

        // Nothing eligible at all.
        tree.set_flags(ids[1], OFF);
        assert_eq!(get_target(&mut config, &tree, ids[1], Direction::Next), Ok(None));
        assert_eq!(get_target(&mut config, &tree, ids[0], Direction::Previous), Ok(None));
        assert_eq!(get_target(&mut config, &tree, ids[0], Direction::First), Ok(None));

        let mut empty = NavigationConfig::<NodeId>::group(Vec::new()).with_cycle(true);
        assert_eq!(get_target(&mut empty, &tree, ids[0], Direction::Next), Ok(None));
        assert_eq!(get_target(&mut empty, &tree, ids[0], Direction::End), Ok(None));
    }

    #[test]
    fn group_repeated_next_visits_each_item_once_per_lap() {
        let mut tree = NodeTree::new();
        let ids = items(&mut tree, &[OK, OFF, OK, OK, OFF]);
        let mut config = NavigationConfig::group(ids.clone()).with_cycle(true);

        let mut visited = Vec::new();
        let mut current = ids[0];
        for _ in 0..6 {
            current = get_target(&mut config, &tree, current, Direction::Next)
                .unwrap()
                .unwrap();
            visited.push(current);
        }
        assert_eq!(visited, [ids[2], ids[3], ids[0], ids[2], ids[3], ids[0]]);
    }

    #[test]
    fn group_current_outside_the_group() {
        let mut tree = NodeTree::new();
        let ids = items(&mut tree, &[OFF, OK, OK, OFF]);
        let stranger = tree.insert(None, NodeData::element("button"));
        let mut config = NavigationConfig::group(ids.clone());

        assert_eq!(get_target(&mut config, &tree, stranger, Direction::Next), Ok(Some(ids[1])));
        assert_eq!(
            get_target(&mut config, &tree, stranger, Direction::Previous),
            Ok(Some(ids[2]))
        );
    }

    #[test]
    fn group_rejects_hierarchy_only_directions() {
        let mut tree = NodeTree::new();
        let ids = items(&mut tree, &[OK, OK]);
        let mut config = NavigationConfig::group(ids.clone());
        for direction in [Direction::Parent, Direction::Child, Direction::LastChild] {
            assert_eq!(
                get_target(&mut config, &tree, ids[0], direction),
                Err(NavigationError::UnsupportedDirection(direction))
            );
        }
    }

    #[test]
    fn group_uses_custom_filter_and_treats_skip_as_eligible() {
        let mut tree = NodeTree::new();
        let ids = items(&mut tree, &[OK, OK, OK]);
        let middle = ids[1];
        let last = ids[2];
        let mut config = NavigationConfig::group(ids.clone()).with_filter(
            move |_: &NodeTree, n: NodeId| {
                if n == middle {
                    FilterDecision::Reject
                } else if n == last {
                    FilterDecision::Skip
                } else {
                    FilterDecision::Accept
                }
            },
        );
        assert_eq!(config.target(&tree, ids[0], Direction::Next), Ok(Some(last)));
    }

    #[test]
    fn navigate_group_refuses_hierarchical_config() {
        let mut tree = NodeTree::new();
        let root = tree.insert(None, NodeData::element("ul"));
        let config = NavigationConfig::hierarchical(root);
        assert!(matches!(
            navigate_group(&config, &tree, root, GroupDirection::Next),
            Err(NavigationError::Configuration(_))
        ));
    }

    /// menubar -> [file -> [new, open, save(disabled)], edit(disabled) -> [cut], view -> [zoom]]
    struct Menu {
        tree: NodeTree,
        bar: NodeId,
        file: NodeId,
        new: NodeId,
        open: NodeId,
        save: NodeId,
        cut: NodeId,
        view: NodeId,
        zoom: NodeId,
    }

    fn menu() -> Menu {
        let mut tree = NodeTree::new();
        let bar = tree.insert(None, NodeData::element("menubar"));
        let item = |tree: &mut NodeTree, parent, flags| {
            tree.insert(Some(parent), NodeData::element("menuitem").with_flags(flags))
        };
        let file = item(&mut tree, bar, OK);
        let new = item(&mut tree, file, OK);
        let open = item(&mut tree, file, OK);
        let save = item(&mut tree, file, OFF);
        let edit = item(&mut tree, bar, OFF);
        let cut = item(&mut tree, edit, OK);
        let view = item(&mut tree, bar, OK);
        let zoom = item(&mut tree, view, OK);
        Menu {
            tree,
            bar,
            file,
            new,
            open,
            save,
            cut,
            view,
            zoom,
        }
    }

    #[test]
    fn hierarchical_direction_table() {
        let m = menu();
        let t = &m.tree;
        let mut config = NavigationConfig::hierarchical(m.bar);

        assert_eq!(get_target(&mut config, t, m.file, Direction::Next), Ok(Some(m.view)));
        assert_eq!(get_target(&mut config, t, m.view, Direction::Previous), Ok(Some(m.file)));
        assert_eq!(get_target(&mut config, t, m.view, Direction::Next), Ok(None));
        assert_eq!(get_target(&mut config, t, m.file, Direction::Child), Ok(Some(m.new)));
        assert_eq!(get_target(&mut config, t, m.file, Direction::LastChild), Ok(Some(m.open)));
        assert_eq!(get_target(&mut config, t, m.open, Direction::Parent), Ok(Some(m.file)));
        assert_eq!(get_target(&mut config, t, m.file, Direction::Parent), Ok(Some(m.bar)));
        assert_eq!(get_target(&mut config, t, m.zoom, Direction::Top), Ok(Some(m.file)));
        assert_eq!(get_target(&mut config, t, m.new, Direction::End), Ok(Some(m.view)));
        assert_eq!(get_target(&mut config, t, m.open, Direction::First), Ok(Some(m.new)));
        assert_eq!(get_target(&mut config, t, m.new, Direction::Last), Ok(Some(m.open)));
        assert_eq!(get_target(&mut config, t, m.bar, Direction::First), Ok(Some(m.file)));
        assert_eq!(get_target(&mut config, t, m.zoom, Direction::Child), Ok(None));
        assert!(config.cached_walker().is_some());
    }

    #[test]
    fn hierarchical_cycling_wraps_once() {
        let m = menu();
        let t = &m.tree;
        let mut config = NavigationConfig::hierarchical(m.bar).with_cycle(true);

        assert_eq!(get_target(&mut config, t, m.view, Direction::Next), Ok(Some(m.file)));
        assert_eq!(get_target(&mut config, t, m.file, Direction::Previous), Ok(Some(m.view)));
        assert_eq!(get_target(&mut config, t, m.open, Direction::Next), Ok(Some(m.new)));
        // Only one eligible item at this level: wrapping lands on itself.
        assert_eq!(get_target(&mut config, t, m.zoom, Direction::Next), Ok(Some(m.zoom)));
        // Non-linear directions never wrap.
        assert_eq!(get_target(&mut config, t, m.zoom, Direction::Child), Ok(None));
    }

    #[test]
    fn hierarchical_depth_first_steps() {
        let m = menu();
        let t = &m.tree;
        let mut config = NavigationConfig::hierarchical(m.bar).with_depth_first(true);

        assert_eq!(get_target(&mut config, t, m.file, Direction::Next), Ok(Some(m.new)));
        assert_eq!(get_target(&mut config, t, m.open, Direction::Next), Ok(Some(m.view)));
        assert_eq!(get_target(&mut config, t, m.view, Direction::Previous), Ok(Some(m.open)));
        assert_eq!(get_target(&mut config, t, m.zoom, Direction::Next), Ok(None));

        // Rejected subtrees stay unreachable in document order too.
        let mut current = m.bar;
        let mut seen = Vec::new();
        while let Some(next) = get_target(&mut config, t, current, Direction::Next).unwrap() {
            seen.push(next);
            current = next;
        }
        assert!(!seen.contains(&m.save));
        assert!(!seen.contains(&m.cut));
        assert_eq!(seen, [m.file, m.new, m.open, m.view, m.zoom]);
    }

    /// bar -> [x, y -> [z]]
    fn nested_bar() -> (NodeTree, [NodeId; 4]) {
        let mut tree = NodeTree::new();
        let bar = tree.insert(None, NodeData::element("menubar"));
        let x = tree.insert(Some(bar), NodeData::element("menuitem"));
        let y = tree.insert(Some(bar), NodeData::element("menuitem"));
        let z = tree.insert(Some(y), NodeData::element("menuitem"));
        (tree, [bar, x, y, z])
    }

    #[test]
    fn depth_first_never_steps_back_onto_the_root() {
        let (tree, [bar, x, y, z]) = nested_bar();
        let mut config = NavigationConfig::hierarchical(bar).with_depth_first(true);

        assert_eq!(get_target(&mut config, &tree, x, Direction::Previous), Ok(None));
        assert_eq!(get_target(&mut config, &tree, z, Direction::Next), Ok(None));
        assert_eq!(get_target(&mut config, &tree, y, Direction::Previous), Ok(Some(x)));
        assert_eq!(get_target(&mut config, &tree, z, Direction::Previous), Ok(Some(y)));
    }

    #[test]
    fn depth_first_cycling_wraps_across_the_whole_hierarchy() {
        let (tree, [bar, x, _, z]) = nested_bar();
        let mut config = NavigationConfig::hierarchical(bar)
            .with_depth_first(true)
            .with_cycle(true);

        assert_eq!(get_target(&mut config, &tree, x, Direction::Previous), Ok(Some(z)));
        assert_eq!(get_target(&mut config, &tree, z, Direction::Next), Ok(Some(x)));

        // A full lap of `Next` visits every item once and returns to the start.
        let mut current = x;
        let mut lap = Vec::new();
        for _ in 0..3 {
            current = get_target(&mut config, &tree, current, Direction::Next)
                .unwrap()
                .unwrap();
            lap.push(current);
        }
        assert_eq!(lap.last(), Some(&x));
        assert!(!lap.contains(&bar));
    }

    #[test]
    fn depth_first_cycling_skips_a_rejected_last_branch() {
        let mut m = menu();
        m.tree.set_flags(m.view, OFF);
        let mut config = NavigationConfig::hierarchical(m.bar)
            .with_depth_first(true)
            .with_cycle(true);

        // file -> [new, open, save(disabled)] is the only eligible branch.
        assert_eq!(get_target(&mut config, &m.tree, m.file, Direction::Previous), Ok(Some(m.open)));
        assert_eq!(get_target(&mut config, &m.tree, m.open, Direction::Next), Ok(Some(m.file)));
    }

    #[test]
    fn depth_first_next_leaves_a_focused_item_that_became_ineligible() {
        // bar -> [a -> [a1], b], with `a` disabled after it received focus.
        let mut tree = NodeTree::new();
        let bar = tree.insert(None, NodeData::element("menubar"));
        let a = tree.insert(Some(bar), NodeData::element("menuitem"));
        let a1 = tree.insert(Some(a), NodeData::element("menuitem"));
        let b = tree.insert(Some(bar), NodeData::element("menuitem"));
        let mut config = NavigationConfig::hierarchical(bar).with_depth_first(true);

        assert_eq!(get_target(&mut config, &tree, a, Direction::Next), Ok(Some(a1)));
        tree.set_flags(a, OFF);
        assert_eq!(get_target(&mut config, &tree, a, Direction::Next), Ok(Some(b)));
        assert_eq!(get_target(&mut config, &tree, b, Direction::Previous), Ok(None));
    }

    #[test]
    fn hierarchical_boundaries_with_and_without_cycling() {
        let m = menu();
        let t = &m.tree;
        let mut config = NavigationConfig::hierarchical(m.bar);
        assert_eq!(get_target(&mut config, t, m.new, Direction::Previous), Ok(None));
        config.set_cycle(true);
        assert_eq!(get_target(&mut config, t, m.new, Direction::Previous), Ok(Some(m.open)));
    }

    #[test]
    fn hierarchical_errors() {
        let mut m = menu();
        let outside = m.tree.insert(None, NodeData::element("menuitem"));
        let mut config = NavigationConfig::hierarchical(m.file);
        assert!(matches!(
            get_target(&mut config, &m.tree, outside, Direction::Next),
            Err(NavigationError::Walk(WalkError::InvalidArgument(_)))
        ));

        m.tree.remove(m.file);
        config.invalidate();
        assert!(matches!(
            get_target(&mut config, &m.tree, m.new, Direction::Next),
            Err(NavigationError::Configuration(_))
        ));
    }
}
