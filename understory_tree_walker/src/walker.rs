// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`TreeWalker`] cursor and its document-order walks.
//!
//! ## Semantics
//!
//! Each candidate node is first tested against the walker's [`WhatToShow`] mask;
//! nodes whose type is masked out behave as [`FilterDecision::Skip`]. Otherwise
//! the walker's [`NodeFilter`] decides:
//!
//! - `Accept` ends the operation, moves the cursor, and returns the node.
//! - `Reject` excludes the node and prunes its subtree from descent.
//! - `Skip` excludes the node but still visits its children.
//!
//! Every operation either returns `Ok(Some(node))` with the cursor moved to
//! `node`, or `Ok(None)` with the cursor untouched. No operation ever returns
//! a node outside the subtree rooted at [`TreeWalker::root`].
//!
//! Sibling scans ([`TreeWalker::next_sibling`], [`TreeWalker::previous_sibling`])
//! look at the cursor's siblings only: they neither descend into skipped
//! siblings nor climb to the parent when the sibling list runs out.

use core::fmt;

use crate::error::WalkError;
use crate::model::{AcceptAll, NodeFilter, NodeModel};
use crate::types::{FilterDecision, WhatToShow};

/// Default number of link hops a single operation may take before the walker
/// reports [`WalkError::MalformedStructure`].
pub const DEFAULT_STEP_LIMIT: usize = 1 << 20;

/// A filtered cursor over the subtree rooted at [`TreeWalker::root`].
///
/// The walker holds no reference to the host; every navigation method takes
/// the [`NodeModel`] explicitly. That lets a walker be cached between calls
/// (for example on a navigation config) while the host stays borrowed only for
/// the duration of a single operation.
///
/// ## Example
///
/// ```rust
/// use understory_tree_walker::{
///     FilterDecision, NodeData, NodeId, NodeTree, TreeWalker, WhatToShow,
/// };
///
/// let mut tree = NodeTree::new();
/// let list = tree.insert(None, NodeData::element("ul"));
/// let a = tree.insert(Some(list), NodeData::element("li"));
/// tree.insert(Some(list), NodeData::element("hr"));
/// let b = tree.insert(Some(list), NodeData::element("li"));
///
/// let only_items = |t: &NodeTree, n: NodeId| {
///     if t.tag(n) == Some("li") {
///         FilterDecision::Accept
///     } else {
///         FilterDecision::Skip
///     }
/// };
/// let mut walker = TreeWalker::new(&tree, list, WhatToShow::ELEMENT, only_items).unwrap();
///
/// assert_eq!(walker.first_child(&tree), Ok(Some(a)));
/// // The separator is skipped.
/// assert_eq!(walker.next_sibling(&tree), Ok(Some(b)));
/// assert_eq!(walker.next_sibling(&tree), Ok(None));
/// assert_eq!(walker.previous_sibling(&tree), Ok(Some(a)));
/// ```
#[derive(Clone)]
pub struct TreeWalker<K, F = AcceptAll> {
    root: K,
    what_to_show: WhatToShow,
    filter: F,
    current: K,
    step_limit: usize,
}

impl<K: fmt::Debug, F> fmt::Debug for TreeWalker<K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeWalker")
            .field("root", &self.root)
            .field("current", &self.current)
            .field("what_to_show", &self.what_to_show)
            .field("step_limit", &self.step_limit)
            .finish_non_exhaustive()
    }
}

/// Which end of a child list or sibling chain an operation moves toward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Step {
    Forward,
    Backward,
}

impl Step {
    fn child<M: NodeModel + ?Sized>(self, model: &M, node: M::Id) -> Option<M::Id> {
        match self {
            Self::Forward => model.first_child(node),
            Self::Backward => model.last_child(node),
        }
    }

    fn sibling<M: NodeModel + ?Sized>(self, model: &M, node: M::Id) -> Option<M::Id> {
        match self {
            Self::Forward => model.next_sibling(node),
            Self::Backward => model.previous_sibling(node),
        }
    }
}

/// Per-operation hop counter.
struct Steps {
    taken: usize,
    limit: usize,
}

impl Steps {
    fn new(limit: usize) -> Self {
        Self { taken: 0, limit }
    }

    /// Count one link hop and pass its result through.
    fn hop<K>(&mut self, link: Option<K>) -> Result<Option<K>, WalkError> {
        self.taken += 1;
        if self.taken > self.limit {
            tracing::warn!(
                steps = self.taken,
                "tree walk exceeded its step limit; node links likely form a cycle"
            );
            return Err(WalkError::MalformedStructure { steps: self.taken });
        }
        Ok(link)
    }
}

impl<K: Copy + Eq, F> TreeWalker<K, F> {
    /// Create a walker over the subtree rooted at `root`.
    ///
    /// The cursor starts at `root`. Fails with [`WalkError::InvalidArgument`]
    /// if `root` has no node type in `model` (it is not a live node).
    pub fn new<M>(model: &M, root: K, what_to_show: WhatToShow, filter: F) -> Result<Self, WalkError>
    where
        M: NodeModel<Id = K> + ?Sized,
    {
        if model.node_type(root).is_none() {
            return Err(WalkError::InvalidArgument("walker root is not a live node"));
        }
        Ok(Self {
            root,
            what_to_show,
            filter,
            current: root,
            step_limit: DEFAULT_STEP_LIMIT,
        })
    }

    /// Replace the per-operation step limit.
    ///
    /// A limit of zero makes every operation that touches a link fail.
    #[must_use]
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = limit;
        self
    }

    /// Root of the walked subtree. Fixed for the walker's lifetime.
    pub fn root(&self) -> K {
        self.root
    }

    /// Node-type mask applied before the filter.
    pub fn what_to_show(&self) -> WhatToShow {
        self.what_to_show
    }

    /// The filter consulted for every candidate.
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Current cursor position.
    pub fn current_node(&self) -> K {
        self.current
    }

    /// Per-operation step limit.
    pub fn step_limit(&self) -> usize {
        self.step_limit
    }

    /// Move the cursor back to the root.
    pub fn reset(&mut self) {
        self.current = self.root;
    }

    /// Move the cursor to `node` without filtering it.
    ///
    /// Fails with [`WalkError::InvalidArgument`] if `node` is not a live node
    /// inside the walked subtree, and leaves the cursor unchanged.
    pub fn set_current_node<M>(&mut self, model: &M, node: K) -> Result<(), WalkError>
    where
        M: NodeModel<Id = K> + ?Sized,
    {
        if model.node_type(node).is_none() {
            return Err(WalkError::InvalidArgument("cursor target is not a live node"));
        }
        let mut steps = self.steps();
        let mut probe = node;
        while probe != self.root {
            match steps.hop(model.parent(probe))? {
                Some(parent) => probe = parent,
                None => {
                    return Err(WalkError::InvalidArgument(
                        "cursor target is outside the walker root",
                    ));
                }
            }
        }
        self.current = node;
        Ok(())
    }

    fn steps(&self) -> Steps {
        Steps::new(self.step_limit)
    }

    /// The decision this walker makes for `node`: [`FilterDecision::Skip`] if
    /// its type is masked out or it is not live, otherwise the filter's verdict.
    pub fn decision<M>(&self, model: &M, node: K) -> FilterDecision
    where
        M: NodeModel<Id = K> + ?Sized,
        F: NodeFilter<M>,
    {
        match model.node_type(node) {
            Some(ty) if self.what_to_show.shows(ty) => self.filter.accept_node(model, node),
            _ => FilterDecision::Skip,
        }
    }

    fn land(&mut self, node: K) -> Result<Option<K>, WalkError> {
        self.current = node;
        Ok(Some(node))
    }

    /// Move to the nearest accepted ancestor of the cursor.
    ///
    /// The root itself is returned if it is accepted; nothing above it is ever
    /// considered.
    pub fn parent_node<M>(&mut self, model: &M) -> Result<Option<K>, WalkError>
    where
        M: NodeModel<Id = K> + ?Sized,
        F: NodeFilter<M>,
    {
        let mut steps = self.steps();
        let mut node = self.current;
        while node != self.root {
            let Some(parent) = steps.hop(model.parent(node))? else {
                break;
            };
            node = parent;
            if self.decision(model, node) == FilterDecision::Accept {
                return self.land(node);
            }
        }
        Ok(None)
    }

    /// Move to the first accepted node below the cursor, in document order.
    pub fn first_child<M>(&mut self, model: &M) -> Result<Option<K>, WalkError>
    where
        M: NodeModel<Id = K> + ?Sized,
        F: NodeFilter<M>,
    {
        self.traverse_children(model, Step::Forward)
    }

    /// Move to the last accepted node below the cursor, in document order.
    pub fn last_child<M>(&mut self, model: &M) -> Result<Option<K>, WalkError>
    where
        M: NodeModel<Id = K> + ?Sized,
        F: NodeFilter<M>,
    {
        self.traverse_children(model, Step::Backward)
    }

    /// Move to the next accepted sibling of the cursor.
    pub fn next_sibling<M>(&mut self, model: &M) -> Result<Option<K>, WalkError>
    where
        M: NodeModel<Id = K> + ?Sized,
        F: NodeFilter<M>,
    {
        self.traverse_siblings(model, Step::Forward)
    }

    /// Move to the previous accepted sibling of the cursor.
    pub fn previous_sibling<M>(&mut self, model: &M) -> Result<Option<K>, WalkError>
    where
        M: NodeModel<Id = K> + ?Sized,
        F: NodeFilter<M>,
    {
        self.traverse_siblings(model, Step::Backward)
    }

    fn traverse_children<M>(&mut self, model: &M, step: Step) -> Result<Option<K>, WalkError>
    where
        M: NodeModel<Id = K> + ?Sized,
        F: NodeFilter<M>,
    {
        let mut steps = self.steps();
        let mut next = steps.hop(step.child(model, self.current))?;
        'candidates: while let Some(mut node) = next {
            match self.decision(model, node) {
                FilterDecision::Accept => return self.land(node),
                FilterDecision::Skip => {
                    if let Some(child) = steps.hop(step.child(model, node))? {
                        next = Some(child);
                        continue;
                    }
                }
                FilterDecision::Reject => {}
            }
            // Nothing usable below `node`: move along, climbing out of skipped
            // containers but never past the cursor.
            loop {
                if let Some(sibling) = steps.hop(step.sibling(model, node))? {
                    next = Some(sibling);
                    continue 'candidates;
                }
                match steps.hop(model.parent(node))? {
                    Some(parent) if parent != self.root && parent != self.current => {
                        node = parent;
                    }
                    _ => return Ok(None),
                }
            }
        }
        Ok(None)
    }

    fn traverse_siblings<M>(&mut self, model: &M, step: Step) -> Result<Option<K>, WalkError>
    where
        M: NodeModel<Id = K> + ?Sized,
        F: NodeFilter<M>,
    {
        // The root's siblings lie outside the walked subtree.
        if self.current == self.root {
            return Ok(None);
        }
        let mut steps = self.steps();
        let mut node = self.current;
        while let Some(sibling) = steps.hop(step.sibling(model, node))? {
            node = sibling;
            if self.decision(model, node) == FilterDecision::Accept {
                return self.land(node);
            }
        }
        Ok(None)
    }

    /// Move to the next accepted node in document (pre-order) order.
    ///
    /// The cursor's own children are always candidates, whatever the filter
    /// says about the cursor itself.
    pub fn next_node<M>(&mut self, model: &M) -> Result<Option<K>, WalkError>
    where
        M: NodeModel<Id = K> + ?Sized,
        F: NodeFilter<M>,
    {
        self.pre_order_step(model, FilterDecision::Accept)
    }

    /// Move to the next accepted node in document order that is not a
    /// descendant of the cursor.
    ///
    /// This is [`TreeWalker::next_node`] for a cursor treated as rejected: its
    /// subtree is pruned and the walk resumes at the following sibling of the
    /// cursor or of its nearest ancestor.
    pub fn next_node_past_subtree<M>(&mut self, model: &M) -> Result<Option<K>, WalkError>
    where
        M: NodeModel<Id = K> + ?Sized,
        F: NodeFilter<M>,
    {
        self.pre_order_step(model, FilterDecision::Reject)
    }

    fn pre_order_step<M>(
        &mut self,
        model: &M,
        mut decision: FilterDecision,
    ) -> Result<Option<K>, WalkError>
    where
        M: NodeModel<Id = K> + ?Sized,
        F: NodeFilter<M>,
    {
        let mut steps = self.steps();
        let mut node = self.current;
        loop {
            while decision != FilterDecision::Reject {
                let Some(child) = steps.hop(model.first_child(node))? else {
                    break;
                };
                node = child;
                decision = self.decision(model, node);
                if decision == FilterDecision::Accept {
                    return self.land(node);
                }
            }

            // Following sibling of `node` or of its nearest ancestor below root.
            let mut ancestor = node;
            loop {
                if ancestor == self.root {
                    return Ok(None);
                }
                if let Some(sibling) = steps.hop(model.next_sibling(ancestor))? {
                    node = sibling;
                    break;
                }
                match steps.hop(model.parent(ancestor))? {
                    Some(parent) => ancestor = parent,
                    None => return Ok(None),
                }
            }

            decision = self.decision(model, node);
            if decision == FilterDecision::Accept {
                return self.land(node);
            }
        }
    }

    /// Move to the previous accepted node in document (pre-order) order.
    ///
    /// A preceding sibling is entered at its deepest last descendant that is
    /// not inside a rejected subtree. When that descent ends on a rejected or
    /// skipped node, the walk backs out one level at a time, so an accepted
    /// container whose descendants produced nothing is still returned.
    pub fn previous_node<M>(&mut self, model: &M) -> Result<Option<K>, WalkError>
    where
        M: NodeModel<Id = K> + ?Sized,
        F: NodeFilter<M>,
    {
        let mut steps = self.steps();
        let mut node = self.current;
        while node != self.root {
            let mut sibling = steps.hop(model.previous_sibling(node))?;
            while let Some(prev) = sibling {
                node = prev;
                let mut decision = self.decision(model, node);
                while decision != FilterDecision::Reject {
                    let Some(child) = steps.hop(model.last_child(node))? else {
                        break;
                    };
                    node = child;
                    decision = self.decision(model, node);
                }
                if decision == FilterDecision::Accept {
                    return self.land(node);
                }
                sibling = steps.hop(model.previous_sibling(node))?;
            }

            // `node` is now the backtrack point: its parent comes next in
            // reverse document order.
            let Some(parent) = steps.hop(model.parent(node))? else {
                return Ok(None);
            };
            node = parent;
            if self.decision(model, node) == FilterDecision::Accept {
                return self.land(node);
            }
        }
        Ok(None)
    }

    /// Iterate forward in document order from the cursor.
    ///
    /// Each item is the result of one [`TreeWalker::next_node`] call, so the
    /// cursor follows the iterator. Iteration ends after the first error.
    pub fn following<'w, 'm, M>(&'w mut self, model: &'m M) -> Walk<'w, 'm, M, F>
    where
        M: NodeModel<Id = K> + ?Sized,
        F: NodeFilter<M>,
    {
        Walk {
            walker: self,
            model,
            step: Step::Forward,
            done: false,
        }
    }

    /// Iterate backward in document order from the cursor.
    ///
    /// Each item is the result of one [`TreeWalker::previous_node`] call.
    pub fn preceding<'w, 'm, M>(&'w mut self, model: &'m M) -> Walk<'w, 'm, M, F>
    where
        M: NodeModel<Id = K> + ?Sized,
        F: NodeFilter<M>,
    {
        Walk {
            walker: self,
            model,
            step: Step::Backward,
            done: false,
        }
    }
}

/// Iterator returned by [`TreeWalker::following`] and [`TreeWalker::preceding`].
pub struct Walk<'w, 'm, M: NodeModel + ?Sized, F> {
    walker: &'w mut TreeWalker<M::Id, F>,
    model: &'m M,
    step: Step,
    done: bool,
}

impl<M: NodeModel + ?Sized, F> fmt::Debug for Walk<'_, '_, M, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walk")
            .field("step", &self.step)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<M, F> Iterator for Walk<'_, '_, M, F>
where
    M: NodeModel + ?Sized,
    F: NodeFilter<M>,
{
    type Item = Result<M::Id, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = match self.step {
            Step::Forward => self.walker.next_node(self.model),
            Step::Backward => self.walker.previous_node(self.model),
        };
        match result {
            Ok(Some(node)) => Some(Ok(node)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
