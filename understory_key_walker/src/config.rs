// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation configuration and its cached walker.

use alloc::vec::Vec;

use understory_tree_walker::{NodeModel, TreeWalker, WhatToShow};

use crate::error::NavigationError;
use crate::filter::DefaultFilter;

/// The structure a navigation config walks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavRoot<K> {
    /// A single root node; navigation follows the hierarchy below it.
    Hierarchical(K),
    /// A flat, ordered collection of items (radio group, tab list, table rows).
    Group(Vec<K>),
}

/// Per-widget navigation settings.
///
/// A widget controller builds one config and reuses it across key presses. In
/// hierarchical mode the config caches the [`TreeWalker`] it builds on first
/// use; [`NavigationConfig::cached_walker`] exposes it and
/// [`NavigationConfig::invalidate`] drops it. The cache is never refreshed
/// automatically: callers invalidate it (or call [`NavigationConfig::set_root`])
/// when the underlying structure changes.
///
/// ## Example
///
/// ```rust
/// use understory_key_walker::{Direction, NavRoot, NavigationConfig};
///
/// let config = NavigationConfig::group([1_u32, 2, 3])
///     .with_cycle(true);
/// assert!(config.cycle());
/// assert!(matches!(config.root(), NavRoot::Group(items) if items.len() == 3));
/// # let _ = Direction::Next;
/// ```
#[derive(Clone)]
pub struct NavigationConfig<K, F = DefaultFilter> {
    root: NavRoot<K>,
    filter: F,
    cycle: bool,
    depth_first: bool,
    what_to_show: WhatToShow,
    walker: Option<TreeWalker<K, F>>,
}

impl<K: core::fmt::Debug, F> core::fmt::Debug for NavigationConfig<K, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavigationConfig")
            .field("root", &self.root)
            .field("cycle", &self.cycle)
            .field("depth_first", &self.depth_first)
            .field("what_to_show", &self.what_to_show)
            .field("walker", &self.walker)
            .finish_non_exhaustive()
    }
}

impl<K> NavigationConfig<K, DefaultFilter> {
    /// Navigate the hierarchy below `root` with the default filter.
    pub fn hierarchical(root: K) -> Self {
        Self::new(NavRoot::Hierarchical(root))
    }

    /// Navigate a flat group with the default filter.
    pub fn group(items: impl Into<Vec<K>>) -> Self {
        Self::new(NavRoot::Group(items.into()))
    }

    /// Navigate `root` with the default filter, no cycling, sibling-only steps,
    /// and only element nodes shown.
    pub fn new(root: NavRoot<K>) -> Self {
        Self {
            root,
            filter: DefaultFilter,
            cycle: false,
            depth_first: false,
            what_to_show: WhatToShow::ELEMENT,
            walker: None,
        }
    }
}

impl<K, F> NavigationConfig<K, F> {
    /// Replace the filter. Drops any cached walker.
    pub fn with_filter<G>(self, filter: G) -> NavigationConfig<K, G> {
        NavigationConfig {
            root: self.root,
            filter,
            cycle: self.cycle,
            depth_first: self.depth_first,
            what_to_show: self.what_to_show,
            walker: None,
        }
    }

    /// Wrap `Previous`/`Next` around to the opposite end.
    #[must_use]
    pub fn with_cycle(mut self, cycle: bool) -> Self {
        self.cycle = cycle;
        self
    }

    /// Make `Previous`/`Next` walk in document order instead of among siblings.
    #[must_use]
    pub fn with_depth_first(mut self, depth_first: bool) -> Self {
        self.depth_first = depth_first;
        self
    }

    /// Replace the node-type mask used in hierarchical mode. Drops any cached walker.
    #[must_use]
    pub fn with_what_to_show(mut self, what_to_show: WhatToShow) -> Self {
        self.what_to_show = what_to_show;
        self.walker = None;
        self
    }

    /// The walked structure.
    pub fn root(&self) -> &NavRoot<K> {
        &self.root
    }

    /// Replace the walked structure. Drops any cached walker.
    pub fn set_root(&mut self, root: NavRoot<K>) {
        self.root = root;
        self.walker = None;
    }

    /// The eligibility filter.
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Whether `Previous`/`Next` wrap.
    pub fn cycle(&self) -> bool {
        self.cycle
    }

    /// Change cycling without touching the cache.
    pub fn set_cycle(&mut self, cycle: bool) {
        self.cycle = cycle;
    }

    /// Whether `Previous`/`Next` walk in document order.
    pub fn depth_first(&self) -> bool {
        self.depth_first
    }

    /// Change depth-first stepping without touching the cache.
    pub fn set_depth_first(&mut self, depth_first: bool) {
        self.depth_first = depth_first;
    }

    /// Node-type mask used in hierarchical mode.
    pub fn what_to_show(&self) -> WhatToShow {
        self.what_to_show
    }

    /// The walker built by an earlier hierarchical request, if any.
    pub fn cached_walker(&self) -> Option<&TreeWalker<K, F>> {
        self.walker.as_ref()
    }

    /// Drop the cached walker; the next hierarchical request rebuilds it.
    pub fn invalidate(&mut self) {
        self.walker = None;
    }
}

impl<K: Copy + Eq, F: Clone> NavigationConfig<K, F> {
    /// The cached walker, built on first use.
    pub(crate) fn walker_mut<M>(
        &mut self,
        model: &M,
    ) -> Result<&mut TreeWalker<K, F>, NavigationError>
    where
        M: NodeModel<Id = K> + ?Sized,
    {
        let root = match &self.root {
            NavRoot::Hierarchical(root) => *root,
            NavRoot::Group(_) => {
                return Err(NavigationError::Configuration(
                    "tree walker requested for a group root",
                ));
            }
        };
        if model.node_type(root).is_none() {
            tracing::debug!("hierarchical navigation root is not a live node");
            return Err(NavigationError::Configuration(
                "hierarchical root is not a live node",
            ));
        }
        let walker = match self.walker.take() {
            Some(walker) => walker,
            None => {
                tracing::trace!("building tree walker for navigation config");
                TreeWalker::new(model, root, self.what_to_show, self.filter.clone())?
            }
        };
        Ok(self.walker.insert(walker))
    }
}
