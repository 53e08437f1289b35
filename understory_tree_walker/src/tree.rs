// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-backed host tree: structure, element state, and model impls.

use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::model::{ElementState, NodeModel};
use crate::types::NodeType;

/// Identifier for a node in a [`NodeTree`] (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Eligibility markers carried by an element.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// `disabled`
        const DISABLED      = 0b0000_0001;
        /// `hidden`
        const HIDDEN        = 0b0000_0010;
        /// `aria-disabled="true"`
        const ARIA_DISABLED = 0b0000_0100;
        /// `aria-hidden="true"`
        const ARIA_HIDDEN   = 0b0000_1000;
    }
}

/// Per-node data stored in a [`NodeTree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeData {
    /// Type tag tested against a walker's `whatToShow` mask.
    pub node_type: NodeType,
    /// Element tag name (or a `#name` for non-element nodes).
    pub tag: &'static str,
    /// Eligibility markers.
    pub flags: ElementFlags,
}

impl NodeData {
    /// Node data with no flags set.
    pub const fn new(node_type: NodeType, tag: &'static str) -> Self {
        Self {
            node_type,
            tag,
            flags: ElementFlags::empty(),
        }
    }

    /// An element with the given tag.
    pub const fn element(tag: &'static str) -> Self {
        Self::new(NodeType::Element, tag)
    }

    /// A text node.
    pub const fn text() -> Self {
        Self::new(NodeType::Text, "#text")
    }

    /// Replace the flags.
    #[must_use]
    pub const fn with_flags(mut self, flags: ElementFlags) -> Self {
        self.flags = flags;
        self
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    /// Position in the parent's `children`; meaningless while detached.
    index: usize,
    children: SmallVec<[NodeId; 4]>,
    data: NodeData,
}

/// A small owned hierarchy implementing [`NodeModel`] and [`ElementState`].
///
/// Hosts that already own a DOM-like tree implement the model traits on
/// their own types; `NodeTree` serves everyone else (and the tests).
///
/// ## Example
///
/// ```rust
/// use understory_tree_walker::{ElementFlags, NodeData, NodeModel, NodeTree};
///
/// let mut tree = NodeTree::new();
/// let menu = tree.insert(None, NodeData::element("menu"));
/// let open = tree.insert(Some(menu), NodeData::element("li"));
/// let save = tree.insert(
///     Some(menu),
///     NodeData::element("li").with_flags(ElementFlags::DISABLED),
/// );
///
/// assert_eq!(tree.first_child(menu), Some(open));
/// assert_eq!(tree.next_sibling(open), Some(save));
/// assert_eq!(tree.flags(save), Some(ElementFlags::DISABLED));
/// ```
#[derive(Clone, Debug, Default)]
pub struct NodeTree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl NodeTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new node as the last child of `parent` (or as a top-level node if `None`).
    pub fn insert(&mut self, parent: Option<NodeId>, data: NodeData) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, data));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, data)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent.filter(|&p| self.is_alive(p)) {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a node and its subtree. Stale ids are ignored.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Move `id` to the end of `new_parent`'s children (or detach it if `None`).
    ///
    /// Returns `false` without changing anything if either id is stale or if
    /// `new_parent` lies inside `id`'s own subtree.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        if let Some(p) = new_parent
            && (!self.is_alive(p) || self.is_inclusive_ancestor(id, p))
        {
            return false;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
        true
    }

    /// Replace the eligibility flags of a live node.
    pub fn set_flags(&mut self, id: NodeId, flags: ElementFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.data.flags = flags;
        }
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Data of a live node.
    pub fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.node_opt(id).map(|n| &n.data)
    }

    /// Tag name of a live node.
    pub fn tag(&self, id: NodeId) -> Option<&'static str> {
        self.data(id).map(|d| d.tag)
    }

    /// Flags of a live node.
    pub fn flags(&self, id: NodeId) -> Option<ElementFlags> {
        self.data(id).map(|d| d.flags)
    }

    /// Returns the parent of a node if live, or `None` for top-level or stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Get the children of a node, or empty slice if node is stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        match self.node_opt(id) {
            Some(n) => &n.children,
            None => &[],
        }
    }

    // --- internals ---

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.parent_of(node) {
                Some(p) => node = p,
                None => return false,
            }
        }
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        let parent_node = self.node_mut(parent);
        let index = parent_node.children.len();
        parent_node.children.push(id);
        let node = self.node_mut(id);
        node.parent = Some(parent);
        node.index = index;
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        let index = self.node(id).index;
        let p = self.node_mut(parent);
        p.children.remove(index);
        let shifted: SmallVec<[NodeId; 4]> = p.children[index..].iter().copied().collect();
        for (offset, sibling) in shifted.into_iter().enumerate() {
            self.node_mut(sibling).index = index + offset;
        }
        self.node_mut(id).parent = None;
    }

    fn sibling_at(&self, id: NodeId, forward: bool) -> Option<NodeId> {
        let node = self.node_opt(id)?;
        let siblings = self.children_of(node.parent?);
        if forward {
            siblings.get(node.index + 1).copied()
        } else {
            node.index.checked_sub(1).map(|i| siblings[i])
        }
    }
}

impl Node {
    fn new(generation: u32, data: NodeData) -> Self {
        Self {
            generation,
            parent: None,
            index: 0,
            children: SmallVec::new(),
            data,
        }
    }
}

impl NodeModel for NodeTree {
    type Id = NodeId;

    fn node_type(&self, node: NodeId) -> Option<NodeType> {
        self.data(node).map(|d| d.node_type)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent_of(node)
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.children_of(node).first().copied()
    }

    fn last_child(&self, node: NodeId) -> Option<NodeId> {
        self.children_of(node).last().copied()
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.sibling_at(node, true)
    }

    fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.sibling_at(node, false)
    }
}

impl ElementState for NodeTree {
    fn is_disabled(&self, node: NodeId) -> bool {
        self.has_flag(node, ElementFlags::DISABLED)
    }

    fn is_hidden(&self, node: NodeId) -> bool {
        self.has_flag(node, ElementFlags::HIDDEN)
    }

    fn is_aria_disabled(&self, node: NodeId) -> bool {
        self.has_flag(node, ElementFlags::ARIA_DISABLED)
    }

    fn is_aria_hidden(&self, node: NodeId) -> bool {
        self.has_flag(node, ElementFlags::ARIA_HIDDEN)
    }
}

impl NodeTree {
    fn has_flag(&self, node: NodeId, flag: ElementFlags) -> bool {
        self.flags(node).is_some_and(|f| f.contains(flag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_follow_insertion_order() {
        let mut tree = NodeTree::new();
        let root = tree.insert(None, NodeData::element("root"));
        let a = tree.insert(Some(root), NodeData::element("a"));
        let b = tree.insert(Some(root), NodeData::element("b"));
        let c = tree.insert(Some(root), NodeData::element("c"));

        assert_eq!(tree.first_child(root), Some(a));
        assert_eq!(tree.last_child(root), Some(c));
        assert_eq!(tree.next_sibling(a), Some(b));
        assert_eq!(tree.previous_sibling(b), Some(a));
        assert_eq!(tree.previous_sibling(a), None);
        assert_eq!(tree.next_sibling(c), None);
        assert_eq!(tree.next_sibling(root), None);
        assert_eq!(tree.parent(b), Some(root));
    }

    #[test]
    fn liveness_insert_remove_reuse() {
        let mut tree = NodeTree::new();
        let root = tree.insert(None, NodeData::element("root"));
        let a = tree.insert(Some(root), NodeData::element("a"));
        let inner = tree.insert(Some(a), NodeData::text());

        tree.remove(a);
        assert!(!tree.is_alive(a));
        assert!(!tree.is_alive(inner));
        assert!(tree.children_of(root).is_empty());
        assert_eq!(tree.node_type(a), None);
        assert_eq!(tree.parent(inner), None);

        // Slot reuse bumps the generation, so the old id stays stale.
        let b = tree.insert(Some(root), NodeData::element("b"));
        assert!(tree.is_alive(b));
        assert!(!tree.is_alive(a));
        assert!(!tree.is_alive(inner));
        assert_eq!(tree.tag(b), Some("b"));
    }

    #[test]
    fn reparent_refuses_cycles() {
        let mut tree = NodeTree::new();
        let root = tree.insert(None, NodeData::element("root"));
        let a = tree.insert(Some(root), NodeData::element("a"));
        let b = tree.insert(Some(a), NodeData::element("b"));

        assert!(!tree.reparent(a, Some(b)));
        assert!(!tree.reparent(a, Some(a)));
        assert_eq!(tree.parent_of(b), Some(a));

        assert!(tree.reparent(b, Some(root)));
        assert_eq!(tree.children_of(root), &[a, b]);
        assert!(tree.children_of(a).is_empty());

        assert!(tree.reparent(a, None));
        assert_eq!(tree.parent_of(a), None);
    }

    #[test]
    fn sibling_links_survive_detaching_from_the_middle() {
        let mut tree = NodeTree::new();
        let row = tree.insert(None, NodeData::element("tr"));
        let cells: Vec<_> = (0..6)
            .map(|_| tree.insert(Some(row), NodeData::element("td")))
            .collect();

        tree.remove(cells[1]);
        assert!(tree.reparent(cells[3], None));
        assert_eq!(tree.children_of(row), &[cells[0], cells[2], cells[4], cells[5]]);
        assert_eq!(tree.next_sibling(cells[0]), Some(cells[2]));
        assert_eq!(tree.next_sibling(cells[2]), Some(cells[4]));
        assert_eq!(tree.previous_sibling(cells[5]), Some(cells[4]));
        assert_eq!(tree.previous_sibling(cells[4]), Some(cells[2]));
        assert_eq!(tree.next_sibling(cells[3]), None);

        assert!(tree.reparent(cells[3], Some(row)));
        assert_eq!(tree.next_sibling(cells[5]), Some(cells[3]));
        assert_eq!(tree.previous_sibling(cells[3]), Some(cells[5]));
    }

    #[test]
    fn element_state_reads_flags() {
        let mut tree = NodeTree::new();
        let a = tree.insert(
            None,
            NodeData::element("a").with_flags(ElementFlags::DISABLED | ElementFlags::ARIA_HIDDEN),
        );
        assert!(tree.is_disabled(a));
        assert!(tree.is_aria_hidden(a));
        assert!(!tree.is_hidden(a));
        assert!(!tree.is_aria_disabled(a));

        tree.set_flags(a, ElementFlags::HIDDEN);
        assert!(tree.is_hidden(a));
        assert!(!tree.is_disabled(a));
    }
}
