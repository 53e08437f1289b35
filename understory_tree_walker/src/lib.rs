// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Tree Walker: a DOM-style `TreeWalker` over any host hierarchy.
//!
//! ## Overview
//!
//! This crate re-implements the DOM `TreeWalker` traversal algorithm without a
//! DOM. A [`TreeWalker`] is a cursor over the subtree rooted at a fixed root. It
//! exposes parent, first/last child, sibling, and document-order (pre-order)
//! navigation, constrained by:
//!
//! - a [`WhatToShow`] mask of node types that are even considered, and
//! - a [`NodeFilter`] that returns a [`FilterDecision`] for every candidate:
//!   `Accept` (stop here), `Reject` (exclude the node and prune its subtree),
//!   or `Skip` (exclude the node but still visit its children).
//!
//! The walker is pure traversal. It never mutates the host, moves focus, or
//! decides *whether* to move; policy layers (such as keyboard navigation for
//! menus, tab lists, or tree views) sit on top and only consume the node it
//! returns.
//!
//! ## Host model
//!
//! Hosts expose structure through [`NodeModel`]: a node type per id plus
//! parent, child, and sibling links. [`ElementState`] adds the disabled/hidden
//! markers that default eligibility filters read. [`NodeTree`] is a small
//! arena-backed host implementing both, for callers that do not already own a
//! tree.
//!
//! ## Results and errors
//!
//! Navigation methods return `Result<Option<Id>, WalkError>`:
//!
//! - `Ok(Some(node))`: the cursor moved to `node`.
//! - `Ok(None)`: nothing further in that direction; the cursor is unchanged.
//! - `Err(WalkError::MalformedStructure { .. })`: the operation ran past its
//!   step limit, which on a finite host means the links form a cycle.
//!
//! ## Example
//!
//! ```rust
//! use understory_tree_walker::{AcceptAll, NodeData, NodeTree, TreeWalker, WhatToShow};
//!
//! // R -> [X, Y -> [Z]]
//! let mut tree = NodeTree::new();
//! let r = tree.insert(None, NodeData::element("R"));
//! let x = tree.insert(Some(r), NodeData::element("X"));
//! let y = tree.insert(Some(r), NodeData::element("Y"));
//! let z = tree.insert(Some(y), NodeData::element("Z"));
//!
//! let mut walker = TreeWalker::new(&tree, r, WhatToShow::ALL, AcceptAll).unwrap();
//! let order: Vec<_> = walker.following(&tree).collect::<Result<_, _>>().unwrap();
//! assert_eq!(order, vec![x, y, z]);
//! assert_eq!(walker.previous_node(&tree), Ok(Some(y)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `thiserror` and `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod model;
mod tree;
mod types;
mod walker;

pub use error::WalkError;
pub use model::{AcceptAll, ElementState, NodeFilter, NodeModel};
pub use tree::{ElementFlags, NodeData, NodeId, NodeTree};
pub use types::{FilterDecision, NodeType, WhatToShow};
pub use walker::{DEFAULT_STEP_LIMIT, TreeWalker, Walk};
