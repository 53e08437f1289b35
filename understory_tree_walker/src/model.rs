// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host model traits consumed by the walker.
//!
//! The walker never owns nodes. It reads structure through [`NodeModel`] and
//! asks a [`NodeFilter`] what to do with each candidate. Hosts with per-node
//! eligibility state (disabled, hidden) additionally expose it through
//! [`ElementState`] so that policy layers can build default filters.

use crate::types::{FilterDecision, NodeType};

/// Read-only view of a host hierarchy.
///
/// Links are pointer-style (parent, first/last child, siblings) rather than
/// child slices, which matches DOM-like hosts. A corrupt host can therefore
/// form cycles; the walker bounds every operation with a step counter and
/// reports [`WalkError::MalformedStructure`](crate::WalkError::MalformedStructure)
/// instead of spinning.
pub trait NodeModel {
    /// Small, copyable node handle.
    type Id: Copy + Eq;

    /// Type tag of `node`, or `None` if `node` is not a live node of this model.
    fn node_type(&self, node: Self::Id) -> Option<NodeType>;

    /// Parent of `node`, or `None` for detached or top-level nodes.
    fn parent(&self, node: Self::Id) -> Option<Self::Id>;

    /// First child of `node` in document order.
    fn first_child(&self, node: Self::Id) -> Option<Self::Id>;

    /// Last child of `node` in document order.
    fn last_child(&self, node: Self::Id) -> Option<Self::Id>;

    /// Following sibling of `node`.
    fn next_sibling(&self, node: Self::Id) -> Option<Self::Id>;

    /// Preceding sibling of `node`.
    fn previous_sibling(&self, node: Self::Id) -> Option<Self::Id>;
}

/// Eligibility markers of a host element.
///
/// These mirror the `disabled`, `hidden`, `aria-disabled="true"` and
/// `aria-hidden="true"` markers of an HTML element.
pub trait ElementState: NodeModel {
    /// The element carries a `disabled` marker.
    fn is_disabled(&self, node: Self::Id) -> bool;

    /// The element carries a `hidden` marker.
    fn is_hidden(&self, node: Self::Id) -> bool;

    /// The element carries `aria-disabled="true"`.
    fn is_aria_disabled(&self, node: Self::Id) -> bool;

    /// The element carries `aria-hidden="true"`.
    fn is_aria_hidden(&self, node: Self::Id) -> bool;
}

/// Per-node filter callback.
///
/// Implemented for any `Fn(&M, M::Id) -> FilterDecision`, so most callers pass a
/// closure.
pub trait NodeFilter<M: NodeModel + ?Sized> {
    /// Decide what the walker does with `node`.
    fn accept_node(&self, model: &M, node: M::Id) -> FilterDecision;
}

impl<M, F> NodeFilter<M> for F
where
    M: NodeModel + ?Sized,
    F: Fn(&M, M::Id) -> FilterDecision,
{
    fn accept_node(&self, model: &M, node: M::Id) -> FilterDecision {
        self(model, node)
    }
}

/// Filter that accepts every node passing the `whatToShow` mask.
///
/// This is the walker's equivalent of a `null` DOM filter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl<M: NodeModel + ?Sized> NodeFilter<M> for AcceptAll {
    fn accept_node(&self, _model: &M, _node: M::Id) -> FilterDecision {
        FilterDecision::Accept
    }
}
