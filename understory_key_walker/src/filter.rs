// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The default eligibility filter.

use understory_tree_walker::{ElementState, FilterDecision, NodeFilter};

/// Filter used when a config does not supply one.
///
/// Rejects any element marked disabled, hidden, `aria-disabled="true"`, or
/// `aria-hidden="true"`, and accepts everything else. Rejection prunes the
/// whole subtree in hierarchical mode, so the children of a hidden submenu are
/// never reached either.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultFilter;

impl<M: ElementState + ?Sized> NodeFilter<M> for DefaultFilter {
    fn accept_node(&self, model: &M, node: M::Id) -> FilterDecision {
        if is_eligible(model, node) {
            FilterDecision::Accept
        } else {
            FilterDecision::Reject
        }
    }
}

/// Returns `true` if `node` carries none of the disabled or hidden markers.
pub fn is_eligible<M: ElementState + ?Sized>(model: &M, node: M::Id) -> bool {
    !(model.is_disabled(node)
        || model.is_hidden(node)
        || model.is_aria_disabled(node)
        || model.is_aria_hidden(node))
}
