// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walker error types.

use thiserror::Error;

/// Errors raised by [`TreeWalker`](crate::TreeWalker).
///
/// Running out of nodes in a direction is not an error; operations report it
/// as `Ok(None)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum WalkError {
    /// The walker was constructed or repositioned with an unusable node.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A single operation exceeded its step budget, which only happens when
    /// parent or sibling links form a cycle (or the limit is set too low).
    #[error("malformed structure: no result after {steps} steps")]
    MalformedStructure {
        /// Number of link hops taken before giving up.
        steps: usize,
    },
}
