// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation error types.

use thiserror::Error;
use understory_tree_walker::WalkError;

use crate::direction::Direction;

/// Errors raised while resolving a navigation request.
///
/// "Nothing further in that direction" is not an error; it is `Ok(None)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The navigation config cannot be used against this model.
    #[error("navigation configuration error: {0}")]
    Configuration(&'static str),

    /// A hierarchy-only direction was requested against a flat group.
    #[error("{0:?} is not supported for flat groups")]
    UnsupportedDirection(Direction),

    /// The underlying tree walk failed.
    #[error(transparent)]
    Walk(#[from] WalkError),
}
