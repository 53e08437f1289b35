// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Key Walker: keyboard navigation policy for accessible widgets.
//!
//! ## Overview
//!
//! Widget controllers (menus, tab lists, radio groups, tree views, table rows)
//! receive a key press, turn it into an abstract [`Direction`], and ask
//! [`get_target`] where focus should go. This crate answers that question and
//! nothing else: it does not move focus, expand submenus, or decide whether a
//! key press should be handled at all.
//!
//! A [`NavigationConfig`] describes the structure being navigated:
//!
//! - [`NavRoot::Hierarchical`]: a single root node. Directions are resolved with
//!   a cached [`TreeWalker`](understory_tree_walker::TreeWalker), and `Parent`,
//!   `Child`, and `LastChild` move between levels.
//! - [`NavRoot::Group`]: a flat, ordered list of items. Directions are resolved
//!   by index; hierarchy-only directions fail with
//!   [`NavigationError::UnsupportedDirection`].
//!
//! Both modes share the config's filter (by default [`DefaultFilter`], which
//! rejects disabled and hidden items) and its cycling flag, which wraps
//! `Previous`/`Next` to the opposite end.
//!
//! ## Example
//!
//! ```rust
//! use understory_key_walker::keys::{Key, KeyMap, Orientation};
//! use understory_key_walker::{NavigationConfig, get_target};
//! use understory_tree_walker::{ElementFlags, NodeData, NodeTree};
//!
//! // menu -> [cut, copy(disabled), paste]
//! let mut tree = NodeTree::new();
//! let menu = tree.insert(None, NodeData::element("menu"));
//! let cut = tree.insert(Some(menu), NodeData::element("menuitem"));
//! let _copy = tree.insert(
//!     Some(menu),
//!     NodeData::element("menuitem").with_flags(ElementFlags::DISABLED),
//! );
//! let paste = tree.insert(Some(menu), NodeData::element("menuitem"));
//!
//! let keys = KeyMap::new(Orientation::Vertical);
//! let mut config = NavigationConfig::hierarchical(menu).with_cycle(true);
//!
//! let down = keys.direction_for(Key::ArrowDown).unwrap();
//! assert_eq!(get_target(&mut config, &tree, cut, down), Ok(Some(paste)));
//! assert_eq!(get_target(&mut config, &tree, paste, down), Ok(Some(cut)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `understory_tree_walker`,
//!   `thiserror`, and `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod direction;
mod error;
mod filter;
pub mod keys;
mod navigate;

pub use config::{NavRoot, NavigationConfig};
pub use direction::{Direction, GroupDirection};
pub use error::NavigationError;
pub use filter::{DefaultFilter, is_eligible};
pub use navigate::{get_target, navigate_group};
