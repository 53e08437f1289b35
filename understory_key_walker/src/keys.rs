// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping navigation keys to [`Direction`]s.
//!
//! Composite widgets agree on how arrows, Home, and End move focus, differing
//! only in orientation, writing direction, and whether they nest:
//!
//! - Arrows along the widget's axis step `Previous`/`Next`. On the horizontal
//!   axis, right-to-left text swaps Left and Right.
//! - In nested widgets, arrows across the axis move between levels. A vertical
//!   tree or menu opens a child with the forward arrow and returns to the parent
//!   with the backward one; a horizontal menubar opens a submenu on its first
//!   item with Down and on its last item with Up.
//! - Home and End move to the first and last item of the current level.
//!
//! ```rust
//! use understory_key_walker::Direction;
//! use understory_key_walker::keys::{Key, KeyMap, Orientation};
//!
//! let tabs = KeyMap::new(Orientation::Horizontal);
//! assert_eq!(tabs.direction_for(Key::ArrowRight), Some(Direction::Next));
//! assert_eq!(tabs.direction_for(Key::ArrowDown), None);
//!
//! let tree_view = KeyMap::new(Orientation::Vertical).with_nested(true);
//! assert_eq!(tree_view.direction_for(Key::ArrowRight), Some(Direction::Child));
//! assert_eq!(tree_view.direction_for(Key::ArrowLeft), Some(Direction::Parent));
//! ```

use crate::direction::Direction;

/// A navigation key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
}

/// Main axis of a widget's items.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Items run left to right (tab lists, menubars, toolbars).
    Horizontal,
    /// Items run top to bottom (menus, listboxes, tree views, table rows).
    #[default]
    Vertical,
}

/// Writing direction of the widget's content.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Key-to-direction policy for one widget.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyMap {
    /// Main axis.
    pub orientation: Orientation,
    /// Writing direction; only affects Left/Right.
    pub text_direction: TextDirection,
    /// Whether cross-axis arrows move between levels.
    pub nested: bool,
}

impl KeyMap {
    /// A flat, left-to-right key map along `orientation`.
    pub const fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            text_direction: TextDirection::Ltr,
            nested: false,
        }
    }

    /// Set the writing direction.
    #[must_use]
    pub const fn with_text_direction(mut self, text_direction: TextDirection) -> Self {
        self.text_direction = text_direction;
        self
    }

    /// Enable or disable cross-axis level changes.
    #[must_use]
    pub const fn with_nested(mut self, nested: bool) -> Self {
        self.nested = nested;
        self
    }

    /// The direction `key` requests, or `None` if this widget ignores it.
    pub fn direction_for(&self, key: Key) -> Option<Direction> {
        let (axis, forward) = match key {
            Key::Home => return Some(Direction::First),
            Key::End => return Some(Direction::Last),
            Key::ArrowUp => (Orientation::Vertical, false),
            Key::ArrowDown => (Orientation::Vertical, true),
            Key::ArrowLeft => (Orientation::Horizontal, self.text_direction == TextDirection::Rtl),
            Key::ArrowRight => (Orientation::Horizontal, self.text_direction == TextDirection::Ltr),
        };

        if axis == self.orientation {
            return Some(if forward {
                Direction::Next
            } else {
                Direction::Previous
            });
        }
        if !self.nested {
            return None;
        }
        Some(match (self.orientation, forward) {
            (_, true) => Direction::Child,
            (Orientation::Vertical, false) => Direction::Parent,
            (Orientation::Horizontal, false) => Direction::LastChild,
        })
    }
}
