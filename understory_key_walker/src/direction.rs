// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Abstract navigation directions.

use crate::error::NavigationError;

/// A requested focus movement.
///
/// [`Direction::Parent`], [`Direction::Child`] and [`Direction::LastChild`] only
/// make sense for hierarchical roots; see [`GroupDirection`] for the subset that
/// applies to flat groups.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// First eligible sibling of the current item.
    First,
    /// Last eligible sibling of the current item.
    Last,
    /// Previous eligible item.
    Previous,
    /// Next eligible item.
    Next,
    /// Nearest eligible ancestor.
    Parent,
    /// First eligible item below the root.
    Top,
    /// Last eligible item below the root.
    End,
    /// First eligible item below the current item.
    Child,
    /// Last eligible item below the current item.
    LastChild,
}

impl Direction {
    /// Every direction, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::First,
        Self::Last,
        Self::Previous,
        Self::Next,
        Self::Parent,
        Self::Top,
        Self::End,
        Self::Child,
        Self::LastChild,
    ];

    /// Returns `true` if `self` is a member of `set`.
    pub fn is_one_of(self, set: &[Self]) -> bool {
        set.contains(&self)
    }

    /// Returns `true` for directions that need a hierarchy to mean anything.
    pub const fn is_hierarchy_only(self) -> bool {
        matches!(self, Self::Parent | Self::Child | Self::LastChild)
    }

    /// Where a cycling walk lands when this direction runs out.
    ///
    /// `Previous` wraps to `Last` and `Next` wraps to `First`; no other
    /// direction cycles.
    pub const fn wrap_target(self) -> Option<Self> {
        match self {
            Self::Previous => Some(Self::Last),
            Self::Next => Some(Self::First),
            _ => None,
        }
    }
}

/// The directions that apply to a flat, ordered group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupDirection {
    /// First eligible item.
    First,
    /// Last eligible item.
    Last,
    /// Previous eligible item.
    Previous,
    /// Next eligible item.
    Next,
    /// Same as [`GroupDirection::First`] for a flat group.
    Top,
    /// Same as [`GroupDirection::Last`] for a flat group.
    End,
}

impl From<GroupDirection> for Direction {
    fn from(direction: GroupDirection) -> Self {
        match direction {
            GroupDirection::First => Self::First,
            GroupDirection::Last => Self::Last,
            GroupDirection::Previous => Self::Previous,
            GroupDirection::Next => Self::Next,
            GroupDirection::Top => Self::Top,
            GroupDirection::End => Self::End,
        }
    }
}

impl TryFrom<Direction> for GroupDirection {
    type Error = NavigationError;

    fn try_from(direction: Direction) -> Result<Self, Self::Error> {
        match direction {
            Direction::First => Ok(Self::First),
            Direction::Last => Ok(Self::Last),
            Direction::Previous => Ok(Self::Previous),
            Direction::Next => Ok(Self::Next),
            Direction::Top => Ok(Self::Top),
            Direction::End => Ok(Self::End),
            Direction::Parent | Direction::Child | Direction::LastChild => {
                Err(NavigationError::UnsupportedDirection(direction))
            }
        }
    }
}
