// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node type tags, `whatToShow` masks, and filter decisions.

/// Discrete type tag of a host node.
///
/// The discriminants are the DOM `Node.nodeType` values, so the mask bit for a
/// type is `1 << (discriminant - 1)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NodeType {
    /// An element, the usual navigation target.
    Element = 1,
    /// An attribute node.
    Attribute = 2,
    /// A text run.
    Text = 3,
    /// A CDATA section.
    CdataSection = 4,
    /// An entity reference.
    EntityReference = 5,
    /// An entity declaration.
    Entity = 6,
    /// A processing instruction.
    ProcessingInstruction = 7,
    /// A comment.
    Comment = 8,
    /// A document root.
    Document = 9,
    /// A doctype declaration.
    DocumentType = 10,
    /// A detached fragment root.
    DocumentFragment = 11,
    /// A notation declaration.
    Notation = 12,
}

impl NodeType {
    /// The [`WhatToShow`] bit that makes nodes of this type visitable.
    pub const fn show_flag(self) -> WhatToShow {
        WhatToShow::from_bits_retain(1 << (self as u32 - 1))
    }
}

bitflags::bitflags! {
    /// Mask restricting which node types a walker considers before filtering.
    ///
    /// A node whose type bit is clear is treated as [`FilterDecision::Skip`]: it is
    /// never returned, but its children are still visited.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WhatToShow: u32 {
        /// Show [`NodeType::Element`].
        const ELEMENT                = 0x0000_0001;
        /// Show [`NodeType::Attribute`].
        const ATTRIBUTE              = 0x0000_0002;
        /// Show [`NodeType::Text`].
        const TEXT                   = 0x0000_0004;
        /// Show [`NodeType::CdataSection`].
        const CDATA_SECTION          = 0x0000_0008;
        /// Show [`NodeType::EntityReference`].
        const ENTITY_REFERENCE       = 0x0000_0010;
        /// Show [`NodeType::Entity`].
        const ENTITY                 = 0x0000_0020;
        /// Show [`NodeType::ProcessingInstruction`].
        const PROCESSING_INSTRUCTION = 0x0000_0040;
        /// Show [`NodeType::Comment`].
        const COMMENT                = 0x0000_0080;
        /// Show [`NodeType::Document`].
        const DOCUMENT               = 0x0000_0100;
        /// Show [`NodeType::DocumentType`].
        const DOCUMENT_TYPE          = 0x0000_0200;
        /// Show [`NodeType::DocumentFragment`].
        const DOCUMENT_FRAGMENT      = 0x0000_0400;
        /// Show [`NodeType::Notation`].
        const NOTATION               = 0x0000_0800;
        /// Show every node type.
        const ALL                    = 0xFFFF_FFFF;
    }
}

impl Default for WhatToShow {
    fn default() -> Self {
        Self::ALL
    }
}

impl WhatToShow {
    /// Returns `true` if nodes of type `ty` pass this mask.
    pub fn shows(self, ty: NodeType) -> bool {
        self.intersects(ty.show_flag())
    }
}

/// Result of filtering a single node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FilterDecision {
    /// The node is a valid destination; traversal stops here.
    Accept,
    /// The node and its entire subtree are excluded from descent.
    Reject,
    /// The node itself is excluded, but its children are still visited.
    Skip,
}
