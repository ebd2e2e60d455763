// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use richtext_style::Style;

/// Stable identifier of a node within its [`Document`](super::Document).
///
/// Identifiers are indices into the document's node arena and are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Returns the arena index of the node.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The five node kinds of a rich text tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root of the tree. Think `<body>`.
    RichText,
    /// A block container. Think `<div>`.
    Box,
    /// A run of words broken into lines.
    Paragraph,
    /// The unit between which line wrapping occurs.
    Word,
    /// The smallest non-splittable run of characters sharing one style.
    Syllable,
}

impl NodeKind {
    /// Returns whether a node of this kind may have a `child` of the given kind.
    pub const fn can_contain(self, child: Self) -> bool {
        matches!(
            (self, child),
            (Self::RichText, Self::Box)
                | (Self::Box, Self::Box | Self::Paragraph)
                | (Self::Paragraph, Self::Word)
                | (Self::Word, Self::Syllable)
        )
    }

    /// Returns the lowercase name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RichText => "richtext",
            Self::Box => "box",
            Self::Paragraph => "paragraph",
            Self::Word => "word",
            Self::Syllable => "syllable",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a node hangs in the tree.
///
/// A node moves from `Detached` to `Attached` exactly once. Removal retires it for good.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Link {
    Detached,
    Attached(NodeId),
    Removed,
}

#[derive(Clone, Debug)]
pub(crate) struct SyllableData {
    /// Text with the soft hyphen marker stripped.
    pub(crate) text: String,
    pub(crate) soft_hyphen: bool,
    pub(crate) whitespace_style: Option<Style>,
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) link: Link,
    pub(crate) children: Vec<NodeId>,
    pub(crate) style: Style,
    pub(crate) syllable: Option<SyllableData>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, style: Style) -> Self {
        Self {
            kind,
            link: Link::Detached,
            children: Vec::new(),
            style,
            syllable: None,
        }
    }

    pub(crate) fn parent(&self) -> Option<NodeId> {
        match self.link {
            Link::Attached(parent) => Some(parent),
            Link::Detached | Link::Removed => None,
        }
    }
}
