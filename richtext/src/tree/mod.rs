// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document tree.
//!
//! Nodes live in an arena owned by the [`Document`] and are addressed by [`NodeId`]. Every node
//! is created detached and can be inserted under a parent exactly once; the
//! [allowed child kinds](NodeKind::can_contain) are checked on insertion.

mod node;
mod syllable;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use richtext_style::{ComputedStyle, Property, Style, Value};

use crate::measure::{Paragraph, Syllable, Word};
use crate::{Error, ErrorKind};

pub(crate) use node::{Link, Node, SyllableData};
pub use node::{NodeId, NodeKind};
pub use syllable::{SyllableSpec, SOFT_HYPHEN};

/// A rich text tree rooted in a [`RichText`](NodeKind::RichText) node.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Creates a document whose root carries `style`.
    ///
    /// The root has nothing to inherit from, so its style must not be empty.
    pub fn new(style: Style) -> Result<Self, Error> {
        if style.is_empty() {
            return Err(Error::new(ErrorKind::EmptyRootStyle));
        }
        Ok(Self {
            nodes: alloc::vec![Node::new(NodeKind::RichText, style)],
        })
    }

    /// Returns the root node.
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Returns the number of nodes ever created in this document, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; a document has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn create(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Creates a detached box.
    pub fn create_box(&mut self, style: Style) -> NodeId {
        self.create(Node::new(NodeKind::Box, style))
    }

    /// Creates a detached paragraph.
    pub fn create_paragraph(&mut self, style: Style) -> NodeId {
        self.create(Node::new(NodeKind::Paragraph, style))
    }

    /// Creates a detached word.
    pub fn create_word(&mut self, style: Style) -> NodeId {
        self.create(Node::new(NodeKind::Word, style))
    }

    /// Creates a detached syllable from `text`.
    ///
    /// One soft hyphen ([`SOFT_HYPHEN`]) is stripped from the text and recorded as the
    /// syllable's [soft hyphen flag](Syllable::soft_hyphen). The marker may appear anywhere in
    /// the text, but only the flag is kept: its position is discarded, and the syllable is
    /// treated as ending in a soft break. Split the text into two syllables to break at an
    /// interior position. A second marker fails with
    /// [`MisplacedSoftBreak`](ErrorKind::MisplacedSoftBreak); text that is empty before or after
    /// stripping fails with [`EmptySyllable`](ErrorKind::EmptySyllable).
    pub fn create_syllable(&mut self, text: &str, style: Style) -> Result<NodeId, Error> {
        self.create_syllable_with(SyllableSpec::new(text).with_style(style))
    }

    /// Creates a detached syllable from a full [`SyllableSpec`].
    pub fn create_syllable_with(&mut self, spec: SyllableSpec<'_>) -> Result<NodeId, Error> {
        let (text, marker) = syllable::strip_soft_hyphen(spec.text)?;
        let mut node = Node::new(NodeKind::Syllable, spec.style);
        node.syllable = Some(SyllableData {
            text,
            soft_hyphen: marker || spec.soft_hyphen,
            whitespace_style: spec.whitespace_style,
        });
        Ok(self.create(node))
    }

    /// Inserts the detached node `child` into `parent`'s children at `index`.
    ///
    /// Fails with
    /// - [`InvalidChildKind`](ErrorKind::InvalidChildKind) if `parent` may not contain `child`,
    /// - [`AlreadyParented`](ErrorKind::AlreadyParented) if `child` was inserted before,
    /// - [`WouldCreateCycle`](ErrorKind::WouldCreateCycle) if `child` is `parent` or one of
    ///   its ancestors,
    /// - [`IndexOutOfBounds`](ErrorKind::IndexOutOfBounds) if `index` is greater than the
    ///   number of children.
    ///
    /// Nothing is modified when insertion fails.
    pub fn insert(&mut self, parent: NodeId, index: usize, child: NodeId) -> Result<(), Error> {
        let fail = |kind| -> Result<(), Error> { Err(Error::new(kind).with_node(child)) };
        if !self.kind(parent).can_contain(self.kind(child)) {
            return fail(ErrorKind::InvalidChildKind);
        }
        if self.node(child).link != Link::Detached {
            return fail(ErrorKind::AlreadyParented);
        }
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return fail(ErrorKind::WouldCreateCycle);
        }
        if index > self.node(parent).children.len() {
            return fail(ErrorKind::IndexOutOfBounds);
        }
        self.node_mut(parent).children.insert(index, child);
        self.node_mut(child).link = Link::Attached(parent);
        Ok(())
    }

    /// Inserts `child` after `parent`'s last child, see [`insert`](Self::insert).
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> Result<(), Error> {
        let index = self.node(parent).children.len();
        self.insert(parent, index, child)
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Returns the kind of `id`.
    ///
    /// # Panics
    ///
    /// Node accessors panic if `id` was not created by this document.
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind
    }

    /// Returns the parent of `id`, if it has been inserted.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent()
    }

    /// Returns the children of `id` in order. Syllables have none.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Returns the local style of `id`.
    pub fn style(&self, id: NodeId) -> &Style {
        &self.node(id).style
    }

    /// Returns the local style of `id` for modification.
    pub fn style_mut(&mut self, id: NodeId) -> &mut Style {
        &mut self.node_mut(id).style
    }

    /// Returns `id` followed by its ancestors up to the root of its tree.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            next: Some(id),
        }
    }

    /// Returns the local styles along the resolution chain of `id`, nearest first.
    pub(crate) fn style_chain(&self, id: NodeId) -> impl Iterator<Item = &Style> + Clone + '_ {
        self.ancestors(id).map(|ancestor| self.style(ancestor))
    }

    /// Resolves the effective value of `property` at `id`.
    ///
    /// The value is the nearest local declaration on the path to the root. When no node
    /// declares it, the schema's initial value applies, or
    /// [`MissingRequiredValue`](ErrorKind::MissingRequiredValue) is raised for required
    /// properties. For a node that has not been inserted yet, the chain ends at its topmost
    /// ancestor.
    pub fn resolve(&self, id: NodeId, property: Property) -> Result<Value, Error> {
        richtext_style::cascade(self.style_chain(id), property)
            .map_err(|err| Error::from(err).with_node(id))
    }

    /// Resolves the property called `name` at `id`, see [`resolve`](Self::resolve).
    pub fn resolve_named(&self, id: NodeId, name: &str) -> Result<Value, Error> {
        richtext_style::cascade_named(self.style_chain(id), name)
            .map_err(|err| Error::from(err).with_node(id))
    }

    /// Resolves every property at `id` in a single walk to the root.
    pub fn computed_style(&self, id: NodeId) -> Result<ComputedStyle, Error> {
        ComputedStyle::from_chain(self.style_chain(id))
            .map_err(|err| Error::from(err).with_node(id))
    }

    /// Returns a syllable view of `id`.
    pub fn syllable(&self, id: NodeId) -> Result<Syllable<'_>, Error> {
        match &self.node(id).syllable {
            Some(data) => Ok(Syllable::new(self, id, data)),
            None => Err(Error::new(ErrorKind::WrongNodeKind).with_node(id)),
        }
    }

    /// Returns a word view of `id`.
    pub fn word(&self, id: NodeId) -> Result<Word<'_>, Error> {
        self.expect_kind(id, NodeKind::Word)?;
        Ok(Word::new(self, id))
    }

    /// Returns a paragraph view of `id`.
    pub fn paragraph(&self, id: NodeId) -> Result<Paragraph<'_>, Error> {
        self.expect_kind(id, NodeKind::Paragraph)?;
        Ok(Paragraph::new(self, id))
    }

    fn expect_kind(&self, id: NodeId, kind: NodeKind) -> Result<(), Error> {
        if self.kind(id) == kind {
            Ok(())
        } else {
            Err(Error::new(ErrorKind::WrongNodeKind).with_node(id))
        }
    }

    /// Removes every descendant of `id` that ends up without children, bottom-up.
    ///
    /// A box holding only empty paragraphs is removed along with them. Syllables are never
    /// empty. Removed nodes stay in the arena but can never be inserted again.
    pub fn remove_empty_children(&mut self, id: NodeId) {
        let children = core::mem::take(&mut self.node_mut(id).children);
        let mut kept = Vec::with_capacity(children.len());
        for child in children {
            self.remove_empty_children(child);
            let node = self.node_mut(child);
            if node.kind != NodeKind::Syllable && node.children.is_empty() {
                node.link = Link::Removed;
            } else {
                kept.push(child);
            }
        }
        self.node_mut(id).children = kept;
    }

    /// Returns an indented dump of the tree, one node per line.
    ///
    /// Each line names the node kind and the properties set locally; syllables also show
    /// their text and a trailing `-` when they end in a soft break.
    ///
    /// ```
    /// use richtext::{Document, Style};
    ///
    /// let mut doc = Document::new(Style::new().font_size(10.0)).unwrap();
    /// let block = doc.create_box(Style::new());
    /// doc.append(doc.root(), block).unwrap();
    /// assert_eq!(doc.outline(), "richtext [font-size]\n  box\n");
    /// ```
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let mut stack = alloc::vec![(self.root(), 0_usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id);
            for _ in 0..depth {
                out.push_str("  ");
            }
            out.push_str(node.kind.name());
            if let Some(data) = &node.syllable {
                let _ = write!(out, " {:?}", data.text);
                if data.soft_hyphen {
                    out.push_str(" -");
                }
            }
            let mut properties = node.style.iter().map(|(property, _)| property.name());
            if let Some(first) = properties.next() {
                let _ = write!(out, " [{first}");
                for name in properties {
                    let _ = write!(out, ", {name}");
                }
                out.push(']');
            }
            out.push('\n');
            stack.extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
        }
        out
    }
}

/// Iterator over a node and its ancestors, see [`Document::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.doc.parent(id);
        Some(id)
    }
}

impl core::iter::FusedIterator for Ancestors<'_> {}
