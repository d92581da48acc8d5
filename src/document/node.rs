//! YAML node representation.
//!
//! This module provides the node model that yit's iterators and predicates
//! operate on. The [`TreeNode`] trait is the boundary the iteration core is
//! written against: any tree whose nodes expose a kind, a scalar value, a short
//! tag and an ordered list of children can be traversed. [`YamlNode`] is the
//! implementation produced by yit's own parser.
//!
//! Mapping nodes store their entries as a flat `key, value, key, value, ...`
//! child list in declaration order, so a mapping always has an even number of
//! children.
//!
//! # Example
//!
//! ```
//! use yit::document::node::{NodeKind, TreeNode, YamlNode};
//!
//! let doc = YamlNode::document(YamlNode::mapping([
//!     (YamlNode::scalar("name"), YamlNode::scalar("yit")),
//!     (YamlNode::scalar("version"), YamlNode::scalar("1")),
//! ]));
//!
//! let root = &doc.children()[0];
//! assert_eq!(root.kind(), NodeKind::Mapping);
//! assert_eq!(root.children().len(), 4);
//! assert_eq!(root.children()[3].short_tag(), "!!int");
//! ```

use std::fmt;
use std::slice::ChunksExact;
use std::str::FromStr;

use super::tag;

/// The structural category of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A document in a YAML stream; its single child is the root value
    Document,
    /// An ordered list of nodes
    Sequence,
    /// Key/value pairs stored as interleaved children
    Mapping,
    /// A leaf value
    Scalar,
    /// A reference to an anchored node, never followed
    Alias,
}

impl NodeKind {
    /// Returns true for the kinds that own children: documents, sequences
    /// and mappings.
    ///
    /// # Example
    ///
    /// ```
    /// use yit::document::node::NodeKind;
    ///
    /// assert!(NodeKind::Mapping.is_container());
    /// assert!(!NodeKind::Alias.is_container());
    /// ```
    pub fn is_container(self) -> bool {
        matches!(
            self,
            NodeKind::Document | NodeKind::Sequence | NodeKind::Mapping
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Sequence => "sequence",
            NodeKind::Mapping => "mapping",
            NodeKind::Scalar => "scalar",
            NodeKind::Alias => "alias",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string does not name a [`NodeKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    /// The rejected input
    pub input: String,
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown node kind '{}', expected one of document, sequence, mapping, scalar, alias",
            self.input
        )
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for NodeKind {
    type Err = ParseKindError;

    /// Parses a kind name. Matching is case-insensitive and accepts the
    /// short forms `doc`, `seq` and `map`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "document" | "doc" => Ok(NodeKind::Document),
            "sequence" | "seq" => Ok(NodeKind::Sequence),
            "mapping" | "map" => Ok(NodeKind::Mapping),
            "scalar" => Ok(NodeKind::Scalar),
            "alias" => Ok(NodeKind::Alias),
            _ => Err(ParseKindError {
                input: s.to_string(),
            }),
        }
    }
}

/// Presentation style of a scalar in the source text.
///
/// Only plain scalars take part in implicit tag resolution; every other style
/// is always a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalarStyle {
    #[default]
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Literal,
    Folded,
}

impl ScalarStyle {
    pub fn is_plain(self) -> bool {
        matches!(self, ScalarStyle::Plain)
    }
}

/// Read-only view of a node in a document tree.
///
/// Everything in [`crate::iter`] and [`crate::predicate`] is generic over this
/// trait. Implementors must keep mapping children paired: an even number of
/// children alternating key and value.
pub trait TreeNode: Sized {
    /// The structural category of this node.
    fn kind(&self) -> NodeKind;

    /// The scalar payload. Empty for containers.
    fn value(&self) -> &str;

    /// The node's tag in short form (`!!str`, `!!map`, `!custom`), or an
    /// empty string when the node has none.
    fn short_tag(&self) -> &str;

    /// Direct children in order. Mappings interleave keys and values.
    fn children(&self) -> &[Self];

    /// Key/value pairs of a mapping as two-element slices, in declaration
    /// order. Empty for every other kind.
    fn pairs(&self) -> ChunksExact<'_, Self> {
        let children = if self.kind() == NodeKind::Mapping {
            self.children()
        } else {
            &[]
        };
        children.chunks_exact(2)
    }
}

/// A node of a parsed YAML document.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlNode {
    kind: NodeKind,
    value: String,
    /// Explicit tag in short form, empty when the source had none
    tag: String,
    style: ScalarStyle,
    children: Vec<YamlNode>,
}

impl YamlNode {
    /// Creates a bare node of the given kind with no value, tag or children.
    ///
    /// # Example
    ///
    /// ```
    /// use yit::document::node::{NodeKind, TreeNode, YamlNode};
    ///
    /// let node = YamlNode::new(NodeKind::Sequence);
    /// assert!(node.children().is_empty());
    /// assert_eq!(node.value(), "");
    /// ```
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            value: String::new(),
            tag: String::new(),
            style: ScalarStyle::Plain,
            children: Vec::new(),
        }
    }

    /// Creates a document node wrapping `root`.
    pub fn document(root: YamlNode) -> Self {
        let mut node = Self::new(NodeKind::Document);
        node.children.push(root);
        node
    }

    /// Creates a sequence node from its items.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = YamlNode>,
    {
        let mut node = Self::new(NodeKind::Sequence);
        node.children.extend(items);
        node
    }

    /// Creates a mapping node from key/value pairs, preserving their order.
    ///
    /// # Example
    ///
    /// ```
    /// use yit::document::node::{TreeNode, YamlNode};
    ///
    /// let map = YamlNode::mapping([(YamlNode::scalar("a"), YamlNode::scalar("b"))]);
    /// let values: Vec<&str> = map.children().iter().map(|n| n.value()).collect();
    /// assert_eq!(values, ["a", "b"]);
    /// ```
    pub fn mapping<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (YamlNode, YamlNode)>,
    {
        let mut node = Self::new(NodeKind::Mapping);
        for (key, value) in pairs {
            node.children.push(key);
            node.children.push(value);
        }
        node
    }

    /// Creates a plain scalar.
    pub fn scalar(value: impl Into<String>) -> Self {
        let mut node = Self::new(NodeKind::Scalar);
        node.value = value.into();
        node
    }

    /// Creates an alias node referring to the anchor `name`.
    pub fn alias(name: impl Into<String>) -> Self {
        let mut node = Self::new(NodeKind::Alias);
        node.value = name.into();
        node
    }

    /// Sets an explicit tag. Core schema tags written in long form
    /// (`tag:yaml.org,2002:int`) are stored in short form (`!!int`).
    pub fn with_tag(mut self, tag: impl AsRef<str>) -> Self {
        self.tag = tag::shorten(tag.as_ref());
        self
    }

    /// Sets the scalar presentation style.
    pub fn with_style(mut self, style: ScalarStyle) -> Self {
        self.style = style;
        self
    }

    /// The tag written in the source, without implicit resolution.
    pub fn explicit_tag(&self) -> Option<&str> {
        if self.tag.is_empty() {
            None
        } else {
            Some(&self.tag)
        }
    }

    pub fn style(&self) -> ScalarStyle {
        self.style
    }

    pub(crate) fn push_child(&mut self, child: YamlNode) {
        self.children.push(child);
    }
}

impl TreeNode for YamlNode {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn value(&self) -> &str {
        &self.value
    }

    /// Returns the explicit tag if there is one, otherwise the tag implied
    /// by the YAML 1.2 core schema.
    fn short_tag(&self) -> &str {
        if !self.tag.is_empty() {
            return &self.tag;
        }
        match self.kind {
            NodeKind::Mapping => tag::MAP,
            NodeKind::Sequence => tag::SEQ,
            NodeKind::Scalar if self.style.is_plain() => tag::resolve_plain(&self.value),
            NodeKind::Scalar => tag::STR,
            NodeKind::Document | NodeKind::Alias => "",
        }
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("mapping".parse::<NodeKind>(), Ok(NodeKind::Mapping));
        assert_eq!("MAP".parse::<NodeKind>(), Ok(NodeKind::Mapping));
        assert_eq!("seq".parse::<NodeKind>(), Ok(NodeKind::Sequence));
        assert_eq!("Scalar".parse::<NodeKind>(), Ok(NodeKind::Scalar));

        let err = "tree".parse::<NodeKind>().unwrap_err();
        assert_eq!(err.input, "tree");
        assert!(err.to_string().contains("Unknown node kind 'tree'"));
    }

    #[test]
    fn test_kind_display_round_trips() {
        for kind in [
            NodeKind::Document,
            NodeKind::Sequence,
            NodeKind::Mapping,
            NodeKind::Scalar,
            NodeKind::Alias,
        ] {
            assert_eq!(kind.to_string().parse::<NodeKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_mapping_children_are_interleaved() {
        let map = YamlNode::mapping([
            (YamlNode::scalar("a"), YamlNode::scalar("b")),
            (YamlNode::scalar("c"), YamlNode::scalar("d")),
        ]);
        let values: Vec<&str> = map.children().iter().map(|n| n.value()).collect();
        assert_eq!(values, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_pairs_only_for_mappings() {
        let map = YamlNode::mapping([(YamlNode::scalar("a"), YamlNode::scalar("b"))]);
        let pairs: Vec<(&str, &str)> = map
            .pairs()
            .map(|pair| (pair[0].value(), pair[1].value()))
            .collect();
        assert_eq!(pairs, [("a", "b")]);

        let seq = YamlNode::sequence([YamlNode::scalar("a"), YamlNode::scalar("b")]);
        assert_eq!(seq.pairs().count(), 0);
    }

    #[test]
    fn test_short_tag_implicit_resolution() {
        assert_eq!(YamlNode::scalar("hello").short_tag(), "!!str");
        assert_eq!(YamlNode::scalar("42").short_tag(), "!!int");
        assert_eq!(YamlNode::scalar("4.2").short_tag(), "!!float");
        assert_eq!(YamlNode::scalar("true").short_tag(), "!!bool");
        assert_eq!(YamlNode::scalar("~").short_tag(), "!!null");
        assert_eq!(YamlNode::new(NodeKind::Mapping).short_tag(), "!!map");
        assert_eq!(YamlNode::new(NodeKind::Sequence).short_tag(), "!!seq");
        assert_eq!(YamlNode::new(NodeKind::Document).short_tag(), "");
        assert_eq!(YamlNode::alias("x").short_tag(), "");
    }

    #[test]
    fn test_quoted_scalars_are_strings() {
        let node = YamlNode::scalar("42").with_style(ScalarStyle::DoubleQuoted);
        assert_eq!(node.short_tag(), "!!str");
    }

    #[test]
    fn test_explicit_tag_wins() {
        let node = YamlNode::scalar("42").with_tag("!!str");
        assert_eq!(node.short_tag(), "!!str");
        assert_eq!(node.explicit_tag(), Some("!!str"));

        let long = YamlNode::scalar("1").with_tag("tag:yaml.org,2002:float");
        assert_eq!(long.short_tag(), "!!float");

        let custom = YamlNode::new(NodeKind::Mapping).with_tag("!point");
        assert_eq!(custom.short_tag(), "!point");
    }
}
