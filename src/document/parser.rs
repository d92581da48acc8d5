//! YAML parsing into [`YamlNode`] trees.
//!
//! This module drives the `yaml-rust2` event parser and assembles the events
//! into document trees. Unlike the `yaml-rust2` loader it keeps everything the
//! iteration layer cares about: explicit tags, scalar styles and aliases, which
//! stay as unresolved [`NodeKind::Alias`] nodes carrying the anchor name.
//!
//! # Example
//!
//! ```
//! use yit::document::node::{NodeKind, TreeNode};
//! use yit::document::parser::parse_yaml;
//!
//! let doc = parse_yaml("name: Alice\nage: 30").unwrap();
//! assert_eq!(doc.kind(), NodeKind::Document);
//!
//! let root = &doc.children()[0];
//! assert_eq!(root.kind(), NodeKind::Mapping);
//! assert_eq!(root.children()[0].value(), "name");
//! ```

use super::node::{NodeKind, ScalarStyle, YamlNode};
use anyhow::{Context, Result};
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Collects parser events into document trees.
struct TreeBuilder<'a> {
    source: &'a str,
    /// Open containers, the current document at the bottom
    stack: Vec<YamlNode>,
    documents: Vec<YamlNode>,
}

impl<'a> TreeBuilder<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            stack: Vec::new(),
            documents: Vec::new(),
        }
    }

    /// Opens a document if content arrives outside of one.
    fn ensure_document(&mut self) {
        if self.stack.is_empty() {
            self.stack.push(YamlNode::new(NodeKind::Document));
        }
    }

    fn open(&mut self, node: YamlNode) {
        self.ensure_document();
        self.stack.push(node);
    }

    fn attach(&mut self, node: YamlNode) {
        self.ensure_document();
        if let Some(parent) = self.stack.last_mut() {
            parent.push_child(node);
        }
    }

    fn close(&mut self) {
        if self.stack.len() > 1 {
            if let Some(node) = self.stack.pop() {
                self.attach(node);
            }
        }
    }

    fn finish_document(&mut self) {
        // Containers are only left open when the scanner failed.
        while self.stack.len() > 1 {
            self.close();
        }
        if let Some(document) = self.stack.pop() {
            self.documents.push(document);
        }
    }

    /// Reads the anchor name following the `*` at `mark`.
    fn alias_name(&self, mark: &Marker) -> String {
        let mut chars = self.source.chars().skip(mark.index());
        if chars.next() != Some('*') {
            return String::new();
        }
        chars
            .take_while(|c| !c.is_whitespace() && !matches!(c, ',' | '[' | ']' | '{' | '}'))
            .collect()
    }
}

fn scalar_style(style: TScalarStyle) -> ScalarStyle {
    match style {
        TScalarStyle::SingleQuoted => ScalarStyle::SingleQuoted,
        TScalarStyle::DoubleQuoted => ScalarStyle::DoubleQuoted,
        TScalarStyle::Literal => ScalarStyle::Literal,
        TScalarStyle::Folded => ScalarStyle::Folded,
        _ => ScalarStyle::Plain,
    }
}

impl MarkedEventReceiver for TreeBuilder<'_> {
    fn on_event(&mut self, event: Event, mark: Marker) {
        match event {
            Event::Scalar(value, style, _, tag) => {
                let mut node = YamlNode::scalar(value.to_string()).with_style(scalar_style(style));
                if let Some(tag) = tag {
                    node = node.with_tag(format!("{}{}", tag.handle, tag.suffix));
                }
                self.attach(node);
            }
            Event::SequenceStart(_, tag) => {
                let mut node = YamlNode::new(NodeKind::Sequence);
                if let Some(tag) = tag {
                    node = node.with_tag(format!("{}{}", tag.handle, tag.suffix));
                }
                self.open(node);
            }
            Event::MappingStart(_, tag) => {
                let mut node = YamlNode::new(NodeKind::Mapping);
                if let Some(tag) = tag {
                    node = node.with_tag(format!("{}{}", tag.handle, tag.suffix));
                }
                self.open(node);
            }
            Event::SequenceEnd | Event::MappingEnd => self.close(),
            Event::Alias(_) => {
                let name = self.alias_name(&mark);
                self.attach(YamlNode::alias(name));
            }
            Event::DocumentEnd => self.finish_document(),
            // Documents are opened lazily by their first content event.
            _ => {}
        }
    }
}

/// Parses every document in a YAML stream.
///
/// Each returned node has kind [`NodeKind::Document`] with the document's
/// root value as its only child. An empty stream yields an empty vector.
///
/// # Errors
///
/// Returns an error if the input is not well-formed YAML.
///
/// # Example
///
/// ```
/// use yit::document::parser::parse_yaml_documents;
///
/// let docs = parse_yaml_documents("a: 1\n---\nb: 2\n").unwrap();
/// assert_eq!(docs.len(), 2);
/// ```
pub fn parse_yaml_documents(yaml_str: &str) -> Result<Vec<YamlNode>> {
    let mut builder = TreeBuilder::new(yaml_str);
    let mut parser = Parser::new_from_str(yaml_str);
    parser
        .load(&mut builder, true)
        .context("Failed to parse YAML")?;
    builder.finish_document();
    Ok(builder.documents)
}

/// Parses the first document of a YAML stream.
///
/// An empty stream yields a document wrapping a single empty plain scalar,
/// which resolves as `!!null`.
///
/// # Errors
///
/// Returns an error if the input is not well-formed YAML.
///
/// # Example
///
/// ```
/// use yit::document::node::{NodeKind, TreeNode};
/// use yit::document::parser::parse_yaml;
///
/// let doc = parse_yaml("").unwrap();
/// assert_eq!(doc.children()[0].kind(), NodeKind::Scalar);
/// assert_eq!(doc.children()[0].short_tag(), "!!null");
///
/// assert!(parse_yaml("key: [unclosed").is_err());
/// ```
pub fn parse_yaml(yaml_str: &str) -> Result<YamlNode> {
    let document = parse_yaml_documents(yaml_str)?
        .into_iter()
        .next()
        .unwrap_or_else(|| YamlNode::document(YamlNode::scalar("")));
    Ok(document)
}
