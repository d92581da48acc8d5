//! Declarative queries over parsed YAML documents.
//!
//! A [`Query`] describes a pipeline in data rather than code: where to look
//! (every node, or only the document roots), which filters to apply, and what
//! to project from the matching nodes. The command-line interface builds one
//! from its flags; library users can fill in the fields directly.
//!
//! # Example
//!
//! ```
//! use yit::document::node::{NodeKind, TreeNode};
//! use yit::document::parser::parse_yaml_documents;
//! use yit::query::{Query, Select};
//!
//! let docs = parse_yaml_documents("users:\n  - name: Alice\n  - name: Bob\n").unwrap();
//! let query = Query {
//!     kind: Some(NodeKind::Mapping),
//!     key: Some("name".to_string()),
//!     select: Select::Field("name".to_string()),
//!     ..Query::default()
//! };
//! let names: Vec<&str> = query.run(&docs).into_iter().map(|n| n.value()).collect();
//! assert_eq!(names, ["Alice", "Bob"]);
//! ```

use crate::document::node::{NodeKind, YamlNode};
use crate::iter::{from_nodes, NodeIter, NodeIterator};
use crate::predicate::{
    all, intersect, with_kind, with_map_key, with_prefix, with_short_tag, with_suffix, with_value,
    Predicate,
};
use tracing::debug;

/// What a query yields for each node that passes its filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Select {
    /// The matching nodes themselves
    #[default]
    Nodes,
    /// The keys of matching mappings
    Keys,
    /// The values of matching mappings
    Values,
    /// The value stored under the named key of matching mappings
    Field(String),
}

/// A filter-and-project pipeline over documents.
///
/// All filters that are set must hold for a node to match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Only consider each document's root value instead of every node
    pub roots_only: bool,
    /// Node kind filter
    pub kind: Option<NodeKind>,
    /// Mapping must contain this key
    pub key: Option<String>,
    /// Exact value filter
    pub value: Option<String>,
    /// Value prefix filter
    pub prefix: Option<String>,
    /// Value suffix filter
    pub suffix: Option<String>,
    /// Short tag filter, e.g. `!!int`
    pub tag: Option<String>,
    /// Projection applied to the matching nodes
    pub select: Select,
    /// Stop after this many results
    pub limit: Option<usize>,
}

impl Query {
    /// Builds the intersection of every filter that is set. A query without
    /// filters matches every node.
    pub fn predicate(&self) -> Predicate<YamlNode> {
        let mut filters = Vec::new();
        if let Some(kind) = self.kind {
            filters.push(with_kind(kind));
        }
        if let Some(key) = &self.key {
            filters.push(with_map_key(key.as_str()));
        }
        if let Some(value) = &self.value {
            filters.push(with_value(value.as_str()));
        }
        if let Some(prefix) = &self.prefix {
            filters.push(with_prefix(prefix.as_str()));
        }
        if let Some(suffix) = &self.suffix {
            filters.push(with_suffix(suffix.as_str()));
        }
        if let Some(tag) = &self.tag {
            filters.push(with_short_tag(tag.as_str()));
        }
        debug!(filters = filters.len(), "built query predicate");
        intersect(filters)
    }

    /// Returns the lazy result iterator over `documents`.
    ///
    /// Nothing is evaluated until the iterator is pulled.
    pub fn iter<'a>(&self, documents: &'a [YamlNode]) -> NodeIter<'a, YamlNode> {
        let candidates = if self.roots_only {
            from_nodes(documents).values().boxed()
        } else {
            from_nodes(documents).recurse_nodes().boxed()
        };
        let matched = candidates.filter_nodes(self.predicate());

        debug!(
            roots_only = self.roots_only,
            select = ?self.select,
            "assembled query pipeline"
        );
        match &self.select {
            Select::Nodes => matched.boxed(),
            Select::Keys => matched.map_keys().boxed(),
            Select::Values => matched.map_values().boxed(),
            Select::Field(name) => matched
                .values_for_map(with_value(name.as_str()), all())
                .boxed(),
        }
    }

    /// Runs the query and collects the results in document order, honoring
    /// `limit`.
    pub fn run<'a>(&self, documents: &'a [YamlNode]) -> Vec<&'a YamlNode> {
        let results = self.iter(documents);
        match self.limit {
            Some(limit) => results.take(limit).collect(),
            None => results.collect(),
        }
    }

    /// Returns true if the query has at least one result. Stops at the first.
    pub fn matches_any(&self, documents: &[YamlNode]) -> bool {
        self.iter(documents).any_match(&all())
    }
}
