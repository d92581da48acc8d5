//! yit - lazy iteration over YAML node trees.
//!
//! Parsed YAML documents are walked with composable, lazy iterators that
//! borrow the tree: recursion, child descent, mapping key/value extraction
//! and predicate filtering, finished by terminal aggregates such as
//! [`iter::NodeIterator::any_match`] or [`iter::NodeIterator::to_vec`].
//!
//! # Example
//!
//! ```
//! use yit::document::{parse_yaml, NodeKind, TreeNode, YamlNode};
//! use yit::iter::{from_node, NodeIterator};
//! use yit::predicate::{with_kind, with_map_key, Predicate};
//!
//! let doc = parse_yaml("env:\n  - name: HOME\n  - name: PATH\n").unwrap();
//! let named: Predicate<YamlNode> = with_kind(NodeKind::Mapping) & with_map_key("name");
//! let names: Vec<&str> = from_node(&doc)
//!     .recurse_nodes()
//!     .filter_nodes(named)
//!     .map_values()
//!     .map(|node| node.value())
//!     .collect();
//! assert_eq!(names, ["HOME", "PATH"]);
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod iter;
pub mod predicate;
pub mod query;
