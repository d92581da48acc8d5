//! YAML document model.
//!
//! Parsed documents are trees of [`node::YamlNode`]. The iteration toolkit
//! only sees them through the [`node::TreeNode`] trait.

pub mod convert;
pub mod node;
pub mod parser;
pub mod tag;

pub use node::{NodeKind, ScalarStyle, TreeNode, YamlNode};
pub use parser::{parse_yaml, parse_yaml_documents};
