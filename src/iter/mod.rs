//! Lazy iteration over document trees.
//!
//! An iterator here is any `Iterator<Item = &'a N>` where `N` implements
//! [`TreeNode`]. The [`NodeIterator`] extension trait adds the tree-aware
//! adapters (recursion, child descent, mapping extraction, predicate
//! filtering) and the terminal aggregates. Adapters only pull from their source
//! when they are pulled themselves, so nothing runs until a terminal operation
//! or a `for` loop drives the chain. Every adapter is fused: once it has
//! returned `None` it keeps returning `None`.
//!
//! Iterators only borrow the tree. No node is ever cloned.
//!
//! # Example
//!
//! ```
//! use yit::document::node::{NodeKind, TreeNode};
//! use yit::document::parser::parse_yaml;
//! use yit::iter::{from_node, NodeIterator};
//! use yit::predicate::with_kind;
//!
//! let doc = parse_yaml("a: b\nc: d\n").unwrap();
//! let keys: Vec<&str> = from_node(&doc)
//!     .recurse_nodes()
//!     .filter_nodes(with_kind(NodeKind::Mapping))
//!     .map_keys()
//!     .map(|node| node.value())
//!     .collect();
//! assert_eq!(keys, ["a", "c"]);
//! ```

mod chain;
mod filter;
mod navigate;

pub use chain::Concat;
pub use filter::FilterNodes;
pub use navigate::{MapEntries, RecurseNodes, Values, ValuesForMap};

use crate::document::node::TreeNode;
use crate::predicate::Predicate;
use std::iter::{Fuse, Once};

/// A type-erased node iterator, for pipelines whose shape is chosen at
/// runtime.
pub type NodeIter<'a, N> = Box<dyn Iterator<Item = &'a N> + 'a>;

/// Yields `node` once.
///
/// # Example
///
/// ```
/// use yit::document::node::YamlNode;
/// use yit::iter::from_node;
///
/// let node = YamlNode::scalar("a");
/// let mut it = from_node(&node);
/// assert!(std::ptr::eq(it.next().unwrap(), &node));
/// assert!(it.next().is_none());
/// assert!(it.next().is_none());
/// ```
pub fn from_node<N: TreeNode>(node: &N) -> Once<&N> {
    std::iter::once(node)
}

/// Yields each node in the order given.
///
/// # Example
///
/// ```
/// use yit::document::node::{TreeNode, YamlNode};
/// use yit::iter::from_nodes;
///
/// let a = YamlNode::scalar("a");
/// let b = YamlNode::scalar("b");
/// let values: Vec<&str> = from_nodes([&a, &b]).map(|n| n.value()).collect();
/// assert_eq!(values, ["a", "b"]);
/// ```
pub fn from_nodes<'a, N, T>(nodes: T) -> Fuse<T::IntoIter>
where
    N: TreeNode + 'a,
    T: IntoIterator<Item = &'a N>,
{
    nodes.into_iter().fuse()
}

/// Concatenates iterators, draining each one before the next is touched.
///
/// # Example
///
/// ```
/// use yit::document::node::{TreeNode, YamlNode};
/// use yit::iter::{from_iterators, from_node};
///
/// let (a, b) = (YamlNode::scalar("a"), YamlNode::scalar("b"));
/// let values: Vec<&str> = from_iterators([from_node(&a), from_node(&b)])
///     .map(|n| n.value())
///     .collect();
/// assert_eq!(values, ["a", "b"]);
/// ```
pub fn from_iterators<'a, N, I, T>(iterators: T) -> Concat<I>
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
    T: IntoIterator<Item = I>,
{
    Concat::new(iterators.into_iter().collect())
}

/// Tree-aware adapters and terminal aggregates for node iterators.
///
/// Implemented for every `Iterator<Item = &'a N>`.
pub trait NodeIterator<'a, N>: Iterator<Item = &'a N> + Sized
where
    N: TreeNode + 'a,
{
    /// Walks the tree below every item depth first, yielding each node
    /// before its children.
    fn recurse_nodes(self) -> RecurseNodes<'a, N, Self> {
        RecurseNodes::new(self)
    }

    /// Yields the direct children of every item. Mapping keys and values
    /// are both yielded, in their interleaved order.
    fn values(self) -> Values<'a, N, Self> {
        Values::new(self)
    }

    /// Yields the keys of every mapping item. Other kinds yield nothing.
    fn map_keys(self) -> MapEntries<'a, N, Self> {
        MapEntries::keys(self)
    }

    /// Yields the values of every mapping item. Other kinds yield nothing.
    fn map_values(self) -> MapEntries<'a, N, Self> {
        MapEntries::values(self)
    }

    /// Yields the value of each mapping pair whose key matches `key` and
    /// whose value matches `value`.
    fn values_for_map(self, key: Predicate<N>, value: Predicate<N>) -> ValuesForMap<'a, N, Self> {
        ValuesForMap::new(self, key, value)
    }

    /// Keeps the items `predicate` accepts.
    fn filter_nodes(self, predicate: Predicate<N>) -> FilterNodes<N, Self> {
        FilterNodes::new(self, predicate)
    }

    /// Hands this iterator to `transform` and returns whatever iterator it
    /// builds. Chained calls apply in order.
    ///
    /// # Example
    ///
    /// ```
    /// use yit::document::node::{TreeNode, YamlNode};
    /// use yit::iter::{from_nodes, NodeIterator};
    ///
    /// let nodes = [YamlNode::scalar("a"), YamlNode::scalar("b"), YamlNode::scalar("c")];
    /// let values: Vec<&str> = from_nodes(&nodes)
    ///     .iterate(|it| it.step_by(2))
    ///     .map(|n| n.value())
    ///     .collect();
    /// assert_eq!(values, ["a", "c"]);
    /// ```
    fn iterate<F, J>(self, transform: F) -> J
    where
        F: FnOnce(Self) -> J,
        J: Iterator,
    {
        transform(self)
    }

    /// Returns true as soon as an item matches `predicate`, leaving the rest
    /// of the iterator unconsumed. False if no item matches.
    fn any_match(&mut self, predicate: &Predicate<N>) -> bool {
        self.any(|node| predicate.test(node))
    }

    /// Returns false as soon as an item fails `predicate`. True if every
    /// item matches, including when there are none.
    fn all_match(&mut self, predicate: &Predicate<N>) -> bool {
        self.all(|node| predicate.test(node))
    }

    /// Drains the remaining items into a vector, in pull order.
    fn to_vec(&mut self) -> Vec<&'a N> {
        self.by_ref().collect()
    }

    /// Erases the iterator's type.
    fn boxed(self) -> NodeIter<'a, N>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<'a, N, I> NodeIterator<'a, N> for I
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
{
}
