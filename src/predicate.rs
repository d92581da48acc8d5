//! Node predicates and their combinators.
//!
//! A [`Predicate`] is a shareable boolean test over a single node. The
//! functions in this module build the common tests (kind, value, tag, mapping
//! contents) and combine them with [`negate`], [`union`] and [`intersect`].
//! The `!`, `|` and `&` operators are shorthands for the same combinators.
//!
//! # Example
//!
//! ```
//! use yit::document::node::{NodeKind, YamlNode};
//! use yit::predicate::{with_kind, with_prefix, Predicate};
//!
//! let env_var: Predicate<YamlNode> = with_kind(NodeKind::Scalar) & with_prefix("$");
//!
//! assert!(env_var.test(&YamlNode::scalar("$HOME")));
//! assert!(!env_var.test(&YamlNode::scalar("HOME")));
//! assert!((!env_var).test(&YamlNode::scalar("HOME")));
//! ```

use crate::document::node::{NodeKind, TreeNode};
use crate::document::tag;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::rc::Rc;

/// A boolean test over a node.
///
/// Cloning is cheap: clones share the underlying function.
pub struct Predicate<N> {
    test: Rc<dyn Fn(&N) -> bool>,
}

impl<N> Predicate<N> {
    /// Wraps a function as a predicate.
    ///
    /// # Example
    ///
    /// ```
    /// use yit::document::node::{TreeNode, YamlNode};
    /// use yit::predicate::Predicate;
    ///
    /// let short = Predicate::new(|node: &YamlNode| node.value().len() < 4);
    /// assert!(short.test(&YamlNode::scalar("abc")));
    /// ```
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&N) -> bool + 'static,
    {
        Self {
            test: Rc::new(test),
        }
    }

    /// Applies the predicate to `node`.
    pub fn test(&self, node: &N) -> bool {
        (self.test)(node)
    }
}

impl<N> Clone for Predicate<N> {
    fn clone(&self) -> Self {
        Self {
            test: Rc::clone(&self.test),
        }
    }
}

impl<N> fmt::Debug for Predicate<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

impl<N: 'static> Not for Predicate<N> {
    type Output = Predicate<N>;

    fn not(self) -> Self::Output {
        negate(self)
    }
}

impl<N: 'static> BitOr for Predicate<N> {
    type Output = Predicate<N>;

    fn bitor(self, rhs: Self) -> Self::Output {
        union([self, rhs])
    }
}

impl<N: 'static> BitAnd for Predicate<N> {
    type Output = Predicate<N>;

    fn bitand(self, rhs: Self) -> Self::Output {
        intersect([self, rhs])
    }
}

/// Matches every node.
pub fn all<N: 'static>() -> Predicate<N> {
    Predicate::new(|_| true)
}

/// Matches no node.
pub fn none<N: 'static>() -> Predicate<N> {
    Predicate::new(|_| false)
}

/// Matches nodes of the given kind.
pub fn with_kind<N: TreeNode + 'static>(kind: NodeKind) -> Predicate<N> {
    Predicate::new(move |node: &N| node.kind() == kind)
}

/// Matches nodes whose value is exactly `value`.
pub fn with_value<N: TreeNode + 'static>(value: impl Into<String>) -> Predicate<N> {
    let value = value.into();
    Predicate::new(move |node: &N| node.value() == value)
}

/// Matches nodes whose value is exactly `value`. Same test as
/// [`with_value`]; combine with [`string_value`] to also require a string
/// scalar.
pub fn with_string_value<N: TreeNode + 'static>(value: impl Into<String>) -> Predicate<N> {
    with_value(value)
}

/// Matches scalars whose short tag is `!!str`, explicit or resolved.
///
/// # Example
///
/// ```
/// use yit::document::node::{ScalarStyle, YamlNode};
/// use yit::predicate::string_value;
///
/// let strings = string_value();
/// assert!(strings.test(&YamlNode::scalar("text")));
/// assert!(!strings.test(&YamlNode::scalar("42")));
/// assert!(strings.test(&YamlNode::scalar("42").with_style(ScalarStyle::SingleQuoted)));
/// ```
pub fn string_value<N: TreeNode + 'static>() -> Predicate<N> {
    intersect([with_kind(NodeKind::Scalar), with_short_tag(tag::STR)])
}

/// Matches nodes whose short tag is exactly `short_tag`.
pub fn with_short_tag<N: TreeNode + 'static>(short_tag: impl Into<String>) -> Predicate<N> {
    let short_tag = short_tag.into();
    Predicate::new(move |node: &N| node.short_tag() == short_tag)
}

/// Matches nodes whose value starts with `prefix`.
pub fn with_prefix<N: TreeNode + 'static>(prefix: impl Into<String>) -> Predicate<N> {
    let prefix = prefix.into();
    Predicate::new(move |node: &N| node.value().starts_with(prefix.as_str()))
}

/// Matches nodes whose value ends with `suffix`.
pub fn with_suffix<N: TreeNode + 'static>(suffix: impl Into<String>) -> Predicate<N> {
    let suffix = suffix.into();
    Predicate::new(move |node: &N| node.value().ends_with(suffix.as_str()))
}

/// Matches mappings with a key whose value is `key`.
pub fn with_map_key<N: TreeNode + 'static>(key: impl Into<String>) -> Predicate<N> {
    with_map_key_value(with_value(key), all())
}

/// Matches mappings with a value node whose value is `value`.
pub fn with_map_value<N: TreeNode + 'static>(value: impl Into<String>) -> Predicate<N> {
    with_map_key_value(all(), with_value(value))
}

/// Matches mappings containing a pair whose key satisfies `key` and whose
/// value satisfies `value`. Both must hold for the same pair.
///
/// # Example
///
/// ```
/// use yit::document::node::YamlNode;
/// use yit::predicate::{with_map_key_value, with_value};
///
/// let map = YamlNode::mapping([
///     (YamlNode::scalar("a"), YamlNode::scalar("x")),
///     (YamlNode::scalar("b"), YamlNode::scalar("y")),
/// ]);
/// assert!(with_map_key_value(with_value("b"), with_value("y")).test(&map));
/// assert!(!with_map_key_value(with_value("a"), with_value("y")).test(&map));
/// ```
pub fn with_map_key_value<N: TreeNode + 'static>(
    key: Predicate<N>,
    value: Predicate<N>,
) -> Predicate<N> {
    Predicate::new(move |node: &N| {
        node.pairs()
            .any(|pair| key.test(&pair[0]) && value.test(&pair[1]))
    })
}

/// Inverts `predicate`.
pub fn negate<N: 'static>(predicate: Predicate<N>) -> Predicate<N> {
    Predicate::new(move |node: &N| !predicate.test(node))
}

/// Matches when any of `predicates` matches, trying them in order and
/// stopping at the first match. An empty union matches nothing.
pub fn union<N: 'static>(predicates: impl IntoIterator<Item = Predicate<N>>) -> Predicate<N> {
    let predicates: Vec<Predicate<N>> = predicates.into_iter().collect();
    Predicate::new(move |node: &N| predicates.iter().any(|p| p.test(node)))
}

/// Matches when every one of `predicates` matches, trying them in order and
/// stopping at the first failure. An empty intersection matches everything.
pub fn intersect<N: 'static>(predicates: impl IntoIterator<Item = Predicate<N>>) -> Predicate<N> {
    let predicates: Vec<Predicate<N>> = predicates.into_iter().collect();
    Predicate::new(move |node: &N| predicates.iter().all(|p| p.test(node)))
}
