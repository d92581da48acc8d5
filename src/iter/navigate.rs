//! Structural navigation adapters.

use crate::document::node::{NodeKind, TreeNode};
use crate::predicate::Predicate;
use std::iter::{Fuse, FusedIterator, Skip, StepBy};
use std::slice::{ChunksExact, Iter};

fn no_children<'a, N>() -> &'a [N] {
    &[]
}

/// Depth-first, pre-order walk below every item of the source.
///
/// Descent state lives in a heap stack of child cursors, one per open
/// container, so tree depth is not limited by the call stack. A subtree is
/// only entered when the caller pulls past its root.
#[derive(Debug, Clone)]
pub struct RecurseNodes<'a, N, I> {
    source: Fuse<I>,
    stack: Vec<Iter<'a, N>>,
}

impl<'a, N, I> RecurseNodes<'a, N, I>
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
{
    pub(super) fn new(source: I) -> Self {
        Self {
            source: source.fuse(),
            stack: Vec::new(),
        }
    }
}

impl<'a, N, I> Iterator for RecurseNodes<'a, N, I>
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let node = loop {
            match self.stack.last_mut() {
                Some(children) => match children.next() {
                    Some(child) => break child,
                    None => {
                        self.stack.pop();
                    }
                },
                None => break self.source.next()?,
            }
        };
        if node.kind().is_container() {
            self.stack.push(node.children().iter());
        }
        Some(node)
    }
}

impl<'a, N, I> FusedIterator for RecurseNodes<'a, N, I>
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
{
}

/// Direct children of every item, flattened.
#[derive(Debug, Clone)]
pub struct Values<'a, N, I> {
    source: Fuse<I>,
    children: Iter<'a, N>,
}

impl<'a, N, I> Values<'a, N, I>
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
{
    pub(super) fn new(source: I) -> Self {
        Self {
            source: source.fuse(),
            children: no_children().iter(),
        }
    }
}

impl<'a, N, I> Iterator for Values<'a, N, I>
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(child) = self.children.next() {
                return Some(child);
            }
            self.children = self.source.next()?.children().iter();
        }
    }
}

impl<'a, N, I> FusedIterator for Values<'a, N, I>
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
{
}

fn mapping_children<N: TreeNode>(node: &N) -> &[N] {
    if node.kind() == NodeKind::Mapping {
        node.children()
    } else {
        no_children()
    }
}

/// Keys or values of every mapping item. Built by
/// [`NodeIterator::map_keys`](super::NodeIterator::map_keys) and
/// [`NodeIterator::map_values`](super::NodeIterator::map_values).
#[derive(Debug, Clone)]
pub struct MapEntries<'a, N, I> {
    source: Fuse<I>,
    /// 0 selects keys, 1 selects values
    offset: usize,
    entries: StepBy<Skip<Iter<'a, N>>>,
}

impl<'a, N, I> MapEntries<'a, N, I>
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
{
    pub(super) fn keys(source: I) -> Self {
        Self::with_offset(source, 0)
    }

    pub(super) fn values(source: I) -> Self {
        Self::with_offset(source, 1)
    }

    fn with_offset(source: I, offset: usize) -> Self {
        Self {
            source: source.fuse(),
            offset,
            entries: no_children().iter().skip(offset).step_by(2),
        }
    }
}

impl<'a, N, I> Iterator for MapEntries<'a, N, I>
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entries.next() {
                return Some(entry);
            }
            let node = self.source.next()?;
            self.entries = mapping_children(node).iter().skip(self.offset).step_by(2);
        }
    }
}

impl<'a, N, I> FusedIterator for MapEntries<'a, N, I>
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
{
}

/// Values of the mapping pairs matched by a key predicate and a value
/// predicate together.
#[derive(Debug, Clone)]
pub struct ValuesForMap<'a, N, I> {
    source: Fuse<I>,
    key: Predicate<N>,
    value: Predicate<N>,
    pairs: ChunksExact<'a, N>,
}

impl<'a, N, I> ValuesForMap<'a, N, I>
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
{
    pub(super) fn new(source: I, key: Predicate<N>, value: Predicate<N>) -> Self {
        Self {
            source: source.fuse(),
            key,
            value,
            pairs: no_children().chunks_exact(2),
        }
    }
}

impl<'a, N, I> Iterator for ValuesForMap<'a, N, I>
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            for pair in self.pairs.by_ref() {
                if self.key.test(&pair[0]) && self.value.test(&pair[1]) {
                    return Some(&pair[1]);
                }
            }
            self.pairs = self.source.next()?.pairs();
        }
    }
}

impl<'a, N, I> FusedIterator for ValuesForMap<'a, N, I>
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
{
}
