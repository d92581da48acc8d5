//! Predicate filtering.

use crate::document::node::TreeNode;
use crate::predicate::Predicate;
use std::iter::{Fuse, FusedIterator};

/// Items of the source accepted by a [`Predicate`].
///
/// The predicate only runs on items the source actually produced.
#[derive(Debug, Clone)]
pub struct FilterNodes<N, I> {
    source: Fuse<I>,
    predicate: Predicate<N>,
}

impl<'a, N, I> FilterNodes<N, I>
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
{
    pub(super) fn new(source: I, predicate: Predicate<N>) -> Self {
        Self {
            source: source.fuse(),
            predicate,
        }
    }
}

impl<'a, N, I> Iterator for FilterNodes<N, I>
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &self.predicate;
        self.source.find(|node| predicate.test(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<'a, N, I> FusedIterator for FilterNodes<N, I>
where
    N: TreeNode + 'a,
    I: Iterator<Item = &'a N>,
{
}
