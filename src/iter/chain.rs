//! Concatenation of node iterators.

use std::iter::FusedIterator;
use std::vec;

/// Yields every item of each source in turn. A source is only pulled once
/// all earlier sources are exhausted.
#[derive(Debug, Clone)]
pub struct Concat<I> {
    sources: vec::IntoIter<I>,
    current: Option<I>,
}

impl<I: Iterator> Concat<I> {
    pub(super) fn new(sources: Vec<I>) -> Self {
        Self {
            sources: sources.into_iter(),
            current: None,
        }
    }
}

impl<I: Iterator> Iterator for Concat<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.as_mut().and_then(Iterator::next) {
                return Some(item);
            }
            self.current = self.sources.next();
            if self.current.is_none() {
                return None;
            }
        }
    }
}

impl<I: Iterator> FusedIterator for Concat<I> {}
