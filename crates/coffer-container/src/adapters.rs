//! Retroactive conformances for standard backing stores.
//!
//! `Vec`, `VecDeque`, and `SmallVec` already provide append, count, and
//! indexed reads, so declaring them containers is a matter of routing the
//! capability methods to what the types do natively. This lets callers mix
//! concrete shapes in the cross-container operations, e.g. matching a stack
//! against a plain vector.

use std::collections::VecDeque;

use smallvec::{Array, SmallVec};

use crate::traits::{Container, SuffixableContainer};

impl<T> Container for Vec<T> {
    type Item = T;

    fn append(&mut self, item: T) {
        self.push(item);
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T: Clone> SuffixableContainer for Vec<T> {
    type Suffix = Vec<T>;

    fn suffix(&self, size: usize) -> Vec<T> {
        assert!(
            size <= self.len(),
            "suffix size {size} exceeds container length {}",
            self.len()
        );
        self[self.len() - size..].to_vec()
    }
}

impl<T> Container for VecDeque<T> {
    type Item = T;

    fn append(&mut self, item: T) {
        self.push_back(item);
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T: Clone> SuffixableContainer for VecDeque<T> {
    type Suffix = VecDeque<T>;

    fn suffix(&self, size: usize) -> VecDeque<T> {
        assert!(
            size <= self.len(),
            "suffix size {size} exceeds container length {}",
            self.len()
        );

        let mut result = VecDeque::with_capacity(size);
        for index in self.len() - size..self.len() {
            result.push_back(self[index].clone());
        }
        result
    }
}

impl<A: Array> Container for SmallVec<A> {
    type Item = A::Item;

    fn append(&mut self, item: A::Item) {
        self.push(item);
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> &A::Item {
        &self[index]
    }
}

impl<A: Array> SuffixableContainer for SmallVec<A>
where
    A::Item: Clone,
{
    type Suffix = SmallVec<A>;

    fn suffix(&self, size: usize) -> SmallVec<A> {
        assert!(
            size <= self.len(),
            "suffix size {size} exceeds container length {}",
            self.len()
        );

        let mut result = SmallVec::new();
        for index in self.len() - size..self.len() {
            result.push(self[index].clone());
        }
        result
    }
}
