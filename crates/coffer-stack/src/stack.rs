//! A generic LIFO stack.

use coffer_container::{Container, SuffixableContainer};

/// A last-in-first-out stack of `T`.
///
/// Elements are stored bottom-to-top in push order. The only legal insertion
/// point is the top (`push`), and the only legal removal point is also the
/// top (`pop`). Cloning produces a fully independent copy; two stacks never
/// alias the same storage.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes an element onto the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top element.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty. No value of a fully generic `T` can
    /// serve as a safe default, so underflow is a contract violation rather
    /// than a recoverable state.
    pub fn pop(&mut self) -> T {
        match self.items.pop() {
            Some(item) => item,
            None => panic!("stack underflow: pop on an empty stack"),
        }
    }

    /// Returns the top element without removing it, or `None` when the
    /// stack is empty. Peeking at nothing is a normal condition for a
    /// caller probing stack state, so this query is partial, not fatal.
    #[must_use]
    pub fn top_item(&self) -> Option<&T> {
        self.items.last()
    }

    /// The number of elements currently held.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns true when no elements are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the elements bottom-to-top without consuming the stack.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: PartialEq> Stack<T> {
    /// Returns true iff the stack is non-empty and its top element equals
    /// `item`.
    #[must_use]
    pub fn is_top(&self, item: &T) -> bool {
        self.top_item() == Some(item)
    }
}

impl<T> Container for Stack<T> {
    type Item = T;

    fn append(&mut self, item: T) {
        self.push(item);
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    // Index 0 is the bottom (oldest) element, so the Container view and the
    // LIFO view share one bottom-to-top ordering.
    fn at(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T: Clone> SuffixableContainer for Stack<T> {
    type Suffix = Stack<T>;

    fn suffix(&self, size: usize) -> Stack<T> {
        assert!(
            size <= self.count(),
            "suffix size {size} exceeds stack length {}",
            self.count()
        );

        let mut result = Stack::with_capacity(size);
        for index in self.count() - size..self.count() {
            result.push(self.items[index].clone());
        }
        result
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// Treats the vector as bottom-to-top push order.
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consumes the stack, yielding elements bottom-to-top.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
