//! Container capability traits.
//!
//! This module defines the core capabilities that concrete collections
//! implement to participate in the generic operations of this crate.

/// An ordered, appendable, indexable collection of a single item type.
///
/// The capability says nothing about storage: an array, a linked list, or a
/// ring buffer all qualify as long as the three operations behave as
/// specified. No operation may observe or depend on storage layout.
///
/// # Laws
///
/// - `count()` after `append` is exactly `count()` before plus one
/// - every index in `0..count()` is valid for `at`
/// - `at` reads a stable insertion order: index 0 is the oldest element
pub trait Container {
    /// The element type stored by this container.
    type Item;

    /// Appends one element, mutating the container.
    fn append(&mut self, item: Self::Item);

    /// The number of elements currently held.
    fn count(&self) -> usize;

    /// Read access to the element at `index`, counting from the oldest.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count()`. An out-of-range read is a contract
    /// violation by the caller, not a recoverable runtime state.
    fn at(&self, index: usize) -> &Self::Item;
}

/// A container able to hand out its trailing run of elements as another
/// container over the same item type.
///
/// The associated `Suffix` is itself a `SuffixableContainer` with a matching
/// item type. Most implementations pick themselves as `Suffix`, but a
/// conforming type may legally return a different concrete shape.
pub trait SuffixableContainer: Container {
    /// The concrete container type holding extracted suffixes.
    type Suffix: SuffixableContainer<Item = Self::Item>;

    /// Returns a new container holding the last `size` elements in original
    /// relative order. The source is left untouched.
    ///
    /// `suffix(0)` yields an empty container; `suffix(count())` a full copy.
    ///
    /// # Panics
    ///
    /// Panics if `size > count()`.
    fn suffix(&self, size: usize) -> Self::Suffix;
}
