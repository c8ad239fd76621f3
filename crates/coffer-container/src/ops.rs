//! Gated operations over containers.
//!
//! Every operation in this module exists only under a type constraint on the
//! container's item type. The gating is done with blanket impls rather than
//! runtime checks, so misuse (averaging strings, comparing incomparable
//! items) is a compile error, not a panic.

use std::ops::Add;

use num_traits::Zero;

use crate::traits::Container;

/// Checks whether two containers hold the same sequence.
///
/// Returns `false` immediately if the lengths differ; otherwise compares
/// element-wise by ascending index, short-circuiting on the first mismatch.
/// This is "same order, same values, same length" equality, not a multiset
/// comparison. The containers may be different concrete types as long as
/// their item types are identical.
pub fn all_items_match<A, B>(a: &A, b: &B) -> bool
where
    A: Container + ?Sized,
    B: Container<Item = A::Item> + ?Sized,
    A::Item: PartialEq,
{
    if a.count() != b.count() {
        return false;
    }

    (0..a.count()).all(|i| a.at(i) == b.at(i))
}

/// Operations available only when the item type supports value equality.
pub trait EqItems: Container
where
    Self::Item: PartialEq,
{
    /// Returns true iff the container is non-empty and its oldest element
    /// equals `item`.
    fn starts_with(&self, item: &Self::Item) -> bool {
        self.count() >= 1 && self.at(0) == item
    }

    /// Returns the index of the first element equal to `item`, if any.
    fn first_index_of(&self, item: &Self::Item) -> Option<usize> {
        (0..self.count()).find(|&i| self.at(i) == item)
    }
}

impl<C> EqItems for C
where
    C: Container + ?Sized,
    C::Item: PartialEq,
{
}

/// Summation for containers whose items form an additive monoid.
pub trait Totalable: Container
where
    Self::Item: Zero + Add<Output = Self::Item> + Clone,
{
    /// Sums all elements. An empty container totals to the additive
    /// identity, since a sum over zero terms is well-defined.
    fn total(&self) -> Self::Item {
        let mut acc = Self::Item::zero();
        for i in 0..self.count() {
            acc = acc + self.at(i).clone();
        }
        acc
    }
}

impl<C> Totalable for C
where
    C: Container + ?Sized,
    C::Item: Zero + Add<Output = C::Item> + Clone,
{
}

/// Numeric mean, available only for containers of `f64`.
///
/// This is a tighter gate than [`Totalable`]: the mean needs floating-point
/// division, so the item type is pinned rather than merely constrained.
pub trait Averageable: Container<Item = f64> {
    /// Returns the arithmetic mean of all elements, or `None` when the
    /// container is empty. Dividing by an empty count is never silently
    /// turned into a NaN.
    #[allow(clippy::cast_precision_loss)]
    fn average(&self) -> Option<f64> {
        if self.count() == 0 {
            return None;
        }

        let sum: f64 = (0..self.count()).map(|i| self.at(i)).sum();
        Some(sum / self.count() as f64)
    }
}

impl<C> Averageable for C where C: Container<Item = f64> + ?Sized {}
