//! # coffer-stack
//!
//! A generic last-in-first-out stack for the Coffer collections workspace.
//!
//! [`Stack`] owns its elements directly and has full value semantics: cloning
//! or collecting produces independent storage, never a shared view. It
//! conforms to the `coffer-container` capabilities, so it participates in the
//! generic cross-container operations.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod stack;

#[cfg(test)]
mod proptests;

pub use stack::Stack;
