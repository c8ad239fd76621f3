//! # coffer-container
//!
//! Container capabilities for the Coffer collections workspace.
//!
//! This crate provides:
//! - Abstract capabilities: [`Container`], [`SuffixableContainer`]
//! - Equality-gated operations: [`all_items_match`], [`EqItems`]
//! - Numeric-gated operations: [`Averageable`], [`Totalable`]
//! - Adapter conformances for `Vec`, `VecDeque`, and `SmallVec`
//!
//! ## Capability Hierarchy
//!
//! ```text
//! Container
//!  ├── SuffixableContainer       (suffix extraction)
//!  ├── EqItems                   (requires Item: PartialEq)
//!  ├── Totalable                 (requires Item: Zero + Clone)
//!  └── Averageable               (requires Item == f64)
//! ```
//!
//! The gated capabilities are blanket-implemented: any `Container` whose item
//! type qualifies gets the operations for free, and a container whose item
//! type does not qualify simply never has them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod adapters;
pub mod ops;
pub mod traits;

pub use ops::{all_items_match, Averageable, EqItems, Totalable};
pub use traits::{Container, SuffixableContainer};
