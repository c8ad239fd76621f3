//! # Coffer
//!
//! Generic container capabilities and a LIFO stack, built as a small
//! capability lattice rather than a collections library.
//!
//! ## Features
//!
//! - **Container capability**: append, count, indexed reads over any backing
//!   store
//! - **Suffix extraction**: the trailing run of a container as a container
//! - **Equality-gated operations**: cross-container matching, prefix tests,
//!   and numeric averages that exist only when the item type qualifies
//! - **Value semantics**: stacks are owned, independently-allocated values;
//!   clones never alias
//!
//! ## Quick Start
//!
//! ```rust
//! use coffer::prelude::*;
//!
//! let mut stack = Stack::new();
//! stack.push("uno");
//! stack.push("dos");
//! stack.push("tres");
//!
//! assert_eq!(stack.top_item(), Some(&"tres"));
//! assert!(all_items_match(&stack, &vec!["uno", "dos", "tres"]));
//!
//! let last_two = stack.suffix(2);
//! assert_eq!(last_two.count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use coffer_container as container;
pub use coffer_stack as stack;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use coffer_container::{
        all_items_match, Averageable, Container, EqItems, SuffixableContainer, Totalable,
    };
    pub use coffer_stack::Stack;
}
