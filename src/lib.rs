//! textseq - Doubly linked sequence container for text values.
//!
//! The container keeps its nodes in a slot arena: forward and backward links
//! are slot indices rather than owned pointers, so back-references can never
//! form ownership cycles and neighbor updates are O(1). Positional access
//! walks the chain from the head, list-style mutation relinks neighbors in
//! place, and removed slots are recycled through a free list before the
//! table grows.
//!
//! # Example
//!
//! ```rust
//! use textseq::Sequence;
//!
//! let mut seq = Sequence::new();
//! seq.push_back("A");
//! seq.push_back("C");
//! seq.insert(1, "B").unwrap();
//!
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.get(1).unwrap(), "B");
//! assert_eq!(seq.to_string(), "<A, B, C>");
//!
//! seq.erase(1).unwrap();
//! assert_eq!(seq.to_string(), "<A, C>");
//! ```

pub mod error;

// Sequence module
pub mod sequence;

// Re-exports for convenience
pub use error::{SequenceError, SequenceResult};
pub use sequence::Sequence;
