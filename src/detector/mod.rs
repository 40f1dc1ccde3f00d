//! # Cycle Detection Module
//!
//! This module decides whether following a sequence's successor links
//! forever would revisit a position.
//!
//! ## Algorithm
//!
//! We use Floyd's tortoise and hare walk. Two cursors start at the first
//! element; the tortoise advances one step per round and the hare two. If the
//! hare reaches the end sentinel the sequence is finite. If the two cursors
//! ever sit on the same position the sequence loops. With a loop of length
//! `C` entered after `M` steps they meet within `M + C` rounds, and no
//! visited set is needed, so extra space is O(1).
//!
//! ## Key Components
//!
//! - **has_cycle**: stateless entry point, generic over any
//!   [`Sequence`](crate::sequence::Sequence)
//! - **CycleDetector**: keeps the last [`Detection`] for reporting
//!
//! ## Example
//!
//! ```
//! use looped_list::detector::{CycleDetector, has_cycle};
//! use looped_list::sequence::{ForwardList, IndexedLoopedList, SharedLoopedList};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let values = [12, 14, 16, 18, 20, 22, 24, 26];
//!
//! assert!(has_cycle(&SharedLoopedList::new(values, 6, 2)?));
//! assert!(!has_cycle(&SharedLoopedList::new(values, 2, 6)?));
//! assert!(!has_cycle(&values.into_iter().collect::<ForwardList<_>>()));
//!
//! let mut detector = CycleDetector::new();
//! detector.detect(&IndexedLoopedList::new(values, 6, 2)?);
//! assert!(detector.has_cycle());
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
