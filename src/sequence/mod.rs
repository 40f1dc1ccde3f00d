//! # Sequence Module
//!
//! Forward-only sequences and the iteration contract the cycle detector
//! works against.
//!
//! ## Contract
//!
//! A [`Sequence`] hands out two [`Cursor`]s: `begin()`, positioned on the
//! first element, and `end()`, the end sentinel. A cursor can be read,
//! advanced to its structural successor, and compared with another cursor
//! for positional identity. Nothing else is assumed, so a single generic
//! algorithm can run over very different representations.
//!
//! ## Implementations
//!
//! - **ForwardList**: a plain singly-linked list of `Rc` nodes
//! - **SharedLoopedList**: the same nodes with the successor of one node
//!   rewired in place, restored on drop
//! - **IndexedLoopedList**: a `Vec` viewed through a cursor that computes the
//!   loop link on the fly
//! - **`[T]` / `Vec<T>`**: finite sequences over contiguous storage
//!
//! ## Example
//!
//! ```
//! use looped_list::sequence::{IndexedLoopedList, Sequence};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let list = IndexedLoopedList::new(vec![1, 2, 3], 2, 0)?;
//!
//! let first_seven: Vec<i32> = list.walk().take(7).collect();
//! assert_eq!(first_seven, vec![1, 2, 3, 1, 2, 3, 1]);
//! # Ok(())
//! # }
//! ```

mod indexed;
mod node;
mod shared;

pub use indexed::{IndexCursor, IndexedLoopedList, Position};
pub use node::{ForwardList, Node, NodeCursor};
pub use shared::SharedLoopedList;

/// A position within a [`Sequence`].
///
/// Two cursors are equal iff they denote the same position of the same
/// sequence. The end sentinel is a distinct state and equals only other end
/// sentinels.
pub trait Cursor: Clone + PartialEq {
    type Item;

    /// Value at the current position, `None` at the end sentinel
    fn value(&self) -> Option<Self::Item>;

    /// Move to the structural successor. Advancing the end sentinel is a
    /// no-op.
    fn advance(&mut self);

    /// A new cursor one step ahead of this one
    fn successor(&self) -> Self {
        let mut next = self.clone();
        next.advance();
        next
    }
}

/// A forward-only sequence of values.
pub trait Sequence {
    type Item;
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    /// Cursor at the first element, equal to `end()` for an empty sequence
    fn begin(&self) -> Self::Cursor<'_>;

    /// The end sentinel
    fn end(&self) -> Self::Cursor<'_>;

    /// Iterate values from `begin()` until `end()` is reached.
    ///
    /// A looped sequence never reaches its end, so the iterator is infinite
    /// and must be bounded by the caller (e.g. with `take`).
    fn walk(&self) -> Walk<Self::Cursor<'_>> {
        Walk::new(self.begin(), self.end())
    }
}

/// Iterator adapter produced by [`Sequence::walk`]
pub struct Walk<C> {
    cursor: C,
    end: C,
}

impl<C: Cursor> Walk<C> {
    pub fn new(cursor: C, end: C) -> Self {
        Self { cursor, end }
    }
}

impl<C: Cursor> Iterator for Walk<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.end {
            return None;
        }
        let value = self.cursor.value();
        self.cursor.advance();
        value
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_walk_stops_at_end() {
        let values = [12, 14, 16];
        let walked: Vec<i32> = values.walk().collect();
        assert_eq!(walked, vec![12, 14, 16]);
    }

    #[test]
    fn test_walk_empty_sequence() {
        let values: Vec<u8> = Vec::new();
        assert_eq!(values.walk().count(), 0);
    }

    #[test]
    fn test_successor_leaves_original_in_place() {
        let values = vec!['a', 'b'];
        let begin = values.begin();
        let next = begin.successor();

        assert_eq!(begin.value(), Some('a'));
        assert_eq!(next.value(), Some('b'));
        assert!(next.successor() == values.end());
    }

    #[test]
    fn test_advancing_end_is_noop() {
        let values = vec![1];
        let mut end = values.end();
        end.advance();
        assert!(end == values.end());
        assert_eq!(end.value(), None);
    }
}
