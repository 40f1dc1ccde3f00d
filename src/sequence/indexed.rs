//! Index-based view with a virtual loop link

use super::{Cursor, Sequence};
use crate::error::{LoopedListError, check_loop_bounds};

/// Position of an [`IndexCursor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    At(usize),
    End,
}

/// Cursor over contiguous storage.
///
/// When a loop is set, advancing from `loop_from` jumps to `loop_to` instead
/// of the next index. Two cursors are equal when they view the same storage
/// and sit at the same [`Position`].
pub struct IndexCursor<'a, T> {
    items: &'a [T],
    position: Position,
    wrap: Option<(usize, usize)>,
}

impl<'a, T> IndexCursor<'a, T> {
    fn new(items: &'a [T], position: Position, wrap: Option<(usize, usize)>) -> Self {
        Self {
            items,
            position,
            wrap,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

impl<T> Clone for IndexCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IndexCursor<'_, T> {}

impl<T> PartialEq for IndexCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.items, other.items) && self.position == other.position
    }
}

impl<T> Eq for IndexCursor<'_, T> {}

impl<T: Clone> Cursor for IndexCursor<'_, T> {
    type Item = T;

    fn value(&self) -> Option<T> {
        match self.position {
            Position::At(index) => self.items.get(index).cloned(),
            Position::End => None,
        }
    }

    fn advance(&mut self) {
        let Position::At(index) = self.position else {
            return;
        };
        self.position = match self.wrap {
            Some((from, to)) if index == from => Position::At(to),
            _ if index + 1 < self.items.len() => Position::At(index + 1),
            _ => Position::End,
        };
    }
}

fn begin_position<T>(items: &[T]) -> Position {
    if items.is_empty() {
        Position::End
    } else {
        Position::At(0)
    }
}

/// A vector whose element at `loop_from` is followed by the element at
/// `loop_to`.
///
/// The storage itself is never modified; the loop exists only in the cursor's
/// notion of a successor.
#[derive(Debug, Clone)]
pub struct IndexedLoopedList<T> {
    items: Vec<T>,
    loop_from: usize,
    loop_to: usize,
}

impl<T> IndexedLoopedList<T> {
    pub fn new<I>(values: I, loop_from: usize, loop_to: usize) -> Result<Self, LoopedListError>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = values.into_iter().collect();
        check_loop_bounds(items.len(), loop_from, loop_to)?;

        Ok(Self {
            items,
            loop_from,
            loop_to,
        })
    }

    pub fn loop_from(&self) -> usize {
        self.loop_from
    }

    pub fn loop_to(&self) -> usize {
        self.loop_to
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Sequence for IndexedLoopedList<T> {
    type Item = T;
    type Cursor<'a>
        = IndexCursor<'a, T>
    where
        Self: 'a;

    fn begin(&self) -> IndexCursor<'_, T> {
        IndexCursor::new(
            &self.items,
            begin_position(&self.items),
            Some((self.loop_from, self.loop_to)),
        )
    }

    fn end(&self) -> IndexCursor<'_, T> {
        IndexCursor::new(&self.items, Position::End, Some((self.loop_from, self.loop_to)))
    }
}

impl<T: Clone> Sequence for [T] {
    type Item = T;
    type Cursor<'a>
        = IndexCursor<'a, T>
    where
        Self: 'a;

    fn begin(&self) -> IndexCursor<'_, T> {
        IndexCursor::new(self, begin_position(self), None)
    }

    fn end(&self) -> IndexCursor<'_, T> {
        IndexCursor::new(self, Position::End, None)
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Cursor<'a>
        = IndexCursor<'a, T>
    where
        Self: 'a;

    fn begin(&self) -> IndexCursor<'_, T> {
        self.as_slice().begin()
    }

    fn end(&self) -> IndexCursor<'_, T> {
        self.as_slice().end()
    }
}
