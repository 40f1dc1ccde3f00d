//! Looped list built by rewiring shared nodes in place

use std::rc::Rc;

use super::{ForwardList, Node, NodeCursor, Sequence};
use crate::error::{LoopedListError, check_loop_bounds};

/// A singly-linked list whose node at `loop_from` links to the node at
/// `loop_to` instead of its natural successor.
///
/// The rewiring mutates the shared node. The original link is saved at
/// construction and written back when the looped list is dropped, so any
/// other holder of the nodes sees the un-looped list again. Cursors still
/// alive at that point follow the restored links.
///
/// ```
/// use looped_list::detector::has_cycle;
/// use looped_list::sequence::{ForwardList, SharedLoopedList};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let plain: ForwardList<i32> = (0..4).collect();
/// {
///     let looped = SharedLoopedList::wire(&plain, 3, 1)?;
///     assert!(has_cycle(&looped));
///     assert!(has_cycle(&plain));
/// }
/// assert!(!has_cycle(&plain));
/// # Ok(())
/// # }
/// ```
pub struct SharedLoopedList<T> {
    list: ForwardList<T>,
    loop_from: usize,
    loop_to: usize,
    loop_from_node: Rc<Node<T>>,
    original_next: Option<Rc<Node<T>>>,
}

impl<T> SharedLoopedList<T> {
    /// Build a new list from `values` and loop it.
    pub fn new<I>(values: I, loop_from: usize, loop_to: usize) -> Result<Self, LoopedListError>
    where
        I: IntoIterator<Item = T>,
    {
        let list: ForwardList<T> = values.into_iter().collect();
        Self::wire(&list, loop_from, loop_to)
    }

    /// Loop an existing list, sharing its nodes.
    ///
    /// `list` observes the loop until the returned value is dropped. A list
    /// can carry one loop at a time; wiring it again before then fails with
    /// [`LoopedListError::AlreadyLooped`].
    pub fn wire(list: &ForwardList<T>, loop_from: usize, loop_to: usize) -> Result<Self, LoopedListError> {
        if list.is_looped() {
            return Err(LoopedListError::AlreadyLooped);
        }
        check_loop_bounds(list.len(), loop_from, loop_to)?;

        let from_node = list
            .nth_node(loop_from)
            .ok_or(LoopedListError::InvalidLoopFrom {
                index: loop_from,
                len: list.len(),
            })?;
        let to_node = list
            .nth_node(loop_to)
            .ok_or(LoopedListError::InvalidLoopTo {
                index: loop_to,
                len: list.len(),
            })?;

        let original_next = from_node.set_next(Some(to_node));
        list.set_looped(true);

        Ok(Self {
            list: list.share(),
            loop_from,
            loop_to,
            loop_from_node: from_node,
            original_next,
        })
    }

    pub fn loop_from(&self) -> usize {
        self.loop_from
    }

    pub fn loop_to(&self) -> usize {
        self.loop_to
    }

    /// Number of distinct elements
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Always false: construction rejects empty input
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<T> Drop for SharedLoopedList<T> {
    fn drop(&mut self) {
        self.loop_from_node.set_next(self.original_next.take());
        self.list.set_looped(false);
    }
}

impl<T: Clone> Sequence for SharedLoopedList<T> {
    type Item = T;
    type Cursor<'a>
        = NodeCursor<T>
    where
        Self: 'a;

    fn begin(&self) -> NodeCursor<T> {
        self.list.begin()
    }

    fn end(&self) -> NodeCursor<T> {
        self.list.end()
    }
}
