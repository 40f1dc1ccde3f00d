//! Shared-ownership singly-linked nodes and the plain list built from them

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::{Cursor, Sequence};

/// A list node holding one value and a shared link to its successor
pub struct Node<T> {
    value: T,
    next: RefCell<Option<Rc<Node<T>>>>,
}

impl<T> Node<T> {
    pub fn new(value: T, next: Option<Rc<Node<T>>>) -> Self {
        Self {
            value,
            next: RefCell::new(next),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Current successor link
    pub fn next(&self) -> Option<Rc<Node<T>>> {
        self.next.borrow().clone()
    }

    /// Replace the successor link, returning the previous one
    pub fn set_next(&self, next: Option<Rc<Node<T>>>) -> Option<Rc<Node<T>>> {
        self.next.replace(next)
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        // Unlink iteratively so long chains don't overflow the stack, whoever
        // ends up holding the last reference. Stop at the first node someone
        // else still holds.
        let mut link = self.next.get_mut().take();
        while let Some(node) = link {
            match Rc::try_unwrap(node) {
                Ok(mut node) => link = node.next.get_mut().take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Following `next` could loop forever
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.borrow().is_some())
            .finish()
    }
}

/// Cursor over `Rc` nodes. Equality is node identity.
pub struct NodeCursor<T> {
    node: Option<Rc<Node<T>>>,
}

impl<T> NodeCursor<T> {
    pub fn new(node: Option<Rc<Node<T>>>) -> Self {
        Self { node }
    }

    pub fn end() -> Self {
        Self { node: None }
    }

    pub fn node(&self) -> Option<&Rc<Node<T>>> {
        self.node.as_ref()
    }
}

impl<T> Clone for NodeCursor<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
        }
    }
}

impl<T> PartialEq for NodeCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.node, &other.node) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Eq for NodeCursor<T> {}

impl<T: Clone> Cursor for NodeCursor<T> {
    type Item = T;

    fn value(&self) -> Option<T> {
        self.node.as_ref().map(|node| node.value.clone())
    }

    fn advance(&mut self) {
        if let Some(node) = self.node.take() {
            self.node = node.next();
        }
    }
}

/// A plain, finite singly-linked list of shared nodes.
///
/// Nodes may be shared with a [`SharedLoopedList`](super::SharedLoopedList)
/// wired over this list; while that looped list is alive, traversals of this
/// list observe the loop as well.
pub struct ForwardList<T> {
    head: Option<Rc<Node<T>>>,
    len: usize,
    // Set while a looped list is wired over these nodes; shared by every
    // handle on them
    looped: Rc<Cell<bool>>,
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ForwardList<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            len: 0,
            looped: Rc::new(Cell::new(false)),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(Node::value)
    }

    pub fn push_front(&mut self, value: T) {
        let node = Rc::new(Node::new(value, self.head.take()));
        self.head = Some(node);
        self.len += 1;
    }

    /// A second handle on the same nodes
    pub(crate) fn share(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
            looped: Rc::clone(&self.looped),
        }
    }

    /// Whether a looped list currently rewires these nodes
    pub fn is_looped(&self) -> bool {
        self.looped.get()
    }

    pub(crate) fn set_looped(&self, looped: bool) {
        self.looped.set(looped);
    }

    /// Node at zero-based position `n`, following current links
    pub(crate) fn nth_node(&self, n: usize) -> Option<Rc<Node<T>>> {
        let mut node = self.head.clone()?;
        for _ in 0..n {
            node = node.next()?;
        }
        Some(node)
    }

    fn reverse(&mut self) {
        let mut prev = None;
        let mut current = self.head.take();
        while let Some(node) = current {
            current = node.set_next(prev);
            prev = Some(node);
        }
        self.head = prev;
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_front(value);
        }
        list.reverse();
        list
    }
}

impl<T: Clone> Sequence for ForwardList<T> {
    type Item = T;
    type Cursor<'a>
        = NodeCursor<T>
    where
        Self: 'a;

    fn begin(&self) -> NodeCursor<T> {
        NodeCursor::new(self.head.clone())
    }

    fn end(&self) -> NodeCursor<T> {
        NodeCursor::end()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_iter_preserves_order() {
        let list: ForwardList<i32> = [12, 14, 16, 18].into_iter().collect();

        assert_eq!(list.len(), 4);
        assert_eq!(list.front(), Some(&12));
        assert_eq!(list.walk().collect::<Vec<_>>(), vec![12, 14, 16, 18]);
    }

    #[test]
    fn test_push_front() {
        let mut list = ForwardList::new();
        assert!(list.is_empty());

        list.push_front("b");
        list.push_front("a");

        assert!(!list.is_empty());
        assert_eq!(list.len(), 2);
        assert_eq!(list.walk().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_list_begin_is_end() {
        let list: ForwardList<i32> = ForwardList::default();
        assert!(list.begin() == list.end());
        assert_eq!(list.begin().value(), None);
    }

    #[test]
    fn test_nth_node() {
        let list: ForwardList<i32> = (0..5).collect();

        assert_eq!(list.nth_node(0).map(|n| *n.value()), Some(0));
        assert_eq!(list.nth_node(4).map(|n| *n.value()), Some(4));
        assert!(list.nth_node(5).is_none());
    }

    #[test]
    fn test_cursor_equality_is_node_identity() {
        // Equal values in different nodes are different positions
        let list: ForwardList<i32> = [7, 7].into_iter().collect();
        let first = list.begin();
        let second = first.successor();

        assert_eq!(first.value(), second.value());
        assert!(first != second);
        assert!(first == list.begin());
    }

    #[test]
    fn test_long_list_drops_without_overflow() {
        let list: ForwardList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[test]
    fn test_cursor_outliving_long_list_drops_without_overflow() {
        let list: ForwardList<u32> = (0..200_000).collect();
        let cursor = list.begin();
        drop(list);

        assert_eq!(cursor.value(), Some(0));
        drop(cursor);
    }

    #[test]
    fn test_mid_list_cursor_keeps_its_tail() {
        let list: ForwardList<u32> = (0..200_000).collect();
        let mut cursor = list.begin();
        for _ in 0..100_000 {
            cursor.advance();
        }
        drop(list);

        assert_eq!(cursor.value(), Some(100_000));
        cursor.advance();
        assert_eq!(cursor.value(), Some(100_001));
    }

    #[test]
    fn test_node_debug_does_not_follow_links() {
        let node = Node::new(1, None);
        assert_eq!(format!("{node:?}"), "Node { value: 1, has_next: false }");
    }
}
