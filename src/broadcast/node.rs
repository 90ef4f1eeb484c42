//! Linked chain cells shared by the queue and its readers

use std::sync::Arc;

use super::signal::Signal;

/// Resolved state of a node
#[derive(Debug)]
pub(crate) enum Slot<T> {
    /// Holds a published value and the link to the following node
    Filled { value: T, next: Arc<Node<T>> },
    /// End of stream, no value and no link
    Terminal,
}

/// One cell of the chain
///
/// A node starts open (unsignaled) and resolves exactly once, either to
/// [`Slot::Filled`] or [`Slot::Terminal`]. Only the queue resolves nodes, and
/// only while holding its lock; readers only look.
pub(crate) struct Node<T> {
    state: Signal<Slot<T>>,
}

impl<T> Node<T> {
    /// Allocate an open node
    pub(crate) fn open() -> Arc<Self> {
        Arc::new(Self {
            state: Signal::new(),
        })
    }

    /// Store `value`, link a fresh open node and wake all waiters
    ///
    /// Returns the linked node, which becomes the new tail.
    pub(crate) fn fill(&self, value: T) -> Arc<Node<T>> {
        let next = Node::open();
        let filled = self.state.raise(Slot::Filled {
            value,
            next: Arc::clone(&next),
        });
        debug_assert!(filled, "node resolved twice");
        next
    }

    /// Mark this node as end of stream and wake all waiters
    pub(crate) fn mark_terminal(&self) {
        let terminated = self.state.raise(Slot::Terminal);
        debug_assert!(terminated, "node resolved twice");
    }

    /// Wait until the node is filled or terminal
    pub(crate) async fn wait_signal(&self) -> &Slot<T> {
        self.state.wait().await
    }

    /// Current state, `None` while still open
    pub(crate) fn peek(&self) -> Option<&Slot<T>> {
        self.state.get()
    }

    pub(crate) fn is_resolved(&self) -> bool {
        self.state.is_raised()
    }
}

// Only the state is printed; following `next` would walk the whole chain.
impl<T> std::fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.peek() {
            None => "open",
            Some(Slot::Filled { .. }) => "filled",
            Some(Slot::Terminal) => "terminal",
        };
        f.debug_struct("Node").field("state", &state).finish()
    }
}

// Unlink iteratively; a long unread chain would otherwise be dropped
// recursively and could overflow the stack.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = match self.state.take() {
            Some(Slot::Filled { next, .. }) => next,
            _ => return,
        };

        while let Some(mut node) = Arc::into_inner(next) {
            next = match node.state.take() {
                Some(Slot::Filled { next, .. }) => next,
                _ => return,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_links_open_node() {
        let node = Node::open();
        assert!(!node.is_resolved());

        let next = node.fill(5u8);
        assert!(node.is_resolved());
        assert!(!next.is_resolved());

        match node.peek() {
            Some(Slot::Filled { value, next: linked }) => {
                assert_eq!(*value, 5);
                assert!(Arc::ptr_eq(linked, &next));
            }
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[test]
    fn test_mark_terminal() {
        let node = Node::<u8>::open();
        node.mark_terminal();

        assert!(matches!(node.peek(), Some(Slot::Terminal)));
    }

    #[test]
    fn test_drop_long_chain() {
        let head = Node::open();
        let mut tail = Arc::clone(&head);
        for i in 0..200_000u32 {
            tail = tail.fill(i);
        }
        tail.mark_terminal();

        // Would overflow the stack with a recursive drop.
        drop(tail);
        drop(head);
    }

    #[test]
    fn test_drop_stops_at_shared_node() {
        let head = Node::open();
        let middle = head.fill(1u8);
        let last = middle.fill(2u8);

        drop(head);
        assert!(middle.is_resolved());
        assert!(matches!(
            middle.peek(),
            Some(Slot::Filled { value: 2, .. })
        ));
        assert!(!last.is_resolved());
    }
}
