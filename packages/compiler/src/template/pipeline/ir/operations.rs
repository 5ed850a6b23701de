//! The mutable operation list underlying create and update sequences.
//!
//! Phases routinely delete the op they are looking at, replace it in place, or splice new ops in
//! front of it, all while walking the list. `OpList` supports this with a linked arena: nodes are
//! allocated in a `Vec` and never move, and list order is kept in prev/next links. An [`OpRef`]
//! names a node and stays valid across any splice.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_LIST_ID: AtomicUsize = AtomicUsize::new(0);

const NIL: usize = usize::MAX;

/// A stable position in an [`OpList`].
///
/// An `OpRef` survives every structural edit of the list, including removal of the op it names.
/// [`OpList::next_after`] resolves the position an in-order walk should visit next: past a
/// removal, onto the successor of an insert-before, and through a replacement (which keeps its
/// node, so the ref now names the replacement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpRef(usize);

struct Node<T> {
    /// `None` once the op has been removed. The node itself is never reclaimed, and its `next`
    /// link is frozen at removal time so that walks resumed from a removed position land on the
    /// op that would have been visited next.
    op: Option<T>,
    prev: usize,
    next: usize,
}

/// An ordered list of IR operations.
pub struct OpList<T> {
    nodes: Vec<Node<T>>,
    head: usize,
    tail: usize,
    len: usize,
    debug_list_id: usize,
}

impl<T> OpList<T> {
    pub fn new() -> Self {
        OpList {
            nodes: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
            debug_list_id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// The number of live ops in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn debug_list_id(&self) -> usize {
        self.debug_list_id
    }

    /// Appends an op to the end of the list.
    pub fn push(&mut self, op: T) -> OpRef {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            op: Some(op),
            prev: self.tail,
            next: NIL,
        });
        if self.tail != NIL {
            self.nodes[self.tail].next = idx;
        } else {
            self.head = idx;
        }
        self.tail = idx;
        self.len += 1;
        OpRef(idx)
    }

    /// The position of the first live op, if any.
    pub fn head(&self) -> Option<OpRef> {
        self.first_live_from(self.head)
    }

    /// The position an in-order walk should visit after `at`.
    ///
    /// Valid even if the op at `at` has been removed: the walk resumes at whatever followed it
    /// when it was removed, skipping anything removed since.
    pub fn next_after(&self, at: OpRef) -> Option<OpRef> {
        self.first_live_from(self.nodes[at.0].next)
    }

    fn first_live_from(&self, mut idx: usize) -> Option<OpRef> {
        while idx != NIL {
            if self.nodes[idx].op.is_some() {
                return Some(OpRef(idx));
            }
            idx = self.nodes[idx].next;
        }
        None
    }

    /// The op at `at`. Panics if it has been removed.
    pub fn get(&self, at: OpRef) -> &T {
        self.nodes[at.0]
            .op
            .as_ref()
            .expect("OpRef names a removed op")
    }

    /// Mutable access to the op at `at`. Panics if it has been removed.
    pub fn get_mut(&mut self, at: OpRef) -> &mut T {
        self.nodes[at.0]
            .op
            .as_mut()
            .expect("OpRef names a removed op")
    }

    /// Removes the op at `at`, unlinking it from the walk order.
    pub fn remove(&mut self, at: OpRef) {
        let node = &mut self.nodes[at.0];
        assert!(node.op.is_some(), "op removed twice");
        node.op = None;
        let (prev, next) = (node.prev, node.next);
        if prev != NIL {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }
        self.len -= 1;
    }

    /// Replaces the op at `at` in place. The position keeps its place in the walk order and
    /// `at` now names the replacement.
    pub fn replace(&mut self, at: OpRef, op: T) {
        let node = &mut self.nodes[at.0];
        assert!(node.op.is_some(), "cannot replace a removed op");
        node.op = Some(op);
    }

    /// Inserts an op immediately before the live op at `at`.
    ///
    /// A walk currently positioned at `at` will not visit the inserted op.
    pub fn insert_before(&mut self, at: OpRef, op: T) -> OpRef {
        assert!(
            self.nodes[at.0].op.is_some(),
            "cannot insert before a removed op"
        );
        let idx = self.nodes.len();
        let prev = self.nodes[at.0].prev;
        self.nodes.push(Node {
            op: Some(op),
            prev,
            next: at.0,
        });
        if prev != NIL {
            self.nodes[prev].next = idx;
        } else {
            self.head = idx;
        }
        self.nodes[at.0].prev = idx;
        self.len += 1;
        OpRef(idx)
    }

    /// Iterates over the live ops in list order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            idx: self.head,
        }
    }

    /// Consumes the list, returning the live ops in list order.
    pub fn into_vec(mut self) -> Vec<T> {
        let mut ops = Vec::with_capacity(self.len);
        let mut idx = self.head;
        while idx != NIL {
            let node = &mut self.nodes[idx];
            if let Some(op) = node.op.take() {
                ops.push(op);
            }
            idx = node.next;
        }
        ops
    }
}

impl<T> Default for OpList<T> {
    fn default() -> Self {
        OpList::new()
    }
}

impl<'a, T> IntoIterator for &'a OpList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for OpList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpList(id={})", self.debug_list_id)?;
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    list: &'a OpList<T>,
    idx: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while self.idx != NIL {
            let node = &self.list.nodes[self.idx];
            self.idx = node.next;
            if let Some(op) = node.op.as_ref() {
                return Some(op);
            }
        }
        None
    }
}
