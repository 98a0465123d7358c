//! An ordered set of 16-bit slot ids that supports O(1) removal of the
//! element currently under a cursor while keeping the cursor valid.
//!
//! This is a doubly linked list, but represented as an arena of parallel
//! arrays (`value`/`next`/`prev`) indexed by position rather than as
//! heap-allocated nodes: there's exactly one list in flight per encode or
//! decode call, entries are never reinserted once removed, and the arena form
//! avoids a `Box`/`Rc` per node for a 65,536-entry structure that's rebuilt on
//! every call.

/// Sentinel marking "no node" for both list ends and a deleted cursor
/// position.
const NONE: u32 = u32::MAX;

/// A walk over a fixed initial order of slot ids, supporting in-place
/// removal of the currently visited id without invalidating the walk.
#[derive(Debug, Clone)]
pub(crate) struct FreeSlots {
    value: Vec<u16>,
    next: Vec<u32>,
    prev: Vec<u32>,
    head: u32,
    cursor: u32,
}

impl FreeSlots {
    /// Build a free-slot walk over `order`, visiting ids in the given
    /// sequence.
    pub(crate) fn new(order: &[u16]) -> Self {
        let len = order.len();
        let mut next = Vec::with_capacity(len);
        let mut prev = Vec::with_capacity(len);
        for i in 0..len {
            next.push(if i + 1 < len { (i + 1) as u32 } else { NONE });
            prev.push(if i > 0 { (i - 1) as u32 } else { NONE });
        }
        let head = if len > 0 { 0 } else { NONE };
        FreeSlots { value: order.to_vec(), next, prev, head, cursor: head }
    }

    /// The slot id currently under the cursor, or `None` if the walk is
    /// exhausted.
    pub(crate) fn current(&self) -> Option<u16> {
        (self.cursor != NONE).then(|| self.value[self.cursor as usize])
    }

    /// Advance the cursor to the next remaining id.
    pub(crate) fn advance(&mut self) {
        if self.cursor != NONE {
            self.cursor = self.next[self.cursor as usize];
        }
    }

    /// Consume the id under the cursor and advance to the next remaining id,
    /// returning the consumed id.
    pub(crate) fn take(&mut self) -> Option<u16> {
        let id = self.current()?;
        self.advance();
        Some(id)
    }

    /// Remove the node currently under the cursor and advance to what was
    /// its successor (or end-of-list). A no-op if the walk is exhausted.
    pub(crate) fn delete_current(&mut self) {
        let Some(node) = (self.cursor != NONE).then_some(self.cursor as usize) else {
            return;
        };
        let (p, n) = (self.prev[node], self.next[node]);
        if p != NONE {
            self.next[p as usize] = n;
        } else {
            self.head = n;
        }
        if n != NONE {
            self.prev[n as usize] = p;
        }
        self.cursor = n;
    }

    /// Reset the cursor to the head of what remains of the list.
    pub(crate) fn rewind(&mut self) {
        self.cursor = self.head;
    }

    /// Walk the whole list from the head, deleting every id present in
    /// `occupied`, then rewind. Used to remove header/shift slots from a
    /// payload permutation before the payload is written or read.
    pub(crate) fn remove_occupied(&mut self, occupied: &std::collections::HashSet<u16>) {
        self.rewind();
        while let Some(id) = self.current() {
            if occupied.contains(&id) {
                self.delete_current();
            } else {
                self.advance();
            }
        }
        self.rewind();
    }
}
