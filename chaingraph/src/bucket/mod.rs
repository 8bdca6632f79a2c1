//! Arena-backed chain used as the bucket sequence of the chained hash table.
//!
//! A [`Chain`] is an ordered sequence with O(1) front insertion and O(1) removal through a
//! [`NodeHandle`] previously obtained from iteration. Nodes live in a slot arena and are
//! doubly linked through `u32` indices; vacated slots are strung on a free list and reused
//! by later insertions.
//!
//! Every slot carries an epoch that advances each time the slot is vacated. A handle
//! remembers the epoch it was issued under, so using it after its node was removed fails
//! with [`ChainGraphError::InvalidHandle`] instead of silently touching whatever occupies
//! the slot now.
use chaingraph_core::error::ChainGraphError;

/// Sentinel index terminating the chain, the free list, and `prev` links.
const NIL: u32 = u32::MAX;

/// Handle to one node of a [`Chain`].
///
/// Valid from the insertion or iteration that produced it until the node is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHandle {
    index: u32,
    epoch: u32,
}

#[derive(Debug)]
struct Slot<T> {
    /// `None` marks a vacant slot waiting on the free list.
    item: Option<T>,
    epoch: u32,
    prev: u32,
    next: u32,
}

/// Ordered sequence of `T` with handle-based removal.
#[derive(Debug)]
pub struct Chain<T> {
    slots: Vec<Slot<T>>,
    head: u32,
    free: u32,
    len: usize,
}

fn invalid_handle(handle: NodeHandle, slot_epoch: u32) -> ChainGraphError {
    ChainGraphError::InvalidHandle {
        index: handle.index as usize,
        handle_epoch: handle.epoch,
        slot_epoch,
    }
}

impl<T> Chain<T> {
    /// Creates an empty chain. Does not allocate.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: NIL,
            free: NIL,
            len: 0,
        }
    }

    /// Number of nodes in the chain.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prepends `item` and returns a handle to the new node. O(1).
    pub fn push_front(&mut self, item: T) -> NodeHandle {
        let index = match self.free {
            NIL => {
                debug_assert!(
                    self.slots.len() < NIL as usize,
                    r#""slots" arena exhausted the u32 index space"#
                );
                self.slots.push(Slot {
                    item: None,
                    epoch: 0,
                    prev: NIL,
                    next: NIL,
                });
                (self.slots.len() - 1) as u32
            }
            index => {
                self.free = self.slots[index as usize].next;
                index
            }
        };

        let old_head = self.head;
        let slot = &mut self.slots[index as usize];
        slot.item = Some(item);
        slot.prev = NIL;
        slot.next = old_head;
        let epoch = slot.epoch;

        if old_head != NIL {
            self.slots[old_head as usize].prev = index;
        }
        self.head = index;
        self.len += 1;

        NodeHandle { index, epoch }
    }

    /// Handle of the first node, or `None` if the chain is empty.
    pub fn front(&self) -> Option<NodeHandle> {
        (self.head != NIL).then(|| NodeHandle {
            index: self.head,
            epoch: self.slots[self.head as usize].epoch,
        })
    }

    /// Borrows the node behind `handle`, failing if the handle is stale.
    pub fn get(&self, handle: NodeHandle) -> Result<&T, ChainGraphError> {
        match self.slots.get(handle.index as usize) {
            Some(slot) if slot.epoch == handle.epoch => slot
                .item
                .as_ref()
                .ok_or_else(|| invalid_handle(handle, slot.epoch)),
            Some(slot) => Err(invalid_handle(handle, slot.epoch)),
            None => Err(invalid_handle(handle, 0)),
        }
    }

    /// Mutably borrows the node behind `handle`, failing if the handle is stale.
    pub fn get_mut(&mut self, handle: NodeHandle) -> Result<&mut T, ChainGraphError> {
        match self.slots.get_mut(handle.index as usize) {
            Some(slot) if slot.epoch == handle.epoch => {
                let epoch = slot.epoch;
                slot.item
                    .as_mut()
                    .ok_or_else(|| invalid_handle(handle, epoch))
            }
            Some(slot) => Err(invalid_handle(handle, slot.epoch)),
            None => Err(invalid_handle(handle, 0)),
        }
    }

    /// Removes the node behind `handle` and returns its item. O(1).
    ///
    /// The slot's epoch advances, so `handle` (and any copy of it) is rejected from here on,
    /// even after the slot has been reused by a later insertion.
    pub fn remove(&mut self, handle: NodeHandle) -> Result<T, ChainGraphError> {
        let index = handle.index as usize;
        let item = match self.slots.get_mut(index) {
            Some(slot) if slot.epoch == handle.epoch => match slot.item.take() {
                Some(item) => {
                    slot.epoch = slot.epoch.wrapping_add(1);
                    item
                }
                None => return Err(invalid_handle(handle, slot.epoch)),
            },
            Some(slot) => return Err(invalid_handle(handle, slot.epoch)),
            None => return Err(invalid_handle(handle, 0)),
        };

        let (prev, next) = (self.slots[index].prev, self.slots[index].next);
        if prev != NIL {
            self.slots[prev as usize].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.slots[next as usize].prev = prev;
        }

        let slot = &mut self.slots[index];
        slot.prev = NIL;
        slot.next = self.free;
        self.free = handle.index;
        self.len -= 1;

        Ok(item)
    }

    /// Removes and returns the first node's item, or `None` if the chain is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let handle = self.front()?;
        self.remove(handle).ok()
    }

    /// First node matching `pred`, with its handle, in front-to-back order.
    pub fn find<P>(&self, mut pred: P) -> Option<(NodeHandle, &T)>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|&(_, item)| pred(item))
    }

    /// Mutable borrow of the first node matching `pred`, in front-to-back order.
    pub fn find_mut<P>(&mut self, mut pred: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        let mut found = NIL;
        while cursor != NIL {
            let slot = &self.slots[cursor as usize];
            if slot.item.as_ref().is_some_and(|item| pred(item)) {
                found = cursor;
                break;
            }
            cursor = slot.next;
        }
        if found == NIL {
            return None;
        }
        self.slots[found as usize].item.as_mut()
    }

    /// Removes every node. O(slot count).
    ///
    /// Slots are vacated in place rather than dropped, advancing each occupied slot's
    /// epoch, so handles issued before the call are rejected afterwards, even once their
    /// slots are reused by later insertions.
    pub fn clear(&mut self) {
        self.free = NIL;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.item.take().is_some() {
                slot.epoch = slot.epoch.wrapping_add(1);
            }
            slot.prev = NIL;
            slot.next = self.free;
            self.free = index as u32;
        }
        self.head = NIL;
        self.len = 0;
    }

    /// Iterates front to back, yielding each node's handle alongside the item.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: self,
            cursor: self.head,
        }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back iterator over a [`Chain`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    chain: &'a Chain<T>,
    cursor: u32,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (NodeHandle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor != NIL {
            let index = self.cursor;
            let slot = &self.chain.slots[index as usize];
            self.cursor = slot.next;
            if let Some(item) = slot.item.as_ref() {
                return Some((
                    NodeHandle {
                        index,
                        epoch: slot.epoch,
                    },
                    item,
                ));
            }
        }
        None
    }
}
