use std::mem;
use std::ops::{Index, IndexMut};

use crate::arena::{Arena, Link, SENTINEL};
use crate::cursor::{Cursor, CursorMut};
use crate::error::{InsertError, ListError};
use crate::position::{Position, Target};

/// A singly-linked list with a before-begin sentinel.
///
/// Nodes live in an arena owned by the list and are addressed by stable
/// slot indices. The sentinel occupies slot 0 for the whole lifetime of the
/// list, so "insert before the first element" is just "insert after the
/// sentinel", and every insertion or removal is O(1) given a [`Position`].
pub struct ForwardList<T> {
    pub(crate) arena: Arena<T>,
    pub(crate) len: usize,
}

// =============================================================================
// Construction, capacity and exchange
// =============================================================================

impl<T> ForwardList<T> {
    pub fn new() -> Self {
        ForwardList {
            arena: Arena::new(),
            len: 0,
        }
    }

    /// Creates an empty list whose arena can take `capacity` nodes before
    /// it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        ForwardList {
            arena: Arena::with_capacity(capacity),
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.arena.reserve(additional);
    }

    /// Hands back memory held by vacated slots at the end of the arena.
    ///
    /// Live nodes never move, so every valid position stays valid. After a
    /// [`clear`](Self::clear) this releases all node storage.
    pub fn shrink_to_fit(&mut self) {
        self.arena.shrink_to_fit();
        self.verify_after_mutation();
    }

    /// Exchanges the node chains and lengths of two lists in O(1).
    ///
    /// Positions follow their nodes: a position taken from `self` before the
    /// call refers to the same node, now owned by `other`, afterwards.
    pub fn swap(&mut self, other: &mut Self) {
        log::trace!("swapping lists of {} and {} nodes", self.len, other.len);
        mem::swap(&mut self.arena, &mut other.arena);
        mem::swap(&mut self.len, &mut other.len);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        let first = self.arena.next_of(SENTINEL)?;
        self.arena.node(first).value.as_ref()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        let first = self.arena.next_of(SENTINEL)?;
        self.arena.node_mut(first).value.as_mut()
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        log::trace!("copying list of {} nodes", self.len);
        let mut copy = ForwardList::with_capacity(self.len);
        copy.extend(self.iter().cloned());
        copy
    }

    /// Copy-and-swap: the old contents are only released once the new copy
    /// is complete, so a panicking `T::clone` leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut staged = source.clone();
        self.swap(&mut staged);
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        let mut list = ForwardList::with_capacity(N);
        list.extend(values);
        list
    }
}

impl<T> From<Vec<T>> for ForwardList<T> {
    fn from(values: Vec<T>) -> Self {
        let mut list = ForwardList::with_capacity(values.len());
        list.extend(values);
        list
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        if !self.is_empty() {
            self.clear();
        }
    }
}

// =============================================================================
// Front and positional mutation
// =============================================================================

impl<T> ForwardList<T> {
    /// Prepends `value`. Existing positions stay valid.
    pub fn push_front(&mut self, value: T) {
        self.link_after(SENTINEL, value);
        self.verify_after_mutation();
    }

    /// Detaches and returns the first element, or `None` on an empty list.
    pub fn pop_front(&mut self) -> Option<T> {
        let value = self.unlink_after(SENTINEL);
        self.verify_after_mutation();
        value
    }

    /// Like [`pop_front`](Self::pop_front), but an empty list is reported as
    /// [`ListError::Empty`].
    pub fn try_pop_front(&mut self) -> Result<T, ListError> {
        self.pop_front().ok_or(ListError::Empty)
    }

    /// Splices `value` in right after `pos` and returns its position.
    ///
    /// `pos` may be [`before_begin`](Self::before_begin).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end, stale, or taken from another list.
    pub fn insert_after(&mut self, pos: Position<T>, value: T) -> Position<T> {
        self.try_insert_after(pos, value)
            .unwrap_or_else(|err| contract_violation("insert_after", err.error))
    }

    /// Checked form of [`insert_after`](Self::insert_after). On error the
    /// list is unchanged and `value` comes back inside the [`InsertError`].
    pub fn try_insert_after(
        &mut self,
        pos: Position<T>,
        value: T,
    ) -> Result<Position<T>, InsertError<T>> {
        let at = match self.resolve(pos) {
            Ok(at) => at,
            Err(error) => return Err(InsertError { error, value }),
        };
        let index = self.link_after(at, value);
        self.verify_after_mutation();
        Ok(self.position_of(Some(index)))
    }

    /// Removes the node following `pos` and returns the position that now
    /// follows `pos` (the end if the removed node was last).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end, stale, foreign, or the last element.
    pub fn erase_after(&mut self, pos: Position<T>) -> Position<T> {
        self.try_erase_after(pos)
            .unwrap_or_else(|err| contract_violation("erase_after", err))
    }

    pub fn try_erase_after(&mut self, pos: Position<T>) -> Result<Position<T>, ListError> {
        let at = self.resolve(pos)?;
        self.unlink_after(at).ok_or(ListError::NoSuccessor)?;
        self.verify_after_mutation();
        Ok(self.position_of(self.arena.next_of(at)))
    }

    /// Like [`try_erase_after`](Self::try_erase_after) but hands the removed
    /// value back instead of dropping it.
    pub fn remove_after(&mut self, pos: Position<T>) -> Result<T, ListError> {
        let at = self.resolve(pos)?;
        let value = self.unlink_after(at).ok_or(ListError::NoSuccessor)?;
        self.verify_after_mutation();
        Ok(value)
    }

    /// Drops every element in chain order. The sentinel stays, so
    /// [`before_begin`](Self::before_begin) positions remain valid.
    pub fn clear(&mut self) {
        log::trace!("clearing list of {} nodes", self.len);
        let mut link = self.arena.node_mut(SENTINEL).next.take();
        while let Some(index) = link {
            link = self.arena.next_of(index);
            drop(self.arena.release(index));
        }
        self.len = 0;
        self.verify_after_mutation();
    }

    fn link_after(&mut self, at: usize, value: T) -> usize {
        let next = self.arena.next_of(at);
        let index = self.arena.alloc(value, next);
        self.arena.node_mut(at).next = Some(index);
        self.len += 1;
        index
    }

    fn unlink_after(&mut self, at: usize) -> Option<T> {
        let victim = self.arena.next_of(at)?;
        let after = self.arena.next_of(victim);
        self.arena.node_mut(at).next = after;
        self.len -= 1;
        self.arena.release(victim)
    }

    /// Slot of the last node, or the sentinel when empty. O(n).
    pub(crate) fn tail_index(&self) -> usize {
        let mut index = SENTINEL;
        while let Some(next) = self.arena.next_of(index) {
            index = next;
        }
        index
    }

    /// Appends values by repeated insert-after-tail, keeping input order.
    pub(crate) fn append_from_tail<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let mut tail = self.tail_index();
        for value in values {
            tail = self.link_after(tail, value);
        }
        self.verify_after_mutation();
    }
}

// =============================================================================
// Positions
// =============================================================================

impl<T> ForwardList<T> {
    /// Position of the first element, equal to [`end`](Self::end) when empty.
    pub fn begin(&self) -> Position<T> {
        self.position_of(self.arena.next_of(SENTINEL))
    }

    pub fn end(&self) -> Position<T> {
        Position::end()
    }

    /// The sentinel position, an anchor for `insert_after`/`erase_after` at
    /// the front. It has no value.
    pub fn before_begin(&self) -> Position<T> {
        self.position_of(Some(SENTINEL))
    }

    /// Advances `pos` by one node.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end, stale, or foreign.
    pub fn next(&self, pos: Position<T>) -> Position<T> {
        self.try_next(pos)
            .unwrap_or_else(|err| contract_violation("next", err))
    }

    pub fn try_next(&self, pos: Position<T>) -> Result<Position<T>, ListError> {
        let index = self.resolve(pos)?;
        Ok(self.position_of(self.arena.next_of(index)))
    }

    /// Value at `pos`, or `None` for the sentinel, the end, or a position that
    /// no longer names a node of this list.
    pub fn get(&self, pos: Position<T>) -> Option<&T> {
        self.try_get(pos).ok()
    }

    pub fn get_mut(&mut self, pos: Position<T>) -> Option<&mut T> {
        self.try_get_mut(pos).ok()
    }

    pub fn try_get(&self, pos: Position<T>) -> Result<&T, ListError> {
        let index = self.resolve_value(pos)?;
        self.arena
            .node(index)
            .value
            .as_ref()
            .ok_or(ListError::StalePosition)
    }

    pub fn try_get_mut(&mut self, pos: Position<T>) -> Result<&mut T, ListError> {
        let index = self.resolve_value(pos)?;
        self.arena
            .node_mut(index)
            .value
            .as_mut()
            .ok_or(ListError::StalePosition)
    }

    /// Read-only cursor at `pos`.
    pub fn cursor(&self, pos: Position<T>) -> Cursor<'_, T> {
        Cursor::new(self, pos)
    }

    /// Mutable cursor at `pos`.
    pub fn cursor_mut(&mut self, pos: Position<T>) -> CursorMut<'_, T> {
        CursorMut::new(self, pos)
    }

    pub fn cbegin(&self) -> Cursor<'_, T> {
        self.cursor(self.begin())
    }

    pub fn cend(&self) -> Cursor<'_, T> {
        self.cursor(self.end())
    }

    pub fn cbefore_begin(&self) -> Cursor<'_, T> {
        self.cursor(self.before_begin())
    }

    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let pos = self.begin();
        self.cursor_mut(pos)
    }

    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        let pos = self.before_begin();
        self.cursor_mut(pos)
    }

    pub(crate) fn position_of(&self, link: Link) -> Position<T> {
        match link {
            Some(index) => {
                Position::node(self.arena.id(), index, self.arena.node(index).generation)
            }
            None => Position::end(),
        }
    }

    /// Slot index named by `pos`, which may be the sentinel.
    pub(crate) fn resolve(&self, pos: Position<T>) -> Result<usize, ListError> {
        match pos.target() {
            Target::End => Err(ListError::PastTheEnd),
            Target::Node { list, .. } if list != self.arena.id() => {
                Err(ListError::ForeignPosition)
            }
            Target::Node {
                index, generation, ..
            } => {
                if self.arena.is_live(index, generation) {
                    Ok(index)
                } else {
                    Err(ListError::StalePosition)
                }
            }
        }
    }

    fn resolve_value(&self, pos: Position<T>) -> Result<usize, ListError> {
        match self.resolve(pos)? {
            SENTINEL => Err(ListError::BeforeBegin),
            index => Ok(index),
        }
    }
}

impl<T> Index<Position<T>> for ForwardList<T> {
    type Output = T;

    fn index(&self, pos: Position<T>) -> &T {
        self.try_get(pos)
            .unwrap_or_else(|err| contract_violation("index", err))
    }
}

impl<T> IndexMut<Position<T>> for ForwardList<T> {
    fn index_mut(&mut self, pos: Position<T>) -> &mut T {
        self.try_get_mut(pos)
            .unwrap_or_else(|err| contract_violation("index_mut", err))
    }
}

// =============================================================================
// Integrity
// =============================================================================

impl<T> ForwardList<T> {
    /// Walks the whole chain and checks the structural invariants: the
    /// sentinel holds no value, the chain is acyclic and reaches its end after
    /// exactly `len()` nodes, and every other slot is vacant.
    pub fn check_integrity(&self) -> Result<(), ListError> {
        let sentinel = self.arena.node(SENTINEL);
        if sentinel.value.is_some() {
            return Err(ListError::Corrupted {
                reason: "sentinel holds a value",
            });
        }

        let mut steps = 0;
        let mut link = sentinel.next;
        while let Some(index) = link {
            if index == SENTINEL || index >= self.arena.slot_count() {
                return Err(ListError::Corrupted {
                    reason: "link points outside the node arena",
                });
            }
            steps += 1;
            if steps > self.len {
                return Err(ListError::Corrupted {
                    reason: "chain is longer than the recorded length",
                });
            }
            let node = self.arena.node(index);
            if node.value.is_none() {
                return Err(ListError::Corrupted {
                    reason: "chain passes through a vacant slot",
                });
            }
            link = node.next;
        }
        if steps != self.len {
            return Err(ListError::Corrupted {
                reason: "chain is shorter than the recorded length",
            });
        }

        let free = self.arena.free_slots();
        if free.len() + self.len + 1 != self.arena.slot_count() {
            return Err(ListError::Corrupted {
                reason: "slot accounting does not add up",
            });
        }
        if free.iter().any(|&index| self.arena.node(index).value.is_some()) {
            return Err(ListError::Corrupted {
                reason: "free slot still holds a value",
            });
        }
        Ok(())
    }

    #[cfg(feature = "strict-checks")]
    fn verify_after_mutation(&self) {
        if let Err(err) = self.check_integrity() {
            log::error!("integrity check failed: {err}");
            panic!("{err}");
        }
    }

    #[cfg(not(feature = "strict-checks"))]
    fn verify_after_mutation(&self) {}
}

/// Swaps two lists' contents. Same as [`ForwardList::swap`].
pub fn swap<T>(lhs: &mut ForwardList<T>, rhs: &mut ForwardList<T>) {
    lhs.swap(rhs);
}

#[track_caller]
pub(crate) fn contract_violation<R>(operation: &str, err: ListError) -> R {
    log::error!("{operation}: {err}");
    panic!("{operation}: {err}")
}
