use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::arena::{Link, Node, SENTINEL};
use crate::list::ForwardList;

impl<T> ForwardList<T> {
    /// Front-to-back iterator over shared references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.arena.nodes,
            next: self.arena.next_of(SENTINEL),
            remaining: self.len,
        }
    }

    /// Front-to-back iterator over mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let next = self.arena.next_of(SENTINEL);
        let slots = self.arena.nodes.len();
        IterMut {
            nodes: self.arena.nodes.as_mut_ptr(),
            slots,
            next,
            remaining: self.len,
            _marker: PhantomData,
        }
    }
}

// =============================================================================
// Iter
// =============================================================================

pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    next: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.next?];
        self.next = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

// =============================================================================
// IterMut
// =============================================================================

pub struct IterMut<'a, T> {
    nodes: *mut Node<T>,
    slots: usize,
    next: Link,
    remaining: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        assert!(index < self.slots, "link {index} outside the node arena");
        // SAFETY: `nodes` points into an arena we borrow mutably for 'a, so it
        // cannot be reallocated or touched elsewhere meanwhile. The chain is
        // acyclic and skips the sentinel, so each slot is visited at most once
        // and the returned references never alias.
        let node = unsafe { &mut *self.nodes.add(index) };
        self.next = node.next;
        self.remaining -= 1;
        node.value.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

// =============================================================================
// IntoIter
// =============================================================================

pub struct IntoIter<T> {
    list: ForwardList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Collection traits
// =============================================================================

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Builds the list by inserting after the current tail, so the list reads in
/// the same order as the source.
impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = ForwardList::with_capacity(iter.size_hint().0);
        list.append_from_tail(iter);
        list
    }
}

/// Appends at the tail. Finding the tail of a non-empty list costs O(n) once.
impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_from_tail(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.append_from_tail(iter.into_iter().copied());
    }
}
