// Read-only and mutable cursors.
//
// Both flavors are a borrowed list plus a `Position`. Stepping, equality and
// dereference all go through the list's position API, so the two types only
// differ in how they borrow the list and what they hand out.

use std::fmt;

use crate::error::ListError;
use crate::list::{contract_violation, ForwardList};
use crate::position::Position;

// =============================================================================
// Cursor: shared borrow, read-only access
// =============================================================================

pub struct Cursor<'a, T> {
    list: &'a ForwardList<T>,
    position: Position<T>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a ForwardList<T>, position: Position<T>) -> Self {
        Cursor { list, position }
    }

    pub fn position(&self) -> Position<T> {
        self.position
    }

    pub fn is_end(&self) -> bool {
        self.position.is_end()
    }

    /// Value under the cursor; `None` at the sentinel or the end.
    pub fn get(&self) -> Option<&'a T> {
        self.list.get(self.position)
    }

    /// Value of the node after the cursor, without moving. `None` when the
    /// cursor is on the last node or at the end.
    ///
    /// # Panics
    ///
    /// Panics if the cursor's position is stale or belongs to another list.
    pub fn peek_next(&self) -> Option<&'a T> {
        value_after(self.list, self.position)
    }

    /// Prefix increment.
    ///
    /// # Panics
    ///
    /// Panics when the cursor is already at the end.
    pub fn advance(&mut self) -> &mut Self {
        if let Err(err) = self.try_advance() {
            contract_violation::<()>("advance", err);
        }
        self
    }

    /// Postfix increment: moves on and returns where the cursor was.
    pub fn advance_post(&mut self) -> Position<T> {
        let previous = self.position;
        self.advance();
        previous
    }

    pub fn try_advance(&mut self) -> Result<(), ListError> {
        self.position = self.list.try_next(self.position)?;
        Ok(())
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("value", &self.get())
            .finish()
    }
}

// =============================================================================
// CursorMut: exclusive borrow, read-write access plus splicing
// =============================================================================

pub struct CursorMut<'a, T> {
    list: &'a mut ForwardList<T>,
    position: Position<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut ForwardList<T>, position: Position<T>) -> Self {
        CursorMut { list, position }
    }

    pub fn position(&self) -> Position<T> {
        self.position
    }

    pub fn is_end(&self) -> bool {
        self.position.is_end()
    }

    pub fn get(&self) -> Option<&T> {
        self.list.get(self.position)
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.list.get_mut(self.position)
    }

    /// See [`Cursor::peek_next`].
    pub fn peek_next(&self) -> Option<&T> {
        value_after(&*self.list, self.position)
    }

    /// Prefix increment.
    ///
    /// # Panics
    ///
    /// Panics when the cursor is already at the end.
    pub fn advance(&mut self) -> &mut Self {
        if let Err(err) = self.try_advance() {
            contract_violation::<()>("advance", err);
        }
        self
    }

    pub fn advance_post(&mut self) -> Position<T> {
        let previous = self.position;
        self.advance();
        previous
    }

    pub fn try_advance(&mut self) -> Result<(), ListError> {
        self.position = self.list.try_next(self.position)?;
        Ok(())
    }

    /// Inserts after the cursor, which stays where it is.
    pub fn insert_after(&mut self, value: T) -> Position<T> {
        self.list.insert_after(self.position, value)
    }

    /// Removes the node after the cursor and returns its value. Same errors
    /// as [`ForwardList::remove_after`].
    pub fn remove_after(&mut self) -> Result<T, ListError> {
        self.list.remove_after(self.position)
    }

    /// Read-only view at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.list, self.position)
    }

    /// Gives up write access for the rest of the borrow.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.position)
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .field("value", &self.get())
            .finish()
    }
}

fn value_after<T>(list: &ForwardList<T>, position: Position<T>) -> Option<&T> {
    match list.try_next(position) {
        Ok(next) => list.get(next),
        Err(ListError::PastTheEnd) => None,
        Err(err) => contract_violation("peek_next", err),
    }
}

// =============================================================================
// Equality by node identity, within and across flavors
// =============================================================================

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<'b, T> PartialEq<CursorMut<'b, T>> for Cursor<'_, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.position == other.position
    }
}

impl<'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.position == other.position
    }
}

impl<T> PartialEq<Position<T>> for Cursor<'_, T> {
    fn eq(&self, other: &Position<T>) -> bool {
        self.position == *other
    }
}

impl<T> PartialEq<Position<T>> for CursorMut<'_, T> {
    fn eq(&self, other: &Position<T>) -> bool {
        self.position == *other
    }
}
