use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::arena::{ListId, SENTINEL};

/// A place in a [`ForwardList`](crate::ForwardList): the before-begin
/// sentinel, a real node, or the end of the chain.
///
/// Positions are plain copyable handles. They do not borrow the list, so
/// they survive insertions and removals of *other* nodes. Reading or writing
/// through a position goes back through the list (`list.get(pos)`,
/// `list[pos]`), which is where read-only and mutable access split.
///
/// Two positions are equal when they name the same node. All end positions
/// are equal to one another.
pub struct Position<T> {
    target: Target,
    _marker: PhantomData<fn() -> T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Target {
    End,
    Node {
        list: ListId,
        index: usize,
        generation: u32,
    },
}

// Manual implementations to avoid requiring T: Clone/Copy/etc.
impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}

impl<T> Eq for Position<T> {}

impl<T> Hash for Position<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.target.hash(state);
    }
}

impl<T> fmt::Debug for Position<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Target::End => f.write_str("Position(end)"),
            Target::Node { index: SENTINEL, .. } => f.write_str("Position(before-begin)"),
            Target::Node {
                index, generation, ..
            } => write!(f, "Position({index}@{generation})"),
        }
    }
}

impl<T> Position<T> {
    pub(crate) fn end() -> Self {
        Position {
            target: Target::End,
            _marker: PhantomData,
        }
    }

    pub(crate) fn node(list: ListId, index: usize, generation: u32) -> Self {
        Position {
            target: Target::Node {
                list,
                index,
                generation,
            },
            _marker: PhantomData,
        }
    }

    pub(crate) fn target(self) -> Target {
        self.target
    }

    /// True for the terminus past the last element.
    pub fn is_end(self) -> bool {
        self.target == Target::End
    }

    /// True for the sentinel that sits in front of the first element.
    pub fn is_before_begin(self) -> bool {
        matches!(self.target, Target::Node { index: SENTINEL, .. })
    }
}
