//! # forward_list
//!
//! A singly-linked list with a before-begin sentinel, O(1) insertion and
//! removal after any [`Position`], and value-semantics copy.
//!
//! Nodes are kept in an arena owned by the list and addressed by stable slot
//! indices, with slot 0 reserved for the sentinel. A [`Position`] is a plain
//! copyable handle to one slot (or to the end); it does not borrow the list,
//! stays valid while other nodes come and go, and is recognised as stale once
//! its own node is removed.
//!
//! ```
//! use forward_list::{forward_list, ForwardList};
//!
//! let mut list = forward_list![1, 3];
//! let one = list.begin();
//! list.insert_after(one, 2);
//! list.insert_after(list.before_begin(), 0);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//!
//! let next = list.erase_after(one);
//! assert_eq!(list[next], 3);
//! assert_eq!(list, ForwardList::from([0, 1, 3]));
//! ```
//!
//! Broken preconditions (stepping past the end, erasing after the last node,
//! using a position from another list) panic in the plain methods and come
//! back as [`ListError`] from the `try_` variants. The list is never left half
//! modified.

mod arena;
mod cmp;
pub mod cursor;
pub mod error;
pub mod iter;
mod list;
mod macros;
pub mod position;

#[cfg(test)]
mod properties;

pub use cursor::{Cursor, CursorMut};
pub use error::{InsertError, ListError};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::{swap, ForwardList};
pub use position::Position;
