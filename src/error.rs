use thiserror::Error;

/// Logic errors raised when a caller breaks one of the list's preconditions.
///
/// The panicking methods on [`ForwardList`](crate::ForwardList) use the
/// display text of these variants as their panic message; the `try_` twins
/// return them instead. Either way the list is left exactly as it was.
#[non_exhaustive]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// Only returned by [`try_pop_front`](crate::ForwardList::try_pop_front).
    #[error("the list is empty")]
    Empty,

    #[error("position is past the end of the list")]
    PastTheEnd,

    #[error("position is the before-begin sentinel and holds no value")]
    BeforeBegin,

    #[error("position has no successor to erase")]
    NoSuccessor,

    #[error("position does not belong to this list")]
    ForeignPosition,

    #[error("position refers to a node that has been removed")]
    StalePosition,

    #[error("node chain is corrupted: {reason}")]
    Corrupted { reason: &'static str },
}

/// Rejected insertion. Carries the value back so the caller keeps ownership.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct InsertError<T> {
    pub error: ListError,
    pub value: T,
}

impl<T> InsertError<T> {
    pub fn into_value(self) -> T {
        self.value
    }
}
