/// Builds a [`ForwardList`](crate::ForwardList) in the order the values are
/// written, like `vec!`.
///
/// ```
/// use forward_list::forward_list;
///
/// let list = forward_list![1, 2, 3];
/// assert_eq!(list.front(), Some(&1));
///
/// let zeros = forward_list![0u8; 4];
/// assert_eq!(zeros.len(), 4);
/// ```
#[macro_export]
macro_rules! forward_list {
    () => {
        $crate::ForwardList::new()
    };
    ($value:expr; $count:expr) => {
        ::core::iter::repeat($value)
            .take($count)
            .collect::<$crate::ForwardList<_>>()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::ForwardList::from([$($value),+])
    };
}
