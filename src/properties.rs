// Property tests: the list against a `Vec` model.

use proptest::prelude::*;

use crate::{ForwardList, ListError, Position};

fn contents<T: Clone>(list: &ForwardList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

/// Position `steps` nodes past the sentinel.
fn nth_after_sentinel<T>(list: &ForwardList<T>, steps: usize) -> Position<T> {
    let mut pos = list.before_begin();
    for _ in 0..steps {
        pos = list.next(pos);
    }
    pos
}

#[derive(Debug, Clone)]
enum Op {
    PushFront(i32),
    PopFront,
    // Anchor indices count from the sentinel and are reduced modulo len + 1.
    InsertAfter(usize, i32),
    EraseAfter(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::PushFront),
        2 => Just(Op::PopFront),
        4 => (any::<usize>(), any::<i32>()).prop_map(|(at, v)| Op::InsertAfter(at, v)),
        3 => any::<usize>().prop_map(Op::EraseAfter),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn test_collect_preserves_sequence(values: Vec<i32>) {
        let list: ForwardList<_> = values.iter().copied().collect();
        prop_assert_eq!(list.len(), values.len());
        prop_assert_eq!(contents(&list), values);
        prop_assert!(list.check_integrity().is_ok());
    }

    #[test]
    fn test_clone_shares_nothing(values in prop::collection::vec(any::<i32>(), 1..50), extra: i32) {
        let original: ForwardList<_> = values.iter().copied().collect();
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);

        copy.push_front(extra);
        *copy.iter_mut().last().unwrap() ^= 1;
        prop_assert_eq!(contents(&original), values.clone());

        let mut assigned = ForwardList::from([extra]);
        assigned.clone_from(&original);
        assigned.pop_front();
        prop_assert_eq!(contents(&original), values);
    }

    #[test]
    fn test_swap_twice_restores(a: Vec<u8>, b: Vec<u8>) {
        let mut la: ForwardList<_> = a.iter().copied().collect();
        let mut lb: ForwardList<_> = b.iter().copied().collect();
        la.swap(&mut lb);
        prop_assert_eq!(contents(&la), b.clone());
        prop_assert_eq!(contents(&lb), a.clone());
        la.swap(&mut lb);
        prop_assert_eq!(contents(&la), a);
        prop_assert_eq!(contents(&lb), b);
    }

    #[test]
    fn test_insert_then_erase_at_front_round_trips(values: Vec<i32>, v: i32) {
        let mut list: ForwardList<_> = values.iter().copied().collect();
        let inserted = list.insert_after(list.before_begin(), v);
        prop_assert_eq!(list[inserted], v);
        prop_assert_eq!(list.len(), values.len() + 1);

        let next = list.erase_after(list.before_begin());
        prop_assert_eq!(next, list.begin());
        prop_assert_eq!(contents(&list), values);
    }

    #[test]
    fn test_erase_after_returns_old_successor(
        values in prop::collection::vec(any::<i32>(), 2..40),
        at in any::<prop::sample::Index>(),
    ) {
        let mut list: ForwardList<_> = values.iter().copied().collect();
        // Any node that has a successor.
        let steps = at.index(values.len() - 1) + 1;
        let pos = nth_after_sentinel(&list, steps);
        let victim = list.next(pos);
        let expected = list.next(victim);

        let next = list.erase_after(pos);
        prop_assert_eq!(next, expected);
        prop_assert_eq!(list.len(), values.len() - 1);
        prop_assert_eq!(list.try_get(victim), Err(ListError::StalePosition));
    }

    #[test]
    fn test_clear_is_idempotent(values: Vec<i32>) {
        let mut list: ForwardList<_> = values.into_iter().collect();
        list.clear();
        prop_assert!(list.is_empty());
        prop_assert_eq!(list.begin(), list.end());
        list.clear();
        prop_assert_eq!(list.len(), 0);
        prop_assert!(list.check_integrity().is_ok());
    }

    #[test]
    fn test_operations_match_vec_model(ops in prop::collection::vec(op_strategy(), 0..120)) {
        let mut list = ForwardList::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::PushFront(v) => {
                    list.push_front(v);
                    model.insert(0, v);
                }
                Op::PopFront => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(list.pop_front(), expected);
                }
                Op::InsertAfter(at, v) => {
                    let steps = at % (model.len() + 1);
                    let pos = nth_after_sentinel(&list, steps);
                    let inserted = list.insert_after(pos, v);
                    model.insert(steps, v);
                    prop_assert_eq!(list[inserted], v);
                }
                Op::EraseAfter(at) => {
                    let steps = at % (model.len() + 1);
                    let pos = nth_after_sentinel(&list, steps);
                    if steps < model.len() {
                        let removed = list.remove_after(pos);
                        prop_assert_eq!(removed, Ok(model.remove(steps)));
                    } else {
                        prop_assert_eq!(list.try_erase_after(pos), Err(ListError::NoSuccessor));
                    }
                }
                Op::Clear => {
                    list.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(list.len(), model.len());
            prop_assert!(list.check_integrity().is_ok());
        }
        prop_assert_eq!(contents(&list), model);
    }
}
