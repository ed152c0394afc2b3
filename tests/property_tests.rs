//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the heap
//! order and the slot bookkeeping hold after every step, that handles behave as
//! one-shot tickets, and that the queue agrees with a simple model.

use proptest::prelude::*;
use rust_addressable_heap::{Handle, HeapError, PriorityQueue};

use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    ExtractMin,
    ChangePriority(usize, i32),
    Remove(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (-50i32..50).prop_map(Op::Insert),
        2 => Just(Op::ExtractMin),
        3 => (any::<usize>(), -50i32..50).prop_map(|(i, p)| Op::ChangePriority(i, p)),
        3 => any::<usize>().prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

/// Replays `ops` against the queue and a map of live handles
///
/// Every value is unique (its insertion number), so the model can name
/// elements without relying on priorities.
fn run_model(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut queue: PriorityQueue<usize, i32> = PriorityQueue::new();
    let mut live: HashMap<usize, (Handle, i32)> = HashMap::new();
    let mut dead: Vec<Handle> = Vec::new();
    let mut next_value = 0usize;
    let mut inserts = 0usize;
    let mut removals = 0usize;

    for op in ops {
        match op {
            Op::Insert(priority) => {
                let handle = queue.insert(next_value, priority);
                live.insert(next_value, (handle, priority));
                next_value += 1;
                inserts += 1;
            }
            Op::ExtractMin => match queue.extract_min() {
                Some(removed) => {
                    let expected_min = live.values().map(|(_, p)| *p).min();
                    prop_assert_eq!(Some(removed.priority), expected_min);
                    let (handle, _) = live.remove(&removed.value).unwrap();
                    prop_assert_eq!(handle, removed.handle);
                    dead.push(handle);
                    removals += 1;
                }
                None => prop_assert!(live.is_empty()),
            },
            Op::ChangePriority(pick, priority) => {
                if live.is_empty() {
                    continue;
                }
                let mut keys: Vec<usize> = live.keys().copied().collect();
                keys.sort_unstable();
                let value = keys[pick % keys.len()];
                let entry = live.get_mut(&value).unwrap();
                prop_assert_eq!(queue.change_priority(&entry.0, priority), Ok(()));
                entry.1 = priority;
            }
            Op::Remove(pick) => {
                if live.is_empty() {
                    continue;
                }
                let mut keys: Vec<usize> = live.keys().copied().collect();
                keys.sort_unstable();
                let value = keys[pick % keys.len()];
                let (handle, priority) = live.remove(&value).unwrap();
                let removed = queue.remove_at(&handle).unwrap();
                prop_assert_eq!(removed.value, value);
                prop_assert_eq!(removed.priority, priority);
                dead.push(handle);
                removals += 1;
            }
            Op::Clear => {
                removals += live.len();
                dead.extend(live.drain().map(|(_, (handle, _))| handle));
                queue.clear();
            }
        }

        if let Err(violation) = queue.check_invariants() {
            return Err(TestCaseError::fail(violation));
        }
        prop_assert_eq!(queue.len(), inserts - removals);
        prop_assert_eq!(queue.len(), live.len());

        for (value, (handle, priority)) in &live {
            prop_assert_eq!(queue.value(handle), Ok(value));
            prop_assert_eq!(queue.priority(handle), Ok(priority));
        }
        for handle in &dead {
            prop_assert!(!queue.is_valid(handle));
        }
    }

    for handle in &dead {
        prop_assert_eq!(queue.change_priority(handle, 0), Err(HeapError::InvalidHandle));
        prop_assert_eq!(queue.remove_at(handle).err(), Some(HeapError::InvalidHandle));
    }
    Ok(())
}

/// Test that extraction yields non-decreasing priorities
fn test_pop_order_invariant(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut queue = PriorityQueue::new();
    for val in &values {
        queue.insert(*val, *val);
    }

    let mut last_priority = i32::MIN;
    let mut count = 0;
    while let Some(removed) = queue.extract_min() {
        prop_assert!(
            removed.priority >= last_priority,
            "Popped priority {} is less than previous {}",
            removed.priority,
            last_priority
        );
        last_priority = removed.priority;
        count += 1;
    }
    prop_assert_eq!(count, values.len());
    Ok(())
}

/// Removing arbitrary handles from heavily tied, deep heaps
///
/// The tail promoted into a freed slot is moved by a single parent comparison;
/// ties and deep trees are where a wrong direction would go unnoticed.
fn test_remove_with_ties(priorities: Vec<i32>, removals: Vec<usize>) -> Result<(), TestCaseError> {
    let mut queue = PriorityQueue::new();
    let mut handles: Vec<Handle> = priorities
        .iter()
        .enumerate()
        .map(|(i, p)| queue.insert(i, *p))
        .collect();

    for pick in removals {
        if handles.is_empty() {
            break;
        }
        let handle = handles.swap_remove(pick % handles.len());
        queue.remove_at(&handle).unwrap();
        if let Err(violation) = queue.check_invariants() {
            return Err(TestCaseError::fail(violation));
        }
    }

    let mut remaining: Vec<i32> = handles
        .iter()
        .map(|h| *queue.priority(h).unwrap())
        .collect();
    remaining.sort_unstable();
    let drained: Vec<i32> = queue.into_sorted_vec().into_iter().map(|(p, _)| p).collect();
    prop_assert_eq!(drained, remaining);
    Ok(())
}

/// Test that `contains` and `to_vec` agree with what was inserted
fn test_contains_matches_contents(values: Vec<u8>) -> Result<(), TestCaseError> {
    let mut queue = PriorityQueue::new();
    for v in &values {
        queue.insert(*v, u32::from(*v) * 7 % 11);
    }

    let mut snapshot = queue.to_vec();
    let mut expected = values.clone();
    snapshot.sort_unstable();
    expected.sort_unstable();
    prop_assert_eq!(snapshot, expected);

    for probe in 0u8..=255 {
        prop_assert_eq!(queue.contains(&probe), values.contains(&probe));
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_random_operations_keep_invariants(ops in prop::collection::vec(op_strategy(), 0..200)) {
        run_model(ops)?;
    }

    #[test]
    fn test_extraction_is_sorted(values in prop::collection::vec(-100i32..100, 1..200)) {
        test_pop_order_invariant(values)?;
    }

    #[test]
    fn test_distinct_priorities_extract_in_order(
        values in prop::collection::hash_set(-1000i32..1000, 1..100)
    ) {
        let mut queue = PriorityQueue::new();
        for v in &values {
            queue.insert(*v, *v);
        }
        let mut expected: Vec<i32> = values.into_iter().collect();
        expected.sort_unstable();
        let extracted: Vec<i32> = std::iter::from_fn(|| queue.extract_min().map(|r| r.value)).collect();
        prop_assert_eq!(extracted, expected);
    }

    #[test]
    fn test_removal_with_ties_in_deep_trees(
        priorities in prop::collection::vec(0i32..4, 1..300),
        removals in prop::collection::vec(any::<usize>(), 0..300)
    ) {
        test_remove_with_ties(priorities, removals)?;
    }

    #[test]
    fn test_contains_and_snapshot(values in prop::collection::vec(any::<u8>(), 0..60)) {
        test_contains_matches_contents(values)?;
    }
}
