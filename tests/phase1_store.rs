//! Phase 1 tests: open-addressed table and containers.

use adjgraph::store::{OpenTable, Queue, Sequence, Stack, INITIAL_CAPACITY};
use adjgraph::types::GraphError;

use rand::seq::SliceRandom;
use rand::SeedableRng;

// ==================== OpenTable Tests ====================

#[test]
fn test_put_and_get() {
    let mut table = OpenTable::new();
    table.put("alpha".to_string(), 1).unwrap();
    table.put("beta".to_string(), 2).unwrap();

    assert_eq!(*table.get(&"alpha".to_string()).unwrap(), 1);
    assert_eq!(*table.get(&"beta".to_string()).unwrap(), 2);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_put_overwrites_in_place() {
    let mut table = OpenTable::new();
    table.put(7u32, "old").unwrap();
    table.put(7u32, "new").unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.try_get(&7), Some(&"new"));
}

#[test]
fn test_get_missing_key() {
    let table: OpenTable<u32, u32> = OpenTable::new();
    match table.get(&42) {
        Err(GraphError::KeyNotFound) => {}
        other => panic!("Expected KeyNotFound, got {:?}", other),
    }
    assert!(table.try_get(&42).is_none());
    assert!(!table.contains_key(&42));
}

#[test]
fn test_get_mut_updates_value() {
    let mut table = OpenTable::new();
    table.put(1u32, vec![1]).unwrap();
    table.get_mut(&1).unwrap().push(2);
    table.try_get_mut(&1).unwrap().push(3);

    assert_eq!(table.get(&1).unwrap(), &vec![1, 2, 3]);
    assert!(matches!(table.get_mut(&9), Err(GraphError::KeyNotFound)));
}

#[test]
fn test_remove() {
    let mut table = OpenTable::new();
    table.put(1u32, 10).unwrap();
    table.put(2u32, 20).unwrap();

    assert!(table.remove(&1));
    assert!(!table.remove(&1));
    assert!(!table.contains_key(&1));
    assert!(table.contains_key(&2));
    assert_eq!(table.len(), 1);
    assert_eq!(table.tombstones(), 1);
}

#[test]
fn test_remove_then_reinsert_with_new_value() {
    let mut table = OpenTable::new();
    for i in 0..10u32 {
        table.put(i, i).unwrap();
    }
    for i in 0..5u32 {
        assert!(table.remove(&i));
    }
    for i in 0..5u32 {
        table.put(i, i + 100).unwrap();
    }

    for i in 0..5u32 {
        assert_eq!(*table.get(&i).unwrap(), i + 100);
    }
    for i in 5..10u32 {
        assert_eq!(*table.get(&i).unwrap(), i);
    }
    assert_eq!(table.len(), 10);
}

#[test]
fn test_growth_preserves_entries() {
    let mut table = OpenTable::new();
    // Enough for at least two doublings from the initial capacity.
    let count = INITIAL_CAPACITY * 3;
    for i in 0..count {
        table.put(format!("key_{}", i), i).unwrap();
    }

    assert!(table.capacity() >= INITIAL_CAPACITY * 4);
    assert_eq!(table.len(), count);
    for i in 0..count {
        assert_eq!(*table.get(&format!("key_{}", i)).unwrap(), i);
    }
}

#[test]
fn test_load_factor_respected() {
    let mut table = OpenTable::new();
    for i in 0..1000u32 {
        table.put(i, ()).unwrap();
        assert!(table.len() * 100 <= table.capacity() * 70);
    }
}

#[test]
fn test_capacity_never_shrinks() {
    let mut table = OpenTable::new();
    for i in 0..100u32 {
        table.put(i, i).unwrap();
    }
    let capacity = table.capacity();
    for i in 0..100u32 {
        table.remove(&i);
    }
    assert!(table.is_empty());
    assert_eq!(table.capacity(), capacity);
}

#[test]
fn test_iteration_covers_active_entries_only() {
    let mut table = OpenTable::new();
    for i in 0..20u32 {
        table.put(i, i * 2).unwrap();
    }
    for i in (0..20u32).step_by(2) {
        table.remove(&i);
    }

    let mut keys: Vec<u32> = table.keys().copied().collect();
    keys.sort_unstable();
    assert_eq!(keys, (1..20).step_by(2).collect::<Vec<u32>>());

    let mut values: Vec<u32> = table.values().copied().collect();
    values.sort_unstable();
    assert_eq!(values, (1..20u32).step_by(2).map(|i| i * 2).collect::<Vec<_>>());

    assert!(table.iter().all(|(k, v)| *v == k * 2));
}

#[test]
fn test_values_mut() {
    let mut table = OpenTable::new();
    for i in 0..5u32 {
        table.put(i, i).unwrap();
    }
    for v in table.values_mut() {
        *v += 10;
    }
    for i in 0..5u32 {
        assert_eq!(*table.get(&i).unwrap(), i + 10);
    }
}

#[test]
fn test_random_workload_matches_count() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let mut keys: Vec<u64> = (0..500).collect();
    keys.shuffle(&mut rng);

    let mut table = OpenTable::new();
    for &k in &keys {
        table.put(k, k).unwrap();
    }
    keys.shuffle(&mut rng);
    let (removed, kept) = keys.split_at(200);
    for k in removed {
        assert!(table.remove(k));
    }

    assert_eq!(table.len(), kept.len());
    for k in removed {
        assert!(table.try_get(k).is_none());
    }
    for k in kept {
        assert_eq!(table.try_get(k), Some(k));
    }
}

// ==================== Container Tests ====================

#[test]
fn test_sequence_bounds() {
    let mut seq: Sequence<u32> = Sequence::new();
    seq.push(1);
    seq.push(2);

    assert_eq!(*seq.get(1).unwrap(), 2);
    match seq.get(2) {
        Err(GraphError::IndexOutOfRange { index: 2, len: 2 }) => {}
        other => panic!("Expected IndexOutOfRange, got {:?}", other),
    }
}

#[test]
fn test_stack_and_queue_empty() {
    let mut stack: Stack<u32> = Stack::new();
    let mut queue: Queue<u32> = Queue::new();

    assert!(matches!(stack.pop(), Err(GraphError::EmptyContainer)));
    assert!(matches!(queue.dequeue(), Err(GraphError::EmptyContainer)));
    assert!(stack.peek().is_none());
    assert!(queue.peek().is_none());
}
