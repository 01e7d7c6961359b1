//! Open-addressed hash table with linear probing and tombstone deletion.
//!
//! Used as the adjacency store of [`Graph`](crate::graph::Graph) and as the
//! scratch maps (visited, distance, predecessor) of the graph algorithms.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::types::{GraphError, GraphResult};

/// Slot count of a freshly created table.
pub const INITIAL_CAPACITY: usize = 16;

/// Maximum share of occupied slots, in percent, before the table doubles.
pub const LOAD_FACTOR_PERCENT: usize = 70;

#[derive(Debug, Clone)]
enum Slot<K, V> {
    Empty,
    Tombstone,
    Occupied { key: K, value: V },
}

/// Outcome of a probe sequence for a key.
enum Probe {
    /// Occupied slot holding the key.
    Found(usize),
    /// Slot where the key would be placed (first tombstone, else the empty slot).
    Vacant(usize),
    /// Neither the key nor a usable slot in a full cycle.
    Full,
}

/// Hash table mapping keys to values with open addressing.
///
/// Removal leaves a tombstone so that probe sequences running through the
/// removed slot keep working. Tombstones are discarded when the table grows.
///
/// Iteration order is table order, not insertion order. Iterators borrow the
/// table, so it cannot be mutated while a traversal is in flight.
#[derive(Debug, Clone)]
pub struct OpenTable<K, V> {
    slots: Vec<Slot<K, V>>,
    len: usize,
}

impl<K: Hash + Eq, V> OpenTable<K, V> {
    /// Create a new, empty table with [`INITIAL_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Create a new, empty table with the given slot count (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity.max(1)),
            len: 0,
        }
    }

    /// Number of active entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table has no active entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of tombstoned slots.
    pub fn tombstones(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Tombstone))
            .count()
    }

    /// Insert a new entry or overwrite the value of an existing key.
    pub fn put(&mut self, key: K, value: V) -> GraphResult<()> {
        if (self.len + 1) * 100 > self.slots.len() * LOAD_FACTOR_PERCENT {
            self.grow();
        }

        match self.probe(&key) {
            Probe::Found(idx) => {
                if let Slot::Occupied { value: current, .. } = &mut self.slots[idx] {
                    *current = value;
                }
            }
            Probe::Vacant(idx) => {
                self.slots[idx] = Slot::Occupied { key, value };
                self.len += 1;
            }
            Probe::Full => return Err(GraphError::CapacityExhausted(self.slots.len())),
        }
        Ok(())
    }

    /// Get the value for a key, failing with `KeyNotFound` when absent.
    pub fn get(&self, key: &K) -> GraphResult<&V> {
        self.try_get(key).ok_or(GraphError::KeyNotFound)
    }

    /// Get the value for a key (mutable), failing with `KeyNotFound` when absent.
    pub fn get_mut(&mut self, key: &K) -> GraphResult<&mut V> {
        self.try_get_mut(key).ok_or(GraphError::KeyNotFound)
    }

    /// Get the value for a key, or `None` when absent.
    pub fn try_get(&self, key: &K) -> Option<&V> {
        match self.find(key).map(|idx| &self.slots[idx]) {
            Some(Slot::Occupied { value, .. }) => Some(value),
            _ => None,
        }
    }

    /// Get the value for a key (mutable), or `None` when absent.
    pub fn try_get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        match &mut self.slots[idx] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Whether an active entry exists for the key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Tombstone the entry for a key. Returns whether anything was removed.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.find(key) {
            Some(idx) => {
                self.slots[idx] = Slot::Tombstone;
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Active keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Active values in table order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Active values in table order (mutable).
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.slots.iter_mut().filter_map(|slot| match slot {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        })
    }

    /// Active entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((key, value)),
            _ => None,
        })
    }

    fn primary_index(&self, key: &K) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() % self.slots.len() as u64) as usize
    }

    fn find(&self, key: &K) -> Option<usize> {
        match self.probe(key) {
            Probe::Found(idx) => Some(idx),
            _ => None,
        }
    }

    /// Walk the linear probe sequence for `key`. Tombstones never end the
    /// walk; the first one seen is the preferred insertion slot.
    fn probe(&self, key: &K) -> Probe {
        let capacity = self.slots.len();
        let start = self.primary_index(key);
        let mut first_tombstone = None;

        for step in 0..capacity {
            let idx = (start + step) % capacity;
            match &self.slots[idx] {
                Slot::Empty => return Probe::Vacant(first_tombstone.unwrap_or(idx)),
                Slot::Tombstone => {
                    first_tombstone.get_or_insert(idx);
                }
                Slot::Occupied { key: existing, .. } if existing == key => {
                    return Probe::Found(idx)
                }
                Slot::Occupied { .. } => {}
            }
        }

        first_tombstone.map_or(Probe::Full, Probe::Vacant)
    }

    /// Double the slot count and re-insert active entries only.
    fn grow(&mut self) {
        let new_capacity = self.slots.len() * 2;
        let old = std::mem::replace(&mut self.slots, empty_slots(new_capacity));
        log::debug!(
            "Growing hash table: {} -> {} slots ({} entries)",
            old.len(),
            new_capacity,
            self.len
        );

        for slot in old {
            if let Slot::Occupied { key, value } = slot {
                match self.probe(&key) {
                    Probe::Vacant(idx) => self.slots[idx] = Slot::Occupied { key, value },
                    _ => unreachable!("rehash into a larger tombstone-free table must find a free slot"),
                }
            }
        }
    }
}

impl<K: Hash + Eq, V> Default for OpenTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_slots<K, V>(capacity: usize) -> Vec<Slot<K, V>> {
    (0..capacity).map(|_| Slot::Empty).collect()
}
