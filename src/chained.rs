//! Separate-chaining hash table. Colliding keys share a slot through an
//! owned, growable chain of entries.

use crate::hash::HashFn;

#[derive(Debug, Clone)]
struct Entry {
    key: Box<[u8]>,
    value: i64,
}

/// A fixed-capacity table mapping byte-sequence keys to `i64` values.
///
/// The table owns a copy of every key it stores, so callers are free to
/// reuse or drop their key buffers after a call returns. Capacity is set
/// once at construction and never changes; chains grow without bound, so
/// inserts always succeed.
#[derive(Debug, Clone)]
pub struct HashTable {
    hash_fn: HashFn,
    slots: Vec<Vec<Entry>>,
}

impl HashTable {
    /// Creates a table with `capacity` slots, hashing keys with `hash_fn`.
    /// A capacity of zero is clamped up to one.
    pub fn with_capacity(capacity: usize, hash_fn: HashFn) -> HashTable {
        HashTable {
            hash_fn,
            slots: vec![Vec::new(); capacity.max(1)],
        }
    }

    fn slot_index(&self, key: &[u8]) -> usize {
        self.hash_fn.index(key, self.slots.len())
    }

    /// Maps `key` to `value`. If the key is already present its value is
    /// overwritten in place and the previous value returned; otherwise a
    /// new entry is appended to the tail of its slot's chain.
    pub fn insert(&mut self, key: &[u8], value: i64) -> Option<i64> {
        let index = self.slot_index(key);
        let chain = &mut self.slots[index];
        for entry in chain.iter_mut() {
            if &*entry.key == key {
                return Some(std::mem::replace(&mut entry.value, value));
            }
        }
        chain.push(Entry {
            key: key.into(),
            value,
        });
        None
    }

    /// Looks up `key`, walking its slot's chain front to back. Absence is
    /// an ordinary `None`, never an error.
    pub fn get(&self, key: &[u8]) -> Option<i64> {
        self.slots[self.slot_index(key)]
            .iter()
            .find(|entry| &*entry.key == key)
            .map(|entry| entry.value)
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Unlinks `key` from its chain, preserving the order of the remaining
    /// entries, and returns the removed value.
    pub fn remove(&mut self, key: &[u8]) -> Option<i64> {
        let index = self.slot_index(key);
        let chain = &mut self.slots[index];
        let position = chain.iter().position(|entry| &*entry.key == key)?;
        Some(chain.remove(position).value)
    }

    /// Empties every chain. Capacity is unchanged; every key reports
    /// absent until reinserted.
    pub fn clear(&mut self) {
        for chain in &mut self.slots {
            chain.clear();
        }
    }

    /// Total number of entries, computed by summing chain lengths.
    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    /// The slot count fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }
}
