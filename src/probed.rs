//! Open-addressing hash table with linear probing. Collisions are resolved
//! by scanning forward through the slot array at stride 1, wrapping at the
//! end. Removal leaves a tombstone so later keys in the same probe sequence
//! stay reachable.

use crate::hash::HashFn;
use thiserror::Error;

/// Every slot is occupied by some other key, so the probe has nowhere left
/// to put a new entry. Capacity is fixed for the table's lifetime; the only
/// way to make room is `remove` or `clear`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("hash table is full (capacity {capacity})")]
pub struct TableFull {
    pub capacity: usize,
}

#[derive(Debug, Clone)]
struct Entry {
    key: Box<[u8]>,
    value: i64,
}

#[derive(Debug, Clone, Default)]
enum Slot {
    #[default]
    Empty,
    /// Previously occupied. Probes scan past it; inserts may reuse it.
    Tombstone,
    Occupied(Entry),
}

/// A fixed-capacity table mapping byte-sequence keys to `i64` values, one
/// entry per slot. The table owns a copy of every key it stores. At most
/// `capacity` distinct keys fit; a full table rejects new keys with
/// [`TableFull`] instead of probing forever.
#[derive(Debug, Clone)]
pub struct HashTable {
    hash_fn: HashFn,
    slots: Vec<Slot>,
}

impl HashTable {
    /// Creates a table with `capacity` slots, hashing keys with `hash_fn`.
    /// A capacity of zero is clamped up to one.
    pub fn with_capacity(capacity: usize, hash_fn: HashFn) -> HashTable {
        let mut slots = Vec::new();
        slots.resize_with(capacity.max(1), Slot::default);
        HashTable { hash_fn, slots }
    }

    /// Maps `key` to `value`. An occupied slot holding the same key is
    /// overwritten in place (the entry does not move) and the previous
    /// value returned. Otherwise the entry lands in the earliest tombstone
    /// on its probe path, or failing that the first empty slot. The probe
    /// visits each slot at most once; a table full of other keys yields
    /// `TableFull`.
    pub fn insert(&mut self, key: &[u8], value: i64) -> Result<Option<i64>, TableFull> {
        let capacity = self.slots.len();
        let start = self.hash_fn.index(key, capacity);
        let mut reusable: Option<usize> = None;
        for step in 0..capacity {
            let index = (start + step) % capacity;
            match &mut self.slots[index] {
                Slot::Occupied(entry) if &*entry.key == key => {
                    return Ok(Some(std::mem::replace(&mut entry.value, value)));
                }
                Slot::Occupied(_) => {}
                Slot::Tombstone => {
                    if reusable.is_none() {
                        reusable = Some(index);
                    }
                }
                Slot::Empty => {
                    let target = reusable.unwrap_or(index);
                    self.slots[target] = Slot::Occupied(Entry {
                        key: key.into(),
                        value,
                    });
                    return Ok(None);
                }
            }
        }
        match reusable {
            Some(index) => {
                self.slots[index] = Slot::Occupied(Entry {
                    key: key.into(),
                    value,
                });
                Ok(None)
            }
            None => Err(TableFull { capacity }),
        }
    }

    /// Looks up `key`. The probe stops at the first empty slot, which is
    /// sound because removal tombstones slots instead of emptying them.
    pub fn get(&self, key: &[u8]) -> Option<i64> {
        let capacity = self.slots.len();
        let start = self.hash_fn.index(key, capacity);
        for step in 0..capacity {
            match &self.slots[(start + step) % capacity] {
                Slot::Occupied(entry) if &*entry.key == key => return Some(entry.value),
                Slot::Occupied(_) | Slot::Tombstone => {}
                Slot::Empty => return None,
            }
        }
        None
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Replaces `key`'s slot with a tombstone and returns its value.
    pub fn remove(&mut self, key: &[u8]) -> Option<i64> {
        let capacity = self.slots.len();
        let start = self.hash_fn.index(key, capacity);
        for step in 0..capacity {
            let index = (start + step) % capacity;
            match &self.slots[index] {
                Slot::Occupied(entry) if &*entry.key == key => {
                    let value = entry.value;
                    self.slots[index] = Slot::Tombstone;
                    return Some(value);
                }
                Slot::Occupied(_) | Slot::Tombstone => {}
                Slot::Empty => return None,
            }
        }
        None
    }

    /// Resets every slot, tombstones included, to empty.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
    }

    /// Number of occupied slots, computed by scanning the array.
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        !self.slots.iter().any(|slot| matches!(slot, Slot::Occupied(_)))
    }

    /// The slot count fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::{HashTable, TableFull};
    use crate::hash::HashFn;
    use rand::{Rng, SeedableRng};

    #[test]
    fn fresh_table_has_no_keys() {
        for capacity in [1, 7, 40, 100] {
            let table = HashTable::with_capacity(capacity, HashFn::Fnv1a);
            assert_eq!(table.get(b"puppy"), None);
            assert_eq!(table.len(), 0);
            assert!(table.is_empty());
            assert_eq!(table.capacity(), capacity);
        }
    }

    #[test]
    fn spec_scenario_capacity_40() {
        let mut table = HashTable::with_capacity(40, HashFn::Fnv1a);
        table.insert(b"puppy", 5).unwrap();
        table.insert(b"kitty", 8).unwrap();
        table.insert(b"horsie", 12).unwrap();
        assert_eq!(table.insert(b"puppy", 7), Ok(Some(5)));

        assert_eq!(table.get(b"puppy"), Some(7));
        assert_eq!(table.get(b"kitty"), Some(8));
        assert_eq!(table.get(b"horsie"), Some(12));
        assert_eq!(table.get(b"wolfie"), None);
        assert!(table.contains_key(b"kitty"));
        assert_eq!(table.len(), 3);
        assert_eq!(table.capacity(), 40);

        table.clear();
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
        assert_eq!(table.get(b"puppy"), None);
    }

    #[test]
    fn full_table_rejects_new_keys_but_still_updates() {
        let mut table = HashTable::with_capacity(4, HashFn::Djb2);
        for (i, key) in [b"ant", b"bee", b"cat", b"dog"].iter().enumerate() {
            assert_eq!(table.insert(*key, i as i64), Ok(None));
        }
        assert_eq!(table.len(), 4);
        assert_eq!(table.insert(b"eel", 4), Err(TableFull { capacity: 4 }));
        assert_eq!(table.len(), 4);

        // Updating a resident key never needs an empty slot.
        assert_eq!(table.insert(b"cat", 99), Ok(Some(2)));
        assert_eq!(table.get(b"cat"), Some(99));
    }

    #[test]
    fn single_slot_table_holds_one_key() {
        let mut table = HashTable::with_capacity(1, HashFn::Djb2);
        assert_eq!(table.insert(b"puppy", 5), Ok(None));
        assert_eq!(table.insert(b"kitty", 8), Err(TableFull { capacity: 1 }));
        assert_eq!(table.insert(b"puppy", 7), Ok(Some(5)));
        assert_eq!(table.get(b"puppy"), Some(7));
    }

    #[test]
    fn probes_continue_past_tombstones() {
        // djb2 hashes "a", "c", and "e" to even values, so with capacity 2
        // all three start probing at slot 0.
        assert_eq!(HashFn::Djb2.index(b"a", 2), 0);
        assert_eq!(HashFn::Djb2.index(b"c", 2), 0);
        assert_eq!(HashFn::Djb2.index(b"e", 2), 0);

        let mut table = HashTable::with_capacity(2, HashFn::Djb2);
        table.insert(b"a", 1).unwrap();
        table.insert(b"c", 2).unwrap(); // wraps into slot 1

        assert_eq!(table.remove(b"a"), Some(1));
        // "c" sits past the tombstone and must still be found.
        assert_eq!(table.get(b"c"), Some(2));
        assert_eq!(table.get(b"a"), None);

        // A new colliding key reuses the tombstone.
        assert_eq!(table.insert(b"e", 3), Ok(None));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(b"e"), Some(3));
        assert_eq!(table.get(b"c"), Some(2));
    }

    #[test]
    fn remove_then_reinsert_round_trips() {
        let mut table = HashTable::with_capacity(8, HashFn::Fnv1a);
        table.insert(b"puppy", 5).unwrap();
        assert_eq!(table.remove(b"puppy"), Some(5));
        assert_eq!(table.remove(b"puppy"), None);
        assert!(table.is_empty());
        assert_eq!(table.insert(b"puppy", 7), Ok(None));
        assert_eq!(table.get(b"puppy"), Some(7));
    }

    #[test]
    fn clear_resets_tombstones() {
        let mut table = HashTable::with_capacity(2, HashFn::Djb2);
        table.insert(b"a", 1).unwrap();
        table.insert(b"c", 2).unwrap();
        table.remove(b"a");
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.insert(b"a", 9), Ok(None));
        assert_eq!(table.get(b"a"), Some(9));
    }

    #[test]
    fn matches_std_hashmap_under_random_ops() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0xf22);
        // 16 possible keys against 64 slots, so the table never fills.
        let mut table = HashTable::with_capacity(64, HashFn::Djb2);
        let mut model = std::collections::HashMap::new();

        for _ in 0..2000 {
            let key = [
                b'a' + rng.gen_range(0..4u8),
                b'a' + rng.gen_range(0..4u8),
            ];
            match rng.gen_range(0..3) {
                0 => {
                    let value = rng.gen_range(-100..100);
                    assert_eq!(table.insert(&key, value).unwrap(), model.insert(key, value));
                }
                1 => assert_eq!(table.get(&key), model.get(&key).copied()),
                _ => assert_eq!(table.remove(&key), model.remove(&key)),
            }
            assert_eq!(table.len(), model.len());
        }
    }
}
