//! Fixed-capacity hash tables mapping byte-sequence keys to `i64` values.
//!
//! Two collision strategies are provided, each as its own table type:
//! [`chained::HashTable`] resolves collisions with a per-slot chain of
//! entries, [`probed::HashTable`] with linear probing over the slot array.
//! Both hash keys with one of the functions in [`hash::HashFn`], chosen at
//! construction, and neither ever resizes: capacity is a contract, not a
//! starting point.
//!
//! The tables are single-threaded; wrap one in a mutex if it must be shared.

pub mod chained;
pub mod hash;
pub mod probed;
