//! The two hash functions a table can be constructed with. Both are pure
//! and unseeded, so a given key always lands on the same slot index for a
//! given capacity.

/// Seed accumulator for the djb2 hash.
const DJB2_SEED: u64 = 5381;

/// The FNV-64 offset basis and prime. The offset basis is the FNV-0 hash of
/// the signature line `chongo <Landon Curt Noll> /\../\`, and the prime is
/// the smallest prime of the form `2^40 + 2^8 + b` suitable for 64-bit
/// folding. See <http://www.isthe.com/chongo/tech/comp/fnv/>.
const FNV_OFFSET_BASIS: u64 = 14695981039346656037;
const FNV_PRIME: u64 = 1099511628211;

/// Selects the hash function a table uses for the whole of its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashFn {
    /// Bernstein's multiplicative hash. Each byte updates the accumulator
    /// with `acc * 33 + byte`, which compilers reduce to
    /// `(acc << 5) + acc + byte`. The multiplier 33 has no deep theory
    /// behind it; it simply distributes short ASCII keys well in practice.
    Djb2,
    /// Fowler-Noll-Vo 1a. XOR the byte in first, then multiply by the FNV
    /// prime. The xor-first ordering gives better avalanche on the low
    /// bits than the original FNV-1.
    Fnv1a,
}

impl HashFn {
    /// Hashes `key` to a 64-bit value. Overflow is defined behavior here:
    /// both functions accumulate modulo 2^64 via wrapping arithmetic.
    pub fn hash(self, key: &[u8]) -> u64 {
        match self {
            HashFn::Djb2 => key
                .iter()
                .fold(DJB2_SEED, |acc, &c| acc.wrapping_mul(33).wrapping_add(c as u64)),
            HashFn::Fnv1a => key
                .iter()
                .fold(FNV_OFFSET_BASIS, |acc, &c| (acc ^ c as u64).wrapping_mul(FNV_PRIME)),
        }
    }

    /// Reduces the hash of `key` to a slot index in `0..capacity`.
    pub fn index(self, key: &[u8], capacity: usize) -> usize {
        (self.hash(key) % capacity as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::HashFn;

    #[test]
    fn djb2_empty_key_is_seed() {
        assert_eq!(HashFn::Djb2.hash(b""), 5381);
    }

    #[test]
    fn djb2_accumulates_per_byte() {
        // 5381 * 33 + 'a'
        assert_eq!(HashFn::Djb2.hash(b"a"), 5381 * 33 + 0x61);
        assert_eq!(HashFn::Djb2.hash(b"ab"), (5381 * 33 + 0x61) * 33 + 0x62);
    }

    #[test]
    fn fnv1a_matches_published_vectors() {
        assert_eq!(HashFn::Fnv1a.hash(b""), 0xcbf29ce484222325);
        assert_eq!(HashFn::Fnv1a.hash(b"a"), 0xaf63dc4c8601ec8c);
        assert_eq!(HashFn::Fnv1a.hash(b"foobar"), 0x85944171f73967e8);
    }

    #[test]
    fn index_is_deterministic() {
        for hash_fn in [HashFn::Djb2, HashFn::Fnv1a] {
            for capacity in [1, 40, 100] {
                let first = hash_fn.index(b"puppy", capacity);
                let second = hash_fn.index(b"puppy", capacity);
                assert_eq!(first, second);
                assert!(first < capacity);
            }
        }
    }
}
