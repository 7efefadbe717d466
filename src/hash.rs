//! Key hashing and the chained index built on it.
//!
//! Keys are hashed with a polynomial rolling hash over their bytes, reduced modulo
//! [`HASH_MODULUS`]. The same hash places keys into the buckets of a [`KeyIndex`], which maps a key
//! to its position in an ordered container without owning the keys itself.

/// Modulus applied to every key hash.
pub const HASH_MODULUS: u32 = 8_675_309;

const HASH_MULTIPLIER: u64 = 179;

const INITIAL_BUCKETS: usize = 8;

#[must_use]
/// Hash a key for index placement.
///
/// Starts at 1 and folds in each byte as `byte + 179 * acc`. The accumulator is reduced modulo
/// [`HASH_MODULUS`] at every step, which yields the exact polynomial value modulo the same number
/// for keys of any length.
///
/// ```
/// assert_eq!(inifile::hash::hash("a"), 276);
/// assert_eq!(inifile::hash::hash("ab"), 49502);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn hash(key: &str) -> u32 {
    let modulus = u64::from(HASH_MODULUS);

    key.bytes().fold(1u32, |acc, b| {
        ((u64::from(b) + HASH_MULTIPLIER * u64::from(acc)) % modulus) as u32
    })
}

#[derive(Clone, Debug, Default)]
/// Chained hash index from key to position in an external ordered container.
///
/// Each bucket holds the positions of the entries whose key hash lands there. Lookups resolve
/// collisions by asking the caller for the key stored at each candidate position.
pub struct KeyIndex {
    buckets: Vec<Vec<usize>>,
    len: usize,
}

impl KeyIndex {
    #[must_use]
    /// Number of positions recorded.
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    /// Whether no positions are recorded.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    /// Position of `key`, given a way to read the key at any recorded position.
    pub fn find<'a, F>(&self, key: &str, key_at: F) -> Option<usize>
    where
        F: Fn(usize) -> &'a str,
    {
        if self.buckets.is_empty() {
            return None;
        }

        self.buckets[self.bucket_of(hash(key))]
            .iter()
            .copied()
            .find(|&pos| key_at(pos) == key)
    }

    /// Record that `key` lives at `pos`.
    ///
    /// The caller guarantees `key` is not already present; positions are never removed.
    pub fn insert<'a, F>(&mut self, key: &str, pos: usize, key_at: F)
    where
        F: Fn(usize) -> &'a str,
    {
        if self.len >= self.buckets.len() {
            self.grow(&key_at);
        }

        let bucket = self.bucket_of(hash(key));
        self.buckets[bucket].push(pos);
        self.len += 1;
    }

    fn bucket_of(&self, hashed: u32) -> usize {
        hashed as usize % self.buckets.len()
    }

    fn grow<'a, F>(&mut self, key_at: &F)
    where
        F: Fn(usize) -> &'a str,
    {
        let size = (self.buckets.len() * 2).max(INITIAL_BUCKETS);
        let old = std::mem::replace(&mut self.buckets, vec![Vec::new(); size]);

        for pos in old.into_iter().flatten() {
            let bucket = self.bucket_of(hash(key_at(pos)));
            self.buckets[bucket].push(pos);
        }
    }
}

#[cfg(test)]
#[path = "tests/hash.rs"]
mod tests;
