//! Hash table with separate chaining for sda.
//!
//! The bucket count is fixed at construction. Each bucket is an
//! [`sda_list::LinkedList`] of key/value entries; new keys are pushed to the
//! front of their bucket.

use sda_list::LinkedList;
use std::borrow::Borrow;
use std::fmt;

/// Hashing used to pick a bucket.
///
/// Integers go through an xor-shift-multiply mixer, strings through djb2.
pub trait KeyHash {
    fn key_hash(&self) -> u32;
}

/// Integer mixer (`0x45d9f3b` multiply with 16-bit xor-shifts).
pub fn hash_u32(value: u32) -> u32 {
    let mut x = value;
    x = ((x >> 16) ^ x).wrapping_mul(0x45d9f3b);
    x = ((x >> 16) ^ x).wrapping_mul(0x45d9f3b);
    (x >> 16) ^ x
}

/// djb2 over the bytes of `s` (`hash * 33 + byte`, seed 5381).
pub fn hash_str(s: &str) -> u32 {
    s.bytes()
        .fold(5381u32, |hash, b| {
            (hash << 5).wrapping_add(hash).wrapping_add(u32::from(b))
        })
}

macro_rules! impl_key_hash_int {
    ($($t:ty),*) => {
        $(
            impl KeyHash for $t {
                fn key_hash(&self) -> u32 {
                    // Reinterpret the low 32 bits, as an unsigned view of the key.
                    hash_u32(*self as u32)
                }
            }
        )*
    };
}

impl_key_hash_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl KeyHash for str {
    fn key_hash(&self) -> u32 {
        hash_str(self)
    }
}

impl KeyHash for String {
    fn key_hash(&self) -> u32 {
        hash_str(self)
    }
}

impl KeyHash for char {
    fn key_hash(&self) -> u32 {
        hash_u32(u32::from(*self))
    }
}

impl<T: KeyHash + ?Sized> KeyHash for &T {
    fn key_hash(&self) -> u32 {
        (**self).key_hash()
    }
}

/// Hash table construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashTableError {
    ZeroBuckets,
}

impl fmt::Display for HashTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashTableError::ZeroBuckets => write!(f, "hash table needs at least one bucket"),
        }
    }
}

impl std::error::Error for HashTableError {}

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A hash table with a fixed number of chained buckets.
#[derive(Debug, Clone)]
pub struct HashTable<K, V> {
    buckets: Vec<LinkedList<Entry<K, V>>>,
    len: usize,
}

impl<K, V> HashTable<K, V>
where
    K: KeyHash + Eq,
{
    /// Creates a table with `hmax` buckets.
    pub fn with_buckets(hmax: usize) -> Result<Self, HashTableError> {
        if hmax == 0 {
            return Err(HashTableError::ZeroBuckets);
        }
        let buckets = (0..hmax).map(|_| LinkedList::new()).collect();
        Ok(Self { buckets, len: 0 })
    }

    /// Number of buckets.
    pub fn hmax(&self) -> usize {
        self.buckets.len()
    }

    /// Number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries per bucket.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.hmax() as f64
    }

    /// Inserts or overwrites the value for `key`, returning the previous one.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        if let Some(entry) = bucket.iter_mut().find(|e| e.key == key) {
            return Some(std::mem::replace(&mut entry.value, value));
        }
        bucket.push_front(Entry { key, value });
        self.len += 1;
        None
    }

    /// Returns the value stored for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: KeyHash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|e| e.key.borrow() == key)
            .map(|e| &e.value)
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: KeyHash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|e| e.key.borrow() == key)
            .map(|e| &mut e.value)
    }

    /// Returns true if a value was put for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: KeyHash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: KeyHash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let entry = self.buckets[index].remove_first(|e| e.key.borrow() == key)?;
        self.len -= 1;
        Some(entry.value)
    }

    /// Removes every entry, keeping the bucket count.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Iterates over all entries, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|e| (&e.key, &e.value)))
    }

    /// Iterates over all keys, bucket by bucket.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Number of entries in each bucket.
    pub fn bucket_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(LinkedList::len).collect()
    }

    fn bucket_index<Q: KeyHash + ?Sized>(&self, key: &Q) -> usize {
        key.key_hash() as usize % self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_buckets_rejected() {
        let result: Result<HashTable<String, i32>, _> = HashTable::with_buckets(0);
        assert_eq!(result.unwrap_err(), HashTableError::ZeroBuckets);
    }

    #[test]
    fn test_put_get_string_keys() {
        let mut ht = HashTable::with_buckets(10).unwrap();
        assert_eq!(ht.put("ana".to_string(), 20), None);
        assert_eq!(ht.put("ion".to_string(), 21), None);

        assert_eq!(ht.get("ana"), Some(&20));
        assert_eq!(ht.get("ion"), Some(&21));
        assert_eq!(ht.get("maria"), None);
        assert_eq!(ht.len(), 2);
    }

    #[test]
    fn test_put_overwrites_existing() {
        let mut ht = HashTable::with_buckets(3).unwrap();
        ht.put(7, "first");
        assert_eq!(ht.put(7, "second"), Some("first"));
        assert_eq!(ht.get(&7), Some(&"second"));
        assert_eq!(ht.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut ht = HashTable::with_buckets(2).unwrap();
        for i in 0..10 {
            ht.put(i, i * i);
        }
        assert_eq!(ht.remove(&3), Some(9));
        assert_eq!(ht.remove(&3), None);
        assert!(!ht.contains_key(&3));
        assert_eq!(ht.len(), 9);
    }

    #[test]
    fn test_single_bucket_chains_everything() {
        let mut ht = HashTable::with_buckets(1).unwrap();
        for word in ["a", "b", "c"] {
            ht.put(word.to_string(), word.len());
        }
        assert_eq!(ht.bucket_lengths(), vec![3]);
        // Newest entry sits at the bucket front.
        let keys: Vec<&String> = ht.keys().collect();
        assert_eq!(keys, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_get_mut() {
        let mut ht = HashTable::with_buckets(4).unwrap();
        ht.put("x".to_string(), vec![1]);
        if let Some(v) = ht.get_mut("x") {
            v.push(2);
        }
        assert_eq!(ht.get("x"), Some(&vec![1, 2]));
    }

    #[test]
    fn test_clear_keeps_buckets() {
        let mut ht = HashTable::with_buckets(5).unwrap();
        ht.put(1u32, ());
        ht.put(2u32, ());
        ht.clear();
        assert!(ht.is_empty());
        assert_eq!(ht.hmax(), 5);
        assert_eq!(ht.bucket_lengths().iter().sum::<usize>(), 0);
    }

    #[test]
    fn test_load_factor() {
        let mut ht = HashTable::with_buckets(4).unwrap();
        for i in 0..6 {
            ht.put(i, ());
        }
        assert!((ht.load_factor() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_djb2_known_values() {
        assert_eq!(hash_str(""), 5381);
        assert_eq!(hash_str("a"), 5381 * 33 + 97);
    }

    #[test]
    fn test_int_mixer_is_deterministic() {
        assert_eq!(hash_u32(0), 0);
        assert_eq!(hash_u32(42), hash_u32(42));
        assert_ne!(hash_u32(1), hash_u32(2));
        assert_eq!(5i32.key_hash(), hash_u32(5));
    }

    #[test]
    fn test_entries_live_in_their_bucket() {
        let mut ht = HashTable::with_buckets(7).unwrap();
        for i in 0..50u32 {
            ht.put(i, i);
        }
        for (i, bucket) in ht.buckets.iter().enumerate() {
            for entry in bucket.iter() {
                assert_eq!(entry.key.key_hash() as usize % 7, i);
            }
        }
        assert_eq!(ht.bucket_lengths().iter().sum::<usize>(), ht.len());
    }
}
