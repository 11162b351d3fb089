use super::DictError;
use derive_more::derive::IntoIterator;
use std::fmt::Display;

// Entries live in a plain Vec so iteration follows insertion order and keys
// only ever need `PartialEq`. Every keyed operation is a linear scan.
#[derive(Debug, Clone, PartialEq, IntoIterator)]
pub struct Dict<K, V>(#[into_iterator(owned, ref)] Vec<(K, V)>);

impl<K, V> Dict<K, V> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(K, V)> {
        self.0.iter()
    }
}

impl<K: PartialEq, V> Dict<K, V> {
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.0.iter().map(|(key, _)| key.clone()).collect()
    }

    pub fn vals(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.0.iter().map(|(_, value)| value.clone()).collect()
    }

    pub fn has_key(&self, key: &K) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.0
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn insert_or_assign(&mut self, key: K, value: V) -> &mut V {
        match self.0.iter().position(|(k, _)| k == &key) {
            Some(pos) => {
                self.0[pos].1 = value;

                &mut self.0[pos].1
            }
            None => {
                self.0.push((key, value));

                &mut self.0.last_mut().unwrap().1
            }
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let pos = self.0.iter().position(|(k, _)| k == key)?;

        Some(self.0.remove(pos).1)
    }
}

impl<K: PartialEq + Display, V> Dict<K, V> {
    pub fn lookup(&self, key: &K) -> Result<&V, DictError> {
        self.get(key).ok_or_else(|| Self::key_not_found(key))
    }

    pub fn lookup_mut(&mut self, key: &K) -> Result<&mut V, DictError> {
        self.get_mut(key).ok_or_else(|| Self::key_not_found(key))
    }

    pub fn pop(&mut self, key: &K) -> Result<V, DictError> {
        self.remove(key).ok_or_else(|| Self::key_not_found(key))
    }

    fn key_not_found(key: &K) -> DictError {
        DictError::KeyNotFound {
            key: key.to_string(),
            key_type: std::any::type_name::<K>(),
            val_type: std::any::type_name::<V>(),
        }
    }
}

impl<K, V> Default for Dict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for Dict<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);

        dict
    }
}

// Collecting routes through `insert_or_assign`, so a duplicate key keeps its
// first position and takes its last value.
impl<K: PartialEq, V> Extend<(K, V)> for Dict<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert_or_assign(key, value);
        }
    }
}
