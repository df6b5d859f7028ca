//! Keyword argument pool.

use rustc_hash::FxHashMap;

use crate::Value;

/// Insertion-ordered keyword arguments.
///
/// Keys are `Value`s so that a non-string key can reach the binder and be
/// reported. Inserting an existing key replaces its value in place. Taking
/// a key leaves a hole, so iteration order of the remaining keys is
/// unaffected by earlier takes.
#[derive(Clone, Debug, Default)]
pub struct KeywordArgs {
    entries: Vec<Option<(Value, Value)>>,
    /// Map from key to its index in `entries`.
    index: FxHashMap<Value, usize>,
}

impl KeywordArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        KeywordArgs {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert a keyword, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        if let Some(&i) = self.index.get(&key) {
            if let Some((_, slot)) = &mut self.entries[i] {
                return Some(std::mem::replace(slot, value));
            }
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(Some((key, value)));
        None
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        let &i = self.index.get(key)?;
        self.entries[i].as_ref().map(|(_, v)| v)
    }

    pub fn get_str(&self, name: &str) -> Option<&Value> {
        self.get(&Value::string(name))
    }

    pub fn contains_str(&self, name: &str) -> bool {
        self.get_str(name).is_some()
    }

    /// Remove a keyword, returning its value.
    pub fn take(&mut self, key: &Value) -> Option<Value> {
        let i = self.index.remove(key)?;
        self.entries[i].take().map(|(_, v)| v)
    }

    pub fn take_str(&mut self, name: &str) -> Option<Value> {
        self.take(&Value::string(name))
    }

    /// Number of keywords still present.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Remaining keywords in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> + '_ {
        self.entries.iter().flatten().map(|(k, v)| (k, v))
    }

    /// Remaining keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// First remaining key, if any.
    pub fn first_key(&self) -> Option<&Value> {
        self.keys().next()
    }
}

impl PartialEq for KeywordArgs {
    /// Equal when the remaining keywords match in order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for KeywordArgs {}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for KeywordArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = KeywordArgs::new();
        args.extend(iter);
        args
    }
}

impl<K: Into<Value>, V: Into<Value>> Extend<(K, V)> for KeywordArgs {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for KeywordArgs {
    type Item = (Value, Value);
    type IntoIter = std::iter::Flatten<std::vec::IntoIter<Option<(Value, Value)>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter().flatten()
    }
}
