use crate::ItemKey;
use crate::key::KeySet;

/// Selected item keys, independent of which items are currently materialized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    keys: KeySet,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &ItemKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemKey> + '_ {
        self.keys.iter()
    }

    /// Returns `true` if the key was not selected before.
    pub fn insert(&mut self, key: ItemKey) -> bool {
        self.keys.insert(key)
    }

    /// Returns `true` if the key was selected before.
    pub fn remove(&mut self, key: &ItemKey) -> bool {
        self.keys.remove(key)
    }

    /// Flips the key's membership and returns the new state.
    pub fn toggle(&mut self, key: ItemKey) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.keys.is_empty();
        self.keys.clear();
        changed
    }

    /// Drops every key for which `keep` is false. Returns the number of dropped keys.
    pub fn retain(&mut self, mut keep: impl FnMut(&ItemKey) -> bool) -> usize {
        let before = self.keys.len();
        self.keys.retain(|k| keep(k));
        before - self.keys.len()
    }
}

impl FromIterator<ItemKey> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = ItemKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}
