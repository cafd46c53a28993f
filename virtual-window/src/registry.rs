use alloc::vec::Vec;

use crate::key::KeyMap;
use crate::{ItemKey, ListenerId};

/// Bookkeeping for one materialized item.
#[derive(Clone, Debug)]
pub(crate) struct Mounted<N> {
    pub node: N,
    pub index: usize,
    pub listeners: Vec<ListenerId>,
    pub selected: bool,
    pub hovered: bool,
    pub errored: bool,
}

/// Key → mounted node, owned by one engine instance.
///
/// Every key maps to exactly one attached node.
#[derive(Clone, Debug)]
pub(crate) struct MountedRegistry<N> {
    entries: KeyMap<Mounted<N>>,
}

impl<N> Default for MountedRegistry<N> {
    fn default() -> Self {
        Self {
            entries: KeyMap::default(),
        }
    }
}

impl<N: PartialEq> MountedRegistry<N> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &ItemKey) -> Option<&Mounted<N>> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &ItemKey) -> Option<&mut Mounted<N>> {
        self.entries.get_mut(key)
    }

    pub fn contains(&self, key: &ItemKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the entry previously stored under `key`, which the caller must evict.
    pub fn insert(&mut self, key: ItemKey, mounted: Mounted<N>) -> Option<Mounted<N>> {
        self.entries.insert(key, mounted)
    }

    pub fn remove(&mut self, key: &ItemKey) -> Option<Mounted<N>> {
        self.entries.remove(key)
    }

    /// Linear scan; the registry only ever holds one window of items.
    pub fn key_of_node(&self, node: &N) -> Option<&ItemKey> {
        self.entries
            .iter()
            .find(|(_, m)| m.node == *node)
            .map(|(k, _)| k)
    }

    pub fn key_at_index(&self, index: usize) -> Option<&ItemKey> {
        self.entries
            .iter()
            .find(|(_, m)| m.index == index)
            .map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemKey, &Mounted<N>)> + '_ {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&ItemKey, &mut Mounted<N>)> + '_ {
        self.entries.iter_mut()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = (ItemKey, Mounted<N>)> + '_ {
        core::mem::take(&mut self.entries).into_iter()
    }
}
