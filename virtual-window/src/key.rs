use alloc::sync::Arc;
use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

#[cfg(feature = "std")]
pub(crate) type KeyMap<V> = HashMap<ItemKey, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyMap<V> = BTreeMap<ItemKey, V>;

#[cfg(feature = "std")]
pub(crate) type KeySet = HashSet<ItemKey>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySet = BTreeSet<ItemKey>;

/// Stable identity of an item across re-renders, sorts and data refreshes.
///
/// Produced by `key_fn` when one is configured; otherwise the engine falls back to
/// [`ItemKey::Index`] of the item's display position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKey {
    Index(usize),
    Id(u64),
    Name(Arc<str>),
}

impl From<u64> for ItemKey {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ItemKey {
    fn from(name: &str) -> Self {
        Self::Name(Arc::from(name))
    }
}

impl From<Arc<str>> for ItemKey {
    fn from(name: Arc<str>) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "#{i}"),
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}
