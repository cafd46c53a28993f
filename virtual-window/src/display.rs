//! The derived display collection: `sort(filter(source))`.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::SortDirection;

pub type Filter<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// An active sort: comparator plus direction.
pub struct SortSpec<T> {
    pub compare: Comparator<T>,
    pub direction: SortDirection,
}

impl<T> SortSpec<T> {
    pub fn new(
        compare: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
        direction: SortDirection,
    ) -> Self {
        Self {
            compare: Arc::new(compare),
            direction,
        }
    }
}

impl<T> Clone for SortSpec<T> {
    fn clone(&self) -> Self {
        Self {
            compare: Arc::clone(&self.compare),
            direction: self.direction,
        }
    }
}

/// Source items plus the filter/sort that derive the display order.
///
/// The display is a fresh `Arc<[usize]>` of source positions, produced on every change and
/// never mutated in place. Each recomputation bumps [`Self::generation`].
pub struct DisplayCollection<T> {
    source: Arc<[T]>,
    filter: Option<Filter<T>>,
    sort: Option<SortSpec<T>>,
    order: Arc<[usize]>,
    generation: u64,
}

impl<T> DisplayCollection<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut display = Self {
            source: Arc::from(items),
            filter: None,
            sort: None,
            order: Arc::from(Vec::new()),
            generation: 0,
        };
        display.recompute();
        display
    }

    pub fn replace(&mut self, items: Vec<T>) {
        self.source = Arc::from(items);
        self.recompute();
    }

    pub fn set_filter(&mut self, filter: Option<Filter<T>>) {
        self.filter = filter;
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec<T>>) {
        self.sort = sort;
        self.recompute();
    }

    pub fn sort(&self) -> Option<&SortSpec<T>> {
        self.sort.as_ref()
    }

    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    /// A shared handle to the source slice, independent of later replacements.
    pub fn shared_source(&self) -> Arc<[T]> {
        Arc::clone(&self.source)
    }

    /// Display position → source position.
    pub fn order(&self) -> &Arc<[usize]> {
        &self.order
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        let source_index = *self.order.get(index)?;
        self.source.get(source_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().map(|&i| &self.source[i])
    }

    fn recompute(&mut self) {
        let source = &self.source;
        let mut order: Vec<usize> = match &self.filter {
            Some(keep) => (0..source.len()).filter(|&i| keep(&source[i])).collect(),
            None => (0..source.len()).collect(),
        };

        if let Some(sort) = &self.sort {
            let compare = &sort.compare;
            match sort.direction {
                SortDirection::Ascending => {
                    order.sort_by(|&a, &b| compare(&source[a], &source[b]));
                }
                SortDirection::Descending => {
                    order.sort_by(|&a, &b| compare(&source[a], &source[b]).reverse());
                }
            }
        }

        self.order = Arc::from(order);
        self.generation = self.generation.wrapping_add(1);
        vlog!(
            trace,
            source = self.source.len(),
            display = self.order.len(),
            generation = self.generation,
            "display recomputed"
        );
    }
}

impl<T> core::fmt::Debug for DisplayCollection<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DisplayCollection")
            .field("source_len", &self.source.len())
            .field("display_len", &self.order.len())
            .field("filtered", &self.filter.is_some())
            .field("sort", &self.sort.as_ref().map(|s| s.direction))
            .field("generation", &self.generation)
            .finish()
    }
}
