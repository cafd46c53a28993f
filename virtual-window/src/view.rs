use crate::{Align, Error, ItemKey, ReconcileReport, ViewportState};

/// The scroll-facing surface of a windowed view, shared by lists and tables.
///
/// Event plumbing (frame coalescing, resize tracking, anchoring, smooth scrolling) is written
/// against this trait so it can drive either variant.
pub trait ScrollView {
    /// Geometry applied by the last reconciliation.
    fn viewport(&self) -> ViewportState;

    /// Reads the container geometry from the surface without applying it.
    fn measure(&self) -> ViewportState;

    fn item_extent(&self) -> u32;

    /// Number of items in the display collection.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_destroyed(&self) -> bool;

    fn key_at(&self, index: usize) -> Option<ItemKey>;

    fn index_of_key(&self, key: &ItemKey) -> Option<usize>;

    /// Takes effect on the next reconciliation.
    fn set_overscan(&mut self, overscan: usize);

    /// Re-reads container geometry and reconciles.
    fn sync_viewport(&mut self) -> Result<ReconcileReport, Error>;

    /// Scrolls the container to `offset` (clamped) and reconciles.
    fn apply_scroll_offset(&mut self, offset: u64) -> Result<ReconcileReport, Error>;

    fn offset_for_index(&self, index: usize, align: Align) -> u64;

    fn max_scroll_offset(&self) -> u64;

    /// Display index of the item under the top edge of the viewport.
    fn first_visible_index(&self) -> Option<usize> {
        let len = self.len();
        let extent = self.item_extent() as u64;
        if len == 0 || extent == 0 {
            return None;
        }
        let index = usize::try_from(self.viewport().scroll_offset / extent).unwrap_or(usize::MAX);
        Some(index.min(len - 1))
    }

    /// Start offset of the item at `index`.
    fn item_start(&self, index: usize) -> u64 {
        (index as u64).saturating_mul(self.item_extent() as u64)
    }
}
