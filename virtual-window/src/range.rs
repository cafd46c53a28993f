//! Fixed-extent window math shared by lists and tables.

use crate::{Align, Error, VisibleRange};

/// Computes the index window to materialize for a fixed item extent.
///
/// - `start = max(0, floor(scroll_offset / item_extent) - overscan)`
/// - `end = min(item_count, ceil((scroll_offset + viewport_extent) / item_extent) + overscan)`
///
/// `end` is exclusive. An empty collection yields an empty range; a zero `item_extent` is a
/// configuration error.
pub fn compute_range(
    scroll_offset: u64,
    viewport_extent: u32,
    item_extent: u32,
    item_count: usize,
    overscan: usize,
) -> Result<VisibleRange, Error> {
    if item_extent == 0 {
        return Err(Error::InvalidItemExtent(item_extent));
    }
    if item_count == 0 {
        return Ok(VisibleRange::EMPTY);
    }

    let extent = item_extent as u64;
    let first = usize::try_from(scroll_offset / extent).unwrap_or(usize::MAX);
    let past_last = usize::try_from(
        scroll_offset
            .saturating_add(viewport_extent as u64)
            .div_ceil(extent),
    )
    .unwrap_or(usize::MAX);

    let end = past_last.saturating_add(overscan).min(item_count);
    let start = first.saturating_sub(overscan).min(end);
    Ok(VisibleRange::new(start, end))
}

/// Height of the spacer that stands in for `item_count` items.
pub fn total_extent(item_count: usize, item_extent: u32) -> u64 {
    (item_count as u64).saturating_mul(item_extent as u64)
}

pub fn max_scroll_offset(item_count: usize, item_extent: u32, viewport_extent: u32) -> u64 {
    total_extent(item_count, item_extent).saturating_sub(viewport_extent as u64)
}

/// Scroll offset that brings `index` into view with the given alignment.
///
/// `current` is only consulted for [`Align::Auto`]. The result is clamped to the scrollable
/// span; out-of-range indexes are clamped to the last item.
pub fn offset_for_index(
    index: usize,
    align: Align,
    current: u64,
    viewport_extent: u32,
    item_extent: u32,
    item_count: usize,
) -> u64 {
    if item_count == 0 {
        return 0;
    }
    let index = index.min(item_count - 1);
    let extent = item_extent as u64;
    let view = viewport_extent as u64;
    let start = (index as u64).saturating_mul(extent);
    let end = start.saturating_add(extent);

    let target = match align {
        Align::Start => start,
        Align::End => end.saturating_sub(view),
        Align::Center => (start + extent / 2).saturating_sub(view / 2),
        Align::Auto => {
            if start >= current && end <= current.saturating_add(view) {
                current
            } else if start < current {
                start
            } else {
                end.saturating_sub(view)
            }
        }
    };

    target.min(max_scroll_offset(item_count, item_extent, viewport_extent))
}
