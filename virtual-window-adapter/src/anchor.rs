use virtual_window::{Error, ItemKey, ScrollView};

/// An item identity plus how far the viewport was scrolled past its start.
///
/// Captured before a data change (prepend, re-sort, refresh) and re-applied afterwards, the
/// anchored item stays at the same visual position wherever it moved in the display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor {
    pub key: ItemKey,
    pub offset_in_viewport: u64,
}

/// Anchors the item under the top edge of the viewport.
///
/// Returns `None` for empty or destroyed views.
pub fn capture_first_visible_anchor<V: ScrollView + ?Sized>(view: &V) -> Option<ScrollAnchor> {
    capture_anchor_at(view, 0)
}

/// Anchors the item `offset_in_viewport` below the top edge of the viewport.
pub fn capture_anchor_at<V: ScrollView + ?Sized>(
    view: &V,
    offset_in_viewport: u64,
) -> Option<ScrollAnchor> {
    if view.is_destroyed() || view.is_empty() {
        return None;
    }
    let scroll_offset = view.viewport().scroll_offset;
    let extent = view.item_extent() as u64;
    if extent == 0 {
        return None;
    }
    let at = scroll_offset.saturating_add(offset_in_viewport);
    let index = usize::try_from(at / extent)
        .unwrap_or(usize::MAX)
        .min(view.len() - 1);
    let key = view.key_at(index)?;
    Some(ScrollAnchor {
        key,
        offset_in_viewport: scroll_offset.saturating_sub(view.item_start(index)),
    })
}

/// Scrolls so the anchored item is back where it was captured.
///
/// Returns `Ok(false)` if the key is no longer in the display.
pub fn apply_anchor<V: ScrollView + ?Sized>(
    view: &mut V,
    anchor: &ScrollAnchor,
) -> Result<bool, Error> {
    let Some(index) = view.index_of_key(&anchor.key) else {
        vlog!(debug, key = %anchor.key, "anchor key gone; scroll position kept");
        return Ok(false);
    };
    let target = view.item_start(index).saturating_add(anchor.offset_in_viewport);
    view.apply_scroll_offset(target)?;
    Ok(true)
}
