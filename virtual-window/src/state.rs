/// A lightweight, serializable snapshot of a scroll container's geometry.
///
/// `scroll_offset`/`viewport_extent` describe the virtualized (vertical) axis;
/// `scroll_cross`/`viewport_cross` the horizontal axis that the table variant mirrors onto
/// its sticky header.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, so hosts can
/// restore a list's scroll position across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_offset: u64,
    pub viewport_extent: u32,
    pub scroll_cross: u64,
    pub viewport_cross: u32,
}

impl ViewportState {
    pub fn new(scroll_offset: u64, viewport_extent: u32) -> Self {
        Self {
            scroll_offset,
            viewport_extent,
            ..Self::default()
        }
    }

    pub fn with_cross(mut self, scroll_cross: u64, viewport_cross: u32) -> Self {
        self.scroll_cross = scroll_cross;
        self.viewport_cross = viewport_cross;
        self
    }
}
