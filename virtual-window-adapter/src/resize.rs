/// Filters resize notifications down to actual dimension changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeTracker {
    last: Option<(u32, u32)>,
}

impl ResizeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from known dimensions, so an identical first report is not a change.
    pub fn with_dimensions(extent: u32, cross: u32) -> Self {
        Self {
            last: Some((extent, cross)),
        }
    }

    /// Records `(extent, cross)`. Returns `true` if they differ from the previous report.
    pub fn observe(&mut self, extent: u32, cross: u32) -> bool {
        let next = Some((extent, cross));
        if self.last == next {
            return false;
        }
        self.last = next;
        true
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.last
    }
}
