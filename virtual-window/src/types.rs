use core::ops::Range;

/// Where an item should land in the viewport when scrolling to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    /// Keep the current offset if the item is fully visible, otherwise scroll the minimum
    /// distance that reveals it.
    Auto,
}

/// Ordering applied by the display collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// How the reconciler turns a new window into surface mutations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReconcileStrategy {
    /// Reuse the node of every key present in both windows. Keeps in-row UI state.
    #[default]
    Keyed,
    /// Clear and rebuild the window on every change. In-row UI state is lost.
    Rebuild,
}

/// Whether the engine windows its items at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    /// Window when the display holds more than `render_all_threshold` items.
    #[default]
    Auto,
    /// Always window.
    Virtual,
    /// Always materialize every item.
    All,
}

/// The index window to materialize.
///
/// `end_index` is exclusive; see [`VisibleRange::last_index`] for the inclusive bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index: end_index.max(start_index),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    pub fn last_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end_index - 1)
    }

    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.end_index
    }
}

/// Absolute placement of a materialized node inside the item layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    pub top: u64,
    pub left: u64,
    pub height: u32,
    /// `None` lets the node stretch across the layer.
    pub width: Option<u32>,
}

/// Surface-side events the engine subscribes to on item and header nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Click,
    PointerEnter,
    PointerLeave,
}

/// Visual states toggled on mounted nodes (CSS classes on a DOM surface).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeState {
    Selected,
    Hovered,
    Errored,
}

/// Summary of one reconciliation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReconcileReport {
    /// Range and display generation were unchanged; nothing was touched.
    pub skipped: bool,
    pub created: usize,
    pub reused: usize,
    pub repositioned: usize,
    pub rerendered: usize,
    pub removed: usize,
    /// Rows whose render function failed and now show a placeholder.
    pub failed: usize,
}

impl ReconcileReport {
    pub(crate) fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }
}
