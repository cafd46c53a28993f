//! A headless windowing engine for long lists and tables.
//!
//! For event plumbing (frame coalescing, resize tracking, anchoring, smooth scrolling), see the
//! `virtual-window-adapter` crate.
//!
//! Only the items intersecting the viewport (plus an overscan margin) are materialized. Every
//! item has the same fixed extent, so the window is a pure function of scroll offset, viewport
//! extent, item extent and item count (see [`compute_range`]). A spacer sized to the whole
//! collection keeps the native scrollbar honest; items are placed absolutely inside it.
//!
//! The engine never touches a real UI toolkit. The host implements [`Surface`] (node creation,
//! placement, content, listeners, scroll metrics) and drives the engine:
//! - after scroll/resize: [`VirtualList::sync_viewport`]
//! - after data changes: [`VirtualList::update`], `set_filter`, `set_sort`
//! - for item events: [`VirtualList::handle_event`]
//!
//! [`MemorySurface`] is a complete in-memory implementation, useful for tests and for hosts
//! that diff a retained tree themselves.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod display;
mod engine;
mod error;
mod key;
mod memory;
mod options;
pub mod range;
mod registry;
mod selection;
mod state;
mod surface;
mod table;
mod types;
mod view;


pub use display::{Comparator, DisplayCollection, Filter, SortSpec};
pub use engine::{VirtualList, default_render};
pub use error::{Error, RenderError};
pub use key::ItemKey;
pub use memory::{MemoryNode, MemorySurface, NodeId};
pub use options::{EngineConfig, EngineOptions, KeyFn, RenderFn, SelectionChangeCallback};
pub use range::compute_range;
pub use selection::SelectionSet;
pub use state::ViewportState;
pub use surface::{Cell, Content, ListenerId, NodeRole, Surface};
pub use table::{CellFn, Column, TableOptions, VirtualTable};
pub use types::{
    Align, EventKind, NodeState, Placement, ReconcileReport, ReconcileStrategy, RenderMode,
    SortDirection, VisibleRange,
};
pub use view::ScrollView;
