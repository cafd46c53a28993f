//! The rendering target the engine mutates.
//!
//! A `Surface` is the engine's only view of the host's node tree: a DOM binding, a TUI
//! buffer tree, or [`crate::MemorySurface`] for tests and headless hosts. The engine never
//! reads back what it wrote; it only queries container geometry.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{EventKind, NodeState, Placement, ViewportState};

/// Structural role of a node created by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeRole {
    /// Full-height element that preserves the scrollable extent.
    Spacer,
    /// Relative-positioned layer holding the materialized items.
    ItemLayer,
    Item,
    EmptyState,
    /// Sticky table header row.
    Header,
    HeaderCell,
}

/// Handle of a listener registered through [`Surface::listen`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// One positioned cell of a table row or header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub left: u32,
    pub width: u32,
}

/// What a node displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    Text(String),
    /// A pre-rendered markup fragment, inserted as-is.
    Html(String),
    Cells(Vec<Cell>),
    /// Shown in place of an item whose render function failed.
    Placeholder { index: usize, message: String },
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn html(markup: impl Into<String>) -> Self {
        Self::Html(markup.into())
    }

    /// Flattened text, as a screen reader (or a test) would see it.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text(t) | Self::Html(t) => t.clone(),
            Self::Cells(cells) => {
                let mut out = String::new();
                for (i, cell) in cells.iter().enumerate() {
                    if i > 0 {
                        out.push('\t');
                    }
                    out.push_str(&cell.text);
                }
                out
            }
            Self::Placeholder { message, .. } => message.clone(),
        }
    }
}

/// Node tree operations the engine needs from its host.
///
/// Every method that takes `&mut self` is a mutation; implementations may count them to verify
/// that repeated reconciliations are free.
pub trait Surface {
    type Node: Clone + PartialEq + fmt::Debug;

    /// Whether `node` is alive and part of the tree.
    fn is_attached(&self, node: &Self::Node) -> bool;

    /// Creates a detached node.
    fn create_node(&mut self, role: NodeRole) -> Self::Node;

    /// Appends `children` to `parent` in order, as one batched insertion.
    fn append_children(&mut self, parent: &Self::Node, children: &[Self::Node]);

    /// Detaches `node` (and its subtree) from the tree.
    fn detach(&mut self, node: &Self::Node);

    fn set_size(&mut self, node: &Self::Node, width: Option<u32>, height: Option<u64>);

    fn place(&mut self, node: &Self::Node, placement: Placement);

    fn set_content(&mut self, node: &Self::Node, content: &Content);

    fn set_state(&mut self, node: &Self::Node, state: NodeState, on: bool);

    /// Horizontal translation, used to keep a sticky header aligned with the scrolled body.
    fn set_translate_x(&mut self, node: &Self::Node, offset: i64);

    fn listen(&mut self, node: &Self::Node, event: EventKind) -> ListenerId;

    fn unlisten(&mut self, listener: ListenerId);

    /// Current scroll position and pixel size of a scroll container.
    fn metrics(&self, container: &Self::Node) -> ViewportState;

    fn set_scroll(&mut self, container: &Self::Node, scroll_offset: u64, scroll_cross: u64);
}
