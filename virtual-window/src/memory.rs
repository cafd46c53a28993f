use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::{Content, EventKind, ListenerId, NodeRole, NodeState, Placement, Surface, ViewportState};

/// Handle of a node in a [`MemorySurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A node of the in-memory tree.
#[derive(Clone, Debug, Default)]
pub struct MemoryNode {
    /// `None` for host-created containers.
    pub role: Option<NodeRole>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub placement: Option<Placement>,
    pub width: Option<u32>,
    pub height: Option<u64>,
    pub content: Option<Content>,
    pub states: Vec<NodeState>,
    pub translate_x: i64,
    /// Geometry of host-created scroll containers.
    pub viewport: ViewportState,
    root: bool,
}

impl MemoryNode {
    pub fn has_state(&self, state: NodeState) -> bool {
        self.states.contains(&state)
    }

    pub fn text(&self) -> Option<alloc::string::String> {
        self.content.as_ref().map(Content::plain_text)
    }
}

/// A headless [`Surface`] backed by an arena.
///
/// Every engine-initiated mutation bumps [`MemorySurface::mutation_count`]; host-side
/// helpers (`user_scroll`, `resize`) do not.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    nodes: Vec<Option<MemoryNode>>,
    listeners: BTreeMap<u64, (NodeId, EventKind)>,
    next_listener: u64,
    mutations: u64,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an attached scroll container with the given viewport size.
    pub fn create_container(&mut self, viewport_extent: u32, viewport_cross: u32) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(MemoryNode {
            viewport: ViewportState::new(0, viewport_extent).with_cross(0, viewport_cross),
            root: true,
            ..MemoryNode::default()
        }));
        id
    }

    /// Simulates the user scrolling a container.
    pub fn user_scroll(&mut self, container: NodeId, scroll_offset: u64, scroll_cross: u64) {
        if let Some(node) = self.node_mut(container) {
            node.viewport.scroll_offset = scroll_offset;
            node.viewport.scroll_cross = scroll_cross;
        }
    }

    /// Simulates the host resizing a container.
    pub fn resize(&mut self, container: NodeId, viewport_extent: u32, viewport_cross: u32) {
        if let Some(node) = self.node_mut(container) {
            node.viewport.viewport_extent = viewport_extent;
            node.viewport.viewport_cross = viewport_cross;
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&MemoryNode> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Attached children of `id` with the given role.
    pub fn children_with_role(&self, id: NodeId, role: NodeRole) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|&c| self.node(c).and_then(|n| n.role) == Some(role))
            .collect()
    }

    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn listeners_on(&self, id: NodeId) -> Vec<EventKind> {
        let mut out: Vec<EventKind> = self
            .listeners
            .values()
            .filter(|(node, _)| *node == id)
            .map(|(_, event)| *event)
            .collect();
        out.sort();
        out
    }

    /// Number of live (not detached) nodes, containers included.
    pub fn live_node_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut MemoryNode> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    fn mutate(&mut self, id: NodeId, f: impl FnOnce(&mut MemoryNode)) {
        self.mutations += 1;
        if let Some(node) = self.node_mut(id) {
            f(node);
        }
    }

    fn drop_subtree(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id.0).and_then(Option::take) else {
            return;
        };
        for child in node.children {
            self.drop_subtree(child);
        }
    }
}

impl Surface for MemorySurface {
    type Node = NodeId;

    fn is_attached(&self, node: &NodeId) -> bool {
        let mut cur = *node;
        loop {
            let Some(n) = self.node(cur) else {
                return false;
            };
            if n.root {
                return true;
            }
            match n.parent {
                Some(parent) => cur = parent,
                None => return false,
            }
        }
    }

    fn create_node(&mut self, role: NodeRole) -> NodeId {
        self.mutations += 1;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(MemoryNode {
            role: Some(role),
            ..MemoryNode::default()
        }));
        id
    }

    fn append_children(&mut self, parent: &NodeId, children: &[NodeId]) {
        self.mutations += 1;
        if self.node(*parent).is_none() {
            return;
        }
        for &child in children {
            let prev_parent = match self.node_mut(child) {
                Some(c) => c.parent.replace(*parent),
                None => continue,
            };
            if let Some(prev) = prev_parent.and_then(|p| self.node_mut(p)) {
                prev.children.retain(|&c| c != child);
            }
            if let Some(p) = self.node_mut(*parent) {
                p.children.push(child);
            }
        }
    }

    fn detach(&mut self, node: &NodeId) {
        self.mutations += 1;
        let parent = self.node(*node).and_then(|n| n.parent);
        if let Some(p) = parent.and_then(|p| self.node_mut(p)) {
            p.children.retain(|c| c != node);
        }
        self.drop_subtree(*node);
    }

    fn set_size(&mut self, node: &NodeId, width: Option<u32>, height: Option<u64>) {
        self.mutate(*node, |n| {
            if width.is_some() {
                n.width = width;
            }
            if height.is_some() {
                n.height = height;
            }
        });
    }

    fn place(&mut self, node: &NodeId, placement: Placement) {
        self.mutate(*node, |n| n.placement = Some(placement));
    }

    fn set_content(&mut self, node: &NodeId, content: &Content) {
        self.mutate(*node, |n| n.content = Some(content.clone()));
    }

    fn set_state(&mut self, node: &NodeId, state: NodeState, on: bool) {
        self.mutate(*node, |n| {
            let present = n.states.contains(&state);
            if on && !present {
                n.states.push(state);
            } else if !on && present {
                n.states.retain(|&s| s != state);
            }
        });
    }

    fn set_translate_x(&mut self, node: &NodeId, offset: i64) {
        self.mutate(*node, |n| n.translate_x = offset);
    }

    fn listen(&mut self, node: &NodeId, event: EventKind) -> ListenerId {
        self.mutations += 1;
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.insert(id.0, (*node, event));
        id
    }

    fn unlisten(&mut self, listener: ListenerId) {
        self.mutations += 1;
        self.listeners.remove(&listener.0);
    }

    fn metrics(&self, container: &NodeId) -> ViewportState {
        self.node(*container)
            .map(|n| n.viewport)
            .unwrap_or_default()
    }

    fn set_scroll(&mut self, container: &NodeId, scroll_offset: u64, scroll_cross: u64) {
        self.mutate(*container, |n| {
            n.viewport.scroll_offset = scroll_offset;
            n.viewport.scroll_cross = scroll_cross;
        });
    }
}
