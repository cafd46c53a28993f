use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::display::{DisplayCollection, Filter, SortSpec};
use crate::key::KeySet;
use crate::range::{self, compute_range};
use crate::registry::{Mounted, MountedRegistry};
use crate::{
    Align, Content, EngineConfig, EngineOptions, Error, EventKind, ItemKey, NodeRole, NodeState,
    Placement, ReconcileReport, ReconcileStrategy, RenderError, RenderFn, ScrollView,
    SelectionSet, Surface, ViewportState, VisibleRange,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RenderedWindow {
    range: VisibleRange,
    generation: u64,
}

/// A windowed list bound to one scroll container.
///
/// The engine owns a spacer (child of the container, as tall as the whole display) and an
/// item layer inside it. Only the items of the current window are materialized; each is
/// placed absolutely at `index * item_extent`.
///
/// The host drives it:
/// - `sync_viewport` after scroll/resize (at most once per frame, see the adapter crate)
/// - `update` / `set_filter` / `set_sort` when data changes
/// - `handle_event` for click/pointer events on item nodes
///
/// `destroy` (or drop) removes every node and listener the engine created.
pub struct VirtualList<T, S: Surface> {
    surface: S,
    container: S::Node,
    spacer: S::Node,
    layer: S::Node,
    empty: Option<S::Node>,

    render: RenderFn<T>,
    options: EngineOptions<T>,
    display: DisplayCollection<T>,
    viewport: ViewportState,
    row_width: Option<u32>,

    rendered: Option<RenderedWindow>,
    spacer_extent: Option<u64>,
    force_rerender: bool,
    mounted: MountedRegistry<S::Node>,
    selection: SelectionSet,
    destroyed: bool,
}

impl<T, S: Surface> VirtualList<T, S> {
    /// Creates an engine bound to `container` and renders the first window.
    ///
    /// Fails without touching the surface if the configuration is invalid or the container is
    /// not attached.
    pub fn create(
        surface: S,
        container: S::Node,
        items: Vec<T>,
        render: impl Fn(&T, usize) -> Result<Content, RenderError> + Send + Sync + 'static,
        options: EngineOptions<T>,
    ) -> Result<Self, Error> {
        Self::create_with(surface, container, items, Arc::new(render), options, None)
    }

    pub(crate) fn create_with(
        mut surface: S,
        container: S::Node,
        items: Vec<T>,
        render: RenderFn<T>,
        options: EngineOptions<T>,
        row_width: Option<u32>,
    ) -> Result<Self, Error> {
        options.config.validate()?;
        if !surface.is_attached(&container) {
            return Err(Error::ContainerDetached);
        }

        let spacer = surface.create_node(NodeRole::Spacer);
        let layer = surface.create_node(NodeRole::ItemLayer);
        if row_width.is_some() {
            surface.set_size(&layer, row_width, None);
        }
        surface.append_children(&spacer, core::slice::from_ref(&layer));
        surface.append_children(&container, core::slice::from_ref(&spacer));
        let viewport = surface.metrics(&container);

        vlog!(
            debug,
            items = items.len(),
            item_extent = options.config.item_extent,
            overscan = options.config.overscan,
            "VirtualList::create"
        );

        let mut list = Self {
            surface,
            container,
            spacer,
            layer,
            empty: None,
            render,
            options,
            display: DisplayCollection::new(items),
            viewport,
            row_width,
            rendered: None,
            spacer_extent: None,
            force_rerender: false,
            mounted: MountedRegistry::default(),
            selection: SelectionSet::new(),
            destroyed: false,
        };
        list.reconcile()?;
        Ok(list)
    }

    /// Replaces the source items, prunes selected keys that no longer exist, and reconciles.
    pub fn update(&mut self, items: Vec<T>) -> Result<ReconcileReport, Error> {
        self.ensure_alive()?;
        self.display.replace(items);
        self.prune_selection();
        self.clamp_scroll();
        self.reconcile()
    }

    /// Re-reads container geometry and re-renders the content of every mounted item.
    pub fn refresh(&mut self) -> Result<ReconcileReport, Error> {
        self.ensure_alive()?;
        self.viewport = self.surface.metrics(&self.container);
        self.force_rerender = true;
        self.reconcile()
    }

    /// Re-reads container geometry (after scroll or resize) and reconciles.
    pub fn sync_viewport(&mut self) -> Result<ReconcileReport, Error> {
        self.ensure_alive()?;
        self.viewport = self.surface.metrics(&self.container);
        self.reconcile()
    }

    /// Applies geometry pushed by the host instead of reading it from the surface.
    pub fn set_viewport(&mut self, viewport: ViewportState) -> Result<ReconcileReport, Error> {
        self.ensure_alive()?;
        self.viewport = viewport;
        self.reconcile()
    }

    pub fn scroll_to_index(&mut self, index: usize) -> Result<u64, Error> {
        self.scroll_to_index_aligned(index, Align::Start)
    }

    pub fn scroll_to_index_aligned(&mut self, index: usize, align: Align) -> Result<u64, Error> {
        self.ensure_alive()?;
        let offset = self.offset_for_index(index, align);
        self.scroll_to_offset(offset)
    }

    /// Scrolls the container to `offset` (clamped) and reconciles. Returns the applied offset.
    pub fn scroll_to_offset(&mut self, offset: u64) -> Result<u64, Error> {
        self.apply_scroll_offset(offset)?;
        Ok(self.viewport.scroll_offset)
    }

    /// Like [`Self::scroll_to_offset`], returning the reconciliation report instead.
    pub fn apply_scroll_offset(&mut self, offset: u64) -> Result<ReconcileReport, Error> {
        self.ensure_alive()?;
        let offset = offset.min(self.max_scroll_offset());
        self.surface
            .set_scroll(&self.container, offset, self.viewport.scroll_cross);
        self.viewport.scroll_offset = offset;
        self.reconcile()
    }

    pub fn set_filter(
        &mut self,
        filter: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Result<ReconcileReport, Error> {
        self.set_filter_fn(Some(Arc::new(filter)))
    }

    pub fn clear_filter(&mut self) -> Result<ReconcileReport, Error> {
        self.set_filter_fn(None)
    }

    pub fn set_filter_fn(&mut self, filter: Option<Filter<T>>) -> Result<ReconcileReport, Error> {
        self.ensure_alive()?;
        self.display.set_filter(filter);
        self.clamp_scroll();
        self.reconcile()
    }

    pub fn set_sort(&mut self, sort: SortSpec<T>) -> Result<ReconcileReport, Error> {
        self.set_sort_spec(Some(sort))
    }

    pub fn clear_sort(&mut self) -> Result<ReconcileReport, Error> {
        self.set_sort_spec(None)
    }

    pub fn set_sort_spec(&mut self, sort: Option<SortSpec<T>>) -> Result<ReconcileReport, Error> {
        self.ensure_alive()?;
        self.display.set_sort(sort);
        self.reconcile()
    }

    /// Takes effect on the next reconciliation.
    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.config.overscan = overscan;
    }

    /// Routes a surface event on one of the engine's item nodes.
    ///
    /// Returns `Ok(true)` when the event was consumed.
    pub fn handle_event(&mut self, node: &S::Node, event: EventKind) -> Result<bool, Error> {
        self.ensure_alive()?;
        let Some(key) = self.mounted.key_of_node(node).cloned() else {
            return Ok(false);
        };
        let selection_on = self.options.config.enable_selection;
        let hover_on = self.options.config.enable_hover;
        match event {
            EventKind::Click if selection_on => {
                self.toggle(key)?;
                Ok(true)
            }
            EventKind::PointerEnter | EventKind::PointerLeave if hover_on => {
                let on = event == EventKind::PointerEnter;
                if let Some(m) = self.mounted.get_mut(&key) {
                    if m.hovered != on {
                        self.surface.set_state(&m.node, NodeState::Hovered, on);
                        m.hovered = on;
                    }
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn select(&mut self, key: ItemKey) -> Result<bool, Error> {
        self.ensure_alive()?;
        let changed = self.selection.insert(key.clone());
        if changed {
            self.selection_changed(Some(&key));
        }
        Ok(changed)
    }

    pub fn deselect(&mut self, key: &ItemKey) -> Result<bool, Error> {
        self.ensure_alive()?;
        let changed = self.selection.remove(key);
        if changed {
            self.selection_changed(Some(key));
        }
        Ok(changed)
    }

    /// Flips the key's selection and returns whether it is now selected.
    pub fn toggle(&mut self, key: ItemKey) -> Result<bool, Error> {
        self.ensure_alive()?;
        let selected = self.selection.toggle(key.clone());
        self.selection_changed(Some(&key));
        Ok(selected)
    }

    /// Toggles the item at a display index. Returns `None` for out-of-range indexes.
    pub fn toggle_index(&mut self, index: usize) -> Result<Option<bool>, Error> {
        self.ensure_alive()?;
        match self.key_at(index) {
            Some(key) => self.toggle(key).map(Some),
            None => Ok(None),
        }
    }

    /// Selects every item of the current display (filtered items stay as they were).
    pub fn select_all(&mut self) -> Result<(), Error> {
        self.ensure_alive()?;
        let mut changed = false;
        for index in 0..self.display.len() {
            if let Some(key) = self.key_at(index) {
                changed |= self.selection.insert(key);
            }
        }
        if changed {
            self.selection_changed(None);
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) -> Result<(), Error> {
        self.ensure_alive()?;
        if self.selection.clear() {
            self.selection_changed(None);
        }
        Ok(())
    }

    /// Runs one reconciliation pass.
    ///
    /// When neither the window nor the display generation changed since the last pass, this
    /// performs no surface mutation at all.
    pub fn reconcile(&mut self) -> Result<ReconcileReport, Error> {
        self.ensure_alive()?;
        let window = RenderedWindow {
            range: self.target_range()?,
            generation: self.display.generation(),
        };
        if !self.force_rerender && self.rendered == Some(window) {
            return Ok(ReconcileReport::skipped());
        }
        let data_changed =
            self.force_rerender || self.rendered.map(|w| w.generation) != Some(window.generation);
        self.force_rerender = false;

        let mut report = ReconcileReport::default();
        self.sync_spacer();
        if self.display.is_empty() {
            self.evict_all(&mut report);
            self.show_empty_state();
        } else {
            self.hide_empty_state();
            if self.options.config.strategy == ReconcileStrategy::Rebuild {
                self.evict_all(&mut report);
            }
            self.reconcile_window(window.range, data_changed, &mut report);
        }
        self.rendered = Some(window);

        vlog!(
            trace,
            start = window.range.start_index,
            end = window.range.end_index,
            created = report.created,
            reused = report.reused,
            removed = report.removed,
            failed = report.failed,
            "reconcile"
        );
        Ok(report)
    }

    /// Removes every node and listener the engine created. Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        let mut report = ReconcileReport::default();
        self.evict_all(&mut report);
        self.hide_empty_state();
        self.surface.detach(&self.spacer);
        self.rendered = None;
        self.destroyed = true;
        vlog!(debug, removed = report.removed, "VirtualList::destroy");
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for host-side work on the same tree. Mutating the engine's own nodes
    /// through it is not supported.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn container(&self) -> &S::Node {
        &self.container
    }

    pub fn spacer(&self) -> &S::Node {
        &self.spacer
    }

    pub fn item_layer(&self) -> &S::Node {
        &self.layer
    }

    pub fn empty_state(&self) -> Option<&S::Node> {
        self.empty.as_ref()
    }

    pub fn options(&self) -> &EngineOptions<T> {
        &self.options
    }

    pub fn config(&self) -> &EngineConfig {
        &self.options.config
    }

    pub fn display(&self) -> &DisplayCollection<T> {
        &self.display
    }

    pub fn len(&self) -> usize {
        self.display.len()
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&T> {
        self.display.get(index)
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// The window rendered by the last reconciliation.
    pub fn visible_range(&self) -> VisibleRange {
        self.rendered.map(|w| w.range).unwrap_or_default()
    }

    pub fn total_extent(&self) -> u64 {
        range::total_extent(self.display.len(), self.options.config.item_extent)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        range::max_scroll_offset(
            self.display.len(),
            self.options.config.item_extent,
            self.viewport.viewport_extent,
        )
    }

    pub fn offset_for_index(&self, index: usize, align: Align) -> u64 {
        range::offset_for_index(
            index,
            align,
            self.viewport.scroll_offset,
            self.viewport.viewport_extent,
            self.options.config.item_extent,
            self.display.len(),
        )
    }

    pub fn key_at(&self, index: usize) -> Option<ItemKey> {
        let item = self.display.get(index)?;
        Some(self.key_for(item, index))
    }

    /// Display index of `key`. Linear in the display length.
    pub fn index_of_key(&self, key: &ItemKey) -> Option<usize> {
        match (&self.options.key_fn, key) {
            (None, ItemKey::Index(i)) => (*i < self.display.len()).then_some(*i),
            (None, _) => None,
            (Some(key_fn), _) => self.display.iter().position(|item| key_fn(item) == *key),
        }
    }

    pub fn mounted_count(&self) -> usize {
        self.mounted.len()
    }

    pub fn node_for_key(&self, key: &ItemKey) -> Option<&S::Node> {
        self.mounted.get(key).map(|m| &m.node)
    }

    pub fn node_at(&self, index: usize) -> Option<&S::Node> {
        let key = self.mounted.key_at_index(index)?;
        self.node_for_key(key)
    }

    pub fn mounted_keys(&self) -> Vec<ItemKey> {
        let mut keys: Vec<(usize, ItemKey)> = self
            .mounted
            .iter()
            .map(|(k, m)| (m.index, k.clone()))
            .collect();
        keys.sort_by_key(|(i, _)| *i);
        keys.into_iter().map(|(_, k)| k).collect()
    }

    fn ensure_alive(&self) -> Result<(), Error> {
        if self.destroyed {
            return Err(Error::Destroyed);
        }
        Ok(())
    }

    /// Pulls the scroll offset back inside the display after it shrank.
    fn clamp_scroll(&mut self) {
        let max = self.max_scroll_offset();
        if self.viewport.scroll_offset > max {
            vlog!(debug, from = self.viewport.scroll_offset, to = max, "clamping scroll offset");
            self.surface
                .set_scroll(&self.container, max, self.viewport.scroll_cross);
            self.viewport.scroll_offset = max;
        }
    }

    fn key_for(&self, item: &T, index: usize) -> ItemKey {
        match &self.options.key_fn {
            Some(key_fn) => key_fn(item),
            None => ItemKey::Index(index),
        }
    }

    fn target_range(&self) -> Result<VisibleRange, Error> {
        let config = &self.options.config;
        let count = self.display.len();
        if !config.windows(count) {
            return Ok(VisibleRange::new(0, count));
        }
        compute_range(
            self.viewport.scroll_offset,
            self.viewport.viewport_extent,
            config.item_extent,
            count,
            config.overscan,
        )
    }

    fn placement(&self, index: usize) -> Placement {
        let extent = self.options.config.item_extent;
        Placement {
            top: (index as u64).saturating_mul(extent as u64),
            left: 0,
            height: extent,
            width: self.row_width,
        }
    }

    fn sync_spacer(&mut self) {
        let total = self.total_extent();
        if self.spacer_extent != Some(total) {
            self.surface.set_size(&self.spacer, self.row_width, Some(total));
            self.spacer_extent = Some(total);
        }
    }

    fn show_empty_state(&mut self) {
        if self.empty.is_some() {
            return;
        }
        let node = self.surface.create_node(NodeRole::EmptyState);
        let message = Content::Text(self.options.config.empty_message.clone());
        self.surface.set_content(&node, &message);
        self.surface
            .append_children(&self.container, core::slice::from_ref(&node));
        self.empty = Some(node);
    }

    fn hide_empty_state(&mut self) {
        if let Some(node) = self.empty.take() {
            self.surface.detach(&node);
        }
    }

    fn reconcile_window(
        &mut self,
        range: VisibleRange,
        data_changed: bool,
        report: &mut ReconcileReport,
    ) {
        let source = self.display.shared_source();
        let order = Arc::clone(self.display.order());
        let mut previous = core::mem::take(&mut self.mounted);
        let mut next = MountedRegistry::default();
        let mut fresh: Vec<S::Node> = Vec::with_capacity(range.len());

        for index in range.indices() {
            let Some(item) = order.get(index).map(|&i| &source[i]) else {
                break;
            };
            let mut key = self.key_for(item, index);
            if next.contains(&key) {
                vlog!(warn, index, key = %key, "duplicate item key in window; using index key");
                key = ItemKey::Index(index);
            }

            let mounted = match previous.remove(&key) {
                Some(m) => self.reuse(m, item, index, &key, data_changed, report),
                None => {
                    let m = self.materialize(item, index, &key, report);
                    fresh.push(m.node.clone());
                    m
                }
            };
            if let Some(displaced) = next.insert(key, mounted) {
                fresh.retain(|n| *n != displaced.node);
                self.evict(displaced, report);
            }
        }

        for (_, stale) in previous.drain() {
            self.evict(stale, report);
        }
        if !fresh.is_empty() {
            self.surface.append_children(&self.layer, &fresh);
        }
        self.mounted = next;
    }

    fn materialize(
        &mut self,
        item: &T,
        index: usize,
        key: &ItemKey,
        report: &mut ReconcileReport,
    ) -> Mounted<S::Node> {
        let node = self.surface.create_node(NodeRole::Item);
        let placement = self.placement(index);
        self.surface.place(&node, placement);
        let mut m = Mounted {
            node,
            index,
            listeners: Vec::new(),
            selected: false,
            hovered: false,
            errored: false,
        };

        let render = Arc::clone(&self.render);
        self.apply_content(&mut m, item, index, &render, report);

        if self.options.config.enable_selection {
            m.listeners.push(self.surface.listen(&m.node, EventKind::Click));
        }
        if self.options.config.enable_hover {
            m.listeners
                .push(self.surface.listen(&m.node, EventKind::PointerEnter));
            m.listeners
                .push(self.surface.listen(&m.node, EventKind::PointerLeave));
        }
        self.sync_selected(&mut m, key);
        report.created += 1;
        m
    }

    fn reuse(
        &mut self,
        mut m: Mounted<S::Node>,
        item: &T,
        index: usize,
        key: &ItemKey,
        data_changed: bool,
        report: &mut ReconcileReport,
    ) -> Mounted<S::Node> {
        report.reused += 1;
        // A key may come back at another index within one generation; its content is stale.
        let moved = m.index != index;
        if moved {
            let placement = self.placement(index);
            self.surface.place(&m.node, placement);
            m.index = index;
            report.repositioned += 1;
        }
        if data_changed || moved {
            let update = Arc::clone(self.options.update.as_ref().unwrap_or(&self.render));
            self.apply_content(&mut m, item, index, &update, report);
            report.rerendered += 1;
        }
        self.sync_selected(&mut m, key);
        m
    }

    fn apply_content(
        &mut self,
        m: &mut Mounted<S::Node>,
        item: &T,
        index: usize,
        render: &RenderFn<T>,
        report: &mut ReconcileReport,
    ) {
        match render(item, index) {
            Ok(content) => {
                self.surface.set_content(&m.node, &content);
                if m.errored {
                    self.surface.set_state(&m.node, NodeState::Errored, false);
                    m.errored = false;
                }
            }
            Err(err) => {
                vlog!(warn, index, error = %err, "item render failed; showing placeholder");
                report.failed += 1;
                let placeholder = Content::Placeholder {
                    index,
                    message: String::from(err.message()),
                };
                self.surface.set_content(&m.node, &placeholder);
                if !m.errored {
                    self.surface.set_state(&m.node, NodeState::Errored, true);
                    m.errored = true;
                }
            }
        }
    }

    fn sync_selected(&mut self, m: &mut Mounted<S::Node>, key: &ItemKey) {
        let want = self.selection.contains(key);
        if m.selected != want {
            self.surface.set_state(&m.node, NodeState::Selected, want);
            m.selected = want;
        }
    }

    fn evict(&mut self, m: Mounted<S::Node>, report: &mut ReconcileReport) {
        for listener in m.listeners {
            self.surface.unlisten(listener);
        }
        self.surface.detach(&m.node);
        report.removed += 1;
    }

    fn evict_all(&mut self, report: &mut ReconcileReport) {
        let mut mounted = core::mem::take(&mut self.mounted);
        for (_, m) in mounted.drain() {
            self.evict(m, report);
        }
    }

    /// Brings mounted nodes in line with the selection and fires `on_selection_change`.
    fn selection_changed(&mut self, key: Option<&ItemKey>) {
        match key {
            Some(key) => {
                if let Some(m) = self.mounted.get_mut(key) {
                    let want = self.selection.contains(key);
                    if m.selected != want {
                        self.surface.set_state(&m.node, NodeState::Selected, want);
                        m.selected = want;
                    }
                }
            }
            None => {
                for (key, m) in self.mounted.iter_mut() {
                    let want = self.selection.contains(key);
                    if m.selected != want {
                        self.surface.set_state(&m.node, NodeState::Selected, want);
                        m.selected = want;
                    }
                }
            }
        }
        if let Some(on_change) = &self.options.on_selection_change {
            on_change(&self.selection);
        }
    }

    fn prune_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let present: KeySet = match &self.options.key_fn {
            Some(key_fn) => self.display.source().iter().map(|item| key_fn(item)).collect(),
            None => (0..self.display.len()).map(ItemKey::Index).collect(),
        };
        let dropped = self.selection.retain(|k| present.contains(k));
        if dropped > 0 {
            vlog!(debug, dropped, "pruned selection after update");
            self.selection_changed(None);
        }
    }
}

impl<T: fmt::Display + 'static, S: Surface> VirtualList<T, S> {
    /// Like [`Self::create`], rendering each item with its `Display` implementation.
    pub fn create_with_default_renderer(
        surface: S,
        container: S::Node,
        items: Vec<T>,
        options: EngineOptions<T>,
    ) -> Result<Self, Error> {
        Self::create(surface, container, items, default_render::<T>, options)
    }
}

/// Stringifies an item.
pub fn default_render<T: fmt::Display>(item: &T, _index: usize) -> Result<Content, RenderError> {
    Ok(Content::Text(alloc::format!("{item}")))
}

impl<T, S: Surface> Drop for VirtualList<T, S> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<T, S: Surface> fmt::Debug for VirtualList<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualList")
            .field("container", &self.container)
            .field("display", &self.display)
            .field("viewport", &self.viewport)
            .field("visible_range", &self.visible_range())
            .field("mounted", &self.mounted.len())
            .field("selected", &self.selection.len())
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

impl<T, S: Surface> ScrollView for VirtualList<T, S> {
    fn viewport(&self) -> ViewportState {
        self.viewport
    }

    fn measure(&self) -> ViewportState {
        self.surface.metrics(&self.container)
    }

    fn item_extent(&self) -> u32 {
        self.options.config.item_extent
    }

    fn len(&self) -> usize {
        self.display.len()
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn key_at(&self, index: usize) -> Option<ItemKey> {
        VirtualList::key_at(self, index)
    }

    fn index_of_key(&self, key: &ItemKey) -> Option<usize> {
        VirtualList::index_of_key(self, key)
    }

    fn set_overscan(&mut self, overscan: usize) {
        VirtualList::set_overscan(self, overscan);
    }

    fn sync_viewport(&mut self) -> Result<ReconcileReport, Error> {
        VirtualList::sync_viewport(self)
    }

    fn apply_scroll_offset(&mut self, offset: u64) -> Result<ReconcileReport, Error> {
        VirtualList::apply_scroll_offset(self, offset)
    }

    fn offset_for_index(&self, index: usize, align: Align) -> u64 {
        VirtualList::offset_for_index(self, index, align)
    }

    fn max_scroll_offset(&self) -> u64 {
        VirtualList::max_scroll_offset(self)
    }
}
