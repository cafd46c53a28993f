//! The table variant: fixed-width columns, a sticky header, sorting and text filtering.

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::display::{Comparator, SortSpec};
use crate::{
    Align, Cell, Content, EngineOptions, Error, EventKind, ItemKey, ListenerId, NodeRole,
    Placement, ReconcileReport, RenderFn, ScrollView, SelectionSet, SortDirection, Surface,
    ViewportState, VirtualList, VisibleRange,
};

/// Extracts the text of one cell.
pub type CellFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// A fixed-width table column.
pub struct Column<T> {
    pub id: String,
    pub title: String,
    pub width: u32,
    pub cell: CellFn<T>,
    /// Custom ordering; columns without one sort by cell text.
    pub compare: Option<Comparator<T>>,
    pub sortable: bool,
}

impl<T> Column<T> {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        width: u32,
        cell: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            width,
            cell: Arc::new(cell),
            compare: None,
            sortable: true,
        }
    }

    pub fn with_compare(
        mut self,
        compare: impl Fn(&T, &T) -> core::cmp::Ordering + Send + Sync + 'static,
    ) -> Self {
        self.compare = Some(Arc::new(compare));
        self
    }

    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    fn comparator(&self) -> Comparator<T>
    where
        T: 'static,
    {
        match &self.compare {
            Some(compare) => Arc::clone(compare),
            None => {
                let cell = Arc::clone(&self.cell);
                Arc::new(move |a: &T, b: &T| cell(a).cmp(&cell(b)))
            }
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            width: self.width,
            cell: Arc::clone(&self.cell),
            compare: self.compare.clone(),
            sortable: self.sortable,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}

/// Configuration for [`VirtualTable`]. Row height is `engine.config.item_extent`.
pub struct TableOptions<T> {
    pub engine: EngineOptions<T>,
    pub enable_sorting: bool,
    pub enable_filtering: bool,
}

impl<T> Default for TableOptions<T> {
    fn default() -> Self {
        Self {
            engine: EngineOptions::default(),
            enable_sorting: true,
            enable_filtering: true,
        }
    }
}

impl<T> TableOptions<T> {
    pub fn new(engine: EngineOptions<T>) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    pub fn with_sorting(mut self, enabled: bool) -> Self {
        self.enable_sorting = enabled;
        self
    }

    pub fn with_filtering(mut self, enabled: bool) -> Self {
        self.enable_filtering = enabled;
        self
    }
}

#[derive(Clone, Debug)]
struct HeaderCell<N> {
    node: N,
    listener: Option<ListenerId>,
}

/// A windowed table: a [`VirtualList`] of rows plus a header rendered once outside the
/// windowed region and kept aligned with horizontal scroll.
pub struct VirtualTable<T, S: Surface> {
    list: VirtualList<T, S>,
    columns: Arc<[Column<T>]>,
    header: S::Node,
    header_cells: Vec<HeaderCell<S::Node>>,
    header_offset: i64,
    sort: Option<(usize, SortDirection)>,
    filter_text: String,
    enable_sorting: bool,
    enable_filtering: bool,
}

impl<T: 'static, S: Surface> VirtualTable<T, S> {
    pub fn create(
        mut surface: S,
        container: S::Node,
        items: Vec<T>,
        columns: Vec<Column<T>>,
        options: TableOptions<T>,
    ) -> Result<Self, Error> {
        if columns.is_empty() {
            return Err(Error::NoColumns);
        }
        if let Some(column) = columns.iter().find(|c| c.width == 0) {
            return Err(Error::InvalidColumnWidth {
                column: column.id.clone(),
            });
        }
        options.engine.config.validate()?;
        if !surface.is_attached(&container) {
            return Err(Error::ContainerDetached);
        }

        let columns: Arc<[Column<T>]> = Arc::from(columns);
        let row_width = columns.iter().map(|c| c.width).sum::<u32>();
        let row_height = options.engine.config.item_extent;

        let header = surface.create_node(NodeRole::Header);
        surface.set_size(&header, Some(row_width), Some(row_height as u64));
        let mut header_cells = Vec::with_capacity(columns.len());
        let mut left = 0u32;
        for (i, column) in columns.iter().enumerate() {
            let node = surface.create_node(NodeRole::HeaderCell);
            surface.place(
                &node,
                Placement {
                    top: 0,
                    left: left as u64,
                    height: row_height,
                    width: Some(column.width),
                },
            );
            surface.set_content(&node, &Content::Text(header_label(&columns, i, None)));
            let listener = (options.enable_sorting && column.sortable)
                .then(|| surface.listen(&node, EventKind::Click));
            header_cells.push(HeaderCell { node, listener });
            left = left.saturating_add(column.width);
        }
        let cell_nodes: Vec<S::Node> = header_cells.iter().map(|c| c.node.clone()).collect();
        surface.append_children(&header, &cell_nodes);
        surface.append_children(&container, core::slice::from_ref(&header));

        let render: RenderFn<T> = {
            let columns = Arc::clone(&columns);
            Arc::new(move |item: &T, _index: usize| Ok(Content::Cells(row_cells(&columns, item))))
        };
        let list = VirtualList::create_with(
            surface,
            container,
            items,
            render,
            options.engine,
            Some(row_width),
        )?;

        vlog!(debug, columns = columns.len(), row_width, "VirtualTable::create");

        let mut table = Self {
            list,
            columns,
            header,
            header_cells,
            header_offset: 0,
            sort: None,
            filter_text: String::new(),
            enable_sorting: options.enable_sorting,
            enable_filtering: options.enable_filtering,
        };
        table.sync_header();
        Ok(table)
    }

    /// Sorts the full dataset by a column and reconciles the window against the result.
    pub fn sort_by(
        &mut self,
        column_id: &str,
        direction: SortDirection,
    ) -> Result<ReconcileReport, Error> {
        if self.list.is_destroyed() {
            return Err(Error::Destroyed);
        }
        if !self.enable_sorting {
            return Err(Error::FeatureDisabled("sorting"));
        }
        let index = self.column_index(column_id)?;
        let column = &self.columns[index];
        if !column.sortable {
            return Err(Error::FeatureDisabled("sorting"));
        }
        let spec = SortSpec {
            compare: column.comparator(),
            direction,
        };
        let report = self.list.set_sort(spec)?;
        self.sort = Some((index, direction));
        self.relabel_header();
        Ok(report)
    }

    /// Sorts ascending by a new column, or flips the direction of the current one.
    pub fn toggle_sort(&mut self, column_id: &str) -> Result<SortDirection, Error> {
        let index = self.column_index(column_id)?;
        let direction = match self.sort {
            Some((current, direction)) if current == index => direction.flipped(),
            _ => SortDirection::Ascending,
        };
        self.sort_by(column_id, direction)?;
        Ok(direction)
    }

    pub fn clear_sort(&mut self) -> Result<ReconcileReport, Error> {
        let report = self.list.clear_sort()?;
        self.sort = None;
        self.relabel_header();
        Ok(report)
    }

    /// The active sort as `(column id, direction)`.
    pub fn sort_state(&self) -> Option<(&str, SortDirection)> {
        self.sort
            .map(|(i, direction)| (self.columns[i].id.as_str(), direction))
    }

    /// Keeps rows where any cell contains `query`, ignoring case. An empty query clears the
    /// filter.
    pub fn set_filter_text(&mut self, query: &str) -> Result<ReconcileReport, Error> {
        if self.list.is_destroyed() {
            return Err(Error::Destroyed);
        }
        if !self.enable_filtering {
            return Err(Error::FeatureDisabled("filtering"));
        }
        let query = query.trim();
        self.filter_text = String::from(query);
        if query.is_empty() {
            return self.list.clear_filter();
        }
        let needle = query.to_lowercase();
        let columns = Arc::clone(&self.columns);
        self.list.set_filter(move |item: &T| {
            columns
                .iter()
                .any(|c| (c.cell)(item).to_lowercase().contains(needle.as_str()))
        })
    }

    pub fn set_filter(
        &mut self,
        filter: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Result<ReconcileReport, Error> {
        if !self.enable_filtering {
            return Err(Error::FeatureDisabled("filtering"));
        }
        self.filter_text.clear();
        self.list.set_filter(filter)
    }

    pub fn clear_filter(&mut self) -> Result<ReconcileReport, Error> {
        self.filter_text.clear();
        self.list.clear_filter()
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn update(&mut self, items: Vec<T>) -> Result<ReconcileReport, Error> {
        self.list.update(items)
    }

    pub fn refresh(&mut self) -> Result<ReconcileReport, Error> {
        let report = self.list.refresh()?;
        self.sync_header();
        Ok(report)
    }

    /// Re-reads container geometry, reconciles, and realigns the sticky header.
    pub fn sync_viewport(&mut self) -> Result<ReconcileReport, Error> {
        let report = self.list.sync_viewport()?;
        self.sync_header();
        Ok(report)
    }

    pub fn set_viewport(&mut self, viewport: ViewportState) -> Result<ReconcileReport, Error> {
        let report = self.list.set_viewport(viewport)?;
        self.sync_header();
        Ok(report)
    }

    pub fn scroll_to_index(&mut self, index: usize) -> Result<u64, Error> {
        self.list.scroll_to_index(index)
    }

    /// Header clicks toggle sorting; everything else goes to the rows.
    pub fn handle_event(&mut self, node: &S::Node, event: EventKind) -> Result<bool, Error> {
        if self.list.is_destroyed() {
            return Err(Error::Destroyed);
        }
        if event == EventKind::Click {
            let hit = self
                .header_cells
                .iter()
                .position(|c| c.node == *node && c.listener.is_some());
            if let Some(i) = hit {
                let id = self.columns[i].id.clone();
                self.toggle_sort(&id)?;
                return Ok(true);
            }
        }
        self.list.handle_event(node, event)
    }

    pub fn selection(&self) -> &SelectionSet {
        self.list.selection()
    }

    pub fn toggle(&mut self, key: ItemKey) -> Result<bool, Error> {
        self.list.toggle(key)
    }

    pub fn select_all(&mut self) -> Result<(), Error> {
        self.list.select_all()
    }

    pub fn clear_selection(&mut self) -> Result<(), Error> {
        self.list.clear_selection()
    }

    /// Removes the header, every row and every listener. Idempotent.
    pub fn destroy(&mut self) {
        if self.list.is_destroyed() {
            return;
        }
        let surface = self.list.surface_mut();
        for cell in &self.header_cells {
            if let Some(listener) = cell.listener {
                surface.unlisten(listener);
            }
        }
        surface.detach(&self.header);
        self.list.destroy();
    }

    pub fn is_destroyed(&self) -> bool {
        self.list.is_destroyed()
    }

    pub fn list(&self) -> &VirtualList<T, S> {
        &self.list
    }

    pub fn surface(&self) -> &S {
        self.list.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.list.surface_mut()
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn header(&self) -> &S::Node {
        &self.header
    }

    pub fn header_cell(&self, column_id: &str) -> Option<&S::Node> {
        let index = self.columns.iter().position(|c| c.id == column_id)?;
        self.header_cells.get(index).map(|c| &c.node)
    }

    pub fn row_width(&self) -> u32 {
        self.columns.iter().map(|c| c.width).sum()
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.list.visible_range()
    }

    fn column_index(&self, column_id: &str) -> Result<usize, Error> {
        self.columns
            .iter()
            .position(|c| c.id == column_id)
            .ok_or_else(|| Error::UnknownColumn(String::from(column_id)))
    }

    fn relabel_header(&mut self) {
        let sort = self.sort;
        let surface = self.list.surface_mut();
        for (i, cell) in self.header_cells.iter().enumerate() {
            let label = header_label(&self.columns, i, sort);
            surface.set_content(&cell.node, &Content::Text(label));
        }
    }

    fn sync_header(&mut self) {
        if self.list.is_destroyed() {
            return;
        }
        let cross = self.list.viewport().scroll_cross;
        let offset = -i64::try_from(cross).unwrap_or(i64::MAX);
        if offset != self.header_offset {
            self.list.surface_mut().set_translate_x(&self.header, offset);
            self.header_offset = offset;
        }
    }
}

fn header_label<T>(
    columns: &[Column<T>],
    index: usize,
    sort: Option<(usize, SortDirection)>,
) -> String {
    let title = &columns[index].title;
    match sort {
        Some((i, SortDirection::Ascending)) if i == index => format!("{title} ▲"),
        Some((i, SortDirection::Descending)) if i == index => format!("{title} ▼"),
        _ => title.clone(),
    }
}

fn row_cells<T>(columns: &[Column<T>], item: &T) -> Vec<Cell> {
    let mut left = 0u32;
    columns
        .iter()
        .map(|column| {
            let cell = Cell {
                text: (column.cell)(item),
                left,
                width: column.width,
            };
            left = left.saturating_add(column.width);
            cell
        })
        .collect()
}

impl<T, S: Surface> Drop for VirtualTable<T, S> {
    fn drop(&mut self) {
        if self.list.is_destroyed() {
            return;
        }
        let surface = self.list.surface_mut();
        for cell in &self.header_cells {
            if let Some(listener) = cell.listener {
                surface.unlisten(listener);
            }
        }
        surface.detach(&self.header);
    }
}

impl<T, S: Surface> fmt::Debug for VirtualTable<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualTable")
            .field("list", &self.list)
            .field("columns", &self.columns)
            .field("sort", &self.sort)
            .field("filter_text", &self.filter_text)
            .finish_non_exhaustive()
    }
}

impl<T: 'static, S: Surface> ScrollView for VirtualTable<T, S> {
    fn viewport(&self) -> ViewportState {
        self.list.viewport()
    }

    fn measure(&self) -> ViewportState {
        ScrollView::measure(&self.list)
    }

    fn item_extent(&self) -> u32 {
        self.list.config().item_extent
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn is_destroyed(&self) -> bool {
        self.list.is_destroyed()
    }

    fn key_at(&self, index: usize) -> Option<ItemKey> {
        self.list.key_at(index)
    }

    fn index_of_key(&self, key: &ItemKey) -> Option<usize> {
        self.list.index_of_key(key)
    }

    fn set_overscan(&mut self, overscan: usize) {
        self.list.set_overscan(overscan);
    }

    fn sync_viewport(&mut self) -> Result<ReconcileReport, Error> {
        VirtualTable::sync_viewport(self)
    }

    fn apply_scroll_offset(&mut self, offset: u64) -> Result<ReconcileReport, Error> {
        let report = self.list.apply_scroll_offset(offset)?;
        self.sync_header();
        Ok(report)
    }

    fn offset_for_index(&self, index: usize, align: Align) -> u64 {
        self.list.offset_for_index(index, align)
    }

    fn max_scroll_offset(&self) -> u64 {
        self.list.max_scroll_offset()
    }
}
