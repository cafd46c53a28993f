// Example: a 10k-row attendance list on the in-memory surface, with selection and scrolling.
use virtual_window::{
    Content, EngineOptions, EventKind, ItemKey, MemorySurface, RenderError, VirtualList,
};

struct Attendee {
    id: u64,
    name: String,
    meals: u32,
}

fn render(a: &Attendee, _index: usize) -> Result<Content, RenderError> {
    Ok(Content::text(format!("{} ({} meals)", a.name, a.meals)))
}

fn main() {
    let attendees: Vec<Attendee> = (0..10_000u64)
        .map(|id| Attendee {
            id,
            name: format!("Attendee {id}"),
            meals: (id % 5) as u32,
        })
        .collect();

    let mut surface = MemorySurface::new();
    let container = surface.create_container(400, 1024);
    let options = EngineOptions::new()
        .with_key_fn(|a: &Attendee| ItemKey::Id(a.id))
        .with_selection(true)
        .with_on_selection_change(|s| println!("selected: {} item(s)", s.len()));
    let mut list = VirtualList::create(surface, container, attendees, render, options)
        .expect("container is attached");

    println!(
        "total_extent={} visible={:?} mounted={}",
        list.total_extent(),
        list.visible_range(),
        list.mounted_count()
    );

    // Click the third row.
    let node = *list.node_at(2).expect("row 2 is mounted");
    list.handle_event(&node, EventKind::Click)
        .expect("list is alive");

    // The user scrolls; the host re-syncs once per frame.
    list.surface_mut().user_scroll(container, 4_000, 0);
    let report = list.sync_viewport().expect("list is alive");
    println!("after scroll: visible={:?} {report:?}", list.visible_range());

    // Nothing changed: no surface mutation at all.
    let before = list.surface().mutation_count();
    list.sync_viewport().expect("list is alive");
    println!("idle resync mutations={}", list.surface().mutation_count() - before);

    list.scroll_to_index(2).expect("list is alive");
    println!(
        "row 2 still selected: {}",
        list.selection().contains(&ItemKey::Id(2))
    );

    list.destroy();
    println!("after destroy: live nodes={}", list.surface().live_node_count());
}
