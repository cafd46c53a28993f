// Example: load older messages above a chat log without moving what the user is reading.
use virtual_window::{
    Align, Content, EngineOptions, ItemKey, MemorySurface, RenderError, VirtualList,
};
use virtual_window_adapter::{Driver, DriverOptions};

fn render(id: &u64, _index: usize) -> Result<Content, RenderError> {
    Ok(Content::text(format!("message {id}")))
}

fn main() {
    let mut surface = MemorySurface::new();
    let container = surface.create_container(400, 1024);
    let options = EngineOptions::new().with_key_fn(|id: &u64| ItemKey::Id(*id));
    let list = VirtualList::create(surface, container, (1_000..1_100).collect(), render, options)
        .expect("container is attached");
    let mut driver = Driver::new(list, DriverOptions::default()).expect("list is alive");

    driver.scroll_to_index(50, Align::Start).expect("list is alive");
    println!(
        "before prepend: offset={} first={:?}",
        driver.view().viewport().scroll_offset,
        driver.view().key_at(50)
    );

    // Ten older messages arrive; the message at the top of the viewport must stay put.
    let older_first: Vec<u64> = (990..1_000).chain(1_000..1_100).collect();
    driver
        .preserve_anchor(|list| list.update(older_first))
        .expect("list is alive");

    let offset = driver.view().viewport().scroll_offset;
    let index = (offset / 40) as usize;
    println!(
        "after prepend: offset={offset} first={:?}",
        driver.view().key_at(index)
    );
}
