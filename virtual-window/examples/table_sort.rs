// Example: a weekly menu table with a sticky header, header-click sorting and text filtering.
use virtual_window::{
    Column, EngineOptions, EventKind, ItemKey, MemorySurface, TableOptions, VirtualTable,
};

#[derive(Clone)]
struct Dish {
    id: u64,
    day: &'static str,
    name: String,
    servings: u32,
}

fn main() {
    let days = ["Mon", "Tue", "Wed", "Thu", "Fri"];
    let dishes: Vec<Dish> = (0..2_000u64)
        .map(|id| Dish {
            id,
            day: days[(id % 5) as usize],
            name: format!("Dish {id}"),
            servings: ((id * 37) % 250) as u32,
        })
        .collect();

    let columns = vec![
        Column::new("day", "Day", 80, |d: &Dish| d.day.to_string()),
        Column::new("name", "Dish", 240, |d: &Dish| d.name.clone()),
        Column::new("servings", "Servings", 100, |d: &Dish| d.servings.to_string())
            .with_compare(|a: &Dish, b: &Dish| a.servings.cmp(&b.servings)),
    ];

    let mut surface = MemorySurface::new();
    let container = surface.create_container(400, 300);
    let options = TableOptions::new(
        EngineOptions::new()
            .with_item_extent(32)
            .with_key_fn(|d: &Dish| ItemKey::Id(d.id)),
    );
    let mut table = VirtualTable::create(surface, container, dishes, columns, options)
        .expect("valid columns");

    let servings = *table.header_cell("servings").expect("column exists");
    table
        .handle_event(&servings, EventKind::Click)
        .expect("table is alive");
    table
        .handle_event(&servings, EventKind::Click)
        .expect("table is alive");
    println!(
        "sort={:?} first={:?}",
        table.sort_state(),
        table.list().item(0).map(|d| (&d.name, d.servings))
    );

    table.set_filter_text("dish 19").expect("filtering enabled");
    println!("filter matches={}", table.list().len());

    // Horizontal scroll keeps the header aligned with the body.
    table.surface_mut().user_scroll(container, 0, 120);
    table.sync_viewport().expect("table is alive");
    let header = table.surface().node(*table.header()).expect("header is attached");
    println!("header translate_x={}", header.translate_x);
}
