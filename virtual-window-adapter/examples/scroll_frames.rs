// Example: a host loop feeding scroll bursts, a resize and a smooth scroll through a Driver.
use virtual_window::{Align, Content, EngineOptions, MemorySurface, RenderError, VirtualList};
use virtual_window_adapter::{Driver, DriverOptions, Easing};

fn render(n: &u32, _index: usize) -> Result<Content, RenderError> {
    Ok(Content::text(format!("row {n}")))
}

fn main() {
    let mut surface = MemorySurface::new();
    let container = surface.create_container(600, 1280);
    let list = VirtualList::create(
        surface,
        container,
        (0..50_000).collect(),
        render,
        EngineOptions::new(),
    )
    .expect("container is attached");
    let options = DriverOptions::default().with_smooth_scroll(240, Easing::EaseOutCubic);
    let mut driver = Driver::new(list, options).expect("list is alive");
    println!("device={:?} tuning={:?}", driver.device(), driver.tuning());

    // A wheel burst: many events, one frame request, one reconciliation.
    let mut requests = 0;
    for step in 1..=25u64 {
        driver
            .view_mut()
            .surface_mut()
            .user_scroll(container, step * 37, 0);
        if driver.on_scroll_event() {
            requests += 1;
        }
    }
    let report = driver.on_animation_frame(16).expect("list is alive");
    println!("frame requests={requests} report={report:?}");

    // The window shrinks to phone width: tuning switches to mobile.
    driver.view_mut().surface_mut().resize(container, 600, 390);
    driver.on_resize().expect("list is alive");
    println!("after resize: device={:?}", driver.device());

    let target = driver
        .smooth_scroll_to_index(25_000, Align::Center, 100)
        .expect("list is alive");
    println!("smooth scroll target={target}");
    let mut now_ms = 100u64;
    while driver.needs_frame() {
        now_ms += 16;
        driver.on_animation_frame(now_ms).expect("list is alive");
    }
    println!(
        "done at t={now_ms}: offset={} visible={:?}",
        driver.view().viewport().scroll_offset,
        driver.view().visible_range()
    );
}
