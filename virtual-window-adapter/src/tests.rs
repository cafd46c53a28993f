use crate::*;

use std::format;
use std::string::String;
use std::vec::Vec;
use virtual_window::{
    Align, Column, Content, EngineOptions, Error, ItemKey, MemorySurface, NodeId, RenderError,
    ScrollView, TableOptions, VirtualList, VirtualTable, VisibleRange,
};

fn render(id: &u64, _index: usize) -> Result<Content, RenderError> {
    Ok(Content::text(format!("row {id}")))
}

fn list_of(items: Vec<u64>, cross: u32) -> (VirtualList<u64, MemorySurface>, NodeId) {
    let mut surface = MemorySurface::new();
    let container = surface.create_container(400, cross);
    let options = EngineOptions::new().with_key_fn(|id: &u64| ItemKey::Id(*id));
    let list = VirtualList::create(surface, container, items, render, options).unwrap();
    (list, container)
}

fn driver_of(count: u64, cross: u32) -> (Driver<VirtualList<u64, MemorySurface>>, NodeId) {
    let (list, container) = list_of((0..count).collect(), cross);
    (Driver::new(list, DriverOptions::default()).unwrap(), container)
}

#[test]
fn device_class_from_width() {
    assert_eq!(DeviceClass::from_viewport_width(375), DeviceClass::Mobile);
    assert_eq!(DeviceClass::from_viewport_width(768), DeviceClass::Mobile);
    assert_eq!(DeviceClass::from_viewport_width(769), DeviceClass::Desktop);

    assert_eq!(DeviceClass::Desktop.tuning().overscan, 5);
    assert_eq!(DeviceClass::Desktop.tuning().frame_interval_ms, 16);
    assert_eq!(DeviceClass::Mobile.tuning().overscan, 3);
    assert_eq!(DeviceClass::Mobile.tuning().frame_interval_ms, 32);
}

#[test]
fn coalescer_folds_bursts_and_throttles() {
    let mut f = FrameCoalescer::new(16);
    assert!(!f.on_frame(0));

    assert!(f.on_event());
    for _ in 0..9 {
        assert!(!f.on_event());
    }
    assert_eq!(f.coalesced(), 10);
    assert!(f.on_frame(100));
    assert!(!f.on_frame(101));

    assert!(f.on_event());
    assert!(!f.on_frame(110));
    assert!(f.is_pending());
    assert!(f.on_frame(116));
    assert!(!f.is_pending());
}

#[test]
fn resize_tracker_reports_changes_only() {
    let mut r = ResizeTracker::new();
    assert!(r.observe(400, 300));
    assert!(!r.observe(400, 300));
    assert!(r.observe(400, 301));
    assert_eq!(r.dimensions(), Some((400, 301)));

    let mut r = ResizeTracker::with_dimensions(400, 300);
    assert!(!r.observe(400, 300));
}

#[test]
fn tween_interpolates_and_lands_exactly() {
    let t = Tween::new(0, 1000, 0, 100, Easing::Linear);
    assert_eq!(t.sample(0), 0);
    assert_eq!(t.sample(50), 500);
    assert_eq!(t.sample(100), 1000);
    assert_eq!(t.sample(500), 1000);
    assert!(t.is_done(100));

    let back = Tween::new(1000, 0, 0, 100, Easing::Linear);
    assert_eq!(back.sample(25), 750);

    let mut t = Tween::new(0, 1000, 0, 100, Easing::Linear);
    t.retarget(50, 2000, 100);
    assert_eq!(t.from, 500);
    assert_eq!(t.sample(100), 1250);
    assert_eq!(t.sample(150), 2000);
}

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        assert!(easing.sample(0.25) <= easing.sample(0.75));
    }
    assert_eq!(Easing::EaseInOutCubic.sample(0.5), 0.5);
    assert!(Easing::EaseOutCubic.sample(0.5) > 0.5);
}

#[test]
fn scroll_burst_reconciles_once_per_frame() {
    let (mut driver, container) = driver_of(1000, 1024);
    assert_eq!(driver.device(), DeviceClass::Desktop);

    driver.view_mut().surface_mut().user_scroll(container, 4000, 0);
    let requests = (0..10).filter(|_| driver.on_scroll_event()).count();
    assert_eq!(requests, 1);
    assert!(driver.needs_frame());

    let report = driver.on_animation_frame(0).unwrap().unwrap();
    assert_eq!(report.created, 20);
    assert_eq!(report.removed, 15);
    assert_eq!(driver.view().visible_range(), VisibleRange::new(95, 115));

    assert_eq!(driver.on_animation_frame(16).unwrap(), None);
    assert!(!driver.needs_frame());
}

#[test]
fn mobile_tuning_narrows_overscan_and_throttles() {
    let (mut driver, container) = driver_of(1000, 375);
    assert_eq!(driver.device(), DeviceClass::Mobile);
    assert_eq!(driver.view().config().overscan, 3);
    assert_eq!(driver.view().visible_range(), VisibleRange::new(0, 13));

    driver.view_mut().surface_mut().user_scroll(container, 4000, 0);
    assert!(driver.on_scroll_event());
    assert!(driver.on_animation_frame(100).unwrap().is_some());

    driver.view_mut().surface_mut().user_scroll(container, 8000, 0);
    assert!(driver.on_scroll_event());
    assert_eq!(driver.on_animation_frame(120).unwrap(), None);
    assert!(driver.needs_frame());
    assert!(driver.on_animation_frame(132).unwrap().is_some());
    assert_eq!(driver.view().visible_range(), VisibleRange::new(197, 213));
}

#[test]
fn resize_reconciles_only_on_change() {
    let (mut driver, container) = driver_of(1000, 1024);
    assert_eq!(driver.on_resize().unwrap(), None);

    driver.view_mut().surface_mut().resize(container, 800, 1024);
    assert!(driver.on_resize().unwrap().is_some());
    assert_eq!(driver.view().visible_range(), VisibleRange::new(0, 25));
    assert_eq!(driver.on_resize().unwrap(), None);

    driver.view_mut().surface_mut().resize(container, 800, 500);
    assert!(driver.on_resize().unwrap().is_some());
    assert_eq!(driver.device(), DeviceClass::Mobile);
    assert_eq!(driver.view().visible_range(), VisibleRange::new(0, 23));
}

#[test]
fn pinned_device_ignores_width() {
    let (list, container) = list_of((0..1000).collect(), 375);
    let options = DriverOptions::default().with_device(DeviceClass::Desktop);
    let mut driver = Driver::new(list, options).unwrap();
    assert_eq!(driver.device(), DeviceClass::Desktop);

    driver.view_mut().surface_mut().resize(container, 400, 320);
    assert!(driver.on_resize().unwrap().is_some());
    assert_eq!(driver.device(), DeviceClass::Desktop);
    assert_eq!(driver.view().config().overscan, 5);
}

#[test]
fn explicit_overscan_outlives_device_changes() {
    let (list, container) = list_of((0..1000).collect(), 1024);
    let mut driver = Driver::new(list, DriverOptions::default().with_overscan(1)).unwrap();
    assert_eq!(driver.device(), DeviceClass::Desktop);
    assert_eq!(driver.view().config().overscan, 1);
    assert_eq!(driver.view().visible_range(), VisibleRange::new(0, 11));

    driver.view_mut().surface_mut().resize(container, 400, 500);
    assert!(driver.on_resize().unwrap().is_some());
    assert_eq!(driver.device(), DeviceClass::Mobile);
    assert_eq!(driver.view().config().overscan, 1);

    driver.set_device(DeviceClass::Desktop);
    assert_eq!(driver.view().config().overscan, 1);
    assert_eq!(driver.tuning().frame_interval_ms, 16);
}

#[test]
fn smooth_scroll_reaches_target_monotonically() {
    let (mut driver, _) = driver_of(1000, 1024);
    assert_eq!(
        driver.smooth_scroll_to_index(500, Align::Start, 0).unwrap(),
        20_000
    );
    assert!(driver.is_animating());

    let mut last = 0u64;
    for now in (0..=320).step_by(20) {
        if driver.on_animation_frame(now).unwrap().is_some() {
            let offset = driver.view().viewport().scroll_offset;
            assert!(offset >= last);
            last = offset;
        }
    }
    assert!(!driver.is_animating());
    assert!(!driver.needs_frame());
    assert_eq!(last, 20_000);
    assert_eq!(driver.view().visible_range(), VisibleRange::new(495, 515));
}

#[test]
fn smooth_scroll_target_is_clamped() {
    let (mut driver, _) = driver_of(1000, 1024);
    assert_eq!(
        driver.smooth_scroll_to_offset(1_000_000_000, 0).unwrap(),
        39_600
    );
}

#[test]
fn cancel_and_jump_stop_the_animation() {
    let (mut driver, _) = driver_of(1000, 1024);
    driver.smooth_scroll_to_index(500, Align::Start, 0).unwrap();
    driver.on_animation_frame(0).unwrap();
    driver.on_animation_frame(100).unwrap();
    let stopped_at = driver.view().viewport().scroll_offset;
    assert!(stopped_at > 0 && stopped_at < 20_000);

    driver.cancel_animation();
    assert_eq!(driver.on_animation_frame(200).unwrap(), None);
    assert_eq!(driver.view().viewport().scroll_offset, stopped_at);

    driver.smooth_scroll_to_index(900, Align::Start, 300).unwrap();
    assert_eq!(driver.scroll_to_index(10, Align::Start).unwrap(), 400);
    assert!(!driver.is_animating());
}

#[test]
fn anchor_survives_prepend() {
    let (mut list, _) = list_of((1000..1100).collect(), 1024);
    list.scroll_to_offset(2010).unwrap();

    let anchor = capture_first_visible_anchor(&list).unwrap();
    assert_eq!(anchor.key, ItemKey::Id(1050));
    assert_eq!(anchor.offset_in_viewport, 10);

    let prepended: Vec<u64> = (2000..2010).chain(1000..1100).collect();
    list.update(prepended).unwrap();
    assert!(apply_anchor(&mut list, &anchor).unwrap());
    assert_eq!(list.viewport().scroll_offset, 2410);
    assert_eq!(list.first_visible_index(), Some(60));

    let gone = ScrollAnchor {
        key: ItemKey::Id(7),
        offset_in_viewport: 0,
    };
    assert!(!apply_anchor(&mut list, &gone).unwrap());
    assert_eq!(list.viewport().scroll_offset, 2410);
}

#[test]
fn anchor_at_viewport_offset() {
    let (mut list, _) = list_of((0..100).collect(), 1024);
    list.scroll_to_offset(400).unwrap();
    let anchor = capture_anchor_at(&list, 100).unwrap();
    assert_eq!(anchor.key, ItemKey::Id(12));
}

#[test]
fn driver_preserves_anchor_across_update() {
    let (list, _) = list_of((1000..1100).collect(), 1024);
    let mut driver = Driver::new(list, DriverOptions::default()).unwrap();
    driver.scroll_to_index(50, Align::Start).unwrap();

    driver
        .preserve_anchor(|list| list.update((2000..2010).chain(1000..1100).collect()))
        .unwrap();
    assert_eq!(driver.view().viewport().scroll_offset, 2400);
    assert_eq!(driver.view().key_at(60), Some(ItemKey::Id(1050)));
    assert!(driver.view().node_for_key(&ItemKey::Id(1050)).is_some());
}

#[test]
fn destroyed_view_turns_callbacks_into_no_ops() {
    let (mut driver, _) = driver_of(1000, 1024);
    driver.smooth_scroll_to_index(500, Align::Start, 0).unwrap();
    driver.view_mut().destroy();

    assert!(!driver.on_scroll_event());
    assert_eq!(driver.on_animation_frame(10), Ok(None));
    assert_eq!(driver.on_resize(), Ok(None));
    assert!(!driver.needs_frame());
    assert!(!driver.is_animating());
    assert_eq!(driver.scroll_to_index(3, Align::Start), Err(Error::Destroyed));
    assert_eq!(
        driver.smooth_scroll_to_index(3, Align::Start, 20),
        Err(Error::Destroyed)
    );
}

#[test]
fn driver_keeps_table_header_aligned() {
    let mut surface = MemorySurface::new();
    let container = surface.create_container(400, 1024);
    let columns = std::vec![
        Column::new("id", "Id", 600, |id: &u64| format!("{id}")),
        Column::new("label", "Label", 900, |id: &u64| {
            String::from(if id % 2 == 0 { "even" } else { "odd" })
        }),
    ];
    let table = VirtualTable::create(
        surface,
        container,
        (0..500).collect(),
        columns,
        TableOptions::default(),
    )
    .unwrap();
    let mut driver = Driver::new(table, DriverOptions::default()).unwrap();

    driver.view_mut().surface_mut().user_scroll(container, 800, 240);
    assert!(driver.on_scroll_event());
    driver.on_animation_frame(0).unwrap();

    let table = driver.view();
    let header = table.surface().node(*table.header()).unwrap();
    assert_eq!(header.translate_x, -240);
    assert_eq!(table.visible_range(), VisibleRange::new(15, 35));
    assert_eq!(table.len(), 500);
}
