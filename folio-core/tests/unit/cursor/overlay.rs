use super::*;
use crate::foundation::core::Point;
use crate::input::host::HostEvent;

fn resize(hub: &EventHub, width: f64) {
    hub.dispatch(&HostEvent::Resize {
        width,
        height: 800.0,
    });
}

#[test]
fn resizing_across_breakpoint_hides_and_restores_cursor() {
    let hub = EventHub::new();
    let mut overlay = CursorOverlay::mount(&hub, &MotionConfig::default(), Size::new(1024.0, 800.0));
    assert!(overlay.tick(0.016).is_some());

    resize(&hub, 600.0);
    assert!(!overlay.is_enabled());
    assert!(overlay.tick(0.016).is_none());

    resize(&hub, 1024.0);
    assert!(overlay.is_enabled());
    assert!(overlay.tick(0.016).is_some());
}

#[test]
fn reenabled_cursor_appears_at_pointer_without_sweeping() {
    let hub = EventHub::new();
    let mut overlay = CursorOverlay::mount(&hub, &MotionConfig::default(), Size::new(1024.0, 800.0));
    resize(&hub, 500.0);
    overlay.tick(0.016);
    hub.dispatch(&HostEvent::PointerMove { x: 300.0, y: 200.0 });
    resize(&hub, 1200.0);

    let frame = overlay.tick(0.016).expect("enabled");
    assert_eq!(frame.dot.center, Point::new(300.0, 200.0));
}

#[test]
fn overlay_follows_hub_events() {
    let hub = EventHub::new();
    let mut overlay = CursorOverlay::mount(&hub, &MotionConfig::default(), Size::new(1280.0, 800.0));
    hub.dispatch(&HostEvent::PointerDown);
    overlay.tick(0.016);
    hub.dispatch(&HostEvent::PointerUp);
    let frame = overlay.tick(0.016).expect("desktop");
    assert_eq!(frame.particles.len(), 6);
    assert!(!overlay.tracker().state().is_pressed);
}

#[test]
fn click_between_two_ticks_spawns_burst() {
    let hub = EventHub::new();
    let mut overlay = CursorOverlay::mount(&hub, &MotionConfig::default(), Size::new(1280.0, 800.0));
    overlay.tick(0.016);
    hub.dispatch(&HostEvent::PointerMove { x: 100.0, y: 100.0 });
    hub.dispatch(&HostEvent::PointerDown);
    hub.dispatch(&HostEvent::PointerUp);

    let frame = overlay.tick(0.016).expect("desktop");
    assert_eq!(frame.particles.len(), 6);
    assert_eq!(overlay.tracker().state().release_count, 1);
}

#[test]
fn first_pointer_move_places_cursor_without_sweeping() {
    let hub = EventHub::new();
    let mut overlay = CursorOverlay::mount(&hub, &MotionConfig::default(), Size::new(1280.0, 800.0));
    overlay.tick(0.016);
    hub.dispatch(&HostEvent::PointerMove { x: 640.0, y: 360.0 });

    let frame = overlay.tick(0.016).expect("desktop");
    assert_eq!(frame.dot.center, Point::new(640.0, 360.0));
    assert_eq!(frame.halo.center, Point::new(640.0, 360.0));

    hub.dispatch(&HostEvent::PointerMove { x: 700.0, y: 360.0 });
    let eased = overlay.tick(0.016).expect("desktop");
    assert!(eased.dot.center.x > 640.0 && eased.dot.center.x < 700.0);
}

#[test]
fn dropping_overlay_releases_listeners() {
    let hub = EventHub::new();
    let overlay = CursorOverlay::mount(&hub, &MotionConfig::default(), Size::new(1280.0, 800.0));
    assert_eq!(hub.listener_count(), 1);
    drop(overlay);
    assert_eq!(hub.listener_count(), 0);
}
