use super::*;

#[test]
fn backdrop_waits_for_the_sampling_interval() {
    let mut b = HeroBackdrop::new(HeroConfig::default(), Size::new(1000.0, 1000.0));
    b.set_pointer(Vec2::new(0.5, -0.5));
    b.advance(0.05);
    assert_eq!(b.background_position(), Vec2::ZERO);
}

#[test]
fn backdrop_eases_toward_scaled_pointer() {
    let mut b = HeroBackdrop::new(HeroConfig::default(), Size::new(1000.0, 1000.0));
    b.set_pointer(Vec2::new(0.5, -0.5));
    b.advance(0.1);
    b.advance(0.5);
    let mid = b.background_position();
    assert!(mid.x > 0.0 && mid.x < 5.0);
    assert!(mid.y < 0.0 && mid.y > -5.0);

    for _ in 0..20 {
        b.advance(0.1);
    }
    let end = b.background_position();
    assert!((end - Vec2::new(5.0, -5.0)).hypot() < 1e-9);
}

#[test]
fn pointer_moves_from_hub_are_normalized() {
    let hub = crate::input::host::EventHub::new();
    let b = hub.mount(HeroBackdrop::new(HeroConfig::default(), Size::new(1000.0, 500.0)));
    hub.dispatch(&HostEvent::PointerMove { x: 1000.0, y: 0.0 });
    for _ in 0..30 {
        b.borrow_mut().advance(0.1);
    }
    let end = b.borrow().background_position();
    assert!((end - Vec2::new(5.0, -5.0)).hypot() < 1e-9);
}
