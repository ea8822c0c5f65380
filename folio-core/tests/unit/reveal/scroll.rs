use super::*;
use crate::input::host::EventHub;

const VIEW: Size = Size::new(1280.0, 800.0);

#[test]
fn progress_is_clamped_and_pure() {
    let p = ScrollProgress::compute(400.0, VIEW, 4800.0);
    assert_eq!(p.hero, 0.5);
    assert_eq!(p.page, 0.1);
    assert_eq!(ScrollProgress::compute(-20.0, VIEW, 4800.0).hero, 0.0);
    assert_eq!(ScrollProgress::compute(2000.0, VIEW, 4800.0).hero, 1.0);
    assert_eq!(ScrollProgress::compute(400.0, VIEW, 4800.0), p);
}

#[test]
fn short_document_has_no_page_progress() {
    assert_eq!(ScrollProgress::compute(100.0, VIEW, 600.0).page, 0.0);
    assert_eq!(ScrollProgress::compute(100.0, Size::ZERO, 600.0).hero, 0.0);
}

#[test]
fn hero_parallax_and_fade_follow_progress() {
    let cfg = HeroConfig::default();
    let top = hero_motion(0.0, &cfg);
    assert_eq!(top.translate_y, 0.0);
    assert_eq!(top.opacity, 1.0);

    let half = hero_motion(0.4, &cfg);
    assert!((half.translate_y - 80.0).abs() < 1e-9);
    assert!((half.opacity - 0.5).abs() < 1e-9);

    let gone = hero_motion(0.9, &cfg);
    assert_eq!(gone.opacity, 0.0);
}

#[test]
fn hero_motion_tracks_scroll_in_both_directions() {
    let hub = EventHub::new();
    let hero = hub.mount(HeroScroll::new(HeroConfig::default(), VIEW, 4800.0));
    let mut seen = Vec::new();
    for offset in [0.0, 200.0, 600.0, 200.0, 0.0] {
        hub.dispatch(&HostEvent::Scroll { offset_y: offset });
        seen.push(hero.borrow().motion().opacity);
    }
    assert_eq!(seen[0], seen[4]);
    assert_eq!(seen[1], seen[3]);
    assert!(seen[2] < seen[1]);
}

#[test]
fn navbar_switches_past_fifty_pixels() {
    let cfg = HeroConfig::default();
    assert!(!is_navbar_scrolled(50.0, &cfg));
    assert!(is_navbar_scrolled(51.0, &cfg));
}
