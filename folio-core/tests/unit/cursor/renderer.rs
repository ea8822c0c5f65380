use super::*;

const DT: f64 = 0.125;

fn state_at(x: f64, y: f64) -> PointerState {
    PointerState {
        position: Point::new(x, y),
        ..PointerState::default()
    }
}

fn release(s: &mut PointerState) {
    s.is_pressed = false;
    s.release_count += 1;
    s.release_position = s.position;
}

fn settle(r: &mut CursorRenderer, s: &PointerState) -> CursorFrame {
    let mut frame = r.render(s, DT);
    for _ in 0..40 {
        frame = r.render(s, DT);
    }
    frame
}

#[test]
fn phase_priority_is_pressed_then_hovering() {
    let mut s = PointerState::default();
    assert_eq!(CursorPhase::from_state(&s), CursorPhase::Idle);
    s.is_hovering = true;
    assert_eq!(CursorPhase::from_state(&s), CursorPhase::Hovering);
    s.is_pressed = true;
    assert_eq!(CursorPhase::from_state(&s), CursorPhase::Pressed);
}

#[test]
fn position_eases_rather_than_jumps() {
    let mut r = CursorRenderer::new(CursorConfig::default(), Point::ORIGIN);
    let target = state_at(200.0, 100.0);
    let first = r.render(&target, 1.0 / 60.0);
    assert!(first.dot.center.x > 0.0 && first.dot.center.x < 200.0);
    let settled = settle(&mut r, &target);
    assert_eq!(settled.dot.center, target.position);
    assert_eq!(settled.halo.center, target.position);
}

#[test]
fn halo_trails_the_primary_cursor() {
    let mut r = CursorRenderer::new(CursorConfig::default(), Point::ORIGIN);
    let target = state_at(300.0, 0.0);
    let mut frame = r.render(&target, 1.0 / 60.0);
    for _ in 0..5 {
        frame = r.render(&target, 1.0 / 60.0);
    }
    assert!(frame.halo.center.x < frame.dot.center.x);
}

#[test]
fn hover_expands_ring_hollow_and_shows_label() {
    let cfg = CursorConfig::default();
    let mut r = CursorRenderer::new(cfg.clone(), Point::ORIGIN);
    let mut s = state_at(0.0, 0.0);
    s.is_hovering = true;
    s.hover_label = "View".to_owned();

    let f = settle(&mut r, &s);
    assert_eq!(f.phase, CursorPhase::Hovering);
    assert_eq!(f.ring.radius, cfg.ring_radius_hover);
    assert_eq!(f.ring.fill, 0.0);
    let label = f.label.expect("label visible");
    assert_eq!(label.text, "View");
    assert_eq!(label.opacity, 1.0);
}

#[test]
fn label_fades_out_after_leaving() {
    let mut r = CursorRenderer::new(CursorConfig::default(), Point::ORIGIN);
    let mut s = state_at(0.0, 0.0);
    s.is_hovering = true;
    s.hover_label = "Open".to_owned();
    settle(&mut r, &s);

    s.is_hovering = false;
    s.hover_label.clear();
    let fading = r.render(&s, 1.0 / 60.0);
    let label = fading.label.expect("still fading");
    assert_eq!(label.text, "Open");
    assert!(label.opacity < 1.0);

    let gone = settle(&mut r, &s);
    assert!(gone.label.is_none());
}

#[test]
fn hover_without_label_shows_no_label_layer() {
    let mut r = CursorRenderer::new(CursorConfig::default(), Point::ORIGIN);
    let mut s = state_at(0.0, 0.0);
    s.is_hovering = true;
    assert!(settle(&mut r, &s).label.is_none());
}

#[test]
fn press_collapses_ring_to_filled_dot() {
    let cfg = CursorConfig::default();
    let mut r = CursorRenderer::new(cfg.clone(), Point::ORIGIN);
    let mut s = state_at(0.0, 0.0);
    s.is_hovering = true;
    s.is_pressed = true;
    let f = settle(&mut r, &s);
    assert_eq!(f.phase, CursorPhase::Pressed);
    assert_eq!(f.ring.radius, cfg.ring_radius_pressed);
    assert_eq!(f.ring.fill, 1.0);
}

#[test]
fn release_spawns_burst_that_decays_without_residue() {
    let cfg = CursorConfig::default();
    let mut r = CursorRenderer::new(cfg.clone(), Point::ORIGIN);
    let mut s = state_at(40.0, 40.0);
    s.is_pressed = true;
    assert!(r.render(&s, DT).particles.is_empty());

    release(&mut s);
    let spawn = r.render(&s, DT);
    assert_eq!(spawn.particles.len(), cfg.burst.count as usize);
    assert_eq!(r.live_bursts(), 1);

    let mut last = spawn;
    let mut elapsed = 0.0;
    while elapsed < cfg.burst.duration {
        last = r.render(&s, DT);
        elapsed += DT;
    }
    assert!(last.particles.is_empty());
    assert_eq!(r.live_bursts(), 0);
}

#[test]
fn holding_does_not_spawn_repeated_bursts() {
    let mut r = CursorRenderer::new(CursorConfig::default(), Point::ORIGIN);
    let mut s = state_at(0.0, 0.0);
    s.is_pressed = true;
    for _ in 0..10 {
        r.render(&s, DT);
    }
    assert_eq!(r.live_bursts(), 0);
}

#[test]
fn release_never_rendered_as_pressed_still_bursts_at_release_point() {
    let cfg = CursorConfig::default();
    let mut r = CursorRenderer::new(cfg.clone(), Point::ORIGIN);
    let mut s = state_at(0.0, 0.0);
    r.render(&s, DT);

    s.release_count = 1;
    s.release_position = Point::new(60.0, 20.0);
    s.position = Point::new(90.0, 20.0);
    let f = r.render(&s, DT);
    assert_eq!(r.live_bursts(), 1);
    assert_eq!(f.particles.len(), cfg.burst.count as usize);
    let centroid_x = f.particles.iter().map(|p| p.center.x).sum::<f64>() / 6.0;
    assert!((centroid_x - 60.0).abs() < 1e-9);

    r.render(&s, DT);
    assert_eq!(r.live_bursts(), 1, "a release is consumed once");
}

#[test]
fn jump_to_moves_layers_but_keeps_bursts() {
    let mut r = CursorRenderer::new(CursorConfig::default(), Point::ORIGIN);
    let mut s = state_at(0.0, 0.0);
    release(&mut s);
    r.render(&s, DT);
    assert_eq!(r.live_bursts(), 1);

    r.jump_to(Point::new(400.0, 300.0));
    let f = r.render(&state_at(400.0, 300.0), DT);
    assert_eq!(f.dot.center, Point::new(400.0, 300.0));
    assert_eq!(r.live_bursts(), 1);
}

#[test]
fn frames_are_click_through() {
    let mut r = CursorRenderer::new(CursorConfig::default(), Point::ORIGIN);
    let f = r.render(&state_at(1.0, 1.0), DT);
    assert_eq!(f.pointer_events, PointerEvents::None);
}

#[test]
fn snap_clears_motion_and_bursts() {
    let mut r = CursorRenderer::new(CursorConfig::default(), Point::ORIGIN);
    let mut s = state_at(10.0, 10.0);
    s.is_pressed = true;
    r.render(&s, DT);
    release(&mut s);
    r.render(&s, DT);
    assert_eq!(r.live_bursts(), 1);

    let far = state_at(500.0, 500.0);
    r.snap(&far);
    assert_eq!(r.live_bursts(), 0);
    let f = r.render(&far, DT);
    assert_eq!(f.dot.center, far.position);
}
