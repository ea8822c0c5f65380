use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn rng_range_stays_in_bounds() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.range(50.0, 150.0);
        assert!((50.0..150.0).contains(&v));
        let s = rng.symmetric(25.0);
        assert!((-25.0..25.0).contains(&s));
    }
    assert_eq!(rng.range(3.0, 3.0), 3.0);
}

#[test]
fn pick_handles_empty_and_singletons() {
    let mut rng = Rng64::new(1);
    let empty: [u8; 0] = [];
    assert!(rng.pick(&empty).is_none());
    assert_eq!(rng.pick(&[9u8]), Some(&9));
}

#[test]
fn map_range_clamps_both_sides() {
    assert_eq!(map_range_clamped(-10.0, 0.0, 100.0, 0.0, 1.0), 0.0);
    assert_eq!(map_range_clamped(50.0, 0.0, 100.0, 0.0, 1.0), 0.5);
    assert_eq!(map_range_clamped(500.0, 0.0, 100.0, 1.0, 0.0), 0.0);
    assert_eq!(map_range_clamped(5.0, 1.0, 1.0, 0.0, 1.0), 1.0);
}

#[test]
fn damp_factor_matches_per_frame_rate_at_60hz() {
    assert!((damp_factor(0.05, 1.0 / 60.0) - 0.05).abs() < 1e-12);
    assert_eq!(damp_factor(0.05, 0.0), 0.0);
    let two = damp_factor(0.05, 2.0 / 60.0);
    assert!((two - (1.0 - 0.95f64.powi(2))).abs() < 1e-12);
}
