use super::*;

const CONTAINER: Size = Size::new(1280.0, 800.0);

#[test]
fn same_seed_same_layout() {
    let a = AmbientField::generate(FieldSpec::hero(), 42).unwrap();
    let b = AmbientField::generate(FieldSpec::hero(), 42).unwrap();
    assert_eq!(a.shapes(), b.shapes());
    let c = AmbientField::generate(FieldSpec::hero(), 43).unwrap();
    assert_ne!(a.shapes(), c.shapes());
}

#[test]
fn repeated_sampling_never_reshuffles() {
    let field = AmbientField::generate(FieldSpec::skills(), 7).unwrap();
    let before = field.shapes().to_vec();
    let first = field.sample(3.0, CONTAINER);
    for _ in 0..5 {
        field.sample(1.0, CONTAINER);
    }
    assert_eq!(field.sample(3.0, CONTAINER), first);
    assert_eq!(field.shapes(), before.as_slice());
}

#[test]
fn generated_parameters_respect_spec_ranges() {
    let spec = FieldSpec::hero();
    let field = AmbientField::generate(spec.clone(), 1).unwrap();
    assert_eq!(field.shapes().len(), 20);
    for s in field.shapes() {
        assert!((spec.size[0]..spec.size[1]).contains(&s.size));
        assert!((spec.duration[0]..spec.duration[1]).contains(&s.duration));
        assert!(s.drift.x.abs() <= spec.drift && s.drift.y.abs() <= spec.drift);
        assert!((0.0..1.0).contains(&s.anchor.x) && (0.0..1.0).contains(&s.anchor.y));
        assert!(s.alpha < 0.1);
        assert_eq!(s.phase, 0.0);
    }
}

#[test]
fn drift_reverses_and_loops_forever() {
    let field = AmbientField::generate(FieldSpec::hero(), 9).unwrap();
    let shape = &field.shapes()[0];
    let at = |t: f64| field.sample(t, CONTAINER).shapes[0].center;

    let rest = at(0.0);
    let far = at(shape.duration);
    assert!(((far - rest) - shape.drift).hypot() < 1e-9);
    let back = at(2.0 * shape.duration);
    assert!((back - rest).hypot() < 1e-9);
    let much_later = at(2000.0 * shape.duration);
    assert!((much_later - rest).hypot() < 1e-6);
}

#[test]
fn cycle_palette_alternates_and_pulse_drives_opacity() {
    let field = AmbientField::generate(FieldSpec::projects(), 3).unwrap();
    let colors: Vec<Rgba8> = field.shapes().iter().map(|s| s.color).collect();
    assert_eq!(colors, vec![palette::CYAN, palette::PINK, palette::CYAN]);

    let frame = field.sample(0.0, CONTAINER);
    for s in &frame.shapes {
        assert!((s.opacity - 0.2).abs() < 1e-12);
    }
    let d = field.shapes()[0].duration;
    let peak = field.sample(d / 2.0, CONTAINER).shapes[0].opacity;
    assert!((peak - 0.4).abs() < 1e-9);
}

#[test]
fn fields_are_click_through() {
    let field = AmbientField::generate(FieldSpec::hero(), 0).unwrap();
    assert_eq!(field.sample(0.5, CONTAINER).pointer_events, PointerEvents::None);
}

#[test]
fn presets_resolve_by_name() {
    assert_eq!(FieldSpec::preset("skills").unwrap().count, 10);
    assert!(FieldSpec::preset("footer").is_err());
}

#[test]
fn invalid_specs_are_rejected() {
    let mut spec = FieldSpec::hero();
    spec.palette.clear();
    assert!(AmbientField::generate(spec, 0).is_err());

    let mut spec = FieldSpec::hero();
    spec.duration = [0.0, 5.0];
    assert!(AmbientField::generate(spec, 0).is_err());
}
