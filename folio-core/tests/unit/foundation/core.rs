use super::*;

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
}

#[test]
fn hex_colors_parse_with_and_without_alpha() {
    assert_eq!(Rgba8::from_hex("#6C63FF").unwrap(), Rgba8::rgb(108, 99, 255));
    let c = Rgba8::from_hex("#ff658480").unwrap();
    assert_eq!(c.a, 0x80);
    assert!(Rgba8::from_hex("6C63FF").is_err());
    assert!(Rgba8::from_hex("#6C63F").is_err());
    assert!(Rgba8::from_hex("#zzzzzz").is_err());
}

#[test]
fn with_alpha_clamps() {
    let c = Rgba8::rgb(1, 2, 3);
    assert_eq!(c.with_alpha(2.0).a, 255);
    assert_eq!(c.with_alpha(-1.0).a, 0);
    assert_eq!(c.with_alpha(0.1).a, 26);
}

#[test]
fn vec3_lerp_hits_endpoints() {
    let a = Vec3::new(0.0, 1.0, 2.0);
    let b = Vec3::new(4.0, -1.0, 2.0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Vec3::new(2.0, 0.0, 2.0));
    assert_eq!(a.distance(a), 0.0);
}

#[test]
fn decorative_default_is_click_through() {
    assert_eq!(PointerEvents::default(), PointerEvents::None);
}
