use super::*;
use serde_json::json;

#[test]
fn parses_and_formats_hex_colors() {
    let c: Rgb = "#ff8000".parse().unwrap();
    assert_eq!(c, Rgb::new(255, 128, 0));
    assert_eq!(c.to_string(), "#ff8000");

    let upper: Rgb = "#0A0B0C".parse().unwrap();
    assert_eq!(upper.to_string(), "#0a0b0c");
}

#[test]
fn rejects_malformed_colors() {
    for bad in ["ff8000", "#ff80", "#ff80001", "#gg0000", "#ff800é"] {
        assert!(bad.parse::<Rgb>().is_err(), "{bad}");
    }
}

#[test]
fn color_lerp_rounds_and_does_not_clamp() {
    let black = Rgb::new(0, 0, 0);
    let white = Rgb::new(255, 255, 255);
    assert_eq!(Rgb::lerp(&black, &white, 0.5), Rgb::new(128, 128, 128));

    let over = Rgb::lerp(&black, &white, 1.1);
    assert_eq!(over.r, 281);
    assert_eq!(over.to_string(), "#119119119");
    assert_eq!(over.to_rgb8(), [255, 255, 255]);

    let under = Rgb::lerp(&white, &black, 1.1);
    assert_eq!(under.r, -25);
    assert_eq!(under.to_string(), "#-19-19-19");
    assert_eq!(under.to_rgb8(), [0, 0, 0]);
}

#[test]
fn color_lerp_rounds_halves_up() {
    let black = Rgb::new(0, 0, 0);
    let red = Rgb::new(1, 0, 0);
    assert_eq!(Rgb::lerp(&black, &red, 0.5).r, 1);
    assert_eq!(Rgb::lerp(&black, &red, -0.5), black);
    assert_eq!(Rgb::lerp(&black, &Rgb::new(3, 0, 0), -0.5).r, -1);
}

#[test]
fn value_lerp_requires_matching_kinds() {
    let n = Value::lerp(&Value::Number(10.0), &Value::Number(20.0), 0.25);
    assert_eq!(n, Some(Value::Number(12.5)));

    let mixed = Value::lerp(&Value::Number(1.0), &Value::Color(Rgb::new(0, 0, 0)), 0.5);
    assert_eq!(mixed, None);
}

#[test]
fn values_deserialize_untagged() {
    let s: State = serde_json::from_value(json!({
        "left": 10,
        "background": "#112233",
    }))
    .unwrap();
    assert_eq!(s["left"], Value::Number(10.0));
    assert_eq!(s["background"], Value::Color(Rgb::new(0x11, 0x22, 0x33)));

    let back = serde_json::to_value(&s).unwrap();
    assert_eq!(back, json!({ "background": "#112233", "left": 10.0 }));
}

#[test]
fn state_builder_collects_pairs() {
    let s = state([("x", 1.0), ("y", 2.0)]);
    assert_eq!(s.len(), 2);
    assert_eq!(s["y"].as_number(), Some(2.0));
}
