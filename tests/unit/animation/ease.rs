use super::*;

#[test]
fn endpoints_are_exact() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease}");
    }
}

#[test]
fn midpoints_follow_the_canonical_curves() {
    assert_eq!(Ease::Linear.apply(0.25), 0.25);
    assert_eq!(Ease::EaseIn.apply(0.5), 0.25);
    assert_eq!(Ease::EaseOut.apply(0.5), 0.75);
    assert_eq!(Ease::EaseInOut.apply(0.25), 0.125);
    assert_eq!(Ease::EaseInOut.apply(0.5), 0.5);
    assert_eq!(Ease::EaseInOut.apply(0.75), 0.875);
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn input_is_not_clamped() {
    assert_eq!(Ease::Linear.apply(1.5), 1.5);
    assert_eq!(Ease::EaseIn.apply(-1.0), 1.0);
}

#[test]
fn resolve_named_curves() {
    for ease in Ease::ALL {
        let f = resolve(ease.name()).unwrap();
        assert_eq!(f(0.3), ease.apply(0.3));
    }
}

#[test]
fn resolve_unknown_name_fails() {
    let err = resolve("bogus").err().unwrap();
    assert!(matches!(
        err,
        FramestepError::UnknownEasingName { ref name } if name == "bogus"
    ));
}

#[test]
fn resolve_custom_returns_same_function() {
    let back: EasingFn = Arc::new(|t: f64| t * t * (2.70158 * t - 1.70158));
    let resolved = resolve(back.clone()).unwrap();
    assert!(Arc::ptr_eq(&back, &resolved));
    assert!(resolved(0.2) < 0.0);
}

#[test]
fn names_roundtrip_through_serde() {
    let json = serde_json::to_string(&Ease::EaseInOut).unwrap();
    assert_eq!(json, "\"easeInOut\"");
    let back: Ease = serde_json::from_str("\"easeOut\"").unwrap();
    assert_eq!(back, Ease::EaseOut);
}
