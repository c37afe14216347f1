use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FramestepError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FramestepError::sequence("x")
            .to_string()
            .contains("sequence error:")
    );
    assert!(
        FramestepError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        FramestepError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        FramestepError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn engine_errors_name_the_offending_input() {
    let err = FramestepError::unknown_easing("bogus");
    assert_eq!(err.to_string(), "unknown easing function: bogus");

    let err = FramestepError::InvalidDelay { frames: 0 };
    assert!(err.to_string().contains("0"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FramestepError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
