use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_frame_duration_matches_rate() {
    let fps = Fps::new(60, 1).unwrap();
    assert!((fps.frame_duration_secs() - 1.0 / 60.0).abs() < 1e-12);
    assert_eq!(fps.frames_to_micros(60), 1_000_000);

    let ntsc = Fps::new(30000, 1001).unwrap();
    assert_eq!(ntsc.frames_to_micros(30), 1_001_000);
}

#[test]
fn canvas_validation() {
    assert!(Canvas { width: 0, height: 1 }.validate().is_err());
    assert!(Canvas { width: 4, height: 4 }.validate().is_ok());
}

#[test]
fn fps_defaults_to_sixty() {
    let fps = Fps::default();
    assert_eq!(fps.as_f64(), 60.0);
    assert_eq!(fps.frame_duration(), std::time::Duration::from_secs_f64(1.0 / 60.0));
}
