use super::*;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::new(60, 1).unwrap(),
    }
}

fn args(cmd: &Command) -> Vec<String> {
    cmd.get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn default_opts_are_vp8_friendly() {
    let opts = FfmpegSinkOpts::new("out/a.webm");
    assert!(opts.overwrite);
    assert_eq!(opts.bitrate, 5_000_000);
    assert_eq!(opts.keyframe_interval, 150);
}

#[test]
fn command_encodes_vp8_webm_with_bitrate_and_keyframes() {
    let mut opts = FfmpegSinkOpts::new("out/a.webm");
    opts.bitrate = 2_500_000;
    let sink = FfmpegSink::new(opts);
    let a = args(&sink.command(&cfg(64, 32)));

    let pos = |s: &str| a.iter().position(|x| x == s).unwrap();
    assert_eq!(a[pos("-s") + 1], "64x32");
    assert_eq!(a[pos("-r") + 1], "60/1");
    assert!(pos("-r") < pos("-i"));
    assert_eq!(a[pos("-c:v") + 1], "libvpx");
    assert_eq!(a[pos("-b:v") + 1], "2500000");
    assert_eq!(a[pos("-g") + 1], "150");
    assert_eq!(a[pos("-f") + 1], "rawvideo");
    assert_eq!(a.last().map(String::as_str), Some("out/a.webm"));
    assert_eq!(a[0], "-y");
}

#[test]
fn no_overwrite_uses_dash_n() {
    let mut opts = FfmpegSinkOpts::new("a.webm");
    opts.overwrite = false;
    let a = args(&FfmpegSink::new(opts).command(&cfg(2, 2)));
    assert_eq!(a[0], "-n");
}

#[test]
fn odd_dimensions_are_rejected_before_spawning() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/ffmpeg_unit/odd.webm"));
    let err = sink.begin(cfg(3, 2)).unwrap_err();
    assert!(matches!(err, FramestepError::Validation(_)));
}

#[test]
fn zero_bitrate_is_rejected() {
    let mut opts = FfmpegSinkOpts::new("target/ffmpeg_unit/zero.webm");
    opts.bitrate = 0;
    let err = FfmpegSink::new(opts).begin(cfg(2, 2)).unwrap_err();
    assert!(err.to_string().contains("bitrate"));
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("a.webm"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn frame_size_must_match_config() {
    let frame = FrameRGBA {
        width: 4,
        height: 2,
        data: vec![0; 32],
    };
    assert!(check_frame(&cfg(2, 2), &frame).is_err());
    assert!(check_frame(&cfg(4, 2), &frame).is_ok());
}

#[test]
fn ensure_parent_dir_creates_missing_dirs() {
    let path = PathBuf::from("target")
        .join("ffmpeg_unit")
        .join("nested")
        .join("x.webm");
    ensure_parent_dir(&path).unwrap();
    assert!(path.parent().unwrap().is_dir());
}
