use super::*;
use crate::animation::seq::from_iter;
use crate::animation::value::{Rgb, State, state};
use crate::encode::sink::InMemorySink;
use crate::foundation::core::Canvas;
use crate::foundation::error::FramestepError;

fn view() -> View {
    View::new(
        Canvas {
            width: 8,
            height: 8,
        },
        Rgb::new(0, 0, 0),
    )
}

#[test]
fn pushes_initial_frame_plus_one_per_tick() {
    let v = view();
    let mut sink = InMemorySink::new();
    let n = record(&v, from_iter(0..3), &mut sink, RecordOpts::default()).unwrap();

    assert_eq!(n, 4);
    assert!(sink.is_ended());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (8, 8));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2, 3]);
}

#[test]
fn frames_follow_the_animated_element() {
    let v = view();
    let mut style = state([("left", 0.0), ("top", 0.0), ("width", 8.0), ("height", 8.0)]);
    style.insert("background".into(), Rgb::new(0, 0, 0).into());
    let el = v.el(style);
    let anim = el
        .to(
            {
                let mut s = State::new();
                s.insert("background".into(), Rgb::new(255, 255, 255).into());
                s
            },
            2,
            "linear",
        )
        .unwrap();

    let mut sink = InMemorySink::new();
    let n = record(&v, anim, &mut sink, RecordOpts::default()).unwrap();
    assert_eq!(n, 4);

    let px: Vec<[u8; 4]> = sink
        .frames()
        .iter()
        .map(|(_, f)| f.pixel(4, 4).unwrap())
        .collect();
    assert_eq!(
        px,
        vec![
            [0, 0, 0, 255],
            [0, 0, 0, 255],
            [128, 128, 128, 255],
            [255, 255, 255, 255],
        ]
    );
}

#[test]
fn empty_sequence_still_records_the_initial_frame() {
    let mut sink = InMemorySink::new();
    let n = record(
        &view(),
        from_iter(Vec::<u8>::new()),
        &mut sink,
        RecordOpts::default(),
    )
    .unwrap();
    assert_eq!(n, 1);
    assert_eq!(sink.frames().len(), 1);
}

#[test]
fn render_errors_abort_before_end() {
    let v = View::new(
        Canvas {
            width: 0,
            height: 8,
        },
        Rgb::new(0, 0, 0),
    );
    let mut sink = InMemorySink::new();
    let err = record(&v, from_iter(0..3), &mut sink, RecordOpts::default()).unwrap_err();
    assert!(matches!(err, FramestepError::Render(_)));
    assert!(!sink.is_ended());
}
