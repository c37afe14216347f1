use super::*;
use crate::animation::value::state;
use crate::foundation::core::Canvas;

fn view(w: u32, h: u32) -> View {
    View::new(
        Canvas {
            width: w,
            height: h,
        },
        Rgb::new(0, 0, 0),
    )
}

fn red_box(left: f64, top: f64, size: f64) -> State {
    let mut s = state([
        ("left", left),
        ("top", top),
        ("width", size),
        ("height", size),
    ]);
    s.insert("background".into(), Rgb::new(255, 0, 0).into());
    s
}

#[test]
fn empty_view_is_background() {
    let v = View::new(
        Canvas {
            width: 4,
            height: 3,
        },
        Rgb::new(1, 2, 3),
    );
    let f = render_view(&v).unwrap();
    assert_eq!(f.data.len(), 4 * 3 * 4);
    assert_eq!(f.pixel(3, 2), Some([1, 2, 3, 255]));
    assert_eq!(f.pixel(4, 0), None);
}

#[test]
fn paints_axis_aligned_box() {
    let v = view(16, 16);
    let _sq = v.el(red_box(4.0, 4.0, 4.0));
    let f = render_view(&v).unwrap();

    assert_eq!(f.pixel(4, 4), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(7, 7), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(3, 4), Some([0, 0, 0, 255]));
    assert_eq!(f.pixel(8, 8), Some([0, 0, 0, 255]));
}

#[test]
fn rotation_turns_box_about_its_center() {
    let v = view(32, 32);
    let mut style = red_box(8.0, 14.0, 0.0);
    style.insert("width".into(), Value::Number(16.0));
    style.insert("height".into(), Value::Number(4.0));
    let sq = v.el(style);

    let flat = render_view(&v).unwrap();
    assert_eq!(flat.pixel(9, 15), Some([255, 0, 0, 255]));
    assert_eq!(flat.pixel(15, 9), Some([0, 0, 0, 255]));

    sq.style(state([("rotate", 90.0)]));
    let turned = render_view(&v).unwrap();
    assert_eq!(turned.pixel(9, 15), Some([0, 0, 0, 255]));
    assert_eq!(turned.pixel(15, 9), Some([255, 0, 0, 255]));
}

#[test]
fn opacity_blends_over_background() {
    let v = view(4, 4);
    let mut style = red_box(0.0, 0.0, 4.0);
    style.insert("opacity".into(), Value::Number(0.5));
    let _sq = v.el(style);
    let f = render_view(&v).unwrap();
    let [r, g, b, a] = f.pixel(1, 1).unwrap();
    assert!(r.abs_diff(128) <= 1, "r = {r}");
    assert_eq!([g, b, a], [0, 0, 255]);
}

#[test]
fn partially_covered_pixels_are_antialiased() {
    let v = view(8, 8);
    let mut style = state([("left", 0.5), ("top", 0.0), ("width", 0.9), ("height", 8.0)]);
    style.insert("background".into(), Rgb::new(255, 255, 255).into());
    let _sliver = v.el(style);
    let f = render_view(&v).unwrap();

    let [r0, g0, b0, a0] = f.pixel(0, 4).unwrap();
    assert!(r0 > 0 && r0 < 255, "pixel 0 red = {r0}");
    assert_eq!([g0, b0, a0], [r0, r0, 255]);
    let [r1, ..] = f.pixel(1, 4).unwrap();
    assert!(r1 > 0 && r1 < 255, "pixel 1 red = {r1}");
    assert_eq!(f.pixel(2, 4), Some([0, 0, 0, 255]));
}

#[test]
fn elements_without_fill_or_area_are_skipped() {
    let v = view(4, 4);
    let _a = v.el(state([("left", 0.0), ("width", 4.0), ("height", 4.0)]));
    let _b = v.el(red_box(0.0, 0.0, 0.0));
    let f = render_view(&v).unwrap();
    assert!(f.data.chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
}

#[test]
fn later_elements_paint_on_top() {
    let v = view(8, 8);
    let _under = v.el(red_box(0.0, 0.0, 8.0));
    let mut over = red_box(2.0, 2.0, 2.0);
    over.insert("background".into(), Rgb::new(0, 0, 255).into());
    let _over = v.el(over);
    let f = render_view(&v).unwrap();
    assert_eq!(f.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(2, 2), Some([0, 0, 255, 255]));
}

#[test]
fn zero_canvas_is_a_render_error() {
    let v = view(0, 4);
    assert!(matches!(render_view(&v), Err(FramestepError::Render(_))));
}

#[test]
fn canvas_wider_than_u16_is_a_render_error() {
    let v = view(70_000, 2);
    assert!(matches!(render_view(&v), Err(FramestepError::Render(_))));
}
