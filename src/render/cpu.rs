use kurbo::{Affine, Vec2};

use crate::animation::value::{Rgb, State, Value};
use crate::foundation::error::{FramestepError, FramestepResult};
use crate::view::model::View;

/// A rendered frame as opaque RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major. Alpha is always 255.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    pub fn solid(width: u32, height: u32, color: Rgb) -> Self {
        let [r, g, b] = color.to_rgb8();
        let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);
        for _ in 0..(width as usize) * (height as usize) {
            data.extend_from_slice(&[r, g, b, 255]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let p = &self.data[i..i + 4];
        Some([p[0], p[1], p[2], p[3]])
    }
}

/// Box geometry and paint read from an element's style.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Paint {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    rotate_deg: f64,
    scale: f64,
    opacity: f64,
    fill: Rgb,
}

impl Paint {
    /// `None` for elements with nothing to paint.
    fn from_style(style: &State) -> Option<Self> {
        let num = |key: &str, default: f64| {
            style
                .get(key)
                .and_then(Value::as_number)
                .unwrap_or(default)
        };
        let fill = style.get("background").and_then(Value::as_color)?;
        let paint = Self {
            left: num("left", 0.0),
            top: num("top", 0.0),
            width: num("width", 0.0),
            height: num("height", 0.0),
            rotate_deg: num("rotate", 0.0),
            scale: num("scale", 1.0),
            opacity: num("opacity", 1.0).clamp(0.0, 1.0),
            fill,
        };
        (paint.width > 0.0 && paint.height > 0.0 && paint.opacity > 0.0).then_some(paint)
    }

    fn transform(&self) -> Affine {
        let center = Vec2::new(self.width / 2.0, self.height / 2.0);
        Affine::translate(Vec2::new(self.left, self.top))
            * Affine::translate(center)
            * Affine::rotate(self.rotate_deg.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(-center)
    }
}

/// Rasterize every attached element, in creation order, over the view background.
///
/// Elements are boxes at `left, top` sized `width x height`, rotated by `rotate` degrees and
/// scaled by `scale` about their center, filled with `background` at `opacity`. Edges are
/// anti-aliased by `vello_cpu`.
pub fn render_view(view: &View) -> FramestepResult<FrameRGBA> {
    let canvas = view.canvas();
    canvas
        .validate()
        .map_err(|e| FramestepError::render(e.to_string()))?;
    let width = u16::try_from(canvas.width)
        .map_err(|_| FramestepError::render(format!("canvas width {} exceeds u16", canvas.width)))?;
    let height = u16::try_from(canvas.height).map_err(|_| {
        FramestepError::render(format!("canvas height {} exceeds u16", canvas.height))
    })?;

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(solid(view.background()));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(canvas.width),
        f64::from(canvas.height),
    ));

    for (_, style) in view.snapshot() {
        if let Some(paint) = Paint::from_style(&style) {
            fill_box(&mut ctx, &paint);
        }
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);

    // The background is opaque, so premultiplied and straight bytes agree.
    let mut data = pixmap.data_as_u8_slice().to_vec();
    for px in data.chunks_exact_mut(4) {
        px[3] = 255;
    }
    Ok(FrameRGBA {
        width: canvas.width,
        height: canvas.height,
        data,
    })
}

fn fill_box(ctx: &mut vello_cpu::RenderContext, paint: &Paint) {
    let opacity = paint.opacity as f32;
    ctx.set_transform(affine_to_cpu(paint.transform()));
    ctx.set_paint(solid(paint.fill));
    if opacity < 1.0 {
        ctx.push_opacity_layer(opacity);
    }
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        paint.width,
        paint.height,
    ));
    if opacity < 1.0 {
        ctx.pop_layer();
    }
}

fn solid(color: Rgb) -> vello_cpu::peniko::Color {
    let [r, g, b] = color.to_rgb8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, 255)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
