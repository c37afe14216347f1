//! Frame-stepped animation scheduling.
//!
//! Animations are lazy, pull-based [`Sequence`]s: every pull advances one logical frame. Tweens
//! interpolate numeric and color styles under an easing curve, and the combinators [`all`],
//! [`sequence`], [`repeat`] and [`delay`] compose them. A [`View`] holds styled elements whose
//! [`Element::to`] tweens write back into them; [`render_view`] rasterizes a view, [`Player`]
//! steps a root sequence and [`record`] streams every tick into a [`FrameSink`]. Declarative
//! [`Program`]s describe a whole scene in JSON.
#![forbid(unsafe_code)]

pub mod animation;
pub mod encode;
pub mod foundation;
pub mod program;
pub mod render;
pub mod session;
pub mod view;

pub use animation::ease::{Ease, EasingFn, EasingSpec, resolve};
pub use animation::ops::{all, delay, loop_, repeat, sequence};
pub use animation::seq::{BoxSeq, Factory, Frame, Sequence, SequenceExt, from_fn, from_iter, once};
pub use animation::tween::{Tween, ease_out, linear, tween};
pub use animation::value::{Lerp, Rgb, State, Value, state};
pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{Canvas, Fps, FrameIndex};
pub use foundation::error::{AnimResult, FramestepError, FramestepResult};
pub use program::compile::Instance;
pub use program::model::{Node, Program, StyleDef, StyleValue};
pub use render::cpu::{FrameRGBA, render_view};
pub use session::player::{PlayStats, Player, PlayerOpts};
pub use session::recorder::{RecordOpts, record};
pub use view::element::{Element, ElementTo};
pub use view::model::{ElementId, View};
