use crate::animation::seq::Sequence;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::FramestepResult;
use crate::render::cpu::render_view;
use crate::view::model::View;

/// Options for [`record`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordOpts {
    /// Frame rate handed to the sink.
    pub fps: Fps,
}

/// Drive `seq` to exhaustion, rendering `view` into `sink` once before the first tick and once
/// after every tick.
///
/// Returns the number of frames pushed: `1 + ticks`. The sink sees strictly increasing frame
/// indices starting at 0. Errors from the sequence, the renderer or the sink abort recording
/// without calling `end`.
#[tracing::instrument(skip(view, seq, sink), fields(width, height))]
pub fn record<S: Sequence>(
    view: &View,
    mut seq: S,
    sink: &mut dyn FrameSink,
    opts: RecordOpts,
) -> FramestepResult<u64> {
    let canvas = view.canvas();
    let span = tracing::Span::current();
    span.record("width", canvas.width);
    span.record("height", canvas.height);

    sink.begin(SinkConfig {
        width: canvas.width,
        height: canvas.height,
        fps: opts.fps,
    })?;

    let mut written = 0u64;
    sink.push_frame(FrameIndex(written), &render_view(view)?)?;
    written += 1;

    while seq.pull()?.is_some() {
        sink.push_frame(FrameIndex(written), &render_view(view)?)?;
        written += 1;
    }

    sink.end()?;
    tracing::debug!(frames = written, "recording finished");
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/unit/session/recorder.rs"]
mod tests;
