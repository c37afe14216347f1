use std::time::{Duration, Instant};

use crate::animation::seq::Sequence;
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::FramestepResult;

/// Options controlling [`Player`] pacing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerOpts {
    /// Target tick rate.
    pub fps: Fps,
    /// Sleep between ticks so playback follows the wall clock.
    pub realtime: bool,
}

/// Playback statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayStats {
    /// Ticks pulled from the root sequence.
    pub frames: u64,
    /// Wall time spent playing.
    pub elapsed: Duration,
}

/// Pulls a root sequence one tick per frame.
///
/// Without `realtime` the player steps as fast as the sequence yields. With it, tick `n` is
/// released no earlier than `n` frame durations after the first tick.
pub struct Player<S> {
    seq: S,
    opts: PlayerOpts,
    next: FrameIndex,
    started: Option<Instant>,
}

impl<S: Sequence> Player<S> {
    pub fn new(seq: S, opts: PlayerOpts) -> Self {
        Self {
            seq,
            opts,
            next: FrameIndex(0),
            started: None,
        }
    }

    /// Index the next yielded tick will carry.
    pub fn position(&self) -> FrameIndex {
        self.next
    }

    pub fn is_finished(&self) -> bool {
        self.seq.is_finished()
    }

    /// Advance one tick. `Ok(None)` once the root sequence is exhausted.
    pub fn step(&mut self) -> FramestepResult<Option<(FrameIndex, S::Item)>> {
        if self.opts.realtime {
            self.pace();
        }
        let Some(item) = self.seq.pull()? else {
            return Ok(None);
        };
        let idx = self.next;
        self.next = FrameIndex(idx.0 + 1);
        tracing::trace!(frame = idx.0, "tick");
        Ok(Some((idx, item)))
    }

    /// Step until exhaustion, handing each tick to `on_frame`.
    #[tracing::instrument(
        skip(self, on_frame),
        fields(fps = %self.opts.fps.as_f64(), realtime = self.opts.realtime)
    )]
    pub fn run_to_end<F>(&mut self, mut on_frame: F) -> FramestepResult<PlayStats>
    where
        F: FnMut(FrameIndex, S::Item) -> FramestepResult<()>,
    {
        let t0 = Instant::now();
        let mut frames = 0u64;
        while let Some((idx, item)) = self.step()? {
            on_frame(idx, item)?;
            frames += 1;
        }
        let stats = PlayStats {
            frames,
            elapsed: t0.elapsed(),
        };
        tracing::debug!(
            frames = stats.frames,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "playback finished"
        );
        Ok(stats)
    }

    fn pace(&mut self) {
        let started = *self.started.get_or_insert_with(Instant::now);
        let due = started + Duration::from_micros(self.opts.fps.frames_to_micros(self.next.0));
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/player.rs"]
mod tests;
