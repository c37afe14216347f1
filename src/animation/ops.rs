//! Structural combinators over opaque sequences.
//!
//! None of these look inside their children: a child may be a tween, a delay, another
//! combinator or any hand-written [`Sequence`]. A child error is returned from the composite's
//! pull as-is.

use std::collections::VecDeque;

use crate::animation::seq::{BoxSeq, Factory, Sequence};
use crate::foundation::error::{AnimResult, FramestepError};

/// Parallel join: every tick polls each unfinished child once, in declared order.
///
/// Finished children fill their slot with `None` and are never polled again. The join ends on
/// the first tick where every child reports completion; that tick is not yielded.
pub fn all<T>(children: Vec<BoxSeq<T>>) -> All<T> {
    All {
        children: children.into_iter().map(Some).collect(),
        finished: false,
    }
}

pub struct All<T> {
    // `None` once the child has reported completion.
    children: Vec<Option<BoxSeq<T>>>,
    finished: bool,
}

impl<T> Sequence for All<T> {
    type Item = Vec<Option<T>>;

    fn pull(&mut self) -> AnimResult<Option<Self::Item>> {
        if self.finished {
            return Ok(None);
        }

        let mut out = Vec::with_capacity(self.children.len());
        let mut any = false;
        for slot in &mut self.children {
            let value = match slot {
                Some(child) => {
                    let v = child.pull()?;
                    if v.is_none() {
                        *slot = None;
                    }
                    v
                }
                None => None,
            };
            any |= value.is_some();
            out.push(value);
        }

        if !any {
            self.finished = true;
            return Ok(None);
        }
        tracing::trace!(slots = out.len(), "all tick");
        Ok(Some(out))
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Staggered parallel start.
///
/// A new child is instantiated from the next factory on every tick that is a multiple of
/// `delay_frames` (tick 0 included) and polled on that same tick. Output slots follow activation
/// order; finished children contribute `None`. Fails with
/// [`FramestepError::InvalidDelay`] when `delay_frames` is zero.
pub fn sequence<T>(delay_frames: u64, factories: Vec<Factory<T>>) -> AnimResult<Stagger<T>> {
    if delay_frames == 0 {
        return Err(FramestepError::InvalidDelay { frames: 0 });
    }
    Ok(Stagger {
        delay_frames,
        pending: factories.into(),
        slots: Vec::new(),
        tick: 0,
        finished: false,
    })
}

pub struct Stagger<T> {
    delay_frames: u64,
    pending: VecDeque<Factory<T>>,
    // Activated children in activation order; `None` once finished.
    slots: Vec<Option<BoxSeq<T>>>,
    tick: u64,
    finished: bool,
}

impl<T> Stagger<T> {
    fn has_active(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }
}

impl<T> Sequence for Stagger<T> {
    type Item = Vec<Option<T>>;

    fn pull(&mut self) -> AnimResult<Option<Self::Item>> {
        if self.finished || (!self.has_active() && self.pending.is_empty()) {
            self.finished = true;
            return Ok(None);
        }

        // Advanced up front so a child error still consumes the tick.
        let tick = self.tick;
        self.tick += 1;

        if tick.is_multiple_of(self.delay_frames)
            && let Some(mut factory) = self.pending.pop_front()
        {
            tracing::debug!(
                tick,
                slot = self.slots.len(),
                "sequence activates child"
            );
            self.slots.push(Some(factory()));
        }

        let mut out = Vec::with_capacity(self.slots.len());
        let mut any = false;
        for slot in &mut self.slots {
            let value = match slot {
                Some(child) => {
                    let v = child.pull()?;
                    if v.is_none() {
                        *slot = None;
                    }
                    v
                }
                None => None,
            };
            any |= value.is_some();
            out.push(value);
        }

        if !any && !self.has_active() && self.pending.is_empty() {
            self.finished = true;
            return Ok(None);
        }

        Ok(Some(out))
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Sequential repetition: exhausts a fresh instance from `factory`, `times` times, back to back.
pub fn repeat<T>(times: u64, factory: Factory<T>) -> Repeat<T> {
    Repeat {
        times,
        started: 0,
        factory,
        current: None,
        finished: false,
    }
}

/// Alias of [`repeat`].
pub fn loop_<T>(times: u64, factory: Factory<T>) -> Repeat<T> {
    repeat(times, factory)
}

pub struct Repeat<T> {
    times: u64,
    started: u64,
    factory: Factory<T>,
    current: Option<BoxSeq<T>>,
    finished: bool,
}

impl<T> Sequence for Repeat<T> {
    type Item = T;

    fn pull(&mut self) -> AnimResult<Option<T>> {
        loop {
            if self.finished {
                return Ok(None);
            }
            if self.current.is_none() {
                if self.started == self.times {
                    self.finished = true;
                    return Ok(None);
                }
                tracing::debug!(iteration = self.started, times = self.times, "repeat");
                self.started += 1;
                self.current = Some((self.factory)());
            }
            if let Some(current) = self.current.as_mut()
                && let Some(v) = current.pull()?
            {
                return Ok(Some(v));
            }
            // Instance exhausted; the next loop turn builds a fresh one.
            self.current = None;
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// `frames` empty ticks.
pub fn delay(frames: u64) -> Delay {
    Delay {
        remaining: frames,
        finished: false,
    }
}

pub struct Delay {
    remaining: u64,
    finished: bool,
}

impl Sequence for Delay {
    type Item = ();

    fn pull(&mut self) -> AnimResult<Option<()>> {
        if self.remaining == 0 {
            self.finished = true;
            return Ok(None);
        }
        self.remaining -= 1;
        Ok(Some(()))
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
