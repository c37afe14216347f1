use crate::animation::ease::{Ease, EasingFn};
use crate::animation::seq::Sequence;
use crate::animation::value::{State, Value};
use crate::foundation::error::AnimResult;

/// Interpolates `from` toward `to` over `duration` frames, yielding `duration + 1` states.
///
/// Keys of `from` missing in `to`, or holding a different kind of value there, are left out of
/// every yielded state. Each state is computed on pull.
pub struct Tween {
    from: State,
    to: State,
    duration: u64,
    easing: EasingFn,
    step: u64,
    finished: bool,
}

pub fn tween(from: State, to: State, duration: u64, easing: EasingFn) -> Tween {
    Tween {
        from,
        to,
        duration,
        easing,
        step: 0,
        finished: false,
    }
}

pub fn linear(from: State, to: State, duration: u64) -> Tween {
    tween(from, to, duration, Ease::Linear.function())
}

pub fn ease_out(from: State, to: State, duration: u64) -> Tween {
    tween(from, to, duration, Ease::EaseOut.function())
}

impl Tween {
    /// Total number of states this tween yields.
    pub fn len(&self) -> u64 {
        self.duration + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// State at step `i` (`0..=duration`).
    fn state_at(&self, i: u64) -> State {
        let p = if self.duration == 0 {
            1.0
        } else {
            i as f64 / self.duration as f64
        };
        let e = (self.easing)(p);

        self.from
            .iter()
            .filter_map(|(key, start)| {
                let end = self.to.get(key)?;
                Value::lerp(start, end, e).map(|v| (key.clone(), v))
            })
            .collect()
    }
}

impl Sequence for Tween {
    type Item = State;

    fn pull(&mut self) -> AnimResult<Option<State>> {
        if self.finished || self.step > self.duration {
            self.finished = true;
            return Ok(None);
        }
        let state = self.state_at(self.step);
        self.step += 1;
        Ok(Some(state))
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
