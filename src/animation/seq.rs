//! The pull protocol every animation speaks.
//!
//! A [`Sequence`] is a resumable producer: each [`Sequence::pull`] advances it one logical frame
//! and hands back that frame's value, or `None` once it is exhausted. Sequences are stateful and
//! not restartable; build a fresh one to replay.

use crate::animation::value::State;
use crate::foundation::error::AnimResult;

/// A lazy, pull-based producer of per-frame values.
pub trait Sequence {
    type Item;

    /// Advance one frame. `Ok(None)` means the sequence is exhausted; pulling again keeps
    /// returning `Ok(None)`.
    fn pull(&mut self) -> AnimResult<Option<Self::Item>>;

    /// `true` once a pull has reported exhaustion.
    fn is_finished(&self) -> bool;
}

/// An owned, type-erased sequence.
pub type BoxSeq<T> = Box<dyn Sequence<Item = T>>;

/// A zero-argument constructor producing a fresh, unconsumed sequence per call.
pub type Factory<T> = Box<dyn FnMut() -> BoxSeq<T>>;

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    fn pull(&mut self) -> AnimResult<Option<Self::Item>> {
        (**self).pull()
    }

    fn is_finished(&self) -> bool {
        (**self).is_finished()
    }
}

/// Common item type for nesting heterogeneous sequences.
///
/// A finished slot of a joined tick is `None`; `Some(Frame::Empty)` is a tick that legitimately
/// carries nothing (a delay).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Frame {
    Empty,
    State(State),
    Joined(Vec<Option<Frame>>),
}

impl From<()> for Frame {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

impl From<State> for Frame {
    fn from(state: State) -> Self {
        Self::State(state)
    }
}

impl<T: Into<Frame>> From<Vec<Option<T>>> for Frame {
    fn from(slots: Vec<Option<T>>) -> Self {
        Self::Joined(slots.into_iter().map(|s| s.map(Into::into)).collect())
    }
}

pub trait SequenceExt: Sequence + Sized {
    fn boxed(self) -> BoxSeq<Self::Item>
    where
        Self: 'static,
    {
        Box::new(self)
    }

    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Map { inner: self, f }
    }

    /// Run `self` to exhaustion, then `next`.
    fn then<N>(self, next: N) -> Then<Self, N>
    where
        N: Sequence<Item = Self::Item>,
    {
        Then {
            first: Some(self),
            second: next,
            finished: false,
        }
    }

    /// Lift into a boxed [`Frame`] sequence so it can sit next to other kinds of children.
    fn frames(self) -> BoxSeq<Frame>
    where
        Self: 'static,
        Self::Item: Into<Frame>,
    {
        Box::new(self.map(Into::into))
    }

    /// Drive as a fused iterator of results.
    fn results(self) -> Iter<Self> {
        Iter {
            inner: self,
            done: false,
        }
    }

    /// Pull to exhaustion, collecting every value.
    fn collect_all(mut self) -> AnimResult<Vec<Self::Item>> {
        let mut out = Vec::new();
        while let Some(v) = self.pull()? {
            out.push(v);
        }
        Ok(out)
    }
}

impl<S: Sequence> SequenceExt for S {}

pub struct Map<S, F> {
    inner: S,
    f: F,
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn pull(&mut self) -> AnimResult<Option<U>> {
        Ok(self.inner.pull()?.map(&mut self.f))
    }

    fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

pub struct Then<A, B> {
    first: Option<A>,
    second: B,
    finished: bool,
}

impl<A, B> Sequence for Then<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    fn pull(&mut self) -> AnimResult<Option<A::Item>> {
        if self.finished {
            return Ok(None);
        }
        if let Some(first) = self.first.as_mut() {
            if let Some(v) = first.pull()? {
                return Ok(Some(v));
            }
            self.first = None;
        }
        let next = self.second.pull()?;
        self.finished = next.is_none();
        Ok(next)
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Adapt a plain iterator.
pub fn from_iter<I: IntoIterator>(iter: I) -> FromIter<I::IntoIter> {
    FromIter {
        iter: iter.into_iter(),
        finished: false,
    }
}

pub struct FromIter<I> {
    iter: I,
    finished: bool,
}

impl<I: Iterator> Sequence for FromIter<I> {
    type Item = I::Item;

    fn pull(&mut self) -> AnimResult<Option<I::Item>> {
        if self.finished {
            return Ok(None);
        }
        let next = self.iter.next();
        self.finished = next.is_none();
        Ok(next)
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Adapt a closure that produces one frame per call, `Ok(None)` when done.
///
/// This is the hand-written generator: the closure owns whatever position state it needs.
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> AnimResult<Option<T>>,
{
    FromFn { f, finished: false }
}

pub struct FromFn<F> {
    f: F,
    finished: bool,
}

impl<T, F> Sequence for FromFn<F>
where
    F: FnMut() -> AnimResult<Option<T>>,
{
    type Item = T;

    fn pull(&mut self) -> AnimResult<Option<T>> {
        if self.finished {
            return Ok(None);
        }
        let next = (self.f)()?;
        self.finished = next.is_none();
        Ok(next)
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// A single-frame sequence.
pub fn once<T>(value: T) -> FromIter<std::option::IntoIter<T>> {
    from_iter(Some(value))
}

pub struct Iter<S> {
    inner: S,
    done: bool,
}

impl<S: Sequence> Iterator for Iter<S> {
    type Item = AnimResult<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.pull() {
            Ok(Some(v)) => Some(Ok(v)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/seq.rs"]
mod tests;
