use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::animation::ease::{EasingFn, EasingSpec, resolve};
use crate::animation::seq::Sequence;
use crate::animation::tween::{Tween, tween};
use crate::animation::value::{Rgb, State, Value};
use crate::foundation::error::AnimResult;
use crate::view::model::{ElementId, ViewInner};

/// Shared handle to an element attached to a [`crate::View`].
///
/// Cloning shares the element. When the last handle drops (including handles held by running
/// [`ElementTo`] sequences) the element is removed from its view.
#[derive(Clone)]
pub struct Element {
    inner: Rc<ElementInner>,
}

pub(crate) struct ElementInner {
    id: ElementId,
    view: Weak<RefCell<ViewInner>>,
    pub(crate) style: RefCell<State>,
}

impl Drop for ElementInner {
    fn drop(&mut self) {
        if let Some(view) = self.view.upgrade()
            && let Ok(mut inner) = view.try_borrow_mut()
        {
            inner.remove(self.id);
            tracing::debug!(id = self.id.0, "element detached");
        }
    }
}

impl Element {
    pub(crate) fn new(id: ElementId, view: Weak<RefCell<ViewInner>>, style: State) -> Self {
        Self {
            inner: Rc::new(ElementInner {
                id,
                view,
                style: RefCell::new(style),
            }),
        }
    }

    pub(crate) fn downgrade(&self) -> Weak<ElementInner> {
        Rc::downgrade(&self.inner)
    }

    pub fn id(&self) -> ElementId {
        self.inner.id
    }

    /// Merge `patch` into the element's style.
    pub fn style(&self, patch: State) {
        self.inner.style.borrow_mut().extend(patch);
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.style.borrow().get(key).copied()
    }

    pub fn snapshot(&self) -> State {
        self.inner.style.borrow().clone()
    }

    /// Animate toward `target` over `duration` frames.
    ///
    /// Start values are read when the returned sequence is first pulled, so `a.then(b)` chains
    /// start `b` from wherever `a` left the element. A key the element does not hold (or holds
    /// with another kind of value) starts from zero: `0` or `#000000`. Every yielded state is
    /// written into the element before it is returned.
    pub fn to(
        &self,
        target: State,
        duration: u64,
        easing: impl Into<EasingSpec>,
    ) -> AnimResult<ElementTo> {
        Ok(ElementTo {
            element: self.clone(),
            target: Some(target),
            duration,
            easing: resolve(easing)?,
            tween: None,
            finished: false,
        })
    }

    fn current_for(&self, target: &State) -> State {
        let style = self.inner.style.borrow();
        target
            .iter()
            .map(|(key, want)| {
                let start = match (style.get(key), want) {
                    (Some(Value::Number(n)), Value::Number(_)) => Value::Number(*n),
                    (Some(Value::Color(c)), Value::Color(_)) => Value::Color(*c),
                    (_, Value::Number(_)) => Value::Number(0.0),
                    (_, Value::Color(_)) => Value::Color(Rgb::new(0, 0, 0)),
                };
                (key.clone(), start)
            })
            .collect()
    }
}

pub struct ElementTo {
    element: Element,
    // Taken when the tween is built on first pull.
    target: Option<State>,
    duration: u64,
    easing: EasingFn,
    tween: Option<Tween>,
    finished: bool,
}

impl Sequence for ElementTo {
    type Item = State;

    fn pull(&mut self) -> AnimResult<Option<State>> {
        if self.finished {
            return Ok(None);
        }
        if let Some(target) = self.target.take() {
            let from = self.element.current_for(&target);
            self.tween = Some(tween(from, target, self.duration, self.easing.clone()));
        }
        let Some(tween) = self.tween.as_mut() else {
            self.finished = true;
            return Ok(None);
        };

        match tween.pull()? {
            Some(state) => {
                self.element.style(state.clone());
                Ok(Some(state))
            }
            None => {
                self.finished = true;
                self.tween = None;
                Ok(None)
            }
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/element.rs"]
mod tests;
