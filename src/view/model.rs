use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::animation::value::{Rgb, State};
use crate::foundation::core::Canvas;
use crate::view::element::{Element, ElementInner};

/// Stable identifier of an element within its view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct ElementId(pub u64);

/// A retained set of elements painted in creation order.
///
/// `View` is a cheap shared handle. Elements are held weakly: an element leaves its view when
/// the last [`Element`] handle to it is dropped.
#[derive(Clone)]
pub struct View {
    inner: Rc<RefCell<ViewInner>>,
}

pub(crate) struct ViewInner {
    canvas: Canvas,
    background: Rgb,
    next_id: u64,
    elements: Vec<(ElementId, Weak<ElementInner>)>,
}

impl ViewInner {
    pub(crate) fn remove(&mut self, id: ElementId) {
        self.elements.retain(|(eid, _)| *eid != id);
    }
}

impl View {
    pub fn new(canvas: Canvas, background: Rgb) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ViewInner {
                canvas,
                background,
                next_id: 0,
                elements: Vec::new(),
            })),
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.inner.borrow().canvas
    }

    pub fn background(&self) -> Rgb {
        self.inner.borrow().background
    }

    /// Create an element with an initial style and attach it to this view.
    pub fn el(&self, style: State) -> Element {
        let mut inner = self.inner.borrow_mut();
        let id = ElementId(inner.next_id);
        inner.next_id += 1;

        let element = Element::new(id, Rc::downgrade(&self.inner), style);
        inner.elements.push((id, element.downgrade()));
        tracing::debug!(id = id.0, "element attached");
        element
    }

    /// Detach every element. Handles stay usable but are no longer painted.
    pub fn clear(&self) {
        self.inner.borrow_mut().elements.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current style of every attached element, in paint order.
    pub fn snapshot(&self) -> Vec<(ElementId, State)> {
        let live: Vec<(ElementId, Rc<ElementInner>)> = self
            .inner
            .borrow()
            .elements
            .iter()
            .filter_map(|(id, weak)| weak.upgrade().map(|e| (*id, e)))
            .collect();

        live.into_iter()
            .map(|(id, e)| (id, e.style.borrow().clone()))
            .collect()
    }
}
