use std::collections::BTreeMap;
use std::rc::Rc;

use crate::animation::ops::{all, delay, repeat, sequence};
use crate::animation::seq::{BoxSeq, Factory, Frame, SequenceExt, from_fn, from_iter};
use crate::foundation::error::{FramestepError, FramestepResult};
use crate::program::model::{Node, Program, style_to_state};
use crate::view::element::Element;
use crate::view::model::View;

/// A program brought to life: the view, its elements and the root animation.
///
/// Elements stay attached for as long as the instance (or a sequence built from it) holds them.
pub struct Instance {
    pub view: View,
    pub elements: BTreeMap<String, Element>,
    pub root: BoxSeq<Frame>,
}

type Elements = Rc<BTreeMap<String, Element>>;

impl Program {
    /// Validate, create every element on a fresh view and lower the animation tree.
    ///
    /// Nothing is pulled: the root sequence has not started.
    #[tracing::instrument(skip(self), fields(elements = self.elements.len()))]
    pub fn instantiate(&self) -> FramestepResult<Instance> {
        self.validate()?;

        let view = View::new(self.canvas, self.background);
        let mut elements = BTreeMap::new();
        for (id, style) in &self.elements {
            elements.insert(id.clone(), view.el(style_to_state(style)?));
        }
        let shared: Elements = Rc::new(elements.clone());
        let root = build(&self.animation, &shared)?;

        tracing::debug!(elements = elements.len(), "program instantiated");
        Ok(Instance {
            view,
            elements,
            root,
        })
    }
}

fn build(node: &Node, els: &Elements) -> FramestepResult<BoxSeq<Frame>> {
    Ok(match node {
        Node::All(children) => {
            let children = children
                .iter()
                .map(|c| build(c, els))
                .collect::<FramestepResult<Vec<_>>>()?;
            all(children).frames()
        }
        Node::Then(children) => {
            let mut chain: BoxSeq<Frame> = from_iter(Vec::<Frame>::new()).boxed();
            for child in children {
                chain = chain.then(build(child, els)?).boxed();
            }
            chain
        }
        Node::Sequence { delay, items } => {
            let factories = items.iter().map(|n| factory(n, els)).collect();
            sequence(*delay, factories)?.frames()
        }
        Node::Loop { times, body } => repeat(*times, factory(body, els)).frames(),
        Node::Delay(frames) => delay(*frames).frames(),
        Node::To {
            element,
            target,
            duration,
            easing,
        } => {
            let el = els.get(element).ok_or_else(|| {
                FramestepError::validation(format!("unknown element '{element}'"))
            })?;
            el.to(style_to_state(target)?, *duration, easing.as_str())?
                .frames()
        }
    })
}

/// A factory that rebuilds `node` on every call. Build errors surface on the first pull.
fn factory(node: &Node, els: &Elements) -> Factory<Frame> {
    let node = node.clone();
    let els = Rc::clone(els);
    Box::new(move || build(&node, &els).unwrap_or_else(failing))
}

fn failing(err: FramestepError) -> BoxSeq<Frame> {
    let mut err = Some(err);
    from_fn(move || match err.take() {
        Some(e) => Err(e),
        None => Ok(None),
    })
    .boxed()
}

#[cfg(test)]
#[path = "../../tests/unit/program/compile.rs"]
mod tests;
