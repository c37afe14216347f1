use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::animation::value::{Rgb, State, Value};
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{FramestepError, FramestepResult};

/// A complete animation program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub canvas: Canvas,
    #[serde(default)]
    pub fps: Fps,
    #[serde(default = "default_background")]
    pub background: Rgb,
    /// Elements by id. Elements are created, and painted, in id order.
    #[serde(default)]
    pub elements: BTreeMap<String, StyleDef>,
    pub animation: Node,
}

fn default_background() -> Rgb {
    Rgb::new(0, 0, 0)
}

/// A style as written in a program: numbers, or `#rrggbb` strings for colors.
pub type StyleDef = BTreeMap<String, StyleValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl StyleValue {
    pub fn to_value(&self) -> FramestepResult<Value> {
        match self {
            Self::Number(n) => Ok(Value::Number(*n)),
            Self::Text(s) => Ok(Value::Color(s.parse()?)),
        }
    }
}

impl From<Value> for StyleValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Number(n) => Self::Number(n),
            Value::Color(c) => Self::Text(c.to_string()),
        }
    }
}

/// Convert a written style into engine state.
pub fn style_to_state(style: &StyleDef) -> FramestepResult<State> {
    style
        .iter()
        .map(|(k, v)| Ok((k.clone(), v.to_value()?)))
        .collect()
}

/// One node of the animation tree.
///
/// Serialized externally tagged: `{"all": [..]}`, `{"delay": 30}`, `{"to": {..}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Run children in lockstep until the longest finishes.
    All(Vec<Node>),
    /// Start one item every `delay` frames, overlapping freely.
    Sequence { delay: u64, items: Vec<Node> },
    /// Run a fresh instance of `body` `times` times back to back.
    Loop { times: u64, body: Box<Node> },
    /// Idle for this many frames.
    Delay(u64),
    /// Tween an element from its current style to `target`.
    To {
        element: String,
        target: StyleDef,
        duration: u64,
        #[serde(default = "default_easing")]
        easing: String,
    },
    /// Run children one after another.
    Then(Vec<Node>),
}

fn default_easing() -> String {
    Ease::EaseInOut.name().to_string()
}

impl Program {
    /// Parse and validate a program.
    pub fn from_json_str(s: &str) -> FramestepResult<Self> {
        let program: Self = serde_json::from_str(s)
            .map_err(|e| FramestepError::serde(format!("invalid program json: {e}")))?;
        program.validate()?;
        Ok(program)
    }

    /// Read, parse and validate a program file.
    pub fn from_path(path: impl AsRef<Path>) -> FramestepResult<Self> {
        use anyhow::Context as _;
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read program '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> FramestepResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FramestepError::serde(e.to_string()))
    }

    /// Check everything that would otherwise fail mid-playback.
    ///
    /// All problems are reported together, one per line, prefixed with their `$.path`.
    pub fn validate(&self) -> FramestepResult<()> {
        let mut issues = Vec::new();
        let mut path = vec![String::from("$")];

        if let Err(e) = self.canvas.validate() {
            issues.push(Issue::at(&["$", "canvas"], e.to_string()));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            issues.push(Issue::at(&["$", "fps"], "fps must be non-zero"));
        }
        for (id, style) in &self.elements {
            path.push(String::from("elements"));
            path.push(id.clone());
            check_style(style, &path, &mut issues);
            path.truncate(1);
        }

        path.push(String::from("animation"));
        self.check_node(&self.animation, &mut path, &mut issues);

        if issues.is_empty() {
            return Ok(());
        }
        let msg = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        Err(FramestepError::validation(msg))
    }

    fn check_node(&self, node: &Node, path: &mut Vec<String>, issues: &mut Vec<Issue>) {
        match node {
            Node::All(children) => self.check_children("all", children, path, issues),
            Node::Then(children) => self.check_children("then", children, path, issues),
            Node::Sequence { delay, items } => {
                path.push(String::from("sequence"));
                if *delay == 0 {
                    issues.push(Issue::new(path, "delay", "stagger delay must be > 0"));
                }
                self.check_children("items", items, path, issues);
                path.pop();
            }
            Node::Loop { body, .. } => {
                path.push(String::from("loop"));
                path.push(String::from("body"));
                self.check_node(body, path, issues);
                path.truncate(path.len() - 2);
            }
            Node::Delay(_) => {}
            Node::To {
                element,
                target,
                easing,
                ..
            } => {
                path.push(String::from("to"));
                if !self.elements.contains_key(element) {
                    issues.push(Issue::new(
                        path,
                        "element",
                        format!("unknown element '{element}'"),
                    ));
                }
                if let Err(e) = easing.parse::<Ease>() {
                    issues.push(Issue::new(path, "easing", e.to_string()));
                }
                path.push(String::from("target"));
                check_style(target, path, issues);
                path.truncate(path.len() - 2);
            }
        }
    }

    fn check_children(
        &self,
        field: &str,
        children: &[Node],
        path: &mut Vec<String>,
        issues: &mut Vec<Issue>,
    ) {
        path.push(field.to_string());
        for (i, child) in children.iter().enumerate() {
            path.push(format!("[{i}]"));
            self.check_node(child, path, issues);
            path.pop();
        }
        path.pop();
    }
}

fn check_style(style: &StyleDef, path: &[String], issues: &mut Vec<Issue>) {
    for (key, value) in style {
        if let Err(e) = value.to_value() {
            issues.push(Issue::new(path, key, e.to_string()));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Issue {
    path: String,
    message: String,
}

impl Issue {
    fn new(path: &[String], field: &str, message: impl Into<String>) -> Self {
        Self {
            path: join_path(path.iter().map(String::as_str).chain([field])),
            message: message.into(),
        }
    }

    fn at(path: &[&str], message: impl Into<String>) -> Self {
        Self {
            path: join_path(path.iter().copied()),
            message: message.into(),
        }
    }
}

fn join_path<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    let mut s = String::new();
    for part in parts {
        if !s.is_empty() && !part.starts_with('[') {
            s.push('.');
        }
        s.push_str(part);
    }
    s
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/program/model.rs"]
mod tests;
