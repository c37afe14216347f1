use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::foundation::error::{AnimResult, FramestepError};

/// An easing curve: maps linear progress to eased progress.
///
/// Output is never clamped, so overshooting curves (back, elastic) work as-is.
pub type EasingFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// The canonical named easing curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Ease {
    pub const ALL: [Ease; 4] = [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut];

    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "easeIn",
            Self::EaseOut => "easeOut",
            Self::EaseInOut => "easeInOut",
        }
    }

    pub fn function(self) -> EasingFn {
        Arc::new(move |t| self.apply(t))
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = FramestepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| FramestepError::unknown_easing(s))
    }
}

/// Either a fixed name or a caller-supplied curve.
#[derive(Clone)]
pub enum EasingSpec {
    Named(String),
    Custom(EasingFn),
}

impl fmt::Debug for EasingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<&str> for EasingSpec {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<String> for EasingSpec {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<Ease> for EasingSpec {
    fn from(ease: Ease) -> Self {
        Self::Named(ease.name().to_owned())
    }
}

impl From<EasingFn> for EasingSpec {
    fn from(f: EasingFn) -> Self {
        Self::Custom(f)
    }
}

/// Resolve an easing spec into a callable curve.
///
/// Custom curves come back as the very same `Arc`. Unknown names fail with
/// [`FramestepError::UnknownEasingName`].
pub fn resolve(spec: impl Into<EasingSpec>) -> AnimResult<EasingFn> {
    match spec.into() {
        EasingSpec::Custom(f) => Ok(f),
        EasingSpec::Named(name) => Ok(name.parse::<Ease>()?.function()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
