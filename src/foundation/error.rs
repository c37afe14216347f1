/// Convenience result type used across framestep.
pub type FramestepResult<T> = Result<T, FramestepError>;

/// Result type returned by sequence pulls and combinator constructors.
pub type AnimResult<T> = FramestepResult<T>;

/// Top-level error taxonomy.
///
/// Engine errors (`UnknownEasingName`, `InvalidDelay`, `Sequence`) are precondition violations
/// surfaced at construction or on the pull that hits them. Composite sequences pass child errors
/// through untouched.
#[derive(thiserror::Error, Debug)]
pub enum FramestepError {
    /// A named easing outside `linear | easeIn | easeOut | easeInOut`.
    #[error("unknown easing function: {name}")]
    UnknownEasingName {
        /// The name that failed to resolve.
        name: String,
    },

    /// A non-positive stagger interval.
    #[error("invalid stagger delay: {frames} (must be a positive frame count)")]
    InvalidDelay {
        /// The rejected interval.
        frames: i64,
    },

    /// Failure reported by a leaf or user-authored sequence while being pulled.
    #[error("sequence error: {0}")]
    Sequence(String),

    /// Invalid user-provided program or option data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a view.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while writing frames to a sink.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramestepError {
    /// Build a [`FramestepError::UnknownEasingName`] value.
    pub fn unknown_easing(name: impl Into<String>) -> Self {
        Self::UnknownEasingName { name: name.into() }
    }

    /// Build a [`FramestepError::Sequence`] value.
    pub fn sequence(msg: impl Into<String>) -> Self {
        Self::Sequence(msg.into())
    }

    /// Build a [`FramestepError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramestepError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FramestepError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`FramestepError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
