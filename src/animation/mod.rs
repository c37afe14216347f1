//! The scheduling engine: easing, tweens, the pull protocol and the combinators built on it.

pub mod ease;
pub mod ops;
pub mod seq;
pub mod tween;
pub mod value;
