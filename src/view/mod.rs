//! Retained elements that sequences animate.
//!
//! This layer only consumes the engine's pull protocol; the engine never sees it.

/// Element handles and their `to()` animation.
pub mod element;
/// The view container.
pub mod model;
