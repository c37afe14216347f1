//! Drivers that step a root sequence to completion.

/// Frame-paced stepping of a root sequence.
pub mod player;
/// Rendering each tick of a view into a frame sink.
pub mod recorder;
