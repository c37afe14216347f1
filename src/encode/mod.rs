//! Encoding sinks.
//!
//! Sinks consume rendered frames in tick order and are driven by [`crate::session::recorder::record`].

/// `ffmpeg`-based sink (VP8 WebM via system `ffmpeg`).
pub mod ffmpeg;
/// Frame sink trait and the in-memory sink.
pub mod sink;
