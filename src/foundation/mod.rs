/// Frame indices, frame rates and canvas dimensions.
pub mod core;
/// Error taxonomy and result aliases.
pub mod error;
