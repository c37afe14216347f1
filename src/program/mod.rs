//! Declarative animation programs.
//!
//! A program is a JSON document naming a canvas, a set of styled elements and an animation tree.
//! [`model::Program::instantiate`] turns it into a live [`crate::View`] plus a root sequence.

/// Node tree lowering into engine sequences.
pub mod compile;
/// Serde model, loading and validation.
pub mod model;
