//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the intent engine.

mod confidence;
mod errors;
mod screen;

pub use confidence::Confidence;
pub use errors::ValidationError;
pub use screen::Screen;
