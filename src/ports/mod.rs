//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the engine and the outside world. Adapters implement these ports.
//!
//! - `GenerativeFallback` - free-form answers for unresolved messages
//! - `ActiveWorkoutStore` - in-progress workout state for context defaults
//! - `Clock` - today's date

mod active_workout_store;
mod clock;
mod generative_fallback;

pub use active_workout_store::{ActiveWorkoutStore, WorkoutStoreError};
pub use clock::Clock;
pub use generative_fallback::{GenerativeError, GenerativeFallback, GenerativeReply, GenerativeRequest};
