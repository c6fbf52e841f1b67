//! Active Workout Store Port
//!
//! Supplies "what is the user doing right now" when the caller did not pass
//! it in the message context. Read-only from the engine's point of view.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::intent::ActiveWorkout;

#[async_trait]
pub trait ActiveWorkoutStore: Send + Sync {
    /// The user's in-progress workout, if any.
    async fn active_workout(&self, user_id: &str) -> Result<Option<ActiveWorkout>, WorkoutStoreError>;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkoutStoreError {
    #[error("Workout store unavailable: {0}")]
    Unavailable(String),
}
