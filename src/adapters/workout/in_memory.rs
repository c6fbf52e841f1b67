//! In-memory active workout store.
//!
//! Useful for development, tests and the CLI. Does not persist across restarts.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::intent::ActiveWorkout;
use crate::ports::{ActiveWorkoutStore, WorkoutStoreError};

/// Active workouts keyed by user id.
#[derive(Debug, Default)]
pub struct InMemoryActiveWorkoutStore {
    workouts: RwLock<HashMap<String, ActiveWorkout>>,
}

impl InMemoryActiveWorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn start(&self, user_id: impl Into<String>, workout: ActiveWorkout) {
        self.workouts.write().await.insert(user_id.into(), workout);
    }

    pub async fn finish(&self, user_id: &str) -> Option<ActiveWorkout> {
        self.workouts.write().await.remove(user_id)
    }
}

#[async_trait]
impl ActiveWorkoutStore for InMemoryActiveWorkoutStore {
    async fn active_workout(&self, user_id: &str) -> Result<Option<ActiveWorkout>, WorkoutStoreError> {
        Ok(self.workouts.read().await.get(user_id).cloned())
    }
}
