//! ResolveMessageHandler - Turn one chat message into a structured outcome
//!
//! Runs the resolvers cheapest-first and stops at the first that commits:
//!
//! 1. exact button label
//! 2. context completion (today, active workout)
//! 3. small-talk gate
//! 4. the active screen's detector
//! 5. the pattern router
//! 6. the generative fallback, bounded by a timeout
//!
//! Everything before step 6 is pure and cannot fail. Only the fallback
//! produces errors.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{FallbackConfig, FeatureFlags};
use crate::domain::detectors::detect_for_screen;
use crate::domain::intent::{
    get_button_intent, ButtonIntent, IntentGuess, IntentRouter, MessageContext, RouteResult,
};
use crate::ports::{
    ActiveWorkoutStore, Clock, GenerativeError, GenerativeFallback, GenerativeReply,
    GenerativeRequest,
};

/// Command to resolve one user message
#[derive(Debug, Clone)]
pub struct ResolveMessageCommand {
    pub request_id: Uuid,
    pub user_id: String,
    pub message: String,
    pub screen: String,
    pub context: MessageContext,
}

impl ResolveMessageCommand {
    pub fn new(
        user_id: impl Into<String>,
        message: impl Into<String>,
        screen: impl Into<String>,
    ) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            user_id: user_id.into(),
            message: message.into(),
            screen: screen.into(),
            context: MessageContext::default(),
        }
    }

    pub fn with_context(mut self, context: MessageContext) -> Self {
        self.context = context;
        self
    }
}

/// Which stage produced the answer, and what it said.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Resolution {
    Button(ButtonIntent),
    Detected(IntentGuess),
    Routed(RouteResult),
    Generative { reply: GenerativeReply },
}

impl Resolution {
    pub fn stage(&self) -> &'static str {
        match self {
            Resolution::Button(_) => "button",
            Resolution::Detected(_) => "detector",
            Resolution::Routed(_) => "router",
            Resolution::Generative { .. } => "generative",
        }
    }
}

/// Error type for resolving a message
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResolveMessageError {
    #[error("Generative fallback failed: {0}")]
    FallbackFailed(#[from] GenerativeError),

    #[error("Generative fallback timed out after {timeout_ms}ms")]
    FallbackTimedOut { timeout_ms: u64 },
}

/// Handler for resolving chat messages
pub struct ResolveMessageHandler {
    router: IntentRouter,
    fallback: Arc<dyn GenerativeFallback>,
    workouts: Arc<dyn ActiveWorkoutStore>,
    clock: Arc<dyn Clock>,
    features: FeatureFlags,
    fallback_config: FallbackConfig,
}

impl ResolveMessageHandler {
    pub fn new(
        router: IntentRouter,
        fallback: Arc<dyn GenerativeFallback>,
        workouts: Arc<dyn ActiveWorkoutStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            router,
            fallback,
            workouts,
            clock,
            features: FeatureFlags::default(),
            fallback_config: FallbackConfig::default(),
        }
    }

    pub fn with_features(mut self, features: FeatureFlags) -> Self {
        self.features = features;
        self
    }

    pub fn with_fallback_config(mut self, config: FallbackConfig) -> Self {
        self.fallback_config = config;
        self
    }

    pub async fn handle(
        &self,
        cmd: ResolveMessageCommand,
    ) -> Result<Resolution, ResolveMessageError> {
        let resolution = self.resolve(cmd).await?;
        info!(stage = resolution.stage(), "Message resolved");
        Ok(resolution)
    }

    async fn resolve(&self, cmd: ResolveMessageCommand) -> Result<Resolution, ResolveMessageError> {
        // 1. Button labels bypass everything
        if self.features.enable_button_fast_path {
            if let Some(button) = get_button_intent(&cmd.message) {
                return Ok(Resolution::Button(button));
            }
        }

        // 2. Fill in what the caller left out
        let context = self.complete_context(&cmd.user_id, cmd.context.clone()).await;

        // 3. Small talk wins over every domain rule
        if let Some(small_talk) = self.router.small_talk(&cmd.message) {
            return Ok(Resolution::Routed(small_talk));
        }

        // 4. Screen detector
        if self.features.enable_screen_detectors {
            if let Some(guess) = detect_for_screen(&cmd.message, &cmd.screen, &context) {
                return Ok(Resolution::Detected(guess));
            }
        }

        // 5. Router
        let routed = self.router.route(&cmd.message, &cmd.screen, &context);
        if !routed.is_unresolved() {
            return Ok(Resolution::Routed(routed));
        }

        // 6. Generative fallback
        if !self.fallback_config.enabled {
            debug!("Generative fallback disabled");
            return Ok(Resolution::Routed(routed));
        }
        let request = GenerativeRequest::new(cmd.request_id, cmd.message, cmd.screen, context);
        self.ask_fallback(request).await
    }

    async fn complete_context(&self, user_id: &str, mut context: MessageContext) -> MessageContext {
        if context.today.is_none() {
            context.today = Some(self.clock.today());
        }

        if context.active_workout.is_none() {
            match self.workouts.active_workout(user_id).await {
                Ok(workout) => context.active_workout = workout,
                Err(err) => warn!(user_id, error = %err, "Active workout lookup failed"),
            }
        }

        context
    }

    async fn ask_fallback(&self, request: GenerativeRequest) -> Result<Resolution, ResolveMessageError> {
        let request_id = request.request_id;
        let timeout_ms = self.fallback_config.timeout_ms;

        match tokio::time::timeout(self.fallback_config.timeout(), self.fallback.respond(request)).await {
            Ok(Ok(reply)) => Ok(Resolution::Generative { reply }),
            Ok(Err(err)) => {
                warn!(%request_id, error = %err, retryable = err.is_retryable(), "Generative fallback failed");
                Err(ResolveMessageError::FallbackFailed(err))
            }
            Err(_) => {
                warn!(%request_id, timeout_ms, "Generative fallback timed out");
                Err(ResolveMessageError::FallbackTimedOut { timeout_ms })
            }
        }
    }
}
