//! Integration tests for the message resolution pipeline.
//!
//! Wires the handler the way the binary does, from `AppConfig`, with
//! in-memory adapters and a fixed clock.

use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;

use fitchat::adapters::{picker_for, FixedClock, InMemoryActiveWorkoutStore, MockGenerativeFallback};
use fitchat::application::{Resolution, ResolveMessageCommand, ResolveMessageError, ResolveMessageHandler};
use fitchat::config::AppConfig;
use fitchat::domain::intent::{slot, ActiveWorkout, IntentId, IntentRouter, MessageContext, RouteResult};
use fitchat::ports::GenerativeError;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
}

struct Harness {
    handler: ResolveMessageHandler,
    fallback: MockGenerativeFallback,
    workouts: Arc<InMemoryActiveWorkoutStore>,
}

fn harness(config: AppConfig, fallback: MockGenerativeFallback) -> Harness {
    let registry = Arc::new(config.routing.build_registry().unwrap());
    let picker = picker_for(config.routing.small_talk_selection, config.routing.seed);
    let workouts = Arc::new(InMemoryActiveWorkoutStore::new());

    let handler = ResolveMessageHandler::new(
        IntentRouter::new(registry, picker),
        Arc::new(fallback.clone()),
        workouts.clone(),
        Arc::new(FixedClock(today())),
    )
    .with_features(config.features.clone())
    .with_fallback_config(config.fallback.clone());

    Harness {
        handler,
        fallback,
        workouts,
    }
}

fn default_harness() -> Harness {
    harness(AppConfig::default(), MockGenerativeFallback::new())
}

async fn resolve(h: &Harness, message: &str, screen: &str) -> Resolution {
    h.handler
        .handle(ResolveMessageCommand::new("athlete-1", message, screen))
        .await
        .unwrap()
}

// =============================================================================
// Pipeline order
// =============================================================================

#[tokio::test]
async fn test_each_stage_answers_in_turn() {
    let h = default_harness();

    assert!(matches!(resolve(&h, "Push Day", "HomeScreen").await, Resolution::Button(_)));
    assert!(matches!(
        resolve(&h, "good morning", "WorkoutScreen").await,
        Resolution::Routed(RouteResult::SmallTalk { .. })
    ));
    assert!(matches!(
        resolve(&h, "what's my squat PR", "ProgressScreen").await,
        Resolution::Detected(_)
    ));
    assert!(matches!(
        resolve(&h, "why are my knees sore", "ChatScreen").await,
        Resolution::Generative { .. }
    ));
    assert_eq!(h.fallback.call_count(), 1);
}

#[tokio::test]
async fn test_router_answers_when_detectors_disabled() {
    let mut config = AppConfig::default();
    config.features.enable_screen_detectors = false;
    let h = harness(config, MockGenerativeFallback::new());

    match resolve(&h, "what's my 1rm with 225x5", "ProgressScreen").await {
        Resolution::Routed(RouteResult::Resolved { intent, .. }) => {
            assert_eq!(intent, IntentId::CalculateOneRepMax)
        }
        other => panic!("expected routed result, got {:?}", other),
    }
}

#[tokio::test]
async fn test_caller_context_wins_over_store() {
    let mut config = AppConfig::default();
    config.features.enable_screen_detectors = false;
    let h = harness(config, MockGenerativeFallback::new());

    h.workouts
        .start(
            "athlete-1",
            ActiveWorkout {
                current_exercise: Some("squat".into()),
                last_weight: Some(225.0),
                last_reps: Some(5),
            },
        )
        .await;
    let supplied = MessageContext::on(today()).with_active_workout(ActiveWorkout {
        current_exercise: Some("deadlift".into()),
        last_weight: None,
        last_reps: None,
    });

    let resolution = h
        .handler
        .handle(ResolveMessageCommand::new("athlete-1", "315x3", "WorkoutScreen").with_context(supplied))
        .await
        .unwrap();

    match resolution {
        Resolution::Routed(RouteResult::Resolved { slots, .. }) => {
            assert_eq!(slots[slot::EXERCISE].as_text(), Some("deadlift"));
        }
        other => panic!("expected resolved, got {:?}", other),
    }
}

// =============================================================================
// Fallback
// =============================================================================

#[tokio::test]
async fn test_fallback_disabled_by_config() {
    let mut config = AppConfig::default();
    config.fallback.enabled = false;
    let h = harness(config, MockGenerativeFallback::new());

    let resolution = resolve(&h, "why are my knees sore", "ChatScreen").await;

    assert_eq!(resolution, Resolution::Routed(RouteResult::unresolved()));
    assert_eq!(h.fallback.call_count(), 0);
}

#[tokio::test]
async fn test_rate_limit_is_reported() {
    let h = harness(
        AppConfig::default(),
        MockGenerativeFallback::new().with_error(GenerativeError::RateLimited { retry_after_secs: 30 }),
    );

    let err = h
        .handler
        .handle(ResolveMessageCommand::new("athlete-1", "why are my knees sore", "ChatScreen"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResolveMessageError::FallbackFailed(GenerativeError::RateLimited { retry_after_secs: 30 })
    ));
}

#[tokio::test]
async fn test_slow_fallback_times_out() {
    let mut config = AppConfig::default();
    config.fallback.timeout_ms = 25;
    let h = harness(
        config,
        MockGenerativeFallback::new().with_delay(Duration::from_millis(500)),
    );

    let err = h
        .handler
        .handle(ResolveMessageCommand::new("athlete-1", "why are my knees sore", "ChatScreen"))
        .await
        .unwrap_err();

    assert_eq!(err, ResolveMessageError::FallbackTimedOut { timeout_ms: 25 });
    assert_eq!(err.to_string(), "Generative fallback timed out after 25ms");
}
