//! fitchat - resolve chat messages from stdin
//!
//! Each input line is `SCREEN: message` (for example
//! `WorkoutScreen: bench 185x5`) or a bare message, which is treated as
//! coming from the chat screen. One JSON object is printed per line.

use serde::Serialize;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fitchat::adapters::{picker_for, InMemoryActiveWorkoutStore, MockGenerativeFallback, SystemClock};
use fitchat::application::{Resolution, ResolveMessageCommand, ResolveMessageHandler};
use fitchat::config::{AppConfig, LoggingConfig};
use fitchat::domain::calculators::calculate;
use fitchat::domain::foundation::Screen;
use fitchat::domain::intent::{IntentRouter, RouteResult};

const CLI_USER: &str = "cli";

#[derive(Serialize)]
struct Output<'a> {
    #[serde(flatten)]
    resolution: &'a Resolution,
    #[serde(skip_serializing_if = "Option::is_none")]
    calculated: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config.logging);

    let registry = Arc::new(config.routing.build_registry()?);
    let picker = picker_for(config.routing.small_talk_selection, config.routing.seed);
    let router = IntentRouter::new(registry, picker);

    let handler = ResolveMessageHandler::new(
        router,
        Arc::new(MockGenerativeFallback::new()),
        Arc::new(InMemoryActiveWorkoutStore::new()),
        Arc::new(SystemClock),
    )
    .with_features(config.features.clone())
    .with_fallback_config(config.fallback.clone());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let (screen, message) = parse_line(&line);
        let cmd = ResolveMessageCommand::new(CLI_USER, message, screen.name());

        match handler.handle(cmd).await {
            Ok(resolution) => {
                let output = Output {
                    calculated: calculated(&resolution),
                    resolution: &resolution,
                };
                println!("{}", serde_json::to_string(&output)?);
            }
            Err(err) => {
                error!(error = %err, "Failed to resolve message");
                println!("{}", serde_json::json!({ "error": err.to_string() }));
            }
        }
    }

    Ok(())
}

fn init_tracing(config: &LoggingConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.level.clone().into());

    // stdout carries the JSON results
    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Splits an optional `Screen:` prefix off a line.
fn parse_line(line: &str) -> (Screen, &str) {
    if let Some((prefix, rest)) = line.split_once(':') {
        if let Some(screen) = Screen::from_name(prefix.trim()) {
            return (screen, rest.trim());
        }
    }
    (Screen::Chat, line.trim())
}

fn calculated(resolution: &Resolution) -> Option<f64> {
    match resolution {
        Resolution::Routed(RouteResult::Resolved { intent, slots, .. }) => calculate(*intent, slots),
        Resolution::Detected(guess) => calculate(guess.intent, &guess.parameters),
        _ => None,
    }
}
