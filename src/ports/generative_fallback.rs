//! Generative Fallback Port - the model that answers what the rules cannot.
//!
//! The engine only calls this port for messages that routed to
//! `Unresolved { fallback_to_generative: true }`. Implementations wrap an
//! LLM provider; the engine never sees provider details.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::intent::MessageContext;

/// Port for the free-form answer path.
#[async_trait]
pub trait GenerativeFallback: Send + Sync {
    /// Produce a reply for a message no rule could handle.
    async fn respond(&self, request: GenerativeRequest) -> Result<GenerativeReply, GenerativeError>;
}

/// What the fallback gets to work with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerativeRequest {
    pub request_id: Uuid,
    /// Original, un-normalized message text.
    pub message: String,
    pub screen: String,
    pub context: MessageContext,
}

impl GenerativeRequest {
    pub fn new(
        request_id: Uuid,
        message: impl Into<String>,
        screen: impl Into<String>,
        context: MessageContext,
    ) -> Self {
        Self {
            request_id,
            message: message.into(),
            screen: screen.into(),
            context,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerativeReply {
    pub content: String,
    /// Model or provider that produced the reply.
    pub model: String,
}

impl GenerativeReply {
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: model.into(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenerativeError {
    #[error("Generative service unavailable: {0}")]
    Unavailable(String),

    #[error("Rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GenerativeError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        GenerativeError::Unavailable(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        GenerativeError::Network(message.into())
    }

    /// Whether the same request might succeed later.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GenerativeError::Unavailable(_)
                | GenerativeError::RateLimited { .. }
                | GenerativeError::Network(_)
        )
    }
}
