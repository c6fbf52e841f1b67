//! Mock generative fallback for testing.
//!
//! - Scripted replies, consumed in order
//! - Simulated latency for timeout testing
//! - Error injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let fallback = MockGenerativeFallback::new()
//!     .with_reply("Try a deload week.")
//!     .with_delay(Duration::from_millis(50));
//!
//! let reply = fallback.respond(request).await?;
//! assert_eq!(reply.content, "Try a deload week.");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{GenerativeError, GenerativeFallback, GenerativeReply, GenerativeRequest};

const MOCK_MODEL: &str = "mock-generative";

#[derive(Debug, Clone)]
enum Scripted {
    Reply(String),
    Error(GenerativeError),
}

/// Configurable stand-in for the generative service.
#[derive(Debug, Clone, Default)]
pub struct MockGenerativeFallback {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<GenerativeRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockGenerativeFallback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, content: impl Into<String>) -> Self {
        lock(&self.script).push_back(Scripted::Reply(content.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: GenerativeError) -> Self {
        lock(&self.script).push_back(Scripted::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn calls(&self) -> Vec<GenerativeRequest> {
        lock(&self.calls).clone()
    }

    fn next(&self) -> Scripted {
        lock(&self.script)
            .pop_front()
            .unwrap_or_else(|| Scripted::Reply("Mock reply".to_string()))
    }
}

#[async_trait]
impl GenerativeFallback for MockGenerativeFallback {
    async fn respond(&self, request: GenerativeRequest) -> Result<GenerativeReply, GenerativeError> {
        lock(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next() {
            Scripted::Reply(content) => Ok(GenerativeReply::new(content, MOCK_MODEL)),
            Scripted::Error(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intent::MessageContext;
    use uuid::Uuid;

    fn request(text: &str) -> GenerativeRequest {
        GenerativeRequest::new(Uuid::new_v4(), text, "ChatScreen", MessageContext::default())
    }

    #[tokio::test]
    async fn replies_in_order_then_default() {
        let fallback = MockGenerativeFallback::new().with_reply("one").with_reply("two");
        assert_eq!(fallback.respond(request("a")).await.unwrap().content, "one");
        assert_eq!(fallback.respond(request("b")).await.unwrap().content, "two");
        assert_eq!(fallback.respond(request("c")).await.unwrap().content, "Mock reply");
        assert_eq!(fallback.call_count(), 3);
    }

    #[tokio::test]
    async fn injected_errors_surface() {
        let fallback = MockGenerativeFallback::new().with_error(GenerativeError::unavailable("down"));
        let err = fallback.respond(request("a")).await.unwrap_err();
        assert_eq!(err, GenerativeError::unavailable("down"));
    }

    #[tokio::test]
    async fn records_requests() {
        let fallback = MockGenerativeFallback::new();
        fallback.respond(request("why am i sore")).await.unwrap();
        assert_eq!(fallback.calls()[0].message, "why am i sore");
    }
}
