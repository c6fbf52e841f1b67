//! Generative fallback adapters.

mod mock;

pub use mock::MockGenerativeFallback;
