//! Adapters - Implementations of port interfaces.
//!
//! - `generative` - generative fallback implementations (mock)
//! - `workout` - active workout stores (in-memory)
//! - `clock` - system and fixed clocks
//! - `pickers` - small-talk response pickers

pub mod clock;
pub mod generative;
pub mod pickers;
pub mod workout;

pub use clock::{FixedClock, SystemClock};
pub use generative::MockGenerativeFallback;
pub use pickers::{picker_for, RandomPicker, RoundRobinPicker, SeededPicker};
pub use workout::InMemoryActiveWorkoutStore;
