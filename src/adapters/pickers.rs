//! Small-talk response pickers.
//!
//! `RandomPicker` is the production default. `RoundRobinPicker` and
//! `SeededPicker` give repeatable output for tests and demos.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::config::SmallTalkSelection;
use crate::domain::intent::{ResponsePicker, SmallTalkKind};

/// Thread-local RNG on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl ResponsePicker for RandomPicker {
    fn pick(&self, _kind: SmallTalkKind, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Cycles through responses, shared across categories.
#[derive(Debug, Default)]
pub struct RoundRobinPicker {
    next: AtomicUsize,
}

impl RoundRobinPicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponsePicker for RoundRobinPicker {
    fn pick(&self, _kind: SmallTalkKind, len: usize) -> usize {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        if len == 0 {
            0
        } else {
            n % len
        }
    }
}

/// Random but reproducible from a seed.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ResponsePicker for SeededPicker {
    fn pick(&self, _kind: SmallTalkKind, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..len)
    }
}

/// Picker for the configured selection mode.
pub fn picker_for(selection: SmallTalkSelection, seed: u64) -> Arc<dyn ResponsePicker> {
    match selection {
        SmallTalkSelection::Random => Arc::new(RandomPicker),
        SmallTalkSelection::RoundRobin => Arc::new(RoundRobinPicker::new()),
        SmallTalkSelection::Seeded => Arc::new(SeededPicker::new(seed)),
    }
}
