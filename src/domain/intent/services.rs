//! Domain services for the intent engine.

use super::values::SmallTalkKind;

/// Chooses which canned small-talk response to send.
///
/// The only place the engine allows non-determinism; decision fields
/// (intent, slots, confidence) never depend on it. Implementations may
/// return any index, the caller reduces it modulo `len`.
pub trait ResponsePicker: Send + Sync {
    fn pick(&self, kind: SmallTalkKind, len: usize) -> usize;
}

/// Always the first response. Handy where output must be stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstResponsePicker;

impl ResponsePicker for FirstResponsePicker {
    fn pick(&self, _kind: SmallTalkKind, _len: usize) -> usize {
        0
    }
}
