//! Intent domain: the deterministic router and everything it reads.
//!
//! - `values` - intents, slots, message context and route results
//! - `registry` / `catalog` - the immutable pattern tables
//! - `scoring` - candidate construction and additive confidence
//! - `router` - selection, clarification and disambiguation
//! - `small_talk` - the gate that runs before any intent pattern
//! - `buttons` - exact-label fast path for UI buttons
//! - `services` - the injectable small-talk response picker

mod catalog;
mod errors;
mod registry;
mod router;
mod scoring;
mod services;
mod small_talk;
mod values;

pub mod buttons;

pub use buttons::{get_button_intent, is_button_press, ButtonIntent};
pub use errors::RegistryError;
pub use registry::{
    ClarificationTemplate, ConfusablePair, IntentDefinition, IntentSpec, LexicalBonus,
    PatternRegistry, RegistryBuilder, SlotExtractor, SlotSpec, SmallTalkCategory, SmallTalkSpec,
    DEFAULT_DISAMBIGUATION_THRESHOLD, DEFAULT_SMALL_TALK_CONFIDENCE,
};
pub use router::{resolve_candidates, route, IntentRouter};
pub use scoring::{
    confidence_for, score_candidates, BASE_CONFIDENCE, CANONICAL_SCREEN_BONUS,
    COMPLETE_SLOTS_BONUS,
};
pub use services::{FirstResponsePicker, ResponsePicker};
pub use small_talk::small_talk_response;
pub use values::{
    slot, ActiveWorkout, ClarificationRequest, DisambiguationOption, DisambiguationRequest,
    IntentCandidate, IntentGuess, IntentId, MessageContext, RouteResult, SlotValue, Slots,
    SmallTalkKind,
};
