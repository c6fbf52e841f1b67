//! Intent Router
//!
//! Normalize, small-talk gate, score candidates, then choose between
//! resolving, asking for clarification, offering disambiguation, or
//! deferring to the generative fallback.

use std::sync::Arc;
use tracing::debug;

use super::registry::PatternRegistry;
use super::scoring::score_candidates;
use super::services::ResponsePicker;
use super::small_talk::small_talk_response;
use super::values::{
    DisambiguationOption, DisambiguationRequest, IntentCandidate, MessageContext, RouteResult,
};
use crate::domain::extraction::normalize;

/// Router bound to a registry and a small-talk picker.
#[derive(Clone)]
pub struct IntentRouter {
    registry: Arc<PatternRegistry>,
    picker: Arc<dyn ResponsePicker>,
}

impl IntentRouter {
    pub fn new(registry: Arc<PatternRegistry>, picker: Arc<dyn ResponsePicker>) -> Self {
        Self { registry, picker }
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    pub fn route(&self, message: &str, screen: &str, context: &MessageContext) -> RouteResult {
        route(&self.registry, self.picker.as_ref(), message, screen, context)
    }

    /// Only the small-talk gate, for callers that run detectors in between.
    pub fn small_talk(&self, message: &str) -> Option<RouteResult> {
        small_talk_response(&self.registry, self.picker.as_ref(), &normalize(message))
    }
}

/// Routes one message. Never fails; "no idea" is [`RouteResult::Unresolved`].
pub fn route(
    registry: &PatternRegistry,
    picker: &dyn ResponsePicker,
    message: &str,
    screen: &str,
    context: &MessageContext,
) -> RouteResult {
    let text = normalize(message);

    if let Some(small_talk) = small_talk_response(registry, picker, &text) {
        debug!(screen, "Small-talk gate matched");
        return small_talk;
    }

    let candidates = score_candidates(registry, &text, screen, context);
    for candidate in &candidates {
        debug!(
            intent = %candidate.intent,
            confidence = %candidate.confidence,
            missing = ?candidate.missing_slots,
            "Scored candidate"
        );
    }

    resolve_candidates(registry, candidates)
}

/// Picks the outcome for a set of scored candidates.
///
/// Exposed separately so selection can be exercised with hand-made scores.
pub fn resolve_candidates(
    registry: &PatternRegistry,
    mut candidates: Vec<IntentCandidate>,
) -> RouteResult {
    if candidates.is_empty() {
        return RouteResult::unresolved();
    }

    // Stable: ties keep registry order.
    candidates.sort_by(|a, b| b.confidence.value().total_cmp(&a.confidence.value()));

    let mut ranked = candidates.into_iter();
    let top = match ranked.next() {
        Some(top) => top,
        None => return RouteResult::unresolved(),
    };

    if let Some(second) = ranked.next() {
        let close = top.confidence.gap(second.confidence) < registry.disambiguation_threshold();
        if close {
            if let Some(pair) = registry.confusable_pair(top.intent, second.intent) {
                debug!(first = %top.intent, second = %second.intent, "Disambiguating confusable pair");
                let options = [&top, &second]
                    .into_iter()
                    .map(|c| DisambiguationOption {
                        label: pair.label_for(c.intent).to_string(),
                        intent: c.intent,
                        data: c.slots.clone(),
                    })
                    .collect();
                return RouteResult::Disambiguate(DisambiguationRequest {
                    prompt: pair.prompt.to_string(),
                    options,
                });
            }
        }
    }

    if !top.missing_slots.is_empty() {
        if let Some(template) = registry.clarification_for(top.intent) {
            debug!(intent = %top.intent, missing = ?top.missing_slots, "Asking for clarification");
            return RouteResult::Clarify(template.to_request(top.missing_slots));
        }
    }

    RouteResult::Resolved {
        intent: top.intent,
        slots: top.slots,
        confidence: top.confidence,
    }
}
