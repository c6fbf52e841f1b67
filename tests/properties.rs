//! Property tests for the router's invariants.

use chrono::NaiveDate;
use proptest::prelude::*;

use fitchat::domain::extraction::normalize;
use fitchat::domain::foundation::{Confidence, Screen};
use fitchat::domain::intent::{
    route, score_candidates, FirstResponsePicker, MessageContext, PatternRegistry, RouteResult,
    SmallTalkKind,
};

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn ctx() -> MessageContext {
    MessageContext::on(NaiveDate::from_ymd_opt(2024, 5, 15).unwrap())
}

fn arb_screen() -> impl Strategy<Value = &'static str> {
    prop::sample::select(Screen::ALL.iter().map(|s| s.name()).collect::<Vec<_>>())
}

const VOCABULARY: &[&str] = &[
    "bench", "squat", "185x5", "1rm", "80%", "of", "create", "start", "workout", "program",
    "meal", "push", "day", "tuesday", "4 days a week",
];

/// Mostly fitness-flavoured words so that patterns actually fire.
fn arb_message() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        3 => prop::sample::select(VOCABULARY).prop_map(String::from),
        1 => "[a-z]{1,8}",
        1 => "[0-9]{1,4}",
    ];
    prop::collection::vec(word, 0..12).prop_map(|words| words.join(" "))
}

proptest! {
    /// Every candidate confidence lies in [0, 1], for any input.
    #[test]
    fn candidate_confidence_in_range(message in arb_message(), screen in arb_screen()) {
        let registry = PatternRegistry::builtin().unwrap();
        for candidate in score_candidates(&registry, &normalize(&message), screen, &ctx()) {
            let value = candidate.confidence.value();
            prop_assert!((0.0..=1.0).contains(&value), "{} scored {}", candidate.intent, value);
        }
    }

    /// Arbitrary unicode, including very long strings, never breaks the router.
    #[test]
    fn arbitrary_text_routes(message in ".{0,400}", screen in arb_screen()) {
        let registry = PatternRegistry::builtin().unwrap();
        let result = route(&registry, &FirstResponsePicker, &message, screen, &ctx());
        match result {
            RouteResult::Resolved { confidence, .. } | RouteResult::SmallTalk { confidence, .. } => {
                prop_assert!((0.0..=1.0).contains(&confidence.value()));
            }
            _ => {}
        }
    }

    /// A required slot is either filled or missing, never both.
    #[test]
    fn filled_slots_are_never_missing(message in arb_message(), screen in arb_screen()) {
        let registry = PatternRegistry::builtin().unwrap();
        for candidate in score_candidates(&registry, &normalize(&message), screen, &ctx()) {
            for missing in &candidate.missing_slots {
                prop_assert!(
                    !candidate.slots.contains_key(missing),
                    "{} lists {} as both filled and missing",
                    candidate.intent,
                    missing
                );
            }
        }
    }

    /// Same input, same output.
    #[test]
    fn routing_is_idempotent(message in arb_message(), screen in arb_screen()) {
        let registry = PatternRegistry::builtin().unwrap();
        let first = route(&registry, &FirstResponsePicker, &message, screen, &ctx());
        let second = route(&registry, &FirstResponsePicker, &message, screen, &ctx());
        prop_assert_eq!(first, second);
    }

    /// Thanks outranks whatever domain words follow it.
    #[test]
    fn thanks_always_wins(rest in arb_message(), screen in arb_screen()) {
        let registry = PatternRegistry::builtin().unwrap();
        let message = format!("thanks {}", rest);
        match route(&registry, &FirstResponsePicker, &message, screen, &ctx()) {
            RouteResult::SmallTalk { kind, .. } => prop_assert_eq!(kind, SmallTalkKind::Thanks),
            other => prop_assert!(false, "expected small talk, got {:?}", other),
        }
    }

    /// Confidence construction clamps rather than fails.
    #[test]
    fn confidence_clamps(raw in -10.0f64..10.0) {
        let value = Confidence::new(raw).value();
        prop_assert!((0.0..=1.0).contains(&value));
    }
}
