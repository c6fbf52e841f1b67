//! Small-talk gate.
//!
//! Runs before any intent pattern so that "thanks" or "hey" can never be
//! read as a domain request, and a domain request can never be eaten by a
//! loose greeting pattern (greetings must be the whole message).

use super::registry::PatternRegistry;
use super::services::ResponsePicker;
use super::values::RouteResult;

/// `Some(SmallTalk)` when normalized `text` is small talk.
pub fn small_talk_response(
    registry: &PatternRegistry,
    picker: &dyn ResponsePicker,
    text: &str,
) -> Option<RouteResult> {
    let category = registry.small_talk(text)?;
    let responses = category.responses;
    let index = picker.pick(category.kind, responses.len()) % responses.len();

    Some(RouteResult::SmallTalk {
        kind: category.kind,
        response: responses[index].to_string(),
        confidence: registry.small_talk_confidence(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intent::services::FirstResponsePicker;
    use crate::domain::intent::values::SmallTalkKind;

    struct Fixed(usize);

    impl ResponsePicker for Fixed {
        fn pick(&self, _kind: SmallTalkKind, _len: usize) -> usize {
            self.0
        }
    }

    fn kind_of(text: &str) -> Option<SmallTalkKind> {
        let registry = PatternRegistry::builtin().unwrap();
        match small_talk_response(&registry, &FirstResponsePicker, text)? {
            RouteResult::SmallTalk { kind, .. } => Some(kind),
            _ => None,
        }
    }

    #[test]
    fn recognizes_categories() {
        assert_eq!(kind_of("hey"), Some(SmallTalkKind::Greeting));
        assert_eq!(kind_of("good morning!"), Some(SmallTalkKind::Greeting));
        assert_eq!(kind_of("how are you"), Some(SmallTalkKind::Greeting));
        assert_eq!(kind_of("thanks for the workout"), Some(SmallTalkKind::Thanks));
        assert_eq!(kind_of("cool"), Some(SmallTalkKind::Interjection));
        assert_eq!(kind_of("bye!"), Some(SmallTalkKind::Farewell));
        assert_eq!(kind_of("so what can you do"), Some(SmallTalkKind::Capabilities));
    }

    #[test]
    fn greeting_must_be_whole_message() {
        assert_eq!(kind_of("hey build me a push workout"), None);
        assert_eq!(kind_of("cool, log bench 185x5"), None);
    }

    #[test]
    fn domain_words_are_not_small_talk() {
        assert_eq!(kind_of("bench 185x5"), None);
        assert_eq!(kind_of(""), None);
    }

    #[test]
    fn picker_index_wraps() {
        let registry = PatternRegistry::builtin().unwrap();
        let first = small_talk_response(&registry, &Fixed(0), "hey").unwrap();
        let wrapped = small_talk_response(&registry, &Fixed(3), "hey").unwrap();
        assert_eq!(first, wrapped);
    }

    #[test]
    fn confidence_is_fixed() {
        let registry = PatternRegistry::builtin().unwrap();
        match small_talk_response(&registry, &FirstResponsePicker, "thanks").unwrap() {
            RouteResult::SmallTalk { confidence, .. } => assert_eq!(confidence.value(), 0.95),
            other => panic!("expected small talk, got {:?}", other),
        }
    }
}
