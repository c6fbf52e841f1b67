//! Exercise-name extraction over a small controlled vocabulary.
//!
//! Names are located by adjacency to a `<weight>x<reps>` hit: the tokens right
//! before it are tried first, then the tokens right after it. A side hits when
//! its candidate and a vocabulary term contain one another.

use super::numbers::SetMatch;
use super::text::{contains_word, tokens};

/// Known exercises, in match priority order.
///
/// Short canonical names come first so that "bench" wins over "bench press".
pub const EXERCISE_VOCABULARY: &[&str] = &[
    "bench",
    "squat",
    "deadlift",
    "overhead press",
    "ohp",
    "row",
    "pull up",
    "pullup",
    "chin up",
    "dip",
    "curl",
    "lunge",
    "leg press",
    "hip thrust",
    "press",
];

/// Filler tokens skipped between an exercise name and its numbers.
const FILLERS: &[&str] = &["at", "for", "of", "with", "on", "x", "reps", "rep", "did", "got", "hit"];

const MIN_CANDIDATE_LEN: usize = 3;
const CANDIDATE_TOKENS: usize = 2;

/// Exercise adjacent to a weight-by-reps match, preceding side first.
pub fn exercise_near_set(text: &str, set: &SetMatch) -> Option<&'static str> {
    let before = text.get(..set.start).unwrap_or("");
    let after = text.get(set.end..).unwrap_or("");

    preceding_candidate(before)
        .and_then(|c| match_vocabulary(&c))
        .or_else(|| following_candidate(after).and_then(|c| match_vocabulary(&c)))
}

/// Word-bounded scan of the whole message, plural forms included.
pub fn find_exercise_mention(text: &str) -> Option<&'static str> {
    EXERCISE_VOCABULARY.iter().copied().find(|term| {
        contains_word(text, term) || contains_word(text, &format!("{}s", term))
    })
}

/// Bidirectional containment: candidate ⊂ term or term ⊂ candidate.
pub fn match_vocabulary(candidate: &str) -> Option<&'static str> {
    let candidate = candidate.trim();
    if candidate.len() < MIN_CANDIDATE_LEN {
        return None;
    }
    EXERCISE_VOCABULARY
        .iter()
        .copied()
        .find(|term| candidate.contains(term) || term.contains(candidate))
}

fn preceding_candidate(before: &str) -> Option<String> {
    let mut toks = tokens(before);
    while toks.last().is_some_and(|t| FILLERS.contains(t)) {
        toks.pop();
    }
    if toks.is_empty() {
        return None;
    }
    let from = toks.len().saturating_sub(CANDIDATE_TOKENS);
    Some(toks[from..].join(" "))
}

fn following_candidate(after: &str) -> Option<String> {
    let toks: Vec<&str> = tokens(after)
        .into_iter()
        .skip_while(|t| FILLERS.contains(t))
        .take(CANDIDATE_TOKENS)
        .collect();
    if toks.is_empty() {
        return None;
    }
    Some(toks.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::extraction::numbers::find_weight_by_reps;

    fn near(text: &str) -> Option<&'static str> {
        let set = find_weight_by_reps(text)?;
        exercise_near_set(text, &set)
    }

    #[test]
    fn preceding_side_wins() {
        assert_eq!(near("bench 185x5"), Some("bench"));
        assert_eq!(near("squat 225x3 then bench"), Some("squat"));
    }

    #[test]
    fn following_side_when_preceding_misses() {
        assert_eq!(near("185x5 on bench"), Some("bench"));
        assert_eq!(near("just did 315x1 deadlift"), Some("deadlift"));
    }

    #[test]
    fn fillers_are_skipped() {
        assert_eq!(near("squat at 225x5"), Some("squat"));
        assert_eq!(near("did 135x10 for reps of curls"), Some("curl"));
    }

    #[test]
    fn containment_works_both_ways() {
        // candidate contains term
        assert_eq!(match_vocabulary("barbell row"), Some("row"));
        // term contains candidate
        assert_eq!(match_vocabulary("dead"), Some("deadlift"));
    }

    #[test]
    fn short_candidates_never_match() {
        assert_eq!(match_vocabulary("a"), None);
        assert_eq!(match_vocabulary(""), None);
    }

    #[test]
    fn no_exercise_anywhere() {
        assert_eq!(near("185x5"), None);
        assert_eq!(near("logged 185x5 today"), None);
    }

    #[test]
    fn mention_scan_handles_plurals_and_boundaries() {
        assert_eq!(find_exercise_mention("what's my squat pr"), Some("squat"));
        assert_eq!(find_exercise_mention("how are my deadlifts going"), Some("deadlift"));
        assert_eq!(find_exercise_mention("throw it out"), None);
    }
}
