// Test ResponseEngine query behavior
//
// This test suite verifies that:
// 1. Crisis language always routes to the fixed safety resources
// 2. Matching returns corpus responses verbatim above the threshold
// 3. Everything else falls back to the generic supportive pool

use solace::corpus::CorpusRecord;
use solace::crisis::CRISIS_RESPONSES;
use solace::engine::{ResponseEngine, FALLBACK_RESPONSES};

/// Crisis phrases win over everything in the corpus, every time.
#[test]
fn test_crisis_input_always_returns_safety_resources() {
    let engine = ResponseEngine::with_seed(1);

    let inputs = [
        "I've been thinking about suicide",
        "i want to KILL MYSELF",
        "maybe i should just end it all",
        "my life is not worth living",
        "I keep wanting to hurt myself",
        // Accepted false positive: "death" inside ordinary speech.
        "I'm scared to death of exams",
    ];

    for input in inputs {
        let response = engine.get_response(input);
        assert!(
            CRISIS_RESPONSES.contains(&response.as_str()),
            "input '{}' did not return a crisis resource",
            input
        );
    }
}

/// Crisis routing holds even when a corpus record would match the input.
#[test]
fn test_crisis_beats_a_perfect_corpus_match() {
    let engine = ResponseEngine::with_seed(1);
    engine.add_response(CorpusRecord::new(
        "i want to end it all",
        "this corpus response must never be returned",
    ));

    let response = engine.get_response("i want to end it all");
    assert!(CRISIS_RESPONSES.contains(&response.as_str()));
}

/// An input equal to a record's prompt earns the exact bonus, crosses the
/// threshold, and returns that record's response verbatim.
#[test]
fn test_exact_prompt_match_returns_verbatim_response() {
    let engine = ResponseEngine::with_seed(1);
    engine.add_response(CorpusRecord::new(
        "talking about my anxiety helps me",
        "distinctive response text for this test",
    ));

    let response = engine.get_response("talking about my anxiety helps me");
    assert_eq!(response, "distinctive response text for this test");
}

/// Zero keyword overlap and no prompt substring relation: the answer is
/// always a member of the fallback pool, never a corpus response.
#[test]
fn test_unmatched_input_stays_inside_fallback_pool() {
    let engine = ResponseEngine::with_seed(1);

    for _ in 0..20 {
        let response = engine.get_response("kubernetes ingress controller yaml");
        assert!(FALLBACK_RESPONSES.contains(&response.as_str()));
    }
}

/// A best match above threshold is deterministic across repeated calls.
#[test]
fn test_matching_is_idempotent_for_a_fixed_corpus() {
    let engine = ResponseEngine::with_seed(1);

    let first = engine.get_response("do i need a therapist");
    for _ in 0..10 {
        assert_eq!(engine.get_response("do i need a therapist"), first);
    }
}

/// Known quirk, preserved deliberately: the fallback path computes a
/// category but still draws uniformly from the single generic pool. An
/// input that clearly categorizes as relationship gets the same pool as
/// an uncategorizable one.
#[test]
fn test_fallback_ignores_category() {
    let engine = ResponseEngine::with_seed(1);

    for _ in 0..20 {
        let categorized = engine.get_response("qqrstv boyfriend zzwxy");
        let uncategorized = engine.get_response("qqrstv aaabbb zzwxy");
        assert!(FALLBACK_RESPONSES.contains(&categorized.as_str()));
        assert!(FALLBACK_RESPONSES.contains(&uncategorized.as_str()));
    }
}

/// get_response is total: whatever the input, the result is non-empty.
#[test]
fn test_response_is_never_empty() {
    let engine = ResponseEngine::with_seed(1);

    for input in ["", "   ", "a", "?!.,", "suicide", "hello"] {
        assert!(!engine.get_response(input).is_empty());
    }
}

/// Two engines with the same seed produce identical pool draws.
#[test]
fn test_seeded_draws_are_reproducible() {
    let a = ResponseEngine::with_seed(99);
    let b = ResponseEngine::with_seed(99);

    for _ in 0..5 {
        assert_eq!(
            a.get_response("xylophone cartography vellum"),
            b.get_response("xylophone cartography vellum")
        );
    }
}

/// Administrative surface: appends show up in stats immediately.
#[test]
fn test_stats_track_appends_and_load_state() {
    let engine = ResponseEngine::with_seed(1);
    let before = engine.stats();
    assert!(before.total_responses >= 3);
    assert!(!before.is_loaded);

    engine.add_response(CorpusRecord::new(
        "my therapist moved away",
        "Losing a therapist you trusted is a real loss.",
    ));

    let after = engine.stats();
    assert_eq!(after.total_responses, before.total_responses + 1);
    assert!(!after.is_loaded);
    let total: usize = after.categories.values().sum();
    assert_eq!(total, after.total_responses);
}
