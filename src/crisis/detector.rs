// Crisis keyword detector
//
// The phrase list and the resource responses are compile-time constants:
// callers cannot extend, replace, or disable them. False positives are an
// accepted tradeoff; the check must never miss a real crisis signal.

/// High-risk phrases checked as case-insensitive substrings of user input.
const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "not worth living",
    "self harm",
    "cut myself",
    "hurt myself",
    "die",
    "death",
];

/// Safety-resource responses returned when a crisis phrase is detected.
/// One is chosen uniformly at random; similarity matching is bypassed.
pub const CRISIS_RESPONSES: &[&str] = &[
    "I'm really concerned about what you're sharing. Please reach out to the 988 Suicide & Crisis Lifeline right now - call or text 988. You don't have to go through this alone.",
    "What you're feeling matters, and there are people ready to help this moment. Text HOME to 741741 to reach the Crisis Text Line, or call 988 to talk to someone now.",
    "Please consider talking to someone right away. Call or text 988 (Suicide & Crisis Lifeline), or if you're in immediate danger, call 911 or go to your nearest emergency room.",
    "You matter, and help is available right now. Call 988 to reach the Suicide & Crisis Lifeline, available 24/7. If you can, also reach out to someone you trust and let them know how you're feeling.",
];

/// The one place the lexicon is scanned: returns the first matching
/// phrase, if any.
fn find_crisis_phrase(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    CRISIS_PHRASES
        .iter()
        .find(|phrase| lower.contains(*phrase))
        .copied()
}

#[derive(Debug, Clone, Default)]
pub struct CrisisDetector;

impl CrisisDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detect if the query contains crisis language.
    /// Returns true if any crisis phrase is found as a substring.
    pub fn detect_crisis(&self, query: &str) -> bool {
        match find_crisis_phrase(query) {
            Some(phrase) => {
                tracing::warn!("Crisis detected: phrase '{}'", phrase);
                true
            }
            None => false,
        }
    }
}

/// Free-function form of the check, used at ingestion time to assign the
/// crisis category to records without constructing a detector.
pub fn contains_crisis_language(text: &str) -> bool {
    find_crisis_phrase(text).is_some()
}
