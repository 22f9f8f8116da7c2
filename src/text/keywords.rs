// Keyword extraction
//
// Two variants share one normalization pipeline:
// - extract_keywords: every surviving token (user input at query time)
// - extract_domain_keywords: additionally filtered against the domain
//   lexicon (corpus records at ingestion time)
//
// User input keeps all tokens so the scorer sees full information; record
// keywords are restricted to domain vocabulary to avoid noisy matches.

use std::collections::HashSet;

/// Mental-health, relationship, and support vocabulary used to filter
/// record keywords at ingestion time. A token is kept when it is in a
/// bidirectional substring relation with at least one entry.
const DOMAIN_LEXICON: &[&str] = &[
    // Mental health
    "depression",
    "depressed",
    "anxiety",
    "anxious",
    "panic",
    "stress",
    "stressed",
    "overwhelmed",
    "hopeless",
    "worthless",
    "sad",
    "sadness",
    "crying",
    "tired",
    "exhausted",
    "sleep",
    "insomnia",
    "mood",
    "mental",
    "emotional",
    "feelings",
    "worried",
    "fear",
    "scared",
    // Relationships
    "relationship",
    "boyfriend",
    "girlfriend",
    "partner",
    "husband",
    "wife",
    "marriage",
    "breakup",
    "divorce",
    "family",
    "friend",
    "friends",
    "parents",
    "lonely",
    "loneliness",
    "alone",
    "isolated",
    // Support and treatment
    "therapy",
    "therapist",
    "counseling",
    "counselor",
    "psychiatrist",
    "medication",
    "help",
    "support",
    "cope",
    "coping",
    "better",
    "healing",
    "talk",
    "listen",
];

/// Extract the full keyword set from free text.
///
/// Lowercases, strips everything that is not alphanumeric or whitespace,
/// splits on whitespace, and drops tokens of length <= 2. Duplicates are
/// removed, first occurrence wins.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    normalized_tokens(text)
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Extract keywords restricted to the domain lexicon.
///
/// Same normalization as [`extract_keywords`], then keeps only tokens that
/// contain, or are contained in, at least one lexicon entry.
pub fn extract_domain_keywords(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    normalized_tokens(text)
        .filter(|token| in_domain(token))
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

fn normalized_tokens(text: &str) -> impl Iterator<Item = String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.len() > 2)
        .map(String::from)
        .collect::<Vec<_>>()
        .into_iter()
}

fn in_domain(token: &str) -> bool {
    DOMAIN_LEXICON
        .iter()
        .any(|entry| token.contains(entry) || entry.contains(token))
}
