// Similarity scoring between user input and one corpus record
//
// score = keyword overlap (weight 0.7) + exact-substring bonus (0.3).
// Token overlap uses bidirectional fuzzy containment, not equality, so
// "sleeping" matches a record keyword "sleep". The result is not clamped;
// degenerate inputs can nudge it past 1.0 and that is accepted.

use crate::corpus::CorpusRecord;
use crate::text::extract_keywords;

/// A match is used only when its score is strictly greater than this.
pub const MATCH_THRESHOLD: f64 = 0.3;

const KEYWORD_WEIGHT: f64 = 0.7;
const EXACT_MATCH_BONUS: f64 = 0.3;

/// Score user input against one record, in approximately [0, 1].
pub fn score(input: &str, record: &CorpusRecord) -> f64 {
    let user_keywords = extract_keywords(input);
    let record_keywords = &record.keywords;

    let common_count = user_keywords
        .iter()
        .filter(|token| {
            record_keywords
                .iter()
                .any(|keyword| token.contains(keyword.as_str()) || keyword.contains(token.as_str()))
        })
        .count();

    // max(|U|, |R|) as the denominator, guarded against both sets empty.
    let denominator = user_keywords.len().max(record_keywords.len()).max(1);
    let keyword_score = common_count as f64 / denominator as f64 * KEYWORD_WEIGHT;

    let input_lower = input.to_lowercase();
    let prompt_lower = record.prompt.to_lowercase();
    let exact_score = if input_lower.contains(&prompt_lower) || prompt_lower.contains(&input_lower)
    {
        EXACT_MATCH_BONUS
    } else {
        0.0
    };

    keyword_score + exact_score
}
