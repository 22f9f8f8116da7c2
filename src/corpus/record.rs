// Corpus record
//
// Keywords and category are derived exactly once, at construction, from
// the prompt. The response text is returned verbatim when the record is
// selected by the matching engine.

use serde::{Deserialize, Serialize};

use crate::crisis::contains_crisis_language;
use crate::text::{categorize, extract_domain_keywords, Category};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusRecord {
    /// Example user utterance this record was authored for.
    pub prompt: String,

    /// Text returned verbatim when this record is selected.
    pub response: String,

    /// Lowercase keyword set derived from the prompt at ingestion time,
    /// restricted to the domain lexicon.
    pub keywords: Vec<String>,

    /// Topic bucket assigned at ingestion time.
    pub category: Category,
}

impl CorpusRecord {
    /// Build a record, deriving keywords and category from the prompt.
    ///
    /// A prompt containing crisis language is filed under the crisis
    /// category; that is the only path producing that label, since the
    /// categorizer families do not include crisis vocabulary.
    pub fn new(prompt: impl Into<String>, response: impl Into<String>) -> Self {
        let prompt = prompt.into();
        let response = response.into();

        let keywords = extract_domain_keywords(&prompt);
        let category = if contains_crisis_language(&prompt) {
            Category::Crisis
        } else {
            categorize(&prompt)
        };

        Self {
            prompt,
            response,
            keywords,
            category,
        }
    }
}
