// Corpus module
// Records, seed set, and the append-only response corpus

mod record;
mod seed;

pub use record::CorpusRecord;
pub use seed::seed_records;

use std::collections::HashMap;

use crate::text::Category;

/// Append-only ordered collection of corpus records.
///
/// Seeded at construction so matching is operable before any external
/// dataset loads. Grows monotonically; never shrinks, deduplicates, or
/// persists. Owned exclusively by the response engine.
#[derive(Debug, Clone)]
pub struct ResponseCorpus {
    records: Vec<CorpusRecord>,
}

impl ResponseCorpus {
    /// Create a corpus pre-populated with the built-in seed records.
    pub fn seeded() -> Self {
        Self {
            records: seed_records(),
        }
    }

    pub fn push(&mut self, record: CorpusRecord) {
        self.records.push(record);
    }

    pub fn extend(&mut self, batch: Vec<CorpusRecord>) {
        self.records.extend(batch);
    }

    pub fn iter(&self) -> impl Iterator<Item = &CorpusRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count of records per category, for stats reporting.
    pub fn category_counts(&self) -> HashMap<Category, usize> {
        let mut counts = HashMap::new();
        for record in &self.records {
            *counts.entry(record.category).or_insert(0) += 1;
        }
        counts
    }
}
