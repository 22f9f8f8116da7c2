// Ingestion module
// CSV dataset parsing and external dataset sources

mod csv;
mod source;

pub use csv::{parse_dataset, ParseWarning, ParsedBatch, RowError};
pub use source::{fetch_dataset, DatasetSource};

/// Summary of one ingestion batch appended to the corpus.
#[derive(Debug)]
pub struct IngestReport {
    /// Records appended to the corpus.
    pub added: usize,
    /// Rows skipped as malformed.
    pub skipped: usize,
    /// One warning per skipped row, carrying the 1-based line number.
    pub warnings: Vec<ParseWarning>,
}
