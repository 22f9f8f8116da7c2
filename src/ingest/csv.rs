// CSV dataset parser
//
// Quote-aware splitting: a double quote toggles in-quotes mode, two
// consecutive quotes inside a quoted field are one literal quote, and a
// comma inside quotes is not a separator. The first line is a header and
// is discarded. A malformed row is skipped with a warning; parsing never
// aborts the batch.

use thiserror::Error;

use crate::corpus::CorpusRecord;

/// Why a row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("expected at least 2 fields, found {0}")]
    TooFewFields(usize),
    #[error("prompt field is empty")]
    EmptyPrompt,
    #[error("response field is empty")]
    EmptyResponse,
}

/// Non-fatal warning for one skipped row.
#[derive(Debug, Clone)]
pub struct ParseWarning {
    /// 1-based line number in the raw input, header included.
    pub line: usize,
    pub error: RowError,
}

/// Result of parsing one raw dataset: accepted records in input order,
/// plus a warning per skipped row.
#[derive(Debug, Default)]
pub struct ParsedBatch {
    pub records: Vec<CorpusRecord>,
    pub warnings: Vec<ParseWarning>,
}

/// Parse raw CSV text into corpus records.
///
/// The first two fields of each row are prompt and response (trimmed);
/// extra fields are ignored. Each accepted row is built through
/// [`CorpusRecord::new`], which derives keywords and a category.
pub fn parse_dataset(raw: &str) -> ParsedBatch {
    let mut batch = ParsedBatch::default();

    // enumerate over all lines so warnings carry file line numbers;
    // line 1 is the header.
    for (index, line) in raw.lines().enumerate() {
        let line_number = index + 1;
        if line_number == 1 || line.trim().is_empty() {
            continue;
        }

        match parse_row(line) {
            Ok((prompt, response)) => {
                batch.records.push(CorpusRecord::new(prompt, response));
            }
            Err(error) => {
                tracing::warn!("Skipping dataset line {}: {}", line_number, error);
                batch.warnings.push(ParseWarning {
                    line: line_number,
                    error,
                });
            }
        }
    }

    batch
}

fn parse_row(line: &str) -> Result<(String, String), RowError> {
    let fields = split_fields(line);
    if fields.len() < 2 {
        return Err(RowError::TooFewFields(fields.len()));
    }

    let prompt = fields[0].trim();
    let response = fields[1].trim();

    if prompt.is_empty() {
        return Err(RowError::EmptyPrompt);
    }
    if response.is_empty() {
        return Err(RowError::EmptyResponse);
    }

    Ok((prompt.to_string(), response.to_string()))
}

/// Split one line on commas, respecting double-quoted fields.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Escaped quote inside a quoted field.
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields
}
