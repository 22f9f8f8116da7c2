// Text processing module
// Keyword extraction and topic categorization

mod categorize;
mod keywords;

pub use categorize::{categorize, Category};
pub use keywords::{extract_domain_keywords, extract_keywords};
