// Engine module
// Similarity scoring and the response matching engine

mod matcher;
mod scorer;

pub use matcher::{EngineStats, ResponseEngine, FALLBACK_RESPONSES};
pub use scorer::{score, MATCH_THRESHOLD};
