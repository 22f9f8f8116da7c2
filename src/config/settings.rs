// Configuration structs

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Optional dataset to load at startup: a file path or http(s) URL.
    pub dataset: Option<String>,

    /// Optional seed for the engine's random source (reproducible runs).
    pub seed: Option<u64>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}
