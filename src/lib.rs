// Solace - dataset-driven supportive response engine
// Library exports

pub mod config;
pub mod corpus;
pub mod crisis;
pub mod engine;
pub mod ingest;
pub mod text;
