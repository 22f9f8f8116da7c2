// Solace - dataset-driven supportive response engine
// Main entry point

use anyhow::Result;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use solace::config::load_config;
use solace::engine::ResponseEngine;
use solace::ingest::DatasetSource;

#[derive(Parser, Debug)]
#[command(name = "solace")]
#[command(about = "Dataset-driven supportive response matching with crisis triage", version)]
struct Args {
    /// Run mode
    #[command(subcommand)]
    command: Option<Command>,

    /// Dataset to load at startup (file path or http(s) URL)
    #[arg(long)]
    dataset: Option<String>,

    /// Seed for the engine's random source (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Answer a single query and exit
    Query {
        /// Query text
        query: String,
    },
    /// Print corpus statistics and exit
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let config = load_config()?;

    let engine = match args.seed.or(config.seed) {
        Some(seed) => ResponseEngine::with_seed(seed),
        None => ResponseEngine::new(),
    };

    // Dataset load is best-effort: a failure leaves the seed corpus in
    // place and the engine fully queryable.
    if let Some(spec) = args.dataset.or(config.dataset) {
        let source = DatasetSource::from_spec(&spec);
        match engine.load_dataset(&source).await {
            Ok(report) => {
                if !report.warnings.is_empty() {
                    tracing::warn!(
                        "{} dataset rows were skipped as malformed",
                        report.warnings.len()
                    );
                }
            }
            Err(err) => {
                tracing::warn!("Continuing with built-in responses only: {:#}", err);
            }
        }
    }

    match args.command {
        Some(Command::Query { query }) => {
            println!("{}", engine.get_response(&query));
            Ok(())
        }
        Some(Command::Stats) => {
            let stats = engine.stats();
            println!("responses: {}", stats.total_responses);
            println!("dataset loaded: {}", stats.is_loaded);
            let mut categories: Vec<_> = stats.categories.iter().collect();
            categories.sort_by_key(|(category, _)| category.as_str());
            for (category, count) in categories {
                println!("  {}: {}", category.as_str(), count);
            }
            Ok(())
        }
        None => run_repl(&engine),
    }
}

/// Interactive loop: one line in, one supportive response out.
fn run_repl(engine: &ResponseEngine) -> Result<()> {
    println!("Solace - type how you're feeling, Ctrl-D to exit.");

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("you> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                println!("{}", engine.get_response(line));
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Take care of yourself.");
                break;
            }
            Err(err) => {
                tracing::error!("Readline error: {}", err);
                break;
            }
        }
    }

    Ok(())
}
