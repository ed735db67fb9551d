use std::fs;
use std::path::PathBuf;

use clap::Parser;
use dotenvy::dotenv;
use tracing::info;

use rm_core::embedding::{create_provider, load_config_from_env};
use rm_core::export::export_matches;
use rm_core::logging;
use rm_core::matching::pipeline::{MatchOptions, MatchingEngine};
use rm_core::CandidateRecord;

#[derive(Debug, Parser)]
#[command(name = "rm-cli", about = "Rank candidate résumés against a job description")]
struct Cli {
    /// Path to a text file with the job description
    #[arg(long, short = 'j')]
    job_description: PathBuf,

    /// Path to a JSON array of candidate records
    #[arg(long, short = 'c')]
    candidates: PathBuf,

    /// Number of top matches to return
    #[arg(long, default_value_t = 5)]
    top_k: usize,

    /// Skip explanation generation
    #[arg(long, default_value_t = false)]
    no_explanations: bool,

    /// Similarity provider for semantic skill fallback: off | hash
    #[arg(long, env = "RM_EMBEDDING_PROVIDER", default_value = "off")]
    embedding: String,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let job_description = fs::read_to_string(&cli.job_description)?;
    let payload = fs::read_to_string(&cli.candidates)?;
    let candidates: Vec<CandidateRecord> = serde_json::from_str(&payload)?;

    let engine = if cli.embedding == "off" {
        MatchingEngine::new()
    } else {
        let config = load_config_from_env();
        let provider = create_provider(&cli.embedding, config.clone());
        MatchingEngine::with_provider(provider, &config)
    };

    let options = MatchOptions {
        top_k: cli.top_k,
        include_explanations: !cli.no_explanations,
        budget: None,
    };

    let report = engine.find_matches(&job_description, &candidates, &options)?;

    info!(
        candidates = candidates.len(),
        results = report.results.len(),
        warnings = report.warnings.len(),
        partial = report.partial,
        "match batch complete"
    );
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }

    println!("{}", export_matches(&report.results)?);
    Ok(())
}

fn main() {
    dotenv().ok();
    logging::init_tracing_subscriber("rm-cli");
    logging::install_tracing_panic_hook("rm-cli");

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tracing::error!(error = %err, "rm-cli failed");
        std::process::exit(1);
    }
}
