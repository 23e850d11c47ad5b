use clap::Parser;
use keyfit::{corpus, scorer};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file to analyze.
    input: PathBuf,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!("📂 Loading corpus: {}", cli.input.display());
    let text = corpus::read_input(&cli.input).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let freqs = corpus::analyze(&text);
    info!("🔤 {} chars, {} distinct", freqs.total(), freqs.distinct());

    let results = scorer::score_catalog(&freqs);
    info!("⚖️  Scored {} layouts", results.len());

    reports::print_frequency_report(&freqs);
    reports::print_score_report(&results);
}
