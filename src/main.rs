use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use beacon::build::run_build;
use beacon::corpus::{parse_corpus, CorpusSource, FileSource};
use beacon::engine::{EngineStatus, SearchEngine};
use beacon::types::ItemType;

mod cli;
use cli::{Cli, Commands};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Build { content, output } => match run_build(&content, &output) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => fail(e),
        },
        Commands::Search {
            corpus,
            query,
            limit,
        } => run_search(&corpus, &query, limit),
        Commands::Inspect { corpus } => match run_inspect(&corpus) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => fail(e),
        },
    }
}

fn fail(error: impl std::fmt::Display) -> ExitCode {
    eprintln!("❌ {error}");
    ExitCode::FAILURE
}

/// Load a corpus, run one query, print ranked results.
fn run_search(corpus: &Path, query: &str, limit: usize) -> ExitCode {
    let mut engine = SearchEngine::new();
    if engine.activate(&FileSource::new(corpus)) == EngineStatus::Failed {
        // The engine logged the cause; for the CLI this is a hard failure
        eprintln!("❌ corpus failed to load: {}", corpus.display());
        return ExitCode::FAILURE;
    }

    let results = engine.search(query);
    if results.is_empty() {
        println!("No results for \"{query}\"");
        return ExitCode::SUCCESS;
    }

    for (rank, result) in results.iter().take(limit).enumerate() {
        println!(
            "{:>2}. {}  [{}]  {}  (score {:.3})",
            rank + 1,
            result.item.title,
            result.item.kind.as_str(),
            result.item.url,
            result.score
        );
    }
    ExitCode::SUCCESS
}

/// Print corpus statistics for a quick artifact sanity check.
fn run_inspect(corpus: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let raw = FileSource::new(corpus).fetch()?;
    let items = parse_corpus(&raw)?;

    let count_of = |kind: ItemType| items.iter().filter(|item| item.kind == kind).count();
    let content_chars: usize = items.iter().map(|item| item.content.chars().count()).sum();

    println!("{}", corpus.display());
    println!("  items:    {}", items.len());
    println!("  services: {}", count_of(ItemType::Service));
    println!("  docs:     {}", count_of(ItemType::Doc));
    println!("  pages:    {}", count_of(ItemType::Page));
    println!("  content:  {content_chars} chars");
    Ok(())
}
