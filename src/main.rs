//! Book renamer - command line entry point.

mod cli;

use anyhow::Result;
use book_renamer::catalog::CatalogClient;
use book_renamer::prompt::{CandidateSelector, ConsolePrompt, FirstCandidate};
use book_renamer::rename;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the candidate list and the
    // resolved name.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Optional GOOGLE_BOOKS_API_KEY.
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();

    let catalog = CatalogClient::new()?;
    let mut selector: Box<dyn CandidateSelector> = if cli.first {
        Box::new(FirstCandidate)
    } else {
        Box::new(ConsolePrompt::stdin())
    };

    let new_name = rename::resolve_new_name(&cli.path, &catalog, selector.as_mut())?;

    if cli.dry_run {
        println!("{new_name}");
        return Ok(());
    }

    let target = rename::rename_in_place(&cli.path, &new_name)?;
    tracing::info!(from = %cli.path.display(), to = %target.display(), "renamed");
    println!("{new_name}");

    Ok(())
}
