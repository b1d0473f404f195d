use clap::Parser;
use std::path::PathBuf;

/// Rename a book file to a human-readable name derived from its ISBN
#[derive(Parser, Debug)]
#[command(name = "rename-book", version, about)]
pub struct Cli {
    /// Path to the book file; its name without the extension is the ISBN
    pub path: PathBuf,

    /// Pick the first candidate instead of prompting when several match
    #[arg(short, long, default_value_t = false)]
    pub first: bool,

    /// Resolve and print the new name without renaming anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
