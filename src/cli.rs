use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path(s) of the file(s) to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Automatically update a stale copyright year to the current year
    #[arg(short, long)]
    pub fix: bool,

    /// Print more context
    #[arg(short, long)]
    pub verbose: bool,

    /// Path of a file listing the extensions to check, one per line
    #[arg(short, long)]
    pub extensions: Option<PathBuf>,
}
