use anyhow::Result;
use clap::Parser;

use copyrighter::checker::{BatchOptions, check_all};
use copyrighter::cli::Cli;

fn main() {
    env_logger::init();

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    let options = BatchOptions {
        autofix: cli.fix,
        verbose: cli.verbose,
    };

    let summary = check_all(cli.extensions.as_deref(), &cli.files, options)?;
    Ok(summary.all_passed())
}
