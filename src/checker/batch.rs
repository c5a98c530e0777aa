//! Batch driver.
//!
//! Checks every requested file in order, printing diagnostics as failures
//! occur and collecting the failed paths for the summary. One bad file never
//! stops the rest of the batch; only an unusable extension list (or an
//! autofix fault) aborts the run.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, warn};

use crate::extensions::ExtensionSet;

use super::{BatchOptions, BatchSummary, CheckVerdict, check_file};

/// Check all `files` against the extension set from `extensions_file` (or
/// the default set), printing diagnostics and a summary as it goes.
///
/// Paths are absolutized before checking; diagnostics and the failed list
/// show absolute paths.
pub fn check_all(
    extensions_file: Option<&Path>,
    files: &[PathBuf],
    options: BatchOptions,
) -> Result<BatchSummary> {
    let extensions = ExtensionSet::load(extensions_file)?;
    debug!(
        "Checking {} files against {} extensions",
        files.len(),
        extensions.len()
    );

    let mut failed = Vec::new();
    for file in files {
        let path = match std::path::absolute(file) {
            Ok(path) => path,
            Err(error) => {
                warn!("Could not absolutize {}: {}", file.display(), error);
                file.clone()
            }
        };

        match check_file(&extensions, &path, options.autofix)? {
            CheckVerdict::Pass => {}
            CheckVerdict::Skipped => {
                if options.verbose {
                    println!(
                        "File extension not on to-check list: {} (automatic success)",
                        path.display()
                    );
                }
            }
            CheckVerdict::Fail(failure) => {
                println!("{}", failure.diagnostic(&path));
                println!();
                failed.push(path);
            }
        }
    }

    if options.verbose && !failed.is_empty() {
        println!("Files failed:");
        for path in &failed {
            println!("    {}", path.display());
        }
    }
    println!("{}/{} files failed.\n", failed.len(), files.len());

    Ok(BatchSummary {
        total: files.len(),
        failed,
    })
}
