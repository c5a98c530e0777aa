//! File checking: per-file validation rules and the batch driver.

mod batch;
mod check;

use std::path::{Path, PathBuf};

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckVerdict {
    /// The copyright notice is present and current.
    Pass,
    /// The file's extension is not on the to-check list; counts as a pass.
    Skipped,
    Fail(CheckFailure),
}

impl CheckVerdict {
    pub fn failed(&self) -> bool {
        matches!(self, CheckVerdict::Fail(_))
    }
}

/// Why a file failed its check. Failures are ordinary data: the batch keeps
/// going after every one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckFailure {
    /// The path does not name an existing regular file.
    NotAFile,
    /// The file exists but its header could not be read.
    Unreadable { error: String },
    /// No recognizable copyright notice in the tombstone, which is carried
    /// along for the diagnostic.
    NoticeNotFound { tombstone: String },
    FutureStartYear { start: i32 },
    InvertedRange { start: i32, end: i32 },
    /// The end year is not the current year. `rewritten` records whether the
    /// autofix already updated the file.
    StaleYear { end: i32, current: i32, rewritten: bool },
}

impl CheckFailure {
    /// Operator-facing diagnostic for this failure, possibly multi-line.
    pub fn diagnostic(&self, path: &Path) -> String {
        match self {
            CheckFailure::NotAFile => format!("File does not exist: {}", path.display()),
            CheckFailure::Unreadable { error } => format!("{}: {}", path.display(), error),
            CheckFailure::NoticeNotFound { tombstone } => {
                let excerpt: Vec<String> = tombstone
                    .lines()
                    .map(|line| format!("    > {}", line))
                    .collect();
                format!(
                    "Copyright header check failed for file: {}\n\
                     Copyright message not found in file header.\n\
                     Beginning of file:\n{}",
                    path.display(),
                    excerpt.join("\n")
                )
            }
            CheckFailure::FutureStartYear { start } => format!(
                "Copyright header check failed for file: {}\n\
                 File header copyright start year {} is in the future.",
                path.display(),
                start
            ),
            CheckFailure::InvertedRange { start, end } => format!(
                "Copyright header check failed for file: {}\n\
                 File header copyright start year {} must be smaller than end year {}.",
                path.display(),
                start,
                end
            ),
            CheckFailure::StaleYear { end, current, rewritten } => {
                let mut text = format!(
                    "Copyright header check failed for file: {}\n\
                     File header copyright year {} does not match current year {}.",
                    path.display(),
                    end,
                    current
                );
                if *rewritten {
                    text.push_str(&format!(
                        "\nFile will be overwritten with the correct year: {}",
                        path.display()
                    ));
                }
                text
            }
        }
    }
}

/// Knobs for a batch run, threaded explicitly instead of living in process
/// globals.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub autofix: bool,
    pub verbose: bool,
}

/// Aggregate outcome of a batch run.
#[derive(Debug)]
pub struct BatchSummary {
    pub total: usize,
    pub failed: Vec<PathBuf>,
}

impl BatchSummary {
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }
}

pub use self::batch::check_all;
pub use self::check::check_file;
