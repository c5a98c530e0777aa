//! Per-file validation rules.
//!
//! Rules run in a fixed order and the first violation wins: existence, then
//! the extension filter, then notice presence, then year sanity (future
//! start, inverted range, stale end year). Only the stale-year rule can
//! trigger the autofix, and a fixed file still counts as failed.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Result;
use chrono::{Datelike, Local};
use log::debug;

use crate::copyright::{
    TOMBSTONE_LINES, YearSpan, detect_style, parse_notice, read_tombstone, rewrite_years,
};
use crate::extensions::ExtensionSet;

use super::{CheckFailure, CheckVerdict};

/// Check a single file's copyright notice.
///
/// All rule violations come back as `CheckVerdict::Fail`; `Err` is reserved
/// for faults in the autofix rewrite itself.
pub fn check_file(extensions: &ExtensionSet, path: &Path, autofix: bool) -> Result<CheckVerdict> {
    if !path.is_file() {
        return Ok(CheckVerdict::Fail(CheckFailure::NotAFile));
    }

    if !extensions.contains_path(path) {
        debug!("Extension not on the to-check list: {}", path.display());
        return Ok(CheckVerdict::Skipped);
    }

    let tombstone = match read_file_tombstone(path) {
        Ok(tombstone) => tombstone,
        Err(error) => {
            return Ok(CheckVerdict::Fail(CheckFailure::Unreadable {
                error: error.to_string(),
            }));
        }
    };

    let style = detect_style(&tombstone);
    let Some(span) = parse_notice(&tombstone, style) else {
        return Ok(CheckVerdict::Fail(CheckFailure::NoticeNotFound { tombstone }));
    };
    debug!(
        "Parsed {:?}-style notice {}-{} in {}",
        style,
        span.start,
        span.end,
        path.display()
    );

    let current_year = Local::now().year();

    if span.start > current_year {
        return Ok(CheckVerdict::Fail(CheckFailure::FutureStartYear {
            start: span.start,
        }));
    }

    if span.start > span.end {
        return Ok(CheckVerdict::Fail(CheckFailure::InvertedRange {
            start: span.start,
            end: span.end,
        }));
    }

    if span.end != current_year {
        if autofix {
            rewrite_years(path, YearSpan::new(span.start, current_year))?;
        }
        return Ok(CheckVerdict::Fail(CheckFailure::StaleYear {
            end: span.end,
            current: current_year,
            rewritten: autofix,
        }));
    }

    Ok(CheckVerdict::Pass)
}

fn read_file_tombstone(path: &Path) -> std::io::Result<String> {
    let file = File::open(path)?;
    read_tombstone(&mut BufReader::new(file), TOMBSTONE_LINES)
}
