//! In-place correction of the copyright year field.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;

use super::notice::YearSpan;

/// Year field shared by both notice styles, anchored by the company name
/// that follows it.
static YEAR_FIELD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = r" 20\d\d(-20\d\d)? Megh Computing, Inc\.";
    Regex::new(pattern)
        .unwrap_or_else(|e| panic!("Failed to compile regex '{}': {}", pattern, e))
});

/// Replace the year field of the first copyright notice in `path` with
/// `span`, rewriting the file in place.
///
/// The replacement always writes a range: a fixed single-year notice comes
/// out as `2020-2024` rather than `2024`. Callers must only pass files whose
/// notice already parsed; a missing year field here means the file changed
/// underneath us and is an error.
pub fn rewrite_years(path: &Path, span: YearSpan) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file for rewrite: {}", path.display()))?;

    let Some(found) = YEAR_FIELD_REGEX.find(&content) else {
        bail!(
            "No copyright year field found to rewrite in: {}",
            path.display()
        );
    };

    let mut updated = String::with_capacity(content.len() + 5);
    updated.push_str(&content[..found.start()]);
    updated.push_str(&format!(
        " {}-{} Megh Computing, Inc.",
        span.start, span.end
    ));
    updated.push_str(&content[found.end()..]);

    fs::write(path, updated)
        .with_context(|| format!("Failed to write updated file: {}", path.display()))
}
