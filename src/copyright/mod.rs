//! Copyright notice handling.
//!
//! Everything that understands the notice text itself lives here, in three
//! stages:
//! 1. Tombstone extraction (bounded read of a file's leading lines)
//! 2. Style detection and year-range parsing
//! 3. Year-field rewriting for the autofix path

mod notice;
mod rewrite;
mod tombstone;

pub use notice::{NoticeStyle, YearSpan, detect_style, parse_notice};
pub use rewrite::rewrite_years;
pub use tombstone::{TOMBSTONE_LINES, read_tombstone};
