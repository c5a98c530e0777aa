//! Copyright notice grammar and year-range parsing.
//!
//! Two notice styles are recognized:
//!
//! 1. `Copyright (c) 2020 Megh Computing, Inc.` used by plain headers
//! 2. `Copyright 2020 Megh Computing, Inc.` used inside the standard
//!    Apache-2.0 license header, which omits the `(c)` mark
//!
//! The style is chosen by content, not file type: a tombstone containing the
//! Apache license grant gets the Apache grammar, everything else the plain
//! one. Parsing is strict: only four-digit years in the 2000s match, and the
//! company name must follow the year field exactly.

use std::sync::LazyLock;

use regex::Regex;

/// Line that marks a tombstone as carrying the standard Apache-2.0 header.
const APACHE_HEADER_MARKER: &str = "Licensed under the Apache License, Version 2";

static PLAIN_NOTICE_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_notice(r"Copyright \(c\) "));

static APACHE_NOTICE_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_notice("Copyright "));

fn compile_notice(prefix: &str) -> Regex {
    let pattern = format!(
        r"{}(?P<start>20\d\d)(-(?P<end>20\d\d))? Megh Computing, Inc\.",
        prefix
    );
    Regex::new(&pattern)
        .unwrap_or_else(|e| panic!("Failed to compile regex '{}': {}", pattern, e))
}

/// Which copyright notice grammar applies to a tombstone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    /// `Copyright (c) YYYY[-YYYY] Megh Computing, Inc.`
    Plain,
    /// `Copyright YYYY[-YYYY] Megh Computing, Inc.` inside an Apache-2.0
    /// license header.
    ApacheHeader,
}

/// Inclusive copyright year range.
///
/// A single-year notice is represented with `start == end`. No ordering is
/// enforced here; an inverted range parses fine and is rejected later by
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSpan {
    pub start: i32,
    pub end: i32,
}

impl YearSpan {
    pub fn new(start: i32, end: i32) -> Self {
        YearSpan { start, end }
    }

    /// Span covering a single year.
    pub fn single(year: i32) -> Self {
        YearSpan { start: year, end: year }
    }
}

/// Decide which notice grammar a tombstone should be parsed with.
pub fn detect_style(tombstone: &str) -> NoticeStyle {
    if tombstone.contains(APACHE_HEADER_MARKER) {
        NoticeStyle::ApacheHeader
    } else {
        NoticeStyle::Plain
    }
}

/// Extract the copyright year range from a tombstone, or `None` if no notice
/// in the given style is present.
///
/// Only the first match is considered. The year strings are guaranteed
/// four-digit decimals by the grammar, so conversion cannot fail.
pub fn parse_notice(tombstone: &str, style: NoticeStyle) -> Option<YearSpan> {
    let regex = match style {
        NoticeStyle::Plain => &PLAIN_NOTICE_REGEX,
        NoticeStyle::ApacheHeader => &APACHE_NOTICE_REGEX,
    };

    let captures = regex.captures(tombstone)?;
    let start: i32 = captures["start"].parse().ok()?;
    let span = match captures.name("end") {
        Some(m) => YearSpan::new(start, m.as_str().parse().ok()?),
        None => YearSpan::single(start),
    };

    Some(span)
}
