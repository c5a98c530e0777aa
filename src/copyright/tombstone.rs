//! Bounded extraction of a file's tombstone.
//!
//! The tombstone is the handful of leading lines where the copyright notice
//! lives. Only this prefix is ever read, so checking a multi-megabyte
//! generated file costs the same as checking a ten-line script.

use std::io::{self, BufRead};

/// Number of leading lines searched for a copyright notice.
///
/// Nine lines leave room for a shebang and blank lines ahead of the comment
/// block that carries the notice.
pub const TOMBSTONE_LINES: usize = 9;

/// Read up to `max_lines` lines from the start of `reader`, preserving line
/// terminators and stopping early at end-of-file.
///
/// Bytes are decoded lossily: a binary file comes back as replacement
/// characters and later fails the notice match instead of erroring here.
pub fn read_tombstone<R: BufRead>(reader: &mut R, max_lines: usize) -> io::Result<String> {
    let mut tombstone = String::new();
    let mut line = Vec::new();

    for _ in 0..max_lines {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        tombstone.push_str(&String::from_utf8_lossy(&line));
    }

    Ok(tombstone)
}
