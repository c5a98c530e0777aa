pub mod checker;
pub mod cli;
pub mod copyright;
pub mod extensions;

pub use checker::{BatchOptions, BatchSummary, CheckFailure, CheckVerdict, check_all, check_file};
pub use copyright::{NoticeStyle, TOMBSTONE_LINES, YearSpan};
pub use extensions::{DEFAULT_EXTENSIONS, ExtensionSet};
