//! The set of file extensions whose headers get checked.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use log::debug;
use regex::Regex;

/// Extensions checked when no list file is supplied.
pub const DEFAULT_EXTENSIONS: [&str; 10] = [
    ".c", ".cpp", ".cs", ".css", ".h", ".hpp", ".java", ".js", ".php", ".py",
];

/// A valid list entry: a dot followed by word characters, nothing else.
static EXTENSION_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = r"\A\.\w*\z";
    Regex::new(pattern)
        .unwrap_or_else(|e| panic!("Failed to compile regex '{}': {}", pattern, e))
});

/// Membership filter deciding which files get their tombstone checked.
#[derive(Debug, Clone)]
pub struct ExtensionSet {
    extensions: Vec<String>,
}

impl Default for ExtensionSet {
    fn default() -> Self {
        ExtensionSet {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ExtensionSet {
    /// Build the active set: the fixed defaults, or the contents of
    /// `list_file` when one is given.
    ///
    /// A list file holds one extension per line, blank lines ignored. A
    /// token that does not look like an extension, or a file with no usable
    /// entries, is a load error that aborts the run.
    pub fn load(list_file: Option<&Path>) -> Result<Self> {
        let Some(list_file) = list_file else {
            return Ok(ExtensionSet::default());
        };
        let list_file = std::path::absolute(list_file).unwrap_or_else(|_| list_file.to_path_buf());

        let content = fs::read_to_string(&list_file)
            .with_context(|| format!("Failed to read extensions file: {}", list_file.display()))?;

        let mut extensions = Vec::new();
        for line in content.lines() {
            let token = line.trim();
            if token.is_empty() {
                continue;
            }
            if !EXTENSION_TOKEN_REGEX.is_match(token) {
                bail!(
                    "When reading extensions file \"{}\", found bad extension \"{}\"",
                    list_file.display(),
                    token
                );
            }
            extensions.push(token.to_string());
        }

        if extensions.is_empty() {
            bail!(
                "No file extensions found in the given extensions check file: {}",
                list_file.display()
            );
        }

        debug!(
            "Loaded {} extensions from {}",
            extensions.len(),
            list_file.display()
        );
        Ok(ExtensionSet { extensions })
    }

    /// Whether `path`'s extension is on the to-check list.
    ///
    /// Matching is exact and case-sensitive. A file without an extension
    /// never matches; a trailing-dot name (`build.`) matches the bare `.`
    /// token.
    pub fn contains_path(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .map_or("".to_string(), |ext| format!(".{}", ext.to_string_lossy()));
        self.extensions.iter().any(|known| known == &ext)
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}
