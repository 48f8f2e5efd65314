use crate::config::SyncConfig;
use crate::error::{Result, SnipsyncError};
use crate::fs_utils::read_file_contents;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use walkdir::WalkDir;

/// Literal prefix opening a tagged example region in source files
pub const START_TAG_PREFIX: &str = "// EXAMPLE_CODE:";

/// Literal text closing a tagged example region
pub const END_TAG: &str = "// EXAMPLE_CODE: END";

/// Mapping from identifier to formatted snippet text, built once per run
#[derive(Debug, Default)]
pub struct SnippetTable {
    snippets: HashMap<String, String>,
    overwritten: Vec<String>,
}

impl SnippetTable {
    /// Stores a snippet under `identifier`. A repeated identifier overwrites
    /// the earlier snippet (last write wins) and is recorded for reporting.
    pub fn insert(&mut self, identifier: String, snippet: String) {
        if self.snippets.contains_key(&identifier) {
            self.overwritten.push(identifier.clone());
        }
        self.snippets.insert(identifier, snippet);
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.snippets.get(identifier).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.snippets.iter()
    }

    /// Identifiers in sorted order, for stable output
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.snippets.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Identifiers that appeared more than once during extraction
    pub fn overwritten(&self) -> &[String] {
        &self.overwritten
    }
}

/// Walks `root` and extracts every tagged example region from files matching
/// the configured source extension.
///
/// # Errors
///
/// - `SnipsyncError::UnterminatedRegion` if a file ends inside an open region.
/// - `SnipsyncError::NestedRegion` if a start marker appears inside an open region.
/// - `SnipsyncError::WalkDir` or `SnipsyncError::Io` for traversal and read failures.
pub fn extract_snippets(root: &Path, config: &SyncConfig) -> Result<SnippetTable> {
    let start_pattern = start_tag_pattern()?;
    let suffix = format!(".{}", config.source_extension);
    let mut table = SnippetTable::default();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(&suffix) || name.starts_with('.') {
            continue;
        }

        if let Some(exclude) = &config.exclude {
            let relative = path.strip_prefix(root).unwrap_or(path);
            if exclude.is_match(relative) {
                continue;
            }
        }

        extract_from_file(path, &start_pattern, &mut table)?;
    }

    Ok(table)
}

/// Compiles the pattern matching a start marker and capturing its identifier
fn start_tag_pattern() -> Result<Regex> {
    Ok(Regex::new(&format!(
        r"{}\s*(\w+)",
        regex::escape(START_TAG_PREFIX)
    ))?)
}

/// Scans one file line by line, collecting tagged regions into `table`.
///
/// The end-marker check runs before the start-marker check: the end tag itself
/// matches the start pattern (END is a word), so the order is load-bearing.
fn extract_from_file(path: &Path, start_pattern: &Regex, table: &mut SnippetTable) -> Result<()> {
    let contents = read_file_contents(path)?;
    let mut current: Option<String> = None;
    let mut buffer: Vec<String> = Vec::new();

    for line in contents.lines() {
        match current.take() {
            Some(identifier) => {
                if line.contains(END_TAG) {
                    table.insert(identifier, format_snippet(&buffer));
                    buffer.clear();
                } else if let Some(capture) = start_pattern.captures(line) {
                    return Err(SnipsyncError::NestedRegion {
                        outer: identifier,
                        inner: capture[1].to_string(),
                        path: path.to_path_buf(),
                    });
                } else {
                    buffer.push(line.to_string());
                    current = Some(identifier);
                }
            }
            None => {
                // A stray end tag outside any region is ignored rather than
                // being mistaken for a start marker named "END".
                if !line.contains(END_TAG)
                    && let Some(capture) = start_pattern.captures(line)
                {
                    current = Some(capture[1].to_string());
                }
            }
        }
    }

    if let Some(identifier) = current {
        return Err(SnipsyncError::UnterminatedRegion {
            identifier,
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Normalizes the raw lines of one region into display-ready snippet text:
/// strips the first line's indentation from every line, collapses blank-line
/// runs to a single blank line, right-trims each line, and trims the block.
pub fn format_snippet(lines: &[String]) -> String {
    let Some(first) = lines.first() else {
        return String::new();
    };
    let indent = first.chars().take_while(|c| c.is_whitespace()).count();

    let mut formatted: Vec<String> = Vec::new();
    let mut previous_blank = true;

    for line in lines {
        let content: String = if line.chars().count() > indent {
            line.chars().skip(indent).collect()
        } else {
            line.clone()
        };

        if content.trim().is_empty() {
            if !previous_blank {
                formatted.push(String::new());
                previous_blank = true;
            }
        } else {
            formatted.push(content.trim_end().to_string());
            previous_blank = false;
        }
    }

    formatted.join("\n").trim().to_string()
}
