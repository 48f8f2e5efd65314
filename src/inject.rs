use crate::config::SyncConfig;
use crate::error::{Result, SnipsyncError};
use crate::extract::SnippetTable;
use crate::fs_utils::{read_file_contents, write_file_atomic};
use std::path::Path;

/// Fixed placeholder closing every insertion point in the document
pub const END_PLACEHOLDER: &str = "<!-- INSERT_CODE: END -->";

/// Builds the start placeholder marking where a snippet is rendered
pub fn start_placeholder(identifier: &str) -> String {
    format!("<!-- INSERT_CODE: {identifier} -->")
}

/// Locates the unique placeholder pair for `identifier` and returns the byte
/// span from the start of the start placeholder to the end of the end
/// placeholder.
fn placeholder_span(document: &str, identifier: &str) -> Result<(usize, usize)> {
    let start_tag = start_placeholder(identifier);

    let mut occurrences = document.match_indices(&start_tag);
    let Some((start, _)) = occurrences.next() else {
        return Err(SnipsyncError::MissingStartTag {
            identifier: identifier.to_string(),
        });
    };
    let extra = occurrences.count();
    if extra > 0 {
        return Err(SnipsyncError::DuplicateStartTag {
            identifier: identifier.to_string(),
            count: extra + 1,
        });
    }

    let search_from = start + start_tag.len();
    let Some(offset) = document[search_from..].find(END_PLACEHOLDER) else {
        return Err(SnipsyncError::MissingEndTag {
            identifier: identifier.to_string(),
        });
    };

    Ok((start, search_from + offset + END_PLACEHOLDER.len()))
}

/// Checks that the document carries exactly one well-formed placeholder pair
/// for `identifier`, without modifying anything.
///
/// # Errors
///
/// - `SnipsyncError::MissingStartTag` / `SnipsyncError::DuplicateStartTag` if the
///   start placeholder doesn't occur exactly once.
/// - `SnipsyncError::MissingEndTag` if no end placeholder follows it.
pub fn validate_placeholder(document: &str, identifier: &str) -> Result<()> {
    placeholder_span(document, identifier).map(|_| ())
}

/// Replaces the placeholder pair for one identifier with a fenced code block,
/// re-emitting both placeholder tokens so a second run reproduces the same
/// document.
fn inject_one(document: &str, identifier: &str, snippet: &str, language: &str) -> Result<String> {
    let (start, end) = placeholder_span(document, identifier)?;
    let start_tag = start_placeholder(identifier);

    let replacement = format!("{start_tag}\n```{language}\n{snippet}\n```\n{END_PLACEHOLDER}");

    let mut result = String::with_capacity(document.len() + replacement.len());
    result.push_str(&document[..start]);
    result.push_str(&replacement);
    result.push_str(&document[end..]);
    Ok(result)
}

/// Renders every snippet in `table` into its placeholder pair in `document`.
///
/// Each identifier is processed fully (find, validate, replace) before the
/// next, so any error names a single identifier. The input string is never
/// partially consumed: on error the caller still holds the original document.
///
/// # Errors
///
/// Returns the placeholder validation errors from `validate_placeholder` for
/// the first identifier whose pair is missing, duplicated, or unterminated.
pub fn inject_snippets(
    document: &str,
    table: &SnippetTable,
    config: &SyncConfig,
) -> Result<String> {
    let mut result = document.to_string();
    for (identifier, snippet) in table.iter() {
        result = inject_one(&result, identifier, snippet, &config.fence_language)?;
    }
    Ok(result)
}

/// Reads the document, injects every snippet, and writes the result back to
/// the same path. The whole transformation happens in memory first, so a
/// failure on any identifier leaves the on-disk file untouched.
///
/// # Errors
///
/// - `SnipsyncError::DocumentNotFound` if `path` isn't a regular file.
/// - Placeholder validation errors from `inject_snippets`.
/// - `SnipsyncError::Io` if the write-back fails.
pub fn update_document(path: &Path, table: &SnippetTable, config: &SyncConfig) -> Result<()> {
    if !path.is_file() {
        return Err(SnipsyncError::DocumentNotFound {
            path: path.to_path_buf(),
        });
    }

    let document = read_file_contents(path)?;
    let updated = inject_snippets(&document, table, config)?;
    write_file_atomic(path, &updated)
}
