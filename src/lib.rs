//! # snipsync
//!
//! A snippet synchronization library and CLI tool for keeping documentation
//! in step with real, compiling example code. Source files carry tagged
//! example regions; the documentation carries placeholder pairs; snipsync
//! extracts the former and renders them into the latter as fenced code blocks.
//!
//! ## Features
//!
//! - Extract regions delimited by `// EXAMPLE_CODE: <name>` / `// EXAMPLE_CODE: END`
//! - Normalize indentation and collapse blank-line runs
//! - Inject snippets between `<!-- INSERT_CODE: <name> -->` / `<!-- INSERT_CODE: END -->`
//! - Idempotent: re-running over the tool's own output is a no-op
//! - Fails before writing anything when a placeholder is missing or duplicated
//!
//! ## Usage
//!
//! ### As a Library
//!
//! ```no_run
//! use snipsync::{SyncConfig, extract_snippets, update_document};
//! use std::path::Path;
//!
//! let config = SyncConfig::swift();
//! let table = extract_snippets(Path::new("Tests/ExampleCode"), &config)?;
//! update_document(Path::new("README.md"), &table, &config)?;
//! # Ok::<(), snipsync::SnipsyncError>(())
//! ```
//!
//! ### As a CLI Tool
//!
//! ```bash
//! # Sync Tests/ExampleCode into README.md
//! snipsync
//!
//! # Validate placeholders without touching the document
//! snipsync --dry-run
//!
//! # Scan a different tree
//! snipsync --root Sources/Examples --doc docs/usage.md
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod fs_utils;
pub mod inject;

// Re-export main types and functions for convenience
pub use config::SyncConfig;
pub use error::{Result, SnipsyncError};
pub use extract::{END_TAG, START_TAG_PREFIX, SnippetTable, extract_snippets, format_snippet};
pub use inject::{
    END_PLACEHOLDER, inject_snippets, start_placeholder, update_document, validate_placeholder,
};
