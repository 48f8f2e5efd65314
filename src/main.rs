use clap::{Parser, ValueEnum};
use globset::{Glob, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use snipsync::{Result, SnippetTable, SyncConfig, extract_snippets, update_document};
use std::path::PathBuf;

const LONG_HELP: &str = r#"
Marker reference:
  // EXAMPLE_CODE: NAME   - opens a tagged region in a source file
  // EXAMPLE_CODE: END    - closes the region

  <!-- INSERT_CODE: NAME -->  - start placeholder in the document
  <!-- INSERT_CODE: END -->   - end placeholder in the document

Each extracted region replaces the text between its placeholder pair with a
fenced code block. The placeholders themselves are kept, so the command can be
re-run at any time.

Examples:
  # Sync Tests/ExampleCode into README.md (the defaults)
  snipsync
  # Use a different source tree and document
  snipsync --root Sources/Examples --doc docs/usage.md
  # Validate placeholders without writing
  snipsync --dry-run
  # List extracted snippets
  snipsync --list
  # List with details and JSON output for scripting
  snipsync --list=json
  # Skip generated sources
  snipsync -x 'Generated/**'


For more information, visit: https://github.com/0x484558/snipsync
"#;

/// Documentation snippet synchronization.
///
/// Copyright 2025 0x484558 @ aleph0 s.r.o.
/// Licensed under the EUPL v1.2.
#[derive(Parser, Debug)]
#[command(
    name = "snipsync",
    version,
    author = "0x484558 @ aleph0 s.r.o.",
    about = "Sync annotated example snippets from source files into documentation.",
    after_long_help = LONG_HELP,
    after_help = "For more information, visit: https://github.com/0x484558/snipsync"
)]
struct Cli {
    /// Root directory scanned for tagged example regions
    #[arg(short, long, value_name = "DIR", default_value = "Tests/ExampleCode")]
    root: PathBuf,

    /// Documentation file rewritten in place
    #[arg(short, long, value_name = "FILE", default_value = "README.md")]
    doc: PathBuf,

    /// Validate snippets and placeholders without writing the document
    #[arg(long, conflicts_with = "list")]
    dry_run: bool,

    /// List extracted snippets (optionally with format: plain, detailed, json)
    #[arg(long, value_name = "FORMAT", num_args = 0..=1, default_missing_value = "plain", conflicts_with = "dry_run")]
    list: Option<ListFormat>,

    /// Exclude glob patterns (repeatable). Patterns are relative to the root
    #[arg(short = 'x', long = "exclude", value_name = "GLOB", action = clap::ArgAction::Append)]
    exclude: Vec<String>,

    /// Increase verbosity (can be used multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq)]
enum ListFormat {
    /// Simple list of identifiers
    Plain,
    /// Identifier plus size and first line of each snippet
    Detailed,
    /// JSON output for scripting
    Json,
}

#[derive(Serialize, Deserialize)]
struct SnippetInfo {
    identifier: String,
    lines: usize,
    bytes: usize,
    text: String,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => LogLevel::Error,
        (false, 0) => LogLevel::Warn,
        (false, 1) => LogLevel::Info,
        (false, 2) => LogLevel::Debug,
        (false, _) => LogLevel::Trace,
    };

    let mut config = SyncConfig::swift();
    if !cli.exclude.is_empty() {
        let mut builder = GlobSetBuilder::new();
        for pat in &cli.exclude {
            match Glob::new(pat) {
                Ok(g) => {
                    builder.add(g);
                }
                Err(e) => {
                    eprintln!("[ERROR] Invalid exclude pattern '{pat}': {e}");
                    std::process::exit(2);
                }
            }
        }
        match builder.build() {
            Ok(set) => {
                config.exclude = Some(set);
            }
            Err(e) => {
                eprintln!("[ERROR] Failed to build exclude set: {e}");
                std::process::exit(2);
            }
        }
    }

    if let Err(e) = run(&cli, &config, log_level) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &SyncConfig, log_level: LogLevel) -> Result<()> {
    log(
        log_level,
        LogLevel::Info,
        &format!("Scanning {} for example regions...", cli.root.display()),
    );

    let table = extract_snippets(&cli.root, config)?;

    for identifier in table.overwritten() {
        log(
            log_level,
            LogLevel::Warn,
            &format!("Duplicate region '{identifier}', keeping the last occurrence"),
        );
    }
    log(
        log_level,
        LogLevel::Info,
        &format!("Extracted {} snippet(s)", table.len()),
    );

    if let Some(format) = cli.list {
        return list_snippets(&table, format);
    }

    if cli.dry_run {
        return dry_run(cli, &table, log_level);
    }

    log(
        log_level,
        LogLevel::Debug,
        &format!("Injecting snippets into {}...", cli.doc.display()),
    );
    update_document(&cli.doc, &table, config)?;
    log(
        log_level,
        LogLevel::Info,
        &format!("Updated {}", cli.doc.display()),
    );
    Ok(())
}

fn dry_run(cli: &Cli, table: &SnippetTable, log_level: LogLevel) -> Result<()> {
    log(
        log_level,
        LogLevel::Info,
        "Performing dry run - validating placeholders...",
    );

    let document = snipsync::fs_utils::read_file_contents(&cli.doc)?;

    let mut all_valid = true;
    let mut valid_count = 0;
    let mut invalid_count = 0;

    for identifier in table.identifiers() {
        match snipsync::validate_placeholder(&document, identifier) {
            Ok(()) => {
                log(log_level, LogLevel::Info, &format!("✓ {identifier}"));
                valid_count += 1;
            }
            Err(e) => {
                log(log_level, LogLevel::Error, &format!("✗ {identifier}: {e}"));
                invalid_count += 1;
                all_valid = false;
            }
        }
    }

    println!("\nSummary: {} snippet(s) extracted", table.len());
    if valid_count > 0 {
        println!("  ✓ {valid_count} placeholder(s) valid");
    }
    if invalid_count > 0 {
        println!("  ✗ {invalid_count} placeholder(s) invalid");
    }

    if !all_valid {
        std::process::exit(1);
    }

    Ok(())
}

fn list_snippets(table: &SnippetTable, format: ListFormat) -> Result<()> {
    match format {
        ListFormat::Plain => {
            for identifier in table.identifiers() {
                println!("{identifier}");
            }
        }
        ListFormat::Detailed => {
            for identifier in table.identifiers() {
                let text = table.get(identifier).unwrap_or_default();
                println!("Snippet: {identifier}");
                println!("  Lines: {}", text.lines().count());
                println!("  Bytes: {}", text.len());
                if let Some(first_line) = text.lines().next() {
                    println!("  First: {first_line}");
                }
                println!();
            }
        }
        ListFormat::Json => {
            let mut infos = Vec::new();

            for identifier in table.identifiers() {
                let text = table.get(identifier).unwrap_or_default();
                infos.push(SnippetInfo {
                    identifier: identifier.to_string(),
                    lines: text.lines().count(),
                    bytes: text.len(),
                    text: text.to_string(),
                });
            }

            let json = serde_json::to_string_pretty(&infos)?;
            println!("{json}");
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

fn log(current_level: LogLevel, message_level: LogLevel, message: &str) {
    if message_level >= current_level {
        eprintln!(
            "[{}] {}",
            match message_level {
                LogLevel::Trace => "TRACE",
                LogLevel::Debug => "DEBUG",
                LogLevel::Info => "INFO",
                LogLevel::Warn => "WARN",
                LogLevel::Error => "ERROR",
            },
            message
        );
    }
}
