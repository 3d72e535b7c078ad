//! # Output Module
//!
//! This module centralizes all user-facing output for the relicense tool.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! Every line goes to stdout and is suppressed by `--quiet`, except failures,
//! which go to stderr and are always shown.

use std::path::{Path, PathBuf};

use owo_colors::{OwoColorize, Stream};

use crate::logging::is_quiet;
use crate::report::RunSummary;
use crate::rewriter::SkipReason;

/// Symbols used in output
pub mod symbols {
  /// Header converted
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Processing failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Skipped by a rule
  pub const SKIPPED: &str = "-";
}

/// Print the line announcing which file is about to be processed.
pub fn print_processing(path: &Path) {
  if is_quiet() {
    return;
  }

  println!("Processing {}", path.display());
}

/// Print the file name and its size in bytes.
pub fn print_file_size(path: &Path, size: u64) {
  if is_quiet() {
    return;
  }

  println!("File {} size={}", path.display(), size);
}

/// Human readable explanation of a skip.
pub fn skip_message(path: &Path, reason: &SkipReason) -> String {
  let path = path.display();
  match reason {
    SkipReason::Generated => format!("File '{path}' is generated. Skipping"),
    SkipReason::TooSmall { size } => format!("File '{path}' is too small ({size} bytes). Skipping"),
    SkipReason::TooFewLines { lines } => format!("File '{path}' has too few lines ({lines}). Skipping"),
    SkipReason::MissingEncodingHeader => format!("File '{path}' has no header. Skipping"),
    SkipReason::AlreadyCurrent => format!("File '{path}' has valid license date text"),
    SkipReason::UnrecognizedHeader => format!("File '{path}' has no recognized license text. Skipping"),
  }
}

/// Print why a file was skipped.
pub fn print_skipped(path: &Path, reason: &SkipReason) {
  if is_quiet() {
    return;
  }

  println!(
    "{} {}",
    symbols::SKIPPED.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    skip_message(path, reason)
  );
}

/// Print the announcement for a converted file.
pub fn print_converted(path: &Path, dry_run: bool) {
  if is_quiet() {
    return;
  }

  let verb = if dry_run { "Would add" } else { "Adding" };
  println!(
    "{} {} license to file '{}'",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    verb,
    path.display()
  );
}

/// Print a per-file failure in continue-on-error mode.
pub fn print_failure(path: &Path, error: &anyhow::Error) {
  eprintln!(
    "{} Failed: {}: {:#}",
    symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
    path.display(),
    error
  );
}

/// Formats paths as a bracketed, quoted, comma separated list.
pub fn format_path_list(paths: &[PathBuf]) -> String {
  let quoted: Vec<String> = paths.iter().map(|p| format!("'{}'", p.display())).collect();
  format!("[{}]", quoted.join(", "))
}

/// Print the final summary line.
///
/// Format: `Summary: N converted ['a.h', 'b.h']`, followed by the failure
/// count when there were failures.
pub fn print_summary(summary: &RunSummary, dry_run: bool) {
  if is_quiet() {
    return;
  }

  let verb = if dry_run { "to convert" } else { "converted" };
  let mut summary_line = format!(
    "Summary: {} {} {}",
    summary.converted.if_supports_color(Stream::Stdout, |s| s.cyan()),
    verb,
    format_path_list(&summary.converted_files)
  );

  if summary.failed > 0 {
    summary_line.push_str(&format!(
      ", {} failed",
      summary.failed.if_supports_color(Stream::Stdout, |s| s.red())
    ));
  }

  println!("{summary_line}");
}
