//! # Header Module
//!
//! Pure, in-memory part of the rewrite: line splitting, header inspection and
//! construction of the replacement content. Nothing here touches the disk.

use crate::config::HeaderRules;

/// Why a file was left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
  /// The path names a machine generated file.
  Generated,
  /// The file is smaller than the configured minimum.
  TooSmall { size: u64 },
  /// The file has fewer lines than the configured minimum.
  TooFewLines { lines: usize },
  /// The first line has no encoding declaration.
  MissingEncodingHeader,
  /// The marker line already carries the current notice.
  AlreadyCurrent,
  /// The marker line carries neither the old nor the current notice.
  UnrecognizedHeader,
}

impl SkipReason {
  /// Short machine friendly label, used in reports.
  pub const fn label(&self) -> &'static str {
    match self {
      SkipReason::Generated => "generated",
      SkipReason::TooSmall { .. } => "too-small",
      SkipReason::TooFewLines { .. } => "too-few-lines",
      SkipReason::MissingEncodingHeader => "no-header",
      SkipReason::AlreadyCurrent => "up-to-date",
      SkipReason::UnrecognizedHeader => "unrecognized-header",
    }
  }
}

/// Result of inspecting a file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
  /// Leave the file as it is.
  Skip(SkipReason),
  /// Replace the file content with the given text.
  Rewrite(String),
}

/// Splits text into lines, each keeping its terminator.
///
/// A final line without a newline is still a line; an empty input has no
/// lines. Concatenating the result gives back the input unchanged.
pub fn split_lines_inclusive(content: &str) -> Vec<&str> {
  content.split_inclusive('\n').collect()
}

/// Inspects `content` and decides whether its header must be replaced.
///
/// Checks run in a fixed order and the first one that fails wins: line
/// count, encoding line, current notice, old notice. When the old notice is
/// found the returned text is the encoding line, then the banner, then every
/// line from `rules.header_lines` on, untouched.
pub fn plan_rewrite(content: &str, rules: &HeaderRules) -> Plan {
  let lines = split_lines_inclusive(content);

  if lines.len() < rules.min_lines {
    return Plan::Skip(SkipReason::TooFewLines { lines: lines.len() });
  }

  if !lines[0].contains(&rules.encoding_marker) {
    return Plan::Skip(SkipReason::MissingEncodingHeader);
  }

  let marker_line = lines[rules.marker_line];
  if marker_line.contains(&rules.new_marker) {
    return Plan::Skip(SkipReason::AlreadyCurrent);
  }
  if !marker_line.contains(&rules.old_marker) {
    return Plan::Skip(SkipReason::UnrecognizedHeader);
  }

  let tail = lines.get(rules.header_lines..).unwrap_or_default();
  let mut rewritten = String::with_capacity(content.len());
  rewritten.push_str(lines[0]);
  rewritten.push_str(&rules.banner);
  for line in tail {
    rewritten.push_str(line);
  }

  Plan::Rewrite(rewritten)
}
