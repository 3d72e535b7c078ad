//! # Report Module
//!
//! Per-file results of a run, the run summary, and the optional JSON report
//! written with `--report-json`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::rewriter::{Outcome, SkipReason};

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
  /// The header was replaced (or would be, in dry-run mode)
  Converted,
  /// A skip rule fired
  Skipped,
  /// A fatal error occurred while processing the file
  Failed,
}

/// Information about a processed file for reporting
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
  /// Path as given on the command line
  #[serde(serialize_with = "serialize_path")]
  pub path: PathBuf,
  /// File size in bytes, when it was read
  pub size: Option<u64>,
  /// Action taken on the file
  pub action: FileAction,
  /// Skip label or error message
  pub reason: Option<String>,
}

impl FileReport {
  /// Builds the report for a file the rewriter finished with.
  pub fn from_outcome(path: &Path, size: Option<u64>, outcome: &Outcome) -> Self {
    let (action, reason) = match outcome {
      Outcome::Converted => (FileAction::Converted, None),
      Outcome::Skipped(reason) => (FileAction::Skipped, Some(reason.label().to_string())),
    };
    Self {
      path: path.to_path_buf(),
      size,
      action,
      reason,
    }
  }

  /// Builds the report for a file that failed.
  pub fn failed(path: &Path, error: &anyhow::Error) -> Self {
    Self {
      path: path.to_path_buf(),
      size: None,
      action: FileAction::Failed,
      reason: Some(format!("{error:#}")),
    }
  }
}

fn serialize_path<S>(path: &Path, serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.serialize_str(&path.to_string_lossy())
}

/// Aggregate result of a run.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RunSummary {
  /// Number of files handed to the rewriter
  pub total: usize,
  /// Number of files converted
  pub converted: usize,
  /// Number of files skipped by a rule
  pub skipped: usize,
  /// Number of files that failed
  pub failed: usize,
  /// Converted files, in input order
  #[serde(serialize_with = "serialize_paths")]
  pub converted_files: Vec<PathBuf>,
}

fn serialize_paths<S>(paths: &[PathBuf], serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.collect_seq(paths.iter().map(|p| p.to_string_lossy()))
}

impl RunSummary {
  /// Counts the reports, keeping converted paths in the order they appear.
  pub fn from_reports(reports: &[FileReport]) -> Self {
    let mut summary = Self {
      total: reports.len(),
      ..Self::default()
    };

    for report in reports {
      match report.action {
        FileAction::Converted => {
          summary.converted += 1;
          summary.converted_files.push(report.path.clone());
        }
        FileAction::Skipped => summary.skipped += 1,
        FileAction::Failed => summary.failed += 1,
      }
    }

    summary
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  generated_at: String,
  dry_run: bool,
  summary: &'a RunSummary,
  files: &'a [FileReport],
}

/// Renders the JSON report.
pub fn render_json(files: &[FileReport], summary: &RunSummary, dry_run: bool) -> Result<String> {
  let report = JsonReport {
    generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    dry_run,
    summary,
    files,
  };
  serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")
}

/// Writes the JSON report to `output_path`.
pub fn write_json_report(output_path: &Path, files: &[FileReport], summary: &RunSummary, dry_run: bool) -> Result<()> {
  let content = render_json(files, summary, dry_run)?;
  fs::write(output_path, content).with_context(|| format!("Failed to write report to {}", output_path.display()))
}
