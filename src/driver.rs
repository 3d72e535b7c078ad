//! # Driver Module
//!
//! Runs the [`HeaderRewriter`] over a list of files, strictly one after the
//! other and in the order given, and collects a [`FileReport`] per file.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::output;
use crate::report::{FileReport, RunSummary};
use crate::rewriter::{HeaderRewriter, Outcome};

/// What to do when a file fails with an I/O or decoding error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
  /// Stop at the first failure and return its error. Files converted before
  /// it stay converted.
  #[default]
  Abort,
  /// Record the failure and move on to the next file.
  KeepGoing,
}

/// Reports and summary of a finished run.
#[derive(Debug)]
pub struct RunResult {
  /// One report per input file, in input order.
  pub reports: Vec<FileReport>,
  pub summary: RunSummary,
}

/// Sequential driver over a batch of files.
pub struct RunDriver<'a> {
  rewriter: &'a HeaderRewriter,
  policy: ErrorPolicy,
}

impl<'a> RunDriver<'a> {
  pub const fn new(rewriter: &'a HeaderRewriter, policy: ErrorPolicy) -> Self {
    Self { rewriter, policy }
  }

  /// Processes every file and returns the collected reports.
  ///
  /// # Errors
  ///
  /// With [`ErrorPolicy::Abort`], returns the first file error; the remaining
  /// files are not attempted. With [`ErrorPolicy::KeepGoing`] this never
  /// fails: errors end up in the reports instead.
  pub fn run<P: AsRef<Path>>(&self, files: &[P]) -> Result<RunResult> {
    let mut reports = Vec::with_capacity(files.len());

    for path in files {
      let path = path.as_ref();
      output::print_processing(path);

      match self.rewriter.evaluate(path) {
        Ok(evaluation) => {
          match &evaluation.outcome {
            Outcome::Converted => output::print_converted(path, self.rewriter.is_dry_run()),
            Outcome::Skipped(reason) => output::print_skipped(path, reason),
          }
          reports.push(FileReport::from_outcome(path, evaluation.size, &evaluation.outcome));
        }
        Err(e) => match self.policy {
          ErrorPolicy::Abort => return Err(e),
          ErrorPolicy::KeepGoing => {
            debug!("Continuing after failure on {}", path.display());
            output::print_failure(path, &e);
            reports.push(FileReport::failed(path, &e));
          }
        },
      }
    }

    let summary = RunSummary::from_reports(&reports);
    Ok(RunResult { reports, summary })
  }
}
