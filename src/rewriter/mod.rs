//! # Rewriter Module
//!
//! Decides, file by file, whether the leading license header is outdated and
//! replaces it when it is.
//!
//! The module is organized into two submodules:
//! - [`file_io`] - File size, reading and writing
//! - [`header`] - In-memory inspection and construction of the new content
//!
//! [`HeaderRewriter`] ties them together and is the entry point for a single
//! file.

mod file_io;
mod header;

use std::path::Path;

use anyhow::Result;
pub use file_io::FileIO;
pub use header::{Plan, SkipReason, plan_rewrite, split_lines_inclusive};
use tracing::{debug, trace};

use crate::config::HeaderRules;
use crate::diff::DiffManager;
use crate::output;

/// Result of evaluating one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// The header was replaced (or would be, in dry-run mode).
  Converted,
  /// A rule fired and the file was left as it is.
  Skipped(SkipReason),
}

impl Outcome {
  pub const fn is_converted(&self) -> bool {
    matches!(self, Outcome::Converted)
  }
}

/// Outcome plus what was learned about the file on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
  /// Size in bytes, `None` when the file was skipped before it was looked at.
  pub size: Option<u64>,
  pub outcome: Outcome,
}

impl Evaluation {
  const fn skipped(size: Option<u64>, reason: SkipReason) -> Self {
    Self {
      size,
      outcome: Outcome::Skipped(reason),
    }
  }
}

/// Rewrites outdated license headers in place.
pub struct HeaderRewriter {
  rules: HeaderRules,

  /// Compute conversions without writing them.
  dry_run: bool,

  diff_manager: DiffManager,
}

impl HeaderRewriter {
  /// Creates a rewriter that writes its changes and shows no diffs.
  pub fn new(rules: HeaderRules) -> Self {
    Self {
      rules,
      dry_run: false,
      diff_manager: DiffManager::default(),
    }
  }

  /// Switches dry-run mode on or off.
  pub fn with_dry_run(mut self, dry_run: bool) -> Self {
    self.dry_run = dry_run;
    self
  }

  /// Sets the diff manager used for every conversion.
  pub fn with_diff_manager(mut self, diff_manager: DiffManager) -> Self {
    self.diff_manager = diff_manager;
    self
  }

  pub const fn rules(&self) -> &HeaderRules {
    &self.rules
  }

  pub const fn is_dry_run(&self) -> bool {
    self.dry_run
  }

  /// Evaluates `path` and converts it when its header is outdated.
  ///
  /// Returns whether the file was converted. See [`evaluate`](Self::evaluate)
  /// for the rules and errors.
  pub fn evaluate_and_convert(&self, path: &Path) -> Result<bool> {
    Ok(self.evaluate(path)?.outcome.is_converted())
  }

  /// Runs the skip rules against `path` in order and rewrites it when none
  /// fires.
  ///
  /// The generated-name check happens before any filesystem access. The size
  /// check only reads metadata. Everything else works on the full text.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be stat'ed, read as UTF-8, or
  /// written. The file is left untouched unless the write itself fails
  /// partway.
  pub fn evaluate(&self, path: &Path) -> Result<Evaluation> {
    if path.to_string_lossy().contains(&self.rules.generated_marker) {
      return Ok(Evaluation::skipped(None, SkipReason::Generated));
    }

    let size = FileIO::file_size(path)?;
    output::print_file_size(path, size);
    if size < self.rules.min_size {
      return Ok(Evaluation::skipped(Some(size), SkipReason::TooSmall { size }));
    }

    let content = FileIO::read_full_content(path)?;
    let rewritten = match plan_rewrite(&content, &self.rules) {
      Plan::Skip(reason) => {
        trace!("Skipping: {} ({})", path.display(), reason.label());
        return Ok(Evaluation::skipped(Some(size), reason));
      }
      Plan::Rewrite(rewritten) => rewritten,
    };

    debug!("Outdated license header found in {}", path.display());
    self.diff_manager.display_diff(path, &content, &rewritten)?;

    if self.dry_run {
      debug!("Dry run, not writing {}", path.display());
    } else {
      FileIO::write_file(path, &rewritten)?;
    }

    Ok(Evaluation {
      size: Some(size),
      outcome: Outcome::Converted,
    })
  }
}
