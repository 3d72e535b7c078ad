//! # Configuration Module
//!
//! This module holds the rules the header rewriter applies: which files are
//! exempt, where the license marker is expected, which marker is old and
//! which is current, and the banner that replaces the old header.
//!
//! [`HeaderRules::default`] carries the built-in values. A TOML file passed
//! with `--config` can override any subset of them.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::verbose_log;

/// Marker that flags a path as machine generated.
pub const GENERATED_MARKER: &str = "Generated";

/// Files below this size (in bytes) are treated as stubs.
pub const MIN_FILE_SIZE: u64 = 500;

/// Files with fewer lines than this are left alone.
pub const MIN_LINE_COUNT: usize = 10;

/// Substring the first line must contain.
pub const ENCODING_MARKER: &str = "coding: utf-8";

/// Notice found in headers that still need rewriting.
pub const OLD_LICENSE_MARKER: &str = "// Copyright 2000-2020 IFPEN-CEA";

/// Notice found in headers that are already up to date.
pub const NEW_LICENSE_MARKER: &str =
  "// Copyright 2000-2022 CEA (www.cea.fr) IFPEN (www.ifpenergiesnouvelles.com)";

/// Banner written right after the encoding line.
pub const LICENSE_BANNER: &str = "\
//-----------------------------------------------------------------------------
// Copyright 2000-2022 CEA (www.cea.fr) IFPEN (www.ifpenergiesnouvelles.com)
// See the top-level COPYRIGHT file for details.
// SPDX-License-Identifier: Apache-2.0
//-----------------------------------------------------------------------------
";

/// Rules driving header detection and replacement.
///
/// Every field has a default, so a config file only needs the keys it wants
/// to change:
///
/// ```toml
/// old-marker = "// Copyright 2000-2021 IFPEN-CEA"
/// min-size = 200
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct HeaderRules {
  /// Paths containing this substring are never touched.
  pub generated_marker: String,

  /// Minimum file size in bytes.
  pub min_size: u64,

  /// Minimum number of lines.
  pub min_lines: usize,

  /// Substring expected on line 0.
  pub encoding_marker: String,

  /// Zero-based line holding the copyright notice.
  pub marker_line: usize,

  /// Number of leading lines (encoding line included) making up the old
  /// header. Everything from this index on is kept verbatim.
  pub header_lines: usize,

  /// Notice identifying a header to rewrite.
  pub old_marker: String,

  /// Notice identifying a header that is already current.
  pub new_marker: String,

  /// Replacement banner, newline terminated.
  pub banner: String,
}

impl Default for HeaderRules {
  fn default() -> Self {
    Self {
      generated_marker: GENERATED_MARKER.to_string(),
      min_size: MIN_FILE_SIZE,
      min_lines: MIN_LINE_COUNT,
      encoding_marker: ENCODING_MARKER.to_string(),
      marker_line: 2,
      header_lines: 18,
      old_marker: OLD_LICENSE_MARKER.to_string(),
      new_marker: NEW_LICENSE_MARKER.to_string(),
      banner: LICENSE_BANNER.to_string(),
    }
  }
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  Read { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML or unknown keys.
  #[error("Failed to parse config file '{path}': {source}")]
  Parse { path: PathBuf, source: toml::de::Error },

  /// A value is out of range or inconsistent with another one.
  #[error("Invalid value for '{key}': {message}")]
  Invalid { key: &'static str, message: String },
}

impl HeaderRules {
  /// Load rules from a TOML file, falling back to defaults for missing keys.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
      path: path.to_path_buf(),
      source: e,
    })?;

    Self::from_toml_str(&content).map_err(|e| match e {
      ConfigError::Parse { source, .. } => ConfigError::Parse {
        path: path.to_path_buf(),
        source,
      },
      other => other,
    })
  }

  /// Parse rules from TOML text. Parse errors carry an empty path.
  pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
    let rules: HeaderRules = toml::from_str(content).map_err(|e| ConfigError::Parse {
      path: PathBuf::new(),
      source: e,
    })?;

    rules.validate()?;
    Ok(rules.normalize())
  }

  /// Checks that the rules can be applied to any file without indexing past
  /// the lines the size and line-count checks guarantee.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let non_empty = [
      ("generated-marker", &self.generated_marker),
      ("encoding-marker", &self.encoding_marker),
      ("old-marker", &self.old_marker),
      ("new-marker", &self.new_marker),
      ("banner", &self.banner),
    ];
    for (key, value) in non_empty {
      if value.is_empty() {
        return Err(ConfigError::Invalid {
          key,
          message: "must not be empty".to_string(),
        });
      }
    }

    if self.header_lines == 0 {
      return Err(ConfigError::Invalid {
        key: "header-lines",
        message: "must keep at least the encoding line".to_string(),
      });
    }

    if self.marker_line >= self.min_lines {
      return Err(ConfigError::Invalid {
        key: "marker-line",
        message: format!("{} is not below min-lines ({})", self.marker_line, self.min_lines),
      });
    }

    if self.marker_line >= self.header_lines {
      return Err(ConfigError::Invalid {
        key: "marker-line",
        message: format!(
          "{} is outside the replaced header ({} lines)",
          self.marker_line, self.header_lines
        ),
      });
    }

    Ok(())
  }

  /// Ensures the banner ends with a newline so the kept content starts on its
  /// own line.
  fn normalize(mut self) -> Self {
    if !self.banner.ends_with('\n') {
      self.banner.push('\n');
    }
    self
  }
}

/// Resolve the rules for this run.
///
/// Without an explicit path the built-in rules are used; there is no implicit
/// discovery.
pub fn load_rules(explicit_path: Option<&Path>) -> anyhow::Result<HeaderRules> {
  use anyhow::Context;

  match explicit_path {
    Some(path) => {
      HeaderRules::load(path).with_context(|| format!("Failed to load config from {}", path.display()))
    }
    None => {
      verbose_log!("No config file given, using built-in header rules");
      Ok(HeaderRules::default())
    }
  }
}
