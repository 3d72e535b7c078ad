#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

pub const ENCODING_LINE: &str = "# -*- coding: utf-8 -*-\n";
pub const OLD_MARKER: &str = "// Copyright 2000-2020 IFPEN-CEA";
pub const NEW_MARKER: &str = "// Copyright 2000-2022 CEA (www.cea.fr) IFPEN (www.ifpenergiesnouvelles.com)";

/// Builds a file with `total_lines` lines: the encoding line, `marker` on
/// line 2, filler header lines up to line 17 and body lines from 18 on.
///
/// Every line is padded so a 20-line file comfortably exceeds 500 bytes.
pub fn header_content(first_line: &str, marker: &str, total_lines: usize) -> String {
  let mut content = String::from(first_line);
  for i in 1..total_lines {
    let line = if i == 2 {
      marker.to_string()
    } else if i < 18 {
      format!("// old header line {i:02} ..........")
    } else {
      format!("int body_line_{i:02} = {i}; // ..........")
    };
    content.push_str(&line);
    content.push('\n');
  }
  content
}

/// Writes a standard 20-line file carrying `marker` on line 2.
pub fn write_header_file(dir: &Path, name: &str, marker: &str) -> Result<PathBuf> {
  let path = dir.join(name);
  fs::write(&path, header_content(ENCODING_LINE, marker, 20))?;
  Ok(path)
}
