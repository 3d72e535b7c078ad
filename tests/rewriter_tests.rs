mod common;

use std::fs;

use anyhow::Result;
use common::{ENCODING_LINE, NEW_MARKER, OLD_MARKER, header_content, write_header_file};
use relicense::config::{HeaderRules, LICENSE_BANNER};
use relicense::diff::DiffManager;
use relicense::rewriter::{HeaderRewriter, Outcome, SkipReason};
use tempfile::tempdir;

fn rewriter() -> HeaderRewriter {
  HeaderRewriter::new(HeaderRules::default())
}

#[test]
fn test_old_header_is_replaced() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_header_file(temp_dir.path(), "Item.h", OLD_MARKER)?;
  let original = fs::read_to_string(&path)?;
  assert!(original.len() >= 600);

  assert!(rewriter().evaluate_and_convert(&path)?);

  let content = fs::read_to_string(&path)?;
  let lines: Vec<&str> = content.lines().collect();
  let original_lines: Vec<&str> = original.lines().collect();
  let banner: Vec<&str> = LICENSE_BANNER.lines().collect();

  assert_eq!(lines.len(), 1 + 5 + (20 - 18));
  assert_eq!(lines[0], original_lines[0]);
  assert_eq!(&lines[1..6], banner.as_slice());
  assert_eq!(lines[6], original_lines[18]);
  assert_eq!(lines[7], original_lines[19]);

  Ok(())
}

#[test]
fn test_current_header_is_left_unchanged() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_header_file(temp_dir.path(), "Item.h", NEW_MARKER)?;
  let before = fs::read(&path)?;

  let evaluation = rewriter().evaluate(&path)?;

  assert_eq!(evaluation.outcome, Outcome::Skipped(SkipReason::AlreadyCurrent));
  assert_eq!(evaluation.size, Some(before.len() as u64));
  assert_eq!(fs::read(&path)?, before);

  Ok(())
}

#[test]
fn test_generated_file_is_skipped_without_reading() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_header_file(temp_dir.path(), "Generated_foo.h", OLD_MARKER)?;
  let before = fs::read(&path)?;

  let evaluation = rewriter().evaluate(&path)?;
  assert_eq!(evaluation.outcome, Outcome::Skipped(SkipReason::Generated));
  assert_eq!(evaluation.size, None);
  assert_eq!(fs::read(&path)?, before);

  // The name alone decides: a generated path that does not exist is not an error
  let missing = temp_dir.path().join("GeneratedMissing.h");
  assert!(!rewriter().evaluate_and_convert(&missing)?);

  Ok(())
}

#[test]
fn test_generated_marker_matches_directories() -> Result<()> {
  let temp_dir = tempdir()?;
  let generated_dir = temp_dir.path().join("Generated");
  fs::create_dir_all(&generated_dir)?;
  let path = write_header_file(&generated_dir, "Item.h", OLD_MARKER)?;

  assert_eq!(
    rewriter().evaluate(&path)?.outcome,
    Outcome::Skipped(SkipReason::Generated)
  );

  Ok(())
}

#[test]
fn test_small_file_is_skipped() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = temp_dir.path().join("small.h");
  let content = header_content(ENCODING_LINE, OLD_MARKER, 20);
  let content = &content[..499];
  fs::write(&path, content)?;

  let evaluation = rewriter().evaluate(&path)?;
  assert_eq!(evaluation.outcome, Outcome::Skipped(SkipReason::TooSmall { size: 499 }));
  assert_eq!(fs::read_to_string(&path)?, content);

  Ok(())
}

#[test]
fn test_file_with_few_lines_is_skipped() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = temp_dir.path().join("long_lines.h");

  // Nine lines, but well over 500 bytes
  let mut content = header_content(ENCODING_LINE, OLD_MARKER, 8);
  content.push_str(&"x".repeat(600));
  content.push('\n');
  fs::write(&path, &content)?;

  let evaluation = rewriter().evaluate(&path)?;
  assert_eq!(evaluation.outcome, Outcome::Skipped(SkipReason::TooFewLines { lines: 9 }));
  assert_eq!(fs::read_to_string(&path)?, content);

  Ok(())
}

#[test]
fn test_missing_encoding_line_is_skipped() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = temp_dir.path().join("plain.h");
  let content = header_content("// no encoding declaration here\n", OLD_MARKER, 20);
  fs::write(&path, &content)?;

  assert_eq!(
    rewriter().evaluate(&path)?.outcome,
    Outcome::Skipped(SkipReason::MissingEncodingHeader)
  );
  assert_eq!(fs::read_to_string(&path)?, content);

  Ok(())
}

#[test]
fn test_unrecognized_header_is_skipped() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_header_file(temp_dir.path(), "other.h", "// Copyright 1998 Somebody Else")?;
  let before = fs::read(&path)?;

  assert_eq!(
    rewriter().evaluate(&path)?.outcome,
    Outcome::Skipped(SkipReason::UnrecognizedHeader)
  );
  assert_eq!(fs::read(&path)?, before);

  Ok(())
}

#[test]
fn test_second_run_changes_nothing() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = temp_dir.path().join("big.h");
  fs::write(&path, header_content(ENCODING_LINE, OLD_MARKER, 60))?;

  assert!(rewriter().evaluate_and_convert(&path)?);
  let once = fs::read(&path)?;

  let evaluation = rewriter().evaluate(&path)?;
  assert_eq!(evaluation.outcome, Outcome::Skipped(SkipReason::AlreadyCurrent));
  assert_eq!(fs::read(&path)?, once);

  Ok(())
}

#[test]
fn test_dry_run_does_not_write() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_header_file(temp_dir.path(), "Item.h", OLD_MARKER)?;
  let before = fs::read(&path)?;
  let diff_path = temp_dir.path().join("changes.diff");

  let rewriter = HeaderRewriter::new(HeaderRules::default())
    .with_dry_run(true)
    .with_diff_manager(DiffManager::new(false, Some(diff_path.clone())));

  assert!(rewriter.evaluate_and_convert(&path)?);
  assert_eq!(fs::read(&path)?, before);

  let diff = fs::read_to_string(&diff_path)?;
  assert!(diff.contains(&format!("-{OLD_MARKER}")));
  assert!(diff.contains(&format!("+{NEW_MARKER}")));

  Ok(())
}

#[test]
fn test_custom_rules() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = temp_dir.path().join("custom.h");
  fs::write(&path, header_content(ENCODING_LINE, "// Copyright 2019 ACME", 20))?;

  let rules = HeaderRules::from_toml_str(
    r#"
old-marker = "// Copyright 2019 ACME"
new-marker = "// Copyright 2024 ACME"
banner = "// Copyright 2024 ACME\n"
marker-line = 2
header-lines = 18
"#,
  )?;

  assert!(HeaderRewriter::new(rules).evaluate_and_convert(&path)?);

  let content = fs::read_to_string(&path)?;
  let lines: Vec<&str> = content.lines().collect();
  assert_eq!(lines.len(), 1 + 1 + 2);
  assert_eq!(lines[1], "// Copyright 2024 ACME");

  Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
  let temp_dir = tempdir().unwrap();
  let result = rewriter().evaluate(&temp_dir.path().join("absent.h"));
  assert!(result.is_err());
  assert!(format!("{:#}", result.unwrap_err()).contains("absent.h"));
}

#[test]
fn test_invalid_utf8_is_an_error() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = temp_dir.path().join("latin1.h");
  let mut bytes = header_content(ENCODING_LINE, OLD_MARKER, 20).into_bytes();
  bytes.push(0xE9);
  fs::write(&path, &bytes)?;

  assert!(rewriter().evaluate(&path).is_err());
  assert_eq!(fs::read(&path)?, bytes);

  Ok(())
}
