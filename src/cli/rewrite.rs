//! # Rewrite Command
//!
//! Wires the command-line arguments to the rewriter and the run driver, then
//! prints the summary and writes the optional report.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use relicense::config::load_rules;
use relicense::diff::DiffManager;
use relicense::driver::{ErrorPolicy, RunDriver};
use relicense::info_log;
use relicense::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use relicense::output::print_summary;
use relicense::report::write_json_report;
use relicense::rewriter::HeaderRewriter;
use tracing::debug;

/// Arguments for the rewrite run
#[derive(Args, Debug)]
pub struct RewriteArgs {
  /// Files whose license header should be brought up to date, processed in
  /// the given order
  #[arg(required = true, value_name = "FILES")]
  pub files: Vec<PathBuf>,

  /// Report what would be converted without writing any file
  #[arg(long)]
  pub dry_run: bool,

  /// Show a diff of every conversion on stderr
  #[arg(long)]
  pub show_diff: bool,

  /// Save the diff of every conversion to a file
  #[arg(long, short = 'o', value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Continue with the next file after a read or write error, and fail at
  /// the end instead of at the first error
  #[arg(long)]
  pub keep_going: bool,

  /// TOML file overriding the built-in header rules
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Write a JSON report of the run to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the rewriter over every file named on the command line.
pub fn run_rewrite(args: RewriteArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let rules = load_rules(args.config.as_deref())?;
  debug!(?rules, "Header rules in effect");

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff);
  diff_manager.init()?;

  let rewriter = HeaderRewriter::new(rules)
    .with_dry_run(args.dry_run)
    .with_diff_manager(diff_manager);

  let policy = if args.keep_going {
    ErrorPolicy::KeepGoing
  } else {
    ErrorPolicy::Abort
  };

  let run = RunDriver::new(&rewriter, policy).run(&args.files)?;

  print_summary(&run.summary, args.dry_run);

  if let Some(ref output_path) = args.report_json {
    if let Err(e) = write_json_report(output_path, &run.reports, &run.summary, args.dry_run) {
      eprintln!("Error generating JSON report: {e:#}");
    } else {
      info_log!("Generated JSON report at {}", output_path.display());
    }
  }

  if run.summary.failed > 0 {
    bail!("{} file(s) failed to process", run.summary.failed);
  }

  Ok(())
}
