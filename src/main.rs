//! # relicense
//!
//! Rewrites outdated copyright headers in the files given on the command line.

mod cli;

use anyhow::Result;

use crate::cli::{Cli, run_rewrite};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_rewrite(cli.rewrite_args)
}
