//! # relicense
//!
//! A tool that brings the copyright header of source files up to date.
//!
//! Every file is expected to start with an encoding declaration followed by
//! a fixed-size license banner. When the banner still carries the old
//! copyright notice, everything between the encoding line and the end of the
//! banner is replaced by the current banner. The rest of the file is kept
//! byte for byte.
//!
//! Files are left untouched when their path marks them as generated, when
//! they are too small or too short, when the encoding line is missing, or
//! when the notice is already current or not recognized.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use relicense::config::HeaderRules;
//! use relicense::driver::{ErrorPolicy, RunDriver};
//! use relicense::rewriter::HeaderRewriter;
//!
//! fn main() -> anyhow::Result<()> {
//!     let rewriter = HeaderRewriter::new(HeaderRules::default());
//!
//!     // A single file
//!     let converted = rewriter.evaluate_and_convert("src/Item.h".as_ref())?;
//!     println!("converted: {converted}");
//!
//!     // A batch, stopping at the first unreadable file
//!     let run = RunDriver::new(&rewriter, ErrorPolicy::Abort).run(&["a.h", "b.h"])?;
//!     println!("{} converted", run.summary.converted);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`rewriter`] - Per-file header inspection and replacement
//! * [`driver`] - Sequential processing of a batch of files
//! * [`config`] - Header rules and their TOML overrides
//! * [`logging`] - Logging utilities for verbose output

pub mod config;
pub mod diff;
pub mod driver;
pub mod logging;
pub mod output;
pub mod report;
pub mod rewriter;
