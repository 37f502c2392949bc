//! Core library for `tidy_move`.
//!
//! Walks configured source trees, filters entries by extension and
//! include/exclude patterns, and copies or moves the survivors into
//! destination trees (flattened or with structure preserved), with
//! collision-safe renaming and a dry-run preview mode.

pub mod app;
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod output;

pub use config::{Defaults, LogLevel, Mode, RunConfig, TargetEntry, TargetSpec};
pub use engine::{RunSummary, TargetSummary, TransferOutcome, run_targets};
pub use errors::FatalError;
