//! Typed error definitions for tidy_move.
//! Only run-aborting failures get a variant here; per-target and per-file
//! problems are reported at their own scope and never cross it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FatalError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Cannot read config file {path}: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file {path}: {reason}")]
    ConfigMalformed { path: PathBuf, reason: String },

    #[error("Config file {0} declares no <targets>")]
    NoTargets(PathBuf),
}
