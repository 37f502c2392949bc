//! Configuration: shared defaults, per-target specs, XML loading and
//! config-file discovery.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{default_config_path, discover_config_path, local_config_path};
pub use types::{Defaults, LogLevel, Mode, RunConfig, TargetEntry, TargetSpec};
pub use xml::load_run_config;

use std::path::PathBuf;

/// Legacy single-target defaults, used only when no config file is
/// discovered. Explicit constants rather than mutable process state;
/// positional CLI arguments may override source/destination/mode.
pub const LEGACY_SOURCE_DEFAULT: &str = "./incoming";
pub const LEGACY_DEST_DEFAULT: &str = "./sorted";
pub const LEGACY_EXTENSION: &str = "txt";

/// Build the one hardcoded legacy target, applying positional overrides.
pub fn legacy_run_config(
    source_dir: Option<PathBuf>,
    destination_dir: Option<PathBuf>,
    mode: Option<&str>,
) -> RunConfig {
    let mut spec = TargetSpec::new(
        source_dir.unwrap_or_else(|| PathBuf::from(LEGACY_SOURCE_DEFAULT)),
        destination_dir.unwrap_or_else(|| PathBuf::from(LEGACY_DEST_DEFAULT)),
        mode.and_then(Mode::parse).unwrap_or(Mode::Move),
    );
    spec.include_extensions = vec![LEGACY_EXTENSION.to_string()];
    RunConfig {
        targets: vec![TargetEntry::Resolved(spec)],
        log_level: None,
        log_file: None,
    }
}
