//! Config-file discovery.
//! Order: explicit path (flag or TIDY_MOVE_CONFIG), then ./tidy_move.xml,
//! then the per-user config dir. No hit means legacy single-target mode.

use std::env;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG: &str = "TIDY_MOVE_CONFIG";
pub const LOCAL_CONFIG_FILE: &str = "tidy_move.xml";

/// Conventional location next to the working directory.
pub fn local_config_path() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG_FILE)
}

/// OS-appropriate per-user config path.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(mut base) = dirs::config_dir() {
        base.push("tidy_move");
        base.push("config.xml");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("tidy_move")
                .join("config.xml")
        })
    }
}

/// Pick the config file for this invocation.
///
/// An explicit path (flag or env var) is returned even if the file is
/// missing, so the loader can fail fatally on it; the two conventional
/// locations are only used when a file actually exists there.
pub fn discover_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    if let Some(p) = env::var_os(ENV_CONFIG) {
        return Some(PathBuf::from(p));
    }
    let local = local_config_path();
    if local.is_file() {
        return Some(local);
    }
    match default_config_path() {
        Some(p) if p.is_file() => Some(p),
        _ => None,
    }
}
