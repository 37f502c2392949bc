//! Leaf path predicates and collision-safe destination naming.

use chrono::Local;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Case-insensitive extension allow-list check. An empty list allows all;
/// a file with no extension never matches a non-empty list.
pub fn has_allowed_extension(path: &Path, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_ascii_lowercase();
            allowed.iter().any(|a| *a == ext)
        }
        None => false,
    }
}

/// True iff the final path segment is non-empty, not "." or "..", and starts
/// with the hidden-file marker.
pub fn is_hidden(path: &Path) -> bool {
    match path.file_name() {
        Some(name) => {
            let name = name.to_string_lossy();
            !name.is_empty() && name != "." && name != ".." && name.starts_with('.')
        }
        None => false,
    }
}

fn taken(path: &Path, claimed: &HashSet<PathBuf>) -> bool {
    path.exists() || claimed.contains(path)
}

/// Return `candidate` unchanged when it is free, both on disk and in the
/// in-run claimed set. Otherwise insert a second-resolution timestamp before
/// the extension ("a.txt" -> "a_20240131120000.txt"); same-second collisions
/// get an incrementing numeric suffix ("a_20240131120000_1.txt", ...).
///
/// The claimed set covers destinations chosen earlier in the same run that
/// may not be physically written yet (always, under dry-run), which a bare
/// filesystem existence check cannot see.
pub fn unique_destination(candidate: &Path, claimed: &HashSet<PathBuf>) -> PathBuf {
    if !taken(candidate, claimed) {
        return candidate.to_path_buf();
    }

    let stamp = Local::now().format("%Y%m%d%H%M%S").to_string();
    let stem = candidate
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string());
    let ext = candidate
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let stamped = candidate.with_file_name(format!("{stem}_{stamp}{ext}"));
    if !taken(&stamped, claimed) {
        return stamped;
    }

    for n in 1u32..=u32::MAX {
        let alt = candidate.with_file_name(format!("{stem}_{stamp}_{n}{ext}"));
        if !taken(&alt, claimed) {
            return alt;
        }
    }

    // Every numbered candidate was taken; disambiguate with the pid.
    candidate.with_file_name(format!("{stem}_{stamp}_{}{ext}", std::process::id()))
}
