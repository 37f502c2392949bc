//! Transfer executor: dry-run preview or the real copy/move.
//! Move tries an atomic rename first and degrades to copy-then-delete when
//! the rename fails (typically cross-volume). Every failure is folded into
//! the outcome so one bad file never aborts its siblings.

use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use super::resolve::ensure_parent_dir;
use crate::config::Mode;

/// Per-candidate result, used for reporting only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Moved,
    Copied,
    /// Dry-run preview; no filesystem action was taken.
    Previewed,
    Skipped(String),
    Failed(String),
}

/// Execute (or preview) one transfer. The destination is already resolved
/// and collision-free; its parent directory is created here, lazily, right
/// before the write.
pub fn transfer_file(mode: Mode, dry_run: bool, src: &Path, dest: &Path) -> TransferOutcome {
    if dry_run {
        if let Some(parent) = dest.parent()
            && !parent.exists()
        {
            info!(action = "mkdir -p", path = %parent.display(), "dry-run");
        }
        info!(action = mode.verb(), src = %src.display(), dest = %dest.display(), "dry-run");
        return TransferOutcome::Previewed;
    }

    if let Err(e) = ensure_parent_dir(dest) {
        warn!(src = %src.display(), error = %e, "cannot prepare destination");
        return TransferOutcome::Failed(format!("{e:#}"));
    }

    match mode {
        Mode::Copy => match fs::copy(src, dest) {
            Ok(_) => {
                info!(src = %src.display(), dest = %dest.display(), "copied");
                TransferOutcome::Copied
            }
            Err(e) => {
                warn!(src = %src.display(), dest = %dest.display(), error = %e, "copy failed");
                TransferOutcome::Failed(format!(
                    "copy '{}' -> '{}': {e}",
                    src.display(),
                    dest.display()
                ))
            }
        },
        Mode::Move => move_with_fallback(src, dest),
    }
}

fn move_with_fallback(src: &Path, dest: &Path) -> TransferOutcome {
    match fs::rename(src, dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "renamed atomically");
            TransferOutcome::Moved
        }
        Err(e) => {
            debug!(error = %e, "atomic rename failed, falling back to copy+delete");
            copy_then_delete(src, dest)
        }
    }
}

/// Degraded move: copy, then remove the source. Copy failure is a Failed
/// outcome; remove failure still reports Moved, because the data did arrive.
fn copy_then_delete(src: &Path, dest: &Path) -> TransferOutcome {
    copy_then_delete_with(src, dest, |p| fs::remove_file(p))
}

// The remove step is injectable so the delete-failure edge stays testable
// without relying on filesystem permissions (which root ignores).
fn copy_then_delete_with(
    src: &Path,
    dest: &Path,
    remove: impl FnOnce(&Path) -> std::io::Result<()>,
) -> TransferOutcome {
    if let Err(e) = fs::copy(src, dest) {
        warn!(src = %src.display(), dest = %dest.display(), error = %e, "fallback copy failed");
        return TransferOutcome::Failed(format!(
            "copy '{}' -> '{}': {e}",
            src.display(),
            dest.display()
        ));
    }
    if let Err(e) = remove(src) {
        // Tolerated inconsistency: the data now exists in both places.
        // Report as moved, but say so.
        warn!(
            src = %src.display(),
            dest = %dest.display(),
            error = %e,
            "copied but could not remove source; file now exists in both places"
        );
    } else {
        info!(src = %src.display(), dest = %dest.display(), "moved via copy+delete");
    }
    TransferOutcome::Moved
}
