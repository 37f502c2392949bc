//! Destination resolver: layout policy, in-run claimed-path tracking, and
//! lazy parent-directory creation.

use anyhow::{Context, Result, anyhow};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::path_util::unique_destination;
use crate::config::TargetSpec;

/// Computes collision-free destinations for one target's run.
///
/// Every resolved path is recorded in the claimed set, so two sources that
/// flatten to the same basename get distinct destinations even before the
/// first one is physically written (and under dry-run, where nothing ever
/// is).
#[derive(Debug)]
pub struct DestinationResolver {
    source_dir: PathBuf,
    destination_dir: PathBuf,
    preserve_structure: bool,
    claimed: HashSet<PathBuf>,
}

impl DestinationResolver {
    pub fn new(spec: &TargetSpec) -> Self {
        Self {
            source_dir: spec.source_dir.clone(),
            destination_dir: spec.destination_dir.clone(),
            preserve_structure: spec.preserve_structure,
            claimed: HashSet::new(),
        }
    }

    /// Raw layout-policy path, before collision handling.
    fn raw_destination(&self, source: &Path) -> Result<PathBuf> {
        if self.preserve_structure {
            let rel = source.strip_prefix(&self.source_dir).with_context(|| {
                format!(
                    "'{}' is not under source dir '{}'",
                    source.display(),
                    self.source_dir.display()
                )
            })?;
            Ok(self.destination_dir.join(rel))
        } else {
            let name = source
                .file_name()
                .ok_or_else(|| anyhow!("source has no file name: {}", source.display()))?;
            Ok(self.destination_dir.join(name))
        }
    }

    /// Final collision-free destination for `source`, claimed for the rest
    /// of this run.
    pub fn resolve(&mut self, source: &Path) -> Result<PathBuf> {
        let raw = self.raw_destination(source)?;
        let dest = unique_destination(&raw, &self.claimed);
        self.claimed.insert(dest.clone());
        Ok(dest)
    }
}

/// Create the immediate parent of `dest` if missing. Idempotent; called
/// right before each write so subtrees with no matching files never produce
/// empty destination directories.
pub fn ensure_parent_dir(dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create destination directory '{}'", parent.display()))?;
    }
    Ok(())
}
