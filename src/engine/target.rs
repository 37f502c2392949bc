//! Target orchestration: iterate the ordered target list, traverse each
//! enabled target's tree, and drive filter -> resolve -> transfer per file.
//! Failures are isolated at the narrowest scope: a bad file never stops its
//! siblings, a bad target never stops the run.

use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::filter::{FilterPipeline, Rejection};
use super::path_util::is_hidden;
use super::resolve::DestinationResolver;
use super::transfer::{TransferOutcome, transfer_file};
use crate::config::{RunConfig, TargetEntry, TargetSpec};
use crate::output as out;

/// Per-target tallies, reported at the end of each target.
#[derive(Debug, Clone, Default)]
pub struct TargetSummary {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub moved: usize,
    pub copied: usize,
    pub previewed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl TargetSummary {
    fn new(spec: &TargetSpec) -> Self {
        Self {
            source_dir: spec.source_dir.clone(),
            destination_dir: spec.destination_dir.clone(),
            ..Default::default()
        }
    }

    fn record(&mut self, outcome: &TransferOutcome) {
        match outcome {
            TransferOutcome::Moved => self.moved += 1,
            TransferOutcome::Copied => self.copied += 1,
            TransferOutcome::Previewed => self.previewed += 1,
            TransferOutcome::Skipped(_) => self.skipped += 1,
            TransferOutcome::Failed(_) => self.failed += 1,
        }
    }

    fn to_line(&self) -> String {
        format!(
            "'{}': {} moved, {} copied, {} previewed, {} skipped, {} failed",
            self.source_dir.display(),
            self.moved,
            self.copied,
            self.previewed,
            self.skipped,
            self.failed
        )
    }
}

/// Whole-run report: one summary per processed target plus the count of
/// targets skipped before traversal.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub targets: Vec<TargetSummary>,
    pub targets_skipped: usize,
}

impl RunSummary {
    pub fn total_failed(&self) -> usize {
        self.targets.iter().map(|t| t.failed).sum()
    }

    pub fn to_line(&self) -> String {
        let (moved, copied, previewed, failed) =
            self.targets.iter().fold((0, 0, 0, 0), |acc, t| {
                (
                    acc.0 + t.moved,
                    acc.1 + t.copied,
                    acc.2 + t.previewed,
                    acc.3 + t.failed,
                )
            });
        format!(
            "run complete: {} target(s) processed, {} skipped; {} moved, {} copied, {} previewed, {} failed",
            self.targets.len(),
            self.targets_skipped,
            moved,
            copied,
            previewed,
            failed
        )
    }
}

/// Process the whole ordered target list. Never fails: everything below the
/// config level is recoverable and lands in the summary instead.
pub fn run_targets(cfg: &RunConfig) -> RunSummary {
    let mut summary = RunSummary::default();
    for entry in &cfg.targets {
        match entry {
            TargetEntry::Invalid { index, reason } => {
                warn!(index = *index, reason = %reason, "target failed to resolve");
                out::print_skip(&format!("target #{index}: {reason}"));
                summary.targets_skipped += 1;
            }
            TargetEntry::Resolved(spec) => {
                if !spec.enabled {
                    out::print_skip(&format!(
                        "target '{}' is disabled",
                        spec.source_dir.display()
                    ));
                    summary.targets_skipped += 1;
                    continue;
                }
                match process_target(spec) {
                    Some(ts) => summary.targets.push(ts),
                    None => summary.targets_skipped += 1,
                }
            }
        }
    }
    summary
}

/// Process one enabled target end to end. Returns None when the target is
/// skipped before traversal (missing source, destination-root failure).
pub fn process_target(spec: &TargetSpec) -> Option<TargetSummary> {
    out::print_info(&spec.describe());

    if !spec.source_dir.is_dir() {
        warn!(path = %spec.source_dir.display(), "source directory does not exist");
        out::print_skip(&format!(
            "source directory does not exist: {}",
            spec.source_dir.display()
        ));
        return None;
    }

    let src_real =
        dunce::canonicalize(&spec.source_dir).unwrap_or_else(|_| spec.source_dir.clone());
    let dst_real =
        dunce::canonicalize(&spec.destination_dir).unwrap_or_else(|_| spec.destination_dir.clone());
    if src_real == dst_real {
        warn!(path = %src_real.display(), "source and destination are the same directory");
        out::print_skip(&format!(
            "source and destination are the same directory: {}",
            src_real.display()
        ));
        return None;
    }

    // The destination root is the one eager creation; file parents are
    // materialized lazily so empty source subtrees leave no trace.
    if spec.dry_run {
        if !spec.destination_dir.exists() {
            out::print_dryrun(&format!("mkdir -p '{}'", spec.destination_dir.display()));
        }
    } else if let Err(e) = fs::create_dir_all(&spec.destination_dir) {
        warn!(path = %spec.destination_dir.display(), error = %e, "cannot create destination root");
        out::print_error(&format!(
            "cannot create destination root '{}': {e}",
            spec.destination_dir.display()
        ));
        return None;
    }

    let pipeline = FilterPipeline::new(spec);
    let mut resolver = DestinationResolver::new(spec);
    let mut summary = TargetSummary::new(spec);

    let mut walker = WalkDir::new(&spec.source_dir).min_depth(1);
    if spec.max_depth >= 0 {
        // Config depth 0 = immediate children; walkdir counts the root as 0.
        walker = walker.max_depth(spec.max_depth as usize + 1);
    }

    let skip_hidden = spec.skip_hidden;
    let entries = walker
        .into_iter()
        // Prune hidden directories so their contents are never visited;
        // hidden files still reach the pipeline and count as skipped.
        .filter_entry(move |e| {
            !(skip_hidden && e.file_type().is_dir() && is_hidden(e.path()))
        });

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "traversal error");
                continue;
            }
        };

        match pipeline.accepts(entry.path(), entry.file_type().is_dir()) {
            Err(Rejection::Directory) => continue,
            Err(rej) => {
                debug!(path = %entry.path().display(), reason = rej.reason(), "filtered out");
                // Per-file SKIP lines only at verbose levels; quiet trees
                // with many non-matches stay readable by default.
                if tracing::enabled!(tracing::Level::DEBUG) {
                    out::print_skip(&format!(
                        "'{}' ({})",
                        entry.path().display(),
                        rej.reason()
                    ));
                }
                summary.record(&TransferOutcome::Skipped(rej.reason().to_string()));
                continue;
            }
            Ok(()) => {}
        }

        let dest = match resolver.resolve(entry.path()) {
            Ok(d) => d,
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "cannot resolve destination");
                out::print_error(&format!(
                    "cannot resolve destination for '{}': {e:#}",
                    entry.path().display()
                ));
                summary.record(&TransferOutcome::Failed(format!("{e:#}")));
                continue;
            }
        };

        let outcome = transfer_file(spec.mode, spec.dry_run, entry.path(), &dest);
        match &outcome {
            TransferOutcome::Moved => out::print_done(&format!(
                "moved '{}' -> '{}'",
                entry.path().display(),
                dest.display()
            )),
            TransferOutcome::Copied => out::print_done(&format!(
                "copied '{}' -> '{}'",
                entry.path().display(),
                dest.display()
            )),
            TransferOutcome::Previewed => out::print_dryrun(&format!(
                "{} '{}' -> '{}'",
                spec.mode.verb(),
                entry.path().display(),
                dest.display()
            )),
            TransferOutcome::Failed(reason) => out::print_error(reason),
            TransferOutcome::Skipped(_) => {}
        }
        summary.record(&outcome);
    }

    out::print_info(&summary.to_line());
    Some(summary)
}
