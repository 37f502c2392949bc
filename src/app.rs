//! Application orchestrator.
//! Discovers and loads the configuration, initializes logging, runs the
//! target engine, and prints the run summary. Only config-level failures
//! propagate out of here; everything narrower is handled inside the engine.

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::Args;
use crate::config::{self, paths};
use crate::engine;
use crate::logging::init_tracing;
use crate::output as out;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before anything else.
    if args.print_config {
        print_config_locations(&args);
        return Ok(());
    }

    // Discover and load config. Fatal errors (missing explicit file,
    // malformed XML, no targets) bubble out to a non-zero exit.
    let mut cfg = match paths::discover_config_path(args.config.as_deref()) {
        Some(path) => {
            let cfg = config::load_run_config(&path)?;
            out::print_info(&format!("using config: {}", path.display()));
            cfg
        }
        None => {
            out::print_info("no config file found; running the legacy single target");
            config::legacy_run_config(
                args.source_dir.clone(),
                args.destination_dir.clone(),
                args.mode.as_deref(),
            )
        }
    };

    if args.dry_run {
        cfg.force_dry_run();
    }

    let level = args
        .effective_log_level()
        .or(cfg.log_level.clone())
        .unwrap_or_default();

    // Keep the guard alive until the run finishes so file logs flush.
    let _guard = init_tracing(&level, cfg.log_file.as_deref(), args.json)?;

    debug!(?args, "starting tidy_move");

    let summary = engine::run_targets(&cfg);
    info!(
        targets = summary.targets.len(),
        targets_skipped = summary.targets_skipped,
        failed_files = summary.total_failed(),
        "run finished"
    );
    out::print_info(&summary.to_line());

    // Per-file and per-target failures are reported, never fatal.
    Ok(())
}

fn print_config_locations(args: &Args) {
    if let Some(p) = &args.config {
        out::print_info(&format!("explicit --config path:\n  {}", p.display()));
        return;
    }
    // var_os, matching discovery: a non-UTF-8 override is still honored.
    if let Some(p) = std::env::var_os(paths::ENV_CONFIG) {
        out::print_info(&format!(
            "using {} (explicit):\n  {}",
            paths::ENV_CONFIG,
            std::path::Path::new(&p).display()
        ));
        return;
    }
    let local = paths::local_config_path();
    out::print_info(&format!(
        "local config candidate: {} ({})",
        local.display(),
        if local.is_file() { "exists" } else { "missing" }
    ));
    match paths::default_config_path() {
        Some(p) => out::print_info(&format!(
            "user config candidate: {} ({})",
            p.display(),
            if p.is_file() { "exists" } else { "missing" }
        )),
        None => out::print_warn("could not determine a per-user config path"),
    }
    out::print_info("with neither present, tidy_move runs its legacy single target");
}
