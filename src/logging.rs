//! Tracing initialization.
//! Builds a subscriber with EnvFilter, compact or JSON stdout formatting,
//! and an optional non-blocking file layer when a log file is configured.

use anyhow::Result;
use chrono::Local;
use std::fmt as stdfmt;
use std::fs::OpenOptions;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogLevel;
use crate::output as out;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> stdfmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%d/%m/%y %H:%M:%S"))
    }
}

#[inline]
fn to_level_filter(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Info => LevelFilter::DEBUG,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

fn env_filter_from_level(level_filter: LevelFilter) -> EnvFilter {
    let level_str = match level_filter {
        LevelFilter::ERROR => "error",
        LevelFilter::WARN => "warn",
        LevelFilter::INFO => "info",
        LevelFilter::DEBUG => "debug",
        LevelFilter::TRACE => "trace",
        _ => "info",
    };
    EnvFilter::new(level_str)
}

/// Open a non-blocking append writer for the log file; best-effort parent
/// creation. Failure degrades to stdout-only logging with a warning.
fn maybe_open_non_blocking_writer(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            Some((writer, guard))
        }
        Err(e) => {
            out::print_warn(&format!(
                "could not open log file '{}': {e}; logging to stdout only",
                path.display()
            ));
            None
        }
    }
}

/// Initialize tracing from LogLevel and format flags. Returns a WorkerGuard
/// when a file appender was created; hold it until shutdown so logs flush.
pub fn init_tracing(
    lvl: &LogLevel,
    log_file: Option<&Path>,
    json: bool,
) -> Result<Option<WorkerGuard>> {
    let env_filter = env_filter_from_level(to_level_filter(lvl));

    let mut guard = None;
    let writer = log_file.and_then(|p| {
        maybe_open_non_blocking_writer(p).map(|(w, g)| {
            guard = Some(g);
            w
        })
    });

    // Optional layers implement Layer, so a single registry call per format
    // covers both the file and no-file cases.
    if json {
        let stdout_layer = tsfmt::layer()
            .event_format(tsfmt::format().json())
            .with_timer(LocalHumanTime);
        let file_layer = writer.map(|w| {
            tsfmt::layer()
                .event_format(tsfmt::format().json())
                .with_timer(LocalHumanTime)
                .with_writer(w)
        });
        registry()
            .with(env_filter)
            .with(stdout_layer)
            .with(file_layer)
            .init();
    } else {
        let stdout_layer = tsfmt::layer().with_timer(LocalHumanTime).compact();
        let file_layer = writer.map(|w| {
            tsfmt::layer()
                .with_timer(LocalHumanTime)
                .compact()
                .with_writer(w)
        });
        registry()
            .with(env_filter)
            .with(stdout_layer)
            .with(file_layer)
            .init();
    }

    Ok(guard)
}
