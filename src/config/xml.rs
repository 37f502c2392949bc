//! XML configuration support.
//! Reads the config file into raw mirror structs (quick_xml), then resolves
//! each target by merging its own fields over the shared defaults, field by
//! field. XML comments are legal anywhere, so annotated configs parse as-is.
//!
//! A file that cannot be read or parsed, or that declares no targets, is a
//! fatal error; a target missing its source/destination becomes an Invalid
//! entry that the orchestrator warns about and skips.

use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::{Defaults, LogLevel, Mode, RunConfig, TargetEntry, TargetSpec};
use crate::errors::FatalError;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
struct XmlConfig {
    defaults: Option<XmlDefaults>,
    log_level: Option<String>,
    log_file: Option<String>,
    targets: Option<XmlTargets>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlDefaults {
    /// Comma-separated list, e.g. "txt, log".
    include_extensions: Option<String>,
    preserve_structure: Option<bool>,
    max_depth: Option<i64>,
    skip_hidden: Option<bool>,
    dry_run: Option<bool>,
    include_patterns: Option<XmlPatterns>,
    exclude_patterns: Option<XmlPatterns>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlPatterns {
    #[serde(rename = "pattern", default)]
    pattern: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct XmlTargets {
    #[serde(rename = "target", default)]
    target: Vec<XmlTarget>,
}

#[derive(Debug, Deserialize)]
struct XmlTarget {
    source_dir: Option<String>,
    destination_dir: Option<String>,
    mode: Option<String>,
    enabled: Option<bool>,
    include_extensions: Option<String>,
    preserve_structure: Option<bool>,
    max_depth: Option<i64>,
    skip_hidden: Option<bool>,
    dry_run: Option<bool>,
    include_patterns: Option<XmlPatterns>,
    exclude_patterns: Option<XmlPatterns>,
}

/// Split "txt, LOG" into lowercased, trimmed, non-empty entries.
fn parse_extensions(s: &str) -> Vec<String> {
    s.split(',')
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn resolve_defaults(raw: Option<XmlDefaults>) -> Defaults {
    let raw = raw.unwrap_or_default();
    let stock = Defaults::default();
    Defaults {
        include_extensions: raw
            .include_extensions
            .as_deref()
            .map(parse_extensions)
            .unwrap_or(stock.include_extensions),
        preserve_structure: raw.preserve_structure.unwrap_or(stock.preserve_structure),
        max_depth: raw.max_depth.unwrap_or(stock.max_depth),
        skip_hidden: raw.skip_hidden.unwrap_or(stock.skip_hidden),
        dry_run: raw.dry_run.unwrap_or(stock.dry_run),
        include_patterns: raw
            .include_patterns
            .map(|p| p.pattern)
            .unwrap_or(stock.include_patterns),
        exclude_patterns: raw
            .exclude_patterns
            .map(|p| p.pattern)
            .unwrap_or(stock.exclude_patterns),
    }
}

/// Merge one raw target over the shared defaults. Per-field override: a
/// target only replaces the fields it actually sets.
fn resolve_target(raw: XmlTarget, defaults: &Defaults, index: usize) -> TargetEntry {
    let source_dir = match raw.source_dir.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => PathBuf::from(s),
        _ => {
            return TargetEntry::Invalid {
                index,
                reason: "missing <source_dir>".to_string(),
            };
        }
    };
    let destination_dir = match raw.destination_dir.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => PathBuf::from(s),
        _ => {
            return TargetEntry::Invalid {
                index,
                reason: "missing <destination_dir>".to_string(),
            };
        }
    };
    let mode = match raw.mode.as_deref().map(str::trim) {
        Some(s) => match Mode::parse(s) {
            Some(m) => m,
            None => {
                return TargetEntry::Invalid {
                    index,
                    reason: format!("invalid <mode> '{s}' (expected 'copy' or 'move')"),
                };
            }
        },
        None => Mode::Copy,
    };

    let mut spec = TargetSpec::from_defaults(source_dir, destination_dir, mode, defaults);
    if let Some(s) = raw.include_extensions.as_deref() {
        spec.include_extensions = parse_extensions(s);
    }
    if let Some(v) = raw.preserve_structure {
        spec.preserve_structure = v;
    }
    if let Some(v) = raw.max_depth {
        spec.max_depth = v;
    }
    if let Some(v) = raw.skip_hidden {
        spec.skip_hidden = v;
    }
    if let Some(v) = raw.dry_run {
        spec.dry_run = v;
    }
    if let Some(p) = raw.include_patterns {
        spec.include_patterns = p.pattern;
    }
    if let Some(p) = raw.exclude_patterns {
        spec.exclude_patterns = p.pattern;
    }
    spec.enabled = raw.enabled.unwrap_or(true);
    TargetEntry::Resolved(spec)
}

/// Parse config XML text into a RunConfig. `path` is only used in messages.
pub fn parse_run_config(content: &str, path: &Path) -> Result<RunConfig, FatalError> {
    let parsed: XmlConfig = from_xml_str(content).map_err(|e| FatalError::ConfigMalformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let raw_targets = match parsed.targets {
        Some(t) if !t.target.is_empty() => t.target,
        _ => return Err(FatalError::NoTargets(path.to_path_buf())),
    };

    let defaults = resolve_defaults(parsed.defaults);
    let targets = raw_targets
        .into_iter()
        .enumerate()
        .map(|(i, raw)| resolve_target(raw, &defaults, i))
        .collect();

    Ok(RunConfig {
        targets,
        log_level: parsed
            .log_level
            .as_deref()
            .and_then(|s| LogLevel::parse(s.trim())),
        log_file: parsed.log_file.as_deref().map(str::trim).and_then(|s| {
            if s.is_empty() {
                None
            } else {
                Some(PathBuf::from(s))
            }
        }),
    })
}

/// Load and resolve the config file at `path`.
pub fn load_run_config(path: &Path) -> Result<RunConfig, FatalError> {
    if !path.exists() {
        return Err(FatalError::ConfigNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|e| FatalError::ConfigUnreadable {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_run_config(&content, path)
}
