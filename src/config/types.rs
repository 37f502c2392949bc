//! Core configuration types.
//! - Defaults holds the shared filter/layout settings.
//! - TargetSpec is one resolved source->destination job (immutable per run).
//! - RunConfig is the ordered target list consumed top-to-bottom.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Transfer mode for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Copy,
    Move,
}

impl Mode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "copy" => Some(Mode::Copy),
            "move" => Some(Mode::Move),
            _ => None,
        }
    }

    /// Present-tense verb for event lines ("copy a -> b").
    pub fn verb(&self) -> &'static str {
        match self {
            Mode::Copy => "copy",
            Mode::Move => "move",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

impl FromStr for Mode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid mode: '{s}' (expected 'copy' or 'move')"))
    }
}

/// Shared defaults merged under each target, field by field.
#[derive(Debug, Clone)]
pub struct Defaults {
    /// Lowercased extensions; empty = allow all.
    pub include_extensions: Vec<String>,
    pub preserve_structure: bool,
    /// -1 = unlimited; 0 = immediate children of the source dir only.
    pub max_depth: i64,
    pub skip_hidden: bool,
    pub dry_run: bool,
    /// Regex strings matched against basenames, in order.
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            include_extensions: Vec::new(),
            preserve_structure: true,
            max_depth: -1,
            skip_hidden: false,
            dry_run: false,
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }
}

/// One resolved source->destination job. Built once by merging a target's own
/// fields over the shared defaults; not mutated afterwards.
#[derive(Debug, Clone)]
pub struct TargetSpec {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub mode: Mode,
    pub include_extensions: Vec<String>,
    pub preserve_structure: bool,
    pub max_depth: i64,
    pub skip_hidden: bool,
    pub dry_run: bool,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub enabled: bool,
}

impl TargetSpec {
    /// Construct a spec with the stock defaults for everything but the paths
    /// and mode.
    pub fn new(
        source_dir: impl Into<PathBuf>,
        destination_dir: impl Into<PathBuf>,
        mode: Mode,
    ) -> Self {
        Self::from_defaults(source_dir, destination_dir, mode, &Defaults::default())
    }

    pub fn from_defaults(
        source_dir: impl Into<PathBuf>,
        destination_dir: impl Into<PathBuf>,
        mode: Mode,
        defaults: &Defaults,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            destination_dir: destination_dir.into(),
            mode,
            include_extensions: defaults.include_extensions.clone(),
            preserve_structure: defaults.preserve_structure,
            max_depth: defaults.max_depth,
            skip_hidden: defaults.skip_hidden,
            dry_run: defaults.dry_run,
            include_patterns: defaults.include_patterns.clone(),
            exclude_patterns: defaults.exclude_patterns.clone(),
            enabled: true,
        }
    }

    /// One-line human summary of the resolved configuration, printed before
    /// a target is processed.
    pub fn describe(&self) -> String {
        let ext = if self.include_extensions.is_empty() {
            "all".to_string()
        } else {
            self.include_extensions.join(",")
        };
        let depth = if self.max_depth < 0 {
            "unlimited".to_string()
        } else {
            self.max_depth.to_string()
        };
        let mut flags = Vec::new();
        if self.skip_hidden {
            flags.push("skip-hidden");
        }
        if self.dry_run {
            flags.push("dry-run");
        }
        if !self.include_patterns.is_empty() {
            flags.push("include-patterns");
        }
        if !self.exclude_patterns.is_empty() {
            flags.push("exclude-patterns");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(", {}", flags.join(", "))
        };
        format!(
            "target: '{}' -> '{}' ({}, {}, ext: {}, depth: {}{})",
            self.source_dir.display(),
            self.destination_dir.display(),
            self.mode,
            if self.preserve_structure {
                "preserve structure"
            } else {
                "flatten"
            },
            ext,
            depth,
            flags
        )
    }
}

/// Entry in the ordered target list. Targets that fail field-level resolution
/// (missing source/destination) stay in the list so the orchestrator can emit
/// the warning at the right point in the run.
#[derive(Debug, Clone)]
pub enum TargetEntry {
    Resolved(TargetSpec),
    Invalid { index: usize, reason: String },
}

/// Everything a single invocation consumes: the ordered targets plus the
/// logging settings the config may carry.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub targets: Vec<TargetEntry>,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
}

impl RunConfig {
    /// Force dry-run on every resolved target (CLI --dry-run).
    pub fn force_dry_run(&mut self) {
        for entry in &mut self.targets {
            if let TargetEntry::Resolved(spec) = entry {
                spec.dry_run = true;
            }
        }
    }
}
