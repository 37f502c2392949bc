//! Layered filter pipeline applied to every discovered entry.
//! Stages run in a fixed order and short-circuit on the first rejection:
//! directory, hidden, extension, include patterns, exclude patterns.

use regex::Regex;
use std::path::Path;
use tracing::warn;

use super::path_util::{has_allowed_extension, is_hidden};
use crate::config::TargetSpec;

/// Ordered set of basename regexes, compiled once per target.
/// A pattern that fails to compile is surfaced as a warning event and then
/// treated as never-matching: it admits nothing as an include pattern and
/// excludes nothing as an exclude pattern.
#[derive(Debug)]
pub struct PatternSet {
    patterns: Vec<Regex>,
    configured: usize,
}

impl PatternSet {
    pub fn compile(raw: &[String], role: &str) -> Self {
        let mut patterns = Vec::with_capacity(raw.len());
        for r in raw {
            match Regex::new(r) {
                Ok(re) => patterns.push(re),
                Err(e) => warn!(
                    pattern = %r,
                    role,
                    error = %e,
                    "malformed filter pattern; treating as non-matching"
                ),
            }
        }
        Self {
            patterns,
            configured: raw.len(),
        }
    }

    /// True when the user configured at least one pattern, valid or not.
    /// Distinct from having compiled patterns: a list of only malformed
    /// include patterns still gates the pipeline and admits nothing.
    pub fn is_configured(&self) -> bool {
        self.configured > 0
    }

    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(name))
    }
}

/// Why an entry was rejected, in pipeline-stage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Directory,
    Hidden,
    Extension,
    NoIncludeMatch,
    Excluded,
}

impl Rejection {
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::Directory => "directory (recursion only)",
            Rejection::Hidden => "hidden entry",
            Rejection::Extension => "extension not allowed",
            Rejection::NoIncludeMatch => "no include pattern matched",
            Rejection::Excluded => "exclude pattern matched",
        }
    }
}

#[derive(Debug)]
pub struct FilterPipeline {
    skip_hidden: bool,
    extensions: Vec<String>,
    include: PatternSet,
    exclude: PatternSet,
}

impl FilterPipeline {
    pub fn new(spec: &TargetSpec) -> Self {
        Self {
            skip_hidden: spec.skip_hidden,
            extensions: spec.include_extensions.clone(),
            include: PatternSet::compile(&spec.include_patterns, "include"),
            exclude: PatternSet::compile(&spec.exclude_patterns, "exclude"),
        }
    }

    /// Run the stages in order; the first failing stage names the rejection.
    pub fn accepts(&self, path: &Path, is_dir: bool) -> Result<(), Rejection> {
        if is_dir {
            return Err(Rejection::Directory);
        }
        if self.skip_hidden && is_hidden(path) {
            return Err(Rejection::Hidden);
        }
        if !has_allowed_extension(path, &self.extensions) {
            return Err(Rejection::Extension);
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.include.is_configured() && !self.include.matches(&name) {
            return Err(Rejection::NoIncludeMatch);
        }
        if self.exclude.is_configured() && self.exclude.matches(&name) {
            return Err(Rejection::Excluded);
        }
        Ok(())
    }
}
