//! Directory structure rendering.
//!
//! Two renderers implement the same capability: one shells out to the
//! external `tree` command, the other walks the tree itself. The external
//! renderer is tried first and the internal one takes over on any failure,
//! so a missing `tree` binary never fails the run.

use crate::filter::FilterRules;
use anyhow::{Context, Result, bail};
use log::debug;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Exclusion pattern passed to the external `tree` command.
const TREE_EXCLUDE_PATTERN: &str = "venv|__pycache__|*.pyc|.git|.env|node_modules|build|dist";

/// Notice written into the report when the external command is unavailable.
const FALLBACK_NOTICE: &str =
    "External 'tree' command not found. Using internal directory tree implementation.\n\n";

/// Produces the indented directory-tree listing for the report.
pub trait StructureRenderer {
    fn render(&self, root: &Path) -> Result<String>;
}

/// Renderer backed by the external `tree` command, invoked with a depth
/// limit of 3, directories-first ordering, and the fixed exclusion pattern.
/// The call blocks without a timeout; combined stdout and stderr are used
/// verbatim on success.
pub struct TreeCommand {
    pub command: String,
    pub exclude_pattern: String,
}

impl Default for TreeCommand {
    fn default() -> Self {
        Self {
            command: "tree".to_string(),
            exclude_pattern: TREE_EXCLUDE_PATTERN.to_string(),
        }
    }
}

impl StructureRenderer for TreeCommand {
    fn render(&self, root: &Path) -> Result<String> {
        let output = Command::new(&self.command)
            .arg("-L")
            .arg("3")
            .arg("--dirsfirst")
            .arg("-I")
            .arg(&self.exclude_pattern)
            .current_dir(root)
            .output()
            .with_context(|| format!("Failed to run '{}'", self.command))?;

        if !output.status.success() {
            bail!("'{}' exited with {}", self.command, output.status);
        }

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        Ok(String::from_utf8_lossy(&combined).into_owned())
    }
}

/// Internal recursive renderer used when the external command fails.
///
/// Entries are filtered by the exclusion rules, sorted lexically, and drawn
/// with box-drawing connectors. Recursion stops once `depth > max_depth`,
/// so a `max_depth` of 3 lists four entry levels.
pub struct DirectoryTree {
    pub rules: FilterRules,
    pub max_depth: usize,
}

impl DirectoryTree {
    pub fn new(rules: FilterRules) -> Self {
        Self {
            rules,
            max_depth: 3,
        }
    }

    fn render_dir(&self, path: &Path, prefix: &str, depth: usize, out: &mut String) {
        if depth > self.max_depth {
            return;
        }

        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                let _ = writeln!(out, "{prefix}Error reading directory: {err}");
                return;
            }
        };

        let mut entries: Vec<_> = entries
            .filter_map(|e| e.ok())
            .filter(|entry| {
                let name = entry.file_name();
                let Some(name) = name.to_str() else {
                    return false;
                };
                let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
                !self.rules.is_excluded(name, is_dir)
            })
            .collect();
        entries.sort_by_key(|e| e.file_name());

        let count = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            let is_last = i + 1 == count;

            let (connector, child_prefix) = if is_last {
                ("└── ", format!("{prefix}    "))
            } else {
                ("├── ", format!("{prefix}│   "))
            };

            let _ = writeln!(out, "{prefix}{connector}{name}");

            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                self.render_dir(&entry.path(), &child_prefix, depth + 1, out);
            }
        }
    }
}

impl StructureRenderer for DirectoryTree {
    fn render(&self, root: &Path) -> Result<String> {
        let mut out = String::new();
        self.render_dir(root, "", 0, &mut out);
        Ok(out)
    }
}

/// Renders the project structure, preferring the given external command and
/// falling back to the internal renderer. The fallback path prepends a
/// notice line so the report records which renderer produced the listing.
/// Callers pass `TreeCommand::default()`; tests substitute a command that
/// cannot exist to drive the fallback arm.
pub fn render_structure(external: &TreeCommand, root: &Path, rules: &FilterRules) -> String {
    match external.render(root) {
        Ok(listing) => listing,
        Err(err) => {
            debug!("External tree command failed, using fallback: {err:#}");
            let fallback = DirectoryTree::new(rules.clone());
            let mut listing = String::from(FALLBACK_NOTICE);
            // Infallible: errors are reported inline in the listing.
            listing.push_str(&fallback.render(root).unwrap_or_default());
            listing
        }
    }
}
