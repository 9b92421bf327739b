use crate::filter::FilterRules;
use anyhow::Result;
use ignore::WalkBuilder;
use log::debug;
use std::path::{Path, PathBuf};

/// Collects all renderable files under the project root, applying the
/// exclusion rules and the extension inclusion set.
///
/// Excluded directories prune their whole subtree. Entries are sorted
/// lexically per directory so the output is reproducible across platforms.
pub fn collect_files(project_root: &Path, rules: &FilterRules) -> Result<Vec<PathBuf>> {
    let filter_rules = rules.clone();

    let mut builder = WalkBuilder::new(project_root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            // The walk root itself is never filtered, even if its name
            // would match a rule (e.g. a dot-prefixed temp directory).
            if entry.depth() == 0 {
                return true;
            }

            let Some(name) = entry.file_name().to_str() else {
                // Non-UTF-8 names cannot be matched against the rules; the
                // entry (and, for directories, its subtree) is skipped.
                debug!("Skipping non-UTF-8 name: {}", entry.path().display());
                return false;
            };

            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            !filter_rules.is_excluded(name, is_dir)
        });

    let mut files = Vec::new();

    for result in builder.build() {
        match result {
            Ok(entry) => {
                if entry.file_type().is_some_and(|t| t.is_file())
                    && rules.has_included_extension(entry.path())
                {
                    files.push(entry.path().to_path_buf());
                }
            }
            Err(err) => {
                eprintln!("Error walking path: {err}");
            }
        }
    }

    Ok(files)
}
