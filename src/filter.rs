use std::ffi::OsStr;
use std::path::Path;

/// Directory names whose whole subtree is skipped.
const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".venv",
    "venv",
    "__pycache__",
    "node_modules",
    "build",
    "dist",
];

/// Individual file names that are never rendered.
const EXCLUDED_FILES: &[&str] = &[".DS_Store", ".gitignore"];

/// Extensions eligible for content rendering.
const INCLUDED_EXTENSIONS: &[&str] = &[".py", ".sql", ".json", ".yaml", ".yml", ".toml", ".md"];

/// Immutable filtering rules, built once at startup and passed explicitly to
/// the walker and the structure renderer. Tests construct their own instances
/// to override the defaults.
#[derive(Debug, Clone)]
pub struct FilterRules {
    pub excluded_dirs: Vec<String>,
    pub excluded_files: Vec<String>,
    pub included_extensions: Vec<String>,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            excluded_dirs: EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            excluded_files: EXCLUDED_FILES.iter().map(|s| s.to_string()).collect(),
            included_extensions: INCLUDED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FilterRules {
    /// Returns true if an entry with the given name should be skipped
    /// entirely. Hidden names and compiled Python artifacts are always
    /// skipped; beyond that, directories and files consult their own
    /// exclusion lists.
    pub fn is_excluded(&self, name: &str, is_dir: bool) -> bool {
        if name.starts_with('.') {
            return true;
        }

        if name.ends_with(".pyc") {
            return true;
        }

        if is_dir {
            self.excluded_dirs.iter().any(|d| d == name)
        } else {
            self.excluded_files.iter().any(|f| f == name)
        }
    }

    /// Returns true if the file's extension is in the included set.
    pub fn has_included_extension(&self, path: &Path) -> bool {
        match path.extension().and_then(OsStr::to_str) {
            Some(ext) => {
                let dotted = format!(".{ext}");
                self.included_extensions.iter().any(|e| *e == dotted)
            }
            None => false,
        }
    }
}
