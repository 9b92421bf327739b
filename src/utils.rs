use std::ffi::OsStr;
use std::path::Path;

/// Maps a file extension to the fence language tag used in the report.
/// Every extension in the inclusion set maps to a tag; anything else gets
/// an empty tag and its content is written without a fence.
pub fn get_language_tag(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or("")
        .to_lowercase()
        .as_str()
    {
        "py" => "python",
        "sql" => "sql",
        "json" => "json",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "md" => "markdown",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn included_extensions_have_tags() {
        assert_eq!(get_language_tag(Path::new("app.py")), "python");
        assert_eq!(get_language_tag(Path::new("schema.sql")), "sql");
        assert_eq!(get_language_tag(Path::new("data.json")), "json");
        assert_eq!(get_language_tag(Path::new("conf.yaml")), "yaml");
        assert_eq!(get_language_tag(Path::new("conf.yml")), "yaml");
        assert_eq!(get_language_tag(Path::new("pyproject.toml")), "toml");
        assert_eq!(get_language_tag(Path::new("README.md")), "markdown");
    }

    #[test]
    fn unknown_extensions_get_empty_tag() {
        assert_eq!(get_language_tag(Path::new("main.rs")), "");
        assert_eq!(get_language_tag(Path::new("Makefile")), "");
    }
}
