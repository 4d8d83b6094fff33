//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Extract the path component of a URL, without surrounding slashes.
///
/// Returns `None` if the URL is invalid.
///
/// # Examples
/// ```ignore
/// extract_url_path("https://example.github.io/windows-folder-remark/") -> Some("windows-folder-remark")
/// extract_url_path("https://example.com")                               -> Some("")
/// extract_url_path("invalid")                                           -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    Some(parsed.path().trim_matches('/').to_string())
}

/// Find the config file, searching upward from `start`.
///
/// An absolute `config_name` is returned as-is when it exists.
///
/// ```text
/// /home/user/docs/guide/       ← start
/// /home/user/docs/lingonav.toml ← found
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_extract_url_path() {
        assert_eq!(
            extract_url_path("https://example.github.io/windows-folder-remark/"),
            Some("windows-folder-remark".to_string())
        );
        assert_eq!(
            extract_url_path("https://example.com:8080/a/b?query=1#top"),
            Some("a/b".to_string())
        );
        assert_eq!(extract_url_path("https://example.com"), Some(String::new()));
        assert_eq!(extract_url_path("invalid-url"), None);
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs/zh/guide");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("lingonav.toml"), "").unwrap();

        let found = find_config_file(Path::new("lingonav.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("lingonav.toml"));
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        assert!(find_config_file(&path, dir.path()).is_none());
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }
}
