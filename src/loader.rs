//! Reading documents from storage.
//!
//! The parser itself only ever sees text. Whenever it needs another document, for
//! the root of [`crate::from_path`] or for an `imports` entry, it goes through a
//! [`SourceLoader`]. [`FsLoader`] is the default and reads from the filesystem;
//! tests and embedders can supply their own.

use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Supplies document text for a resolved path.
pub trait SourceLoader {
    /// Reads the full text of the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is rejected or cannot be read.
    fn load(&self, path: &Path) -> Result<String>;

    /// A stable identity for `path`, used to detect import cycles.
    fn identity(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}

/// Loads documents from the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn load(&self, path: &Path) -> Result<String> {
        validate_path(path)?;

        if !path.is_file() {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let name = path.file_name().unwrap_or(path.as_os_str());
            return Err(Error::io(&format!(
                "YAML file \"{}\" not found in directory \"{}\"",
                name.to_string_lossy(),
                dir.display()
            )));
        }

        fs::read_to_string(path)
            .map_err(|e| Error::io(&format!("failed to read \"{}\": {}", path.display(), e)))
    }

    fn identity(&self, path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Checks that `path` names a `.yaml` or `.yml` file whose name uses only word
/// characters, `.`, `_` and `-`.
///
/// # Examples
///
/// ```rust
/// use serde_confyaml::loader::validate_path;
/// use std::path::Path;
///
/// assert!(validate_path(Path::new("config/app.yaml")).is_ok());
/// assert!(validate_path(Path::new("config/app.yml")).is_ok());
/// assert!(validate_path(Path::new("config/app.json")).is_err());
/// assert!(validate_path(Path::new("config/my app.yaml")).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] when the path is rejected.
pub fn validate_path(path: &Path) -> Result<()> {
    let text = path.to_string_lossy();
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let allowed = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));
    if !allowed {
        return Err(Error::InvalidPath(format!(
            "\"{}\" contains unsupported characters",
            text
        )));
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => Ok(()),
        _ => Err(Error::InvalidPath(format!(
            "\"{}\" must end with .yaml or .yml",
            text
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_path_rejects_bad_extension() {
        assert!(matches!(
            validate_path(Path::new("app.toml")),
            Err(Error::InvalidPath(_))
        ));
        assert!(validate_path(Path::new("yaml")).is_err());
    }

    #[test]
    fn test_fs_loader_reads_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.yaml");
        fs::write(&path, "name: app\n").unwrap();

        let text = FsLoader.load(&path).unwrap();
        assert_eq!(text, "name: app\n");
    }

    #[test]
    fn test_fs_loader_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.yml");

        match FsLoader.load(&path) {
            Err(Error::Io(msg)) => assert!(msg.contains("missing.yml")),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn test_fs_loader_identity_is_canonical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.yaml");
        fs::write(&path, "a: 1\n").unwrap();

        let dotted = dir.path().join(".").join("a.yaml");
        assert_eq!(FsLoader.identity(&path), FsLoader.identity(&dotted));
    }
}
