use crate::error::{Result, SnipsyncError};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads the contents of a file at the given path
///
/// # Errors
///
/// - `SnipsyncError::FileNotFound` if the path doesn't exist or isn't a file.
/// - `SnipsyncError::Io` if there's an error reading the file.
pub fn read_file_contents(path: &Path) -> Result<String> {
    if !path.exists() || !path.is_file() {
        return Err(SnipsyncError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    fs::read_to_string(path).map_err(std::convert::Into::into)
}

/// Writes `contents` to `path` through a temporary file in the same directory,
/// renamed over the target on success. The target is either fully replaced or
/// left untouched.
///
/// # Errors
///
/// Returns `SnipsyncError::Io` if the temporary file can't be created, written,
/// or persisted over the target path.
pub fn write_file_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| SnipsyncError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_file_contents() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.swift");

        fs::write(&file_path, "let x = 1").unwrap();
        let result = read_file_contents(&file_path);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "let x = 1");

        let non_existent = temp_dir.path().join("nonexistent.swift");
        let result = read_file_contents(&non_existent);
        assert!(matches!(result, Err(SnipsyncError::FileNotFound { .. })));

        let dir_path = temp_dir.path().join("dir");
        fs::create_dir(&dir_path).unwrap();
        let result = read_file_contents(&dir_path);
        assert!(matches!(result, Err(SnipsyncError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_file_contents_empty() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.swift");

        fs::write(&file_path, "").unwrap();
        let result = read_file_contents(&file_path);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "");
    }

    #[test]
    fn test_write_file_atomic_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.md");

        write_file_atomic(&file_path, "first").unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "first");
    }

    #[test]
    fn test_write_file_atomic_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.md");

        fs::write(&file_path, "old content").unwrap();
        write_file_atomic(&file_path, "new content").unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new content");
    }

    #[test]
    fn test_write_file_atomic_unicode() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("unicode.md");

        let content = "Hello 世界 🌍 Здравствуй";
        write_file_atomic(&file_path, content).unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), content);
    }
}
