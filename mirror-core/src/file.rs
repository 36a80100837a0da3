use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// A file to be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the file as UTF-8 (no byte-order mark), creating parent directories.
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

/// Remove a directory and everything in it, then recreate it empty.
pub fn clear_dir(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_dir_all(path)
            .wrap_err_with(|| format!("failed to clear '{}'", path.display()))?;
    }
    std::fs::create_dir_all(path).wrap_err_with(|| format!("failed to create '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vehicle.ts");

        write_file(&path, "export interface Vehicle {}\n").unwrap();

        assert!(path.exists());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "export interface Vehicle {}\n"
        );
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.ts");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.ts");

        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "updated");
        file.write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_written_file_has_no_bom() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bom.ts");

        File::new(&path, "x").write().unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"x");
    }

    #[test]
    fn test_clear_dir_removes_contents() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("out");
        fs::create_dir_all(dir.join("stale")).unwrap();
        fs::write(dir.join("stale").join("old.ts"), "old").unwrap();

        clear_dir(&dir).unwrap();

        assert!(dir.exists());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn test_clear_dir_creates_missing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("missing");

        clear_dir(&dir).unwrap();

        assert!(dir.is_dir());
    }
}
