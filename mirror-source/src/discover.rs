//! Discovery of declaration files under an input root.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{Error, Result};

/// File extension of declaration files.
pub const SOURCE_EXTENSION: &str = "cs";

/// One discovered declaration file, not yet parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// File stem as found on disk.
    pub name: String,
    /// Raw lines of the file.
    pub lines: Vec<String>,
    /// Directory relative to the input root, `/`-separated, empty at the root.
    pub structure: String,
}

impl SourceUnit {
    pub fn new(name: impl Into<String>, structure: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
            structure: structure.into(),
        }
    }

    /// Build a unit from file text, splitting it into lines.
    pub fn from_text(name: impl Into<String>, structure: impl Into<String>, text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Self::new(name, structure, text.lines().map(str::to_string).collect())
    }

    /// Path of the source file relative to the input root, for diagnostics.
    pub fn display_path(&self) -> String {
        if self.structure.is_empty() {
            format!("{}.{}", self.name, SOURCE_EXTENSION)
        } else {
            format!("{}/{}.{}", self.structure, self.name, SOURCE_EXTENSION)
        }
    }
}

/// Collect every `.cs` file under `root`.
///
/// Within each directory, subdirectories are visited before files, and both
/// are visited in name order, so the result is stable across runs.
pub fn discover(root: &Path) -> Result<Vec<SourceUnit>> {
    let walker = WalkDir::new(root).sort_by(|a, b| {
        b.file_type()
            .is_dir()
            .cmp(&a.file_type().is_dir())
            .then_with(|| a.file_name().cmp(b.file_name()))
    });

    let mut units = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            Box::new(Error::Io {
                path,
                source: e.into(),
            })
        })?;

        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION)
        {
            continue;
        }

        let unit = load(root, path)?;
        tracing::debug!(unit = %unit.display_path(), lines = unit.lines.len(), "discovered");
        units.push(unit);
    }

    Ok(units)
}

fn load(root: &Path, path: &Path) -> Result<SourceUnit> {
    // Invalid UTF-8 is decoded with replacement characters
    let bytes = std::fs::read(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let text = String::from_utf8_lossy(&bytes);

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(SourceUnit::from_text(name, structure_of(root, path), &text))
}

/// Directory of `path` relative to `root`, joined with `/`.
fn structure_of(root: &Path, path: &Path) -> String {
    let dir = path.parent().unwrap_or(root);
    let relative = dir.strip_prefix(root).map(PathBuf::from).unwrap_or_default();

    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
