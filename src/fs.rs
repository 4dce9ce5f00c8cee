//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes `content` to `path` through a sibling temp file and a rename.
///
/// The temp file sits in the same directory so the rename stays on one
/// filesystem; an interrupted write leaves the previous file intact.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("config.toml");

        fs::write(&file_path, "[funtl]\nstyle = \"yoda\"\n").unwrap();
        atomic_write(&file_path, "[funtl]\nstyle = \"groot\"\n").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert!(content.contains("groot"));
        assert!(!temp_dir.path().join(".config.toml.tmp").exists());
    }

    #[test]
    fn test_atomic_write_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing").join("config.toml");

        assert!(atomic_write(&file_path, "x").is_err());
    }
}
