use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

// Maximum size for export documents read back from disk: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

// Give up looking for a free "name (n).ext" slot after this many attempts
const MAX_UNIQUE_ATTEMPTS: u32 = 10_000;

/// Write `contents` to `path` via a sibling temp file and rename.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let file_name = path
        .file_name()
        .with_context(|| format!("Destination has no file name: {}", path.display()))?;
    let temp = path.with_file_name(format!("{}.tmp", file_name.to_string_lossy()));

    fs::write(&temp, contents)
        .with_context(|| format!("Failed to write temp file: {}", temp.display()))?;
    if let Err(e) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(e).with_context(|| format!("Failed to move file into place: {}", path.display()));
    }
    Ok(())
}

/// First path in `dir` named `filename` that does not exist yet, trying
/// `stem (1).ext`, `stem (2).ext`, ... the way browsers name repeated downloads.
pub fn unique_path(dir: &Path, filename: &str) -> Result<PathBuf> {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return Ok(candidate);
    }

    let as_path = Path::new(filename);
    let stem = as_path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let extension = as_path.extension().map(|e| e.to_string_lossy());

    for n in 1..=MAX_UNIQUE_ATTEMPTS {
        let name = match &extension {
            Some(ext) => format!("{} ({}).{}", stem, n, ext),
            None => format!("{} ({})", stem, n),
        };
        let candidate = dir.join(name);
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    bail!("No free file name for {} in {}", filename, dir.display())
}

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle so the size check and the read see the same file.
///
/// # Errors
///
/// Returns an error if the metadata cannot be read or the file is larger than 10MB.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_atomic_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        write_atomic(&path, b"{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!dir.path().join("out.json.tmp").exists());
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "old").unwrap();
        write_atomic(&path, b"new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_atomic_missing_parent_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.json");
        assert!(write_atomic(&path, b"{}").is_err());
    }

    #[test]
    fn test_unique_path_free_name() {
        let dir = TempDir::new().unwrap();
        assert_eq!(unique_path(dir.path(), "example.json").unwrap(), dir.path().join("example.json"));
    }

    #[test]
    fn test_unique_path_numbers_collisions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("example.json"), "").unwrap();
        assert_eq!(
            unique_path(dir.path(), "example.json").unwrap(),
            dir.path().join("example (1).json")
        );

        fs::write(dir.path().join("example (1).json"), "").unwrap();
        assert_eq!(
            unique_path(dir.path(), "example.json").unwrap(),
            dir.path().join("example (2).json")
        );
    }

    #[test]
    fn test_unique_path_without_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("export"), "").unwrap();
        assert_eq!(unique_path(dir.path(), "export").unwrap(), dir.path().join("export (1)"));
    }

    #[test]
    fn test_validate_file_size_small_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("small.json");
        fs::write(&path, "{}").unwrap();
        let file = File::open(&path).unwrap();
        assert!(validate_file_size(&file, &path).is_ok());
    }
}
