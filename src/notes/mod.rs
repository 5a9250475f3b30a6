// Note file discovery and reading

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Notes shorter than this are skipped by the summarization pipeline
pub const MIN_NOTE_LEN: usize = 10;

/// List all .txt files in `directory`, sorted by path.
///
/// Errors if the directory does not exist or contains no .txt files.
pub fn list_note_files(directory: &Path) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        bail!("Directory not found: {}", directory.display());
    }

    let pattern = directory.join("*.txt");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("Non-UTF-8 directory path: {}", directory.display()))?;

    let mut files: Vec<PathBuf> = glob::glob(pattern)
        .context("Invalid glob pattern")?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();

    if files.is_empty() {
        bail!("No .txt files found in directory: {}", directory.display());
    }

    // Deterministic ordering regardless of filesystem enumeration order
    files.sort();
    Ok(files)
}

/// Read a note file as trimmed UTF-8 text
pub fn read_note(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(contents.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_list_note_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "note b").unwrap();
        fs::write(dir.path().join("a.txt"), "note a").unwrap();
        fs::write(dir.path().join("ignored.md"), "not a note").unwrap();

        let files = list_note_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.txt"));
        assert!(files[1].ends_with("b.txt"));
    }

    #[test]
    fn test_list_note_files_missing_directory() {
        let result = list_note_files(Path::new("/nonexistent/notes"));
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Directory not found"));
    }

    #[test]
    fn test_list_note_files_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = list_note_files(dir.path());
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("No .txt files"));
    }

    #[test]
    fn test_read_note_trims() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        fs::write(&path, "  Patient presents with chest pain.\n\n").unwrap();

        let text = read_note(&path).unwrap();
        assert_eq!(text, "Patient presents with chest pain.");
    }
}
