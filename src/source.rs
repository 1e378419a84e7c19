//! Corpus line source: reads a plain-text UTF-8 file into raw lines.
//!
//! The indexer treats the source as a black box yielding one
//! sentence-bearing line at a time; an unreadable source is fatal, never
//! a partial index.

use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),
}

/// Read every line of the corpus file at `path`.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_owned).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_fatal() {
        let result = read_lines(Path::new("/nonexistent/corpus.txt"));
        assert!(matches!(result, Err(SourceError::Io(_))));
    }

    #[test]
    fn test_reads_lines() {
        let dir = std::env::temp_dir().join("bredogen-source-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("corpus.txt");
        std::fs::write(&path, "Привет, мир.\nМир велик.\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, ["Привет, мир.", "Мир велик."]);
    }
}
