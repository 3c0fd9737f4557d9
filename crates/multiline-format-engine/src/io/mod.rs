use std::fs;
use std::path::{Path, PathBuf};

use crate::editing::Buffer;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not valid UTF-8: {0}")]
    InvalidUtf8(PathBuf),
}

/// Read a markdown document into a buffer with nothing selected.
pub fn read_document(path: &Path) -> Result<Buffer, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|_| IoError::InvalidUtf8(path.to_path_buf()))?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(Buffer::new(&text))
}

/// Write a buffer back to disk
pub fn write_document(path: &Path, buffer: &Buffer) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, buffer.text())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::{EditorHost, Position};
    use tempfile::TempDir;

    #[test]
    fn test_read_edit_write_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.md");
        fs::write(&path, "# Title\r\nbody\r\n").unwrap();

        let mut buffer = read_document(&path).unwrap();
        buffer.select(Position::new(1, 0), Position::new(1, 4));
        buffer.replace_selection("BODY");
        write_document(&path, &buffer).unwrap();

        // Line endings outside the edit survive untouched
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Title\r\nBODY\r\n");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.md");

        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, IoError::NotFound(p) if p == path));
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            read_document(&path),
            Err(IoError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/note.md");

        write_document(&path, &Buffer::new("text")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "text");
    }
}
