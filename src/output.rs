//! Writer: persist generated text.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{GenError, GenResult};

/// Create or truncate `path` and write `text` verbatim.
///
/// The file handle is dropped on every return path, including a failed write.
pub fn write_output(path: &Path, text: &str) -> GenResult<()> {
    let mut file = File::create(path).map_err(|e| GenError::io(path, e))?;
    file.write_all(text.as_bytes()).map_err(|e| GenError::io(path, e))?;
    file.flush().map_err(|e| GenError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_write_output_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Makefile_all");
        fs::write(&path, "a much longer previous recipe\n").unwrap();

        write_output(&path, "all:\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "all:\n");
    }

    #[test]
    fn test_write_output_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_output(&dir.path().join("missing/Makefile_all"), "").unwrap_err();
        assert!(matches!(err, GenError::Io { .. }));
    }
}
