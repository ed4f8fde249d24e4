//! File Scanner: find test-case sources under a root directory.

use std::path::{Path, PathBuf};

use makegen_core::languages::LANGUAGES;
use regex::Regex;
use walkdir::WalkDir;

use crate::error::{GenError, GenResult};

/// File-name pattern of a test-case source: `^<prefix>.*\.(c|cpp)$`.
#[derive(Debug, Clone)]
pub struct CasePattern {
    regex: Regex,
}

impl CasePattern {
    pub fn new(prefix: &str) -> Result<Self, regex::Error> {
        let extensions: Vec<_> = LANGUAGES.iter().map(|l| regex::escape(l.extension)).collect();
        let regex = Regex::new(&format!(r"^{}.*\.({})$", regex::escape(prefix), extensions.join("|")))?;
        Ok(Self { regex })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }
}

/// Return every regular file under `root` whose name matches `pattern`, sorted.
///
/// Symlinks to files count as files, the way make's `$(wildcard)` sees them. Symlinked directories are not entered.
///
/// ## Errors
///
/// - [`GenError::RootNotFound`] if `root` is not a directory
/// - [`GenError::Walk`] if a directory cannot be read
pub fn scan(root: &Path, pattern: &CasePattern) -> GenResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(GenError::RootNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        if pattern.matches(name) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    tracing::debug!(files = files.len(), "scan complete");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_pattern_matches_case_sources() {
        let pattern = CasePattern::new("CWE").unwrap();
        assert!(pattern.matches("CWE1_a.c"));
        assert!(pattern.matches("CWE122_Heap_Based_Buffer_Overflow__c_CWE806_char_memcpy_83a.cpp"));
        assert!(!pattern.matches("CWE563_Unused_Variable__unused_value_int64_t_84.h"));
        assert!(!pattern.matches("io.c"));
        assert!(!pattern.matches("CWE1_a.cc"));
        assert!(!pattern.matches("xCWE1_a.c"));
    }

    #[test]
    fn test_pattern_escapes_prefix() {
        let pattern = CasePattern::new("C.E").unwrap();
        assert!(pattern.matches("C.E1.c"));
        assert!(!pattern.matches("CWE1.c"));
    }

    #[test]
    fn test_scan_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = CasePattern::new("CWE").unwrap();
        let err = scan(&dir.path().join("testcases"), &pattern).unwrap_err();
        assert!(matches!(err, GenError::RootNotFound(_)));
    }

    #[test]
    fn test_scan_recurses_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("testcases");
        fs::create_dir_all(root.join("B/s01")).unwrap();
        fs::create_dir_all(root.join("A")).unwrap();
        fs::write(root.join("B/s01/CWE2_b.cpp"), "").unwrap();
        fs::write(root.join("A/CWE1_a.c"), "").unwrap();
        fs::write(root.join("A/CWE1_a.h"), "").unwrap();
        fs::write(root.join("A/notes.txt"), "").unwrap();

        let pattern = CasePattern::new("CWE").unwrap();
        let files = scan(&root, &pattern).unwrap();
        assert_eq!(files, vec![root.join("A/CWE1_a.c"), root.join("B/s01/CWE2_b.cpp")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_file_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("testcases");
        fs::create_dir_all(root.join("A")).unwrap();
        fs::write(dir.path().join("shared.c"), "").unwrap();
        std::os::unix::fs::symlink(dir.path().join("shared.c"), root.join("A/CWE1_linked.c")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("missing.c"), root.join("A/CWE1_dangling.c")).unwrap();

        let pattern = CasePattern::new("CWE").unwrap();
        assert_eq!(scan(&root, &pattern).unwrap(), vec![root.join("A/CWE1_linked.c")]);
    }

    #[test]
    fn test_scan_empty_root() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = CasePattern::new("CWE").unwrap();
        assert!(scan(dir.path(), &pattern).unwrap().is_empty());
    }
}
