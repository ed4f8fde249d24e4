//! Source units: one test-case file found by the scanner.

use std::path::{Component, Path, PathBuf};

use makegen_core::languages::{self, LanguageId};

/// A discovered test-case source file.
///
/// Paths are stored relative to the generator's base directory with forward slashes, which is also how the
/// recipe refers to them. A file outside the base directory (an absolute root elsewhere) keeps its absolute path. Ordering is by path, so sorting units gives the lexicographic traversal order every
/// generated artifact follows.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceUnit {
    path: String,
    language: LanguageId,
    directory: String,
}

impl SourceUnit {
    /// Build a unit from a scanned path. Returns `None` for extensions no language claims.
    pub fn from_path(base: &Path, path: &Path) -> Option<Self> {
        let language = path.extension().and_then(|e| e.to_str()).and_then(languages::from_extension)?;
        let relative = path.strip_prefix(base).unwrap_or(path);
        let directory = match relative.parent().map(to_slash) {
            Some(dir) if !dir.is_empty() => dir,
            // Files directly under the base directory
            _ => ".".to_string(),
        };

        Some(Self {
            path: to_slash(relative),
            language,
            directory,
        })
    }

    /// Path relative to the base directory, forward slashes.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    /// Containing directory relative to the base directory, forward slashes.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Location on disk. Absolute unit paths ignore `base`.
    pub fn resolve(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }
}

/// Render a path with forward slashes regardless of the host separator.
///
/// `.` components are dropped; a relative path made only of them renders as the empty string. An absolute path
/// keeps its leading `/`.
pub fn to_slash(path: &Path) -> String {
    let joined = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    if path.has_root() {
        format!("/{joined}")
    } else {
        joined
    }
}
