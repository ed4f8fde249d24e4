//! Directory Set Builder: the directories the recipe globs over.

use std::collections::BTreeSet;

use super::SourceUnit;

/// Deduplicated, sorted set of directories containing at least one source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectorySet {
    dirs: BTreeSet<String>,
}

impl DirectorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directories in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DirectorySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            dirs: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Reduce source units to their distinct parent directories.
pub fn directory_set(units: &[SourceUnit]) -> DirectorySet {
    units.iter().map(|u| u.directory()).collect()
}
