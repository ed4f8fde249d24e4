//! Test-case discovery
//!
//! ## Modules
//!
//! - `scanner` - File Scanner: walks the test-case root for case files
//! - `units` - Source units (one discovered file each)
//! - `dirs` - Directory Set Builder
//!
//! Discovery is the only step shared by both halves of a run: the indexer consumes the units to patch the support
//! files, the directory set feeds the recipe.

mod dirs;
mod scanner;
mod units;

pub use dirs::{DirectorySet, directory_set};
pub use scanner::{CasePattern, scan};
pub use units::{SourceUnit, to_slash};

use crate::config::GeneratorConfig;
use crate::error::GenResult;

/// Scan the configured root and return its source units in lexicographic path order.
#[tracing::instrument(skip_all, fields(root = %config.root_path().display()))]
pub fn discover(config: &GeneratorConfig) -> GenResult<Vec<SourceUnit>> {
    let pattern = CasePattern::new(&config.case_prefix)?;
    let files = scan(&config.root_path(), &pattern)?;

    let mut units: Vec<SourceUnit> = files
        .iter()
        .filter_map(|path| SourceUnit::from_path(config.base_dir(), path))
        .collect();
    units.sort();
    units.dedup();

    tracing::info!(units = units.len(), "discovered test-case sources");
    Ok(units)
}
