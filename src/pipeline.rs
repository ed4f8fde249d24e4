//! Generation pipeline
//!
//! One run is:
//!
//! 1. Discover source units under the test-case root
//! 2. Index their entry points and render the patched main file and header
//! 3. Build the directory set and render the recipe
//! 4. Write the main file, the header and the recipe
//!
//! Everything that can fail before a write (missing root, unreadable unit, missing support file or marker) fails in
//! [`Pipeline::plan`], so those errors leave the disk untouched. Writes are not transactional: if writing the header
//! fails, the main file has already been rewritten.

use std::fs;
use std::path::PathBuf;

use makegen_core::languages::LanguageId;
use makegen_core::markers::RegionId;

use crate::config::GeneratorConfig;
use crate::discovery::{self, DirectorySet, SourceUnit, directory_set};
use crate::error::GenResult;
use crate::index::{self, EntryPointCalls, Extractor};
use crate::output::write_output;
use crate::patch::{MarkerRegion, RegionEdit, render_patched};
use crate::recipe::RecipeGenerator;

/// Everything a run would write, computed in memory.
#[derive(Debug, Clone)]
pub struct Generation {
    pub units: Vec<SourceUnit>,
    pub directories: DirectorySet,
    pub entry_points: EntryPointCalls,
    pub recipe: String,
    pub main_text: String,
    pub header_text: String,
}

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub units: usize,
    pub directories: usize,
    pub entry_points: usize,
    pub portable_entry_points: usize,
}

impl From<&Generation> for RunSummary {
    fn from(generation: &Generation) -> Self {
        Self {
            units: generation.units.len(),
            directories: generation.directories.len(),
            entry_points: generation.entry_points.all.len(),
            portable_entry_points: generation.entry_points.portable.len(),
        }
    }
}

/// Drives a generation run for one configuration
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: GeneratorConfig,
}

impl Pipeline {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Discover the source units, in traversal order.
    pub fn discover(&self) -> GenResult<Vec<SourceUnit>> {
        discovery::discover(&self.config)
    }

    /// Index the entry points of `units`.
    pub fn index(&self, units: &[SourceUnit]) -> GenResult<EntryPointCalls> {
        let extractor = Extractor::new(&self.config.case_prefix)?;
        index::index_units(&self.config, units, &extractor)
    }

    /// Render the recipe for `units`.
    pub fn recipe(&self, units: &[SourceUnit]) -> String {
        RecipeGenerator::new(&self.config).generate(&directory_set(units))
    }

    /// Compute every output without writing anything.
    #[tracing::instrument(skip_all)]
    pub fn plan(&self) -> GenResult<Generation> {
        let units = self.discover()?;
        let entry_points = self.index(&units)?;

        let main_text = render_patched(&self.config.main_path(), &main_edits(&entry_points))?;
        let header_text = render_patched(&self.config.header_path(), &header_edits(&entry_points))?;

        let directories = directory_set(&units);
        tracing::info!(directories = directories.len(), "collected directory set");
        let recipe = RecipeGenerator::new(&self.config).generate(&directories);

        Ok(Generation {
            units,
            directories,
            entry_points,
            recipe,
            main_text,
            header_text,
        })
    }

    /// Run the full generation and write all outputs.
    pub fn run(&self) -> GenResult<RunSummary> {
        let generation = self.plan()?;

        write_output(&self.config.main_path(), &generation.main_text)?;
        write_output(&self.config.header_path(), &generation.header_text)?;
        write_output(&self.config.output_path(), &generation.recipe)?;

        tracing::info!(
            recipe = %self.config.output_path().display(),
            "wrote recipe and patched support files"
        );
        Ok(RunSummary::from(&generation))
    }

    /// Return the outputs whose content on disk differs from what a run would write.
    ///
    /// A recipe that does not exist yet counts as stale.
    pub fn check(&self) -> GenResult<Vec<PathBuf>> {
        let generation = self.plan()?;
        let expected = [
            (self.config.main_path(), &generation.main_text),
            (self.config.header_path(), &generation.header_text),
            (self.config.output_path(), &generation.recipe),
        ];

        let stale = expected
            .into_iter()
            .filter(|(path, text)| fs::read_to_string(path).map_or(true, |current| current != **text))
            .map(|(path, _)| path)
            .collect();
        Ok(stale)
    }
}

/// Edits for the main file: calls to the portable entry points.
pub fn main_edits(entry_points: &EntryPointCalls) -> Vec<RegionEdit> {
    vec![RegionEdit::new(
        MarkerRegion::from_id(RegionId::FunctionCalls),
        entry_points.portable_calls(),
    )]
}

/// Edits for the header: declarations of every entry point, one region per language.
pub fn header_edits(entry_points: &EntryPointCalls) -> Vec<RegionEdit> {
    vec![
        RegionEdit::new(
            MarkerRegion::from_id(RegionId::CDeclarations),
            entry_points.declarations(LanguageId::C),
        ),
        RegionEdit::new(
            MarkerRegion::from_id(RegionId::CppDeclarations),
            entry_points.declarations(LanguageId::Cpp),
        ),
    ]
}
