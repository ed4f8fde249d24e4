//! Generator configuration
//!
//! All paths the pipeline touches are explicit fields here; no component looks at the process working directory.
//! Defaults follow the Juliet suite layout (see `makegen_core::conventions`).

use std::path::{Path, PathBuf};

use makegen_core::conventions;

use crate::discovery::{SourceUnit, to_slash};
use crate::error::{GenError, GenResult};

/// File-name markers that set a test case apart from the portable build.
///
/// The same filter decides which entry points reach the main file and which files the recipe's
/// `filter-out` globs drop. A glob `<prefix>*<marker>*.<ext>` only sees the marker between the case prefix and the
/// extension, so that is the only part of the name [`VariantFilter::is_variant`] looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantFilter {
    markers: Vec<String>,
}

impl VariantFilter {
    /// Build a filter from markers; empty markers are dropped.
    ///
    /// ## Errors
    ///
    /// [`GenError::InvalidMarker`] if a marker contains whitespace or a make/glob metacharacter, which would change
    /// the meaning of the emitted `$(wildcard)` expressions.
    pub fn new<I, S>(markers: I) -> GenResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut kept = Vec::new();
        for marker in markers.into_iter().map(Into::into) {
            if marker.is_empty() {
                continue;
            }
            if marker.chars().any(is_glob_meta) {
                return Err(GenError::InvalidMarker { marker });
            }
            kept.push(marker);
        }
        Ok(Self { markers: kept })
    }

    /// A filter that treats every file as portable.
    pub fn none() -> Self {
        Self { markers: Vec::new() }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Whether the case file `file_name` carries a marker between `prefix` and its extension.
    pub fn is_variant(&self, prefix: &str, file_name: &str) -> bool {
        let body = case_body(prefix, file_name);
        self.markers.iter().any(|m| body.contains(m.as_str()))
    }

    pub fn is_portable(&self, prefix: &str, file_name: &str) -> bool {
        !self.is_variant(prefix, file_name)
    }
}

impl Default for VariantFilter {
    fn default() -> Self {
        Self {
            markers: conventions::VARIANT_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

fn is_glob_meta(c: char) -> bool {
    c.is_whitespace() || "$(),*?[]%\\/#:;\"'".contains(c)
}

/// `CWE1_a_w32.c` with prefix `CWE` -> `1_a_w32`
fn case_body<'a>(prefix: &str, file_name: &'a str) -> &'a str {
    let stem = file_name.rsplit_once('.').map_or(file_name, |(stem, _)| stem);
    stem.strip_prefix(prefix).unwrap_or(stem)
}

/// Compiler and link settings written into the recipe preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub cc: String,
    pub cpp: String,
    pub debug: String,
    pub cflags: String,
    pub lflags: String,
    /// Name of the linked binary
    pub target: String,
    /// C support sources, relative to the support directory
    pub c_support_sources: Vec<String>,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            cc: "gcc".to_string(),
            cpp: "g++".to_string(),
            debug: "-g".to_string(),
            cflags: "-c".to_string(),
            lflags: "-lpthread".to_string(),
            target: conventions::TARGET_NAME.to_string(),
            c_support_sources: conventions::C_SUPPORT_SOURCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Configuration of a generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the recipe lives in; every other path is relative to it
    pub base_dir: PathBuf,
    /// Test-case root, relative to `base_dir`
    pub root: PathBuf,
    /// Support directory, relative to `base_dir`
    pub support_dir: PathBuf,
    /// Main source file name inside the support directory
    pub main_file: String,
    /// Header file name inside the support directory
    pub header_file: String,
    /// Recipe file name, relative to `base_dir`
    pub output: PathBuf,
    /// Prefix every test-case file name starts with
    pub case_prefix: String,
    pub variants: VariantFilter,
    pub toolchain: Toolchain,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            root: PathBuf::from(conventions::TESTCASES_DIR),
            support_dir: PathBuf::from(conventions::SUPPORT_DIR),
            main_file: conventions::MAIN_FILE.to_string(),
            header_file: conventions::HEADER_FILE.to_string(),
            output: PathBuf::from(conventions::RECIPE_FILE),
            case_prefix: conventions::CASE_PREFIX.to_string(),
            variants: VariantFilter::default(),
            toolchain: Toolchain::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory the recipe is generated in
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Set the test-case root (relative to the base directory)
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the support directory (relative to the base directory)
    pub fn with_support_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.support_dir = dir.into();
        self
    }

    /// Set the recipe file name
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the case prefix
    pub fn with_case_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.case_prefix = prefix.into();
        self
    }

    /// Set the variant filter
    pub fn with_variants(mut self, variants: VariantFilter) -> Self {
        self.variants = variants;
        self
    }

    pub fn root_path(&self) -> PathBuf {
        self.base_dir.join(&self.root)
    }

    pub fn main_path(&self) -> PathBuf {
        self.base_dir.join(&self.support_dir).join(&self.main_file)
    }

    pub fn header_path(&self) -> PathBuf {
        self.base_dir.join(&self.support_dir).join(&self.header_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output)
    }

    /// Support directory as the recipe spells it (forward slashes, no trailing slash).
    pub fn support_dir_slash(&self) -> String {
        to_slash(&self.support_dir)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Whether `unit` belongs to the portable build under this configuration's prefix and variant filter.
    pub fn is_portable(&self, unit: &SourceUnit) -> bool {
        self.variants.is_portable(&self.case_prefix, unit.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variants() {
        let filter = VariantFilter::default();
        assert_eq!(filter.markers(), ["w32", "wchar_t"]);
        assert_eq!(VariantFilter::new(conventions::VARIANT_MARKERS.iter().copied()).unwrap(), filter);
        assert!(filter.is_variant("CWE", "CWE1_a_w32.c"));
        assert!(filter.is_variant("CWE", "CWE415_Double_Free__malloc_free_wchar_t_45.c"));
        assert!(filter.is_portable("CWE", "CWE401_Memory_Leak__char_realloc_63a.c"));
    }

    #[test]
    fn test_empty_markers_are_dropped() {
        let filter = VariantFilter::new(["", "w32"]).unwrap();
        assert_eq!(filter.markers(), ["w32"]);
        assert!(VariantFilter::none().is_portable("CWE", "CWE1_a_w32.c"));
    }

    #[test]
    fn test_markers_only_match_between_prefix_and_extension() {
        let filter = VariantFilter::new(["WE", "cpp", "a"]).unwrap();
        assert!(filter.is_portable("CWE", "CWE1_x.c"));
        assert!(filter.is_portable("CWE", "CWE1_x.cpp"));
        assert!(filter.is_variant("CWE", "CWE1_a.c"));
        assert!(filter.is_variant("CWE", "CWEWE.c"));
    }

    #[test]
    fn test_glob_metacharacters_are_rejected() {
        for marker in ["w 32", "a,b", "x)", "*", "d/e", "$(x"] {
            let err = VariantFilter::new([marker]).unwrap_err();
            assert!(matches!(err, GenError::InvalidMarker { .. }), "{marker}");
        }
        assert!(VariantFilter::new(["wchar_t", "w32", "v1.2"]).is_ok());
    }

    #[test]
    fn test_config_is_portable_uses_case_prefix() {
        let config = GeneratorConfig::new()
            .with_case_prefix("w32")
            .with_variants(VariantFilter::new(["w32"]).unwrap());
        let unit = SourceUnit::from_path(Path::new("."), Path::new("testcases/w32_case.c")).unwrap();
        assert!(config.is_portable(&unit));
    }

    #[test]
    fn test_default_paths() {
        let config = GeneratorConfig::default();
        assert_eq!(config.root_path(), Path::new("./testcases"));
        assert_eq!(config.main_path(), Path::new("./testcasesupport/main_linux.cpp"));
        assert_eq!(config.header_path(), Path::new("./testcasesupport/testcases.h"));
        assert_eq!(config.output_path(), Path::new("./Makefile_all"));
        assert_eq!(config.support_dir_slash(), "testcasesupport");
    }

    #[test]
    fn test_builder_overrides() {
        let config = GeneratorConfig::new()
            .with_base_dir("/work")
            .with_root("suite")
            .with_support_dir("support/common")
            .with_output("Makefile")
            .with_case_prefix("CVE")
            .with_variants(VariantFilter::none());
        assert_eq!(config.root_path(), Path::new("/work/suite"));
        assert_eq!(config.output_path(), Path::new("/work/Makefile"));
        assert_eq!(config.support_dir_slash(), "support/common");
        assert_eq!(config.case_prefix, "CVE");
        assert!(config.variants.markers().is_empty());
    }

    #[test]
    fn test_default_toolchain() {
        let toolchain = Toolchain::default();
        assert_eq!(toolchain.cc, "gcc");
        assert_eq!(toolchain.cpp, "g++");
        assert_eq!(toolchain.target, "all-testcases");
        assert_eq!(toolchain.c_support_sources, ["io.c", "std_thread.c"]);
    }
}
