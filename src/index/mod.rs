//! Source-Unit Indexer
//!
//! Reads every discovered unit, extracts its entry points and produces the two ordered lists the support files are
//! patched with:
//!
//! - `all`: every entry point of every unit (the header declares them all)
//! - `portable`: the entry points of units outside the variant filter (the main file calls only these)
//!
//! Both lists come from one pass over the units in path order, so `portable` is always a subsequence of `all`.

mod extract;

pub use extract::{EntryKind, Extracted, Extractor};

use std::fs;

use makegen_core::languages::LanguageId;

use crate::config::GeneratorConfig;
use crate::discovery::SourceUnit;
use crate::error::{GenError, GenResult};

/// An entry point of one source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    /// Path of the unit declaring it (relative, forward slashes)
    pub source: String,
    pub language: LanguageId,
    pub qualifier: String,
    pub kind: EntryKind,
    pub portable: bool,
}

impl EntryPoint {
    /// Call expression, e.g. `CWE1_a_good();` or `CWE2_b::good();`.
    pub fn call(&self) -> String {
        match self.language {
            LanguageId::C => format!("{}_{}();", self.qualifier, self.kind.as_str()),
            LanguageId::Cpp => format!("{}::{}();", self.qualifier, self.kind.as_str()),
        }
    }

    /// Declaration, e.g. `void CWE1_a_good();` or `namespace CWE2_b { void good(); }`.
    pub fn declaration(&self) -> String {
        match self.language {
            LanguageId::C => format!("void {}_{}();", self.qualifier, self.kind.as_str()),
            LanguageId::Cpp => format!("namespace {} {{ void {}(); }}", self.qualifier, self.kind.as_str()),
        }
    }
}

/// The entry-point lists derived from one traversal of the source units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPointCalls {
    pub all: Vec<EntryPoint>,
    pub portable: Vec<EntryPoint>,
}

impl EntryPointCalls {
    /// Call lines for the main file.
    pub fn portable_calls(&self) -> Vec<String> {
        self.portable.iter().map(EntryPoint::call).collect()
    }

    /// Declaration lines for the header, restricted to one language.
    pub fn declarations(&self, language: LanguageId) -> Vec<String> {
        self.all
            .iter()
            .filter(|e| e.language == language)
            .map(EntryPoint::declaration)
            .collect()
    }
}

/// Build the entry-point lists for `units`, which must already be in traversal order.
///
/// Units are read relative to the configured base directory; portability follows [`GeneratorConfig::is_portable`].
///
/// A unit without entry points (a secondary file of a multi-file case, a sink) contributes nothing.
///
/// ## Errors
///
/// Returns [`GenError::Io`] if a unit cannot be read.
#[tracing::instrument(skip_all, fields(units = units.len()))]
pub fn index_units(config: &GeneratorConfig, units: &[SourceUnit], extractor: &Extractor) -> GenResult<EntryPointCalls> {
    let mut calls = EntryPointCalls::default();

    for unit in units {
        let path = unit.resolve(config.base_dir());
        let bytes = fs::read(&path).map_err(|e| GenError::io(&path, e))?;
        let text = String::from_utf8_lossy(&bytes);

        let portable = config.is_portable(unit);
        let found = extractor.extract(&text, unit.language());
        tracing::debug!(unit = unit.path(), entry_points = found.len(), portable, "indexed");

        for Extracted { qualifier, kind } in found {
            let entry = EntryPoint {
                source: unit.path().to_string(),
                language: unit.language(),
                qualifier,
                kind,
                portable,
            };
            if portable {
                calls.portable.push(entry.clone());
            }
            calls.all.push(entry);
        }
    }

    tracing::info!(
        entry_points = calls.all.len(),
        portable = calls.portable.len(),
        "indexed entry points"
    );
    Ok(calls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn entry(language: LanguageId, qualifier: &str, kind: EntryKind) -> EntryPoint {
        EntryPoint {
            source: String::new(),
            language,
            qualifier: qualifier.to_string(),
            kind,
            portable: true,
        }
    }

    #[test]
    fn test_c_call_and_declaration() {
        let e = entry(LanguageId::C, "CWE1_a", EntryKind::Good);
        assert_eq!(e.call(), "CWE1_a_good();");
        assert_eq!(e.declaration(), "void CWE1_a_good();");
    }

    #[test]
    fn test_cpp_call_and_declaration() {
        let e = entry(LanguageId::Cpp, "CWE2_b", EntryKind::Bad);
        assert_eq!(e.call(), "CWE2_b::bad();");
        assert_eq!(e.declaration(), "namespace CWE2_b { void bad(); }");
    }

    #[test]
    fn test_index_units_splits_portable() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("testcases/A");
        fs::create_dir_all(&a).unwrap();
        fs::write(a.join("CWE1_a.c"), "void CWE1_a_bad()\n{\n}\nvoid CWE1_a_good()\n{\n}\n").unwrap();
        fs::write(a.join("CWE1_a_w32.c"), "void CWE1_a_w32_bad()\n{\n}\n").unwrap();
        fs::write(a.join("CWE1_b.c"), "/* no entry points */\n").unwrap();

        let units: Vec<SourceUnit> = ["CWE1_a.c", "CWE1_a_w32.c", "CWE1_b.c"]
            .iter()
            .map(|name| SourceUnit::from_path(dir.path(), &a.join(name)).unwrap())
            .collect();

        let extractor = Extractor::new("CWE").unwrap();
        let config = GeneratorConfig::new().with_base_dir(dir.path());
        let calls = index_units(&config, &units, &extractor).unwrap();

        assert_eq!(calls.all.len(), 3);
        assert_eq!(calls.portable_calls(), ["CWE1_a_bad();", "CWE1_a_good();"]);
        assert_eq!(
            calls.declarations(LanguageId::C),
            ["void CWE1_a_bad();", "void CWE1_a_good();", "void CWE1_a_w32_bad();"]
        );
        assert!(calls.declarations(LanguageId::Cpp).is_empty());
        assert_eq!(calls.all[2].source, "testcases/A/CWE1_a_w32.c");
        assert!(!calls.all[2].portable);
    }

    #[test]
    fn test_index_units_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let unit = SourceUnit::from_path(dir.path(), &dir.path().join("testcases/CWE9_gone.c")).unwrap();
        let extractor = Extractor::new("CWE").unwrap();
        let config = GeneratorConfig::new().with_base_dir(dir.path());
        let err = index_units(&config, &[unit], &extractor).unwrap_err();
        assert!(matches!(err, GenError::Io { .. }));
    }
}
