//! Source languages a test case can be written in.
//!
//! The registry maps each [`LanguageId`] to its file extension and to the Makefile variable names the recipe uses
//! for it. Matching on extensions is **case-sensitive** (`.C` is not a C file).

/// Stable identifier for a test-case source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageId {
    C,
    Cpp,
}

/// Metadata for a source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    pub id: LanguageId,
    /// File extension without the leading dot.
    pub extension: &'static str,
    /// Human-readable name.
    pub display: &'static str,
    /// Makefile variable listing the sources (`C_SOURCES`).
    pub sources_var: &'static str,
    /// Makefile variable listing the objects (`C_OBJECTS`).
    pub objects_var: &'static str,
}

/// Registry of all supported languages, in recipe emission order.
pub const LANGUAGES: &[LanguageInfo] = &[
    LanguageInfo {
        id: LanguageId::C,
        extension: "c",
        display: "C",
        sources_var: "C_SOURCES",
        objects_var: "C_OBJECTS",
    },
    LanguageInfo {
        id: LanguageId::Cpp,
        extension: "cpp",
        display: "C++",
        sources_var: "CPP_SOURCES",
        objects_var: "CPP_OBJECTS",
    },
];

/// Look up the metadata of a language.
pub fn info(id: LanguageId) -> &'static LanguageInfo {
    match id {
        LanguageId::C => &LANGUAGES[0],
        LanguageId::Cpp => &LANGUAGES[1],
    }
}

/// Resolve a file extension (without the dot) to a language.
pub fn from_extension(ext: &str) -> Option<LanguageId> {
    LANGUAGES.iter().find(|l| l.extension == ext).map(|l| l.id)
}
