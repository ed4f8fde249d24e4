//! Entry-point extraction from test-case source text.
//!
//! This is best-effort textual matching, not a C parser. It only has to understand the shape the suite generates:
//!
//! - C: `void <qualifier>_good()` / `void <qualifier>_bad()` definitions, where `<qualifier>` starts with the case
//!   prefix. Matched by `^\s*void\s+(<prefix>\w*)_(good|bad)\s*\(\s*(?:void)?\s*\)\s*(?:\{|$)`.
//! - C++: a `namespace <qualifier>` line (`^\s*namespace\s+(<prefix>\w*)`) and unqualified `void good()` /
//!   `void bad()` definitions inside the file. A C++ file without such a namespace contributes nothing.
//!
//! Sink helpers (`..._badSink`), forward declarations and the calls inside `#ifdef INCLUDEMAIN` blocks do not match.

use makegen_core::conventions::{BAD_FUNCTION, GOOD_FUNCTION};
use makegen_core::languages::LanguageId;
use regex::Regex;

/// Which code path an entry point exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryKind {
    Good,
    Bad,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Good => GOOD_FUNCTION,
            EntryKind::Bad => BAD_FUNCTION,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            GOOD_FUNCTION => Some(EntryKind::Good),
            BAD_FUNCTION => Some(EntryKind::Bad),
            _ => None,
        }
    }
}

/// One entry point found in a file, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Function prefix (C) or namespace (C++)
    pub qualifier: String,
    pub kind: EntryKind,
}

/// Compiled extraction patterns for one case prefix.
#[derive(Debug, Clone)]
pub struct Extractor {
    c_entry: Regex,
    cpp_namespace: Regex,
    cpp_entry: Regex,
}

impl Extractor {
    pub fn new(prefix: &str) -> Result<Self, regex::Error> {
        let prefix = regex::escape(prefix);
        let kinds = format!("{GOOD_FUNCTION}|{BAD_FUNCTION}");
        let signature_tail = r"[ \t]*\([ \t]*(?:void)?[ \t]*\)[ \t]*(?:\{|\r?$)";

        Ok(Self {
            c_entry: Regex::new(&format!(
                r"(?m)^[ \t]*void[ \t]+({prefix}\w*)_({kinds}){signature_tail}"
            ))?,
            cpp_namespace: Regex::new(&format!(r"(?m)^[ \t]*namespace[ \t]+({prefix}\w*)"))?,
            cpp_entry: Regex::new(&format!(r"(?m)^[ \t]*void[ \t]+({kinds}){signature_tail}"))?,
        })
    }

    /// Extract the entry points declared in `text`, in file order, without duplicates.
    pub fn extract(&self, text: &str, language: LanguageId) -> Vec<Extracted> {
        let found: Vec<Extracted> = match language {
            LanguageId::C => self
                .c_entry
                .captures_iter(text)
                .filter_map(|caps| {
                    Some(Extracted {
                        qualifier: caps.get(1)?.as_str().to_string(),
                        kind: EntryKind::from_name(caps.get(2)?.as_str())?,
                    })
                })
                .collect(),
            LanguageId::Cpp => {
                let Some(namespace) = self.cpp_namespace.captures(text).and_then(|caps| caps.get(1)) else {
                    return Vec::new();
                };
                self.cpp_entry
                    .captures_iter(text)
                    .filter_map(|caps| {
                        Some(Extracted {
                            qualifier: namespace.as_str().to_string(),
                            kind: EntryKind::from_name(caps.get(1)?.as_str())?,
                        })
                    })
                    .collect()
            }
        };

        let mut unique = Vec::with_capacity(found.len());
        for entry in found {
            if !unique.contains(&entry) {
                unique.push(entry);
            }
        }
        unique
    }
}
