//! Error types for the generation pipeline.
//!
//! Every fatal condition of a run surfaces as a [`GenError`]. Nothing is retried: the CLI reports the error and
//! exits. Soft conditions (a file without entry points, an empty directory set) are not errors.

use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Failure to splice generated lines into a marker region.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum PatchError {
    #[error("marker `{marker}` not found")]
    #[diagnostic(
        code(makegen::patch::missing_marker),
        help("generated lines are spliced between a BEGIN and an END marker line; add both to the file")
    )]
    MissingMarker { marker: String },
}

/// Errors that abort a generation run.
#[derive(Debug, Error, Diagnostic)]
pub enum GenError {
    #[error("could not find test-case root `{}`", .0.display())]
    #[diagnostic(
        code(makegen::root_not_found),
        help("run makegen from the directory containing the test-case root, or pass --root")
    )]
    RootNotFound(PathBuf),

    #[error("I/O error on `{}`", .path.display())]
    #[diagnostic(code(makegen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk the test-case tree")]
    #[diagnostic(code(makegen::walk))]
    Walk(#[from] walkdir::Error),

    #[error("invalid test-case pattern")]
    #[diagnostic(code(makegen::pattern), help("the case prefix is escaped before use; check --prefix"))]
    Pattern(#[from] regex::Error),

    #[error("invalid variant marker `{marker}`")]
    #[diagnostic(
        code(makegen::invalid_marker),
        help("markers are pasted into make `$(wildcard)` globs; use letters, digits, `_`, `-` or `.`")
    )]
    InvalidMarker { marker: String },

    #[error("cannot patch `{}`", .path.display())]
    #[diagnostic(code(makegen::patch))]
    Patch {
        path: PathBuf,
        #[source]
        #[diagnostic_source]
        source: PatchError,
    },
}

impl GenError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        GenError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether this is the missing-root precondition (checked before any side effect).
    pub fn is_precondition(&self) -> bool {
        matches!(self, GenError::RootNotFound(_))
    }
}

/// Result type for generation operations.
pub type GenResult<T> = Result<T, GenError>;
