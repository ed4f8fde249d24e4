#![forbid(unsafe_code)]
//! makegen: single-Makefile generator for labeled C/C++ test-case suites
//!
//! makegen scans a tree of test-case sources named after a case prefix (`CWE...`), then:
//!
//! - writes one recipe (`Makefile_all`) that compiles every portable test case into a single binary
//! - patches the support main file so it calls every portable entry point
//! - patches the support header so it declares every entry point
//!
//! It never runs the compiler and always regenerates its outputs from scratch.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod index;
pub mod output;
pub mod patch;
pub mod pipeline;
pub mod recipe;
pub mod version;

pub use config::{GeneratorConfig, Toolchain, VariantFilter};
pub use discovery::{DirectorySet, SourceUnit};
pub use error::{GenError, GenResult, PatchError};
pub use index::{EntryKind, EntryPoint, EntryPointCalls};
pub use patch::{MarkerRegion, patch_region};
pub use pipeline::{Generation, Pipeline, RunSummary};
pub use recipe::RecipeGenerator;
