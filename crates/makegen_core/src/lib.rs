//! Provide the shared, dependency-free naming vocabulary of makegen.
//!
//! The generator relies on conventions it does not own: how test-case files are named, which file names mark a
//! platform variant, where the support sources live and how the marker regions inside the support files are spelled.
//! Keeping them here means the scanner, the indexer, the patcher and the recipe generator all agree on one spelling.
//!
//! ## Notes
//!
//! - This crate has **no IO**, no global state and no dependencies.
//! - Callers should use [`languages::LanguageId`] and [`markers::RegionId`] rather than matching on raw strings.

pub mod conventions;
pub mod languages;
pub mod markers;
