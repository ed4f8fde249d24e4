//! makegen version information.
//!
//! Exposes the crate version as a single constant for `makegen --version`.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The makegen version string (for example, `0.1.0`).
pub const MAKEGEN_VERSION: &str = env!("CARGO_PKG_VERSION");
