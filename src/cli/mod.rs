//! CLI module for makegen
//!
//! ## Commands
//!
//! - `generate` - Write the recipe and patch the support files (default)
//! - `generate --check` - Report outputs that are out of date, write nothing
//! - `recipe` - Print the recipe to stdout
//! - `list` - List discovered test cases and their entry points
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::config::{GeneratorConfig, VariantFilter};
use crate::error::GenResult;
use crate::version::MAKEGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate a single Makefile for a labeled C/C++ test-case suite
#[derive(Parser, Debug)]
#[command(name = "makegen")]
#[command(version = MAKEGEN_VERSION)]
#[command(about = "Generate a single Makefile for a labeled C/C++ test-case suite", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generator: GeneratorArgs,
}

/// Paths and naming shared by every command
#[derive(Args, Debug, Default)]
pub struct GeneratorArgs {
    /// Test-case root directory (default: testcases)
    #[arg(long, value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,

    /// Support directory holding the main file and header (default: testcasesupport)
    #[arg(long = "support-dir", value_name = "DIR", global = true)]
    pub support_dir: Option<PathBuf>,

    /// Recipe file to write (default: Makefile_all)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// File-name marker excluded from the portable build (repeatable; default: w32, wchar_t)
    #[arg(long = "exclude", value_name = "MARKER", global = true)]
    pub exclude: Vec<String>,

    /// Test-case file prefix (default: CWE)
    #[arg(long, value_name = "PREFIX", global = true)]
    pub prefix: Option<String>,
}

impl GeneratorArgs {
    /// Resolve the arguments against the defaults.
    ///
    /// Fails if an `--exclude` marker cannot be used in a make glob.
    pub fn to_config(&self) -> GenResult<GeneratorConfig> {
        let mut config = GeneratorConfig::new();
        if let Some(root) = &self.root {
            config = config.with_root(root);
        }
        if let Some(dir) = &self.support_dir {
            config = config.with_support_dir(dir);
        }
        if let Some(output) = &self.output {
            config = config.with_output(output);
        }
        if !self.exclude.is_empty() {
            config = config.with_variants(VariantFilter::new(self.exclude.iter().cloned())?);
        }
        if let Some(prefix) = &self.prefix {
            config = config.with_case_prefix(prefix);
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the recipe and patch the main file and header
    Generate {
        /// Report out-of-date outputs without writing anything
        #[arg(long)]
        check: bool,
    },

    /// Print the recipe to stdout
    Recipe,

    /// List discovered test cases and their entry points
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.generator.to_config().map_err(commands::report)?;

    match cli.command {
        Some(Command::Generate { check: true }) => commands::check(config),
        Some(Command::Generate { check: false }) | None => commands::generate(config),
        Some(Command::Recipe) => commands::print_recipe(config),
        Some(Command::List { json }) => commands::list(config, json),
    }
}

// ============================================================================
// Tests
// ============================================================================
