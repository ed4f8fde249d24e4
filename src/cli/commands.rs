//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use makegen_core::languages;
use serde_json::{Value, json};

use crate::config::GeneratorConfig;
use crate::discovery::SourceUnit;
use crate::error::GenError;
use crate::index::EntryPointCalls;
use crate::pipeline::Pipeline;

use super::{CliError, CliResult, ExitCode};

/// Turn a pipeline error into a CLI error.
///
/// A missing root means makegen was started from the wrong directory; that is logged (with a timestamp) rather than
/// rendered as a diagnostic. Everything else goes through miette.
pub fn report(err: GenError) -> CliError {
    if let GenError::RootNotFound(root) = &err {
        tracing::error!("Wrong working directory; could not find {} directory", root.display());
        return CliError::new("", ExitCode::FAILURE);
    }
    CliError::failure(format!("{:?}", miette::Report::new(err)))
}

/// Write the recipe and patch the support files.
pub fn generate(config: GeneratorConfig) -> CliResult<ExitCode> {
    let output = config.output_path();
    let summary = Pipeline::new(config).run().map_err(report)?;

    println!(
        "✓ Generated {} for {} test case file(s) in {} director{}",
        output.display(),
        summary.units,
        summary.directories,
        if summary.directories == 1 { "y" } else { "ies" }
    );
    println!(
        "  {} entry point(s) declared, {} called from main",
        summary.entry_points, summary.portable_entry_points
    );
    Ok(ExitCode::SUCCESS)
}

/// Report outputs that a run would change.
pub fn check(config: GeneratorConfig) -> CliResult<ExitCode> {
    let stale = Pipeline::new(config).check().map_err(report)?;

    if stale.is_empty() {
        println!("✓ Generated files are up to date");
        return Ok(ExitCode::SUCCESS);
    }
    for path in &stale {
        println!("Would regenerate: {}", path.display());
    }
    Err(CliError::failure(format!("\n{} file(s) out of date", stale.len())))
}

/// Print the recipe without touching any file.
pub fn print_recipe(config: GeneratorConfig) -> CliResult<ExitCode> {
    let pipeline = Pipeline::new(config);
    let units = pipeline.discover().map_err(report)?;
    print!("{}", pipeline.recipe(&units));
    Ok(ExitCode::SUCCESS)
}

/// List discovered units and their entry points.
pub fn list(config: GeneratorConfig, as_json: bool) -> CliResult<ExitCode> {
    let pipeline = Pipeline::new(config);
    let units = pipeline.discover().map_err(report)?;
    let calls = pipeline.index(&units).map_err(report)?;

    if as_json {
        let text = serde_json::to_string_pretty(&listing_json(pipeline.config(), &units, &calls))
            .map_err(|e| CliError::failure(format!("Error serializing listing: {}", e)))?;
        println!("{}", text);
    } else {
        print!("{}", listing_text(pipeline.config(), &units, &calls));
    }
    Ok(ExitCode::SUCCESS)
}

/// `list --json` document: one object per unit with its entry points.
pub fn listing_json(config: &GeneratorConfig, units: &[SourceUnit], calls: &EntryPointCalls) -> Value {
    let listing: Vec<Value> = units
        .iter()
        .map(|unit| {
            let entry_points: Vec<Value> = calls
                .all
                .iter()
                .filter(|e| e.source == unit.path())
                .map(|e| {
                    json!({
                        "kind": e.kind.as_str(),
                        "call": e.call(),
                        "declaration": e.declaration(),
                        "called_from_main": e.portable,
                    })
                })
                .collect();
            json!({
                "path": unit.path(),
                "directory": unit.directory(),
                "language": languages::info(unit.language()).display,
                "portable": config.is_portable(unit),
                "entry_points": entry_points,
            })
        })
        .collect();
    json!({ "units": listing })
}

/// Plain `list` output.
pub fn listing_text(config: &GeneratorConfig, units: &[SourceUnit], calls: &EntryPointCalls) -> String {
    let mut out = String::new();
    for unit in units {
        let variant = if config.is_portable(unit) { "" } else { ", variant" };
        out.push_str(&format!("{} ({}{})\n", unit.path(), languages::info(unit.language()).display, variant));
        for entry in calls.all.iter().filter(|e| e.source == unit.path()) {
            let declared_only = if entry.portable { "" } else { "  (declared only)" };
            out.push_str(&format!("    {}{}\n", entry.call(), declared_only));
        }
    }
    out.push_str(&format!(
        "\n{} file(s), {} entry point(s), {} portable\n",
        units.len(),
        calls.all.len(),
        calls.portable.len()
    ));
    out
}
