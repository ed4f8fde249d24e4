//! Artifact Patcher: splice generated lines into marker regions.
//!
//! The support files are written by hand except for a few regions owned by the generator. [`patch_region`] is the
//! whole contract: find the start marker, find the first end marker after it, replace the lines in between.
//! It works on text only; [`render_patched`] and [`patch_file`] add the file I/O.

use std::fs;
use std::path::Path;

use makegen_core::markers::{self, RegionId};

use crate::error::{GenError, GenResult, PatchError};
use crate::output::write_output;

/// The pair of marker lines delimiting a generated region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerRegion {
    pub start: String,
    pub end: String,
}

impl MarkerRegion {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The conventional markers of a registered region.
    pub fn from_id(id: RegionId) -> Self {
        let info = markers::info(id);
        Self::new(info.start, info.end)
    }
}

/// One region of a file and the lines that go into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionEdit {
    pub region: MarkerRegion,
    pub body: Vec<String>,
}

impl RegionEdit {
    pub fn new(region: MarkerRegion, body: Vec<String>) -> Self {
        Self { region, body }
    }
}

/// Replace the lines between the markers of `region` with `body`, one entry per line.
///
/// Body lines take the indentation of the start-marker line and the line ending used after it (`\n` or `\r\n`).
/// Text outside the region, including both marker lines, is preserved byte for byte, so patching twice with the same
/// body yields the same text.
///
/// ## Errors
///
/// [`PatchError::MissingMarker`] if the start marker is absent, or no end marker follows it on a later line.
pub fn patch_region(text: &str, region: &MarkerRegion, body: &[String]) -> Result<String, PatchError> {
    let missing = |marker: &str| PatchError::MissingMarker {
        marker: marker.to_string(),
    };

    let start_at = text.find(&region.start).ok_or_else(|| missing(&region.start))?;
    let start_line = text[..start_at].rfind('\n').map_or(0, |i| i + 1);
    let indent: String = text[start_line..start_at]
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect();

    let after_start = start_at + region.start.len();
    let body_start = text[after_start..]
        .find('\n')
        .map(|i| after_start + i + 1)
        .ok_or_else(|| missing(&region.end))?;
    let end_at = text[body_start..]
        .find(&region.end)
        .map(|i| body_start + i)
        .ok_or_else(|| missing(&region.end))?;
    // First byte of the end-marker line; never before `body_start` because `body_start` follows a newline.
    let body_end = text[..end_at].rfind('\n').map_or(0, |i| i + 1).max(body_start);

    let newline = if text[..body_start].ends_with("\r\n") { "\r\n" } else { "\n" };

    let mut out = String::with_capacity(text.len() + body.iter().map(|l| l.len() + indent.len() + 2).sum::<usize>());
    out.push_str(&text[..body_start]);
    for line in body {
        out.push_str(&indent);
        out.push_str(line);
        out.push_str(newline);
    }
    out.push_str(&text[body_end..]);
    Ok(out)
}

/// Read `path` and return its text with every edit applied, without writing anything.
pub fn render_patched(path: &Path, edits: &[RegionEdit]) -> GenResult<String> {
    let text = fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
    edits.iter().try_fold(text, |text, edit| {
        patch_region(&text, &edit.region, &edit.body).map_err(|source| GenError::Patch {
            path: path.to_path_buf(),
            source,
        })
    })
}

/// Apply every edit to `path` in memory, then overwrite the file once.
pub fn patch_file(path: &Path, edits: &[RegionEdit]) -> GenResult<()> {
    let patched = render_patched(path, edits)?;
    write_output(path, &patched)?;
    tracing::info!(path = %path.display(), regions = edits.len(), "patched");
    Ok(())
}
