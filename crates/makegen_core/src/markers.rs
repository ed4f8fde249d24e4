//! Marker regions spliced into the support sources.
//!
//! A marker region is delimited by two comment lines:
//!
//! ```c
//! /* BEGIN-AUTOGENERATED-FUNCTION-CALLS */
//! ...generated lines...
//! /* END-AUTOGENERATED-FUNCTION-CALLS */
//! ```
//!
//! Everything between the two lines belongs to the generator and is replaced on every run.

/// Stable identifier for a marker region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    /// Calls to the portable entry points, in the main file.
    FunctionCalls,
    /// Declarations of the C entry points, in the header.
    CDeclarations,
    /// Declarations of the C++ entry points, in the header.
    CppDeclarations,
}

/// Metadata for a marker region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionInfo {
    pub id: RegionId,
    /// Marker name between `BEGIN-AUTOGENERATED-`/`END-AUTOGENERATED-` and ` */`.
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
}

/// Registry of all marker regions.
pub const REGIONS: &[RegionInfo] = &[
    region(
        RegionId::FunctionCalls,
        "FUNCTION-CALLS",
        "/* BEGIN-AUTOGENERATED-FUNCTION-CALLS */",
        "/* END-AUTOGENERATED-FUNCTION-CALLS */",
    ),
    region(
        RegionId::CDeclarations,
        "C-DECLARATIONS",
        "/* BEGIN-AUTOGENERATED-C-DECLARATIONS */",
        "/* END-AUTOGENERATED-C-DECLARATIONS */",
    ),
    region(
        RegionId::CppDeclarations,
        "CPP-DECLARATIONS",
        "/* BEGIN-AUTOGENERATED-CPP-DECLARATIONS */",
        "/* END-AUTOGENERATED-CPP-DECLARATIONS */",
    ),
];

const fn region(id: RegionId, name: &'static str, start: &'static str, end: &'static str) -> RegionInfo {
    RegionInfo { id, name, start, end }
}

/// Look up the metadata of a region.
pub fn info(id: RegionId) -> &'static RegionInfo {
    match id {
        RegionId::FunctionCalls => &REGIONS[0],
        RegionId::CDeclarations => &REGIONS[1],
        RegionId::CppDeclarations => &REGIONS[2],
    }
}
