//! Well-known names used by a Juliet-style test-case suite.

/// Prefix every test-case file name and entry-point qualifier starts with.
pub const CASE_PREFIX: &str = "CWE";

/// Directory (relative to the working directory) holding the test cases.
pub const TESTCASES_DIR: &str = "testcases";

/// Directory (relative to the working directory) holding the support sources.
pub const SUPPORT_DIR: &str = "testcasesupport";

/// Main entry-point source patched with the portable calls.
pub const MAIN_FILE: &str = "main_linux.cpp";

/// Header patched with every entry-point declaration.
pub const HEADER_FILE: &str = "testcases.h";

/// Name of the generated recipe.
pub const RECIPE_FILE: &str = "Makefile_all";

/// Name of the linked binary built by the recipe.
pub const TARGET_NAME: &str = "all-testcases";

/// C support sources compiled next to the test cases.
pub const C_SUPPORT_SOURCES: &[&str] = &["io.c", "std_thread.c"];

/// File-name substrings marking a variant that is left out of the portable build.
///
/// `w32` files only build against the Windows API; `wchar_t` files rely on wide-character functions that are not
/// portable across libc implementations.
pub const VARIANT_MARKERS: &[&str] = &["w32", "wchar_t"];

/// Entry point exercising the flawed code path.
pub const BAD_FUNCTION: &str = "bad";

/// Entry point exercising the fixed code path.
pub const GOOD_FUNCTION: &str = "good";
