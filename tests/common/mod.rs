//! Shared fixtures for makegen integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use makegen::GeneratorConfig;
use regex::Regex;
use tempfile::TempDir;

pub const MAIN_TEMPLATE: &str = "\
#include \"std_testcase.h\"
#include \"testcases.h\"

int main(int argc, char * argv[])
{
    /* BEGIN-AUTOGENERATED-FUNCTION-CALLS */
    stale_call();
    /* END-AUTOGENERATED-FUNCTION-CALLS */
    return 0;
}
";

pub const HEADER_TEMPLATE: &str = "\
#ifndef _TESTCASES_H
#define _TESTCASES_H

#ifdef __cplusplus
extern \"C\" {
#endif

/* BEGIN-AUTOGENERATED-C-DECLARATIONS */
/* END-AUTOGENERATED-C-DECLARATIONS */

#ifdef __cplusplus
}

/* BEGIN-AUTOGENERATED-CPP-DECLARATIONS */
/* END-AUTOGENERATED-CPP-DECLARATIONS */
#endif

#endif
";

/// A C test case defining `<qualifier>_bad` and `<qualifier>_good`.
pub fn c_case(qualifier: &str) -> String {
    format!(
        "#include \"std_testcase.h\"\n\n#ifndef OMITBAD\nvoid {qualifier}_bad()\n{{\n}}\n#endif\n\n\
         #ifndef OMITGOOD\nstatic void goodG2B()\n{{\n}}\n\nvoid {qualifier}_good()\n{{\n    goodG2B();\n}}\n#endif\n"
    )
}

/// A C++ test case defining `bad` and `good` inside `namespace <qualifier>`.
pub fn cpp_case(qualifier: &str) -> String {
    format!(
        "#include \"std_testcase.h\"\n\nnamespace {qualifier}\n{{\n\nvoid bad()\n{{\n}}\n\nvoid good()\n{{\n}}\n\n}} /* close namespace */\n"
    )
}

/// A scratch working directory laid out like a test-case suite.
pub struct Suite {
    dir: TempDir,
}

impl Suite {
    /// Empty `testcases/` plus support files with marker regions.
    pub fn new() -> Self {
        let suite = Self::bare();
        fs::create_dir_all(suite.path().join("testcases")).unwrap();
        suite.write("testcasesupport/main_linux.cpp", MAIN_TEMPLATE);
        suite.write("testcasesupport/testcases.h", HEADER_TEMPLATE);
        suite
    }

    /// A working directory with nothing in it.
    pub fn bare() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// The `A`/`B` layout: a portable C case, its w32 variant and a C++ case.
    pub fn scenario() -> Self {
        let suite = Self::new();
        suite.write("testcases/A/CWE1_a.c", &c_case("CWE1_a"));
        suite.write("testcases/A/CWE1_a_w32.c", &c_case("CWE1_a_w32"));
        suite.write("testcases/B/CWE2_b.cpp", &cpp_case("CWE2_b"));
        suite
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.path().join(relative)
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.join(relative)).unwrap()
    }

    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new().with_base_dir(self.path())
    }
}

/// Lines strictly between the two markers of a region.
pub fn region_lines(text: &str, name: &str) -> Vec<String> {
    let start = format!("/* BEGIN-AUTOGENERATED-{name} */");
    let end = format!("/* END-AUTOGENERATED-{name} */");
    text.lines()
        .skip_while(|l| !l.contains(&start))
        .skip(1)
        .take_while(|l| !l.contains(&end))
        .map(|l| l.trim().to_string())
        .collect()
}

/// Match a path against a make glob that only uses `*` (which never crosses `/`).
pub fn glob_match(pattern: &str, name: &str) -> bool {
    match pattern.split_once('*') {
        None => pattern == name,
        Some((head, rest)) => {
            let Some(tail) = name.strip_prefix(head) else {
                return false;
            };
            (0..=tail.len())
                .filter(|&i| tail.is_char_boundary(i))
                .take_while(|&i| !tail[..i].contains('/'))
                .any(|i| glob_match(rest, &tail[i..]))
        }
    }
}

/// Evaluate one emitted source expression, either `$(wildcard inc)` or
/// `$(filter-out $(wildcard ex1) ...,$(wildcard inc))`, against a list of paths.
pub fn eval_source_expr(expr: &str, paths: &[String]) -> Vec<String> {
    let wildcard = Regex::new(r"\$\(wildcard ([^)]*)\)").unwrap();
    let mut patterns: Vec<&str> = wildcard
        .captures_iter(expr)
        .map(|c| c.get(1).unwrap().as_str())
        .collect();
    let include = patterns.pop().expect("expression has no wildcard");

    paths
        .iter()
        .filter(|p| glob_match(include, p))
        .filter(|p| !patterns.iter().any(|ex| glob_match(ex, p)))
        .cloned()
        .collect()
}

/// The expressions assigned to `var` in a recipe, one per continued line.
pub fn variable_exprs(recipe: &str, var: &str) -> Vec<String> {
    let prefix = format!("{var}=");
    let mut exprs = Vec::new();
    let mut lines = recipe.lines();

    while let Some(line) = lines.next() {
        let Some(first) = line.strip_prefix(&prefix) else {
            continue;
        };
        let mut current = first;
        loop {
            let continued = current.ends_with('\\');
            let expr = current.trim_end_matches('\\').trim();
            if !expr.is_empty() {
                exprs.push(expr.to_string());
            }
            if !continued {
                return exprs;
            }
            match lines.next() {
                Some(next) => current = next,
                None => return exprs,
            }
        }
    }
    exprs
}
