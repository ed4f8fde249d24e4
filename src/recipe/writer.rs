//! Makefile text builder
//!
//! Knows the few layout rules make cares about: recipe commands start with a tab, and a multi-line value continues
//! with a trailing backslash on every line but the last.

/// Builder that accumulates recipe text
#[derive(Debug, Default)]
pub struct RecipeWriter {
    /// The output buffer
    output: String,
}

impl RecipeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recipe text
    pub fn finish(self) -> String {
        self.output
    }

    /// Write a line followed by a newline
    pub fn line(&mut self, s: &str) {
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Write an empty line
    pub fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Write a comment line
    pub fn comment(&mut self, text: &str) {
        self.output.push_str("# ");
        self.line(text);
    }

    /// Write `NAME=value`
    pub fn assign(&mut self, name: &str, value: &str) {
        self.output.push_str(name);
        self.output.push('=');
        self.line(value);
    }

    /// Write `NAME=` followed by one item per line, joined with line continuations.
    ///
    /// With no items the variable is assigned the empty string.
    pub fn assign_continued<S: AsRef<str>>(&mut self, name: &str, items: &[S]) {
        let value = items.iter().map(|s| s.as_ref()).collect::<Vec<&str>>().join(" \\\n");
        self.assign(name, &value);
    }

    /// Write a rule: `targets : prerequisites` followed by tab-indented commands
    pub fn rule(&mut self, targets: &str, prerequisites: &str, commands: &[&str]) {
        self.output.push_str(targets);
        self.output.push_str(" : ");
        self.line(prerequisites);
        for command in commands {
            self.output.push('\t');
            self.line(command);
        }
    }
}
