//! Python build-parameters file generation.
//!
//! Renders `scripts/config.py`, the variable-assignment file later build
//! stages import to learn the install prefix, staging destination, and
//! compiler choice.

use std::fmt::Write as _;

/// Interpreter directive emitted as the first line.
pub const SHEBANG: &str = "#!/usr/bin/python";

/// Escapes a string for use inside a Python double-quoted string literal.
fn escape_py_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            c => result.push(c),
        }
    }
    result
}

/// A builder for a generated Python assignment file.
///
/// Assignments render in insertion order, one `NAME = "value"` line each.
#[derive(Debug, Default)]
pub struct ParamsFile {
    assignments: Vec<(String, String)>,
}

impl ParamsFile {
    /// Creates an empty parameters file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a quoted string assignment.
    pub fn assign(&mut self, name: &str, value: &str) -> &mut Self {
        self.assignments.push((name.to_string(), value.to_string()));
        self
    }

    /// Renders the full file: shebang line, then one assignment per line.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(32 + self.assignments.len() * 24);
        out.push_str(SHEBANG);
        out.push('\n');
        for (name, value) in &self.assignments {
            let _ = writeln!(out, "{} = \"{}\"", name, escape_py_string(value));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_file(prefix: &str, dest: &str, cc: &str) -> String {
        let mut file = ParamsFile::new();
        file.assign("PREFIX", prefix)
            .assign("DEST", dest)
            .assign("CC", cc);
        file.render()
    }

    #[test]
    fn test_assignments_render_in_insertion_order() {
        let out = params_file("/usr", "/tmp/stage", "gcc");
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], SHEBANG);
        assert_eq!(lines[1], "PREFIX = \"/usr\"");
        assert_eq!(lines[2], "DEST = \"/tmp/stage\"");
        assert_eq!(lines[3], "CC = \"gcc\"");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_trailing_newline_after_last_assignment() {
        let out = params_file("/usr", "/tmp/stage", "gcc");
        assert!(out.ends_with("\"gcc\"\n"));
    }

    #[test]
    fn test_empty_values_render_empty_literals() {
        let out = params_file("", "", "");
        assert!(out.contains("PREFIX = \"\""));
        assert!(out.contains("DEST = \"\""));
        assert!(out.contains("CC = \"\""));
    }

    #[test]
    fn test_embedded_quote_is_escaped() {
        let out = params_file("/usr", "/tmp/\"stage\"", "gcc");
        assert!(out.contains("DEST = \"/tmp/\\\"stage\\\"\""));
    }
}
