//! Vala constants-file generation.
//!
//! This module renders the `Config.vala` source file that exposes build-time
//! constants (version, build timestamp, install prefix) to the application
//! sources. Rendering is pure string building; filesystem side effects live
//! in [`crate::emit`].

use std::fmt::Write as _;

/// Header comment marking the file as generated.
pub const GENERATED_HEADER: &str =
    "// Don't edit this file -- it is generated by the build script";

/// strftime format producing asctime-style timestamps like
/// `Wed Aug 27 14:03:12 2026`. Day-of-month is space padded.
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Formats the current local wall-clock time in asctime style.
pub fn build_timestamp() -> String {
    timestamp_at(chrono::Local::now())
}

/// Asctime-style formatting for a specific instant.
pub fn timestamp_at(t: chrono::DateTime<chrono::Local>) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

/// Escapes a string for use inside a Vala double-quoted string literal.
///
/// Vala string literals use C-style escape sequences:
/// - `\\` -> `\`
/// - `\"` -> `"`
/// - `\n` -> newline
/// - `\t` -> tab
fn escape_vala_string(s: &str) -> String {
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

/// A string escaped for use inside a Vala double-quoted literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValaString(String);

impl ValaString {
    /// Creates a new escaped Vala string.
    pub fn new(s: &str) -> Self {
        Self(escape_vala_string(s))
    }

    /// Returns the escaped string content.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ValaString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A builder for a generated Vala constants file.
///
/// Constants render in insertion order. The order is part of the generated
/// file's diff-stability contract, so callers must add them in the order
/// they should appear.
#[derive(Debug)]
pub struct ConstantsFile {
    namespace: String,
    constants: Vec<(String, String)>,
}

impl ConstantsFile {
    /// Creates an empty constants file for the given namespace.
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            constants: Vec::new(),
        }
    }

    /// Appends an `internal static const string` declaration.
    pub fn constant(&mut self, name: &str, value: &str) -> &mut Self {
        self.constants.push((name.to_string(), value.to_string()));
        self
    }

    /// Renders the full file: generated-file header, namespace block, one
    /// tab-indented declaration per constant. No newline follows the closing
    /// brace.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(128 + self.constants.len() * 48);
        out.push_str(GENERATED_HEADER);
        out.push('\n');
        let _ = writeln!(out, "namespace {} {{", self.namespace);
        for (name, value) in &self.constants {
            let _ = writeln!(
                out,
                "\tinternal static const string {} = \"{}\";",
                name,
                ValaString::new(value)
            );
        }
        out.push('}');
        out
    }
}
