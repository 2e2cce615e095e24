//! Caller-supplied generation inputs.

use serde::Serialize;

/// The inputs the build driver supplies for one generation run.
///
/// All four fields pass through to the generated files as opaque strings;
/// no relationship between them is assumed or checked.
#[derive(Debug, Clone, Serialize)]
pub struct BuildSettings {
    /// Version string embedded into the constants file.
    pub version: String,
    /// Install path prefix, e.g. `/usr/local`.
    pub prefix: String,
    /// Staging root used during installation, distinct from the prefix.
    pub dest: String,
    /// Identifier of the compiler later build stages should invoke.
    pub cc: String,
}
