//! Filesystem emission of the generated artifacts.
//!
//! Both emitters are single-shot and independent; the build driver may run
//! them in either order. Each overwrites its output file without backup.

use std::io;
use std::io::Write as _;
use std::path::Path;

use crate::py_gen::ParamsFile;
use crate::vala_gen::{self, ConstantsFile};

/// Output path of the Vala constants file, relative to the build root.
pub const CONFIG_VALA_PATH: &str = "libbirdfont/Config.vala";

/// Output path of the build-parameters file, relative to the build root.
pub const CONFIG_PY_PATH: &str = "scripts/config.py";

/// Writes `contents` to `path` through a temporary file in the destination
/// directory, then renames it into place.
///
/// The rename keeps an interrupted run from leaving a truncated file behind.
/// The temporary lives next to the destination, so a missing parent
/// directory surfaces as the same I/O error a direct open would give.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path)?;
    Ok(())
}

/// Writes `libbirdfont/Config.vala` under `root`, embedding the supplied
/// version, the current local time, and the install prefix.
///
/// Reports the action on stdout. Constants appear in the fixed order
/// VERSION, BUILD_TIMESTAMP, PREFIX.
pub fn write_config(root: &Path, version: &str, prefix: &str) -> io::Result<()> {
    println!("Writing {CONFIG_VALA_PATH}");

    let mut file = ConstantsFile::new("BirdFont");
    file.constant("VERSION", version)
        .constant("BUILD_TIMESTAMP", &vala_gen::build_timestamp())
        .constant("PREFIX", prefix);

    write_atomic(&root.join(CONFIG_VALA_PATH), &file.render())
}

/// Writes `scripts/config.py` under `root` with the three build parameters
/// in the fixed order PREFIX, DEST, CC.
pub fn write_compile_parameters(
    root: &Path,
    prefix: &str,
    dest: &str,
    cc: &str,
) -> io::Result<()> {
    let mut file = ParamsFile::new();
    file.assign("PREFIX", prefix)
        .assign("DEST", dest)
        .assign("CC", cc);

    write_atomic(&root.join(CONFIG_PY_PATH), &file.render())
}
