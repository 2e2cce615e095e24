//! birdfont-buildgen: build-time configuration generation for BirdFont.
//!
//! This library renders the two files the build produces before compiling
//! anything: the `Config.vala` constants file embedded into the application
//! sources, and the `scripts/config.py` parameters file consumed by later
//! build stages.

pub mod emit;
pub mod py_gen;
pub mod settings;
pub mod vala_gen;

/// Canonical version identifier, embedded into generated artifacts when the
/// caller does not supply an override.
pub const VERSION: &str = "2.2.0";
