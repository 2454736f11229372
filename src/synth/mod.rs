//! Procedural icon synthesis.

/// Field band and marker geometry.
pub mod layout;
/// Icon palette and decoration toggles.
pub mod style;
/// The `synthesize` entry points.
pub mod synthesizer;
