//! Batch rendering of icon sets.

/// Synthesize-and-encode pipeline with optional rayon parallelism.
pub mod pipeline;
