//! Shared types: errors, the raster model, and small numeric helpers.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
