//! formicon synthesizes small "form field" icons and encodes them as PNG files.
//!
//! # Pipeline overview
//!
//! 1. **Synthesize**: `(size, has_alpha) -> Raster` (vertical gradient, three flat field bands,
//!    optional circular markers)
//! 2. **Encode**: `Raster -> Vec<u8>` (signature, `IHDR`, one zlib-compressed `IDAT`, `IEND`)
//! 3. **Write** (optional): atomic write of the finished bytes to disk
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: synthesis and encoding are pure; the same request always produces the
//!   same bytes, sequentially or in parallel.
//! - **No IO in the core**: [`synthesize`] and [`encode`] never touch the filesystem.
//!
//! ```no_run
//! let raster = formicon::synthesize(128, true)?;
//! let png = formicon::encode(&raster, 128, 128)?;
//! formicon::write_atomic(std::path::Path::new("icons/icon128.png"), &png)?;
//! # Ok::<(), formicon::FormiconError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Icon set configuration loaded from JSON.
pub mod config;
/// PNG container encoding.
pub mod encode;
/// Filesystem output.
pub mod output;
/// Batch rendering of icon sets.
pub mod render;
/// Procedural icon synthesis.
pub mod synth;

pub use crate::config::IconSetConfig;
pub use crate::encode::chunk::{ChunkTag, ChunkView, MAX_CHUNK_LEN, read_chunks, write_chunk};
pub use crate::encode::crc::{Crc32, crc32};
pub use crate::encode::png::{
    EncodeOptions, ImageHeader, PNG_SIGNATURE, encode, encode_with, scanlines,
};
pub use crate::encode::zlib::{CompressionLevel, compress};
pub use crate::foundation::core::{ColorModel, Raster, Rgb8};
pub use crate::foundation::error::{FormiconError, FormiconResult};
pub use crate::output::fs::{ensure_parent_dir, icon_file_name, write_atomic};
pub use crate::render::pipeline::{
    IconRequest, RenderStats, RenderThreading, RenderedIcon, render_icon, render_icons,
};
pub use crate::synth::layout::{FIELD_COUNT, FieldBand, FieldLayout, Marker};
pub use crate::synth::style::IconStyle;
pub use crate::synth::synthesizer::{gradient_at, synthesize, synthesize_with_style};
