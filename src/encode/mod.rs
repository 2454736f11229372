//! PNG container encoding.
//!
//! Only `IHDR`, `IDAT` and `IEND` are produced, with filter type 0 on every scanline.

/// Chunk framing and the read-side chunk walker.
pub mod chunk;
/// Table-driven CRC-32.
pub mod crc;
/// Header, scanline buffer and the `encode` entry points.
pub mod png;
/// zlib compression via `flate2`.
pub mod zlib;
