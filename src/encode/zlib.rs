use std::io::Write as _;

use flate2::{Compression, write::ZlibEncoder};

use crate::foundation::error::{FormiconError, FormiconResult};

/// Compression effort on the zlib `0..=9` scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompressionLevel(u32);

impl CompressionLevel {
    /// Store only.
    pub const NONE: Self = Self(0);
    /// Maximum effort; what [`crate::encode`] uses.
    pub const BEST: Self = Self(9);

    /// Validated level in `0..=9`.
    pub fn new(level: u32) -> FormiconResult<Self> {
        if level > 9 {
            return Err(FormiconError::validation(format!(
                "compression level must be in 0..=9, got {level}"
            )));
        }
        Ok(Self(level))
    }

    /// Raw level value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self::BEST
    }
}

/// Zlib-wrap `bytes` (2-byte header, deflate blocks, Adler-32 trailer).
pub fn compress(bytes: &[u8], level: CompressionLevel) -> FormiconResult<Vec<u8>> {
    let mut enc = ZlibEncoder::new(
        Vec::with_capacity(bytes.len() / 2 + 64),
        Compression::new(level.get()),
    );
    enc.write_all(bytes)
        .map_err(|e| FormiconError::compression(format!("zlib write failed: {e}")))?;
    enc.finish()
        .map_err(|e| FormiconError::compression(format!("zlib finish failed: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/zlib.rs"]
mod tests;
