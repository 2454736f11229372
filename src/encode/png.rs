use crate::{
    encode::chunk::{ChunkTag, write_chunk},
    encode::zlib::{CompressionLevel, compress},
    foundation::core::{ColorModel, Raster},
    foundation::error::{FormiconError, FormiconResult},
};

/// The 8-byte file signature every PNG starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Filter type byte prepended to each scanline ("None").
const FILTER_NONE: u8 = 0;

/// Contents of the `IHDR` chunk.
///
/// Bit depth is always 8; compression, filter and interlace methods are always 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageHeader {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Color model; selects color type 2 or 6.
    pub model: ColorModel,
}

impl ImageHeader {
    /// Bits per channel.
    pub const BIT_DEPTH: u8 = 8;

    /// Serialized 13-byte payload.
    pub fn to_bytes(&self) -> [u8; 13] {
        let mut out = [0u8; 13];
        out[0..4].copy_from_slice(&self.width.to_be_bytes());
        out[4..8].copy_from_slice(&self.height.to_be_bytes());
        out[8] = Self::BIT_DEPTH;
        out[9] = self.model.color_type();
        // out[10..13]: compression, filter, interlace methods, all 0.
        out
    }
}

/// Encoder knobs. [`encode`] uses the defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeOptions {
    /// zlib effort for the `IDAT` stream.
    pub level: CompressionLevel,
}

/// Pre-compression scanline buffer: a `0` filter byte, then the raw row bytes, per row.
pub fn scanlines(raster: &Raster) -> Vec<u8> {
    let mut out = Vec::with_capacity(raster.data().len() + raster.height() as usize);
    for row in raster.rows() {
        out.push(FILTER_NONE);
        out.extend_from_slice(row);
    }
    out
}

/// Encode `raster` as a complete PNG file at maximum compression.
///
/// `width` and `height` must describe the raster; a mismatch is an `InvalidRaster` error.
pub fn encode(raster: &Raster, width: u32, height: u32) -> FormiconResult<Vec<u8>> {
    encode_with(raster, width, height, &EncodeOptions::default())
}

/// [`encode`] with explicit options.
#[tracing::instrument(skip(raster, opts), fields(model = ?raster.model()))]
pub fn encode_with(
    raster: &Raster,
    width: u32,
    height: u32,
    opts: &EncodeOptions,
) -> FormiconResult<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(FormiconError::invalid_dimensions(format!(
            "image must be at least 1x1, got {width}x{height}"
        )));
    }
    if raster.width() != width || raster.height() != height {
        return Err(FormiconError::invalid_raster(format!(
            "raster is {}x{} but {width}x{height} was requested",
            raster.width(),
            raster.height()
        )));
    }
    let expected = width as usize * height as usize;
    if raster.pixel_count() != expected {
        return Err(FormiconError::invalid_raster(format!(
            "raster holds {} pixels, expected {expected}",
            raster.pixel_count()
        )));
    }

    let header = ImageHeader {
        width,
        height,
        model: raster.model(),
    };
    let idat = compress(&scanlines(raster), opts.level)?;
    tracing::debug!(
        raw = raster.data().len(),
        compressed = idat.len(),
        "compressed image data"
    );

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + 25 + idat.len() + 12 + 12);
    out.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut out, ChunkTag::IHDR, &header.to_bytes())?;
    write_chunk(&mut out, ChunkTag::IDAT, &idat)?;
    write_chunk(&mut out, ChunkTag::IEND, &[])?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
