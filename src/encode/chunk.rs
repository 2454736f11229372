use crate::{
    encode::crc::Crc32,
    encode::png::PNG_SIGNATURE,
    foundation::error::{FormiconError, FormiconResult},
};

/// Largest payload a chunk length field may declare (`2^31 - 1`).
pub const MAX_CHUNK_LEN: usize = 0x7FFF_FFFF;

/// Four-byte ASCII chunk type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkTag(pub [u8; 4]);

impl ChunkTag {
    /// Image header.
    pub const IHDR: Self = Self(*b"IHDR");
    /// Compressed image data.
    pub const IDAT: Self = Self(*b"IDAT");
    /// End of stream.
    pub const IEND: Self = Self(*b"IEND");

    /// Raw tag bytes.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// CRC-32 over `tag ++ payload`.
    pub fn crc(&self, payload: &[u8]) -> u32 {
        let mut c = Crc32::new();
        c.update(&self.0);
        c.update(payload);
        c.finish()
    }
}

impl std::fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Append one framed chunk: big-endian length, tag, payload, big-endian CRC.
pub fn write_chunk(out: &mut Vec<u8>, tag: ChunkTag, payload: &[u8]) -> FormiconResult<()> {
    if payload.len() > MAX_CHUNK_LEN {
        return Err(FormiconError::invalid_raster(format!(
            "{tag} payload of {} bytes exceeds the chunk length limit",
            payload.len()
        )));
    }
    out.reserve(payload.len() + 12);
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(tag.as_bytes());
    out.extend_from_slice(payload);
    out.extend_from_slice(&tag.crc(payload).to_be_bytes());
    Ok(())
}

/// A chunk borrowed from an encoded file.
#[derive(Clone, Copy, Debug)]
pub struct ChunkView<'a> {
    /// Chunk type.
    pub tag: ChunkTag,
    /// Payload bytes (length taken from the length field).
    pub payload: &'a [u8],
    /// CRC stored in the file.
    pub stored_crc: u32,
}

impl ChunkView<'_> {
    /// Whether the stored CRC matches `tag ++ payload`.
    pub fn crc_matches(&self) -> bool {
        self.tag.crc(self.payload) == self.stored_crc
    }
}

/// Walk the chunks of a finished file up to and including `IEND`.
///
/// Checks the signature and the framing of every chunk. CRC mismatches are reported through
/// [`ChunkView::crc_matches`] rather than as errors so callers can list every bad chunk.
pub fn read_chunks(file: &[u8]) -> FormiconResult<Vec<ChunkView<'_>>> {
    let rest = file
        .strip_prefix(&PNG_SIGNATURE[..])
        .ok_or_else(|| FormiconError::malformed("missing PNG signature"))?;

    let mut chunks = Vec::new();
    let mut pos = 0usize;
    loop {
        let header = rest.get(pos..pos + 8).ok_or_else(|| {
            FormiconError::malformed(format!("truncated chunk header at offset {}", pos + 8))
        })?;
        let len = u32::from_be_bytes([header[0], header[1], header[2], header[3]]) as usize;
        if len > MAX_CHUNK_LEN {
            return Err(FormiconError::malformed(format!(
                "chunk length {len} exceeds the format limit"
            )));
        }
        let tag = ChunkTag([header[4], header[5], header[6], header[7]]);
        let body_start = pos + 8;
        let payload = rest.get(body_start..body_start + len).ok_or_else(|| {
            FormiconError::malformed(format!("{tag} declares {len} bytes past end of file"))
        })?;
        let crc = rest
            .get(body_start + len..body_start + len + 4)
            .ok_or_else(|| FormiconError::malformed(format!("{tag} is missing its CRC")))?;
        chunks.push(ChunkView {
            tag,
            payload,
            stored_crc: u32::from_be_bytes([crc[0], crc[1], crc[2], crc[3]]),
        });
        pos = body_start + len + 4;

        if tag == ChunkTag::IEND {
            if pos != rest.len() {
                return Err(FormiconError::malformed(format!(
                    "{} trailing bytes after IEND",
                    rest.len() - pos
                )));
            }
            return Ok(chunks);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/chunk.rs"]
mod tests;
