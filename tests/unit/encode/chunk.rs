use super::*;

fn framed(tag: ChunkTag, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    write_chunk(&mut out, tag, payload).unwrap();
    out
}

#[test]
fn empty_end_chunk_is_byte_exact() {
    assert_eq!(
        framed(ChunkTag::IEND, &[]),
        [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
    );
}

#[test]
fn length_field_tracks_payload() {
    let payload = [1u8, 2, 3, 4, 5];
    let out = framed(ChunkTag::IDAT, &payload);
    assert_eq!(&out[..4], &5u32.to_be_bytes());
    assert_eq!(&out[4..8], b"IDAT");
    assert_eq!(&out[8..13], &payload);
    assert_eq!(out.len(), 12 + payload.len());
}

#[test]
fn crc_is_recomputed_per_payload() {
    let a = framed(ChunkTag::IDAT, b"a");
    let b = framed(ChunkTag::IDAT, b"b");
    assert_ne!(&a[9..], &b[9..]);

    let mut reference = flate2::Crc::new();
    reference.update(b"IDATa");
    assert_eq!(&a[9..], &reference.sum().to_be_bytes());
}

#[test]
fn tag_displays_as_ascii() {
    assert_eq!(ChunkTag::IHDR.to_string(), "IHDR");
}

fn tiny_file() -> Vec<u8> {
    let mut file = PNG_SIGNATURE.to_vec();
    file.extend(framed(ChunkTag::IHDR, &[0; 13]));
    file.extend(framed(ChunkTag::IDAT, b"xyz"));
    file.extend(framed(ChunkTag::IEND, &[]));
    file
}

#[test]
fn read_chunks_walks_to_end() {
    let file = tiny_file();
    let chunks = read_chunks(&file).unwrap();
    let tags: Vec<ChunkTag> = chunks.iter().map(|c| c.tag).collect();
    assert_eq!(tags, [ChunkTag::IHDR, ChunkTag::IDAT, ChunkTag::IEND]);
    assert!(chunks.iter().all(ChunkView::crc_matches));
    assert_eq!(chunks[1].payload, b"xyz");
}

#[test]
fn read_chunks_flags_corrupt_crc() {
    let mut file = tiny_file();
    // First payload byte of IDAT: signature(8) + IHDR(25) + len/tag(8).
    file[8 + 25 + 8] ^= 0xFF;
    let chunks = read_chunks(&file).unwrap();
    assert!(chunks[0].crc_matches());
    assert!(!chunks[1].crc_matches());
}

#[test]
fn read_chunks_rejects_bad_signature() {
    let mut file = tiny_file();
    file[1] = b'X';
    assert!(matches!(
        read_chunks(&file),
        Err(FormiconError::MalformedContainer(_))
    ));
}

#[test]
fn read_chunks_rejects_truncation_and_trailing_bytes() {
    let file = tiny_file();
    assert!(matches!(
        read_chunks(&file[..file.len() - 2]),
        Err(FormiconError::MalformedContainer(_))
    ));

    let mut long = file.clone();
    long.push(0);
    assert!(matches!(
        read_chunks(&long),
        Err(FormiconError::MalformedContainer(_))
    ));
}
