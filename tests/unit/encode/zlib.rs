use std::io::Read as _;

use super::*;

fn inflate(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    flate2::read::ZlibDecoder::new(bytes)
        .read_to_end(&mut out)
        .unwrap();
    out
}

#[test]
fn level_range_is_validated() {
    assert_eq!(CompressionLevel::new(9).unwrap(), CompressionLevel::BEST);
    assert!(matches!(
        CompressionLevel::new(10),
        Err(FormiconError::Validation(_))
    ));
    assert_eq!(CompressionLevel::default(), CompressionLevel::BEST);
}

#[test]
fn output_is_zlib_wrapped() {
    let out = compress(b"hello hello hello", CompressionLevel::BEST).unwrap();
    // CMF: deflate with 32K window; FCHECK makes the header a multiple of 31.
    assert_eq!(out[0], 0x78);
    assert_eq!((u16::from(out[0]) << 8 | u16::from(out[1])) % 31, 0);
}

#[test]
fn inflates_back_to_input() {
    let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
    for level in [CompressionLevel::NONE, CompressionLevel::BEST] {
        let out = compress(&data, level).unwrap();
        assert_eq!(inflate(&out), data);
    }
}

#[test]
fn empty_input_still_produces_valid_stream() {
    let out = compress(&[], CompressionLevel::BEST).unwrap();
    assert!(out.len() >= 6);
    assert!(inflate(&out).is_empty());
}

#[test]
fn compression_is_deterministic() {
    let data = vec![7u8; 4096];
    assert_eq!(
        compress(&data, CompressionLevel::BEST).unwrap(),
        compress(&data, CompressionLevel::BEST).unwrap()
    );
}
