use std::io::Read as _;

use super::*;
use crate::encode::chunk::read_chunks;

fn checker(width: u32, height: u32, model: ColorModel) -> Raster {
    let c = model.channels();
    let mut data = Vec::with_capacity(width as usize * height as usize * c);
    for y in 0..height {
        for x in 0..width {
            let v = if (x + y) % 2 == 0 { 255 } else { 0 };
            data.extend_from_slice(&[v, (x * 10) as u8, (y * 10) as u8, 128][..c]);
        }
    }
    Raster::new(width, height, model, data).unwrap()
}

#[test]
fn header_payload_layout() {
    let h = ImageHeader {
        width: 16,
        height: 300,
        model: ColorModel::Rgba,
    };
    assert_eq!(
        h.to_bytes(),
        [0, 0, 0, 16, 0, 0, 1, 44, 8, 6, 0, 0, 0]
    );
}

#[test]
fn scanlines_prefix_each_row_with_filter_byte() {
    let r = checker(2, 2, ColorModel::Rgb);
    let s = scanlines(&r);
    assert_eq!(s.len(), 2 * (1 + 2 * 3));
    assert_eq!(s[0], 0);
    assert_eq!(&s[1..7], &r.data()[0..6]);
    assert_eq!(s[7], 0);
    assert_eq!(&s[8..], &r.data()[6..]);
}

#[test]
fn file_starts_with_signature_then_header() {
    let r = checker(3, 5, ColorModel::Rgb);
    let png = encode(&r, 3, 5).unwrap();
    assert_eq!(&png[..8], &PNG_SIGNATURE);
    assert_eq!(&png[8..12], &13u32.to_be_bytes());
    assert_eq!(&png[12..16], b"IHDR");
    assert_eq!(&png[16..20], &3u32.to_be_bytes());
    assert_eq!(&png[20..24], &5u32.to_be_bytes());
    assert_eq!(png[24], 8);
    assert_eq!(png[25], 2);
}

#[test]
fn emits_exactly_three_chunks_ending_in_empty_iend() {
    for model in [ColorModel::Rgb, ColorModel::Rgba] {
        let png = encode(&checker(4, 4, model), 4, 4).unwrap();
        let chunks = read_chunks(&png).unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].tag, ChunkTag::IHDR);
        assert_eq!(chunks[1].tag, ChunkTag::IDAT);
        assert_eq!(chunks[2].tag, ChunkTag::IEND);
        assert!(chunks[2].payload.is_empty());
        assert_eq!(chunks[2].stored_crc, 0xAE42_6082);
        assert!(chunks.iter().all(|c| c.crc_matches()));
        assert_eq!(chunks[0].payload[9], model.color_type());
    }
}

#[test]
fn idat_inflates_to_scanlines() {
    let r = checker(7, 3, ColorModel::Rgba);
    let png = encode(&r, 7, 3).unwrap();
    let chunks = read_chunks(&png).unwrap();
    let mut raw = Vec::new();
    flate2::read::ZlibDecoder::new(chunks[1].payload)
        .read_to_end(&mut raw)
        .unwrap();
    assert_eq!(raw, scanlines(&r));
}

#[test]
fn dimension_mismatch_is_invalid_raster() {
    let r = checker(4, 4, ColorModel::Rgb);
    assert!(matches!(
        encode(&r, 4, 5),
        Err(FormiconError::InvalidRaster(_))
    ));
    assert!(matches!(
        encode(&r, 2, 8),
        Err(FormiconError::InvalidRaster(_))
    ));
}

#[test]
fn zero_dimension_is_rejected() {
    let r = checker(1, 1, ColorModel::Rgb);
    assert!(matches!(
        encode(&r, 0, 1),
        Err(FormiconError::InvalidDimensions(_))
    ));
}

#[test]
fn encode_is_deterministic() {
    let r = checker(9, 9, ColorModel::Rgb);
    assert_eq!(encode(&r, 9, 9).unwrap(), encode(&r, 9, 9).unwrap());
}

#[test]
fn lower_level_changes_only_idat() {
    let r = checker(32, 32, ColorModel::Rgb);
    let best = encode(&r, 32, 32).unwrap();
    let stored = encode_with(
        &r,
        32,
        32,
        &EncodeOptions {
            level: CompressionLevel::NONE,
        },
    )
    .unwrap();
    let a = read_chunks(&best).unwrap();
    let b = read_chunks(&stored).unwrap();
    assert_eq!(a[0].payload, b[0].payload);
    assert!(b[1].payload.len() > a[1].payload.len());
}
