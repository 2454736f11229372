use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FormiconError::invalid_dimensions("x")
            .to_string()
            .contains("invalid dimensions:")
    );
    assert!(
        FormiconError::invalid_raster("x")
            .to_string()
            .contains("invalid raster:")
    );
    assert!(
        FormiconError::compression("x")
            .to_string()
            .contains("compression failure:")
    );
    assert!(
        FormiconError::malformed("x")
            .to_string()
            .contains("malformed container:")
    );
    assert!(
        FormiconError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FormiconError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn variants_are_distinguishable() {
    let errs = [
        FormiconError::invalid_dimensions("a"),
        FormiconError::invalid_raster("a"),
        FormiconError::compression("a"),
    ];
    assert!(matches!(errs[0], FormiconError::InvalidDimensions(_)));
    assert!(matches!(errs[1], FormiconError::InvalidRaster(_)));
    assert!(matches!(errs[2], FormiconError::CompressionFailure(_)));
}
