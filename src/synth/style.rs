use crate::foundation::core::Rgb8;

/// Colors and decorations for a synthesized icon.
///
/// Deserializes from JSON with every field optional; missing fields take the defaults below.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconStyle {
    /// Background color of row 0.
    pub gradient_start: Rgb8,
    /// Background color the gradient sweeps toward (never reached exactly).
    pub gradient_end: Rgb8,
    /// Fill of the field bands.
    pub field_fill: Rgb8,
    /// Fill of the circular markers.
    pub accent: Rgb8,
    /// Draw one circular marker near the left edge of each band.
    pub markers: bool,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            gradient_start: Rgb8::new(99, 102, 241),
            gradient_end: Rgb8::new(139, 92, 246),
            field_fill: Rgb8::WHITE,
            accent: Rgb8::new(99, 102, 241),
            markers: false,
        }
    }
}

impl IconStyle {
    /// Default palette with markers enabled.
    pub fn with_markers() -> Self {
        Self {
            markers: true,
            ..Self::default()
        }
    }
}
