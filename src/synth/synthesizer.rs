use crate::{
    foundation::core::{ColorModel, Raster, Rgb8},
    foundation::error::{FormiconError, FormiconResult},
    foundation::math::{lerp_channel, row_fraction},
    synth::layout::FieldLayout,
    synth::style::IconStyle,
};

/// Synthesize a square icon with the default [`IconStyle`].
pub fn synthesize(size: i64, has_alpha: bool) -> FormiconResult<Raster> {
    synthesize_with_style(size, has_alpha, &IconStyle::default())
}

/// Synthesize a `size x size` icon: a vertical gradient with flat field bands on top.
///
/// Output is a pure function of the arguments. Alpha, when present, is always 255.
#[tracing::instrument(skip(style))]
pub fn synthesize_with_style(
    size: i64,
    has_alpha: bool,
    style: &IconStyle,
) -> FormiconResult<Raster> {
    let size = checked_size(size)?;
    let model = ColorModel::for_alpha(has_alpha);
    let c = model.channels();
    let layout = FieldLayout::for_size(size, style.markers);

    let row_bytes = size as usize * c;
    let mut data = vec![0u8; row_bytes * size as usize];
    for (y, row) in (0..size).zip(data.chunks_exact_mut(row_bytes)) {
        let background = gradient_at(style, row_fraction(y, size));
        let row_has_field = layout.bands.iter().any(|b| b.covers_row(y));
        for (x, px) in (0..size).zip(row.chunks_exact_mut(c)) {
            let color = if !layout.markers.is_empty() && layout.in_marker(x, y) {
                style.accent
            } else if row_has_field && layout.in_field(x, y) {
                style.field_fill
            } else {
                background
            };
            color.write_pixel(model, px);
        }
    }

    Raster::new(size, size, model, data)
}

/// Background color at interpolation fraction `t`, each channel interpolated independently.
pub fn gradient_at(style: &IconStyle, t: f64) -> Rgb8 {
    let (s, e) = (style.gradient_start, style.gradient_end);
    Rgb8::new(
        lerp_channel(s.r, e.r, t),
        lerp_channel(s.g, e.g, t),
        lerp_channel(s.b, e.b, t),
    )
}

fn checked_size(size: i64) -> FormiconResult<u32> {
    if size <= 0 {
        return Err(FormiconError::invalid_dimensions(format!(
            "icon size must be positive, got {size}"
        )));
    }
    let size = u32::try_from(size).map_err(|_| {
        FormiconError::invalid_dimensions(format!("icon size {size} does not fit in u32"))
    })?;
    (size as usize)
        .checked_mul(size as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| FormiconError::invalid_dimensions(format!("icon size {size} overflows")))?;
    Ok(size)
}

#[cfg(test)]
#[path = "../../tests/unit/synth/synthesizer.rs"]
mod tests;
