use crate::foundation::error::{FormiconError, FormiconResult};

/// Pixel layout of a [`Raster`]: 8-bit truecolor with or without alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// Three channels, red/green/blue.
    Rgb,
    /// Four channels, red/green/blue/alpha (straight alpha).
    Rgba,
}

impl ColorModel {
    /// Resolve a model from a per-pixel channel count (3 or 4).
    pub fn from_channels(channels: usize) -> FormiconResult<Self> {
        match channels {
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            n => Err(FormiconError::invalid_raster(format!(
                "pixels must have 3 or 4 channels, got {n}"
            ))),
        }
    }

    /// Channels per pixel.
    pub fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Color type code written into the image header (2 = truecolor, 6 = truecolor + alpha).
    pub fn color_type(self) -> u8 {
        match self {
            Self::Rgb => 2,
            Self::Rgba => 6,
        }
    }

    /// Model for an icon request.
    pub fn for_alpha(has_alpha: bool) -> Self {
        if has_alpha { Self::Rgba } else { Self::Rgb }
    }
}

/// Straight (non-premultiplied) RGB8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Write this color as one pixel of `model` into `dst`; alpha is always opaque.
    pub fn write_pixel(self, model: ColorModel, dst: &mut [u8]) {
        dst[0] = self.r;
        dst[1] = self.g;
        dst[2] = self.b;
        if model == ColorModel::Rgba {
            dst[3] = 255;
        }
    }
}

/// Row-major grid of 8-bit pixels with a single channel count for the whole image.
///
/// Constructors validate that the byte buffer holds exactly `width * height` pixels, so a
/// `Raster` value never disagrees with its own dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    model: ColorModel,
    data: Vec<u8>,
}

impl Raster {
    /// Wrap an interleaved byte buffer.
    pub fn new(width: u32, height: u32, model: ColorModel, data: Vec<u8>) -> FormiconResult<Self> {
        let expected = byte_len(width, height, model)?;
        if data.len() != expected {
            return Err(FormiconError::invalid_raster(format!(
                "{width}x{height} {model:?} needs {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            model,
            data,
        })
    }

    /// Build a raster from one slice per pixel. The channel count of the first pixel fixes the
    /// model; every other pixel must match it.
    pub fn from_pixels<P: AsRef<[u8]>>(
        width: u32,
        height: u32,
        pixels: &[P],
    ) -> FormiconResult<Self> {
        let first = pixels
            .first()
            .ok_or_else(|| FormiconError::invalid_raster("raster has no pixels"))?;
        let model = ColorModel::from_channels(first.as_ref().len())?;
        let expected = byte_len(width, height, model)?;
        if pixels.len() != expected / model.channels() {
            return Err(FormiconError::invalid_raster(format!(
                "{width}x{height} needs {} pixels, got {}",
                expected / model.channels(),
                pixels.len()
            )));
        }

        let mut data = Vec::with_capacity(expected);
        for (i, px) in pixels.iter().enumerate() {
            let px = px.as_ref();
            if px.len() != model.channels() {
                return Err(FormiconError::invalid_raster(format!(
                    "pixel {i} has {} channels, expected {}",
                    px.len(),
                    model.channels()
                )));
            }
            data.extend_from_slice(px);
        }
        Self::new(width, height, model, data)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel layout.
    pub fn model(&self) -> ColorModel {
        self.model
    }

    /// Interleaved pixel bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.data.len() / self.model.channels()
    }

    /// Bytes per row.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * self.model.channels()
    }

    /// Channels of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let c = self.model.channels();
        let start = (y as usize * self.width as usize + x as usize) * c;
        self.data.get(start..start + c)
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(self.row_bytes())
    }
}

fn byte_len(width: u32, height: u32, model: ColorModel) -> FormiconResult<usize> {
    if width == 0 || height == 0 {
        return Err(FormiconError::invalid_dimensions(format!(
            "raster must be at least 1x1, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(model.channels()))
        .ok_or_else(|| FormiconError::invalid_dimensions("raster buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
