/// Number of field bands per icon.
pub const FIELD_COUNT: u32 = 3;

/// Half-open pixel rectangle `[left, right) x [top, bottom)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldBand {
    /// First column inside the band.
    pub left: u32,
    /// First column past the band.
    pub right: u32,
    /// First row inside the band.
    pub top: u32,
    /// First row past the band.
    pub bottom: u32,
}

impl FieldBand {
    /// Whether pixel `(x, y)` lies in the band.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.left <= x && x < self.right && self.top <= y && y < self.bottom
    }

    /// Whether row `y` crosses the band.
    pub fn covers_row(&self, y: u32) -> bool {
        self.top <= y && y < self.bottom
    }

    /// Band height in rows.
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Axis-aligned filled ellipse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Center column.
    pub cx: f64,
    /// Center row.
    pub cy: f64,
    /// Horizontal radius.
    pub rx: f64,
    /// Vertical radius.
    pub ry: f64,
}

impl Marker {
    /// `(x-cx)^2/rx^2 + (y-cy)^2/ry^2 <= 1`, evaluated at the integer pixel coordinate.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let dx = f64::from(x) - self.cx;
        let dy = f64::from(y) - self.cy;
        (dx * dx) / (self.rx * self.rx) + (dy * dy) / (self.ry * self.ry) <= 1.0
    }
}

/// Geometry of the field bands (and optional markers) for a square icon.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldLayout {
    /// Bands from top to bottom.
    pub bands: Vec<FieldBand>,
    /// One marker per band, empty when markers are disabled.
    pub markers: Vec<Marker>,
}

impl FieldLayout {
    /// Lay out [`FIELD_COUNT`] bands of height `size/8`, `size/12` apart, centered vertically
    /// and spanning `[size/5, size - size/5)` horizontally.
    ///
    /// Sizes too small to give a band any height produce no bands.
    pub fn for_size(size: u32, with_markers: bool) -> Self {
        let padding = size / 5;
        let band_height = size / 8;
        let spacing = size / 12;
        if band_height == 0 {
            return Self {
                bands: Vec::new(),
                markers: Vec::new(),
            };
        }

        let total = FIELD_COUNT * band_height + (FIELD_COUNT - 1) * spacing;
        let start = (size - total) / 2;

        let bands: Vec<FieldBand> = (0..FIELD_COUNT)
            .map(|i| {
                let top = start + i * (band_height + spacing);
                FieldBand {
                    left: padding,
                    right: size - padding,
                    top,
                    bottom: top + band_height,
                }
            })
            .collect();

        let markers = if with_markers {
            let r = (size / 16).max(2);
            bands
                .iter()
                .map(|b| Marker {
                    cx: f64::from(padding + r),
                    cy: f64::from(b.top + band_height / 2),
                    rx: f64::from(r),
                    ry: f64::from(r),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self { bands, markers }
    }

    /// Whether `(x, y)` lies in any band.
    pub fn in_field(&self, x: u32, y: u32) -> bool {
        self.bands.iter().any(|b| b.contains(x, y))
    }

    /// Whether `(x, y)` lies in any marker.
    pub fn in_marker(&self, x: u32, y: u32) -> bool {
        self.markers.iter().any(|m| m.contains(x, y))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/layout.rs"]
mod tests;
