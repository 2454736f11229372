use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::error::{FormiconError, FormiconResult},
    render::pipeline::IconRequest,
    synth::style::IconStyle,
};

/// An icon set description, usually loaded from JSON.
///
/// ```json
/// { "sizes": [16, 48, 128], "alpha": true, "style": { "markers": true } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconSetConfig {
    /// Edge lengths to render.
    pub sizes: Vec<i64>,
    /// Emit RGBA instead of RGB.
    pub alpha: bool,
    /// Palette and decorations.
    pub style: IconStyle,
}

impl Default for IconSetConfig {
    fn default() -> Self {
        Self {
            sizes: vec![16, 48, 128],
            alpha: false,
            style: IconStyle::default(),
        }
    }
}

impl IconSetConfig {
    /// Parse a config from a JSON string.
    pub fn from_json_str(s: &str) -> FormiconResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| FormiconError::validation(format!("invalid icon set config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> FormiconResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            FormiconError::validation(format!("invalid icon set config '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject empty or non-positive size lists.
    pub fn validate(&self) -> FormiconResult<()> {
        if self.sizes.is_empty() {
            return Err(FormiconError::validation("config lists no sizes"));
        }
        if let Some(bad) = self.sizes.iter().find(|&&s| s <= 0) {
            return Err(FormiconError::invalid_dimensions(format!(
                "config size must be positive, got {bad}"
            )));
        }
        Ok(())
    }

    /// One request per configured size, in order.
    pub fn requests(&self) -> Vec<IconRequest> {
        self.sizes
            .iter()
            .map(|&size| IconRequest {
                size,
                has_alpha: self.alpha,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
