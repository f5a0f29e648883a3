use crate::result::{RectboxError, RectboxResult};
use crate::types::{Color, Float, WHITE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Canvas configuration for the SVG backend, usually read from a RON file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgSettings {
    pub width: Float,
    pub height: Float,
    pub background_color: Color,
}

impl Default for SvgSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            background_color: WHITE,
        }
    }
}

impl SvgSettings {
    pub fn from_ron_str(source: &str) -> RectboxResult<Self> {
        Ok(ron::from_str(source)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> RectboxResult<Self> {
        let path = path.as_ref();
        crate::context!("load svg settings from '{}'", path.display() => {
            std::fs::read_to_string(path)
                .map_err(RectboxError::from)
                .and_then(|source| Self::from_ron_str(&source))
        })
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(error) => {
                warn!("Using default svg settings: {}", error);
                Self::default()
            }
        }
    }
}
