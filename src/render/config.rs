//! Configuration for face rendering.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resample::Interpolation;

/// Width cap used for the quick preview pass.
pub const PREVIEW_MAX_WIDTH: u32 = 200;

/// Errors that can occur while loading render settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parameters shared by every face of one cube render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Longitude rotation applied to the panorama, in degrees.
    pub rotation_degrees: f64,
    /// Resampling filter.
    pub interpolation: Interpolation,
    /// Upper bound on the face width. `None` renders at the natural size
    /// (a quarter of the source width).
    pub max_width: Option<u32>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            rotation_degrees: 0.0,
            interpolation: Interpolation::Lanczos,
            max_width: None,
        }
    }
}

impl RenderSettings {
    /// Fast, capped settings for a first look at the faces.
    pub fn preview(rotation_degrees: f64) -> Self {
        Self {
            rotation_degrees,
            interpolation: Interpolation::Nearest,
            max_width: Some(PREVIEW_MAX_WIDTH),
        }
    }

    /// Full-resolution settings with the given filter.
    pub fn final_quality(rotation_degrees: f64, interpolation: Interpolation) -> Self {
        Self {
            rotation_degrees,
            interpolation,
            max_width: None,
        }
    }

    /// Rotation in radians.
    pub fn rotation_radians(&self) -> f64 {
        self.rotation_degrees.to_radians()
    }

    /// Reads settings from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Serializes the settings as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
