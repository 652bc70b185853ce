//! Interpolation method names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing an unknown interpolation name strictly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown interpolation '{0}' (expected nearest, bilinear, bicubic or lanczos)")]
pub struct ParseInterpolationError(pub String);

/// Resampling filter used when reading the source panorama.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Copy the closest source pixel.
    Nearest,
    /// Blend the four surrounding pixels.
    Bilinear,
    /// 4x4 cubic convolution.
    Bicubic,
    /// 10x10 windowed sinc.
    #[default]
    Lanczos,
}

impl Interpolation {
    /// Returns all interpolation methods, cheapest first.
    pub const fn all() -> [Interpolation; 4] {
        [
            Interpolation::Nearest,
            Interpolation::Bilinear,
            Interpolation::Bicubic,
            Interpolation::Lanczos,
        ]
    }

    /// Returns the lower-case name of the method.
    pub const fn name(self) -> &'static str {
        match self {
            Interpolation::Nearest => "nearest",
            Interpolation::Bilinear => "bilinear",
            Interpolation::Bicubic => "bicubic",
            Interpolation::Lanczos => "lanczos",
        }
    }

    /// Resolves a method name, treating anything unrecognized as nearest.
    pub fn from_name_or_nearest(name: &str) -> Self {
        match name.parse() {
            Ok(interpolation) => interpolation,
            Err(_) => {
                log::debug!("unrecognized interpolation {:?}, using nearest", name);
                Interpolation::Nearest
            }
        }
    }
}

impl FromStr for Interpolation {
    type Err = ParseInterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interpolation::all()
            .into_iter()
            .find(|i| i.name() == s)
            .ok_or_else(|| ParseInterpolationError(s.to_string()))
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
