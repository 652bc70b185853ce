//! Resampling strategies for reading the source panorama at fractional
//! pixel coordinates.
//!
//! The strategy set is closed, so [`Resampler`] is a plain enum dispatched
//! with a single `match` in the per-pixel loop.

mod bilinear;
mod interpolation;
mod kernel;
mod nearest;

pub use bilinear::BilinearSampler;
pub use interpolation::{Interpolation, ParseInterpolationError};
pub use kernel::{Kernel, KernelResampler};
pub use nearest::NearestSampler;

use crate::raster::SourceImage;

/// Clamps an integer-valued coordinate into `[0, max]`.
#[inline]
pub(crate) fn clamp_index(v: f64, max: usize) -> usize {
    if v <= 0.0 {
        0
    } else {
        (v as usize).min(max)
    }
}

/// Converts a filtered channel value to a byte, saturating at the ends.
#[inline]
pub(crate) fn to_channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

/// A resampling strategy bound to one source image.
///
/// Each render owns its own instance; kernel strategies carry scratch
/// buffers that are rewritten on every sample.
#[derive(Debug, Clone)]
pub enum Resampler<'a> {
    Nearest(NearestSampler<'a>),
    Bilinear(BilinearSampler<'a>),
    Kernel(KernelResampler<'a>),
}

impl<'a> Resampler<'a> {
    /// Builds the strategy for `interpolation` over `source`.
    pub fn new(interpolation: Interpolation, source: SourceImage<'a>) -> Self {
        match interpolation {
            Interpolation::Nearest => Resampler::Nearest(NearestSampler::new(source)),
            Interpolation::Bilinear => Resampler::Bilinear(BilinearSampler::new(source)),
            Interpolation::Bicubic => Resampler::Kernel(KernelResampler::new(source, Kernel::Bicubic)),
            Interpolation::Lanczos => Resampler::Kernel(KernelResampler::new(source, Kernel::Lanczos)),
        }
    }

    /// Returns the interpolation this resampler implements.
    pub fn interpolation(&self) -> Interpolation {
        match self {
            Resampler::Nearest(_) => Interpolation::Nearest,
            Resampler::Bilinear(_) => Interpolation::Bilinear,
            Resampler::Kernel(k) => match k.kernel() {
                Kernel::Bicubic => Interpolation::Bicubic,
                Kernel::Lanczos => Interpolation::Lanczos,
            },
        }
    }

    /// Samples the source at `(x_from, y_from)` and writes R, G and B to
    /// `dst[to..to + 3]`. Alpha is left untouched.
    #[inline]
    pub fn sample(&mut self, x_from: f64, y_from: f64, dst: &mut [u8], to: usize) {
        let rgb = match self {
            Resampler::Nearest(s) => s.sample(x_from, y_from),
            Resampler::Bilinear(s) => s.sample(x_from, y_from),
            Resampler::Kernel(s) => s.sample(x_from, y_from),
        };
        dst[to..to + 3].copy_from_slice(&rgb);
    }
}
