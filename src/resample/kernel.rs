//! Separable convolution resampling with bicubic and Lanczos kernels.

use std::f64::consts::PI;

use super::{clamp_index, to_channel};
use crate::raster::SourceImage;

/// Cubic convolution parameter.
const BICUBIC_B: f64 = -0.5;
/// Lanczos window size (lobes per side).
const LANCZOS_WINDOW: usize = 5;

/// One-dimensional reconstruction kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    /// Piecewise cubic with `B = -0.5`, support of 2 pixels.
    Bicubic,
    /// Windowed sinc with a window of 5 pixels.
    Lanczos,
}

impl Kernel {
    /// Half-width of the kernel support in source pixels.
    pub const fn radius(self) -> usize {
        match self {
            Kernel::Bicubic => 2,
            Kernel::Lanczos => LANCZOS_WINDOW,
        }
    }

    /// Evaluates the kernel at signed distance `x`.
    #[inline]
    pub fn weight(self, x: f64) -> f64 {
        match self {
            Kernel::Bicubic => {
                let x = x.abs();
                let x2 = x * x;
                let x3 = x * x2;
                let b = BICUBIC_B;
                if x <= 1.0 {
                    (b + 2.0) * x3 - (b + 3.0) * x2 + 1.0
                } else if x <= 2.0 {
                    b * x3 - 5.0 * b * x2 + 8.0 * b * x - 4.0 * b
                } else {
                    0.0
                }
            }
            Kernel::Lanczos => {
                if x == 0.0 {
                    return 1.0;
                }
                let a = LANCZOS_WINDOW as f64;
                let xp = PI * x;
                a * xp.sin() * (xp / a).sin() / (xp * xp)
            }
        }
    }
}

/// Separable 2D resampler over a `2R x 2R` tap window.
///
/// Owns the per-axis weight buffers; they are recomputed on every sample
/// and only kept to avoid reallocating.
#[derive(Debug, Clone)]
pub struct KernelResampler<'a> {
    source: SourceImage<'a>,
    kernel: Kernel,
    radius: usize,
    x_max: usize,
    y_max: usize,
    x_weights: Vec<f64>,
    y_weights: Vec<f64>,
}

impl<'a> KernelResampler<'a> {
    pub fn new(source: SourceImage<'a>, kernel: Kernel) -> Self {
        let radius = kernel.radius();
        Self {
            source,
            kernel,
            radius,
            x_max: source.width() as usize - 1,
            y_max: source.height() as usize - 1,
            x_weights: vec![0.0; 2 * radius],
            y_weights: vec![0.0; 2 * radius],
        }
    }

    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    /// Normalized `(x, y)` weights computed by the most recent sample.
    pub fn weights(&self) -> (&[f64], &[f64]) {
        (&self.x_weights, &self.y_weights)
    }

    /// Fills both weight vectors for a sample at `(x_from, y_from)` and
    /// returns the window origin `(x_start, y_start)`.
    fn compute_weights(&mut self, x_from: f64, y_from: f64) -> (f64, f64) {
        let r = self.radius as f64;
        let x_start = x_from.floor() - r + 1.0;
        let y_start = y_from.floor() - r + 1.0;

        for (i, (wx, wy)) in self
            .x_weights
            .iter_mut()
            .zip(self.y_weights.iter_mut())
            .enumerate()
        {
            *wx = self.kernel.weight(x_from - (x_start + i as f64));
            *wy = self.kernel.weight(y_from - (y_start + i as f64));
        }

        normalize(&mut self.x_weights);
        normalize(&mut self.y_weights);
        (x_start, y_start)
    }

    pub fn sample(&mut self, x_from: f64, y_from: f64) -> [u8; 3] {
        let (x_start, y_start) = self.compute_weights(x_from, y_from);
        let data = self.source.data();

        let mut rgb = [0u8; 3];
        for (channel, out) in rgb.iter_mut().enumerate() {
            let mut q = 0.0;
            for (i, &wy) in self.y_weights.iter().enumerate() {
                let y = clamp_index(y_start + i as f64, self.y_max);
                let mut p = 0.0;
                for (j, &wx) in self.x_weights.iter().enumerate() {
                    let x = clamp_index(x_start + j as f64, self.x_max);
                    p += data[self.source.pixel_offset(x, y) + channel] as f64 * wx;
                }
                q += p * wy;
            }
            *out = to_channel(q.round());
        }
        rgb
    }
}

/// Scales `weights` so they sum to one.
fn normalize(weights: &mut [f64]) {
    let sum: f64 = weights.iter().sum();
    for w in weights.iter_mut() {
        *w /= sum;
    }
}
