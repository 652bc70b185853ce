//! Nearest-neighbour sampling.

use super::clamp_index;
use crate::raster::SourceImage;

/// Copies the source pixel closest to the sample point.
#[derive(Debug, Clone, Copy)]
pub struct NearestSampler<'a> {
    source: SourceImage<'a>,
    x_max: usize,
    y_max: usize,
}

impl<'a> NearestSampler<'a> {
    pub fn new(source: SourceImage<'a>) -> Self {
        Self {
            source,
            x_max: source.width() as usize - 1,
            y_max: source.height() as usize - 1,
        }
    }

    /// Rounds half up on each axis, then clamps to the image.
    #[inline]
    pub fn sample(&self, x_from: f64, y_from: f64) -> [u8; 3] {
        let x = clamp_index((x_from + 0.5).floor(), self.x_max);
        let y = clamp_index((y_from + 0.5).floor(), self.y_max);
        let i = self.source.pixel_offset(x, y);
        let data = self.source.data();
        [data[i], data[i + 1], data[i + 2]]
    }
}
