//! Bilinear sampling.

use super::{clamp_index, to_channel};
use crate::raster::SourceImage;

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Blends the four pixels surrounding the sample point.
///
/// Blended values are rounded up, not to nearest. Face seams produced by
/// existing tools depend on this, so it is kept.
#[derive(Debug, Clone, Copy)]
pub struct BilinearSampler<'a> {
    source: SourceImage<'a>,
    x_max: usize,
    y_max: usize,
}

impl<'a> BilinearSampler<'a> {
    pub fn new(source: SourceImage<'a>) -> Self {
        Self {
            source,
            x_max: source.width() as usize - 1,
            y_max: source.height() as usize - 1,
        }
    }

    #[inline]
    pub fn sample(&self, x_from: f64, y_from: f64) -> [u8; 3] {
        let x_floor = x_from.floor();
        let y_floor = y_from.floor();
        let xf = x_from - x_floor;
        let yf = y_from - y_floor;

        let xl = clamp_index(x_floor, self.x_max);
        let xr = clamp_index(x_from.ceil(), self.x_max);
        let yl = clamp_index(y_floor, self.y_max);
        let yr = clamp_index(y_from.ceil(), self.y_max);

        let p00 = self.source.pixel_offset(xl, yl);
        let p10 = self.source.pixel_offset(xr, yl);
        let p01 = self.source.pixel_offset(xl, yr);
        let p11 = self.source.pixel_offset(xr, yr);
        let data = self.source.data();

        let mut rgb = [0u8; 3];
        for (channel, out) in rgb.iter_mut().enumerate() {
            let top = lerp(data[p00 + channel] as f64, data[p10 + channel] as f64, xf);
            let bottom = lerp(data[p01 + channel] as f64, data[p11 + channel] as f64, xf);
            *out = to_channel(lerp(top, bottom, yf).ceil());
        }
        rgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_pixels(a: u8, b: u8) -> Vec<u8> {
        vec![a, a, a, 255, b, b, b, 255]
    }

    #[test]
    fn test_midpoint_blend() {
        let data = two_pixels(0, 100);
        let src = SourceImage::new(2, 1, &data).unwrap();
        let sampler = BilinearSampler::new(src);
        assert_eq!(sampler.sample(0.5, 0.0), [50, 50, 50]);
    }

    #[test]
    fn test_blends_round_up() {
        let data = two_pixels(0, 10);
        let src = SourceImage::new(2, 1, &data).unwrap();
        let sampler = BilinearSampler::new(src);
        // 3.3 would round to 3; the bilinear path yields 4.
        assert_eq!(sampler.sample(0.33, 0.0), [4, 4, 4]);
        // 0.1 rounds up to 1.
        assert_eq!(sampler.sample(0.01, 0.0), [1, 1, 1]);

        let data = two_pixels(0, 100);
        let src = SourceImage::new(2, 1, &data).unwrap();
        let sampler = BilinearSampler::new(src);
        assert_eq!(sampler.sample(0.501, 0.0), [51, 51, 51]);
    }

    #[test]
    fn test_vertical_blend() {
        let data = vec![200, 0, 0, 255, 100, 50, 0, 255];
        let src = SourceImage::new(1, 2, &data).unwrap();
        let sampler = BilinearSampler::new(src);
        assert_eq!(sampler.sample(0.0, 0.5), [150, 25, 0]);
        assert_eq!(sampler.sample(0.0, 0.0), [200, 0, 0]);
        assert_eq!(sampler.sample(0.0, 1.0), [100, 50, 0]);
    }

    #[test]
    fn test_edges_replicate() {
        let data = two_pixels(30, 60);
        let src = SourceImage::new(2, 1, &data).unwrap();
        let sampler = BilinearSampler::new(src);
        assert_eq!(sampler.sample(-0.4, -0.4), [30, 30, 30]);
        assert_eq!(sampler.sample(1.7, 0.2), [60, 60, 60]);
    }
}
