//! Render request and result types.

use crate::geometry::CubeFaceId;
use crate::raster::{DestinationImage, SourceImage};
use crate::resample::Interpolation;

use super::config::RenderSettings;

/// Everything needed to render one cube face.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    /// Equirectangular source panorama.
    pub source: SourceImage<'a>,
    /// Face to render.
    pub face: CubeFaceId,
    /// Longitude rotation in radians; any real value.
    pub rotation: f64,
    /// Resampling filter.
    pub interpolation: Interpolation,
    /// Optional cap on the face width.
    pub max_width: Option<u32>,
}

impl<'a> RenderRequest<'a> {
    /// Creates an uncapped, unrotated Lanczos request.
    pub fn new(source: SourceImage<'a>, face: CubeFaceId) -> Self {
        Self {
            source,
            face,
            rotation: 0.0,
            interpolation: Interpolation::default(),
            max_width: None,
        }
    }

    /// Creates a request for `face` from shared cube settings.
    pub fn from_settings(source: SourceImage<'a>, face: CubeFaceId, settings: &RenderSettings) -> Self {
        Self {
            source,
            face,
            rotation: settings.rotation_radians(),
            interpolation: settings.interpolation,
            max_width: settings.max_width,
        }
    }

    pub fn with_rotation(mut self, radians: f64) -> Self {
        self.rotation = radians;
        self
    }

    pub fn with_rotation_degrees(self, degrees: f64) -> Self {
        self.with_rotation(degrees.to_radians())
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

/// A rendered face handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    /// Which face was rendered.
    pub face: CubeFaceId,
    /// Square RGBA face image with opaque alpha.
    pub image: DestinationImage,
    /// True if the width cap reduced the face below its natural size.
    pub is_preview: bool,
}

/// Returns `(size, capped)` for a face cut from a source `source_width`
/// pixels wide.
///
/// The natural size is a quarter of the source width; `capped` is true only
/// when `max_width` is strictly smaller than that.
pub fn face_size(source_width: u32, max_width: Option<u32>) -> (u32, bool) {
    let natural = source_width / 4;
    match max_width {
        Some(cap) if cap < natural => (cap, true),
        _ => (natural, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_size() {
        assert_eq!(face_size(400, None), (100, false));
        assert_eq!(face_size(400, Some(50)), (50, true));
        assert_eq!(face_size(400, Some(500)), (100, false));
        assert_eq!(face_size(400, Some(100)), (100, false));
        assert_eq!(face_size(403, None), (100, false));
        assert_eq!(face_size(3, None), (0, false));
    }

    #[test]
    fn test_request_builders() {
        let data = vec![0u8; 8 * 4 * 4];
        let src = SourceImage::new(8, 4, &data).unwrap();
        let request = RenderRequest::new(src, CubeFaceId::NegY)
            .with_rotation_degrees(180.0)
            .with_interpolation(Interpolation::Bicubic)
            .with_max_width(1);
        assert_eq!(request.face, CubeFaceId::NegY);
        assert!((request.rotation - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(request.interpolation, Interpolation::Bicubic);
        assert_eq!(request.max_width, Some(1));

        let settings = RenderSettings::preview(0.0);
        let request = RenderRequest::from_settings(src, CubeFaceId::PosZ, &settings);
        assert_eq!(request.interpolation, Interpolation::Nearest);
        assert_eq!(request.max_width, settings.max_width);
    }
}
