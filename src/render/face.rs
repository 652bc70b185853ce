//! Per-face rasterization loop.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use crate::geometry::{face_direction, pixel_to_face_coord, SphericalProjector};
use crate::raster::{DestinationImage, RasterError, CHANNELS};
use crate::resample::Resampler;

use super::request::{face_size, RenderRequest, RenderResult};

/// Errors reported by a face render. No partial output accompanies them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Source image {source_width}px wide is too narrow for a cube face")]
    EmptyFace { source_width: u32 },
    #[error("Destination buffer error: {0}")]
    Raster(#[from] RasterError),
    #[error("Render panicked: {0}")]
    Panicked(String),
}

/// Renders one cube face from an equirectangular source.
///
/// Every destination pixel gets opaque alpha and an RGB value resampled
/// from the source at the projection of its direction.
pub fn render_face(request: &RenderRequest<'_>) -> Result<RenderResult, RenderError> {
    let source = request.source;
    let (size, is_preview) = face_size(source.width(), request.max_width);
    if size == 0 {
        return Err(RenderError::EmptyFace {
            source_width: source.width(),
        });
    }

    log::debug!(
        "rendering face {} at {}x{} ({}, rotation {:.4} rad{})",
        request.face,
        size,
        size,
        request.interpolation,
        request.rotation,
        if is_preview { ", preview" } else { "" }
    );

    let mut image = DestinationImage::try_new(size, size)?;
    let mut resampler = Resampler::new(request.interpolation, source);
    let projector = SphericalProjector::new(source.width(), source.height(), request.rotation);
    let row_len = size as usize * CHANNELS;

    for (y, row) in image.pixels_mut().chunks_exact_mut(row_len).enumerate() {
        let fy = pixel_to_face_coord(y as u32, size);
        for x in 0..size {
            let to = x as usize * CHANNELS;
            row[to + 3] = 255;

            let dir = face_direction(request.face, pixel_to_face_coord(x, size), fy);
            let (x_from, y_from) = projector.project(dir);
            resampler.sample(x_from, y_from, row, to);
        }
    }

    log::trace!("face {} done", request.face);

    Ok(RenderResult {
        face: request.face,
        image,
        is_preview,
    })
}

/// Renders a face behind an unwind boundary.
///
/// A panic inside the render is converted into [`RenderError::Panicked`]
/// instead of propagating to the caller.
pub fn render_face_isolated(request: &RenderRequest<'_>) -> Result<RenderResult, RenderError> {
    panic::catch_unwind(AssertUnwindSafe(|| render_face(request)))
        .unwrap_or_else(|payload| Err(RenderError::Panicked(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CubeFaceId;
    use crate::raster::SourceImage;
    use crate::resample::test_util::{pattern, uniform};
    use crate::resample::Interpolation;

    #[test]
    fn test_output_sizes() {
        let data = uniform(400, 200, [10, 20, 30]);
        let src = SourceImage::new(400, 200, &data).unwrap();
        let request = RenderRequest::new(src, CubeFaceId::PosZ).with_interpolation(Interpolation::Nearest);

        let full = render_face(&request).unwrap();
        assert_eq!((full.image.width(), full.image.height()), (100, 100));
        assert_eq!(full.image.pixels().len(), 100 * 100 * 4);
        assert!(!full.is_preview);

        let capped = render_face(&request.with_max_width(50)).unwrap();
        assert_eq!((capped.image.width(), capped.image.height()), (50, 50));
        assert!(capped.is_preview);

        let loose = render_face(&request.with_max_width(500)).unwrap();
        assert_eq!((loose.image.width(), loose.image.height()), (100, 100));
        assert!(!loose.is_preview);
    }

    #[test]
    fn test_uniform_source_renders_uniform_faces() {
        let data = uniform(64, 32, [128, 128, 128]);
        let src = SourceImage::new(64, 32, &data).unwrap();
        for face in CubeFaceId::all() {
            for interpolation in Interpolation::all() {
                for rotation in [0.0, 1.3, -7.9] {
                    let request = RenderRequest::new(src, face)
                        .with_interpolation(interpolation)
                        .with_rotation(rotation);
                    let result = render_face(&request).unwrap();
                    assert!(
                        result.image.pixels().chunks_exact(4).all(|p| p == [128, 128, 128, 255]),
                        "{:?} {:?} rotation {}",
                        face,
                        interpolation,
                        rotation
                    );
                }
            }
        }
    }

    #[test]
    fn test_alpha_is_opaque() {
        let data = pattern(40, 20);
        let src = SourceImage::new(40, 20, &data).unwrap();
        for interpolation in Interpolation::all() {
            let request = RenderRequest::new(src, CubeFaceId::NegX).with_interpolation(interpolation);
            let result = render_face(&request).unwrap();
            assert!(result.image.pixels().chunks_exact(4).all(|p| p[3] == 255));
        }
    }

    #[test]
    fn test_face_center_samples_expected_source_region() {
        // Four vertical bands, one per quarter of the longitude range.
        let (w, h) = (64u32, 32u32);
        let mut data = Vec::new();
        for _ in 0..h {
            for x in 0..w {
                let q = x * 4 / w;
                let rgb = match q {
                    0 => [255, 0, 0],
                    1 => [0, 255, 0],
                    2 => [0, 0, 255],
                    _ => [255, 255, 0],
                };
                data.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
            }
        }
        let src = SourceImage::new(w, h, &data).unwrap();
        let center_of = |face| {
            let request = RenderRequest::new(src, face).with_interpolation(Interpolation::Nearest);
            let result = render_face(&request).unwrap();
            let c = result.image.width() / 2;
            result.image.rgba(c, c)
        };
        // Longitude grows from -Z (0) through -X, +Z, +X.
        assert_eq!(center_of(CubeFaceId::NegX)[..3], [0, 255, 0]);
        assert_eq!(center_of(CubeFaceId::PosZ)[..3], [0, 0, 255]);
        assert_eq!(center_of(CubeFaceId::PosX)[..3], [255, 255, 0]);
    }

    #[test]
    fn test_unknown_interpolation_matches_nearest() {
        let data = pattern(80, 40);
        let src = SourceImage::new(80, 40, &data).unwrap();
        for face in CubeFaceId::all() {
            let explicit = render_face(
                &RenderRequest::new(src, face)
                    .with_rotation(0.4)
                    .with_interpolation(Interpolation::Nearest),
            )
            .unwrap();
            let fallback = render_face(
                &RenderRequest::new(src, face)
                    .with_rotation(0.4)
                    .with_interpolation(Interpolation::from_name_or_nearest("linear")),
            )
            .unwrap();
            assert_eq!(explicit.image.pixels(), fallback.image.pixels());
        }
    }

    #[test]
    fn test_narrow_source_is_an_error() {
        let data = uniform(3, 2, [1, 2, 3]);
        let src = SourceImage::new(3, 2, &data).unwrap();
        let err = render_face(&RenderRequest::new(src, CubeFaceId::PosX)).unwrap_err();
        assert_eq!(err, RenderError::EmptyFace { source_width: 3 });

        let data = uniform(8, 4, [1, 2, 3]);
        let src = SourceImage::new(8, 4, &data).unwrap();
        let err = render_face_isolated(&RenderRequest::new(src, CubeFaceId::PosX).with_max_width(0));
        assert!(matches!(err, Err(RenderError::EmptyFace { .. })));
    }

    #[test]
    fn test_rotation_by_full_turn_is_identity() {
        let data = pattern(48, 24);
        let src = SourceImage::new(48, 24, &data).unwrap();
        let base = render_face(&RenderRequest::new(src, CubeFaceId::PosX).with_interpolation(Interpolation::Nearest))
            .unwrap();
        let turned = render_face(
            &RenderRequest::new(src, CubeFaceId::PosX)
                .with_interpolation(Interpolation::Nearest)
                .with_rotation_degrees(360.0),
        )
        .unwrap();
        let differing = base
            .image
            .pixels()
            .iter()
            .zip(turned.image.pixels())
            .filter(|(a, b)| a != b)
            .count();
        // Floating-point wrap may move a rare sample across a rounding boundary.
        assert!(differing <= base.image.pixels().len() / 100);
    }

    #[test]
    fn test_panic_message() {
        let payload = panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload = panic::catch_unwind(|| panic!("{} {}", "formatted", 7)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "formatted 7");
    }
}
