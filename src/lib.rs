//! Equirectangular panorama to cube map conversion.
//!
//! This crate rasterizes the six square faces of a cube map from a single
//! equirectangular (360° longitude/latitude) source image. Each face pixel
//! is turned into a direction, projected onto the panorama and resampled
//! with one of four filters (nearest, bilinear, bicubic, Lanczos).

pub mod geometry;
pub mod raster;
pub mod resample;
pub mod render;
pub mod export;

pub use geometry::{CubeFaceId, SphericalProjector};
pub use raster::{DestinationImage, SourceImage};
pub use resample::{Interpolation, Resampler};
pub use render::{render_cube, render_face, render_face_isolated, CubeRender, RenderError, RenderRequest, RenderResult, RenderSettings};
pub use export::{export_cube, ExportOptions, FaceFormat};
