//! PNG and JPEG export of rendered faces.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::ImageEncoder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::CubeFaceId;
use crate::render::{CubeRender, RenderError, RenderResult};

/// Errors that can occur during face export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Face {face} failed to render: {source}")]
    Render { face: CubeFaceId, source: RenderError },
}

/// Output file format for faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FaceFormat {
    /// Lossless 8-bit RGBA PNG.
    #[default]
    Png,
    /// 8-bit RGB JPEG (alpha is dropped).
    Jpeg,
}

impl FaceFormat {
    /// File extension without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            FaceFormat::Png => "png",
            FaceFormat::Jpeg => "jpg",
        }
    }
}

/// Options for face export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Output file format.
    pub format: FaceFormat,
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
    /// JPEG quality (1-100).
    pub jpeg_quality: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: FaceFormat::Png,
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
            jpeg_quality: 92,
        }
    }
}

impl ExportOptions {
    /// Default options for the given format.
    pub fn with_format(format: FaceFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }
}

/// Returns `{base_name}_{face}.{ext}`, e.g. `sky_px.png`.
pub fn face_file_name(base_name: &str, face: CubeFaceId, format: FaceFormat) -> String {
    format!("{}_{}.{}", base_name, face.short_name(), format.extension())
}

/// Writes a single rendered face to `path`.
pub fn export_face(result: &RenderResult, path: &Path, options: &ExportOptions) -> Result<(), ExportError> {
    let face_image = &result.image;
    let (width, height) = (face_image.width(), face_image.height());

    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    match options.format {
        FaceFormat::Png => {
            let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
            encoder.write_image(face_image.pixels(), width, height, image::ExtendedColorType::Rgba8)?;
        }
        FaceFormat::Jpeg => {
            // Alpha is 255 everywhere, so dropping it loses nothing.
            let rgb: Vec<u8> = face_image
                .pixels()
                .chunks_exact(4)
                .flat_map(|p| [p[0], p[1], p[2]])
                .collect();
            let encoder = JpegEncoder::new_with_quality(writer, options.jpeg_quality.clamp(1, 100));
            encoder.write_image(&rgb, width, height, image::ExtendedColorType::Rgb8)?;
        }
    }

    Ok(())
}

/// Exports every face of a cube render as individual files.
///
/// Files are named using the pattern `{base_name}_{face}.{ext}`.
///
/// # Returns
/// The written paths in face order, or the first error encountered
/// (including a face that failed to render).
pub fn export_cube(
    cube: &CubeRender,
    output_dir: &Path,
    base_name: &str,
    options: &ExportOptions,
) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(cube.faces.len());
    for (face, result) in &cube.faces {
        let result = result.as_ref().map_err(|e| ExportError::Render {
            face: *face,
            source: e.clone(),
        })?;
        let path = output_dir.join(face_file_name(base_name, *face, options.format));
        export_face(result, &path, options)?;
        written.push(path);
    }

    Ok(written)
}
