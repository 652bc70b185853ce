//! Loading equirectangular sources through the `image` codecs.

use std::path::Path;

use image::RgbaImage;

/// Decodes an image file into 8-bit RGBA, whatever its stored format.
pub fn load_equirect(path: &Path) -> Result<RgbaImage, image::ImageError> {
    let img = image::open(path)?;
    log::debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_rgba8())
}
