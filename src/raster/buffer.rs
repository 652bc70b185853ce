//! Source and destination image buffers.

use image::RgbaImage;
use thiserror::Error;

/// Bytes per pixel (RGBA).
pub const CHANNELS: usize = 4;

/// Errors raised when wrapping or allocating pixel buffers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    #[error("Invalid image dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),
    #[error("Pixel data length {actual} != expected {expected} for {width}x{height} RGBA")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("Failed to allocate {0} bytes for a destination image")]
    Allocation(usize),
}

fn rgba_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
}

/// Read-only view over an equirectangular RGBA source image.
#[derive(Debug, Clone, Copy)]
pub struct SourceImage<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> SourceImage<'a> {
    /// Wraps a row-major RGBA byte slice.
    ///
    /// Fails if either dimension is zero or `data` is not exactly
    /// `width * height * 4` bytes long.
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions(width, height));
        }
        let expected = rgba_len(width, height).ok_or(RasterError::InvalidDimensions(width, height))?;
        if data.len() != expected {
            return Err(RasterError::LengthMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Borrows a decoded `image` buffer.
    pub fn from_rgba_image(img: &'a RgbaImage) -> Result<Self, RasterError> {
        Self::new(img.width(), img.height(), img.as_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes in row-major order.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Byte offset of pixel `(x, y)`. Coordinates must already be in bounds.
    #[inline]
    pub fn pixel_offset(&self, x: usize, y: usize) -> usize {
        CHANNELS * (y * self.width as usize + x)
    }

    /// Returns the RGB triple at `(x, y)`.
    ///
    /// # Panics
    /// Panics if x or y is out of bounds.
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        debug_assert!(x < self.width && y < self.height);
        let i = self.pixel_offset(x as usize, y as usize);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

/// Owned square RGBA buffer holding one rendered cube face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl DestinationImage {
    /// Allocates a zeroed buffer, reporting allocation failure as an error
    /// instead of aborting.
    pub fn try_new(width: u32, height: u32) -> Result<Self, RasterError> {
        let len = rgba_len(width, height).ok_or(RasterError::InvalidDimensions(width, height))?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| RasterError::Allocation(len))?;
        data.resize(len, 0);
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Byte offset of pixel `(x, y)`.
    #[inline]
    pub fn pixel_offset(&self, x: u32, y: u32) -> usize {
        CHANNELS * (y as usize * self.width as usize + x as usize)
    }

    /// Raw RGBA bytes in row-major order.
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA bytes in row-major order.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the RGBA value at `(x, y)`.
    ///
    /// # Panics
    /// Panics if x or y is out of bounds.
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        debug_assert!(x < self.width && y < self.height);
        let i = self.pixel_offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Consumes the buffer and returns its raw bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Converts into an `image` buffer for encoding.
    pub fn into_rgba_image(self) -> RgbaImage {
        let (width, height) = (self.width, self.height);
        // Length is width * height * 4 by construction.
        RgbaImage::from_raw(width, height, self.data)
            .unwrap_or_else(|| RgbaImage::new(width, height))
    }
}
