//! RGBA pixel buffers exchanged with the rasterizer.
//!
//! The source panorama is borrowed for the duration of a render; every
//! rendered face owns a freshly allocated destination buffer.

mod buffer;
mod load;

pub use buffer::{DestinationImage, RasterError, SourceImage, CHANNELS};
pub use load::load_equirect;
