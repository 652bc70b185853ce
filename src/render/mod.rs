//! Face rendering.
//!
//! Each face render is a pure function of its request: it borrows the
//! source panorama, allocates its own destination buffer and keeps no state
//! afterwards. [`render_cube`] runs the six renders in parallel.

mod config;
mod cube;
mod face;
mod request;

pub use config::{ConfigError, RenderSettings};
pub use cube::{render_cube, CubeRender};
pub use face::{render_face, render_face_isolated, RenderError};
pub use request::{face_size, RenderRequest, RenderResult};
