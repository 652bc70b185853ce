//! Cube map geometry.
//!
//! Provides the face enumeration, the per-face orientation table mapping
//! face-local coordinates to cube directions, and the spherical projection
//! of those directions into equirectangular source pixels.

mod face;
mod orientation;
mod projection;

pub use face::{Axis, CubeFaceId};
pub use orientation::{face_direction, pixel_to_face_coord};
pub use projection::{cube_to_panorama, wrap, SphericalProjector};
