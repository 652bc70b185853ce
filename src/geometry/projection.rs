//! Spherical projection from cube directions into equirectangular pixel space.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

/// Wraps `v` into `[0, n)` for any real `v`, including negative values.
#[inline]
pub fn wrap(v: f64, n: f64) -> f64 {
    let w = ((v % n) + n) % n;
    // A tiny negative remainder plus `n` can round up to exactly `n`.
    if w >= n {
        0.0
    } else {
        w
    }
}

/// Converts a cube-map-frame direction (Y up) into the panorama frame (Z up).
///
/// Longitude zero of the panorama lies along `-Z` of the cube map and
/// longitude grows towards `-X`.
#[inline]
pub fn cube_to_panorama(dir: DVec3) -> DVec3 {
    DVec3::new(-dir.z, -dir.x, dir.y)
}

/// Projects directions onto fractional pixel coordinates of an
/// equirectangular source image.
#[derive(Debug, Clone, Copy)]
pub struct SphericalProjector {
    rotation: f64,
    lon_factor: f64,
    lat_factor: f64,
}

impl SphericalProjector {
    /// Creates a projector for a source of the given size.
    ///
    /// `rotation` is a longitude offset in radians; any real value is valid.
    pub fn new(source_width: u32, source_height: u32, rotation: f64) -> Self {
        Self {
            rotation,
            lon_factor: source_width as f64 / TAU,
            lat_factor: source_height as f64 / PI,
        }
    }

    /// Returns `(longitude, latitude)` of a cube-map-frame direction.
    ///
    /// Longitude is in `[0, 2π)` after rotation, latitude in `[0, π]`
    /// measured from the zenith.
    #[inline]
    pub fn lon_lat(&self, dir: DVec3) -> (f64, f64) {
        let p = cube_to_panorama(dir);
        let r = p.length();
        let lon = wrap(p.y.atan2(p.x) + self.rotation, TAU);
        let lat = (p.z / r).acos();
        (lon, lat)
    }

    /// Returns the fractional source coordinate `(x_from, y_from)` sampled
    /// by a cube-map-frame direction.
    ///
    /// The result is not clamped; it may fall slightly outside the image near
    /// the poles and the longitude seam.
    #[inline]
    pub fn project(&self, dir: DVec3) -> (f64, f64) {
        let (lon, lat) = self.lon_lat(dir);
        (lon * self.lon_factor - 0.5, lat * self.lat_factor - 0.5)
    }
}
