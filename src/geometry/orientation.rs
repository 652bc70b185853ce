//! Face orientation table: face-local plane coordinates to cube directions.

use glam::DVec3;

use super::face::CubeFaceId;

/// Converts a face-local coordinate to a direction vector on the unit cube.
///
/// `x` grows to the right and `y` grows downward (image row order), both in
/// `[-1, 1]`. The result lives in the cube-map frame (Y up): the component
/// along the face's own axis is fixed to the face's sign, so the dominant
/// axis of the vector always matches the face.
///
/// # Arguments
/// * `face` - The cube face being rasterized
/// * `x` - Horizontal face coordinate in [-1, 1]
/// * `y` - Vertical face coordinate in [-1, 1]
///
/// # Returns
/// A point on the surface of the unit cube
#[inline]
pub fn face_direction(face: CubeFaceId, x: f64, y: f64) -> DVec3 {
    match face {
        CubeFaceId::PosX => DVec3::new(1.0, -y, -x),
        CubeFaceId::NegX => DVec3::new(-1.0, -y, x),
        CubeFaceId::PosY => DVec3::new(x, 1.0, y),
        CubeFaceId::NegY => DVec3::new(x, -1.0, -y),
        CubeFaceId::PosZ => DVec3::new(x, -y, 1.0),
        CubeFaceId::NegZ => DVec3::new(-x, -y, -1.0),
    }
}

/// Maps a destination pixel index to its face-local coordinate in `(-1, 1)`.
///
/// Samples the pixel center: pixel `i` of `size` covers `[i, i + 1)`.
#[inline]
pub fn pixel_to_face_coord(i: u32, size: u32) -> f64 {
    (2.0 / size as f64) * (i as f64 + 0.5) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::face::Axis;

    fn dominant(v: DVec3) -> (Axis, f64) {
        let a = v.abs();
        if a.x >= a.y && a.x >= a.z {
            (Axis::X, v.x.signum())
        } else if a.y >= a.z {
            (Axis::Y, v.y.signum())
        } else {
            (Axis::Z, v.z.signum())
        }
    }

    #[test]
    fn test_face_direction_centers() {
        let test_cases = [
            (CubeFaceId::PosX, DVec3::X),
            (CubeFaceId::NegX, DVec3::NEG_X),
            (CubeFaceId::PosY, DVec3::Y),
            (CubeFaceId::NegY, DVec3::NEG_Y),
            (CubeFaceId::PosZ, DVec3::Z),
            (CubeFaceId::NegZ, DVec3::NEG_Z),
        ];

        for (face, expected) in test_cases {
            let dir = face_direction(face, 0.0, 0.0);
            assert!(
                (dir - expected).length() < 1e-12,
                "Face {:?} center: expected {:?}, got {:?}",
                face,
                expected,
                dir
            );
        }
    }

    #[test]
    fn test_dominant_axis_matches_face() {
        let samples = [-0.999, -0.5, 0.0, 0.25, 0.999];
        for face in CubeFaceId::all() {
            for &x in &samples {
                for &y in &samples {
                    let (axis, sign) = dominant(face_direction(face, x, y));
                    assert_eq!(axis, face.axis(), "{:?} at ({}, {})", face, x, y);
                    assert_eq!(sign, face.sign(), "{:?} at ({}, {})", face, x, y);
                }
            }
        }
    }

    #[test]
    fn test_adjacent_faces_share_edges() {
        // Right edge of +Z meets the left edge of +X.
        for &y in &[-0.75, 0.0, 0.5] {
            let a = face_direction(CubeFaceId::PosZ, 1.0, y);
            let b = face_direction(CubeFaceId::PosX, -1.0, y);
            assert!((a - b).length() < 1e-12);
        }
        // Top edge of +Z meets the bottom edge of +Y.
        for &x in &[-0.75, 0.0, 0.5] {
            let a = face_direction(CubeFaceId::PosZ, x, -1.0);
            let b = face_direction(CubeFaceId::PosY, x, 1.0);
            assert!((a - b).length() < 1e-12);
        }
    }

    #[test]
    fn test_pixel_to_face_coord() {
        assert!((pixel_to_face_coord(0, 2) + 0.5).abs() < 1e-12);
        assert!((pixel_to_face_coord(1, 2) - 0.5).abs() < 1e-12);
        assert!(pixel_to_face_coord(0, 1).abs() < 1e-12);
        let last = pixel_to_face_coord(99, 100);
        assert!(last < 1.0 && last > 0.98);
    }
}
