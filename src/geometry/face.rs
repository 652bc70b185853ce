//! Cube face identification and enumeration.

use serde::{Deserialize, Serialize};

/// Identifies one of the six square faces of a cube map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CubeFaceId {
    /// +X face (right)
    PosX = 0,
    /// -X face (left)
    NegX = 1,
    /// +Y face (top)
    PosY = 2,
    /// -Y face (bottom)
    NegY = 3,
    /// +Z face (front)
    PosZ = 4,
    /// -Z face (back)
    NegZ = 5,
}

/// Cube axis a face is perpendicular to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl CubeFaceId {
    /// Returns all six cube faces in order.
    pub const fn all() -> [CubeFaceId; 6] {
        [
            CubeFaceId::PosX,
            CubeFaceId::NegX,
            CubeFaceId::PosY,
            CubeFaceId::NegY,
            CubeFaceId::PosZ,
            CubeFaceId::NegZ,
        ]
    }

    /// Returns the face index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a face from an index (0-5).
    pub const fn from_index(index: usize) -> Option<CubeFaceId> {
        match index {
            0 => Some(CubeFaceId::PosX),
            1 => Some(CubeFaceId::NegX),
            2 => Some(CubeFaceId::PosY),
            3 => Some(CubeFaceId::NegY),
            4 => Some(CubeFaceId::PosZ),
            5 => Some(CubeFaceId::NegZ),
            _ => None,
        }
    }

    /// Returns the conventional file-name stem for the face (e.g., "px", "ny").
    pub const fn short_name(self) -> &'static str {
        match self {
            CubeFaceId::PosX => "px",
            CubeFaceId::NegX => "nx",
            CubeFaceId::PosY => "py",
            CubeFaceId::NegY => "ny",
            CubeFaceId::PosZ => "pz",
            CubeFaceId::NegZ => "nz",
        }
    }

    /// Parses a face name.
    ///
    /// Accepts the short names (`px`, `nz`, ...) as well as the long
    /// `posx`/`negz` spellings, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<CubeFaceId> {
        let name = name.trim().to_ascii_lowercase();
        CubeFaceId::all().into_iter().find(|face| {
            let short = face.short_name();
            let long = format!("{}{}", if face.sign() > 0.0 { "pos" } else { "neg" }, &short[1..]);
            name == short || name == long
        })
    }

    /// Returns the axis of the face's outward normal.
    pub const fn axis(self) -> Axis {
        match self {
            CubeFaceId::PosX | CubeFaceId::NegX => Axis::X,
            CubeFaceId::PosY | CubeFaceId::NegY => Axis::Y,
            CubeFaceId::PosZ | CubeFaceId::NegZ => Axis::Z,
        }
    }

    /// Returns the sign (+1 or -1) of the face's outward normal.
    pub const fn sign(self) -> f64 {
        match self {
            CubeFaceId::PosX | CubeFaceId::PosY | CubeFaceId::PosZ => 1.0,
            CubeFaceId::NegX | CubeFaceId::NegY | CubeFaceId::NegZ => -1.0,
        }
    }
}

impl std::fmt::Display for CubeFaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}
