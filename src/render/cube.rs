//! Parallel rendering of all six faces.

use rayon::prelude::*;

use crate::geometry::CubeFaceId;
use crate::raster::SourceImage;

use super::config::RenderSettings;
use super::face::{render_face_isolated, RenderError};
use super::request::{RenderRequest, RenderResult};

/// Outcome of rendering every face of a cube map.
///
/// Faces fail independently; one failed face does not discard the others.
#[derive(Debug)]
pub struct CubeRender {
    /// One entry per face, in [`CubeFaceId::all`] order.
    pub faces: Vec<(CubeFaceId, Result<RenderResult, RenderError>)>,
}

impl CubeRender {
    /// Returns the outcome for a specific face.
    pub fn face(&self, id: CubeFaceId) -> Option<&Result<RenderResult, RenderError>> {
        self.faces.iter().find(|(face, _)| *face == id).map(|(_, r)| r)
    }

    /// Returns true if every face rendered successfully.
    pub fn is_complete(&self) -> bool {
        self.faces.iter().all(|(_, r)| r.is_ok())
    }

    /// Iterates over the failed faces.
    pub fn errors(&self) -> impl Iterator<Item = (CubeFaceId, &RenderError)> + '_ {
        self.faces
            .iter()
            .filter_map(|(face, r)| r.as_ref().err().map(|e| (*face, e)))
    }
}

/// Renders all six faces of `source` in parallel, one task per face.
///
/// Tasks share only the read-only source; each owns its resampler and
/// destination buffer.
pub fn render_cube(source: SourceImage<'_>, settings: &RenderSettings) -> CubeRender {
    let faces = CubeFaceId::all()
        .to_vec()
        .into_par_iter()
        .map(|face| {
            let request = RenderRequest::from_settings(source, face, settings);
            let result = render_face_isolated(&request);
            if let Err(e) = &result {
                log::warn!("face {} failed: {}", face, e);
            }
            (face, result)
        })
        .collect();

    CubeRender { faces }
}
