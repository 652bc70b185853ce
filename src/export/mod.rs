//! Export module for saving rendered cube faces.
//!
//! Faces are written as individual PNG or JPEG files, one per face.

mod face_image;

pub use face_image::{
    export_cube, export_face, face_file_name, ExportError, ExportOptions, FaceFormat,
};
