//! # cubetag
//!
//! An offline pipeline for generating textured cube assets used as
//! fiducial markers ("T-family" tags).
//!
//! The pipeline has three stages, each consuming only the previous stage's
//! files:
//!
//! 1. **Rasterize** a family of six tag images ([`tag`]).
//! 2. **Assemble** textured cube meshes: one OBJ/MTL pair per cube, six
//!    tag images per cube, plus one shared table of per-face pose
//!    transforms ([`cube`], [`io`]).
//! 3. **Convert** the meshes to binary GLB assets through an external 3D
//!    authoring tool ([`convert`]).
//!
//! ## Quick Start
//!
//! ```no_run
//! use cubetag::prelude::*;
//!
//! // Render the tag family.
//! let family = TagFamily::new(9).unwrap();
//! let family_dir = family.generate("tags").unwrap();
//!
//! // Assemble two textured cubes from it.
//! let report = assemble(&BatchOptions {
//!     side_length: 0.3,
//!     count: 2,
//!     family_dir,
//!     output_dir: "out".into(),
//! }).unwrap();
//! println!("Cubes: {}", report.cubes);
//! ```
//!
//! Batch runs are strictly sequential and own their output directory; a
//! run interrupted mid-batch leaves each already-written cube in a valid,
//! independently usable state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod cube;
pub mod error;
pub mod io;
pub mod tag;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use cubetag::prelude::*;
/// ```
pub mod prelude {
    pub use crate::convert::{convert_tree, AuthoringBackend, ConvertOptions, TextureFiltering};
    pub use crate::cube::{
        assemble, face_transforms, BatchOptions, BatchReport, CubeGeometry, FaceTransform,
        TagTexture, FACE_COUNT,
    };
    pub use crate::error::{CubeTagError, Result};
    pub use crate::tag::TagFamily;
}

// Re-export nalgebra types for convenience
pub use nalgebra;
