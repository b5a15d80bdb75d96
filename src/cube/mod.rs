//! Cube data model and batch assembly.
//!
//! This module holds the core of the pipeline: the fixed cube geometry
//! tables, the tag-texture pool that assigns six images to each cube, the
//! hand-verified per-face pose transforms, and the batch driver that writes
//! everything out.
//!
//! # Overview
//!
//! ```no_run
//! use cubetag::cube::{assemble, BatchOptions};
//!
//! let report = assemble(&BatchOptions {
//!     side_length: 0.3,
//!     count: 2,
//!     family_dir: "tags/tagT9".into(),
//!     output_dir: "out".into(),
//! }).unwrap();
//! println!("wrote {} cubes to {}", report.cubes, report.batch_dir.display());
//! ```

mod batch;
pub mod geometry;
pub mod texture;
pub mod transforms;

pub use batch::{assemble, BatchOptions, BatchReport};
pub use geometry::{CubeGeometry, FACE_COUNT};
pub use texture::{list_tag_textures, TagTexture};
pub use transforms::{face_transforms, FaceTransform, FACE_ROTATIONS};
