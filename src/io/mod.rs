//! Output-format writers.
//!
//! This module emits the plain-text artifacts of a batch:
//!
//! | Format | Extension | Contents |
//! |--------|-----------|----------|
//! | Wavefront OBJ | `.obj` | vertices, texture coordinates, textured faces |
//! | Wavefront MTL | `.mtl` | one material per cube face |
//! | CSV | `.csv` | shared per-face pose transforms |
//!
//! Each writer comes in two forms: a `write` function targeting any
//! [`std::io::Write`] sink, and a `save` function targeting a path.

pub mod csv;
pub mod obj;
