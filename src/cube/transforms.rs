//! Per-face pose transforms.
//!
//! Each cube face has a fixed pose relative to the cube's local frame: a
//! translation of `half_side` along the outward normal (expressed
//! face-locally as `(0, 0, -half_side)`) and one of six fixed rotations.
//!
//! The rotations were found by hand and verified against the face winding
//! in [`crate::cube::geometry`]; treat them as given constants and do not
//! re-derive them.

use nalgebra::{Quaternion, Vector3};

use crate::cube::geometry::FACE_COUNT;

/// The six face rotations as `(x, y, z, w)` quaternion components, keyed by
/// canonical face index (+x, -x, +y, -y, +z, -z).
pub const FACE_ROTATIONS: [[f64; 4]; FACE_COUNT] = [
    [-0.5, -0.5, -0.5, 0.5],
    [-0.5, 0.5, 0.5, 0.5],
    [0.0, -0.70710678, -0.70710678, 0.0],
    [-0.70710678, 0.0, 0.0, 0.70710678],
    [0.0, 0.0, 0.0, 1.0],
    [-1.0, 0.0, 0.0, 0.0],
];

/// Pose of one cube face in the cube's local frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceTransform {
    /// Canonical face index, 0..6.
    pub face_id: usize,
    /// Face-local offset along the outward normal.
    pub translation: Vector3<f64>,
    /// Rotation mapping the face's local frame into the cube frame.
    pub rotation: Quaternion<f64>,
}

/// The shared transform table for a cube of the given edge length.
///
/// Rotations are identical for every side length; only the translation's
/// z component scales, as `-side_length / 2`.
pub fn face_transforms(side_length: f64) -> [FaceTransform; FACE_COUNT] {
    let half = side_length / 2.0;
    std::array::from_fn(|face_id| {
        let [x, y, z, w] = FACE_ROTATIONS[face_id];
        FaceTransform {
            face_id,
            translation: Vector3::new(0.0, 0.0, -half),
            rotation: Quaternion::new(w, x, y, z),
        }
    })
}
