//! Cube geometry tables.
//!
//! The cube is described in face-vertex form: 8 corner vertices centered at
//! the origin, 6 quad faces in canonical axis order, and a fixed
//! triangulation of each quad. All cubes share the same 4 texture-coordinate
//! corners; every face wraps the whole tag image.

use nalgebra::{Point2, Point3};

use crate::error::{CubeTagError, Result};

/// Number of faces on a cube, and therefore tag images consumed per cube.
pub const FACE_COUNT: usize = 6;

/// Quad faces as vertex indices, in canonical order +x, -x, +y, -y, +z, -z.
///
/// Winding is fixed; the face transforms in [`crate::cube::transforms`] were
/// verified against exactly this ordering.
pub const QUAD_FACES: [[usize; 4]; FACE_COUNT] = [
    [0, 1, 5, 4], // +x
    [2, 3, 7, 6], // -x
    [3, 0, 4, 7], // +y
    [1, 2, 6, 5], // -y
    [5, 6, 7, 4], // +z
    [0, 3, 2, 1], // -z
];

/// Texture-coordinate indices (1-based, OBJ convention) for the two
/// triangles of a quad: `FACE_VT_MAP[t][k]` is the `vt` index for vertex `k`
/// of triangle `t`. Both triangles reuse the same 4 corners so the full
/// image wraps each face.
pub const FACE_VT_MAP: [[usize; 3]; 2] = [[4, 1, 2], [2, 3, 4]];

/// The 4 shared texture-coordinate corners covering the full texture.
pub fn texture_corners() -> [Point2<f64>; 4] {
    [
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0, 1.0),
        Point2::new(1.0, 0.0),
    ]
}

/// Face-vertex geometry for one cube of a given edge length.
#[derive(Debug, Clone)]
pub struct CubeGeometry {
    half_side: f64,
    vertices: [Point3<f64>; 8],
    triangles: [[usize; 3]; FACE_COUNT * 2],
}

impl CubeGeometry {
    /// Build the geometry for a cube with the given edge length, centered
    /// at the origin.
    ///
    /// # Example
    /// ```
    /// use cubetag::cube::CubeGeometry;
    ///
    /// let cube = CubeGeometry::new(2.0).unwrap();
    /// assert_eq!(cube.vertices().len(), 8);
    /// assert_eq!(cube.triangles().len(), 12);
    /// ```
    pub fn new(side_length: f64) -> Result<Self> {
        if side_length.is_nan() || side_length <= 0.0 {
            return Err(CubeTagError::InvalidParameter {
                name: "side_length",
                value: side_length.to_string(),
                reason: "must be a positive number",
            });
        }

        let h = side_length / 2.0;
        let vertices = [
            Point3::new(h, h, -h),
            Point3::new(h, -h, -h),
            Point3::new(-h, -h, -h),
            Point3::new(-h, h, -h),
            Point3::new(h, h, h),
            Point3::new(h, -h, h),
            Point3::new(-h, -h, h),
            Point3::new(-h, h, h),
        ];

        // Each quad splits on the q0-q2 diagonal.
        let mut triangles = [[0usize; 3]; FACE_COUNT * 2];
        for (fi, quad) in QUAD_FACES.iter().enumerate() {
            triangles[2 * fi] = [quad[0], quad[1], quad[2]];
            triangles[2 * fi + 1] = [quad[2], quad[3], quad[0]];
        }

        Ok(CubeGeometry { half_side: h, vertices, triangles })
    }

    /// Half the edge length (distance from center to any face plane).
    pub fn half_side(&self) -> f64 {
        self.half_side
    }

    /// The 8 corner vertices.
    pub fn vertices(&self) -> &[Point3<f64>; 8] {
        &self.vertices
    }

    /// The 12 triangles (two per face, in face order).
    pub fn triangles(&self) -> &[[usize; 3]; FACE_COUNT * 2] {
        &self.triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_lie_on_cube_corners() {
        let cube = CubeGeometry::new(2.0).unwrap();
        for v in cube.vertices() {
            assert_eq!(v.x.abs(), 1.0);
            assert_eq!(v.y.abs(), 1.0);
            assert_eq!(v.z.abs(), 1.0);
        }
        assert_eq!(cube.half_side(), 1.0);
    }

    #[test]
    fn test_triangles_cover_each_quad() {
        let cube = CubeGeometry::new(0.3).unwrap();
        for (fi, quad) in QUAD_FACES.iter().enumerate() {
            let t0 = cube.triangles()[2 * fi];
            let t1 = cube.triangles()[2 * fi + 1];
            assert_eq!(t0, [quad[0], quad[1], quad[2]]);
            assert_eq!(t1, [quad[2], quad[3], quad[0]]);
            // The two triangles share the q0-q2 diagonal.
            assert_eq!(t0[0], t1[2]);
            assert_eq!(t0[2], t1[0]);
        }
    }

    #[test]
    fn test_indices_in_range() {
        let cube = CubeGeometry::new(1.0).unwrap();
        for tri in cube.triangles() {
            for &v in tri {
                assert!(v < cube.vertices().len());
            }
        }
        for tri_map in &FACE_VT_MAP {
            for &vt in tri_map {
                assert!((1..=texture_corners().len()).contains(&vt));
            }
        }
    }

    #[test]
    fn test_each_face_points_along_one_axis() {
        // Every quad's 4 vertices share one coordinate at +h or -h.
        let cube = CubeGeometry::new(2.0).unwrap();
        for quad in &QUAD_FACES {
            let pts: Vec<_> = quad.iter().map(|&i| cube.vertices()[i]).collect();
            let constant_axis = (0..3).filter(|&a| {
                pts.iter().all(|p| p[a] == pts[0][a])
            });
            assert_eq!(constant_axis.count(), 1);
        }
    }

    #[test]
    fn test_rejects_nonpositive_side() {
        assert!(CubeGeometry::new(0.0).is_err());
        assert!(CubeGeometry::new(-1.0).is_err());
        assert!(CubeGeometry::new(f64::NAN).is_err());
    }
}
