//! Wavefront OBJ and MTL emission.
//!
//! Each cube becomes one OBJ/MTL pair. The OBJ lists the 8 vertices and 4
//! shared texture corners once, then emits the 6 faces as `usemtl` +
//! 2 triangle statements each. OBJ indices are 1-based; the `+1` applied
//! here is the only place the internal 0-based arrays cross that boundary.
//!
//! The MTL defines one material per face with fixed paper-like lighting
//! parameters; only the referenced texture varies.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::cube::geometry::{texture_corners, CubeGeometry, FACE_COUNT, FACE_VT_MAP};
use crate::error::Result;

/// Write a cube mesh in OBJ format to an arbitrary writer.
///
/// `mtl_file_name` is referenced verbatim in the `mtllib` statement, so it
/// should be the sibling material file's bare name, not a path.
pub fn write<W: Write>(w: &mut W, cube: &CubeGeometry, mtl_file_name: &str) -> io::Result<()> {
    writeln!(w, "# Generated by cubetag")?;
    writeln!(w, "# Vertices: {}", cube.vertices().len())?;
    writeln!(w, "# Faces: {}", cube.triangles().len())?;
    writeln!(w)?;
    writeln!(w, "mtllib {}", mtl_file_name)?;
    writeln!(w)?;

    for v in cube.vertices() {
        writeln!(w, "v {} {} {}", v.x, v.y, v.z)?;
    }
    writeln!(w)?;

    for vt in texture_corners() {
        writeln!(w, "vt {} {}", vt.x, vt.y)?;
    }
    writeln!(w)?;

    for face in 0..FACE_COUNT {
        writeln!(w, "usemtl material_{}", face)?;
        for (tri, vt_map) in FACE_VT_MAP.iter().enumerate() {
            let triangle = cube.triangles()[2 * face + tri];
            write!(w, "f")?;
            for (k, &v) in triangle.iter().enumerate() {
                // OBJ indices are 1-based.
                write!(w, " {}/{}", v + 1, vt_map[k])?;
            }
            writeln!(w)?;
        }
        writeln!(w)?;
    }

    Ok(())
}

/// Save a cube mesh to an OBJ file.
///
/// # Example
/// ```no_run
/// use cubetag::cube::CubeGeometry;
/// use cubetag::io::obj;
///
/// let cube = CubeGeometry::new(0.3).unwrap();
/// obj::save(&cube, "cube_0.mtl", "cube_0.obj").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(cube: &CubeGeometry, mtl_file_name: &str, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, cube, mtl_file_name)?;
    writer.flush()?;
    Ok(())
}

/// Write material definitions for one cube's six faces.
///
/// Materials are named `material_0..material_5` in face order. The lighting
/// parameters model matte paper; only `map_Kd` varies per material.
pub fn write_mtl<W: Write>(w: &mut W, texture_file_names: &[&str]) -> io::Result<()> {
    for (i, texture) in texture_file_names.iter().enumerate() {
        writeln!(w, "newmtl material_{}", i)?;
        writeln!(w, "Ka 0.8 0.8 0.8")?;
        writeln!(w, "Kd 1.0 1.0 1.0")?;
        writeln!(w, "Ks 0.0 0.0 0.0")?;
        writeln!(w, "Tr 1.0")?;
        writeln!(w, "illum 2")?;
        writeln!(w, "Ns 0.0")?;
        writeln!(w, "map_Kd {}", texture)?;
        writeln!(w)?;
    }
    Ok(())
}

/// Save material definitions to an MTL file.
pub fn save_mtl<P: AsRef<Path>>(texture_file_names: &[&str], path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_mtl(&mut writer, texture_file_names)?;
    writer.flush()?;
    Ok(())
}
