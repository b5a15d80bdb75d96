//! Face-transform table emission.
//!
//! One CSV per batch, shared by every cube in it: a header row plus one row
//! per canonical face index giving the face's translation and rotation in
//! the cube's local frame.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::cube::transforms::FaceTransform;
use crate::error::Result;

/// Column order of the transform table.
pub const HEADER: &str = "face_id,trans_x,trans_y,trans_z,rot_w,rot_x,rot_y,rot_z";

/// Write the transform table to an arbitrary writer.
pub fn write<W: Write>(w: &mut W, transforms: &[FaceTransform]) -> io::Result<()> {
    writeln!(w, "{}", HEADER)?;
    for t in transforms {
        writeln!(
            w,
            "{},{},{},{},{},{},{},{}",
            t.face_id,
            t.translation.x,
            t.translation.y,
            t.translation.z,
            t.rotation.w,
            t.rotation.i,
            t.rotation.j,
            t.rotation.k,
        )?;
    }
    Ok(())
}

/// Save the transform table to a CSV file.
pub fn save<P: AsRef<Path>>(transforms: &[FaceTransform], path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, transforms)?;
    writer.flush()?;
    Ok(())
}
