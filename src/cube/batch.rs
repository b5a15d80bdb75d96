//! Batch assembly of textured cubes.
//!
//! A batch turns a family of pre-rendered tag images into `count` textured
//! cube meshes plus one shared face-transform table, all written into a
//! fresh `cube_<family>_<side_length>` directory. Cube `i` claims textures
//! `[6i, 6i + 6)` from the numerically sorted pool, so the pool size is
//! checked up front: either the whole batch is feasible or nothing is
//! written.
//!
//! Writes are not transactional across the batch. An interrupted run leaves
//! the already-written cubes behind, each self-contained and usable.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cube::geometry::{CubeGeometry, FACE_COUNT};
use crate::cube::texture::list_tag_textures;
use crate::cube::transforms::face_transforms;
use crate::error::{CubeTagError, Result};
use crate::io::{csv, obj};

/// Parameters for one assembly batch.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Cube edge length, in whatever unit downstream consumers use.
    pub side_length: f64,
    /// Number of cubes to assemble.
    pub count: usize,
    /// Directory holding the pre-rendered tag images.
    pub family_dir: PathBuf,
    /// Directory under which the batch directory is created.
    pub output_dir: PathBuf,
}

/// Summary of a completed batch.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// The created `cube_<family>_<side_length>` directory.
    pub batch_dir: PathBuf,
    /// Number of cubes written.
    pub cubes: usize,
    /// Number of tag images copied into the batch directory.
    pub textures_copied: usize,
}

/// Final path component of the family directory, used in output names.
fn family_name(dir: &Path) -> String {
    dir.components()
        .next_back()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .unwrap_or_else(|| "family".to_string())
}

/// Assemble a batch of textured cubes.
///
/// Emits, under `<output_dir>/cube_<family>_<side_length>/`:
/// - one `.obj`/`.mtl` pair per cube, named `cube_<family>_<side>_<i>`;
/// - a copy of the consumed tag images, filenames preserved;
/// - one `cube_<family>_<side>.csv` transform table shared by all cubes.
///
/// Fails with [`CubeTagError::InsufficientTextures`] before creating the
/// batch directory if the pool holds fewer than `6 * count` tag images.
pub fn assemble(options: &BatchOptions) -> Result<BatchReport> {
    if options.count == 0 {
        return Err(CubeTagError::InvalidParameter {
            name: "count",
            value: options.count.to_string(),
            reason: "must be at least 1",
        });
    }
    let cube = CubeGeometry::new(options.side_length)?;

    let pool = list_tag_textures(&options.family_dir)?;
    let needed = FACE_COUNT * options.count;
    if pool.len() < needed {
        return Err(CubeTagError::InsufficientTextures { needed, found: pool.len() });
    }

    let batch_name = format!("cube_{}_{}", family_name(&options.family_dir), options.side_length);
    let batch_dir = options.output_dir.join(&batch_name);
    fs::create_dir_all(&batch_dir)?;

    // Meshes reference textures by bare filename, so the consumed slice of
    // the pool travels with the batch.
    for texture in &pool[..needed] {
        fs::copy(&texture.path, batch_dir.join(&texture.file_name))?;
    }

    for i in 0..options.count {
        let slice = &pool[FACE_COUNT * i..FACE_COUNT * (i + 1)];
        let cube_name = format!("{}_{}", batch_name, i);
        let mtl_name = format!("{}.mtl", cube_name);

        let texture_names: Vec<&str> = slice.iter().map(|t| t.file_name.as_str()).collect();
        obj::save_mtl(&texture_names, batch_dir.join(&mtl_name))?;
        obj::save(&cube, &mtl_name, batch_dir.join(format!("{}.obj", cube_name)))?;
    }

    let table = face_transforms(options.side_length);
    csv::save(&table, batch_dir.join(format!("{}.csv", batch_name)))?;

    Ok(BatchReport { batch_dir, cubes: options.count, textures_copied: needed })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cubetag-{}-{}", tag, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).unwrap();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Family dir populated with `n` placeholder tag images.
    fn family_with(tag: &str, n: usize) -> PathBuf {
        let dir = scratch_dir(tag).join("tagT2");
        fs::create_dir_all(&dir).unwrap();
        for i in 0..n {
            fs::write(dir.join(format!("tagT_2_{}.png", i)), b"png").unwrap();
        }
        dir
    }

    fn options(family_dir: PathBuf, count: usize) -> BatchOptions {
        let output_dir = family_dir.parent().unwrap().join("out");
        BatchOptions { side_length: 2.0, count, family_dir, output_dir }
    }

    #[test]
    fn test_single_cube_end_to_end() {
        let opts = options(family_with("batch-single", 6), 1);
        let report = assemble(&opts).unwrap();

        assert_eq!(report.cubes, 1);
        assert_eq!(report.textures_copied, 6);
        assert_eq!(report.batch_dir, opts.output_dir.join("cube_tagT2_2"));

        let obj = fs::read_to_string(report.batch_dir.join("cube_tagT2_2_0.obj")).unwrap();
        assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 8);
        assert_eq!(obj.lines().filter(|l| l.starts_with("vt ")).count(), 4);
        assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 12);
        assert_eq!(obj.lines().filter(|l| l.starts_with("usemtl ")).count(), 6);
        assert!(obj.contains("mtllib cube_tagT2_2_0.mtl"));

        let mtl = fs::read_to_string(report.batch_dir.join("cube_tagT2_2_0.mtl")).unwrap();
        for i in 0..6 {
            assert!(mtl.contains(&format!("map_Kd tagT_2_{}.png", i)));
        }

        let table = fs::read_to_string(report.batch_dir.join("cube_tagT2_2.csv")).unwrap();
        assert_eq!(table.lines().count(), 7);
        assert!(table.lines().nth(5).unwrap().starts_with("4,0,0,-1,1,0,0,0"));

        // Consumed textures travel with the batch.
        for i in 0..6 {
            assert!(report.batch_dir.join(format!("tagT_2_{}.png", i)).exists());
        }
    }

    #[test]
    fn test_each_cube_claims_its_slice() {
        let opts = options(family_with("batch-slices", 12), 2);
        let report = assemble(&opts).unwrap();
        assert_eq!(report.cubes, 2);

        let mtl0 = fs::read_to_string(report.batch_dir.join("cube_tagT2_2_0.mtl")).unwrap();
        let mtl1 = fs::read_to_string(report.batch_dir.join("cube_tagT2_2_1.mtl")).unwrap();
        assert!(mtl0.contains("map_Kd tagT_2_5.png"));
        assert!(!mtl0.contains("map_Kd tagT_2_6.png"));
        // Numeric ordering: cube 1 gets 6..=11, including the two-digit ones.
        for i in 6..12 {
            assert!(mtl1.contains(&format!("map_Kd tagT_2_{}.png", i)));
        }

        // Exactly one shared transform table for the whole batch.
        let csvs = fs::read_dir(&report.batch_dir)
            .unwrap()
            .filter(|e| {
                e.as_ref().unwrap().path().extension().is_some_and(|x| x == "csv")
            })
            .count();
        assert_eq!(csvs, 1);
    }

    #[test]
    fn test_undersized_pool_writes_nothing() {
        let opts = options(family_with("batch-undersized", 5), 1);
        match assemble(&opts) {
            Err(CubeTagError::InsufficientTextures { needed, found }) => {
                assert_eq!(needed, 6);
                assert_eq!(found, 5);
            }
            other => panic!("expected InsufficientTextures, got {:?}", other),
        }
        // The check runs before the batch directory is created.
        assert!(!opts.output_dir.join("cube_tagT2_2").exists());
    }

    #[test]
    fn test_rejects_degenerate_parameters() {
        let family = family_with("batch-params", 6);
        assert!(assemble(&options(family.clone(), 0)).is_err());

        let mut opts = options(family, 1);
        opts.side_length = -2.0;
        assert!(assemble(&opts).is_err());
    }
}
