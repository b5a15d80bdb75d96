//! Batch conversion of assembled meshes into binary assets.
//!
//! The authoring tool sits behind the narrow [`AuthoringBackend`] trait, so
//! the driver here knows nothing about any specific 3D package: it finds
//! the meshes, runs import → filtering → (optional) normals → export per
//! mesh, and keeps going when a single mesh fails. See
//! [`blender::BlenderBackend`] for the stock backend.

pub mod blender;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CubeTagError, Result};

/// Image-texture sampling mode applied to every texture node of a scene.
///
/// Tag edges must stay crisp when magnified, hence [`Nearest`] during
/// conversion.
///
/// [`Nearest`]: TextureFiltering::Nearest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFiltering {
    /// Nearest-neighbor sampling; preserves hard pixel edges.
    Nearest,
    /// Linear interpolation.
    Linear,
}

/// A 3D authoring tool's import/export surface, reduced to what the
/// conversion pipeline needs.
pub trait AuthoringBackend {
    /// Handle to one imported mesh scene.
    type Scene;

    /// Reset to an empty scene and import a mesh file into it.
    fn import(&self, obj_path: &Path) -> Result<Self::Scene>;

    /// Force every image-texture node in the scene to the given filtering.
    fn set_texture_filtering(&self, scene: &mut Self::Scene, filtering: TextureFiltering);

    /// Recompute outward-facing normals for every mesh object in the scene.
    fn recompute_normals(&self, scene: &mut Self::Scene);

    /// Export the scene as a binary asset.
    fn export(&self, scene: Self::Scene, out_path: &Path) -> Result<()>;
}

/// Conversion settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Recompute outward normals on each imported mesh before export.
    pub recompute_normals: bool,
    /// After converting, delete intermediate `.obj`/`.mtl`/`.png` files,
    /// leaving only the binary assets (and anything else, e.g. the
    /// transform table).
    pub cleanup: bool,
}

/// Outcome of a conversion run.
#[derive(Debug, Default)]
pub struct ConvertReport {
    /// Binary assets written, one per successfully converted mesh.
    pub converted: Vec<PathBuf>,
    /// Meshes that failed, with the error that stopped each one.
    pub failures: Vec<(PathBuf, CubeTagError)>,
    /// Intermediate files deleted by cleanup.
    pub cleaned: usize,
}

/// Find every mesh one directory level below `root` (`*/*.obj`), sorted.
pub fn find_meshes(root: &Path) -> Result<Vec<PathBuf>> {
    let mut meshes = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        for file in fs::read_dir(entry.path())? {
            let path = file?.path();
            if path.extension().is_some_and(|e| e == "obj") {
                meshes.push(path);
            }
        }
    }
    meshes.sort();
    Ok(meshes)
}

fn convert_one<B: AuthoringBackend>(
    backend: &B,
    options: &ConvertOptions,
    obj_path: &Path,
) -> Result<PathBuf> {
    let mut scene = backend.import(obj_path)?;
    backend.set_texture_filtering(&mut scene, TextureFiltering::Nearest);
    if options.recompute_normals {
        backend.recompute_normals(&mut scene);
    }
    let out_path = obj_path.with_extension("glb");
    backend.export(scene, &out_path)?;
    Ok(out_path)
}

fn cleanup_intermediates(root: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        for file in fs::read_dir(entry.path())? {
            let path = file?.path();
            let intermediate = path
                .extension()
                .is_some_and(|e| e == "obj" || e == "mtl" || e == "png");
            if intermediate {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }
    }
    Ok(removed)
}

/// Convert every mesh under `root` to a binary asset written alongside it.
///
/// A failing mesh is recorded in the report and the run continues with the
/// next mesh; only filesystem errors walking the tree abort the whole run.
pub fn convert_tree<B: AuthoringBackend>(
    root: &Path,
    backend: &B,
    options: &ConvertOptions,
) -> Result<ConvertReport> {
    let mut report = ConvertReport::default();

    for obj_path in find_meshes(root)? {
        match convert_one(backend, options, &obj_path) {
            Ok(out_path) => report.converted.push(out_path),
            Err(e) => report.failures.push((obj_path, e)),
        }
    }

    if options.cleanup {
        report.cleaned = cleanup_intermediates(root)?;
    }

    Ok(report)
}
