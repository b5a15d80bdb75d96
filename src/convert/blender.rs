//! Blender-backed mesh conversion.
//!
//! Blender cannot hold a scene open across processes, so a
//! [`BlenderScene`] accumulates the Python statements for one mesh and
//! [`export`] runs the tool once, in background batch mode, with the whole
//! script. One subprocess per mesh.
//!
//! [`export`]: AuthoringBackend::export

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::convert::{AuthoringBackend, TextureFiltering};
use crate::error::{CubeTagError, Result};

/// Backend driving a Blender executable in `-b` (background) mode.
#[derive(Debug, Clone)]
pub struct BlenderBackend {
    executable: PathBuf,
}

impl BlenderBackend {
    /// Create a backend for the given Blender executable (name or path).
    pub fn new<P: Into<PathBuf>>(executable: P) -> Self {
        BlenderBackend { executable: executable.into() }
    }
}

/// Pending per-mesh conversion script.
#[derive(Debug)]
pub struct BlenderScene {
    source: PathBuf,
    statements: Vec<String>,
}

impl BlenderScene {
    /// The accumulated Python script, as passed to `--python-expr`.
    pub fn script(&self) -> String {
        self.statements.join("\n")
    }
}

/// Quote a path as a Python string literal.
fn py_str(path: &Path) -> String {
    let escaped = path.to_string_lossy().replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}

impl AuthoringBackend for BlenderBackend {
    type Scene = BlenderScene;

    fn import(&self, obj_path: &Path) -> Result<BlenderScene> {
        let statements = vec![
            "import bpy".to_string(),
            "bpy.ops.wm.read_factory_settings(use_empty=True)".to_string(),
            format!("bpy.ops.import_scene.obj(filepath={})", py_str(obj_path)),
        ];
        Ok(BlenderScene { source: obj_path.to_path_buf(), statements })
    }

    fn set_texture_filtering(&self, scene: &mut BlenderScene, filtering: TextureFiltering) {
        let mode = match filtering {
            TextureFiltering::Nearest => "Closest",
            TextureFiltering::Linear => "Linear",
        };
        scene.statements.push(format!(
            "for mat in bpy.data.materials:\n\
             \x20   if mat.node_tree:\n\
             \x20       for node in mat.node_tree.nodes:\n\
             \x20           if node.type == 'TEX_IMAGE':\n\
             \x20               node.interpolation = '{}'",
            mode
        ));
    }

    fn recompute_normals(&self, scene: &mut BlenderScene) {
        scene.statements.push(
            "for obj in bpy.data.objects:\n\
             \x20   if obj.type == 'MESH':\n\
             \x20       bpy.context.view_layer.objects.active = obj\n\
             \x20       bpy.ops.object.mode_set(mode='EDIT')\n\
             \x20       bpy.ops.mesh.select_all(action='SELECT')\n\
             \x20       bpy.ops.mesh.normals_make_consistent(inside=False)\n\
             \x20       bpy.ops.object.mode_set(mode='OBJECT')"
                .to_string(),
        );
    }

    fn export(&self, mut scene: BlenderScene, out_path: &Path) -> Result<()> {
        scene.statements.push(format!(
            "bpy.ops.export_scene.gltf(filepath={}, export_format='GLB')",
            py_str(out_path)
        ));

        let output = Command::new(&self.executable)
            .arg("-b")
            .arg("--factory-startup")
            .arg("--python-exit-code")
            .arg("1")
            .arg("--python-expr")
            .arg(scene.script())
            .output()
            .map_err(|e| CubeTagError::ExportFailed {
                path: scene.source.clone(),
                message: format!("failed to run {}: {}", self.executable.display(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let message = if stderr.is_empty() {
                format!("tool exited with {}", output.status)
            } else {
                format!("tool exited with {}: {}", output.status, stderr)
            };
            return Err(CubeTagError::ExportFailed { path: scene.source, message });
        }

        Ok(())
    }
}
