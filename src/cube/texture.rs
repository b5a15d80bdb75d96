//! Tag texture pool.
//!
//! Tag images are identified by the integer suffix embedded in their
//! filename (`tagT_9_12.png` has index 12). The pool makes that identity
//! explicit: each entry pairs the parsed index with the source path, and
//! the pool is sorted numerically so `..._10` never sorts before `..._2`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CubeTagError, Result};

/// One tag image available for assignment to a cube face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTexture {
    /// Index parsed from the filename's numeric suffix.
    pub index: u32,
    /// Filename (no directory), preserved verbatim when copying.
    pub file_name: String,
    /// Full path to the source image.
    pub path: PathBuf,
}

/// Parse the integer after the last `_` in a file stem.
fn parse_index(stem: &str) -> Option<u32> {
    stem.rsplit('_').next()?.parse().ok()
}

/// Whether a filename follows the tag-image naming convention.
fn is_tag_image(name: &str) -> bool {
    name.starts_with("tag") && name.ends_with(".png")
}

/// List the tag images in a family directory, sorted by numeric index.
///
/// Files not matching the `tag*.png` convention are ignored. A matching
/// file whose stem does not end in `_<number>` is an error, since it
/// would otherwise silently perturb the face assignment order.
///
/// Ties on index (possible across families sharing a directory) are broken
/// by filename, keeping the ordering stable.
pub fn list_tag_textures(family_dir: &Path) -> Result<Vec<TagTexture>> {
    let mut textures = Vec::new();

    for entry in fs::read_dir(family_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !is_tag_image(&file_name) {
            continue;
        }
        let stem = file_name.trim_end_matches(".png");
        let index = parse_index(stem).ok_or_else(|| CubeTagError::BadTextureName {
            name: file_name.clone(),
        })?;
        textures.push(TagTexture { index, file_name, path: entry.path() });
    }

    textures.sort_by(|a, b| (a.index, &a.file_name).cmp(&(b.index, &b.file_name)));
    Ok(textures)
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

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"png").unwrap();
    }

    #[test]
    fn test_numeric_sort_order() {
        let dir = scratch_dir("texture-sort");
        for name in ["tagT_9_10.png", "tagT_9_2.png", "tagT_9_0.png", "tagT_9_1.png"] {
            touch(&dir, name);
        }

        let pool = list_tag_textures(&dir).unwrap();
        let names: Vec<_> = pool.iter().map(|t| t.file_name.as_str()).collect();
        assert_eq!(names, ["tagT_9_0.png", "tagT_9_1.png", "tagT_9_2.png", "tagT_9_10.png"]);
        assert_eq!(pool[3].index, 10);
    }

    #[test]
    fn test_ignores_unrelated_files() {
        let dir = scratch_dir("texture-filter");
        touch(&dir, "tagT_9_0.png");
        touch(&dir, "readme.txt");
        touch(&dir, "notes_3.png"); // no `tag` prefix
        touch(&dir, "tagT_9_1.jpg"); // wrong extension

        let pool = list_tag_textures(&dir).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].index, 0);
    }

    #[test]
    fn test_rejects_missing_index_suffix() {
        let dir = scratch_dir("texture-badname");
        touch(&dir, "tagT_nine.png");

        match list_tag_textures(&dir) {
            Err(crate::error::CubeTagError::BadTextureName { name }) => {
                assert_eq!(name, "tagT_nine.png");
            }
            other => panic!("expected BadTextureName, got {:?}", other),
        }
    }
}
