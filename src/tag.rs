//! T-family tag rasterizer.
//!
//! Renders the fixed palette of six square tag images: index 0 is a black
//! cross, indices 1..6 are colored by evenly spaced hues at fixed
//! saturation and brightness. Each tag is two diagonal strokes forming a
//! "T" shape; the second stroke starts one pixel lower on even side
//! lengths, so odd and even families are not pixel-identical.
//!
//! Output layout: `<output_dir>/tagT<side>/tagT_<side>_<i>.png`.

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

use crate::error::{CubeTagError, Result};

/// Number of tags in a family.
pub const TAGS_PER_FAMILY: usize = 6;

const SATURATION: f64 = 0.7;
const VALUE: f64 = 0.9;

/// A family of tag images at one side length.
#[derive(Debug, Clone)]
pub struct TagFamily {
    side_length: u32,
    name: String,
}

impl TagFamily {
    /// Create a family for the given image side length, in pixels.
    pub fn new(side_length: u32) -> Result<Self> {
        if side_length == 0 {
            return Err(CubeTagError::InvalidParameter {
                name: "side_length",
                value: side_length.to_string(),
                reason: "must be at least 1 pixel",
            });
        }
        Ok(TagFamily { side_length, name: format!("tagT_{}", side_length) })
    }

    /// Family name, embedded in every tag filename.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stroke color for a tag index: black for 0, evenly spaced hues after.
    fn color(&self, index: usize) -> Rgb<u8> {
        if index == 0 {
            Rgb([0, 0, 0])
        } else {
            let hue = (index - 1) as f64 / 5.0;
            Rgb(hsv_to_rgb(hue, SATURATION, VALUE))
        }
    }

    /// Render one tag image (index 0..6) on a white background.
    pub fn render(&self, index: usize) -> RgbImage {
        let side = self.side_length;
        let mut image = RgbImage::from_pixel(side, side, Rgb([255, 255, 255]));

        let color = self.color(index);
        let width = ((side / 10).max(1)) as f64;
        let s = side as f64;
        let mid = (side / 2) as f64;

        stroke(&mut image, (-1.0, -1.0), (s, s), width, color);
        if side % 2 == 1 {
            stroke(&mut image, (s, -1.0), (mid, mid), width, color);
        } else {
            stroke(&mut image, (s, 0.0), (mid, mid), width, color);
        }

        image
    }

    /// Render and save all six tags, creating `<output_dir>/tagT<side>/`.
    ///
    /// Returns the family directory, suitable as the assembler's
    /// `family_dir`.
    pub fn generate<P: AsRef<Path>>(&self, output_dir: P) -> Result<PathBuf> {
        let family_dir = output_dir.as_ref().join(format!("tagT{}", self.side_length));
        fs::create_dir_all(&family_dir)?;

        for i in 0..TAGS_PER_FAMILY {
            let image = self.render(i);
            image.save(family_dir.join(format!("{}_{}.png", self.name, i)))?;
        }

        Ok(family_dir)
    }
}

/// Draw a line stroke by coverage: every pixel within half the stroke width
/// of the segment is filled.
fn stroke(image: &mut RgbImage, a: (f64, f64), b: (f64, f64), width: f64, color: Rgb<u8>) {
    let half = width / 2.0;
    for y in 0..image.height() {
        for x in 0..image.width() {
            if segment_distance((x as f64, y as f64), a, b) <= half {
                image.put_pixel(x, y, color);
            }
        }
    }
}

fn segment_distance(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [u8; 3] {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
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

    #[test]
    fn test_generates_six_named_pngs() {
        let out = scratch_dir("tags-gen");
        let family = TagFamily::new(9).unwrap();
        let family_dir = family.generate(&out).unwrap();

        assert_eq!(family_dir, out.join("tagT9"));
        for i in 0..6 {
            assert!(family_dir.join(format!("tagT_9_{}.png", i)).exists());
        }
    }

    #[test]
    fn test_index_zero_is_black_on_white() {
        let family = TagFamily::new(9).unwrap();
        let image = family.render(0);

        // Center lies on both strokes; the far corner is background.
        assert_eq!(*image.get_pixel(4, 4), Rgb([0, 0, 0]));
        assert_eq!(*image.get_pixel(0, 8), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_colored_tags_use_distinct_hues() {
        let family = TagFamily::new(21).unwrap();
        let center = 10;
        let mut seen = Vec::new();
        for i in 1..6 {
            let px = *family.render(i).get_pixel(center, center);
            assert_ne!(px, Rgb([255, 255, 255]));
            assert_ne!(px, Rgb([0, 0, 0]));
            seen.push(px);
        }
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_even_side_length_renders() {
        let family = TagFamily::new(8).unwrap();
        let image = family.render(0);
        assert_eq!(image.dimensions(), (8, 8));
        // The second stroke's lower endpoint.
        assert_eq!(*image.get_pixel(4, 4), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_rejects_zero_side_length() {
        assert!(TagFamily::new(0).is_err());
    }
}
