//! Test fixtures: synthetic input images and a scratch workspace.

use bw_dither::{PixelGrid, Rgba};
use ditherview::rendering::encode_png;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Horizontal color gradient with a translucent bottom half.
pub fn gradient(width: usize, height: usize) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        let alpha = if y < height / 2 { 255 } else { 128 };
        Rgba::new(
            (x * 255 / width.saturating_sub(1).max(1)) as u8,
            (y * 40 % 256) as u8,
            90,
            alpha,
        )
    })
}

/// Write `grid` as a PNG into `dir` and return its path.
pub fn write_png(dir: &Path, name: &str, grid: &PixelGrid) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode_png(grid).unwrap()).unwrap();
    path
}

/// Scratch directory holding one gradient input image.
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "gradient.png", &gradient(24, 10));
        Self { dir, input }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
