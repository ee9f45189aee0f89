use crate::error::RenderError;
use crate::rendering::{decode_png, encode_png, optimize_png};
use bw_dither::{dither, Algorithm, PixelGrid};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Decode PNG bytes, dither them and encode the result as PNG.
pub fn render(png_bytes: &[u8], algorithm: Algorithm) -> Result<Vec<u8>, RenderError> {
    let grid = decode_png(png_bytes)?;
    encode_png(&dither_timed(&grid, algorithm))
}

/// Render `input` to `output` with a single algorithm.
///
/// Missing parent directories of `output` are created.
pub fn render_file(
    input: &Path,
    output: &Path,
    algorithm: Algorithm,
    optimize: bool,
) -> Result<(), RenderError> {
    let data = std::fs::read(input)?;
    let grid = decode_png(&data)?;
    tracing::info!(
        input = %input.display(),
        width = grid.width(),
        height = grid.height(),
        "Loaded image"
    );

    write_output(output, &dither_timed(&grid, algorithm), optimize)
}

/// Render `input` once per algorithm into `output_dir`.
///
/// Files are named `<stem>-<algorithm slug>.png`. Returns the written paths
/// in [`Algorithm::ALL`] order.
pub fn render_all(
    input: &Path,
    output_dir: &Path,
    stem: &str,
    optimize: bool,
) -> Result<Vec<PathBuf>, RenderError> {
    let grid = decode_png(&std::fs::read(input)?)?;
    tracing::info!(
        input = %input.display(),
        width = grid.width(),
        height = grid.height(),
        "Loaded image"
    );

    let mut written = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let path = output_path(output_dir, stem, algorithm);
        write_output(&path, &dither_timed(&grid, algorithm), optimize)?;
        written.push(path);
    }
    Ok(written)
}

/// Default output location: `<dir>/<stem>-<algorithm slug>.png`
pub fn output_path(dir: &Path, stem: &str, algorithm: Algorithm) -> PathBuf {
    dir.join(format!("{stem}-{}.png", algorithm.slug()))
}

fn dither_timed(grid: &PixelGrid, algorithm: Algorithm) -> PixelGrid {
    let start = Instant::now();
    let out = dither(grid, algorithm);
    tracing::info!(
        algorithm = %algorithm,
        width = grid.width(),
        height = grid.height(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Dithered image"
    );
    out
}

fn write_output(path: &Path, grid: &PixelGrid, optimize: bool) -> Result<(), RenderError> {
    let mut png_bytes = encode_png(grid)?;
    if optimize {
        png_bytes = optimize_png(png_bytes);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &png_bytes)?;
    tracing::info!(output = %path.display(), size = png_bytes.len(), "Wrote PNG");
    Ok(())
}
