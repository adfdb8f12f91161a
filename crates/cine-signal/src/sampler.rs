//! Fixed-grid sampling over a pixel buffer.
//!
//! All metric extraction reads a fixed-size normalized grid rather than
//! every pixel, so the same semantic image produces near-identical
//! signals at any resolution and every computation stays bounded by the
//! sample count.

use cine_models::PixelBuffer;

/// Sampled RGB + luminance values laid out on a `cols x rows` grid.
///
/// Grid positions map to pixel centers proportionally: grid cell `(c, r)`
/// reads the pixel at `((c + 0.5) / cols * width, (r + 0.5) / rows * height)`.
#[derive(Debug, Clone)]
pub struct SampleField {
    pub cols: usize,
    pub rows: usize,
    /// Per-cell RGB, row-major
    pub rgb: Vec<[f64; 3]>,
    /// Per-cell Rec.601 luminance (0-255), row-major
    pub luma: Vec<f64>,
}

impl SampleField {
    /// Sample `buffer` on a `grid_size x grid_size` grid.
    ///
    /// Returns `None` for zero-dimension buffers; callers map that to the
    /// documented neutral snapshot.
    pub fn collect(buffer: &PixelBuffer, grid_size: usize) -> Option<Self> {
        if buffer.is_empty() || grid_size == 0 {
            return None;
        }

        let cols = grid_size;
        let rows = grid_size;
        let mut rgb = Vec::with_capacity(cols * rows);
        let mut luma = Vec::with_capacity(cols * rows);

        for r in 0..rows {
            let y = grid_to_pixel(r, rows, buffer.height());
            for c in 0..cols {
                let x = grid_to_pixel(c, cols, buffer.width());
                let [pr, pg, pb, _] = buffer.pixel(x, y);
                let (pr, pg, pb) = (pr as f64, pg as f64, pb as f64);
                rgb.push([pr, pg, pb]);
                luma.push(0.299 * pr + 0.587 * pg + 0.114 * pb);
            }
        }

        Some(Self {
            cols,
            rows,
            rgb,
            luma,
        })
    }

    /// Number of grid cells.
    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Luminance at grid cell `(col, row)`.
    pub fn luma_at(&self, col: usize, row: usize) -> f64 {
        self.luma[row * self.cols + col]
    }

    /// Mean luminance over all cells.
    pub fn mean_luma(&self) -> f64 {
        self.luma.iter().sum::<f64>() / self.len() as f64
    }
}

/// Map a grid index to the pixel holding that cell's center.
fn grid_to_pixel(index: usize, cells: usize, dim: u32) -> u32 {
    let pos = (index as f64 + 0.5) / cells as f64 * dim as f64;
    (pos as u32).min(dim.saturating_sub(1))
}
