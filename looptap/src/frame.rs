use std::path::Path;

use crate::types::{Pixel, Size};

/// A source of screen rasters.
pub trait GameFrame {
    /// Captures the next raster. Must be called once per processed frame
    /// before any sampling.
    fn next(&mut self);

    /// Pixel at `(x, y)`. Coordinates outside the raster are clamped, so
    /// one-past-last reads at `x == width` or `y == height` are valid.
    fn pixel(&self, x: i32, y: i32) -> Pixel;

    fn size(&self) -> Size;

    /// Best-effort diagnostic dump. Failures are logged, never returned.
    fn save_png(&self, path: &Path);
}

/// Synthetic input sink. All actions are fire-and-forget.
pub trait GameControls {
    /// One momentary press of the activate key.
    fn fire(&mut self);

    fn move_pointer(&mut self, x: i32, y: i32);

    fn click(&mut self, x: i32, y: i32);

    /// Moves the pointer to `(x, y)` and gives input focus to whatever is
    /// under it.
    fn focus(&mut self, x: i32, y: i32);
}
