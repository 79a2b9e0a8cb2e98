use egui::{Color32, Rgba};

use crate::LifeGrid;

/// Outlines are skipped below this cell size, they would cover the fill.
const MIN_OUTLINED_CELL: usize = 3;

#[derive(Clone, Copy, Debug)]
pub struct Settings {
    /// Side of one cell in pixels.
    pub cell_size: usize,
    pub alive_rgba: Rgba,
    pub dead_rgba: Rgba,
    pub line_rgba: Option<Rgba>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size: 10,
            alive_rgba: Rgba::BLACK,
            dead_rgba: Rgba::WHITE,
            line_rgba: Some(Color32::LIGHT_GRAY.into()),
        }
    }
}

impl Settings {
    fn cell_size(&self) -> usize {
        self.cell_size.max(1)
    }

    /// `[width, height]` of the rendered image in pixels.
    pub fn image_size(&self, grid: &LifeGrid) -> [usize; 2] {
        let (width, height) = grid.dimensions();
        [width * self.cell_size(), height * self.cell_size()]
    }

    /// The cell under pixel `(px, py)`, or `None` if the pixel is off the
    /// board.
    pub fn cell_at(&self, grid: &LifeGrid, (px, py): (f32, f32)) -> Option<(isize, isize)> {
        if !(px.is_finite() && py.is_finite()) {
            return None;
        }
        let size = self.cell_size() as f32;
        let (x, y) = ((px / size).floor() as isize, (py / size).floor() as isize);
        grid.contains(x, y).then_some((x, y))
    }
}

impl LifeGrid {
    /// Rasterizes the board into row-major pixels of
    /// [`Settings::image_size`].
    pub fn render(&self, settings: Settings) -> Vec<Rgba> {
        let size = settings.cell_size();
        let [width, height] = settings.image_size(self);
        let line_rgba = settings.line_rgba.filter(|_| size >= MIN_OUTLINED_CELL);
        let mut pixels = Vec::with_capacity(width * height);
        for py in 0..height {
            for px in 0..width {
                let on_line = px % size == 0
                    || py % size == 0
                    || px + 1 == width
                    || py + 1 == height;
                let rgba = match line_rgba {
                    Some(line) if on_line => line,
                    _ if self.is_alive((px / size) as isize, (py / size) as isize) => {
                        settings.alive_rgba
                    }
                    _ => settings.dead_rgba,
                };
                pixels.push(rgba);
            }
        }
        pixels
    }
}
