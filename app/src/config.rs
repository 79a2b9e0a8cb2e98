use std::time::Duration;

use life::{playback, render};

#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub interval: Duration,
    pub render: render::Settings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 60,
            height: 40,
            interval: playback::DEFAULT_INTERVAL,
            render: render::Settings::default(),
        }
    }
}

impl Config {
    /// Inner window size in points: the board plus room for the controls.
    pub fn window_size(&self) -> [f32; 2] {
        let cell = self.render.cell_size as f32;
        [
            self.width as f32 * cell + 16.,
            self.height as f32 * cell + 56.,
        ]
    }
}
