use std::time::{Duration, Instant};

use crate::{Cell, GridError, LifeGrid, Playback};

/// Owns a grid and its playback and routes user actions to them.
pub struct Controller {
    grid: LifeGrid,
    playback: Playback,
}

impl Controller {
    pub fn new(grid: LifeGrid, interval: Duration) -> Self {
        Self {
            grid,
            playback: Playback::new(interval),
        }
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    pub fn is_running(&self) -> bool {
        self.playback.is_running()
    }

    pub fn start(&mut self, now: Instant) {
        self.playback.start(now);
    }

    pub fn stop(&mut self) {
        self.playback.stop();
    }

    pub fn toggle(&mut self, x: isize, y: isize) -> Result<Cell, GridError> {
        self.grid.toggle(x, y)
    }

    /// Advances one generation if one is due. Returns whether it did.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self.playback.due(now);
        if due {
            self.grid.step();
        }
        due
    }

    /// Stops playback and clears the board.
    pub fn reset(&mut self) {
        self.playback.stop();
        self.grid.reset();
    }

    pub fn time_to_next_step(&self, now: Instant) -> Option<Duration> {
        self.playback.time_to_next_step(now)
    }
}
