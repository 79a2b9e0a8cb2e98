pub mod controller;
mod error;
mod pattern;
pub mod playback;
pub mod render;

#[cfg(test)]
mod tests;

use std::mem;

use itertools::Itertools;

pub use crate::{controller::Controller, error::GridError, playback::Playback};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }

    /// Survival on 2 or 3 live neighbours, birth on exactly 3.
    fn next(self, neighbours: usize) -> Self {
        match (self, neighbours) {
            (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// A bounded Game of Life board.
///
/// Cells live in a flat row-major buffer. Stepping writes the next
/// generation into a second buffer of the same size and swaps the two, so a
/// generation is always computed from a consistent snapshot. Anything
/// outside the board counts as dead; the edges do not wrap.
#[derive(Clone, Debug)]
pub struct LifeGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    next: Vec<Cell>,
    generation: u64,
}

impl LifeGrid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions { width, height };
        let len = match width.checked_mul(height) {
            Some(len) if len > 0 => len,
            _ => return Err(invalid),
        };
        let (Some(cells), Some(next)) = (dead_cells(len), dead_cells(len)) else {
            return Err(invalid);
        };
        Ok(Self {
            width,
            height,
            cells,
            next,
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of calls to [`step`](Self::step) since creation or the last
    /// reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn contains(&self, x: isize, y: isize) -> bool {
        self.index(x, y).is_some()
    }

    pub fn cell_state(&self, x: isize, y: isize) -> Result<Cell, GridError> {
        self.index(x, y)
            .map(|i| self.cells[i])
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Like [`cell_state`](Self::cell_state), but anything off the board is
    /// simply dead.
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i].is_alive())
    }

    pub fn set(&mut self, x: isize, y: isize, cell: Cell) -> Result<(), GridError> {
        let i = self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Flips a single cell and returns its new state.
    pub fn toggle(&mut self, x: isize, y: isize) -> Result<Cell, GridError> {
        let i = self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        self.cells[i] = self.cells[i].toggled();
        Ok(self.cells[i])
    }

    pub fn step(&mut self) {
        let mut next = mem::take(&mut self.next);
        let coords = (0..self.height).cartesian_product(0..self.width);
        for (i, (y, x)) in coords.enumerate() {
            let alive = neighbours((x as isize, y as isize))
                .filter(|&(nx, ny)| self.is_alive(nx, ny))
                .count();
            next[i] = self.cells[i].next(alive);
        }
        self.next = mem::replace(&mut self.cells, next);
        self.generation += 1;
        log::trace!(
            "generation {}: population {}",
            self.generation,
            self.population()
        );
    }

    /// Kills every cell and rewinds the generation counter. Playback is not
    /// touched here; see [`Controller::reset`].
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Dead);
        self.generation = 0;
        log::info!("grid {}x{} reset", self.width, self.height);
    }

    /// Coordinates of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .positions(|c| c.is_alive())
            .map(|i| (i % self.width, i / self.width))
    }
}

impl LifeGrid {
    fn index(&self, x: isize, y: isize) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }

    fn out_of_bounds(&self, x: isize, y: isize) -> GridError {
        log::debug!(
            "({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

impl PartialEq for LifeGrid {
    fn eq(&self, other: &Self) -> bool {
        // The generation counter and the scratch buffer are not state.
        self.dimensions() == other.dimensions() && self.cells == other.cells
    }
}

impl Eq for LifeGrid {}

/// `None` when `len` cells cannot be allocated.
fn dead_cells(len: usize) -> Option<Vec<Cell>> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(len).ok()?;
    cells.resize(len, Cell::Dead);
    Some(cells)
}

fn neighbours((x, y): (isize, isize)) -> impl Iterator<Item = (isize, isize)> {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
        .map(move |(dx, dy)| (x + dx, y + dy))
}
