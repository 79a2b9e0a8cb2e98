use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use crate::{Cell, GridError, LifeGrid};

/// A pattern's rows with the common indentation, trailing whitespace and any
/// blank lines before the first row removed.
struct Dedented<'a> {
    /// Blank lines skipped before the first row.
    skipped: usize,
    /// Whitespace characters removed from the front of every row.
    indent: usize,
    lines: Vec<&'a str>,
}

impl<'a> Dedented<'a> {
    fn new(s: &'a str) -> Self {
        let get_indent = |l: &str| {
            let n = l.chars().take_while(|c| c.is_whitespace()).count();
            (n < l.chars().count()).then_some(n)
        };
        let indent = s.lines().filter_map(get_indent).min().unwrap_or_default();
        let skipped = s.lines().take_while(|l| l.trim().is_empty()).count();
        let lines = s
            .trim_end()
            .lines()
            .skip(skipped)
            .map(|l| match l.char_indices().nth(indent) {
                Some((i, _)) => l[i..].trim_end(),
                None => "",
            })
            .collect();
        Self {
            skipped,
            indent,
            lines,
        }
    }
}

pub(crate) fn dedent(s: &str) -> Vec<&str> {
    Dedented::new(s).lines
}

struct Pattern {
    width: usize,
    height: usize,
    alive: Vec<(usize, usize)>,
}

impl FromStr for Pattern {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Dedented {
            skipped,
            indent,
            lines,
        } = Dedented::new(s);
        let mut alive = Vec::new();
        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                match c {
                    '.' | ' ' => (),
                    'o' => alive.push((x, y)),
                    c => {
                        return Err(GridError::UnexpectedChar {
                            c,
                            line: skipped + y + 1,
                            column: indent + x + 1,
                        });
                    }
                }
            }
        }
        let width = lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or_default();
        Ok(Pattern {
            width,
            height: lines.len(),
            alive,
        })
    }
}

impl LifeGrid {
    /// Stamps the live cells of `pattern` onto the grid with the pattern's
    /// top-left corner at `(x, y)`, returning how many cells were written.
    ///
    /// Dead cells of the pattern are not written and may hang off the board.
    /// If any live cell would land outside the grid nothing is written.
    pub fn place(&mut self, x: isize, y: isize, pattern: &str) -> Result<usize, GridError> {
        let pattern: Pattern = pattern.parse()?;
        let targets = pattern
            .alive
            .iter()
            .map(|&(dx, dy)| {
                let (px, py) = (x.saturating_add(dx as isize), y.saturating_add(dy as isize));
                self.index(px, py).ok_or_else(|| self.out_of_bounds(px, py))
            })
            .collect::<Result<Vec<_>, _>>()?;
        for &i in &targets {
            self.cells[i] = Cell::Alive;
        }
        log::debug!(
            "placed {}x{} pattern at ({x}, {y}), {} live cells",
            pattern.width,
            pattern.height,
            targets.len()
        );
        Ok(targets.len())
    }
}

/// Parses a picture of the board: `o` is alive, `.` or a space is dead. The
/// grid is as wide as the longest line.
impl FromStr for LifeGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pattern: Pattern = s.parse()?;
        let mut grid = LifeGrid::new(pattern.width, pattern.height)?;
        for (x, y) in pattern.alive {
            grid.cells[y * grid.width + x] = Cell::Alive;
        }
        Ok(grid)
    }
}

impl Display for LifeGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(if cell.is_alive() { 'o' } else { '.' })?;
            }
        }
        Ok(())
    }
}
