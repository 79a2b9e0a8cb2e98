use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one cell and `width * height` must fit in memory.
    InvalidDimensions { width: usize, height: usize },
    /// A coordinate outside `[0, width) x [0, height)`.
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },
    /// A pattern contained something other than `o`, `.` or a space.
    UnexpectedChar { c: char, line: usize, column: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
            GridError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "({x}, {y}) is outside the {width}x{height} grid"),
            GridError::UnexpectedChar { c, line, column } => {
                write!(f, "unexpected character {c:?} at {line}:{column}")
            }
        }
    }
}

impl std::error::Error for GridError {}
