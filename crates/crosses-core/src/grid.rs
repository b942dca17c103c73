//! The square board of boolean cells.

use std::{fmt, ops::Index, str::FromStr};

use crate::Position;

/// Errors returned when constructing or parsing a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A grid must have at least one cell.
    #[display("grid size must be at least 1")]
    ZeroSize,
    /// The text contained no rows.
    #[display("grid text is empty")]
    Empty,
    /// A row length does not match the number of rows.
    #[display("grid is not square: {rows} rows, but row {row} has {len} cells")]
    NotSquare {
        /// Number of rows in the input.
        rows: usize,
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
    },
    /// A character other than `#` or `.` was found.
    #[display("invalid cell character: {_0:?}")]
    InvalidCell(#[error(not(source))] char),
}

/// A square board of cells, each either active (`true`) or inactive (`false`).
///
/// Cells are stored in row-major order. The board always holds exactly
/// `size * size` cells and `size` is at least 1.
///
/// # Text format
///
/// [`Display`](fmt::Display) prints one line per row with `#` for an active
/// cell and `.` for an inactive cell. [`FromStr`] accepts the same format and
/// ignores blank lines and whitespace around rows.
///
/// ```
/// use crosses_core::Grid;
///
/// let grid: Grid = "
///     #.
///     .#
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(grid.size(), 2);
/// assert_eq!(grid.unsolved_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// The cell value every cell must reach for the board to be solved.
    pub const SOLVED: bool = true;

    /// Creates a solved `size`×`size` grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    #[must_use]
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a solved `size`×`size` grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroSize`] if `size` is 0.
    pub fn try_new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        Ok(Self {
            size,
            cells: vec![Self::SOLVED; size * size],
        })
    }

    /// Returns the side length of the board.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the total number of cells (`size * size`).
    #[must_use]
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the state of the cell at `pos`, or `None` if it is off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<bool> {
        pos.is_within(self.size)
            .then(|| self.cells[pos.to_index(self.size)])
    }

    /// Returns an iterator over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size * size).map(move |i| Position::from_index(i, size))
    }

    /// Returns the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.size)
    }

    /// Applies one move at `pos`.
    ///
    /// Flips the target cell, every other cell in its row, and every other
    /// cell in its column, `2 * size - 1` cells in total. Toggling the same
    /// position twice restores the previous state.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosses_core::{Grid, Position};
    ///
    /// let mut grid = Grid::new(2);
    /// grid.toggle(Position::new(0, 0));
    /// assert_eq!(grid.get(Position::new(1, 1)), Some(true));
    /// assert_eq!(grid.get(Position::new(0, 1)), Some(false));
    /// ```
    pub fn toggle(&mut self, pos: Position) {
        assert!(
            pos.is_within(self.size),
            "position {pos} is outside a {size}x{size} grid",
            size = self.size,
        );
        for target in pos.cross(self.size) {
            let cell = &mut self.cells[target.to_index(self.size)];
            *cell = !*cell;
        }
    }

    /// Returns `true` if every cell holds [`Grid::SOLVED`].
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Self::SOLVED)
    }

    /// Returns the number of cells that do not hold [`Grid::SOLVED`].
    #[must_use]
    pub fn unsolved_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Self::SOLVED).count()
    }

    /// Restores every cell to [`Grid::SOLVED`].
    pub fn reset(&mut self) {
        self.cells.fill(Self::SOLVED);
    }
}

impl Index<Position> for Grid {
    type Output = bool;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(
            pos.is_within(self.size),
            "position {pos} is outside a {size}x{size} grid",
            size = self.size,
        );
        &self.cells[pos.to_index(self.size)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let size = lines.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in lines.into_iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(GridError::NotSquare {
                    rows: size,
                    row,
                    len,
                });
            }
            for ch in line.chars() {
                let cell = match ch {
                    '#' => true,
                    '.' => false,
                    _ => return Err(GridError::InvalidCell(ch)),
                };
                cells.push(cell);
            }
        }
        Ok(Self { size, cells })
    }
}
