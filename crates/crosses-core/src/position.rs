//! Board coordinates.

use std::{fmt, iter::FusedIterator};

/// A cell coordinate on the board, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column index.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns `true` if this position lies on a `size`×`size` board.
    #[must_use]
    #[inline]
    pub const fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Returns the row-major index of this position on a `size`×`size` board.
    #[must_use]
    #[inline]
    pub const fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Converts a row-major index back into a position.
    #[must_use]
    #[inline]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self::new(index / size, index % size)
    }

    /// Returns the cells flipped by a toggle at this position.
    ///
    /// The target cell comes first, followed by the other cells of its row
    /// (left to right) and then the other cells of its column (top to bottom).
    /// Every cell appears exactly once, so the iterator yields `2 * size - 1`
    /// positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosses_core::Position;
    ///
    /// let cross: Vec<_> = Position::new(0, 1).cross(2).collect();
    /// assert_eq!(
    ///     cross,
    ///     [Position::new(0, 1), Position::new(0, 0), Position::new(1, 1)]
    /// );
    /// ```
    #[must_use]
    pub fn cross(self, size: usize) -> Cross {
        Cross {
            center: self,
            size,
            step: 0,
        }
    }

    /// Returns `true` if a toggle at `self` flips the cell at `other`.
    #[must_use]
    #[inline]
    pub const fn shares_line_with(self, other: Position) -> bool {
        self.row == other.row || self.col == other.col
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Iterator over the cells flipped by a toggle, created by [`Position::cross`].
#[derive(Debug, Clone)]
pub struct Cross {
    center: Position,
    size: usize,
    step: usize,
}

impl Cross {
    fn len_total(&self) -> usize {
        if self.size == 0 { 0 } else { 2 * self.size - 1 }
    }
}

impl Iterator for Cross {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let size = self.size;
        let Position { row, col } = self.center;
        // Steps: 0 is the center, 1..size walk the row, size..2*size-1 walk the column.
        let pos = match self.step {
            s if s >= self.len_total() => return None,
            0 => self.center,
            s if s < size => {
                let c = s - 1;
                Position::new(row, if c < col { c } else { c + 1 })
            }
            s => {
                let r = s - size;
                Position::new(if r < row { r } else { r + 1 }, col)
            }
        };
        self.step += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len_total().saturating_sub(self.step);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cross {}

impl FusedIterator for Cross {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_index_round_trip() {
        let pos = Position::new(2, 3);
        assert_eq!(pos.to_index(5), 13);
        assert_eq!(Position::from_index(13, 5), pos);
    }

    #[test]
    fn test_cross_single_cell() {
        let cross: Vec<_> = Position::new(0, 0).cross(1).collect();
        assert_eq!(cross, [Position::new(0, 0)]);
    }

    #[test]
    fn test_cross_order() {
        let cross: Vec<_> = Position::new(1, 1).cross(3).collect();
        assert_eq!(
            cross,
            [
                Position::new(1, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(0, 1),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(4, 7).to_string(), "(4, 7)");
    }

    proptest! {
        #[test]
        fn cross_cells_are_distinct_and_share_a_line(
            size in 1usize..10,
            row in 0usize..10,
            col in 0usize..10,
        ) {
            let center = Position::new(row % size, col % size);
            let cross = center.cross(size);
            prop_assert_eq!(cross.len(), 2 * size - 1);

            let cells: Vec<_> = cross.collect();
            let unique: HashSet<_> = cells.iter().copied().collect();
            prop_assert_eq!(unique.len(), cells.len());
            for pos in cells {
                prop_assert!(pos.is_within(size));
                prop_assert!(center.shares_line_with(pos));
            }
        }
    }
}
