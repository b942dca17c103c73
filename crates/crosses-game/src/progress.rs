/// Errors returned when constructing a [`Progress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ProgressError {
    /// The grid size was 0.
    #[display("grid size must be at least 1")]
    ZeroGridSize,
    /// The level is not in `1..=grid_size²`.
    #[display("level {level} is outside 1..={max}")]
    LevelOutOfRange {
        /// Rejected level.
        level: u32,
        /// Highest level for the requested grid size.
        max: u32,
    },
}

/// The player's position in the level sequence.
///
/// Each grid size `N` has levels `1..=N²`; level `k` is scrambled with `k`
/// toggles. Finishing the last level of a size moves on to level 1 of size
/// `N + 1`. This is the state the host persists between runs.
///
/// # Examples
///
/// ```
/// use crosses_game::Progress;
///
/// let progress = Progress::new(4, 2).unwrap();
/// assert_eq!(progress.next(), Progress::new(1, 3).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Progress {
    level: u32,
    grid_size: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Progress {
    /// Level 1 on a 1×1 grid.
    pub const INITIAL: Self = Self {
        level: 1,
        grid_size: 1,
    };

    /// Largest playable grid size.
    ///
    /// Past this size, finishing the last level replays that level instead
    /// of growing the grid.
    pub const MAX_GRID_SIZE: u32 = 64;

    /// Creates a progress value.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::ZeroGridSize`] if `grid_size` is 0 and
    /// [`ProgressError::LevelOutOfRange`] if `level` is not in
    /// `1..=grid_size²`.
    pub fn new(level: u32, grid_size: u32) -> Result<Self, ProgressError> {
        if grid_size == 0 {
            return Err(ProgressError::ZeroGridSize);
        }
        let max = max_level(grid_size);
        if level == 0 || level > max {
            return Err(ProgressError::LevelOutOfRange { level, max });
        }
        Ok(Self { level, grid_size })
    }

    /// Creates a progress value, clamping both fields into range.
    ///
    /// Intended for values read back from storage that may be stale or
    /// corrupted.
    #[must_use]
    pub fn clamped(level: u32, grid_size: u32) -> Self {
        let grid_size = grid_size.clamp(1, Self::MAX_GRID_SIZE);
        let level = level.clamp(1, max_level(grid_size));
        Self { level, grid_size }
    }

    /// Returns the current level (1-based).
    #[must_use]
    pub const fn level(self) -> u32 {
        self.level
    }

    /// Returns the current grid side length.
    #[must_use]
    pub const fn grid_size(self) -> u32 {
        self.grid_size
    }

    /// Returns the number of levels available at the current grid size.
    #[must_use]
    pub fn max_level(self) -> u32 {
        max_level(self.grid_size)
    }

    /// Returns `true` if this is the last level of the current grid size.
    #[must_use]
    pub fn is_last_level(self) -> bool {
        self.level == self.max_level()
    }

    /// Returns the progress after finishing this level.
    ///
    /// The level increments; once it exceeds `grid_size²` the grid grows by
    /// one and the level restarts at 1.
    #[must_use]
    pub fn next(self) -> Self {
        let level = self.level + 1;
        if level > self.max_level() && self.grid_size < Self::MAX_GRID_SIZE {
            Self {
                level: 1,
                grid_size: self.grid_size + 1,
            }
        } else {
            Self {
                level: level.min(self.max_level()),
                grid_size: self.grid_size,
            }
        }
    }

    /// Number of toggles used to scramble this level.
    #[must_use]
    pub fn shuffle_steps(self) -> usize {
        self.level as usize
    }

    /// Grid side length as a `usize`.
    #[must_use]
    pub fn grid_len(self) -> usize {
        self.grid_size as usize
    }
}

fn max_level(grid_size: u32) -> u32 {
    grid_size.saturating_mul(grid_size)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_initial() {
        assert_eq!(Progress::default(), Progress::INITIAL);
        assert_eq!(Progress::INITIAL.level(), 1);
        assert_eq!(Progress::INITIAL.grid_size(), 1);
        assert!(Progress::INITIAL.is_last_level());
    }

    #[test]
    fn test_single_cell_grid_advances_to_two() {
        let next = Progress::INITIAL.next();
        assert_eq!(next.grid_size(), 2);
        assert_eq!(next.level(), 1);
    }

    #[test]
    fn test_last_level_grows_grid() {
        let next = Progress::new(4, 2).unwrap().next();
        assert_eq!(next.grid_size(), 3);
        assert_eq!(next.level(), 1);
    }

    #[test]
    fn test_inner_level_increments() {
        let next = Progress::new(2, 3).unwrap().next();
        assert_eq!(next, Progress::new(3, 3).unwrap());
    }

    #[test]
    fn test_new_validates() {
        assert_eq!(Progress::new(1, 0), Err(ProgressError::ZeroGridSize));
        assert_eq!(
            Progress::new(0, 2),
            Err(ProgressError::LevelOutOfRange { level: 0, max: 4 })
        );
        assert_eq!(
            Progress::new(5, 2),
            Err(ProgressError::LevelOutOfRange { level: 5, max: 4 })
        );
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Progress::clamped(0, 0), Progress::INITIAL);
        assert_eq!(Progress::clamped(10, 2), Progress::new(4, 2).unwrap());
        assert_eq!(Progress::clamped(3, 3), Progress::new(3, 3).unwrap());
    }

    #[test]
    fn test_clamped_caps_absurd_grid_size() {
        let progress = Progress::clamped(u32::MAX, 1_000_000);
        assert_eq!(progress.grid_size(), Progress::MAX_GRID_SIZE);
        assert_eq!(progress.level(), progress.max_level());
    }

    #[test]
    fn test_last_level_of_largest_grid_repeats() {
        let max = Progress::MAX_GRID_SIZE;
        let last = Progress::new(max * max, max).unwrap();
        assert_eq!(last.next(), last);
    }

    proptest! {
        #[test]
        fn next_keeps_level_in_range(level in 1u32..1000, grid_size in 1u32..100) {
            let progress = Progress::clamped(level, grid_size);
            let next = progress.next();
            prop_assert!(next.level() >= 1);
            prop_assert!(next.level() <= next.max_level());
            prop_assert!(next.grid_size() >= progress.grid_size());
        }

        #[test]
        fn walking_a_grid_size_takes_its_area(grid_size in 1u32..20) {
            let mut progress = Progress::new(1, grid_size).unwrap();
            let mut levels = 1;
            while progress.grid_size() == grid_size {
                progress = progress.next();
                levels += 1;
            }
            prop_assert_eq!(levels - 1, grid_size * grid_size);
            prop_assert_eq!(progress, Progress::new(1, grid_size + 1).unwrap());
        }
    }
}
