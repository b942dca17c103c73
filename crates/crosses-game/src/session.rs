use std::collections::BTreeSet;

use crosses_core::{Grid, Position};
use crosses_generator::{GeneratedPuzzle, GeneratorError, PuzzleGenerator, PuzzleSeed};

use crate::Progress;

/// Errors returned by [`Session`] operations that generate a new grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SessionError {
    /// The generator could not produce a puzzle for the requested level.
    #[display("failed to generate puzzle: {_0}")]
    Generate(#[from] GeneratorError),
}

/// Whether the current level is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    /// The grid is scrambled and accepts toggles.
    Playing,
    /// The grid is solved; the next tap advances to the next level.
    Ended,
}

/// The effect of a tap reported to [`Session::on_cell_tapped`] or
/// [`Session::on_tap_anywhere_while_ended`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TapOutcome {
    /// The cell was toggled and the grid is still unsolved.
    Toggled,
    /// The cell was toggled and solved the grid.
    Solved,
    /// The tap acknowledged a win and a new level was loaded.
    ///
    /// The new progress must be persisted by the host.
    Advanced(Progress),
    /// The tap had no effect.
    Ignored,
}

/// A Crosses game session.
///
/// Owns the current grid and the level progression. The host forwards taps
/// and persists [`Progress`] whenever a level advance completes.
///
/// # Example
///
/// ```
/// use crosses_game::{GameState, Progress, Session, TapOutcome};
///
/// let mut session = Session::new(Progress::INITIAL).unwrap();
/// assert_eq!(session.state(), GameState::Playing);
///
/// // The single-cell level is solved by tapping its only cell.
/// let pos = session.hint().unwrap();
/// assert_eq!(session.on_cell_tapped(pos).unwrap(), TapOutcome::Solved);
/// assert_eq!(session.state(), GameState::Ended);
///
/// // Any tap after the win moves on to the next level.
/// let outcome = session.on_tap_anywhere_while_ended().unwrap();
/// assert_eq!(outcome, TapOutcome::Advanced(Progress::new(1, 2).unwrap()));
/// assert_eq!(session.grid().size(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    generator: PuzzleGenerator,
    progress: Progress,
    grid: Grid,
    state: GameState,
    seed: PuzzleSeed,
    // Toggles that return the grid to solved: the generator's moves combined
    // with the player's taps, each position kept only if used an odd number of times.
    pending: BTreeSet<Position>,
    move_count: u32,
}

impl Session {
    /// Starts a session at `progress` with the default generator.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Generate`] if the puzzle could not be generated.
    pub fn new(progress: Progress) -> Result<Self, SessionError> {
        Self::with_generator(progress, PuzzleGenerator::new())
    }

    /// Starts a session at `progress` using `generator`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Generate`] if the puzzle could not be generated.
    pub fn with_generator(
        progress: Progress,
        generator: PuzzleGenerator,
    ) -> Result<Self, SessionError> {
        Self::with_seed(progress, generator, PuzzleSeed::random())
    }

    /// Starts a session whose first grid is generated from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Generate`] if the puzzle could not be generated.
    pub fn with_seed(
        progress: Progress,
        generator: PuzzleGenerator,
        seed: PuzzleSeed,
    ) -> Result<Self, SessionError> {
        let puzzle = generate(&generator, progress, seed)?;
        Ok(Self::from_puzzle(generator, progress, puzzle))
    }

    fn from_puzzle(
        generator: PuzzleGenerator,
        progress: Progress,
        puzzle: GeneratedPuzzle,
    ) -> Self {
        let GeneratedPuzzle {
            grid,
            moves,
            seed,
            attempts: _,
        } = puzzle;
        Self {
            generator,
            progress,
            grid,
            state: GameState::Playing,
            seed,
            pending: moves.into_iter().collect(),
            move_count: 0,
        }
    }

    /// Returns the current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current level and grid size.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the seed the current grid was generated from.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Returns the number of toggles the player made on the current level.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns a position whose toggle is part of a sequence that solves the
    /// grid, or `None` once the level has ended.
    ///
    /// Following hints one after another solves the grid. From a fresh level
    /// this takes at most as many taps as the level number; every tap off the
    /// hinted sequence adds at most one more.
    #[must_use]
    pub fn hint(&self) -> Option<Position> {
        if self.state.is_ended() {
            return None;
        }
        self.pending.first().copied()
    }

    /// Handles a tap on the cell at `pos`.
    ///
    /// While playing, toggles the cell and its row and column and ends the
    /// level if the grid becomes solved. Once ended, the coordinate is ignored
    /// and the tap advances to the next level instead.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid while playing.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Generate`] if advancing failed to generate the
    /// next puzzle. The session is left unchanged in that case.
    pub fn on_cell_tapped(&mut self, pos: Position) -> Result<TapOutcome, SessionError> {
        if self.state.is_ended() {
            return self.advance_level().map(TapOutcome::Advanced);
        }

        self.grid.toggle(pos);
        if !self.pending.remove(&pos) {
            self.pending.insert(pos);
        }
        self.move_count = self.move_count.saturating_add(1);

        if self.grid.is_solved() {
            self.state = GameState::Ended;
            Ok(TapOutcome::Solved)
        } else {
            Ok(TapOutcome::Toggled)
        }
    }

    /// Handles a tap anywhere on the board.
    ///
    /// Advances to the next level if the current one has ended; otherwise
    /// returns [`TapOutcome::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Generate`] if the next puzzle could not be
    /// generated. The session is left unchanged in that case.
    pub fn on_tap_anywhere_while_ended(&mut self) -> Result<TapOutcome, SessionError> {
        if self.state.is_playing() {
            return Ok(TapOutcome::Ignored);
        }
        self.advance_level().map(TapOutcome::Advanced)
    }

    /// Moves to the next level and generates its grid.
    ///
    /// The level increments; past `grid_size²` the grid grows by one and the
    /// level restarts at 1. Returns the new progress for the host to persist.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Generate`] if the next puzzle could not be
    /// generated. The session is left unchanged in that case.
    pub fn advance_level(&mut self) -> Result<Progress, SessionError> {
        let next = self.progress.next();
        let puzzle = generate(&self.generator, next, PuzzleSeed::random())?;
        *self = Self::from_puzzle(self.generator, next, puzzle);
        Ok(next)
    }

    /// Replaces the current grid with a fresh puzzle for the same level.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Generate`] if the puzzle could not be
    /// generated. The session is left unchanged in that case.
    pub fn restart_level(&mut self) -> Result<(), SessionError> {
        self.restart_level_with_seed(PuzzleSeed::random())
    }

    /// Replaces the current grid with the puzzle generated from `seed` for
    /// the same level.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Generate`] if the puzzle could not be
    /// generated. The session is left unchanged in that case.
    pub fn restart_level_with_seed(&mut self, seed: PuzzleSeed) -> Result<(), SessionError> {
        let puzzle = generate(&self.generator, self.progress, seed)?;
        *self = Self::from_puzzle(self.generator, self.progress, puzzle);
        Ok(())
    }
}

fn generate(
    generator: &PuzzleGenerator,
    progress: Progress,
    seed: PuzzleSeed,
) -> Result<GeneratedPuzzle, SessionError> {
    let puzzle =
        generator.generate_with_seed(progress.grid_len(), progress.shuffle_steps(), seed)?;
    Ok(puzzle)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn session(level: u32, grid_size: u32, phrase: &str) -> Session {
        Session::with_seed(
            Progress::new(level, grid_size).unwrap(),
            PuzzleGenerator::new(),
            PuzzleSeed::from_phrase(phrase),
        )
        .unwrap()
    }

    fn solve_with_hints(session: &mut Session) -> u32 {
        let mut taps = 0;
        while let Some(pos) = session.hint() {
            session.on_cell_tapped(pos).unwrap();
            taps += 1;
        }
        taps
    }

    #[test]
    fn test_new_session_is_playing_and_unsolved() {
        let session = session(3, 3, "new");
        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.grid().size(), 3);
        assert!(!session.grid().is_solved());
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_single_cell_level() {
        let mut session = session(1, 1, "single");
        assert_eq!(session.grid().to_string(), ".");

        let outcome = session.on_cell_tapped(Position::new(0, 0)).unwrap();
        assert_eq!(outcome, TapOutcome::Solved);
        assert!(session.state().is_ended());
        assert_eq!(session.hint(), None);
    }

    #[test]
    fn test_tap_after_win_advances_instead_of_toggling() {
        let mut session = session(1, 1, "advance");
        session.on_cell_tapped(Position::new(0, 0)).unwrap();

        // The coordinate is ignored, so even one outside the old grid is accepted.
        let outcome = session.on_cell_tapped(Position::new(5, 5)).unwrap();
        assert_eq!(outcome, TapOutcome::Advanced(Progress::new(1, 2).unwrap()));
        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.grid().size(), 2);
        assert_eq!(session.grid().unsolved_count(), 3);
    }

    #[test]
    fn test_tap_anywhere_is_ignored_while_playing() {
        let mut session = session(2, 2, "ignored");
        let before = session.clone();
        assert_eq!(
            session.on_tap_anywhere_while_ended().unwrap(),
            TapOutcome::Ignored
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_last_level_advances_grid_size() {
        let mut session = session(4, 2, "last");
        solve_with_hints(&mut session);
        assert!(session.state().is_ended());

        let outcome = session.on_tap_anywhere_while_ended().unwrap();
        assert_eq!(outcome, TapOutcome::Advanced(Progress::new(1, 3).unwrap()));
        assert_eq!(session.grid().size(), 3);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_advance_level_scales_shuffle_with_level() {
        let mut session = session(1, 3, "scale");
        let progress = session.advance_level().unwrap();
        assert_eq!(progress, Progress::new(2, 3).unwrap());
        assert_eq!(session.progress(), progress);
        assert_eq!(session.pending.len(), 2);
    }

    #[test]
    fn test_toggle_outcome_and_move_count() {
        let mut session = session(4, 4, "count");
        let pos = session.hint().unwrap();
        let other = session
            .grid()
            .positions()
            .find(|p| !session.pending.contains(p))
            .unwrap();

        assert_eq!(session.on_cell_tapped(other).unwrap(), TapOutcome::Toggled);
        assert!(session.pending.contains(&other));
        assert_eq!(session.on_cell_tapped(other).unwrap(), TapOutcome::Toggled);
        assert!(!session.pending.contains(&other));
        assert_eq!(session.move_count(), 2);
        assert_eq!(session.hint(), Some(pos));
    }

    #[test]
    fn test_restart_level_keeps_progress() {
        let mut session = session(3, 3, "restart");
        session.on_cell_tapped(Position::new(0, 0)).unwrap();
        let seed = PuzzleSeed::from_phrase("other");
        session.restart_level_with_seed(seed).unwrap();
        assert_eq!(session.progress(), Progress::new(3, 3).unwrap());
        assert_eq!(session.seed(), seed);
        assert_eq!(session.move_count(), 0);
        assert!(session.state().is_playing());
    }

    #[test]
    fn test_same_seed_same_session() {
        assert_eq!(session(5, 4, "seed"), session(5, 4, "seed"));
    }

    #[test]
    fn test_generation_error_converts() {
        let err = SessionError::from(GeneratorError::NoSteps);
        assert_eq!(
            err.to_string(),
            "failed to generate puzzle: at least one shuffle step is required"
        );
    }

    proptest! {
        #[test]
        fn hints_solve_within_level_taps(
            grid_size in 1u32..7,
            level in 1u32..50,
            phrase in "[a-z]{1,8}",
        ) {
            let level = (level - 1) % (grid_size * grid_size) + 1;
            let mut session = session(level, grid_size, &phrase);
            let taps = solve_with_hints(&mut session);
            prop_assert!(session.state().is_ended());
            prop_assert!(session.grid().is_solved());
            prop_assert!(taps >= 1);
            prop_assert!(taps <= level);
        }

        #[test]
        fn hints_recover_from_a_stray_tap(
            grid_size in 1u32..7,
            level in 1u32..50,
            row in 0usize..7,
            col in 0usize..7,
            phrase in "[a-z]{1,8}",
        ) {
            let level = (level - 1) % (grid_size * grid_size) + 1;
            let mut session = session(level, grid_size, &phrase);
            let size = session.grid().size();
            session.on_cell_tapped(Position::new(row % size, col % size)).unwrap();

            let taps = solve_with_hints(&mut session);
            prop_assert!(session.state().is_ended());
            prop_assert!(session.grid().is_solved());
            prop_assert!(taps <= level + 1);
        }
    }
}
