use crosses_game::GameState;

use crate::{
    state::AppState,
    ui::{
        game_screen::GameScreenViewModel,
        grid::GridViewModel,
        status_line::{GameStatus, StatusLineViewModel},
    },
};

fn build_status(app_state: &AppState) -> GameStatus {
    if let Some(err) = &app_state.last_error {
        return GameStatus::Failed(err.to_string());
    }
    match app_state.session.state() {
        GameState::Ended => GameStatus::Solved,
        GameState::Playing if app_state.hint.is_some() => GameStatus::Hint,
        GameState::Playing => GameStatus::Playing,
    }
}

#[must_use]
pub fn build_game_screen_view_model(app_state: &AppState) -> GameScreenViewModel {
    let session = &app_state.session;
    let ended = session.state().is_ended();
    // A stale hint must never outlive the level it was computed for.
    let hint = app_state.hint.filter(|_| !ended);

    let status_line_vm = StatusLineViewModel::new(
        session.progress(),
        session.move_count(),
        build_status(app_state),
    );
    let grid_vm = GridViewModel::new(session.grid(), hint, ended);
    GameScreenViewModel::new(status_line_vm, grid_vm)
}

#[cfg(test)]
mod tests {
    use crosses_core::Position;
    use crosses_game::{Progress, Session};
    use crosses_generator::{PuzzleGenerator, PuzzleSeed};

    use super::*;

    fn app_state(level: u32, grid_size: u32) -> AppState {
        let session = Session::with_seed(
            Progress::new(level, grid_size).unwrap(),
            PuzzleGenerator::new(),
            PuzzleSeed::from_phrase("view model"),
        )
        .unwrap();
        AppState::from_session(session)
    }

    #[test]
    fn fresh_session_is_playing() {
        let state = app_state(2, 3);
        assert_eq!(build_status(&state), GameStatus::Playing);
        let vm = build_game_screen_view_model(&state);
        assert!(!vm.grid_vm.is_ended());
        assert_eq!(vm.grid_vm.size(), 3);
    }

    #[test]
    fn hint_shows_in_status() {
        let mut state = app_state(2, 3);
        state.hint = state.session.hint();
        assert_eq!(build_status(&state), GameStatus::Hint);
    }

    #[test]
    fn solved_session_reports_solved() {
        let mut state = app_state(1, 1);
        state.session.on_cell_tapped(Position::new(0, 0)).unwrap();
        state.hint = Some(Position::new(0, 0));
        assert_eq!(build_status(&state), GameStatus::Solved);
        assert!(build_game_screen_view_model(&state).grid_vm.is_ended());
    }
}
