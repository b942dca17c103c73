use crosses_game::{Progress, Session, SessionError, TapOutcome};

use crate::{
    action::{Action, ActionRequestQueue},
    state::AppState,
};

pub fn handle_all(app_state: &mut AppState, action_queue: &mut ActionRequestQueue) {
    for action in action_queue.take_all() {
        handle(app_state, action);
    }
}

fn handle(app_state: &mut AppState, action: Action) {
    match action {
        Action::TapCell(pos) => {
            log::debug!("tap {pos}");
            let outcome = app_state.session.on_cell_tapped(pos);
            apply_outcome(app_state, outcome);
        }
        Action::TapBoard => {
            let outcome = app_state.session.on_tap_anywhere_while_ended();
            apply_outcome(app_state, outcome);
        }
        Action::ShowHint => {
            app_state.hint = app_state.session.hint();
        }
        Action::NewPuzzle => {
            let result = app_state.session.restart_level();
            app_state.hint = None;
            record_error(app_state, result);
        }
        Action::ResetProgress => {
            log::info!("resetting progress");
            match Session::new(Progress::INITIAL) {
                Ok(session) => {
                    app_state.session = session;
                    app_state.hint = None;
                    app_state.last_error = None;
                    app_state.mark_dirty();
                }
                Err(err) => report_error(app_state, err),
            }
        }
    }
}

fn apply_outcome(app_state: &mut AppState, outcome: Result<TapOutcome, SessionError>) {
    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(err) => {
            report_error(app_state, err);
            return;
        }
    };

    match outcome {
        TapOutcome::Toggled => {
            app_state.hint = None;
        }
        TapOutcome::Solved => {
            app_state.hint = None;
            let session = &app_state.session;
            let progress = session.progress();
            log::info!(
                "level {} on {size}x{size} solved in {} moves",
                progress.level(),
                session.move_count(),
                size = progress.grid_size(),
            );
        }
        TapOutcome::Advanced(progress) => {
            log::info!(
                "advanced to level {} on {size}x{size}",
                progress.level(),
                size = progress.grid_size(),
            );
            app_state.hint = None;
            app_state.last_error = None;
            app_state.mark_dirty();
        }
        TapOutcome::Ignored => {}
    }
}

fn record_error<T>(app_state: &mut AppState, result: Result<T, SessionError>) {
    match result {
        Ok(_) => app_state.last_error = None,
        Err(err) => report_error(app_state, err),
    }
}

fn report_error(app_state: &mut AppState, err: SessionError) {
    log::error!("{err}");
    app_state.last_error = Some(err);
}
