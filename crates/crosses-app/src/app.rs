//! Crosses desktop application.
//!
//! # Design Notes
//! - One screen: a status line above the grid.
//! - Mouse clicks toggle cells; once solved, a click anywhere continues.
//! - Only level progress is persisted. Every start draws a fresh puzzle.

use std::time::Duration;

use crosses_game::SessionError;
use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context},
};

use crate::{
    action::ActionRequestQueue, action_handler, persistence, state::AppState, ui,
    view_model_builder,
};

#[derive(Debug)]
pub struct CrossesApp {
    app_state: AppState,
}

impl CrossesApp {
    pub fn new(cc: &CreationContext<'_>) -> Result<Self, SessionError> {
        let progress = cc
            .storage
            .and_then(persistence::load_progress)
            .unwrap_or_default();
        log::info!(
            "starting at level {} on {size}x{size}",
            progress.level(),
            size = progress.grid_size(),
        );
        Ok(Self {
            app_state: AppState::new(progress)?,
        })
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }
}

impl App for CrossesApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        persistence::save_progress(storage, self.app_state.session.progress());
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        ctx.input(|i| {
            ui::input::handle_input(i, &mut action_queue);
        });
        action_handler::handle_all(&mut self.app_state, &mut action_queue);

        let game_screen_vm = view_model_builder::build_game_screen_view_model(&self.app_state);

        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });

        action_handler::handle_all(&mut self.app_state, &mut action_queue);

        self.apply_persistence(frame);
    }
}
