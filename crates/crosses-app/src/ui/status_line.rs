use crosses_game::Progress;
use eframe::egui::{Align, Label, Layout, RichText, Ui, Widget as _};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Hint,
    Solved,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct StatusLineViewModel {
    progress: Progress,
    move_count: u32,
    status: GameStatus,
}

impl StatusLineViewModel {
    #[must_use]
    pub fn new(progress: Progress, move_count: u32, status: GameStatus) -> Self {
        Self {
            progress,
            move_count,
            status,
        }
    }

    #[must_use]
    pub fn summary_text(&self) -> String {
        let size = self.progress.grid_size();
        format!(
            "Level {}/{}  {size}\u{d7}{size}  Moves: {}",
            self.progress.level(),
            self.progress.max_level(),
            self.move_count,
        )
    }

    #[must_use]
    pub fn status_text(&self) -> String {
        match &self.status {
            GameStatus::Playing => "Light every cell".to_owned(),
            GameStatus::Hint => "Hint: tap the highlighted cell".to_owned(),
            GameStatus::Solved => {
                if self.progress.is_last_level() {
                    "Solved! Next up: a bigger grid".to_owned()
                } else {
                    "Solved!".to_owned()
                }
            }
            GameStatus::Failed(message) => format!("Error: {message}"),
        }
    }
}

pub const TEXT_SIZE: f32 = 18.0;

pub fn show(ui: &mut Ui, vm: &StatusLineViewModel) {
    let visuals = ui.visuals();
    let status_color = match vm.status {
        GameStatus::Playing => visuals.text_color(),
        GameStatus::Hint | GameStatus::Solved => visuals.warn_fg_color,
        GameStatus::Failed(_) => visuals.error_fg_color,
    };

    ui.horizontal_centered(|ui| {
        Label::new(RichText::new(vm.summary_text()).size(TEXT_SIZE)).ui(ui);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            Label::new(
                RichText::new(vm.status_text())
                    .color(status_color)
                    .size(TEXT_SIZE),
            )
            .truncate()
            .ui(ui);
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_shows_level_size_and_moves() {
        let vm = StatusLineViewModel::new(Progress::new(2, 3).unwrap(), 4, GameStatus::Playing);
        assert_eq!(vm.summary_text(), "Level 2/9  3\u{d7}3  Moves: 4");
    }

    #[test]
    fn playing_asks_to_light_every_cell() {
        let vm = StatusLineViewModel::new(Progress::INITIAL, 0, GameStatus::Playing);
        assert_eq!(vm.status_text(), "Light every cell");
    }

    #[test]
    fn solved_on_last_level_announces_bigger_grid() {
        let vm = StatusLineViewModel::new(Progress::new(4, 2).unwrap(), 1, GameStatus::Solved);
        assert_eq!(vm.status_text(), "Solved! Next up: a bigger grid");
        let vm = StatusLineViewModel::new(Progress::new(3, 2).unwrap(), 1, GameStatus::Solved);
        assert_eq!(vm.status_text(), "Solved!");
    }
}
