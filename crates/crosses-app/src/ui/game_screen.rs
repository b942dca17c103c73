use eframe::egui::{Sense, Ui};
use egui_extras::{Size, StripBuilder};

use super::{grid, status_line};
use crate::{
    action::{Action, ActionRequestQueue},
    ui::{grid::GridViewModel, status_line::StatusLineViewModel},
};

const STATUS_LINE_HEIGHT: f32 = status_line::TEXT_SIZE * 2.0;
const GRID_FILL_RATIO: f32 = 0.95;

#[derive(Debug, Clone)]
pub struct GameScreenViewModel {
    pub status_line_vm: StatusLineViewModel,
    pub grid_vm: GridViewModel,
}

impl GameScreenViewModel {
    #[must_use]
    pub fn new(status_line_vm: StatusLineViewModel, grid_vm: GridViewModel) -> Self {
        Self {
            status_line_vm,
            grid_vm,
        }
    }
}

pub fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    // Registered before the cells so that cell clicks take precedence.
    if vm.grid_vm.is_ended() {
        let response = ui.interact(ui.max_rect(), ui.id().with("board"), Sense::click());
        if response.clicked() {
            action_queue.request(Action::TapBoard);
        }
    }

    StripBuilder::new(ui)
        .size(Size::exact(STATUS_LINE_HEIGHT))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.cell(|ui| {
                status_line::show(ui, &vm.status_line_vm);
            });
            strip.cell(|ui| {
                show_centered_grid(ui, &vm.grid_vm, action_queue);
            });
        });
}

fn show_centered_grid(ui: &mut Ui, vm: &GridViewModel, action_queue: &mut ActionRequestQueue) {
    let side = ui.available_size().min_elem() * GRID_FILL_RATIO;
    let cell_size = grid::cell_size_for_side(side, vm.size());
    let grid_side = grid::grid_side_with_border(cell_size, vm.size());

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(grid_side))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(grid_side))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            grid::show(ui, vm, cell_size, action_queue);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
        });
}
