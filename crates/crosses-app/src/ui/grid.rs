use std::sync::Arc;

use crosses_core::{Grid, Position};
use eframe::egui::{Align2, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::grid_theme::{GridPalette, GridTheme},
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GridVisualState: u8 {
        const HOVERED = 0b0000_0001;
        const CROSS = 0b0000_0010;
        const HINT = 0b0000_0100;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub active: bool,
    pub visual_state: GridVisualState,
}

#[derive(Debug, Clone)]
pub struct GridViewModel {
    size: usize,
    cells: Vec<GridCell>,
    ended: bool,
}

impl GridViewModel {
    #[must_use]
    pub fn new(grid: &Grid, hint: Option<Position>, ended: bool) -> Self {
        let cells = grid
            .positions()
            .map(|pos| {
                let mut visual_state = GridVisualState::empty();
                if hint == Some(pos) {
                    visual_state |= GridVisualState::HINT;
                }
                GridCell {
                    active: grid[pos],
                    visual_state,
                }
            })
            .collect();
        Self {
            size: grid.size(),
            cells,
            ended,
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    fn cell(&self, pos: Position) -> &GridCell {
        &self.cells[pos.to_index(self.size)]
    }

    // Hover preview of the cells a click would flip; disabled once the level ends.
    fn effective_visual_state(
        &self,
        pos: Position,
        hovered: Option<Position>,
    ) -> GridVisualState {
        let mut vs = self.cell(pos).visual_state;
        if let Some(hovered) = hovered.filter(|_| !self.ended) {
            if hovered == pos {
                vs |= GridVisualState::HOVERED;
            }
            if hovered.shares_line_with(pos) {
                vs |= GridVisualState::CROSS;
            }
        }
        vs
    }
}

const BORDER_WIDTH_RATIO: f32 = 0.06;
const CELL_GAP_RATIO: f32 = 0.04;
const CELL_ROUNDING_RATIO: f32 = 0.12;
const OUTLINE_WIDTH_RATIO: f32 = 0.08;

fn border_width(cell_size: f32) -> f32 {
    f32::max(cell_size * BORDER_WIDTH_RATIO, 1.0)
}

#[allow(clippy::cast_precision_loss)]
fn cells_f32(cells: usize) -> f32 {
    cells as f32
}

#[must_use]
pub fn grid_side_with_border(cell_size: f32, cells: usize) -> f32 {
    cells_f32(cells) * cell_size + border_width(cell_size) * 2.0
}

/// Largest cell size whose bordered grid fits within `side`.
///
/// The border is either proportional to the cell size or the 1px minimum,
/// so the answer is the smaller of the two solutions.
#[must_use]
pub fn cell_size_for_side(side: f32, cells: usize) -> f32 {
    let cells = cells_f32(cells);
    let proportional = side / (cells + BORDER_WIDTH_RATIO * 2.0);
    let minimum_border = (side - 2.0) / cells;
    f32::max(f32::min(proportional, minimum_border), 1.0)
}

fn cell_rect(inner_rect: Rect, cell_size: f32, pos: Position) -> Rect {
    let min = inner_rect.min
        + Vec2::new(
            cell_size * cells_f32(pos.col()),
            cell_size * cells_f32(pos.row()),
        );
    Rect::from_min_size(min, Vec2::splat(cell_size))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cell_at(inner_rect: Rect, cell_size: f32, cells: usize, point: Pos2) -> Option<Position> {
    if !inner_rect.contains(point) {
        return None;
    }
    let offset = (point - inner_rect.min) / cell_size;
    let col = (offset.x.floor() as usize).min(cells - 1);
    let row = (offset.y.floor() as usize).min(cells - 1);
    Some(Position::new(row, col))
}

pub fn show(
    ui: &mut Ui,
    vm: &GridViewModel,
    cell_size: f32,
    action_queue: &mut ActionRequestQueue,
) {
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let grid_theme = GridTheme::from_visuals(visuals);
    let palette = grid_theme.palette_for(visuals);
    let grid_side = grid_side_with_border(cell_size, vm.size);

    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(grid_side), Sense::hover());
    let inner_rect = rect.shrink(border_width(cell_size));
    let hovered = ui
        .ctx()
        .pointer_hover_pos()
        .and_then(|point| cell_at(inner_rect, cell_size, vm.size, point));

    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, palette.border);

    let gap = cell_size * CELL_GAP_RATIO;
    let rounding = cell_size * CELL_ROUNDING_RATIO;
    for row in 0..vm.size {
        for col in 0..vm.size {
            let pos = Position::new(row, col);
            let cell = vm.cell(pos);
            let vs = vm.effective_visual_state(pos, hovered);
            let rect = cell_rect(inner_rect, cell_size, pos);
            let fill_rect = rect.shrink(gap);

            let fill = if cell.active {
                palette.cell_active
            } else {
                palette.cell_inactive
            };
            painter.rect_filled(fill_rect, rounding, fill);
            if vs.intersects(GridVisualState::CROSS) {
                painter.rect_filled(fill_rect, rounding, palette.cross_overlay);
            }
            if let Some(stroke) = outline(vs, palette, cell_size) {
                painter.rect_stroke(fill_rect, rounding, stroke, StrokeKind::Inside);
            }

            let response = ui.interact(rect, ui.id().with(("cell", row, col)), Sense::click());
            if response.clicked() {
                action_queue.request(Action::TapCell(pos));
            }
        }
    }

    if vm.ended {
        draw_win_banner(painter, rect, palette);
    }
}

fn outline(vs: GridVisualState, palette: &GridPalette, cell_size: f32) -> Option<Stroke> {
    let width = f32::max(cell_size * OUTLINE_WIDTH_RATIO, 1.0);
    if vs.intersects(GridVisualState::HINT) {
        Some(Stroke::new(width, palette.outline_hint))
    } else if vs.intersects(GridVisualState::HOVERED) {
        Some(Stroke::new(width, palette.outline_hovered))
    } else {
        None
    }
}

fn draw_win_banner(painter: &Painter, grid_rect: Rect, palette: &GridPalette) {
    let height = grid_rect.height();
    let banner = Rect::from_min_max(
        Pos2::new(grid_rect.left(), grid_rect.top() + height * 0.4),
        Pos2::new(grid_rect.right(), grid_rect.top() + height * 0.6),
    );
    painter.rect_filled(banner, 0.0, palette.banner_bg);

    let center = banner.center();
    let line = banner.height() / 4.0;
    painter.text(
        center - Vec2::new(0.0, line * 0.5),
        Align2::CENTER_CENTER,
        "Solved!",
        FontId::proportional(line * 1.6),
        palette.banner_text,
    );
    painter.text(
        center + Vec2::new(0.0, line * 1.1),
        Align2::CENTER_CENTER,
        "Tap anywhere to continue",
        FontId::proportional(line * 0.7),
        palette.banner_text,
    );
}
