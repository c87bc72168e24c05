use eframe::egui::{
    Align, Color32, FontId, Grid, Painter, Rect, Stroke, StrokeKind, TextEdit, Ui, Vec2,
};
use egui_extras::{Size, StripBuilder};
use gridlock_core::Position;

use crate::action::{Action, ActionRequestQueue};

const GRID_CELLS: f32 = 9.0;
const THIN_BORDER_WIDTH: f32 = 1.0;
const THICK_BORDER_WIDTH: f32 = 3.0;
const OUTER_BORDER_WIDTH: f32 = 2.0;

// Border colors are not themed; only cell backgrounds, text, and the
// caret follow the palette.
const THIN_BORDER_COLOR: Color32 = Color32::LIGHT_GRAY;
const SEPARATOR_COLOR: Color32 = Color32::BLACK;

pub(crate) fn show(ui: &mut Ui, cell_text: &mut [String; 81], action_queue: &mut ActionRequestQueue) {
    let grid_side = ui.available_size().min_elem();

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(grid_side))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(grid_side))
                    .size(Size::remainder())
                    .horizontal(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            draw_cells(ui, cell_text, grid_side / GRID_CELLS, action_queue);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
        });
}

fn draw_cells(
    ui: &mut Ui,
    cell_text: &mut [String; 81],
    cell_size: f32,
    action_queue: &mut ActionRequestQueue,
) {
    ui.spacing_mut().item_spacing = Vec2::ZERO;

    let grid = Grid::new(ui.id().with("board"))
        .spacing((0.0, 0.0))
        .min_col_width(cell_size)
        .min_row_height(cell_size)
        .show(ui, |ui| {
            for row in 0..9 {
                for col in 0..9 {
                    let pos = Position::new(row, col);
                    let text = &mut cell_text[pos.index()];
                    let response = ui.add(
                        TextEdit::singleline(text)
                            .horizontal_align(Align::Center)
                            .vertical_align(Align::Center)
                            .font(FontId::proportional(cell_size * 0.5))
                            .desired_width(cell_size)
                            .min_size(Vec2::splat(cell_size)),
                    );
                    if response.changed() {
                        action_queue.request(Action::CellEdited {
                            pos,
                            proposed: text.clone(),
                        });
                    }
                    draw_cell_borders(ui.painter(), response.rect, row, col);
                }
                ui.end_row();
            }
        });

    ui.painter().rect_stroke(
        grid.response.rect,
        0.0,
        Stroke::new(OUTER_BORDER_WIDTH, SEPARATOR_COLOR),
        StrokeKind::Inside,
    );
}

// Only the top/left of each subsequent 3x3 band is thickened; the
// boxes deliberately do not get full outlines.
fn draw_cell_borders(painter: &Painter, rect: Rect, row: u8, col: u8) {
    painter.rect_stroke(
        rect,
        0.0,
        Stroke::new(THIN_BORDER_WIDTH, THIN_BORDER_COLOR),
        StrokeKind::Inside,
    );

    let thick = Stroke::new(THICK_BORDER_WIDTH, SEPARATOR_COLOR);
    if row % 3 == 0 && row != 0 {
        painter.line_segment([rect.left_top(), rect.right_top()], thick);
    }
    if col % 3 == 0 && col != 0 {
        painter.line_segment([rect.left_top(), rect.left_bottom()], thick);
    }
}
