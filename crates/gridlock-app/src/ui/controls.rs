use eframe::egui::{RichText, Ui};
use egui_extras::{Size, StripBuilder};

use crate::{
    action::{Action, ActionRequestQueue},
    state::AppState,
};

const TIMER_TEXT_SIZE: f32 = 18.0;
const BUTTON_ROW_WIDTH: f32 = 320.0;

#[derive(Debug, Clone)]
pub(crate) struct ControlsViewModel {
    timer_text: String,
    theme_label: &'static str,
}

impl ControlsViewModel {
    #[must_use]
    pub(crate) fn new(app_state: &AppState) -> Self {
        Self {
            timer_text: format!("Time: {}", app_state.timer.format_elapsed()),
            theme_label: app_state.theme.toggle_button_label(),
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &ControlsViewModel, action_queue: &mut ActionRequestQueue) {
    ui.add_space(6.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(&vm.timer_text).strong().size(TIMER_TEXT_SIZE));
    });
    ui.add_space(6.0);

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(BUTTON_ROW_WIDTH))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                ui.horizontal(|ui| {
                    if ui.button("Start").clicked() {
                        action_queue.request(Action::StartTimer);
                    }
                    if ui.button("Stop").clicked() {
                        action_queue.request(Action::StopTimer);
                    }
                    if ui.button(vm.theme_label).clicked() {
                        action_queue.request(Action::ToggleTheme);
                    }
                });
            });
            strip.empty();
        });
    ui.add_space(6.0);
}
