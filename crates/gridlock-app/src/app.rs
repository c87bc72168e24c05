//! Gridlock desktop application UI.
//!
//! # Design Notes
//! - One 9x9 grid of single-character text fields with live rule checks.
//! - Timer and theme controls in a top row; violations surface as modals.
//! - All state mutation flows through the action queue and its handler.

use std::time::Instant;

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, TopBottomPanel, ViewportCommand},
};

use crate::{
    action::{self, ActionRequestQueue},
    state::{AppState, UiState},
    ui,
};

#[derive(Debug)]
pub struct GridlockApp {
    app_state: AppState,
    ui_state: UiState,
}

impl GridlockApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self {
            app_state: AppState::new(),
            ui_state: UiState::new(),
        }
    }

    // The periodic tick is dispatched here, on the UI thread, so it can
    // never race input handling or rendering.
    fn drive_timer(&mut self) {
        if let Some(driver) = &mut self.ui_state.tick_driver {
            driver.poll(Instant::now(), &mut self.app_state.timer);
        }
    }

    fn apply_theme(&mut self, ctx: &Context) {
        if self.ui_state.applied_theme != Some(self.app_state.theme) {
            ctx.set_visuals(ui::theme::visuals_for(self.app_state.theme));
            self.ui_state.applied_theme = Some(self.app_state.theme);
        }
    }

    fn schedule_next_tick(&self, ctx: &Context) {
        if let Some(driver) = &self.ui_state.tick_driver {
            ctx.request_repaint_after(driver.until_next_fire(Instant::now()));
        }
    }
}

impl App for GridlockApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        self.drive_timer();
        self.apply_theme(ctx);

        let controls_vm = ui::controls::ControlsViewModel::new(&self.app_state);
        TopBottomPanel::top("controls").show(ctx, |ui| {
            ui::controls::show(ui, &controls_vm, &mut action_queue);
        });

        CentralPanel::default().show(ctx, |ui| {
            ui::grid::show(ui, &mut self.ui_state.cell_text, &mut action_queue);
        });

        if let Some(modal) = &self.ui_state.active_modal {
            ui::dialogs::show(ctx, modal, &mut action_queue);
        }

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        // The pause dialog only reports the user's decision; terminating
        // the process is decided here, at the top level.
        if self.ui_state.quit_requested {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        self.schedule_next_tick(ctx);
    }
}
