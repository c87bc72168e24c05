use eframe::egui::{Context, Id, Modal, Response, RichText, Sides, Ui};

use crate::{
    action::{Action, ActionRequestQueue, PauseChoice},
    state::ModalKind,
};

struct DialogResult {
    should_close: bool,
}

fn show_dialog<Heading, Body, Buttons>(
    ctx: &Context,
    id: Id,
    heading: Heading,
    body: Body,
    buttons: Buttons,
) -> DialogResult
where
    Heading: Into<RichText>,
    Body: FnOnce(&mut Ui),
    Buttons: FnOnce(&mut Ui),
{
    let modal = Modal::new(id).show(ctx, |ui| {
        ui.heading(heading);
        ui.add_space(4.0);

        body(ui);
        ui.add_space(8.0);

        Sides::new().show(ui, |_ui| {}, buttons);
    });

    DialogResult {
        should_close: modal.should_close(),
    }
}

fn request_focus_if_none(ui: &Ui, response: &Response) {
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
}

fn primary_button(ui: &mut Ui, label: &str) -> Response {
    let response = ui.button(label);
    request_focus_if_none(ui, &response);
    response
}

pub(crate) fn show(ctx: &Context, modal: &ModalKind, action_queue: &mut ActionRequestQueue) {
    match modal {
        ModalKind::InvalidInput(violation) => {
            let mut decision = None;
            let DialogResult { should_close } = show_dialog(
                ctx,
                Id::new("invalid_input"),
                "Invalid Input",
                |ui: &mut Ui| {
                    ui.label(violation.to_string());
                },
                |ui: &mut Ui| {
                    if primary_button(ui, "OK").clicked() {
                        decision = Some(Action::DismissInvalidInput);
                        ui.close();
                    }
                },
            );
            // Escape or a click outside acknowledges the error too.
            if should_close {
                decision.get_or_insert(Action::DismissInvalidInput);
            }
            if let Some(action) = decision {
                action_queue.request(action);
            }
        }
        ModalKind::GamePaused => {
            let mut decision = None;
            let DialogResult { should_close } = show_dialog(
                ctx,
                Id::new("game_paused"),
                "Game Paused",
                |ui: &mut Ui| {
                    ui.label("Game paused. Continue or quit?");
                },
                |ui: &mut Ui| {
                    if primary_button(ui, "Continue").clicked() {
                        decision = Some(Action::ResolvePause(PauseChoice::Continue));
                        ui.close();
                    }
                    if ui.button("Quit").clicked() {
                        decision = Some(Action::ResolvePause(PauseChoice::Quit));
                        ui.close();
                    }
                },
            );
            // Dismissing the dialog without choosing counts as Continue.
            if should_close {
                decision.get_or_insert(Action::ResolvePause(PauseChoice::Continue));
            }
            if let Some(action) = decision {
                action_queue.request(action);
            }
        }
    }
}
