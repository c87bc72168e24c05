use std::time::Instant;

use gridlock_core::{Digit, Position};
use gridlock_game::{DigitInputFilter, InputFilter as _};

use crate::{
    action::{Action, ActionRequestQueue, PauseChoice},
    state::{AppState, ModalKind, UiState},
    tick::{TICK_INTERVAL, TickDriver},
};

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    match action {
        Action::CellEdited { pos, proposed } => cell_edited(app_state, ui_state, pos, &proposed),
        Action::StartTimer => start_timer(app_state, ui_state),
        Action::StopTimer => stop_timer(app_state, ui_state),
        Action::ToggleTheme => {
            app_state.theme = app_state.theme.toggled();
            log::debug!("theme switched to {:?}", app_state.theme);
        }
        Action::DismissInvalidInput => ui_state.active_modal = None,
        Action::ResolvePause(choice) => resolve_pause(app_state, ui_state, choice),
    }
}

fn cell_edited(app_state: &mut AppState, ui_state: &mut UiState, pos: Position, proposed: &str) {
    // Anything the filter rejects is discarded silently, with no modal.
    if !DigitInputFilter.before_change(proposed).is_accept() {
        ui_state.restore_cell_text(pos, &app_state.board);
        return;
    }

    let Some(c) = proposed.chars().next() else {
        // Deleting is always accepted.
        app_state.board.clear(pos);
        return;
    };
    let Some(digit) = Digit::from_char(c) else {
        ui_state.restore_cell_text(pos, &app_state.board);
        return;
    };

    if let Err(violation) = app_state.board.propose_digit(pos, digit) {
        log::debug!("rejected {digit} at {pos}: {violation}");
        // The board already left the cell empty; mirror that in the
        // widget before the modal takes over.
        ui_state.restore_cell_text(pos, &app_state.board);
        ui_state.active_modal = Some(ModalKind::InvalidInput(violation));
    }
}

fn start_timer(app_state: &mut AppState, ui_state: &mut UiState) {
    // Idempotent: a second Start while running hands out no new source,
    // so the existing driver keeps its cadence.
    if let Some(source) = app_state.timer.start() {
        // First fire is immediate, then once per second.
        app_state.timer.tick(&source);
        ui_state.tick_driver = Some(TickDriver::new(source, Instant::now() + TICK_INTERVAL));
        log::info!("timer running at {}", app_state.timer.format_elapsed());
    }
}

fn stop_timer(app_state: &mut AppState, ui_state: &mut UiState) {
    if app_state.timer.stop() {
        ui_state.tick_driver = None;
        ui_state.active_modal = Some(ModalKind::GamePaused);
        log::info!("timer paused at {}", app_state.timer.format_elapsed());
    }
}

fn resolve_pause(app_state: &mut AppState, ui_state: &mut UiState, choice: PauseChoice) {
    ui_state.active_modal = None;
    match choice {
        PauseChoice::Continue => start_timer(app_state, ui_state),
        PauseChoice::Quit => {
            log::info!("quit chosen from pause dialog");
            ui_state.quit_requested = true;
        }
    }
}
