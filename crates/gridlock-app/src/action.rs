use std::mem;

use gridlock_core::Position;

pub(crate) mod handler;

// Everything the UI can ask of the application state goes through this
// queue; panels and dialogs never mutate state directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    CellEdited { pos: Position, proposed: String },
    StartTimer,
    StopTimer,
    ToggleTheme,
    DismissInvalidInput,
    ResolvePause(PauseChoice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PauseChoice {
    Continue,
    Quit,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    requests: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.requests.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.requests)
    }
}
