use gridlock_core::Position;
use gridlock_game::{Board, RuleViolation};

use crate::{state::ThemeMode, tick::TickDriver};

// UiState holds ephemeral UI-only state (cell text buffers, the active
// modal, the tick driver). Nothing here survives the window.
#[derive(Debug)]
pub(crate) struct UiState {
    // One text buffer per cell; the widgets edit these directly and the
    // handler writes back the authoritative content after validation.
    pub(crate) cell_text: [String; 81],
    pub(crate) active_modal: Option<ModalKind>,
    pub(crate) tick_driver: Option<TickDriver>,
    pub(crate) applied_theme: Option<ThemeMode>,
    pub(crate) quit_requested: bool,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            cell_text: [const { String::new() }; 81],
            active_modal: None,
            tick_driver: None,
            applied_theme: None,
            quit_requested: false,
        }
    }

    // Rewrites a cell's buffer from the board, discarding whatever the
    // widget proposed.
    pub(crate) fn restore_cell_text(&mut self, pos: Position, board: &Board) {
        self.cell_text[pos.index()] = board
            .cell(pos)
            .map(|digit| digit.to_string())
            .unwrap_or_default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModalKind {
    InvalidInput(RuleViolation),
    GamePaused,
}
