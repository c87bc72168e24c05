use gridlock_game::{Board, SessionTimer};

// AppState holds the session proper (board + timer + theme). It lives for
// the whole process and is owned by the top-level controller.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) board: Board,
    pub(crate) timer: SessionTimer,
    pub(crate) theme: ThemeMode,
}

impl AppState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            board: Board::new(),
            timer: SessionTimer::new(),
            theme: ThemeMode::Light,
        }
    }
}

/// Which of the two fixed palettes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub(crate) fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    // The control is labeled with the mode it switches to, not the
    // current one.
    #[must_use]
    pub(crate) fn toggle_button_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Switch to Dark Mode",
            ThemeMode::Dark => "Switch to Light Mode",
        }
    }
}
