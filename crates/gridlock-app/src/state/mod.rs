mod app_state;
mod ui_state;

pub(crate) use self::{
    app_state::{AppState, ThemeMode},
    ui_state::{ModalKind, UiState},
};
