use eframe::egui::{Color32, Visuals};

use crate::state::ThemeMode;

/// Fixed colors for one theme mode.
///
/// Only backgrounds, text, and the caret are themed; cell borders keep
/// their colors in both modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Palette {
    pub(crate) window_fill: Color32,
    pub(crate) cell_fill: Color32,
    pub(crate) text: Color32,
    pub(crate) caret: Color32,
}

const LIGHT: Palette = Palette {
    window_fill: Color32::WHITE,
    cell_fill: Color32::WHITE,
    text: Color32::BLACK,
    caret: Color32::BLACK,
};

const DARK: Palette = Palette {
    window_fill: Color32::from_gray(64),
    cell_fill: Color32::BLACK,
    text: Color32::WHITE,
    caret: Color32::WHITE,
};

impl Palette {
    #[must_use]
    pub(crate) const fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

/// Maps a palette onto egui's global visuals: window background, text
/// edit background, text color, and caret.
#[must_use]
pub(crate) fn visuals_for(mode: ThemeMode) -> Visuals {
    let palette = Palette::for_mode(mode);
    let mut visuals = match mode {
        ThemeMode::Light => Visuals::light(),
        ThemeMode::Dark => Visuals::dark(),
    };
    visuals.override_text_color = Some(palette.text);
    visuals.panel_fill = palette.window_fill;
    visuals.window_fill = palette.window_fill;
    visuals.extreme_bg_color = palette.cell_fill;
    visuals.text_cursor.stroke.color = palette.caret;
    visuals
}
