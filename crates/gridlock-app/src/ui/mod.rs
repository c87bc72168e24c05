pub mod controls;
pub mod dialogs;
pub mod grid;
pub mod theme;
