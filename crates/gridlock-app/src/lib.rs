//! Shared library module for the Gridlock app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod app;
pub mod state;
pub mod tick;
pub mod ui;

pub use self::app::GridlockApp;
