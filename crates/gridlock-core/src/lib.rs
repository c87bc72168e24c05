//! Fundamental Sudoku types for the Gridlock application.
//!
//! This crate provides the two value types everything else is built on:
//!
//! - [`Digit`]: type-safe representation of Sudoku digits 1-9
//! - [`Position`]: a (row, column) board coordinate with 3×3 box
//!   arithmetic and peer iteration
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Digit, Position};
//!
//! let pos = Position::new(4, 7);
//! assert_eq!(pos.box_origin(), Position::new(3, 6));
//!
//! // Peers never include the cell itself.
//! assert_eq!(pos.row_peers().count(), 8);
//! assert!(pos.row_peers().all(|p| p != pos));
//!
//! assert_eq!(Digit::from_char('5'), Some(Digit::D5));
//! assert_eq!(Digit::from_char('0'), None);
//! ```

pub mod digit;
pub mod position;

pub use self::{digit::Digit, position::Position};
