//! Session rules for the Gridlock application.
//!
//! Everything the UI needs that is not rendering lives here:
//!
//! - [`Board`]: the 9×9 grid with eager row/column/box uniqueness checks
//! - [`SessionTimer`]: the elapsed-time state machine with cancellable
//!   tick sources
//! - [`InputFilter`]: the toolkit-independent hook that decides whether a
//!   proposed cell text change may be applied at all
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Digit, Position};
//! use gridlock_game::{Board, RuleViolation};
//!
//! let mut board = Board::new();
//! board.propose_digit(Position::new(0, 0), Digit::D5).unwrap();
//!
//! // A duplicate in the same row is rejected and the cell stays empty.
//! let result = board.propose_digit(Position::new(0, 3), Digit::D5);
//! assert_eq!(result, Err(RuleViolation::DuplicateInRow));
//! assert_eq!(board.cell(Position::new(0, 3)), None);
//! ```

pub mod board;
pub mod input_filter;
pub mod timer;

pub use self::{
    board::{Board, RuleViolation},
    input_filter::{DigitInputFilter, InputDecision, InputFilter},
    timer::{SessionTimer, TickSource, TimerPhase},
};
