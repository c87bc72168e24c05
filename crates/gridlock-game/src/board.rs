//! The 9×9 board and its uniqueness validator.

use gridlock_core::{Digit, Position};

/// Why a proposed digit was rejected.
///
/// Checks run in a fixed row → column → box order, and only the first
/// violation found is reported even when several constraints are violated
/// at once. Each variant's display text is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RuleViolation {
    /// The digit already exists in the same row.
    #[display("This number already exists in this row.")]
    DuplicateInRow,
    /// The digit already exists in the same column.
    #[display("This number already exists in this column.")]
    DuplicateInColumn,
    /// The digit already exists in the same 3×3 box.
    #[display("This number already exists in this 3x3 box.")]
    DuplicateInBox,
}

/// A Sudoku board holding at most one digit per cell.
///
/// The board validates eagerly: [`propose_digit`](Self::propose_digit)
/// either commits the digit or leaves the target cell empty, so at every
/// settled moment no row, column, or 3×3 box contains two equal digits.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, Position};
/// use gridlock_game::Board;
///
/// let mut board = Board::new();
/// board.propose_digit(Position::new(2, 2), Digit::D9).unwrap();
/// assert_eq!(board.cell(Position::new(2, 2)), Some(Digit::D9));
///
/// board.clear(Position::new(2, 2));
/// assert_eq!(board.cell(Position::new(2, 2)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [const { None }; 81],
        }
    }

    /// Returns the digit at the given position, if any.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Proposes a digit for the given cell.
    ///
    /// The target slot is emptied before validation so a replaced value
    /// cannot survive a failed check: on rejection the cell ends empty
    /// regardless of its prior content, and the rejected digit is never
    /// observable by other reads.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint in row → column → box order.
    pub fn propose_digit(&mut self, pos: Position, digit: Digit) -> Result<(), RuleViolation> {
        self.cells[pos.index()] = None;

        if self.any_peer_holds(pos.row_peers(), digit) {
            return Err(RuleViolation::DuplicateInRow);
        }
        if self.any_peer_holds(pos.col_peers(), digit) {
            return Err(RuleViolation::DuplicateInColumn);
        }
        if self.any_peer_holds(pos.box_peers(), digit) {
            return Err(RuleViolation::DuplicateInBox);
        }

        self.cells[pos.index()] = Some(digit);
        Ok(())
    }

    /// Clears the cell. Deleting is always accepted, whatever the cell held.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    fn any_peer_holds(&self, mut peers: impl Iterator<Item = Position>, digit: Digit) -> bool {
        peers.any(|peer| self.cells[peer.index()] == Some(digit))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn duplicate_in_row_is_rejected_and_cell_ends_empty() {
        let mut board = Board::new();
        board.propose_digit(Position::new(0, 0), Digit::D5).unwrap();

        let result = board.propose_digit(Position::new(0, 3), Digit::D5);
        assert_eq!(result, Err(RuleViolation::DuplicateInRow));
        assert_eq!(board.cell(Position::new(0, 3)), None);
        assert_eq!(board.cell(Position::new(0, 0)), Some(Digit::D5));
    }

    #[test]
    fn duplicate_in_column_is_rejected() {
        let mut board = Board::new();
        board.propose_digit(Position::new(1, 4), Digit::D2).unwrap();

        let result = board.propose_digit(Position::new(7, 4), Digit::D2);
        assert_eq!(result, Err(RuleViolation::DuplicateInColumn));
        assert_eq!(board.cell(Position::new(7, 4)), None);
    }

    #[test]
    fn duplicate_in_box_is_rejected() {
        let mut board = Board::new();
        board.propose_digit(Position::new(0, 0), Digit::D7).unwrap();

        // (1,1) shares the top-left box with (0,0) but neither a row nor
        // a column, so only the box check can fire.
        let result = board.propose_digit(Position::new(1, 1), Digit::D7);
        assert_eq!(result, Err(RuleViolation::DuplicateInBox));
        assert_eq!(board.cell(Position::new(1, 1)), None);
    }

    #[test]
    fn row_check_wins_when_several_constraints_are_violated() {
        let mut board = Board::new();
        // Same row and same box as the proposal target.
        board.propose_digit(Position::new(0, 1), Digit::D3).unwrap();

        let result = board.propose_digit(Position::new(0, 0), Digit::D3);
        assert_eq!(result, Err(RuleViolation::DuplicateInRow));
    }

    #[test]
    fn column_check_runs_before_box_check() {
        let mut board = Board::new();
        // Same column and same box, but a different row.
        board.propose_digit(Position::new(1, 0), Digit::D8).unwrap();

        let result = board.propose_digit(Position::new(0, 0), Digit::D8);
        assert_eq!(result, Err(RuleViolation::DuplicateInColumn));
    }

    #[test]
    fn distinct_digits_coexist_in_a_house() {
        let mut board = Board::new();
        board.propose_digit(Position::new(0, 0), Digit::D1).unwrap();
        board.propose_digit(Position::new(0, 1), Digit::D2).unwrap();
        board.propose_digit(Position::new(1, 0), Digit::D3).unwrap();

        assert_eq!(board.cell(Position::new(0, 1)), Some(Digit::D2));
        assert_eq!(board.cell(Position::new(1, 0)), Some(Digit::D3));
    }

    #[test]
    fn same_digit_far_apart_is_accepted() {
        let mut board = Board::new();
        board.propose_digit(Position::new(0, 0), Digit::D4).unwrap();
        // Different row, column, and box.
        board.propose_digit(Position::new(4, 4), Digit::D4).unwrap();
        assert_eq!(board.cell(Position::new(4, 4)), Some(Digit::D4));
    }

    #[test]
    fn replacing_a_digit_with_itself_is_accepted() {
        // The slot is emptied before validation, so a cell never
        // conflicts with its own previous content.
        let mut board = Board::new();
        board.propose_digit(Position::new(5, 5), Digit::D6).unwrap();
        board.propose_digit(Position::new(5, 5), Digit::D6).unwrap();
        assert_eq!(board.cell(Position::new(5, 5)), Some(Digit::D6));
    }

    #[test]
    fn failed_replacement_leaves_the_cell_empty() {
        let mut board = Board::new();
        board.propose_digit(Position::new(0, 0), Digit::D5).unwrap();
        board.propose_digit(Position::new(0, 3), Digit::D6).unwrap();

        // Replacing the 6 with a conflicting 5 empties the cell; the old
        // 6 does not come back.
        let result = board.propose_digit(Position::new(0, 3), Digit::D5);
        assert_eq!(result, Err(RuleViolation::DuplicateInRow));
        assert_eq!(board.cell(Position::new(0, 3)), None);
    }

    #[test]
    fn clearing_is_always_accepted() {
        let mut board = Board::new();
        board.clear(Position::new(3, 3));
        assert_eq!(board.cell(Position::new(3, 3)), None);

        board.propose_digit(Position::new(3, 3), Digit::D1).unwrap();
        board.clear(Position::new(3, 3));
        assert_eq!(board.cell(Position::new(3, 3)), None);
    }

    fn house_has_duplicates(board: &Board, cells: impl Iterator<Item = Position>) -> bool {
        let mut seen = [false; 10];
        for pos in cells {
            if let Some(digit) = board.cell(pos) {
                let value = digit.value() as usize;
                if seen[value] {
                    return true;
                }
                seen[value] = true;
            }
        }
        false
    }

    fn board_is_consistent(board: &Board) -> bool {
        for i in 0..9 {
            let row = (0..9).map(move |col| Position::new(i, col));
            let col = (0..9).map(move |row| Position::new(row, i));
            let origin = Position::new(i / 3 * 3, i % 3 * 3);
            let boxed = (0..9).map(move |j| {
                Position::new(origin.row() + j / 3, origin.col() + j % 3)
            });
            if house_has_duplicates(board, row)
                || house_has_duplicates(board, col)
                || house_has_duplicates(board, boxed)
            {
                return false;
            }
        }
        true
    }

    proptest! {
        // Core invariant: whatever sequence of proposals and clears is
        // thrown at the board, no house ever holds two equal digits.
        #[test]
        fn no_house_holds_duplicates_after_any_input_sequence(
            ops in prop::collection::vec((0u8..9, 0u8..9, 0u8..10), 0..200),
        ) {
            let mut board = Board::new();
            for (row, col, value) in ops {
                let pos = Position::new(row, col);
                match Digit::try_from_value(value) {
                    Some(digit) => {
                        let _ = board.propose_digit(pos, digit);
                    }
                    None => board.clear(pos),
                }
            }
            prop_assert!(board_is_consistent(&board));
        }
    }
}
