//! Pre-validation of raw text input, independent of any UI toolkit.

/// Whether a proposed text change may be applied to a cell widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDecision {
    /// Apply the change.
    Accept,
    /// Discard the change silently and keep the previous text.
    Reject,
}

impl InputDecision {
    /// Returns `true` for [`InputDecision::Accept`].
    #[must_use]
    pub fn is_accept(self) -> bool {
        self == Self::Accept
    }
}

/// Hook consulted before a cell's text change is applied.
///
/// The shell calls this with the full proposed content of the widget.
/// Rejected changes never reach the board validator; they are discarded
/// with no user feedback.
pub trait InputFilter {
    /// Decides whether `proposed` may become the cell's new content.
    fn before_change(&self, proposed: &str) -> InputDecision;
}

/// The filter for Sudoku cells: empty (deleting) is always allowed,
/// otherwise exactly one character in `1..=9`.
///
/// # Examples
///
/// ```
/// use gridlock_game::{DigitInputFilter, InputDecision, InputFilter};
///
/// let filter = DigitInputFilter;
/// assert_eq!(filter.before_change("5"), InputDecision::Accept);
/// assert_eq!(filter.before_change(""), InputDecision::Accept);
/// assert_eq!(filter.before_change("0"), InputDecision::Reject);
/// assert_eq!(filter.before_change("57"), InputDecision::Reject);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitInputFilter;

impl InputFilter for DigitInputFilter {
    fn before_change(&self, proposed: &str) -> InputDecision {
        let mut chars = proposed.chars();
        match (chars.next(), chars.next()) {
            (None, _) => InputDecision::Accept,
            (Some(c), None) if ('1'..='9').contains(&c) => InputDecision::Accept,
            _ => InputDecision::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digits_are_accepted() {
        let filter = DigitInputFilter;
        for c in '1'..='9' {
            assert_eq!(filter.before_change(&c.to_string()), InputDecision::Accept);
        }
    }

    #[test]
    fn deleting_is_always_accepted() {
        assert_eq!(DigitInputFilter.before_change(""), InputDecision::Accept);
    }

    #[test]
    fn zero_letters_and_symbols_are_rejected() {
        let filter = DigitInputFilter;
        for text in ["0", "a", "Z", " ", ".", "-1"] {
            assert_eq!(filter.before_change(text), InputDecision::Reject, "{text:?}");
        }
    }

    #[test]
    fn multi_character_paste_is_rejected_outright() {
        let filter = DigitInputFilter;
        // Even when every character would be valid on its own.
        for text in ["12", "57", "999", "5 "] {
            assert_eq!(filter.before_change(text), InputDecision::Reject, "{text:?}");
        }
    }
}
