//! Interprets the answer typed at the organization menu prompt.

use thiserror::Error;

/// What the user asked for at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// `q` or `Q`.
    Quit,
    /// Zero-based index into the menu's group list.
    Group(usize),
}

/// Error type for menu input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Non-numeric input, or a number outside `1..=count`.
    #[error("Invalid choice. Please enter a number between 1 and {count}.")]
    InvalidChoice { input: String, count: usize },
}

/// Parses a menu answer against a menu of `count` entries.
///
/// Surrounding whitespace is ignored.  Menu numbers are one-based; the
/// returned [`Selection::Group`] index is zero-based.
///
/// # Errors
///
/// Returns [`SelectionError::InvalidChoice`] when the input is neither a
/// quit command nor a number in `1..=count`.
pub fn parse_selection(input: &str, count: usize) -> Result<Selection, SelectionError> {
    let input = input.trim();
    if input == "q" || input == "Q" {
        return Ok(Selection::Quit);
    }

    match input.parse::<usize>() {
        Ok(choice) if (1..=count).contains(&choice) => Ok(Selection::Group(choice - 1)),
        _ => Err(SelectionError::InvalidChoice {
            input: input.to_string(),
            count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_in_either_case() {
        assert_eq!(parse_selection("q", 3), Ok(Selection::Quit));
        assert_eq!(parse_selection("Q\n", 3), Ok(Selection::Quit));
    }

    #[test]
    fn test_valid_number_maps_to_zero_based_index() {
        assert_eq!(parse_selection("1", 3), Ok(Selection::Group(0)));
        assert_eq!(parse_selection("  3 \r\n", 3), Ok(Selection::Group(2)));
    }

    #[test]
    fn test_out_of_range_numbers_are_rejected() {
        // Arrange / Act
        let too_high = parse_selection("9", 3);
        let zero = parse_selection("0", 3);
        let negative = parse_selection("-1", 3);

        // Assert
        assert!(too_high.is_err());
        assert!(zero.is_err());
        assert!(negative.is_err());
    }

    #[test]
    fn test_non_numeric_input_is_rejected() {
        assert!(parse_selection("abc", 3).is_err());
        assert!(parse_selection("", 3).is_err());
        assert!(parse_selection("quit", 3).is_err());
        assert!(parse_selection("2abc", 3).is_err());
    }

    #[test]
    fn test_error_message_names_valid_range() {
        let err = parse_selection("9", 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid choice. Please enter a number between 1 and 3."
        );
    }

    #[test]
    fn test_empty_menu_rejects_every_number() {
        assert!(parse_selection("1", 0).is_err());
    }
}
