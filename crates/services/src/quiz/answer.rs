//! Answer checking for both modes.

/// Multiple choice: exact, case-sensitive match.
#[must_use]
pub fn is_correct_choice(selected: &str, expected: &str) -> bool {
    selected == expected
}

/// Typing practice: case-insensitive match after trimming the submission.
///
/// Returns `None` when the submission is blank; such input is not an answer.
/// Inner whitespace and punctuation must match as written.
#[must_use]
pub fn evaluate_typed(submitted: &str, expected: &str) -> Option<bool> {
    let trimmed = submitted.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase() == expected.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_is_case_sensitive() {
        assert!(is_correct_choice("Milk", "Milk"));
        assert!(!is_correct_choice("milk", "Milk"));
        assert!(!is_correct_choice("Milk ", "Milk"));
    }

    #[test]
    fn typed_answer_ignores_case_and_outer_whitespace() {
        assert_eq!(evaluate_typed("  MILK  ", "Milk"), Some(true));
        assert_eq!(evaluate_typed("corn", "Corn"), Some(true));
        assert_eq!(evaluate_typed("Corn ", "Corn"), Some(true));
        assert_eq!(evaluate_typed("milkk", "Milk"), Some(false));
    }

    #[test]
    fn typed_answer_keeps_inner_whitespace() {
        assert_eq!(evaluate_typed("ice cream", "Ice Cream"), Some(true));
        assert_eq!(evaluate_typed("ice  cream", "Ice Cream"), Some(false));
        assert_eq!(evaluate_typed("icecream", "Ice Cream"), Some(false));
    }

    #[test]
    fn blank_typed_answer_is_not_evaluated() {
        assert_eq!(evaluate_typed("", "Corn"), None);
        assert_eq!(evaluate_typed(" \t\n", "Corn"), None);
    }
}
