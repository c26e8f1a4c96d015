//! Form-field helpers and length bounds shared by the set, card, comment,
//! review and telemetry inputs.

use validator::Validate;

use crate::error::CoreError;

/// Maximum length of a set name.
pub const MAX_SET_NAME_LENGTH: u64 = 100;

/// Maximum length of a flashcard question or answer.
pub const MAX_CARD_TEXT_LENGTH: u64 = 200;

/// Maximum length of a comment body.
pub const MAX_COMMENT_LENGTH: u64 = 200;

/// Maximum length of a review body.
pub const MAX_REVIEW_TEXT_LENGTH: u64 = 500;

/// Maximum length of an author name.
pub const MAX_AUTHOR_LENGTH: u64 = 50;

/// Maximum length of a telemetry event name.
pub const MAX_EVENT_LENGTH: u64 = 100;

/// The only form value that marks a flashcard as hidden.
pub const HIDDEN_FLAG_VALUE: &str = "on";

/// Return the value of a required text field, or `None` if it is absent or empty.
pub fn required_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Normalise an optional text field: empty submissions are stored as absent.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Map the `hidden` form value to a flag. Only the literal `on` is true.
pub fn hidden_flag(value: Option<&str>) -> bool {
    value == Some(HIDDEN_FLAG_VALUE)
}

/// Run `validator` rules on an input and fold any failures into a single
/// [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(|errors| {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        messages.sort();
        CoreError::Validation(messages.join("; "))
    })
}
