//! Field validation for candidate user records.

use crate::error::AppError;
use crate::users::User;

const MSG_USER_REQUIRED: &str = "User is required.";
const MSG_NAME_REQUIRED: &str = "User name is required.";
const MSG_NAME_TOO_SHORT: &str = "User name must be at least 2 characters.";
const MSG_AGE_OUT_OF_RANGE: &str = "User age must be between 0 and 120";

/// Minimum name length, counted in chars on the untrimmed string.
const MIN_NAME_CHARS: usize = 2;

/// Validate a candidate record, returning it when acceptable.
///
/// Checks run in order and stop at the first failure. No side effects.
pub fn validate(candidate: Option<User>) -> Result<User, AppError> {
    let user = candidate.ok_or(AppError::Validation(MSG_USER_REQUIRED))?;
    if user.name.trim().is_empty() {
        return Err(AppError::Validation(MSG_NAME_REQUIRED));
    }
    if user.name.chars().count() < MIN_NAME_CHARS {
        return Err(AppError::Validation(MSG_NAME_TOO_SHORT));
    }
    if !(0..120).contains(&user.age) {
        return Err(AppError::Validation(MSG_AGE_OUT_OF_RANGE));
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, age: i32) -> Option<User> {
        Some(User {
            name: name.to_string(),
            age,
        })
    }

    fn message(candidate: Option<User>) -> String {
        validate(candidate).unwrap_err().to_string()
    }

    #[test]
    fn absent_candidate_is_required() {
        assert_eq!(message(None), "User is required.");
    }

    #[test]
    fn empty_name_is_required() {
        assert_eq!(message(candidate("", 30)), "User name is required.");
    }

    #[test]
    fn whitespace_name_is_required() {
        assert_eq!(message(candidate("   ", 30)), "User name is required.");
    }

    #[test]
    fn one_char_name_is_too_short() {
        assert_eq!(
            message(candidate("A", 5)),
            "User name must be at least 2 characters."
        );
    }

    #[test]
    fn negative_age_is_out_of_range() {
        assert_eq!(
            message(candidate("Mia", -1)),
            "User age must be between 0 and 120"
        );
    }

    #[test]
    fn age_120_is_out_of_range() {
        assert_eq!(
            message(candidate("Mia", 120)),
            "User age must be between 0 and 120"
        );
    }

    #[test]
    fn boundary_ages_are_accepted() {
        assert!(validate(candidate("Mia", 0)).is_ok());
        assert!(validate(candidate("Mia", 119)).is_ok());
    }

    #[test]
    fn valid_candidate_is_returned() {
        let user = validate(candidate("Mia", 30)).unwrap();
        assert_eq!(user.name, "Mia");
        assert_eq!(user.age, 30);
    }

    #[test]
    fn name_with_leading_space_counts_untrimmed_chars() {
        // " A" is two chars, so it clears the length check.
        assert!(validate(candidate(" A", 30)).is_ok());
    }
}
