use axum::{http::StatusCode, Json};
use regex::Regex;
use serde_json::json;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"errors": errors})))
}

/// Fails on empty strings and on strings made only of whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    match value.trim().is_empty() {
        false => Ok(()),
        true => Err(ValidationError::new("BLANK").with_message(Cow::from("Must not be blank"))),
    }
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let regex = Regex::new(r"^[A-Za-z0-9_.-]{3,64}$").expect("Invalid username regex");
    match regex.is_match(username) {
        true => Ok(()),
        false => Err(ValidationError::new("INVALID_USERNAME").with_message(Cow::from(
            "Username must be 3 to 64 letters, digits, dots, dashes or underscores",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected() {
        assert!(validate_not_blank("Indiranagar").is_ok());
        assert!(validate_not_blank(" Indiranagar ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }

    #[test]
    fn usernames_follow_one_pattern() {
        assert!(validate_username("feed_forward.org-1").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("a b").is_err());
        assert!(validate_username("   ").is_err());
    }
}
