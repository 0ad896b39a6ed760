//! Field validation rules shared by the request forms.
//!
//! Each rule returns the first failure as a `Validation` error carrying the
//! client-facing message. Lengths are counted in characters.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateLength;

use crate::config::{
    MAX_FULL_NAME_LENGTH, MAX_PASSWORD_LENGTH, MAX_PHONE_NUMBER_LENGTH, MIN_FULL_NAME_LENGTH,
    MIN_PASSWORD_LENGTH, MIN_PHONE_NUMBER_LENGTH, MSG_FULL_NAME_LENGTH, MSG_PASSWORD_COMPLEXITY,
    MSG_PASSWORD_LENGTH, MSG_PHONE_NUMBER_FORMAT, MSG_PHONE_NUMBER_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// `+62` followed by one or more ASCII digits
static PHONE_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+62[0-9]+$").unwrap());

static DIGIT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());
static UPPERCASE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());
/// Anything outside the ASCII word class.
static SPECIAL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9A-Za-z_]").unwrap());

fn within(value: &str, min: usize, max: usize) -> bool {
    value.validate_length(Some(min as u64), Some(max as u64), None)
}

/// Phone number must be 10 to 13 characters long.
pub fn check_phone_length(phone_number: &str) -> AppResult<()> {
    if within(phone_number, MIN_PHONE_NUMBER_LENGTH, MAX_PHONE_NUMBER_LENGTH) {
        Ok(())
    } else {
        Err(AppError::validation(MSG_PHONE_NUMBER_LENGTH))
    }
}

pub fn check_phone_format(phone_number: &str) -> AppResult<()> {
    if PHONE_NUMBER_PATTERN.is_match(phone_number) {
        Ok(())
    } else {
        Err(AppError::validation(MSG_PHONE_NUMBER_FORMAT))
    }
}

pub fn check_full_name(full_name: &str) -> AppResult<()> {
    if within(full_name, MIN_FULL_NAME_LENGTH, MAX_FULL_NAME_LENGTH) {
        Ok(())
    } else {
        Err(AppError::validation(MSG_FULL_NAME_LENGTH))
    }
}

pub fn check_password_length(password: &str) -> AppResult<()> {
    if within(password, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH) {
        Ok(())
    } else {
        Err(AppError::validation(MSG_PASSWORD_LENGTH))
    }
}

/// Password needs a digit, an uppercase ASCII letter and a special
/// character, checked in that order.
pub fn check_password_complexity(password: &str) -> AppResult<()> {
    let complex = DIGIT_PATTERN.is_match(password)
        && UPPERCASE_PATTERN.is_match(password)
        && SPECIAL_PATTERN.is_match(password);

    if complex {
        Ok(())
    } else {
        Err(AppError::validation(MSG_PASSWORD_COMPLEXITY))
    }
}

/// Reject an empty value with the given message.
pub fn require(value: &str, message: &str) -> AppResult<()> {
    if value.is_empty() {
        Err(AppError::validation(message))
    } else {
        Ok(())
    }
}
