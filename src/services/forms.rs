//! Request and response shapes for the account operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{MSG_MALFORMED_REQUEST, MSG_PASSWORD_REQUIRED, MSG_PHONE_NUMBER_REQUIRED};
use crate::errors::{AppError, AppResult};
use crate::validation::{
    check_full_name, check_password_complexity, check_password_length, check_phone_format,
    check_phone_length, require,
};

/// Account registration request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    #[schema(example = "+628123456789")]
    pub phone_number: String,
    #[schema(example = "Budi Santoso")]
    pub full_name: String,
    #[schema(example = "Secret123!", min_length = 6, max_length = 64)]
    pub password: String,
}

impl RegisterRequest {
    /// Trims the password in place, then checks phone length, phone format,
    /// name length, password length and password complexity, in that order.
    pub fn validate(&mut self) -> AppResult<()> {
        self.password = self.password.trim().to_string();

        check_phone_length(&self.phone_number)?;
        check_phone_format(&self.phone_number)?;
        check_full_name(&self.full_name)?;
        check_password_length(&self.password)?;
        check_password_complexity(&self.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RegisterResponse {
    #[schema(example = 1)]
    pub user_id: i32,
}

/// Login request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[schema(example = "+628123456789")]
    pub phone_number: String,
    #[schema(example = "Secret123!")]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> AppResult<()> {
        require(&self.phone_number, MSG_PHONE_NUMBER_REQUIRED)?;
        require(&self.password, MSG_PASSWORD_REQUIRED)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = 1)]
    pub user_id: i32,
    #[schema(example = "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// RFC 3339 expiry of `token`
    #[schema(example = "2024-01-01T01:00:00Z")]
    pub expired_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = "Budi Santoso")]
    pub full_name: String,
    #[schema(example = "+628123456789")]
    pub phone_number: String,
}

/// Profile update request. Both fields overwrite the stored values;
/// an empty field skips its validation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateProfileRequest {
    #[schema(example = "+628987654321")]
    pub phone_number: String,
    #[schema(example = "Budi S.")]
    pub full_name: String,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> AppResult<()> {
        if !self.phone_number.is_empty() {
            check_phone_format(&self.phone_number)?;
        }
        if !self.full_name.is_empty() {
            check_full_name(&self.full_name)?;
        }
        Ok(())
    }
}

/// Parse the account ID taken from a request path.
pub fn parse_user_id(raw: &str) -> AppResult<i32> {
    raw.parse()
        .map_err(|_| AppError::validation(MSG_MALFORMED_REQUEST))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        MSG_FULL_NAME_LENGTH, MSG_PASSWORD_COMPLEXITY, MSG_PASSWORD_LENGTH,
        MSG_PHONE_NUMBER_FORMAT, MSG_PHONE_NUMBER_LENGTH,
    };

    fn register(phone: &str, name: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            phone_number: phone.to_string(),
            full_name: name.to_string(),
            password: password.to_string(),
        }
    }

    fn message(result: AppResult<()>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_register_reports_first_failing_rule() {
        let cases = [
            (register("+62", "ab", "x"), MSG_PHONE_NUMBER_LENGTH),
            (register("0812345678", "ab", "x"), MSG_PHONE_NUMBER_FORMAT),
            (register("+628123456789", "ab", "x"), MSG_FULL_NAME_LENGTH),
            (register("+628123456789", "Budi", "x"), MSG_PASSWORD_LENGTH),
            (register("+628123456789", "Budi", "password"), MSG_PASSWORD_COMPLEXITY),
        ];

        for (mut form, expected) in cases {
            assert_eq!(message(form.validate()), expected);
        }
    }

    #[test]
    fn test_register_accepts_valid_form() {
        let mut form = register("+621234567890", "User123", "Password123!");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_register_trims_password_before_checks() {
        let mut form = register("+628123456789", "Budi", "  Secret1!  ");
        assert!(form.validate().is_ok());
        assert_eq!(form.password, "Secret1!");

        // five characters once trimmed
        let mut short = register("+628123456789", "Budi", "  Ab1!x  ");
        assert_eq!(message(short.validate()), MSG_PASSWORD_LENGTH);
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginRequest {
            phone_number: String::new(),
            password: String::new(),
        };
        assert_eq!(message(form.validate()), "Phone number is required");

        let form = LoginRequest {
            phone_number: "whatever".to_string(),
            password: String::new(),
        };
        assert_eq!(message(form.validate()), "Password is required");
    }

    #[test]
    fn test_update_profile_skips_empty_fields() {
        assert!(UpdateProfileRequest::default().validate().is_ok());

        let form = UpdateProfileRequest {
            phone_number: "0123456789".to_string(),
            full_name: String::new(),
        };
        assert_eq!(message(form.validate()), MSG_PHONE_NUMBER_FORMAT);

        let form = UpdateProfileRequest {
            phone_number: "+628123456789".to_string(),
            full_name: "hi".to_string(),
        };
        assert_eq!(message(form.validate()), MSG_FULL_NAME_LENGTH);
    }

    #[test]
    fn test_update_profile_phone_has_no_length_rule() {
        let form = UpdateProfileRequest {
            phone_number: "+62812345678901234".to_string(),
            full_name: String::new(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_missing_json_fields_default_to_empty() {
        let form: LoginRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(message(form.validate()), "Phone number is required");
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("42"), Ok(42));
        assert_eq!(
            parse_user_id("abc"),
            Err(AppError::validation("Malformat Request"))
        );
        assert!(parse_user_id("").is_err());
    }
}
