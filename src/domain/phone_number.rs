use crate::domain::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::Validate;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("Invalid phone pattern"));

fn validate_phone_pattern(s: &str) -> Result<(), validator::ValidationError> {
    if !PHONE_PATTERN.is_match(s) {
        return Err(validator::ValidationError::new("phone"));
    }
    Ok(())
}

/// A phone number with all whitespace removed.
#[derive(Debug, Validate)]
pub struct PhoneNumber {
    #[validate(custom(function = "validate_phone_pattern"))]
    number: String,
}

impl PhoneNumber {
    pub fn parse(s: String) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::MissingPhone);
        }
        let number = Self {
            number: s.chars().filter(|c| !c.is_whitespace()).collect(),
        };
        match number.validate() {
            Ok(_) => Ok(number),
            Err(_) => Err(ValidationError::InvalidPhone),
        }
    }

    /// Live input mask applied on every keystroke: digits only, at most `max_digits` of them.
    pub fn mask(input: &str, max_digits: usize) -> String {
        input
            .chars()
            .filter(char::is_ascii_digit)
            .take(max_digits)
            .collect()
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.number
    }
}
