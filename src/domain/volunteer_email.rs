use crate::domain::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::Validate;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern"));

fn validate_email_pattern(s: &str) -> Result<(), validator::ValidationError> {
    if !EMAIL_PATTERN.is_match(s) {
        return Err(validator::ValidationError::new("email"));
    }
    Ok(())
}

#[derive(Debug, Validate)]
pub struct VolunteerEmail {
    #[validate(custom(function = "validate_email_pattern"))]
    email: String,
}

impl VolunteerEmail {
    pub fn parse(s: String) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        let email = Self { email: s };
        match email.validate() {
            Ok(_) => Ok(email),
            Err(_) => Err(ValidationError::InvalidEmail),
        }
    }
}

impl AsRef<str> for VolunteerEmail {
    fn as_ref(&self) -> &str {
        &self.email
    }
}
