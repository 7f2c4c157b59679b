use crate::domain::ValidationError;
use validator::Validate;

fn validate_motivation(s: &str) -> Result<(), validator::ValidationError> {
    if s.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// Why the volunteer wants to help, free text.
#[derive(Debug, Validate)]
pub struct Motivation {
    #[validate(custom(function = "validate_motivation"))]
    text: String,
}

impl Motivation {
    pub fn parse(s: String) -> Result<Self, ValidationError> {
        let motivation = Self { text: s };
        match motivation.validate() {
            Ok(_) => Ok(motivation),
            Err(_) => Err(ValidationError::MissingMotivation),
        }
    }
}

impl AsRef<str> for Motivation {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
