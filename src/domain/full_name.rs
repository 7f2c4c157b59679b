use crate::domain::ValidationError;
use validator::Validate;

fn validate_not_blank(s: &str) -> Result<(), validator::ValidationError> {
    if s.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Validate)]
pub struct FullName {
    #[validate(custom(function = "validate_not_blank"))]
    name: String,
}

impl FullName {
    pub fn parse(s: String) -> Result<Self, ValidationError> {
        let name = Self { name: s };
        match name.validate() {
            Ok(_) => Ok(name),
            Err(_) => Err(ValidationError::MissingFullName),
        }
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}
