use crate::domain::ValidationError;
use std::collections::BTreeSet;
use validator::Validate;

/// Areas of interest ticked on the form. At least one is required.
#[derive(Debug, Validate)]
pub struct Interests {
    #[validate(length(min = 1))]
    tags: BTreeSet<String>,
}

impl Interests {
    pub fn parse(tags: BTreeSet<String>) -> Result<Self, ValidationError> {
        let interests = Self { tags };
        match interests.validate() {
            Ok(_) => Ok(interests),
            Err(_) => Err(ValidationError::NoInterestSelected),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}
