use crate::domain::{FormSubmission, VolunteerApplication};

/// A single rule violated by a submission. `Display` is the message shown to the volunteer.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Full Name is required")]
    MissingFullName,
    #[error("Email Address is required")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Phone Number is required")]
    MissingPhone,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please tell us why you want to volunteer")]
    MissingMotivation,
    #[error("Please select at least one area of interest")]
    NoInterestSelected,
}

/// Every violation found in one validation pass, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult(Vec<ValidationError>);

impl ValidationResult {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Text read out by the polite live region.
    pub fn announcement(&self) -> String {
        format!("Form validation errors: {}", self.messages().join(". "))
    }
}

impl FromIterator<ValidationError> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidationResult {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Run every field rule against `submission`. An empty result means it can be sent.
///
/// The age field is deliberately absent: its range is enforced by the field's
/// native validity, see [`crate::domain::Age`].
pub fn validate(submission: &FormSubmission) -> ValidationResult {
    match VolunteerApplication::try_from(submission.clone()) {
        Ok(_) => ValidationResult::default(),
        Err(errors) => errors,
    }
}
