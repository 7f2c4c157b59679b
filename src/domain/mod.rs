mod age;
mod form_submission;
mod full_name;
mod interests;
mod motivation;
mod phone_number;
mod validation;
mod volunteer_email;

pub use age::{Age, AgeError};
pub use form_submission::{FormSubmission, VolunteerApplication};
pub use full_name::FullName;
pub use interests::Interests;
pub use motivation::Motivation;
pub use phone_number::PhoneNumber;
pub use validation::{ValidationError, ValidationResult, validate};
pub use volunteer_email::VolunteerEmail;
