use crate::domain::FormSubmission;
use crate::view::AnnouncementId;
use uuid::Uuid;

/// Everything that can happen to the volunteer form, from the page or from a timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The submit button was pressed; field values are read from the view.
    SubmitRequested,
    Submit(FormSubmission),
    PhoneInput(String),
    AgeInput(String),
    SubmissionDelivered { attempt_id: Uuid },
    AnnouncementExpired(AnnouncementId),
}
