//! The rendering surface the form controller draws on.
use crate::domain::{AgeError, FormSubmission, ValidationError};
use std::sync::{Arc, Mutex, MutexGuard};

/// Identifies one polite live region so it can be removed once read out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnouncementId(pub u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub loading: bool,
    pub label: String,
}

pub trait FormView {
    /// Current value of every field, multi-valued interests included.
    fn read_fields(&self) -> FormSubmission;
    /// Clear every field value along with the age field's validity message.
    fn reset_fields(&mut self);
    fn set_phone_value(&mut self, value: &str);
    fn set_age_value(&mut self, value: Option<i64>);

    fn clear_errors(&mut self);
    /// Insert an error element right before the submit control.
    fn render_error(&mut self, error: &ValidationError);
    fn announce(&mut self, id: AnnouncementId, message: &str);
    fn remove_announcement(&mut self, id: AnnouncementId);

    fn set_submit_control(&mut self, control: &SubmitControl);

    /// Hide the form and reveal the success presentation.
    fn show_success(&mut self);
    fn scroll_success_into_view(&mut self);

    /// Native constraint message of the age field; `None` marks it valid.
    fn set_age_validity(&mut self, error: Option<&AgeError>);
    /// Surface the age constraint when it blocks a submit.
    fn report_age_validity(&mut self, error: &AgeError);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormNode {
    Fields,
    Error(String),
    SubmitControl,
}

/// Plain data behind [`InMemoryView`].
#[derive(Debug, Clone)]
pub struct Document {
    pub fields: FormSubmission,
    pub form_children: Vec<FormNode>,
    pub submit_control: SubmitControl,
    pub form_hidden: bool,
    pub success_hidden: bool,
    pub success_scrolled_into_view: bool,
    pub live_regions: Vec<(AnnouncementId, String)>,
    pub age_validity: Option<String>,
    pub reported_validity: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            fields: FormSubmission::default(),
            form_children: vec![FormNode::Fields, FormNode::SubmitControl],
            submit_control: SubmitControl::default(),
            form_hidden: false,
            success_hidden: true,
            success_scrolled_into_view: false,
            live_regions: Vec::new(),
            age_validity: None,
            reported_validity: Vec::new(),
        }
    }
}

/// An in-memory form document. Clones share the same document, so one handle
/// can be given to the controller while another observes it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryView {
    document: Arc<Mutex<Document>>,
}

impl InMemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    fn document(&self) -> MutexGuard<'_, Document> {
        // Poisoning is ignored, the document is plain data.
        self.document
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> Document {
        self.document().clone()
    }

    /// Stand-in for the volunteer typing into the form.
    pub fn fill(&self, submission: FormSubmission) {
        self.document().fields = submission;
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.document()
            .form_children
            .iter()
            .filter_map(|node| match node {
                FormNode::Error(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn announcements(&self) -> Vec<String> {
        self.document()
            .live_regions
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl FormView for InMemoryView {
    fn read_fields(&self) -> FormSubmission {
        self.document().fields.clone()
    }

    fn reset_fields(&mut self) {
        let mut document = self.document();
        document.fields = FormSubmission::default();
        document.age_validity = None;
    }

    fn set_phone_value(&mut self, value: &str) {
        self.document().fields.phone = value.to_string();
    }

    fn set_age_value(&mut self, value: Option<i64>) {
        self.document().fields.age = value;
    }

    fn clear_errors(&mut self) {
        self.document()
            .form_children
            .retain(|node| !matches!(node, FormNode::Error(_)));
    }

    fn render_error(&mut self, error: &ValidationError) {
        let mut document = self.document();
        let position = document
            .form_children
            .iter()
            .position(|node| *node == FormNode::SubmitControl)
            .unwrap_or(document.form_children.len());
        document
            .form_children
            .insert(position, FormNode::Error(error.to_string()));
    }

    fn announce(&mut self, id: AnnouncementId, message: &str) {
        self.document().live_regions.push((id, message.to_string()));
    }

    fn remove_announcement(&mut self, id: AnnouncementId) {
        self.document()
            .live_regions
            .retain(|(region, _)| *region != id);
    }

    fn set_submit_control(&mut self, control: &SubmitControl) {
        self.document().submit_control = control.clone();
    }

    fn show_success(&mut self) {
        let mut document = self.document();
        document.form_hidden = true;
        document.success_hidden = false;
    }

    fn scroll_success_into_view(&mut self) {
        self.document().success_scrolled_into_view = true;
    }

    fn set_age_validity(&mut self, error: Option<&AgeError>) {
        self.document().age_validity = error.map(ToString::to_string);
    }

    fn report_age_validity(&mut self, error: &AgeError) {
        self.document().reported_validity.push(error.to_string());
    }
}
