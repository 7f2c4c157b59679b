mod event;

pub use event::FormEvent;

use crate::configuration::FormSettings;
use crate::domain::{Age, FormSubmission, PhoneNumber, validate};
use crate::scheduler::{ManualScheduler, Scheduler};
use crate::view::{AnnouncementId, FormView, SubmitControl};
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
}

#[derive(Debug)]
struct PendingSubmission {
    attempt_id: Uuid,
    submission: FormSubmission,
}

/// Owns one volunteer form: validation, error rendering, the simulated send
/// and the switch to the success presentation.
pub struct FormController<V, S> {
    view: V,
    scheduler: S,
    settings: FormSettings,
    state: SubmissionState,
    pending: Option<PendingSubmission>,
    next_announcement: u64,
}

impl<V: FormView, S: Scheduler> FormController<V, S> {
    pub fn mount(mut view: V, scheduler: S, settings: FormSettings) -> Self {
        view.set_submit_control(&SubmitControl {
            enabled: true,
            loading: false,
            label: settings.submit_label.clone(),
        });
        Self {
            view,
            scheduler,
            settings,
            state: SubmissionState::Idle,
            pending: None,
            next_announcement: 0,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn handle(&mut self, event: FormEvent) {
        match event {
            FormEvent::SubmitRequested => self.submit_requested(),
            FormEvent::Submit(submission) => self.submit(submission),
            FormEvent::PhoneInput(raw) => self.phone_input(&raw),
            FormEvent::AgeInput(raw) => self.age_input(&raw),
            FormEvent::SubmissionDelivered { attempt_id } => self.complete_submission(attempt_id),
            FormEvent::AnnouncementExpired(id) => self.view.remove_announcement(id),
        }
    }

    pub fn submit_requested(&mut self) {
        let submission = self.view.read_fields();
        self.submit(submission);
    }

    #[tracing::instrument(
        name = "Submitting a volunteer application",
        skip(self, submission),
        fields(attempt_id = tracing::field::Empty)
    )]
    pub fn submit(&mut self, submission: FormSubmission) {
        if self.state == SubmissionState::Submitting {
            tracing::debug!("Ignoring submit while a submission is in flight");
            return;
        }

        // An out-of-range age blocks the submit before errors are cleared.
        if let Some(Err(e)) = submission.age.map(Age::parse) {
            tracing::info!(age_error = %e, "Submit blocked by the age constraint");
            self.view.set_age_validity(Some(&e));
            self.view.report_age_validity(&e);
            return;
        }

        self.state = SubmissionState::Validating;
        self.view.clear_errors();

        let errors = validate(&submission);
        if !errors.is_empty() {
            tracing::info!(error_count = errors.len(), "Volunteer form failed validation");
            for error in &errors {
                self.view.render_error(error);
            }
            self.announce(&errors.announcement());
            self.state = SubmissionState::Idle;
            return;
        }

        let attempt_id = Uuid::new_v4();
        tracing::Span::current().record("attempt_id", tracing::field::display(&attempt_id));

        self.state = SubmissionState::Submitting;
        self.view.set_submit_control(&SubmitControl {
            enabled: false,
            loading: true,
            label: self.settings.submitting_label.clone(),
        });
        self.pending = Some(PendingSubmission {
            attempt_id,
            submission,
        });
        self.scheduler.schedule(
            self.settings.submission_delay,
            FormEvent::SubmissionDelivered { attempt_id },
        );
    }

    #[tracing::instrument(name = "Completing a volunteer application", skip(self))]
    fn complete_submission(&mut self, attempt_id: Uuid) {
        let pending = match self.pending.take() {
            Some(pending) if pending.attempt_id == attempt_id => pending,
            other => {
                tracing::warn!("Ignoring delivery of an unknown submission");
                self.pending = other;
                return;
            }
        };

        self.view.show_success();
        self.view.scroll_success_into_view();
        self.view.reset_fields();
        self.view.set_submit_control(&SubmitControl {
            enabled: true,
            loading: false,
            label: self.settings.submit_label.clone(),
        });
        self.state = SubmissionState::Succeeded;

        match serde_json::to_string(&pending.submission) {
            Ok(application) => {
                tracing::info!(%application, "Volunteer application submitted")
            }
            Err(e) => tracing::error!("Failed to serialize volunteer application: {:?}", e),
        }
    }

    fn announce(&mut self, message: &str) {
        let id = AnnouncementId(self.next_announcement);
        self.next_announcement += 1;
        self.view.announce(id, message);
        self.scheduler.schedule(
            self.settings.announcement_duration,
            FormEvent::AnnouncementExpired(id),
        );
    }

    pub fn phone_input(&mut self, raw: &str) {
        let masked = PhoneNumber::mask(raw, self.settings.phone_max_digits);
        self.view.set_phone_value(&masked);
    }

    pub fn age_input(&mut self, raw: &str) {
        let value = Age::read_input(raw);
        self.view.set_age_value(value);
        match value.map(Age::parse) {
            Some(Err(e)) => self.view.set_age_validity(Some(&e)),
            _ => self.view.set_age_validity(None),
        }
    }
}

impl<V: FormView> FormController<V, ManualScheduler> {
    /// Move virtual time forward, handling every event that falls due on the way.
    pub fn advance(&mut self, by: Duration) {
        let deadline = self.scheduler.now() + by;
        while let Some(event) = self.scheduler.pop_due(deadline) {
            self.handle(event);
        }
        self.scheduler.advance_to(deadline);
    }
}
