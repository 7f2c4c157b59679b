use once_cell::sync::Lazy;
use std::time::Duration;
use volunteer_form::configuration::FormSettings;
use volunteer_form::domain::FormSubmission;
use volunteer_form::get_configuration;
use volunteer_form::scheduler::ManualScheduler;
use volunteer_form::telemetry::{get_subscriber, init_subscriber};
use volunteer_form::view::{Document, InMemoryView};
use volunteer_form::{FormController, FormEvent, SubmissionState};

pub struct TestForm {
    pub controller: FormController<InMemoryView, ManualScheduler>,
    pub view: InMemoryView,
    pub settings: FormSettings,
}

impl TestForm {
    pub fn fill(&self, submission: FormSubmission) {
        self.view.fill(submission);
    }

    pub fn press_submit(&mut self) {
        self.controller.handle(FormEvent::SubmitRequested);
    }

    pub fn type_phone(&mut self, raw: &str) {
        self.controller.handle(FormEvent::PhoneInput(raw.to_string()));
    }

    pub fn type_age(&mut self, raw: &str) {
        self.controller.handle(FormEvent::AgeInput(raw.to_string()));
    }

    pub fn advance(&mut self, by: Duration) {
        self.controller.advance(by);
    }

    /// Let the simulated send finish.
    pub fn wait_for_delivery(&mut self) {
        let delay = self.settings.submission_delay;
        self.advance(delay);
    }

    pub fn state(&self) -> SubmissionState {
        self.controller.state()
    }

    pub fn document(&self) -> Document {
        self.view.snapshot()
    }
}

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub fn form_settings() -> FormSettings {
    Lazy::force(&TRACING);
    get_configuration()
        .expect("Failed to read configuration.")
        .form
}

pub fn spawn_form() -> TestForm {
    let settings = form_settings();
    let view = InMemoryView::new();
    let controller =
        FormController::mount(view.clone(), ManualScheduler::new(), settings.clone());

    TestForm {
        controller,
        view,
        settings,
    }
}

pub fn valid_submission() -> FormSubmission {
    FormSubmission {
        full_name: "Asha".into(),
        email: "asha@example.com".into(),
        phone: "+919876543210".into(),
        age: None,
        motivation: "I want to teach".into(),
        interests: ["teaching".to_string()].into(),
    }
}
