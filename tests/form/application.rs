use crate::helpers::{form_settings, valid_submission};
use std::time::Duration;
use volunteer_form::domain::FormSubmission;
use volunteer_form::view::InMemoryView;
use volunteer_form::{FormApplication, FormEvent, SubmissionState};

#[tokio::test(start_paused = true)]
async fn a_valid_submission_succeeds_after_the_configured_delay() {
    let view = InMemoryView::new();
    let application = FormApplication::build(form_settings(), view.clone());
    let mut handle = application.handle();
    tokio::spawn(application.run_until_stopped());

    view.fill(valid_submission());
    let start = tokio::time::Instant::now();
    handle.dispatch(FormEvent::SubmitRequested).unwrap();

    handle.wait_for(SubmissionState::Succeeded).await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(2000));
    let document = view.snapshot();
    assert!(document.form_hidden);
    assert!(!document.success_hidden);
    assert_eq!(document.fields, FormSubmission::default());
}

#[tokio::test(start_paused = true)]
async fn the_form_is_submitting_while_the_send_is_pending() {
    let view = InMemoryView::new();
    let application = FormApplication::build(form_settings(), view.clone());
    let mut handle = application.handle();
    tokio::spawn(application.run_until_stopped());

    handle
        .dispatch(FormEvent::Submit(valid_submission()))
        .unwrap();
    handle.wait_for(SubmissionState::Submitting).await.unwrap();

    assert!(!view.snapshot().submit_control.enabled);
    assert_eq!(handle.state(), SubmissionState::Submitting);
}

#[tokio::test(start_paused = true)]
async fn announcements_are_removed_by_the_timer() {
    let view = InMemoryView::new();
    let application = FormApplication::build(form_settings(), view.clone());
    let handle = application.handle();
    tokio::spawn(application.run_until_stopped());

    handle.dispatch(FormEvent::SubmitRequested).unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(view.announcements().len(), 1);
    assert_eq!(view.error_messages().len(), 5);
    assert_eq!(handle.state(), SubmissionState::Idle);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(view.announcements().is_empty());
}

#[tokio::test]
async fn the_loop_stops_when_every_handle_is_dropped() {
    let application = FormApplication::build(form_settings(), InMemoryView::new());
    let handle = application.handle();
    let running = tokio::spawn(application.run_until_stopped());

    handle
        .dispatch(FormEvent::PhoneInput("98765 43210".into()))
        .unwrap();
    drop(handle);

    let controller = running.await.unwrap();
    assert_eq!(controller.view().snapshot().fields.phone, "9876543210");
    assert_eq!(controller.state(), SubmissionState::Idle);
}
