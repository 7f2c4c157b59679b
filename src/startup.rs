use crate::configuration::FormSettings;
use crate::controller::{FormController, FormEvent, SubmissionState};
use crate::scheduler::TokioScheduler;
use crate::view::FormView;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;

#[derive(thiserror::Error, Debug)]
#[error("The volunteer form is no longer running")]
pub struct FormStopped;

/// Cloneable entry point for page events. The event loop stops once every
/// handle has been dropped.
#[derive(Debug, Clone)]
pub struct FormHandle {
    sender: UnboundedSender<FormEvent>,
    state: watch::Receiver<SubmissionState>,
}

impl FormHandle {
    pub fn dispatch(&self, event: FormEvent) -> Result<(), FormStopped> {
        self.sender.send(event).map_err(|_| FormStopped)
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    /// Wait until the form reaches `target`.
    pub async fn wait_for(&mut self, target: SubmissionState) -> Result<(), FormStopped> {
        self.state
            .wait_for(|state| *state == target)
            .await
            .map(|_| ())
            .map_err(|_| FormStopped)
    }
}

/// A mounted form controller driven by tokio timers and an event channel.
pub struct FormApplication<V> {
    controller: FormController<V, TokioScheduler>,
    receiver: UnboundedReceiver<FormEvent>,
    state: watch::Sender<SubmissionState>,
    handle: FormHandle,
}

impl<V: FormView> FormApplication<V> {
    pub fn build(settings: FormSettings, view: V) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = TokioScheduler::new(sender.downgrade());
        let controller = FormController::mount(view, scheduler, settings);
        let (state, state_receiver) = watch::channel(controller.state());
        Self {
            controller,
            receiver,
            state,
            handle: FormHandle {
                sender,
                state: state_receiver,
            },
        }
    }

    pub fn handle(&self) -> FormHandle {
        self.handle.clone()
    }

    /// Must run inside a tokio runtime: the scheduler spawns its timers there.
    pub async fn run_until_stopped(self) -> FormController<V, TokioScheduler> {
        let Self {
            mut controller,
            mut receiver,
            state,
            handle,
        } = self;
        drop(handle);

        tracing::info!("Volunteer form mounted");
        while let Some(event) = receiver.recv().await {
            controller.handle(event);
            state.send_replace(controller.state());
        }
        tracing::info!("Volunteer form stopped");
        controller
    }
}
