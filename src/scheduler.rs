use crate::controller::FormEvent;
use std::time::Duration;
use tokio::sync::mpsc::WeakUnboundedSender;
use tracing::Instrument;

/// Delivers `event` back to the form once `delay` has elapsed.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, event: FormEvent);
}

#[derive(Debug)]
struct ScheduledEvent {
    due: Duration,
    sequence: u64,
    event: FormEvent,
}

/// Virtual clock. Nothing fires until time is advanced explicitly.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_sequence: u64,
    pending: Vec<ScheduledEvent>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Remove and return the earliest event due at or before `deadline`,
    /// moving the clock to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<FormEvent> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, scheduled)| scheduled.due <= deadline)
            .min_by_key(|(_, scheduled)| (scheduled.due, scheduled.sequence))
            .map(|(index, _)| index)?;
        let scheduled = self.pending.swap_remove(index);
        self.now = self.now.max(scheduled.due);
        Some(scheduled.event)
    }

    pub fn advance_to(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, event: FormEvent) {
        self.pending.push(ScheduledEvent {
            due: self.now + delay,
            sequence: self.next_sequence,
            event,
        });
        self.next_sequence += 1;
    }
}

/// Real timers on the tokio runtime. Fired events are sent to the form's event loop.
///
/// Only a weak sender is held, so pending timers never keep a stopped loop alive.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    sender: WeakUnboundedSender<FormEvent>,
}

impl TokioScheduler {
    pub fn new(sender: WeakUnboundedSender<FormEvent>) -> Self {
        Self { sender }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, event: FormEvent) {
        let sender = self.sender.clone();
        tokio::spawn(
            async move {
                tokio::time::sleep(delay).await;
                let delivered = sender.upgrade().is_some_and(|s| s.send(event).is_ok());
                if !delivered {
                    tracing::debug!("Form event loop stopped before a scheduled event fired");
                }
            }
            .instrument(tracing::Span::current()),
        );
    }
}
