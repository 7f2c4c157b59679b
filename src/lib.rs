pub mod configuration;
pub mod controller;
pub mod domain;
pub mod scheduler;
pub mod startup;
pub mod telemetry;
pub mod view;

pub use configuration::get_configuration;
pub use controller::{FormController, FormEvent, SubmissionState};
pub use startup::{FormApplication, FormHandle};
pub use telemetry::{get_subscriber, init_subscriber};
