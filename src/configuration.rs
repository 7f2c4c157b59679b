use serde_aux::field_attributes::deserialize_number_from_string;
use std::path::Path;
use std::time::Duration;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub form: FormSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct FormSettings {
    #[serde(
        rename = "submission_delay_millis",
        deserialize_with = "deserialize_duration_from_millis"
    )]
    pub submission_delay: Duration,
    #[serde(
        rename = "announcement_duration_millis",
        deserialize_with = "deserialize_duration_from_millis"
    )]
    pub announcement_duration: Duration,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub phone_max_digits: usize,
    pub submit_label: String,
    pub submitting_label: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            submission_delay: Duration::from_millis(2000),
            announcement_duration: Duration::from_millis(1000),
            phone_max_digits: 10,
            submit_label: "Submit Application".into(),
            submitting_label: "Submitting...".into(),
        }
    }
}

fn deserialize_duration_from_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let millis: u64 = deserialize_number_from_string(deserializer)?;
    Ok(Duration::from_millis(millis))
}

/// Which overlay file in `configuration/` sits on top of `base.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    /// Read `APP_ENVIRONMENT`, falling back to `local` when it is unset.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        match std::env::var("APP_ENVIRONMENT") {
            Ok(name) => name.parse().map_err(config::ConfigError::Message),
            Err(_) => Ok(Environment::Local),
        }
    }

    fn overlay_file(self) -> &'static str {
        match self {
            Environment::Local => "local.yaml",
            Environment::Production => "production.yaml",
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name.eq_ignore_ascii_case("local") {
            Ok(Environment::Local)
        } else if name.eq_ignore_ascii_case("production") {
            Ok(Environment::Production)
        } else {
            Err(format!(
                "Unknown environment '{name}', use either `local` or `production`"
            ))
        }
    }
}

/// Load the form settings from `./configuration`, the overlay picked by
/// `APP_ENVIRONMENT`, and `APP_FORM__*` variables.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let root = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;
    load_configuration(&root.join("configuration"), Environment::from_env()?)
}

pub fn load_configuration(
    directory: &Path,
    environment: Environment,
) -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::from(directory.join("base.yaml")))
        .add_source(config::File::from(directory.join(environment.overlay_file())))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}
