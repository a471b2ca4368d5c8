use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;
use strum::{AsRefStr, EnumString};
use tracing::Level;

static DEFAULT_ENVIRONMENT: Environment = Environment::Local;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub log_level: LogLevel,
    pub environment: Environment,
    /// Source document with every position report.
    pub reports_path: PathBuf,
    /// Where the snapshot index is persisted.
    pub index_path: PathBuf,
    pub num_index_workers: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    Local,
    Development,
    Test,
    Production,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Settings {
    pub fn new() -> Result<Settings, ConfigError> {
        let environment: Environment = match std::env::var("APP_ENVIRONMENT") {
            Ok(v) => v
                .parse()
                .map_err(|_| ConfigError::Message(format!("invalid APP_ENVIRONMENT '{v}'")))?,
            Err(_) => DEFAULT_ENVIRONMENT,
        };

        let builder = Config::builder()
            .add_source(File::with_name(&format!("config/{}", environment.as_ref())).required(true))
            .add_source(config::Environment::with_prefix("TUGWATCH").separator("__"))
            .set_override("environment", environment.as_ref())?;

        builder.build()?.try_deserialize()
    }
}

impl From<&LogLevel> for Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}
