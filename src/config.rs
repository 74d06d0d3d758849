//! Runtime configuration.
//!
//! Sources, later ones overriding earlier ones:
//!
//! 1. built-in defaults
//! 2. `config/ledger.toml`, if present
//! 3. environment variables prefixed `LEDGER__`, e.g. `LEDGER__MAILBOX_CAPACITY=64`

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

const DEFAULT_MAILBOX_CAPACITY: usize = 32;
const DEFAULT_LOG_FILTER: &str = "info";
const CONFIG_FILE: &str = "config/ledger";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
    /// Mailbox size of every actor. Senders wait while a mailbox is full.
    pub mailbox_capacity: usize,

    /// Default `tracing` filter directive. `RUST_LOG` takes precedence.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SystemConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::Message(
                "mailbox_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses a TOML document layered over the defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Self::build(defaults()?.add_source(File::from_str(source, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: SystemConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("mailbox_capacity", DEFAULT_MAILBOX_CAPACITY as u64)?
        .set_default("log_filter", DEFAULT_LOG_FILTER)
}

/// Loads configuration from the defaults, the optional config file and the
/// environment.
///
/// Runs before tracing is installed and does not log; callers report the
/// loaded values once `setup_tracing` has run.
pub fn load_config() -> Result<SystemConfig, ConfigError> {
    let builder = defaults()?
        .add_source(File::with_name(CONFIG_FILE).required(false))
        .add_source(Environment::with_prefix("LEDGER").separator("__"));

    SystemConfig::build(builder)
}
