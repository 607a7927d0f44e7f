//! # Runtime Configuration
//!
//! Defaults, then `SANTA_*` environment overrides, then command line flags.
//! The first two layers live here; `main` applies the flags.

use serde::{Deserialize, Serialize};
use ss_02_assignment_engine::{DrawMode, EngineConfig};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::warn;

/// Placeholder in the subject template replaced with the giver's name.
pub const SUBJECT_NAME_PLACEHOLDER: &str = "{name}";

/// SMTP submission port (STARTTLS).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Draw configuration.
    pub draw: DrawSettings,
    /// Artifact output configuration.
    pub output: OutputConfig,
    /// Message delivery configuration.
    pub delivery: DeliveryConfig,
}

/// Draw configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSettings {
    /// Full attempts before giving up.
    pub max_attempts: u32,
    /// Per-giver draw loop behaviour.
    pub draw_mode: DrawMode,
    /// Seed for a reproducible draw. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for DrawSettings {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            max_attempts: engine.max_attempts,
            draw_mode: engine.draw_mode,
            seed: None,
        }
    }
}

impl DrawSettings {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_max_attempts(self.max_attempts)
            .with_draw_mode(self.draw_mode)
    }
}

/// Artifact output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving one card per participant.
    pub dir: PathBuf,
    /// Prepended to every card file name.
    pub prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("out"),
            prefix: String::new(),
        }
    }
}

/// Delivery transport.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    /// One RFC 5322 file per message in the maildrop directory.
    #[default]
    Maildrop,
    /// Send through an SMTP relay (STARTTLS).
    Smtp,
    /// Log each message instead of sending it.
    Log,
}

/// SMTP relay settings for [`Transport::Smtp`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// Relay host name. Required by the SMTP transport.
    pub host: Option<String>,
    /// Submission port.
    pub port: u16,
    pub username: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_SMTP_PORT,
            username: None,
            password: None,
        }
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Message delivery configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Send one message per participant after the draw.
    pub enabled: bool,
    pub transport: Transport,
    /// `From` address.
    pub sender: String,
    /// Subject line; `{name}` is replaced with the giver's name.
    pub subject: String,
    /// Pickup directory for the maildrop transport.
    pub maildrop_dir: PathBuf,
    /// Relay settings for the SMTP transport.
    #[serde(default)]
    pub smtp: SmtpConfig,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            transport: Transport::default(),
            sender: "santa@localhost".to_string(),
            subject: format!("Invisible Santa for {}", SUBJECT_NAME_PLACEHOLDER),
            maildrop_dir: PathBuf::from("maildrop"),
            smtp: SmtpConfig::default(),
        }
    }
}

impl DeliveryConfig {
    /// Subject line for one giver.
    pub fn subject_for(&self, giver: &str) -> String {
        self.subject.replace(SUBJECT_NAME_PLACEHOLDER, giver)
    }
}

impl RuntimeConfig {
    /// Defaults with process environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from `lookup`.
    ///
    /// # Variables
    ///
    /// - `SANTA_MAX_ATTEMPTS`: attempt bound
    /// - `SANTA_SEED`: draw seed
    /// - `SANTA_OUT_DIR`: artifact directory
    /// - `SANTA_SENDER`: `From` address
    /// - `SANTA_MAILDROP_DIR`: maildrop directory
    /// - `SANTA_SMTP_HOST`, `SANTA_SMTP_PORT`: SMTP relay
    /// - `SANTA_SMTP_USERNAME`, `SANTA_SMTP_PASSWORD`: SMTP login
    ///
    /// Unparsable numbers are ignored with a warning.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("SANTA_MAX_ATTEMPTS") {
            match value.trim().parse() {
                Ok(n) => self.draw.max_attempts = n,
                Err(_) => warn!(value = %value, "SANTA_MAX_ATTEMPTS is not a number, ignoring"),
            }
        }
        if let Some(value) = lookup("SANTA_SEED") {
            match value.trim().parse() {
                Ok(seed) => self.draw.seed = Some(seed),
                Err(_) => warn!(value = %value, "SANTA_SEED is not a number, ignoring"),
            }
        }
        if let Some(dir) = lookup("SANTA_OUT_DIR") {
            self.output.dir = PathBuf::from(dir);
        }
        if let Some(sender) = lookup("SANTA_SENDER") {
            self.delivery.sender = sender;
        }
        if let Some(dir) = lookup("SANTA_MAILDROP_DIR") {
            self.delivery.maildrop_dir = PathBuf::from(dir);
        }
        if let Some(host) = lookup("SANTA_SMTP_HOST") {
            self.delivery.smtp.host = Some(host);
        }
        if let Some(value) = lookup("SANTA_SMTP_PORT") {
            match value.trim().parse() {
                Ok(port) => self.delivery.smtp.port = port,
                Err(_) => warn!(value = %value, "SANTA_SMTP_PORT is not a port number, ignoring"),
            }
        }
        if let Some(username) = lookup("SANTA_SMTP_USERNAME") {
            self.delivery.smtp.username = Some(username);
        }
        if let Some(password) = lookup("SANTA_SMTP_PASSWORD") {
            self.delivery.smtp.password = Some(password);
        }
        self
    }
}
