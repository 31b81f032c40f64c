use thiserror::Error;
use url::Url;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub inference: InferenceConfig,
    pub vocabulary_length: usize,
    pub store: StoreConfig,
    pub delivery: DeliveryConfig,
    pub directories: DirectoryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub endpoint: Url,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub root_dir: String,
}

#[derive(Debug, Clone)]
pub struct DeliveryConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_security: SmtpSecurity,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub from_address: String,
    /// Copied on every reply.
    pub operator_address: String,
    pub subject: String,
}

/// How the SMTP connection is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpSecurity {
    /// Plain greeting, then upgrade with STARTTLS (submission port 587).
    StartTls,
    /// TLS from the first byte (port 465).
    Tls,
    /// No TLS at all; only for local relays.
    Plain,
}

impl SmtpSecurity {
    pub fn default_for_port(port: u16) -> Self {
        match port {
            465 => SmtpSecurity::Tls,
            _ => SmtpSecurity::StartTls,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub logs_dir: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
