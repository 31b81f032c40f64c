use std::env;

use url::Url;

use super::env::{
    AppConfig, ConfigError, DeliveryConfig, DirectoryConfig, InferenceConfig, LoggingConfig,
    SmtpSecurity, StoreConfig,
};

pub const DEFAULT_VOCABULARY_LENGTH: usize = 9013;

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let endpoint_raw =
            var("INFERENCE_ENDPOINT").ok_or(ConfigError::Missing("INFERENCE_ENDPOINT"))?;
        let endpoint = parse_endpoint(&endpoint_raw)?;

        let inference = InferenceConfig {
            endpoint,
            api_key: var("INFERENCE_API_KEY"),
        };

        let vocabulary_length = match var("VOCABULARY_LENGTH") {
            Some(raw) => parse_vocabulary_length(&raw)?,
            None => DEFAULT_VOCABULARY_LENGTH,
        };

        let store = StoreConfig {
            root_dir: var("MESSAGE_STORE_DIR").unwrap_or_else(|| "data/messages".to_string()),
        };

        let smtp_port = match var("SMTP_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|err| ConfigError::Invalid {
                key: "SMTP_PORT",
                reason: err.to_string(),
            })?,
            None => 587,
        };
        let smtp_security = match var("SMTP_SECURITY") {
            Some(raw) => parse_smtp_security(&raw)?,
            None => SmtpSecurity::default_for_port(smtp_port),
        };
        let from_address =
            var("NOTIFY_FROM_ADDRESS").unwrap_or_else(|| "spam-classifier@localhost".to_string());
        let delivery = DeliveryConfig {
            smtp_host: var("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
            smtp_port,
            smtp_security,
            smtp_username: var("SMTP_USERNAME"),
            smtp_password: var("SMTP_PASSWORD"),
            operator_address: var("OPERATOR_ADDRESS").unwrap_or_else(|| from_address.clone()),
            from_address,
            subject: var("NOTIFY_SUBJECT").unwrap_or_else(|| "About your email".to_string()),
        };

        let directories = DirectoryConfig {
            logs_dir: var("LOGS_DIR").unwrap_or_else(|| "logs".to_string()),
        };

        let logging = LoggingConfig {
            level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        };

        Ok(Self {
            inference,
            vocabulary_length,
            store,
            delivery,
            directories,
            logging,
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|err| ConfigError::Invalid {
        key: "INFERENCE_ENDPOINT",
        reason: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            key: "INFERENCE_ENDPOINT",
            reason: format!("unsupported scheme `{}`", url.scheme()),
        });
    }
    Ok(url)
}

fn parse_smtp_security(raw: &str) -> Result<SmtpSecurity, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "starttls" => Ok(SmtpSecurity::StartTls),
        "tls" | "ssl" => Ok(SmtpSecurity::Tls),
        "none" | "plain" => Ok(SmtpSecurity::Plain),
        other => Err(ConfigError::Invalid {
            key: "SMTP_SECURITY",
            reason: format!("expected starttls, tls or none, got `{other}`"),
        }),
    }
}

fn parse_vocabulary_length(raw: &str) -> Result<usize, ConfigError> {
    let value = raw
        .trim()
        .parse::<usize>()
        .map_err(|err| ConfigError::Invalid {
            key: "VOCABULARY_LENGTH",
            reason: err.to_string(),
        })?;
    if value < 2 {
        return Err(ConfigError::Invalid {
            key: "VOCABULARY_LENGTH",
            reason: format!("must be at least 2, got {value}"),
        });
    }
    Ok(value)
}
