use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};
use thiserror::Error;

use crate::{
    config::{DeliveryConfig, SmtpSecurity},
    domain::NotificationPayload,
};

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid {role} address `{address}`: {reason}")]
    Address {
        role: &'static str,
        address: String,
        reason: String,
    },
    #[error("failed to build email: {0}")]
    Build(String),
    #[error("SMTP send failed: {0}")]
    Send(String),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, payload: &NotificationPayload) -> Result<(), DeliveryError>;
}

/// Replies over SMTP, copying the operator on every message.
#[derive(Debug, Clone)]
pub struct SmtpNotifier {
    config: DeliveryConfig,
}

impl SmtpNotifier {
    pub fn new(config: DeliveryConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<SmtpTransport, DeliveryError> {
        let host = self.config.smtp_host.as_str();
        let builder = match self.config.smtp_security {
            SmtpSecurity::StartTls => SmtpTransport::starttls_relay(host),
            SmtpSecurity::Tls => SmtpTransport::relay(host),
            SmtpSecurity::Plain => Ok(SmtpTransport::builder_dangerous(host)),
        };
        let mut builder = builder
            .map_err(|e| DeliveryError::Send(format!("SMTP relay error: {e}")))?
            .port(self.config.smtp_port);
        if let Some(username) = &self.config.smtp_username {
            let password = self.config.smtp_password.clone().unwrap_or_default();
            builder = builder.credentials(Credentials::new(username.clone(), password));
        }
        Ok(builder.build())
    }
}

pub fn build_email(
    config: &DeliveryConfig,
    payload: &NotificationPayload,
) -> Result<Message, DeliveryError> {
    Message::builder()
        .from(mailbox("from", &config.from_address)?)
        .to(mailbox("recipient", &payload.recipient)?)
        .cc(mailbox("operator", &config.operator_address)?)
        .subject(config.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(payload.body.clone())
        .map_err(|e| DeliveryError::Build(e.to_string()))
}

fn mailbox(role: &'static str, address: &str) -> Result<Mailbox, DeliveryError> {
    address.parse().map_err(|e: lettre::address::AddressError| DeliveryError::Address {
        role,
        address: address.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn deliver(&self, payload: &NotificationPayload) -> Result<(), DeliveryError> {
        tracing::info!(target: "notifier", recipient = %payload.recipient, "sending email");
        let email = build_email(&self.config, payload)?;
        let transport = self.transport()?;

        let response = tokio::task::spawn_blocking(move || transport.send(&email))
            .await
            .map_err(|e| DeliveryError::Send(format!("SMTP task failed: {e}")))?
            .map_err(|e| DeliveryError::Send(e.to_string()))?;

        tracing::info!(
            target: "notifier",
            recipient = %payload.recipient,
            code = %response.code(),
            "email sent"
        );
        Ok(())
    }
}
