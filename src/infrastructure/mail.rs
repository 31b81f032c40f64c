use chrono::DateTime;
use mail_parser::{HeaderName, MessageParser, PartType};
use thiserror::Error;

use crate::domain::RawMessage;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("message could not be parsed")]
    Unparseable,
    #[error("message has no sender address")]
    MissingSender,
    #[error("message has no text/plain body part")]
    MissingPlainText,
}

pub fn parse_message(raw: Vec<u8>) -> Result<RawMessage, ParseError> {
    let parsed = MessageParser::default()
        .parse(raw.as_slice())
        .ok_or(ParseError::Unparseable)?;

    let sender = parsed
        .from()
        .and_then(|addr| addr.first())
        .and_then(|a| a.address())
        .map(|s| s.to_string())
        .ok_or(ParseError::MissingSender)?;

    let subject = parsed.subject().map(str::to_string);
    let date = parsed
        .header_raw(HeaderName::Date)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
    let received_at = date
        .as_deref()
        .and_then(|value| DateTime::parse_from_rfc2822(value).ok());

    // HTML-only messages also populate the text body list; only real text/plain counts.
    let body = parsed
        .text_bodies()
        .find_map(|part| match &part.body {
            PartType::Text(text) => Some(text.to_string()),
            _ => None,
        })
        .ok_or(ParseError::MissingPlainText)?;

    drop(parsed);
    Ok(RawMessage {
        raw,
        sender,
        subject,
        date,
        received_at,
        body,
    })
}
