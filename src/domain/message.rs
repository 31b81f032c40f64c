use chrono::{DateTime, FixedOffset};

/// A stored email after header and body extraction. Built once per invocation.
#[derive(Debug, Clone)]
pub struct RawMessage {
    pub raw: Vec<u8>,
    pub sender: String,
    pub subject: Option<String>,
    /// `Date` header exactly as received; this is what the reply quotes back.
    pub date: Option<String>,
    pub received_at: Option<DateTime<FixedOffset>>,
    pub body: String,
}

impl RawMessage {
    pub fn date_display(&self) -> &str {
        self.date.as_deref().unwrap_or("unknown")
    }

    pub fn subject_display(&self) -> &str {
        self.subject.as_deref().unwrap_or_default()
    }
}
