use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::StoredObjectRef;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("event is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("event carries no records")]
    NoRecords,
}

/// Storage notification announcing a newly stored message.
#[derive(Debug, Deserialize)]
pub struct StorageEvent {
    #[serde(rename = "Records")]
    pub records: Vec<EventRecord>,
}

#[derive(Debug, Deserialize)]
pub struct EventRecord {
    pub s3: StorageEntity,
}

#[derive(Debug, Deserialize)]
pub struct StorageEntity {
    pub bucket: Bucket,
    pub object: StoredObject,
}

#[derive(Debug, Deserialize)]
pub struct Bucket {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct StoredObject {
    pub key: String,
}

impl StorageEvent {
    pub fn parse(raw: &[u8]) -> Result<Self, EventError> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// Only the first record is processed.
    pub fn object_ref(&self) -> Result<StoredObjectRef, EventError> {
        let record = self.records.first().ok_or(EventError::NoRecords)?;
        Ok(StoredObjectRef {
            container: record.s3.bucket.name.clone(),
            key: record.s3.object.key.clone(),
        })
    }
}

/// Returned for every completed invocation, whatever the classification was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl Acknowledgement {
    pub fn processed() -> Self {
        Self {
            status_code: 200,
            body: "\"Message processed\"".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_record() {
        let raw = br#"{
            "Records": [
                {"eventName": "ObjectCreated:Put",
                 "s3": {"bucket": {"name": "inbound-mail", "arn": "x"},
                        "object": {"key": "abc123", "size": 42}}},
                {"s3": {"bucket": {"name": "other"}, "object": {"key": "ignored"}}}
            ]
        }"#;
        let event = StorageEvent::parse(raw).unwrap();
        assert_eq!(
            event.object_ref().unwrap(),
            StoredObjectRef {
                container: "inbound-mail".into(),
                key: "abc123".into(),
            }
        );
    }

    #[test]
    fn empty_records_is_an_error() {
        let event = StorageEvent::parse(br#"{"Records": []}"#).unwrap();
        assert!(matches!(event.object_ref(), Err(EventError::NoRecords)));
    }

    #[test]
    fn malformed_event_is_an_error() {
        assert!(matches!(
            StorageEvent::parse(br#"{"records": []}"#),
            Err(EventError::Malformed(_))
        ));
    }

    #[test]
    fn acknowledgement_shape_is_fixed() {
        let json = serde_json::to_string(&Acknowledgement::processed()).unwrap();
        assert_eq!(json, r#"{"statusCode":200,"body":"\"Message processed\""}"#);
    }
}
