pub mod message;
pub mod types;

pub use message::RawMessage;
pub use types::{ClassificationResult, FeatureVector, Label, NotificationPayload, StoredObjectRef};
