//! In-memory collaborators shared by the pipeline and app tests.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{
    ai::{client::InferenceEndpoint, InferenceError, SpamClassifier},
    domain::{NotificationPayload, StoredObjectRef},
    infrastructure::{
        notifier::{DeliveryError, Notifier},
        store::{MessageStore, StoreError},
    },
    text::VocabularyEncoder,
};

use super::SpamPipeline;

pub const V: usize = 9013;

pub const SPAM_REPLY: &str = r#"{"predicted_label":[[1]],"predicted_probability":[[0.97]]}"#;
pub const HAM_REPLY: &str = r#"{"predicted_label":[[0]],"predicted_probability":[[0.02]]}"#;

#[derive(Default)]
pub struct MemoryStore {
    pub objects: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn with(key: &str, raw: &[u8]) -> Self {
        let mut store = Self::default();
        store.objects.insert(key.to_string(), raw.to_vec());
        store
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn fetch(&self, object: &StoredObjectRef) -> Result<Vec<u8>, StoreError> {
        self.objects
            .get(&object.to_string())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(object.to_string()))
    }
}

pub enum Reply {
    Body(&'static str),
    Fail,
}

pub struct FakeEndpoint {
    reply: Reply,
    pub payloads: Mutex<Vec<Vec<u8>>>,
}

impl FakeEndpoint {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            payloads: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl InferenceEndpoint for FakeEndpoint {
    async fn invoke(&self, payload: Vec<u8>) -> Result<Vec<u8>, InferenceError> {
        self.payloads.lock().push(payload);
        match self.reply {
            Reply::Body(body) => Ok(body.as_bytes().to_vec()),
            Reply::Fail => Err(InferenceError::Endpoint("503 Service Unavailable".into())),
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<NotificationPayload>>,
    pub fail: bool,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn deliver(&self, payload: &NotificationPayload) -> Result<(), DeliveryError> {
        if self.fail {
            return Err(DeliveryError::Send("connection refused".into()));
        }
        self.sent.lock().push(payload.clone());
        Ok(())
    }
}

pub fn pipeline(
    store: MemoryStore,
    endpoint: Arc<FakeEndpoint>,
    notifier: Arc<RecordingNotifier>,
) -> SpamPipeline {
    SpamPipeline::new(
        Arc::new(store),
        VocabularyEncoder::new(V).unwrap(),
        SpamClassifier::new(endpoint),
        notifier,
    )
}
