use std::sync::Arc;

use crate::{
    ai::SpamClassifier,
    domain::{ClassificationResult, NotificationPayload, RawMessage, StoredObjectRef},
    infrastructure::{mail::parse_message, notifier::Notifier, store::MessageStore},
    text::{remove_new_lines, VocabularyEncoder},
};

use super::{error::PipelineError, summary::build_message};

#[derive(Debug, Clone, PartialEq)]
pub struct InvocationReport {
    pub recipient: String,
    pub classification: ClassificationResult,
}

/// Runs one stored message through classification and replies to its sender.
pub struct SpamPipeline {
    store: Arc<dyn MessageStore>,
    encoder: VocabularyEncoder,
    classifier: SpamClassifier,
    notifier: Arc<dyn Notifier>,
}

impl SpamPipeline {
    pub fn new(
        store: Arc<dyn MessageStore>,
        encoder: VocabularyEncoder,
        classifier: SpamClassifier,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            encoder,
            classifier,
            notifier,
        }
    }

    pub async fn process(
        &self,
        object: &StoredObjectRef,
    ) -> Result<InvocationReport, PipelineError> {
        let raw = self
            .store
            .fetch(object)
            .await
            .map_err(|source| PipelineError::Retrieval {
                object: object.clone(),
                source,
            })?;
        tracing::info!(target: "pipeline", %object, "message retrieved");

        let message = parse_message(raw)?;
        tracing::info!(
            target: "pipeline",
            sender = %message.sender,
            bytes = message.raw.len(),
            date = message.date_display(),
            received_at = ?message.received_at,
            subject = message.subject_display(),
            "message parsed"
        );

        self.process_message(&message).await
    }

    pub async fn process_message(
        &self,
        message: &RawMessage,
    ) -> Result<InvocationReport, PipelineError> {
        let body = remove_new_lines(&message.body);
        let features = self.encoder.encode(&body);
        tracing::debug!(
            target: "pipeline",
            vocabulary = features.len(),
            active = features.active_count(),
            "message encoded"
        );

        let classification = self.classifier.classify(&features).await?;
        tracing::info!(
            target: "pipeline",
            label = %classification.label,
            confidence = classification.confidence,
            "message classified"
        );

        let payload = NotificationPayload {
            recipient: message.sender.clone(),
            body: build_message(
                message.date_display(),
                message.subject_display(),
                &body,
                classification.label,
                classification.confidence,
            ),
        };
        tracing::debug!(target: "pipeline", body = %payload.body, "notification composed");
        self.notifier.deliver(&payload).await?;

        Ok(InvocationReport {
            recipient: payload.recipient,
            classification,
        })
    }
}
