use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::{
    ai::{HttpInferenceEndpoint, SpamClassifier},
    config::AppConfig,
    infrastructure::{
        directories::ResolvedPaths, notifier::SmtpNotifier, store::FsMessageStore,
    },
    pipeline::{Acknowledgement, SpamPipeline, StorageEvent},
    text::VocabularyEncoder,
};

pub struct SpamReplyApp {
    pipeline: SpamPipeline,
}

impl SpamReplyApp {
    pub fn initialize(config: AppConfig, paths: ResolvedPaths) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(format!("spam-reply/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let endpoint = Arc::new(HttpInferenceEndpoint::new(
            http_client,
            config.inference.clone(),
        ));
        let encoder = VocabularyEncoder::new(config.vocabulary_length)?;
        let store = Arc::new(FsMessageStore::new(paths.store_root));
        let notifier = Arc::new(SmtpNotifier::new(config.delivery.clone()));

        tracing::info!(
            endpoint = %config.inference.endpoint,
            vocabulary = encoder.vocabulary_length(),
            smtp_host = %config.delivery.smtp_host,
            "spam reply pipeline configured"
        );

        Ok(Self {
            pipeline: SpamPipeline::new(store, encoder, SpamClassifier::new(endpoint), notifier),
        })
    }

    pub async fn handle(&self, raw_event: &[u8]) -> Result<Acknowledgement> {
        let event = StorageEvent::parse(raw_event).context("failed to read trigger event")?;
        let object = event.object_ref()?;
        tracing::info!(target: "pipeline", %object, records = event.records.len(), "invocation started");

        let report = self
            .pipeline
            .process(&object)
            .await
            .with_context(|| format!("invocation for {object} failed"))?;

        tracing::info!(
            target: "pipeline",
            recipient = %report.recipient,
            label = %report.classification.label,
            confidence = report.classification.confidence,
            "invocation completed"
        );
        Ok(Acknowledgement::processed())
    }
}
