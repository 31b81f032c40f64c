use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client,
};

use crate::{
    config::InferenceConfig,
    domain::{ClassificationResult, FeatureVector},
};

use super::inference::{build_payload, parse_response, InferenceError};

/// Transport to the hosted model: JSON request bytes in, JSON response bytes out.
#[async_trait]
pub trait InferenceEndpoint: Send + Sync {
    async fn invoke(&self, payload: Vec<u8>) -> Result<Vec<u8>, InferenceError>;
}

#[derive(Clone)]
pub struct HttpInferenceEndpoint {
    http: Client,
    config: InferenceConfig,
}

impl HttpInferenceEndpoint {
    pub fn new(http: Client, config: InferenceConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl InferenceEndpoint for HttpInferenceEndpoint {
    async fn invoke(&self, payload: Vec<u8>) -> Result<Vec<u8>, InferenceError> {
        let mut request = self
            .http
            .post(self.config.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(InferenceError::Endpoint(format!(
                "{status}: {}",
                String::from_utf8_lossy(&body)
            )));
        }
        Ok(body.to_vec())
    }
}

#[derive(Clone)]
pub struct SpamClassifier {
    endpoint: Arc<dyn InferenceEndpoint>,
}

impl SpamClassifier {
    pub fn new(endpoint: Arc<dyn InferenceEndpoint>) -> Self {
        Self { endpoint }
    }

    pub async fn classify(
        &self,
        vector: &FeatureVector,
    ) -> Result<ClassificationResult, InferenceError> {
        let payload = build_payload(vector)?;
        tracing::debug!(target: "inference", bytes = payload.len(), "invoking endpoint");

        let body = self.endpoint.invoke(payload).await?;
        tracing::debug!(
            target: "inference",
            body = %String::from_utf8_lossy(&body),
            "endpoint responded"
        );

        parse_response(&body)
    }
}
