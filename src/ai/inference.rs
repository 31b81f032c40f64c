use serde::Deserialize;
use thiserror::Error;

use crate::domain::{ClassificationResult, FeatureVector, Label};

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("inference request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("inference endpoint rejected the request: {0}")]
    Endpoint(String),
    #[error("failed to encode inference payload: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("inference response is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("inference response has no value at {0}[0][0]")]
    MissingPrediction(&'static str),
}

/// The endpoint takes a list of examples, so a single vector is sent as a batch of one.
pub fn build_payload(vector: &FeatureVector) -> Result<Vec<u8>, InferenceError> {
    serde_json::to_vec(&[vector]).map_err(InferenceError::Encode)
}

pub fn parse_response(body: &[u8]) -> Result<ClassificationResult, InferenceError> {
    let prediction: PredictionResponse =
        serde_json::from_slice(body).map_err(InferenceError::Decode)?;

    let code = first_value(&prediction.predicted_label)
        .ok_or(InferenceError::MissingPrediction("predicted_label"))?;
    let probability = first_value(&prediction.predicted_probability)
        .ok_or(InferenceError::MissingPrediction("predicted_probability"))?;

    Ok(ClassificationResult {
        label: Label::from_code(code),
        confidence: probability * 100.0,
    })
}

fn first_value(rows: &[Vec<f64>]) -> Option<f64> {
    rows.first().and_then(|row| row.first()).copied()
}

#[derive(Debug, Deserialize)]
pub struct PredictionResponse {
    pub predicted_label: Vec<Vec<f64>>,
    pub predicted_probability: Vec<Vec<f64>>,
}
