use thiserror::Error;

use crate::{
    ai::InferenceError,
    domain::StoredObjectRef,
    infrastructure::{mail::ParseError, notifier::DeliveryError, store::StoreError},
};

/// Every variant is terminal for the invocation.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to retrieve message {object}: {source}")]
    Retrieval {
        object: StoredObjectRef,
        #[source]
        source: StoreError,
    },
    #[error("failed to parse message: {0}")]
    Parse(#[from] ParseError),
    #[error("classification failed: {0}")]
    Inference(#[from] InferenceError),
    #[error("failed to deliver notification: {0}")]
    Delivery(#[from] DeliveryError),
}
