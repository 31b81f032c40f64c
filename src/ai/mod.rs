pub mod client;
pub mod inference;

pub use client::{HttpInferenceEndpoint, SpamClassifier};
pub use inference::InferenceError;
