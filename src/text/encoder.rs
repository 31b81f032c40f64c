//! Multi-hot encoding of message text.
//!
//! Token indices come from the hashing trick the classifier was trained with:
//! lowercase, blank out punctuation, split on spaces, then
//! `md5(token) mod (V - 1) + 1`. Changing any of these steps silently
//! desynchronizes the encoder from the deployed model.

use md5::{Digest, Md5};
use thiserror::Error;

use crate::domain::FeatureVector;

const FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncoderError {
    #[error("vocabulary length must be at least 2, got {0}")]
    InvalidVocabulary(usize),
}

#[derive(Debug, Clone, Copy)]
pub struct VocabularyEncoder {
    vocabulary_length: usize,
}

impl VocabularyEncoder {
    pub fn new(vocabulary_length: usize) -> Result<Self, EncoderError> {
        if vocabulary_length < 2 {
            return Err(EncoderError::InvalidVocabulary(vocabulary_length));
        }
        Ok(Self { vocabulary_length })
    }

    pub fn vocabulary_length(&self) -> usize {
        self.vocabulary_length
    }

    pub fn encode(&self, text: &str) -> FeatureVector {
        let mut vector = FeatureVector::zeros(self.vocabulary_length);
        for token in tokenize(text) {
            vector.mark(self.token_index(&token));
        }
        vector
    }

    /// Index in `[1, V)`. Position 0 is never produced.
    pub fn token_index(&self, token: &str) -> usize {
        let digest = Md5::digest(token.as_bytes());
        let hash = u128::from_be_bytes(digest.into());
        let modulus = (self.vocabulary_length - 1) as u128;
        (hash % modulus) as usize + 1
    }
}

pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|ch| if FILTERS.contains(ch) { ' ' } else { ch })
        .collect();
    cleaned
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
