use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Ham,
    Spam,
}

impl Label {
    /// The model emits `0` for ham; every other code is spam.
    pub fn from_code(code: f64) -> Self {
        if code == 0.0 {
            Label::Ham
        } else {
            Label::Spam
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Ham => "Ham",
            Label::Spam => "Spam",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationResult {
    pub label: Label,
    /// Percentage, `probability * 100`, never rounded.
    pub confidence: f64,
}

/// Multi-hot model input. Length is always the vocabulary size.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector {
    values: Vec<f32>,
}

impl FeatureVector {
    pub fn zeros(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    /// Marks `index` as present. Indices past the end are ignored.
    pub fn mark(&mut self, index: usize) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = 1.0;
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn active_count(&self) -> usize {
        self.as_slice().iter().filter(|v| **v != 0.0).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObjectRef {
    pub container: String,
    pub key: String,
}

impl fmt::Display for StoredObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.container, self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPayload {
    pub recipient: String,
    pub body: String,
}
