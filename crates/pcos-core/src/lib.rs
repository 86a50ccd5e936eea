//! Core domain types for pcos-predict.
//!
//! This crate owns everything about a prediction request that does not need
//! the fitted model:
//!
//! - [`FEATURE_NAMES`] and [`FeatureKind`] — the fixed 17-feature schema
//! - [`encode`] — validates a [`RawInputRecord`] into an [`EncodedFeatureVector`]
//! - [`ValidationError`] — why a request was rejected
//! - [`PredictionResult`] and [`Diagnosis`] — what the model answers
//!
//! # Example
//!
//! ```rust
//! use pcos_core::{encode, RawInputRecord, ValidationError};
//! use serde_json::json;
//!
//! let record = RawInputRecord::from_value(json!({ "Age (yrs)": 25 })).unwrap();
//! assert!(matches!(
//!     encode(&record),
//!     Err(ValidationError::FieldCountMismatch { expected: 17, got: 1 })
//! ));
//! ```

mod encode;
mod error;
mod schema;

pub use encode::{encode, encode_value, EncodedFeatureVector, RawInputRecord};
pub use error::ValidationError;
pub use schema::{
    feature_descriptors, feature_kind, FeatureDescriptor, FeatureKind, BINARY_CODES,
    BLOOD_GROUP, BLOOD_GROUP_CODES, CYCLE_CODES, CYCLE_REGULARITY, FEATURE_COUNT, FEATURE_NAMES,
};

use serde::{Deserialize, Serialize};

/// Class label produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnosis {
    #[serde(rename = "PCOS")]
    Pcos,
    #[serde(rename = "No PCOS")]
    NoPcos,
}

impl Diagnosis {
    /// Maps the classifier's class index (1 = positive) to a label.
    pub fn from_class(class: u8) -> Self {
        if class == 1 {
            Diagnosis::Pcos
        } else {
            Diagnosis::NoPcos
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Diagnosis::Pcos => "PCOS",
            Diagnosis::NoPcos => "No PCOS",
        }
    }
}

impl std::fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one inference. Probabilities are percentages summing to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: Diagnosis,
    pub positive_probability: f64,
    pub negative_probability: f64,
}

impl PredictionResult {
    /// Builds a result from a class index and `P(class=1)` in `[0, 1]`.
    pub fn from_class_probability(class: u8, positive: f64) -> Self {
        Self {
            label: Diagnosis::from_class(class),
            positive_probability: positive * 100.0,
            negative_probability: (1.0 - positive) * 100.0,
        }
    }
}
