//! Impute, scale, classify.

use pcos_core::{EncodedFeatureVector, PredictionResult, FEATURE_COUNT};
use tracing::debug;

use crate::classifier::Classifier;
use crate::error::InferenceError;
use crate::imputer::Imputer;
use crate::scaler::Scaler;

/// The three fitted artifacts, applied in a fixed order.
///
/// Immutable once built; share it behind an `Arc` across request handlers.
#[derive(Debug, Clone)]
pub struct InferencePipeline {
    imputer: Imputer,
    scaler: Scaler,
    classifier: Classifier,
}

impl InferencePipeline {
    pub fn new(imputer: Imputer, scaler: Scaler, classifier: Classifier) -> Self {
        Self {
            imputer,
            scaler,
            classifier,
        }
    }

    pub fn imputer(&self) -> &Imputer {
        &self.imputer
    }

    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Runs one encoded request through the model.
    pub fn infer(&self, vector: &EncodedFeatureVector) -> Result<PredictionResult, InferenceError> {
        self.check_dimensions()?;

        let imputed = self.imputer.transform(vector);
        ensure_finite("imputation", &imputed)?;

        let scaled = self.scaler.transform(&imputed);
        ensure_finite("scaling", &scaled)?;

        let decision = self.classifier.decide(&scaled);
        ensure_finite("classification", &[decision.positive_probability])?;

        debug!(
            missing = vector.missing_count(),
            class = decision.class,
            p_positive = decision.positive_probability,
            "Inference complete"
        );

        Ok(PredictionResult::from_class_probability(
            decision.class,
            decision.positive_probability,
        ))
    }

    // Artifacts built in code skip the load-time validation.
    fn check_dimensions(&self) -> Result<(), InferenceError> {
        let lengths = [
            ("imputation", self.imputer.statistics.len()),
            ("scaling", self.scaler.mean.len().min(self.scaler.scale.len())),
        ];
        for (stage, got) in lengths {
            if got != FEATURE_COUNT {
                return Err(InferenceError::DimensionMismatch {
                    stage,
                    expected: FEATURE_COUNT,
                    got,
                });
            }
        }
        Ok(())
    }
}

fn ensure_finite(stage: &'static str, values: &[f64]) -> Result<(), InferenceError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(InferenceError::NonFinite { stage, index }),
        None => Ok(()),
    }
}
