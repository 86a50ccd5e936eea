use pcos_core::{Diagnosis, FeatureDescriptor, PredictionResult};
use serde::Serialize;

// === HTTP DTOs ===

/// Body of a successful `POST /predict`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub prediction: Diagnosis,
    #[serde(rename = "PCOS_probability")]
    pub pcos_probability: f64,
    #[serde(rename = "No_PCOS_probability")]
    pub no_pcos_probability: f64,
}

impl From<PredictionResult> for PredictResponse {
    fn from(result: PredictionResult) -> Self {
        Self {
            prediction: result.label,
            pcos_probability: result.positive_probability,
            no_pcos_probability: result.negative_probability,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeaturesResponse {
    pub count: usize,
    pub features: Vec<FeatureDescriptor>,
}
