//! Missing-value imputation.

use pcos_core::{EncodedFeatureVector, FEATURE_COUNT};
use serde::{Deserialize, Serialize};

use crate::error::{check_vector, ArtifactError};

/// How the fill values were computed at training time. Informational only:
/// transform always substitutes the stored statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImputeStrategy {
    #[default]
    Mean,
    Median,
    MostFrequent,
    Constant,
}

/// Fitted imputer: one fill value per feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Imputer {
    #[serde(default)]
    pub strategy: ImputeStrategy,
    pub statistics: Vec<f64>,
}

impl Imputer {
    pub const ARTIFACT: &'static str = "imputer";

    pub fn validate(&self) -> Result<(), ArtifactError> {
        check_vector(Self::ARTIFACT, "statistics", &self.statistics, FEATURE_COUNT)
    }

    /// Replaces every NaN with the fill value for its position.
    pub fn transform(&self, input: &EncodedFeatureVector) -> [f64; FEATURE_COUNT] {
        let mut out = *input.values();
        for (value, fill) in out.iter_mut().zip(&self.statistics) {
            if value.is_nan() {
                *value = *fill;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_only_missing() {
        let imputer = Imputer {
            strategy: ImputeStrategy::Median,
            statistics: (0..FEATURE_COUNT).map(|i| i as f64 * 10.0).collect(),
        };
        imputer.validate().unwrap();

        let mut values = [1.0; FEATURE_COUNT];
        values[3] = f64::NAN;
        values[16] = f64::NAN;
        let out = imputer.transform(&EncodedFeatureVector::new(values));

        assert_eq!(out[0], 1.0);
        assert_eq!(out[3], 30.0);
        assert_eq!(out[16], 160.0);
        assert!(out.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_validate_rejects_bad_statistics() {
        let short = Imputer { strategy: ImputeStrategy::Mean, statistics: vec![0.0; 3] };
        assert!(matches!(
            short.validate(),
            Err(ArtifactError::DimensionMismatch { expected: 17, got: 3, .. })
        ));

        let mut statistics = vec![0.0; FEATURE_COUNT];
        statistics[5] = f64::NAN;
        let nan = Imputer { strategy: ImputeStrategy::Mean, statistics };
        assert!(matches!(nan.validate(), Err(ArtifactError::NonFinite { index: 5, .. })));
    }

    #[test]
    fn test_strategy_defaults_to_mean() {
        let json = format!("{{\"statistics\": {:?}}}", vec![1.0; FEATURE_COUNT]);
        let imputer: Imputer = serde_json::from_str(&json).unwrap();
        assert_eq!(imputer.strategy, ImputeStrategy::Mean);
    }
}
