//! Feature standardisation.

use pcos_core::FEATURE_COUNT;
use serde::{Deserialize, Serialize};

use crate::error::{check_vector, ArtifactError};

/// Fitted standard scaler: `(x - mean) / scale` per feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl Scaler {
    pub const ARTIFACT: &'static str = "scaler";

    pub fn validate(&self) -> Result<(), ArtifactError> {
        check_vector(Self::ARTIFACT, "mean", &self.mean, FEATURE_COUNT)?;
        check_vector(Self::ARTIFACT, "scale", &self.scale, FEATURE_COUNT)?;
        if let Some(index) = self.scale.iter().position(|s| *s < 0.0) {
            return Err(ArtifactError::InvalidParameter {
                artifact: Self::ARTIFACT,
                field: "scale",
                reason: format!("negative scale at index {index}"),
            });
        }
        Ok(())
    }

    pub fn transform(&self, input: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut out = *input;
        for ((value, mean), scale) in out.iter_mut().zip(&self.mean).zip(&self.scale) {
            // Constant features were fitted with zero variance.
            let scale = if *scale == 0.0 { 1.0 } else { *scale };
            *value = (*value - mean) / scale;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardises() {
        let mut mean = vec![0.0; FEATURE_COUNT];
        let mut scale = vec![1.0; FEATURE_COUNT];
        mean[0] = 30.0;
        scale[0] = 5.0;
        scale[1] = 0.0;
        let scaler = Scaler { mean, scale };
        scaler.validate().unwrap();

        let mut input = [2.0; FEATURE_COUNT];
        input[0] = 25.0;
        let out = scaler.transform(&input);
        assert_eq!(out[0], -1.0);
        assert_eq!(out[1], 2.0);
        assert_eq!(out[2], 2.0);
    }

    #[test]
    fn test_validate_rejects_negative_scale() {
        let mut scale = vec![1.0; FEATURE_COUNT];
        scale[7] = -0.5;
        let scaler = Scaler { mean: vec![0.0; FEATURE_COUNT], scale };
        assert!(matches!(
            scaler.validate(),
            Err(ArtifactError::InvalidParameter { field: "scale", .. })
        ));
    }
}
