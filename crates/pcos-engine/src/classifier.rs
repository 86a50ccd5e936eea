//! Binary classifiers loadable from exported parameters.

use pcos_core::FEATURE_COUNT;
use serde::{Deserialize, Serialize};

use crate::error::{check_finite, check_vector, ArtifactError};
use crate::math::{dot, sigmoid, squared_distance};

/// Kernel function of a support-vector classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Kernel {
    Linear,
    Rbf { gamma: f64 },
    Poly { gamma: f64, coef0: f64, degree: u32 },
    Sigmoid { gamma: f64, coef0: f64 },
}

impl Kernel {
    pub fn apply(&self, a: &[f64], b: &[f64]) -> f64 {
        match *self {
            Kernel::Linear => dot(a, b),
            Kernel::Rbf { gamma } => (-gamma * squared_distance(a, b)).exp(),
            Kernel::Poly { gamma, coef0, degree } => {
                (gamma * dot(a, b) + coef0).powi(degree as i32)
            }
            Kernel::Sigmoid { gamma, coef0 } => (gamma * dot(a, b) + coef0).tanh(),
        }
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        let (gamma, coef0) = match *self {
            Kernel::Linear => return Ok(()),
            Kernel::Rbf { gamma } => (gamma, 0.0),
            Kernel::Poly { degree: 0, .. } => {
                return Err(invalid("kernel.degree", "degree must be at least 1".into()));
            }
            Kernel::Poly { gamma, coef0, .. } | Kernel::Sigmoid { gamma, coef0 } => {
                (gamma, coef0)
            }
        };
        if !(gamma.is_finite() && gamma > 0.0) {
            return Err(invalid("kernel.gamma", format!("gamma must be positive, got {gamma}")));
        }
        check_finite(Classifier::ARTIFACT, "kernel.coef0", &[coef0])
    }
}

/// Support-vector classifier with Platt-scaled probabilities.
///
/// The decision value is `d = Σ dual_coef[i] · K(sv[i], x) + intercept`,
/// positive meaning class 1, and `P(class=1) = 1 / (1 + exp(prob_a · d + prob_b))`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvcModel {
    pub kernel: Kernel,
    pub support_vectors: Vec<Vec<f64>>,
    pub dual_coef: Vec<f64>,
    pub intercept: f64,
    pub prob_a: f64,
    pub prob_b: f64,
}

impl SvcModel {
    pub fn decision_function(&self, x: &[f64]) -> f64 {
        self.support_vectors
            .iter()
            .zip(&self.dual_coef)
            .map(|(sv, coef)| coef * self.kernel.apply(sv, x))
            .sum::<f64>()
            + self.intercept
    }

    pub fn positive_probability(&self, decision: f64) -> f64 {
        sigmoid(-(self.prob_a * decision + self.prob_b))
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        self.kernel.validate()?;
        if self.support_vectors.is_empty() {
            return Err(invalid("support_vectors", "no support vectors".into()));
        }
        for sv in &self.support_vectors {
            check_vector(Classifier::ARTIFACT, "support_vectors", sv, FEATURE_COUNT)?;
        }
        check_vector(
            Classifier::ARTIFACT,
            "dual_coef",
            &self.dual_coef,
            self.support_vectors.len(),
        )?;
        check_finite(
            Classifier::ARTIFACT,
            "intercept/prob_a/prob_b",
            &[self.intercept, self.prob_a, self.prob_b],
        )
    }
}

/// Logistic-regression classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    pub bias: f64,
    /// `P(class=1)` above this is class 1.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

impl LogisticModel {
    pub fn decision_function(&self, x: &[f64]) -> f64 {
        dot(&self.weights, x) + self.bias
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        check_vector(Classifier::ARTIFACT, "weights", &self.weights, FEATURE_COUNT)?;
        check_finite(Classifier::ARTIFACT, "bias", &[self.bias])?;
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(invalid(
                "threshold",
                format!("threshold {} not in [0, 1]", self.threshold),
            ));
        }
        Ok(())
    }
}

/// Class index and `P(class=1)` for one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub class: u8,
    pub positive_probability: f64,
}

/// Fitted binary classifier, tagged by `"kind"` in its artifact file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classifier {
    Svc(SvcModel),
    Logistic(LogisticModel),
}

impl Classifier {
    pub const ARTIFACT: &'static str = "classifier";

    pub fn kind(&self) -> &'static str {
        match self {
            Classifier::Svc(_) => "svc",
            Classifier::Logistic(_) => "logistic",
        }
    }

    pub fn validate(&self) -> Result<(), ArtifactError> {
        match self {
            Classifier::Svc(model) => model.validate(),
            Classifier::Logistic(model) => model.validate(),
        }
    }

    /// Label and probability for a scaled input.
    ///
    /// For the SVC the label follows the sign of the decision value, as the
    /// fitted model's own `predict` does, so it can disagree with the Platt
    /// probability near the boundary.
    pub fn decide(&self, x: &[f64]) -> Decision {
        match self {
            Classifier::Svc(model) => {
                let decision = model.decision_function(x);
                Decision {
                    class: u8::from(decision > 0.0),
                    positive_probability: model.positive_probability(decision),
                }
            }
            Classifier::Logistic(model) => {
                let p = sigmoid(model.decision_function(x));
                Decision {
                    class: u8::from(p > model.threshold),
                    positive_probability: p,
                }
            }
        }
    }
}

fn invalid(field: &'static str, reason: String) -> ArtifactError {
    ArtifactError::InvalidParameter {
        artifact: Classifier::ARTIFACT,
        field,
        reason,
    }
}
