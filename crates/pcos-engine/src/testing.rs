//! Small hand-fitted artifacts for unit tests.

use crate::classifier::{Classifier, Kernel, SvcModel};
use crate::imputer::{ImputeStrategy, Imputer};
use crate::scaler::Scaler;

const MEAN: [f64; 17] = [
    30.0, 59.0, 156.0, 24.0, 14.0, 2.5, 5.0, 7.5, 0.4, 0.3, 0.4, 0.3, 0.3, 0.45, 0.5, 0.5, 0.25,
];

const SCALE: [f64; 17] = [
    5.4, 11.0, 6.0, 4.0, 2.0, 1.4, 1.5, 4.8, 0.5, 0.7, 0.5, 0.45, 0.45, 0.5, 0.5, 0.5, 0.43,
];

// Cycle irregularity, weight gain, hair growth and skin darkening dominate.
const WEIGHTS: [f64; 17] = [
    0.0, 0.2, 0.0, 0.3, 0.0, 0.8, 0.0, 0.0, 0.0, 0.0, 0.6, 0.9, 0.7, 0.2, 0.4, 0.4, 0.0,
];

pub(crate) fn sample_imputer() -> Imputer {
    Imputer {
        strategy: ImputeStrategy::Mean,
        statistics: MEAN.to_vec(),
    }
}

pub(crate) fn sample_scaler() -> Scaler {
    Scaler {
        mean: MEAN.to_vec(),
        scale: SCALE.to_vec(),
    }
}

pub(crate) fn sample_classifier() -> Classifier {
    Classifier::Svc(SvcModel {
        kernel: Kernel::Linear,
        support_vectors: vec![WEIGHTS.to_vec()],
        dual_coef: vec![1.0],
        intercept: -0.5,
        prob_a: -1.2,
        prob_b: 0.05,
    })
}
