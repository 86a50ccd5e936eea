//! Model artifacts and the inference pipeline for pcos-predict.
//!
//! Three fitted artifacts are exported from training as JSON and loaded once
//! at startup through [`ArtifactStore::load`]:
//!
//! - [`Imputer`] — fills missing values
//! - [`Scaler`] — standardises features
//! - [`Classifier`] — support-vector or logistic classifier
//!
//! The resulting [`InferencePipeline`] is read-only and turns an
//! [`EncodedFeatureVector`](pcos_core::EncodedFeatureVector) into a
//! [`PredictionResult`](pcos_core::PredictionResult).

mod classifier;
mod error;
mod imputer;
mod math;
mod pipeline;
mod scaler;
mod store;
#[cfg(test)]
mod testing;

pub use classifier::{Classifier, Decision, Kernel, LogisticModel, SvcModel};
pub use error::{ArtifactError, InferenceError};
pub use imputer::{ImputeStrategy, Imputer};
pub use pipeline::InferencePipeline;
pub use scaler::Scaler;
pub use store::{ArtifactPaths, ArtifactStore};
