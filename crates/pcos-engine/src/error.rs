use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or validating a model artifact.
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// One or more artifact files are absent.
    #[error("Model artifact files missing: {}", display_paths(.0))]
    Missing(Vec<PathBuf>),

    #[error("Failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{artifact}: {field} has {got} entries, expected {expected}")]
    DimensionMismatch {
        artifact: &'static str,
        field: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{artifact}: non-finite value in {field} at index {index}")]
    NonFinite {
        artifact: &'static str,
        field: &'static str,
        index: usize,
    },

    #[error("{artifact}: invalid parameter {field}: {reason}")]
    InvalidParameter {
        artifact: &'static str,
        field: &'static str,
        reason: String,
    },
}

/// Errors from applying loaded artifacts to a request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// A stage produced NaN or an infinity.
    #[error("non-finite value after {stage} at index {index}")]
    NonFinite { stage: &'static str, index: usize },

    /// Input vector length does not match the artifact.
    #[error("{stage} expects {expected} features, got {got}")]
    DimensionMismatch {
        stage: &'static str,
        expected: usize,
        got: usize,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks that `values` has `expected` finite entries.
pub(crate) fn check_vector(
    artifact: &'static str,
    field: &'static str,
    values: &[f64],
    expected: usize,
) -> Result<(), ArtifactError> {
    if values.len() != expected {
        return Err(ArtifactError::DimensionMismatch {
            artifact,
            field,
            expected,
            got: values.len(),
        });
    }
    check_finite(artifact, field, values)
}

pub(crate) fn check_finite(
    artifact: &'static str,
    field: &'static str,
    values: &[f64],
) -> Result<(), ArtifactError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ArtifactError::NonFinite { artifact, field, index }),
        None => Ok(()),
    }
}
