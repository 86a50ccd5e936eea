//! Loading fitted artifacts from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use crate::classifier::Classifier;
use crate::error::ArtifactError;
use crate::imputer::Imputer;
use crate::pipeline::InferencePipeline;
use crate::scaler::Scaler;

/// Locations of the three artifact files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub imputer: PathBuf,
    pub scaler: PathBuf,
    pub classifier: PathBuf,
}

impl ArtifactPaths {
    pub const DEFAULT_IMPUTER: &'static str = "imputer.json";
    pub const DEFAULT_SCALER: &'static str = "scaler.json";
    pub const DEFAULT_CLASSIFIER: &'static str = "pcos_svm_model.json";

    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            imputer: dir.join(Self::DEFAULT_IMPUTER),
            scaler: dir.join(Self::DEFAULT_SCALER),
            classifier: dir.join(Self::DEFAULT_CLASSIFIER),
        }
    }

    fn all(&self) -> [&Path; 3] {
        [&self.imputer, &self.scaler, &self.classifier]
    }
}

/// Reads and validates artifact files.
pub struct ArtifactStore;

impl ArtifactStore {
    /// Loads all three artifacts into a ready pipeline.
    ///
    /// Every missing file is reported together before any file is parsed.
    pub fn load(paths: &ArtifactPaths) -> Result<InferencePipeline, ArtifactError> {
        let missing: Vec<PathBuf> = paths
            .all()
            .into_iter()
            .filter(|p| !p.is_file())
            .map(Path::to_path_buf)
            .collect();
        if !missing.is_empty() {
            return Err(ArtifactError::Missing(missing));
        }

        let imputer: Imputer = read_json(&paths.imputer)?;
        imputer.validate()?;
        let scaler: Scaler = read_json(&paths.scaler)?;
        scaler.validate()?;
        let classifier: Classifier = read_json(&paths.classifier)?;
        classifier.validate()?;

        info!(
            imputer = %paths.imputer.display(),
            scaler = %paths.scaler.display(),
            classifier = %paths.classifier.display(),
            kind = classifier.kind(),
            "Loaded model artifacts"
        );

        Ok(InferencePipeline::new(imputer, scaler, classifier))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let content = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
