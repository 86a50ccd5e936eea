use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use pcos_config::ServerConfig;
use pcos_engine::{
    ArtifactPaths, ArtifactStore, Classifier, ImputeStrategy, Imputer, Kernel, Scaler, SvcModel,
};
use pcos_server::{app, ServerState};
use serde_json::{json, Value};

const MEAN: [f64; 17] = [
    30.0, 59.0, 156.0, 24.0, 14.0, 2.5, 5.0, 7.5, 0.4, 0.3, 0.4, 0.3, 0.3, 0.45, 0.5, 0.5, 0.25,
];

const SCALE: [f64; 17] = [
    5.4, 11.0, 6.0, 4.0, 2.0, 1.4, 1.5, 4.8, 0.5, 0.7, 0.5, 0.45, 0.45, 0.5, 0.5, 0.5, 0.43,
];

const WEIGHTS: [f64; 17] = [
    0.0, 0.2, 0.0, 0.3, 0.0, 0.8, 0.0, 0.0, 0.0, 0.0, 0.6, 0.9, 0.7, 0.2, 0.4, 0.4, 0.0,
];

/// Artifact directory removed on drop.
pub struct ModelDir(pub PathBuf);

impl ModelDir {
    pub fn with_sample_artifacts() -> Self {
        let dir = std::env::temp_dir().join(format!("pcos-server-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();

        let imputer = Imputer {
            strategy: ImputeStrategy::Mean,
            statistics: MEAN.to_vec(),
        };
        let scaler = Scaler {
            mean: MEAN.to_vec(),
            scale: SCALE.to_vec(),
        };
        let classifier = Classifier::Svc(SvcModel {
            kernel: Kernel::Linear,
            support_vectors: vec![WEIGHTS.to_vec()],
            dual_coef: vec![1.0],
            intercept: -0.5,
            prob_a: -1.2,
            prob_b: 0.05,
        });

        let paths = ArtifactPaths::in_dir(&dir);
        fs::write(&paths.imputer, serde_json::to_string(&imputer).unwrap()).unwrap();
        fs::write(&paths.scaler, serde_json::to_string(&scaler).unwrap()).unwrap();
        fs::write(&paths.classifier, serde_json::to_string(&classifier).unwrap()).unwrap();
        Self(dir)
    }
}

impl Drop for ModelDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

/// Router backed by artifacts loaded from a fresh temp directory.
pub fn test_app() -> Router {
    let dir = ModelDir::with_sample_artifacts();
    let pipeline = ArtifactStore::load(&ArtifactPaths::in_dir(&dir.0)).unwrap();
    app(Arc::new(ServerState::new(pipeline)), &ServerConfig::default())
}

/// Scenario A: healthy adult, regular cycle, no symptoms.
pub fn healthy_record() -> Value {
    json!({
        "Age (yrs)": 25,
        "Weight (Kg)": 60,
        "Height(Cm)": 165,
        "BMI": 22,
        "Blood Group": "O+",
        "Cycle(R/I)": "R",
        "Cycle length(days)": 28,
        "Marriage Status (Yrs)": 2,
        "Pregnant(Y/N)": "N",
        "No. of aborptions": 0,
        "Weight gain(Y/N)": "N",
        "hair growth(Y/N)": "N",
        "Skin darkening (Y/N)": "N",
        "Hair loss(Y/N)": "N",
        "Pimples(Y/N)": "N",
        "Fast food (Y/N)": "N",
        "Reg.Exercise(Y/N)": "N"
    })
}

/// Irregular cycle with most symptoms present, values sent as strings.
pub fn symptomatic_record() -> Value {
    json!({
        "Age (yrs)": "28",
        "Weight (Kg)": "78",
        "Height(Cm)": "158",
        "BMI": "31.2",
        "Blood Group": "B+",
        "Cycle(R/I)": "i",
        "Cycle length(days)": "45",
        "Marriage Status (Yrs)": "4",
        "Pregnant(Y/N)": "n",
        "No. of aborptions": "0",
        "Weight gain(Y/N)": "y",
        "hair growth(Y/N)": "Y",
        "Skin darkening (Y/N)": "y",
        "Hair loss(Y/N)": "Y",
        "Pimples(Y/N)": "y",
        "Fast food (Y/N)": "Y",
        "Reg.Exercise(Y/N)": "N"
    })
}
