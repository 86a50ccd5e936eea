//! The fixed feature schema the classifier was trained on.

use serde::Serialize;

/// Number of features the model consumes.
pub const FEATURE_COUNT: usize = 17;

/// Feature names in model input order. Position `i` here is position `i` in
/// every encoded vector and every artifact parameter array.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Age (yrs)",
    "Weight (Kg)",
    "Height(Cm)",
    "BMI",
    "Blood Group",
    "Cycle(R/I)",
    "Cycle length(days)",
    "Marriage Status (Yrs)",
    "Pregnant(Y/N)",
    "No. of aborptions",
    "Weight gain(Y/N)",
    "hair growth(Y/N)",
    "Skin darkening (Y/N)",
    "Hair loss(Y/N)",
    "Pimples(Y/N)",
    "Fast food (Y/N)",
    "Reg.Exercise(Y/N)",
];

pub const BLOOD_GROUP: &str = "Blood Group";
pub const CYCLE_REGULARITY: &str = "Cycle(R/I)";

/// Blood group codes, matched case-sensitively.
pub const BLOOD_GROUP_CODES: [(&str, f64); 8] = [
    ("A+", 11.0),
    ("A-", 12.0),
    ("B+", 13.0),
    ("B-", 14.0),
    ("O+", 15.0),
    ("O-", 16.0),
    ("AB+", 17.0),
    ("AB-", 18.0),
];

/// Cycle regularity: regular / irregular.
pub const CYCLE_CODES: [(&str, f64); 2] = [("R", 2.0), ("I", 5.0)];

pub const BINARY_CODES: [(&str, f64); 2] = [("Y", 1.0), ("N", 0.0)];

/// How a feature's raw value is turned into a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    /// Plain number, or a string holding one.
    Numeric,
    /// One of [`BLOOD_GROUP_CODES`], exact case.
    BloodGroup,
    /// `R` or `I`, any case.
    CycleRegularity,
    /// `Y` or `N`, any case.
    Binary,
}

impl FeatureKind {
    /// Accepted codes for categorical kinds, empty for numeric.
    pub fn allowed_values(self) -> &'static [&'static str] {
        match self {
            FeatureKind::Numeric => &[],
            FeatureKind::BloodGroup => &["A+", "A-", "B+", "B-", "O+", "O-", "AB+", "AB-"],
            FeatureKind::CycleRegularity => &["R", "I"],
            FeatureKind::Binary => &["Y", "N"],
        }
    }
}

/// Returns the kind of the feature with the given schema name.
pub fn feature_kind(name: &str) -> FeatureKind {
    match name {
        BLOOD_GROUP => FeatureKind::BloodGroup,
        CYCLE_REGULARITY => FeatureKind::CycleRegularity,
        "Pregnant(Y/N)"
        | "Weight gain(Y/N)"
        | "hair growth(Y/N)"
        | "Skin darkening (Y/N)"
        | "Hair loss(Y/N)"
        | "Pimples(Y/N)"
        | "Fast food (Y/N)"
        | "Reg.Exercise(Y/N)" => FeatureKind::Binary,
        _ => FeatureKind::Numeric,
    }
}

/// Public description of one schema entry.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureDescriptor {
    pub position: usize,
    pub name: &'static str,
    pub kind: FeatureKind,
    #[serde(skip_serializing_if = "no_values")]
    pub allowed_values: &'static [&'static str],
}

fn no_values(values: &&[&str]) -> bool {
    values.is_empty()
}

/// Describes the whole schema in input order.
pub fn feature_descriptors() -> Vec<FeatureDescriptor> {
    FEATURE_NAMES
        .iter()
        .enumerate()
        .map(|(position, &name)| {
            let kind = feature_kind(name);
            FeatureDescriptor {
                position,
                name,
                kind,
                allowed_values: kind.allowed_values(),
            }
        })
        .collect()
}

pub(crate) fn lookup(table: &[(&str, f64)], code: &str) -> Option<f64> {
    table.iter().find(|(c, _)| *c == code).map(|(_, v)| *v)
}
