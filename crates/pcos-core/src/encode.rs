//! Request validation and encoding into the model's numeric input.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::schema::{
    feature_kind, lookup, FeatureKind, BINARY_CODES, BLOOD_GROUP_CODES, CYCLE_CODES,
    FEATURE_COUNT, FEATURE_NAMES,
};

/// A prediction request as received: feature name to raw JSON value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInputRecord(Map<String, Value>);

impl RawInputRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wraps an arbitrary JSON value, rejecting anything but an object.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            _ => Err(ValidationError::NotAnObject),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }
}

impl From<Map<String, Value>> for RawInputRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Model input in schema order. NaN marks a missing value for the imputer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedFeatureVector([f64; FEATURE_COUNT]);

impl EncodedFeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of entries still missing (NaN).
    pub fn missing_count(&self) -> usize {
        self.0.iter().filter(|v| v.is_nan()).count()
    }
}

/// Validates `record` against the schema and encodes it.
///
/// Checks run in this order and stop at the first failure:
/// entry count, unknown keys, then each schema feature by name.
pub fn encode(record: &RawInputRecord) -> Result<EncodedFeatureVector, ValidationError> {
    if record.len() != FEATURE_COUNT {
        return Err(ValidationError::FieldCountMismatch {
            expected: FEATURE_COUNT,
            got: record.len(),
        });
    }

    if let Some(unknown) = record.0.keys().find(|k| !FEATURE_NAMES.contains(&k.as_str())) {
        return Err(ValidationError::UnknownField(unknown.clone()));
    }

    let mut values = [0.0; FEATURE_COUNT];
    for (slot, name) in values.iter_mut().zip(FEATURE_NAMES) {
        let raw = record
            .get(name)
            .ok_or_else(|| ValidationError::MissingField(name.to_string()))?;
        *slot = encode_value(name, raw)?;
    }

    Ok(EncodedFeatureVector(values))
}

/// Encodes one value according to the rule for `feature`.
pub fn encode_value(feature: &str, raw: &Value) -> Result<f64, ValidationError> {
    match feature_kind(feature) {
        FeatureKind::BloodGroup => raw
            .as_str()
            .and_then(|code| lookup(&BLOOD_GROUP_CODES, code))
            .ok_or_else(|| ValidationError::InvalidCategoricalValue {
                feature: feature.to_string(),
                value: display_value(raw),
            }),
        kind @ (FeatureKind::CycleRegularity | FeatureKind::Binary) => {
            let table: &[(&str, f64)] = match kind {
                FeatureKind::CycleRegularity => &CYCLE_CODES,
                _ => &BINARY_CODES,
            };
            raw.as_str()
                .and_then(|code| lookup(table, &code.to_uppercase()))
                .ok_or_else(|| ValidationError::InvalidEnumValue {
                    feature: feature.to_string(),
                    value: display_value(raw),
                    allowed: kind.allowed_values(),
                })
        }
        FeatureKind::Numeric => parse_numeric(raw).ok_or_else(|| {
            ValidationError::InvalidNumericValue {
                feature: feature.to_string(),
                value: display_value(raw),
            }
        }),
    }
}

// null and "nan" are missing values; infinities are rejected.
fn parse_numeric(raw: &Value) -> Option<f64> {
    let parsed = match raw {
        Value::Null => return Some(f64::NAN),
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (!parsed.is_infinite()).then_some(parsed)
}

fn display_value(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
