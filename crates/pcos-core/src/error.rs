use thiserror::Error;

/// Reasons a prediction request is rejected before it reaches the model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Request body was not a JSON object.
    #[error("Request body must be a JSON object of feature values")]
    NotAnObject,

    /// Wrong number of entries in the request.
    #[error("Incorrect number of features. Expected: {expected}, got: {got}")]
    FieldCountMismatch { expected: usize, got: usize },

    /// A key that is not part of the feature schema.
    #[error("Unknown feature: '{0}'")]
    UnknownField(String),

    /// A schema feature absent from the request.
    #[error("Missing feature: '{0}'")]
    MissingField(String),

    /// Value outside a fixed code table.
    #[error("Invalid {feature} value: {value}")]
    InvalidCategoricalValue { feature: String, value: String },

    /// Value outside a small set of single-letter codes.
    #[error("Invalid value for '{feature}'. Must be {}", quote_allowed(.allowed))]
    InvalidEnumValue {
        feature: String,
        value: String,
        allowed: &'static [&'static str],
    },

    /// Value that does not parse as a number.
    #[error("Invalid value for '{feature}'. Expected a numeric value.")]
    InvalidNumericValue { feature: String, value: String },
}

impl ValidationError {
    /// The feature the error refers to, if any.
    pub fn feature(&self) -> Option<&str> {
        match self {
            ValidationError::NotAnObject | ValidationError::FieldCountMismatch { .. } => None,
            ValidationError::UnknownField(name) | ValidationError::MissingField(name) => {
                Some(name)
            }
            ValidationError::InvalidCategoricalValue { feature, .. }
            | ValidationError::InvalidEnumValue { feature, .. }
            | ValidationError::InvalidNumericValue { feature, .. } => Some(feature),
        }
    }
}

fn quote_allowed(allowed: &[&str]) -> String {
    allowed
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(" or ")
}
