use crate::models::{FieldValue, NewRecord, RecordPayload};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Field {field} must be a string, got {found}")]
    WrongType { field: &'static str, found: &'static str },
    #[error("Field {field} must be an integer, got {value}")]
    NotAnInteger { field: &'static str, value: String },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field) => field,
            ValidationError::WrongType { field, .. } => field,
            ValidationError::NotAnInteger { field, .. } => field,
        }
    }
}

fn required<'a>(field: &'static str, value: &'a Option<FieldValue>) -> Result<&'a FieldValue, ValidationError> {
    value.as_ref().ok_or(ValidationError::MissingField(field))
}

fn text(field: &'static str, value: &Option<FieldValue>) -> Result<String, ValidationError> {
    match required(field, value)? {
        FieldValue::Text(s) => Ok(s.clone()),
        other => Err(ValidationError::WrongType { field, found: other.kind() }),
    }
}

fn integer(field: &'static str, value: &Option<FieldValue>) -> Result<i64, ValidationError> {
    let not_an_integer = |value: String| ValidationError::NotAnInteger { field, value };

    match required(field, value)? {
        FieldValue::Integer(n) => Ok(*n),
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        FieldValue::Float(f) if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 => {
            Ok(*f as i64)
        }
        FieldValue::Float(f) => Err(not_an_integer(f.to_string())),
        FieldValue::Text(s) => s.trim().parse::<i64>().map_err(|_| not_an_integer(format!("{s:?}"))),
        FieldValue::Flag(b) => Err(not_an_integer(b.to_string())),
    }
}

/// Coerces raw fields into a storable record. Fields are checked in
/// declaration order and the first failure is returned.
pub fn validate_record(payload: &RecordPayload) -> Result<NewRecord, ValidationError> {
    let username = text("username", &payload.username)?;
    let age = integer("age", &payload.age)?;
    let city = text("city", &payload.city)?;
    let country = text("country", &payload.country)?;

    Ok(NewRecord { username, age, city, country })
}
