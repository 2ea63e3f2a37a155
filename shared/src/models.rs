use serde::{Serialize, Deserialize};

/// A stored record. `id` is assigned by the store and never changes.
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub username: String,
    pub age: i64,
    pub city: String,
    pub country: String,
}

/// A validated record that has not been stored yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewRecord {
    pub username: String,
    pub age: i64,
    pub city: String,
    pub country: String,
}

impl NewRecord {
    pub fn with_id(self, id: i64) -> Record {
        Record {
            id,
            username: self.username,
            age: self.age,
            city: self.city,
            country: self.country,
        }
    }
}

/// A raw scalar as it arrived on the wire, before coercion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "number",
            FieldValue::Text(_) => "string",
            FieldValue::Flag(_) => "boolean",
        }
    }
}

/// Unvalidated record fields, as posted in a JSON body. Unknown keys are
/// ignored and `null` reads as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecordPayload {
    #[serde(default)]
    pub username: Option<FieldValue>,
    #[serde(default)]
    pub age: Option<FieldValue>,
    #[serde(default)]
    pub city: Option<FieldValue>,
    #[serde(default)]
    pub country: Option<FieldValue>,
}

#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use rocket::FromForm;

    /// Form submission from the HTML page. Every field is kept as raw text so
    /// coercion errors are reported by the validation layer, not the form
    /// parser.
    #[derive(Debug, Clone, Default, FromForm)]
    pub struct RecordForm {
        pub username: Option<String>,
        pub age: Option<String>,
        pub city: Option<String>,
        pub country: Option<String>,
    }

    // Browsers send blank inputs as empty strings; those count as missing.
    fn submitted(value: Option<String>) -> Option<FieldValue> {
        value.filter(|s| !s.is_empty()).map(FieldValue::Text)
    }

    impl From<RecordForm> for RecordPayload {
        fn from(form: RecordForm) -> Self {
            RecordPayload {
                username: submitted(form.username),
                age: submitted(form.age),
                city: submitted(form.city),
                country: submitted(form.country),
            }
        }
    }
}

#[cfg(feature = "backend")]
pub use backend_impl::RecordForm;
