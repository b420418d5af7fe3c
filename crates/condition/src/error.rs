use thiserror::Error;

/// A condition references fields the target entity does not declare.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// One or more keys of a field map are missing from the schema.
    #[error("Unknown fields for entity '{entity}': {}", .fields.join(", "))]
    UnknownFields { entity: String, fields: Vec<String> },

    /// A comparison names a field missing from the schema.
    #[error("Unknown field '{field}' for entity '{entity}'")]
    UnknownField { entity: String, field: String },
}

impl SchemaError {
    /// Every offending field name carried by the error.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            SchemaError::UnknownFields { fields, .. } => fields.iter().map(String::as_str).collect(),
            SchemaError::UnknownField { field, .. } => vec![field.as_str()],
        }
    }
}

#[derive(Debug, Error)]
pub enum ConditionError {
    /// The condition failed validation against the target schema.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Compiler settings could not be parsed.
    #[error("Invalid compiler settings: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConditionError>;
