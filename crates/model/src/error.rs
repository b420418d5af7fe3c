use thiserror::Error;

/// Errors raised while building the value and schema model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A column type name could not be mapped onto a `DataType`.
    #[error("Unknown data type: {0}")]
    UnknownDataType(String),

    /// The same field name was declared twice for one entity.
    #[error("Duplicate field '{field}' in entity '{entity}'")]
    DuplicateField { entity: String, field: String },

    /// An entity schema was declared without a name.
    #[error("Entity schema name must not be empty")]
    EmptyEntityName,

    /// A schema document could not be parsed.
    #[error("Invalid schema document: {0}")]
    Json(#[from] serde_json::Error),
}
