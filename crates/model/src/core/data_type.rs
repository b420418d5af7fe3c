use crate::error::ModelError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// Column type carried by a field descriptor.
///
/// Serialized as its canonical SQL name, so schemas stay readable when stored
/// as JSON (`"INTEGER"`, `"VARCHAR"`, ...). Parsing accepts the common MySQL
/// and PostgreSQL aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DataType {
    Boolean,
    Short,
    Int,
    Long,
    Float,
    Double,
    Decimal,
    Char,
    VarChar,
    String,
    Uuid,
    Json,
    Bytea,
    Date,
    Time,
    Timestamp,
    Null,
}

lazy_static! {
    static ref SQL_TYPE_MAP: HashMap<&'static str, DataType> = build_sql_type_map();
}

impl DataType {
    /// Resolves a SQL type name such as `int4`, `character varying(255)` or
    /// `timestamptz`. Length and precision suffixes are ignored.
    pub fn from_sql_name(type_name: &str) -> Result<Self, ModelError> {
        let normalized = Self::normalize_type_name(type_name);
        SQL_TYPE_MAP
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| ModelError::UnknownDataType(type_name.to_string()))
    }

    pub fn sql_name(&self) -> &'static str {
        match self {
            DataType::Boolean => "BOOLEAN",
            DataType::Short => "SMALLINT",
            DataType::Int => "INTEGER",
            DataType::Long => "BIGINT",
            DataType::Float => "REAL",
            DataType::Double => "DOUBLE PRECISION",
            DataType::Decimal => "DECIMAL",
            DataType::Char => "CHAR",
            DataType::VarChar => "VARCHAR",
            DataType::String => "TEXT",
            DataType::Uuid => "UUID",
            DataType::Json => "JSON",
            DataType::Bytea => "BYTEA",
            DataType::Date => "DATE",
            DataType::Time => "TIME",
            DataType::Timestamp => "TIMESTAMP",
            DataType::Null => "NULL",
        }
    }

    fn normalize_type_name(type_name: &str) -> String {
        // `VARCHAR(255)` and `NUMERIC(10, 2)` resolve like their bare names
        let base = match type_name.find('(') {
            Some(idx) => &type_name[..idx],
            None => type_name,
        };
        base.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase()
    }
}

impl TryFrom<String> for DataType {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        DataType::from_sql_name(&s)
    }
}

impl From<DataType> for String {
    fn from(data_type: DataType) -> Self {
        data_type.sql_name().to_string()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}

fn build_sql_type_map() -> HashMap<&'static str, DataType> {
    use DataType::*;

    let entries = [
        ("BOOLEAN", Boolean),
        ("BOOL", Boolean),
        ("TINYINT", Short),
        ("SMALLINT", Short),
        ("INT2", Short),
        ("MEDIUMINT", Int),
        ("INT", Int),
        ("INTEGER", Int),
        ("INT4", Int),
        ("SERIAL", Int),
        ("BIGINT", Long),
        ("INT8", Long),
        ("BIGSERIAL", Long),
        ("FLOAT", Float),
        ("FLOAT4", Float),
        ("REAL", Float),
        ("DOUBLE", Double),
        ("FLOAT8", Double),
        ("DOUBLE PRECISION", Double),
        ("DECIMAL", Decimal),
        ("NUMERIC", Decimal),
        ("CHAR", Char),
        ("CHARACTER", Char),
        ("BPCHAR", Char),
        ("VARCHAR", VarChar),
        ("CHARACTER VARYING", VarChar),
        ("TEXT", String),
        ("TINYTEXT", String),
        ("MEDIUMTEXT", String),
        ("LONGTEXT", String),
        ("NAME", String),
        ("UUID", Uuid),
        ("JSON", Json),
        ("JSONB", Json),
        ("BYTEA", Bytea),
        ("BLOB", Bytea),
        ("BINARY", Bytea),
        ("VARBINARY", Bytea),
        ("DATE", Date),
        ("TIME", Time),
        ("TIMETZ", Time),
        ("TIME WITH TIME ZONE", Time),
        ("TIME WITHOUT TIME ZONE", Time),
        ("TIMESTAMP", Timestamp),
        ("DATETIME", Timestamp),
        ("TIMESTAMPTZ", Timestamp),
        ("TIMESTAMP WITH TIME ZONE", Timestamp),
        ("TIMESTAMP WITHOUT TIME ZONE", Timestamp),
        ("NULL", Null),
    ];

    let mut map = HashMap::new();
    for (name, data_type) in entries {
        map.insert(name, data_type);
    }
    map
}
