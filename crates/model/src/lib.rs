pub mod core;
pub mod error;
pub mod schema;

pub use crate::core::{data_type::DataType, value::Value};
pub use error::ModelError;
pub use schema::{EntitySchema, FieldDescriptor, SchemaProvider};
