#![allow(dead_code)]

use model::{core::data_type::DataType, schema::EntitySchema};
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `person` with fields `[id, name, status]`, in that order.
pub fn person() -> EntitySchema {
    EntitySchema::builder("person")
        .field("id", DataType::Long)
        .field("name", DataType::VarChar)
        .field("status", DataType::Char)
        .build()
        .expect("person schema is valid")
}
