//! Entity schema model: ordered field descriptors plus the lookup contract the
//! condition compiler and validator rely on.

use crate::{core::data_type::DataType, error::ModelError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub data_type: DataType,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Read-only view over the fields of one entity/table.
///
/// Iteration order must be stable for a given instance: rendering of field
/// maps follows it.
pub trait SchemaProvider: Send + Sync {
    fn entity_name(&self) -> &str;

    fn field_count(&self) -> usize;

    fn field_at(&self, index: usize) -> Option<&FieldDescriptor>;

    fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields().find(|field| field.name == name)
    }

    fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    fn has_all_fields(&self, names: &HashSet<&str>) -> bool {
        names.iter().all(|name| self.has_field(name))
    }

    /// Fields in declaration order.
    fn fields(&self) -> Box<dyn Iterator<Item = &FieldDescriptor> + '_> {
        Box::new((0..self.field_count()).filter_map(move |idx| self.field_at(idx)))
    }
}

/// In-memory schema for one entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawEntitySchema")]
pub struct EntitySchema {
    name: String,
    fields: Vec<FieldDescriptor>,
    #[serde(skip)]
    positions: HashMap<String, usize>,
}

#[derive(Deserialize)]
struct RawEntitySchema {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl TryFrom<RawEntitySchema> for EntitySchema {
    type Error = ModelError;

    fn try_from(raw: RawEntitySchema) -> Result<Self, Self::Error> {
        EntitySchema::from_fields(raw.name, raw.fields)
    }
}

impl EntitySchema {
    pub fn builder(name: impl Into<String>) -> EntitySchemaBuilder {
        EntitySchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn from_fields(
        name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyEntityName);
        }

        let mut positions = HashMap::with_capacity(fields.len());
        for (idx, field) in fields.iter().enumerate() {
            if positions.insert(field.name.clone(), idx).is_some() {
                return Err(ModelError::DuplicateField {
                    entity: name,
                    field: field.name.clone(),
                });
            }
        }

        Ok(Self {
            name,
            fields,
            positions,
        })
    }

    /// Loads a schema from `{"name": "...", "fields": [{"name": "...", "data_type": "..."}]}`.
    pub fn from_json(source: &str) -> Result<Self, ModelError> {
        let raw: RawEntitySchema = serde_json::from_str(source)?;
        Self::try_from(raw)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }
}

impl SchemaProvider for EntitySchema {
    fn entity_name(&self) -> &str {
        &self.name
    }

    fn field_count(&self) -> usize {
        self.fields.len()
    }

    fn field_at(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.position(name).and_then(|idx| self.fields.get(idx))
    }

    fn has_all_fields(&self, names: &HashSet<&str>) -> bool {
        names.iter().all(|name| self.positions.contains_key(*name))
    }
}

pub struct EntitySchemaBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl EntitySchemaBuilder {
    pub fn field(mut self, name: impl Into<String>, data_type: DataType) -> Self {
        self.fields.push(FieldDescriptor::new(name, data_type));
        self
    }

    pub fn build(self) -> Result<EntitySchema, ModelError> {
        EntitySchema::from_fields(self.name, self.fields)
    }
}
