//! Defines the core rendering trait and context for converting condition
//! trees to SQL.

use crate::{
    dialect::{Dialect, Standard},
    renderer::fields::{ComparisonFieldRenderer, FieldRenderer},
};
use model::{
    core::value::Value,
    schema::{FieldDescriptor, SchemaProvider},
};
use serde::{Deserialize, Serialize};

pub mod condition;
pub mod fields;

static DEFAULT_FIELD_RENDERER: ComparisonFieldRenderer = ComparisonFieldRenderer::EQUALITY;

/// A trait for any tree node that can be rendered into a WHERE fragment.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A bind value, paired with the field it is compared against when that
/// field is known to the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionParam {
    pub field: Option<FieldDescriptor>,
    pub value: Value,
}

impl ConditionParam {
    pub fn new(field: Option<FieldDescriptor>, value: Value) -> Self {
        Self { field, value }
    }

    pub fn field_name(&self) -> Option<&str> {
        self.field.as_ref().map(|field| field.name.as_str())
    }
}

/// A context that holds the state during one rendering pass.
///
/// It accumulates the SQL string and the parameters, and provides access to
/// the dialect and the schema the tree is rendered against. A renderer
/// belongs to a single call and is never shared.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<ConditionParam>,
    pub dialect: &'a dyn Dialect,
    pub schema: &'a dyn SchemaProvider,
    pub field_renderer: &'a dyn FieldRenderer,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect, schema: &'a dyn SchemaProvider) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
            schema,
            field_renderer: &DEFAULT_FIELD_RENDERER,
        }
    }

    /// A renderer using the standard dialect, whose output is only inspected
    /// for its parameters.
    pub fn scratch(schema: &'a dyn SchemaProvider) -> Self {
        Self::new(&Standard, schema)
    }

    pub fn with_field_renderer(mut self, field_renderer: &'a dyn FieldRenderer) -> Self {
        self.field_renderer = field_renderer;
        self
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<ConditionParam>) {
        (self.sql, self.params)
    }

    pub fn add_param(&mut self, field: Option<FieldDescriptor>, value: Value) {
        self.params.push(ConditionParam::new(field, value));
        let placeholder = self.dialect.get_placeholder(self.params.len() - 1);
        self.sql.push_str(&placeholder);
    }

    pub fn push_identifier(&mut self, name: &str) {
        let quoted = self.dialect.quote_identifier(name);
        self.sql.push_str(&quoted);
    }

    /// Appends ` <code> `.
    pub fn push_operator(&mut self, code: &str) {
        self.sql.push(' ');
        self.sql.push_str(code);
        self.sql.push(' ');
    }
}
