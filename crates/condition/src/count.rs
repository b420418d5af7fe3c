//! Parameter counting.
//!
//! Every node can be counted by rendering it against a throwaway renderer.
//! The built-in node kinds override that with a direct computation that
//! builds no SQL; both must agree for every tree and schema.

use crate::{
    ast::{
        Condition, ConditionList, FieldMap, RawClause,
        expr::{Expr, Operand},
    },
    renderer::{Render, Renderer},
};
use model::schema::SchemaProvider;

pub trait ParameterCount: Render {
    /// Number of placeholders `render` emits for this node against `schema`.
    fn parameter_count(&self, schema: &dyn SchemaProvider) -> usize {
        parameter_count_by_rendering(self, schema)
    }
}

/// Renders `node` into a scratch renderer and counts the bound parameters.
pub fn parameter_count_by_rendering<T: Render + ?Sized>(
    node: &T,
    schema: &dyn SchemaProvider,
) -> usize {
    let mut renderer = Renderer::scratch(schema);
    node.render(&mut renderer);
    renderer.params.len()
}

/// Number of bind parameters `render_where(condition, schema)` produces.
pub fn parameter_count(condition: &Condition, schema: &dyn SchemaProvider) -> usize {
    condition.parameter_count(schema)
}

impl ParameterCount for Condition {
    fn parameter_count(&self, schema: &dyn SchemaProvider) -> usize {
        match self {
            Condition::Expr(expr) => expr.parameter_count(schema),
            Condition::List(list) => list.parameter_count(schema),
            Condition::FieldMap(map) => map.parameter_count(schema),
            Condition::Raw(raw) => raw.parameter_count(schema),
        }
    }
}

impl ParameterCount for RawClause {
    fn parameter_count(&self, _schema: &dyn SchemaProvider) -> usize {
        0
    }
}

impl ParameterCount for ConditionList {
    fn parameter_count(&self, schema: &dyn SchemaProvider) -> usize {
        self.items
            .iter()
            .map(|item| item.parameter_count(schema))
            .sum()
    }
}

impl ParameterCount for Expr {
    fn parameter_count(&self, schema: &dyn SchemaProvider) -> usize {
        operand_count(&self.left, schema) + operand_count(&self.right, schema)
    }
}

// A field renderer binds exactly one parameter per schema field it is given.
impl ParameterCount for FieldMap {
    fn parameter_count(&self, schema: &dyn SchemaProvider) -> usize {
        schema
            .fields()
            .filter(|field| self.fields.contains_key(&field.name))
            .count()
    }
}

fn operand_count(operand: &Operand, schema: &dyn SchemaProvider) -> usize {
    match operand {
        Operand::Condition(condition) => condition.parameter_count(schema),
        Operand::Field(_) => 0,
        Operand::Value(_) => 1,
    }
}
