use crate::{ast::operator::Operator, renderer::Renderer};
use model::{core::value::Value, schema::FieldDescriptor};
use std::collections::BTreeMap;

/// Renders `field <cmp> ?` clauses for a set of fields.
///
/// Implementations emit exactly one clause per entry of `fields`, in the
/// given order, joined by ` <operator_code> `, and bind exactly one parameter
/// per clause in the same order.
pub trait FieldRenderer: Send + Sync {
    fn render_fields(
        &self,
        fields: &[&FieldDescriptor],
        values: &BTreeMap<String, Value>,
        operator_code: &str,
        renderer: &mut Renderer,
    );
}

/// Compares every field against its value with one fixed comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonFieldRenderer {
    comparison: Operator,
}

impl ComparisonFieldRenderer {
    pub const EQUALITY: Self = Self {
        comparison: Operator::Eq,
    };

    pub const fn new(comparison: Operator) -> Self {
        Self { comparison }
    }

    pub const fn comparison(&self) -> Operator {
        self.comparison
    }
}

impl Default for ComparisonFieldRenderer {
    fn default() -> Self {
        Self::EQUALITY
    }
}

impl FieldRenderer for ComparisonFieldRenderer {
    fn render_fields(
        &self,
        fields: &[&FieldDescriptor],
        values: &BTreeMap<String, Value>,
        operator_code: &str,
        r: &mut Renderer,
    ) {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                r.push_operator(operator_code);
            }
            r.push_identifier(&field.name);
            r.push_operator(self.comparison.code());

            // A field without a value still gets its placeholder, bound to NULL,
            // so clauses and parameters never drift apart.
            let value = values.get(&field.name).cloned().unwrap_or(Value::Null);
            r.add_param(Some((*field).clone()), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Postgres, Standard};
    use model::{core::data_type::DataType, schema::EntitySchema};

    fn schema() -> EntitySchema {
        EntitySchema::builder("person")
            .field("id", DataType::Long)
            .field("name", DataType::VarChar)
            .build()
            .unwrap()
    }

    #[test]
    fn test_render_fields_in_given_order() {
        let schema = schema();
        let id = FieldDescriptor::new("id", DataType::Long);
        let name = FieldDescriptor::new("name", DataType::VarChar);
        let values = BTreeMap::from([
            ("id".to_string(), Value::Int(1)),
            ("name".to_string(), Value::from("Bob")),
        ]);

        let mut renderer = Renderer::new(&Standard, &schema);
        ComparisonFieldRenderer::EQUALITY.render_fields(&[&name, &id], &values, "OR", &mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(sql, "name = ? OR id = ?");
        assert_eq!(params[0].field_name(), Some("name"));
        assert_eq!(params[0].value, Value::from("Bob"));
        assert_eq!(params[1].value, Value::Int(1));
    }

    #[test]
    fn test_render_fields_custom_comparison() {
        let schema = schema();
        let name = FieldDescriptor::new("name", DataType::VarChar);
        let values = BTreeMap::from([("name".to_string(), Value::from("B%"))]);

        let mut renderer = Renderer::new(&Postgres, &schema);
        ComparisonFieldRenderer::new(Operator::Like).render_fields(
            &[&name],
            &values,
            "AND",
            &mut renderer,
        );
        let (sql, params) = renderer.finish();

        assert_eq!(sql, r#""name" LIKE $1"#);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_render_no_fields() {
        let schema = schema();
        let mut renderer = Renderer::new(&Standard, &schema);
        ComparisonFieldRenderer::default().render_fields(&[], &BTreeMap::new(), "AND", &mut renderer);
        assert_eq!(renderer.finish(), (String::new(), vec![]));
    }
}
