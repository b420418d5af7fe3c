//! Schema validation of condition trees.
//!
//! Validation only reads the tree. It never renders, and it is independent
//! from compilation: the compiler silently drops unknown field-map keys, so
//! callers validate first when they want unknown fields to be an error.

use crate::{
    ast::{
        Condition, FieldMap,
        expr::{Expr, Operand},
    },
    error::SchemaError,
};
use model::schema::SchemaProvider;
use std::collections::HashSet;
use tracing::debug;

/// Checks that every field referenced by `condition` exists on `schema`.
///
/// Raw clauses are accepted as-is and never inspected.
pub fn validate(condition: &Condition, schema: &dyn SchemaProvider) -> Result<(), SchemaError> {
    check_condition(condition, schema).inspect_err(|err| {
        debug!("Condition rejected by '{}': {}", schema.entity_name(), err);
    })
}

fn check_condition(condition: &Condition, schema: &dyn SchemaProvider) -> Result<(), SchemaError> {
    match condition {
        Condition::Raw(_) => Ok(()),
        Condition::FieldMap(map) => check_field_map(map, schema),
        Condition::List(list) => list
            .items
            .iter()
            .try_for_each(|item| check_condition(item, schema)),
        Condition::Expr(expr) => check_expr(expr, schema),
    }
}

fn check_field_map(map: &FieldMap, schema: &dyn SchemaProvider) -> Result<(), SchemaError> {
    let names: HashSet<&str> = map.fields.keys().map(String::as_str).collect();
    if schema.has_all_fields(&names) {
        return Ok(());
    }

    // Keys come out of the map sorted, so the report is deterministic.
    let unknown = map
        .fields
        .keys()
        .filter(|name| !schema.has_field(name))
        .cloned()
        .collect();

    Err(SchemaError::UnknownFields {
        entity: schema.entity_name().to_string(),
        fields: unknown,
    })
}

fn check_expr(expr: &Expr, schema: &dyn SchemaProvider) -> Result<(), SchemaError> {
    check_operand(&expr.left, schema)?;
    check_operand(&expr.right, schema)
}

fn check_operand(operand: &Operand, schema: &dyn SchemaProvider) -> Result<(), SchemaError> {
    match operand {
        Operand::Condition(condition) => check_condition(condition, schema),
        Operand::Field(name) if !schema.has_field(name) => Err(SchemaError::UnknownField {
            entity: schema.entity_name().to_string(),
            field: name.clone(),
        }),
        Operand::Field(_) | Operand::Value(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::operator::Operator;
    use model::{core::data_type::DataType, schema::EntitySchema};

    fn person() -> EntitySchema {
        EntitySchema::builder("person")
            .field("id", DataType::Long)
            .field("name", DataType::VarChar)
            .field("status", DataType::Char)
            .build()
            .unwrap()
    }

    #[test]
    fn test_valid_tree() {
        let condition = Condition::or([
            Condition::field_map(Operator::And, [("name", "Bob"), ("status", "A")]),
            Condition::combine(Condition::gt("id", 1), Operator::And, Condition::raw("x")),
        ]);
        assert_eq!(validate(&condition, &person()), Ok(()));
    }

    #[test]
    fn test_field_map_reports_all_unknown_keys() {
        let condition = Condition::field_map(
            Operator::And,
            [("zombie", 1), ("name", 2), ("ghost", 3)],
        );
        let err = validate(&condition, &person()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownFields {
                entity: "person".to_string(),
                fields: vec!["ghost".to_string(), "zombie".to_string()],
            }
        );
        assert_eq!(err.to_string(), "Unknown fields for entity 'person': ghost, zombie");
    }

    #[test]
    fn test_leaf_with_unknown_field() {
        let err = validate(&Condition::eq("ghost", 1), &person()).unwrap_err();
        assert_eq!(err.fields(), vec!["ghost"]);
    }

    #[test]
    fn test_stops_at_first_failing_child() {
        let condition = Condition::and([
            Condition::eq("name", "Bob"),
            Condition::eq("first", 1),
            Condition::eq("second", 2),
        ]);
        let err = validate(&condition, &person()).unwrap_err();
        assert_eq!(err.fields(), vec!["first"]);
    }

    #[test]
    fn test_nested_expr_is_checked() {
        let condition = Condition::combine(
            Condition::eq("name", "Bob"),
            Operator::Or,
            Condition::combine(
                Condition::eq("id", 1),
                Operator::And,
                Condition::field_map(Operator::And, [("ghost", 1)]),
            ),
        );
        assert!(matches!(
            validate(&condition, &person()),
            Err(SchemaError::UnknownFields { .. })
        ));
    }

    #[test]
    fn test_raw_clause_is_never_checked() {
        let condition = Condition::raw("ghost = 1 OR 1 = 1");
        assert_eq!(validate(&condition, &person()), Ok(()));
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert_eq!(validate(&Condition::or(Vec::new()), &person()), Ok(()));
    }
}
