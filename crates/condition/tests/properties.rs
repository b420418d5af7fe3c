//! Properties that must hold for arbitrary condition trees.

mod common;

use common::person;
use condition::{
    Condition, Expr, Operand, Operator, all_leaves_satisfy, count_leaves, dialect::Postgres,
    parameter_count, parameter_count_by_rendering, render_where, render_where_with,
    transform_leaves, validate,
};
use model::core::value::Value;
use proptest::prelude::*;

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Float),
        prop_oneof![Just(f64::NAN), Just(0.0), Just(-0.0)].prop_map(Value::Float),
        "[a-zA-Z ']{0,8}".prop_map(Value::String),
        any::<bool>().prop_map(Value::Boolean),
        Just(Value::Null),
    ]
}

// `ghost` is not declared by `person`.
fn field_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["id", "name", "status", "ghost"]).prop_map(String::from)
}

fn comparison() -> impl Strategy<Value = Operator> {
    prop::sample::select(
        Operator::ALL
            .into_iter()
            .filter(Operator::is_comparison)
            .collect::<Vec<_>>(),
    )
}

fn combinator() -> impl Strategy<Value = Operator> {
    prop_oneof![Just(Operator::And), Just(Operator::Or)]
}

fn operand() -> impl Strategy<Value = Operand> {
    prop_oneof![
        3 => value().prop_map(Operand::Value),
        1 => field_name().prop_map(Operand::Field),
    ]
}

fn leaf_condition() -> impl Strategy<Value = Condition> {
    prop_oneof![
        4 => (field_name(), comparison(), operand())
            .prop_map(|(field, op, right)| Condition::Expr(Expr::new(Operand::Field(field), op, right))),
        2 => (prop::collection::btree_map(field_name(), value(), 0..4), combinator())
            .prop_map(|(fields, op)| Condition::field_map(op, fields)),
        1 => "[a-z =<>]{0,12}".prop_map(Condition::raw),
    ]
}

fn condition() -> impl Strategy<Value = Condition> {
    leaf_condition().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            (prop::collection::vec(inner.clone(), 0..4), combinator())
                .prop_map(|(items, op)| Condition::list(op, items)),
            (inner.clone(), combinator(), inner)
                .prop_map(|(left, op, right)| Condition::combine(left, op, right)),
        ]
    })
}

/// Leaf count computed independently of the traversal module.
fn expected_leaves(condition: &Condition) -> usize {
    match condition {
        Condition::Raw(_) => 0,
        Condition::FieldMap(map) => map.fields.len(),
        Condition::List(list) => list.items.iter().map(|item| expected_leaves(item)).sum(),
        Condition::Expr(expr) if expr.is_leaf() => 1,
        Condition::Expr(expr) => [&expr.left, &expr.right]
            .into_iter()
            .filter_map(Operand::as_condition)
            .map(|nested| expected_leaves(nested))
            .sum(),
    }
}

proptest! {
    #[test]
    fn prop_rendered_params_match_count(tree in condition()) {
        let schema = person();
        let (sql, params) = render_where(&tree, &schema);

        prop_assert_eq!(params.len(), parameter_count(&tree, &schema));
        prop_assert_eq!(params.len(), parameter_count_by_rendering(&tree, &schema));

        // Every `?` that is not part of a raw clause is a placeholder; raw
        // text never contains one in this generator.
        prop_assert_eq!(sql.matches('?').count(), params.len());
    }

    #[test]
    fn prop_postgres_numbers_every_param(tree in condition()) {
        let schema = person();
        let (sql, params) = render_where_with(&tree, &schema, &Postgres);

        for index in 1..=params.len() {
            let placeholder = format!("${index}");
            prop_assert!(sql.contains(&placeholder));
        }
    }

    #[test]
    fn prop_identity_transform_is_structurally_equal(tree in condition()) {
        let transformed = transform_leaves(&tree, |leaf| Condition::Expr(leaf.clone()));
        prop_assert_eq!(transformed, tree);
    }

    #[test]
    fn prop_predicate_runs_once_per_leaf(tree in condition(), verdict in any::<bool>()) {
        let mut calls = 0;
        let result = all_leaves_satisfy(&tree, |_| {
            calls += 1;
            verdict
        });

        let leaves = expected_leaves(&tree);
        prop_assert_eq!(calls, leaves);
        prop_assert_eq!(count_leaves(&tree), leaves);
        prop_assert_eq!(result, verdict || leaves == 0);
    }

    #[test]
    fn prop_transform_preserves_leaf_count(tree in condition()) {
        let negated = transform_leaves(&tree, |leaf| {
            let mut flipped = leaf.clone();
            flipped.operator = match leaf.operator {
                Operator::Eq => Operator::NotEq,
                Operator::NotEq => Operator::Eq,
                other => other,
            };
            Condition::Expr(flipped)
        });

        prop_assert_eq!(count_leaves(&negated), count_leaves(&tree));
        let schema = person();
        prop_assert_eq!(
            parameter_count(&negated, &schema),
            parameter_count_by_rendering(&negated, &schema)
        );
    }

    #[test]
    fn prop_raw_clause_renders_verbatim(text in ".{0,40}") {
        let schema = person();
        let tree = Condition::raw(text.clone());
        let (sql, params) = render_where(&tree, &schema);

        prop_assert_eq!(sql, text);
        prop_assert!(params.is_empty());
        prop_assert!(validate(&tree, &schema).is_ok());
    }

    #[test]
    fn prop_valid_trees_reference_known_fields(tree in condition()) {
        let schema = person();
        let mentions_ghost = !all_leaves_satisfy(&tree, |leaf| {
            leaf.left.as_field() != Some("ghost") && leaf.right.as_field() != Some("ghost")
        });

        prop_assert_eq!(validate(&tree, &schema).is_err(), mentions_ghost);
    }
}
