//! Generic traversal over leaf expressions.
//!
//! A leaf is an [`Expr`] with no nested condition on either side. Field maps
//! are viewed as a list of `field = value` leaves in key order. Raw clauses
//! have no leaves.

use crate::ast::{
    Condition, ConditionList, FieldMap,
    expr::{Expr, Operand},
    operator::Operator,
};
use model::core::value::Value;
use std::{collections::BTreeMap, sync::Arc};

/// Returns true iff `predicate` holds for every leaf of `condition`.
///
/// The predicate runs on every leaf, depth first and left to right, even once
/// a leaf has failed: results are AND-ed together rather than short-circuited.
pub fn all_leaves_satisfy<F>(condition: &Condition, mut predicate: F) -> bool
where
    F: FnMut(&Expr) -> bool,
{
    fold_leaves(condition, &mut predicate)
}

fn fold_leaves<F>(condition: &Condition, predicate: &mut F) -> bool
where
    F: FnMut(&Expr) -> bool,
{
    let mut satisfied = true;
    match condition {
        Condition::Raw(_) => {}
        Condition::Expr(expr) if expr.is_leaf() => satisfied = predicate(expr),
        Condition::Expr(expr) => {
            for operand in [&expr.left, &expr.right] {
                if let Operand::Condition(nested) = operand {
                    satisfied &= fold_leaves(nested, predicate);
                }
            }
        }
        Condition::List(list) => {
            for item in &list.items {
                satisfied &= fold_leaves(item, predicate);
            }
        }
        Condition::FieldMap(map) => {
            for leaf in map.leaves() {
                satisfied &= predicate(&leaf);
            }
        }
    }
    satisfied
}

/// Number of leaves `all_leaves_satisfy` visits.
pub fn count_leaves(condition: &Condition) -> usize {
    let mut count = 0;
    all_leaves_satisfy(condition, |_| {
        count += 1;
        true
    });
    count
}

/// Rebuilds `condition` with every leaf replaced by `f(leaf)`.
///
/// Node kinds, operators and ordering are preserved. Subtrees in which no leaf
/// changed are shared with the input rather than copied.
pub fn transform_leaves<F>(condition: &Condition, mut f: F) -> Condition
where
    F: FnMut(&Expr) -> Condition,
{
    rewrite(condition, &mut f).unwrap_or_else(|| condition.clone())
}

/// Returns `None` when nothing under `condition` changed.
fn rewrite<F>(condition: &Condition, f: &mut F) -> Option<Condition>
where
    F: FnMut(&Expr) -> Condition,
{
    match condition {
        Condition::Raw(_) => None,
        Condition::Expr(expr) if expr.is_leaf() => {
            let replaced = f(expr);
            match &replaced {
                Condition::Expr(same) if same == expr => None,
                _ => Some(replaced),
            }
        }
        Condition::Expr(expr) => {
            let left = rewrite_operand(&expr.left, f);
            let right = rewrite_operand(&expr.right, f);
            if left.is_none() && right.is_none() {
                return None;
            }

            Some(Condition::Expr(Expr {
                left: left.unwrap_or_else(|| expr.left.clone()),
                operator: expr.operator,
                right: right.unwrap_or_else(|| expr.right.clone()),
            }))
        }
        Condition::List(list) => rewrite_list(list, f),
        Condition::FieldMap(map) => rewrite_field_map(map, f),
    }
}

fn rewrite_operand<F>(operand: &Operand, f: &mut F) -> Option<Operand>
where
    F: FnMut(&Expr) -> Condition,
{
    match operand {
        Operand::Condition(nested) => {
            rewrite(nested, f).map(|changed| Operand::Condition(Arc::new(changed)))
        }
        Operand::Field(_) | Operand::Value(_) => None,
    }
}

fn rewrite_list<F>(list: &ConditionList, f: &mut F) -> Option<Condition>
where
    F: FnMut(&Expr) -> Condition,
{
    let mut changed = false;
    let mut items = Vec::with_capacity(list.items.len());
    for item in &list.items {
        match rewrite(item, f) {
            Some(new_item) => {
                changed = true;
                items.push(Arc::new(new_item));
            }
            None => items.push(Arc::clone(item)),
        }
    }

    changed.then(|| {
        Condition::List(ConditionList {
            items,
            operator: list.operator,
        })
    })
}

/// Entries are offered to `f` as `field = value` leaves. If every result is
/// again such a leaf the node stays a field map; otherwise it becomes a list
/// of the results joined by the map's operator.
fn rewrite_field_map<F>(map: &FieldMap, f: &mut F) -> Option<Condition>
where
    F: FnMut(&Expr) -> Condition,
{
    let mut changed = false;
    let mut results = Vec::with_capacity(map.len());
    for leaf in map.leaves() {
        let replaced = f(&leaf);
        changed |= !matches!(&replaced, Condition::Expr(same) if *same == leaf);
        results.push(replaced);
    }

    if !changed {
        return None;
    }

    match as_equality_entries(&results) {
        Some(fields) => Some(Condition::FieldMap(FieldMap {
            fields,
            operator: map.operator,
        })),
        None => Some(Condition::List(ConditionList {
            items: results.into_iter().map(Arc::new).collect(),
            operator: map.operator,
        })),
    }
}

fn as_equality_entries(results: &[Condition]) -> Option<BTreeMap<String, Value>> {
    let mut fields = BTreeMap::new();
    for result in results {
        let Condition::Expr(Expr {
            left: Operand::Field(name),
            operator: Operator::Eq,
            right: Operand::Value(value),
        }) = result
        else {
            return None;
        };

        if fields.insert(name.clone(), value.clone()).is_some() {
            return None;
        }
    }
    Some(fields)
}
