//! Defines the condition tree describing a WHERE clause.
//!
//! Trees are immutable once built. Children sit behind `Arc` so that rewrites
//! can share every subtree they leave untouched, and so a tree can be handed
//! to several threads at once.

use crate::ast::{
    expr::{Expr, Operand},
    operator::Operator,
};
use model::core::value::Value;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::Arc};

pub mod expr;
pub mod operator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// A comparison such as `age > ?`, or two nested conditions joined by a combinator.
    Expr(Expr),

    /// Any number of conditions joined by one combinator, e.g. `(a) OR (b) OR (c)`.
    List(ConditionList),

    /// Equality on several fields at once, e.g. `name = ? AND status = ?`.
    FieldMap(FieldMap),

    /// Caller supplied SQL, emitted verbatim.
    Raw(RawClause),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionList {
    pub items: Vec<Arc<Condition>>,
    pub operator: Operator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMap {
    pub fields: BTreeMap<String, Value>,
    pub operator: Operator,
}

/// Never validated against a schema and never contributes parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClause {
    pub text: String,
}

impl Condition {
    pub fn compare(field: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Condition::Expr(Expr::new(
            Operand::field(field),
            operator,
            Operand::value(value),
        ))
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, Operator::Eq, value)
    }

    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, Operator::NotEq, value)
    }

    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, Operator::Lt, value)
    }

    pub fn le(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, Operator::LtEq, value)
    }

    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, Operator::Gt, value)
    }

    pub fn ge(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, Operator::GtEq, value)
    }

    pub fn like(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::compare(field, Operator::Like, Value::String(pattern.into()))
    }

    /// Joins two conditions with a combinator, without adding parentheses.
    pub fn combine(left: Condition, operator: Operator, right: Condition) -> Self {
        Condition::Expr(Expr::new(
            Operand::condition(left),
            operator,
            Operand::condition(right),
        ))
    }

    pub fn list(operator: Operator, items: impl IntoIterator<Item = Condition>) -> Self {
        Condition::List(ConditionList {
            items: items.into_iter().map(Arc::new).collect(),
            operator,
        })
    }

    pub fn and(items: impl IntoIterator<Item = Condition>) -> Self {
        Self::list(Operator::And, items)
    }

    pub fn or(items: impl IntoIterator<Item = Condition>) -> Self {
        Self::list(Operator::Or, items)
    }

    pub fn field_map<K, V>(operator: Operator, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Condition::FieldMap(FieldMap {
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
            operator,
        })
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Condition::Raw(RawClause { text: text.into() })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Condition::Expr(expr) if expr.is_leaf())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Condition::Expr(_) => "expr",
            Condition::List(_) => "list",
            Condition::FieldMap(_) => "field_map",
            Condition::Raw(_) => "raw",
        }
    }
}

impl FieldMap {
    /// The map viewed as `field = value` leaves, in key order.
    pub fn leaves(&self) -> impl Iterator<Item = Expr> + '_ {
        self.fields.iter().map(|(name, value)| {
            Expr::new(
                Operand::Field(name.clone()),
                Operator::Eq,
                Operand::Value(value.clone()),
            )
        })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl ConditionList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Expr> for Condition {
    fn from(expr: Expr) -> Self {
        Condition::Expr(expr)
    }
}

impl From<RawClause> for Condition {
    fn from(raw: RawClause) -> Self {
        Condition::Raw(raw)
    }
}
