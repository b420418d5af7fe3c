//! Binary expressions: either a comparison between a field and a value, or a
//! combination of two nested conditions.

use crate::ast::{Condition, operator::Operator};
use model::core::value::Value;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    pub left: Operand,
    pub operator: Operator,
    pub right: Operand,
}

/// One side of an [`Expr`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    /// A nested condition, e.g. the `(a = ?)` in `(a = ?) AND (b = ?)`.
    Condition(Arc<Condition>),

    /// A field of the target entity, e.g. `status`.
    Field(String),

    /// A literal, always bound as a parameter.
    Value(Value),
}

impl Expr {
    pub fn new(left: Operand, operator: Operator, right: Operand) -> Self {
        Self {
            left,
            operator,
            right,
        }
    }

    /// A leaf expression has no nested condition on either side.
    pub fn is_leaf(&self) -> bool {
        !self.left.is_condition() && !self.right.is_condition()
    }

    /// The field this expression compares, when it has one.
    pub fn field(&self) -> Option<&str> {
        self.left.as_field().or_else(|| self.right.as_field())
    }

    /// The literal this expression compares against, when it has one.
    pub fn value(&self) -> Option<&Value> {
        self.right.as_value().or_else(|| self.left.as_value())
    }
}

impl Operand {
    pub fn field(name: impl Into<String>) -> Self {
        Operand::Field(name.into())
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Operand::Value(value.into())
    }

    pub fn condition(condition: Condition) -> Self {
        Operand::Condition(Arc::new(condition))
    }

    pub fn is_condition(&self) -> bool {
        matches!(self, Operand::Condition(_))
    }

    pub fn as_field(&self) -> Option<&str> {
        match self {
            Operand::Field(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Operand::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_condition(&self) -> Option<&Arc<Condition>> {
        match self {
            Operand::Condition(condition) => Some(condition),
            _ => None,
        }
    }
}

impl From<Condition> for Operand {
    fn from(condition: Condition) -> Self {
        Operand::condition(condition)
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Value(value)
    }
}
