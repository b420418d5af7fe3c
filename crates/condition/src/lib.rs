//! Composable condition trees compiled into parameterized WHERE clauses.
//!
//! Build a [`Condition`], optionally [`validate`] it against an entity
//! schema, then [`render_where`] it into SQL text plus bind parameters in
//! placeholder order.

pub use model;

pub mod ast;
pub mod compile;
pub mod count;
pub mod dialect;
pub mod error;
pub mod macros;
pub mod renderer;
pub mod settings;
pub mod traverse;
pub mod validate;

pub use ast::{
    Condition, ConditionList, FieldMap, RawClause,
    expr::{Expr, Operand},
    operator::Operator,
};
pub use compile::{CompiledWhere, Compiler, render_where, render_where_with};
pub use count::{ParameterCount, parameter_count, parameter_count_by_rendering};
pub use dialect::{Dialect, DialectKind};
pub use error::{ConditionError, Result, SchemaError};
pub use renderer::{ConditionParam, Render, Renderer, fields::FieldRenderer};
pub use settings::CompilerSettings;
pub use traverse::{all_leaves_satisfy, count_leaves, transform_leaves};
pub use validate::validate;
