//! Compilation entry points: condition tree + schema -> WHERE fragment and
//! ordered bind parameters.

use crate::{
    ast::Condition,
    dialect::{Dialect, Standard},
    error::Result,
    renderer::{
        ConditionParam, Render, Renderer,
        fields::{ComparisonFieldRenderer, FieldRenderer},
    },
    settings::CompilerSettings,
    validate::validate,
};
use model::{core::value::Value, schema::SchemaProvider};
use std::sync::Arc;
use tracing::debug;

/// Renders `condition` with bare identifiers and `?` placeholders.
///
/// Never fails: field-map keys unknown to `schema` are skipped. Run
/// [`validate`] first to reject them instead.
pub fn render_where(
    condition: &Condition,
    schema: &dyn SchemaProvider,
) -> (String, Vec<ConditionParam>) {
    render_where_with(condition, schema, &Standard)
}

pub fn render_where_with(
    condition: &Condition,
    schema: &dyn SchemaProvider,
    dialect: &dyn Dialect,
) -> (String, Vec<ConditionParam>) {
    let mut renderer = Renderer::new(dialect, schema);
    condition.render(&mut renderer);
    renderer.finish()
}

/// A rendered WHERE fragment and its parameters, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledWhere {
    pub clause: String,
    pub params: Vec<ConditionParam>,
}

impl CompiledWhere {
    /// The bare bind values, in order.
    pub fn values(&self) -> Vec<&Value> {
        self.params.iter().map(|param| &param.value).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.clause.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<ConditionParam>) {
        (self.clause, self.params)
    }
}

/// Validates and renders condition trees according to [`CompilerSettings`].
///
/// A compiler holds no per-call state and can be shared between threads.
#[derive(Clone)]
pub struct Compiler {
    settings: CompilerSettings,
    field_renderer: Arc<dyn FieldRenderer>,
}

impl Compiler {
    pub fn new(settings: CompilerSettings) -> Self {
        Self {
            settings,
            field_renderer: Arc::new(ComparisonFieldRenderer::EQUALITY),
        }
    }

    pub fn with_field_renderer(mut self, field_renderer: Arc<dyn FieldRenderer>) -> Self {
        self.field_renderer = field_renderer;
        self
    }

    pub fn settings(&self) -> &CompilerSettings {
        &self.settings
    }

    pub fn compile(
        &self,
        condition: &Condition,
        schema: &dyn SchemaProvider,
    ) -> Result<CompiledWhere> {
        let dialect = self.settings.dialect.dialect();
        debug!(
            "Compiling {} condition for '{}' ({})",
            condition.kind(),
            schema.entity_name(),
            dialect.name()
        );

        if self.settings.validate_before_render {
            validate(condition, schema)?;
        }

        let mut renderer =
            Renderer::new(dialect, schema).with_field_renderer(self.field_renderer.as_ref());
        condition.render(&mut renderer);
        let (clause, params) = renderer.finish();

        debug!("Compiled WHERE clause with {} parameter(s)", params.len());
        Ok(CompiledWhere { clause, params })
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(CompilerSettings::default())
    }
}
