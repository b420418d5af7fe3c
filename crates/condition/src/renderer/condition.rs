use crate::{
    ast::{
        Condition, ConditionList, FieldMap, RawClause,
        expr::{Expr, Operand},
    },
    renderer::{Render, Renderer},
};
use model::schema::FieldDescriptor;
use tracing::{debug, trace};

impl Render for Condition {
    fn render(&self, r: &mut Renderer) {
        trace!("Rendering {} condition", self.kind());
        match self {
            Condition::Expr(expr) => expr.render(r),
            Condition::List(list) => list.render(r),
            Condition::FieldMap(map) => map.render(r),
            Condition::Raw(raw) => raw.render(r),
        }
    }
}

impl Render for RawClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.text);
    }
}

impl Render for ConditionList {
    fn render(&self, r: &mut Renderer) {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                r.push_operator(self.operator.code());
            }
            r.sql.push('(');
            item.render(r);
            r.sql.push(')');
        }
    }
}

impl Render for FieldMap {
    fn render(&self, r: &mut Renderer) {
        // Schema order drives iteration; keys the schema does not declare are
        // left to validation and skipped here.
        let schema = r.schema;
        let selected: Vec<&FieldDescriptor> = schema
            .fields()
            .filter(|field| self.fields.contains_key(&field.name))
            .collect();

        if selected.len() < self.fields.len() {
            let skipped: Vec<&str> = self
                .fields
                .keys()
                .filter(|name| !schema.has_field(name))
                .map(String::as_str)
                .collect();
            debug!(
                "Skipping fields unknown to '{}': {:?}",
                schema.entity_name(),
                skipped
            );
        }

        let field_renderer = r.field_renderer;
        field_renderer.render_fields(&selected, &self.fields, self.operator.code(), r);
    }
}

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        // Nested conditions bring their own grouping; a leaf renders as
        // `field <cmp> ?`.
        render_operand(&self.left, self.right.as_field(), r);
        r.push_operator(self.operator.code());
        render_operand(&self.right, self.left.as_field(), r);
    }
}

/// Renders one side of an expression. A literal is bound together with the
/// descriptor of the field on the opposite side, when the schema knows it.
fn render_operand(operand: &Operand, counterpart: Option<&str>, r: &mut Renderer) {
    match operand {
        Operand::Condition(condition) => condition.render(r),
        Operand::Field(name) => r.push_identifier(name),
        Operand::Value(value) => {
            let field = counterpart.and_then(|name| r.schema.field(name)).cloned();
            r.add_param(field, value.clone());
        }
    }
}
