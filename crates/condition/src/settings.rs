use crate::{dialect::DialectKind, error::ConditionError};
use serde::{Deserialize, Serialize};

/// Configuration of a [`Compiler`](crate::compile::Compiler).
///
/// Missing keys fall back to their defaults; unknown keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerSettings {
    /// SQL flavour used for identifiers and placeholders.
    pub dialect: DialectKind,

    /// Validate the tree against the schema before rendering it.
    pub validate_before_render: bool,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            dialect: DialectKind::Standard,
            validate_before_render: true,
        }
    }
}

impl CompilerSettings {
    pub fn from_json(source: &str) -> Result<Self, ConditionError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn with_dialect(mut self, dialect: DialectKind) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_validation(mut self, validate_before_render: bool) -> Self {
        self.validate_before_render = validate_before_render;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CompilerSettings::default();
        assert_eq!(settings.dialect, DialectKind::Standard);
        assert!(settings.validate_before_render);
    }

    #[test]
    fn test_from_json_partial() {
        let settings = CompilerSettings::from_json(r#"{"dialect": "postgres"}"#).unwrap();
        assert_eq!(
            settings,
            CompilerSettings::default().with_dialect(DialectKind::Postgres)
        );

        let settings = CompilerSettings::from_json("{}").unwrap();
        assert_eq!(settings, CompilerSettings::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let result = CompilerSettings::from_json(r#"{"dialekt": "postgres"}"#);
        assert!(matches!(result, Err(ConditionError::Settings(_))));
    }
}
