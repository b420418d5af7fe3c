use serde::{Deserialize, Serialize};
use std::fmt;

/// Operators a condition tree can use, with their SQL spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    // Logical
    And,
    Or,

    // Comparison
    Eq,      // =
    NotEq,   // <>
    Lt,      // <
    LtEq,    // <=
    Gt,      // >
    GtEq,    // >=
    Like,    // LIKE
    NotLike, // NOT LIKE
}

impl Operator {
    pub const ALL: [Operator; 10] = [
        Operator::And,
        Operator::Or,
        Operator::Eq,
        Operator::NotEq,
        Operator::Lt,
        Operator::LtEq,
        Operator::Gt,
        Operator::GtEq,
        Operator::Like,
        Operator::NotLike,
    ];

    pub const fn code(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Eq => "=",
            Operator::NotEq => "<>",
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
        }
    }

    /// Combinators join sub-conditions; everything else joins a field and a value.
    pub const fn is_combinator(&self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    pub const fn is_comparison(&self) -> bool {
        !self.is_combinator()
    }

    /// Looks an operator up by its SQL code, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.code().eq_ignore_ascii_case(code))
            .or(match code {
                "!=" => Some(Operator::NotEq),
                "==" => Some(Operator::Eq),
                _ => None,
            })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_codes() {
        assert_eq!(Operator::And.code(), "AND");
        assert_eq!(Operator::NotEq.code(), "<>");
        assert_eq!(format!("{}", Operator::NotLike), "NOT LIKE");
    }

    #[test]
    fn test_combinators() {
        let combinators: Vec<_> = Operator::ALL
            .into_iter()
            .filter(Operator::is_combinator)
            .collect();
        assert_eq!(combinators, vec![Operator::And, Operator::Or]);
        assert!(Operator::GtEq.is_comparison());
    }

    #[test]
    fn test_from_code() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_code(op.code()), Some(op));
        }
        assert_eq!(Operator::from_code(" not like "), Some(Operator::NotLike));
        assert_eq!(Operator::from_code("!="), Some(Operator::NotEq));
        assert_eq!(Operator::from_code("~"), None);
    }
}
