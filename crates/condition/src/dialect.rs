//! Defines the `Dialect` trait for database-specific SQL syntax.

use serde::{Deserialize, Serialize};

pub trait Dialect: Send + Sync {
    /// Wraps a field name in the quotation marks of the dialect.
    ///
    /// - Standard leaves names bare: `my_column`
    /// - PostgreSQL uses double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for the parameter at `index` (zero based).
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - Standard and MySQL use `?`
    fn get_placeholder(&self, index: usize) -> String;

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> &'static str;
}

/// JDBC-style output: bare identifiers and positional `?` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct Standard;

impl Dialect for Standard {
    fn quote_identifier(&self, ident: &str) -> String {
        ident.to_string()
    }

    fn get_placeholder(&self, _index: usize) -> String {
        "?".into()
    }

    fn name(&self) -> &'static str {
        "Standard"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn get_placeholder(&self, index: usize) -> String {
        // PostgreSQL uses $1, $2, etc.
        format!("${}", index + 1)
    }

    fn name(&self) -> &'static str {
        "PostgreSQL"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn get_placeholder(&self, _index: usize) -> String {
        "?".into()
    }

    fn name(&self) -> &'static str {
        "MySQL"
    }
}

/// Serializable selector for one of the built-in dialects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    #[default]
    Standard,
    Postgres,
    #[serde(alias = "my_sql")]
    MySql,
}

static STANDARD: Standard = Standard;
static POSTGRES: Postgres = Postgres;
static MYSQL: MySql = MySql;

impl DialectKind {
    pub fn dialect(&self) -> &'static dyn Dialect {
        match self {
            DialectKind::Standard => &STANDARD,
            DialectKind::Postgres => &POSTGRES,
            DialectKind::MySql => &MYSQL,
        }
    }
}
