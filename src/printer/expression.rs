//! Minimal expression tree

use serde::{Deserialize, Serialize};

use super::{ApiWriter, SqlExpression, SqlWriter};
use crate::error::OperatorResult;
use crate::model::SqlValue;
use crate::registry::Selector;

/// Expression node for callers without their own tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Column reference, optionally qualified
    Column {
        /// Table alias qualifying the column
        #[serde(default)]
        table: Option<String>,
        /// Column name
        name: String,
    },
    /// Value printed inline
    Literal(SqlValue),
    /// Value bound as a parameter
    Parameter(SqlValue),
    /// Whole row of an aliased table
    Row {
        /// Table alias
        alias: String,
    },
    /// Operator applied to arguments
    Apply {
        /// Operator selector
        selector: Selector,
        /// Arguments in declaration order
        #[serde(default)]
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Unqualified column
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column {
            table: None,
            name: name.into(),
        }
    }

    /// Column qualified by a table alias
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Column {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    /// Inline literal
    pub fn literal(value: impl Into<SqlValue>) -> Self {
        Self::Literal(value.into())
    }

    /// Bound parameter
    pub fn parameter(value: impl Into<SqlValue>) -> Self {
        Self::Parameter(value.into())
    }

    /// Whole row of a table
    pub fn row(alias: impl Into<String>) -> Self {
        Self::Row {
            alias: alias.into(),
        }
    }

    /// Operator application
    pub fn apply(selector: Selector, args: Vec<Expr>) -> Self {
        Self::Apply { selector, args }
    }
}

impl SqlExpression for Expr {
    fn print_sql(&self, writer: &mut SqlWriter<'_>) -> OperatorResult<()> {
        match self {
            Self::Column { table: Some(table), name } => {
                let table = writer.platform().delimit_identifier(table);
                writer.write(&table);
                writer.write(".");
                writer.write(name);
            }
            Self::Column { table: None, name } => writer.write(name),
            Self::Literal(value) => writer.write(&value.to_sql_literal()),
            Self::Parameter(value) => writer.write_parameter(value.clone()),
            Self::Row { alias } => {
                let alias = writer.platform().delimit_identifier(alias);
                writer.write(&alias);
            }
            Self::Apply { selector, args } => {
                let operator = writer.catalog().require(*selector)?;
                operator.print_collection(args, writer)?;
            }
        }
        Ok(())
    }

    fn print_api(&self, writer: &mut ApiWriter<'_>) -> OperatorResult<()> {
        match self {
            Self::Column { table, name } => {
                writer.write(table.as_deref().unwrap_or("builder"));
                writer.write(&format!(".get(\"{name}\")"));
            }
            Self::Literal(value) | Self::Parameter(value) => writer.write(&value.to_sql_literal()),
            Self::Row { alias } => writer.write(alias),
            Self::Apply { selector, args } => {
                let operator = writer.catalog().require(*selector)?;
                operator.print_api_collection(args, writer)?;
            }
        }
        Ok(())
    }

    fn is_row_reference(&self) -> bool {
        matches!(self, Self::Row { .. })
    }

    fn table_alias(&self) -> Option<&str> {
        match self {
            Self::Row { alias } => Some(alias),
            _ => None,
        }
    }
}
