// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! SQL and API rendering of operator applications
//!
//! Expression trees plug in through [`SqlExpression`]. Operators print by
//! interleaving their fragments with the printed arguments (see
//! [`composer`]); the result is collected by a [`SqlWriter`] or an [`ApiWriter`].

pub mod composer;
pub mod expression;

use serde::Serialize;

use crate::error::OperatorResult;
use crate::model::SqlValue;
use crate::platform::Platform;
use crate::registry::OperatorCatalog;

pub use expression::Expr;

/// An expression node that operators can print as an argument
pub trait SqlExpression {
    /// Print the SQL rendering
    fn print_sql(&self, writer: &mut SqlWriter<'_>) -> OperatorResult<()>;

    /// Print the expression-builder rendering
    fn print_api(&self, writer: &mut ApiWriter<'_>) -> OperatorResult<()>;

    /// Whether the node stands for a whole row (COUNT prints `*` for it)
    fn is_row_reference(&self) -> bool {
        false
    }

    /// Table alias of an object expression
    fn table_alias(&self) -> Option<&str> {
        None
    }
}

impl<T: SqlExpression + ?Sized> SqlExpression for &T {
    fn print_sql(&self, writer: &mut SqlWriter<'_>) -> OperatorResult<()> {
        (**self).print_sql(writer)
    }

    fn print_api(&self, writer: &mut ApiWriter<'_>) -> OperatorResult<()> {
        (**self).print_api(writer)
    }

    fn is_row_reference(&self) -> bool {
        (**self).is_row_reference()
    }

    fn table_alias(&self) -> Option<&str> {
        (**self).table_alias()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Text(String),
    Parameter(SqlValue),
}

/// Rendered SQL with its bind parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSql {
    /// SQL text; `?` marks each bound parameter
    pub sql: String,
    /// Parameter values in order of appearance
    pub bindings: Vec<SqlValue>,
    /// Whether the call binds parameters; when false every value was inlined
    pub uses_binding: bool,
}

/// Accumulates the SQL text of one call
pub struct SqlWriter<'a> {
    segments: Vec<Segment>,
    catalog: &'a OperatorCatalog,
    platform: &'a dyn Platform,
    uses_binding: bool,
}

impl<'a> SqlWriter<'a> {
    /// Create a writer for one call
    pub fn new(catalog: &'a OperatorCatalog, platform: &'a dyn Platform) -> Self {
        Self {
            segments: Vec::new(),
            catalog,
            platform,
            uses_binding: true,
        }
    }

    /// Append SQL text
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(Segment::Text(last)) => last.push_str(text),
            _ => self.segments.push(Segment::Text(text.to_string())),
        }
    }

    /// Append a parameter value
    pub fn write_parameter(&mut self, value: SqlValue) {
        self.segments.push(Segment::Parameter(value));
    }

    /// Catalog operators are looked up in
    pub fn catalog(&self) -> &'a OperatorCatalog {
        self.catalog
    }

    /// Platform the call is printed for
    pub fn platform(&self) -> &'a dyn Platform {
        self.platform
    }

    /// Whether the call still binds parameters
    pub fn uses_binding(&self) -> bool {
        self.uses_binding
    }

    /// Enable or disable parameter binding for the whole call
    pub fn set_uses_binding(&mut self, uses_binding: bool) {
        self.uses_binding = uses_binding;
    }

    /// Finish the call, inlining parameters when binding was disabled
    pub fn finish(self) -> RenderedSql {
        let mut sql = String::new();
        let mut bindings = Vec::new();
        for segment in self.segments {
            match segment {
                Segment::Text(text) => sql.push_str(&text),
                Segment::Parameter(value) if self.uses_binding => {
                    sql.push('?');
                    bindings.push(value);
                }
                Segment::Parameter(value) => sql.push_str(&value.to_sql_literal()),
            }
        }
        RenderedSql {
            sql,
            bindings,
            uses_binding: self.uses_binding,
        }
    }
}

/// Accumulates the expression-builder rendering
pub struct ApiWriter<'a> {
    output: String,
    catalog: &'a OperatorCatalog,
}

impl<'a> ApiWriter<'a> {
    /// Create a writer
    pub fn new(catalog: &'a OperatorCatalog) -> Self {
        Self {
            output: String::new(),
            catalog,
        }
    }

    /// Append text
    pub fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Catalog operators are looked up in
    pub fn catalog(&self) -> &'a OperatorCatalog {
        self.catalog
    }

    /// Finish and return the rendering
    pub fn finish(self) -> String {
        self.output
    }
}

/// Render an expression to SQL
pub fn render_sql(
    expression: &dyn SqlExpression,
    catalog: &OperatorCatalog,
    platform: &dyn Platform,
) -> OperatorResult<RenderedSql> {
    let mut writer = SqlWriter::new(catalog, platform);
    expression.print_sql(&mut writer)?;
    Ok(writer.finish())
}

/// Render an expression in expression-builder form
pub fn render_api(expression: &dyn SqlExpression, catalog: &OperatorCatalog) -> OperatorResult<String> {
    let mut writer = ApiWriter::new(catalog);
    expression.print_api(&mut writer)?;
    Ok(writer.finish())
}
