//! Print-fragment composition
//!
//! A prefix operator prints fragment 0, then each argument followed by the next
//! fragment. A postfix operator starts with the first argument. Arguments are
//! visited in the order of the operator's argument-index permutation, so an
//! argument can be printed several times or not at all.

use log::warn;

use super::{ApiWriter, SqlExpression, SqlWriter};
use crate::config::FragmentValidation;
use crate::error::{OperatorError, OperatorResult};
use crate::registry::{BindingSupport, Operator, Selector};

impl Operator {
    fn display_name(&self, writer: &SqlWriter<'_>) -> String {
        match self.name() {
            Some(name) => name.to_string(),
            None => writer.catalog().operator_name(self.selector()),
        }
    }

    /// Check fragment and slot counts against the validation mode
    fn check_fragments(
        &self,
        fragments: usize,
        slots: usize,
        validation: FragmentValidation,
        name: impl FnOnce() -> String,
    ) -> OperatorResult<()> {
        let aligned = if self.is_prefix() {
            fragments == slots + 1
        } else {
            fragments <= slots && fragments + 1 >= slots
        };
        if aligned {
            return Ok(());
        }

        let operator = name();
        match validation {
            FragmentValidation::Strict => Err(OperatorError::FragmentMismatch {
                operator,
                fragments,
                slots,
            }),
            FragmentValidation::Lenient => {
                warn!(
                    "Operator '{operator}' has {fragments} fragments for {slots} argument slots, printing truncated"
                );
                Ok(())
            }
        }
    }

    /// Print the operator applied to `items`
    pub fn print_collection<E: SqlExpression>(
        &self,
        items: &[E],
        writer: &mut SqlWriter<'_>,
    ) -> OperatorResult<()> {
        if !self.is_complete() {
            return Err(OperatorError::IncompleteOperator {
                operator: self.display_name(writer),
            });
        }

        if writer.platform().is_dynamic_sql_required_for_functions()
            && self.binding() == BindingSupport::Unsupported
        {
            writer.set_uses_binding(false);
        }

        let indices = self.argument_indices(items.len());
        if let Some(&index) = indices.iter().find(|&&index| index >= items.len()) {
            return Err(OperatorError::ArgumentIndexOutOfRange {
                operator: self.display_name(writer),
                index,
                available: items.len(),
            });
        }

        let fragments = self.database_strings_for(items.len());
        self.check_fragments(
            fragments.len(),
            indices.len(),
            writer.platform().fragment_validation(),
            || self.display_name(writer),
        )?;

        let mut fragment_index = 0;
        if self.is_prefix() {
            writer.write(&fragments[0]);
            fragment_index = 1;
        }

        for &index in &indices {
            self.print_argument(&items[index], writer)?;
            if let Some(fragment) = fragments.get(fragment_index) {
                writer.write(fragment);
                fragment_index += 1;
            }
        }
        Ok(())
    }

    /// Print the operator applied to one or two arguments
    pub fn print_duo(
        &self,
        first: &dyn SqlExpression,
        second: Option<&dyn SqlExpression>,
        writer: &mut SqlWriter<'_>,
    ) -> OperatorResult<()> {
        match second {
            Some(second) => self.print_collection(&[first, second], writer),
            None => self.print_collection(&[first], writer),
        }
    }

    fn print_argument<E: SqlExpression>(&self, item: &E, writer: &mut SqlWriter<'_>) -> OperatorResult<()> {
        let selector = self.selector();
        if selector == Selector::REF || (selector == Selector::DEREF && item.table_alias().is_some()) {
            let alias = item
                .table_alias()
                .ok_or_else(|| OperatorError::MissingTableAlias {
                    operator: self.display_name(writer),
                })?;
            let delimited = writer.platform().delimit_identifier(alias);
            writer.write(&delimited);
            Ok(())
        } else if selector == Selector::COUNT && item.is_row_reference() {
            writer.write("*");
            Ok(())
        } else {
            item.print_sql(writer)
        }
    }

    /// Print the expression-builder rendering of the operator applied to `items`
    ///
    /// Each argument is followed by the next API string. Operators without API
    /// strings render as a method named after the operator.
    pub fn print_api_collection<E: SqlExpression>(
        &self,
        items: &[E],
        writer: &mut ApiWriter<'_>,
    ) -> OperatorResult<()> {
        let derived;
        let api_strings: &[String] = match self.api_strings() {
            Some(strings) => strings,
            None => {
                derived = self.derived_api_strings(items.len(), writer);
                &derived
            }
        };

        for (position, item) in items.iter().enumerate() {
            item.print_api(writer)?;
            if let Some(fragment) = api_strings.get(position) {
                writer.write(fragment);
            }
        }
        Ok(())
    }

    /// Print the expression-builder rendering for one or two arguments
    pub fn print_api_duo(
        &self,
        first: &dyn SqlExpression,
        second: Option<&dyn SqlExpression>,
        writer: &mut ApiWriter<'_>,
    ) -> OperatorResult<()> {
        match second {
            Some(second) => self.print_api_collection(&[first, second], writer),
            None => self.print_api_collection(&[first], writer),
        }
    }

    fn derived_api_strings(&self, argument_count: usize, writer: &ApiWriter<'_>) -> Vec<String> {
        let name = match self.name() {
            Some(name) => name.to_lowercase(),
            None => lower_first(&writer.catalog().operator_name(self.selector())),
        };
        if argument_count <= 1 {
            return vec![format!(".{name}()")];
        }
        let mut strings = Vec::with_capacity(argument_count);
        strings.push(format!(".{name}("));
        strings.extend(std::iter::repeat_n(", ".to_string(), argument_count - 2));
        strings.push(")".to_string());
        strings
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OperatorConfig;
    use crate::platform::GenericPlatform;
    use crate::printer::{Expr, render_api, render_sql};
    use crate::registry::OperatorCatalog;

    fn sql(expr: &Expr) -> String {
        let platform = GenericPlatform::default();
        render_sql(expr, OperatorCatalog::standard(), &platform)
            .unwrap()
            .sql
    }

    #[test]
    fn test_postfix_relation() {
        let expr = Expr::apply(Selector::EQUAL, vec![Expr::column("A"), Expr::literal(5)]);
        assert_eq!(sql(&expr), "A = 5");
    }

    #[test]
    fn test_prefix_between() {
        let expr = Expr::apply(
            Selector::BETWEEN,
            vec![Expr::column("A"), Expr::literal(1), Expr::literal(10)],
        );
        assert_eq!(sql(&expr), "(A BETWEEN 1 AND 10)");
    }

    #[test]
    fn test_count_of_row_prints_star() {
        let expr = Expr::apply(Selector::COUNT, vec![Expr::row("t0")]);
        assert_eq!(sql(&expr), "COUNT(*)");
    }

    #[test]
    fn test_ref_prints_alias() {
        let platform = GenericPlatform::default().with_delimiters("\"", "\"");
        let expr = Expr::apply(Selector::REF, vec![Expr::row("t1")]);
        let rendered = render_sql(&expr, OperatorCatalog::standard(), &platform).unwrap();
        assert_eq!(rendered.sql, "REF(\"t1\")");

        let bad = Expr::apply(Selector::REF, vec![Expr::column("X")]);
        assert!(matches!(
            render_sql(&bad, OperatorCatalog::standard(), &platform),
            Err(OperatorError::MissingTableAlias { .. })
        ));
    }

    #[test]
    fn test_deref_of_plain_expression_prints_expression() {
        let expr = Expr::apply(Selector::DEREF, vec![Expr::column("X")]);
        assert_eq!(sql(&expr), "DEREF(X)");
    }

    #[test]
    fn test_strict_mode_rejects_mismatch() {
        let platform = GenericPlatform::default();
        let expr = Expr::apply(Selector::TO_UPPER_CASE, vec![Expr::column("A"), Expr::column("B")]);
        let err = render_sql(&expr, OperatorCatalog::standard(), &platform).unwrap_err();
        assert_eq!(
            err,
            OperatorError::FragmentMismatch {
                operator: "UPPER".to_string(),
                fragments: 2,
                slots: 2,
            }
        );
    }

    #[test]
    fn test_lenient_mode_truncates() {
        let platform = GenericPlatform::new(OperatorConfig::lenient());
        let expr = Expr::apply(Selector::TO_UPPER_CASE, vec![Expr::column("A"), Expr::column("B")]);
        let rendered = render_sql(&expr, OperatorCatalog::standard(), &platform).unwrap();
        assert_eq!(rendered.sql, "UPPER(A)B");
    }

    #[test]
    fn test_missing_argument_is_an_error() {
        let platform = GenericPlatform::new(OperatorConfig::lenient());
        let expr = Expr::apply(Selector::LOCATE, vec![Expr::column("A")]);
        let err = render_sql(&expr, OperatorCatalog::standard(), &platform).unwrap_err();
        assert_eq!(
            err,
            OperatorError::ArgumentIndexOutOfRange {
                operator: "LOCATE".to_string(),
                index: 1,
                available: 1,
            }
        );
    }

    #[test]
    fn test_incomplete_operator() {
        let expr = Expr::apply(Selector::DECODE, vec![Expr::column("A")]);
        let platform = GenericPlatform::default();
        let err = render_sql(&expr, OperatorCatalog::standard(), &platform).unwrap_err();
        assert_eq!(
            err,
            OperatorError::IncompleteOperator {
                operator: "Decode".to_string()
            }
        );
    }

    #[test]
    fn test_binding_disabled_for_unbindable_operator() {
        let platform = GenericPlatform::new(OperatorConfig::strict());
        let expr = Expr::apply(
            Selector::MOD,
            vec![Expr::column("A"), Expr::parameter(3)],
        );
        let rendered = render_sql(&expr, OperatorCatalog::standard(), &platform).unwrap();
        assert_eq!(rendered.sql, "MOD(A, 3)");
        assert!(!rendered.uses_binding);

        let relaxed = GenericPlatform::default();
        let rendered = render_sql(&expr, OperatorCatalog::standard(), &relaxed).unwrap();
        assert_eq!(rendered.sql, "MOD(A, ?)");
        assert_eq!(rendered.bindings, vec![crate::model::SqlValue::Integer(3)]);
    }

    #[test]
    fn test_print_duo() {
        let platform = GenericPlatform::default();
        let catalog = OperatorCatalog::standard();
        let mut writer = SqlWriter::new(catalog, &platform);
        let left = Expr::column("A");
        let op = catalog.require(Selector::IS_NULL).unwrap();
        op.print_duo(&left, None, &mut writer).unwrap();
        assert_eq!(writer.finish().sql, "(A IS NULL)");
    }

    #[test]
    fn test_api_rendering() {
        let catalog = OperatorCatalog::standard();
        let like = Expr::apply(
            Selector::LIKE,
            vec![Expr::column("name"), Expr::literal("A%")],
        );
        assert_eq!(
            render_api(&like, catalog).unwrap(),
            "builder.get(\"name\").like('A%')"
        );

        let abs = Expr::apply(Selector::ABS, vec![Expr::column("n")]);
        assert_eq!(render_api(&abs, catalog).unwrap(), "builder.get(\"n\").abs()");
    }
}
