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

//! Standard operator definitions, one module per family

pub mod aggregate;
pub mod comparison;
pub mod datetime;
pub mod logical;
pub mod math;
pub mod object;
pub mod ordering;
pub mod set;
pub mod string;

use crate::registry::catalog::CatalogBuilder;

/// Register the full standard operator set in the overridable layer
pub fn register_builtin_operators(builder: &mut CatalogBuilder) {
    // Predicates and connectives
    logical::register_logical_operators(builder);
    comparison::register_comparison_operators(builder);

    // Query structure
    aggregate::register_aggregate_operators(builder);
    ordering::register_ordering_operators(builder);
    set::register_set_operators(builder);

    // Functions
    string::register_string_operators(builder);
    datetime::register_datetime_operators(builder);
    math::register_math_operators(builder);
    object::register_object_operators(builder);
}

/// Register the platform-independent defaults in the internal layer
///
/// These are the operators every platform prints the same way, used when a
/// platform's own table has no entry for the selector.
pub fn register_internal_operators(builder: &mut CatalogBuilder) {
    for operator in [
        aggregate::count(),
        aggregate::sum(),
        aggregate::average(),
        aggregate::minimum(),
        aggregate::maximum(),
        aggregate::distinct(),
        comparison::between(),
        comparison::not_between(),
        comparison::is_null(),
        comparison::not_null(),
        comparison::like(),
        comparison::like_escape(),
        comparison::not_like(),
        comparison::not_like_escape(),
        comparison::exists(),
        comparison::not_exists(),
        comparison::any(),
        comparison::some(),
        comparison::all(),
        comparison::in_sub_query(),
        comparison::not_in_sub_query(),
        comparison::equal(),
        comparison::not_equal(),
        comparison::less_than(),
        comparison::less_than_equal(),
        comparison::greater_than(),
        comparison::greater_than_equal(),
        comparison::in_operator(),
        comparison::not_in(),
        logical::and(),
        logical::or(),
        logical::not_operator(),
        set::as_operator(),
        string::coalesce(),
        string::case_statement(),
        string::case_condition_statement(),
        ordering::ascending(),
        ordering::descending(),
        ordering::nulls_first(),
        ordering::nulls_last(),
    ] {
        builder.add_internal_operator(operator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OperatorConfig;
    use crate::error::OperatorError;
    use crate::platform::GenericPlatform;
    use crate::printer::{Expr, render_sql};
    use crate::registry::catalog::OperatorCatalog;
    use crate::registry::selector::Selector;

    #[test]
    fn test_permutations_are_exact() {
        let catalog = OperatorCatalog::standard();
        let indices = |selector| {
            catalog
                .lookup(selector)
                .and_then(|op| op.explicit_argument_indices())
                .map(<[usize]>::to_vec)
        };

        assert_eq!(indices(Selector::ADD_DATE), Some(vec![1, 2, 0]));
        assert_eq!(indices(Selector::LOCATE), Some(vec![1, 0]));
        assert_eq!(indices(Selector::LOCATE2), Some(vec![1, 0, 2]));
        assert_eq!(indices(Selector::TRIM2), Some(vec![1, 0]));
        assert_eq!(indices(Selector::EXTRACT), Some(vec![1, 0]));
        assert_eq!(indices(Selector::SUBSTRING), None);
    }

    #[test]
    fn test_permuted_prefix_operators_have_one_more_fragment_than_slots() {
        for operator in OperatorCatalog::standard().iter() {
            if let (true, Some(indices)) = (operator.is_prefix(), operator.explicit_argument_indices()) {
                assert_eq!(
                    operator.database_strings().len(),
                    indices.len() + 1,
                    "{operator}"
                );
            }
        }
    }

    #[test]
    fn test_only_decode_is_incomplete() {
        let incomplete: Vec<_> = OperatorCatalog::standard()
            .iter()
            .filter(|op| !op.is_complete())
            .map(|op| op.selector())
            .collect();
        assert_eq!(incomplete, vec![Selector::DECODE]);
    }

    #[test]
    fn test_every_prefix_operator_renders_strictly() {
        let catalog = OperatorCatalog::standard();
        let platform = GenericPlatform::new(OperatorConfig::strict());

        let mut checked = 0;
        for operator in catalog.iter() {
            if !operator.is_prefix() || operator.is_list() || !operator.is_complete() {
                continue;
            }
            let slots = operator.database_strings().len() - 1;
            assert_eq!(operator.argument_indices(slots).len(), slots, "{operator}");

            let args = (0..slots).map(|i| Expr::column(format!("C{i}"))).collect();
            let rendered = render_sql(&Expr::apply(operator.selector(), args), catalog, &platform);
            assert!(
                !matches!(rendered, Err(OperatorError::FragmentMismatch { .. })),
                "{operator}: {rendered:?}"
            );
            checked += 1;
        }
        assert!(checked > 80);
    }

    #[test]
    fn test_fixed_arity_families_have_one_more_fragment_than_arguments() {
        let families = [
            (aggregate::count(), 1),
            (aggregate::variance(), 1),
            (aggregate::distinct(), 1),
            (string::to_upper_case(), 1),
            (string::trim(), 1),
            (string::instring(), 2),
            (string::substring_single_arg(), 2),
            (string::replace(), 3),
            (string::substring(), 3),
            (string::concat(), 2),
            (datetime::add_months(), 2),
            (datetime::date_difference(), 3),
            (datetime::current_date(), 0),
            (math::abs(), 1),
            (math::atan2(), 2),
            (math::modulo(), 2),
            (math::add(), 2),
            (math::multiply(), 2),
            (object::deref(), 1),
            (comparison::between(), 3),
            (comparison::is_null(), 1),
            (comparison::like_escape(), 3),
            (logical::not_operator(), 1),
        ];
        for (operator, arity) in families {
            assert!(operator.is_prefix(), "{operator}");
            assert_eq!(operator.database_strings().len(), arity + 1, "{operator}");
        }
    }
}
