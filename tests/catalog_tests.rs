//! Catalog construction, naming and platform overrides

use pretty_assertions::assert_eq;
use rstest::rstest;
use sqlexpr_operators::registry::create_platform_catalog;
use sqlexpr_operators::registry::names::{operator_name, selector_for_name};
use sqlexpr_operators::{
    CatalogBuilder, Expr, GenericPlatform, Operator, OperatorCatalog, OperatorConfig, OperatorError,
    OperatorType, Platform, Selector, SqlValue, render_sql,
};

/// Platform that prints DECODE and renames SUBSTRING
struct DecodingPlatform {
    config: OperatorConfig,
}

impl Platform for DecodingPlatform {
    fn name(&self) -> &str {
        "decoding"
    }

    fn config(&self) -> &OperatorConfig {
        &self.config
    }

    fn conform_regexp(&self, _value: &SqlValue, _pattern: &SqlValue) -> Option<bool> {
        None
    }

    fn register_operators(&self, builder: &mut CatalogBuilder) {
        builder.add_operator(
            Operator::list(
                Selector::DECODE,
                sqlexpr_operators::ListFragments::new(["DECODE("], [", "], [")"]),
            )
            .with_name("DECODE"),
        );
        builder.add_operator(Operator::simple_three_argument_function(
            Selector::SUBSTRING,
            "SUBSTRING",
        ));
    }
}

#[rstest]
#[case(Selector::TO_UPPER_CASE, "ToUpperCase")]
#[case(Selector::LOCATE, "Locate")]
#[case(Selector::LEFT_TRIM, "LeftTrim")]
#[case(Selector::NVL, "Nvl")]
#[case(Selector::CEIL, "Ceil")]
#[case(Selector::DECODE, "Decode")]
fn standard_names_resolve_both_ways(#[case] selector: Selector, #[case] name: &str) {
    assert_eq!(operator_name(selector), name);
    assert_eq!(selector_for_name(name), Some(selector));
}

#[test]
fn shared_names_resolve_to_first_selector() {
    assert_eq!(operator_name(Selector::LOCATE2), "Locate");
    assert_eq!(selector_for_name("Locate"), Some(Selector::LOCATE));
}

#[rstest]
#[case(Selector::EQUAL, "4")]
#[case(Selector::BETWEEN, "15")]
#[case(Selector(9999), "9999")]
fn unnamed_selectors_render_as_numbers(#[case] selector: Selector, #[case] expected: &str) {
    assert_eq!(operator_name(selector), expected);
}

#[rstest]
#[case(Selector::EQUAL, OperatorType::Comparison)]
#[case(Selector::IS_NULL, OperatorType::Comparison)]
#[case(Selector::AND, OperatorType::Logical)]
#[case(Selector::NOT, OperatorType::Logical)]
#[case(Selector::COUNT, OperatorType::Aggregate)]
#[case(Selector::DESCENDING, OperatorType::Order)]
#[case(Selector::TO_UPPER_CASE, OperatorType::Function)]
fn standard_operators_are_classified(#[case] selector: Selector, #[case] expected: OperatorType) {
    let operator = OperatorCatalog::standard().require(selector).unwrap();
    assert_eq!(operator.operator_type(), expected);
}

#[test]
fn every_standard_operator_is_keyed_by_its_selector() {
    let catalog = OperatorCatalog::standard();
    for operator in catalog.iter() {
        assert_eq!(catalog.lookup(operator.selector()), Some(operator));
    }
    for operator in catalog.internal_iter() {
        assert_eq!(
            catalog.internal_operator(operator.selector()).map(Operator::selector),
            Some(operator.selector())
        );
    }
}

#[test]
fn internal_layer_covers_platform_independent_operators() {
    let catalog = OperatorCatalog::standard();
    for selector in [
        Selector::COUNT,
        Selector::LIKE,
        Selector::EQUAL,
        Selector::AND,
        Selector::COALESCE,
        Selector::CASE,
        Selector::NULLS_LAST,
    ] {
        assert!(catalog.internal_operator(selector).is_some(), "{selector}");
    }
    assert!(catalog.internal_operator(Selector::SOUNDEX).is_none());
}

#[test]
fn platform_overrides_replace_standard_operators() {
    let platform = DecodingPlatform {
        config: OperatorConfig::default(),
    };
    let catalog = create_platform_catalog(&platform);

    let decode = Expr::apply(
        Selector::DECODE,
        vec![
            Expr::column("STATUS"),
            Expr::literal("A"),
            Expr::literal("Active"),
            Expr::literal("Unknown"),
        ],
    );
    assert_eq!(
        render_sql(&decode, &catalog, &platform).unwrap().sql,
        "DECODE(STATUS, 'A', 'Active', 'Unknown')"
    );

    let substring = Expr::apply(
        Selector::SUBSTRING,
        vec![Expr::column("S"), Expr::literal(1), Expr::literal(2)],
    );
    assert_eq!(
        render_sql(&substring, &catalog, &platform).unwrap().sql,
        "SUBSTRING(S, 1, 2)"
    );

    // the shared standard catalog is untouched
    let err = render_sql(&decode, OperatorCatalog::standard(), &platform).unwrap_err();
    assert_eq!(
        err,
        OperatorError::IncompleteOperator {
            operator: "Decode".to_string()
        }
    );
}

#[test]
fn platform_config_controls_fallback() {
    let platform = GenericPlatform::new(OperatorConfig {
        fallback_to_internal: false,
        ..OperatorConfig::default()
    });
    let mut builder = CatalogBuilder::standard().with_config(platform.config().clone());
    builder.remove_operator(Selector::COUNT);
    let catalog = builder.build();

    assert!(catalog.lookup(Selector::COUNT).is_none());
    assert!(catalog.internal_operator(Selector::COUNT).is_some());
    assert_eq!(
        catalog.require(Selector::COUNT),
        Err(OperatorError::UnknownOperator { selector: 19 })
    );
}

#[test]
fn operators_compare_by_selector() {
    assert_eq!(
        Operator::simple_function(Selector::ABS, "ABS"),
        Operator::simple_function(Selector::ABS, "FABS")
    );
    assert_ne!(
        Operator::with_strings(Selector::ANONYMOUS, [" + "]),
        Operator::with_strings(Selector::ANONYMOUS, [" - "])
    );
}

#[test]
fn operator_json_shape() {
    let operator = OperatorCatalog::standard().require(Selector::LOCATE).unwrap();
    let json = serde_json::to_value(operator).unwrap();
    assert_eq!(json["selector"], serde_json::json!(112));
    assert_eq!(
        json["database_strings"],
        serde_json::json!(["LOCATE(", ", ", ")"])
    );
}
