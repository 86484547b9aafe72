//! In-memory evaluation of predicates and scalar functions

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use rstest::rstest;
use sqlexpr_operators::{
    GenericPlatform, InMemoryEvaluator, OperatorCatalog, OperatorConfig, Selector, SqlValue,
};

fn evaluate(selector: Selector, left: SqlValue, right: SqlValue) -> Option<bool> {
    let platform = GenericPlatform::default();
    let evaluator = InMemoryEvaluator::new(OperatorCatalog::standard(), &platform);
    match evaluator.evaluate(selector, &left, &right) {
        Ok(result) => Some(result),
        Err(err) => {
            assert!(err.is_cannot_conform(), "unexpected error: {err}");
            None
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> SqlValue {
    SqlValue::from(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

#[rstest]
#[case::equal_ints(Selector::EQUAL, SqlValue::from(3), SqlValue::from(3), Some(true))]
#[case::equal_mixed(Selector::EQUAL, SqlValue::from(2), SqlValue::from(2.0), Some(true))]
#[case::equal_strings(Selector::EQUAL, SqlValue::from("a"), SqlValue::from("A"), Some(false))]
#[case::equal_nulls(Selector::EQUAL, SqlValue::Null, SqlValue::Null, Some(true))]
#[case::not_equal_null(Selector::NOT_EQUAL, SqlValue::Null, SqlValue::from(1), Some(true))]
#[case::less_mixed(Selector::LESS_THAN, SqlValue::from(1), SqlValue::from(1.5), Some(true))]
#[case::less_nan(Selector::LESS_THAN, SqlValue::from(f64::NAN), SqlValue::from(1.0), Some(false))]
#[case::greater_text(Selector::GREATER_THAN, SqlValue::from("b"), SqlValue::from("a"), Some(true))]
#[case::ge_nulls(Selector::GREATER_THAN_EQUAL, SqlValue::Null, SqlValue::Null, Some(true))]
#[case::gt_nulls(Selector::GREATER_THAN, SqlValue::Null, SqlValue::Null, Some(false))]
#[case::mixed_families(Selector::LESS_THAN, SqlValue::from("1"), SqlValue::from(2), None)]
#[case::is_null(Selector::IS_NULL, SqlValue::Null, SqlValue::Null, Some(true))]
#[case::not_null(Selector::NOT_NULL, SqlValue::from(0), SqlValue::Null, Some(true))]
#[case::exists(Selector::EXISTS, SqlValue::from(1), SqlValue::Null, None)]
fn relations(
    #[case] selector: Selector,
    #[case] left: SqlValue,
    #[case] right: SqlValue,
    #[case] expected: Option<bool>,
) {
    assert_eq!(evaluate(selector, left, right), expected);
}

#[rstest]
#[case("AxyzB", "A%B", Some(true))]
#[case("BxyzA", "A%B", Some(false))]
#[case("A", "A%A", Some(false))]
#[case("banana", "%an%an%", Some(true))]
#[case("banana", "%an%an%an%", Some(false))]
#[case("exact", "exact", Some(true))]
#[case("abc", "a_c", None)]
fn like_patterns(#[case] value: &str, #[case] pattern: &str, #[case] expected: Option<bool>) {
    assert_eq!(
        evaluate(Selector::LIKE, SqlValue::from(value), SqlValue::from(pattern)),
        expected
    );
    assert_eq!(
        evaluate(Selector::NOT_LIKE, SqlValue::from(value), SqlValue::from(pattern)),
        expected.map(|b| !b)
    );
}

#[rstest]
#[case(SqlValue::Null, SqlValue::from("A%"), None)]
#[case(SqlValue::from("abc"), SqlValue::Null, None)]
#[case(SqlValue::from("abc"), SqlValue::from(vec![SqlValue::Null]), None)]
#[case(SqlValue::Null, SqlValue::Null, Some(true))]
fn like_with_nulls(#[case] value: SqlValue, #[case] pattern: SqlValue, #[case] expected: Option<bool>) {
    assert_eq!(
        evaluate(Selector::LIKE, value.clone(), pattern.clone()),
        expected
    );
    assert_eq!(
        evaluate(Selector::NOT_LIKE, value, pattern),
        expected.map(|b| !b)
    );
}

#[rstest]
#[case(SqlValue::from(5), SqlValue::pair(1, 10), Some(true))]
#[case(SqlValue::from(1), SqlValue::pair(1, 10), Some(true))]
#[case(SqlValue::from(0.5), SqlValue::pair(1, 10), Some(false))]
#[case(date(2024, 2, 29), SqlValue::pair(date(2024, 1, 1), date(2024, 12, 31)), Some(true))]
#[case(SqlValue::from(5), SqlValue::pair(SqlValue::Null, 10), None)]
#[case(SqlValue::Null, SqlValue::pair(1, 10), None)]
#[case(SqlValue::from(5), SqlValue::from(vec![1, 2, 3]), None)]
fn between(#[case] value: SqlValue, #[case] bounds: SqlValue, #[case] expected: Option<bool>) {
    assert_eq!(evaluate(Selector::BETWEEN, value, bounds), expected);
}

#[test]
fn in_uses_exact_value_equality() {
    let set = SqlValue::from(vec![1, 2, 3]);
    assert_eq!(evaluate(Selector::IN, SqlValue::from(2), set.clone()), Some(true));
    assert_eq!(evaluate(Selector::NOT_IN, SqlValue::from(4), set.clone()), Some(true));
    assert_eq!(evaluate(Selector::IN, SqlValue::from(2.0), set), Some(false));
    assert_eq!(evaluate(Selector::IN, SqlValue::from(2), SqlValue::from(2)), None);
}

#[test]
fn temporal_ordering() {
    let morning = SqlValue::from(
        NaiveDateTime::parse_from_str("2024-05-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    );
    let evening = SqlValue::from(
        NaiveDateTime::parse_from_str("2024-05-01 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    );
    assert_eq!(evaluate(Selector::LESS_THAN, morning.clone(), evening.clone()), Some(true));
    assert_eq!(evaluate(Selector::GREATER_THAN_EQUAL, morning, evening), Some(false));
}

#[test]
fn regexp_is_anchored_and_cached() {
    let platform = GenericPlatform::new(OperatorConfig::default());
    let evaluator = InMemoryEvaluator::new(OperatorCatalog::standard(), &platform);
    let matches = |value: &str, pattern: &str| {
        evaluator
            .evaluate(Selector::REGEXP, &SqlValue::from(value), &SqlValue::from(pattern))
            .unwrap()
    };
    assert!(matches("abc123", "[a-z]+[0-9]+"));
    assert!(!matches("abc123x", "[a-z]+[0-9]+"));
    assert!(matches("abc123", "[a-z]+[0-9]+"));
    assert_eq!(platform.regex_cache().len(), 1);
}

#[rstest]
#[case::upper(Selector::TO_UPPER_CASE, SqlValue::from("abc"), vec![], SqlValue::from("ABC"))]
#[case::lower(Selector::TO_LOWER_CASE, SqlValue::from("ABC"), vec![], SqlValue::from("abc"))]
#[case::concat(Selector::CONCAT, SqlValue::from("ab"), vec![SqlValue::from("c")], SqlValue::from("abc"))]
#[case::substring(
    Selector::SUBSTRING,
    SqlValue::from("hello"),
    vec![SqlValue::from(2), SqlValue::from(3)],
    SqlValue::from("ell")
)]
#[case::length(Selector::LENGTH, SqlValue::from("four"), vec![], SqlValue::from(4))]
#[case::abs(Selector::ABS, SqlValue::from(-4), vec![], SqlValue::from(4.0))]
#[case::sqrt(Selector::SQRT, SqlValue::from(16), vec![], SqlValue::from(4.0))]
#[case::multiply(Selector::MULTIPLY, SqlValue::from(3), vec![SqlValue::from(2.5)], SqlValue::from(7.5))]
#[case::least(Selector::LEAST, SqlValue::from(3), vec![SqlValue::from(-1)], SqlValue::from(-1.0))]
fn scalar_functions(
    #[case] selector: Selector,
    #[case] source: SqlValue,
    #[case] args: Vec<SqlValue>,
    #[case] expected: SqlValue,
) {
    let platform = GenericPlatform::default();
    let evaluator = InMemoryEvaluator::new(OperatorCatalog::standard(), &platform);
    assert_eq!(
        evaluator.apply_scalar_function(selector, &source, &args).unwrap(),
        expected
    );
}

#[test]
fn unsupported_functions_defer_to_database() {
    let platform = GenericPlatform::default();
    let evaluator = InMemoryEvaluator::new(OperatorCatalog::standard(), &platform);
    let err = evaluator
        .apply_scalar_function(Selector::SOUNDEX, &SqlValue::from("Robert"), &[])
        .unwrap_err();
    assert!(err.is_cannot_conform());
    assert!(err.to_string().contains("SOUNDEX"), "{err}");
}
