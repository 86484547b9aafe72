//! Relations and predicates
//!
//! The six ordinary relations are postfix and print as ` OP `; the keyword
//! predicates (BETWEEN, LIKE, IS NULL, EXISTS) are prefix with one fragment per
//! argument gap.

use crate::registry::catalog::CatalogBuilder;
use crate::registry::operator::{BindingSupport, Operator, OperatorType};
use crate::registry::selector::Selector;

/// `a = b`
pub fn equal() -> Operator {
    Operator::simple_relation_with_api(Selector::EQUAL, "=", "equal")
}

/// `a <> b`
pub fn not_equal() -> Operator {
    Operator::simple_relation_with_api(Selector::NOT_EQUAL, "<>", "notEqual")
}

/// `a =* b`, legacy outer join syntax
pub fn equal_outer_join() -> Operator {
    Operator::simple_relation(Selector::EQUAL_OUTER_JOIN, "=*")
}

/// `a < b`
pub fn less_than() -> Operator {
    Operator::simple_relation_with_api(Selector::LESS_THAN, "<", "lessThan")
}

/// `a <= b`
pub fn less_than_equal() -> Operator {
    Operator::simple_relation_with_api(Selector::LESS_THAN_EQUAL, "<=", "lessThanEqual")
}

/// `a > b`
pub fn greater_than() -> Operator {
    Operator::simple_relation_with_api(Selector::GREATER_THAN, ">", "greaterThan")
}

/// `a >= b`
pub fn greater_than_equal() -> Operator {
    Operator::simple_relation_with_api(Selector::GREATER_THAN_EQUAL, ">=", "greaterThanEqual")
}

/// `a IN b`
pub fn in_operator() -> Operator {
    Operator::simple_relation(Selector::IN, "IN")
}

/// `a NOT IN b`
pub fn not_in() -> Operator {
    Operator::simple_relation(Selector::NOT_IN, "NOT IN")
}

/// `a IN (subquery)`
pub fn in_sub_query() -> Operator {
    Operator::with_strings(Selector::IN_SUB_QUERY, [" IN "])
}

/// `a NOT IN (subquery)`
pub fn not_in_sub_query() -> Operator {
    Operator::with_strings(Selector::NOT_IN_SUB_QUERY, [" NOT IN "])
}

/// `(a BETWEEN b AND c)`
pub fn between() -> Operator {
    Operator::with_strings(Selector::BETWEEN, ["(", " BETWEEN ", " AND ", ")"])
        .prefix()
        .with_type(OperatorType::Comparison)
}

/// `(a NOT BETWEEN b AND c)`
pub fn not_between() -> Operator {
    Operator::with_strings(Selector::NOT_BETWEEN, ["(", " NOT BETWEEN ", " AND ", ")"])
        .prefix()
        .with_type(OperatorType::Comparison)
}

/// `(a IS NULL)`
pub fn is_null() -> Operator {
    Operator::with_strings(Selector::IS_NULL, ["(", " IS NULL)"])
        .prefix()
        .with_type(OperatorType::Comparison)
        .with_api_strings([".isNull()"])
}

/// `(a IS NOT NULL)`
pub fn not_null() -> Operator {
    Operator::with_strings(Selector::NOT_NULL, ["(", " IS NOT NULL)"])
        .prefix()
        .with_type(OperatorType::Comparison)
        .with_api_strings([".notNull()"])
}

/// `a LIKE b`
pub fn like() -> Operator {
    Operator::with_strings(Selector::LIKE, ["", " LIKE ", ""])
        .prefix()
        .with_api_strings([".like(", ")"])
}

/// `a NOT LIKE b`
pub fn not_like() -> Operator {
    Operator::with_strings(Selector::NOT_LIKE, ["", " NOT LIKE ", ""])
        .prefix()
        .with_api_strings([".notLike(", ")"])
}

/// `a LIKE b ESCAPE c`
pub fn like_escape() -> Operator {
    Operator::with_strings(Selector::LIKE_ESCAPE, ["", " LIKE ", " ESCAPE ", ""])
        .prefix()
        .with_binding(BindingSupport::Unsupported)
}

/// `a NOT LIKE b ESCAPE c`
pub fn not_like_escape() -> Operator {
    Operator::with_strings(Selector::NOT_LIKE_ESCAPE, ["", " NOT LIKE ", " ESCAPE ", ""])
        .prefix()
        .with_binding(BindingSupport::Unsupported)
}

/// `a REGEXP b`
pub fn regexp() -> Operator {
    Operator::with_strings(Selector::REGEXP, ["", " REGEXP ", ""])
        .prefix()
        .with_api_strings([".regexp(", ")"])
}

/// `EXISTS subquery`
pub fn exists() -> Operator {
    Operator::with_strings(Selector::EXISTS, ["EXISTS ", ""]).prefix()
}

/// `NOT EXISTS subquery`
pub fn not_exists() -> Operator {
    Operator::with_strings(Selector::NOT_EXISTS, ["NOT EXISTS ", ""]).prefix()
}

/// `ANY` subquery quantifier
pub fn any() -> Operator {
    Operator::with_strings(Selector::ANY, ["ANY"])
}

/// `SOME` subquery quantifier
pub fn some() -> Operator {
    Operator::with_strings(Selector::SOME, ["SOME"])
}

/// `ALL` subquery quantifier
pub fn all() -> Operator {
    Operator::with_strings(Selector::ALL, ["ALL"])
}

/// Register the relations and predicates
pub fn register_comparison_operators(builder: &mut CatalogBuilder) {
    for operator in [
        equal(),
        not_equal(),
        equal_outer_join(),
        less_than(),
        less_than_equal(),
        greater_than(),
        greater_than_equal(),
        in_operator(),
        not_in(),
        in_sub_query(),
        not_in_sub_query(),
        between(),
        not_between(),
        is_null(),
        not_null(),
        like(),
        not_like(),
        like_escape(),
        not_like_escape(),
        regexp(),
        exists(),
        not_exists(),
        any(),
        some(),
        all(),
    ] {
        builder.add_operator(operator);
    }
}
