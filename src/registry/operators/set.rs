//! Query set operations and the column alias

use crate::registry::catalog::CatalogBuilder;
use crate::registry::operator::Operator;
use crate::registry::selector::Selector;

pub fn union() -> Operator {
    Operator::with_strings(Selector::UNION, ["UNION "])
}

pub fn union_all() -> Operator {
    Operator::with_strings(Selector::UNION_ALL, ["UNION ALL "])
}

pub fn intersect() -> Operator {
    Operator::with_strings(Selector::INTERSECT, ["INTERSECT "])
}

pub fn intersect_all() -> Operator {
    Operator::with_strings(Selector::INTERSECT_ALL, ["INTERSECT ALL "])
}

pub fn except() -> Operator {
    Operator::with_strings(Selector::EXCEPT, ["EXCEPT "])
}

pub fn except_all() -> Operator {
    Operator::with_strings(Selector::EXCEPT_ALL, ["EXCEPT ALL "])
}

/// `a AS b`
pub fn as_operator() -> Operator {
    Operator::with_strings(Selector::AS, [" AS "])
}

/// Register the set operations and AS
pub fn register_set_operators(builder: &mut CatalogBuilder) {
    builder.add_operator(union());
    builder.add_operator(union_all());
    builder.add_operator(intersect());
    builder.add_operator(intersect_all());
    builder.add_operator(except());
    builder.add_operator(except_all());
    builder.add_operator(as_operator());
}
