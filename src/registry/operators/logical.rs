//! Logical connectives

use crate::registry::catalog::CatalogBuilder;
use crate::registry::operator::{Operator, OperatorType};
use crate::registry::selector::Selector;

/// `a AND b`
pub fn and() -> Operator {
    Operator::simple_logical(Selector::AND, "AND", "and")
}

/// `a OR b`
pub fn or() -> Operator {
    Operator::simple_logical(Selector::OR, "OR", "or")
}

/// `NOT (a)`
pub fn not_operator() -> Operator {
    Operator::with_strings(Selector::NOT, ["NOT (", ")"])
        .prefix()
        .with_type(OperatorType::Logical)
        .with_api_strings([".not()"])
}

/// Register the logical operators
pub fn register_logical_operators(builder: &mut CatalogBuilder) {
    builder.add_operator(and());
    builder.add_operator(or());
    builder.add_operator(not_operator());
}
