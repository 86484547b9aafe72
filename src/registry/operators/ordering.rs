//! ORDER BY modifiers

use crate::registry::catalog::CatalogBuilder;
use crate::registry::operator::Operator;
use crate::registry::selector::Selector;

pub fn ascending() -> Operator {
    Operator::simple_ordering(Selector::ASCENDING, "ASC", "ascending")
}

pub fn descending() -> Operator {
    Operator::simple_ordering(Selector::DESCENDING, "DESC", "descending")
}

pub fn nulls_first() -> Operator {
    Operator::simple_ordering(Selector::NULLS_FIRST, "NULLS FIRST", "nullsFirst")
}

pub fn nulls_last() -> Operator {
    Operator::simple_ordering(Selector::NULLS_LAST, "NULLS LAST", "nullsLast")
}

/// Register the ordering modifiers
pub fn register_ordering_operators(builder: &mut CatalogBuilder) {
    builder.add_operator(ascending());
    builder.add_operator(descending());
    builder.add_operator(nulls_first());
    builder.add_operator(nulls_last());
}
