//! Aggregate functions

use crate::registry::catalog::CatalogBuilder;
use crate::registry::operator::Operator;
use crate::registry::selector::Selector;

/// `COUNT(a)`, printed as `COUNT(*)` over a whole row
pub fn count() -> Operator {
    Operator::simple_aggregate(Selector::COUNT, "COUNT", "count")
}

/// `SUM(a)`
pub fn sum() -> Operator {
    Operator::simple_aggregate(Selector::SUM, "SUM", "sum")
}

/// `AVG(a)`
pub fn average() -> Operator {
    Operator::simple_aggregate(Selector::AVERAGE, "AVG", "average")
}

/// `MAX(a)`
pub fn maximum() -> Operator {
    Operator::simple_aggregate(Selector::MAXIMUM, "MAX", "maximum")
}

/// `MIN(a)`
pub fn minimum() -> Operator {
    Operator::simple_aggregate(Selector::MINIMUM, "MIN", "minimum")
}

/// `STDDEV(a)`
pub fn standard_deviation() -> Operator {
    Operator::simple_aggregate(Selector::STANDARD_DEVIATION, "STDDEV", "standardDeviation")
}

/// `VARIANCE(a)`
pub fn variance() -> Operator {
    Operator::simple_aggregate(Selector::VARIANCE, "VARIANCE", "variance")
}

/// `DISTINCT(a)`
pub fn distinct() -> Operator {
    Operator::simple_function_with_api(Selector::DISTINCT, "DISTINCT", "distinct")
}

/// Register the aggregate functions
pub fn register_aggregate_operators(builder: &mut CatalogBuilder) {
    builder.add_operator(count());
    builder.add_operator(sum());
    builder.add_operator(average());
    builder.add_operator(maximum());
    builder.add_operator(minimum());
    builder.add_operator(standard_deviation());
    builder.add_operator(variance());
    builder.add_operator(distinct());
}
