//! Date and time functions

use crate::registry::catalog::CatalogBuilder;
use crate::registry::operator::Operator;
use crate::registry::selector::Selector;

pub fn add_months() -> Operator {
    Operator::simple_two_argument_function(Selector::ADD_MONTHS, "ADD_MONTHS")
}

pub fn date_to_string() -> Operator {
    Operator::simple_function(Selector::DATE_TO_STRING, "TO_CHAR")
}

pub fn last_day() -> Operator {
    Operator::simple_function(Selector::LAST_DAY, "LAST_DAY")
}

pub fn months_between() -> Operator {
    Operator::simple_two_argument_function(Selector::MONTHS_BETWEEN, "MONTHS_BETWEEN")
}

pub fn next_day() -> Operator {
    Operator::simple_two_argument_function(Selector::NEXT_DAY, "NEXT_DAY")
}

pub fn round_date() -> Operator {
    Operator::simple_two_argument_function(Selector::ROUND_DATE, "ROUND")
}

pub fn to_date() -> Operator {
    Operator::simple_function(Selector::TO_DATE, "TO_DATE")
}

/// `CURRENT_TIMESTAMP`
pub fn today() -> Operator {
    Operator::simple_function_no_parentheses(Selector::TODAY, "CURRENT_TIMESTAMP")
}

/// `CURRENT_DATE`
pub fn current_date() -> Operator {
    Operator::simple_function_no_parentheses(Selector::CURRENT_DATE, "CURRENT_DATE")
}

/// `CURRENT_TIME`
pub fn current_time() -> Operator {
    Operator::simple_function_no_parentheses(Selector::CURRENT_TIME, "CURRENT_TIME")
}

/// `DATEADD(part, amount, date)`, arguments are (date, part, amount)
pub fn add_date() -> Operator {
    Operator::simple_three_argument_function(Selector::ADD_DATE, "DATEADD")
        .with_argument_indices([1, 2, 0])
}

pub fn date_name() -> Operator {
    Operator::simple_two_argument_function(Selector::DATE_NAME, "DATENAME")
}

pub fn date_part() -> Operator {
    Operator::simple_two_argument_function(Selector::DATE_PART, "DATEPART")
}

pub fn date_difference() -> Operator {
    Operator::simple_three_argument_function(Selector::DATE_DIFFERENCE, "DATEDIFF")
}

pub fn truncate_date() -> Operator {
    Operator::simple_two_argument_function(Selector::TRUNCATE_DATE, "TRUNC")
}

pub fn new_time() -> Operator {
    Operator::simple_three_argument_function(Selector::NEW_TIME, "NEW_TIME")
}

/// Register the date and time functions
pub fn register_datetime_operators(builder: &mut CatalogBuilder) {
    for operator in [
        add_months(),
        date_to_string(),
        last_day(),
        months_between(),
        next_day(),
        round_date(),
        to_date(),
        today(),
        current_date(),
        current_time(),
        add_date(),
        date_name(),
        date_part(),
        date_difference(),
        truncate_date(),
        new_time(),
    ] {
        builder.add_operator(operator);
    }
}
