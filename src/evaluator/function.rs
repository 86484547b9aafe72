//! In-memory scalar functions
//!
//! Covers the character and numeric functions simple enough to mirror the
//! database exactly. Numeric results are always `Float`.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{OperatorError, OperatorResult};
use crate::model::SqlValue;
use crate::registry::Selector;

fn argument<'a>(operator: &str, args: &'a [SqlValue], index: usize) -> OperatorResult<&'a SqlValue> {
    args.get(index).ok_or_else(|| {
        OperatorError::cannot_conform(operator, format!("missing argument {}", index + 1))
    })
}

fn number_argument(operator: &str, args: &[SqlValue], index: usize) -> OperatorResult<f64> {
    let value = argument(operator, args, index)?;
    value.as_f64().ok_or_else(|| {
        OperatorError::cannot_conform(operator, format!("expects a number, found {}", value.kind()))
    })
}

fn index_argument(operator: &str, args: &[SqlValue], index: usize) -> OperatorResult<i64> {
    let value = number_argument(operator, args, index)?;
    if value.fract() != 0.0 || !value.is_finite() {
        return Err(OperatorError::cannot_conform(
            operator,
            format!("expects an integer position, found {value}"),
        ));
    }
    Ok(value as i64)
}

/// Characters `[begin, begin + length)` with a 1-based `begin`
fn substring(operator: &str, text: &str, begin: i64, length: Option<i64>) -> OperatorResult<SqlValue> {
    let count = text.chars().count() as i64;
    let out_of_range = || {
        OperatorError::cannot_conform(
            operator,
            format!("position {begin} and length {length:?} outside a string of {count} characters"),
        )
    };
    let start = begin.checked_sub(1).ok_or_else(out_of_range)?;
    let end = match length {
        Some(length) => start.checked_add(length).ok_or_else(out_of_range)?,
        None => count,
    };
    if start < 0 || end < start || end > count {
        return Err(out_of_range());
    }
    Ok(SqlValue::String(
        text.chars()
            .skip(start as usize)
            .take((end - start) as usize)
            .collect(),
    ))
}

fn apply_text(operator: &str, selector: Selector, text: &str, args: &[SqlValue]) -> OperatorResult<SqlValue> {
    match selector {
        Selector::TO_UPPER_CASE => Ok(SqlValue::String(text.to_uppercase())),
        Selector::TO_LOWER_CASE => Ok(SqlValue::String(text.to_lowercase())),
        Selector::CONCAT => match argument(operator, args, 0)? {
            SqlValue::String(suffix) => Ok(SqlValue::String(format!("{text}{suffix}"))),
            other => Err(OperatorError::cannot_conform(
                operator,
                format!("expects a string, found {}", other.kind()),
            )),
        },
        Selector::SUBSTRING => {
            let begin = index_argument(operator, args, 0)?;
            let length = index_argument(operator, args, 1)?;
            substring(operator, text, begin, Some(length))
        }
        Selector::SUBSTRING_SINGLE_ARG => {
            let begin = index_argument(operator, args, 0)?;
            substring(operator, text, begin, None)
        }
        Selector::TO_NUMBER => Decimal::from_str(text.trim())
            .or_else(|_| Decimal::from_scientific(text.trim()))
            .map(SqlValue::Decimal)
            .map_err(|_| OperatorError::cannot_conform(operator, format!("'{text}' is not a number"))),
        Selector::TRIM => Ok(SqlValue::String(text.trim().to_string())),
        Selector::LENGTH => Ok(SqlValue::Integer(text.chars().count() as i64)),
        _ => Err(OperatorError::cannot_conform(
            operator,
            "has no in-memory evaluation for strings",
        )),
    }
}

fn apply_number(operator: &str, selector: Selector, x: f64, args: &[SqlValue]) -> OperatorResult<SqlValue> {
    let result = match selector {
        Selector::CEIL => x.ceil(),
        Selector::COS => x.cos(),
        Selector::ABS => x.abs(),
        Selector::ACOS => x.acos(),
        Selector::ASIN => x.asin(),
        Selector::ATAN => x.atan(),
        Selector::EXP => x.exp(),
        Selector::SQRT => x.sqrt(),
        Selector::FLOOR => x.floor(),
        Selector::LOG => x.ln(),
        Selector::POWER => x.powf(number_argument(operator, args, 0)?),
        Selector::ROUND => (x + 0.5).floor(),
        Selector::SIN => x.sin(),
        Selector::TAN => x.tan(),
        Selector::GREATEST => x.max(number_argument(operator, args, 0)?),
        Selector::LEAST => x.min(number_argument(operator, args, 0)?),
        Selector::ADD => x + number_argument(operator, args, 0)?,
        Selector::SUBTRACT => x - number_argument(operator, args, 0)?,
        Selector::DIVIDE => x / number_argument(operator, args, 0)?,
        Selector::MULTIPLY => x * number_argument(operator, args, 0)?,
        _ => {
            return Err(OperatorError::cannot_conform(
                operator,
                "has no in-memory evaluation for numbers",
            ));
        }
    };
    Ok(SqlValue::Float(result))
}

/// Apply a scalar function to `source` with the remaining `args`
pub fn apply_function(
    operator: &str,
    selector: Selector,
    source: &SqlValue,
    args: &[SqlValue],
) -> OperatorResult<SqlValue> {
    if let SqlValue::String(text) = source {
        return apply_text(operator, selector, text, args);
    }
    match source.as_f64() {
        Some(x) => apply_number(operator, selector, x, args),
        None => Err(OperatorError::cannot_conform(
            operator,
            format!("cannot be applied to {} in memory", source.kind()),
        )),
    }
}
