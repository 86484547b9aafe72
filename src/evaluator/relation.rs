//! In-memory evaluation of relations and predicates

use std::cmp::Ordering;

use log::trace;

use super::like::conform_like;
use crate::error::{OperatorError, OperatorResult};
use crate::model::{Operand, SqlValue};
use crate::platform::Platform;
use crate::registry::Selector;

/// Null-aware equality
///
/// Values of the same numeric kind compare natively, with floats using total
/// ordering so NaN equals NaN and `-0.0` differs from `0.0`. Mixed numeric kinds
/// compare as `f64` with NaN equal to NaN.
pub fn values_equal(left: &SqlValue, right: &SqlValue) -> bool {
    match (left, right) {
        (SqlValue::Null, SqlValue::Null) => true,
        (SqlValue::Null, _) | (_, SqlValue::Null) => false,
        (SqlValue::Float(l), SqlValue::Float(r)) => l.total_cmp(r) == Ordering::Equal,
        (l, r) if l.kind() != r.kind() && l.kind().is_numeric() && r.kind().is_numeric() => {
            match (l.as_f64(), r.as_f64()) {
                (Some(l), Some(r)) => l == r || (l.is_nan() && r.is_nan()),
                _ => false,
            }
        }
        (l, r) => l == r,
    }
}

/// Order two non-null operands of the same family
///
/// Text orders by UTF-16 code units. `Ok(None)` means the values are
/// unordered (NaN).
fn compare(operator: &str, left: &SqlValue, right: &SqlValue) -> OperatorResult<Option<Ordering>> {
    match (left.operand(), right.operand()) {
        (Operand::Number(l), Operand::Number(r)) => Ok(l.partial_cmp(&r)),
        (Operand::Text(l), Operand::Text(r)) => Ok(Some(l.encode_utf16().cmp(r.encode_utf16()))),
        (Operand::Temporal(l), Operand::Temporal(r)) => l.compare(&r).map(Some).ok_or_else(|| {
            OperatorError::cannot_conform(
                operator,
                format!("cannot order {} against {}", left.kind(), right.kind()),
            )
        }),
        _ => Err(OperatorError::cannot_conform(
            operator,
            format!("cannot order {} against {}", left.kind(), right.kind()),
        )),
    }
}

fn conform_ordering(
    operator: &str,
    selector: Selector,
    left: &SqlValue,
    right: &SqlValue,
) -> OperatorResult<bool> {
    if left.is_null() || right.is_null() {
        let both = left.is_null() && right.is_null();
        return Ok(both && (selector == Selector::LESS_THAN_EQUAL || selector == Selector::GREATER_THAN_EQUAL));
    }

    let Some(ordering) = compare(operator, left, right)? else {
        return Ok(false);
    };
    Ok(match selector {
        Selector::LESS_THAN => ordering == Ordering::Less,
        Selector::LESS_THAN_EQUAL => ordering != Ordering::Greater,
        Selector::GREATER_THAN => ordering == Ordering::Greater,
        _ => ordering != Ordering::Less,
    })
}

fn conform_between(operator: &str, value: &SqlValue, bounds: &SqlValue) -> OperatorResult<bool> {
    let [start, end] = bounds.as_collection().unwrap_or_default() else {
        return Err(OperatorError::cannot_conform(
            operator,
            "requires a collection of exactly two bounds",
        ));
    };
    if value.is_null() || start.is_null() || end.is_null() {
        return Err(OperatorError::cannot_conform(operator, "null operand or bound"));
    }

    let above_start = compare(operator, value, start)?.is_some_and(|o| o != Ordering::Less);
    let below_end = compare(operator, value, end)?.is_some_and(|o| o != Ordering::Greater);
    Ok(above_start && below_end)
}

/// Membership by same-kind equality, so `1` is not in `{1.0}` but NaN is in `{NaN}`
fn conform_in(operator: &str, value: &SqlValue, set: &SqlValue) -> OperatorResult<bool> {
    match set.as_collection() {
        Some(items) => Ok(items
            .iter()
            .any(|item| item.kind() == value.kind() && values_equal(item, value))),
        None => Err(OperatorError::cannot_conform(
            operator,
            format!("requires a collection, found {}", set.kind()),
        )),
    }
}

/// A LIKE or REGEXP pattern may arrive wrapped in a one-element collection
fn unwrap_pattern(pattern: &SqlValue) -> &SqlValue {
    match pattern.as_collection() {
        Some([single]) => single,
        _ => pattern,
    }
}

/// Evaluate `left <selector> right` in memory
///
/// `operator` names the operator in error messages. Any selector that is not a
/// relation or predicate is not conformable.
pub fn does_relation_conform(
    operator: &str,
    selector: Selector,
    left: &SqlValue,
    right: &SqlValue,
    platform: &dyn Platform,
) -> OperatorResult<bool> {
    let result = match selector {
        Selector::EQUAL => Ok(values_equal(left, right)),
        Selector::NOT_EQUAL => Ok(!values_equal(left, right)),
        Selector::IS_NULL => Ok(left.is_null()),
        Selector::NOT_NULL => Ok(!left.is_null()),
        Selector::LESS_THAN
        | Selector::LESS_THAN_EQUAL
        | Selector::GREATER_THAN
        | Selector::GREATER_THAN_EQUAL => conform_ordering(operator, selector, left, right),
        Selector::BETWEEN => conform_between(operator, left, right),
        Selector::NOT_BETWEEN => conform_between(operator, left, right).map(|b| !b),
        Selector::IN => conform_in(operator, left, right),
        Selector::NOT_IN => conform_in(operator, left, right).map(|b| !b),
        Selector::LIKE => conform_like(operator, left, unwrap_pattern(right)),
        Selector::NOT_LIKE => conform_like(operator, left, unwrap_pattern(right)).map(|b| !b),
        Selector::REGEXP => platform
            .conform_regexp(left, unwrap_pattern(right))
            .ok_or_else(|| {
                OperatorError::cannot_conform(operator, format!("not supported by platform {}", platform.name()))
            }),
        _ => Err(OperatorError::cannot_conform(
            operator,
            "has no in-memory evaluation",
        )),
    };

    if let Err(err) = &result {
        trace!("Falling back to the data source: {err}");
    }
    result
}
