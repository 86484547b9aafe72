//! In-memory LIKE matching
//!
//! Only `%` is supported. A pattern containing `_` is reported as not
//! conformable so the caller can defer to the database.

use crate::error::{OperatorError, OperatorResult};
use crate::model::SqlValue;

/// Match `value LIKE pattern`
pub fn conform_like(operator: &str, value: &SqlValue, pattern: &SqlValue) -> OperatorResult<bool> {
    match (value, pattern) {
        (SqlValue::Null, SqlValue::Null) => Ok(true),
        (SqlValue::String(value), SqlValue::String(pattern)) => like_match(operator, value, pattern),
        (value, pattern) => Err(OperatorError::cannot_conform(
            operator,
            format!("cannot match {} against a {} pattern", value.kind(), pattern.kind()),
        )),
    }
}

fn like_match(operator: &str, value: &str, pattern: &str) -> OperatorResult<bool> {
    if pattern.contains('_') {
        return Err(OperatorError::cannot_conform(
            operator,
            "single-character wildcard '_' is not supported in memory",
        ));
    }
    if !pattern.contains('%') {
        return Ok(value == pattern);
    }

    let strict_start = !pattern.starts_with('%');
    let strict_end = !pattern.ends_with('%');
    let tokens: Vec<&str> = pattern.split('%').filter(|token| !token.is_empty()).collect();

    let mut position = 0;
    for (i, token) in tokens.iter().enumerate() {
        let last = i + 1 == tokens.len();

        if i == 0 && strict_start {
            if !value.starts_with(token) {
                return Ok(false);
            }
            position = token.len();
            if last && strict_end {
                return Ok(value.len() == position);
            }
            continue;
        }

        if last && strict_end {
            return Ok(value.len() >= position + token.len() && value.ends_with(token));
        }

        match value[position..].find(token) {
            Some(offset) => position += offset + token.len(),
            None => return Ok(false),
        }
    }
    Ok(true)
}
