// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! In-memory operand values for conformance and literal printing

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::types::ValueKind;

/// A materialized value an operator can be evaluated against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    /// SQL NULL
    Null,

    /// Boolean value
    Boolean(bool),

    /// Integer value (64-bit signed)
    Integer(i64),

    /// Floating point value
    Float(f64),

    /// Decimal value with arbitrary precision
    Decimal(Decimal),

    /// Character data
    String(String),

    /// Date value (without time)
    Date(NaiveDate),

    /// Time of day
    Time(NaiveTime),

    /// Date and time without zone
    DateTime(NaiveDateTime),

    /// Date and time with a fixed offset
    Timestamp(DateTime<FixedOffset>),

    /// Ordered collection, used for argument vectors, IN sets and BETWEEN bounds
    Collection(Vec<SqlValue>),
}

/// Temporal operand normalized for ordering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Temporal {
    /// Point in time without zone; dates are promoted to midnight
    Instant(NaiveDateTime),
    /// Point in time with offset
    Zoned(DateTime<FixedOffset>),
    /// Time of day
    TimeOfDay(NaiveTime),
}

impl Temporal {
    /// Order two temporal values of the same family
    pub fn compare(&self, other: &Temporal) -> Option<Ordering> {
        match (self, other) {
            (Self::Instant(l), Self::Instant(r)) => Some(l.cmp(r)),
            (Self::Zoned(l), Self::Zoned(r)) => Some(l.cmp(r)),
            (Self::TimeOfDay(l), Self::TimeOfDay(r)) => Some(l.cmp(r)),
            _ => None,
        }
    }
}

/// Dispatch family of an operand
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    /// SQL NULL
    Null,
    /// Boolean value
    Boolean(bool),
    /// Any numeric value normalized to floating point
    Number(f64),
    /// Character data
    Text(&'a str),
    /// Any temporal value
    Temporal(Temporal),
    /// A collection of values
    Collection(&'a [SqlValue]),
}

impl SqlValue {
    /// Create a collection value
    pub fn collection(values: Vec<SqlValue>) -> Self {
        Self::Collection(values)
    }

    /// Create a BETWEEN bound pair
    pub fn pair(start: impl Into<SqlValue>, end: impl Into<SqlValue>) -> Self {
        Self::Collection(vec![start.into(), end.into()])
    }

    /// Check if the value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::String(_) => ValueKind::String,
            Self::Date(_) => ValueKind::Date,
            Self::Time(_) => ValueKind::Time,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::Collection(_) => ValueKind::Collection,
        }
    }

    /// Classify the value into its dispatch family
    pub fn operand(&self) -> Operand<'_> {
        match self {
            Self::Null => Operand::Null,
            Self::Boolean(b) => Operand::Boolean(*b),
            Self::Integer(i) => Operand::Number(*i as f64),
            Self::Float(f) => Operand::Number(*f),
            Self::Decimal(d) => Operand::Number(d.to_f64().unwrap_or(f64::NAN)),
            Self::String(s) => Operand::Text(s),
            Self::Date(d) => Operand::Temporal(Temporal::Instant(d.and_time(NaiveTime::MIN))),
            Self::DateTime(dt) => Operand::Temporal(Temporal::Instant(*dt)),
            Self::Timestamp(ts) => Operand::Temporal(Temporal::Zoned(*ts)),
            Self::Time(t) => Operand::Temporal(Temporal::TimeOfDay(*t)),
            Self::Collection(items) => Operand::Collection(items),
        }
    }

    /// Numeric value as floating point
    pub fn as_f64(&self) -> Option<f64> {
        match self.operand() {
            Operand::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Try to get the string content
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the collection items
    pub fn as_collection(&self) -> Option<&[SqlValue]> {
        match self {
            Self::Collection(items) => Some(items),
            _ => None,
        }
    }

    /// Render the value as an inline SQL literal
    pub fn to_sql_literal(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Boolean(true) => "TRUE".to_string(),
            Self::Boolean(false) => "FALSE".to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Decimal(d) => d.to_string(),
            Self::String(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Date(d) => format!("'{}'", d.format("%Y-%m-%d")),
            Self::Time(t) => format!("'{}'", t.format("%H:%M:%S")),
            Self::DateTime(dt) => format!("'{}'", dt.format("%Y-%m-%d %H:%M:%S%.f")),
            Self::Timestamp(ts) => format!("'{}'", ts.format("%Y-%m-%d %H:%M:%S%.f%:z")),
            Self::Collection(items) => {
                let parts: Vec<String> = items.iter().map(SqlValue::to_sql_literal).collect();
                format!("({})", parts.join(", "))
            }
        }
    }

    /// Convert to plain JSON (typed temporal and decimal values become strings)
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Boolean(b) => Value::Bool(*b),
            Self::Integer(i) => Value::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(f.to_string())),
            Self::Decimal(d) => Value::String(d.to_string()),
            Self::String(s) => Value::String(s.clone()),
            Self::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            Self::Time(t) => Value::String(t.format("%H:%M:%S%.f").to_string()),
            Self::DateTime(dt) => Value::String(dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
            Self::Timestamp(ts) => Value::String(ts.to_rfc3339()),
            Self::Collection(items) => Value::Array(items.iter().map(SqlValue::to_json).collect()),
        }
    }

    fn from_tagged_object(obj: &serde_json::Map<String, Value>) -> Option<Self> {
        if obj.len() != 1 {
            return None;
        }
        let (tag, raw) = obj.iter().next()?;
        let text = raw.as_str()?;
        match tag.as_str() {
            "date" => NaiveDate::parse_from_str(text, "%Y-%m-%d").ok().map(Self::Date),
            "time" => NaiveTime::parse_from_str(text, "%H:%M:%S%.f")
                .ok()
                .map(Self::Time),
            "datetime" => NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(Self::DateTime),
            "timestamp" => DateTime::parse_from_rfc3339(text).ok().map(Self::Timestamp),
            "decimal" => Decimal::from_str(text).ok().map(Self::Decimal),
            _ => None,
        }
    }
}

/// Convert from serde_json::Value to SqlValue
///
/// Strings stay strings. Typed values are written as single-key objects such as
/// `{"date": "2024-02-29"}` or `{"decimal": "10.50"}`.
impl From<Value> for SqlValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Boolean(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Self::Float(f)
                } else {
                    Self::String(n.to_string())
                }
            }
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Collection(items.into_iter().map(SqlValue::from).collect()),
            Value::Object(obj) => Self::from_tagged_object(&obj)
                .unwrap_or_else(|| Self::String(Value::Object(obj).to_string())),
        }
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for SqlValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<FixedOffset>> for SqlValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Timestamp(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<SqlValue>> From<Vec<T>> for SqlValue {
    fn from(values: Vec<T>) -> Self {
        Self::Collection(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            other => f.write_str(&other.to_sql_literal()),
        }
    }
}
