//! Record filtering -- keep JSON records whose field satisfies one relation.
//!
//! A [`Condition`] pairs a dot-separated field path with an operator and a
//! literal operand. Records are `serde_json::Value`s; the field is looked up
//! with [`resolve_path`] and compared with [`compare_with`], so all of the
//! comparator's coercion rules apply (missing fields behave as `null`).
//!
//! # Path syntax
//!
//! - `"age"` -- top-level field
//! - `"user.age"` -- nested object field
//! - `"scores.0"` -- array element by index

use serde_json::Value;

use crate::compare::compare_with;
use crate::error::{RelopError, Result};
use crate::operator::Operator;

/// A single relational condition on a record field.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub path: String,
    pub operator: Operator,
    pub operand: Value,
}

impl Condition {
    /// Build a condition from an operator token.
    ///
    /// # Errors
    ///
    /// Returns [`RelopError::InvalidOperator`] for an unknown token.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use relop_core::Condition;
    ///
    /// let adults = Condition::new("age", ">=", json!(18)).unwrap();
    /// assert!(adults.matches(&json!({"name": "Alice", "age": 30})));
    /// assert!(!adults.matches(&json!({"name": "Bob", "age": "unknown"})));
    /// ```
    pub fn new(path: impl Into<String>, operator: &str, operand: Value) -> Result<Self> {
        Ok(Self {
            path: path.into(),
            operator: operator.parse()?,
            operand,
        })
    }

    /// Whether `record` satisfies this condition.
    pub fn matches(&self, record: &Value) -> bool {
        compare_with(self.operator, resolve_path(record, &self.path), &self.operand)
    }
}

/// Resolve a dot-separated path on a JSON value.
///
/// Returns `Value::Null` if any segment is missing. An empty path returns the
/// value itself.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> &'a Value {
    if path.is_empty() {
        return value;
    }
    let mut current = value;
    for segment in path.split('.') {
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        match next {
            Some(v) => current = v,
            None => return &Value::Null,
        }
    }
    current
}

/// Keep the records that satisfy `condition`, preserving order.
pub fn filter_records(records: &[Value], condition: &Condition) -> Vec<Value> {
    let kept: Vec<Value> = records
        .iter()
        .filter(|record| condition.matches(record))
        .cloned()
        .collect();
    log::debug!(
        "filter {} {} {}: kept {} of {} records",
        condition.path,
        condition.operator,
        condition.operand,
        kept.len(),
        records.len()
    );
    kept
}

/// Parse a JSON array, filter it by `condition`, and re-serialize it compactly.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON or is not an array.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use relop_core::{filter_json, Condition};
///
/// let cond = Condition::new("n", "<", json!(3)).unwrap();
/// let out = filter_json(r#"[{"n":1},{"n":5},{"n":2}]"#, &cond).unwrap();
/// assert_eq!(out, r#"[{"n":1},{"n":2}]"#);
/// ```
pub fn filter_json(json: &str, condition: &Condition) -> Result<String> {
    let records = parse_records(json)?;
    let kept = filter_records(&records, condition);
    Ok(serde_json::to_string(&kept)?)
}

/// Parse a JSON document that must be a top-level array of records.
///
/// # Errors
///
/// Returns [`RelopError::Json`] for invalid JSON and [`RelopError::NotAnArray`]
/// when the document is valid but not an array.
pub fn parse_records(json: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(records) => Ok(records),
        other => Err(RelopError::NotAnArray {
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
