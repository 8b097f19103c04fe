//! Dynamic value model.
//!
//! [`DynValue`] is the owned, loosely-typed value the comparator works on. Numbers
//! come in two flavours: native Rust numbers ([`Number`]) and deferred numeric
//! text ([`NumberText`]) that has been decoded but not yet converted, the way
//! permissive JSON decoders hand numbers over without committing to a width.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A native number of any width, widened to one of three lossless buckets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    /// Convert to a 64-bit float. Integers beyond 2^53 lose precision.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::UInt(u) => u as f64,
            Number::Float(f) => f,
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::$variant(n as $wide)
                }
            }
        )+
    };
}

number_from!(Int as i64: i8, i16, i32, i64, isize);
number_from!(UInt as u64: u8, u16, u32, u64, usize);
number_from!(Float as f64: f32, f64);

/// A number still in its textual form, awaiting conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberText(String);

impl NumberText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Best-effort parse to `f64`. Returns `None` when the text is not a number.
    ///
    /// Text that overflows `f64` (e.g. `"1e400"`) is out of range, not infinity,
    /// and also yields `None`. Only a literal `inf`/`infinity` parses as infinite.
    pub fn parse_f64(&self) -> Option<f64> {
        let n = self.0.parse::<f64>().ok()?;
        if n.is_infinite() && !spells_infinity(&self.0) {
            return None;
        }
        Some(n)
    }
}

fn spells_infinity(text: &str) -> bool {
    let unsigned = text.strip_prefix(|c| c == '+' || c == '-').unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

impl From<&serde_json::Number> for NumberText {
    fn from(n: &serde_json::Number) -> Self {
        Self(n.to_string())
    }
}

/// A dynamically typed value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DynValue {
    #[default]
    Null,
    Bool(bool),
    String(String),
    Number(Number),
    Deferred(NumberText),
    /// Never ordered or equal to anything; present so decoded JSON round-trips.
    Array(Vec<DynValue>),
    /// Key-value pairs in insertion order.
    Object(Vec<(String, DynValue)>),
}

impl DynValue {
    /// Build a deferred numeric value from its text.
    pub fn deferred(text: impl Into<String>) -> Self {
        DynValue::Deferred(NumberText::new(text))
    }
}

macro_rules! dyn_value_from_number {
    ($($t:ty),+) => {
        $(
            impl From<$t> for DynValue {
                fn from(n: $t) -> Self {
                    DynValue::Number(Number::from(n))
                }
            }
        )+
    };
}

dyn_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Number> for DynValue {
    fn from(n: Number) -> Self {
        DynValue::Number(n)
    }
}

impl From<bool> for DynValue {
    fn from(b: bool) -> Self {
        DynValue::Bool(b)
    }
}

impl From<&str> for DynValue {
    fn from(s: &str) -> Self {
        DynValue::String(s.to_string())
    }
}

impl From<String> for DynValue {
    fn from(s: String) -> Self {
        DynValue::String(s)
    }
}

impl From<NumberText> for DynValue {
    fn from(text: NumberText) -> Self {
        DynValue::Deferred(text)
    }
}

/// `None` maps to [`DynValue::Null`].
impl<T: Into<DynValue>> From<Option<T>> for DynValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DynValue::Null, Into::into)
    }
}

/// JSON numbers keep their decoded text and become [`DynValue::Deferred`].
impl From<Value> for DynValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => DynValue::Null,
            Value::Bool(b) => DynValue::Bool(b),
            Value::Number(n) => DynValue::Deferred(NumberText::from(&n)),
            Value::String(s) => DynValue::String(s),
            Value::Array(items) => DynValue::Array(items.into_iter().map(DynValue::from).collect()),
            Value::Object(map) => {
                DynValue::Object(map.into_iter().map(|(k, v)| (k, DynValue::from(v))).collect())
            }
        }
    }
}

impl From<&Value> for DynValue {
    fn from(value: &Value) -> Self {
        DynValue::from(value.clone())
    }
}

impl<'de> Deserialize<'de> for DynValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(DynValue::from)
    }
}
