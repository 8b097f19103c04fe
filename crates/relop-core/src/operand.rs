//! Classification of comparable inputs.
//!
//! The comparator never inspects concrete types directly. Anything implementing
//! [`Operand`] is first reduced to a borrowed [`Kind`], and the relation is
//! decided on the pair of kinds. This is where numeric coercion happens: native
//! numbers and deferred numeric text both collapse to [`Kind::Number`].

use serde_json::Value;

use crate::value::{DynValue, Number, NumberText};

/// The comparison-relevant shape of a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind<'a> {
    Null,
    Bool(bool),
    Str(&'a str),
    /// Native number or deferred text that parsed, widened to `f64`.
    Number(f64),
    /// Deferred numeric text that failed to parse.
    NotANumber,
    /// Arrays, objects and anything else without a scalar relation.
    Unsupported,
}

/// A value the comparator can classify.
pub trait Operand {
    fn kind(&self) -> Kind<'_>;
}

impl<T: Operand + ?Sized> Operand for &T {
    fn kind(&self) -> Kind<'_> {
        (**self).kind()
    }
}

impl<T: Operand> Operand for Option<T> {
    fn kind(&self) -> Kind<'_> {
        match self {
            Some(inner) => inner.kind(),
            None => Kind::Null,
        }
    }
}

impl Operand for Number {
    fn kind(&self) -> Kind<'_> {
        Kind::Number(self.as_f64())
    }
}

impl Operand for NumberText {
    fn kind(&self) -> Kind<'_> {
        match self.parse_f64() {
            Some(n) => Kind::Number(n),
            None => Kind::NotANumber,
        }
    }
}

impl Operand for DynValue {
    fn kind(&self) -> Kind<'_> {
        match self {
            DynValue::Null => Kind::Null,
            DynValue::Bool(b) => Kind::Bool(*b),
            DynValue::String(s) => Kind::Str(s),
            DynValue::Number(n) => n.kind(),
            DynValue::Deferred(text) => text.kind(),
            DynValue::Array(_) | DynValue::Object(_) => Kind::Unsupported,
        }
    }
}

impl Operand for Value {
    fn kind(&self) -> Kind<'_> {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(b) => Kind::Bool(*b),
            Value::String(s) => Kind::Str(s),
            Value::Number(n) => n.as_f64().map_or(Kind::NotANumber, Kind::Number),
            Value::Array(_) | Value::Object(_) => Kind::Unsupported,
        }
    }
}

impl Operand for str {
    fn kind(&self) -> Kind<'_> {
        Kind::Str(self)
    }
}

impl Operand for String {
    fn kind(&self) -> Kind<'_> {
        Kind::Str(self)
    }
}

impl Operand for bool {
    fn kind(&self) -> Kind<'_> {
        Kind::Bool(*self)
    }
}

impl Operand for () {
    fn kind(&self) -> Kind<'_> {
        Kind::Null
    }
}

macro_rules! native_operand {
    ($($t:ty),+) => {
        $(
            impl Operand for $t {
                fn kind(&self) -> Kind<'_> {
                    Kind::Number(Number::from(*self).as_f64())
                }
            }
        )+
    };
}

native_operand!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
