//! # relop-core
//!
//! Relational comparison between dynamically typed values, with the operator
//! chosen at runtime from its string token.
//!
//! Callers that receive loosely-typed data (for example decoded JSON) can ask
//! whether `left <op> right` holds without knowing the operand types up front.
//! Native numbers of any width and deferred numeric text compare as `f64`,
//! strings compare lexicographically, booleans support equality only, and any
//! other pairing is simply "not related".
//!
//! ## Quick start
//!
//! ```rust
//! use relop_core::{compare, try_compare, DynValue};
//!
//! assert!(compare("<", &3, &4));
//! assert!(compare("==", &5, &5.0));
//! assert!(compare("!=", &"5", &5));
//! assert!(compare("==", &DynValue::deferred("5"), &5u8));
//!
//! // Unknown tokens panic in `compare`; `try_compare` reports them instead.
//! assert!(try_compare("lt", &3, &4).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`compare`] — `compare`, `try_compare` and the named predicates
//! - [`operator`] — `Operator` tokens and the dispatch table
//! - [`operand`] — `Operand` trait classifying inputs into comparable kinds
//! - [`value`] — `DynValue` with native and deferred numbers
//! - [`filter`] — single-condition filtering of JSON records
//! - [`error`] — Error types

pub mod compare;
pub mod error;
pub mod filter;
pub mod operand;
pub mod operator;
pub mod value;

pub use compare::{
    compare, compare_with, equal_to, greater_or_equal, greater_than, less_or_equal, less_than,
    not_equal_to, try_compare,
};
pub use error::RelopError;
pub use filter::{filter_json, filter_records, parse_records, resolve_path, Condition};
pub use operand::{Kind, Operand};
pub use operator::Operator;
pub use value::{DynValue, Number, NumberText};
