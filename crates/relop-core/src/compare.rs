//! The comparator: resolve an operator token and decide a relation between two
//! dynamic operands.
//!
//! # Coercion rules
//!
//! The pair of operand [`Kind`]s decides which relation applies:
//!
//! | Left / right              | Relation                                  |
//! |---------------------------|-------------------------------------------|
//! | null / null               | equal, never ordered                      |
//! | number / number           | `f64` comparison (deferred text is parsed)|
//! | string / string           | byte-wise lexicographic                   |
//! | bool / bool               | equality only, ordering is always `false` |
//! | anything else             | `false`                                   |
//!
//! `!=` is computed as the negation of `==`, so mismatched kinds are "not equal".
//! None of these cases is an error; only an unknown operator token fails.

use crate::error::Result;
use crate::operand::{Kind, Operand};
use crate::operator::Operator;

/// Positive relations. `!=` has no entry: it is always `!Equal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Equal,
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
}

impl Relation {
    fn apply<T: PartialOrd + ?Sized>(self, left: &T, right: &T) -> bool {
        match self {
            Relation::Equal => left == right,
            Relation::Less => left < right,
            Relation::Greater => left > right,
            Relation::LessOrEqual => left <= right,
            Relation::GreaterOrEqual => left >= right,
        }
    }
}

fn relation_holds(relation: Relation, left: Kind<'_>, right: Kind<'_>) -> bool {
    match (left, right) {
        (Kind::Null, Kind::Null) => relation == Relation::Equal,
        (Kind::Number(l), Kind::Number(r)) => relation.apply(&l, &r),
        (Kind::Str(l), Kind::Str(r)) => relation.apply(l, r),
        (Kind::Bool(l), Kind::Bool(r)) => relation == Relation::Equal && l == r,
        _ => false,
    }
}

/// Compare `left` and `right` using the operator named by `operator`.
///
/// # Panics
///
/// Panics if `operator` is not one of `>`, `>=`, `<`, `<=`, `==`, `!=`. The
/// message lists the valid set and the offending token. Use [`try_compare`]
/// when the token comes from user input.
///
/// # Examples
///
/// ```
/// use relop_core::{compare, DynValue};
///
/// assert!(!compare(">=", &1, &2));
/// assert!(compare("<", &3, &4));
/// assert!(compare("==", &DynValue::deferred("5"), &5));
/// ```
pub fn compare(operator: &str, left: &dyn Operand, right: &dyn Operand) -> bool {
    match try_compare(operator, left, right) {
        Ok(holds) => holds,
        Err(e) => panic!("{e}"),
    }
}

/// Like [`compare`], but reports an unknown operator as an error.
///
/// # Errors
///
/// Returns [`crate::RelopError::InvalidOperator`] if `operator` is not a
/// supported token.
pub fn try_compare(operator: &str, left: &dyn Operand, right: &dyn Operand) -> Result<bool> {
    let op: Operator = operator.parse()?;
    Ok(compare_with(op, left, right))
}

/// Compare with an already-resolved [`Operator`].
pub fn compare_with(operator: Operator, left: &dyn Operand, right: &dyn Operand) -> bool {
    let holds = operator.predicate()(left, right);
    log::trace!(
        "{:?} {} {:?} => {}",
        left.kind(),
        operator,
        right.kind(),
        holds
    );
    holds
}

/// `left == right`.
pub fn equal_to(left: &dyn Operand, right: &dyn Operand) -> bool {
    relation_holds(Relation::Equal, left.kind(), right.kind())
}

/// `left != right`, defined as `!equal_to(left, right)`.
pub fn not_equal_to(left: &dyn Operand, right: &dyn Operand) -> bool {
    !equal_to(left, right)
}

/// `left < right`.
pub fn less_than(left: &dyn Operand, right: &dyn Operand) -> bool {
    relation_holds(Relation::Less, left.kind(), right.kind())
}

/// `left > right`.
pub fn greater_than(left: &dyn Operand, right: &dyn Operand) -> bool {
    relation_holds(Relation::Greater, left.kind(), right.kind())
}

/// `left <= right`.
pub fn less_or_equal(left: &dyn Operand, right: &dyn Operand) -> bool {
    relation_holds(Relation::LessOrEqual, left.kind(), right.kind())
}

/// `left >= right`.
pub fn greater_or_equal(left: &dyn Operand, right: &dyn Operand) -> bool {
    relation_holds(Relation::GreaterOrEqual, left.kind(), right.kind())
}
