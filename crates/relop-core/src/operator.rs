//! Relational operator tokens and the token → predicate dispatch table.
//!
//! The supported set is exactly `>`, `>=`, `<`, `<=`, `==`, `!=`. Tokens are
//! case-sensitive and there are no aliases: `"lt"` is rejected like any other
//! unknown token.

use std::fmt;
use std::str::FromStr;

use crate::compare::{
    equal_to, greater_or_equal, greater_than, less_or_equal, less_than, not_equal_to,
};
use crate::error::RelopError;
use crate::operand::Operand;

/// Signature shared by every relational predicate.
pub type Predicate = fn(&dyn Operand, &dyn Operand) -> bool;

/// A relational operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `==`
    Eq,
    /// `!=`
    Ne,
}

impl Operator {
    /// Every supported operator, in canonical order.
    pub const ALL: [Operator; 6] = [
        Operator::Gt,
        Operator::Ge,
        Operator::Lt,
        Operator::Le,
        Operator::Eq,
        Operator::Ne,
    ];

    /// The textual token for this operator.
    pub fn token(self) -> &'static str {
        match self {
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Eq => "==",
            Operator::Ne => "!=",
        }
    }

    /// The predicate function this operator dispatches to.
    ///
    /// `!=` maps to [`not_equal_to`], which is defined as the negation of
    /// [`equal_to`] rather than an independent relation.
    pub fn predicate(self) -> Predicate {
        match self {
            Operator::Gt => greater_than,
            Operator::Ge => greater_or_equal,
            Operator::Lt => less_than,
            Operator::Le => less_or_equal,
            Operator::Eq => equal_to,
            Operator::Ne => not_equal_to,
        }
    }

    /// The supported tokens formatted as `'>','>=',...` for diagnostics.
    pub(crate) fn quoted_list() -> String {
        let tokens: Vec<String> = Self::ALL
            .iter()
            .map(|op| format!("'{}'", op.token()))
            .collect();
        tokens.join(",")
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Operator {
    type Err = RelopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.token() == s)
            .ok_or_else(|| RelopError::InvalidOperator {
                received: s.to_string(),
            })
    }
}
