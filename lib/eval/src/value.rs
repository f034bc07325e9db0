use std::fmt;
use std::fmt::{Display, Formatter};

/// Outcome of evaluating an expression. Type errors are not errors in the
/// control-flow sense; they are the `Invalid` value, which propagates
/// through enclosing operators like any other operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Invalid,
    Int(i64),
    Bool(bool),
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Invalid => write!(f, "invalid"),
            Value::Int(n) => write!(f, "(int) {}", n),
            Value::Bool(b) => write!(f, "(bool) {}", b),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
