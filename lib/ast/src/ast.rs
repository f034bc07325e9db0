use std::fmt::{self, Display, Formatter};

mod ops;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum UnaryOp {
    #[display(fmt = "!")]
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BinaryOp {
    #[display(fmt = "+")]
    Add,
    #[display(fmt = "-")]
    Sub,
    #[display(fmt = "*")]
    Mul,
    #[display(fmt = "/")]
    Div,
    #[display(fmt = "&&")]
    And,
    #[display(fmt = "||")]
    Or,
    #[display(fmt = "==")]
    Equal,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("only 0 and 1 are allowed as bool literal bits, got {0}")]
    InvalidBoolBit(i64),
}

/// An expression tree over integers and booleans. Each node exclusively
/// owns its children; trees are immutable once built.
#[derive(Debug, PartialEq, Eq)]
pub enum Ast {
    Int(i64),
    Bool(bool),
    Unary { op: UnaryOp, operand: Box<Ast> },
    Binary { op: BinaryOp, left: Box<Ast>, right: Box<Ast> },
}

impl Ast {
    pub fn int(value: i64) -> Ast {
        Ast::Int(value)
    }

    pub fn boolean(value: bool) -> Ast {
        Ast::Bool(value)
    }

    /// Builds a bool literal from its integer encoding. Anything but 0 or 1
    /// is rejected at construction time, not deferred to evaluation.
    pub fn bool_from_bit(bit: i64) -> Result<Ast, ConstructionError> {
        match bit {
            0 => Ok(Ast::Bool(false)),
            1 => Ok(Ast::Bool(true)),
            _ => Err(ConstructionError::InvalidBoolBit(bit)),
        }
    }

    pub fn unary(op: UnaryOp, operand: Ast) -> Ast {
        Ast::Unary { op, operand: Box::new(operand) }
    }

    pub fn binary(op: BinaryOp, left: Ast, right: Ast) -> Ast {
        Ast::Binary { op, left: Box::new(left), right: Box::new(right) }
    }

    /// Equality node. `==` itself is taken by `PartialEq`, so the DSL
    /// spells it out.
    pub fn equals(self, other: Ast) -> Ast {
        Ast::binary(BinaryOp::Equal, self, other)
    }
}

impl Display for Ast {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Int(n) => write!(f, "{}", n),
            Ast::Bool(b) => write!(f, "{}", b),
            Ast::Unary { op, operand } => write!(f, "({} {})", op, operand),
            Ast::Binary { op, left, right } => write!(f, "({} {} {})", op, left, right),
        }
    }
}
