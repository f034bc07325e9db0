//! Operator overloads for building trees inline, mirroring the source
//! syntax of the expressions under test: `+ - * /` for arithmetic,
//! `& |` for the logical kinds (`&&`/`||` cannot be overloaded) and
//! `!` for negation.

use crate::{Ast, BinaryOp, UnaryOp};

macro_rules! binary_expression {
    ($trait:ident, $method:ident, $op:expr) => {
        impl std::ops::$trait for Ast {
            type Output = Ast;

            fn $method(self, rhs: Ast) -> Ast {
                Ast::binary($op, self, rhs)
            }
        }
    };
}

binary_expression!(Add, add, BinaryOp::Add);
binary_expression!(Sub, sub, BinaryOp::Sub);
binary_expression!(Mul, mul, BinaryOp::Mul);
binary_expression!(Div, div, BinaryOp::Div);

binary_expression!(BitAnd, bitand, BinaryOp::And);
binary_expression!(BitOr, bitor, BinaryOp::Or);

impl std::ops::Not for Ast {
    type Output = Ast;

    fn not(self) -> Ast {
        Ast::unary(UnaryOp::Not, self)
    }
}
