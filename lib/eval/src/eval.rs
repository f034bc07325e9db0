use ast::{Ast, BinaryOp, UnaryOp};

mod value;
pub use value::Value;

/// Evaluates an expression tree bottom-up. Total over every tree the `ast`
/// crate can construct: an operator applied outside its domain, or to an
/// already-invalid operand, yields `Value::Invalid` instead of failing.
pub fn evaluate(ast: &Ast) -> Value {
    match ast {
        Ast::Int(n) => (*n).into(),
        Ast::Bool(b) => (*b).into(),

        Ast::Unary { op: UnaryOp::Not, operand } => match evaluate(operand) {
            Value::Bool(b) => (!b).into(),
            // not is defined over booleans only; an int operand and an
            // invalid subexpression both collapse to invalid
            Value::Int(_) | Value::Invalid => Value::Invalid,
        },

        Ast::Binary { op, left, right } => {
            use BinaryOp::*;

            let lhs = evaluate(left);
            let rhs = evaluate(right);
            match (lhs, rhs, *op) {
                // arithmetic wraps so that evaluation stays total on overflow
                (Value::Int(l), Value::Int(r), Add) => l.wrapping_add(r).into(),
                (Value::Int(l), Value::Int(r), Sub) => l.wrapping_sub(r).into(),
                (Value::Int(l), Value::Int(r), Mul) => l.wrapping_mul(r).into(),
                // a zero divisor is not a type error, but there is no
                // integer to return either: it joins the invalid sentinel
                (Value::Int(_), Value::Int(0), Div) => Value::Invalid,
                (Value::Int(l), Value::Int(r), Div) => l.wrapping_div(r).into(),
                (Value::Int(l), Value::Int(r), Equal) => (l == r).into(),

                (Value::Bool(l), Value::Bool(r), And) => (l && r).into(),
                (Value::Bool(l), Value::Bool(r), Or) => (l || r).into(),
                (Value::Bool(l), Value::Bool(r), Equal) => (l == r).into(),

                // mixed operand types, an invalid operand, or an operator
                // undefined over the shared operand type
                _ => Value::Invalid,
            }
        }
    }
}
