//! Expression tree definitions and evaluation.

use std::fmt;

use crate::error::{MathError, Result};
use crate::fraction::Fraction;

/// The four drill operators.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub const ALL: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

    /// Binding strength: 1 for additive operators, 2 for multiplicative.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Op::Add | Op::Mul)
    }

    /// Glyph used in rendered problem text.
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '×',
            Op::Div => '÷',
        }
    }

    /// ASCII form used in canonical dedup keys.
    pub fn ascii_symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }
}

/// Finite, strictly owned expression tree: a fraction leaf or a binary node.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Expr {
    Leaf(Fraction),
    Binary(Op, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn leaf(value: Fraction) -> Self {
        Expr::Leaf(value)
    }

    pub fn binary(op: Op, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Evaluates bottom-up under the drill rules: subtraction must not go
    /// negative and division by zero is rejected. The proper-quotient rule
    /// is a generation-time policy and is not enforced here.
    pub fn eval(&self) -> Result<Fraction> {
        match self {
            Expr::Leaf(value) => Ok(*value),
            Expr::Binary(op, lhs, rhs) => {
                let a = lhs.eval()?;
                let b = rhs.eval()?;
                apply(*op, a, b)
            }
        }
    }
}

/// Applies one operator under the shared drill rules. Arithmetic is
/// overflow-checked so a grading run over hostile operands errs instead
/// of panicking.
pub fn apply(op: Op, a: Fraction, b: Fraction) -> Result<Fraction> {
    match op {
        Op::Add => a.checked_add(b),
        Op::Sub => {
            if a < b {
                return Err(MathError::NegativeResult);
            }
            a.checked_sub(b)
        }
        Op::Mul => a.checked_mul(b),
        Op::Div => a.checked_div(b),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::render(self))
    }
}
