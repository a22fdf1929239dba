use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("subtraction result would be negative")]
    NegativeResult,
    #[error("quotient is not a proper fraction")]
    ImproperDivision,
    #[error("value out of range")]
    Overflow,
    #[error("parse error: {0}")]
    Parse(String),
    #[error("generation constraints not satisfiable within {attempts} attempts")]
    ConstraintExhausted { attempts: usize },
}
