//! Arithmetic drill problems over natural numbers and proper fractions:
//! exact rational arithmetic, constrained random generation with duplicate
//! suppression, and an independent parser/evaluator for grading answers.

pub mod error;
pub mod expr;
pub mod files;
pub mod format;
pub mod fraction;
pub mod generator;
pub mod grade;
pub mod parser;

pub use error::{MathError, Result};
pub use expr::{Expr, Op};
pub use format::{canonical_key, render};
pub use fraction::Fraction;
pub use generator::{GenConfig, Problem, generate};
pub use grade::{GradeReport, grade};
pub use parser::{evaluate, parse_expr};
