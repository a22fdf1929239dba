//! Exact rational operands kept in lowest terms.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};
use rand::Rng;

use crate::error::{MathError, Result};

/// A signed rational value with a positive denominator and no common factor
/// between numerator and denominator. Zero is normalized to 0/1. Values are
/// immutable; arithmetic always produces a fresh value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Fraction(Rational64);

impl Fraction {
    /// Builds a fraction from any numerator/denominator pair, moving the
    /// sign onto the numerator and reducing to lowest terms.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        if denominator == 0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(Fraction(Rational64::new(numerator, denominator)))
    }

    pub fn integer(value: i64) -> Self {
        Fraction(Rational64::from_integer(value))
    }

    pub fn numerator(self) -> i64 {
        *self.0.numer()
    }

    pub fn denominator(self) -> i64 {
        *self.0.denom()
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// True iff the absolute numerator is strictly below the denominator.
    pub fn is_proper(self) -> bool {
        self.numerator().abs() < self.denominator()
    }

    /// Overflow-checked addition; evaluation paths use these variants so
    /// an out-of-range exercise fails cleanly instead of panicking.
    pub fn checked_add(self, rhs: Fraction) -> Result<Fraction> {
        self.0
            .checked_add(&rhs.0)
            .map(Fraction)
            .ok_or(MathError::Overflow)
    }

    pub fn checked_sub(self, rhs: Fraction) -> Result<Fraction> {
        self.0
            .checked_sub(&rhs.0)
            .map(Fraction)
            .ok_or(MathError::Overflow)
    }

    pub fn checked_mul(self, rhs: Fraction) -> Result<Fraction> {
        self.0
            .checked_mul(&rhs.0)
            .map(Fraction)
            .ok_or(MathError::Overflow)
    }

    /// Division that rejects a zero divisor and out-of-range results
    /// instead of panicking.
    pub fn checked_div(self, rhs: Fraction) -> Result<Fraction> {
        if rhs.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        self.0
            .checked_div(&rhs.0)
            .map(Fraction)
            .ok_or(MathError::Overflow)
    }

    /// Natural number drawn uniformly from `[0, max_exclusive)`.
    pub fn random_integer(rng: &mut impl Rng, max_exclusive: i64) -> Self {
        Fraction::integer(rng.gen_range(0..max_exclusive))
    }

    /// Proper fraction with denominator uniform in `[2, max_denominator]`
    /// and numerator uniform in `[1, denominator)`.
    pub fn random_proper(rng: &mut impl Rng, max_denominator: i64) -> Self {
        let denominator = rng.gen_range(2..=max_denominator);
        let numerator = rng.gen_range(1..denominator);
        Fraction(Rational64::new(numerator, denominator))
    }

    /// Random problem operand: a proper fraction three times out of ten,
    /// otherwise a natural number below `max_value`.
    pub fn random_operand(rng: &mut impl Rng, max_value: i64) -> Self {
        if max_value >= 2 && rng.gen_bool(0.3) {
            Fraction::random_proper(rng, max_value)
        } else {
            Fraction::random_integer(rng, max_value)
        }
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction(self.0 + rhs.0)
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        Fraction(self.0 - rhs.0)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction(self.0 * rhs.0)
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction(-self.0)
    }
}

/// Renders `"n"` for whole values, `"n/d"` for proper fractions, and the
/// mixed form `"w'r/d"` otherwise, with the sign carried on the whole part
/// and a truncated quotient (so -7/2 shows as `-3'1/2`).
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.numerator();
        let d = self.denominator();
        if d == 1 {
            write!(f, "{n}")
        } else if n.abs() < d {
            write!(f, "{n}/{d}")
        } else {
            write!(f, "{}'{}/{}", n / d, n.abs() % d, d)
        }
    }
}

/// Accepts exactly the three operand grammars: `"n"`, `"n/d"`, `"w'n/d"`.
/// The `n/d` parts are not required to be proper; `"2'5/4"` reads as 13/4.
impl FromStr for Fraction {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_operand_text(s)
    }
}
