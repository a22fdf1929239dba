use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{char, digit1, multispace0, one_of};
use nom::combinator::{all_consuming, map, map_res, opt};
use nom::error::VerboseError;
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair, tuple};

use crate::error::{MathError, Result};
use crate::expr::{Expr, Op};
use crate::fraction::Fraction;

/// Parses a flat infix exercise string, with optional parentheses and
/// either the display glyphs (`×`, `÷`) or their ASCII forms, into a tree.
pub fn parse_expr(input: &str) -> Result<Expr> {
    match all_consuming(ws(parse_add_sub))(input) {
        Ok((_, expr)) => Ok(expr),
        Err(e) => Err(MathError::Parse(format!("{e:?}"))),
    }
}

/// Independently recomputes the value of an exercise string for grading.
pub fn evaluate(input: &str) -> Result<Fraction> {
    parse_expr(input)?.eval()
}

/// Parses a single operand: plain integer `"n"`, fraction `"n/d"`, or
/// mixed number `"w'n/d"`. Anything else, including trailing text, fails.
pub fn parse_operand_text(input: &str) -> Result<Fraction> {
    match all_consuming(ws(parse_operand))(input) {
        Ok((_, value)) => Ok(value),
        Err(e) => Err(MathError::Parse(format!("{e:?}"))),
    }
}

fn parse_add_sub(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, init) = parse_mul_div(input)?;
    fold_many0(
        pair(ws(one_of("+-")), parse_mul_div),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => Expr::binary(Op::Add, acc, rhs),
            '-' => Expr::binary(Op::Sub, acc, rhs),
            _ => unreachable!(),
        },
    )(rest)
}

fn parse_mul_div(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, init) = parse_primary(input)?;
    fold_many0(
        pair(ws(one_of("*×/÷")), parse_primary),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '*' | '×' => Expr::binary(Op::Mul, acc, rhs),
            '/' | '÷' => Expr::binary(Op::Div, acc, rhs),
            _ => unreachable!(),
        },
    )(rest)
}

fn parse_primary(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    alt((parse_parens, map(ws(parse_operand), Expr::leaf)))(input)
}

fn parse_parens(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    delimited(ws(char('(')), parse_add_sub, ws(char(')')))(input)
}

// Operand grammars admit no interior whitespace, so a fraction leaf like
// `1/2` binds tighter than the spaced division operator around it.
// The fractional part of a mixed number is not required to be proper:
// `2'5/4` is accepted and reads as 13/4.
fn parse_operand(input: &str) -> IResult<&str, Fraction, VerboseError<&str>> {
    alt((parse_mixed, parse_fraction, parse_integer))(input)
}

fn parse_mixed(input: &str) -> IResult<&str, Fraction, VerboseError<&str>> {
    map_res(
        tuple((
            opt(char('-')),
            parse_uint,
            char('\''),
            parse_uint,
            char('/'),
            parse_uint,
        )),
        |(sign, whole, _, numer, _, denom)| -> Result<Fraction> {
            let top = whole
                .checked_mul(denom)
                .and_then(|w| w.checked_add(numer))
                .ok_or_else(|| MathError::Parse("operand out of range".into()))?;
            let value = Fraction::new(top, denom)?;
            Ok(if sign.is_some() { -value } else { value })
        },
    )(input)
}

fn parse_fraction(input: &str) -> IResult<&str, Fraction, VerboseError<&str>> {
    map_res(
        tuple((opt(char('-')), parse_uint, char('/'), parse_uint)),
        |(sign, numer, _, denom)| -> Result<Fraction> {
            let value = Fraction::new(numer, denom)?;
            Ok(if sign.is_some() { -value } else { value })
        },
    )(input)
}

fn parse_integer(input: &str) -> IResult<&str, Fraction, VerboseError<&str>> {
    map(
        pair(opt(char('-')), parse_uint),
        |(sign, value)| Fraction::integer(if sign.is_some() { -value } else { value }),
    )(input)
}

fn parse_uint(input: &str) -> IResult<&str, i64, VerboseError<&str>> {
    map_res(digit1, str::parse::<i64>)(input)
}

fn ws<'a, F, O>(
    inner: F,
) -> impl FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}
