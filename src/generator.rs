//! Constrained random problem generation with duplicate suppression.

use std::collections::HashSet;

use rand::Rng;

use crate::error::{MathError, Result};
use crate::expr::{self, Expr, Op};
use crate::format::{canonical_key, render};
use crate::fraction::Fraction;

/// Tuning knobs for one generation run.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Upper bound for natural-number operands and fraction denominators.
    pub max_value: i64,
    /// Attempt budget across the whole run before giving up.
    pub max_attempts: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            max_value: 10,
            max_attempts: 100_000,
        }
    }
}

/// One accepted problem: display text, canonical dedup key, exact answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub text: String,
    pub key: String,
    pub answer: Fraction,
}

/// Produces exactly `count` problems with pairwise distinct canonical keys.
///
/// Each attempt draws one to three operators and matching operands, builds
/// a random tree shape, and evaluates it under the drill constraints; any
/// violation or duplicate key discards the whole attempt. The dedup set
/// lives only for this call. Fails with `ConstraintExhausted` once the
/// attempt budget runs out, which degenerate bounds (`max_value` of 1)
/// reliably hit.
pub fn generate(rng: &mut impl Rng, count: usize, config: &GenConfig) -> Result<Vec<Problem>> {
    let mut seen = HashSet::new();
    let mut problems = Vec::with_capacity(count);
    let mut attempts = 0usize;

    while problems.len() < count {
        attempts += 1;
        if attempts > config.max_attempts {
            return Err(MathError::ConstraintExhausted {
                attempts: config.max_attempts,
            });
        }

        let operator_count = rng.gen_range(1..=3);
        let tree = random_tree(rng, operator_count, config.max_value);
        let answer = match eval_constrained(&tree) {
            Ok(value) => value,
            Err(_) => continue,
        };

        let text = render(&tree);
        let key = canonical_key(&text);
        if !seen.insert(key.clone()) {
            continue;
        }
        problems.push(Problem { text, key, answer });
    }

    Ok(problems)
}

fn random_tree(rng: &mut impl Rng, operator_count: usize, max_value: i64) -> Expr {
    let operands: Vec<Fraction> = (0..=operator_count)
        .map(|_| Fraction::random_operand(rng, max_value))
        .collect();
    let operators: Vec<Op> = (0..operator_count)
        .map(|_| Op::ALL[rng.gen_range(0..Op::ALL.len())])
        .collect();
    build_tree(rng, &operands, &operators)
}

/// Assembles operand/operator slices into a tree: with more than one
/// operator left, half the time the slices split at a random operator into
/// two independently grouped subtrees; otherwise the chain folds strictly
/// left to right.
fn build_tree(rng: &mut impl Rng, operands: &[Fraction], operators: &[Op]) -> Expr {
    if operators.is_empty() {
        return Expr::leaf(operands[0]);
    }

    if operators.len() > 1 && rng.gen_bool(0.5) {
        let split = rng.gen_range(1..operators.len());
        let left = build_tree(rng, &operands[..=split], &operators[..split]);
        let right = build_tree(rng, &operands[split + 1..], &operators[split + 1..]);
        return Expr::binary(operators[split], left, right);
    }

    let mut tree = Expr::leaf(operands[0]);
    for (i, op) in operators.iter().enumerate() {
        tree = Expr::binary(*op, tree, Expr::leaf(operands[i + 1]));
    }
    tree
}

/// Generation-time evaluation: the shared drill rules plus the policy that
/// every quotient must be a proper fraction.
fn eval_constrained(tree: &Expr) -> Result<Fraction> {
    match tree {
        Expr::Leaf(value) => Ok(*value),
        Expr::Binary(op, lhs, rhs) => {
            let a = eval_constrained(lhs)?;
            let b = eval_constrained(rhs)?;
            let value = expr::apply(*op, a, b)?;
            if *op == Op::Div && !value.is_proper() {
                return Err(MathError::ImproperDivision);
            }
            Ok(value)
        }
    }
}
