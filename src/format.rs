//! Rendering expression trees as minimally-parenthesized infix text.

use crate::expr::{Expr, Op};

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Renders a tree as `"<left> <op> <right>"` infix text, bracketing a child
/// only where dropping the brackets would change the reading.
pub fn render(expr: &Expr) -> String {
    match expr {
        Expr::Leaf(value) => value.to_string(),
        Expr::Binary(op, lhs, rhs) => {
            let left = child_text(lhs, *op, Side::Left);
            let right = child_text(rhs, *op, Side::Right);
            format!("{left} {} {right}", op.symbol())
        }
    }
}

fn child_text(child: &Expr, parent: Op, side: Side) -> String {
    let text = render(child);
    if needs_brackets(child, parent, side) {
        format!("({text})")
    } else {
        text
    }
}

/// Left children bind by default (rendering is left-associative); a right
/// child of equal or lower precedence must be bracketed to keep its
/// grouping, which also covers `a - (b + c)` and `a ÷ (b × c)`.
fn needs_brackets(child: &Expr, parent: Op, side: Side) -> bool {
    let Expr::Binary(child_op, _, _) = child else {
        return false;
    };
    match side {
        Side::Left => child_op.precedence() < parent.precedence(),
        Side::Right => child_op.precedence() <= parent.precedence(),
    }
}

/// Whitespace-stripped, ASCII-operator form of a rendered problem, used
/// only for duplicate detection. Purely textual: commutative reorderings
/// such as `3 + 5` and `5 + 3` produce distinct keys.
pub fn canonical_key(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            other => other,
        })
        .collect()
}
