use arithdrill::{Expr, Fraction, Op, canonical_key, render};

fn int(value: i64) -> Expr {
    Expr::leaf(Fraction::integer(value))
}

fn bin(op: Op, lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(op, lhs, rhs)
}

#[test]
fn leaves_and_simple_nodes() {
    assert_eq!(render(&int(7)), "7");
    assert_eq!(render(&bin(Op::Add, int(3), int(5))), "3 + 5");
    assert_eq!(render(&bin(Op::Mul, int(2), int(4))), "2 × 4");
    assert_eq!(render(&bin(Op::Div, int(7), int(2))), "7 ÷ 2");
}

#[test]
fn left_child_bracketed_only_below_parent_precedence() {
    let sum = bin(Op::Add, int(1), int(2));
    assert_eq!(render(&bin(Op::Mul, sum.clone(), int(3))), "(1 + 2) × 3");
    assert_eq!(render(&bin(Op::Sub, sum.clone(), int(1))), "1 + 2 - 1");

    let product = bin(Op::Mul, int(2), int(3));
    assert_eq!(render(&bin(Op::Add, product.clone(), int(1))), "2 × 3 + 1");
    assert_eq!(render(&bin(Op::Div, product, int(6))), "2 × 3 ÷ 6");
}

#[test]
fn right_child_bracketed_at_equal_or_lower_precedence() {
    let sum = bin(Op::Add, int(1), int(2));
    let diff = bin(Op::Sub, int(5), int(2));
    let product = bin(Op::Mul, int(2), int(3));
    let quotient = bin(Op::Div, int(6), int(3));

    assert_eq!(render(&bin(Op::Add, int(9), sum.clone())), "9 + (1 + 2)");
    assert_eq!(render(&bin(Op::Sub, int(9), sum.clone())), "9 - (1 + 2)");
    assert_eq!(render(&bin(Op::Sub, int(9), diff)), "9 - (5 - 2)");
    assert_eq!(render(&bin(Op::Div, int(6), product.clone())), "6 ÷ (2 × 3)");
    assert_eq!(render(&bin(Op::Div, int(8), quotient)), "8 ÷ (6 ÷ 3)");
    assert_eq!(render(&bin(Op::Mul, int(4), sum)), "4 × (1 + 2)");
    assert_eq!(render(&bin(Op::Add, int(4), product)), "4 + 2 × 3");
}

#[test]
fn fraction_leaves_render_inline() {
    let half = Expr::leaf(Fraction::new(1, 2).unwrap());
    let third = Expr::leaf(Fraction::new(1, 3).unwrap());
    assert_eq!(render(&bin(Op::Add, half.clone(), third)), "1/2 + 1/3");

    let mixed = Expr::leaf(Fraction::new(9, 4).unwrap());
    assert_eq!(render(&bin(Op::Mul, mixed, int(3))), "2'1/4 × 3");
}

#[test]
fn canonical_keys_strip_spaces_and_ascii_fold_operators() {
    assert_eq!(canonical_key("1/2 + 1/3"), "1/2+1/3");
    assert_eq!(canonical_key("(1 + 2) × 3"), "(1+2)*3");
    assert_eq!(canonical_key("7 ÷ 2"), "7/2");
}

#[test]
fn commutative_reorderings_keep_distinct_keys() {
    // Deliberate limitation: dedup is textual, not algebraic.
    assert_ne!(canonical_key("3 + 5"), canonical_key("5 + 3"));
}
