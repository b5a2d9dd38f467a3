//! Transpilation into constructor notation.
//!
//! Each node is replaced by a constructor call:
//!
//! | Node          | Output                   |
//! |---------------|--------------------------|
//! | `a`           | `Letra('a')`             |
//! | `l * r`       | `Binario('Y', l, r)`     |
//! | `l + r`       | `Binario('O', l, r)`     |
//! | `l => r`      | `Binario('>', l, r)`     |
//! | `l <=> r`     | `Binario('=', l, r)`     |
//! | `!e`          | `Negacion(e)`            |
//! | literal       | `Constante(True)`        |
//!
//! The compiler feeds it the tree *before* simplification.

use crate::ast::{Expr, Layer};

pub fn transpile(expr: &Expr) -> String {
    expr.fold(&mut |layer: Layer<'_, String>| match layer {
        Layer::Var(name) => format!("Letra('{}')", name),
        Layer::Const(true) => "Constante(True)".to_string(),
        Layer::Const(false) => "Constante(False)".to_string(),
        Layer::Not(e) => format!("Negacion({})", e),
        Layer::And(l, r) => binary('Y', l, r),
        Layer::Or(l, r) => binary('O', l, r),
        Layer::Implies(l, r) => binary('>', l, r),
        Layer::Iff(l, r) => binary('=', l, r),
    })
}

fn binary(op: char, lhs: String, rhs: String) -> String {
    format!("Binario('{}', {}, {})", op, lhs, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_each_connective() {
        let cases = [
            ("a", "Letra('a')"),
            ("!a", "Negacion(Letra('a'))"),
            ("a * b", "Binario('Y', Letra('a'), Letra('b'))"),
            ("a + b", "Binario('O', Letra('a'), Letra('b'))"),
            ("a => b", "Binario('>', Letra('a'), Letra('b'))"),
            ("a <=> b", "Binario('=', Letra('a'), Letra('b'))"),
        ];
        for (input, expected) in cases {
            assert_eq!(transpile(&parse(input).unwrap()), expected);
        }
    }

    #[test]
    fn test_nested() {
        let e = parse("!(p * q) => r").unwrap();
        assert_eq!(
            transpile(&e),
            "Binario('>', Negacion(Binario('Y', Letra('p'), Letra('q'))), Letra('r'))"
        );
    }

    #[test]
    fn test_literal() {
        assert_eq!(transpile(&Expr::constant(true)), "Constante(True)");
        assert_eq!(transpile(&Expr::not(Expr::constant(false))), "Negacion(Constante(False))");
    }
}
