//! Properties checked over every small formula and over seeded random ones.

use std::collections::HashSet;

use lgc_rs::ast::Expr;
use lgc_rs::compile::compile;
use lgc_rs::debug::verify_truth_table;
use lgc_rs::eval::evaluate;
use lgc_rs::metrics::{connector_count, negation_count};
use lgc_rs::simplify::simplify;
use lgc_rs::validate::validate;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use test_log::test;

const NAMES: [&str; 4] = ["a", "b", "c", "d"];

// ─── Generators ─────────────────────────────────────────────────────────────

/// All formulas over `vars` with depth at most `depth`.
fn all_formulas(vars: &[&str], depth: usize) -> Vec<Expr> {
    let mut level: Vec<Expr> = vars.iter().map(|&v| Expr::var(v)).collect();
    for _ in 0..depth {
        let mut next = level.clone();
        for e in level.iter() {
            next.push(Expr::not(e.clone()));
        }
        for l in level.iter() {
            for r in level.iter() {
                next.push(Expr::and(l.clone(), r.clone()));
                next.push(Expr::or(l.clone(), r.clone()));
                next.push(Expr::implies(l.clone(), r.clone()));
                next.push(Expr::iff(l.clone(), r.clone()));
            }
        }
        level = next;
    }
    level
}

fn random_formula(rng: &mut ChaCha8Rng, depth: usize) -> Expr {
    if depth == 0 || rng.random_bool(0.2) {
        return Expr::var(NAMES[rng.random_range(0..NAMES.len())]);
    }
    match rng.random_range(0..5) {
        0 => Expr::not(random_formula(rng, depth - 1)),
        op => {
            let l = random_formula(rng, depth - 1);
            let r = random_formula(rng, depth - 1);
            match op {
                1 => Expr::and(l, r),
                2 => Expr::or(l, r),
                3 => Expr::implies(l, r),
                _ => Expr::iff(l, r),
            }
        }
    }
}

fn random_formulas(seed: u64, count: usize) -> Vec<Expr> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| random_formula(&mut rng, 6)).collect()
}

fn corpus() -> Vec<Expr> {
    let mut formulas = all_formulas(&["a", "b"], 2);
    formulas.extend(random_formulas(42, 500));
    formulas
}

// ─── Oracles ────────────────────────────────────────────────────────────────

/// Evaluates with `values[i]` standing for `variables[i]`.
fn reference(expr: &Expr, variables: &[String], values: &[bool]) -> bool {
    match expr {
        Expr::Var(name) => {
            let i = variables.iter().position(|v| v == name).unwrap();
            values[i]
        }
        Expr::Const(b) => *b,
        Expr::Not(e) => !reference(e, variables, values),
        Expr::And(l, r) => reference(l, variables, values) && reference(r, variables, values),
        Expr::Or(l, r) => reference(l, variables, values) || reference(r, variables, values),
        Expr::Implies(l, r) => !reference(l, variables, values) || reference(r, variables, values),
        Expr::Iff(l, r) => reference(l, variables, values) == reference(r, variables, values),
    }
}

/// Whether simplification would rewrite some `x => x` node.
fn has_self_implication(expr: &Expr) -> bool {
    match expr {
        Expr::Var(_) | Expr::Const(_) => false,
        Expr::Not(e) => has_self_implication(e),
        Expr::Implies(l, r) => {
            let (sl, sr) = (simplify((**l).clone()), simplify((**r).clone()));
            let same = matches!((sl.as_var(), sr.as_var()), (Some(a), Some(b)) if a == b);
            same || has_self_implication(l) || has_self_implication(r)
        }
        Expr::And(l, r) | Expr::Or(l, r) | Expr::Iff(l, r) => has_self_implication(l) || has_self_implication(r),
    }
}

// ─── Truth table shape ──────────────────────────────────────────────────────

#[test]
fn test_rows_are_exhaustive_and_ordered() {
    for expr in corpus() {
        let variables = validate(&expr).unwrap();
        let table = evaluate(&expr, &variables);
        let n = variables.len();
        assert_eq!(table.len(), 1 << n);

        let mut seen = HashSet::new();
        for (i, row) in table.rows().iter().enumerate() {
            let bits: Vec<bool> = variables.iter().map(|v| row[v]).collect();
            for (j, &bit) in bits.iter().enumerate() {
                assert_eq!(bit, (i >> j) & 1 == 1, "row {} of {}", i, expr);
            }
            assert!(seen.insert(bits), "duplicate row {} of {}", i, expr);
        }
    }
}

#[test]
fn test_variables_sorted_unique() {
    for expr in corpus() {
        let variables = validate(&expr).unwrap();
        assert!(variables.windows(2).all(|w| w[0] < w[1]), "{:?}", variables);
    }
}

// ─── Evaluation ─────────────────────────────────────────────────────────────

#[test]
fn test_evaluation_matches_reference() {
    for expr in corpus() {
        let variables = validate(&expr).unwrap();
        let failures = verify_truth_table(&expr, &variables, |values| reference(&expr, &variables, values));
        assert!(failures.is_empty(), "{}: {:?}", expr, failures);
    }
}

// ─── Simplification ─────────────────────────────────────────────────────────

#[test]
fn test_simplify_is_idempotent() {
    for expr in corpus() {
        let once = simplify(expr.clone());
        let twice = simplify(once.clone());
        assert_eq!(once, twice, "{}", expr);
    }
}

#[test]
fn test_simplify_preserves_semantics() {
    let mut checked = 0;
    for expr in corpus() {
        if has_self_implication(&expr) {
            continue;
        }
        let variables = validate(&expr).unwrap();
        let simplified = simplify(expr.clone());
        assert_eq!(
            evaluate(&expr, &variables),
            evaluate(&simplified, &variables),
            "{} simplified to {}",
            expr,
            simplified
        );
        checked += 1;
    }
    assert!(checked > 1000);
}

#[test]
fn test_simplify_never_grows() {
    for expr in corpus() {
        let simplified = simplify(expr.clone());
        assert!(simplified.size() <= expr.size());
        assert!(connector_count(&simplified) <= connector_count(&expr));
        assert!(negation_count(&simplified) <= negation_count(&expr));
    }
}

// ─── Printing ───────────────────────────────────────────────────────────────

#[test]
fn test_display_parses_back() {
    for expr in corpus() {
        let text = expr.to_string();
        let reparsed: Expr = text.parse().unwrap();
        assert_eq!(reparsed, expr, "printed as {}", text);
    }
}

#[test]
fn test_compile_agrees_with_stages() {
    for expr in random_formulas(7, 100) {
        let c = compile(&expr.to_string()).unwrap();
        assert_eq!(c.original, expr);
        assert_eq!(c.variables, validate(&expr).unwrap());
        assert_eq!(c.negation_count, negation_count(&expr));
        assert_eq!(c.connector_count, connector_count(&simplify(expr.clone())));
    }
}
