//! Variable collection and shape checks.

use std::collections::BTreeSet;

use log::debug;

use crate::ast::Expr;
use crate::error::SemanticError;
use crate::eval::MAX_VARIABLES;

/// Names that would be confused with boolean literals.
pub const RESERVED_NAMES: [&str; 2] = ["true", "false"];

/// Checks the tree and returns its variables, unique and sorted ascending.
///
/// The sorted order fixes the bit position of each variable in the
/// [truth table][crate::table::TruthTable]. Literal leaves are accepted and
/// contribute nothing.
pub fn validate(expr: &Expr) -> Result<Vec<String>, SemanticError> {
    let mut variables = BTreeSet::new();
    collect(expr, &mut variables)?;
    if variables.len() > MAX_VARIABLES {
        return Err(SemanticError::TooManyVariables {
            count: variables.len(),
            limit: MAX_VARIABLES,
        });
    }
    debug!("validated {} unique variables", variables.len());
    Ok(variables.into_iter().map(str::to_string).collect())
}

fn collect<'a>(expr: &'a Expr, variables: &mut BTreeSet<&'a str>) -> Result<(), SemanticError> {
    match expr {
        Expr::Var(name) => {
            check_name(name)?;
            variables.insert(name);
        }
        Expr::Const(_) => {}
        Expr::Not(e) => collect(e, variables)?,
        Expr::And(l, r) | Expr::Or(l, r) | Expr::Implies(l, r) | Expr::Iff(l, r) => {
            collect(l, variables)?;
            collect(r, variables)?;
        }
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), SemanticError> {
    if name.is_empty() || !name.chars().all(char::is_alphanumeric) {
        return Err(SemanticError::MalformedVariable(name.to_string()));
    }
    if RESERVED_NAMES.contains(&name) {
        return Err(SemanticError::ReservedName(name.to_string()));
    }
    Ok(())
}
