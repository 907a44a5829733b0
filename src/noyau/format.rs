// src/noyau/format.rs

use super::expr::Expr;

/* ------------------------ Rendus par notation ------------------------ */

/// Rendu infixe : chaque noeud binaire devient `(a op b)`,
/// une espace de part et d'autre de l'opérateur.
pub fn format_infixe(e: &Expr) -> String {
    use Expr::*;

    match e {
        Ent(n) => format!("{n}"),

        Add(a, b) | Sub(a, b) | Mul(a, b) | Div(a, b) | Mod(a, b) | Pow(a, b) => {
            format!("({} {} {})", format_infixe(a), e.symbole(), format_infixe(b))
        }
    }
}

/// Rendu postfixe : `a b op`, une espace entre chaque jeton.
pub fn format_postfixe(e: &Expr) -> String {
    use Expr::*;

    match e {
        Ent(n) => format!("{n}"),

        Add(a, b) | Sub(a, b) | Mul(a, b) | Div(a, b) | Mod(a, b) | Pow(a, b) => {
            format!(
                "{} {} {}",
                format_postfixe(a),
                format_postfixe(b),
                e.symbole()
            )
        }
    }
}

/// Rendu préfixe : `op a b`, une espace entre chaque jeton.
pub fn format_prefixe(e: &Expr) -> String {
    use Expr::*;

    match e {
        Ent(n) => format!("{n}"),

        Add(a, b) | Sub(a, b) | Mul(a, b) | Div(a, b) | Mod(a, b) | Pow(a, b) => {
            format!("{} {} {}", e.symbole(), format_prefixe(a), format_prefixe(b))
        }
    }
}
