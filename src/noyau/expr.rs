// src/noyau/expr.rs
//
// Arbre binaire d'expression (entiers seulement).
// Construit par rpn.rs (pile), rendu par format.rs, évalué par calcul.rs.

use num_bigint::BigInt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Ent(BigInt),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Mod(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Symbole de l'opérateur d'un noeud binaire.
    pub fn symbole(&self) -> &'static str {
        match self {
            Expr::Add(_, _) => "+",
            Expr::Sub(_, _) => "-",
            Expr::Mul(_, _) => "*",
            Expr::Div(_, _) => "/",
            Expr::Mod(_, _) => "%",
            Expr::Pow(_, _) => "^",
            Expr::Ent(_) => unreachable!(),
        }
    }
}
