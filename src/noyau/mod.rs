//! Noyau polonais exact
//!
//! Organisation interne :
//! - jetons.rs  : tokenisation (infixe + flux polonais)
//! - valide.rs  : équilibre des parenthèses
//! - rpn.rs     : shunting-yard, double renversement, reconstruction Expr
//! - expr.rs    : arbre binaire d'expression
//! - format.rs  : rendus infixe / postfixe / préfixe
//! - calcul.rs  : évaluation entière exacte (BigInt)
//! - moteur.rs  : les neuf opérations publiques
//! - erreurs.rs : taxonomie des erreurs

pub mod calcul;
pub mod erreurs;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod rpn;
pub mod valide;


#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreurs::ErreurExpression;
pub use moteur::{
    evalue_infixe, evalue_postfixe, evalue_prefixe, infixe_vers_postfixe, infixe_vers_prefixe,
    postfixe_vers_infixe, postfixe_vers_prefixe, prefixe_vers_infixe, prefixe_vers_postfixe,
};
