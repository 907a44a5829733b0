//! Noyau — opérations publiques (pipeline réel)
//!
//! Conversions : tokenize -> (to_rpn | to_prefixe) -> format_tokens,
//! ou tokenize_polonaise -> (from_rpn | from_prefixe) -> format_*.
//! Évaluations : même tête de pipeline, puis eval_entier sur l'Expr.
//!
//! Remarque : l'équilibre des parenthèses est vérifié AVANT la
//! tokenisation (même contrat pour les neuf opérations infixes).

use num_bigint::BigInt;

use super::calcul::eval_entier;
use super::erreurs::ErreurExpression;
use super::format::{format_infixe, format_postfixe, format_prefixe};
use super::jetons::{format_tokens, tokenize, tokenize_polonaise, Tok};
use super::rpn::{from_prefixe, from_rpn, to_prefixe, to_rpn};
use super::valide::est_infixe_valide;

/* ------------------------ Tête de pipeline infixe ------------------------ */

/// Prépare une entrée infixe : trim, garde du vide, équilibre des
/// parenthèses, puis tokenisation.
fn prepare_infixe(s: &str) -> Result<Vec<Tok>, ErreurExpression> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ErreurExpression::EntreeVide);
    }
    if !est_infixe_valide(s) {
        return Err(ErreurExpression::ExpressionInvalide);
    }
    tokenize(s)
}

/* ------------------------ Conversions depuis l'infixe ------------------------ */

/// Infixe -> postfixe (NPI), jetons séparés d'une espace.
pub fn infixe_vers_postfixe(s: &str) -> Result<String, ErreurExpression> {
    let jetons = prepare_infixe(s)?;
    Ok(format_tokens(&to_rpn(&jetons)?))
}

/// Infixe -> préfixe (notation polonaise), jetons séparés d'une espace.
pub fn infixe_vers_prefixe(s: &str) -> Result<String, ErreurExpression> {
    let jetons = prepare_infixe(s)?;
    Ok(format_tokens(&to_prefixe(&jetons)?))
}

/* ------------------------ Conversions depuis le postfixe ------------------------ */

/// Postfixe -> infixe entièrement parenthésé.
pub fn postfixe_vers_infixe(s: &str) -> Result<String, ErreurExpression> {
    let e = from_rpn(&tokenize_polonaise(s)?)?;
    Ok(format_infixe(&e))
}

/// Postfixe -> préfixe, via l'arbre.
pub fn postfixe_vers_prefixe(s: &str) -> Result<String, ErreurExpression> {
    let e = from_rpn(&tokenize_polonaise(s)?)?;
    Ok(format_prefixe(&e))
}

/* ------------------------ Conversions depuis le préfixe ------------------------ */

/// Préfixe -> infixe entièrement parenthésé.
pub fn prefixe_vers_infixe(s: &str) -> Result<String, ErreurExpression> {
    let e = from_prefixe(&tokenize_polonaise(s)?)?;
    Ok(format_infixe(&e))
}

/// Préfixe -> postfixe, via l'arbre.
pub fn prefixe_vers_postfixe(s: &str) -> Result<String, ErreurExpression> {
    let e = from_prefixe(&tokenize_polonaise(s)?)?;
    Ok(format_postfixe(&e))
}

/* ------------------------ Évaluations ------------------------ */

/// Évalue une expression infixe en entier exact.
pub fn evalue_infixe(s: &str) -> Result<BigInt, ErreurExpression> {
    let jetons = prepare_infixe(s)?;
    let e = from_rpn(&to_rpn(&jetons)?)?;
    eval_entier(&e)
}

/// Évalue un flux postfixe en entier exact.
pub fn evalue_postfixe(s: &str) -> Result<BigInt, ErreurExpression> {
    let e = from_rpn(&tokenize_polonaise(s)?)?;
    eval_entier(&e)
}

/// Évalue un flux préfixe en entier exact.
pub fn evalue_prefixe(s: &str) -> Result<BigInt, ErreurExpression> {
    let e = from_prefixe(&tokenize_polonaise(s)?)?;
    eval_entier(&e)
}
