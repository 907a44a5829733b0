// src/noyau/calcul.rs
//
// Évaluation entière exacte d'une Expr.
// - division et modulo TRONQUÉS (sémantique BigInt, signe du dividende
//   pour le reste), garde explicite du zéro
// - '^' : exposant converti en u32, refusé sinon

use num_bigint::BigInt;
use num_traits::Zero;

use super::erreurs::ErreurExpression;
use super::expr::Expr;

/// Évalue une expression en entier exact.
pub fn eval_entier(e: &Expr) -> Result<BigInt, ErreurExpression> {
    use Expr::*;

    match e {
        Ent(n) => Ok(n.clone()),

        Add(a, b) => Ok(eval_entier(a)? + eval_entier(b)?),
        Sub(a, b) => Ok(eval_entier(a)? - eval_entier(b)?),
        Mul(a, b) => Ok(eval_entier(a)? * eval_entier(b)?),

        Div(a, b) => {
            let sb = eval_entier(b)?;
            if sb.is_zero() {
                return Err(ErreurExpression::DivisionParZero);
            }
            Ok(eval_entier(a)? / sb)
        }

        Mod(a, b) => {
            let sb = eval_entier(b)?;
            if sb.is_zero() {
                return Err(ErreurExpression::DivisionParZero);
            }
            Ok(eval_entier(a)? % sb)
        }

        Pow(a, b) => {
            let exp = eval_entier(b)?;
            let exp = big_vers_u32(&exp).ok_or(ErreurExpression::ExposantInvalide)?;
            Ok(eval_entier(a)?.pow(exp))
        }
    }
}

/// Conversion SAFE vers u32.
/// (exposant négatif ou trop grand => None, refusé par l'appelant)
fn big_vers_u32(x: &BigInt) -> Option<u32> {
    x.to_string().parse::<u32>().ok()
}
