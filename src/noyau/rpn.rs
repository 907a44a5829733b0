// src/noyau/rpn.rs
//
// Shunting-yard -> RPN, double renversement -> préfixe, pile -> Expr
// Objectif:
// - Convertir une suite de Tok infixe en RPN (postfix)
// - Obtenir le préfixe par le double renversement (miroir + RPN + miroir)
// - Reconstruire Expr depuis un flux postfixe ou préfixe
//
// Règles:
// - '(' n'est jamais dépilé par la boucle de précédence (rang 0),
//   seulement par le traitement de ')'.
// - '^' suit la même règle `>=` que les autres opérateurs :
//   associativité GAUCHE, donc 2^3^2 = (2^3)^2 = 64. Comportement
//   conservé tel quel pour compatibilité.
// - Ordres de dépilage dans from_rpn / from_prefixe : les inverser
//   échange a-b et b-a. À préserver exactement.

use super::erreurs::ErreurExpression;
use super::expr::Expr;
use super::jetons::Tok;

/// Rang de précédence. 0 pour tout ce qui n'est pas un opérateur
/// (en particulier '(' : toujours perdant, jamais dépilé ici).
pub fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        Tok::Caret => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Num(3), Plus, Num(4), Star, Num(5)]
///   rpn:    [Num(3), Num(4), Num(5), Star, Plus]
///
/// Précondition : parenthèses équilibrées (voir valide.rs).
pub fn to_rpn(jetons: &[Tok]) -> Result<Vec<Tok>, ErreurExpression> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    for jeton in jetons.iter().cloned() {
        match jeton {
            Tok::Num(_) => out.push(jeton),

            Tok::LPar => ops.push(jeton),

            Tok::RPar => {
                // dépile jusqu'à '(' puis la jette
                while let Some(haut) = ops.pop() {
                    if matches!(haut, Tok::LPar) {
                        break;
                    }
                    out.push(haut);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Caret => {
                // dépile tant que le sommet a précédence >= la sienne
                while let Some(haut) = ops.last() {
                    if matches!(haut, Tok::LPar) {
                        break;
                    }
                    if precedence(haut) >= precedence(&jeton) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }
                ops.push(jeton);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurExpression::ExpressionInvalide);
        }
        out.push(op);
    }

    Ok(out)
}

/// Renverse la suite de jetons et échange '(' et ')'.
fn miroir(jetons: &[Tok]) -> Vec<Tok> {
    jetons
        .iter()
        .rev()
        .cloned()
        .map(|t| match t {
            Tok::LPar => Tok::RPar,
            Tok::RPar => Tok::LPar,
            autre => autre,
        })
        .collect()
}

/// Convertit une suite de jetons infixe en préfixe (notation polonaise).
///
/// Double renversement : miroir de l'entrée, RPN, puis renversement de la
/// sortie. Le miroir opère sur les jetons, donc les entiers multi-chiffres
/// restent intacts.
///
/// Précondition : parenthèses équilibrées (voir valide.rs).
pub fn to_prefixe(jetons: &[Tok]) -> Result<Vec<Tok>, ErreurExpression> {
    let mut rpn = to_rpn(&miroir(jetons))?;
    rpn.reverse();
    Ok(rpn)
}

fn noeud_binaire(op: &Tok, a: Expr, b: Expr) -> Expr {
    match op {
        Tok::Plus => Expr::Add(Box::new(a), Box::new(b)),
        Tok::Minus => Expr::Sub(Box::new(a), Box::new(b)),
        Tok::Star => Expr::Mul(Box::new(a), Box::new(b)),
        Tok::Slash => Expr::Div(Box::new(a), Box::new(b)),
        Tok::Percent => Expr::Mod(Box::new(a), Box::new(b)),
        Tok::Caret => Expr::Pow(Box::new(a), Box::new(b)),
        _ => unreachable!(),
    }
}

/// Construit une Expr à partir d'un flux RPN (postfixe).
///
/// Dépilage : b PUIS a, noeud (a op b).
pub fn from_rpn(jetons: &[Tok]) -> Result<Expr, ErreurExpression> {
    let mut pile: Vec<Expr> = Vec::new();

    for jeton in jetons.iter().cloned() {
        match jeton {
            Tok::Num(n) => pile.push(Expr::Ent(n)),

            Tok::LPar | Tok::RPar => return Err(ErreurExpression::ExpressionMalFormee),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Caret => {
                let b = pile.pop().ok_or(ErreurExpression::ExpressionMalFormee)?;
                let a = pile.pop().ok_or(ErreurExpression::ExpressionMalFormee)?;
                pile.push(noeud_binaire(&jeton, a, b));
            }
        }
    }

    if pile.len() != 1 {
        return Err(ErreurExpression::ExpressionMalFormee);
    }
    Ok(pile.pop().unwrap())
}

/// Construit une Expr à partir d'un flux préfixe.
///
/// Parcours de DROITE à gauche ; dépilage : a PUIS b, noeud (a op b).
pub fn from_prefixe(jetons: &[Tok]) -> Result<Expr, ErreurExpression> {
    let mut pile: Vec<Expr> = Vec::new();

    for jeton in jetons.iter().rev().cloned() {
        match jeton {
            Tok::Num(n) => pile.push(Expr::Ent(n)),

            Tok::LPar | Tok::RPar => return Err(ErreurExpression::ExpressionMalFormee),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Caret => {
                let a = pile.pop().ok_or(ErreurExpression::ExpressionMalFormee)?;
                let b = pile.pop().ok_or(ErreurExpression::ExpressionMalFormee)?;
                pile.push(noeud_binaire(&jeton, a, b));
            }
        }
    }

    if pile.len() != 1 {
        return Err(ErreurExpression::ExpressionMalFormee);
    }
    Ok(pile.pop().unwrap())
}
