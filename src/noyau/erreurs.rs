// src/noyau/erreurs.rs

use std::fmt;

/// Erreurs du noyau, en deux familles (voir moteur.rs) :
/// - validation : `ExpressionInvalide` (parenthèses déséquilibrées en infixe)
/// - malformation : tout le reste (lexique, pile incohérente, arithmétique)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurExpression {
    /// Entrée vide ou blanche.
    EntreeVide,

    /// Parenthèses déséquilibrées dans une expression infixe.
    ExpressionInvalide,

    /// Caractère hors alphabet dans une expression infixe.
    CaractereInattendu(char),

    /// Mot non reconnu dans un flux postfixe/préfixe.
    JetonInconnu(String),

    /// Flux polonais incohérent : opérande manquant, opérandes en trop,
    /// ou parenthèse (réservée à l'infixe).
    ExpressionMalFormee,

    /// Division ou modulo par zéro.
    DivisionParZero,

    /// Exposant négatif ou trop grand pour u32.
    ExposantInvalide,
}

impl fmt::Display for ErreurExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntreeVide => write!(f, "Entrée vide"),
            Self::ExpressionInvalide => write!(f, "expression invalide"),
            Self::CaractereInattendu(c) => write!(f, "caractère inattendu: '{c}'"),
            Self::JetonInconnu(mot) => write!(f, "jeton inconnu: '{mot}'"),
            Self::ExpressionMalFormee => write!(f, "expression mal formée"),
            Self::DivisionParZero => write!(f, "division par zéro"),
            Self::ExposantInvalide => write!(f, "exposant invalide"),
        }
    }
}

impl std::error::Error for ErreurExpression {}
