// src/noyau/jetons.rs

use num_bigint::BigInt;

use super::erreurs::ErreurExpression;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(BigInt),

    Plus,
    Minus,
    Star,
    Slash,
    Percent, // %
    Caret,   // ^

    LPar,
    RPar,
}

fn operateur_depuis_char(c: char) -> Option<Tok> {
    match c {
        '+' => Some(Tok::Plus),
        '-' => Some(Tok::Minus),
        '*' => Some(Tok::Star),
        '/' => Some(Tok::Slash),
        '%' => Some(Tok::Percent),
        '^' => Some(Tok::Caret),
        _ => None,
    }
}

/// Tokenize une expression infixe.
/// Supporte:
/// - entiers multi-chiffres (ex: 12)
/// - opérateurs + - * / % ^
/// - parenthèses ( )
/// Tout autre caractère est une erreur. Classification par tests de
/// caractères ASCII explicites, pas de regex.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurExpression> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        if let Some(op) = operateur_depuis_char(c) {
            out.push(op);
            i += 1;
            continue;
        }

        // Entier : une suite de chiffres ASCII, jamais coupée en deux jetons
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let int_str: String = chars[start..i].iter().collect();
            let n = BigInt::parse_bytes(int_str.as_bytes(), 10)
                .ok_or(ErreurExpression::CaractereInattendu(c))?;
            out.push(Tok::Num(n));
            continue;
        }

        return Err(ErreurExpression::CaractereInattendu(c));
    }

    Ok(out)
}

/// Découpe un flux postfixe/préfixe en jetons.
///
/// Le séparateur est EXACTEMENT une espace ASCII (contrat du format) :
/// deux espaces consécutives ou une tabulation au milieu d'un mot rendent
/// le flux mal formé. Les espaces de tête/queue sont tolérées.
pub fn tokenize_polonaise(s: &str) -> Result<Vec<Tok>, ErreurExpression> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ErreurExpression::EntreeVide);
    }

    let mut out = Vec::new();
    for mot in s.split(' ') {
        if mot.is_empty() {
            return Err(ErreurExpression::ExpressionMalFormee);
        }

        if mot == "(" {
            out.push(Tok::LPar);
            continue;
        }
        if mot == ")" {
            out.push(Tok::RPar);
            continue;
        }

        if mot.len() == 1 {
            if let Some(op) = operateur_depuis_char(mot.chars().next().unwrap()) {
                out.push(op);
                continue;
            }
        }

        if mot.bytes().all(|b| b.is_ascii_digit()) {
            let n = BigInt::parse_bytes(mot.as_bytes(), 10)
                .ok_or_else(|| ErreurExpression::JetonInconnu(mot.to_string()))?;
            out.push(Tok::Num(n));
            continue;
        }

        return Err(ErreurExpression::JetonInconnu(mot.to_string()));
    }

    Ok(out)
}

/// Format utilitaire : liste de jetons en texte, une espace entre chaque.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(n) => format!("{n}"),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Percent => "%".to_string(),
            Tok::Caret => "^".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
