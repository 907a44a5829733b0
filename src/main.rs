// src/main.rs
//
// Calculatrice polonaise — point d'entrée console
// -----------------------------------------------
// Usage:
//   calculatrice_polonaise infixe   "3 + 4 * 5"
//   calculatrice_polonaise postfixe "3 4 5 * +"
//   calculatrice_polonaise prefixe  "+ 3 * 4 5"
//   calculatrice_polonaise "3 + 4 * 5"        (infixe par défaut)
//
// Affiche les deux autres notations puis la valeur entière exacte.
// Erreur => message sur stderr + code de sortie 2.

use std::process::ExitCode;

mod noyau;

use noyau::{
    evalue_infixe, evalue_postfixe, evalue_prefixe, infixe_vers_postfixe, infixe_vers_prefixe,
    postfixe_vers_infixe, postfixe_vers_prefixe, prefixe_vers_infixe, prefixe_vers_postfixe,
    ErreurExpression,
};

const USAGE: &str = "usage: calculatrice_polonaise [infixe|postfixe|prefixe] EXPRESSION";

fn traite(notation: &str, expression: &str) -> Result<(), ErreurExpression> {
    match notation {
        "infixe" => {
            println!("postfixe : {}", infixe_vers_postfixe(expression)?);
            println!("prefixe  : {}", infixe_vers_prefixe(expression)?);
            println!("valeur   : {}", evalue_infixe(expression)?);
        }
        "postfixe" => {
            println!("infixe   : {}", postfixe_vers_infixe(expression)?);
            println!("prefixe  : {}", postfixe_vers_prefixe(expression)?);
            println!("valeur   : {}", evalue_postfixe(expression)?);
        }
        "prefixe" => {
            println!("infixe   : {}", prefixe_vers_infixe(expression)?);
            println!("postfixe : {}", prefixe_vers_postfixe(expression)?);
            println!("valeur   : {}", evalue_prefixe(expression)?);
        }
        _ => unreachable!(),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    }

    // Premier mot = notation s'il en nomme une, sinon infixe par défaut.
    let (notation, reste) = match args[0].as_str() {
        n @ ("infixe" | "postfixe" | "prefixe") => (n, &args[1..]),
        _ => ("infixe", &args[..]),
    };

    if reste.is_empty() {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    }

    // Les mots restants forment l'expression (le shell peut l'avoir découpée).
    let expression = reste.join(" ");

    match traite(notation, &expression) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("erreur: {e}");
            ExitCode::from(2)
        }
    }
}
