//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, exposant invalide)
//! - invariant clé : les trois notations d'un même arbre donnent le même
//!   Result, valeur comme erreur
//!
//! Le générateur parenthèse CHAQUE noeud : l'arbre est alors unique quel
//! que soit le chemin de conversion. L'exposant de '^' est un chiffre
//! borné pour contenir la croissance des BigInt.

use std::time::{Duration, Instant};

use super::erreurs::ErreurExpression;
use super::moteur::{
    evalue_infixe, evalue_postfixe, evalue_prefixe, infixe_vers_postfixe, infixe_vers_prefixe,
    postfixe_vers_infixe, postfixe_vers_prefixe, prefixe_vers_infixe, prefixe_vers_postfixe,
};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn est_erreur_attendue(e: &ErreurExpression) -> bool {
    // Liste blanche : erreurs *normales* pour un fuzz,
    // parce que le domaine est volontairement limité.
    matches!(
        e,
        ErreurExpression::DivisionParZero | ErreurExpression::ExposantInvalide
    )
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_entier(rng: &mut Rng) -> String {
    // petits entiers, incluant 0 (utile pour provoquer division par zéro)
    format!("{}", rng.pick(10))
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_entier(rng);
    }

    match rng.pick(7) {
        0 => gen_entier(rng),
        1 => format!(
            "({}+{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        2 => format!(
            "({}-{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        3 => format!(
            "({}*{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        4 => format!(
            "({}/{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        5 => format!(
            "({}%{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        _ => {
            // exposant borné 0..=3 : la croissance reste polynomiale
            format!("({}^{})", gen_expr(rng, depth - 1), rng.pick(4))
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_coherence_des_trois_notations() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let post = infixe_vers_postfixe(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        let pre = infixe_vers_prefixe(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));

        let vi = evalue_infixe(&expr);
        let vp = evalue_postfixe(&post);
        let vr = evalue_prefixe(&pre);

        // même arbre => même Result partout
        assert_eq!(vi, vp, "expr={expr:?} post={post:?}");
        assert_eq!(vi, vr, "expr={expr:?} pre={pre:?}");

        match vi {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                assert!(
                    est_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne "balaye" rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop \"sage\"");
}

#[test]
fn fuzz_safe_allers_retours_point_fixe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..120 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let post = infixe_vers_postfixe(&expr).unwrap();
        let pre = infixe_vers_prefixe(&expr).unwrap();

        // reconstruction parenthésée => reconversion au point fixe
        let inf_p = postfixe_vers_infixe(&post).unwrap();
        assert_eq!(infixe_vers_postfixe(&inf_p).unwrap(), post, "expr={expr:?}");

        let inf_r = prefixe_vers_infixe(&pre).unwrap();
        assert_eq!(infixe_vers_prefixe(&inf_r).unwrap(), pre, "expr={expr:?}");

        // chemins croisés entre notations polonaises
        assert_eq!(prefixe_vers_postfixe(&pre).unwrap(), post, "expr={expr:?}");
        assert_eq!(postfixe_vers_prefixe(&post).unwrap(), pre, "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_flux_polonais_tronques() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..100 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        let post = infixe_vers_postfixe(&expr).unwrap();

        // un flux d'au moins trois jetons finit par un opérateur :
        // le tronquer laisse deux operandes orphelins
        let jetons: Vec<&str> = post.split(' ').collect();
        if jetons.len() < 3 {
            continue;
        }

        let tronque = jetons[..jetons.len() - 1].join(" ");
        assert_eq!(
            evalue_postfixe(&tronque),
            Err(ErreurExpression::ExpressionMalFormee),
            "post={post:?}"
        );

        // un jeton de trop casse aussi la pile
        let rallonge = if rng.coin() {
            format!("{post} 0")
        } else {
            format!("0 {post}")
        };
        assert_eq!(
            evalue_postfixe(&rallonge),
            Err(ErreurExpression::ExpressionMalFormee),
            "post={post:?}"
        );
    }
}
