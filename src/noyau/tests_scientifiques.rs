//! Tests scientifiques (campagne) : invariants + scénarios de bout en bout.
//!
//! - chiffre op chiffre : comparé au calcul direct, exhaustivement
//! - notation scientifique : aller-retour et idempotence de la forme canonique
//! - conversions : facteur 1 sur soi-même, alias flous
//! - multiplication implicite, factorielles
//!
//! Budget temps global : la campagne entière reste courte.

use std::time::{Duration, Instant};

use num_complex::Complex64;

use super::eval::{compiler, evaluer};
use super::lecture::rationnel_decimal;
use super::mode::Mode;
use super::normalisation::normaliser;
use super::unites::Facteur;
use super::{
    calculer, convertir, resoudre, scientifique, ErreurCalc, TableUnites, TauxFixes,
};
use crate::config::Reglages;

fn reglages() -> Reglages {
    Reglages::default()
}

/// Partie droite de "entrée = résultat".
fn resultat(entree: &str) -> String {
    let s = calculer(entree, &reglages()).unwrap_or_else(|e| panic!("expr={entree:?} err={e}"));
    match s.split_once(" = ") {
        Some((_, r)) => r.to_string(),
        None => panic!("sortie sans ' = ' : {s:?}"),
    }
}

fn assert_proche(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol * b.abs().max(1.0), "{a} != {b} (tol {tol})");
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Chiffre op chiffre ------------------------ */

#[test]
fn sci_chiffre_op_chiffre_exhaustif() {
    let start = Instant::now();
    for a in 0..10u8 {
        for b in 0..10u8 {
            for op in ['+', '-', '*', '/'] {
                let entree = format!("{a}{op}{b}");
                let (x, y) = (a as f64, b as f64);
                let direct = match op {
                    '+' => x + y,
                    '-' => x - y,
                    '*' => x * y,
                    _ => x / y,
                };

                if op == '/' && b == 0 {
                    let r = calculer(&entree, &reglages());
                    assert!(matches!(r, Err(ErreurCalc::Domaine(_))), "{entree} -> {r:?}");
                    continue;
                }

                let r: f64 = resultat(&entree)
                    .parse()
                    .unwrap_or_else(|_| panic!("résultat non numérique pour {entree}"));
                assert_eq!(r, direct, "{entree}");
            }
        }
        budget(start, Duration::from_secs(5));
    }
}

/* ------------------------ Notation scientifique ------------------------ */

fn valeur_decimale(s: &str) -> num_rational::BigRational {
    let brut: String = s.chars().filter(|c| *c != ',').collect();
    rationnel_decimal(&brut).unwrap_or_else(|| panic!("pas un décimal : {s:?}"))
}

#[test]
fn sci_aller_retour_numerique() {
    let r = reglages();
    for x in ["1500", "0.00015", "-42.125", "7", "123456789012345678901234567890", "0.5"] {
        let forme = scientifique(x, &r).unwrap();
        let retour = scientifique(&forme, &r).unwrap();
        assert_eq!(valeur_decimale(&retour), valeur_decimale(x), "{x} -> {forme} -> {retour}");

        // idempotence de la forme canonique
        assert_eq!(scientifique(&retour, &r).unwrap(), forme, "{x}");
    }
}

/* ------------------------ Conversions ------------------------ */

#[test]
fn sci_auto_conversion_inchangee() {
    let table = TableUnites::construire();
    let taux = TauxFixes::default();
    let start = Instant::now();

    for u in table.unites() {
        assert_eq!(table.facteur(u, u), Some(Facteur::Entier(1)), "unité {u}");

        // saisie directe possible seulement pour les symboles déjà en minuscules, sans espace
        if u.to_lowercase() == u && !u.contains(' ') {
            for v in ["3", "2.5"] {
                let s = convertir(v, u, u, &table, &taux).unwrap_or_else(|e| panic!("{u}: {e}"));
                assert_eq!(s, format!("{v} {u} = {v} {u}"));
            }
        }
    }
    budget(start, Duration::from_secs(2));
}

#[test]
fn sci_alias_kilometres_vers_miles() {
    let table = TableUnites::construire();
    let s = convertir("5", "kilometers", "mi", &table, &TauxFixes::default()).unwrap();
    let (gauche, droite) = s.split_once(" = ").unwrap();
    assert_eq!(gauche, "5 km");

    let v: f64 = droite.trim_end_matches(" mi").parse().unwrap();
    let Some(Facteur::Reel(f)) = table.facteur("km", "mi") else {
        panic!("facteur km -> mi absent");
    };
    assert_proche(v, 5.0 * f, 1e-12);
}

/* ------------------------ Normalisation ------------------------ */

#[test]
fn sci_multiplication_implicite() {
    let (e, _) = compiler("2(3+1)", Mode::Calcul).unwrap();
    assert_eq!(evaluer(&e, Mode::Calcul, None).unwrap(), Complex64::new(8.0, 0.0));

    let (e, _) = compiler("2x", Mode::Graphe).unwrap();
    assert_eq!(
        evaluer(&e, Mode::Graphe, Some(Complex64::new(5.0, 0.0))).unwrap(),
        Complex64::new(10.0, 0.0)
    );

    for mode in [Mode::Calcul, Mode::Graphe, Mode::Resolution] {
        assert_eq!(normaliser("log(10)", mode).unwrap().to_string(), "log(10)", "{mode:?}");
    }
}

#[test]
fn sci_factorielles() {
    assert_eq!(resultat("(3+2)!"), "120");
    // imbriquée : (3!)! = 6!
    assert_eq!(resultat("3!!"), "720");
    assert_eq!(resultat("3!!"), resultat("(3!)!"));
}

/* ------------------------ Scénarios ------------------------ */

#[test]
fn sci_scenarios() {
    let r = reglages();
    let table = TableUnites::construire();
    let taux = TauxFixes::depuis_reglages(&r);

    assert_eq!(calculer("2^3", &r).unwrap(), "2^3 = 8");
    assert_eq!(resoudre("x^2=4", &r).unwrap(), "𝓍 = -2 ∨ 𝓍 = 2");
    assert_eq!(convertir("1", "m", "ft", &table, &taux).unwrap(), "1 m = 3.28084 ft");
    assert_eq!(scientifique("1500", &r).unwrap(), "1.5 • 10^3");
}

#[test]
fn sci_erreurs_typees_par_point_d_entree() {
    let r = reglages();
    assert_eq!(resoudre("2 + 2 = 4", &r), Err(ErreurCalc::SansVariable));
    assert_eq!(resoudre("x + 1", &r), Err(ErreurCalc::SansEgal));
    assert_eq!(resoudre("x = 1 = 2", &r), Err(ErreurCalc::PlusieursEgal));
    assert!(matches!(calculer("foo(2)", &r), Err(ErreurCalc::MotIllegal(_))));
    assert!(matches!(calculer("x + 1", &r), Err(ErreurCalc::AgregatMalForme(_))));
    assert_eq!(scientifique("1e5000", &r), Err(ErreurCalc::SortieTropLongue));
}
