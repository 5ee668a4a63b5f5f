//! Noyau — évaluation (pipeline réel)
//!
//! entrée -> liste blanche -> jetons normalisés -> RPN -> Expr -> valeur complexe -> affichage
//!
//! Toutes les valeurs sont des `Complex64`. Deux réels restent des réels
//! (arithmétique f64 directe) : un complexe n'apparaît que par `i`, `sqrt`,
//! `log` ou une puissance d'un négatif.
//! Tout NaN devient une erreur de domaine ; les infinis sont des valeurs légales.

use num_complex::Complex64;
use tracing::debug;

use super::erreur::{ErreurCalc, Resultat};
use super::expr::Expr;
use super::format::{embellir, format_complexe};
use super::mode::{Agregat, Fonction, Mode};
use super::normalisation::normaliser;
use super::rpn::{analyser, format_rpn, to_rpn};
use crate::config::Reglages;

type C = Complex64;

/// Garde-fou des agrégats : au-delà, l'indice n'est plus parcouru.
const ITERATIONS_MAX: i64 = 10_000_000;

/// Au-delà de 2^53, un f64 ne distingue plus deux entiers consécutifs.
const BORNE_AGREGAT: f64 = 9_007_199_254_740_992.0;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub normalisee: String,
    pub rpn: String,
    pub arbre: String,
}

/* ------------------------ Environnement ------------------------ */

#[derive(Clone, Copy, Debug)]
struct Env {
    mode: Mode,
    x: Option<C>,
}

/// Évalue un arbre dans un mode, avec `x` éventuellement lié.
pub fn evaluer(expr: &Expr, mode: Mode, x: Option<C>) -> Resultat<C> {
    eval(expr, Env { mode, x })
}

fn reel(v: f64) -> C {
    C::new(v, 0.0)
}

fn est_reel(z: C) -> bool {
    z.im == 0.0
}

fn entier(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0
}

/// NaN => domaine ; -0.0 ramené à 0.0 ; mode Graph : valeurs réelles seulement.
fn verifier(z: C, env: Env) -> Resultat<C> {
    if z.re.is_nan() || z.im.is_nan() {
        return Err(ErreurCalc::domaine("résultat indéfini"));
    }
    let z = C::new(z.re + 0.0, z.im + 0.0);
    if env.mode.domaine_reel() && !est_reel(z) {
        return Err(ErreurCalc::domaine("résultat non réel"));
    }
    Ok(z)
}

fn fini(z: C) -> bool {
    z.re.is_finite() && z.im.is_finite()
}

/// Opérandes finies et résultat infini : dépassement de capacité.
/// `inf` saisi tel quel reste permis.
fn sans_depassement(z: C, operandes: &[C]) -> Resultat<C> {
    let nan = z.re.is_nan() || z.im.is_nan();
    if !nan && !fini(z) && operandes.iter().all(|o| fini(*o)) {
        return Err(ErreurCalc::Evaluation("dépassement de capacité".into()));
    }
    Ok(z)
}

fn reel_requis(z: C, quoi: &str) -> Resultat<f64> {
    if est_reel(z) {
        Ok(z.re)
    } else {
        Err(ErreurCalc::domaine(format!("{quoi} : argument complexe")))
    }
}

/* ------------------------ Évaluation ------------------------ */

fn eval(e: &Expr, env: Env) -> Resultat<C> {
    let z = match e {
        Expr::Nombre(v) => reel(*v),
        Expr::Imaginaire => C::new(0.0, 1.0),
        Expr::Constante(c) => reel(c.valeur()),
        Expr::Var { .. } => env
            .x
            .ok_or_else(|| ErreurCalc::Evaluation("'x' sans valeur".into()))?,

        Expr::Neg(a) => -eval(a, env)?,

        Expr::Add(a, b) => {
            let (a, b) = (eval(a, env)?, eval(b, env)?);
            let z = if est_reel(a) && est_reel(b) {
                reel(a.re + b.re)
            } else {
                a + b
            };
            sans_depassement(z, &[a, b])?
        }
        Expr::Sub(a, b) => {
            let (a, b) = (eval(a, env)?, eval(b, env)?);
            let z = if est_reel(a) && est_reel(b) {
                reel(a.re - b.re)
            } else {
                a - b
            };
            sans_depassement(z, &[a, b])?
        }
        Expr::Mul(a, b) => {
            let (a, b) = (eval(a, env)?, eval(b, env)?);
            let z = if est_reel(a) && est_reel(b) {
                reel(a.re * b.re)
            } else {
                a * b
            };
            sans_depassement(z, &[a, b])?
        }
        Expr::Div(a, b) => {
            let (a, b) = (eval(a, env)?, eval(b, env)?);
            if b == C::new(0.0, 0.0) {
                return Err(ErreurCalc::domaine("division par zéro"));
            }
            let z = if est_reel(a) && est_reel(b) {
                reel(a.re / b.re)
            } else {
                a / b
            };
            sans_depassement(z, &[a, b])?
        }
        Expr::Mod(a, b) => {
            let a = reel_requis(eval(a, env)?, "mod")?;
            let b = reel_requis(eval(b, env)?, "mod")?;
            reel(modulo(a, b)?)
        }
        Expr::Pow(a, b) => {
            let (a, b) = (eval(a, env)?, eval(b, env)?);
            sans_depassement(puissance(a, b)?, &[a, b])?
        }

        Expr::Factorielle(a) => reel(factorielle(eval(a, env)?)?),

        Expr::Appel(f, args) => {
            let mut vals = Vec::with_capacity(args.len());
            for a in args {
                vals.push(eval(a, env)?);
            }
            sans_depassement(appel(*f, &vals)?, &vals)?
        }

        Expr::Agregat {
            genre,
            debut,
            fin,
            corps,
        } => agregat(*genre, eval(debut, env)?, eval(fin, env)?, corps, env)?,
    };

    verifier(z, env)
}

/// Modulo à la Python : le reste prend le signe du diviseur.
fn modulo(a: f64, b: f64) -> Resultat<f64> {
    if b == 0.0 {
        return Err(ErreurCalc::domaine("modulo par zéro"));
    }
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        Ok(r + b)
    } else {
        Ok(r)
    }
}

fn puissance(a: C, b: C) -> Resultat<C> {
    let zero = C::new(0.0, 0.0);

    if a == zero {
        if !est_reel(b) {
            return Err(ErreurCalc::domaine("0 élevé à une puissance complexe"));
        }
        if b.re < 0.0 {
            return Err(ErreurCalc::domaine("0 élevé à une puissance négative"));
        }
    }

    if est_reel(a) && est_reel(b) {
        // base négative + exposant fractionnaire => branche complexe
        if a.re >= 0.0 || entier(b.re) {
            return Ok(reel(a.re.powf(b.re)));
        }
        return Ok(a.powc(b));
    }

    if est_reel(b) && entier(b.re) && b.re.abs() <= i32::MAX as f64 {
        return Ok(a.powi(b.re as i32));
    }

    Ok(a.powc(b))
}

fn factorielle(z: C) -> Resultat<f64> {
    let n = reel_requis(z, "factorielle")?;
    if !entier(n) || n < 0.0 {
        return Err(ErreurCalc::domaine(
            "factorielle définie seulement pour les entiers positifs",
        ));
    }

    let mut acc = 1.0_f64;
    let mut k = 2.0;
    while k <= n {
        acc *= k;
        if acc.is_infinite() {
            return Err(ErreurCalc::Evaluation(format!("{n}! dépasse la capacité")));
        }
        k += 1.0;
    }
    Ok(acc)
}

fn appel(f: Fonction, args: &[C]) -> Resultat<C> {
    let z = args
        .first()
        .copied()
        .ok_or_else(|| ErreurCalc::syntaxe(format!("{}() sans argument", f.nom())))?;

    Ok(match f {
        Fonction::Log => {
            let ln = logarithme(z)?;
            match args.get(1) {
                None => ln,
                Some(base) => {
                    let lb = logarithme(*base)?;
                    if lb == C::new(0.0, 0.0) {
                        return Err(ErreurCalc::domaine("logarithme en base 1"));
                    }
                    if est_reel(ln) && est_reel(lb) {
                        reel(ln.re / lb.re)
                    } else {
                        ln / lb
                    }
                }
            }
        }
        Fonction::Sqrt => {
            if est_reel(z) && z.re >= 0.0 {
                reel(z.re.sqrt())
            } else {
                z.sqrt()
            }
        }
        Fonction::Floor => reel(reel_requis(z, "floor")?.floor()),
        Fonction::Ceil => reel(reel_requis(z, "ceil")?.ceil()),
        Fonction::Sin => {
            if est_reel(z) {
                reel(z.re.sin())
            } else {
                z.sin()
            }
        }
        Fonction::Cos => {
            if est_reel(z) {
                reel(z.re.cos())
            } else {
                z.cos()
            }
        }
        Fonction::Tan => {
            if est_reel(z) {
                reel(z.re.tan())
            } else {
                z.tan()
            }
        }
        Fonction::Round => {
            let v = reel_requis(z, "round")?;
            match args.get(1) {
                None => reel(v.round_ties_even()),
                Some(n) => reel(arrondi(v, reel_requis(*n, "round")?)?),
            }
        }
        Fonction::Abs => reel(z.norm()),
    })
}

fn logarithme(z: C) -> Resultat<C> {
    if z == C::new(0.0, 0.0) {
        return Err(ErreurCalc::domaine("log(0)"));
    }
    if est_reel(z) && z.re > 0.0 {
        Ok(reel(z.re.ln()))
    } else {
        Ok(z.ln())
    }
}

/// round(v, n) : n décimales, demi vers le pair.
fn arrondi(v: f64, n: f64) -> Resultat<f64> {
    if !entier(n) {
        return Err(ErreurCalc::domaine("round : nombre de décimales non entier"));
    }
    if !v.is_finite() {
        return Ok(v);
    }
    let echelle = 10f64.powi(n.clamp(-308.0, 308.0) as i32);
    let r = (v * echelle).round_ties_even() / echelle;
    // échelle trop grande : la valeur est déjà exacte
    Ok(if r.is_finite() { r } else { v })
}

fn agregat(genre: Agregat, debut: C, fin: C, corps: &Expr, env: Env) -> Resultat<C> {
    let debut = reel_requis(debut, genre.nom())?;
    let fin = reel_requis(fin, genre.nom())?;
    if !entier(debut) || !entier(fin) {
        return Err(ErreurCalc::domaine(format!(
            "{} : bornes non entières",
            genre.nom()
        )));
    }
    if debut.abs() > BORNE_AGREGAT || fin.abs() > BORNE_AGREGAT {
        return Err(ErreurCalc::Evaluation(format!(
            "{} : bornes hors de la plage entière exacte",
            genre.nom()
        )));
    }
    // exact : |bornes| <= 2^53
    let (debut, fin) = (debut as i64, fin as i64);
    if fin - debut > ITERATIONS_MAX {
        return Err(ErreurCalc::Evaluation(format!(
            "{} : intervalle trop grand",
            genre.nom()
        )));
    }

    let mut acc = match genre {
        Agregat::Somme => reel(0.0),
        Agregat::Produit => reel(1.0),
    };

    for k in debut..=fin {
        let v = eval(corps, Env { x: Some(reel(k as f64)), ..env })?;
        let avant = acc;
        acc = match genre {
            Agregat::Somme if est_reel(acc) && est_reel(v) => reel(acc.re + v.re),
            Agregat::Produit if est_reel(acc) && est_reel(v) => reel(acc.re * v.re),
            Agregat::Somme => acc + v,
            Agregat::Produit => acc * v,
        };
        acc = verifier(sans_depassement(acc, &[avant, v])?, env)?;
    }

    Ok(acc)
}

/* ------------------------ Points d'entrée ------------------------ */

/// Entrée -> arbre, via la normalisation du mode.
pub fn compiler(entree: &str, mode: Mode) -> Resultat<(Expr, DemarcheNoyau)> {
    let n = normaliser(entree, mode)?;
    let rpn = to_rpn(&n)?;
    let expr = analyser(&n)?;

    let d = DemarcheNoyau {
        normalisee: n.to_string(),
        rpn: format_rpn(&rpn),
        arbre: expr.to_string(),
    };
    Ok((expr, d))
}

/// Calculate : `"{entrée embellie} = {résultat}"`.
pub fn calculer(entree: &str, reglages: &Reglages) -> Resultat<String> {
    calculer_detaille(entree, reglages).map(|(s, _)| s)
}

pub fn calculer_detaille(entree: &str, reglages: &Reglages) -> Resultat<(String, DemarcheNoyau)> {
    let entree = entree.trim();
    if entree.is_empty() {
        return Err(ErreurCalc::ArgumentInvalide("expression".into()));
    }

    let (expr, d) = compiler(&entree.to_lowercase(), Mode::Calcul)?;
    let z = evaluer(&expr, Mode::Calcul, None)?;
    debug!(arbre = %d.arbre, resultat = %z, "calcul");

    let sortie = format_complexe(z, reglages.tolerance_zero);
    Ok((format!("{} = {sortie}", embellir(entree)), d))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(s: &str) -> String {
        calculer(s, &Reglages::default()).unwrap_or_else(|e| panic!("calculer({s:?}) erreur: {e}"))
    }

    /// Partie droite de "entrée = résultat".
    fn resultat(s: &str) -> String {
        let sortie = calc(s);
        sortie
            .rsplit_once(" = ")
            .map(|(_, r)| r.to_string())
            .unwrap_or(sortie)
    }

    fn erreur(s: &str) -> ErreurCalc {
        match calculer(s, &Reglages::default()) {
            Ok(v) => panic!("attendu une erreur pour {s:?}, obtenu {v:?}"),
            Err(e) => e,
        }
    }

    fn assert_proche(a: f64, b: f64) {
        if (a - b).abs() > 1e-9 * b.abs().max(1.0) {
            panic!("attendu {b}, obtenu {a}");
        }
    }

    #[test]
    fn scenario_puissance() {
        assert_eq!(calc("2^3"), "2^3 = 8");
    }

    #[test]
    fn multiplication_implicite() {
        assert_eq!(resultat("2(3+1)"), "8");
        assert_eq!(resultat("(1+2)(3)"), "9");
        assert_eq!(resultat("2pi"), resultat("2*pi"));
        assert_eq!(resultat("log(100, 10)"), "2");
    }

    #[test]
    fn factorielles() {
        assert_eq!(resultat("(3+2)!"), "120");
        assert_eq!(resultat("3!!"), "720");
        assert_eq!(resultat("2^3!"), "64");
        assert_eq!(resultat("0!"), "1");
        assert!(matches!(erreur("2.5!"), ErreurCalc::Domaine(_)));
        assert!(matches!(erreur("(-1)!"), ErreurCalc::Domaine(_)));
        assert!(matches!(erreur("171!"), ErreurCalc::Evaluation(_)));
    }

    #[test]
    fn agregats() {
        assert_eq!(resultat("sum(1, 4, x^2)"), "30");
        assert_eq!(resultat("product(1, 5, x)"), "120");
        // intervalle vide : élément neutre
        assert_eq!(resultat("sum(5, 1, x)"), "0");
        assert_eq!(resultat("product(5, 1, x)"), "1");
        assert_eq!(resultat("sum(1, 3, sum(1, 2, 1))"), "6");
        assert!(matches!(erreur("sum(1, 2.5, x)"), ErreurCalc::Domaine(_)));
        assert_eq!(erreur("sum(1, 3)"), ErreurCalc::AgregatMalForme(0));
    }

    #[test]
    fn complexes() {
        assert_eq!(resultat("sqrt(-4)"), "2i");
        assert_eq!(resultat("i^2"), "-1");
        assert_eq!(resultat("(1+i)(1-i)"), "2");
        assert_eq!(resultat("2+3i"), "2+3i");
        assert_eq!(resultat("log(-1)"), format!("{}i", std::f64::consts::PI));
    }

    #[test]
    fn infinis() {
        assert_eq!(resultat("inf"), "∞");
        assert_eq!(resultat("-inf"), "-∞");
        assert_eq!(resultat("inf + 1"), "∞");
        assert!(matches!(erreur("inf - inf"), ErreurCalc::Domaine(_)));
    }

    #[test]
    fn agregat_bornes_au_dela_de_2_puissance_53() {
        assert!(matches!(
            erreur("sum(10000000000000000, 10000000000000002, 1)"),
            ErreurCalc::Evaluation(_)
        ));
        assert_eq!(resultat("sum(9007199254740990, 9007199254740992, 0)"), "0");
        assert_eq!(resultat("sum(-2, 2, x)"), "0");
    }

    #[test]
    fn depassement_de_capacite() {
        assert!(matches!(erreur("10^400"), ErreurCalc::Evaluation(_)));
        let grand = format!("1{}", "0".repeat(308));
        assert!(matches!(erreur(&format!("{grand} * 10")), ErreurCalc::Evaluation(_)));
        assert!(matches!(erreur(&format!("{grand} + {grand}")), ErreurCalc::Evaluation(_)));
        assert!(matches!(erreur("product(1, 200, 10^300)"), ErreurCalc::Evaluation(_)));
        // infini saisi : toujours permis
        assert_eq!(resultat("inf * 2"), "∞");
    }

    #[test]
    fn domaines() {
        assert!(matches!(erreur("1/0"), ErreurCalc::Domaine(_)));
        assert!(matches!(erreur("5 mod 0"), ErreurCalc::Domaine(_)));
        assert!(matches!(erreur("0^-1"), ErreurCalc::Domaine(_)));
        assert!(matches!(erreur("log(0)"), ErreurCalc::Domaine(_)));
        assert!(matches!(erreur("floor(i)"), ErreurCalc::Domaine(_)));
    }

    #[test]
    fn modulo_signe_du_diviseur() {
        assert_eq!(resultat("7 mod 3"), "1");
        assert_eq!(resultat("-7 mod 3"), "2");
        assert_eq!(resultat("7 % -3"), "-2");
    }

    #[test]
    fn arrondis() {
        assert_eq!(resultat("round(2.5)"), "2");
        assert_eq!(resultat("round(3.5)"), "4");
        assert_eq!(resultat("round(3.14159, 2)"), "3.14");
        assert_eq!(resultat("floor(-1.5)"), "-2");
        assert_eq!(resultat("ceil(1.2)"), "2");
        assert_eq!(resultat("abs(3+4i)"), "5");
    }

    #[test]
    fn constantes_et_trig() {
        let (expr, _) = compiler("sin(pi/2) + cos(0)", Mode::Calcul).unwrap();
        assert_proche(evaluer(&expr, Mode::Calcul, None).unwrap().re, 2.0);

        let (expr, _) = compiler("2lambda", Mode::Calcul).unwrap();
        assert_proche(evaluer(&expr, Mode::Calcul, None).unwrap().re, 2.0 * 1.303577269034);
    }

    #[test]
    fn mode_graphe_reel_seulement() {
        let (expr, _) = compiler("sqrt(x)", Mode::Graphe).unwrap();
        let v = evaluer(&expr, Mode::Graphe, Some(reel(4.0))).unwrap();
        assert_eq!(v, reel(2.0));
        assert!(matches!(
            evaluer(&expr, Mode::Graphe, Some(reel(-4.0))),
            Err(ErreurCalc::Domaine(_))
        ));
    }

    #[test]
    fn entree_embellie() {
        assert_eq!(calc("sqrt(16) + 0*pi"), "√(16) + 0*π = 4");
        assert_eq!(calc("  SQRT(4) "), "SQRT(4) = 2");
    }

    #[test]
    fn erreurs_typees() {
        assert_eq!(erreur("2 + foo"), ErreurCalc::MotIllegal("foo".into()));
        assert_eq!(erreur("2x"), ErreurCalc::AgregatMalForme(1));
        assert!(matches!(erreur("   "), ErreurCalc::ArgumentInvalide(_)));
        assert!(matches!(erreur("(2"), ErreurCalc::Syntaxe(_)));
    }

    #[test]
    fn demarche_renseignee() {
        let (_, d) = calculer_detaille("2(3+1)", &Reglages::default()).unwrap();
        assert_eq!(d.normalisee, "2*(3+1)");
        assert_eq!(d.rpn, "2 3 1 + *");
        assert_eq!(d.arbre, "(2 * (3 + 1))");
    }
}
