// src/noyau/resolution.rs
//
// Résolution de `gauche = droite` pour x.
//
// 1) gauche - droite développé en polynôme à coefficients complexes (si possible)
//    - degré 0 : identité ("True") ou contradiction ("False")
//    - degré 1, 2 : formules fermées
//    - degré >= 3 : Durand-Kerner puis polissage de Newton
// 2) sinon : balayage réel de la fenêtre + bissection sur chaque changement de signe
//
// Racines proches d'un entier (1e-9) ramenées à cet entier, triées (re, im).

use num_complex::Complex64;
use tracing::debug;

use super::erreur::{ErreurCalc, Resultat};
use super::eval::evaluer;
use super::expr::Expr;
use super::format::format_solution_glyphe;
use super::jetons::{Jeton, Tok};
use super::mode::Mode;
use super::normalisation::{normaliser, ExpressionNormalisee};
use super::rpn::analyser;
use crate::config::Reglages;

type C = Complex64;
type Poly = Vec<C>;

const DEGRE_MAX: usize = 64;
const SNAP_ENTIER: f64 = 1e-9;
const PAS_BALAYAGE: usize = 4000;

/// Issue d'une résolution.
#[derive(Clone, Debug, PartialEq)]
pub enum Solutions {
    /// Vrai pour tout x.
    Identite,
    Racines(Vec<C>),
}

/* ------------------------ Découpage de l'équation ------------------------ */

fn cote(jetons: &[Jeton]) -> Resultat<Expr> {
    if jetons.is_empty() {
        return Err(ErreurCalc::syntaxe("membre vide autour de '='"));
    }
    analyser(&ExpressionNormalisee {
        mode: Mode::Resolution,
        jetons: jetons.to_vec(),
    })
}

/// Équation -> arbre de `gauche - droite`.
pub fn equation(entree: &str) -> Resultat<Expr> {
    let n = normaliser(entree, Mode::Resolution)?;

    if !n.contient_variable() {
        return Err(ErreurCalc::SansVariable);
    }

    let membres: Vec<&[Jeton]> = n.jetons.split(|j| j.tok == Tok::Egal).collect();
    match membres.len() {
        1 => return Err(ErreurCalc::SansEgal),
        2 => {}
        _ => return Err(ErreurCalc::PlusieursEgal),
    }

    let gauche = cote(membres[0])?;
    let droite = cote(membres[1])?;
    Ok(Expr::Sub(Box::new(gauche), Box::new(droite)))
}

/* ------------------------ Polynômes ------------------------ */

fn zero() -> C {
    C::new(0.0, 0.0)
}

fn constante(e: &Expr) -> Resultat<C> {
    evaluer(e, Mode::Resolution, None)
}

fn somme(p: &[C], q: &[C], signe: f64) -> Poly {
    let n = p.len().max(q.len());
    (0..n)
        .map(|k| {
            let a = p.get(k).copied().unwrap_or_else(zero);
            let b = q.get(k).copied().unwrap_or_else(zero);
            a + b * signe
        })
        .collect()
}

fn produit(p: &[C], q: &[C]) -> Option<Poly> {
    if p.len() + q.len() - 1 > DEGRE_MAX + 1 {
        return None;
    }
    let mut r = vec![zero(); p.len() + q.len() - 1];
    for (i, a) in p.iter().enumerate() {
        for (j, b) in q.iter().enumerate() {
            r[i + j] += *a * *b;
        }
    }
    Some(r)
}

/// Développe l'arbre en polynôme de x (coefficients croissants), None si impossible.
fn polynome(e: &Expr) -> Resultat<Option<Poly>> {
    if !e.contient_var() {
        return Ok(Some(vec![constante(e)?]));
    }

    Ok(match e {
        Expr::Var { .. } => Some(vec![zero(), C::new(1.0, 0.0)]),
        Expr::Neg(a) => polynome(a)?.map(|p| p.into_iter().map(|c| -c).collect()),
        Expr::Add(a, b) => match (polynome(a)?, polynome(b)?) {
            (Some(p), Some(q)) => Some(somme(&p, &q, 1.0)),
            _ => None,
        },
        Expr::Sub(a, b) => match (polynome(a)?, polynome(b)?) {
            (Some(p), Some(q)) => Some(somme(&p, &q, -1.0)),
            _ => None,
        },
        Expr::Mul(a, b) => match (polynome(a)?, polynome(b)?) {
            (Some(p), Some(q)) => produit(&p, &q),
            _ => None,
        },
        Expr::Div(a, b) if !b.contient_var() => {
            let d = constante(b)?;
            if d == zero() {
                return Err(ErreurCalc::domaine("division par zéro"));
            }
            polynome(a)?.map(|p| p.into_iter().map(|c| c / d).collect())
        }
        Expr::Pow(a, b) if !b.contient_var() => {
            let n = constante(b)?;
            let entier_naturel =
                n.im == 0.0 && n.re.fract() == 0.0 && (0.0..=DEGRE_MAX as f64).contains(&n.re);
            match (entier_naturel, polynome(a)?) {
                (true, Some(p)) => {
                    let mut r: Option<Poly> = Some(vec![C::new(1.0, 0.0)]);
                    for _ in 0..n.re as usize {
                        r = r.and_then(|r| produit(&r, &p));
                    }
                    r
                }
                _ => None,
            }
        }
        _ => None,
    })
}

fn horner(p: &[C], z: C) -> C {
    p.iter().rev().fold(zero(), |acc, c| acc * z + *c)
}

fn derivee(p: &[C]) -> Poly {
    p.iter()
        .enumerate()
        .skip(1)
        .map(|(k, c)| *c * k as f64)
        .collect()
}

/// Retire les coefficients de tête négligeables.
fn elaguer(mut p: Poly) -> Poly {
    let echelle = p.iter().map(|c| c.norm()).fold(0.0, f64::max);
    while p.len() > 1 && p.last().is_some_and(|c| c.norm() <= 1e-12 * echelle) {
        p.pop();
    }
    p
}

fn durand_kerner(p: &[C]) -> Vec<C> {
    let n = p.len() - 1;
    let tete = p[n];
    let unitaire: Poly = p.iter().map(|c| *c / tete).collect();

    // points de départ classiques : puissances de 0.4+0.9i
    let graine = C::new(0.4, 0.9);
    let mut racines: Vec<C> = (0..n).map(|k| graine.powu(k as u32)).collect();

    for _ in 0..500 {
        let mut ecart: f64 = 0.0;
        for k in 0..n {
            let zk = racines[k];
            let mut denom = C::new(1.0, 0.0);
            for (j, zj) in racines.iter().enumerate() {
                if j != k {
                    denom *= zk - *zj;
                }
            }
            if denom == zero() {
                denom = C::new(1e-12, 0.0);
            }
            let pas = horner(&unitaire, zk) / denom;
            racines[k] = zk - pas;
            ecart = ecart.max(pas.norm());
        }
        if ecart < 1e-14 {
            break;
        }
    }

    // polissage
    let d = derivee(p);
    racines
        .into_iter()
        .map(|mut z| {
            for _ in 0..3 {
                let dz = horner(&d, z);
                if dz == zero() {
                    break;
                }
                let suivant = z - horner(p, z) / dz;
                if !(suivant.re.is_finite() && suivant.im.is_finite()) {
                    break;
                }
                z = suivant;
            }
            z
        })
        .collect()
}

fn racines_polynome(p: Poly) -> Solutions {
    let mut p = elaguer(p);

    if p.len() == 1 {
        return if p[0].norm() <= 1e-12 {
            Solutions::Identite
        } else {
            Solutions::Racines(Vec::new())
        };
    }

    // racine 0 exacte : on factorise x
    let mut racines = Vec::new();
    while p.len() > 1 && p[0] == zero() {
        p.remove(0);
        racines.push(zero());
    }

    match p.len() {
        1 => {}
        2 => racines.push(-p[0] / p[1]),
        3 => {
            let (a, b, c) = (p[2], p[1], p[0]);
            let disc = (b * b - a * c * 4.0).sqrt();
            racines.push((-b - disc) / (a * 2.0));
            racines.push((-b + disc) / (a * 2.0));
        }
        _ => racines.extend(durand_kerner(&p)),
    }

    Solutions::Racines(racines)
}

/* ------------------------ Balayage réel ------------------------ */

fn valeur_reelle(f: &Expr, x: f64, tolerance: f64) -> Option<f64> {
    match evaluer(f, Mode::Resolution, Some(C::new(x, 0.0))) {
        Ok(z) if z.im.abs() <= tolerance && z.re.is_finite() => Some(z.re),
        _ => None,
    }
}

fn bissection(f: &Expr, mut a: f64, mut b: f64, fa: f64, tolerance: f64) -> Option<f64> {
    let mut signe_a = fa < 0.0;
    for _ in 0..200 {
        let m = 0.5 * (a + b);
        let fm = valeur_reelle(f, m, tolerance)?;
        if fm == 0.0 {
            return Some(m);
        }
        if (fm < 0.0) == signe_a {
            a = m;
            signe_a = fm < 0.0;
        } else {
            b = m;
        }
    }
    Some(0.5 * (a + b))
}

fn balayage(f: &Expr, fenetre: [f64; 2], tolerance: f64) -> Vec<C> {
    let [debut, fin] = fenetre;
    let pas = (fin - debut) / PAS_BALAYAGE as f64;
    let mut racines = Vec::new();

    let mut prec: Option<(f64, f64)> = None;
    for k in 0..=PAS_BALAYAGE {
        let x = debut + pas * k as f64;
        let Some(fx) = valeur_reelle(f, x, tolerance) else {
            prec = None;
            continue;
        };

        if fx == 0.0 {
            racines.push(x);
        } else if let Some((xp, fp)) = prec {
            if fp != 0.0 && (fp < 0.0) != (fx < 0.0) {
                if let Some(r) = bissection(f, xp, x, fp, tolerance) {
                    // un pôle change aussi de signe : on exige |f(r)| petit
                    if valeur_reelle(f, r, tolerance).is_some_and(|v| v.abs() < 1e-6) {
                        racines.push(r);
                    }
                }
            }
        }
        prec = Some((x, fx));
    }

    racines.into_iter().map(|r| C::new(r, 0.0)).collect()
}

/* ------------------------ Finition ------------------------ */

fn arrondir(v: f64) -> f64 {
    let r = v.round();
    if (v - r).abs() < SNAP_ENTIER {
        r + 0.0
    } else {
        v
    }
}

fn finir(racines: Vec<C>) -> Vec<C> {
    let mut r: Vec<C> = racines
        .into_iter()
        .filter(|z| z.re.is_finite() && z.im.is_finite())
        .map(|z| C::new(arrondir(z.re), arrondir(z.im)))
        .collect();

    r.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));
    r.dedup_by(|a, b| (*a - *b).norm() <= 1e-7 * (1.0 + b.norm()));
    r
}

/// Résout l'équation (déjà en minuscules).
pub fn solutions(entree: &str, reglages: &Reglages) -> Resultat<Solutions> {
    let f = equation(entree)?;

    let s = match polynome(&f)? {
        Some(p) => {
            debug!(degre = p.len().saturating_sub(1), "équation polynomiale");
            racines_polynome(p)
        }
        None => {
            debug!(fenetre = ?reglages.fenetre_resolution, "balayage numérique");
            Solutions::Racines(balayage(
                &f,
                reglages.fenetre_resolution,
                reglages.tolerance_zero,
            ))
        }
    };

    Ok(match s {
        Solutions::Identite => Solutions::Identite,
        Solutions::Racines(r) => Solutions::Racines(finir(r)),
    })
}

/// Solve : `"𝓍 = a ∨ 𝓍 = b"`, `"False"` sans solution, `"True"` pour une identité.
pub fn resoudre(entree: &str, reglages: &Reglages) -> Resultat<String> {
    let entree = entree.trim();
    if entree.is_empty() {
        return Err(ErreurCalc::ArgumentInvalide("équation".into()));
    }

    Ok(match solutions(&entree.to_lowercase(), reglages)? {
        Solutions::Identite => "True".into(),
        Solutions::Racines(r) if r.is_empty() => "False".into(),
        Solutions::Racines(r) => r
            .iter()
            .map(|z| format!("𝓍 = {}", format_solution_glyphe(*z, reglages.tolerance_zero)))
            .collect::<Vec<_>>()
            .join(" ∨ "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn res(s: &str) -> String {
        resoudre(s, &Reglages::default()).unwrap_or_else(|e| panic!("resoudre({s:?}) erreur: {e}"))
    }

    fn racines(s: &str) -> Vec<C> {
        match solutions(s, &Reglages::default()).unwrap() {
            Solutions::Racines(r) => r,
            Solutions::Identite => panic!("identité inattendue pour {s:?}"),
        }
    }

    #[test]
    fn scenario_carre() {
        assert_eq!(res("x^2=4"), "𝓍 = -2 ∨ 𝓍 = 2");
    }

    #[test]
    fn premier_degre() {
        assert_eq!(res("2x + 1 = 7"), "𝓍 = 3");
        assert_eq!(res("x/4 = 2"), "𝓍 = 8");
    }

    #[test]
    fn racines_complexes() {
        assert_eq!(res("x^2 = -1"), "𝓍 = -𝑖 ∨ 𝓍 = 𝑖");
        assert_eq!(res("x = 2i"), "𝓍 = 2*𝑖");
    }

    #[test]
    fn racine_en_notation_exposant() {
        assert_eq!(res("x = 100000000000000000000"), "𝓍 = 1e+20");
    }

    #[test]
    fn racine_double_unique() {
        assert_eq!(res("(x-1)^2 = 0"), "𝓍 = 1");
    }

    #[test]
    fn degre_superieur() {
        assert_eq!(res("x^3 - 6x^2 + 11x - 6 = 0"), "𝓍 = 1 ∨ 𝓍 = 2 ∨ 𝓍 = 3");
        let r = racines("x^4 = 16");
        assert_eq!(r.len(), 4);
        assert!(r.contains(&C::new(2.0, 0.0)));
        assert!(r.contains(&C::new(0.0, -2.0)));
    }

    #[test]
    fn identite_et_contradiction() {
        assert_eq!(res("x = x"), "True");
        assert_eq!(res("x + 1 = x"), "False");
    }

    #[test]
    fn balayage_non_polynomial() {
        assert_eq!(res("sqrt(x) = 2"), "𝓍 = 4");
        let r = racines("sin(x) = 0");
        assert!(r.iter().any(|z| z.re == 0.0));
        assert!(r.iter().any(|z| (z.re - std::f64::consts::PI).abs() < 1e-9));
    }

    #[test]
    fn constantes_substituees() {
        let r = racines("x = 2pi");
        assert_eq!(r.len(), 1);
        assert!((r[0].re - std::f64::consts::TAU).abs() < 1e-12);
    }

    #[test]
    fn erreurs_de_forme() {
        let r = Reglages::default();
        assert_eq!(resoudre("2 = 3", &r), Err(ErreurCalc::SansVariable));
        assert_eq!(resoudre("x + 2", &r), Err(ErreurCalc::SansEgal));
        assert_eq!(resoudre("x = 1 = 2", &r), Err(ErreurCalc::PlusieursEgal));
        assert_eq!(resoudre("floor(x) = 1", &r), Err(ErreurCalc::MotIllegal("floor".into())));
        assert!(matches!(resoudre("x =", &r), Err(ErreurCalc::Syntaxe(_))));
    }
}
