//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : toute entrée donne Ok ou une ErreurCalc, jamais de panique ni de "NaN" affiché

use std::time::{Duration, Instant};

use super::{
    calculer, convertir, resoudre, scientifique, tracer, ErreurCalc, Resultat, TableUnites,
    TauxFixes,
};
use crate::config::Reglages;
use crate::noyau::trace::Rendu;

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
    fn choisir<'a>(&mut self, choix: &[&'a str]) -> &'a str {
        choix[self.pick(choix.len() as u32) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Générateurs ------------------------ */

const ATOMES: &[&str] = &["1", "2", "3", "7", "0.5", "10", "pi", "e", "i", "x", "0"];
const FONCTIONS: &[&str] = &["sqrt", "sin", "cos", "tan", "log", "abs", "floor", "round"];
const OPERATEURS: &[&str] = &["+", "-", "*", "/", "^", " mod ", "%"];

/// Expression aléatoire, profondeur bornée (implicites et factorielles comprises).
fn gen_expr(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 {
        return rng.choisir(ATOMES).to_string();
    }
    match rng.pick(7) {
        0 => rng.choisir(ATOMES).to_string(),
        1 => format!("({})", gen_expr(rng, profondeur - 1)),
        2 => format!("{}({})", rng.choisir(FONCTIONS), gen_expr(rng, profondeur - 1)),
        3 => format!("{}!", rng.choisir(&["3", "4", "(2+1)", "0"])),
        4 => format!("{}{}", rng.choisir(&["2", "3", "pi"]), rng.choisir(&["x", "pi", "(1+1)", "i"])),
        5 => format!("sum(1, {}, {})", rng.pick(6), gen_expr(rng, profondeur - 1)),
        _ => format!(
            "{}{}{}",
            gen_expr(rng, profondeur - 1),
            rng.choisir(OPERATEURS),
            gen_expr(rng, profondeur - 1)
        ),
    }
}

/// Bruit : caractères hors grammaire, parenthèses orphelines, mots inconnus.
fn gen_bruit(rng: &mut Rng) -> String {
    let morceaux = ["(", ")", "=", "foo", "x", "2", ",", "!", "^^", "..", " ", "sqrt", "*", "#"];
    (0..=rng.pick(8)).map(|_| morceaux[rng.pick(morceaux.len() as u32) as usize]).collect()
}

fn verifier_sortie(quoi: &str, entree: &str, r: &Resultat<String>) {
    if let Ok(s) = r {
        assert!(!s.contains("NaN") && !s.contains("nan"), "{quoi}({entree:?}) -> {s:?}");
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_chiffre_op_chiffre() {
    let mut rng = Rng::new(0xC0FFEE);
    let r = Reglages::default();
    let start = Instant::now();

    for _ in 0..2000 {
        let (a, b) = (rng.pick(10), rng.pick(10));
        let op = rng.choisir(&["+", "-", "*", "/"]);
        let espace = if rng.coin() { " " } else { "" };
        let entree = format!("{a}{espace}{op}{espace}{b}");

        let (x, y) = (a as f64, b as f64);
        let direct = match op {
            "+" => x + y,
            "-" => x - y,
            "*" => x * y,
            _ => x / y,
        };

        match calculer(&entree, &r) {
            Ok(s) => {
                let (_, v) = s.split_once(" = ").unwrap_or_else(|| panic!("{s:?}"));
                assert_eq!(v.parse::<f64>().unwrap(), direct, "{entree}");
            }
            Err(e) => assert!(op == "/" && b == 0 && matches!(e, ErreurCalc::Domaine(_)), "{entree}: {e}"),
        }
        budget(start, Duration::from_secs(5));
    }
}

#[test]
fn fuzz_calcul_sans_panique() {
    let mut rng = Rng::new(42);
    let r = Reglages::default();
    let start = Instant::now();

    for k in 0..1500 {
        let entree = if k % 5 == 0 { gen_bruit(&mut rng) } else { gen_expr(&mut rng, 3) };
        let res = calculer(&entree, &r);
        verifier_sortie("calculer", &entree, &res);
        budget(start, Duration::from_secs(10));
    }
}

#[test]
fn fuzz_deterministe() {
    let r = Reglages::default();
    let lancer = |seed| {
        let mut rng = Rng::new(seed);
        (0..200)
            .map(|_| calculer(&gen_expr(&mut rng, 3), &r))
            .collect::<Vec<_>>()
    };
    assert_eq!(lancer(7), lancer(7));
}

#[test]
fn fuzz_resolution_bornee() {
    let mut rng = Rng::new(1234);
    let r = Reglages::default();
    let start = Instant::now();

    for _ in 0..60 {
        let gauche = gen_expr(&mut rng, 2);
        let droite = rng.choisir(&["0", "1", "x", "4", "-2"]);
        let entree = format!("{gauche} = {droite}");
        let res = resoudre(&entree, &r);
        verifier_sortie("resoudre", &entree, &res);
        budget(start, Duration::from_secs(20));
    }
}

#[test]
fn fuzz_scientifique() {
    let mut rng = Rng::new(99);
    let r = Reglages::default();
    let start = Instant::now();

    for _ in 0..500 {
        let mantisse: String = (0..=rng.pick(6)).map(|_| char::from(b'0' + rng.pick(10) as u8)).collect();
        let entree = match rng.pick(4) {
            0 => mantisse.clone(),
            1 => format!("{mantisse}.{}", rng.pick(1000)),
            2 => format!("{mantisse} • 10^{}", rng.pick(4000) as i64 - 2000),
            _ => format!("{mantisse}e{}.{}", rng.pick(40) as i64 - 20, rng.pick(10)),
        };
        let res = scientifique(&entree, &r);
        if let Ok(s) = &res {
            assert!(s.chars().count() < r.limite_sortie, "{entree}");
        }
        verifier_sortie("scientifique", &entree, &res);
        budget(start, Duration::from_secs(5));
    }
}

#[test]
fn fuzz_conversion() {
    let mut rng = Rng::new(2024);
    let table = TableUnites::construire();
    let taux = TauxFixes::default();
    let unites: Vec<&str> = table.unites().collect();
    let start = Instant::now();

    for _ in 0..1000 {
        let de = unites[rng.pick(unites.len() as u32) as usize];
        let vers = if rng.coin() {
            unites[rng.pick(unites.len() as u32) as usize]
        } else {
            rng.choisir(&["meters", "kilograms", "hours", "celsius", "zz", "l", "usd"])
        };
        let valeur = rng.choisir(&["1", "2.5", "-3", "1e3", "abc", ""]);
        let res = convertir(valeur, de, vers, &table, &taux);
        verifier_sortie("convertir", valeur, &res);
        budget(start, Duration::from_secs(5));
    }
}

struct RenduMuet;

impl Rendu for RenduMuet {
    fn rendre(&self, _: f64, _: f64, _: &[(f64, f64)]) -> Resultat<Vec<u8>> {
        Ok(Vec::new())
    }
}

#[test]
fn fuzz_trace_tout_ou_rien() {
    let mut rng = Rng::new(5);
    let r = Reglages::default();
    let start = Instant::now();

    for _ in 0..100 {
        let entree = gen_expr(&mut rng, 2);
        if let Ok(t) = tracer("-3", "3", &entree, &r, &RenduMuet) {
            assert_eq!(t.points.len(), r.points_trace, "{entree}");
            assert!(t.points.iter().all(|(_, y)| !y.is_nan()), "{entree}");
        }
        budget(start, Duration::from_secs(10));
    }
}
