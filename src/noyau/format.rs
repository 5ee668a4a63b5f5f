// src/noyau/format.rs
//
// Affichage des résultats :
// - réels : entier si valeur entière (< 1e16), sinon forme courte “aller-retour”
// - complexes : composantes quasi nulles effacées (tolérance), infinis en ∞
// - embellissement de l'entrée utilisateur (pi -> π, sqrt -> √, x -> 𝓍 ...)

use num_complex::Complex64;

/// Au-delà, une valeur entière s'affiche en notation exposant.
const LIMITE_ENTIER: f64 = 1e16;

/* ------------------------ Flottants ------------------------ */

fn forme_exposant(v: f64) -> bool {
    let a = v.abs();
    a != 0.0 && !(1e-4..LIMITE_ENTIER).contains(&a)
}

/// (mantisse, exposant) de la forme la plus courte : 1.5e-5 -> ("1.5", -5).
fn mantisse_exposant(v: f64) -> (String, i32) {
    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((m, e)) => (m.to_string(), e.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

/// Forme courte aller-retour, exposant signé sur deux chiffres hors de [1e-4, 1e16).
///
/// 3.0 -> "3.0", 0.1 -> "0.1", 1e16 -> "1e+16", 1.5e-5 -> "1.5e-05"
pub fn repr_f64(v: f64) -> String {
    if v.is_nan() {
        return "nan".into();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf".into() } else { "-inf".into() };
    }

    if forme_exposant(v) {
        let (m, e) = mantisse_exposant(v);
        let signe = if e < 0 { '-' } else { '+' };
        return format!("{m}e{signe}{:02}", e.abs());
    }

    let s = format!("{v}");
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

/// Composante d'un complexe : comme `repr_f64`, sans le “.0” final.
fn repr_composante(v: f64) -> String {
    let s = repr_f64(v);
    match s.strip_suffix(".0") {
        Some(court) => court.to_string(),
        None => s,
    }
}

/// Réel affiché : ∞ / -∞, entier si la valeur l'est, sinon forme courte.
pub fn format_reel(v: f64) -> String {
    if v.is_infinite() {
        return if v > 0.0 { "∞".into() } else { "-∞".into() };
    }
    // -0.0 -> 0
    let v = v + 0.0;
    if v.fract() == 0.0 && v.abs() < LIMITE_ENTIER {
        return format!("{v:.0}");
    }
    repr_f64(v)
}

/// Valeur d'une conversion : l'exposant devient “ • 10^” (sans '+', sans zéros de tête).
pub fn format_glyphe_exposant(v: f64) -> String {
    if v.is_finite() && forme_exposant(v) {
        let (m, e) = mantisse_exposant(v);
        return format!("{m} • 10^{e}");
    }
    repr_f64(v)
}

/* ------------------------ Complexes ------------------------ */

fn infini(v: f64) -> &'static str {
    if v > 0.0 {
        "∞"
    } else {
        "-∞"
    }
}

fn partie_imaginaire(re: &str, im: f64) -> String {
    if im.is_infinite() {
        let signe = if im > 0.0 { '+' } else { '-' };
        return format!("{re}{signe}∞i");
    }
    if im < 0.0 {
        format!("{re}-{}i", repr_composante(-im))
    } else {
        format!("{re}+{}i", repr_composante(im))
    }
}

/// Complexe affiché, composantes quasi nulles effacées.
///
/// 2+0i -> "2", 0+2i -> "2i", 1-2i -> "1-2i", ∞-∞i -> "∞-∞i", 0+∞i -> "0+∞i"
pub fn format_complexe(z: Complex64, tolerance: f64) -> String {
    if z.im.abs() <= tolerance {
        return format_reel(z.re);
    }

    if z.re.is_infinite() {
        return partie_imaginaire(infini(z.re), z.im);
    }

    if z.re.abs() <= tolerance {
        if z.im.is_infinite() {
            return partie_imaginaire("0", z.im);
        }
        return format!("{}i", repr_composante(z.im));
    }

    partie_imaginaire(&repr_composante(z.re), z.im)
}

/// Solution d'équation : `a`, `a + b*i`, `b*i` (notation des solveurs symboliques).
pub fn format_solution(z: Complex64, tolerance: f64) -> String {
    solution_avec_unite(z, tolerance, "i")
}

/// Idem avec `𝑖` ; les parties numériques (1e+20...) ne passent pas par `embellir`.
pub fn format_solution_glyphe(z: Complex64, tolerance: f64) -> String {
    solution_avec_unite(z, tolerance, "𝑖")
}

fn solution_avec_unite(z: Complex64, tolerance: f64, unite: &str) -> String {
    if z.im.abs() <= tolerance {
        return format_reel(z.re);
    }

    let im = if (z.im.abs() - 1.0).abs() <= tolerance {
        unite.to_string()
    } else {
        format!("{}*{unite}", format_reel(z.im.abs()))
    };

    if z.re.abs() <= tolerance {
        return if z.im < 0.0 { format!("-{im}") } else { im };
    }

    let signe = if z.im < 0.0 { '-' } else { '+' };
    format!("{} {signe} {im}", format_reel(z.re))
}

/* ------------------------ Embellissement ------------------------ */

const GLYPHES: &[(&str, &str)] = &[
    ("pi", "π"),
    ("alpha", "α"),
    ("delta", "δ"),
    ("theta", "θ"),
    ("tau", "τ"),
    ("phi", "φ"),
    ("gamma", "γ"),
    ("lambda", "λ"),
    ("psi", "ψ"),
    ("rho", "ρ"),
    ("inf", "∞"),
    ("sum", "Σ"),
    ("product", "∏"),
    ("sqrt", "√"),
    ("x", "𝓍"),
    ("i", "𝑖"),
    ("e", "𝑒"),
];

fn glyphe(mot: &str) -> Option<&'static str> {
    GLYPHES.iter().find(|(m, _)| *m == mot).map(|(_, g)| *g)
}

/// Remplace les mots connus par leur glyphe. Mot entier seulement : `ceil` reste `ceil`.
pub fn embellir(entree: &str) -> String {
    let mut out = String::with_capacity(entree.len());
    let mut mot = String::new();

    for c in entree.chars() {
        if c.is_alphabetic() {
            mot.push(c);
        } else {
            vider_mot(&mut mot, &mut out);
            out.push(c);
        }
    }
    vider_mot(&mut mot, &mut out);

    out
}

fn vider_mot(mot: &mut String, out: &mut String) {
    if !mot.is_empty() {
        out.push_str(glyphe(mot.as_str()).unwrap_or(mot.as_str()));
        mot.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-11;

    #[test]
    fn repr_comme_les_flottants_courts() {
        assert_eq!(repr_f64(3.0), "3.0");
        assert_eq!(repr_f64(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(repr_f64(1e16), "1e+16");
        assert_eq!(repr_f64(1.5e-5), "1.5e-05");
        assert_eq!(repr_f64(0.0001), "0.0001");
        assert_eq!(repr_f64(-2.5e20), "-2.5e+20");
    }

    #[test]
    fn reels_entiers_sans_point() {
        assert_eq!(format_reel(8.0), "8");
        assert_eq!(format_reel(-0.0), "0");
        assert_eq!(format_reel(2.5), "2.5");
        assert_eq!(format_reel(f64::INFINITY), "∞");
        assert_eq!(format_reel(f64::NEG_INFINITY), "-∞");
        assert_eq!(format_reel(1e20), "1e+20");
    }

    #[test]
    fn complexes_composantes_effacees() {
        assert_eq!(format_complexe(Complex64::new(2.0, 1e-13), TOL), "2");
        assert_eq!(format_complexe(Complex64::new(1e-13, 2.0), TOL), "2i");
        assert_eq!(format_complexe(Complex64::new(1.0, -2.0), TOL), "1-2i");
        assert_eq!(format_complexe(Complex64::new(1.5, 0.5), TOL), "1.5+0.5i");
    }

    #[test]
    fn complexes_infinis() {
        let inf = f64::INFINITY;
        assert_eq!(format_complexe(Complex64::new(inf, inf), TOL), "∞+∞i");
        assert_eq!(format_complexe(Complex64::new(-inf, -inf), TOL), "-∞-∞i");
        assert_eq!(format_complexe(Complex64::new(inf, -inf), TOL), "∞-∞i");
        assert_eq!(format_complexe(Complex64::new(-inf, inf), TOL), "-∞+∞i");
        assert_eq!(format_complexe(Complex64::new(inf, 2.0), TOL), "∞+2i");
        assert_eq!(format_complexe(Complex64::new(3.0, -inf), TOL), "3-∞i");
        assert_eq!(format_complexe(Complex64::new(0.0, inf), TOL), "0+∞i");
        assert_eq!(format_complexe(Complex64::new(1e-13, -inf), TOL), "0-∞i");
    }

    #[test]
    fn solutions_style_symbolique() {
        assert_eq!(format_solution(Complex64::new(-2.0, 0.0), TOL), "-2");
        assert_eq!(format_solution(Complex64::new(0.0, 1.0), TOL), "i");
        assert_eq!(format_solution(Complex64::new(0.0, -2.0), TOL), "-2*i");
        assert_eq!(format_solution(Complex64::new(1.0, -1.0), TOL), "1 - i");
    }

    #[test]
    fn solutions_glyphe_exposant_intact() {
        assert_eq!(format_solution_glyphe(Complex64::new(1e20, 0.0), TOL), "1e+20");
        assert_eq!(format_solution_glyphe(Complex64::new(2.5e-7, -3.0), TOL), "2.5e-07 - 3*𝑖");
        assert_eq!(format_solution_glyphe(Complex64::new(0.0, 1.0), TOL), "𝑖");
    }

    #[test]
    fn glyphe_exposant_sans_plus() {
        assert_eq!(format_glyphe_exposant(1.5e20), "1.5 • 10^20");
        assert_eq!(format_glyphe_exposant(2e-7), "2 • 10^-7");
        assert_eq!(format_glyphe_exposant(3.28084), "3.28084");
    }

    #[test]
    fn embellissement_par_mot_entier() {
        assert_eq!(embellir("2^3"), "2^3");
        assert_eq!(embellir("sqrt(pi) + 2x"), "√(π) + 2𝓍");
        assert_eq!(embellir("ceil(e)"), "ceil(𝑒)");
        assert_eq!(embellir("sin(x)"), "sin(𝓍)");
        assert_eq!(embellir("sum(1, 3, x)"), "Σ(1, 3, 𝓍)");
    }
}
