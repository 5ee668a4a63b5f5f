// src/noyau/trace.rs
//
// Plot : échantillonnage de f(x) sur [début, fin] (bornes incluses), puis rendu.
// - le rendu pixel est un collaborateur (trait `Rendu`) ; `RenduSvg` par défaut
// - le premier échantillon en erreur interrompt tout : pas de tracé partiel

use std::fmt::Write as _;

use num_complex::Complex64;
use tracing::debug;

use super::erreur::{ErreurCalc, Resultat};
use super::eval::{compiler, evaluer};
use super::format::embellir;
use super::mode::Mode;
use crate::config::Reglages;

/// Points (x, y) d'une courbe.
pub type Points = Vec<(f64, f64)>;

/// Collaborateur de rendu : transforme les points en image.
pub trait Rendu {
    fn rendre(&self, debut: f64, fin: f64, points: &[(f64, f64)]) -> Resultat<Vec<u8>>;
}

#[derive(Clone, Debug)]
pub struct Trace {
    pub legende: String,
    pub points: Points,
    pub image: Vec<u8>,
}

/// `n` valeurs régulièrement espacées, la dernière valant exactement `fin`.
pub fn linspace(debut: f64, fin: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![debut],
        _ => {
            let pas = (fin - debut) / (n - 1) as f64;
            (0..n)
                .map(|k| if k == n - 1 { fin } else { debut + pas * k as f64 })
                .collect()
        }
    }
}

fn borne(s: &str) -> Resultat<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ErreurCalc::ArgumentInvalide("start/end".into()))
}

/// `𝘧(𝓍) = {entrée embellie}`
pub fn legende(entree: &str) -> String {
    format!("𝘧(𝓍) = {}", embellir(entree.trim()))
}

/// Échantillonne l'expression (mode Graph) ; erreur au premier point invalide.
pub fn echantillonner(debut: &str, fin: &str, entree: &str, n: usize) -> Resultat<(f64, f64, Points)> {
    let (debut, fin) = (borne(debut)?, borne(fin)?);
    if debut >= fin {
        return Err(ErreurCalc::ArgumentInvalide("start, end".into()));
    }

    let entree = entree.trim();
    if entree.is_empty() {
        return Err(ErreurCalc::ArgumentInvalide("formule".into()));
    }

    let (expr, d) = compiler(&entree.to_lowercase(), Mode::Graphe)?;
    debug!(arbre = %d.arbre, n, "échantillonnage");

    let points = linspace(debut, fin, n)
        .into_iter()
        .map(|x| {
            evaluer(&expr, Mode::Graphe, Some(Complex64::new(x, 0.0))).map(|y| (x, y.re))
        })
        .collect::<Resultat<Points>>()?;

    Ok((debut, fin, points))
}

/// Plot : légende + image produite par le collaborateur de rendu.
pub fn tracer(
    debut: &str,
    fin: &str,
    entree: &str,
    reglages: &Reglages,
    rendu: &dyn Rendu,
) -> Resultat<Trace> {
    let (a, b, points) = echantillonner(debut, fin, entree, reglages.points_trace)?;
    let image = rendu.rendre(a, b, &points)?;

    Ok(Trace {
        legende: legende(entree),
        points,
        image,
    })
}

/* ------------------------ Rendu SVG ------------------------ */

/// Fond sombre, grille, courbe bleue, axe x borné à [début, fin].
#[derive(Clone, Debug)]
pub struct RenduSvg {
    pub largeur: f64,
    pub hauteur: f64,
}

impl Default for RenduSvg {
    fn default() -> Self {
        Self {
            largeur: 640.0,
            hauteur: 480.0,
        }
    }
}

const COULEUR_COURBE: &str = "#47a0ff";
const MARGE: f64 = 40.0;
const GRADUATIONS: usize = 8;

impl Rendu for RenduSvg {
    fn rendre(&self, debut: f64, fin: f64, points: &[(f64, f64)]) -> Resultat<Vec<u8>> {
        let finis = points.iter().filter(|(_, y)| y.is_finite());
        let (mut y_min, mut y_max) = finis.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, y)| {
            (lo.min(*y), hi.max(*y))
        });
        if !y_min.is_finite() {
            (y_min, y_max) = (-1.0, 1.0);
        } else if y_min == y_max {
            (y_min, y_max) = (y_min - 1.0, y_max + 1.0);
        }

        let (l, h) = (self.largeur, self.hauteur);
        let px = |x: f64| MARGE + (x - debut) / (fin - debut) * (l - 2.0 * MARGE);
        let py = |y: f64| h - MARGE - (y - y_min) / (y_max - y_min) * (h - 2.0 * MARGE);

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{l}" height="{h}" viewBox="0 0 {l} {h}">"#
        );
        let _ = writeln!(svg, r##"<rect width="100%" height="100%" fill="#000000"/>"##);

        // grille
        for k in 0..=GRADUATIONS {
            let t = k as f64 / GRADUATIONS as f64;
            let gx = MARGE + t * (l - 2.0 * MARGE);
            let gy = MARGE + t * (h - 2.0 * MARGE);
            let _ = writeln!(
                svg,
                r##"<line x1="{gx:.2}" y1="{MARGE}" x2="{gx:.2}" y2="{:.2}" stroke="#444444" stroke-width="1"/>"##,
                h - MARGE
            );
            let _ = writeln!(
                svg,
                r##"<line x1="{MARGE}" y1="{gy:.2}" x2="{:.2}" y2="{gy:.2}" stroke="#444444" stroke-width="1"/>"##,
                l - MARGE
            );
        }

        // bornes lisibles
        let _ = writeln!(
            svg,
            r##"<text x="{MARGE}" y="{:.2}" fill="#cccccc" font-size="12">{debut}</text>"##,
            h - MARGE / 3.0
        );
        let _ = writeln!(
            svg,
            r##"<text x="{:.2}" y="{:.2}" fill="#cccccc" font-size="12" text-anchor="end">{fin}</text>"##,
            l - MARGE,
            h - MARGE / 3.0
        );

        // courbe : un segment par suite de points finis
        let mut segment: Vec<String> = Vec::new();
        let mut segments: Vec<Vec<String>> = Vec::new();
        for (x, y) in points {
            if y.is_finite() {
                segment.push(format!("{:.2},{:.2}", px(*x), py(*y)));
            } else if !segment.is_empty() {
                segments.push(std::mem::take(&mut segment));
            }
        }
        if !segment.is_empty() {
            segments.push(segment);
        }
        for s in segments {
            let _ = writeln!(
                svg,
                r#"<polyline fill="none" stroke="{COULEUR_COURBE}" stroke-width="2" points="{}"/>"#,
                s.join(" ")
            );
        }

        svg.push_str("</svg>\n");
        Ok(svg.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RenduMuet;

    impl Rendu for RenduMuet {
        fn rendre(&self, _: f64, _: f64, points: &[(f64, f64)]) -> Resultat<Vec<u8>> {
            Ok(vec![points.len() as u8])
        }
    }

    #[test]
    fn linspace_bornes_incluses() {
        let xs = linspace(-1.0, 1.0, 5);
        assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(linspace(0.0, 0.3, 250).len(), 250);
        assert_eq!(*linspace(0.0, 0.3, 250).last().unwrap(), 0.3);
    }

    #[test]
    fn trace_legende_et_points() {
        let r = Reglages::default();
        let t = tracer("-10", "10", "x^2", &r, &RenduMuet).unwrap();
        assert_eq!(t.legende, "𝘧(𝓍) = 𝓍^2");
        assert_eq!(t.points.len(), 250);
        assert_eq!(t.points[0], (-10.0, 100.0));
        assert_eq!(t.points[249], (10.0, 100.0));
        assert_eq!(t.image, vec![250]);
    }

    #[test]
    fn bornes_invalides() {
        let r = Reglages::default();
        assert!(matches!(
            tracer("a", "10", "x", &r, &RenduMuet),
            Err(ErreurCalc::ArgumentInvalide(_))
        ));
        assert!(matches!(
            tracer("5", "5", "x", &r, &RenduMuet),
            Err(ErreurCalc::ArgumentInvalide(_))
        ));
        assert!(matches!(
            tracer("0", "1", "  ", &r, &RenduMuet),
            Err(ErreurCalc::ArgumentInvalide(_))
        ));
    }

    #[test]
    fn erreur_au_milieu_de_la_plage() {
        // sqrt(x) échoue dès le premier point négatif, même si la fin de plage est valide
        let r = Reglages::default();
        assert!(matches!(
            tracer("-1", "1", "sqrt(x)", &r, &RenduMuet),
            Err(ErreurCalc::Domaine(_))
        ));
        assert!(matches!(
            tracer("-1", "1", "sum(1, 2, x)", &r, &RenduMuet),
            Err(ErreurCalc::MotIllegal(_))
        ));
    }

    #[test]
    fn svg_produit() {
        let r = Reglages::default();
        let t = tracer("0", "6.28", "sin(x)", &r, &RenduSvg::default()).unwrap();
        let svg = String::from_utf8(t.image).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(COULEUR_COURBE));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
