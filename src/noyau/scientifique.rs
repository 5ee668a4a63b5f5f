// src/noyau/scientifique.rs
//
// Notation scientifique, dans les deux sens :
// - "1.5 • 10^3" (ou *10^, x10^, ×10^, e) -> "1,500"
// - "1500" -> "1.5 • 10^3"

use num_rational::BigRational;
use num_traits::Zero;
use tracing::debug;

use super::erreur::{ErreurCalc, Resultat};
use super::lecture::{decimal_groupe, pow10, rationnel_decimal, rationnel_f64};
use crate::config::Reglages;

/// Mantisse (un chiffre avant la virgule, sans zéro final) et exposant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormeScientifique {
    pub negatif: bool,
    pub mantisse: String,
    pub exposant: i64,
}

impl std::fmt::Display for FormeScientifique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let signe = if self.negatif { "-" } else { "" };
        write!(f, "{signe}{} • 10^{}", self.mantisse, self.exposant)
    }
}

const MARQUEURS: &[&str] = &["*10^", "x10^", "•10^", "×10^", "·10^"];

fn invalide(entree: &str) -> ErreurCalc {
    ErreurCalc::ArgumentInvalide(entree.to_string())
}

/// Nombre écrit en clair -> forme scientifique.
pub fn vers_scientifique(litteral: &str) -> Resultat<FormeScientifique> {
    let (negatif, corps) = match litteral.strip_prefix('-') {
        Some(c) => (true, c),
        None => (false, litteral.strip_prefix('+').unwrap_or(litteral)),
    };

    let (ent, frac) = corps.split_once('.').unwrap_or((corps, ""));
    let valide = !(ent.is_empty() && frac.is_empty())
        && ent.bytes().chain(frac.bytes()).all(|c| c.is_ascii_digit());
    if !valide {
        return Err(invalide(litteral));
    }

    let chiffres: Vec<u8> = ent.bytes().chain(frac.bytes()).collect();
    let Some(premier) = chiffres.iter().position(|&c| c != b'0') else {
        return Ok(FormeScientifique {
            negatif: false,
            mantisse: "0".into(),
            exposant: 0,
        });
    };

    // virgule déplacée juste après le premier chiffre significatif
    let exposant = ent.len() as i64 - 1 - premier as i64;

    let mut significatifs = &chiffres[premier..];
    while let [reste @ .., b'0'] = significatifs {
        significatifs = reste;
    }

    let mut mantisse = String::with_capacity(significatifs.len() + 1);
    for (k, c) in significatifs.iter().enumerate() {
        if k == 1 {
            mantisse.push('.');
        }
        mantisse.push(*c as char);
    }

    Ok(FormeScientifique {
        negatif,
        mantisse,
        exposant,
    })
}

/// "m e x" -> valeur exacte (exposant entier) ou via f64 (exposant fractionnaire).
pub fn depuis_scientifique(mantisse: &str, exposant: &str, limite: usize) -> Resultat<BigRational> {
    let erreur = || invalide(&format!("{mantisse}e{exposant}"));

    let m = rationnel_decimal(mantisse).ok_or_else(erreur)?;
    let e: f64 = exposant.parse().map_err(|_| erreur())?;
    if !e.is_finite() {
        return Err(erreur());
    }
    if m.is_zero() {
        return Ok(m);
    }

    if e.fract() == 0.0 {
        // |e| chiffres au minimum : trop long de toute façon
        if e.abs() >= limite as f64 {
            return Err(ErreurCalc::SortieTropLongue);
        }
        let p = pow10(e.abs() as usize);
        return Ok(if e >= 0.0 {
            m * BigRational::from_integer(p)
        } else {
            m / BigRational::from_integer(p)
        });
    }

    let mf: f64 = mantisse.parse().map_err(|_| erreur())?;
    let v = mf * 10f64.powf(e);
    rationnel_f64(v).ok_or_else(|| ErreurCalc::Evaluation(format!("{mf} • 10^{e} : dépassement")))
}

/// Entrée de la commande `scientific`.
pub fn scientifique(entree: &str, reglages: &Reglages) -> Resultat<String> {
    let mut s: String = entree
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect::<String>()
        .to_lowercase();
    if s.is_empty() {
        return Err(ErreurCalc::ArgumentInvalide("littéral".into()));
    }
    for m in MARQUEURS {
        s = s.replace(m, "e");
    }

    let sortie = match s.split_once('e') {
        Some((m, e)) => {
            let r = depuis_scientifique(m, e, reglages.limite_sortie)?;
            let texte = decimal_groupe(&r).ok_or_else(|| invalide(&s))?;
            debug!(entree = %s, longueur = texte.len(), "notation décimale");
            texte
        }
        None => vers_scientifique(&s)?.to_string(),
    };

    if sortie.chars().count() < reglages.limite_sortie {
        Ok(sortie)
    } else {
        Err(ErreurCalc::SortieTropLongue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sci(s: &str) -> String {
        scientifique(s, &Reglages::default()).unwrap_or_else(|e| panic!("scientifique({s:?}) erreur: {e}"))
    }

    #[test]
    fn scenario_vers_scientifique() {
        assert_eq!(sci("1500"), "1.5 • 10^3");
        assert_eq!(sci("1,500"), "1.5 • 10^3");
        assert_eq!(sci("7"), "7 • 10^0");
        assert_eq!(sci("123.450"), "1.2345 • 10^2");
        assert_eq!(sci("-2000"), "-2 • 10^3");
    }

    #[test]
    fn petits_nombres_exposant_negatif() {
        assert_eq!(sci("0.00015"), "1.5 • 10^-4");
        assert_eq!(sci("0.5"), "5 • 10^-1");
        assert_eq!(sci("0"), "0 • 10^0");
    }

    #[test]
    fn vers_decimal_groupe() {
        assert_eq!(sci("1.5 • 10^3"), "1,500");
        assert_eq!(sci("2*10^6"), "2,000,000");
        assert_eq!(sci("2x10^-3"), "0.002");
        assert_eq!(sci("1e25"), "10,000,000,000,000,000,000,000,000");
        assert_eq!(sci("-4.2e1"), "-42");
    }

    #[test]
    fn exposant_fractionnaire_en_flottant() {
        assert_eq!(sci("1e0.5"), "3.1622776601683795");
    }

    #[test]
    fn aller_retour() {
        for x in ["1500", "0.0025", "123456789", "-31.4"] {
            let forme = sci(x);
            let retour = sci(&forme);
            assert_eq!(sci(&retour), forme, "aller-retour de {x}");
        }
    }

    #[test]
    fn entrees_invalides() {
        let r = Reglages::default();
        assert!(matches!(scientifique("abc", &r), Err(ErreurCalc::ArgumentInvalide(_))));
        assert!(matches!(scientifique("1e", &r), Err(ErreurCalc::ArgumentInvalide(_))));
        assert!(matches!(scientifique("", &r), Err(ErreurCalc::ArgumentInvalide(_))));
        assert!(matches!(scientifique("1.2.3", &r), Err(ErreurCalc::ArgumentInvalide(_))));
    }

    #[test]
    fn sortie_trop_longue() {
        let r = Reglages::default();
        assert_eq!(scientifique("1e5000", &r), Err(ErreurCalc::SortieTropLongue));
        assert_eq!(scientifique("1e1500", &r), Err(ErreurCalc::SortieTropLongue));
        assert!(scientifique("1e1000", &r).is_ok());
    }
}
