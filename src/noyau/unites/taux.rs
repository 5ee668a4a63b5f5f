// src/noyau/unites/taux.rs
//
// Taux de change : collaborateur injecté dans la conversion.

use indexmap::IndexMap;

use crate::config::Reglages;
use crate::noyau::erreur::{ErreurCalc, Resultat};

/// Combien vaut 1 `de` exprimé en `vers`.
pub trait FournisseurTaux {
    fn taux(&self, de: &str, vers: &str) -> Resultat<f64>;
}

/// Taux fixes, base EUR (clé `taux` des réglages).
#[derive(Clone, Debug, Default)]
pub struct TauxFixes {
    base_eur: IndexMap<String, f64>,
}

impl TauxFixes {
    pub fn new(base_eur: IndexMap<String, f64>) -> Self {
        Self { base_eur }
    }

    pub fn depuis_reglages(reglages: &Reglages) -> Self {
        Self::new(reglages.taux.clone())
    }

    fn depuis_eur(&self, code: &str) -> Resultat<f64> {
        if code == "EUR" {
            return Ok(1.0);
        }
        self.base_eur
            .get(code)
            .copied()
            .ok_or_else(|| ErreurCalc::Taux(format!("pas de taux pour {code}")))
    }
}

impl FournisseurTaux for TauxFixes {
    fn taux(&self, de: &str, vers: &str) -> Resultat<f64> {
        if de == vers {
            return Ok(1.0);
        }
        Ok(self.depuis_eur(vers)? / self.depuis_eur(de)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixes() -> TauxFixes {
        let mut t = IndexMap::new();
        t.insert("USD".to_string(), 1.25);
        t.insert("GBP".to_string(), 0.5);
        TauxFixes::new(t)
    }

    #[test]
    fn taux_croises() {
        let t = fixes();
        assert_eq!(t.taux("EUR", "USD").unwrap(), 1.25);
        assert_eq!(t.taux("USD", "EUR").unwrap(), 0.8);
        assert_eq!(t.taux("GBP", "USD").unwrap(), 2.5);
        assert_eq!(t.taux("JPY", "JPY").unwrap(), 1.0);
    }

    #[test]
    fn devise_inconnue() {
        assert!(matches!(fixes().taux("EUR", "JPY"), Err(ErreurCalc::Taux(_))));
    }
}
