// src/config.rs
//
// Réglages de la calculatrice (fichier JSON optionnel, `--config <chemin>`).
// Clés absentes => valeurs par défaut.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture impossible : {0}")]
    Lecture(#[from] std::io::Error),

    #[error("JSON invalide : {0}")]
    Json(#[from] serde_json::Error),

    #[error("réglage invalide : {0}")]
    Invalide(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    /// Nombre de points échantillonnés par tracé.
    pub points_trace: usize,

    /// En dessous, une composante réelle/imaginaire est considérée nulle.
    pub tolerance_zero: f64,

    /// Longueur maximale (exclue) d'une sortie de la notation scientifique.
    pub limite_sortie: usize,

    /// Fenêtre réelle balayée par la résolution numérique (équations non polynomiales).
    pub fenetre_resolution: [f64; 2],

    /// Taux de change base EUR : {"USD": 1.08} = 1 EUR vaut 1.08 USD.
    pub taux: IndexMap<String, f64>,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            points_trace: 250,
            tolerance_zero: 1e-11,
            limite_sortie: 1998,
            fenetre_resolution: [-100.0, 100.0],
            taux: IndexMap::new(),
        }
    }
}

impl Reglages {
    pub fn depuis_json(json: &str) -> Result<Self, ErreurReglages> {
        let r: Reglages = serde_json::from_str(json)?;
        r.valider()?;
        Ok(r)
    }

    pub fn charger(chemin: impl AsRef<Path>) -> Result<Self, ErreurReglages> {
        let contenu = std::fs::read_to_string(chemin)?;
        Self::depuis_json(&contenu)
    }

    /// Charge le fichier s'il est donné ; en cas d'échec, avertit et garde les défauts.
    pub fn charger_ou_defaut(chemin: Option<&Path>) -> Self {
        let Some(chemin) = chemin else {
            return Self::default();
        };
        match Self::charger(chemin) {
            Ok(r) => {
                info!(chemin = %chemin.display(), "réglages chargés");
                r
            }
            Err(e) => {
                warn!(chemin = %chemin.display(), "réglages ignorés : {e}");
                Self::default()
            }
        }
    }

    fn valider(&self) -> Result<(), ErreurReglages> {
        if self.points_trace < 2 {
            return Err(ErreurReglages::Invalide("points_trace doit valoir au moins 2".into()));
        }
        if !(self.tolerance_zero >= 0.0) {
            return Err(ErreurReglages::Invalide("tolerance_zero négative".into()));
        }
        let [a, b] = self.fenetre_resolution;
        if !(a < b) {
            return Err(ErreurReglages::Invalide("fenetre_resolution vide".into()));
        }
        if let Some((code, t)) = self.taux.iter().find(|(_, t)| !(**t > 0.0)) {
            return Err(ErreurReglages::Invalide(format!("taux {code} = {t}")));
        }
        Ok(())
    }
}
