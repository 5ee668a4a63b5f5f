//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l'état de la calculatrice (mode, entrées, résultat, erreur, tracé, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d'affichage.
//!
//! - Aucune évaluation ici : vue.rs appelle le noyau et dépose le résultat.
//! - La table d'unités est construite une fois, à la création de l'état.

use tracing::info;

use crate::config::Reglages;
use crate::noyau::trace::Points;
use crate::noyau::{TableUnites, TauxFixes};

/// Les cinq écrans de l'application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ecran {
    Calcul,
    Resolution,
    Scientifique,
    Trace,
    Conversion,
}

impl Ecran {
    pub const TOUS: [Ecran; 5] = [
        Ecran::Calcul,
        Ecran::Resolution,
        Ecran::Scientifique,
        Ecran::Trace,
        Ecran::Conversion,
    ];

    pub fn titre(self) -> &'static str {
        match self {
            Ecran::Calcul => "Calcul",
            Ecran::Resolution => "Équation",
            Ecran::Scientifique => "Scientifique",
            Ecran::Trace => "Tracé",
            Ecran::Conversion => "Conversion",
        }
    }

    pub fn indication(self) -> &'static str {
        match self {
            Ecran::Calcul => "Ex: 2(3+log(100)), sum(1, 10, x^2), sqrt(-4)",
            Ecran::Resolution => "Ex: x^2 = 4, 2x + 1 = 7",
            Ecran::Scientifique => "Ex: 1500, 1.5 • 10^3, 2e-3",
            Ecran::Trace => "Ex: sin(x), x^2 - 1",
            Ecran::Conversion => "",
        }
    }
}

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub normalisee: String,
    pub rpn: String,
    pub arbre: String,
}

#[derive(Clone, Default, Debug)]
pub struct Courbe {
    pub legende: String,
    pub debut: f64,
    pub fin: f64,
    pub points: Points,
}

pub struct AppCalc {
    pub ecran: Ecran,

    // --- entrées utilisateur ---
    pub entree: String,
    pub debut: String,
    pub fin: String,
    pub valeur: String,
    pub unite_de: String,
    pub unite_vers: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,
    pub demarche: Demarche,
    pub courbe: Option<Courbe>,

    // --- contexte du noyau ---
    pub reglages: Reglages,
    pub table: TableUnites,
    pub taux: TauxFixes,
    pub liste_unites: String,

    // --- UX ---
    pub focus_entree: bool,
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        let table = TableUnites::construire();
        let liste_unites = table.lister_unites();
        let taux = TauxFixes::depuis_reglages(&reglages);
        Self {
            ecran: Ecran::Calcul,
            entree: String::new(),
            debut: "-10".into(),
            fin: "10".into(),
            valeur: "1".into(),
            unite_de: String::new(),
            unite_vers: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            courbe: None,
            reglages,
            table,
            taux,
            liste_unites,
            focus_entree: true,
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// Changement d'écran : les sorties du précédent ne sont plus pertinentes.
    pub fn changer_ecran(&mut self, ecran: Ecran) {
        if self.ecran != ecran {
            info!(ecran = ecran.titre(), "changement d'écran");
            self.ecran = ecran;
            self.clear_resultats();
        }
    }

    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.valeur = "1".into();
        self.unite_de.clear();
        self.unite_vers.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l'entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche + courbe.
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.courbe = None;
        self.focus_entree = true;
    }

    /// Le dernier résultat reste affiché ; la démarche et la courbe, non.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.courbe = None;
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    pub fn set_courbe(&mut self, courbe: Courbe) {
        self.erreur.clear();
        self.resultat = courbe.legende.clone();
        self.demarche = Demarche::default();
        self.courbe = Some(courbe);
        self.focus_entree = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erreur_garde_le_resultat() {
        let mut app = AppCalc::new(Reglages::default());
        app.set_resultat("2^3 = 8", Demarche::default());
        app.set_erreur("Argument illégal : foo");
        assert_eq!(app.resultat, "2^3 = 8");
        assert!(!app.erreur.is_empty());
    }

    #[test]
    fn exemples_du_calcul_evaluables() {
        let r = Reglages::default();
        let indication = Ecran::Calcul.indication();
        for ex in ["2(3+log(100))", "sum(1, 10, x^2)", "sqrt(-4)"] {
            assert!(indication.contains(ex), "{ex}");
            assert!(crate::noyau::calculer(ex, &r).is_ok(), "{ex}");
        }
    }

    #[test]
    fn changer_d_ecran_efface_les_sorties() {
        let mut app = AppCalc::new(Reglages::default());
        app.entree = "x^2".into();
        app.set_courbe(Courbe {
            legende: "𝘧(𝓍) = 𝓍^2".into(),
            ..Courbe::default()
        });
        app.changer_ecran(Ecran::Conversion);
        assert!(app.courbe.is_none());
        assert!(app.resultat.is_empty());
        assert_eq!(app.entree, "x^2");
        assert!(app.liste_unites.starts_with("mm, cm"));
    }
}
