// src/noyau/mode.rs
//
// Mode d'évaluation : fixe la liste blanche des mots, les fonctions connues
// et la liste d'exclusion de la multiplication implicite devant '('.

use std::f64::consts::{E, PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Calcul,
    Graphe,
    Resolution,
}

const LEGAUX_CALCUL: &[&str] = &[
    "log", "sqrt", "floor", "ceil", "sin", "cos", "tan", "round", "abs", "pi", "alpha", "delta",
    "theta", "tau", "phi", "gamma", "lambda", "psi", "rho", "e", "i", "inf", "mod", "x", "sum",
    "product",
];

const LEGAUX_GRAPHE: &[&str] = &[
    "log", "sqrt", "floor", "ceil", "sin", "cos", "tan", "round", "abs", "pi", "alpha", "delta",
    "theta", "tau", "phi", "gamma", "lambda", "psi", "rho", "e", "mod", "x",
];

const LEGAUX_RESOLUTION: &[&str] = &[
    "log", "sqrt", "sin", "cos", "tan", "pi", "alpha", "delta", "theta", "tau", "phi", "gamma",
    "lambda", "psi", "rho", "e", "x", "i",
];

// Pas de '*' inséré entre ces mots et '(' (équivalent des lookbehind négatifs).
const EXCLUS_CALCUL: &[&str] = &[
    "log", "sqrt", "floor", "ceil", "sin", "cos", "tan", "round", "abs", "inf", "x", "sum",
    "product",
];

const EXCLUS_GRAPHE: &[&str] = &[
    "log", "sqrt", "floor", "ceil", "sin", "cos", "tan", "round", "abs", "x",
];

const EXCLUS_RESOLUTION: &[&str] = &["log", "sqrt", "sin", "cos", "tan", "x"];

/// Fonctions appelables, résolues par nom selon le mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Log,
    Sqrt,
    Floor,
    Ceil,
    Sin,
    Cos,
    Tan,
    Round,
    Abs,
}

impl Fonction {
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Log => "log",
            Fonction::Sqrt => "sqrt",
            Fonction::Floor => "floor",
            Fonction::Ceil => "ceil",
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Round => "round",
            Fonction::Abs => "abs",
        }
    }

    /// Nombre d'arguments accepté (min, max).
    pub fn arite(self) -> (usize, usize) {
        match self {
            Fonction::Log | Fonction::Round => (1, 2),
            _ => (1, 1),
        }
    }
}

/// sum / product : corps réévalué pour chaque indice entier de [debut, fin].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Agregat {
    Somme,
    Produit,
}

impl Agregat {
    pub fn nom(self) -> &'static str {
        match self {
            Agregat::Somme => "sum",
            Agregat::Produit => "product",
        }
    }
}

/// Constantes nommées (valeurs de la calculatrice d'origine).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    Alpha,
    Delta,
    Theta,
    Tau,
    Phi,
    Gamma,
    Lambda,
    Psi,
    Rho,
    E,
    Inf,
}

impl Constante {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        Some(match nom {
            "pi" => Constante::Pi,
            "alpha" => Constante::Alpha,
            "delta" => Constante::Delta,
            "theta" => Constante::Theta,
            "tau" => Constante::Tau,
            "phi" => Constante::Phi,
            "gamma" => Constante::Gamma,
            "lambda" => Constante::Lambda,
            "psi" => Constante::Psi,
            "rho" => Constante::Rho,
            "e" => Constante::E,
            "inf" => Constante::Inf,
            _ => return None,
        })
    }

    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => PI,
            Constante::Alpha => 2.502_907_875_095_892_8,
            Constante::Delta => 4.669_201_609_102_990_7,
            Constante::Theta => 1.306_377_883_863_080_7,
            Constante::Tau => TAU,
            Constante::Phi => 1.618_033_988_749_895,
            Constante::Gamma => 0.577_215_664_901_532_9,
            Constante::Lambda => 1.303_577_269_034,
            Constante::Psi => 3.359_885_666_243_177_5,
            Constante::Rho => 1.324_717_957_244_746,
            Constante::E => E,
            Constante::Inf => f64::INFINITY,
        }
    }
}

impl Mode {
    pub fn mots_legaux(self) -> &'static [&'static str] {
        match self {
            Mode::Calcul => LEGAUX_CALCUL,
            Mode::Graphe => LEGAUX_GRAPHE,
            Mode::Resolution => LEGAUX_RESOLUTION,
        }
    }

    pub fn est_legal(self, mot: &str) -> bool {
        self.mots_legaux().contains(&mot)
    }

    /// Vrai si `mot(` ne doit PAS recevoir de multiplication implicite.
    pub fn exclut_mult_implicite(self, mot: &str) -> bool {
        let exclus = match self {
            Mode::Calcul => EXCLUS_CALCUL,
            Mode::Graphe => EXCLUS_GRAPHE,
            Mode::Resolution => EXCLUS_RESOLUTION,
        };
        exclus.contains(&mot)
    }

    pub fn fonction(self, nom: &str) -> Option<Fonction> {
        let f = match nom {
            "log" => Fonction::Log,
            "sqrt" => Fonction::Sqrt,
            "sin" => Fonction::Sin,
            "cos" => Fonction::Cos,
            "tan" => Fonction::Tan,
            "floor" => Fonction::Floor,
            "ceil" => Fonction::Ceil,
            "round" => Fonction::Round,
            "abs" => Fonction::Abs,
            _ => return None,
        };
        // la liste blanche fait foi (ex: floor absent en Résolution)
        self.est_legal(nom).then_some(f)
    }

    pub fn agregat(self, nom: &str) -> Option<Agregat> {
        if self != Mode::Calcul {
            return None;
        }
        match nom {
            "sum" => Some(Agregat::Somme),
            "product" => Some(Agregat::Produit),
            _ => None,
        }
    }

    /// Le mode Graph échantillonne sur des réels : tout résultat complexe y est une erreur de domaine.
    pub fn domaine_reel(self) -> bool {
        self == Mode::Graphe
    }
}
