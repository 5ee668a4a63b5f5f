// src/noyau/erreur.rs
//
// Erreurs du noyau : une seule énumération, locale à chaque appel.
// Aucune n'est fatale : l'appelant affiche le message et accepte une nouvelle entrée.

use thiserror::Error;

pub type Resultat<T> = Result<T, ErreurCalc>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalc {
    /// Mot hors de la liste blanche du mode actif.
    #[error("Argument illégal : {0}")]
    MotIllegal(String),

    /// sum/product mal formé, ou `x` hors du corps d'un agrégat.
    #[error("Fonction f(x) mal formée à l'index {0}")]
    AgregatMalForme(usize),

    #[error("Pas de variable 'x' dans l'équation")]
    SansVariable,

    #[error("Pas de signe '=' dans l'équation")]
    SansEgal,

    #[error("Plus d'un signe '=' dans l'équation")]
    PlusieursEgal,

    #[error("Argument invalide : `{0}`")]
    ArgumentInvalide(String),

    #[error("Unités incompatibles : `{0}`, `{1}`")]
    UnitesIncompatibles(String, String),

    #[error("La sortie dépasse la limite de caractères")]
    SortieTropLongue,

    /// Division par zéro, NaN, domaine réel violé (mode Graph).
    #[error("Erreur de domaine : {0}")]
    Domaine(String),

    #[error("Expression mal formée : {0}")]
    Syntaxe(String),

    /// Fourre-tout : échec du moteur numérique/symbolique, message d'origine joint.
    #[error("Expression mathématique invalide : {0}")]
    Evaluation(String),

    #[error("Taux de change indisponible : {0}")]
    Taux(String),
}

impl ErreurCalc {
    pub fn domaine(msg: impl Into<String>) -> Self {
        ErreurCalc::Domaine(msg.into())
    }

    pub fn syntaxe(msg: impl Into<String>) -> Self {
        ErreurCalc::Syntaxe(msg.into())
    }
}
