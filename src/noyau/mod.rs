//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - jetons.rs        : tokenisation + liste blanche des mots
//! - normalisation.rs : multiplication implicite, factorielles, renommages par mode
//! - rpn.rs           : shunting-yard + construction Expr
//! - expr.rs          : arbre d'expression
//! - eval.rs          : évaluation (réel / complexe) + pipeline `calculate`
//! - format.rs        : affichage des résultats, embellissement
//! - resolution.rs    : `solve`
//! - trace.rs         : échantillonnage et rendu des tracés
//! - lecture.rs       : rationnels exacts -> texte décimal groupé
//! - scientifique.rs  : notation scientifique dans les deux sens
//! - unites.rs        : conversion d'unités (table, alias, taux)

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod mode;
pub mod normalisation;
pub mod resolution;
pub mod rpn;
pub mod scientifique;
pub mod trace;
pub mod unites;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurCalc, Resultat};
pub use eval::{calculer, calculer_detaille};
pub use resolution::resoudre;
pub use scientifique::scientifique;
pub use trace::{echantillonner, tracer, RenduSvg};
pub use unites::taux::TauxFixes;
pub use unites::{convertir, convertir_arguments, TableUnites};
