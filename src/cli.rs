// src/cli.rs
//
// Ligne de commande : une sous-commande par point d'entrée du noyau.
// Sans sous-commande, main.rs lance l'interface graphique.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use crate::config::Reglages;
use crate::noyau::{self, ErreurCalc, RenduSvg, TableUnites, TauxFixes};

#[derive(Parser, Debug)]
#[command(name = "calculatrice", version, about = "Calculatrice : calcul, équations, conversions, tracés")]
pub struct Cli {
    /// Fichier de réglages JSON.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub commande: Option<Commande>,
}

#[derive(Subcommand, Debug)]
pub enum Commande {
    /// Évalue une expression : `calc 2(3+log(100))`.
    Calc {
        #[arg(required = true, allow_hyphen_values = true)]
        expr: Vec<String>,
    },
    /// Résout une équation en x : `solve x^2 = 4`.
    Solve {
        #[arg(required = true, allow_hyphen_values = true)]
        equation: Vec<String>,
    },
    /// Notation scientifique dans les deux sens.
    Sci {
        #[arg(required = true, allow_hyphen_values = true)]
        litteral: Vec<String>,
    },
    /// Trace f(x) sur [début, fin].
    Plot {
        /// Image SVG produite ; sinon les points sont écrits sur la sortie.
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(allow_hyphen_values = true)]
        debut: String,
        #[arg(allow_hyphen_values = true)]
        fin: String,
        #[arg(required = true, allow_hyphen_values = true)]
        expr: Vec<String>,
    },
    /// Conversion : `convert 5 km mi`, `convert km m`, `convert 5 km to mi`.
    Convert {
        #[arg(required = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Liste des unités par famille.
    Units,
}

#[derive(Debug, Error)]
pub enum ErreurCli {
    #[error(transparent)]
    Calcul(#[from] ErreurCalc),

    #[error("écriture impossible : {0}")]
    Ecriture(#[from] std::io::Error),
}

/// Contrat de la coquille : arguments joints par des espaces, en minuscules.
fn joindre(args: &[String]) -> String {
    args.join(" ").to_lowercase()
}

/// Exécute une sous-commande et renvoie le texte à afficher.
pub fn executer(commande: Commande, reglages: &Reglages) -> Result<String, ErreurCli> {
    let sortie = match commande {
        Commande::Calc { expr } => noyau::calculer(&joindre(&expr), reglages)?,
        Commande::Solve { equation } => noyau::resoudre(&joindre(&equation), reglages)?,
        Commande::Sci { litteral } => noyau::scientifique(&joindre(&litteral), reglages)?,
        Commande::Plot { out, debut, fin, expr } => {
            let trace = noyau::tracer(&debut, &fin, &joindre(&expr), reglages, &RenduSvg::default())?;
            match out {
                Some(chemin) => {
                    std::fs::write(&chemin, &trace.image)?;
                    info!(chemin = %chemin.display(), octets = trace.image.len(), "tracé écrit");
                    format!("{}\n{}", trace.legende, chemin.display())
                }
                None => {
                    let mut s = trace.legende.clone();
                    for (x, y) in &trace.points {
                        let _ = write!(s, "\n{x}\t{y}");
                    }
                    s
                }
            }
        }
        Commande::Convert { args } => {
            let args: Vec<String> = args.iter().map(|a| a.to_lowercase()).collect();
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            let table = TableUnites::construire();
            let taux = TauxFixes::depuis_reglages(reglages);
            noyau::convertir_arguments(&args, &table, &taux)?
        }
        Commande::Units => TableUnites::construire().lister_unites(),
    };
    Ok(sortie)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("calculatrice").chain(args.iter().copied()))
            .unwrap_or_else(|e| panic!("{args:?} : {e}"))
    }

    fn lancer(args: &[&str]) -> Result<String, ErreurCli> {
        let c = cli(args);
        executer(c.commande.expect("sous-commande"), &Reglages::default())
    }

    #[test]
    fn sans_sous_commande_interface() {
        assert!(cli(&[]).commande.is_none());
        assert_eq!(cli(&["--config", "r.json"]).config, Some(PathBuf::from("r.json")));
    }

    #[test]
    fn arguments_joints_et_minuscules() {
        assert_eq!(lancer(&["calc", "2^3"]).unwrap(), "2^3 = 8");
        assert_eq!(lancer(&["calc", "2", "*", "PI", "*", "0"]).unwrap(), "2 * π * 0 = 0");
        assert_eq!(lancer(&["solve", "x^2", "=", "4"]).unwrap(), "𝓍 = -2 ∨ 𝓍 = 2");
        assert_eq!(lancer(&["sci", "1500"]).unwrap(), "1.5 • 10^3");
    }

    #[test]
    fn exemple_de_l_aide_evalue() {
        let s = lancer(&["calc", "2(3+log(100))"]).unwrap();
        assert!(s.starts_with("2(3+log(100)) = 15.21"), "{s}");
    }

    #[test]
    fn valeurs_negatives_acceptees() {
        assert_eq!(lancer(&["calc", "-2^2"]).unwrap(), "-2^2 = -4");
        let trace = lancer(&["plot", "-1", "1", "x"]).unwrap();
        assert!(trace.starts_with("𝘧(𝓍) = 𝓍\n-1\t-1"));
    }

    #[test]
    fn conversion_et_unites() {
        assert_eq!(lancer(&["convert", "1", "m", "ft"]).unwrap(), "1 m = 3.28084 ft");
        assert_eq!(lancer(&["convert", "5", "KM", "to", "m"]).unwrap(), "5 km = 5000 m");
        assert!(lancer(&["units"]).unwrap().starts_with("mm, cm"));
    }

    #[test]
    fn erreur_du_noyau_propagee() {
        assert!(matches!(
            lancer(&["solve", "x", "+", "1"]),
            Err(ErreurCli::Calcul(ErreurCalc::SansEgal))
        ));
    }
}
