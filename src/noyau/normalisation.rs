// src/noyau/normalisation.rs
//
// Entrée brute -> expression normalisée (suite de jetons prête pour le parse).
//
// Ordre fixe :
// 1) liste blanche (premier mot illégal => erreur)
// 2) substitutions : mod -> %, lambda -> lambda_var, ** et • déjà ramenés par le tokenizer
// 3) multiplication implicite :
//    - `)(`                  -> `)*(`
//    - chiffre/mot puis `(`   -> `*(`  sauf si le mot est exclu par le mode (log(, sqrt(, x(...)
//    - `)` puis chiffre/mot   -> `)*`
//    - chiffre puis mot, mot puis chiffre -> `*` entre les deux (2x -> 2*x)
//
// Les factorielles et les agrégats sum/product ne sont PAS réécrits ici :
// le parse (rpn.rs) en fait des nœuds explicites.

use std::fmt;

use tracing::debug;

use super::erreur::Resultat;
use super::jetons::{format_tok, tokenize, valider_mots, Jeton, Tok};
use super::mode::Mode;

/// Nom de remplacement de `lambda` (mot réservé de certains hôtes).
pub const LAMBDA_RENOMME: &str = "lambda_var";

#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionNormalisee {
    pub mode: Mode,
    pub jetons: Vec<Jeton>,
}

impl ExpressionNormalisee {
    pub fn contient_variable(&self) -> bool {
        self.jetons
            .iter()
            .any(|j| matches!(&j.tok, Tok::Ident(m) if m == "x"))
    }
}

impl fmt::Display for ExpressionNormalisee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for j in &self.jetons {
            write!(f, "{}", format_tok(&j.tok))?;
        }
        Ok(())
    }
}

/// Normalise une entrée (déjà en minuscules) pour le mode donné.
pub fn normaliser(entree: &str, mode: Mode) -> Resultat<ExpressionNormalisee> {
    valider_mots(entree, mode)?;

    let jetons = tokenize(entree)?;
    let jetons = substituer(jetons);
    let jetons = inserer_multiplications(jetons, mode);

    let n = ExpressionNormalisee { mode, jetons };
    debug!(?mode, normalisee = %n, "expression normalisée");
    Ok(n)
}

fn substituer(jetons: Vec<Jeton>) -> Vec<Jeton> {
    jetons
        .into_iter()
        .map(|j| match &j.tok {
            Tok::Ident(m) if m == "mod" => Jeton::new(Tok::Percent, j.pos),
            Tok::Ident(m) if m == "lambda" => {
                Jeton::new(Tok::Ident(LAMBDA_RENOMME.to_string()), j.pos)
            }
            _ => j,
        })
        .collect()
}

fn inserer_multiplications(jetons: Vec<Jeton>, mode: Mode) -> Vec<Jeton> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len() * 2);

    for j in jetons {
        if let Some(prec) = out.last() {
            if faut_multiplier(&prec.tok, &j.tok, mode) {
                out.push(Jeton::new(Tok::Star, j.pos));
            }
        }
        out.push(j);
    }

    out
}

fn faut_multiplier(prec: &Tok, suiv: &Tok, mode: Mode) -> bool {
    match (prec, suiv) {
        (Tok::RPar, Tok::LPar) => true,

        (Tok::Num(_), Tok::LPar) => true,
        (Tok::Ident(m), Tok::LPar) => !mode.exclut_mult_implicite(nom_source(m)),

        (Tok::RPar, Tok::Num(_) | Tok::Ident(_)) => true,

        (Tok::Num(_), Tok::Ident(_)) | (Tok::Ident(_), Tok::Num(_)) => true,

        _ => false,
    }
}

// `lambda_var` reste `lambda` pour les listes du mode.
fn nom_source(m: &str) -> &str {
    if m == LAMBDA_RENOMME {
        "lambda"
    } else {
        m
    }
}
