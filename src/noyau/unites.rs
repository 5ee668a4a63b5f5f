// src/noyau/unites.rs
//
// Conversion d'unités.
// - table construite une seule fois (`TableUnites::construire`), immuable ensuite
// - volume et devises : fermeture complète générée depuis mL et EUR
// - alias : correspondance floue, l'alias le plus court contenant l'entrée gagne

mod donnees;
pub mod taux;

use std::fmt;

use indexmap::IndexMap;
use num_complex::Complex64;
use tracing::debug;

use super::erreur::{ErreurCalc, Resultat};
use super::eval::{compiler, evaluer};
use super::format::{format_glyphe_exposant, repr_f64};
use super::mode::Mode;
use taux::FournisseurTaux;

/// Facteur de conversion d'une unité vers une autre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Facteur {
    Entier(i64),
    Reel(f64),
    /// Formule affine en `x` (températures).
    Formule(&'static str),
    /// Taux de change `de -> vers`, demandé au fournisseur.
    Taux(&'static str, &'static str),
}

impl Facteur {
    fn numerique(self) -> Option<f64> {
        match self {
            Facteur::Entier(n) => Some(n as f64),
            Facteur::Reel(v) => Some(v),
            _ => None,
        }
    }
}

/* ------------------------ Grandeur ------------------------ */

/// Valeur saisie ou convertie : entière tant que possible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Grandeur {
    Entier(i64),
    Reel(f64),
}

impl Grandeur {
    pub fn lire(s: &str) -> Resultat<Self> {
        let invalide = || ErreurCalc::ArgumentInvalide(s.to_string());
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Grandeur::Entier(n));
        }
        let v: f64 = s.parse().map_err(|_| invalide())?;
        // au-delà d'un entier machine : refusé, comme les non-finis
        if !v.is_finite() || v.abs() > i64::MAX as f64 {
            return Err(invalide());
        }
        Ok(Grandeur::Reel(v))
    }

    fn en_f64(self) -> f64 {
        match self {
            Grandeur::Entier(n) => n as f64,
            Grandeur::Reel(v) => v,
        }
    }

    /// Affichage d'un résultat : exposant en ` • 10^`.
    fn resultat(self) -> String {
        match self {
            Grandeur::Entier(n) => n.to_string(),
            Grandeur::Reel(v) => format_glyphe_exposant(v),
        }
    }
}

impl fmt::Display for Grandeur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grandeur::Entier(n) => write!(f, "{n}"),
            Grandeur::Reel(v) => f.write_str(&repr_f64(*v)),
        }
    }
}

/* ------------------------ Table ------------------------ */

type Ligne = IndexMap<&'static str, Facteur>;

#[derive(Clone, Debug)]
pub struct TableUnites {
    lignes: IndexMap<&'static str, Ligne>,
    familles: Vec<Vec<&'static str>>,
    alias: IndexMap<&'static str, &'static str>,
}

impl TableUnites {
    pub fn construire() -> Self {
        let mut lignes = IndexMap::new();
        let mut familles: Vec<Vec<&'static str>> = Vec::new();

        for famille in donnees::FAMILLES {
            familles.push(famille.iter().map(|(u, _)| *u).collect());
            for (u, ligne) in famille.iter() {
                lignes.insert(*u, ligne.iter().copied().collect::<Ligne>());
            }
        }

        // volume : ligne de mL inversée puis croisée
        let base = donnees::VOLUME_ML;
        familles.push(base.iter().map(|(u, _)| *u).collect());
        lignes.insert("mL", base.iter().copied().collect());
        let autres: Vec<(&'static str, f64)> = base
            .iter()
            .filter(|(u, _)| *u != "mL")
            .filter_map(|(u, f)| f.numerique().map(|v| (*u, v)))
            .collect();
        for &(u, val) in &autres {
            let mut ligne = Ligne::new();
            ligne.insert("mL", Facteur::Reel(1.0 / val));
            for &(u2, val2) in &autres {
                let f = if u2 == u {
                    Facteur::Entier(1)
                } else {
                    Facteur::Reel(1.0 / val * val2)
                };
                ligne.insert(u2, f);
            }
            lignes.insert(u, ligne);
        }

        // devises : EUR en tête, chaque paire passe par le fournisseur de taux
        familles.push(donnees::DEVISES.to_vec());
        for &de in donnees::DEVISES {
            let ligne = donnees::DEVISES
                .iter()
                .map(|&vers| {
                    let f = if vers == de {
                        Facteur::Entier(1)
                    } else {
                        Facteur::Taux(de, vers)
                    };
                    (vers, f)
                })
                .collect();
            lignes.insert(de, ligne);
        }

        let alias = donnees::ALIAS.iter().copied().collect();
        debug!(unites = lignes.len(), "table des unités construite");

        Self {
            lignes,
            familles,
            alias,
        }
    }

    pub fn facteur(&self, de: &str, vers: &str) -> Option<Facteur> {
        self.lignes.get(de)?.get(vers).copied()
    }

    pub fn unites(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.lignes.keys().copied()
    }

    fn canonique(&self, unite: &str) -> Option<&'static str> {
        self.lignes.get_key_value(unite).map(|(k, _)| *k)
    }

    /// Alias le plus court contenant `unite` ; à égalité, le premier inscrit.
    pub fn meilleur_alias(&self, unite: &str) -> Option<&'static str> {
        let n = unite.chars().count();
        let mut meilleur = None;
        let mut ecart = usize::MAX;
        for (alias, canon) in &self.alias {
            if alias.contains(unite) {
                let d = alias.chars().count() - n;
                if d < ecart {
                    ecart = d;
                    meilleur = Some(*canon);
                }
            }
        }
        meilleur
    }

    /// (source, cible, facteur) après résolution des alias.
    fn resoudre(&self, de: &str, vers: &str) -> Resultat<(String, String, Facteur)> {
        let invalide = |u: &str| ErreurCalc::ArgumentInvalide(u.to_string());
        let incompatibles = |a: &str, b: &str| ErreurCalc::UnitesIncompatibles(a.to_string(), b.to_string());

        let de = match self.canonique(de) {
            Some(u) => u,
            None => self.meilleur_alias(de).ok_or_else(|| invalide(de))?,
        };
        if let Some(f) = self.facteur(de, vers) {
            return Ok((de.into(), vers.into(), f));
        }

        let vers = self.meilleur_alias(vers).ok_or_else(|| invalide(vers))?;
        if let Some(f) = self.facteur(de, vers) {
            return Ok((de.into(), vers.into(), f));
        }

        // la source devinée est peut-être dans la mauvaise famille
        let de = self.meilleur_alias(de).ok_or_else(|| incompatibles(de, vers))?;
        if let Some(f) = self.facteur(de, vers) {
            return Ok((de.into(), vers.into(), f));
        }
        let vers = self.meilleur_alias(vers).ok_or_else(|| incompatibles(de, vers))?;
        self.facteur(de, vers)
            .map(|f| (de.to_string(), vers.to_string(), f))
            .ok_or_else(|| incompatibles(de, vers))
    }

    /// Une ligne par famille, symboles séparés par `, `.
    pub fn lister_unites(&self) -> String {
        self.familles
            .iter()
            .map(|f| f.join(", "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/* ------------------------ Conversion ------------------------ */

fn normaliser_unite(u: &str) -> String {
    u.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_lowercase()
}

fn appliquer(valeur: Grandeur, facteur: Facteur, taux: &dyn FournisseurTaux) -> Resultat<Grandeur> {
    Ok(match (valeur, facteur) {
        (Grandeur::Entier(v), Facteur::Entier(n)) => match v.checked_mul(n) {
            Some(p) => Grandeur::Entier(p),
            None => Grandeur::Reel(v as f64 * n as f64),
        },
        (Grandeur::Reel(v), Facteur::Entier(n)) => Grandeur::Reel(v * n as f64),
        (_, Facteur::Reel(f)) => Grandeur::Reel(valeur.en_f64() * f),
        (_, Facteur::Formule(formule)) => {
            let (expr, _) = compiler(formule, Mode::Graphe)?;
            let y = evaluer(&expr, Mode::Graphe, Some(Complex64::new(valeur.en_f64(), 0.0)))?;
            Grandeur::Reel(y.re)
        }
        (_, Facteur::Taux(de, vers)) => Grandeur::Reel(valeur.en_f64() * taux.taux(de, vers)?),
    })
}

/// `convert` : "{valeur} {de} = {résultat} {vers}".
/// Sans `vers`, la valeur vaut 1 et les deux premiers arguments sont les unités.
pub fn convertir(
    valeur: &str,
    de: &str,
    vers: &str,
    table: &TableUnites,
    taux: &dyn FournisseurTaux,
) -> Resultat<String> {
    let (valeur, de, vers) = if vers.trim().is_empty() {
        ("1", valeur, de)
    } else {
        (valeur.trim(), de, vers)
    };
    let (de, vers) = (normaliser_unite(de), normaliser_unite(vers));
    if valeur.is_empty() || de.is_empty() || vers.is_empty() {
        return Err(ErreurCalc::ArgumentInvalide("value/unit".into()));
    }

    let valeur = Grandeur::lire(valeur)?;
    let (de, vers, facteur) = table.resoudre(&de, &vers)?;
    debug!(%de, %vers, ?facteur, "conversion");

    let resultat = appliquer(valeur, facteur, taux)?;
    Ok(format!("{valeur} {de} = {} {vers}", resultat.resultat()))
}

/// Arguments bruts de la commande : `v de vers`, `de vers`, `v de to vers`.
pub fn convertir_arguments(
    args: &[&str],
    table: &TableUnites,
    taux: &dyn FournisseurTaux,
) -> Resultat<String> {
    let args: Vec<&str> = match args {
        [v, de, to, vers] if to.eq_ignore_ascii_case("to") => vec![*v, *de, *vers],
        [de, to, vers] if to.eq_ignore_ascii_case("to") => vec![*de, *vers],
        _ => args.to_vec(),
    };
    match args.as_slice() {
        [de, vers] => convertir(de, vers, "", table, taux),
        [v, de, vers] => convertir(v, de, vers, table, taux),
        _ => Err(ErreurCalc::ArgumentInvalide(args.join(" "))),
    }
}

#[cfg(test)]
mod tests {
    use super::taux::TauxFixes;
    use super::*;

    fn conv(v: &str, de: &str, vers: &str) -> Resultat<String> {
        convertir(v, de, vers, &TableUnites::construire(), &TauxFixes::default())
    }

    #[test]
    fn scenario_metres_en_pieds() {
        assert_eq!(conv("1", "m", "ft").unwrap(), "1 m = 3.28084 ft");
        assert_eq!(conv("2", "hours", "min").unwrap(), "2 h = 120 min");
        assert_eq!(conv("2", "cm", "dm").unwrap(), "2 cm = 0.2 dm");
    }

    #[test]
    fn alias_kilometres() {
        let s = conv("5", "kilometers", "mi").unwrap();
        assert_eq!(s, "5 km = 3.106855 mi");
    }

    #[test]
    fn exposant_en_glyphe() {
        assert_eq!(conv("1", "mm", "km").unwrap(), "1 mm = 1 • 10^-6 km");
        assert_eq!(conv("1", "m²", "km²").unwrap(), "1 m² = 1 • 10^-6 km²");
    }

    #[test]
    fn auto_conversion_facteur_un() {
        let table = TableUnites::construire();
        for u in table.unites() {
            assert_eq!(table.facteur(u, u), Some(Facteur::Entier(1)), "unité {u}");
        }
        assert_eq!(conv("2.5", "km", "km").unwrap(), "2.5 km = 2.5 km");
        assert_eq!(conv("7", "s", "s").unwrap(), "7 s = 7 s");
    }

    #[test]
    fn temperature_affine() {
        assert_eq!(conv("0", "°c", "°f").unwrap(), "0 °C = 32.0 °F");
        assert_eq!(conv("100", "c", "f").unwrap(), "100 °C = 212.0 °F");
    }

    #[test]
    fn fermeture_du_volume() {
        let table = TableUnites::construire();
        assert_eq!(table.facteur("L", "mL"), Some(Facteur::Reel(1.0 / 0.001)));
        assert_eq!(table.facteur("L", "cL"), Some(Facteur::Reel(1.0 / 0.001 * 0.1)));
        assert_eq!(table.facteur("mL", "mm³"), Some(Facteur::Entier(1000)));
        assert_eq!(conv("3", "l", "ml").unwrap(), "3 L = 3000.0 mL");
        assert_eq!(conv("1", "gal", "l").unwrap(), "1 gal = 3.785412534257983 L");
    }

    #[test]
    fn devises_par_le_fournisseur() {
        let mut t = IndexMap::new();
        t.insert("USD".to_string(), 1.25);
        let taux = TauxFixes::new(t);
        let table = TableUnites::construire();
        assert_eq!(convertir("10", "eur", "usd", &table, &taux).unwrap(), "10 EUR = 12.5 USD");
        assert_eq!(convertir("10", "usd", "eur", &table, &taux).unwrap(), "10 USD = 8.0 EUR");
        assert!(matches!(
            convertir("10", "eur", "jpy", &table, &taux),
            Err(ErreurCalc::Taux(_))
        ));
    }

    #[test]
    fn unites_incompatibles_ou_inconnues() {
        assert_eq!(
            conv("1", "km", "hours"),
            Err(ErreurCalc::UnitesIncompatibles("km/h".into(), "Wh".into()))
        );
        assert_eq!(conv("2", "s", "kg"), Err(ErreurCalc::ArgumentInvalide("kg".into())));
        assert_eq!(conv("1", "zzz", "m"), Err(ErreurCalc::ArgumentInvalide("zzz".into())));
    }

    #[test]
    fn valeurs_invalides() {
        assert!(matches!(conv("abc", "m", "ft"), Err(ErreurCalc::ArgumentInvalide(_))));
        assert!(matches!(conv("1e30", "m", "ft"), Err(ErreurCalc::ArgumentInvalide(_))));
        assert!(matches!(conv("inf", "m", "ft"), Err(ErreurCalc::ArgumentInvalide(_))));
        assert_eq!(conv("1.50", "m", "m").unwrap(), "1.5 m = 1.5 m");
    }

    #[test]
    fn formes_des_arguments() {
        let table = TableUnites::construire();
        let taux = TauxFixes::default();
        assert_eq!(convertir_arguments(&["km", "m"], &table, &taux).unwrap(), "1 km = 1000 m");
        assert_eq!(convertir_arguments(&["3", "km", "to", "m"], &table, &taux).unwrap(), "3 km = 3000 m");
        assert_eq!(convertir_arguments(&["km", "to", "m"], &table, &taux).unwrap(), "1 km = 1000 m");
        assert!(convertir_arguments(&["1"], &table, &taux).is_err());
    }

    #[test]
    fn liste_par_famille() {
        let liste = TableUnites::construire().lister_unites();
        let lignes: Vec<&str> = liste.lines().collect();
        assert_eq!(lignes.len(), 9);
        assert!(lignes[0].starts_with("mm, cm, dm, m, "));
        assert!(lignes[7].starts_with("mL, cL, dL, L"));
        assert!(lignes[8].starts_with("EUR, USD, GBP"));
    }
}
