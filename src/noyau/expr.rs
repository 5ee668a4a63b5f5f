// src/noyau/expr.rs
//
// AST de l'expression normalisée.
// - Factorielle et agrégats (sum/product) sont des nœuds explicites,
//   pas des réécritures textuelles.
// - Var porte sa position source (messages d'erreur AgregatMalForme).

use std::fmt;

use super::mode::{Agregat, Constante, Fonction};

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),
    Imaginaire, // i
    Constante(Constante),
    Var { pos: usize }, // x

    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Mod(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),

    Factorielle(Box<Expr>),
    Appel(Fonction, Vec<Expr>),
    Agregat {
        genre: Agregat,
        debut: Box<Expr>,
        fin: Box<Expr>,
        corps: Box<Expr>,
    },
}

impl Expr {
    /// Vrai si `x` apparaît quelque part (y compris dans un corps d'agrégat).
    pub fn contient_var(&self) -> bool {
        match self {
            Expr::Var { .. } => true,
            Expr::Nombre(_) | Expr::Imaginaire | Expr::Constante(_) => false,
            Expr::Neg(a) | Expr::Factorielle(a) => a.contient_var(),
            Expr::Add(a, b)
            | Expr::Sub(a, b)
            | Expr::Mul(a, b)
            | Expr::Div(a, b)
            | Expr::Mod(a, b)
            | Expr::Pow(a, b) => {
                a.contient_var() || b.contient_var()
            }
            Expr::Appel(_, args) => args.iter().any(Expr::contient_var),
            Expr::Agregat {
                debut, fin, corps, ..
            } => debut.contient_var() || fin.contient_var() || corps.contient_var(),
        }
    }

    /// Première position de `x` hors du corps d'un agrégat (mode Calcul : interdit).
    pub fn var_hors_agregat(&self) -> Option<usize> {
        match self {
            Expr::Var { pos } => Some(*pos),
            Expr::Nombre(_) | Expr::Imaginaire | Expr::Constante(_) => None,
            Expr::Neg(a) | Expr::Factorielle(a) => a.var_hors_agregat(),
            Expr::Add(a, b)
            | Expr::Sub(a, b)
            | Expr::Mul(a, b)
            | Expr::Div(a, b)
            | Expr::Mod(a, b)
            | Expr::Pow(a, b) => {
                a.var_hors_agregat().or_else(|| b.var_hors_agregat())
            }
            Expr::Appel(_, args) => args.iter().find_map(Expr::var_hors_agregat),
            // le corps lie x ; les bornes, non
            Expr::Agregat { debut, fin, .. } => {
                debut.var_hors_agregat().or_else(|| fin.var_hors_agregat())
            }
        }
    }
}

/* ------------------------ Affichage (démarche / debug) ------------------------ */

fn nom_constante(c: Constante) -> &'static str {
    match c {
        Constante::Pi => "pi",
        Constante::Alpha => "alpha",
        Constante::Delta => "delta",
        Constante::Theta => "theta",
        Constante::Tau => "tau",
        Constante::Phi => "phi",
        Constante::Gamma => "gamma",
        Constante::Lambda => "lambda",
        Constante::Psi => "psi",
        Constante::Rho => "rho",
        Constante::E => "e",
        Constante::Inf => "inf",
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Nombre(v) => write!(f, "{v}"),
            Expr::Imaginaire => write!(f, "i"),
            Expr::Constante(c) => write!(f, "{}", nom_constante(*c)),
            Expr::Var { .. } => write!(f, "x"),
            Expr::Neg(a) => write!(f, "(-{a})"),
            Expr::Add(a, b) => write!(f, "({a} + {b})"),
            Expr::Sub(a, b) => write!(f, "({a} - {b})"),
            Expr::Mul(a, b) => write!(f, "({a} * {b})"),
            Expr::Div(a, b) => write!(f, "({a} / {b})"),
            Expr::Mod(a, b) => write!(f, "({a} % {b})"),
            Expr::Pow(a, b) => write!(f, "({a} ^ {b})"),
            Expr::Factorielle(a) => write!(f, "factorial({a})"),
            Expr::Appel(fonc, args) => {
                let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", fonc.nom(), args.join(", "))
            }
            Expr::Agregat {
                genre,
                debut,
                fin,
                corps,
            } => write!(f, "{}({debut}, {fin}, '{corps}')", genre.nom()),
        }
    }
}
