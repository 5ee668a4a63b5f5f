// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir l'expression normalisée en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name):
//    - fonction du mode (log, sqrt, ...) ou agrégat (sum, product) => appel, '(' obligatoire
//    - sinon => atome (constante, i, x)
// - Moins unaire : opérateur préfixe Neg, entre * et ^ (donc -2^2 = -(2^2), 2^-1 = 2^(-1))
// - '!' postfixé : s'applique tout de suite au dernier opérande complet (3!! = (3!)!)
// - ^ associatif à droite
// - Appels : la virgule sépare les arguments ; l'arité est comptée pendant le parcours.

use tracing::debug;

use super::erreur::{ErreurCalc, Resultat};
use super::expr::Expr;
use super::jetons::Tok;
use super::mode::{Constante, Mode};
use super::normalisation::{ExpressionNormalisee, LAMBDA_RENOMME};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binaire {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

/// Élément de sortie RPN.
#[derive(Clone, Debug, PartialEq)]
pub enum Rpn {
    Nombre(f64),
    Mot { nom: String, pos: usize },
    Binaire(Binaire),
    Neg,
    Fact,
    Appel { nom: String, argc: usize, pos: usize },
}

// Pile d'opérateurs.
#[derive(Clone, Debug)]
enum Pile {
    LPar { appel: bool },
    Op(Binaire),
    Neg,
    Fonction { nom: String, pos: usize },
}

const PREC_NEG: i32 = 3;

fn precedence(op: Binaire) -> i32 {
    match op {
        Binaire::Add | Binaire::Sub => 1,
        Binaire::Mul | Binaire::Div | Binaire::Mod => 2,
        Binaire::Pow => 4,
    }
}

fn binaire(t: &Tok) -> Option<Binaire> {
    Some(match t {
        Tok::Plus => Binaire::Add,
        Tok::Minus => Binaire::Sub,
        Tok::Star => Binaire::Mul,
        Tok::Slash => Binaire::Div,
        Tok::Percent => Binaire::Mod,
        Tok::Caret => Binaire::Pow,
        _ => return None,
    })
}

fn est_appelable(nom: &str, mode: Mode) -> bool {
    mode.fonction(nom).is_some() || mode.agregat(nom).is_some()
}

/// Convertit l'expression normalisée en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Ident("sqrt"), LPar, Num(4), RPar, Bang]
///   rpn:    [Nombre(4), Appel{sqrt, 1}, Fact]
pub fn to_rpn(n: &ExpressionNormalisee) -> Resultat<Vec<Rpn>> {
    let mode = n.mode;
    let jetons = &n.jetons;

    let mut out: Vec<Rpn> = Vec::new();
    let mut ops: Vec<Pile> = Vec::new();
    let mut arites: Vec<usize> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for (k, j) in jetons.iter().enumerate() {
        let suivant = jetons.get(k + 1).map(|s| &s.tok);

        match &j.tok {
            Tok::Num(v) => {
                out.push(Rpn::Nombre(*v));
                prev_was_value = true;
            }

            Tok::Ident(nom) => {
                if est_appelable(nom, mode) {
                    if suivant != Some(&Tok::LPar) {
                        return Err(ErreurCalc::syntaxe(format!(
                            "'{nom}' doit être suivi de '('"
                        )));
                    }
                    ops.push(Pile::Fonction {
                        nom: nom.clone(),
                        pos: j.pos,
                    });
                    prev_was_value = false;
                } else {
                    if suivant == Some(&Tok::LPar) {
                        return Err(ErreurCalc::syntaxe(format!(
                            "'{nom}' n'est pas une fonction"
                        )));
                    }
                    out.push(Rpn::Mot {
                        nom: nom.clone(),
                        pos: j.pos,
                    });
                    prev_was_value = true;
                }
            }

            Tok::LPar => {
                let appel = matches!(ops.last(), Some(Pile::Fonction { .. }));
                if appel {
                    arites.push(if suivant == Some(&Tok::RPar) { 0 } else { 1 });
                }
                ops.push(Pile::LPar { appel });
                prev_was_value = false;
            }

            Tok::Comma => {
                depiler_jusqu_a_parenthese(&mut ops, &mut out)?;
                match (ops.last(), arites.last_mut()) {
                    (Some(Pile::LPar { appel: true }), Some(n)) => *n += 1,
                    _ => return Err(ErreurCalc::syntaxe("virgule hors d'un appel")),
                }
                prev_was_value = false;
            }

            Tok::RPar => {
                depiler_jusqu_a_parenthese(&mut ops, &mut out)?;
                let appel = matches!(ops.pop(), Some(Pile::LPar { appel: true }));

                if appel {
                    let argc = arites.pop().unwrap_or(0);
                    if let Some(Pile::Fonction { nom, pos }) = ops.pop() {
                        out.push(Rpn::Appel { nom, argc, pos });
                    }
                }

                prev_was_value = true;
            }

            Tok::Bang => {
                if !prev_was_value {
                    return Err(ErreurCalc::syntaxe("'!' sans opérande"));
                }
                // postfixe de plus haute priorité : le dernier opérande est complet
                out.push(Rpn::Fact);
            }

            Tok::Minus | Tok::Plus if !prev_was_value => {
                // signe unaire : '+' ignoré, '-' => Neg (préfixe : ne dépile rien)
                if j.tok == Tok::Minus {
                    ops.push(Pile::Neg);
                }
            }

            Tok::Egal => {
                return Err(ErreurCalc::syntaxe("'=' inattendu"));
            }

            t => {
                let Some(op) = binaire(t) else {
                    return Err(ErreurCalc::syntaxe("opérateur inconnu"));
                };

                // dépile tant que:
                // - on n'est pas bloqué par '(' ou une fonction
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    let p_top = match top {
                        Pile::Op(o) => precedence(*o),
                        Pile::Neg => PREC_NEG,
                        Pile::LPar { .. } | Pile::Fonction { .. } => break,
                    };
                    let p_tok = precedence(op);

                    let doit_pop = if op == Binaire::Pow {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    match ops.pop() {
                        Some(Pile::Op(o)) => out.push(Rpn::Binaire(o)),
                        Some(Pile::Neg) => out.push(Rpn::Neg),
                        _ => break,
                    }
                }

                ops.push(Pile::Op(op));
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        match op {
            Pile::LPar { .. } | Pile::Fonction { .. } => {
                return Err(ErreurCalc::syntaxe("parenthèses non fermées"))
            }
            Pile::Op(o) => out.push(Rpn::Binaire(o)),
            Pile::Neg => out.push(Rpn::Neg),
        }
    }

    debug!(rpn = %format_rpn(&out), "rpn");
    Ok(out)
}

fn depiler_jusqu_a_parenthese(ops: &mut Vec<Pile>, out: &mut Vec<Rpn>) -> Resultat<()> {
    loop {
        match ops.last() {
            None => return Err(ErreurCalc::syntaxe("parenthèse fermante sans ouvrante")),
            Some(Pile::LPar { .. }) => return Ok(()),
            Some(Pile::Fonction { .. }) => {
                return Err(ErreurCalc::syntaxe("appel de fonction incomplet"))
            }
            Some(Pile::Op(_)) | Some(Pile::Neg) => {}
        }
        match ops.pop() {
            Some(Pile::Op(o)) => out.push(Rpn::Binaire(o)),
            Some(Pile::Neg) => out.push(Rpn::Neg),
            _ => {}
        }
    }
}

/// Construit une Expr à partir d'une RPN.
pub fn from_rpn(rpn: &[Rpn], mode: Mode) -> Resultat<Expr> {
    let mut st: Vec<Expr> = Vec::new();

    for item in rpn {
        match item {
            Rpn::Nombre(v) => st.push(Expr::Nombre(*v)),

            Rpn::Mot { nom, pos } => st.push(atome(nom, *pos)?),

            Rpn::Binaire(op) => {
                let b = st.pop().ok_or_else(operande_manquant)?;
                let a = st.pop().ok_or_else(operande_manquant)?;
                let (a, b) = (Box::new(a), Box::new(b));
                st.push(match op {
                    Binaire::Add => Expr::Add(a, b),
                    Binaire::Sub => Expr::Sub(a, b),
                    Binaire::Mul => Expr::Mul(a, b),
                    Binaire::Div => Expr::Div(a, b),
                    Binaire::Mod => Expr::Mod(a, b),
                    Binaire::Pow => Expr::Pow(a, b),
                });
            }

            Rpn::Neg => {
                let a = st.pop().ok_or_else(operande_manquant)?;
                st.push(Expr::Neg(Box::new(a)));
            }

            Rpn::Fact => {
                let a = st.pop().ok_or_else(operande_manquant)?;
                st.push(Expr::Factorielle(Box::new(a)));
            }

            Rpn::Appel { nom, argc, pos } => {
                if st.len() < *argc {
                    return Err(operande_manquant());
                }
                let args = st.split_off(st.len() - argc);
                st.push(appel(nom, args, *pos, mode)?);
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurCalc::syntaxe("expression invalide"));
    }
    st.pop().ok_or_else(|| ErreurCalc::syntaxe("expression vide"))
}

fn operande_manquant() -> ErreurCalc {
    ErreurCalc::syntaxe("opérande manquant")
}

fn atome(nom: &str, pos: usize) -> Resultat<Expr> {
    match nom {
        "x" => Ok(Expr::Var { pos }),
        "i" => Ok(Expr::Imaginaire),
        LAMBDA_RENOMME => Ok(Expr::Constante(Constante::Lambda)),
        _ => Constante::depuis_nom(nom)
            .map(Expr::Constante)
            .ok_or_else(|| ErreurCalc::syntaxe(format!("mot inattendu: '{nom}'"))),
    }
}

fn appel(nom: &str, mut args: Vec<Expr>, pos: usize, mode: Mode) -> Resultat<Expr> {
    if let Some(genre) = mode.agregat(nom) {
        if args.len() != 3 {
            return Err(ErreurCalc::AgregatMalForme(pos));
        }
        let corps = args.pop().map(Box::new);
        let fin = args.pop().map(Box::new);
        let debut = args.pop().map(Box::new);
        return match (debut, fin, corps) {
            (Some(debut), Some(fin), Some(corps)) => Ok(Expr::Agregat {
                genre,
                debut,
                fin,
                corps,
            }),
            _ => Err(ErreurCalc::AgregatMalForme(pos)),
        };
    }

    let f = mode
        .fonction(nom)
        .ok_or_else(|| ErreurCalc::syntaxe(format!("fonction inconnue: '{nom}'")))?;
    let (min, max) = f.arite();
    if args.len() < min || args.len() > max {
        return Err(ErreurCalc::syntaxe(format!(
            "{nom}() attend {min} à {max} argument(s), {} reçu(s)",
            args.len()
        )));
    }
    Ok(Expr::Appel(f, args))
}

/// Analyse complète : RPN puis AST, avec la règle du mode Calcul sur `x`.
pub fn analyser(n: &ExpressionNormalisee) -> Resultat<Expr> {
    let rpn = to_rpn(n)?;
    let expr = from_rpn(&rpn, n.mode)?;

    // En Calcul, x n'existe que comme indice d'un sum/product.
    if n.mode == Mode::Calcul {
        if let Some(pos) = expr.var_hors_agregat() {
            return Err(ErreurCalc::AgregatMalForme(pos));
        }
    }

    Ok(expr)
}

/// Format utilitaire (debug/“démarche”) : RPN en texte.
pub fn format_rpn(rpn: &[Rpn]) -> String {
    rpn.iter()
        .map(|r| match r {
            Rpn::Nombre(v) => format!("{v}"),
            Rpn::Mot { nom, .. } => nom.clone(),
            Rpn::Binaire(Binaire::Add) => "+".into(),
            Rpn::Binaire(Binaire::Sub) => "-".into(),
            Rpn::Binaire(Binaire::Mul) => "*".into(),
            Rpn::Binaire(Binaire::Div) => "/".into(),
            Rpn::Binaire(Binaire::Mod) => "%".into(),
            Rpn::Binaire(Binaire::Pow) => "^".into(),
            Rpn::Neg => "neg".into(),
            Rpn::Fact => "!".into(),
            Rpn::Appel { nom, argc, .. } => format!("{nom}/{argc}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
