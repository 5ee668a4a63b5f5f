// src/noyau/jetons.rs

use super::erreur::{ErreurCalc, Resultat};
use super::mode::Mode;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonctions, constantes, variable x, mod (tout mot alphabétique)
    // NOTE: la normalisation puis le parse décideront du rôle du mot.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret, // ^ ou **
    Bang,  // ! postfixé

    LPar,
    RPar,
    Comma,
    Egal,
}

/// Jeton + position (index de caractère dans l'entrée), pour les messages d'erreur.
#[derive(Clone, Debug, PartialEq)]
pub struct Jeton {
    pub tok: Tok,
    pub pos: usize,
}

impl Jeton {
    pub fn new(tok: Tok, pos: usize) -> Self {
        Self { tok, pos }
    }
}

fn est_lettre(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Extrait les "mots" de l'entrée : chiffres et ponctuation servent de séparateurs.
pub fn extraire_mots(s: &str) -> Vec<String> {
    let mut mots = Vec::new();
    let mut courant = String::new();
    for c in s.chars() {
        if est_lettre(c) {
            courant.push(c);
        } else if !courant.is_empty() {
            mots.push(std::mem::take(&mut courant));
        }
    }
    if !courant.is_empty() {
        mots.push(courant);
    }
    mots
}

/// Rejette le premier mot absent de la liste blanche du mode.
pub fn valider_mots(s: &str, mode: Mode) -> Resultat<()> {
    match extraire_mots(s).into_iter().find(|m| !mode.est_legal(m)) {
        Some(mot) => Err(ErreurCalc::MotIllegal(mot)),
        None => Ok(()),
    }
}

/// Tokenize une chaîne (déjà validée) en jetons positionnés.
/// Supporte:
/// - nombres décimaux (ex: 12, 1.5, .5) ; pas de littéral exposant (`e` est une constante)
/// - opérateurs + - * / % ^ ** ! et les glyphes • × · pour la multiplication
/// - parenthèses, virgule, '='
/// - mots [lettres_]+ (normalisés en minuscules)
pub fn tokenize(s: &str) -> Resultat<Vec<Jeton>> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            ',' => Some(Tok::Comma),
            '=' => Some(Tok::Egal),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '/' => Some(Tok::Slash),
            '%' => Some(Tok::Percent),
            '^' => Some(Tok::Caret),
            '!' => Some(Tok::Bang),
            '•' | '×' | '·' => Some(Tok::Star),
            _ => None,
        };
        if let Some(tok) = simple {
            out.push(Jeton::new(tok, i));
            i += 1;
            continue;
        }

        // '*' ou '**'
        if c == '*' {
            if chars.get(i + 1) == Some(&'*') {
                out.push(Jeton::new(Tok::Caret, i));
                i += 2;
            } else {
                out.push(Jeton::new(Tok::Star, i));
                i += 1;
            }
            continue;
        }

        if est_lettre(c) {
            let start = i;
            while i < chars.len() && est_lettre(chars[i]) {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();
            out.push(Jeton::new(Tok::Ident(mot.to_lowercase()), start));
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point = false;
            while i < chars.len() && (chars[i].is_ascii_digit() || (chars[i] == '.' && !point)) {
                if chars[i] == '.' {
                    point = true;
                }
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            let v: f64 = txt
                .parse()
                .map_err(|_| ErreurCalc::syntaxe(format!("nombre invalide: '{txt}'")))?;
            out.push(Jeton::new(Tok::Num(v), start));
            continue;
        }

        return Err(ErreurCalc::syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

pub fn format_tok(t: &Tok) -> String {
    match t {
        Tok::Num(v) => format!("{v}"),
        Tok::Ident(name) => name.clone(),
        Tok::Plus => "+".to_string(),
        Tok::Minus => "-".to_string(),
        Tok::Star => "*".to_string(),
        Tok::Slash => "/".to_string(),
        Tok::Percent => "%".to_string(),
        Tok::Caret => "**".to_string(),
        Tok::Bang => "!".to_string(),
        Tok::LPar => "(".to_string(),
        Tok::RPar => ")".to_string(),
        Tok::Comma => ",".to_string(),
        Tok::Egal => "=".to_string(),
    }
}
