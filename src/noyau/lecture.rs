// src/noyau/lecture.rs
//
// Lecture décimale exacte : rationnel à dénominateur 2^a·5^b -> texte décimal
// sans exposant, groupé par milliers (1234567.5 -> "1,234,567.5").

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

pub fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };
    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// r -> entier “scalé” = r * 10^digits (tronqué)
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    let scale = pow10(digits);
    (r.numer() * scale) / r.denom()
}

/// Nombre de décimales d'un rationnel décimal (dénominateur 2^a·5^b), None sinon.
fn decimales(r: &BigRational) -> Option<usize> {
    let mut d = r.denom().clone();
    let (deux, cinq) = (BigInt::from(2), BigInt::from(5));
    let (mut a, mut b) = (0usize, 0usize);

    while (&d % &deux).is_zero() {
        d /= &deux;
        a += 1;
    }
    while (&d % &cinq).is_zero() {
        d /= &cinq;
        b += 1;
    }
    (d == BigInt::from(1)).then_some(a.max(b))
}

/* ------------------------ Rationnels depuis le texte ------------------------ */

/// Au-delà, 10^p n'est pas construit.
pub const EXPOSANT_MAX: usize = 1_000_000;

/// Littéral décimal exact : `[-+]chiffres[.chiffres][e[-+]chiffres]`.
pub fn rationnel_decimal(s: &str) -> Option<BigRational> {
    let (mantisse, exposant) = match s.split_once(['e', 'E']) {
        Some((m, e)) => (m, e.parse::<i64>().ok()?),
        None => (s, 0),
    };

    let (neg, corps) = match mantisse.as_bytes().first()? {
        b'-' => (true, &mantisse[1..]),
        b'+' => (false, &mantisse[1..]),
        _ => (false, mantisse),
    };

    let (ent, frac) = corps.split_once('.').unwrap_or((corps, ""));
    if ent.is_empty() && frac.is_empty() {
        return None;
    }
    if !ent.bytes().chain(frac.bytes()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let chiffres: BigInt = format!("0{ent}{frac}").parse().ok()?;
    let chiffres = if neg { -chiffres } else { chiffres };

    let puissance = exposant - frac.len() as i64;
    let p = usize::try_from(puissance.unsigned_abs()).ok()?;
    if p > EXPOSANT_MAX {
        return None;
    }
    Some(if puissance >= 0 {
        BigRational::from_integer(chiffres * pow10(p))
    } else {
        BigRational::new(chiffres, pow10(p))
    })
}

/// Valeur exacte de la forme courte d'un f64 (celle qu'affiche `{:e}`).
pub fn rationnel_f64(v: f64) -> Option<BigRational> {
    if !v.is_finite() {
        return None;
    }
    rationnel_decimal(&format!("{v:e}"))
}

/* ------------------------ Groupement ------------------------ */

/// "1234567.25" -> "1,234,567.25"
pub fn grouper_milliers(s: &str) -> String {
    let (signe, corps) = match s.strip_prefix('-') {
        Some(c) => ("-", c),
        None => ("", s),
    };
    let (ent, fin) = match corps.find('.') {
        Some(i) => corps.split_at(i),
        None => (corps, ""),
    };

    let n = ent.len();
    let mut out = String::with_capacity(n + n / 3 + fin.len() + 1);
    out.push_str(signe);
    for (k, c) in ent.chars().enumerate() {
        if k > 0 && (n - k) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str(fin);
    out
}

/// Texte décimal complet (sans exposant), groupé par milliers.
/// None si le rationnel n'a pas de développement décimal fini.
pub fn decimal_groupe(r: &BigRational) -> Option<String> {
    let digits = decimales(r)?;
    let texte = scaled_to_decimal(rational_scaled(r, digits), digits);
    Some(grouper_milliers(&texte))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(s: &str) -> BigRational {
        rationnel_decimal(s).unwrap_or_else(|| panic!("littéral invalide {s:?}"))
    }

    #[test]
    fn scaled_avec_zeros_de_tete() {
        assert_eq!(scaled_to_decimal(BigInt::from(1205), 4), "0.1205");
        assert_eq!(scaled_to_decimal(BigInt::from(-5), 2), "-0.05");
        assert_eq!(scaled_to_decimal(BigInt::from(42), 0), "42");
    }

    #[test]
    fn litteraux_exacts() {
        assert_eq!(rat("1.5e3"), BigRational::from_integer(BigInt::from(1500)));
        assert_eq!(rat("-.25"), BigRational::new(BigInt::from(-1), BigInt::from(4)));
        assert_eq!(rat("12"), BigRational::from_integer(BigInt::from(12)));
        assert!(rationnel_decimal("1.2.3").is_none());
        assert!(rationnel_decimal("abc").is_none());
        assert!(rationnel_decimal(".").is_none());
        assert!(rationnel_decimal("").is_none());
    }

    #[test]
    fn groupement() {
        assert_eq!(grouper_milliers("1500"), "1,500");
        assert_eq!(grouper_milliers("999"), "999");
        assert_eq!(grouper_milliers("-1234567.125"), "-1,234,567.125");
        assert_eq!(grouper_milliers("100000"), "100,000");
    }

    #[test]
    fn decimal_complet_sans_exposant() {
        assert_eq!(decimal_groupe(&rat("1e25")).unwrap(), "10,000,000,000,000,000,000,000,000");
        assert_eq!(decimal_groupe(&rat("1.5e-7")).unwrap(), "0.00000015");
        assert_eq!(decimal_groupe(&rat("0")).unwrap(), "0");
        let tiers = BigRational::new(BigInt::from(1), BigInt::from(3));
        assert!(decimal_groupe(&tiers).is_none());
    }

    #[test]
    fn forme_courte_des_flottants() {
        assert_eq!(rationnel_f64(0.1), Some(rat("0.1")));
        assert_eq!(rationnel_f64(f64::INFINITY), None);
    }
}
