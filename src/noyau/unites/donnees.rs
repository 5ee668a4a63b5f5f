// src/noyau/unites/donnees.rs
//
// Tables brutes : une ligne par unité canonique, facteurs vers chaque unité de la famille.
// Volume et devises ne sont pas listés ici : construits depuis mL et EUR.

use super::Facteur::{self, Entier, Formule, Reel};

pub(super) type Ligne = (&'static str, &'static [(&'static str, Facteur)]);

/// Familles à lignes explicites, dans l'ordre d'affichage.
pub(super) const FAMILLES: &[&[Ligne]] = &[LONGUEUR, TEMPS, MASSE, TEMPERATURE, AIRE, ENERGIE, VITESSE];

pub(super) const LONGUEUR: &[Ligne] = &[
    (
        "mm",
        &[
            ("mm", Entier(1)),
            ("cm", Reel(0.1)),
            ("dm", Reel(0.01)),
            ("m", Reel(0.001)),
            ("dam", Reel(0.0001)),
            ("hm", Reel(1e-05)),
            ("km", Reel(1e-06)),
            ("in", Reel(0.0393701)),
            ("ft", Reel(0.00328084)),
            ("yd", Reel(0.00109361)),
            ("mi", Reel(6.2137e-07)),
            ("AU", Reel(6.684587122268446e-15)),
            ("pc", Reel(3.240779038947106e-20)),
            ("ly", Reel(1.0570008340247048e-19)),
        ],
    ),
    (
        "cm",
        &[
            ("mm", Entier(10)),
            ("cm", Entier(1)),
            ("dm", Reel(0.1)),
            ("m", Reel(0.01)),
            ("dam", Reel(0.001)),
            ("hm", Reel(0.0001)),
            ("km", Reel(1e-05)),
            ("in", Reel(0.393701)),
            ("ft", Reel(0.0328084)),
            ("yd", Reel(0.0109361)),
            ("mi", Reel(6.2137e-06)),
            ("AU", Reel(6.684587122268446e-14)),
            ("pc", Reel(3.2407790389471058e-19)),
            ("ly", Reel(1.0570008340247049e-18)),
        ],
    ),
    (
        "dm",
        &[
            ("mm", Entier(100)),
            ("cm", Entier(10)),
            ("dm", Entier(1)),
            ("m", Reel(0.1)),
            ("dam", Reel(0.01)),
            ("hm", Reel(0.001)),
            ("km", Reel(0.0001)),
            ("in", Reel(3.93701)),
            ("ft", Reel(0.328084)),
            ("yd", Reel(0.109361)),
            ("mi", Reel(6.2137e-05)),
            ("AU", Reel(6.684587122268445e-13)),
            ("pc", Reel(3.2407790389471056e-18)),
            ("ly", Reel(1.0570008340247049e-17)),
        ],
    ),
    (
        "m",
        &[
            ("mm", Entier(1000)),
            ("cm", Entier(100)),
            ("dm", Entier(10)),
            ("m", Entier(1)),
            ("dam", Reel(0.1)),
            ("hm", Reel(0.01)),
            ("km", Reel(0.001)),
            ("in", Reel(39.3701)),
            ("ft", Reel(3.28084)),
            ("yd", Reel(1.09361)),
            ("mi", Reel(0.000621371)),
            ("AU", Reel(6.684587122268445e-12)),
            ("pc", Reel(3.2407790389471053e-17)),
            ("ly", Reel(1.0570008340247049e-16)),
        ],
    ),
    (
        "dam",
        &[
            ("mm", Entier(10000)),
            ("cm", Entier(1000)),
            ("dm", Entier(100)),
            ("m", Entier(10)),
            ("dam", Entier(1)),
            ("hm", Reel(0.1)),
            ("km", Reel(0.01)),
            ("in", Reel(393.701)),
            ("ft", Reel(32.8084)),
            ("yd", Reel(10.9361)),
            ("mi", Reel(0.00621371)),
            ("AU", Reel(6.684587122268446e-11)),
            ("pc", Reel(3.240779038947106e-16)),
            ("ly", Reel(1.0570008340247049e-15)),
        ],
    ),
    (
        "hm",
        &[
            ("mm", Entier(100000)),
            ("cm", Entier(10000)),
            ("dm", Entier(1000)),
            ("m", Entier(100)),
            ("dam", Entier(10)),
            ("hm", Entier(1)),
            ("km", Reel(0.1)),
            ("in", Reel(3937.01)),
            ("ft", Reel(328.084)),
            ("yd", Reel(109.361)),
            ("mi", Reel(0.0621371)),
            ("AU", Reel(6.684587122268446e-10)),
            ("pc", Reel(3.2407790389471057e-15)),
            ("ly", Reel(1.0570008340247049e-14)),
        ],
    ),
    (
        "km",
        &[
            ("mm", Entier(1000000)),
            ("cm", Entier(100000)),
            ("dm", Entier(10000)),
            ("m", Entier(1000)),
            ("dam", Entier(100)),
            ("hm", Entier(10)),
            ("km", Entier(1)),
            ("in", Reel(39370.1)),
            ("ft", Reel(3280.84)),
            ("yd", Reel(1093.61)),
            ("mi", Reel(0.621371)),
            ("AU", Reel(6.6845871222684464e-09)),
            ("pc", Reel(3.240779038947106e-14)),
            ("ly", Reel(1.0570008340247048e-13)),
        ],
    ),
    (
        "in",
        &[
            ("mm", Reel(25.4)),
            ("cm", Reel(2.54)),
            ("dm", Reel(0.254)),
            ("m", Reel(0.0254)),
            ("dam", Reel(0.00254)),
            ("hm", Reel(0.000254)),
            ("km", Reel(2.54e-05)),
            ("in", Entier(1)),
            ("ft", Reel(0.08333333333333333)),
            ("yd", Reel(0.027777777777777776)),
            ("mi", Reel(1.5782828282828283e-05)),
            ("AU", Reel(1.6978851290561852e-13)),
            ("pc", Reel(8.2315787589256485e-19)),
            ("ly", Reel(2.6847821184227503e-18)),
        ],
    ),
    (
        "ft",
        &[
            ("mm", Reel(304.8)),
            ("cm", Reel(30.48)),
            ("dm", Reel(3.048)),
            ("m", Reel(0.3048)),
            ("dam", Reel(0.03048)),
            ("hm", Reel(0.003048)),
            ("km", Reel(0.0003048)),
            ("in", Entier(12)),
            ("ft", Entier(1)),
            ("yd", Reel(0.3333333333333333)),
            ("mi", Reel(0.0001893939393939394)),
            ("AU", Reel(2.0374621548674225e-12)),
            ("pc", Reel(9.877894510710778e-18)),
            ("ly", Reel(3.221738542107301e-17)),
        ],
    ),
    (
        "yd",
        &[
            ("mm", Reel(914.4)),
            ("cm", Reel(91.44)),
            ("dm", Reel(9.144)),
            ("m", Reel(0.9144)),
            ("dam", Reel(0.09144)),
            ("hm", Reel(0.009144)),
            ("km", Reel(0.0009144)),
            ("in", Entier(36)),
            ("ft", Entier(3)),
            ("yd", Entier(1)),
            ("mi", Reel(0.0005681818181818182)),
            ("AU", Reel(6.112386464602266e-12)),
            ("pc", Reel(2.9633683532132336e-17)),
            ("ly", Reel(9.665215626321901e-17)),
        ],
    ),
    (
        "mi",
        &[
            ("mm", Entier(1609340)),
            ("cm", Entier(160934)),
            ("dm", Reel(16093.4)),
            ("m", Reel(1609.34)),
            ("dam", Reel(160.934)),
            ("hm", Reel(16.0934)),
            ("km", Reel(1.60934)),
            ("in", Entier(63360)),
            ("ft", Entier(5280)),
            ("yd", Entier(1760)),
            ("mi", Entier(1)),
            ("AU", Reel(1.07577734393515e-08)),
            ("pc", Reel(5.215515338539135e-14)),
            ("ly", Reel(1.7010737222293185e-13)),
        ],
    ),
    (
        "AU",
        &[
            ("mm", Reel(149597870700000.0)),
            ("cm", Reel(14959787070000.0)),
            ("dm", Reel(1495978707000.0)),
            ("m", Reel(149597870700.0)),
            ("dam", Reel(14959787070.0)),
            ("hm", Reel(1495978707.0)),
            ("km", Reel(149597870.7)),
            ("in", Reel(37997859157800.0)),
            ("ft", Reel(45597430989.36)),
            ("yd", Reel(136792292968.08)),
            ("mi", Reel(240753837232338.0)),
            ("AU", Entier(1)),
            ("pc", Reel(4.84814e-06)),
            ("ly", Reel(1.5813e-05)),
        ],
    ),
    (
        "pc",
        &[
            ("mm", Reel(3.08567782e+19)),
            ("cm", Reel(3.08567782e+18)),
            ("dm", Reel(3.08567782e+17)),
            ("m", Reel(3.08567782e+16)),
            ("dam", Reel(3085677820000000.0)),
            ("hm", Reel(308567782000000.0)),
            ("km", Reel(30856778200000.0)),
            ("in", Reel(7.8376216628e+18)),
            ("ft", Reel(9405145995360000.0)),
            ("yd", Reel(2.821543798608e+16)),
            ("mi", Reel(4.9659047428387996e+19)),
            ("AU", Reel(206265.0)),
            ("pc", Entier(1)),
            ("ly", Reel(3.26156)),
        ],
    ),
    (
        "ly",
        &[
            ("mm", Reel(9.46073047258e+18)),
            ("cm", Entier(946073047258000000)),
            ("dm", Entier(94607304725800000)),
            ("m", Entier(9460730472580000)),
            ("dam", Entier(946073047258000)),
            ("hm", Entier(94607304725800)),
            ("km", Entier(9460730472580)),
            ("in", Reel(2.40302554003532e+18)),
            ("ft", Reel(2883630648042384.0)),
            ("yd", Reel(8650891944127152.0)),
            ("mi", Reel(1.5225531978741897e+19)),
            ("AU", Entier(63241)),
            ("pc", Reel(0.3066)),
            ("ly", Entier(1)),
        ],
    ),
];

pub(super) const TEMPS: &[Ligne] = &[
    (
        "ms",
        &[
            ("ms", Entier(1)),
            ("s", Reel(0.001)),
            ("min", Reel(1.6666666666666667e-05)),
            ("h", Reel(2.777777777777778e-07)),
            ("day", Reel(1.1574074074074076e-08)),
            ("week", Reel(1.6534391534391537e-09)),
            ("month", Reel(3.802651744209429e-10)),
            ("year", Reel(3.1688764535078575e-11)),
            ("decade", Reel(3.1688764535078574e-12)),
            ("century", Reel(3.1688764535078576e-13)),
            ("millennium", Reel(3.1688764535078575e-14)),
        ],
    ),
    (
        "s",
        &[
            ("ms", Entier(1000)),
            ("s", Entier(1)),
            ("min", Reel(0.016666666666666666)),
            ("h", Reel(0.0002777777777777778)),
            ("day", Reel(1.1574074074074073e-05)),
            ("week", Reel(1.6534391534391533e-06)),
            ("month", Reel(3.8026517442094284e-07)),
            ("year", Reel(3.1688764535078565e-08)),
            ("decade", Reel(3.1688764535078567e-09)),
            ("century", Reel(3.1688764535078567e-10)),
            ("millennium", Reel(3.168876453507857e-11)),
        ],
    ),
    (
        "min",
        &[
            ("ms", Entier(60000)),
            ("s", Entier(60)),
            ("min", Entier(1)),
            ("h", Reel(0.016666666666666666)),
            ("day", Reel(0.0006944444444444445)),
            ("week", Reel(9.92063492063492e-05)),
            ("month", Reel(2.281591046525657e-05)),
            ("year", Reel(1.9013258721047142e-06)),
            ("decade", Reel(1.9013258721047142e-07)),
            ("century", Reel(1.9013258721047142e-08)),
            ("millennium", Reel(1.901325872104714e-09)),
        ],
    ),
    (
        "h",
        &[
            ("ms", Entier(3600000)),
            ("s", Entier(3600)),
            ("min", Entier(60)),
            ("h", Entier(1)),
            ("day", Reel(0.041666666666666664)),
            ("week", Reel(0.005952380952380952)),
            ("month", Reel(0.001368954627915394)),
            ("year", Reel(0.00011407955232628284)),
            ("decade", Reel(1.1407955232628285e-05)),
            ("century", Reel(1.1407955232628285e-06)),
            ("millennium", Reel(1.1407955232628284e-07)),
        ],
    ),
    (
        "day",
        &[
            ("ms", Entier(86400000)),
            ("s", Entier(86400)),
            ("min", Entier(1440)),
            ("h", Entier(24)),
            ("day", Entier(1)),
            ("week", Reel(0.14285714285714285)),
            ("month", Reel(0.03285491106996946)),
            ("year", Reel(0.002737909255830788)),
            ("decade", Reel(0.0002737909255830788)),
            ("century", Reel(2.737909255830788e-05)),
            ("millennium", Reel(2.737909255830788e-06)),
        ],
    ),
    (
        "week",
        &[
            ("ms", Entier(604800000)),
            ("s", Entier(604800)),
            ("min", Entier(10080)),
            ("h", Entier(168)),
            ("day", Entier(7)),
            ("week", Entier(1)),
            ("month", Reel(0.22998437748978623)),
            ("year", Reel(0.019165364790815518)),
            ("decade", Reel(0.0019165364790815517)),
            ("century", Reel(0.00019165364790815518)),
            ("millennium", Reel(1.916536479081552e-05)),
        ],
    ),
    (
        "month",
        &[
            ("ms", Reel(2629743840.0)),
            ("s", Reel(2629743.8400000003)),
            ("min", Reel(43829.064000000006)),
            ("h", Reel(730.4844)),
            ("day", Reel(30.43685)),
            ("week", Reel(4.348121428571429)),
            ("month", Entier(1)),
            ("year", Reel(0.08333333333333333)),
            ("decade", Reel(0.008333333333333333)),
            ("century", Reel(0.0008333333333333333)),
            ("millennium", Reel(8.333333333333333e-05)),
        ],
    ),
    (
        "year",
        &[
            ("ms", Reel(31556926080.0)),
            ("s", Reel(31556926.08)),
            ("min", Reel(525948.7679999999)),
            ("h", Reel(8765.8128)),
            ("day", Reel(365.2422)),
            ("week", Reel(52.17745714285714)),
            ("month", Entier(12)),
            ("year", Entier(1)),
            ("decade", Reel(0.1)),
            ("century", Reel(0.01)),
            ("millennium", Reel(0.001)),
        ],
    ),
    (
        "decade",
        &[
            ("ms", Reel(315569260800.00006)),
            ("s", Reel(315569260.8)),
            ("min", Reel(5259487.680000001)),
            ("h", Reel(87658.12800000001)),
            ("day", Reel(3652.4220000000005)),
            ("week", Reel(521.7745714285714)),
            ("month", Entier(120)),
            ("year", Entier(10)),
            ("decade", Entier(1)),
            ("century", Reel(0.1)),
            ("millennium", Reel(0.01)),
        ],
    ),
    (
        "century",
        &[
            ("ms", Reel(3155692608000.0)),
            ("s", Reel(3155692608.0)),
            ("min", Reel(52594876.800000004)),
            ("h", Reel(876581.28)),
            ("day", Reel(36524.22)),
            ("week", Reel(5217.745714285715)),
            ("month", Entier(1200)),
            ("year", Entier(100)),
            ("decade", Entier(10)),
            ("century", Entier(1)),
            ("millennium", Reel(0.1)),
        ],
    ),
    (
        "millennium",
        &[
            ("ms", Reel(31556926080000.004)),
            ("s", Reel(31556926080.000004)),
            ("min", Reel(525948768.00000006)),
            ("h", Reel(8765812.8)),
            ("day", Reel(365242.2)),
            ("week", Reel(52177.45714285714)),
            ("month", Entier(12000)),
            ("year", Entier(1000)),
            ("decade", Entier(100)),
            ("century", Entier(10)),
            ("millennium", Entier(1)),
        ],
    ),
];

pub(super) const MASSE: &[Ligne] = &[
    (
        "mg",
        &[
            ("mg", Entier(1)),
            ("g", Reel(0.001)),
            ("kg", Reel(1e-06)),
            ("oz", Reel(3.5274e-05)),
            ("oz t", Reel(3.215074656862798e-05)),
            ("lb", Reel(2.2046e-06)),
            ("st.", Reel(1.5747e-07)),
            ("M⊕", Reel(1.6744248350691538e-31)),
            ("M☉", Reel(5.028992139685286e-37)),
        ],
    ),
    (
        "g",
        &[
            ("mg", Entier(1000)),
            ("g", Entier(1)),
            ("kg", Reel(0.001)),
            ("oz", Reel(0.035274)),
            ("oz t", Reel(0.03215074656862798)),
            ("lb", Reel(0.00220462)),
            ("st.", Reel(0.00015747)),
            ("M⊕", Reel(1.6744248350691537e-28)),
            ("M☉", Reel(5.028992139685286e-34)),
        ],
    ),
    (
        "kg",
        &[
            ("mg", Entier(1000000)),
            ("g", Entier(1000)),
            ("kg", Entier(1)),
            ("oz", Reel(35.274)),
            ("oz t", Reel(32.15074656862798)),
            ("lb", Reel(2.20462)),
            ("st.", Reel(0.15747)),
            ("M⊕", Reel(1.6744248350691536e-25)),
            ("M☉", Reel(5.028992139685286e-31)),
        ],
    ),
    (
        "oz",
        &[
            ("mg", Reel(28349.5)),
            ("g", Reel(28.3495)),
            ("kg", Reel(0.0283495)),
            ("oz", Entier(1)),
            ("oz t", Reel(0.911457589847319)),
            ("lb", Reel(0.0625)),
            ("st.", Reel(0.00446429)),
            ("M⊕", Reel(4.7469106861792974e-27)),
            ("M☉", Reel(1.4256941266400802e-32)),
        ],
    ),
    (
        "oz t",
        &[
            ("mg", Reel(31103.4768)),
            ("g", Reel(31.1034768)),
            ("kg", Reel(0.031103476799999998)),
            ("oz", Reel(1.0971437520943932)),
            ("oz t", Entier(1)),
            ("lb", Reel(7.088032101233703e-05)),
            ("st.", Reel(5.062880072309789e-06)),
            ("M⊕", Reel(5.383400852052507e-30)),
            ("M☉", Reel(1.616858517786438e-35)),
        ],
    ),
    (
        "lb",
        &[
            ("mg", Entier(453592)),
            ("g", Reel(453.592)),
            ("kg", Reel(0.453592)),
            ("oz", Entier(16)),
            ("oz t", Reel(14108.2882486656)),
            ("lb", Entier(1)),
            ("st.", Reel(0.0714286)),
            ("M⊕", Reel(7.595057097886876e-26)),
            ("M☉", Reel(2.2811106026241282e-31)),
        ],
    ),
    (
        "st.",
        &[
            ("mg", Reel(6350000.0)),
            ("g", Reel(6350.0)),
            ("kg", Reel(6.35)),
            ("oz", Entier(224)),
            ("oz t", Reel(197516.0354813184)),
            ("lb", Entier(14)),
            ("st.", Entier(1)),
            ("M⊕", Reel(1.0632597702689125e-24)),
            ("M☉", Reel(3.193410008700156e-30)),
        ],
    ),
    (
        "M⊕",
        &[
            ("mg", Reel(5.9722e+30)),
            ("g", Reel(5.9722e+27)),
            ("kg", Reel(5.9722e+24)),
            ("oz", Reel(1.6930888390000002e+23)),
            ("oz t", Reel(1.8575618414496e+29)),
            ("lb", Reel(2.7089421424000003e+24)),
            ("st.", Reel(3.792347e+25)),
            ("M⊕", Entier(1)),
            ("M☉", Reel(3.0034146856628466e-06)),
        ],
    ),
    (
        "M☉",
        &[
            ("mg", Reel(1.98847e+36)),
            ("g", Reel(1.98847e+33)),
            ("kg", Reel(1.98847e+30)),
            ("oz", Reel(5.6372130264999994e+28)),
            ("oz t", Reel(6.1848330512495995e+34)),
            ("lb", Reel(9.019540842399999e+29)),
            ("st.", Reel(1.26267845e+31)),
            ("M⊕", Reel(332954.355178996)),
            ("M☉", Entier(1)),
        ],
    ),
];

pub(super) const TEMPERATURE: &[Ligne] = &[
    (
        "°C",
        &[
            ("°C", Entier(1)),
            ("°F", Formule("x*(9/5)+32")),
            ("K", Formule("x+273.15")),
        ],
    ),
    (
        "°F",
        &[
            ("°C", Formule("x*(5/9)-(32*5/9)")),
            ("°F", Entier(1)),
            ("K", Formule("x*(5/9)-(32*5/9)+273.15")),
        ],
    ),
    (
        "K",
        &[
            ("°C", Formule("x-273.15")),
            ("°F", Formule("x*(9/5)-(273.15*9/5)+32")),
            ("K", Entier(1)),
        ],
    ),
];

pub(super) const AIRE: &[Ligne] = &[
    (
        "mm²",
        &[
            ("mm²", Entier(1)),
            ("m²", Reel(1e-06)),
            ("km²", Reel(1e-12)),
            ("in²", Reel(0.00155)),
            ("ft²", Reel(1.0764e-05)),
            ("yd²", Reel(1.196e-06)),
            ("mi²", Reel(3.861e-13)),
            ("a", Reel(1e-08)),
            ("ha", Reel(1e-10)),
            ("ac", Reel(2.4711e-10)),
        ],
    ),
    (
        "m²",
        &[
            ("mm²", Entier(1000000)),
            ("m²", Entier(1)),
            ("km²", Reel(1e-06)),
            ("in²", Entier(1550)),
            ("ft²", Reel(10.7639)),
            ("yd²", Reel(1.19599)),
            ("mi²", Reel(3.861e-07)),
            ("a", Reel(0.01)),
            ("ha", Reel(0.0001)),
            ("ac", Reel(0.000247105)),
        ],
    ),
    (
        "km²",
        &[
            ("mm²", Reel(1000000000000.0)),
            ("m²", Reel(1000000.0)),
            ("km²", Entier(1)),
            ("in²", Reel(1550000000.0)),
            ("ft²", Reel(10760000.0)),
            ("yd²", Reel(1196000.0)),
            ("mi²", Reel(0.386102)),
            ("a", Entier(10000)),
            ("ha", Entier(100)),
            ("ac", Reel(247.105)),
        ],
    ),
    (
        "in²",
        &[
            ("mm²", Reel(645.16)),
            ("m²", Reel(0.00064516)),
            ("km²", Reel(6.4516e-10)),
            ("in²", Entier(1)),
            ("ft²", Reel(0.00694444)),
            ("yd²", Reel(0.000771605)),
            ("mi²", Reel(2.491e-10)),
            ("a", Reel(6.4516e-06)),
            ("ha", Reel(6.4516e-08)),
            ("ac", Reel(1.5942e-07)),
        ],
    ),
    (
        "ft²",
        &[
            ("mm²", Entier(92903)),
            ("m²", Reel(0.092903)),
            ("km²", Reel(9.2903e-08)),
            ("in²", Entier(144)),
            ("ft²", Entier(1)),
            ("yd²", Reel(0.111111)),
            ("mi²", Reel(3.587e-08)),
            ("a", Reel(0.00092903)),
            ("ha", Reel(9.2903e-06)),
            ("ac", Reel(2.2957e-05)),
        ],
    ),
    (
        "yd²",
        &[
            ("mm²", Entier(836127)),
            ("m²", Reel(0.836127)),
            ("km²", Reel(8.3613e-07)),
            ("in²", Entier(1296)),
            ("ft²", Entier(9)),
            ("yd²", Entier(1)),
            ("mi²", Reel(3.2283e-07)),
            ("a", Reel(0.0083613)),
            ("ha", Reel(8.3613e-05)),
            ("ac", Reel(0.000206612)),
        ],
    ),
    (
        "mi²",
        &[
            ("mm²", Reel(2590000000000.0)),
            ("m²", Reel(2590000.0)),
            ("km²", Reel(2.58999)),
            ("in²", Reel(4014000000.0)),
            ("ft²", Reel(27880000.0)),
            ("yd²", Reel(3098000.0)),
            ("mi²", Entier(1)),
            ("a", Reel(25899.9)),
            ("ha", Reel(258.999)),
            ("ac", Entier(640)),
        ],
    ),
    (
        "a",
        &[
            ("mm²", Reel(100000000.0)),
            ("m²", Entier(100)),
            ("km²", Reel(0.0001)),
            ("in²", Reel(155000.0)),
            ("ft²", Reel(1076.39)),
            ("yd²", Reel(119.599)),
            ("mi²", Reel(3.86102e-05)),
            ("a", Entier(1)),
            ("ha", Reel(0.01)),
            ("ac", Reel(0.0247105)),
        ],
    ),
    (
        "ha",
        &[
            ("mm²", Reel(10000000000.0)),
            ("m²", Entier(10000)),
            ("km²", Reel(0.01)),
            ("in²", Reel(15500000.0)),
            ("ft²", Entier(107639)),
            ("yd²", Reel(11959.9)),
            ("mi²", Reel(0.00386102)),
            ("a", Entier(100)),
            ("ha", Entier(1)),
            ("ac", Reel(2.47105)),
        ],
    ),
    (
        "ac",
        &[
            ("mm²", Entier(4046860000)),
            ("m²", Reel(4046.86)),
            ("km²", Reel(0.00404686)),
            ("in²", Reel(6273000.0)),
            ("ft²", Entier(43560)),
            ("yd²", Entier(4840)),
            ("mi²", Reel(0.0015625)),
            ("a", Reel(40.4686)),
            ("ha", Reel(0.404686)),
            ("ac", Entier(1)),
        ],
    ),
];

pub(super) const ENERGIE: &[Ligne] = &[
    (
        "mJ",
        &[
            ("mJ", Entier(1)),
            ("J", Reel(0.001)),
            ("kJ", Reel(1e-06)),
            ("Wh", Reel(2.777778e-07)),
            ("kWh", Reel(2.777778e-10)),
            ("mcal", Reel(0.23900574)),
            ("cal", Reel(0.00023900574)),
            ("kcal", Reel(2.3900574e-07)),
            ("meV", Reel(6.24151e+18)),
            ("eV", Reel(6241510000000000.0)),
            ("keV", Reel(6241510000000.0)),
            ("Btu", Reel(9.478171e-07)),
            ("thm", Reel(9.480434e-12)),
        ],
    ),
    (
        "J",
        &[
            ("mJ", Entier(1000)),
            ("J", Entier(1)),
            ("kJ", Reel(0.001)),
            ("Wh", Reel(0.0002777778)),
            ("kWh", Reel(2.777778e-07)),
            ("mcal", Reel(239.00574)),
            ("cal", Reel(0.23900574)),
            ("kcal", Reel(0.00023900574)),
            ("meV", Reel(6.24151e+21)),
            ("eV", Reel(6.24151e+18)),
            ("keV", Reel(6241510000000000.0)),
            ("Btu", Reel(0.0009478171)),
            ("thm", Reel(9.480434e-09)),
        ],
    ),
    (
        "kJ",
        &[
            ("mJ", Entier(1000000)),
            ("J", Entier(1000)),
            ("kJ", Entier(1)),
            ("Wh", Reel(0.2777778)),
            ("kWh", Reel(0.0002777778)),
            ("mcal", Reel(239005.74)),
            ("cal", Reel(239.00574)),
            ("kcal", Reel(0.23900574)),
            ("meV", Reel(6.24151e+24)),
            ("eV", Reel(6.24151e+21)),
            ("keV", Reel(6.24151e+18)),
            ("Btu", Reel(0.9478171)),
            ("thm", Reel(9.480434e-06)),
        ],
    ),
    (
        "Wh",
        &[
            ("mJ", Entier(3600000)),
            ("J", Entier(3600)),
            ("kJ", Reel(3.6)),
            ("Wh", Entier(1)),
            ("kWh", Reel(0.001)),
            ("mcal", Entier(860421)),
            ("cal", Reel(860.421)),
            ("kcal", Reel(0.860421)),
            ("meV", Reel(2.247e+25)),
            ("eV", Reel(2.247e+22)),
            ("keV", Reel(2.247e+19)),
            ("Btu", Reel(3.41214)),
            ("thm", Reel(3.413e-05)),
        ],
    ),
    (
        "kWh",
        &[
            ("mJ", Entier(3600000000)),
            ("J", Entier(3600000)),
            ("kJ", Entier(3600)),
            ("Wh", Entier(1000)),
            ("kWh", Entier(1)),
            ("mcal", Entier(860421000)),
            ("cal", Entier(860421)),
            ("kcal", Reel(860.421)),
            ("meV", Reel(2.247e+28)),
            ("eV", Reel(2.247e+25)),
            ("keV", Reel(2.247e+22)),
            ("Btu", Reel(3412.14)),
            ("thm", Reel(0.03413)),
        ],
    ),
    (
        "mcal",
        &[
            ("mJ", Reel(4.184)),
            ("J", Reel(0.004184)),
            ("kJ", Reel(4.184e-06)),
            ("Wh", Reel(1.16222e-06)),
            ("kWh", Reel(1.16222e-09)),
            ("mcal", Entier(1)),
            ("cal", Reel(0.001)),
            ("kcal", Reel(1e-06)),
            ("meV", Reel(2.611e+19)),
            ("eV", Reel(2.611e+16)),
            ("keV", Reel(26110000000000.0)),
            ("Btu", Reel(3.96567e-06)),
            ("thm", Reel(3.9666e-11)),
        ],
    ),
    (
        "cal",
        &[
            ("mJ", Entier(4184)),
            ("J", Reel(4.184)),
            ("kJ", Reel(0.004184)),
            ("Wh", Reel(0.00116222)),
            ("kWh", Reel(1.16222e-06)),
            ("mcal", Entier(1000)),
            ("cal", Entier(1)),
            ("kcal", Reel(0.001)),
            ("meV", Reel(2.611e+22)),
            ("eV", Reel(2.611e+19)),
            ("keV", Reel(2.611e+16)),
            ("Btu", Reel(0.00396567)),
            ("thm", Reel(3.9666e-08)),
        ],
    ),
    (
        "kcal",
        &[
            ("mJ", Entier(4184000)),
            ("J", Entier(4184)),
            ("kJ", Reel(4.184)),
            ("Wh", Reel(1.16222)),
            ("kWh", Reel(0.00116222)),
            ("mcal", Entier(1000000)),
            ("cal", Entier(1000)),
            ("kcal", Entier(1)),
            ("meV", Reel(2.611e+25)),
            ("eV", Reel(2.611e+22)),
            ("keV", Reel(2.611e+19)),
            ("Btu", Reel(3.96567)),
            ("thm", Reel(3.9666e-05)),
        ],
    ),
    (
        "meV",
        &[
            ("mJ", Reel(1.6022e-19)),
            ("J", Reel(1.6022e-22)),
            ("kJ", Reel(1.6022e-25)),
            ("Wh", Reel(4.4505e-26)),
            ("kWh", Reel(4.4505e-29)),
            ("mcal", Reel(3.8293e-20)),
            ("cal", Reel(3.8293e-23)),
            ("kcal", Reel(3.8293e-26)),
            ("meV", Entier(1)),
            ("eV", Reel(0.001)),
            ("keV", Reel(1e-06)),
            ("Btu", Reel(1.5186e-25)),
            ("thm", Reel(1.5189e-30)),
        ],
    ),
    (
        "eV",
        &[
            ("mJ", Reel(1.6022e-16)),
            ("J", Reel(1.6022e-19)),
            ("kJ", Reel(1.6022e-22)),
            ("Wh", Reel(4.4505e-23)),
            ("kWh", Reel(4.4505e-26)),
            ("mcal", Reel(3.8293e-17)),
            ("cal", Reel(3.8293e-20)),
            ("kcal", Reel(3.8293e-23)),
            ("meV", Entier(1000)),
            ("eV", Entier(1)),
            ("keV", Reel(0.001)),
            ("Btu", Reel(1.5186e-22)),
            ("thm", Reel(1.5189e-27)),
        ],
    ),
    (
        "keV",
        &[
            ("mJ", Reel(1.6022e-13)),
            ("J", Reel(1.6022e-16)),
            ("kJ", Reel(1.6022e-19)),
            ("Wh", Reel(4.4505e-20)),
            ("kWh", Reel(4.4505e-23)),
            ("mcal", Reel(3.8293e-14)),
            ("cal", Reel(3.8293e-17)),
            ("kcal", Reel(3.8293e-20)),
            ("meV", Entier(1000000)),
            ("eV", Entier(1000)),
            ("keV", Entier(1)),
            ("Btu", Reel(1.5186e-19)),
            ("thm", Reel(1.5189e-24)),
        ],
    ),
    (
        "Btu",
        &[
            ("mJ", Entier(1055060)),
            ("J", Reel(1055.06)),
            ("kJ", Reel(1.05506)),
            ("Wh", Reel(0.293071)),
            ("kWh", Reel(0.000293071)),
            ("mcal", Entier(252164)),
            ("cal", Reel(252.164)),
            ("kcal", Reel(0.252164)),
            ("meV", Reel(6.585e+24)),
            ("eV", Reel(6.585e+21)),
            ("keV", Reel(6.585e+18)),
            ("Btu", Entier(1)),
            ("thm", Reel(1.0002e-05)),
        ],
    ),
    (
        "thm",
        &[
            ("mJ", Reel(105500000000.0)),
            ("J", Reel(105500000.0)),
            ("kJ", Reel(105500.0)),
            ("Wh", Reel(29300.1)),
            ("kWh", Reel(29.3001)),
            ("mcal", Reel(25210000000.0)),
            ("cal", Reel(25210000.0)),
            ("kcal", Reel(25210.0)),
            ("meV", Reel(6.584e+29)),
            ("eV", Reel(6.584e+26)),
            ("keV", Reel(6.584e+23)),
            ("Btu", Reel(99976.1)),
            ("thm", Entier(1)),
        ],
    ),
];

pub(super) const VITESSE: &[Ligne] = &[
    (
        "m/s",
        &[
            ("m/s", Entier(1)),
            ("km/h", Reel(3.6)),
            ("ft/s", Reel(3.28084)),
            ("mph", Reel(2.23694)),
            ("kn", Reel(1.94384)),
            ("c", Reel(3.3356409519815204e-09)),
        ],
    ),
    (
        "km/h",
        &[
            ("m/s", Reel(0.277778)),
            ("km/h", Entier(1)),
            ("ft/s", Reel(0.911344)),
            ("mph", Reel(0.621371)),
            ("kn", Reel(0.539957)),
            ("c", Reel(9.265669311059779e-10)),
        ],
    ),
    (
        "ft/s",
        &[
            ("m/s", Reel(0.3048)),
            ("km/h", Reel(1.09728)),
            ("ft/s", Entier(1)),
            ("mph", Reel(0.681818)),
            ("kn", Reel(0.592484)),
            ("c", Reel(1.0167033296294609e-09)),
        ],
    ),
    (
        "mph",
        &[
            ("m/s", Reel(0.44704)),
            ("km/h", Reel(1.60934)),
            ("ft/s", Reel(1.46667)),
            ("mph", Entier(1)),
            ("kn", Reel(0.868976)),
            ("c", Reel(1.4911624594229262e-09)),
        ],
    ),
    (
        "kn",
        &[
            ("m/s", Reel(0.514444)),
            ("km/h", Reel(1.852)),
            ("ft/s", Reel(1.68781)),
            ("mph", Reel(1.15078)),
            ("kn", Entier(1)),
            ("c", Reel(1.7160059222886249e-09)),
        ],
    ),
    (
        "c",
        &[
            ("m/s", Entier(299792458)),
            ("km/h", Reel(1079252848.8)),
            ("ft/s", Reel(983571087.90472)),
            ("mph", Reel(670617740.99852)),
            ("kn", Reel(582748571.55872)),
            ("c", Entier(1)),
        ],
    ),
];

pub(super) const VOLUME_ML: &[(&str, Facteur)] = &[
    ("mL", Entier(1)),
    ("cL", Reel(0.1)),
    ("dL", Reel(0.01)),
    ("L", Reel(0.001)),
    ("daL", Reel(0.0001)),
    ("hL", Reel(1e-05)),
    ("kL", Reel(1e-06)),
    ("mm³", Entier(1000)),
    ("cm³", Entier(1)),
    ("dm³", Reel(0.001)),
    ("m³", Reel(1e-06)),
    ("dam³", Reel(1e-09)),
    ("hm³", Reel(1e-12)),
    ("km³", Reel(1e-15)),
    ("in³", Reel(0.06102374409473229)),
    ("ft³", Reel(3.5314666721488586e-05)),
    ("yd³", Reel(1.3079506193143923e-06)),
    ("mi³", Reel(2.39913e-16)),
    ("gal", Reel(0.000264172)),
    ("qt.", Reel(0.00105669)),
    ("pt", Reel(0.00211338)),
    ("cp", Reel(0.00416667)),
    ("fl oz", Reel(0.033814)),
    ("tbsp", Reel(0.067628)),
    ("tsp", Reel(0.202884)),
];

pub(super) const DEVISES: &[&str] = &[
    "EUR", "USD", "GBP", "CAD", "JPY", "AUD", "CHF", "NOK", "IDR", "BGN", "ILS", "DKK", "HUF", "RON", "MYR", "SEK", "SGD", "HKD", "KRW", "CNY", "TRY", "HRK", "NZD", "THB", "RUB", "INR", "MXN", "CZK", "BRL", "PLN", "PHP", "ZAR",
];

pub(super) const ALIAS: &[(&str, &str)] = &[
    ("millimeters", "mm"),
    ("millimetres", "mm"),
    ("centimeters", "cm"),
    ("centimetres", "cm"),
    ("decimeters", "dm"),
    ("decimetres", "dm"),
    ("meters", "m"),
    ("metres", "m"),
    ("decameters", "dam"),
    ("decametres", "dam"),
    ("hectometers", "hm"),
    ("hectometres", "hm"),
    ("kilometers", "km"),
    ("kilometres", "km"),
    ("inches", "in"),
    ("\"", "in"),
    ("foot", "ft"),
    ("feet", "ft"),
    ("'", "ft"),
    ("yards", "yd"),
    ("miles", "mi"),
    ("au", "AU"),
    ("ua", "AU"),
    ("astronomicalunits", "AU"),
    ("parsecs", "pc"),
    ("lightyears", "ly"),
    ("light-years", "ly"),
    ("milliseconds", "ms"),
    ("seconds", "s"),
    ("sec", "s"),
    ("minutes", "min"),
    ("hours", "h"),
    ("days", "day"),
    ("d", "day"),
    ("weeks", "week"),
    ("months", "month"),
    ("years", "year"),
    ("yr", "year"),
    ("decades", "decade"),
    ("centuries", "century"),
    ("millenniums", "millennium"),
    ("millennia", "millennium"),
    ("milligrams", "mg"),
    ("grams", "g"),
    ("kilograms", "kg"),
    ("ounces", "oz"),
    ("troyounces", "oz t"),
    ("ozt", "oz t"),
    ("pounds", "lb"),
    ("lbs", "lb"),
    ("st", "st."),
    ("stones", "st."),
    ("earthmasses", "M⊕"),
    ("me", "M⊕"),
    ("m⊕", "M⊕"),
    ("solarmasses", "M☉"),
    ("m☉", "M☉"),
    ("c", "°C"),
    ("°c", "°C"),
    ("celcius", "°C"),
    ("f", "°F"),
    ("°f", "°F"),
    ("fahrenheit", "°F"),
    ("k", "K"),
    ("kelvin", "K"),
    ("€", "EUR"),
    ("euros", "EUR"),
    ("$", "USD"),
    ("usd", "USD"),
    ("dollars", "USD"),
    ("£", "GBP"),
    ("gbp", "GBP"),
    ("cad", "CAD"),
    ("jpy", "JPY"),
    ("¥", "JPY"),
    ("yen", "JPY"),
    ("aud", "AUD"),
    ("chf", "CHF"),
    ("nok", "NOK"),
    ("kr", "NOK"),
    ("idr", "IDR"),
    ("rp", "IDR"),
    ("bgn", "BGN"),
    ("лв", "BGN"),
    ("ils", "ILS"),
    ("₪", "ILS"),
    ("dkk", "DKK"),
    ("huf", "HUF"),
    ("ron", "RON"),
    ("lei", "RON"),
    ("myr", "MYR"),
    ("rm", "MYR"),
    ("sek", "SEK"),
    ("sgd", "SGD"),
    ("hkd", "HKD"),
    ("krw", "KRW"),
    ("₩", "KRW"),
    ("cny", "CNY"),
    ("try", "TRY"),
    ("₺", "TRY"),
    ("hrk", "HRK"),
    ("kn", "HRK"),
    ("nzd", "NZD"),
    ("thb", "THB"),
    ("฿", "THB"),
    ("rub", "RUB"),
    ("₽", "RUB"),
    ("inr", "INR"),
    ("₹", "INR"),
    ("mxn", "MXN"),
    ("czk", "CZK"),
    ("kč", "CZK"),
    ("brl", "BRL"),
    ("r$", "BRL"),
    ("pln", "PLN"),
    ("zł", "PLN"),
    ("php", "PHP"),
    ("₱", "PHP"),
    ("zar", "ZAR"),
    ("r", "ZAR"),
    ("millijoules", "mJ"),
    ("mj", "mJ"),
    ("joules", "J"),
    ("j", "J"),
    ("kilojoules", "kJ"),
    ("kj", "kJ"),
    ("wh", "Wh"),
    ("watthour", "Wh"),
    ("watt-hour", "Wh"),
    ("kwh", "kWh"),
    ("kilowatthour", "kWh"),
    ("kilowatt-hour", "kWh"),
    ("millicalories", "mcal"),
    ("calories", "cal"),
    ("kilocalories", "kcal"),
    ("millielectronvolts", "meV"),
    ("mev", "meV"),
    ("electronvolts", "eV"),
    ("ev", "eV"),
    ("kiloelectronvolts", "keV"),
    ("kev", "keV"),
    ("btu", "Btu"),
    ("therms", "thm"),
    ("metersperseconds", "m/s"),
    ("metresperseconds", "m/s"),
    ("meterperseconds", "m/s"),
    ("metreperseconds", "m/s"),
    ("m/sec", "m/s"),
    ("kilometersperhours", "km/h"),
    ("kilometerperhours", "km/h"),
    ("kilometresperhour", "km/h"),
    ("kilometreperhours", "km/h"),
    ("kmh", "km/h"),
    ("kph", "km/h"),
    ("fps", "ft/s"),
    ("footperseconds", "ft/s"),
    ("feetperseconds", "ft/s"),
    ("mi/h", "mph"),
    ("milesperhours", "mph"),
    ("knots", "kn"),
    ("kt", "kn"),
    ("speedoflight", "c"),
    ("lightspeed", "c"),
    ("mm2", "mm²"),
    ("mm^2", "mm²"),
    ("sqmm", "mm²"),
    ("mmsq", "mm²"),
    ("m2", "m²"),
    ("m^2", "m²"),
    ("sqm", "m²"),
    ("msq", "m²"),
    ("km2", "km²"),
    ("km^2", "km²"),
    ("sqkm", "km²"),
    ("kmsq", "km²"),
    ("in2", "in²"),
    ("in^2", "in²"),
    ("sqin", "in²"),
    ("insq", "in²"),
    ("ft2", "ft²"),
    ("ft^2", "ft²"),
    ("sqft", "ft²"),
    ("ftsq", "ft²"),
    ("yd2", "yd²"),
    ("yd^2", "yd²"),
    ("sqyd", "yd²"),
    ("ydsq", "yd²"),
    ("mi2", "mi²"),
    ("mi^2", "mi²"),
    ("sqmi", "mi²"),
    ("misq", "mi²"),
    ("ares", "a"),
    ("hectares", "ha"),
    ("acres", "ac"),
    ("milliliters", "mL"),
    ("millilitres", "mL"),
    ("ml", "mL"),
    ("centiliters", "cL"),
    ("centilitres", "cL"),
    ("cl", "cL"),
    ("deciliters", "dL"),
    ("decilitres", "dL"),
    ("dl", "dL"),
    ("liters", "L"),
    ("litres", "L"),
    ("l", "L"),
    ("decaliters", "daL"),
    ("decalitres", "daL"),
    ("dal", "daL"),
    ("hectoliters", "hL"),
    ("hectolitres", "hL"),
    ("hl", "hL"),
    ("kiloliters", "kL"),
    ("kilolitres", "kL"),
    ("kl", "kL"),
    ("mm3", "mm³"),
    ("cubicmillimeters", "mm³"),
    ("cubicmillimetres", "mm³"),
    ("cm3", "cm³"),
    ("cubiccentimeters", "cm³"),
    ("cubiccentimetres", "cm³"),
    ("dm3", "dm³"),
    ("cubicdecimeters", "dm³"),
    ("cubicdecimetres", "dm³"),
    ("m3", "m³"),
    ("cubicmeters", "m³"),
    ("cubicmetres", "m³"),
    ("dam3", "dam³"),
    ("cubicdecameters", "dam³"),
    ("cubicdecametres", "dam³"),
    ("hm3", "hm³"),
    ("cubihectometers", "hm³"),
    ("cubichectometres", "hm³"),
    ("km3", "km³"),
    ("cubickilometers", "km³"),
    ("cubickilometres", "km³"),
    ("in3", "in³"),
    ("cubicinches", "in³"),
    ("ft3", "ft³"),
    ("cubicfeet", "ft³"),
    ("cubicfoot", "ft³"),
    ("yd3", "yd³"),
    ("cubicyards", "yd³"),
    ("mi3", "mi³"),
    ("cubicmiles", "mi³"),
    ("gallons", "gal"),
    ("quarts", "qt."),
    ("qt", "qt."),
    ("pints", "pt"),
    ("cups", "cp"),
    ("floz", "fl oz"),
    ("fluid ounces", "fl oz"),
    ("tablespoons", "tbsp"),
    ("teaspoon", "tsp"),
];
