// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// - Sélecteur d'écran : Calcul, Équation, Scientifique, Tracé, Conversion
// - Clavier : Enter évalue (quand le champ a le focus)
// - Tracé : courbe dessinée au painter à partir des points échantillonnés
// - Conversion : valeur / de / vers + liste des unités

use eframe::egui;
use egui::{Color32, Pos2, Sense, Stroke};

use super::etat::{AppCalc, Courbe, Demarche, Ecran};
use crate::noyau::{self, trace};

const FOND_TRACE: Color32 = Color32::BLACK;
const GRILLE_TRACE: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);
const COURBE_TRACE: Color32 = Color32::from_rgb(0x47, 0xa0, 0xff);
const GRADUATIONS: usize = 8;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_ecrans(ui);
                ui.add_space(6.0);

                match self.ecran {
                    Ecran::Conversion => self.ui_conversion(ui),
                    _ => self.ui_entree(ui),
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                if self.ecran == Ecran::Calcul {
                    ui.add_space(8.0);
                    self.ui_demarche(ui);
                }
            });
    }

    fn ui_ecrans(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for e in Ecran::TOUS {
                if ui.selectable_label(self.ecran == e, e.titre()).clicked() {
                    self.changer_ecran(e);
                }
            }
        });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        if self.ecran == Ecran::Trace {
            ui.horizontal(|ui| {
                ui.label("Début :");
                ui.add(egui::TextEdit::singleline(&mut self.debut).desired_width(80.0));
                ui.label("Fin :");
                ui.add(egui::TextEdit::singleline(&mut self.fin).desired_width(80.0));
            });
        }

        ui.label("Entrée :");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text(self.ecran.indication())
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue seulement si le champ a le focus (lost_focus : Enter l'a quitté)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l'entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Efface résultat + erreur", Action::ClearResultats);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 30.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        if self.ecran != Ecran::Scientifique {
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                for (label, texte) in [
                    ("(", "("),
                    (")", ")"),
                    ("^", "^"),
                    ("!", "!"),
                    ("π", "pi"),
                    ("e", "e"),
                    ("𝑖", "i"),
                    ("x", "x"),
                    ("√", "sqrt("),
                    ("sin", "sin("),
                    ("cos", "cos("),
                    ("tan", "tan("),
                    ("log", "log("),
                ] {
                    self.bouton_insert(ui, label, texte);
                }
                if self.ecran == Ecran::Resolution {
                    self.bouton_insert(ui, "=", "=");
                }
            });
        }
    }

    fn ui_conversion(&mut self, ui: &mut egui::Ui) {
        let mut enter = false;
        egui::Grid::new("champs_conversion")
            .num_columns(2)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (titre, champ) in [
                    ("Valeur :", &mut self.valeur),
                    ("De :", &mut self.unite_de),
                    ("Vers :", &mut self.unite_vers),
                ] {
                    ui.label(titre);
                    let resp = ui.add(egui::TextEdit::singleline(champ).desired_width(160.0));
                    enter |= resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    ui.end_row();
                }
            });

        ui.horizontal(|ui| {
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            if ui.add_sized([96.0, 30.0], egui::Button::new("Convertir")).clicked() {
                enter = true;
            }
        });

        if enter {
            self.eval_via_noyau();
        }

        egui::CollapsingHeader::new("Unités disponibles")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_monospace(ui, "liste_unites", &self.liste_unites, 9);
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }

        if let Some(courbe) = &self.courbe {
            ui.add_space(6.0);
            Self::dessiner_courbe(ui, courbe);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Normalisée", "demarche_norm", &self.demarche.normalisee);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                Self::champ_demarche(ui, "Arbre", "demarche_arbre", &self.demarche.arbre);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    /* ------------------------ Tracé ------------------------ */

    fn dessiner_courbe(ui: &mut egui::Ui, courbe: &Courbe) {
        let largeur = ui.available_width();
        let (resp, painter) = ui.allocate_painter(egui::vec2(largeur, largeur * 0.75), Sense::hover());
        let zone = resp.rect;
        painter.rect_filled(zone, 0.0, FOND_TRACE);

        let grille = Stroke::new(1.0, GRILLE_TRACE);
        for k in 0..=GRADUATIONS {
            let t = k as f32 / GRADUATIONS as f32;
            let gx = zone.left() + t * zone.width();
            let gy = zone.top() + t * zone.height();
            painter.line_segment([Pos2::new(gx, zone.top()), Pos2::new(gx, zone.bottom())], grille);
            painter.line_segment([Pos2::new(zone.left(), gy), Pos2::new(zone.right(), gy)], grille);
        }

        let (y_min, y_max) = bornes_y(&courbe.points);
        let vers_ecran = |x: f64, y: f64| {
            let tx = (x - courbe.debut) / (courbe.fin - courbe.debut);
            let ty = (y - y_min) / (y_max - y_min);
            Pos2::new(
                zone.left() + tx as f32 * zone.width(),
                zone.bottom() - ty as f32 * zone.height(),
            )
        };

        // un trait par suite de points finis
        let trait_courbe = Stroke::new(2.0, COURBE_TRACE);
        let mut segment: Vec<Pos2> = Vec::new();
        for &(x, y) in &courbe.points {
            if y.is_finite() {
                segment.push(vers_ecran(x, y));
            } else if !segment.is_empty() {
                painter.add(egui::Shape::line(std::mem::take(&mut segment), trait_courbe));
            }
        }
        if !segment.is_empty() {
            painter.add(egui::Shape::line(segment, trait_courbe));
        }

        let texte = ui.visuals().text_color();
        let police = egui::FontId::monospace(12.0);
        painter.text(
            zone.left_bottom() + egui::vec2(4.0, -4.0),
            egui::Align2::LEFT_BOTTOM,
            courbe.debut,
            police.clone(),
            texte,
        );
        painter.text(
            zone.right_bottom() + egui::vec2(-4.0, -4.0),
            egui::Align2::RIGHT_BOTTOM,
            courbe.fin,
            police,
            texte,
        );
    }

    /* ------------------------ Boutons ------------------------ */

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, texte: &str) {
        if ui.add_sized([46.0, 28.0], egui::Button::new(label)).clicked() {
            self.entree.push_str(texte);
            self.focus_entree = true;
        }
    }

    /* ------------------------ Noyau ------------------------ */

    /// Appelle le point d'entrée du noyau correspondant à l'écran, puis dépose le résultat.
    fn eval_via_noyau(&mut self) {
        if self.ecran != Ecran::Conversion && self.entree.trim().is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        let r = match self.ecran {
            Ecran::Calcul => noyau::calculer_detaille(&self.entree, &self.reglages).map(|(s, d)| {
                let d = Demarche {
                    normalisee: d.normalisee,
                    rpn: d.rpn,
                    arbre: d.arbre,
                };
                self.set_resultat(s, d);
            }),
            Ecran::Resolution => noyau::resoudre(&self.entree, &self.reglages)
                .map(|s| self.set_resultat(s, Demarche::default())),
            Ecran::Scientifique => noyau::scientifique(&self.entree, &self.reglages)
                .map(|s| self.set_resultat(s, Demarche::default())),
            Ecran::Trace => {
                let n = self.reglages.points_trace;
                noyau::echantillonner(&self.debut, &self.fin, &self.entree, n).map(|(debut, fin, points)| {
                    let legende = trace::legende(&self.entree);
                    self.set_courbe(Courbe {
                        legende,
                        debut,
                        fin,
                        points,
                    });
                })
            }
            Ecran::Conversion => noyau::convertir(
                &self.valeur,
                &self.unite_de,
                &self.unite_vers,
                &self.table,
                &self.taux,
            )
            .map(|s| self.set_resultat(s, Demarche::default())),
        };

        if let Err(e) = r {
            self.set_erreur(e.to_string());
        }
    }
}

/// Étendue verticale des points finis (élargie si plate).
fn bornes_y(points: &[(f64, f64)]) -> (f64, f64) {
    let (lo, hi) = points
        .iter()
        .filter(|(_, y)| y.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, y)| (lo.min(*y), hi.max(*y)));
    if !lo.is_finite() {
        (-1.0, 1.0)
    } else if lo == hi {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
}
