// src/main.rs
//
// Calculatrice : point d'entrée.
// - avec une sous-commande : exécution en ligne de commande, résultat sur la sortie standard
// - sans sous-commande     : interface eframe (natif)

use std::process;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod app;
mod cli;
mod config;
mod noyau;

use app::AppCalc;
use cli::Cli;
use config::Reglages;

/// Titre de la fenêtre.
const TITRE_APP: &str = "Calculatrice";

fn init_journal() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calculatrice_maths=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn lancer_interface(reglages: Reglages) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([560.0, 740.0])
            .with_min_inner_size([420.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::new(AppCalc::new(reglages)))),
    )
}

fn main() {
    init_journal();

    let cli = Cli::parse();
    let reglages = Reglages::charger_ou_defaut(cli.config.as_deref());

    match cli.commande {
        Some(commande) => match cli::executer(commande, &reglages) {
            Ok(sortie) => println!("{sortie}"),
            Err(e) => {
                eprintln!("Erreur : {e}");
                process::exit(1);
            }
        },
        None => {
            if let Err(e) = lancer_interface(reglages) {
                eprintln!("Erreur : {e}");
                process::exit(1);
            }
        }
    }
}
