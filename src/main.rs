mod app;
mod color;
mod data;
mod error;
mod state;
mod ui;

use std::path::PathBuf;

use app::ArchiveSearchApp;
use clap::Parser;
use eframe::egui;

/// Browse and search a book catalogue file.
#[derive(Parser, Debug)]
#[command(name = "archive-search", version, about)]
struct Args {
    /// Catalogue file (.csv, .tsv, .txt or .json)
    #[arg(env = "ARCHIVE_CATALOGUE", default_value = "final_catalogue.csv")]
    catalogue: PathBuf,
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();
    log::debug!("starting with {args:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Telugu Search Engine",
        options,
        Box::new(|_cc| Ok(Box::new(ArchiveSearchApp::new(args.catalogue)))),
    )
}
