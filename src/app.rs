use std::path::PathBuf;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{detail, panels, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ArchiveSearchApp {
    pub state: AppState,
}

impl ArchiveSearchApp {
    /// Load the catalogue once up front; a failure is shown in the UI.
    pub fn new(catalogue_path: PathBuf) -> Self {
        let mut state = AppState::default();
        state.load_from(catalogue_path);
        Self { state }
    }
}

impl eframe::App for ArchiveSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: facets ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: search and results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            results::results_panel(ui, &mut self.state);
        });

        // ---- Floating detail window ----
        detail::detail_window(ctx, &mut self.state);
    }
}
