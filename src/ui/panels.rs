use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{Facet, YearRange};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – facet filters
// ---------------------------------------------------------------------------

/// Render the facet and year-range filters.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter by");
    ui.separator();

    // Clone the Arc so state stays mutable inside the widgets.
    let Some(catalogue) = state.catalogue.clone() else {
        ui.label("No catalogue loaded.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for facet in Facet::ALL {
                let values: Vec<&str> = catalogue.facet_values(facet).collect();
                let n_selected = state
                    .request
                    .as_ref()
                    .and_then(|r| r.filters.selected(facet))
                    .map_or(0, |s| s.len());
                let header_text = if n_selected == 0 {
                    format!("{facet}  (All {})", facet.plural())
                } else {
                    format!("{facet}  ({n_selected}/{})", values.len())
                };

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(facet)
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.clear_facet(facet);
                        }

                        for value in &values {
                            let mut checked = state
                                .request
                                .as_ref()
                                .is_some_and(|r| r.filters.is_selected(facet, value));
                            if ui.checkbox(&mut checked, *value).changed() {
                                state.toggle_facet(facet, value);
                            }
                        }
                    });
            }

            ui.separator();
            year_sliders(ui, state, catalogue.year_bounds());

            ui.separator();
            ui.label(
                RichText::new("Tip: Use the main search bar for keywords, and filters to narrow down.")
                    .small()
                    .weak(),
            );
        });
}

fn year_sliders(ui: &mut Ui, state: &mut AppState, bounds: Option<YearRange>) {
    ui.strong("Year Range");
    let Some(bounds) = bounds else {
        ui.label("No years in this catalogue.");
        return;
    };

    let mut range = state
        .request
        .as_ref()
        .and_then(|r| r.filters.years)
        .unwrap_or(bounds);

    let lo_changed = ui
        .add(egui::Slider::new(&mut range.lo, bounds.lo..=bounds.hi).text("from"))
        .changed();
    let hi_changed = ui
        .add(egui::Slider::new(&mut range.hi, bounds.lo..=bounds.hi).text("to"))
        .changed();

    if lo_changed || hi_changed {
        if range.lo > range.hi {
            if lo_changed {
                range.hi = range.lo;
            } else {
                range.lo = range.hi;
            }
        }
        state.set_year_range(range);
    }

    if range != bounds && ui.small_button("Reset years").clicked() {
        state.set_year_range(bounds);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(cat) = &state.catalogue {
            if let Some(source) = &state.source {
                ui.label(RichText::new(source.display().to_string()).weak());
            }
            ui.label(format!("Total Books: {}", cat.len()));
            if state.results.matched > 0 {
                ui.label(format!("Showing: {}", state.results.matched));
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open book catalogue")
        .add_filter("Supported files", &["csv", "tsv", "tab", "txt", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("Tab-separated", &["tsv", "tab", "txt"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_from(path);
    }
}
