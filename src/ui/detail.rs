use eframe::egui::{self, Context, RichText, Ui};

use crate::data::detail::{author_profile, copy_link, metadata_fields, CopyLink};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Detail window for the selected book
// ---------------------------------------------------------------------------

/// Show the selected book, if any, in a floating window.
pub fn detail_window(ctx: &Context, state: &mut AppState) {
    let (Some(catalogue), Some(index)) = (state.catalogue.clone(), state.selected) else {
        return;
    };
    let Some(book) = catalogue.get(index) else {
        state.clear_selection();
        return;
    };

    let mut open = true;
    egui::Window::new(book.title().unwrap_or("Book Details"))
        .id(egui::Id::new("book_details"))
        .collapsible(false)
        .resizable(true)
        .default_width(520.0)
        .open(&mut open)
        .show(ctx, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                ui.label(RichText::new("📖").size(48.0));
                ui.vertical(|ui: &mut Ui| {
                    ui.heading(book.display_title());
                    ui.label(format!("Author: {}", book.display_author()));
                    let year = book.display_year();
                    if !year.is_empty() {
                        ui.label(format!("Year: {year}"));
                    }
                });
            });

            ui.separator();
            ui.strong("Metadata");
            egui::Grid::new("book_metadata")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    for (column, value) in metadata_fields(book, catalogue.columns()) {
                        ui.strong(column);
                        ui.label(value);
                        ui.end_row();
                    }
                });

            ui.separator();
            match copy_link(book) {
                CopyLink::DigitalCopy(url) => {
                    link_button(ui, "Access Digital Copy / డిజిటల్ కాపీని యాక్సెస్ చేయండి", &url);
                }
                CopyLink::WebSearch(url) => {
                    link_button(ui, "Search for Copy / కాపీ కోసం వెతకండి", &url);
                }
                CopyLink::LibraryOnly => {
                    ui.label("Visit the library to access this physical copy.");
                }
            }

            if let Some(url) = author_profile(book) {
                ui.separator();
                link_button(ui, "View Author Profile / రచయిత వివరాలు", url);
            }
        });

    if !open {
        state.clear_selection();
    }
}

fn link_button(ui: &mut Ui, text: &str, url: &str) {
    let width = ui.available_width();
    if ui
        .add_sized([width, 28.0], egui::Button::new(text))
        .on_hover_text(url)
        .clicked()
    {
        log::debug!("opening {url}");
        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
    }
}
