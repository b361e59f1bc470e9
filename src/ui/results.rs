use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::Book;
use crate::data::sort::SortMode;
use crate::state::AppState;

const CARD_COLUMNS: usize = 4;
const CARD_WIDTH: f32 = 220.0;

// ---------------------------------------------------------------------------
// Central panel – search bar, result controls, card grid
// ---------------------------------------------------------------------------

/// Render the search box and the current page of results.
pub fn results_panel(ui: &mut Ui, state: &mut AppState) {
    let Some(catalogue) = state.catalogue.clone() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Database is empty or could not be loaded.  (File → Open…)");
        });
        return;
    };

    hero(ui, state);
    ui.add_space(8.0);

    if state.results.matched == 0 {
        ui.add_space(40.0);
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(
                RichText::new(
                    "No books found. Try a different keyword like 'History', '1947', or 'Telugu'.",
                )
                .color(Color32::GRAY),
            );
        });
        return;
    }

    controls(ui, state);
    ui.separator();

    let items = state.results.items.clone();
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("book_cards")
                .num_columns(CARD_COLUMNS)
                .spacing([16.0, 16.0])
                .show(ui, |ui: &mut Ui| {
                    for (i, &index) in items.iter().enumerate() {
                        if let Some(book) = catalogue.get(index) {
                            if card(ui, state, book) {
                                state.select(index);
                            }
                        }
                        if (i + 1) % CARD_COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
}

fn hero(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new("Telugu Digital Archive")
                .size(36.0)
                .strong()
                .color(Color32::from_rgb(0xFF, 0x4B, 0x4B)),
        );
        ui.label(
            RichText::new("Discover Books • History • Literature")
                .size(16.0)
                .color(Color32::GRAY),
        );
        ui.add_space(8.0);

        let mut query = state
            .request
            .as_ref()
            .map(|r| r.filters.query.clone())
            .unwrap_or_default();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Search for 'Ramayana', '1950', 'Viswanatha'...")
                .desired_width(ui.available_width() * 0.6),
        );
        if response.changed() {
            state.set_query(&query);
        }
    });
}

/// Result count, sort selector, and page navigation.
fn controls(ui: &mut Ui, state: &mut AppState) {
    let current_sort = state.request.as_ref().map(|r| r.sort).unwrap_or_default();

    ui.horizontal(|ui: &mut Ui| {
        ui.label(
            RichText::new(format!("Found {} results", state.results.matched)).color(Color32::GRAY),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            egui::ComboBox::from_id_salt("sort_by")
                .selected_text(current_sort.to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    for mode in SortMode::ALL {
                        if ui
                            .selectable_label(current_sort == mode, mode.to_string())
                            .clicked()
                        {
                            state.set_sort(mode);
                        }
                    }
                });
        });
    });

    if state.results.total_pages > 1 {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(format!(
                "Page {} of {}",
                state.results.page, state.results.total_pages
            ));
            ui.horizontal(|ui: &mut Ui| {
                if ui
                    .add_enabled(state.results.page > 1, egui::Button::new("Previous"))
                    .clicked()
                {
                    state.prev_page();
                }
                if ui
                    .add_enabled(
                        state.results.page < state.results.total_pages,
                        egui::Button::new("Next"),
                    )
                    .clicked()
                {
                    state.next_page();
                }
            });
        });
    }
}

/// One book card. Returns true when "Details" was clicked.
fn card(ui: &mut Ui, state: &AppState, book: &Book) -> bool {
    let cover = state
        .palette
        .as_ref()
        .map_or(Color32::LIGHT_GRAY, |p| p.color_for(book));

    let mut clicked = false;
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(CARD_WIDTH);

        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(CARD_WIDTH, 90.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(8), cover);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "📚",
            egui::FontId::proportional(32.0),
            Color32::WHITE,
        );

        ui.add_space(4.0);
        ui.label(RichText::new(truncate(book.display_title(), 50)).strong());
        ui.label(RichText::new(truncate(book.display_author(), 30)).color(Color32::GRAY));

        let year = book.display_year();
        let meta = if year.is_empty() {
            book.display_language().to_string()
        } else {
            format!("{year} • {}", book.display_language())
        };
        ui.label(RichText::new(meta).small().weak());

        clicked = ui
            .add_sized([CARD_WIDTH, 24.0], egui::Button::new("Details"))
            .clicked();
    });
    clicked
}

/// Cut `text` to `max` characters, marking the cut with "...".
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
