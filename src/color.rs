use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{Book, Catalogue, Facet};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` soft, visually distinct pastel colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.78);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Cover colours: category → Color32
// ---------------------------------------------------------------------------

/// Card cover colour per category, so books of one category share a swatch.
#[derive(Debug, Clone)]
pub struct CoverPalette {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl CoverPalette {
    pub fn new(catalogue: &Catalogue) -> Self {
        let categories: Vec<&str> = catalogue.facet_values(Facet::Category).collect();
        let mapping = categories
            .iter()
            .zip(generate_palette(categories.len()))
            .map(|(c, color)| (c.to_string(), color))
            .collect();

        CoverPalette {
            mapping,
            default_color: Color32::from_rgb(0xE2, 0xE2, 0xE2),
        }
    }

    pub fn color_for(&self, book: &Book) -> Color32 {
        book.fields()
            .category
            .as_deref()
            .and_then(|c| self.mapping.get(c))
            .copied()
            .unwrap_or(self.default_color)
    }
}
